#[cfg(test)]
mod tests {
    use crate::schema::{event_type_schema, FormInput};
    use proptest::prelude::*;

    proptest! {
        // The engine must classify, never panic, whatever arrives off the wire.
        #[test]
        fn validation_never_panics(
            title in ".{0,200}",
            url in ".{0,200}",
            description in ".{0,400}",
            duration in ".{0,10}",
            platform in ".{0,40}",
        ) {
            let input = FormInput::from([
                ("title".to_string(), title),
                ("url".to_string(), url),
                ("description".to_string(), description),
                ("duration".to_string(), duration),
                ("video_call_software".to_string(), platform),
            ]);
            let _ = event_type_schema().validate(&input);
        }

        // Any input built from the closed enumerations validates, and the
        // normalized duration coerces to the submitted integer.
        #[test]
        fn closed_set_inputs_always_validate(
            duration in prop::sample::select(vec![15i64, 30, 45, 60]),
            platform in prop::sample::select(vec![
                "Zoom Meeting",
                "Google Meet",
                "Microsoft Teams",
            ]),
            title in "[a-zA-Z][a-zA-Z0-9 ]{0,60}",
            url in "[a-z0-9-]{3,40}",
        ) {
            let input = FormInput::from([
                ("title".to_string(), title),
                ("url".to_string(), url),
                ("duration".to_string(), duration.to_string()),
                ("video_call_software".to_string(), platform.to_string()),
            ]);

            let values = event_type_schema().validate(&input).unwrap();
            prop_assert_eq!(values.integer("duration"), Some(duration));
            prop_assert_eq!(values.text("video_call_software"), platform);
        }

        // Error keys are always a subset of the declared field names.
        #[test]
        fn error_keys_are_declared_fields(
            title in ".{0,80}",
            duration in ".{0,6}",
        ) {
            let input = FormInput::from([
                ("title".to_string(), title),
                ("duration".to_string(), duration),
            ]);
            if let Err(errors) = event_type_schema().validate(&input) {
                let schema = event_type_schema();
                for name in errors.keys() {
                    prop_assert!(schema.field(name).is_some());
                }
            }
        }
    }
}
