// --- File: crates/schedulify_forms/src/schema.rs ---
//! Declarative field validation.
//!
//! A [`FormSchema`] declares, per field, its type and constraints. The same
//! schema value is run client-side (advisory, inside the submission
//! controller) and server-side (authoritative, inside the mutation logic),
//! so the two sides can never disagree on what is valid.

use schedulify_common::models::{MeetingDuration, VideoCallSoftware};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Flat mapping of field name to submitted string, as it arrives off the wire.
pub type FormInput = BTreeMap<String, String>;

/// Per-field ordered lists of human-readable validation messages.
///
/// A field absent from the map is valid. Message order within a field is
/// the order its rules were checked in.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// A normalized field value after a successful validation pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Text(String),
    Integer(i64),
}

impl Value {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(text) => Some(text),
            Value::Integer(_) => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Integer(n) => Some(*n),
            Value::Text(_) => None,
        }
    }
}

/// The normalized value set produced by a successful validation pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormValues(pub BTreeMap<String, Value>);

impl FormValues {
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    pub fn text(&self, name: &str) -> &str {
        self.0.get(name).and_then(Value::as_text).unwrap_or("")
    }

    pub fn integer(&self, name: &str) -> Option<i64> {
        self.0.get(name).and_then(Value::as_integer)
    }
}

/// What a single field accepts.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldKind {
    /// Free text with inclusive length bounds (measured after trimming).
    Text { min_len: usize, max_len: usize },
    /// URL-slug text: letters, digits and hyphens only, with length bounds.
    Slug { min_len: usize, max_len: usize },
    /// An integer drawn from a closed set of allowed values.
    IntegerEnum { allowed: Vec<i64> },
    /// A string drawn from a closed set of allowed values.
    TextEnum { allowed: Vec<String> },
}

/// A single field's declaration: name, required flag, kind.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldRule {
    pub name: &'static str,
    pub required: bool,
    pub kind: FieldKind,
}

impl FieldRule {
    pub fn required(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            required: true,
            kind,
        }
    }

    pub fn optional(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            required: false,
            kind,
        }
    }
}

/// A declared set of named fields with their constraints.
#[derive(Debug, Clone, PartialEq)]
pub struct FormSchema {
    /// Identifier of this schema, used by the action collaborator to pick
    /// the authoritative validation on the server side.
    pub name: &'static str,
    fields: Vec<FieldRule>,
}

impl FormSchema {
    pub fn new(name: &'static str, fields: Vec<FieldRule>) -> Self {
        Self { name, fields }
    }

    /// The declared fields, in declaration order.
    pub fn fields(&self) -> &[FieldRule] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&FieldRule> {
        self.fields.iter().find(|rule| rule.name == name)
    }

    /// Validate a submitted input set against this schema.
    ///
    /// There is no partial success: one invalid field fails the whole pass,
    /// but every invalid field reports its own ordered messages so the
    /// caller can highlight all problems at once. Valid inputs come back as
    /// a normalized value set (trimmed text, `"30"` coerced to integer 30).
    pub fn validate(&self, input: &FormInput) -> Result<FormValues, FieldErrors> {
        let mut values = BTreeMap::new();
        let mut errors: FieldErrors = BTreeMap::new();

        for rule in &self.fields {
            let raw = input.get(rule.name).map(String::as_str).unwrap_or("");
            let trimmed = raw.trim();

            if trimmed.is_empty() {
                if rule.required {
                    errors
                        .entry(rule.name.to_string())
                        .or_default()
                        .push("This field is required".to_string());
                } else {
                    values.insert(rule.name.to_string(), Value::Text(String::new()));
                }
                continue;
            }

            match validate_field(&rule.kind, trimmed) {
                Ok(value) => {
                    values.insert(rule.name.to_string(), value);
                }
                Err(messages) => {
                    errors.entry(rule.name.to_string()).or_default().extend(messages);
                }
            }
        }

        if errors.is_empty() {
            Ok(FormValues(values))
        } else {
            Err(errors)
        }
    }
}

fn validate_field(kind: &FieldKind, value: &str) -> Result<Value, Vec<String>> {
    let mut messages = Vec::new();

    match kind {
        FieldKind::Text { min_len, max_len } => {
            check_length(value, *min_len, *max_len, &mut messages);
            if messages.is_empty() {
                return Ok(Value::Text(value.to_string()));
            }
        }
        FieldKind::Slug { min_len, max_len } => {
            check_length(value, *min_len, *max_len, &mut messages);
            if !value
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-')
            {
                messages.push("Only letters, numbers and hyphens are allowed".to_string());
            }
            if messages.is_empty() {
                return Ok(Value::Text(value.to_string()));
            }
        }
        FieldKind::IntegerEnum { allowed } => match value.parse::<i64>() {
            Ok(n) if allowed.contains(&n) => return Ok(Value::Integer(n)),
            Ok(_) | Err(_) => {
                let options = allowed
                    .iter()
                    .map(i64::to_string)
                    .collect::<Vec<_>>()
                    .join(", ");
                messages.push(format!("Must be one of {}", options));
            }
        },
        FieldKind::TextEnum { allowed } => {
            if allowed.iter().any(|candidate| candidate == value) {
                return Ok(Value::Text(value.to_string()));
            }
            messages.push(format!("Must be one of {}", allowed.join(", ")));
        }
    }

    Err(messages)
}

fn check_length(value: &str, min_len: usize, max_len: usize, messages: &mut Vec<String>) {
    let len = value.chars().count();
    if len < min_len {
        messages.push(format!("Must be at least {} characters", min_len));
    }
    if len > max_len {
        messages.push(format!("Must be at most {} characters", max_len));
    }
}

/// Schema for the event-creation (and edit) form.
///
/// Duration and platform draw their allowed sets from the closed model
/// enums, so the schema cannot drift from what the records can store.
pub fn event_type_schema() -> FormSchema {
    FormSchema::new(
        "event_type",
        vec![
            FieldRule::required(
                "title",
                FieldKind::Text {
                    min_len: 1,
                    max_len: 150,
                },
            ),
            FieldRule::required(
                "url",
                FieldKind::Slug {
                    min_len: 3,
                    max_len: 150,
                },
            ),
            FieldRule::optional(
                "description",
                FieldKind::Text {
                    min_len: 1,
                    max_len: 300,
                },
            ),
            FieldRule::required(
                "duration",
                FieldKind::IntegerEnum {
                    allowed: MeetingDuration::ALL
                        .iter()
                        .map(|d| d.minutes())
                        .collect(),
                },
            ),
            FieldRule::required(
                "video_call_software",
                FieldKind::TextEnum {
                    allowed: VideoCallSoftware::ALL
                        .iter()
                        .map(|p| p.as_str().to_string())
                        .collect(),
                },
            ),
        ],
    )
}

/// Schema for the profile-settings form.
///
/// The image field is a hidden URL string populated by the out-of-band
/// upload collaborator; an empty value clears the stored image.
pub fn profile_settings_schema() -> FormSchema {
    FormSchema::new(
        "profile_settings",
        vec![
            FieldRule::required(
                "full_name",
                FieldKind::Text {
                    min_len: 3,
                    max_len: 150,
                },
            ),
            FieldRule::optional(
                "profile_image",
                FieldKind::Text {
                    min_len: 1,
                    max_len: 500,
                },
            ),
        ],
    )
}
