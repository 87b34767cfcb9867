// --- File: crates/schedulify_common/src/models.rs ---

// This file contains data structures and models that are common across the application.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A dashboard user.
///
/// The `username` is the namespace for public booking URLs and is never
/// edited through this subsystem. `email` is rendered in the settings form
/// but never submitted as editable.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct User {
    /// The unique identifier for this user
    pub id: String,

    /// Unique handle used to build public booking URLs
    pub username: String,

    /// Display name, editable in the settings form
    pub full_name: String,

    /// Account email, read-only in the settings form
    pub email: String,

    /// Hosted profile image URL; None when the user has no image
    pub profile_image_url: Option<String>,

    /// The timestamp when this user was created
    #[cfg_attr(feature = "openapi", schema(value_type = Option<String>))]
    pub created_at: Option<DateTime<Utc>>,
}

/// The closed set of bookable meeting lengths, in minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(try_from = "i64", into = "i64")]
pub enum MeetingDuration {
    Min15,
    Min30,
    Min45,
    Min60,
}

impl MeetingDuration {
    pub const ALL: [MeetingDuration; 4] = [
        MeetingDuration::Min15,
        MeetingDuration::Min30,
        MeetingDuration::Min45,
        MeetingDuration::Min60,
    ];

    /// The duration in whole minutes.
    pub fn minutes(self) -> i64 {
        match self {
            MeetingDuration::Min15 => 15,
            MeetingDuration::Min30 => 30,
            MeetingDuration::Min45 => 45,
            MeetingDuration::Min60 => 60,
        }
    }
}

impl TryFrom<i64> for MeetingDuration {
    type Error = String;

    fn try_from(minutes: i64) -> Result<Self, Self::Error> {
        match minutes {
            15 => Ok(MeetingDuration::Min15),
            30 => Ok(MeetingDuration::Min30),
            45 => Ok(MeetingDuration::Min45),
            60 => Ok(MeetingDuration::Min60),
            other => Err(format!("unsupported meeting duration: {} minutes", other)),
        }
    }
}

impl From<MeetingDuration> for i64 {
    fn from(duration: MeetingDuration) -> Self {
        duration.minutes()
    }
}

impl FromStr for MeetingDuration {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let minutes: i64 = value
            .trim()
            .parse()
            .map_err(|_| format!("invalid duration value: {value:?}"))?;
        MeetingDuration::try_from(minutes)
    }
}

impl fmt::Display for MeetingDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.minutes())
    }
}

/// The closed set of supported video-call platforms.
///
/// Exactly one platform is selected for an event type at any time; the
/// canonical display strings below are also the wire and storage format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(try_from = "String", into = "String")]
pub enum VideoCallSoftware {
    ZoomMeeting,
    #[default]
    GoogleMeet,
    MicrosoftTeams,
}

impl VideoCallSoftware {
    pub const ALL: [VideoCallSoftware; 3] = [
        VideoCallSoftware::ZoomMeeting,
        VideoCallSoftware::GoogleMeet,
        VideoCallSoftware::MicrosoftTeams,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            VideoCallSoftware::ZoomMeeting => "Zoom Meeting",
            VideoCallSoftware::GoogleMeet => "Google Meet",
            VideoCallSoftware::MicrosoftTeams => "Microsoft Teams",
        }
    }
}

impl FromStr for VideoCallSoftware {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "Zoom Meeting" => Ok(VideoCallSoftware::ZoomMeeting),
            "Google Meet" => Ok(VideoCallSoftware::GoogleMeet),
            "Microsoft Teams" => Ok(VideoCallSoftware::MicrosoftTeams),
            other => Err(format!("unsupported video call platform: {other:?}")),
        }
    }
}

impl TryFrom<String> for VideoCallSoftware {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<VideoCallSoftware> for String {
    fn from(software: VideoCallSoftware) -> Self {
        software.as_str().to_string()
    }
}

impl fmt::Display for VideoCallSoftware {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A bookable meeting template.
///
/// `id` is server-assigned at creation and immutable thereafter. `url` is
/// the slug identifying the event type inside the owner's namespace;
/// uniqueness per user is enforced by the persistence layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct EventType {
    /// The unique identifier for this event type
    pub id: String,

    /// The owning user's id
    pub user_id: String,

    /// Display title
    pub title: String,

    /// URL slug within the owner's namespace
    pub url: String,

    /// Optional free-text description
    pub description: Option<String>,

    /// Meeting length
    pub duration: MeetingDuration,

    /// Selected video-call platform
    pub video_call_software: VideoCallSoftware,

    /// Whether the event type is publicly bookable
    pub active: bool,

    /// Creation timestamp; dashboard lists order by this, descending
    #[cfg_attr(feature = "openapi", schema(value_type = String))]
    pub created_at: DateTime<Utc>,
}

impl EventType {
    /// Create a new event type record.
    ///
    /// New event types are active by default.
    pub fn new(
        id: String,
        user_id: String,
        title: String,
        url: String,
        description: Option<String>,
        duration: MeetingDuration,
        video_call_software: VideoCallSoftware,
    ) -> Self {
        Self {
            id,
            user_id,
            title,
            url,
            description,
            duration,
            video_call_software,
            active: true,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duration_coerces_from_wire_strings() {
        assert_eq!("30".parse::<MeetingDuration>(), Ok(MeetingDuration::Min30));
        assert_eq!(MeetingDuration::Min45.minutes(), 45);
        assert!("20".parse::<MeetingDuration>().is_err());
    }

    #[test]
    fn platform_round_trips_canonical_strings() {
        for platform in VideoCallSoftware::ALL {
            assert_eq!(platform.as_str().parse::<VideoCallSoftware>(), Ok(platform));
        }
        assert!("Skype".parse::<VideoCallSoftware>().is_err());
    }

    #[test]
    fn new_event_types_are_active() {
        let record = EventType::new(
            "et_1".into(),
            "user_1".into(),
            "30 min meeting".into(),
            "intro-call".into(),
            None,
            MeetingDuration::Min30,
            VideoCallSoftware::GoogleMeet,
        );
        assert!(record.active);
    }
}
