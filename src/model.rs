use serde::{Deserialize, Serialize};

mod ids;
pub use self::ids::WorkspaceId;

mod notice;
pub use self::notice::{NoticeKind, StatusNotice};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Channel {
    pub id: String,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledMessage {
    #[serde(deserialize_with = "ids::string_or_number")]
    pub id: String,
    pub channel_id: String,
    pub text: String,
    /// Delivery time in epoch seconds.
    pub post_at: i64,
}
