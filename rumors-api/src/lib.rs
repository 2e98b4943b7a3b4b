pub type Time = chrono::DateTime<chrono::Utc>;

mod connection;
pub use connection::{ReplyConnection, ReplyConnectionId};

mod error;
pub use error::Error;

mod feedback;
pub use feedback::{Feedback, Opinion};

mod reply;
pub use reply::{Reply, ReplyId, ReplyVersion};

mod reply_type;
pub use reply_type::ReplyType;

mod user;
pub use user::{User, UserId};

/// Timestamps are sent either as epoch milliseconds or as RFC 3339 strings
pub(crate) mod timestamp {
    use chrono::{DateTime, TimeZone, Utc};
    use serde::{de::Error as _, Deserialize, Deserializer, Serializer};

    use crate::Time;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawTime {
        Millis(i64),
        Text(String),
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Time, D::Error> {
        match RawTime::deserialize(d)? {
            RawTime::Millis(ms) => Utc
                .timestamp_millis_opt(ms)
                .single()
                .ok_or_else(|| D::Error::custom(format!("timestamp out of range: {ms}"))),
            RawTime::Text(s) => DateTime::parse_from_rfc3339(&s)
                .map(|t| t.with_timezone(&Utc))
                .map_err(|e| D::Error::custom(format!("invalid timestamp {s:?}: {e}"))),
        }
    }

    pub fn serialize<S: Serializer>(t: &Time, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&t.to_rfc3339())
    }
}
