use crate::ReplyId;

#[derive(Debug, Eq, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("Reply {0:?} has no version")]
    NoReplyVersion(ReplyId),

    #[error("Unknown locale {0:?}")]
    UnknownLocale(String),

    #[error("Unknown time zone {0:?}")]
    UnknownTimeZone(String),
}
