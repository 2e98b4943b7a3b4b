use crate::{Feedback, Reply, ReplyType, ReplyVersion, Time, User};

#[derive(Clone, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(transparent)]
pub struct ReplyConnectionId(pub String);

/// Link of a reply to an article, made by `user`
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplyConnection {
    pub id: ReplyConnectionId,

    #[serde(with = "crate::timestamp")]
    pub created_at: Time,

    /// None when the connection was made anonymously
    #[serde(default)]
    pub user: Option<User>,

    /// Computed by the server for the current viewer
    #[serde(default)]
    pub can_update_status: bool,

    #[serde(default)]
    pub feedbacks: Vec<Feedback>,

    pub reply: Reply,
}

impl ReplyConnection {
    pub fn current_version(&self) -> &ReplyVersion {
        self.reply.current_version()
    }

    pub fn reply_type(&self) -> &ReplyType {
        &self.current_version().typ
    }
}
