#[derive(Clone, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(from = "String", into = "String")]
pub enum ReplyType {
    Rumor,
    NotRumor,
    Opinionated,
    NotArticle,

    /// Any type this client does not know about yet, as sent by the server
    Unknown(String),
}

impl ReplyType {
    pub fn as_str(&self) -> &str {
        match self {
            ReplyType::Rumor => "RUMOR",
            ReplyType::NotRumor => "NOT_RUMOR",
            ReplyType::Opinionated => "OPINIONATED",
            ReplyType::NotArticle => "NOT_ARTICLE",
            ReplyType::Unknown(s) => s,
        }
    }
}

impl From<String> for ReplyType {
    fn from(s: String) -> ReplyType {
        match &s as &str {
            "RUMOR" => ReplyType::Rumor,
            "NOT_RUMOR" => ReplyType::NotRumor,
            "OPINIONATED" => ReplyType::Opinionated,
            "NOT_ARTICLE" => ReplyType::NotArticle,
            _ => ReplyType::Unknown(s),
        }
    }
}

impl From<ReplyType> for String {
    fn from(t: ReplyType) -> String {
        match t {
            ReplyType::Unknown(s) => s,
            t => String::from(t.as_str()),
        }
    }
}
