use crate::{Error, ReplyType, User};

#[derive(Clone, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(transparent)]
pub struct ReplyId(pub String);

#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ReplyVersion {
    #[serde(rename = "type")]
    pub typ: ReplyType,

    /// Reason for the classification
    #[serde(default, deserialize_with = "null_as_empty")]
    pub text: String,

    /// Citation, or dissenting opinion for opinionated replies
    #[serde(default)]
    pub reference: Option<String>,

    #[serde(default)]
    pub user: Option<User>,
}

fn null_as_empty<'de, D: serde::Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    Ok(<Option<String> as serde::Deserialize>::deserialize(d)?.unwrap_or_default())
}

/// A reply always has at least one version, the first one being the current one
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(try_from = "RawReply")]
pub struct Reply {
    id: ReplyId,
    versions: Vec<ReplyVersion>,
}

#[derive(serde::Deserialize)]
struct RawReply {
    id: ReplyId,
    #[serde(default)]
    versions: Vec<ReplyVersion>,
}

impl TryFrom<RawReply> for Reply {
    type Error = Error;

    fn try_from(r: RawReply) -> Result<Reply, Error> {
        Reply::new(r.id, r.versions)
    }
}

impl Reply {
    pub fn new(id: ReplyId, versions: Vec<ReplyVersion>) -> Result<Reply, Error> {
        if versions.is_empty() {
            return Err(Error::NoReplyVersion(id));
        }
        Ok(Reply { id, versions })
    }

    pub fn id(&self) -> &ReplyId {
        &self.id
    }

    pub fn versions(&self) -> &[ReplyVersion] {
        &self.versions
    }

    pub fn current_version(&self) -> &ReplyVersion {
        &self.versions[0]
    }
}
