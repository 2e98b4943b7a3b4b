use crate::api::ReplyId;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Route {
    Reply(ReplyId),
}

impl Route {
    /// `prefix` is the site root path, without trailing slash
    pub fn href(&self, prefix: &str) -> String {
        match self {
            Route::Reply(id) => format!("{prefix}/reply/{}", urlencoding::encode(&id.0)),
        }
    }
}
