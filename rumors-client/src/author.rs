use crate::{
    api::{ReplyId, User},
    locale::fill,
    DisplaySettings, Route,
};

/// Who linked the reply to the article
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Attribution {
    /// The connection author wrote the reply, or is unknown
    Author(String),

    /// The connection author linked somebody else's reply
    UsedReplyOf {
        author: String,
        before: &'static str,
        reply_author: String,
        link_text: String,
        href: String,
        after: &'static str,
    },
}

pub fn resolve_attribution(
    connection_author: Option<&User>,
    reply_author: Option<&User>,
    reply: &ReplyId,
    settings: &DisplaySettings,
) -> Attribution {
    let strings = settings.locale.strings();
    let connection_author = match connection_author {
        Some(u) => u,
        None => return Attribution::Author(String::from(strings.anonymous)),
    };
    match reply_author {
        Some(r) if r.id != connection_author.id => Attribution::UsedReplyOf {
            author: connection_author.name.clone(),
            before: strings.used_reply_before,
            reply_author: r.name.clone(),
            link_text: fill(strings.used_reply_link, &r.name),
            href: Route::Reply(reply.clone()).href(&settings.route_prefix),
            after: strings.used_reply_after,
        },
        _ => Attribution::Author(connection_author.name.clone()),
    }
}

impl std::fmt::Display for Attribution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Attribution::Author(name) => write!(f, "{name}"),
            Attribution::UsedReplyOf {
                author,
                before,
                link_text,
                href,
                after,
                ..
            } => write!(f, "{author}{before}[{link_text}]({href}){after}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Locale;

    fn reply() -> ReplyId {
        ReplyId(String::from("r1"))
    }

    #[test]
    fn anonymous_connection() {
        let ann = User::new("u1", "Ann");
        let s = DisplaySettings::default();
        assert_eq!(
            resolve_attribution(None, Some(&ann), &reply(), &s),
            Attribution::Author(String::from("someone")),
        );
        assert_eq!(
            resolve_attribution(None, None, &reply(), &s),
            Attribution::Author(String::from("someone")),
        );
        let s = DisplaySettings {
            locale: Locale::ZhTw,
            ..DisplaySettings::default()
        };
        assert_eq!(
            resolve_attribution(None, None, &reply(), &s),
            Attribution::Author(String::from("有人")),
        );
    }

    #[test]
    fn own_reply() {
        let ann = User::new("u1", "Ann");
        let renamed = User::new("u1", "Ann (new name)");
        let s = DisplaySettings::default();
        assert_eq!(
            resolve_attribution(Some(&ann), Some(&renamed), &reply(), &s),
            Attribution::Author(String::from("Ann")),
        );
        assert_eq!(
            resolve_attribution(Some(&ann), None, &reply(), &s),
            Attribution::Author(String::from("Ann")),
        );
    }

    #[test]
    fn somebody_elses_reply() {
        let ann = User::new("u1", "Ann");
        let bob = User::new("u2", "Bob");
        let a = resolve_attribution(Some(&ann), Some(&bob), &reply(), &DisplaySettings::default());
        assert_eq!(
            a,
            Attribution::UsedReplyOf {
                author: String::from("Ann"),
                before: " used ",
                reply_author: String::from("Bob"),
                link_text: String::from("Bob's reply"),
                href: String::from("/reply/r1"),
                after: " to",
            },
        );
        assert_eq!(a.to_string(), "Ann used [Bob's reply](/reply/r1) to");

        let s = DisplaySettings {
            locale: Locale::ZhTw,
            ..DisplaySettings::default()
        };
        let a = resolve_attribution(Some(&ann), Some(&bob), &reply(), &s);
        assert_eq!(a.to_string(), "Ann使用 [Bob 的回應](/reply/r1)來");
    }
}
