use crate::{api::ReplyType, Locale};

/// User guide, explaining what messages can be fact-checked
pub const USER_REFERENCE: &str =
    "http://beta.hackfoldr.org/cofacts/https%253A%252F%252Fhackmd.io%252Fs%252FBJSdfUWOW";

/// Note pointing to the user guide, whose link opens in a new tab
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Hint {
    pub before: &'static str,
    pub link_text: &'static str,
    pub href: &'static str,
    pub after: &'static str,
}

pub fn hint_for(typ: &ReplyType, locale: Locale) -> Option<Hint> {
    match typ {
        ReplyType::NotArticle => {
            let strings = locale.strings();
            Some(Hint {
                before: strings.hint_before,
                link_text: strings.hint_link,
                href: USER_REFERENCE,
                after: strings.hint_after,
            })
        }
        ReplyType::Rumor | ReplyType::NotRumor | ReplyType::Opinionated | ReplyType::Unknown(_) => None,
    }
}

impl std::fmt::Display for Hint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}[{}]({}){}", self.before, self.link_text, self.href, self.after)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_not_article_has_a_hint() {
        assert_eq!(hint_for(&ReplyType::Rumor, Locale::En), None);
        assert_eq!(hint_for(&ReplyType::NotRumor, Locale::En), None);
        assert_eq!(hint_for(&ReplyType::Opinionated, Locale::En), None);
        assert_eq!(hint_for(&ReplyType::Unknown(String::from("X")), Locale::En), None);
        let h = hint_for(&ReplyType::NotArticle, Locale::ZhTw).unwrap();
        assert_eq!(h.href, USER_REFERENCE);
        assert_eq!(
            h.to_string(),
            format!("／ 查證範圍請參考[《使用者指南》]({USER_REFERENCE})。"),
        );
    }
}
