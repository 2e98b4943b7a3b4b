use crate::{api::ReplyType, Locale, RichText};

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ReferenceBody {
    Cited(RichText),

    /// Warning shown in place of a missing reference
    Missing(&'static str),
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ReferenceSection {
    pub heading: &'static str,
    pub body: ReferenceBody,
}

pub fn reference_section(
    typ: &ReplyType,
    reference: Option<&str>,
    locale: Locale,
) -> Option<ReferenceSection> {
    let strings = locale.strings();
    let heading = match typ {
        ReplyType::NotArticle => return None,
        ReplyType::Opinionated => strings.opinion_heading,
        ReplyType::Rumor | ReplyType::NotRumor | ReplyType::Unknown(_) => strings.source_heading,
    };
    let body = match reference {
        Some(r) if !r.is_empty() => ReferenceBody::Cited(RichText::format(r)),
        _ => ReferenceBody::Missing(strings.no_source_warning),
    };
    Some(ReferenceSection { heading, body })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_article_has_no_reference() {
        assert_eq!(reference_section(&ReplyType::NotArticle, None, Locale::En), None);
        assert_eq!(
            reference_section(&ReplyType::NotArticle, Some("https://example.com"), Locale::En),
            None,
        );
    }

    #[test]
    fn opinionated_without_reference() {
        assert_eq!(
            reference_section(&ReplyType::Opinionated, None, Locale::En),
            Some(ReferenceSection {
                heading: "dissenting opinion",
                body: ReferenceBody::Missing(
                    "⚠️️ This reply does not cite any source, please judge its credibility by yourself."
                ),
            }),
        );
    }

    #[test]
    fn cited_source() {
        let s = reference_section(&ReplyType::Rumor, Some("https://example.com"), Locale::ZhTw)
            .unwrap();
        assert_eq!(s.heading, "出處");
        assert_eq!(
            s.body,
            ReferenceBody::Cited(RichText::format("https://example.com")),
        );
    }

    #[test]
    fn empty_reference_is_missing() {
        let s = reference_section(&ReplyType::NotRumor, Some(""), Locale::ZhTw).unwrap();
        assert_eq!(s.heading, "出處");
        assert_eq!(
            s.body,
            ReferenceBody::Missing("⚠️️ 此回應沒有出處，請自行斟酌回應真實性。"),
        );
    }
}
