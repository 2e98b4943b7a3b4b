use crate::{api::ReplyType, Locale};

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct TypeLabel {
    /// Short name, shown inline
    pub label: &'static str,

    /// Long explanation, shown as a tooltip
    pub description: &'static str,
}

pub trait ReplyTypeExt {
    fn type_label(&self, locale: Locale) -> TypeLabel;
}

impl ReplyTypeExt for ReplyType {
    fn type_label(&self, locale: Locale) -> TypeLabel {
        let (label, description) = match (locale, self) {
            (Locale::En, ReplyType::Rumor) => (
                "❌ Contains misinformation",
                "The message contains false content that needs clarification",
            ),
            (Locale::En, ReplyType::NotRumor) => (
                "⭕ Contains true information",
                "The facts stated in the message are true",
            ),
            (Locale::En, ReplyType::Opinionated) => (
                "💬 Contains personal perspective",
                "The message contains personal opinions, readers should see a different perspective",
            ),
            (Locale::En, ReplyType::NotArticle) => (
                "⚠️️ Invalid request",
                "Not a complete article or message, or cannot be fact-checked",
            ),
            (Locale::ZhTw, ReplyType::Rumor) => (
                "❌ 含有不實訊息",
                "可以看出文中含有錯誤內容，需要我們的說明",
            ),
            (Locale::ZhTw, ReplyType::NotRumor) => ("⭕ 含有真實訊息", "文中所述之事實是真實的"),
            (Locale::ZhTw, ReplyType::Opinionated) => (
                "💬 含有個人意見",
                "文中含有個人主觀意見，需要提供不同的觀點",
            ),
            (Locale::ZhTw, ReplyType::NotArticle) => (
                "⚠️️ 不在查證範圍",
                "不是完整的文章或訊息，或者無法查證",
            ),
            (_, ReplyType::Unknown(typ)) => {
                tracing::warn!(%typ, "no label for unknown reply type");
                return TypeLabel::default();
            }
        };
        TypeLabel { label, description }
    }
}
