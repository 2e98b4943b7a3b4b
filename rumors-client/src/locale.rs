use std::str::FromStr;

use crate::api::Error;

#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum Locale {
    #[default]
    En,
    ZhTw,
}

impl FromStr for Locale {
    type Err = Error;

    fn from_str(s: &str) -> Result<Locale, Error> {
        match &s.trim().to_ascii_lowercase().replace('_', "-") as &str {
            "en" | "en-us" | "en-gb" => Ok(Locale::En),
            "zh" | "zh-tw" | "zh-hant" | "zh-hant-tw" => Ok(Locale::ZhTw),
            _ => Err(Error::UnknownLocale(String::from(s))),
        }
    }
}

impl Locale {
    pub(crate) fn strings(&self) -> &'static Strings {
        match self {
            Locale::En => &EN,
            Locale::ZhTw => &ZH_TW,
        }
    }
}

/// Replaces the `{}` placeholder of a locale template
pub(crate) fn fill(template: &str, value: impl ToString) -> String {
    template.replacen("{}", &value.to_string(), 1)
}

pub(crate) struct Strings {
    pub anonymous: &'static str,
    pub used_reply_before: &'static str,
    pub used_reply_link: &'static str,
    pub used_reply_after: &'static str,
    pub marked_as: &'static str,

    pub hint_before: &'static str,
    pub hint_link: &'static str,
    pub hint_after: &'static str,

    pub reason_heading: &'static str,
    pub source_heading: &'static str,
    pub opinion_heading: &'static str,
    pub no_source_warning: &'static str,

    pub positive_feedback: &'static str,
    pub negative_feedback: &'static str,
    pub feedback_delimiter: &'static str,
    pub separator: &'static str,
    pub delete_response: &'static str,

    pub relative: RelativeStrings,
    pub absolute_format: &'static str,
}

pub(crate) struct RelativeStrings {
    pub past: &'static str,
    pub future: &'static str,
    pub seconds: &'static str,
    pub minute: &'static str,
    pub minutes: &'static str,
    pub hour: &'static str,
    pub hours: &'static str,
    pub day: &'static str,
    pub days: &'static str,
    pub month: &'static str,
    pub months: &'static str,
    pub year: &'static str,
    pub years: &'static str,
}

static EN: Strings = Strings {
    anonymous: "someone",
    used_reply_before: " used ",
    used_reply_link: "{}'s reply",
    used_reply_after: " to",
    marked_as: " marked this as: ",

    hint_before: "/ For the scope of fact-checking, see the ",
    hint_link: "user guide",
    hint_after: ".",

    reason_heading: "reason",
    source_heading: "source",
    opinion_heading: "dissenting opinion",
    no_source_warning:
        "⚠️️ This reply does not cite any source, please judge its credibility by yourself.",

    positive_feedback: "{} people found this responsive to the original",
    negative_feedback: "{} people found this unresponsive",
    feedback_delimiter: "、",
    separator: " ・ ",
    delete_response: "delete response",

    relative: RelativeStrings {
        past: "{} ago",
        future: "in {}",
        seconds: "a few seconds",
        minute: "a minute",
        minutes: "{} minutes",
        hour: "an hour",
        hours: "{} hours",
        day: "a day",
        days: "{} days",
        month: "a month",
        months: "{} months",
        year: "a year",
        years: "{} years",
    },
    absolute_format: "%b %-d, %Y %-I:%M %p",
};

static ZH_TW: Strings = Strings {
    anonymous: "有人",
    used_reply_before: "使用 ",
    used_reply_link: "{} 的回應",
    used_reply_after: "來",
    marked_as: "標記此篇為：",

    hint_before: "／ 查證範圍請參考",
    hint_link: "《使用者指南》",
    hint_after: "。",

    reason_heading: "理由",
    source_heading: "出處",
    opinion_heading: "不同意見",
    no_source_warning: "⚠️️ 此回應沒有出處，請自行斟酌回應真實性。",

    positive_feedback: "{} 人覺得有回答到原文",
    negative_feedback: "{} 人覺得沒回答到原文",
    feedback_delimiter: "、",
    separator: " ・ ",
    delete_response: "刪除回應",

    relative: RelativeStrings {
        past: "{}前",
        future: "{}後",
        seconds: "幾秒",
        minute: "1 分鐘",
        minutes: "{} 分鐘",
        hour: "1 小時",
        hours: "{} 小時",
        day: "1 天",
        days: "{} 天",
        month: "1 個月",
        months: "{} 個月",
        year: "1 年",
        years: "{} 年",
    },
    absolute_format: "%Y年%-m月%-d日 %H:%M",
};
