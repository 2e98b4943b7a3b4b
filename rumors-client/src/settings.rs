use chrono_tz::Tz;

use crate::{api::Error, Locale};

/// Options of a single card, as given by the list it is rendered in
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CardOptions {
    /// Disables the action control
    pub disabled: bool,

    /// Label of the action control, None for the locale's "delete response"
    pub action_text: Option<String>,

    /// Whether the timestamp links to the reply page
    pub link_to_reply: bool,
}

impl Default for CardOptions {
    fn default() -> CardOptions {
        CardOptions {
            disabled: false,
            action_text: None,
            link_to_reply: true,
        }
    }
}

/// Site-wide display settings
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DisplaySettings {
    pub locale: Locale,
    pub time_zone: Tz,

    /// Path prepended to every internal link
    pub route_prefix: String,
}

impl Default for DisplaySettings {
    fn default() -> DisplaySettings {
        DisplaySettings {
            locale: Locale::En,
            time_zone: chrono_tz::UTC,
            route_prefix: String::new(),
        }
    }
}

pub fn parse_time_zone(s: &str) -> Result<Tz, Error> {
    s.trim()
        .parse::<Tz>()
        .map_err(|_| Error::UnknownTimeZone(String::from(s)))
}

impl DisplaySettings {
    /// Reads `RUMORS_LOCALE`, `RUMORS_TIME_ZONE` and `RUMORS_ROUTE_PREFIX`
    pub fn from_env() -> Result<DisplaySettings, Error> {
        DisplaySettings::from_lookup(|var| std::env::var(var).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<DisplaySettings, Error> {
        let mut res = DisplaySettings::default();
        if let Some(locale) = lookup("RUMORS_LOCALE") {
            res.locale = locale.parse()?;
        }
        if let Some(tz) = lookup("RUMORS_TIME_ZONE") {
            res.time_zone = parse_time_zone(&tz)?;
        }
        if let Some(prefix) = lookup("RUMORS_ROUTE_PREFIX") {
            res.route_prefix = String::from(prefix.trim_end_matches('/'));
        }
        tracing::debug!(?res, "loaded display settings");
        Ok(res)
    }
}
