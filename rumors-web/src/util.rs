use std::rc::Rc;

use rumors_client::{parse_time_zone, DisplaySettings, Locale};
use wasm_bindgen::prelude::*;

#[wasm_bindgen(inline_js = "
    export function get_timezone() {
        return Intl.DateTimeFormat().resolvedOptions().timeZone;
    }
    export function get_language() {
        return navigator.language;
    }
")]
extern "C" {
    fn get_timezone() -> String;
    fn get_language() -> String;
}

lazy_static::lazy_static! {
    static ref LOCAL_TZ: chrono_tz::Tz = {
        let tz = get_timezone();
        parse_time_zone(&tz).unwrap_or_else(|err| {
            tracing::warn!(%err, "host js timezone is not in chrono-tz database, using UTC");
            chrono_tz::UTC
        })
    };
}

pub fn local_tz() -> chrono_tz::Tz {
    *LOCAL_TZ
}

fn local_locale() -> Locale {
    let lang = get_language();
    match lang.parse() {
        Ok(locale) => locale,
        Err(_) if lang.to_ascii_lowercase().starts_with("zh") => Locale::ZhTw,
        Err(_) => Locale::default(),
    }
}

/// Display settings matching the browser's language and time zone
pub fn browser_settings() -> Rc<DisplaySettings> {
    Rc::new(DisplaySettings {
        locale: local_locale(),
        time_zone: local_tz(),
        route_prefix: String::new(),
    })
}
