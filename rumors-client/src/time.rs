//! Human-readable timestamps.
//!
//! Relative labels round the same way as moment.js' `fromNow`, so that the
//! cards read the same as the rest of the site.

use chrono_tz::Tz;

use crate::{api::Time, locale::fill, Locale};

const MS_PER_DAY: f64 = 86_400_000.;

// Average days per 400-year Gregorian cycle, expressed in months
const MONTHS_PER_DAY: f64 = 4800. / 146_097.;

pub fn relative(t: Time, now: Time, locale: Locale) -> String {
    let strings = &locale.strings().relative;
    let diff = t.signed_duration_since(now).num_milliseconds();
    let ms = diff.unsigned_abs() as f64;

    let seconds = (ms / 1000.).round();
    let minutes = (ms / 60_000.).round();
    let hours = (ms / 3_600_000.).round();
    let days = (ms / MS_PER_DAY).round();
    let months = (ms / MS_PER_DAY * MONTHS_PER_DAY).round();
    let years = (ms / MS_PER_DAY * MONTHS_PER_DAY / 12.).round();

    let span = if seconds <= 44. {
        String::from(strings.seconds)
    } else if minutes <= 1. {
        String::from(strings.minute)
    } else if minutes < 45. {
        fill(strings.minutes, minutes as u64)
    } else if hours <= 1. {
        String::from(strings.hour)
    } else if hours < 22. {
        fill(strings.hours, hours as u64)
    } else if days <= 1. {
        String::from(strings.day)
    } else if days < 26. {
        fill(strings.days, days as u64)
    } else if months <= 1. {
        String::from(strings.month)
    } else if months < 11. {
        fill(strings.months, months as u64)
    } else if years <= 1. {
        String::from(strings.year)
    } else {
        fill(strings.years, years as u64)
    };

    match diff > 0 {
        true => fill(strings.future, span),
        false => fill(strings.past, span),
    }
}

pub fn absolute(t: Time, tz: Tz, locale: Locale) -> String {
    t.with_timezone(&tz)
        .format(locale.strings().absolute_format)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};

    fn now() -> Time {
        Utc.with_ymd_and_hms(2017, 5, 26, 12, 34, 56).unwrap()
    }

    fn ago(d: Duration) -> String {
        relative(now() - d, now(), Locale::En)
    }

    #[test]
    fn relative_past() {
        assert_eq!(ago(Duration::zero()), "a few seconds ago");
        assert_eq!(ago(Duration::seconds(30)), "a few seconds ago");
        assert_eq!(ago(Duration::seconds(60)), "a minute ago");
        assert_eq!(ago(Duration::seconds(89)), "a minute ago");
        assert_eq!(ago(Duration::seconds(90)), "2 minutes ago");
        assert_eq!(ago(Duration::minutes(5)), "5 minutes ago");
        assert_eq!(ago(Duration::minutes(50)), "an hour ago");
        assert_eq!(ago(Duration::hours(3)), "3 hours ago");
        assert_eq!(ago(Duration::hours(30)), "a day ago");
        assert_eq!(ago(Duration::days(3)), "3 days ago");
        assert_eq!(ago(Duration::days(30)), "a month ago");
        assert_eq!(ago(Duration::days(100)), "3 months ago");
        assert_eq!(ago(Duration::days(400)), "a year ago");
        assert_eq!(ago(Duration::days(800)), "2 years ago");
    }

    #[test]
    fn relative_future() {
        assert_eq!(
            relative(now() + Duration::hours(2), now(), Locale::En),
            "in 2 hours",
        );
        assert_eq!(
            relative(now() + Duration::days(3), now(), Locale::ZhTw),
            "3 天後",
        );
    }

    #[test]
    fn relative_zh_tw() {
        let ago = |d: Duration| relative(now() - d, now(), Locale::ZhTw);
        assert_eq!(ago(Duration::seconds(10)), "幾秒前");
        assert_eq!(ago(Duration::minutes(1)), "1 分鐘前");
        assert_eq!(ago(Duration::days(3)), "3 天前");
        assert_eq!(ago(Duration::days(800)), "2 年前");
    }

    #[test]
    fn absolute_in_time_zone() {
        assert_eq!(
            absolute(now(), chrono_tz::Asia::Taipei, Locale::En),
            "May 26, 2017 8:34 PM",
        );
        assert_eq!(
            absolute(now(), chrono_tz::Asia::Taipei, Locale::ZhTw),
            "2017年5月26日 20:34",
        );
        assert_eq!(absolute(now(), chrono_tz::UTC, Locale::En), "May 26, 2017 12:34 PM");
    }
}
