//! Locale resolution and timestamp formatting.
//!
//! The transcript reads the operating system's locale once and hands it to
//! every entry. Only the hour cycle is locale dependent; month and weekday
//! names are always rendered in English.

use std::fmt;

use chrono::{DateTime, Local, NaiveDateTime};

/// Locale used when the runtime does not report one.
pub const DEFAULT_LOCALE: &str = "en-US";

/// Regions whose conventional clock is 12-hour.
const TWELVE_HOUR_REGIONS: &[&str] = &[
    "US", "CA", "AU", "NZ", "IN", "PH", "PK", "KR", "EG", "SA", "CO", "MY",
];

/// A BCP-47 language tag such as `en-US` or `de-DE`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Locale(String);

impl Locale {
    /// Resolve the active runtime locale, falling back to [`DEFAULT_LOCALE`].
    pub fn resolve() -> Self {
        let raw = sys_locale::get_locale();
        let locale = Self::from_raw(raw.as_deref());
        tracing::debug!(locale = %locale, "resolved display locale");
        locale
    }

    /// Normalise a raw locale string as reported by the OS.
    ///
    /// POSIX forms like `de_DE.UTF-8@euro` become `de-DE`. Missing, empty,
    /// `C` and `POSIX` locales fall back to [`DEFAULT_LOCALE`].
    pub fn from_raw(raw: Option<&str>) -> Self {
        raw.and_then(normalize)
            .map(Locale)
            .unwrap_or_else(Self::fallback)
    }

    /// The fixed fallback locale.
    pub fn fallback() -> Self {
        Locale(DEFAULT_LOCALE.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Primary language subtag, lowercased.
    pub fn language(&self) -> &str {
        self.0.split('-').next().unwrap_or_default()
    }

    /// Two-letter region subtag, if present.
    pub fn region(&self) -> Option<&str> {
        self.0
            .split('-')
            .skip(1)
            .find(|part| part.len() == 2 && part.chars().all(|c| c.is_ascii_uppercase()))
    }

    /// Clock convention for this locale.
    pub fn hour_cycle(&self) -> HourCycle {
        match self.region() {
            Some(region) if TWELVE_HOUR_REGIONS.contains(&region) => HourCycle::H12,
            Some(_) => HourCycle::H23,
            // A bare "en" reads like en-US
            None if self.language() == "en" => HourCycle::H12,
            None => HourCycle::H23,
        }
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::fallback()
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn normalize(raw: &str) -> Option<String> {
    let tag = raw
        .split(['.', '@'])
        .next()
        .unwrap_or_default()
        .trim();
    if tag.is_empty() || tag == "C" || tag == "POSIX" {
        return None;
    }

    let mut parts = tag.split(['_', '-']).filter(|p| !p.is_empty());
    let language = parts.next()?.to_ascii_lowercase();
    if !language.chars().all(|c| c.is_ascii_alphabetic()) {
        return None;
    }

    let mut normalized = language;
    for part in parts {
        normalized.push('-');
        if part.len() == 2 {
            normalized.push_str(&part.to_ascii_uppercase());
        } else {
            normalized.push_str(part);
        }
    }
    Some(normalized)
}

/// 12-hour or 24-hour clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HourCycle {
    H12,
    H23,
}

impl HourCycle {
    fn short_pattern(&self) -> &'static str {
        match self {
            HourCycle::H12 => "%-I:%M %p",
            HourCycle::H23 => "%H:%M",
        }
    }

    fn full_pattern(&self) -> &'static str {
        match self {
            HourCycle::H12 => "%A, %B %-d, %Y at %-I:%M:%S %p",
            HourCycle::H23 => "%A %-d %B %Y at %H:%M:%S",
        }
    }
}

/// Short clock time, e.g. `3:07 PM` or `15:07`.
pub fn format_short(time: &NaiveDateTime, cycle: HourCycle) -> String {
    time.format(cycle.short_pattern()).to_string()
}

/// Full timestamp including weekday, date and seconds.
pub fn format_full(time: &NaiveDateTime, cycle: HourCycle) -> String {
    time.format(cycle.full_pattern()).to_string()
}

/// Convert a Unix millisecond timestamp into the local time zone.
pub fn local_time(timestamp_ms: i64) -> Option<DateTime<Local>> {
    DateTime::from_timestamp_millis(timestamp_ms).map(|utc| utc.with_timezone(&Local))
}

/// Short and full renderings of a message timestamp in local time.
///
/// Out-of-range timestamps render as empty strings.
pub fn format_timestamp(timestamp_ms: i64, locale: &Locale) -> (String, String) {
    match local_time(timestamp_ms) {
        Some(time) => {
            let naive = time.naive_local();
            let cycle = locale.hour_cycle();
            (format_short(&naive, cycle), format_full(&naive, cycle))
        }
        None => {
            tracing::warn!(timestamp_ms, "message timestamp out of range");
            (String::new(), String::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn afternoon() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 13)
            .unwrap()
            .and_hms_opt(15, 7, 9)
            .unwrap()
    }

    #[test]
    fn test_missing_locale_falls_back() {
        assert_eq!(Locale::from_raw(None).as_str(), "en-US");
        assert_eq!(Locale::from_raw(Some("")).as_str(), "en-US");
        assert_eq!(Locale::from_raw(Some("C")).as_str(), "en-US");
        assert_eq!(Locale::from_raw(Some("POSIX")).as_str(), "en-US");
        assert_eq!(Locale::default().as_str(), DEFAULT_LOCALE);
    }

    #[test]
    fn test_posix_locale_normalised() {
        assert_eq!(Locale::from_raw(Some("de_DE.UTF-8")).as_str(), "de-DE");
        assert_eq!(Locale::from_raw(Some("fr_fr@euro")).as_str(), "fr-FR");
        assert_eq!(Locale::from_raw(Some("en-GB")).as_str(), "en-GB");
        assert_eq!(Locale::from_raw(Some("zh-Hant-TW")).as_str(), "zh-Hant-TW");
    }

    #[test]
    fn test_region_and_language() {
        let locale = Locale::from_raw(Some("zh-Hant-TW"));
        assert_eq!(locale.language(), "zh");
        assert_eq!(locale.region(), Some("TW"));
        assert_eq!(Locale::from_raw(Some("ja")).region(), None);
    }

    #[test]
    fn test_hour_cycle() {
        assert_eq!(Locale::from_raw(Some("en-US")).hour_cycle(), HourCycle::H12);
        assert_eq!(Locale::from_raw(Some("en-GB")).hour_cycle(), HourCycle::H23);
        assert_eq!(Locale::from_raw(Some("de-DE")).hour_cycle(), HourCycle::H23);
        assert_eq!(Locale::from_raw(Some("en")).hour_cycle(), HourCycle::H12);
        assert_eq!(Locale::from_raw(Some("fr")).hour_cycle(), HourCycle::H23);
    }

    #[test]
    fn test_format_short() {
        assert_eq!(format_short(&afternoon(), HourCycle::H12), "3:07 PM");
        assert_eq!(format_short(&afternoon(), HourCycle::H23), "15:07");
    }

    #[test]
    fn test_format_full() {
        assert_eq!(
            format_full(&afternoon(), HourCycle::H12),
            "Saturday, January 13, 2024 at 3:07:09 PM"
        );
        assert_eq!(
            format_full(&afternoon(), HourCycle::H23),
            "Saturday 13 January 2024 at 15:07:09"
        );
    }

    #[test]
    fn test_out_of_range_timestamp() {
        assert!(local_time(i64::MAX).is_none());
        let (short, full) = format_timestamp(i64::MAX, &Locale::fallback());
        assert!(short.is_empty());
        assert!(full.is_empty());
    }
}
