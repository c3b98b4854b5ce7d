//! Header timestamps.
//!
//! Two shapes are understood after the `|` separator of a header:
//!
//! - `[[YYYY-MM-DD]] HH:mm`: a daily-note link, optionally followed by a time
//! - `DD/MM/YYYY`: the legacy form, date only
//!
//! Anything else yields `None`. Parsing never fails loudly because a bad
//! timestamp must not cost the reader the comment it belongs to.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use super::cursor::Cursor;

pub struct Timestamp;

impl Timestamp {
    pub const LINK_OPEN: &'static [u8; 2] = b"[[";
    pub const LINK_CLOSE: &'static str = "]]";
    pub const LINK_ALIAS: char = '|';
    pub const DATE_FORMAT: &'static str = "%Y-%m-%d";
    pub const TIME_FORMAT: &'static str = "%H:%M";
    pub const LEGACY_DATE_FORMAT: &'static str = "%d/%m/%Y";
}

/// Parses the text after a header's `|` separator.
///
/// Date-only forms resolve to midnight.
pub fn parse_timestamp(text: &str) -> Option<NaiveDateTime> {
    let mut cur = Cursor::new(text.trim());

    if cur.eat(Timestamp::LINK_OPEN) {
        let target = cur.take_until(Timestamp::LINK_CLOSE)?;
        let date_token = target
            .split_once(Timestamp::LINK_ALIAS)
            .map_or(target, |(date, _alias)| date);
        let date = NaiveDate::parse_from_str(date_token.trim(), Timestamp::DATE_FORMAT).ok()?;
        cur.eat(Timestamp::LINK_CLOSE.as_bytes());
        cur.skip_whitespace();
        let time = NaiveTime::parse_from_str(cur.take_word(), Timestamp::TIME_FORMAT)
            .unwrap_or(NaiveTime::MIN);
        return Some(date.and_time(time));
    }

    let date = NaiveDate::parse_from_str(cur.take_word(), Timestamp::LEGACY_DATE_FORMAT).ok()?;
    Some(date.and_time(NaiveTime::MIN))
}

/// Formats a point in time the way new headers are written: `[[YYYY-MM-DD]] HH:mm`.
pub fn format_timestamp(at: NaiveDateTime) -> String {
    format!(
        "[[{}]] {}",
        at.format(Timestamp::DATE_FORMAT),
        at.format(Timestamp::TIME_FORMAT)
    )
}
