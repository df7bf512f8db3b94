use chrono::{DateTime, Local, LocalResult, NaiveDateTime, TimeZone};

use crate::errors::PushLaterError;

pub const DATE_FORMAT: &str = "%d-%m-%Y %H:%M";
const LAYOUT: &str = "dd-mm-yyyy hh:mm";

// chrono accepts unpadded fields and surrounding whitespace, so the shape is
// checked byte by byte first.
fn matches_layout(input: &str) -> bool {
    input.len() == LAYOUT.len()
        && input
            .bytes()
            .zip(LAYOUT.bytes())
            .all(|(c, l)| match l {
                b'd' | b'm' | b'y' | b'h' => c.is_ascii_digit(),
                _ => c == l,
            })
}

/// Parse `dd-mm-yyyy hh:mm` as a wall-clock time in the local timezone.
pub fn parse_datetime(input: &str) -> Result<DateTime<Local>, PushLaterError> {
    parse_datetime_in(input, &Local)
}

/// Parse `dd-mm-yyyy hh:mm` as a wall-clock time in `tz`.
///
/// Ambiguous times (when clocks fall back) resolve to the earlier instant.
/// Times skipped by a forward clock change are rejected.
pub fn parse_datetime_in<Tz: TimeZone>(input: &str, tz: &Tz) -> Result<DateTime<Tz>, PushLaterError> {
    let malformed = |reason: String| PushLaterError::MalformedDateTime(input.to_owned(), reason);
    if !matches_layout(input) {
        return Err(malformed(format!("does not match {}", LAYOUT)));
    }
    let naive =
        NaiveDateTime::parse_from_str(input, DATE_FORMAT).map_err(|err| malformed(err.to_string()))?;
    match naive.and_local_timezone(tz.clone()) {
        LocalResult::Single(instant) => Ok(instant),
        LocalResult::Ambiguous(earliest, _) => Ok(earliest),
        LocalResult::None => Err(malformed("does not exist in the local timezone".to_owned())),
    }
}
