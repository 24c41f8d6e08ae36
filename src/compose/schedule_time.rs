use std::sync::OnceLock;

use time::format_description::FormatItem;
use time::format_description::well_known::Rfc3339;
use time::{OffsetDateTime, PrimitiveDateTime, UtcOffset};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScheduleInstantError {
    #[error("no schedule time given")]
    Missing,
    #[error("unrecognized date and time {0:?}")]
    Invalid(String),
    #[error("schedule time {post_at} is not after {now}")]
    NotInFuture { post_at: i64, now: i64 },
}

fn minute_format() -> &'static [FormatItem<'static>] {
    static FMT: OnceLock<Vec<FormatItem<'static>>> = OnceLock::new();
    FMT.get_or_init(|| {
        time::format_description::parse("[year]-[month]-[day]T[hour]:[minute]")
            .expect("valid time format")
    })
}

fn second_format() -> &'static [FormatItem<'static>] {
    static FMT: OnceLock<Vec<FormatItem<'static>>> = OnceLock::new();
    FMT.get_or_init(|| {
        time::format_description::parse("[year]-[month]-[day]T[hour]:[minute]:[second]")
            .expect("valid time format")
    })
}

fn display_format() -> &'static [FormatItem<'static>] {
    static FMT: OnceLock<Vec<FormatItem<'static>>> = OnceLock::new();
    FMT.get_or_init(|| {
        time::format_description::parse(
            "[year]-[month repr:numerical padding:zero]-[day padding:zero] [hour padding:zero]:[minute padding:zero]",
        )
        .expect("valid time format")
    })
}

/// Parses a `datetime-local` style value (`2030-01-31T09:30`, seconds
/// optional, `T` or a space as separator) in `offset`, or a full RFC 3339
/// timestamp, into a point in time.
pub fn parse_schedule_instant(
    raw: &str,
    offset: UtcOffset,
) -> Result<OffsetDateTime, ScheduleInstantError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(ScheduleInstantError::Missing);
    }

    if let Ok(dt) = OffsetDateTime::parse(raw, &Rfc3339) {
        return Ok(dt);
    }

    let normalized = raw.replacen(' ', "T", 1);
    PrimitiveDateTime::parse(&normalized, minute_format())
        .or_else(|_| PrimitiveDateTime::parse(&normalized, second_format()))
        .map(|dt| dt.assume_offset(offset))
        .map_err(|_| ScheduleInstantError::Invalid(raw.to_string()))
}

/// Resolves `raw` to epoch seconds, requiring a point strictly after `now`.
pub fn schedule_epoch_seconds(
    raw: &str,
    offset: UtcOffset,
    now: OffsetDateTime,
) -> Result<i64, ScheduleInstantError> {
    let at = parse_schedule_instant(raw, offset)?;
    let post_at = at.unix_timestamp();
    if post_at <= now.unix_timestamp() {
        return Err(ScheduleInstantError::NotInFuture {
            post_at,
            now: now.unix_timestamp(),
        });
    }
    Ok(post_at)
}

/// Renders epoch seconds as local `YYYY-MM-DD HH:MM` for list display.
/// Values the local calendar cannot hold fall back to the raw number.
pub fn format_post_at(post_at: i64, offset: UtcOffset) -> String {
    OffsetDateTime::from_unix_timestamp(post_at)
        .ok()
        .and_then(|dt| dt.checked_to_offset(offset))
        .and_then(|dt| dt.format(display_format()).ok())
        .unwrap_or_else(|| post_at.to_string())
}
