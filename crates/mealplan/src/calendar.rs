use std::{borrow::Borrow, collections::BTreeMap};

use mealprep_shared::MealSlot;
use time::{
    Date, Duration, OffsetDateTime, format_description::BorrowedFormatItem,
    macros::format_description,
};
use time_tz::{ToTimezone, timezones};

use crate::{Error, Result};

const DATE_KEY_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day]");

/// Calendar date of a CMS date value.
///
/// Only the part before the first time separator is read, so
/// `2025-06-08T23:30:00-05:00` and `2025-06-08` share the key `2025-06-08`.
/// No timezone conversion is applied.
pub fn date_key(value: &str) -> Result<Date> {
    let trimmed = value.trim();
    let key = trimmed.split(['T', 't', ' ']).next().unwrap_or(trimmed);

    Date::parse(key, DATE_KEY_FORMAT).map_err(|source| Error::InvalidDate {
        value: value.to_owned(),
        source,
    })
}

/// `YYYY-MM-DD` form of a date, as used in links and grouping keys.
pub fn format_date_key(date: Date) -> String {
    // Formatting a bare `Date` with date-only components cannot fail.
    date.format(DATE_KEY_FORMAT).unwrap_or_else(|_| date.to_string())
}

/// Seven consecutive dates from the Sunday on or before `date`.
pub fn week_dates(date: Date) -> Result<[Date; 7]> {
    let days_since_sunday = i64::from(date.weekday().number_days_from_sunday());
    let sunday = date
        .checked_sub(Duration::days(days_since_sunday))
        .ok_or_else(|| Error::DateOutOfRange(format_date_key(date)))?;

    let mut dates = [sunday; 7];
    for (offset, day) in (0_i64..).zip(dates.iter_mut()) {
        *day = sunday
            .checked_add(Duration::days(offset))
            .ok_or_else(|| Error::DateOutOfRange(format_date_key(date)))?;
    }

    Ok(dates)
}

/// Sunday-to-Saturday week containing a plan's `weekStartDate`.
pub fn compute_week_dates(week_start_date: &str) -> Result<[Date; 7]> {
    week_dates(date_key(week_start_date)?)
}

/// Buckets slots by calendar day.
///
/// Days without slots have no entry. Slots keep their input order inside a
/// bucket; use [`order_slots_within_day`] to lay a day out. A slot with a
/// malformed date fails the whole grouping.
pub fn group_slots_by_date<'a, I>(slots: I) -> Result<BTreeMap<Date, Vec<&'a MealSlot>>>
where
    I: IntoIterator<Item = &'a MealSlot>,
{
    let mut grouped: BTreeMap<Date, Vec<&'a MealSlot>> = BTreeMap::new();

    for slot in slots {
        grouped.entry(date_key(&slot.date)?).or_default().push(slot);
    }

    Ok(grouped)
}

/// Stable sort by meal order; unrecognized slot types go last.
pub fn order_slots_within_day<S: Borrow<MealSlot>>(mut slots: Vec<S>) -> Vec<S> {
    slots.sort_by_key(|slot| slot.borrow().slot_type.position());
    slots
}

pub fn is_today(date: Date, today: Date) -> bool {
    date == today
}

/// Current calendar date in the given IANA timezone, UTC when unknown.
pub fn today(tz: &str) -> Date {
    let now = OffsetDateTime::now_utc();

    match timezones::get_by_name(tz) {
        Some(tz) => now.to_timezone(tz).date(),
        None => {
            tracing::warn!(tz, "unknown timezone, using UTC");
            now.date()
        }
    }
}
