//! # Slot Calendar
//!
//! Generates the bookable dates and the fixed daily time slots. Bookable
//! dates run from the Monday of the current week through the Monday four
//! weeks later, both included, skipping weekends.

use chrono::{Datelike, Days, NaiveDate, Weekday};

use crate::models::time_slot::TimeSlot;

/// Number of weeks ahead a visitor can book.
pub const BOOKING_WEEKS: u64 = 4;

pub const TIME_SLOTS: [TimeSlot; 4] = [
    TimeSlot { time: "10:00", label: "10:00 AM" },
    TimeSlot { time: "12:00", label: "12:00 PM" },
    TimeSlot { time: "16:00", label: "4:00 PM" },
    TimeSlot { time: "18:00", label: "6:00 PM" },
];

pub fn time_slots() -> &'static [TimeSlot] {
    &TIME_SLOTS
}

pub fn find_time_slot(time: &str) -> Option<&'static TimeSlot> {
    TIME_SLOTS.iter().find(|slot| slot.time == time)
}

/// Monday of the week containing `date`, or `None` before the first
/// representable Monday.
pub fn week_start(date: NaiveDate) -> Option<NaiveDate> {
    date.checked_sub_days(Days::new(u64::from(date.weekday().num_days_from_monday())))
}

/// First and last bookable dates for `today`, or `None` when either falls
/// outside the representable range.
pub fn window_bounds(today: NaiveDate) -> Option<(NaiveDate, NaiveDate)> {
    let start = week_start(today)?;
    let end = start.checked_add_days(Days::new(BOOKING_WEEKS * 7))?;
    Some((start, end))
}

/// Every weekday from this week's Monday through the Monday four weeks later.
///
/// Returns `None` for anchors so close to chrono's date limits that the
/// window cannot be represented.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use slotbook_core::calendar::booking_window;
///
/// let today = NaiveDate::from_ymd_opt(2024, 6, 5).unwrap();
/// let dates = booking_window(today).unwrap();
/// assert_eq!(dates.first(), NaiveDate::from_ymd_opt(2024, 6, 3).as_ref());
/// assert_eq!(dates.last(), NaiveDate::from_ymd_opt(2024, 7, 1).as_ref());
/// ```
pub fn booking_window(today: NaiveDate) -> Option<Vec<NaiveDate>> {
    let (start, end) = window_bounds(today)?;

    Some(
        start
            .iter_days()
            .take_while(|date| *date <= end)
            .filter(|date| !is_weekend(*date))
            .collect(),
    )
}

pub fn is_bookable_date(today: NaiveDate, date: NaiveDate) -> bool {
    match window_bounds(today) {
        Some((start, end)) => date >= start && date <= end && !is_weekend(date),
        None => false,
    }
}

fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}
