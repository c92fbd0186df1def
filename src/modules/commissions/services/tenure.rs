use chrono::{Datelike, NaiveDate};

/// Whole calendar months between `joined_on` and `as_of`
///
/// A month only counts once its day-of-month has been reached again, so a
/// rep who joined on the 31st completes a month on the last day of a shorter
/// month. Dates before `joined_on` give 0.
pub fn months_working(joined_on: NaiveDate, as_of: NaiveDate) -> u32 {
    if as_of <= joined_on {
        return 0;
    }

    let mut months = (as_of.year() - joined_on.year()) * 12 + as_of.month() as i32
        - joined_on.month() as i32;

    let anniversary_reached = as_of.day() >= joined_on.day() || is_last_day_of_month(as_of);
    if !anniversary_reached {
        months -= 1;
    }

    u32::try_from(months).unwrap_or(0)
}

fn is_last_day_of_month(date: NaiveDate) -> bool {
    date.succ_opt()
        .map(|next| next.month() != date.month())
        .unwrap_or(true)
}
