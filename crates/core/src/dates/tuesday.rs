use chrono::{Datelike, Duration, NaiveDate};

/// Format used for the `call_tuesday` substitution and the `tuesday` command.
pub const ISO_DATE: &str = "%Y-%m-%d";

/// Return the Tuesday of the Monday-start week containing `reference`.
///
/// The offset is `1 - weekday` with Monday = 0, so dates after Tuesday move
/// backwards within the week and a Monday moves forward by one day.
///
/// `None` only for the weeks at the ends of chrono's range, where that
/// Tuesday is not representable (`NaiveDate::MAX` is a Monday).
pub fn current_tuesday(reference: NaiveDate) -> Option<NaiveDate> {
    let weekday = i64::from(reference.weekday().num_days_from_monday());
    reference.checked_add_signed(Duration::days(1 - weekday))
}

/// Same as [`current_tuesday`] for any date-bearing chrono value.
///
/// Only the calendar component is used; a time of day or offset is ignored.
pub fn current_tuesday_of<D: Datelike>(value: &D) -> Option<NaiveDate> {
    NaiveDate::from_num_days_from_ce_opt(value.num_days_from_ce()).and_then(current_tuesday)
}

/// Default notebook name for a resolved Tuesday, e.g. `2024_06_04_tidy_tuesday.qmd`.
pub fn default_file_name(tuesday: NaiveDate, extension: &str) -> String {
    format!("{}_tidy_tuesday.{}", tuesday.format("%Y_%m_%d"), extension)
}
