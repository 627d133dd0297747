//! Chronological order guards for date pairs and date sequences.

use std::fmt::Display;

use crate::error::GuardError;

/// Checks that `first` is on or before `second`.
///
/// Equal values pass. Values that cannot be compared (`partial_cmp` returns
/// `None`, so `first <= second` is false) are treated as out of order.
///
/// # Errors
///
/// Returns [`GuardError::OutOfRange`] naming `first_name` when `first` is
/// after `second`. The message embeds both values and both names.
///
/// # Example
///
/// ```ignore
/// let start = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
/// let end = NaiveDate::from_ymd_opt(2020, 12, 31).unwrap();
/// validate_ascending_pair(&start, "start date", &end, "end date")?;
/// ```
pub fn validate_ascending_pair<D>(
    first: &D,
    first_name: &str,
    second: &D,
    second_name: &str,
) -> Result<(), GuardError>
where
    D: PartialOrd + Display + ?Sized,
{
    if first <= second {
        return Ok(());
    }
    Err(GuardError::out_of_range(
        first_name,
        format!("the {first_name} ({first}) must be on or before the {second_name} ({second})"),
    ))
}

/// Checks that `dates` is in non-decreasing order.
///
/// Sequences with fewer than two elements always pass. Otherwise each
/// consecutive pair is checked from left to right with
/// [`validate_ascending_pair`], naming the elements `index {i} of
/// {sequence_name}`. The first violating pair stops the scan.
///
/// # Errors
///
/// Returns the [`GuardError::OutOfRange`] of the first out-of-order pair,
/// naming the earlier element of that pair.
pub fn validate_ascending_sequence<D>(dates: &[D], sequence_name: &str) -> Result<(), GuardError>
where
    D: PartialOrd + Display,
{
    for (i, pair) in dates.windows(2).enumerate() {
        validate_ascending_pair(
            &pair[0],
            &format!("index {i} of {sequence_name}"),
            &pair[1],
            &format!("index {} of {sequence_name}", i + 1),
        )?;
    }
    Ok(())
}
