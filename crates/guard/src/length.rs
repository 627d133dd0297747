//! Length guards for pairs of sequences.

use crate::error::GuardError;

/// Largest element count a traversal may reach before failing.
///
/// Counting by traversal stays within the standard signed integer range, so
/// an unbounded sequence fails once it passes this many elements.
pub const MAX_TRAVERSAL_COUNT: usize = i32::MAX as usize;

/// Counts the elements of `sequence`.
///
/// When the iterator reports an exact size (`size_hint` lower bound equal to
/// its upper bound) that size is returned without iterating. Otherwise the
/// iterator is traversed to exhaustion. Either way the count may not exceed
/// [`MAX_TRAVERSAL_COUNT`]. The iterator is dropped before this function
/// returns, on success and on failure.
///
/// # Errors
///
/// Returns [`GuardError::OutOfRange`] naming `name` when the sequence holds
/// more than [`MAX_TRAVERSAL_COUNT`] elements.
pub fn element_count<I>(sequence: I, name: &str) -> Result<usize, GuardError>
where
    I: IntoIterator,
{
    count_bounded(sequence.into_iter(), name, MAX_TRAVERSAL_COUNT)
}

fn count_bounded<I>(iter: I, name: &str, limit: usize) -> Result<usize, GuardError>
where
    I: Iterator,
{
    if let (lower, Some(upper)) = iter.size_hint()
        && lower == upper
    {
        if lower > limit {
            return Err(too_many_elements(name, limit));
        }
        return Ok(lower);
    }

    let mut count = 0usize;
    for _ in iter {
        if count == limit {
            return Err(too_many_elements(name, limit));
        }
        count += 1;
    }
    Ok(count)
}

fn too_many_elements(name: &str, limit: usize) -> GuardError {
    GuardError::out_of_range(name, format!("the {name} has more than {limit} elements"))
}

/// Checks that two sequences hold the same number of elements.
///
/// `None` stands for an absent argument. Each present sequence is counted
/// with [`element_count`], first then second.
///
/// Counting an unbounded sequence only ends at [`MAX_TRAVERSAL_COUNT`], so
/// comparing one against a finite sequence runs for a long time before it
/// fails. Bound such sequences (for example with `take`) before calling.
///
/// # Errors
///
/// - [`GuardError::NullArgument`] naming the first absent argument.
/// - [`GuardError::OutOfRange`] naming `first_name` when the counts differ.
/// - [`GuardError::OutOfRange`] naming the sequence whose traversal overflowed.
pub fn validate_equal_length<A, B>(
    first: Option<A>,
    first_name: &str,
    second: Option<B>,
    second_name: &str,
) -> Result<(), GuardError>
where
    A: IntoIterator,
    B: IntoIterator,
{
    let first = first.ok_or_else(|| GuardError::null_argument(first_name))?;
    let second = second.ok_or_else(|| GuardError::null_argument(second_name))?;

    let first_len = element_count(first, first_name)?;
    let second_len = element_count(second, second_name)?;

    if first_len != second_len {
        return Err(GuardError::out_of_range(
            first_name,
            format!(
                "the {first_name} has {first_len} elements but the {second_name} has {second_len}"
            ),
        ));
    }
    Ok(())
}
