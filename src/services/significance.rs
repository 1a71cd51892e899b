/// Whether one axis changed enough to count as a resize.
///
/// The configured rules are OR-ed together, so any single rule that holds
/// makes the axis significant:
///
/// - with neither `diff` nor `step` configured, any change counts;
/// - with `diff`, the absolute delta must be strictly greater than `diff`;
/// - with `step`, the change must reach or cross one of the boundaries
///   (see [`in_step`]).
pub fn check_size(current: i32, diff: Option<u32>, step: Option<&[i32]>, last: i32) -> bool {
    (diff.is_none() && step.is_none() && current != last)
        || diff.is_some_and(|diff| last.abs_diff(current) > diff)
        || step.is_some_and(|steps| in_step(current, last, steps))
}

/// True iff some boundary equals `current` or `saved`, or lies strictly
/// between them, in either direction of travel.
pub fn in_step(current: i32, saved: i32, steps: &[i32]) -> bool {
    let (low, high) = if current <= saved {
        (current, saved)
    } else {
        (saved, current)
    };

    steps.iter().any(|&step| low <= step && step <= high)
}
