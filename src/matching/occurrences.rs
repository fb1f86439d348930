/// Count non-overlapping occurrences of `repeat_unit` in `sequence`.
///
/// The scan runs left to right and each match consumes its full length before
/// the search resumes, so "AA" occurs twice in "AAAA", not three times.
/// A repeat unit longer than the sequence, or an empty one, occurs zero times.
///
/// # Examples
///
/// ```
/// use str_match::matching::occurrences::count_occurrences;
///
/// assert_eq!(count_occurrences("AAAGAAAGAAAGTTT", "AAAG"), 3);
/// assert_eq!(count_occurrences("AAAA", "AA"), 2);
/// assert_eq!(count_occurrences("AG", "AGAT"), 0);
/// ```
#[must_use]
pub fn count_occurrences(sequence: &str, repeat_unit: &str) -> usize {
    if repeat_unit.is_empty() || repeat_unit.len() > sequence.len() {
        return 0;
    }
    sequence.matches(repeat_unit).count()
}
