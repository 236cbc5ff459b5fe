use std::collections::HashSet;
use std::hash::Hash;

/// Returns every repeat occurrence in `values`, in the order it was found.
///
/// The first occurrence of a value is never reported. A value that appears
/// `k` times therefore shows up `k - 1` times in the result.
pub fn find_duplicates<T, I>(values: I) -> Vec<T>
where
    I: IntoIterator<Item = T>,
    T: Eq + Hash,
{
    let mut seen = HashSet::new();
    let mut duplicates = Vec::new();

    for value in values {
        if seen.contains(&value) {
            duplicates.push(value);
        } else {
            seen.insert(value);
        }
    }

    duplicates
}
