use crate::domain::model::Doctor;

pub const MAX_SUGGESTIONS: usize = 3;

/// Autocomplete candidates for a partially typed name.
///
/// Runs over the full list, independent of the active filters. A blank query
/// yields nothing.
pub fn suggest<'a>(records: &'a [Doctor], partial: &str) -> Vec<&'a Doctor> {
    if partial.trim().is_empty() {
        return Vec::new();
    }

    let needle = partial.to_lowercase();
    records
        .iter()
        .filter(|d| d.name.to_lowercase().contains(&needle))
        .take(MAX_SUGGESTIONS)
        .collect()
}
