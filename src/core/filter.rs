use crate::domain::model::{Doctor, FilterState, SortBy};
use std::cmp::Reverse;
use std::collections::BTreeSet;

/// Narrows and orders `records` according to `state`.
///
/// Stages run in a fixed order: name search, consultation mode, specialty (any of),
/// then sort. Every stage only drops or reorders items, so the result is always a
/// permutation of a subsequence of the input. Sorting is stable.
pub fn apply<'a>(records: &'a [Doctor], state: &FilterState) -> Vec<&'a Doctor> {
    let needle = state.search.to_lowercase();

    let mut visible: Vec<&Doctor> = records
        .iter()
        .filter(|d| needle.is_empty() || d.name.to_lowercase().contains(&needle))
        .filter(|d| state.consultation_type.map_or(true, |mode| d.supports(mode)))
        .filter(|d| {
            state.specialties.is_empty()
                || state.specialties.iter().any(|name| d.has_specialty(name))
        })
        .collect();

    match state.sort_by {
        Some(SortBy::Fees) => visible.sort_by_key(|d| d.fee_value()),
        Some(SortBy::Experience) => visible.sort_by_key(|d| Reverse(d.experience_years())),
        None => {}
    }

    tracing::debug!(
        total = records.len(),
        visible = visible.len(),
        "applied filter state"
    );
    visible
}

/// Every specialty name present in `records`, de-duplicated and sorted.
pub fn available_specialties(records: &[Doctor]) -> Vec<String> {
    records
        .iter()
        .flat_map(|d| d.specialities.iter().map(|s| s.name.clone()))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
