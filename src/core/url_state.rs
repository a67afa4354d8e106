//! Mapping between [`FilterState`] and the navigable URL's query string.
//!
//! Parameter names are part of the public contract:
//! `search`, `consultationType`, `specialty` (repeatable) and `sortBy`.
//! Default fields are never written, so the default state encodes to an empty
//! query and `decode(&encode(s)) == s` holds for every reachable state.

use crate::domain::model::{ConsultationType, FilterState, SortBy};
use url::form_urlencoded;
use url::Url;

pub const SEARCH_PARAM: &str = "search";
pub const CONSULTATION_TYPE_PARAM: &str = "consultationType";
pub const SPECIALTY_PARAM: &str = "specialty";
pub const SORT_BY_PARAM: &str = "sortBy";

const FILTER_PARAMS: [&str; 4] = [
    SEARCH_PARAM,
    CONSULTATION_TYPE_PARAM,
    SPECIALTY_PARAM,
    SORT_BY_PARAM,
];

pub fn decode(query: &str) -> FilterState {
    let query = query.strip_prefix('?').unwrap_or(query);
    let mut state = FilterState::default();
    let mut search_seen = false;
    let mut mode_seen = false;
    let mut sort_seen = false;

    for (key, value) in form_urlencoded::parse(query.as_bytes()) {
        match key.as_ref() {
            SEARCH_PARAM if !search_seen => {
                search_seen = true;
                state.search = value.into_owned();
            }
            CONSULTATION_TYPE_PARAM if !mode_seen => {
                mode_seen = true;
                state.consultation_type = value.parse::<ConsultationType>().ok();
            }
            SPECIALTY_PARAM => state.toggle_specialty(&value, true),
            SORT_BY_PARAM if !sort_seen => {
                sort_seen = true;
                state.sort_by = value.parse::<SortBy>().ok();
            }
            _ => {}
        }
    }

    if state.consultation_type.is_none() && mode_seen {
        tracing::debug!("ignoring unknown consultationType value");
    }
    if state.sort_by.is_none() && sort_seen {
        tracing::debug!("ignoring unknown sortBy value");
    }

    state
}

pub fn encode(state: &FilterState) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    append_pairs(&mut serializer, state);
    serializer.finish()
}

/// Rewrites the filter parameters of `url` in place, leaving unrelated ones untouched.
pub fn sync_url(url: &mut Url, state: &FilterState) {
    let retained: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(key, _)| !FILTER_PARAMS.contains(&key.as_ref()))
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();

    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, value) in &retained {
        serializer.append_pair(key, value);
    }
    append_pairs(&mut serializer, state);
    let query = serializer.finish();

    if query.is_empty() {
        url.set_query(None);
    } else {
        url.set_query(Some(&query));
    }
}

fn append_pairs(serializer: &mut form_urlencoded::Serializer<'_, String>, state: &FilterState) {
    if !state.search.is_empty() {
        serializer.append_pair(SEARCH_PARAM, &state.search);
    }
    if let Some(mode) = state.consultation_type {
        serializer.append_pair(CONSULTATION_TYPE_PARAM, mode.as_str());
    }
    for specialty in &state.specialties {
        serializer.append_pair(SPECIALTY_PARAM, specialty);
    }
    if let Some(sort_by) = state.sort_by {
        serializer.append_pair(SORT_BY_PARAM, sort_by.as_str());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_state() -> FilterState {
        FilterState {
            search: "Dr. Amit & Co".to_string(),
            consultation_type: Some(ConsultationType::VideoConsult),
            specialties: vec!["Dentist".to_string(), "Ear-Nose-Throat (ENT) Specialist".to_string()],
            sort_by: Some(SortBy::Experience),
        }
    }

    #[test]
    fn test_default_state_encodes_to_empty_query() {
        assert_eq!(encode(&FilterState::default()), "");
        assert_eq!(decode(""), FilterState::default());
    }

    #[test]
    fn test_encode_parameter_order_and_repeats() {
        let state = FilterState {
            search: "amit".to_string(),
            consultation_type: Some(ConsultationType::InClinic),
            specialties: vec!["Dentist".to_string(), "Homeopath".to_string()],
            sort_by: Some(SortBy::Fees),
        };
        assert_eq!(
            encode(&state),
            "search=amit&consultationType=in_clinic&specialty=Dentist&specialty=Homeopath&sortBy=fees"
        );
    }

    #[test]
    fn test_round_trip() {
        let states = vec![
            FilterState::default(),
            full_state(),
            FilterState {
                search: "  spaced  ".to_string(),
                ..Default::default()
            },
            FilterState {
                specialties: vec!["General Physician".to_string()],
                ..Default::default()
            },
        ];
        for state in states {
            assert_eq!(decode(&encode(&state)), state);
        }
    }

    #[test]
    fn test_decode_ignores_invalid_values() {
        let state = decode("?consultationType=teleport&sortBy=rating&page=2&specialty=Dentist");
        assert_eq!(state.consultation_type, None);
        assert_eq!(state.sort_by, None);
        assert_eq!(state.specialties, vec!["Dentist"]);
        assert_eq!(state.search, "");
    }

    #[test]
    fn test_decode_single_valued_params_use_first_occurrence() {
        let state = decode("search=one&search=two&sortBy=fees&sortBy=experience");
        assert_eq!(state.search, "one");
        assert_eq!(state.sort_by, Some(SortBy::Fees));
    }

    #[test]
    fn test_decode_dedupes_specialties() {
        let state = decode("specialty=Dentist&specialty=Homeopath&specialty=Dentist");
        assert_eq!(state.specialties, vec!["Dentist", "Homeopath"]);
    }

    #[test]
    fn test_decode_percent_and_plus() {
        let state = decode("search=Dr.+Amit%20Shah");
        assert_eq!(state.search, "Dr. Amit Shah");
    }

    #[test]
    fn test_sync_url_keeps_unrelated_params() {
        let mut url = Url::parse("https://example.com/doctors?page=2&search=old&lang=en").unwrap();
        let state = FilterState {
            sort_by: Some(SortBy::Fees),
            ..Default::default()
        };
        sync_url(&mut url, &state);
        assert_eq!(url.as_str(), "https://example.com/doctors?page=2&lang=en&sortBy=fees");
    }

    #[test]
    fn test_sync_url_default_state_clears_query() {
        let mut url = Url::parse("https://example.com/doctors?search=old&specialty=Dentist").unwrap();
        sync_url(&mut url, &FilterState::default());
        assert_eq!(url.as_str(), "https://example.com/doctors");
    }
}
