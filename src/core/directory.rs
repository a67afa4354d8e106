use crate::core::filter::{apply, available_specialties};
use crate::core::loader::load;
use crate::core::suggest::suggest;
use crate::core::url_state::{decode, encode};
use crate::domain::model::{ConsultationType, Doctor, FilterChange, FilterState, SortBy};
use crate::domain::ports::{DoctorSource, QueryStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewStatus {
    Loading,
    NoResults,
    Results(usize),
}

/// Single-screen session: the loaded records, the filter state, and the URL it
/// is mirrored to.
///
/// The state is decoded from the store once, in [`Directory::new`]. After that
/// every mutation re-encodes it and pushes the result, unless nothing changed.
pub struct Directory<Q: QueryStore> {
    records: Vec<Doctor>,
    loaded: bool,
    state: FilterState,
    store: Q,
}

impl<Q: QueryStore> Directory<Q> {
    pub fn new(store: Q) -> Self {
        let state = decode(&store.current());
        tracing::debug!("Initial filter state: {:?}", state);
        Self {
            records: Vec::new(),
            loaded: false,
            state,
            store,
        }
    }

    pub async fn load_from<S: DoctorSource + ?Sized>(&mut self, source: &S) {
        let records = load(source).await;
        self.set_records(records);
    }

    /// Replaces the whole list.
    pub fn set_records(&mut self, records: Vec<Doctor>) {
        self.records = records;
        self.loaded = true;
    }

    pub fn records(&self) -> &[Doctor] {
        &self.records
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    pub fn store(&self) -> &Q {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut Q {
        &mut self.store
    }

    pub fn visible(&self) -> Vec<&Doctor> {
        apply(&self.records, &self.state)
    }

    pub fn suggestions(&self, partial: &str) -> Vec<&Doctor> {
        suggest(&self.records, partial)
    }

    pub fn specialties(&self) -> Vec<String> {
        available_specialties(&self.records)
    }

    pub fn status(&self) -> ViewStatus {
        if !self.loaded {
            return ViewStatus::Loading;
        }
        match self.visible().len() {
            0 => ViewStatus::NoResults,
            n => ViewStatus::Results(n),
        }
    }

    pub fn update(&mut self, change: FilterChange) {
        let mut next = self.state.clone();
        change.apply_to(&mut next);
        self.commit(next);
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.update(FilterChange {
            search: Some(search.into()),
            ..Default::default()
        });
    }

    pub fn set_consultation_type(&mut self, mode: Option<ConsultationType>) {
        self.update(FilterChange {
            consultation_type: Some(mode),
            ..Default::default()
        });
    }

    pub fn set_sort_by(&mut self, sort_by: Option<SortBy>) {
        self.update(FilterChange {
            sort_by: Some(sort_by),
            ..Default::default()
        });
    }

    pub fn toggle_specialty(&mut self, name: &str, checked: bool) {
        let mut next = self.state.clone();
        next.toggle_specialty(name, checked);
        self.commit(next);
    }

    /// Choosing a suggestion searches for that doctor's full name.
    pub fn pick_suggestion(&mut self, doctor: &Doctor) {
        self.set_search(doctor.name.clone());
    }

    fn commit(&mut self, next: FilterState) {
        if next == self.state {
            return;
        }
        self.state = next;
        let query = encode(&self.state);
        tracing::debug!("Pushing query: ?{}", query);
        self.store.push(query);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::history::InMemoryHistory;

    fn doctor(id: &str, name: &str, specialty: &str, video: bool) -> Doctor {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "name": name,
            "specialities": [{ "name": specialty }],
            "video_consult": video,
            "in_clinic": !video,
        }))
        .unwrap()
    }

    #[test]
    fn test_initial_state_from_store() {
        let directory = Directory::new(InMemoryHistory::with_query(
            "consultationType=video_consult&specialty=Dentist",
        ));
        assert_eq!(
            directory.state().consultation_type,
            Some(ConsultationType::VideoConsult)
        );
        assert_eq!(directory.state().specialties, vec!["Dentist"]);
        assert_eq!(directory.status(), ViewStatus::Loading);
        assert!(directory.visible().is_empty());
        assert!(directory.suggestions("dr").is_empty());
    }

    #[test]
    fn test_mutation_pushes_encoded_query() {
        let mut directory = Directory::new(InMemoryHistory::new());
        directory.set_sort_by(Some(SortBy::Fees));
        directory.toggle_specialty("Dentist", true);

        assert_eq!(directory.store().len(), 2);
        assert_eq!(directory.store().current(), "specialty=Dentist&sortBy=fees");
    }

    #[test]
    fn test_noop_mutation_pushes_nothing() {
        let mut directory = Directory::new(InMemoryHistory::with_query("sortBy=fees"));
        directory.set_sort_by(Some(SortBy::Fees));
        directory.toggle_specialty("Dentist", false);
        assert_eq!(directory.store().len(), 1);
    }

    #[test]
    fn test_status_transitions() {
        let mut directory = Directory::new(InMemoryHistory::new());
        directory.set_records(vec![
            doctor("1", "Dr. Asha", "Dentist", true),
            doctor("2", "Dr. Vikram", "Cardiologist", false),
        ]);
        assert_eq!(directory.status(), ViewStatus::Results(2));

        directory.set_search("nobody");
        assert_eq!(directory.status(), ViewStatus::NoResults);
    }

    #[test]
    fn test_pick_suggestion_sets_search() {
        let mut directory = Directory::new(InMemoryHistory::new());
        directory.set_records(vec![
            doctor("1", "Dr. Asha Verma", "Dentist", true),
            doctor("2", "Dr. Ashok Rao", "Cardiologist", false),
        ]);

        let picked = directory.suggestions("ash")[1].clone();
        directory.pick_suggestion(&picked);

        assert_eq!(directory.state().search, "Dr. Ashok Rao");
        let visible: Vec<&str> = directory.visible().iter().map(|d| d.id.as_str()).collect();
        assert_eq!(visible, vec!["2"]);
        assert_eq!(directory.store().current(), "search=Dr.+Ashok+Rao");
    }

    #[test]
    fn test_back_restores_previous_state() {
        let mut directory = Directory::new(InMemoryHistory::new());
        directory.set_consultation_type(Some(ConsultationType::InClinic));
        directory.set_consultation_type(Some(ConsultationType::VideoConsult));

        assert!(directory.store_mut().back());
        let restored = Directory::new(directory.store().clone());
        assert_eq!(
            restored.state().consultation_type,
            Some(ConsultationType::InClinic)
        );
    }
}
