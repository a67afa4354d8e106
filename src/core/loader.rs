use crate::domain::model::Doctor;
use crate::domain::ports::DoctorSource;

/// Fetches the full doctor list once.
///
/// Failures never reach the caller: they are logged and an empty list is returned,
/// which the UI shows as the "no results" state.
pub async fn load<S: DoctorSource + ?Sized>(source: &S) -> Vec<Doctor> {
    match source.fetch().await {
        Ok(doctors) => {
            tracing::info!("Loaded {} doctors", doctors.len());
            doctors
        }
        Err(e) => {
            tracing::error!("Error fetching doctors: {}", e);
            tracing::debug!("Recovery suggestion: {}", e.recovery_suggestion());
            Vec::new()
        }
    }
}
