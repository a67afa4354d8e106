use crate::domain::model::Doctor;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Where the full, unfiltered doctor list comes from.
#[async_trait]
pub trait DoctorSource: Send + Sync {
    async fn fetch(&self) -> Result<Vec<Doctor>>;
}

/// The navigable URL, reduced to its query string.
pub trait QueryStore {
    /// Current query string, without the leading `?`.
    fn current(&self) -> String;
    fn push(&mut self, query: String);
}

pub trait ConfigProvider: Send + Sync {
    fn endpoint(&self) -> &str;
    fn timeout_seconds(&self) -> u64;
}
