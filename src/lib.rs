pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{history::InMemoryHistory, http::HttpDoctorSource};
pub use config::toml_config::TomlConfig;
pub use core::{
    card::DoctorCard,
    directory::{Directory, ViewStatus},
    filter::{apply, available_specialties},
    loader::load,
    suggest::suggest,
    url_state::{decode, encode, sync_url},
};
pub use domain::model::{ConsultationType, Doctor, FilterChange, FilterState, SortBy};
pub use utils::error::{DirectoryError, Result};
