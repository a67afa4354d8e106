pub mod card;
pub mod directory;
pub mod filter;
pub mod loader;
pub mod suggest;
pub mod url_state;

pub use crate::domain::model::{Doctor, FilterChange, FilterState};
pub use crate::domain::ports::{ConfigProvider, DoctorSource, QueryStore};
pub use crate::utils::error::Result;
