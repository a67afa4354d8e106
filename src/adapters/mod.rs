// Adapters layer: concrete implementations for external systems (http, navigable url).

pub mod history;
pub mod http;
