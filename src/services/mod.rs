pub mod data_stores;
pub mod error_events;
pub mod projects;
