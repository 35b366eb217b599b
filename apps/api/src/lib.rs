pub mod config;
pub mod errors;
pub mod extraction;
pub mod models;
pub mod routes;
pub mod state;

pub use extraction::parse;
pub use models::resume::ParsedResume;
