//! Domain objects for the mock cloud
//!
//! Resource references scraped from logs and the synthetic log source itself

pub mod logs;
pub mod resources;
