pub mod app_setup;
pub mod bin_constants;
pub mod config;
pub mod data;
mod lib_constants;
pub mod logging;
pub mod routes;
pub mod service;
pub mod storage;

pub use lib_constants::NOTES_PER_PAGE;
