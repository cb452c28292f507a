pub mod api;

pub use api::ApiRocketBuildExt;

pub const API_PREFIX: &str = "/api";
