pub mod app_config;
pub mod figment;

pub use app_config::AppConfig;
