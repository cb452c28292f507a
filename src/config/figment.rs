use std::path::Path;

use rocket::figment::providers::{Env, Format, Serialized, Toml};
use rocket::figment::Figment;

use crate::bin_constants::APP_CONFIG_ENV_PREFIX;
use crate::config::app_config::AppConfig;

/// Layers the application configuration onto a figment: compiled-in
/// defaults first, then the TOML file named on the command line, then
/// `SIDENOTES_`-prefixed environment variables (strongest).
pub trait FigmentExt {
    fn setup_app_config(self, config_file: impl AsRef<Path>) -> Figment;
}

impl FigmentExt for Figment {
    fn setup_app_config(self, config_file: impl AsRef<Path>) -> Figment {
        let defaults = Serialized::defaults(AppConfig::default());
        self.merge(defaults)
            .merge(Toml::file_exact(config_file))
            .merge(Env::prefixed(APP_CONFIG_ENV_PREFIX).global())
    }
}
