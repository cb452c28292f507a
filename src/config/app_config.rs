use serde::{Deserialize, Serialize};

use crate::lib_constants::{DEFAULT_DATABASE_URL, DEFAULT_MAX_CONNECTIONS};

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct AppConfig {
    /// Connection URL for the notes database. Relative sqlite paths
    /// resolve against the daemon's working directory.
    pub database_url: String,
    pub max_connections: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
        }
    }
}
