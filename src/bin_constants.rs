pub const DEFAULT_CONFIG_FILE: &str = "/etc/sidenotes/sidenotesd.toml";
pub const APP_CONFIG_ENV_PREFIX: &str = "SIDENOTES_";
