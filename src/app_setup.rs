use log::{error, info};
use rocket::fairing::{Fairing, Info};
use rocket::{Build, Rocket};

use crate::config::AppConfig;
use crate::routes::ApiRocketBuildExt;
use crate::storage::NoteStore;

/// Ignite-time wiring: config extraction, store construction, route
/// installation. Any failure here aborts the launch.
pub struct AppSetupFairing;

impl AppSetupFairing {
    pub fn new() -> Self {
        AppSetupFairing
    }
}

impl Default for AppSetupFairing {
    fn default() -> Self {
        Self::new()
    }
}

macro_rules! ok_or_bail {
    ($rocket:ident, $expr:expr, |$e:ident| $error_logger:expr) => ({
        match $expr {
            std::result::Result::Ok(ok) => ok,
            std::result::Result::Err(e) => {
                let $e = e;
                $error_logger;
                return std::result::Result::Err($rocket);
            },
        }
    });
}

#[rocket::async_trait]
impl Fairing for AppSetupFairing {
    fn info(&self) -> Info {
        use rocket::fairing::Kind;
        Info {
            name: "app setup",
            kind: Kind::Ignite,
        }
    }

    async fn on_ignite(
        &self,
        rocket: Rocket<Build>,
    ) -> rocket::fairing::Result {
        let config: AppConfig = ok_or_bail!(
            rocket,
            rocket.figment().extract(),
            |e| {
                for e in e {
                    error!("{e}");
                }
                info!("finishing due to a config parse error");
            }
        );

        let store = ok_or_bail!(
            rocket,
            NoteStore::new(&config).await,
            |e| error!("note store initialization failed: {e}")
        );

        Ok(
            rocket
                .manage(store)
                .manage(config)
                .install_sidenotes_api()
        )
    }
}
