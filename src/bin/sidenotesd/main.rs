mod cli;

use clap::{crate_name, Parser};
use figment::Figment;
use log::info;
use sidenotes::app_setup::AppSetupFairing;
use sidenotes::config::figment::FigmentExt;
use sidenotes::error_exit;
use sidenotes::logging::init_logging;

use crate::cli::CliConfig;

fn main() {
    init_logging();

    info!("{} starting up", crate_name!());

    let cli_config = CliConfig::parse();
    if !cli_config.config_file.exists() {
        error_exit!(
            "configuration file at {} does not exist",
            cli_config.config_file.display()
        )
    }
    let figment = Figment::from(rocket::Config::default())
        .setup_app_config(cli_config.config_file);

    let result = rocket::execute(
        rocket
            ::custom(figment)
            .attach(AppSetupFairing::new())
            .launch()
    );
    if let Err(e) = result {
        error_exit!("failed to launch rocket: {}", e);
    }
}
