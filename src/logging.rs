//! Release builds log to syslog; debug builds log to stderr through
//! `env_logger` so `RUST_LOG` works during development.

#[cfg(not(debug_assertions))]
pub fn init_logging() {
    use syslog::{BasicLogger, Formatter3164};

    // of the RFC formats, only 3164 currently integrates with the
    // log crate
    let logger = syslog::unix(Formatter3164::default())
        .expect("syslog initialization failed");
    log::set_boxed_logger(Box::new(BasicLogger::new(logger)))
        .map(|()| log::set_max_level(log::STATIC_MAX_LEVEL))
        .expect("syslog initialization failed");
}

#[cfg(debug_assertions)]
pub fn init_logging() {
    env_logger::init()
}

/// Logs an error and terminates the process. For unrecoverable
/// startup failures only.
#[macro_export]
macro_rules! error_exit {
    ($($arg:tt)*) => {{
        log::error!($($arg)*);
        std::process::exit(1)
    }};
}
