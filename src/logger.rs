use env_logger::Env;
use log::LevelFilter;

/// Initializes the global logger.
///
/// `RUST_LOG` wins when set; otherwise `verbose` selects debug output and the
/// default only reports warnings.
pub fn init_logger(verbose: bool) {
    let level = if verbose { LevelFilter::Debug } else { LevelFilter::Warn };
    env_logger::Builder::from_env(Env::default().default_filter_or(level.as_str()))
        .format_timestamp(None)
        .init();
}
