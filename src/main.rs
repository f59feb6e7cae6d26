mod app;

use env_logger::Env;
use std::process;

fn main() {
    let config = app::config::resolve_config();

    let level = config
        .as_ref()
        .map(|c| c.log_level.clone())
        .unwrap_or_else(|_| "info".to_string());
    env_logger::Builder::from_env(Env::default().default_filter_or(level))
        .format_timestamp(None)
        .format_target(false)
        .init();

    if let Err(err) = app::run(config) {
        log::error!("{:#}", err);
        process::exit(1);
    }
}
