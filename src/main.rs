use dbsession::{Config, DatabaseSession};
use std::process::ExitCode;
use tracing::info;

fn main() -> ExitCode {
    // Log to stderr so stdout carries only the status lines
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let config = Config::default();
    info!("Starting session against {:?}", config.database.path);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match DatabaseSession::run(&config, &mut out) {
        Ok(_) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}
