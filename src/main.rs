use chrono::Utc;
use env_logger::Env;
use items_service::command_line_interface::CliOptions;
use items_service::constants;
use items_service::database_migrate_refinery;
use items_service::database_readiness;
use items_service::warp_api;
use log::error;
use log::info;
use rusqlite::Connection;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use structopt::StructOpt;

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(Env::default().filter_or("RUST_LOG", "info"))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] - {}",
                Utc::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .init();

    let cli_options = CliOptions::from_args();

    if let Err(err) = std::fs::create_dir_all(&cli_options.database_dir) {
        error!(
            "Failed to create database directory {}, {}",
            cli_options.database_dir, err
        );
        std::process::exit(1);
    }
    let database_file = format!(
        "{}{}",
        cli_options.database_name,
        constants::DATABASE_SUFFIX
    );
    let database_path = PathBuf::from(&cli_options.database_dir).join(database_file);

    // The readiness gate runs exactly once, strictly before the server
    // starts accepting traffic.
    let delay = Duration::from_secs(cli_options.connect_retry_seconds);
    if !database_readiness::wait_until_ready(&database_path, cli_options.connect_attempts, delay) {
        error!("Database connection could not be established, exiting...");
        std::process::exit(1);
    }

    match Connection::open(&database_path) {
        Ok(mut conn) => {
            if let Err(err) = database_migrate_refinery::migrate(&mut conn) {
                error!("Failed to migrate database, {}", err);
                std::process::exit(1);
            }
        }
        Err(err) => {
            error!(
                "Failed to open database {}, {}",
                database_path.display(),
                err
            );
            std::process::exit(1);
        }
    }

    info!("Using database {}", database_path.display());
    warp_api::run_server(cli_options, Arc::new(database_path)).await;
}
