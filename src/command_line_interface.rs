use structopt::clap::AppSettings;
use structopt::StructOpt;

#[derive(StructOpt, Debug, Clone)]
#[structopt(
    name = "Items service, a minimal HTTP backend for the items table.",
    setting = AppSettings::DeriveDisplayOrder,
    setting = AppSettings::UnifiedHelpMessage,
)]
pub struct CliOptions {
    /// Port to listen to.
    #[structopt(short, long, default_value = "3030", env = "ITEMS_PORT")]
    pub port: u16,

    /// Directory where the database file is stored.
    /// Created on startup if it does not exist yet.
    #[structopt(
        long,
        default_value = "./data/db",
        name = "DATABASE_DIR",
        env = "ITEMS_DATABASE_DIR"
    )]
    pub database_dir: String,

    /// Name of the database, without directory or file suffix.
    #[structopt(
        long,
        default_value = "items",
        name = "DATABASE_NAME",
        env = "ITEMS_DATABASE_NAME"
    )]
    pub database_name: String,

    /// How many times to attempt opening the database on startup
    /// before giving up and exiting.
    #[structopt(long, default_value = "5", env = "ITEMS_CONNECT_ATTEMPTS")]
    pub connect_attempts: u32,

    /// Seconds to sleep between failed startup connection attempts.
    #[structopt(long, default_value = "5", env = "ITEMS_CONNECT_RETRY_SECONDS")]
    pub connect_retry_seconds: u64,
}
