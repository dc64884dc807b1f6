use log::error;
use log::info;
use log::warn;
use rusqlite::Connection;
use std::path::Path;
use std::thread;
use std::time::Duration;

/// Block until the database can be opened and queried, or until
/// `max_attempts` attempts have been exhausted.
///
/// Returns `true` as soon as one attempt succeeds, `false` if all fail.
/// This runs single-threaded at startup, strictly before the server
/// starts listening. A `false` result means the process must not begin
/// serving requests.
pub fn wait_until_ready(database_path: &Path, max_attempts: u32, delay: Duration) -> bool {
    wait_until(max_attempts, delay, || match probe(database_path) {
        Ok(()) => true,
        Err(err) => {
            warn!("Database is not reachable, {}", err);
            false
        }
    })
}

/// Open a connection, run a trivial statement and close again.
/// The connection is intentionally thrown away: per-request handlers
/// open their own connections later.
fn probe(database_path: &Path) -> rusqlite::Result<()> {
    let conn = Connection::open(database_path)?;
    conn.execute_batch("SELECT 1;")?;
    match conn.close() {
        Ok(()) => Ok(()),
        Err((_conn, err)) => Err(err),
    }
}

fn wait_until(max_attempts: u32, delay: Duration, mut attempt_once: impl FnMut() -> bool) -> bool {
    for attempt in 1..=max_attempts {
        if attempt_once() {
            info!("Database connection successful");
            return true;
        }
        if attempt < max_attempts {
            warn!(
                "Attempt {} - database not ready, retrying in {} seconds...",
                attempt,
                delay.as_secs()
            );
            thread::sleep(delay);
        }
    }
    error!(
        "Failed to connect to the database after {} attempts",
        max_attempts
    );
    false
}
