use std::time::Duration;

use backend::config::db::{DbOwner, DbProfile};
use backend::infra::db::connect_db;
use backend::AppError;
use clap::{Parser, ValueEnum};
use migration::{migrate, DatabaseConnection, MigrationCommand};
use tracing::{error, info, warn};

const CONNECT_ATTEMPTS: u32 = 5;
const CONNECT_BACKOFF: Duration = Duration::from_secs(2);

#[derive(Clone, Copy, ValueEnum)]
enum Env {
    Prod,
    Test,
}

impl From<Env> for DbProfile {
    fn from(env: Env) -> Self {
        match env {
            Env::Prod => DbProfile::Prod,
            Env::Test => DbProfile::Test,
        }
    }
}

#[derive(Parser)]
#[command(name = "migration")]
#[command(about = "Shopfront database migration tool")]
struct Args {
    /// up | down | fresh | reset | refresh | status
    command: MigrationCommand,

    /// Target database
    #[arg(short, long, value_enum, default_value = "test")]
    env: Env,
}

/// Postgres may still be starting when the CLI runs in compose; retry a bounded number of times.
async fn connect_with_retry(profile: DbProfile) -> Result<DatabaseConnection, AppError> {
    let mut attempt = 1;
    loop {
        match connect_db(profile, DbOwner::Owner).await {
            Ok(conn) => return Ok(conn),
            Err(e) if attempt < CONNECT_ATTEMPTS => {
                warn!(attempt, error = %e, "database not reachable yet, retrying");
                tokio::time::sleep(CONNECT_BACKOFF).await;
                attempt += 1;
            }
            Err(e) => return Err(e),
        }
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stdout)
        .without_time()
        .with_target(false)
        .with_env_filter("migration=info,backend=info,sqlx=warn")
        .init();

    let args = Args::parse();
    let profile = DbProfile::from(args.env);

    let db = match connect_with_retry(profile).await {
        Ok(db) => db,
        Err(e) => {
            error!(error = %e, "could not connect to database");
            std::process::exit(1);
        }
    };

    if let Err(e) = migrate(&db, args.command).await {
        error!(error = %e, "migration failed");
        std::process::exit(1);
    }

    info!(profile = ?profile, "migration command finished");
}
