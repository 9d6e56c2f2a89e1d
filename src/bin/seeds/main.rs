use std::process::ExitCode;

use anythink_seeds::config::{self, CliArgs, Config};
use anythink_seeds::{db, menu, operations, run_migrations};
use clap::Parser;
use tokio::io::BufReader;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Sends logs to stderr so the menu owns stdout
fn init_tracing(debug: bool) {
    let default_level = if debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(config: Config, user_input: bool) -> anyhow::Result<()> {
    let pool = db::init_pool(&config.database_url)?;
    {
        let mut conn = pool.get()?;
        run_migrations(&mut conn)?;
    }
    info!("connected to {}", config.database_url);

    if user_input {
        let stdin = BufReader::new(tokio::io::stdin());
        menu::run_menu(&pool, &config, stdin, tokio::io::stdout()).await?;
    } else {
        let report = operations::seed_users(&pool, &config).await?;
        info!(
            users = report.users,
            items = report.items,
            comments = report.comments,
            failed_attempts = report.failed_attempts,
            failed_items = report.failed_items,
            "seed finished"
        );
    }

    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    // Load .env before clap reads DATABASE_URL from the environment
    dotenv::dotenv().ok();

    let args = CliArgs::parse();
    init_tracing(args.debug);

    let config = config::get_config(&args);

    match run(config, args.user_input).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}
