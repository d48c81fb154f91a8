//! Seeds the registry from a JSON snapshot and logs the admin dashboard.
//!
//! Usage: `movements-report [STATUS] [SEARCH]` where `STATUS` is one of
//! `all`, `pending`, `delivered`, `not_delivered` or `damaged`.

use std::env;
use std::fs;
use std::io;

use dotenvy::dotenv;
use thiserror::Error;

use pushkind_delivery::domain::profile::Profile;
use pushkind_delivery::dto::dashboard::DashboardQuery;
use pushkind_delivery::models::config::AppConfig;
use pushkind_delivery::repository::errors::RepositoryError;
use pushkind_delivery::repository::{InMemoryRepository, RegistrySnapshot};
use pushkind_delivery::services::dashboard::load_admin_dashboard;

#[derive(Debug, Error)]
enum SeedError {
    #[error("cannot read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("invalid snapshot {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Registry(#[from] RepositoryError),
}

fn load_registry(path: &str) -> Result<InMemoryRepository, SeedError> {
    let raw = fs::read_to_string(path).map_err(|source| SeedError::Read {
        path: path.to_string(),
        source,
    })?;
    let snapshot: RegistrySnapshot =
        serde_json::from_str(&raw).map_err(|source| SeedError::Parse {
            path: path.to_string(),
            source,
        })?;
    Ok(InMemoryRepository::from_snapshot(snapshot)?)
}

fn main() {
    dotenv().ok(); // Load .env file
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    // Select config profile (defaults to `local`).
    let app_env = env::var("APP_ENV").unwrap_or_else(|_| "local".into());

    let app_config = match AppConfig::load("config", &app_env) {
        Ok(app_config) => app_config,
        Err(err) => {
            log::error!("Error loading app config: {err}");
            std::process::exit(1);
        }
    };

    let repo = match load_registry(&app_config.seed_path) {
        Ok(repo) => repo,
        Err(err) => {
            log::error!("Failed to seed registry: {err}");
            std::process::exit(1);
        }
    };

    let mut args = env::args().skip(1);
    let query = DashboardQuery {
        status: args.next(),
        search: args.next(),
    };

    let dashboard = match load_admin_dashboard(&repo, &Profile::Admin, query) {
        Ok(dashboard) => dashboard,
        Err(err) => {
            log::error!("Failed to load dashboard: {err}");
            std::process::exit(1);
        }
    };

    let stats = dashboard.stats;
    log::info!(
        "Movements: {} total, {} pending, {} delivered, {} damaged, {} not delivered",
        stats.total,
        stats.pending,
        stats.delivered,
        stats.damaged,
        stats.not_delivered
    );

    if dashboard.movements.is_empty() {
        log::info!("No movements found");
    }

    for movement in &dashboard.movements {
        log::info!(
            "#{} {} {} | {} x {} | {} | {}",
            movement.id,
            movement.movement_type,
            movement.client_name,
            movement.quantity,
            movement.description,
            movement.status.label(),
            movement
                .delivery_person_name
                .as_ref()
                .map_or("unassigned", |name| name.as_str())
        );
    }
}
