/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub mod consts;
pub mod database;
pub mod input;
pub mod permission;
pub mod types;

use anyhow::Result;
use database::connect_db;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use types::*;

/// Builds the process subscriber. With `report_errors` set, `error!` events
/// are also forwarded to Sentry and lower levels become breadcrumbs.
pub fn logging_subscriber(cli: &Cli) -> impl tracing::Subscriber + Send + Sync + 'static {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    let error_reporting = cli.report_errors.then(sentry_tracing::layer);

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .with(error_reporting)
}

pub fn init_logging(cli: &Cli) {
    // A subscriber may already be installed when embedded in tests
    let _ = logging_subscriber(cli).try_init();
}

/// Keep the returned guard alive for the lifetime of the process; dropping it
/// flushes pending reports.
pub fn init_error_reporting(cli: &Cli) -> Option<sentry::ClientInitGuard> {
    if !cli.report_errors {
        return None;
    }

    match &cli.sentry_dsn {
        Some(dsn) => Some(sentry::init((
            dsn.as_str(),
            sentry::ClientOptions {
                release: sentry::release_name!(),
                ..Default::default()
            },
        ))),
        None => {
            tracing::warn!("Error reporting enabled without a Sentry DSN, skipping");
            None
        }
    }
}

pub async fn init_state(cli: Cli) -> Result<Arc<ServerState>> {
    tracing::info!(ip = %cli.ip, port = cli.port, "Starting Space Server");

    let db = connect_db(&cli).await?;

    Ok(Arc::new(ServerState { db, cli }))
}
