/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use anyhow::Result;
use clap::Parser;
use space_core::types::Cli;
use space_core::{init_error_reporting, init_logging, init_state};
use std::sync::Arc;

#[tokio::main]
pub async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(&cli);
    // Installed before connecting so startup failures are reported too
    let _guard = init_error_reporting(&cli);

    let state = init_state(cli).await.inspect_err(|e| {
        tracing::error!(error = %e, "Failed to initialize server state");
    })?;

    web::serve_web(Arc::clone(&state)).await?;

    Ok(())
}
