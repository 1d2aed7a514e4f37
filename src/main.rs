mod config;
mod listing;
mod planner;

use anyhow::{Context, Result};
use clap::Parser;
use config::{Cli, RunConfig};
use dronedispatch_shared::{
    now_s,
    record::{decode_drones, decode_packages},
};
use listing::fetch_listing;
use std::time::Instant;

use tracing::{debug, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing (stderr, so stdout only carries the plan)
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    let config = RunConfig::from(Cli::parse()).with_env()?;

    info!("Dispatch planner starting");
    info!("  Drones:   {}", config.drones);
    info!("  Packages: {}", config.packages);
    debug!(
        "  Depot: ({}, {}) at {} km/h",
        config.dispatch.depot.latitude,
        config.dispatch.depot.longitude,
        config.dispatch.drone_speed_kmh
    );

    // Reference time for the whole plan
    let now = now_s();

    let (drone_json, package_json) = futures::try_join!(
        fetch_listing("drones", &config.drones, config.fetch_timeout),
        fetch_listing("packages", &config.packages, config.fetch_timeout),
    )?;

    let started = Instant::now();

    let drones = decode_drones(&drone_json).context("Failed to decode drone listing")?;
    let packages = decode_packages(&package_json).context("Failed to decode package listing")?;
    info!(
        "Planning {} packages across {} drones",
        packages.len(),
        drones.len()
    );

    let plan = planner::plan(drones, packages, now, config.dispatch).await?;

    info!(
        "Assigned {} packages, {} unassigned",
        plan.assignments.len(),
        plan.unassigned_package_ids.len()
    );
    info!("Process time = {:.5} s", started.elapsed().as_secs_f64());

    println!("{}", serde_json::to_string_pretty(&plan)?);
    Ok(())
}
