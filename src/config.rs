//! Command-line and environment configuration for a dispatch run

use crate::listing::ListingLocation;
use anyhow::{Context, Result};
use clap::{builder::NonEmptyStringValueParser, Parser};
use dronedispatch_shared::DispatchConfig;
use std::time::Duration;

/// Assign packages to drones.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(
    name = "dronedispatch",
    version,
    after_help = "Environment:\n  \
        DISPATCH_DEPOT_LATITUDE, DISPATCH_DEPOT_LONGITUDE  depot position (degrees)\n  \
        DISPATCH_DRONE_SPEED_KMH                           fleet cruise speed\n  \
        DISPATCH_FETCH_TIMEOUT_SECS                        per-listing fetch budget\n  \
        RUST_LOG                                           log filter"
)]
pub struct Cli {
    /// URL or file containing a JSON listing of drones
    #[arg(short, long, value_name = "SOURCE", value_parser = NonEmptyStringValueParser::new())]
    pub drones: String,

    /// URL or file containing a JSON listing of packages
    #[arg(short, long, value_name = "SOURCE", value_parser = NonEmptyStringValueParser::new())]
    pub packages: String,
}

/// Configuration for one planning run
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    /// Drone listing location
    pub drones: ListingLocation,
    /// Package listing location
    pub packages: ListingLocation,
    /// Time budget for each listing fetch
    pub fetch_timeout: Duration,
    /// Depot and fleet speed
    pub dispatch: DispatchConfig,
}

impl From<Cli> for RunConfig {
    fn from(cli: Cli) -> Self {
        Self {
            drones: ListingLocation::parse(&cli.drones),
            packages: ListingLocation::parse(&cli.packages),
            fetch_timeout: Self::DEFAULT_FETCH_TIMEOUT,
            dispatch: DispatchConfig::default(),
        }
    }
}

impl RunConfig {
    pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(30);

    /// Apply `DISPATCH_*` environment overrides
    pub fn with_env(mut self) -> Result<Self> {
        self.dispatch = DispatchConfig::from_env()?;
        if let Ok(raw) = std::env::var("DISPATCH_FETCH_TIMEOUT_SECS") {
            let secs: u64 = raw.trim().parse().with_context(|| {
                format!(
                    "DISPATCH_FETCH_TIMEOUT_SECS={:?} is not a whole number",
                    raw
                )
            })?;
            self.fetch_timeout = Duration::from_secs(secs);
        }
        Ok(self)
    }
}
