//! Drone Dispatch Shared Types
//!
//! This crate provides the record types and the matching core used by the
//! dispatch planner: great-circle distance, drone and package queues, and the
//! greedy deadline-feasibility assignment.

pub mod assign;
pub mod config;
pub mod error;
pub mod geo;
pub mod queue;
pub mod record;

use std::time::{SystemTime, UNIX_EPOCH};

pub use assign::{assign_packages, Assignment, DispatchPlan};
pub use config::DispatchConfig;
pub use error::DispatchError;
pub use geo::{haversine_km, GeoPoint};
pub use queue::{
    enqueue_drones, enqueue_packages, flight_seconds, DroneQueueEntry, PackageQueueEntry,
};
pub use record::{DroneRecord, DroneStatus, PackageRecord, RecordId};

/// Get current timestamp in seconds since Unix epoch
pub fn now_s() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs() as i64
}

/// Fixed planning parameters
pub mod defaults {
    use crate::GeoPoint;

    /// Mean Earth radius used by the haversine formula, in kilometres
    pub const EARTH_RADIUS_KM: f64 = 6372.8;

    /// Cruise speed shared by every drone in the fleet
    pub const DRONE_SPEED_KMH: f64 = 50.0;

    /// Depot at 303 Collins Street, Melbourne
    pub const DEPOT: GeoPoint = GeoPoint {
        latitude: -37.81652845,
        longitude: 144.963816478363,
    };
}

/// Build both queues and run the assignment engine in one call.
///
/// The binary runs the two builders concurrently instead; this is the
/// single-threaded path used by tests and library callers.
pub fn plan_dispatch(
    drones: &[DroneRecord],
    packages: &[PackageRecord],
    now: i64,
    config: &DispatchConfig,
) -> DispatchPlan {
    let drone_queue = enqueue_drones(drones, now, config);
    let package_queue = enqueue_packages(packages, now, config);
    assign_packages(&drone_queue, &package_queue)
}
