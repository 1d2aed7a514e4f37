//! Drone and package queues with derived timing fields

use tracing::debug;

use crate::{haversine_km, DispatchConfig, DroneRecord, DroneStatus, PackageRecord, RecordId};

/// A drone ordered by when it reaches the depot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DroneQueueEntry {
    pub drone_id: RecordId,
    /// Absolute arrival time at the depot, epoch seconds
    pub eta: i64,
}

/// A package ordered by deadline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageQueueEntry {
    /// Flight duration from depot to destination, seconds
    pub etd: i64,
    /// Absolute deadline, epoch seconds
    pub deadline: i64,
    pub package_id: RecordId,
}

/// Whole seconds needed to fly `distance_km` at the configured speed (truncated)
///
/// Durations too long for an `i64` saturate at `i64::MAX`.
pub fn flight_seconds(distance_km: f64, config: &DispatchConfig) -> i64 {
    (distance_km / config.drone_speed_kmh * 3600.0).floor() as i64
}

/// Build the drone queue, sorted by ETA at the depot.
///
/// A drone with a package in flight must deliver it before heading back, so its
/// remaining distance runs through that package's destination.
pub fn enqueue_drones(
    drones: &[DroneRecord],
    now: i64,
    config: &DispatchConfig,
) -> Vec<DroneQueueEntry> {
    let mut queue: Vec<DroneQueueEntry> = drones
        .iter()
        .map(|drone| {
            let distance = match drone.status {
                DroneStatus::EnRoute { destination } => {
                    haversine_km(&drone.location, &destination)
                        + haversine_km(&destination, &config.depot)
                }
                DroneStatus::Idle => haversine_km(&drone.location, &config.depot),
            };
            DroneQueueEntry {
                drone_id: drone.drone_id.clone(),
                eta: now.saturating_add(flight_seconds(distance, config)),
            }
        })
        .collect();

    // stable: equal ETAs keep listing order
    queue.sort_by_key(|entry| entry.eta);
    debug!("Drone queue built: {} entries", queue.len());
    queue
}

/// Build the package queue, sorted by deadline.
///
/// `now` is unused by the current formula since ETD is a relative duration.
pub fn enqueue_packages(
    packages: &[PackageRecord],
    _now: i64,
    config: &DispatchConfig,
) -> Vec<PackageQueueEntry> {
    let mut queue: Vec<PackageQueueEntry> = packages
        .iter()
        .map(|package| PackageQueueEntry {
            etd: flight_seconds(haversine_km(&config.depot, &package.destination), config),
            deadline: package.deadline,
            package_id: package.package_id.clone(),
        })
        .collect();

    queue.sort_by_key(|entry| entry.deadline);
    debug!("Package queue built: {} entries", queue.len());
    queue
}
