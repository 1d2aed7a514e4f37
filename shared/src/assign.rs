//! Greedy deadline-feasibility assignment
//!
//! Packages are taken in deadline order and matched against the drone that
//! reaches the depot soonest. A package the earliest available drone cannot
//! deliver in time is dropped; that drone stays available for the next package.
//! The scan is single-pass and deliberately not globally optimal.

use serde::Serialize;
use tracing::debug;

use crate::{DroneQueueEntry, PackageQueueEntry, RecordId};

/// A drone committed to carry one package
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    pub drone_id: RecordId,
    pub package_id: RecordId,
}

impl Assignment {
    pub fn new(drone_id: RecordId, package_id: RecordId) -> Self {
        Self {
            drone_id,
            package_id,
        }
    }
}

/// Result of one planning run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DispatchPlan {
    pub assignments: Vec<Assignment>,
    pub unassigned_package_ids: Vec<RecordId>,
}

/// Match ETA-sorted drones against deadline-sorted packages.
///
/// Both queues must already be sorted as produced by
/// [`enqueue_drones`](crate::enqueue_drones) and
/// [`enqueue_packages`](crate::enqueue_packages).
pub fn assign_packages(drones: &[DroneQueueEntry], packages: &[PackageQueueEntry]) -> DispatchPlan {
    let mut plan = DispatchPlan::default();
    let mut i = 0;
    let mut j = 0;

    while i < packages.len() && j < drones.len() {
        let package = &packages[i];
        let drone = &drones[j];

        if drone.eta.saturating_add(package.etd) <= package.deadline {
            plan.assignments.push(Assignment::new(
                drone.drone_id.clone(),
                package.package_id.clone(),
            ));
            j += 1;
        } else {
            debug!(
                "Package {} infeasible: earliest drone {} arrives at {} + {}s > deadline {}",
                package.package_id, drone.drone_id, drone.eta, package.etd, package.deadline
            );
            plan.unassigned_package_ids.push(package.package_id.clone());
        }
        i += 1;
    }

    // No drones left for the rest
    plan.unassigned_package_ids.extend(
        packages[i..]
            .iter()
            .map(|package| package.package_id.clone()),
    );

    plan
}
