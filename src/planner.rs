//! Runs the matching core with both queue builders on blocking workers

use anyhow::{Context, Result};
use dronedispatch_shared::{
    assign_packages, enqueue_drones, enqueue_packages, DispatchConfig, DispatchPlan, DroneRecord,
    PackageRecord,
};
use tokio::task;
use tracing::debug;

/// Build the two queues in parallel, then assign on the caller
pub async fn plan(
    drones: Vec<DroneRecord>,
    packages: Vec<PackageRecord>,
    now: i64,
    config: DispatchConfig,
) -> Result<DispatchPlan> {
    let drone_task = task::spawn_blocking(move || enqueue_drones(&drones, now, &config));
    let package_task = task::spawn_blocking(move || enqueue_packages(&packages, now, &config));

    let (drone_queue, package_queue) =
        tokio::try_join!(drone_task, package_task).context("Queue builder task failed")?;
    debug!(
        "Queues ready: {} drones, {} packages",
        drone_queue.len(),
        package_queue.len()
    );

    Ok(assign_packages(&drone_queue, &package_queue))
}

#[cfg(test)]
mod tests {
    use super::*;
    use dronedispatch_shared::{plan_dispatch, GeoPoint, RecordId};

    #[tokio::test]
    async fn test_matches_sequential_planner() {
        let config = DispatchConfig::default();
        let now = 1_700_000_000;
        let drones = vec![
            DroneRecord::idle(RecordId::from(1), GeoPoint::new(-37.80, 144.95)),
            DroneRecord::en_route(
                RecordId::from(2),
                GeoPoint::new(-37.60, 145.20),
                GeoPoint::new(-37.65, 145.10),
            ),
            DroneRecord::idle(RecordId::from(3), GeoPoint::new(-37.82, 144.96)),
        ];
        let packages = vec![
            PackageRecord::new(
                RecordId::from(10),
                GeoPoint::new(-37.90, 144.90),
                now + 1800,
            ),
            PackageRecord::new(RecordId::from(11), GeoPoint::new(-37.70, 145.00), now + 600),
            PackageRecord::new(
                RecordId::from(12),
                GeoPoint::new(-37.81, 144.97),
                now + 7200,
            ),
            PackageRecord::new(RecordId::from(13), GeoPoint::new(-38.50, 144.00), now + 900),
        ];

        let expected = plan_dispatch(&drones, &packages, now, &config);
        let actual = plan(drones, packages.clone(), now, config)
            .await
            .expect("plan");

        assert_eq!(actual, expected);
        assert_eq!(
            actual.assignments.len() + actual.unassigned_package_ids.len(),
            packages.len()
        );
    }

    #[tokio::test]
    async fn test_empty_fleet() {
        let packages = vec![PackageRecord::new(
            RecordId::from("only"),
            GeoPoint::new(0.0, 0.0),
            0,
        )];
        let plan = plan(Vec::new(), packages, 0, DispatchConfig::default())
            .await
            .expect("plan");
        assert!(plan.assignments.is_empty());
        assert_eq!(plan.unassigned_package_ids, vec![RecordId::from("only")]);
    }
}
