//! Drone and package records decoded from the upstream JSON listings
//!
//! Listings are decoded into loosely-typed raw shapes first so that a missing
//! field is reported by name instead of being defaulted.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::warn;

use crate::{DispatchError, GeoPoint};

/// Opaque identifier carried by drones and packages
///
/// Listings use either JSON integers or strings; the original shape is kept
/// so the plan echoes identifiers back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Number(i64),
    Text(String),
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Number(n) => write!(f, "{}", n),
            RecordId::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for RecordId {
    fn from(id: i64) -> Self {
        RecordId::Number(id)
    }
}

impl From<&str> for RecordId {
    fn from(id: &str) -> Self {
        RecordId::Text(id.to_string())
    }
}

impl From<String> for RecordId {
    fn from(id: String) -> Self {
        RecordId::Text(id)
    }
}

/// What a drone is doing when the plan is computed
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DroneStatus {
    /// Heading straight back to the depot
    Idle,
    /// Delivering one package before it can return
    EnRoute { destination: GeoPoint },
}

/// A drone as reported by the fleet listing
#[derive(Debug, Clone, PartialEq)]
pub struct DroneRecord {
    pub drone_id: RecordId,
    pub location: GeoPoint,
    pub status: DroneStatus,
}

impl DroneRecord {
    pub fn idle(drone_id: RecordId, location: GeoPoint) -> Self {
        Self {
            drone_id,
            location,
            status: DroneStatus::Idle,
        }
    }

    pub fn en_route(drone_id: RecordId, location: GeoPoint, destination: GeoPoint) -> Self {
        Self {
            drone_id,
            location,
            status: DroneStatus::EnRoute { destination },
        }
    }
}

/// An undelivered package
#[derive(Debug, Clone, PartialEq)]
pub struct PackageRecord {
    pub package_id: RecordId,
    pub destination: GeoPoint,
    /// Absolute deadline, seconds since Unix epoch
    pub deadline: i64,
}

impl PackageRecord {
    pub fn new(package_id: RecordId, destination: GeoPoint, deadline: i64) -> Self {
        Self {
            package_id,
            destination,
            deadline,
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawPoint {
    latitude: Option<f64>,
    longitude: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct RawInFlight {
    destination: Option<RawPoint>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawDrone {
    drone_id: Option<RecordId>,
    location: Option<RawPoint>,
    #[serde(default)]
    packages: Option<Vec<RawInFlight>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawPackage {
    package_id: Option<RecordId>,
    destination: Option<RawPoint>,
    deadline: Option<i64>,
}

/// Decode a drone listing (a JSON array of drone objects)
pub fn decode_drones(json: &str) -> Result<Vec<DroneRecord>, DispatchError> {
    let raw: Vec<RawDrone> = serde_json::from_str(json)?;
    raw.into_iter()
        .enumerate()
        .map(|(index, drone)| drone.validate(index))
        .collect()
}

/// Decode a package listing (a JSON array of package objects)
pub fn decode_packages(json: &str) -> Result<Vec<PackageRecord>, DispatchError> {
    let raw: Vec<RawPackage> = serde_json::from_str(json)?;
    raw.into_iter()
        .enumerate()
        .map(|(index, package)| package.validate(index))
        .collect()
}

fn invalid(record: &'static str, index: usize, field: &'static str) -> DispatchError {
    DispatchError::InvalidInput {
        record,
        index,
        field,
    }
}

impl RawPoint {
    fn validate(
        &self,
        record: &'static str,
        index: usize,
        fields: [&'static str; 2],
    ) -> Result<GeoPoint, DispatchError> {
        let latitude = self
            .latitude
            .ok_or_else(|| invalid(record, index, fields[0]))?;
        let longitude = self
            .longitude
            .ok_or_else(|| invalid(record, index, fields[1]))?;
        Ok(GeoPoint::new(latitude, longitude))
    }
}

impl RawDrone {
    fn validate(self, index: usize) -> Result<DroneRecord, DispatchError> {
        let drone_id = self
            .drone_id
            .ok_or_else(|| invalid("drone", index, "droneId"))?;
        let location = self
            .location
            .ok_or_else(|| invalid("drone", index, "location"))?
            .validate("drone", index, ["location.latitude", "location.longitude"])?;

        let in_flight = self.packages.unwrap_or_default();
        if in_flight.len() > 1 {
            warn!(
                "Drone {} reports {} packages in flight, only the first is considered",
                drone_id,
                in_flight.len()
            );
        }

        let status = match in_flight.first() {
            None => DroneStatus::Idle,
            Some(package) => {
                let destination = package
                    .destination
                    .as_ref()
                    .ok_or_else(|| invalid("drone", index, "packages[0].destination"))?
                    .validate(
                        "drone",
                        index,
                        [
                            "packages[0].destination.latitude",
                            "packages[0].destination.longitude",
                        ],
                    )?;
                DroneStatus::EnRoute { destination }
            }
        };

        Ok(DroneRecord {
            drone_id,
            location,
            status,
        })
    }
}

impl RawPackage {
    fn validate(self, index: usize) -> Result<PackageRecord, DispatchError> {
        let package_id = self
            .package_id
            .ok_or_else(|| invalid("package", index, "packageId"))?;
        let destination = self
            .destination
            .ok_or_else(|| invalid("package", index, "destination"))?
            .validate(
                "package",
                index,
                ["destination.latitude", "destination.longitude"],
            )?;
        let deadline = self
            .deadline
            .ok_or_else(|| invalid("package", index, "deadline"))?;

        Ok(PackageRecord {
            package_id,
            destination,
            deadline,
        })
    }
}
