//! Planning parameters shared by both queue builders

use std::env;

use crate::{defaults, DispatchError, GeoPoint};

/// Depot location and fleet speed used to derive flight times
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DispatchConfig {
    /// Where drones return to and packages launch from
    pub depot: GeoPoint,
    /// Cruise speed of every drone, km/h
    pub drone_speed_kmh: f64,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            depot: defaults::DEPOT,
            drone_speed_kmh: defaults::DRONE_SPEED_KMH,
        }
    }
}

impl DispatchConfig {
    /// Create a configuration, rejecting speeds that would make flight times meaningless
    pub fn new(depot: GeoPoint, drone_speed_kmh: f64) -> Result<Self, DispatchError> {
        if !drone_speed_kmh.is_finite() || drone_speed_kmh <= 0.0 {
            return Err(DispatchError::InvalidConfig(format!(
                "drone speed must be a positive number of km/h, got {}",
                drone_speed_kmh
            )));
        }
        Ok(Self {
            depot,
            drone_speed_kmh,
        })
    }

    /// Defaults overridden by `DISPATCH_DEPOT_LATITUDE`, `DISPATCH_DEPOT_LONGITUDE`
    /// and `DISPATCH_DRONE_SPEED_KMH` when set
    pub fn from_env() -> Result<Self, DispatchError> {
        let base = Self::default();
        let latitude = env_f64("DISPATCH_DEPOT_LATITUDE")?.unwrap_or(base.depot.latitude);
        let longitude = env_f64("DISPATCH_DEPOT_LONGITUDE")?.unwrap_or(base.depot.longitude);
        let speed = env_f64("DISPATCH_DRONE_SPEED_KMH")?.unwrap_or(base.drone_speed_kmh);
        Self::new(GeoPoint::new(latitude, longitude), speed)
    }
}

fn env_f64(key: &str) -> Result<Option<f64>, DispatchError> {
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<f64>()
            .map(Some)
            .map_err(|e| DispatchError::InvalidConfig(format!("{}={:?}: {}", key, raw, e))),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(e) => Err(DispatchError::InvalidConfig(format!("{}: {}", key, e))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_melbourne_depot() {
        let config = DispatchConfig::default();
        assert_eq!(config.depot, GeoPoint::new(-37.81652845, 144.963816478363));
        assert_eq!(config.drone_speed_kmh, 50.0);
    }

    #[test]
    fn test_rejects_non_positive_speed() {
        let depot = GeoPoint::new(0.0, 0.0);
        assert!(matches!(
            DispatchConfig::new(depot, 0.0),
            Err(DispatchError::InvalidConfig(_))
        ));
        assert!(DispatchConfig::new(depot, -5.0).is_err());
        assert!(DispatchConfig::new(depot, f64::NAN).is_err());
        assert!(DispatchConfig::new(depot, f64::INFINITY).is_err());
    }

    #[test]
    fn test_env_overrides() {
        // Only this test touches these variables
        env::set_var("DISPATCH_DEPOT_LATITUDE", "1.5");
        env::set_var("DISPATCH_DEPOT_LONGITUDE", " -2.25 ");
        env::set_var("DISPATCH_DRONE_SPEED_KMH", "80");
        let config = DispatchConfig::from_env().expect("valid env");
        assert_eq!(config.depot, GeoPoint::new(1.5, -2.25));
        assert_eq!(config.drone_speed_kmh, 80.0);

        env::set_var("DISPATCH_DRONE_SPEED_KMH", "fast");
        assert!(matches!(
            DispatchConfig::from_env(),
            Err(DispatchError::InvalidConfig(_))
        ));

        env::remove_var("DISPATCH_DEPOT_LATITUDE");
        env::remove_var("DISPATCH_DEPOT_LONGITUDE");
        env::remove_var("DISPATCH_DRONE_SPEED_KMH");
    }
}
