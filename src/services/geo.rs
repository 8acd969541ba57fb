//! Geographic calculations

use crate::types::Coordinates;

/// Earth radius in kilometers
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Average speed in km/h for travel time estimation.
///
/// A flat heuristic over straight-line distance, not a road-network
/// estimate; user-facing output should present the resulting durations as
/// approximate.
const AVERAGE_SPEED_KMH: f64 = 30.0;

/// Calculate Haversine distance between two points in kilometers
pub fn haversine_km(from: &Coordinates, to: &Coordinates) -> f64 {
    let d_lat = (to.lat - from.lat).to_radians();
    let d_lng = (to.lng - from.lng).to_radians();

    let lat1 = from.lat.to_radians();
    let lat2 = to.lat.to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (d_lng / 2.0).sin().powi(2);

    let c = 2.0 * a.sqrt().asin();

    EARTH_RADIUS_KM * c
}

/// Estimated drive time in whole minutes at the flat average speed
pub fn drive_minutes(km: f64) -> i32 {
    (km / AVERAGE_SPEED_KMH * 60.0).round() as i32
}

/// Round a distance to one decimal place for reporting
pub fn round_km(km: f64) -> f64 {
    (km * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_haversine_noosa_caloundra() {
        let noosa = Coordinates { lat: -26.3941, lng: 153.0918 };
        let caloundra = Coordinates { lat: -26.8035, lng: 153.1219 };

        let distance = haversine_km(&noosa, &caloundra);

        // Noosa Heads to Caloundra is roughly 45 km in a straight line
        assert!((distance - 45.6).abs() < 1.0);
    }

    #[test]
    fn test_haversine_same_point() {
        let point = Coordinates { lat: -26.65, lng: 153.09 };
        let distance = haversine_km(&point, &point);
        assert!(distance.abs() < 0.001);
    }

    #[test]
    fn test_haversine_symmetric() {
        let a = Coordinates { lat: -26.3941, lng: 153.0918 };
        let b = Coordinates { lat: -26.6816, lng: 153.1192 };

        assert!((haversine_km(&a, &b) - haversine_km(&b, &a)).abs() < 1e-9);
    }

    #[test]
    fn test_drive_minutes_rounds_to_nearest() {
        // 30 km at 30 km/h is exactly 60 minutes
        assert_eq!(drive_minutes(30.0), 60);
        // 15.2 km -> 30.4 minutes -> 30
        assert_eq!(drive_minutes(15.2), 30);
        // 15.3 km -> 30.6 minutes -> 31
        assert_eq!(drive_minutes(15.3), 31);
        assert_eq!(drive_minutes(0.0), 0);
    }

    #[test]
    fn test_round_km_one_decimal() {
        assert_eq!(round_km(12.34), 12.3);
        assert_eq!(round_km(12.36), 12.4);
        assert_eq!(round_km(7.25), 7.3);
        assert_eq!(round_km(0.0), 0.0);
    }
}
