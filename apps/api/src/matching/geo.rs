//! Great-circle distance between two coordinates, and its human-readable label.

use crate::models::profile::Coordinates;

const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance in kilometers, rounded to one decimal place.
pub fn distance_km(a: Coordinates, b: Coordinates) -> f64 {
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lon = (b.lon - a.lon).to_radians();
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    // Rounding noise can push h a hair past 1.0 for antipodal points.
    let c = 2.0 * h.sqrt().min(1.0).asin();

    round_to_tenth(EARTH_RADIUS_KM * c)
}

/// `< 1 km` → meters, `< 10 km` → one decimal, otherwise whole kilometers.
pub fn format_distance(km: f64) -> String {
    if km < 1.0 {
        format!("{}m away", (km * 1000.0).round() as i64)
    } else if km < 10.0 {
        format!("{km:.1}km away")
    } else {
        format!("{}km away", km.round() as i64)
    }
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    const BANGALORE: Coordinates = Coordinates {
        lat: 12.9716,
        lon: 77.5946,
    };
    const MUMBAI: Coordinates = Coordinates {
        lat: 19.0760,
        lon: 72.8777,
    };

    #[test]
    fn test_bangalore_to_mumbai() {
        let d = distance_km(BANGALORE, MUMBAI);
        assert!((840.0..=850.0).contains(&d), "Distance was {d}");
    }

    #[test]
    fn test_distance_is_symmetric() {
        let pairs = [
            (BANGALORE, MUMBAI),
            (Coordinates::new(51.5074, -0.1278), Coordinates::new(40.7128, -74.0060)),
            (Coordinates::new(-33.8688, 151.2093), Coordinates::new(35.6762, 139.6503)),
            (Coordinates::new(0.0, 0.0), Coordinates::new(0.0, 180.0)),
        ];
        for (a, b) in pairs {
            assert_eq!(distance_km(a, b), distance_km(b, a));
        }
    }

    #[test]
    fn test_same_point_is_zero() {
        assert_eq!(distance_km(MUMBAI, MUMBAI), 0.0);
    }

    #[test]
    fn test_antipodal_points_do_not_panic() {
        let d = distance_km(Coordinates::new(0.0, 0.0), Coordinates::new(0.0, 180.0));
        assert!((d - 20015.1).abs() < 0.2, "Distance was {d}");
    }

    #[test]
    fn test_format_distance_meters() {
        assert_eq!(format_distance(0.4), "400m away");
    }

    #[test]
    fn test_format_distance_one_decimal_under_ten() {
        assert_eq!(format_distance(3.24), "3.2km away");
        assert_eq!(format_distance(9.9), "9.9km away");
    }

    #[test]
    fn test_format_distance_whole_km() {
        assert_eq!(format_distance(10.0), "10km away");
        assert_eq!(format_distance(845.4), "845km away");
    }
}
