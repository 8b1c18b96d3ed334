use claims::{assert_ge, assert_le, assert_lt};
use flight_paths::{EARTH_RADIUS_KM, GeoPoint, Sphere, haversine_distance, haversine_distance_lon_lat};
use std::f64::consts::PI;

static CITIES: [(&str, f64, f64); 6] = [
    ("HEL", 24.963, 60.317),
    ("JFK", -73.779, 40.640),
    ("NRT", 140.386, 35.765),
    ("SFO", -122.375, 37.619),
    ("SYD", 151.177, -33.946),
    ("GRU", -46.473, -23.432),
];

fn cities() -> impl Iterator<Item = (&'static str, GeoPoint)> {
    CITIES
        .iter()
        .map(|&(name, lon, lat)| (name, GeoPoint::new(lon, lat)))
}

#[test]
fn zero_distance_to_self() {
    for (name, p) in cities() {
        assert_eq!(haversine_distance(p, p), 0.0, "{name}");
    }
    assert_eq!(haversine_distance_lon_lat(0.0, 0.0, 0.0, 0.0), 0.0);
}

#[test]
fn symmetric() {
    for (a_name, a) in cities() {
        for (b_name, b) in cities() {
            assert_eq!(
                haversine_distance(a, b),
                haversine_distance(b, a),
                "{a_name}-{b_name}"
            );
        }
    }
}

#[test]
fn bounded_by_half_circumference() {
    let max = PI * EARTH_RADIUS_KM + 1e-9;
    for (_, a) in cities() {
        for (_, b) in cities() {
            let d = haversine_distance(a, b);
            assert_ge!(d, 0.0);
            assert_le!(d, max);
        }
    }
}

#[test]
fn quarter_circumference_along_equator() {
    let d = haversine_distance_lon_lat(0.0, 0.0, 90.0, 0.0);
    assert_lt!((d - PI * EARTH_RADIUS_KM / 2.0).abs(), 1e-6);
    assert_lt!((d - 10_018.5).abs(), 0.1);
}

#[test]
fn meridian_distance_uses_mean_latitude() {
    let d = haversine_distance_lon_lat(0.0, 0.0, 0.0, 90.0);
    assert_lt!((d - PI * EARTH_RADIUS_KM / 3.0).abs(), 1e-6);
}

#[test]
fn antipodes_do_not_produce_nan() {
    for (_, p) in cities() {
        let antipode = GeoPoint::new(
            if p.lon > 0.0 { p.lon - 180.0 } else { p.lon + 180.0 },
            -p.lat,
        );
        let d = haversine_distance(p, antipode);
        assert!(!d.is_nan());
        assert_le!(d, PI * EARTH_RADIUS_KM);
    }
}

#[test]
fn lon_lat_variant_is_identical() {
    for (_, a) in cities() {
        for (_, b) in cities() {
            assert_eq!(
                haversine_distance_lon_lat(a.lon, a.lat, b.lon, b.lat),
                haversine_distance(a, b)
            );
        }
    }
}

#[test]
fn custom_sphere_scales_linearly() {
    let earth = Sphere::EARTH;
    let double = Sphere::new(2.0 * EARTH_RADIUS_KM).unwrap();

    for (_, a) in cities() {
        for (_, b) in cities() {
            let expected = 2.0 * earth.haversine_distance(a, b);
            assert!((double.haversine_distance(a, b) - expected).abs() < 1e-6);
        }
    }
}
