//! Course computation between two committed coordinates.

use core::f64::consts::PI;

/// Mean Earth radius, in metres.
const EARTH_RADIUS: f64 = 6_371_000.0;

/// Great-circle distance and initial bearing between two coordinates.
///
/// Coordinates are decimal degrees as committed to the fix record,
/// south and west negative. Returns the distance in metres and the
/// initial bearing in degrees from true north, normalized to
/// `[0, 360)`.
pub fn distance_and_bearing(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> (f64, f64) {
    let phi1 = radians(lat1);
    let phi2 = radians(lat2);
    let half_dphi = radians(lat2 - lat1) / 2.0;
    let dlambda = radians(lon2 - lon1);

    let a = libm::sin(half_dphi) * libm::sin(half_dphi)
        + libm::cos(phi1) * libm::cos(phi2) * libm::sin(dlambda / 2.0) * libm::sin(dlambda / 2.0);
    let distance = 2.0 * EARTH_RADIUS * libm::atan2(libm::sqrt(a), libm::sqrt(1.0 - a));

    let y = libm::sin(dlambda) * libm::cos(phi2);
    let x = libm::cos(phi1) * libm::sin(phi2) - libm::sin(phi1) * libm::cos(phi2) * libm::cos(dlambda);

    let bearing = degrees(libm::atan2(y, x));
    let bearing = if bearing < 0.0 { bearing + 360.0 } else { bearing };

    (distance, bearing)
}

fn radians(degrees: f64) -> f64 {
    degrees * PI / 180.0
}

fn degrees(radians: f64) -> f64 {
    radians * 180.0 / PI
}
