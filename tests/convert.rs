use pelorus::SpeedUnit;
use pelorus::course::distance_and_bearing;
use pelorus::speed::convert;

#[test]
fn coincident_points_have_zero_distance() {
    let (distance, _) = distance_and_bearing(48.1173, 11.516667, 48.1173, 11.516667);
    assert!(distance.abs() < 1e-6);
}

#[test]
fn cardinal_bearings() {
    let (_, north) = distance_and_bearing(0.0, 0.0, 1.0, 0.0);
    let (_, east) = distance_and_bearing(0.0, 0.0, 0.0, 1.0);
    let (_, south) = distance_and_bearing(1.0, 0.0, 0.0, 0.0);
    let (_, west) = distance_and_bearing(0.0, 1.0, 0.0, 0.0);

    assert!((north - 0.0).abs() < 1e-6);
    assert!((east - 90.0).abs() < 1e-6);
    assert!((south - 180.0).abs() < 1e-6);
    assert!((west - 270.0).abs() < 1e-6);
}

#[test]
fn one_degree_of_meridian() {
    // One degree of arc over the mean Earth radius.
    let (distance, _) = distance_and_bearing(0.0, 0.0, 1.0, 0.0);
    assert!((distance - 111_194.926).abs() < 1e-1);
}

#[test]
fn speed_conversions_from_knots() {
    let close = |a: f64, b: f64| (a - b).abs() < 1e-9;

    assert!(close(convert(1.0, SpeedUnit::KilometresPerHour), 1.852));
    assert!(close(convert(2.0, SpeedUnit::MetresPerSecond), 1.0288));
    assert!(close(convert(10.0, SpeedUnit::MilesPerHour), 11.51));
    assert!(close(convert(1.0, SpeedUnit::MinutesPerKilometre), 32.4));
    assert!(close(convert(3.5, SpeedUnit::SeaMilesPerHour), 3.5));
    assert!(close(convert(0.0, SpeedUnit::FeetPerSecond), 0.0));
}
