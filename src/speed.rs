//! Conversion of the speed over ground committed by
//! recommended-minimum statements.

/// Target units for a speed reported in knots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SpeedUnit {
    /// Kilometres per second.
    KilometresPerSecond,
    /// Kilometres per hour.
    KilometresPerHour,
    /// Metres per second.
    MetresPerSecond,
    /// Metres per minute.
    MetresPerMinute,

    /// Miles per second.
    MilesPerSecond,
    /// Miles per hour.
    MilesPerHour,
    /// Feet per second.
    FeetPerSecond,
    /// Feet per minute.
    FeetPerMinute,

    /// Minutes per kilometre.
    MinutesPerKilometre,
    /// Seconds per kilometre.
    SecondsPerKilometre,
    /// Seconds per hundred metres.
    SecondsPerHundredMetres,
    /// Minutes per mile.
    MinutesPerMile,
    /// Seconds per mile.
    SecondsPerMile,
    /// Seconds per hundred yards.
    SecondsPerHundredYards,

    /// Sea miles per hour.
    SeaMilesPerHour,
}

/// Convert a speed over ground in knots to another unit.
pub fn convert(knots: f64, unit: SpeedUnit) -> f64 {
    let factor = match unit {
        SpeedUnit::KilometresPerSecond => 0.000514,
        SpeedUnit::KilometresPerHour => 1.852,
        SpeedUnit::MetresPerSecond => 0.5144,
        SpeedUnit::MetresPerMinute => 30.87,

        SpeedUnit::MilesPerSecond => 0.0003197,
        SpeedUnit::MilesPerHour => 1.151,
        SpeedUnit::FeetPerSecond => 1.688,
        SpeedUnit::FeetPerMinute => 101.269,

        SpeedUnit::MinutesPerKilometre => 32.4,
        SpeedUnit::SecondsPerKilometre => 1944.0,
        SpeedUnit::SecondsPerHundredMetres => 194.4,
        SpeedUnit::MinutesPerMile => 52.14,
        SpeedUnit::SecondsPerMile => 3128.0,
        SpeedUnit::SecondsPerHundredYards => 177.86,

        SpeedUnit::SeaMilesPerHour => 1.0,
    };

    knots * factor
}
