//! The committed fix record and its supporting types.

/// Quality of the position solution reported by a fix statement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Quality {
    /// No usable solution.
    #[default]
    Invalid,
    /// Standalone satellite solution.
    Gps,
    /// Differentially corrected solution.
    Dgps,
    /// Precise positioning service solution.
    Pps,
}

impl From<u8> for Quality {
    fn from(value: u8) -> Self {
        match value {
            1 => Quality::Gps,
            2 => Quality::Dgps,
            3 => Quality::Pps,
            _ => Quality::Invalid,
        }
    }
}

/// Solution mode reported by an active-satellites statement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// No solution.
    #[default]
    None,
    /// Horizontal solution only.
    Fix2d,
    /// Full three-dimensional solution.
    Fix3d,
}

impl From<u8> for Mode {
    fn from(value: u8) -> Self {
        match value {
            2 => Mode::Fix2d,
            3 => Mode::Fix3d,
            _ => Mode::None,
        }
    }
}

/// A time of day, UTC.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Time {
    pub hours: u8,
    pub minutes: u8,
    pub seconds: u8,
}

/// A calendar date with a two-digit year.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Date {
    pub day: u8,
    pub month: u8,
    pub year: u8,
}

/// The last validated data for each statement family.
///
/// Fields are grouped by the statement that carries them, and a field
/// only ever changes together with the rest of its group, when a
/// sentence of that family passes its checksum. Between commits the
/// record is stable: a failed or foreign sentence leaves every field
/// untouched.
///
/// All fields start at zero or their invalid marker, so a record read
/// before the first commit reports no fix.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Fix {
    /// Latitude in decimal degrees, south negative.
    pub latitude: f64,
    /// Longitude in decimal degrees, west negative.
    pub longitude: f64,
    /// Altitude above mean sea level, in metres.
    pub altitude: f64,
    /// Quality of the position solution.
    pub quality: Quality,
    /// Number of satellites used in the solution.
    pub satellites_in_use: u8,
    /// Time of day of the fix, UTC.
    pub time: Time,

    /// Position dilution of precision.
    pub pdop: f64,
    /// Horizontal dilution of precision.
    pub hdop: f64,
    /// Vertical dilution of precision.
    pub vdop: f64,
    /// Solution mode.
    pub mode: Mode,
    /// Identifiers of the satellites used in the solution. Unused
    /// slots hold zero.
    pub satellite_ids: [u8; 12],

    /// Number of satellites in view.
    pub satellites_in_view: u8,

    /// Whether the receiver reports its data as valid.
    pub valid: bool,
    /// Speed over ground, in knots.
    pub speed: f64,
    /// Course over ground, in degrees from true north.
    pub course: f64,
    /// Magnetic variation, in degrees, west negative.
    pub variation: f64,
    /// Date of the fix.
    pub date: Date,
}
