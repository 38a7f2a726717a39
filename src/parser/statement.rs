//! Statement dispatch and the per-family staging records.

use crate::fix::{Date, Fix, Mode, Quality, Time};

use super::{Config, term};

/// Write-ahead storage for the sentence currently being decoded.
///
/// One variant per supported statement family, holding only that
/// family's fields, so an in-progress or corrupted sentence never
/// touches committed data. Reset on every start delimiter.
#[derive(Debug, Default)]
pub(crate) enum Stage {
    /// No decoder attached: before dispatch, or an unsupported or
    /// disabled identifier.
    #[default]
    Ignored,
    Gga(Gga),
    Gsa(Gsa),
    Gsv(Gsv),
    Rmc(Rmc),
}

impl Stage {
    /// Select the decoder for a talker+statement identifier.
    ///
    /// Identifiers are five or six characters, dispatched on their
    /// trailing statement code so any talker reaches the same
    /// decoder. Returns `None` for identifiers no decoder accepts.
    pub(crate) fn dispatch(ident: &str, config: &Config) -> Option<Self> {
        if !matches!(ident.len(), 5 | 6) {
            return None;
        }

        match ident.get(ident.len() - 3..)? {
            "GGA" if config.gga => Some(Stage::Gga(Gga::default())),
            "GSA" if config.gsa => Some(Stage::Gsa(Gsa::default())),
            "GSV" if config.gsv => Some(Stage::Gsv(Gsv::default())),
            "RMC" if config.rmc => Some(Stage::Rmc(Rmc::default())),
            _ => None,
        }
    }

    /// Apply one finalized term to the staged record.
    pub(crate) fn term(&mut self, index: u8, text: &str) {
        match self {
            Stage::Ignored => {}
            Stage::Gga(gga) => gga.term(index, text),
            Stage::Gsa(gsa) => gsa.term(index, text),
            Stage::Gsv(gsv) => gsv.term(index, text),
            Stage::Rmc(rmc) => rmc.term(index, text),
        }
    }

    /// Copy the staged family into the committed record, as one unit.
    ///
    /// Returns whether anything was committed.
    pub(crate) fn commit(&self, fix: &mut Fix) -> bool {
        match self {
            Stage::Ignored => return false,
            Stage::Gga(gga) => {
                fix.latitude = gga.latitude;
                fix.longitude = gga.longitude;
                fix.altitude = gga.altitude;
                fix.quality = gga.quality;
                fix.satellites_in_use = gga.satellites_in_use;
                fix.time = gga.time;
            }
            Stage::Gsa(gsa) => {
                fix.pdop = gsa.pdop;
                fix.hdop = gsa.hdop;
                fix.vdop = gsa.vdop;
                fix.mode = gsa.mode;
                fix.satellite_ids = gsa.satellite_ids;
            }
            Stage::Gsv(gsv) => {
                fix.satellites_in_view = gsv.satellites_in_view;
            }
            Stage::Rmc(rmc) => {
                fix.valid = rmc.valid;
                fix.speed = rmc.speed;
                fix.course = rmc.course;
                fix.variation = rmc.variation;
                fix.date = rmc.date;
                fix.time = rmc.time;
            }
        }

        true
    }
}

/// Staged fields of a position-fix statement.
#[derive(Debug, Default)]
pub(crate) struct Gga {
    latitude: f64,
    longitude: f64,
    altitude: f64,
    quality: Quality,
    satellites_in_use: u8,
    time: Time,
}

impl Gga {
    fn term(&mut self, index: u8, text: &str) {
        match index {
            1 => self.time = term::time(text),
            2 => self.latitude = term::coordinate(text),
            3 => self.latitude *= term::sign(text),
            4 => self.longitude = term::coordinate(text),
            5 => self.longitude *= term::sign(text),
            6 => self.quality = Quality::from(term::integer(text)),
            7 => self.satellites_in_use = term::integer(text),
            9 => self.altitude = term::number(text),
            _ => {}
        }
    }
}

/// Staged fields of an active-satellites statement.
#[derive(Debug, Default)]
pub(crate) struct Gsa {
    pdop: f64,
    hdop: f64,
    vdop: f64,
    mode: Mode,
    satellite_ids: [u8; 12],
}

impl Gsa {
    fn term(&mut self, index: u8, text: &str) {
        match index {
            2 => self.mode = Mode::from(term::integer(text)),
            3..=14 => self.satellite_ids[index as usize - 3] = term::integer(text),
            15 => self.pdop = term::number(text),
            16 => self.hdop = term::number(text),
            17 => self.vdop = term::number(text),
            _ => {}
        }
    }
}

/// Staged fields of a satellites-in-view statement.
#[derive(Debug, Default)]
pub(crate) struct Gsv {
    satellites_in_view: u8,
}

impl Gsv {
    fn term(&mut self, index: u8, text: &str) {
        if index == 3 {
            self.satellites_in_view = term::integer(text);
        }
    }
}

/// Staged fields of a recommended-minimum statement.
#[derive(Debug, Default)]
pub(crate) struct Rmc {
    valid: bool,
    speed: f64,
    course: f64,
    variation: f64,
    date: Date,
    time: Time,
}

impl Rmc {
    fn term(&mut self, index: u8, text: &str) {
        match index {
            1 => self.time = term::time(text),
            2 => self.valid = term::status(text),
            7 => self.speed = term::number(text),
            8 => self.course = term::number(text),
            9 => self.date = term::date(text),
            10 => self.variation = term::number(text),
            11 => self.variation *= term::sign(text),
            _ => {}
        }
    }
}
