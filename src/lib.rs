#![no_std]

//! An incremental decoder for the NMEA 0183 sentences emitted by GPS
//! receivers.
//!
//! Pelorus consumes raw bytes as they arrive from a serial-style
//! transport, in whatever chunking the transport produces, and keeps
//! a [`Fix`] record of the last validated data per sentence family.
//! Sentences are recognized, split into terms, and checksummed one
//! byte at a time through a fixed amount of state: no allocation, no
//! blocking, no assumptions about framing beyond the sentence grammar
//! itself. Corrupted or foreign input is dropped silently and the
//! decoder resynchronizes on the next sentence start.
//!
//! ```
//! use pelorus::Parser;
//!
//! let mut parser = Parser::new();
//!
//! // Chunks split anywhere; a sentence may span many of them.
//! parser.feed(b"$GPRMC,123519,A,4807.038,N,01131.000,E,");
//! if parser.feed(b"022.4,084.4,230394,003.1,W*6A\r\n") {
//!     let fix = parser.fix();
//!     assert!(fix.valid);
//! }
//! ```
//!
//! The four statement families decoded are position fixes (`GGA`),
//! active satellites (`GSA`), satellites in view (`GSV`), and the
//! recommended minimum (`RMC`). The [`course`] and [`speed`] modules
//! derive travel figures from committed data.
//!
//! ## Cargo Features
//!
//! The following crate feature flags are available:
//!
//! - `std`: enable the reader-based feeding helper (default).
//! - `defmt`: derive `defmt::Format` on the public record types.

pub mod course;
pub mod fix;
pub mod parser;
#[cfg(feature = "std")]
pub mod reader;
pub mod speed;

pub use fix::{Date, Fix, Mode, Quality, Time};
pub use parser::{Config, Counters, Parser};
pub use speed::SpeedUnit;
