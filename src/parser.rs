//! The incremental sentence parser.
//!
//! [`Parser`] consumes raw bytes one chunk at a time, in whatever
//! chunking the transport produces, and commits decoded fields into
//! its [`Fix`] record whenever a supported sentence passes its
//! checksum. Everything else (truncation, corruption, unsupported
//! statements, overlong terms) is dropped silently and the parser
//! resynchronizes on the next start delimiter. All state is fixed
//! size; feeding never allocates.

mod check;
mod statement;
mod term;

use crate::fix::Fix;

use check::Checksum;
use statement::Stage;
use term::Term;

/// Statement families the dispatcher will decode.
///
/// Disabled families are still consumed structurally (their checksums
/// are validated, keeping the stream in sync) but run no decoder and
/// never commit. All families are enabled by default.
#[derive(Debug, Clone, Copy)]
pub struct Config {
    /// Decode position-fix statements (`GGA`).
    pub gga: bool,
    /// Decode active-satellites statements (`GSA`).
    pub gsa: bool,
    /// Decode satellites-in-view statements (`GSV`).
    pub gsv: bool,
    /// Decode recommended-minimum statements (`RMC`).
    pub rmc: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            gga: true,
            gsa: true,
            gsv: true,
            rmc: true,
        }
    }
}

/// Diagnostic counts of sentences handled.
///
/// Purely observational; the parser's behaviour does not depend on
/// them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Counters {
    /// Sentences whose checksum comparison completed, valid or not.
    pub sentences: u32,
    /// Sentences dropped on a checksum mismatch.
    pub checksum_failures: u32,
    /// Sentences consumed without a decoder attached.
    pub unsupported: u32,
}

/// Structural position within a sentence.
#[derive(Debug, Clone, Copy)]
enum State {
    /// Waiting for a start delimiter.
    Idle,
    /// Accumulating a comma-delimited term.
    InTerm,
    /// Accumulating the two trailing checksum digits.
    InChecksum { high: Option<u8> },
}

/// An incremental decoder for NMEA 0183 sentences.
///
/// Feed it bytes as they arrive; read the last committed data back
/// through [`fix`](Parser::fix). A parser instance serves one
/// receiver and must not be shared between threads without external
/// serialization; independent instances are fully independent.
#[derive(Debug)]
pub struct Parser {
    fix: Fix,
    config: Config,
    counters: Counters,

    state: State,
    term: Term,
    term_index: u8,
    checksum: Checksum,
    stage: Stage,
}

impl Parser {
    /// An idle parser with every statement family enabled.
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// An idle parser decoding only the configured families.
    pub fn with_config(config: Config) -> Self {
        Self {
            fix: Fix::default(),
            config,
            counters: Counters::default(),
            state: State::Idle,
            term: Term::default(),
            term_index: 0,
            checksum: Checksum::default(),
            stage: Stage::default(),
        }
    }

    /// Consume a chunk of bytes.
    ///
    /// Chunk boundaries are arbitrary: a sentence may span any number
    /// of calls, and one call may carry any number of sentences.
    /// Returns whether at least one statement committed during this
    /// call, as a cue to re-read [`fix`](Parser::fix).
    pub fn feed(&mut self, bytes: &[u8]) -> bool {
        let mut committed = false;

        for &b in bytes {
            committed |= self.advance(b);
        }

        committed
    }

    /// The last committed fix data.
    pub fn fix(&self) -> &Fix {
        &self.fix
    }

    /// Diagnostic counters accumulated since construction.
    pub fn counters(&self) -> Counters {
        self.counters
    }

    /// Apply one byte to the state machine.
    ///
    /// Returns whether this byte completed a sentence that committed.
    fn advance(&mut self, b: u8) -> bool {
        // A start delimiter begins a new sentence from any state,
        // silently dropping one in progress.
        if b == b'$' {
            self.begin();
            return false;
        }

        match self.state {
            State::Idle => false,
            State::InTerm => {
                match b {
                    b',' => {
                        self.end_term();
                        self.checksum.fold(b);
                    }
                    b'*' => {
                        self.end_term();
                        self.state = State::InChecksum { high: None };
                    }
                    _ => {
                        self.checksum.fold(b);
                        self.term.push(b);
                    }
                }

                false
            }
            State::InChecksum { high } => match check::hex_digit(b) {
                Some(digit) => match high {
                    None => {
                        self.state = State::InChecksum { high: Some(digit) };
                        false
                    }
                    Some(high) => {
                        self.state = State::Idle;
                        self.finish(high << 4 | digit)
                    }
                },
                // Anything else here is line-terminator noise.
                None => false,
            },
        }
    }

    /// Reset per-sentence state and enter the first term.
    fn begin(&mut self) {
        self.state = State::InTerm;
        self.term.clear();
        self.term_index = 0;
        self.checksum = Checksum::default();
        self.stage = Stage::default();
    }

    /// Finalize the current term: dispatch on the identifier term,
    /// decode any later one.
    fn end_term(&mut self) {
        if self.term_index == 0 {
            self.stage = match Stage::dispatch(self.term.as_str(), &self.config) {
                Some(stage) => stage,
                None => {
                    self.counters.unsupported += 1;
                    Stage::Ignored
                }
            };
        } else {
            self.stage.term(self.term_index, self.term.as_str());
        }

        self.term.clear();
        self.term_index = self.term_index.saturating_add(1);
    }

    /// Compare checksums and commit or discard the staged record.
    fn finish(&mut self, expected: u8) -> bool {
        self.counters.sentences += 1;

        if expected != self.checksum.value() {
            self.counters.checksum_failures += 1;
            self.stage = Stage::default();
            return false;
        }

        self.stage.commit(&mut self.fix)
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}
