//! Reader-based feeding.
//!
//! _Requires Cargo feature `std`._

use std::io::{ErrorKind, Read};

use thiserror::Error;

use crate::parser::Parser;

extern crate std;

/// Errors occurring while feeding from a reader.
///
/// Only the transport can fail here; sentence-level problems are
/// absorbed by the parser itself.
#[derive(Debug, Error)]
pub enum Error {
    /// An error from the supplied reader.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Feed a reader to exhaustion through a parser.
///
/// Bytes are pulled through a small stack buffer, so the reader's own
/// chunking is as arbitrary as any other transport's. Returns whether
/// at least one statement committed.
pub fn feed(r: &mut impl Read, parser: &mut Parser) -> Result<bool, Error> {
    let mut buf = [0; 64];
    let mut committed = false;

    loop {
        let n = match r.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        };

        committed |= parser.feed(&buf[..n]);
    }

    Ok(committed)
}
