//! Message expansion from typed format arguments.
//!
//! Expansion is two-pass: the arguments are rendered once into a counting
//! sink to learn the exact length, then rendered again into a buffer of
//! exactly that capacity. No intermediate fixed-size buffer exists, so long
//! arguments are never cut off.

use std::fmt::{self, Write};

struct LengthCounter(usize);

impl Write for LengthCounter {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.0 += s.len();
        Ok(())
    }
}

/// Byte length of the rendered arguments.
#[must_use]
pub fn measure(args: fmt::Arguments<'_>) -> usize {
    let mut counter = LengthCounter(0);
    // LengthCounter never fails; an error here can only come from a Display impl.
    let _ = counter.write_fmt(args);
    counter.0
}

/// Renders the arguments into a string allocated once at the measured size.
#[must_use]
pub fn expand(args: fmt::Arguments<'_>) -> String {
    if let Some(literal) = args.as_str() {
        return literal.to_string();
    }
    let mut out = String::with_capacity(measure(args));
    if out.write_fmt(args).is_err() {
        // A Display impl reported failure; keep whatever it produced.
        out.push_str(" <format error>");
    }
    out
}
