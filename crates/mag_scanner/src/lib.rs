//! mag_scanner: Lexer/tokenizer for Mag source code.
//!
//! Converts source text into a stream of tokens, with support for:
//! - Numeric literals in decimal, hex, binary and octal, with `_` separators
//! - String literals with escapes
//! - Regular expression literals (via slash rescanning)
//! - Unicode identifiers

mod char_codes;
mod scanner;

pub use scanner::{Scanner, ScannerState};
