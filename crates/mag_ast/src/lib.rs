//! AST definitions for the Mag language.
//!
//! This crate holds the [`SyntaxKind`] enumeration shared by the scanner and
//! parser, the arena-allocated node types, the token flag set, and the
//! projection of parsed trees into ESTree-shaped JSON.

pub mod estree;
pub mod node;
pub mod syntax_kind;
pub mod types;

pub use estree::{expression_to_estree, program_to_estree, statement_to_estree};
pub use node::*;
pub use syntax_kind::SyntaxKind;
pub use types::TokenFlags;
