//! trefc library
//!
//! Font compiler front end for the `.tref` format: glyph definition parsing,
//! atlas loading and the `compile` / `info` / `extract` operations used by the
//! `trefc` binary.

pub mod compile;
pub mod definitions;
mod error;
pub mod inspect;

pub use compile::{CompileSummary, compile, load_bitmap, load_definitions};
pub use error::{CompilerError, exit_code};
pub use inspect::{describe, extract, load_font};
