//! Shared terminal utilities.
//!
//! Box drawing for help output.

mod output;

pub use output::*;
