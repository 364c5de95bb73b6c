//! Shared terminal utilities.
//!
//! Box drawing, the strength meter, report rendering and ANSI helpers.

mod output;
mod report;

pub use output::*;
pub use report::*;
