//! Password generation.

pub mod charset;
mod config;
mod generate;

pub use charset::{CharClass, ClassSet};
pub use config::GenerationConfig;
pub use generate::{MAX_LENGTH, MIN_LENGTH, synthesize, synthesize_many};
