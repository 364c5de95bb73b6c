//! Password synthesis and strength scoring.
//!
//! The core is four pieces: [`pass::charset`] turns enabled character classes
//! into an alphabet, [`pass::synthesize`] draws a password from it (weaving in
//! an optional anchor word), [`strength::evaluate`] scores a password against a
//! fixed weighted rubric, and [`pass::synthesize_many`] produces a batch of
//! independent candidates.
//!
//! Randomness is injected through [`rand::IndexSource`], so every operation is
//! reproducible under a scripted or seeded source.

pub mod error;
pub mod pass;
pub mod presets;
pub mod rand;
pub mod settings;
pub mod strength;

pub use error::GenerateError;
pub use pass::{CharClass, ClassSet, GenerationConfig, synthesize, synthesize_many};
pub use strength::{Criterion, Rating, StrengthReport, evaluate};
