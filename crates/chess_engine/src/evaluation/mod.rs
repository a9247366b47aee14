//! Position evaluation
//!
//! Scores are in centipawns from White's point of view: positive favors
//! White, negative favors Black. Only material counts; there are no
//! positional terms.
//!
//! ## Module Organization
//!
//! - `material` - Material balance evaluation

mod material;

pub use material::{evaluate, material_of};
