//! Wave Field: the ambient dot-grid hero background
//!
//! A fixed lattice of dots reacts to two inputs each frame: pointer
//! proximity (parallax displacement plus an opacity boost) and any number
//! of expanding circular waves whose signed amplitudes sum at every point.
//! Overlapping crests amplify, crest meeting trough cancels.

pub mod frame;
pub mod state;

pub use frame::{DotSprite, frame};
pub use state::{FieldState, GridPoint, Wave, build_grid};
