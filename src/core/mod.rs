//! Core engine types: colors, cells, RNG, errors.
//!
//! This module contains the fundamental building blocks shared by every
//! other part of the engine.

pub mod cell;
pub mod color;
pub mod error;
pub mod rng;

pub use cell::{Cell, CellIndex};
pub use color::{Color, ColorMap};
pub use error::{ChoiceCancelled, GameError};
pub use rng::GameRng;
