//! Team colors and per-color data storage.
//!
//! ## Color
//!
//! The fixed palette of claimable team colors. There is no ordering
//! invariant beyond display; `ALL` fixes the iteration order.
//!
//! ## ColorMap
//!
//! Dense per-color data storage backed by `Vec` for O(1) access.
//! Supports iteration and indexing by `Color`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// A team color.
///
/// `Default` is `Red`, the fallback attacker label used when a duel starts
/// before any color has been chosen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Purple,
}

impl Color {
    /// Number of team colors.
    pub const COUNT: usize = 6;

    /// All colors in display order.
    pub const ALL: [Color; Color::COUNT] = [
        Color::Red,
        Color::Orange,
        Color::Yellow,
        Color::Green,
        Color::Blue,
        Color::Purple,
    ];

    /// Get the dense index of this color in `ALL`.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Iterate over all colors.
    pub fn all() -> impl Iterator<Item = Color> {
        Color::ALL.into_iter()
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::Red
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Color::Red => "Red",
            Color::Orange => "Orange",
            Color::Yellow => "Yellow",
            Color::Green => "Green",
            Color::Blue => "Blue",
            Color::Purple => "Purple",
        };
        write!(f, "{}", name)
    }
}

/// Per-color data storage with O(1) access.
///
/// Backed by a `Vec<T>` with one entry per color.
/// Use `ColorMap::new()` to create with a factory function,
/// or `ColorMap::with_value()` to initialize all entries to the same value.
///
/// ## Example
///
/// ```
/// use tile_duel::core::{Color, ColorMap};
///
/// let mut counts: ColorMap<u32> = ColorMap::with_value(0);
///
/// counts[Color::Red] += 1;
/// assert_eq!(counts[Color::Red], 1);
/// assert_eq!(counts[Color::Blue], 0);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorMap<T> {
    data: Vec<T>,
}

impl<T> ColorMap<T> {
    /// Create a new ColorMap with values from a factory function.
    ///
    /// The factory receives the `Color` for each entry.
    pub fn new(factory: impl Fn(Color) -> T) -> Self {
        Self {
            data: Color::ALL.into_iter().map(factory).collect(),
        }
    }

    /// Create a new ColorMap with all entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Create a new ColorMap with default values.
    pub fn with_default() -> Self
    where
        T: Default,
    {
        Self::new(|_| T::default())
    }

    /// Get a reference to a color's entry.
    #[must_use]
    pub fn get(&self, color: Color) -> &T {
        &self.data[color.index()]
    }

    /// Get a mutable reference to a color's entry.
    pub fn get_mut(&mut self, color: Color) -> &mut T {
        &mut self.data[color.index()]
    }

    /// Iterate over (Color, &T) pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Color, &T)> {
        Color::ALL.into_iter().zip(self.data.iter())
    }

    /// Iterate over the entry values in display order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    /// Set every entry back to its default.
    pub fn reset(&mut self)
    where
        T: Default,
    {
        for entry in &mut self.data {
            *entry = T::default();
        }
    }
}

impl<T: Default> Default for ColorMap<T> {
    fn default() -> Self {
        Self::with_default()
    }
}

impl<T> Index<Color> for ColorMap<T> {
    type Output = T;

    fn index(&self, color: Color) -> &Self::Output {
        self.get(color)
    }
}

impl<T> IndexMut<Color> for ColorMap<T> {
    fn index_mut(&mut self, color: Color) -> &mut Self::Output {
        self.get_mut(color)
    }
}
