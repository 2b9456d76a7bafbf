//! The secret sequence both players memorize.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Lowest and highest symbol a generated sequence contains.
pub const MIN_SYMBOL: u8 = 1;
pub const MAX_SYMBOL: u8 = 4;

/// Append-only list of symbols shared by both players.
///
/// Symbols are kept as raw `u8` so that a corrupted value can be observed
/// and reported by the replay loop instead of being unrepresentable.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sequence {
    symbols: Vec<u8>,
}

impl Sequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap existing symbols as-is, without range checks.
    pub fn from_symbols(symbols: Vec<u8>) -> Self {
        Self { symbols }
    }

    /// Append uniform random symbols until the sequence holds at least
    /// `length` of them. Returns how many were appended.
    pub fn extend_to<R: Rng + ?Sized>(&mut self, length: usize, rng: &mut R) -> usize {
        let before = self.symbols.len();
        while self.symbols.len() < length {
            self.symbols.push(rng.gen_range(MIN_SYMBOL..=MAX_SYMBOL));
        }
        self.symbols.len() - before
    }

    pub fn get(&self, index: usize) -> Option<u8> {
        self.symbols.get(index).copied()
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn symbols(&self) -> &[u8] {
        &self.symbols
    }

    /// True if `self` starts with every symbol of `earlier`.
    pub fn extends(&self, earlier: &Sequence) -> bool {
        self.symbols.starts_with(&earlier.symbols)
    }
}
