//! One side's complete collection of price levels, ordered best price first.

use super::level::PriceLevel;
use super::order::{Price, Quantity, Side};
use std::collections::BTreeMap;

/// Ordered mapping from price to price level for one side of the book.
///
/// Bids iterate in descending price order, asks in ascending order; the best
/// price is always at the near end of the map, so retrieving it costs one
/// tree descent. Only the comparison direction differs between the sides.
#[derive(Debug)]
pub(super) struct Ladder {
    side: Side,
    levels: BTreeMap<Price, PriceLevel>,
}

impl Ladder {
    pub(super) fn new(side: Side) -> Self {
        Self {
            side,
            levels: BTreeMap::new(),
        }
    }

    /// Number of distinct price levels.
    pub(super) fn depth(&self) -> usize {
        self.levels.len()
    }

    /// Best price on this side: highest bid or lowest ask.
    pub(super) fn best_price(&self) -> Option<Price> {
        let entry = match self.side {
            Side::Buy => self.levels.last_key_value(),
            Side::Sell => self.levels.first_key_value(),
        };
        entry.map(|(price, _)| *price)
    }

    /// Best price together with its level, for the matching loop.
    pub(super) fn peek_best_mut(&mut self) -> Option<(Price, &mut PriceLevel)> {
        let entry = match self.side {
            Side::Buy => self.levels.iter_mut().next_back(),
            Side::Sell => self.levels.iter_mut().next(),
        };
        entry.map(|(price, level)| (*price, level))
    }

    /// Level at `price`, created empty if absent.
    pub(super) fn entry_or_create(&mut self, price: Price) -> &mut PriceLevel {
        self.levels.entry(price).or_default()
    }

    /// Level at `price`, if present.
    pub(super) fn level(&self, price: Price) -> Option<&PriceLevel> {
        self.levels.get(&price)
    }

    /// Mutable level at `price`, if present.
    pub(super) fn level_mut(&mut self, price: Price) -> Option<&mut PriceLevel> {
        self.levels.get_mut(&price)
    }

    /// Drop the level at `price`. The level must already be empty; the
    /// ladder never retains an empty level.
    pub(super) fn erase_empty(&mut self, price: Price) {
        if let Some(level) = self.levels.remove(&price) {
            debug_assert!(level.is_empty());
        }
    }

    /// Total resting volume at `price`, zero if no such level.
    pub(super) fn volume_at(&self, price: Price) -> Quantity {
        self.levels.get(&price).map_or(0, PriceLevel::total_volume)
    }

    /// Iterate levels from the best price outward.
    pub(super) fn iter_best_first(&self) -> Box<dyn Iterator<Item = (Price, &PriceLevel)> + '_> {
        match self.side {
            Side::Buy => Box::new(self.levels.iter().rev().map(|(price, level)| (*price, level))),
            Side::Sell => Box::new(self.levels.iter().map(|(price, level)| (*price, level))),
        }
    }
}
