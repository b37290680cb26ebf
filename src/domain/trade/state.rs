//! Trade tape state — app-owned, SDK-provided update logic.

use super::{Trade, TAPE_CAPACITY};
use std::collections::VecDeque;

/// Rolling list of recent trades, newest first.
#[derive(Debug, Clone)]
pub struct TradeTape {
    trades: VecDeque<Trade>,
    max_size: usize,
}

impl Default for TradeTape {
    fn default() -> Self {
        Self::new(TAPE_CAPACITY)
    }
}

impl TradeTape {
    pub fn new(max_size: usize) -> Self {
        Self {
            trades: VecDeque::with_capacity(max_size),
            max_size,
        }
    }

    /// Push a new trade, evicting the oldest if at capacity.
    pub fn push(&mut self, trade: Trade) {
        if self.max_size == 0 {
            return;
        }
        if self.trades.len() >= self.max_size {
            self.trades.pop_back();
        }
        self.trades.push_front(trade);
    }

    pub fn trades(&self) -> &VecDeque<Trade> {
        &self.trades
    }

    pub fn latest(&self) -> Option<&Trade> {
        self.trades.front()
    }

    pub fn clear(&mut self) {
        self.trades.clear();
    }

    pub fn len(&self) -> usize {
        self.trades.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trades.is_empty()
    }
}
