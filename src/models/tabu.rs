//! Tabu memory: move descriptors and FIFO lists.

use std::collections::VecDeque;

/// A move descriptor: the customer that moved and the position it targeted.
///
/// Recorded by the local search operators after an applied move and checked
/// before applying another; a move present in tabu memory is skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    /// Customer index that was moved.
    pub customer: usize,
    /// Target position within the route.
    pub position: usize,
}

impl Move {
    /// Creates a move descriptor.
    pub fn new(customer: usize, position: usize) -> Self {
        Self { customer, position }
    }
}

/// Identifies one of the operators' short-term tabu memories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// Intra-route customer relocation.
    Relocate,
    /// Inter-route customer exchange.
    Exchange,
    /// Intra-route segment reversal.
    TwoOpt,
}

/// FIFO memory of recently applied moves.
///
/// Membership is a linear scan over a short history; eviction removes the
/// oldest entries first.
///
/// # Examples
///
/// ```
/// use vrp_tabu::models::{Move, TabuList};
///
/// let mut tabu = TabuList::new();
/// tabu.push(Move::new(3, 0));
/// tabu.push(Move::new(5, 2));
/// assert!(tabu.contains(&Move::new(3, 0)));
/// tabu.clear(1);
/// assert!(!tabu.contains(&Move::new(3, 0)));
/// assert!(tabu.contains(&Move::new(5, 2)));
/// ```
#[derive(Debug, Clone, Default)]
pub struct TabuList {
    entries: VecDeque<Move>,
}

impl TabuList {
    /// Creates an empty tabu list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of remembered moves.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no moves are remembered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns `true` if the move is currently tabu.
    pub fn contains(&self, mv: &Move) -> bool {
        self.entries.contains(mv)
    }

    /// Remembers a move as the newest entry.
    pub fn push(&mut self, mv: Move) {
        self.entries.push_back(mv);
    }

    /// Evicts oldest entries until the list holds at most `max` moves.
    pub fn clear(&mut self, max: usize) {
        while self.entries.len() > max {
            self.entries.pop_front();
        }
    }

    /// Appends this list's entries (oldest first) to `target`, skipping
    /// moves the target already holds.
    pub fn merge_into(&self, target: &mut TabuList) {
        for mv in &self.entries {
            if !target.contains(mv) {
                target.entries.push_back(*mv);
            }
        }
    }

    /// Iterates the remembered moves, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Move> {
        self.entries.iter()
    }
}
