use bd_cards::*;
use std::collections::VecDeque;

/// Packs waiting in front of one drafter, oldest first.
///
/// Packs pile up when a neighbor picks faster than this drafter. Only the
/// head may be picked from.
#[derive(Debug, Clone, Default, serde::Serialize)]
pub struct Queue(VecDeque<(Round, Pack)>);

impl Queue {
    pub fn head(&self) -> Option<&(Round, Pack)> {
        self.0.front()
    }
    pub fn push(&mut self, round: Round, pack: Pack) {
        self.0.push_back((round, pack));
    }
    pub fn pop(&mut self) -> Option<(Round, Pack)> {
        self.0.pop_front()
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn iter(&self) -> impl Iterator<Item = &(Round, Pack)> {
        self.0.iter()
    }
    /// Cards across every queued pack.
    pub fn cards(&self) -> usize {
        self.0.iter().map(|(_, p)| p.len()).sum()
    }
}
