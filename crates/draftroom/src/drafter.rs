use super::*;
use bd_cards::*;
use bd_core::*;
use std::collections::VecDeque;

/// One seat at the draft table, human or automated.
#[derive(Debug, Clone, serde::Serialize)]
pub struct Drafter {
    id: ID<Self>,
    automated: bool,
    queue: Queue,
    /// Unopened packs for the rounds after the current one.
    #[serde(skip)]
    reserve: VecDeque<Pack>,
    picks: Vec<Card>,
    counts: [Ordinal; ROUNDS],
}

impl Drafter {
    pub fn new(id: ID<Self>, automated: bool) -> Self {
        Self {
            id,
            automated,
            queue: Queue::default(),
            reserve: VecDeque::new(),
            picks: Vec::new(),
            counts: [0; ROUNDS],
        }
    }
    pub fn is_automated(&self) -> bool {
        self.automated
    }
    pub fn queue(&self) -> &Queue {
        &self.queue
    }
    /// Cards taken so far, in pick order.
    pub fn picks(&self) -> &[Card] {
        &self.picks
    }
    /// Picks made in a round.
    pub fn count(&self, round: Round) -> Ordinal {
        self.counts[round.index()]
    }
    pub fn reserve(&self) -> usize {
        self.reserve.len()
    }
}

/// Mutations reserved for the Draft aggregate.
impl Drafter {
    pub(crate) fn queue_mut(&mut self) -> &mut Queue {
        &mut self.queue
    }
    pub(crate) fn stock(&mut self, packs: Vec<Pack>) {
        self.reserve = packs.into();
    }
    /// Next unopened pack, if any remain.
    pub(crate) fn open(&mut self) -> Option<Pack> {
        self.reserve.pop_front()
    }
    /// Records a taken card and returns its ordinal within the round.
    pub(crate) fn take(&mut self, round: Round, card: Card) -> Ordinal {
        self.picks.push(card);
        self.counts[round.index()] += 1;
        self.counts[round.index()]
    }
}

impl Unique for Drafter {
    fn id(&self) -> ID<Self> {
        self.id
    }
}
