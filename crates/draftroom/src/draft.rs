use super::*;
use bd_cards::*;
use bd_core::*;
use std::collections::HashMap;

/// Lifecycle of a draft. Moves forward only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[default]
    Pending,
    Active,
    Complete,
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::Active => write!(f, "active"),
            Self::Complete => write!(f, "complete"),
        }
    }
}

/// Round changes caused by a start or a pick.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Progress {
    /// Rounds opened, in order. More than one when later packs were empty.
    pub advanced: Vec<Round>,
    pub completed: bool,
}

/// Everything a single pick changed.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub pick: Pick,
    /// Neighbor who received the residual pack, if any cards were left.
    pub passed: Option<ID<Drafter>>,
    pub progress: Progress,
}

/// Draft aggregate. Functional core of a session: synchronous, no I/O.
///
/// Rounds advance in lockstep. All packs are dealt at start; each drafter
/// opens the round-1 pack and holds the rest in reserve. When every queue
/// is empty the next round opens for everybody at once, and after the last
/// round the draft is complete.
#[derive(Debug, Clone, serde::Serialize)]
pub struct Draft {
    id: ID<Self>,
    status: Status,
    round: Round,
    capacity: usize,
    seating: Seating<ID<Drafter>>,
    drafters: Vec<Drafter>,
}

impl Draft {
    pub fn new(id: ID<Self>, capacity: usize) -> Self {
        Self {
            id,
            status: Status::Pending,
            round: Round::First,
            capacity,
            seating: Seating::default(),
            drafters: Vec::new(),
        }
    }
    pub fn status(&self) -> Status {
        self.status
    }
    pub fn round(&self) -> Round {
        self.round
    }
    pub fn capacity(&self) -> usize {
        self.capacity
    }
    pub fn seating(&self) -> &Seating<ID<Drafter>> {
        &self.seating
    }
    /// Drafters in join order before start, seating order after.
    pub fn drafters(&self) -> &[Drafter] {
        &self.drafters
    }
    pub fn drafter(&self, who: ID<Drafter>) -> Option<&Drafter> {
        self.drafters.iter().find(|d| d.id() == who)
    }
    pub fn is_complete(&self) -> bool {
        self.status == Status::Complete
    }
    /// Head pack of every automated drafter holding one.
    pub fn automated_heads(&self) -> Vec<(ID<Drafter>, ID<Pack>)> {
        self.drafters
            .iter()
            .filter(|d| d.is_automated())
            .filter_map(|d| d.queue().head().map(|(_, p)| (d.id(), p.id())))
            .collect()
    }
    /// Cards circulating in the current round.
    pub fn remaining(&self) -> usize {
        self.drafters
            .iter()
            .map(|d| d.queue().cards())
            .sum::<usize>()
    }
}

impl Draft {
    /// Seats a participant. Ok(false) if already seated.
    pub fn join(&mut self, who: ID<Drafter>, automated: bool) -> Result<bool, DraftError> {
        if self.status != Status::Pending {
            return Err(DraftError::DraftNotPending);
        }
        if self.drafter(who).is_some() {
            return Ok(false);
        }
        if self.drafters.len() >= self.capacity {
            return Err(DraftError::DraftFull);
        }
        self.drafters.push(Drafter::new(who, automated));
        Ok(true)
    }
    /// Re-attaches a participant. Known drafters are welcome at any status;
    /// unknown ones are joined as humans while the draft is pending.
    /// Ok(true) if this seated somebody new.
    pub fn reconnect(&mut self, who: ID<Drafter>) -> Result<bool, DraftError> {
        match (self.drafter(who), self.status) {
            (Some(_), _) => Ok(false),
            (None, Status::Pending) => self.join(who, false),
            (None, _) => Err(DraftError::ParticipantNotFound),
        }
    }
    /// Fixes the seating and deals packs, one per round per drafter.
    pub fn start(
        &mut self,
        seating: Vec<ID<Drafter>>,
        mut packs: HashMap<ID<Drafter>, Vec<Pack>>,
    ) -> Result<Progress, DraftError> {
        if self.status != Status::Pending {
            return Err(DraftError::DraftNotPending);
        }
        if self.drafters.len() < MIN_DRAFTERS {
            return Err(DraftError::InsufficientParticipants);
        }
        let joined = self.drafters.iter().map(Drafter::id).collect::<Vec<_>>();
        let seating = Seating::from(seating);
        if !seating.is_permutation_of(&joined) {
            return Err(DraftError::SeatingMismatch);
        }
        if joined
            .iter()
            .any(|d| packs.get(d).map(Vec::len) != Some(PACKS_PER_DRAFTER))
        {
            return Err(DraftError::MissingPacks);
        }
        self.drafters.sort_by_key(|d| seating.seat(&d.id()));
        for drafter in self.drafters.iter_mut() {
            let dealt = packs.remove(&drafter.id()).unwrap_or_default();
            drafter.stock(dealt);
            if let Some(pack) = drafter.open().filter(|p| !p.is_empty()) {
                drafter.queue_mut().push(Round::First, pack);
            }
        }
        self.seating = seating;
        self.round = Round::First;
        self.status = Status::Active;
        Ok(self.settle())
    }
    /// Takes `card` from the head of `who`'s queue and passes the rest on.
    pub fn pick(&mut self, who: ID<Drafter>, card: &str) -> Result<Transition, DraftError> {
        if self.status != Status::Active {
            return Err(DraftError::DraftNotActive);
        }
        let index = self.index(who).ok_or(DraftError::ParticipantNotFound)?;
        let (round, pack) = self.drafters[index]
            .queue()
            .head()
            .ok_or(DraftError::NoPackAvailable)?;
        let round = *round;
        let taken = pack.find(card).cloned().ok_or(DraftError::CardNotInPack)?;
        let drafter = &mut self.drafters[index];
        let (_, pack) = drafter.queue_mut().pop().expect("head checked above");
        let before = pack.len();
        let residual = pack.remove(taken.id());
        assert!(
            residual.len() + 1 == before,
            "pack {} lost {} cards on one pick",
            residual.id(),
            before - residual.len()
        );
        let ordinal = drafter.take(round, taken.clone());
        let pick = Pick::new(self.id, who, taken, round, ordinal);
        let passed = match residual.is_empty() {
            true => None,
            false => Some(self.pass(who, round, residual)),
        };
        let progress = self.settle();
        Ok(Transition {
            pick,
            passed,
            progress,
        })
    }
}

impl Draft {
    fn index(&self, who: ID<Drafter>) -> Option<usize> {
        self.drafters.iter().position(|d| d.id() == who)
    }
    fn pass(&mut self, from: ID<Drafter>, round: Round, pack: Pack) -> ID<Drafter> {
        let to = *self
            .seating
            .neighbor(&from, round.direction())
            .expect("drafters are seated");
        let index = self.index(to).expect("seated drafters are participants");
        self.drafters[index].queue_mut().push(round, pack);
        to
    }
    /// Opens later rounds while every queue is empty; completes after the
    /// last.
    fn settle(&mut self) -> Progress {
        let mut progress = Progress::default();
        while self.drafters.iter().all(|d| d.queue().is_empty()) {
            match self.round.next() {
                None => {
                    self.status = Status::Complete;
                    progress.completed = true;
                    break;
                }
                Some(next) => {
                    self.round = next;
                    progress.advanced.push(next);
                    for drafter in self.drafters.iter_mut() {
                        if let Some(pack) = drafter.open().filter(|p| !p.is_empty()) {
                            drafter.queue_mut().push(next, pack);
                        }
                    }
                }
            }
        }
        progress
    }
}

impl Unique for Draft {
    fn id(&self) -> ID<Self> {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bd_players::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn card(id: &str) -> Card {
        Card::new(id, Rarity::Common, false)
    }
    fn pack(ids: &[&str]) -> Pack {
        Pack::from(ids.iter().map(|id| card(id)).collect::<Vec<_>>())
    }
    fn empty() -> Pack {
        Pack::from(vec![])
    }
    fn seated(n: usize) -> (Draft, Vec<ID<Drafter>>) {
        let mut draft = Draft::new(ID::default(), MAX_DRAFTERS);
        let ids = (0..n).map(|_| ID::default()).collect::<Vec<_>>();
        for id in ids.iter() {
            draft.join(*id, false).unwrap();
        }
        (draft, ids)
    }
    fn head(draft: &Draft, who: ID<Drafter>) -> Option<Vec<String>> {
        draft.drafter(who).and_then(|d| d.queue().head()).map(|(_, p)| {
            p.cards()
                .iter()
                .map(|c| c.id().to_string())
                .collect::<Vec<_>>()
        })
    }

    #[test]
    fn join_is_idempotent() {
        let mut draft = Draft::new(ID::default(), MAX_DRAFTERS);
        let who = ID::default();
        assert_eq!(draft.join(who, false), Ok(true));
        let once = serde_json::to_value(&draft).unwrap();
        assert_eq!(draft.join(who, false), Ok(false));
        let twice = serde_json::to_value(&draft).unwrap();
        assert_eq!(once, twice);
        assert_eq!(draft.drafters().len(), 1);
    }

    #[test]
    fn join_respects_capacity() {
        let mut draft = Draft::new(ID::default(), 2);
        assert!(draft.join(ID::default(), false).is_ok());
        assert!(draft.join(ID::default(), true).is_ok());
        assert_eq!(draft.join(ID::default(), false), Err(DraftError::DraftFull));
    }

    #[test]
    fn start_needs_two() {
        let (mut draft, ids) = seated(1);
        let packs = HashMap::from([(ids[0], vec![empty(), empty(), empty()])]);
        assert_eq!(
            draft.start(ids, packs),
            Err(DraftError::InsufficientParticipants)
        );
        assert_eq!(draft.status(), Status::Pending);
    }

    #[test]
    fn start_validates_seating_and_packs() {
        let (mut draft, ids) = seated(2);
        let deal = |ids: &[ID<Drafter>]| {
            ids.iter()
                .map(|id| (*id, vec![pack(&["x"]), empty(), empty()]))
                .collect::<HashMap<_, _>>()
        };
        let stranger = vec![ids[0], ID::default()];
        assert_eq!(
            draft.start(stranger, deal(&ids)),
            Err(DraftError::SeatingMismatch)
        );
        let short = HashMap::from([(ids[0], vec![empty()]), (ids[1], vec![empty()])]);
        assert_eq!(draft.start(ids.clone(), short), Err(DraftError::MissingPacks));
        assert!(draft.start(ids.clone(), deal(&ids)).is_ok());
        assert_eq!(draft.status(), Status::Active);
        assert_eq!(draft.join(ID::default(), false), Err(DraftError::DraftNotPending));
        assert_eq!(draft.start(ids.clone(), deal(&ids)), Err(DraftError::DraftNotPending));
    }

    #[test]
    fn pick_before_start() {
        let (mut draft, ids) = seated(2);
        assert_eq!(draft.pick(ids[0], "a"), Err(DraftError::DraftNotActive));
    }

    #[test]
    fn two_drafters_pile_up() {
        let (mut draft, ids) = seated(2);
        let (a, b) = (ids[0], ids[1]);
        let packs = HashMap::from([
            (a, vec![pack(&["A", "B"]), empty(), empty()]),
            (b, vec![pack(&["C", "D"]), empty(), empty()]),
        ]);
        draft.start(vec![a, b], packs).unwrap();

        let t = draft.pick(a, "A").unwrap();
        assert_eq!(t.pick.ordinal(), 1);
        assert_eq!(t.passed, Some(b));
        assert_eq!(draft.drafter(b).unwrap().queue().len(), 2);
        assert_eq!(head(&draft, b), Some(vec!["C".into(), "D".into()]));
        assert_eq!(draft.pick(a, "B"), Err(DraftError::NoPackAvailable));

        let t = draft.pick(b, "C").unwrap();
        assert_eq!(t.passed, Some(a));
        assert_eq!(head(&draft, a), Some(vec!["D".into()]));
        assert_eq!(head(&draft, b), Some(vec!["B".into()]));

        let t = draft.pick(b, "B").unwrap();
        assert_eq!(t.pick.ordinal(), 2);
        assert_eq!(t.passed, None);
        assert!(!t.progress.completed);

        let t = draft.pick(a, "D").unwrap();
        assert_eq!(t.passed, None);
        assert!(t.progress.completed);
        assert_eq!(t.progress.advanced, vec![Round::Second, Round::Third]);
        assert!(draft.is_complete());
        assert_eq!(draft.drafter(a).unwrap().picks().len(), 2);
        assert_eq!(draft.drafter(b).unwrap().picks().len(), 2);
        assert_eq!(draft.pick(a, "D"), Err(DraftError::DraftNotActive));
    }

    #[test]
    fn unknown_card_changes_nothing() {
        let (mut draft, ids) = seated(2);
        let packs = ids
            .iter()
            .map(|id| (*id, vec![pack(&["A", "B"]), empty(), empty()]))
            .collect();
        draft.start(ids.clone(), packs).unwrap();
        let before = serde_json::to_value(&draft).unwrap();
        assert_eq!(draft.pick(ids[0], "Z"), Err(DraftError::CardNotInPack));
        assert_eq!(draft.pick(ID::default(), "A"), Err(DraftError::ParticipantNotFound));
        assert_eq!(serde_json::to_value(&draft).unwrap(), before);
        assert_eq!(draft.drafter(ids[0]).unwrap().count(Round::First), 0);
    }

    #[test]
    fn foil_copy_is_taken_as_chosen() {
        let ref mut rng = SmallRng::seed_from_u64(1);
        let (mut draft, ids) = seated(2);
        let printing = Printing::new("c1", "tst", Rarity::Common, true);
        let packs = ids
            .iter()
            .map(|id| {
                let pack = Pack::from(vec![printing.card(), printing.foiled()]);
                (*id, vec![pack, empty(), empty()])
            })
            .collect();
        draft.start(ids.clone(), packs).unwrap();
        let (_, pack) = draft.drafter(ids[0]).unwrap().queue().head().unwrap().clone();
        let chosen = Shark::with_foil(1e6).choose(&pack, rng).unwrap();
        assert!(chosen.foil());
        let t = draft.pick(ids[0], chosen.id()).unwrap();
        assert_eq!(t.pick.card(), &chosen);
        assert_eq!(draft.drafter(ids[0]).unwrap().picks(), &[chosen]);
        let t = draft.pick(ids[1], printing.foiled().id()).unwrap();
        assert!(t.pick.card().foil());
        let passed = draft.drafter(ids[1]).unwrap().queue().head().unwrap();
        assert!(passed.1.cards().iter().all(|c| !c.foil()));
    }

    #[test]
    fn second_round_passes_right() {
        let (mut draft, ids) = seated(3);
        let packs = ids
            .iter()
            .map(|id| (*id, vec![empty(), pack(&["x", "y"]), empty()]))
            .collect();
        let progress = draft.start(ids.clone(), packs).unwrap();
        assert_eq!(progress.advanced, vec![Round::Second]);
        assert_eq!(draft.round(), Round::Second);
        assert_eq!(draft.pick(ids[0], "x").unwrap().passed, Some(ids[2]));
        assert_eq!(draft.pick(ids[1], "y").unwrap().passed, Some(ids[0]));
    }

    #[test]
    fn reconnect_rules() {
        let (mut draft, ids) = seated(2);
        let late = ID::default();
        assert_eq!(draft.reconnect(ids[0]), Ok(false));
        assert_eq!(draft.reconnect(late), Ok(true));
        let packs = [ids[0], ids[1], late]
            .iter()
            .map(|id| (*id, vec![pack(&["a"]), empty(), empty()]))
            .collect();
        draft.start(vec![late, ids[0], ids[1]], packs).unwrap();
        assert_eq!(draft.reconnect(late), Ok(false));
        assert_eq!(
            draft.reconnect(ID::default()),
            Err(DraftError::ParticipantNotFound)
        );
    }

    #[test]
    fn random_drafts_conserve_and_terminate() {
        let ref mut rng = SmallRng::seed_from_u64(7);
        let booster = Booster::from(Library::synthetic("tst", 20).printings().to_vec());
        for n in MIN_DRAFTERS..=MAX_DRAFTERS {
            let (mut draft, ids) = seated(n);
            let packs = booster.distribute(&ids, PACKS_PER_DRAFTER, rng);
            let dealt = packs.values().flatten().map(Pack::len).sum::<usize>();
            let per = packs
                .values()
                .map(|v| v.iter().map(Pack::len).collect::<Vec<_>>())
                .collect::<Vec<_>>();
            draft.start(ids.clone(), packs).unwrap();
            let mut turns = 0;
            while !draft.is_complete() {
                let round = draft.round();
                let (who, pack) = draft
                    .drafters()
                    .iter()
                    .find_map(|d| d.queue().head().map(|(_, p)| (d.id(), p.clone())))
                    .expect("an active draft has a pack somewhere");
                let card = Fish.choose(&pack, rng).unwrap();
                let t = draft.pick(who, card.id()).unwrap();
                assert_eq!(t.pick.round(), round);
                assert_eq!(t.pick.ordinal(), draft.drafter(who).unwrap().count(round));
                let picked = draft
                    .drafters()
                    .iter()
                    .map(|d| d.count(round) as usize)
                    .sum::<usize>();
                let generated = per.iter().map(|v| v[round.index()]).sum::<usize>();
                if t.progress.advanced.is_empty() && !t.progress.completed {
                    assert_eq!(draft.remaining() + picked, generated);
                }
                turns += 1;
                assert!(turns <= dealt);
            }
            let total = draft
                .drafters()
                .iter()
                .map(|d| d.picks().len())
                .sum::<usize>();
            assert_eq!(total, dealt);
        }
    }
}
