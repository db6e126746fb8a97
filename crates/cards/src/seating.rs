use super::round::Direction;
use bd_core::Seat;

/// Cyclic seating order around the draft table.
///
/// Fixed once a draft starts. Index 0 sits left of the last seat, so
/// passing left from the last seat wraps to the first.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Seating<T>(Vec<T>);

impl<T> Default for Seating<T> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<T> From<Vec<T>> for Seating<T> {
    fn from(seats: Vec<T>) -> Self {
        Self(seats)
    }
}

impl<T> Seating<T> {
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.0.iter()
    }
    pub fn get(&self, seat: Seat) -> Option<&T> {
        self.0.get(seat)
    }
}

impl<T> Seating<T>
where
    T: PartialEq,
{
    /// Seat index of an occupant.
    pub fn seat(&self, who: &T) -> Option<Seat> {
        self.0.iter().position(|t| t == who)
    }
    /// Occupant who receives a pack passed by `who` in `direction`.
    pub fn neighbor(&self, who: &T, direction: Direction) -> Option<&T> {
        self.seat(who)
            .map(|i| direction.next(i, self.len()))
            .and_then(|j| self.get(j))
    }
    /// True if every occupant appears exactly once and nobody else is seated.
    pub fn is_permutation_of(&self, others: &[T]) -> bool {
        self.len() == others.len()
            && others.iter().all(|o| self.seat(o).is_some())
            && self
                .0
                .iter()
                .enumerate()
                .all(|(i, t)| self.seat(t) == Some(i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neighbor_left_and_right() {
        let seating = Seating::from(vec!["a", "b", "c", "d"]);
        assert_eq!(seating.neighbor(&"a", Direction::Left), Some(&"b"));
        assert_eq!(seating.neighbor(&"d", Direction::Left), Some(&"a"));
        assert_eq!(seating.neighbor(&"a", Direction::Right), Some(&"d"));
        assert_eq!(seating.neighbor(&"c", Direction::Right), Some(&"b"));
    }

    #[test]
    fn neighbor_of_stranger() {
        let seating = Seating::from(vec!["a", "b"]);
        assert_eq!(seating.neighbor(&"z", Direction::Left), None);
    }

    #[test]
    fn permutation_check() {
        let seating = Seating::from(vec!["b", "a", "c"]);
        assert!(seating.is_permutation_of(&["a", "b", "c"]));
        assert!(!seating.is_permutation_of(&["a", "b"]));
        assert!(!seating.is_permutation_of(&["a", "b", "d"]));
        let doubled = Seating::from(vec!["a", "a", "b"]);
        assert!(!doubled.is_permutation_of(&["a", "b", "c"]));
    }
}
