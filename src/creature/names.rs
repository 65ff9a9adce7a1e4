use super::creature::Creature;

/// Name-level multiset arithmetic over plain creature lists.
///
/// Every operation counts duplicates. Subtraction removes one
/// instance per occurrence, never all instances of a name.
pub trait Multiset {
    fn count_of(&self, creature: Creature) -> usize;
    /// every name in `other` appears here at least as often
    fn contains_all(&self, other: &[Creature]) -> bool;
    /// self minus other, preserving the order of what survives
    fn without(&self, other: &[Creature]) -> Vec<Creature>;
    /// per-name maximum of the two counts
    fn union_max(&self, other: &[Creature]) -> Vec<Creature>;
}

impl Multiset for [Creature] {
    fn count_of(&self, creature: Creature) -> usize {
        self.iter().filter(|&&c| c == creature).count()
    }
    fn contains_all(&self, other: &[Creature]) -> bool {
        other
            .iter()
            .all(|&c| self.count_of(c) >= other.count_of(c))
    }
    fn without(&self, other: &[Creature]) -> Vec<Creature> {
        let mut pending = other.to_vec();
        let mut kept = Vec::with_capacity(self.len());
        for &c in self {
            match pending.iter().position(|&p| p == c) {
                Some(i) => {
                    pending.swap_remove(i);
                }
                None => kept.push(c),
            }
        }
        kept
    }
    fn union_max(&self, other: &[Creature]) -> Vec<Creature> {
        let mut merged = self.to_vec();
        for &c in other {
            if merged.count_of(c) < other.count_of(c) {
                merged.push(c);
            }
        }
        merged.sort();
        merged
    }
}
