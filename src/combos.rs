/// Iterates every k-element selection of positions in a slice.
///
/// Positions are packed into a u64 and stepped with the next-bit-permutation
/// trick, so enumeration order is deterministic: ascending by the integer
/// value of the selection mask. Selections are by position, so duplicate
/// items yield duplicate selections; see [`combinations`] for the
/// deduplicated multiset view.
pub struct Combinations<'a, T> {
    items: &'a [T],
    next: u64,
    limit: u64,
}

impl<'a, T> Combinations<'a, T> {
    pub fn new(items: &'a [T], k: usize) -> Self {
        debug_assert!(items.len() < 64);
        let limit = 1u64 << items.len();
        let next = if k > items.len() {
            limit
        } else {
            (1u64 << k) - 1
        };
        Self { items, next, limit }
    }

    fn permute(&self) -> u64 {
        let x = self.next;
        let a = x | (x - 1);
        let b = a + 1;
        let c = !a;
        let d = c & b;
        let e = d - 1;
        let f = 1 + x.trailing_zeros();
        let g = e >> f;
        b | g
    }

    fn exhausted(&self) -> bool {
        self.next >= self.limit
    }

    fn advance(&mut self) {
        self.next = match self.next {
            0 => self.limit,
            _ => self.permute(),
        }
    }
}

impl<T: Clone> Iterator for Combinations<'_, T> {
    type Item = Vec<T>;
    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted() {
            None
        } else {
            let mask = self.next;
            let selection = self
                .items
                .iter()
                .enumerate()
                .filter(|(i, _)| mask >> i & 1 == 1)
                .map(|(_, item)| item.clone())
                .collect();
            self.advance();
            Some(selection)
        }
    }
}

/// Every distinct k-element sub-multiset of `items`, in first-found order.
///
/// Empty when `k` exceeds the number of items. Choosing zero yields a
/// single empty selection.
pub fn combinations<T: Clone + Ord>(items: &[T], k: usize) -> Vec<Vec<T>> {
    let mut distinct: Vec<Vec<T>> = Vec::new();
    for mut selection in Combinations::new(items, k) {
        selection.sort();
        if !distinct.contains(&selection) {
            distinct.push(selection);
        }
    }
    distinct
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::creature::Creature;
    use crate::creature::Creature::*;
    use rand::Rng;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn five_choose_three() {
        let items = [0, 1, 2, 3, 4];
        let mut iter = Combinations::new(&items, 3);
        assert_eq!(iter.next(), Some(vec![0, 1, 2]));
        assert_eq!(iter.next(), Some(vec![0, 1, 3]));
        assert_eq!(iter.next(), Some(vec![0, 2, 3]));
        assert_eq!(iter.next(), Some(vec![1, 2, 3]));
        assert_eq!(iter.next(), Some(vec![0, 1, 4]));
        assert_eq!(iter.count(), 5);
    }

    #[test]
    fn eight_choose_four() {
        let items = [0u8; 8];
        assert_eq!(Combinations::new(&items, 4).count(), 70);
    }

    #[test]
    fn edges() {
        let items = [Ogre, Troll];
        assert_eq!(combinations(&items, 0), vec![Vec::<Creature>::new()]);
        assert_eq!(combinations(&items, 2), vec![vec![Troll, Ogre]]);
        assert!(combinations(&items, 3).is_empty());
        assert_eq!(combinations::<Creature>(&[], 0).len(), 1);
    }

    #[test]
    fn duplicates_collapse() {
        let items = [Centaur, Centaur, Ogre, Ogre];
        assert_eq!(
            combinations(&items, 2),
            vec![
                vec![Centaur, Centaur],
                vec![Centaur, Ogre],
                vec![Ogre, Ogre],
            ]
        );
    }

    /// brute force over every subset of positions
    fn reference(items: &[Creature], k: usize) -> Vec<Vec<Creature>> {
        let mut distinct = Vec::new();
        for mask in 0u32..(1 << items.len()) {
            if mask.count_ones() as usize != k {
                continue;
            }
            let mut pick = (0..items.len())
                .filter(|i| mask >> i & 1 == 1)
                .map(|i| items[i])
                .collect::<Vec<_>>();
            pick.sort();
            if !distinct.contains(&pick) {
                distinct.push(pick);
            }
        }
        distinct.sort();
        distinct
    }

    #[test]
    fn matches_brute_force() {
        let alphabet = [Titan, Angel, Gargoyle, Centaur, Ogre, Troll];
        let mut rng = SmallRng::seed_from_u64(0xC010_55u64);
        for _ in 0..200 {
            let n = rng.random_range(0..=8);
            let k = rng.random_range(0..=n + 1);
            let mut items = (0..n)
                .map(|_| alphabet[rng.random_range(0..alphabet.len())])
                .collect::<Vec<_>>();
            items.sort();
            let mut found = combinations(&items, k);
            found.sort();
            assert_eq!(found, reference(&items, k));
        }
    }
}
