use crate::creature::Creature;
use crate::creature::Multiset;

/// Creatures that every surviving hypothesis sends to one side.
///
/// For each certain name, the fewest copies any candidate side holds
/// is a lower bound on what that side really got. Copies we are unsure
/// about in the parent can't back a certainty, so they come off the
/// bound.
pub fn certain_side(
    certain: &[Creature],
    uncertain: &[Creature],
    sides: &[Vec<Creature>],
) -> Vec<Creature> {
    let mut distinct = certain.to_vec();
    distinct.sort();
    distinct.dedup();
    distinct
        .into_iter()
        .flat_map(|name| {
            let least = sides.iter().map(|side| side.count_of(name)).min();
            let known = least.unwrap_or(0).saturating_sub(uncertain.count_of(name));
            std::iter::repeat_n(name, known)
        })
        .collect()
}

/// Once one side is fully known, the other side's share of the parent's
/// certain creatures is forced: whatever certain creatures the known
/// side doesn't account for must have gone the other way.
///
/// Returns false when the known sides contradict the parent.
pub fn inherit(certain: &[Creature], known: &[Creature], other: &mut Vec<Creature>) -> bool {
    if !certain.contains_all(known) {
        return false;
    }
    let rest = certain.without(known);
    if !rest.contains_all(other) {
        return false;
    }
    for &name in rest.iter() {
        if rest.count_of(name) > other.count_of(name) {
            other.push(name);
        }
    }
    other.sort();
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use Creature::*;

    #[test]
    fn agreement_is_certainty() {
        let certain = [Titan, Angel, Gargoyle, Gargoyle, Centaur, Centaur, Ogre, Ogre];
        let sides = vec![
            vec![Titan, Gargoyle, Gargoyle, Centaur],
            vec![Titan, Gargoyle, Centaur, Centaur],
            vec![Angel, Gargoyle, Gargoyle, Centaur],
            vec![Angel, Gargoyle, Centaur, Centaur],
        ];
        assert_eq!(certain_side(&certain, &[], &sides), vec![Gargoyle, Centaur]);
    }

    #[test]
    fn disagreement_is_not() {
        let certain = [Titan, Angel];
        let sides = vec![vec![Titan], vec![Angel]];
        assert!(certain_side(&certain, &[], &sides).is_empty());
        assert!(certain_side(&certain, &[], &[]).is_empty());
    }

    #[test]
    fn uncertain_copies_weaken_the_bound() {
        let certain = [Ogre, Ogre];
        let uncertain = [Ogre];
        let sides = vec![vec![Ogre, Ogre, Troll], vec![Ogre, Ogre, Lion]];
        assert_eq!(certain_side(&certain, &uncertain, &sides), vec![Ogre]);
    }

    #[test]
    fn complement_is_inherited() {
        let certain = [Titan, Gargoyle, Ogre, Ogre, Angel, Centaur];
        let known = [Angel, Centaur];
        let mut other = vec![Ogre];
        assert!(inherit(&certain, &known, &mut other));
        assert_eq!(other, vec![Titan, Gargoyle, Ogre, Ogre]);
    }

    #[test]
    fn contradiction_is_refused() {
        let certain = [Titan, Ogre];
        let mut other = vec![Titan];
        assert!(!inherit(&certain, &[Titan], &mut other));
        assert!(!inherit(&certain, &[Angel], &mut other));
    }
}
