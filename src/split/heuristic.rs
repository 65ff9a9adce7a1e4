use crate::Points;
use crate::creature::Creature;

/// total kill value of a roster
pub fn score(names: &[Creature]) -> Points {
    names.iter().map(Creature::value).sum()
}

/// Pick the most likely splitoff among legal candidates.
///
/// Players are assumed to keep strength on the bigger side: when the
/// splitoff is the larger half we take the highest scoring candidate,
/// otherwise the lowest. Ties go to whichever candidate came first.
pub fn choose(possibles: &[Vec<Creature>], height: usize) -> Option<&[Creature]> {
    let first = possibles.first()?;
    let maximize = 2 * first.len() > height;
    let mut best = first;
    let mut high = score(first);
    for candidate in possibles.iter().skip(1) {
        let points = score(candidate);
        if (maximize && points > high) || (!maximize && points < high) {
            best = candidate;
            high = points;
        }
    }
    Some(best.as_slice())
}
