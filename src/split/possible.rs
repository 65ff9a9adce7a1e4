use crate::INITIAL_SPLIT;
use crate::MAX_HEIGHT;
use crate::PredictError;
use crate::Result;
use crate::combos;
use crate::creature::Creature;
use crate::creature::Multiset;
use crate::legion::Legion;

/// Every split-off roster consistent with what is already known.
///
/// `known_split` always rides along with the splitoffs, and the rest
/// of the split side is drawn from creatures not already pinned to
/// either side. An 8-high legion is a starting legion and must split
/// 4-4 with exactly one lord going each way.
pub fn splits(
    legion: &Legion,
    size: usize,
    known_keep: &[Creature],
    known_split: &[Creature],
) -> Result<Vec<Vec<Creature>>> {
    let all = legion.creatures().names();
    let height = all.len();
    if known_split.len() > size {
        return Err(PredictError::IllegalSplit(format!(
            "{} has {} known splitoffs but splits off {}",
            legion.label(),
            known_split.len(),
            size
        )));
    }
    if height > MAX_HEIGHT {
        return Err(PredictError::Height(format!(
            "{} is {} high at split",
            legion.label(),
            height
        )));
    }
    if height == MAX_HEIGHT {
        if size != INITIAL_SPLIT {
            return Err(PredictError::IllegalSplit(format!(
                "{} must split {} from {}",
                legion.label(),
                INITIAL_SPLIT,
                MAX_HEIGHT
            )));
        }
        for lord in [Creature::Titan, Creature::Angel] {
            if !all.contains(&lord) {
                return Err(PredictError::IllegalSplit(format!(
                    "no {} in {} high {}",
                    lord,
                    MAX_HEIGHT,
                    legion.label()
                )));
            }
        }
    }
    let known = [known_split, known_keep].concat();
    if !legion.certain().contains_all(&known) {
        return Err(PredictError::Certainty(format!(
            "{} pins uncertain creatures to a side",
            legion.label()
        )));
    }
    let unknowns = all.without(&known);
    let picks = size - known_split.len();
    Ok(combos::combinations(&unknowns, picks)
        .into_iter()
        .map(|combo| {
            let mut splitoff = [known_split, combo.as_slice()].concat();
            splitoff.sort();
            splitoff
        })
        .filter(|splitoff| height != MAX_HEIGHT || is_initial_splitoff(splitoff))
        .collect())
}

/// four creatures with exactly one of Titan and Angel
pub fn is_initial_splitoff(names: &[Creature]) -> bool {
    names.len() == INITIAL_SPLIT && names.iter().filter(|c| c.is_lord()).count() == 1
}
