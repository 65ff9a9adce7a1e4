use super::certainty;
use super::heuristic;
use super::possible;
use crate::PredictError;
use crate::Result;
use crate::creature::Creature;
use crate::creature::Multiset;
use crate::creature::Observation;
use crate::legion::Legion;

/// One split decision: the predicted at-split rosters of both children.
///
/// Pure function of the parent's current roster, the recorded split
/// size, and whatever the children already prove about their sides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prediction {
    keep: Vec<Observation>,
    split: Vec<Observation>,
}

impl Prediction {
    pub fn keep(&self) -> &[Observation] {
        &self.keep
    }
    pub fn split(&self) -> &[Observation] {
        &self.split
    }

    pub fn compute(
        legion: &Legion,
        size: usize,
        known_keep: &[Creature],
        known_split: &[Creature],
    ) -> Result<Self> {
        let all = legion.creatures().names();
        let certain = legion.certain();
        let uncertain = all.without(&certain);

        let possibles = possible::splits(legion, size, known_keep, known_split)?;
        let mut chosen = heuristic::choose(&possibles, all.len())
            .ok_or_else(|| {
                PredictError::IllegalSplit(format!(
                    "no legal way to split {} off {}",
                    size,
                    legion.label()
                ))
            })?
            .to_vec();
        let keeps = possibles
            .iter()
            .map(|splitoff| all.without(splitoff))
            .collect::<Vec<_>>();

        let mut known_keep =
            known_keep.union_max(&certainty::certain_side(&certain, &uncertain, &keeps));
        let mut known_split =
            known_split.union_max(&certainty::certain_side(&certain, &uncertain, &possibles));
        let consistent = if known_split.len() == size {
            certainty::inherit(&certain, &known_split, &mut known_keep)
        } else if known_keep.len() == all.len() - size {
            certainty::inherit(&certain, &known_keep, &mut known_split)
        } else {
            true
        };
        if !consistent {
            return Err(PredictError::Certainty(format!(
                "known sides of {} disagree with its certain creatures",
                legion.label()
            )));
        }
        log::debug!(
            "{:<32}{:<32}",
            format!("split {} off", size),
            legion.to_string()
        );
        log::trace!("{:<32}{:?}", "chosen splitoff", chosen);

        let mut keep = Vec::with_capacity(all.len() - size);
        let mut split = Vec::with_capacity(size);
        for name in all {
            let mut guess = Observation::guess(name);
            if take(&mut chosen, name) {
                if take(&mut known_split, name) {
                    guess.make_certain();
                }
                split.push(guess);
            } else {
                if take(&mut known_keep, name) {
                    guess.make_certain();
                }
                keep.push(guess);
            }
        }
        Ok(Self { keep, split })
    }
}

/// remove one `name` from `names` if present
fn take(names: &mut Vec<Creature>, name: Creature) -> bool {
    match names.iter().position(|&c| c == name) {
        Some(i) => {
            names.remove(i);
            true
        }
        None => false,
    }
}

impl std::fmt::Display for Prediction {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let side = |list: &[Observation]| {
            list.iter()
                .map(|o| o.to_string())
                .collect::<Vec<_>>()
                .join(" ")
        };
        write!(f, "[{}] | [{}]", side(&self.keep), side(&self.split))
    }
}
