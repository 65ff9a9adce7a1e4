use super::creature::Creature;
use super::observation::Observation;

/// A multiset of observations, always kept in importance order.
///
/// New observations land after any equal ones already present, so
/// "first" and "last" among same-named entries are stable across
/// insertions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster(Vec<Observation>);

impl Roster {
    pub fn height(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn iter(&self) -> impl Iterator<Item = &Observation> {
        self.0.iter()
    }
    pub fn count(&self, creature: Creature) -> usize {
        self.iter().filter(|o| o.creature() == creature).count()
    }
    /// every slot is known for sure
    pub fn is_certain(&self) -> bool {
        self.iter().all(Observation::is_certain)
    }

    pub fn names(&self) -> Vec<Creature> {
        self.iter().map(Observation::creature).collect()
    }
    pub fn certain_names(&self) -> Vec<Creature> {
        self.select(|o| o.is_certain())
    }
    /// certain creatures that were here when the legion last split
    pub fn certain_at_split(&self) -> Vec<Creature> {
        self.select(|o| o.is_certain() && o.at_split())
    }
    /// everything acquired since the last split
    pub fn after_split(&self) -> Vec<Observation> {
        self.iter().filter(|o| !o.at_split()).copied().collect()
    }
    fn select(&self, f: impl Fn(&Observation) -> bool) -> Vec<Creature> {
        self.iter()
            .filter(|o| f(*o))
            .map(Observation::creature)
            .collect()
    }

    pub fn insert(&mut self, observation: Observation) {
        let i = self.0.partition_point(|o| o <= &observation);
        self.0.insert(i, observation);
    }
    /// remove the first certain instance of `creature`
    pub fn take_certain(&mut self, creature: Creature) -> Option<Observation> {
        let i = self
            .0
            .iter()
            .position(|o| o.creature() == creature && o.is_certain())?;
        Some(self.0.remove(i))
    }
    /// remove one instance of `creature` present at the last split,
    /// a certain one if there is one
    pub fn take_at_split(&mut self, creature: Creature) -> Option<Observation> {
        let i = self
            .0
            .iter()
            .position(|o| o.creature() == creature && o.at_split() && o.is_certain())
            .or_else(|| {
                self.0
                    .iter()
                    .position(|o| o.creature() == creature && o.at_split())
            })?;
        Some(self.0.remove(i))
    }
    /// discard the least important placeholder guess
    pub fn drop_last_uncertain(&mut self) -> Option<Observation> {
        let i = self.0.iter().rposition(|o| !o.is_certain())?;
        Some(self.0.remove(i))
    }
    /// mark the first uncertain instance of `creature` certain
    pub fn mark_certain(&mut self, creature: Creature) -> bool {
        match self
            .0
            .iter_mut()
            .find(|o| o.creature() == creature && !o.is_certain())
        {
            Some(o) => {
                o.make_certain();
                true
            }
            None => false,
        }
    }
}

impl FromIterator<Observation> for Roster {
    fn from_iter<I: IntoIterator<Item = Observation>>(iter: I) -> Self {
        let mut roster = Self::default();
        iter.into_iter().for_each(|o| roster.insert(o));
        roster
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a Observation;
    type IntoIter = std::slice::Iter<'a, Observation>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl std::fmt::Display for Roster {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let mut first = true;
        for o in self {
            if !first {
                write!(f, " ")?;
            }
            write!(f, "{}", o)?;
            first = false;
        }
        Ok(())
    }
}
