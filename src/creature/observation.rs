use super::creature::Creature;

/// One creature slot in a legion as we believe it to be.
///
/// Equality is by creature only. Two observations of the same type
/// are interchangeable for every multiset operation regardless of
/// how sure we are about them.
#[derive(Debug, Clone, Copy)]
pub struct Observation {
    creature: Creature,
    certain: bool,
    at_split: bool,
}

impl Observation {
    pub const fn new(creature: Creature, certain: bool, at_split: bool) -> Self {
        Self {
            creature,
            certain,
            at_split,
        }
    }
    /// newly revealed: known, and present since the last split
    pub const fn revealed(creature: Creature) -> Self {
        Self::new(creature, true, true)
    }
    /// placeholder produced by a split hypothesis
    pub const fn guess(creature: Creature) -> Self {
        Self::new(creature, false, true)
    }
    /// recruited or acquired after the last split
    pub const fn recruit(creature: Creature) -> Self {
        Self::new(creature, true, false)
    }

    pub const fn creature(&self) -> Creature {
        self.creature
    }
    pub const fn is_certain(&self) -> bool {
        self.certain
    }
    pub const fn at_split(&self) -> bool {
        self.at_split
    }
    pub fn make_certain(&mut self) {
        self.certain = true;
    }
}

impl PartialEq for Observation {
    fn eq(&self, other: &Self) -> bool {
        self.creature == other.creature
    }
}
impl Eq for Observation {}
impl std::hash::Hash for Observation {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.creature.hash(state);
    }
}

/// importance order of the underlying creature
impl Ord for Observation {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.creature.cmp(&other.creature)
    }
}
impl PartialOrd for Observation {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl From<Observation> for Creature {
    fn from(o: Observation) -> Self {
        o.creature
    }
}

impl std::fmt::Display for Observation {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.creature)?;
        if !self.certain {
            write!(f, "?")?;
        }
        if !self.at_split {
            write!(f, "*")?;
        }
        Ok(())
    }
}
