use crate::Marker;
use crate::Turn;
use crate::creature::Creature;
use crate::creature::Observation;
use crate::creature::Roster;

/// What we believe one legion held at one point in its history.
///
/// A node in a split tree. `removed` tracks creatures that left after
/// having been present at the legion's own most recent split, so that
/// the parent's reconstruction of that split stays whole. Both rosters
/// are kept in importance order, so removed creatures render sorted
/// rather than in the order they left.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Legion {
    marker: Marker,
    turn: Turn,
    creatures: Roster,
    removed: Roster,
    split_size: usize,
    split_turn: Option<Turn>,
}

impl Legion {
    pub fn new(marker: impl Into<Marker>, turn: Turn, creatures: Roster) -> Self {
        Self {
            marker: marker.into(),
            turn,
            creatures,
            removed: Roster::default(),
            split_size: 0,
            split_turn: None,
        }
    }

    /// a starting legion, fully known to its owner
    pub fn root(marker: impl Into<Marker>, creatures: &[Creature]) -> Self {
        let roster = creatures.iter().copied().map(Observation::revealed);
        Self::new(marker, 0, roster.collect())
    }

    pub fn marker(&self) -> &str {
        &self.marker
    }
    pub fn turn(&self) -> Turn {
        self.turn
    }
    pub fn creatures(&self) -> &Roster {
        &self.creatures
    }
    pub fn removed(&self) -> &Roster {
        &self.removed
    }
    pub fn height(&self) -> usize {
        self.creatures.height()
    }
    pub fn is_empty(&self) -> bool {
        self.creatures.is_empty()
    }
    pub fn is_certain(&self) -> bool {
        self.creatures.is_certain()
    }
    pub fn certain(&self) -> Vec<Creature> {
        self.creatures.certain_names()
    }
    /// size of the split-off child when this legion last split
    pub fn split_size(&self) -> usize {
        self.split_size
    }
    pub fn split_turn(&self) -> Option<Turn> {
        self.split_turn
    }
    /// "Rd01(3)"
    pub fn label(&self) -> String {
        format!("{}({})", self.marker, self.turn)
    }

    /// everything that was here at the parent's split, including what has since left
    pub fn at_split_or_removed(&self) -> Vec<Creature> {
        let mut names = self
            .creatures
            .iter()
            .filter(|o| o.at_split())
            .map(|o| o.creature())
            .collect::<Vec<_>>();
        names.extend(self.removed.names());
        names
    }
    /// what the parent's split is known to have sent this way
    pub fn certain_at_split_or_removed(&self) -> Vec<Creature> {
        let mut names = self.creatures.certain_at_split();
        names.extend(self.removed.names());
        names
    }

    pub(crate) fn creatures_mut(&mut self) -> &mut Roster {
        &mut self.creatures
    }
    pub(crate) fn removed_mut(&mut self) -> &mut Roster {
        &mut self.removed
    }
    pub(crate) fn set_creatures(&mut self, creatures: Roster) {
        self.creatures = creatures;
    }
    pub(crate) fn record_split(&mut self, size: usize) {
        self.split_size = size;
    }
    pub(crate) fn record_turn(&mut self, turn: Turn) {
        self.split_turn = Some(turn);
    }
    pub(crate) fn forget_split(&mut self) {
        self.split_size = 0;
        self.split_turn = None;
    }
}

/// "Rd02(1): Centaur? Ogre? Ogre? Angel-"
impl std::fmt::Display for Legion {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}:", self.label())?;
        for o in &self.creatures {
            write!(f, " {}", o)?;
        }
        for o in &self.removed {
            write!(f, " {}-", o.creature())?;
        }
        Ok(())
    }
}
