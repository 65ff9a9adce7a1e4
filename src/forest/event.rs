use crate::Marker;
use crate::Turn;
use crate::creature::Creature;
use serde::Deserialize;
use serde::Serialize;

/// One observed game event, addressed by legion marker.
///
/// Scripts are JSON lines such as
/// `{"event":"split","marker":"Rd01","size":4,"into":"Rd02","turn":1}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Event {
    Start {
        player: String,
        marker: Marker,
        creatures: Vec<Creature>,
    },
    Split {
        marker: Marker,
        size: usize,
        into: Marker,
        turn: Turn,
    },
    Reveal {
        marker: Marker,
        creatures: Vec<Creature>,
    },
    RevealAll {
        marker: Marker,
        creatures: Vec<Creature>,
    },
    Add {
        marker: Marker,
        creature: Creature,
    },
    Remove {
        marker: Marker,
        creature: Creature,
    },
    RemoveAll {
        marker: Marker,
        creatures: Vec<Creature>,
    },
    Merge {
        marker: Marker,
        with: Marker,
        turn: Turn,
    },
}

impl Event {
    /// the legion this event is about
    pub fn marker(&self) -> &str {
        match self {
            Event::Start { marker, .. }
            | Event::Split { marker, .. }
            | Event::Reveal { marker, .. }
            | Event::RevealAll { marker, .. }
            | Event::Add { marker, .. }
            | Event::Remove { marker, .. }
            | Event::RemoveAll { marker, .. }
            | Event::Merge { marker, .. } => marker,
        }
    }
}

impl TryFrom<&str> for Event {
    type Error = serde_json::Error;
    fn try_from(line: &str) -> Result<Self, Self::Error> {
        serde_json::from_str(line)
    }
}

impl std::fmt::Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let list = |names: &[Creature]| {
            names
                .iter()
                .map(|c| c.to_string())
                .collect::<Vec<_>>()
                .join(" ")
        };
        match self {
            Event::Start {
                player,
                marker,
                creatures,
            } => write!(f, "{} starts {}: {}", player, marker, list(creatures)),
            Event::Split {
                marker,
                size,
                into,
                turn,
            } => write!(f, "{} splits {} into {} on turn {}", marker, size, into, turn),
            Event::Reveal { marker, creatures } => {
                write!(f, "{} reveals {}", marker, list(creatures))
            }
            Event::RevealAll { marker, creatures } => {
                write!(f, "{} reveals all {}", marker, list(creatures))
            }
            Event::Add { marker, creature } => write!(f, "{} adds {}", marker, creature),
            Event::Remove { marker, creature } => write!(f, "{} loses {}", marker, creature),
            Event::RemoveAll { marker, creatures } => {
                write!(f, "{} loses {}", marker, list(creatures))
            }
            Event::Merge { marker, with, turn } => {
                write!(f, "{} merges {} on turn {}", marker, with, turn)
            }
        }
    }
}
