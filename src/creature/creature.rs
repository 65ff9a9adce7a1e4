use crate::PredictError;
use crate::Points;
use std::cmp::Ordering;

/// Creature types of the default variant.
///
/// Declared from most to least valuable, but ordering is always derived
/// from kill value (then name) so that the importance order never
/// depends on declaration order.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String")]
pub enum Creature {
    Titan,
    Colossus,
    Archangel,
    Serpent,
    Hydra,
    Dragon,
    Giant,
    Angel,
    Guardian,
    Unicorn,
    Behemoth,
    Wyvern,
    Warlock,
    Griffon,
    Gorgon,
    Cyclops,
    Warbear,
    Ranger,
    Minotaur,
    Troll,
    Lion,
    Gargoyle,
    Centaur,
    Ogre,
}

impl Creature {
    pub const ALL: [Creature; 24] = [
        Creature::Titan,
        Creature::Colossus,
        Creature::Archangel,
        Creature::Serpent,
        Creature::Hydra,
        Creature::Dragon,
        Creature::Giant,
        Creature::Angel,
        Creature::Guardian,
        Creature::Unicorn,
        Creature::Behemoth,
        Creature::Wyvern,
        Creature::Warlock,
        Creature::Griffon,
        Creature::Gorgon,
        Creature::Cyclops,
        Creature::Warbear,
        Creature::Ranger,
        Creature::Minotaur,
        Creature::Troll,
        Creature::Lion,
        Creature::Gargoyle,
        Creature::Centaur,
        Creature::Ogre,
    ];

    /// fixed kill value. only ever used to rank creatures and
    /// to break ties between otherwise equally legal splits.
    pub const fn value(&self) -> Points {
        match self {
            Creature::Titan => 1242,
            Creature::Colossus => 404,
            Creature::Archangel => 366,
            Creature::Serpent => 361,
            Creature::Hydra => 309,
            Creature::Dragon => 299,
            Creature::Giant => 285,
            Creature::Angel => 248,
            Creature::Guardian => 245,
            Creature::Unicorn => 244,
            Creature::Behemoth => 240,
            Creature::Wyvern => 214,
            Creature::Warlock => 213,
            Creature::Griffon => 208,
            Creature::Gorgon => 189,
            Creature::Cyclops => 181,
            Creature::Warbear => 180,
            Creature::Ranger => 169,
            Creature::Minotaur => 165,
            Creature::Troll => 161,
            Creature::Lion => 150,
            Creature::Gargoyle => 124,
            Creature::Centaur => 122,
            Creature::Ogre => 121,
        }
    }

    /// the two creatures one of which each half of the starting legion must hold
    pub const fn is_lord(&self) -> bool {
        matches!(self, Creature::Titan | Creature::Angel)
    }

    pub const fn name(&self) -> &'static str {
        match self {
            Creature::Titan => "Titan",
            Creature::Colossus => "Colossus",
            Creature::Archangel => "Archangel",
            Creature::Serpent => "Serpent",
            Creature::Hydra => "Hydra",
            Creature::Dragon => "Dragon",
            Creature::Giant => "Giant",
            Creature::Angel => "Angel",
            Creature::Guardian => "Guardian",
            Creature::Unicorn => "Unicorn",
            Creature::Behemoth => "Behemoth",
            Creature::Wyvern => "Wyvern",
            Creature::Warlock => "Warlock",
            Creature::Griffon => "Griffon",
            Creature::Gorgon => "Gorgon",
            Creature::Cyclops => "Cyclops",
            Creature::Warbear => "Warbear",
            Creature::Ranger => "Ranger",
            Creature::Minotaur => "Minotaur",
            Creature::Troll => "Troll",
            Creature::Lion => "Lion",
            Creature::Gargoyle => "Gargoyle",
            Creature::Centaur => "Centaur",
            Creature::Ogre => "Ogre",
        }
    }
}

/// importance order: higher kill value first, then by name
impl Ord for Creature {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .value()
            .cmp(&self.value())
            .then_with(|| self.name().cmp(other.name()))
    }
}
impl PartialOrd for Creature {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// str isomorphism. Titans are often labelled per player
/// ("Titan-Rd"), so any name starting with Titan is the Titan.
impl TryFrom<&str> for Creature {
    type Error = PredictError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let s = s.trim();
        if s.starts_with(Creature::Titan.name()) {
            return Ok(Creature::Titan);
        }
        Creature::ALL
            .into_iter()
            .find(|c| c.name() == s)
            .ok_or_else(|| PredictError::UnknownCreature(s.to_string()))
    }
}
impl TryFrom<String> for Creature {
    type Error = PredictError;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::try_from(s.as_str())
    }
}
impl std::str::FromStr for Creature {
    type Err = PredictError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s)
    }
}

impl std::fmt::Display for Creature {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
