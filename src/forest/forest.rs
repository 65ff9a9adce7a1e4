use super::event::Event;
use super::handle::Handle;
use crate::PredictError;
use crate::Result;
use crate::Turn;
use crate::creature::Creature;
use crate::legion::Legion;
use crate::legion::SplitTree;
use std::collections::BTreeMap;

/// Every opponent's split tree, keyed by player.
///
/// Game events name legions by marker only, so every marker-addressed
/// operation first finds the one active leaf carrying that marker.
#[derive(Debug, Clone, Default)]
pub struct Forest {
    trees: BTreeMap<String, SplitTree>,
}

impl Forest {
    /// Start (or restart) a player's tree from its known starting legion.
    pub fn insert(&mut self, player: &str, marker: &str, creatures: &[Creature]) {
        log::debug!("{:<32}{:<32}", format!("start {}", player), marker);
        self.trees
            .insert(player.to_string(), SplitTree::new(marker, creatures));
    }

    pub fn players(&self) -> impl Iterator<Item = &str> {
        self.trees.keys().map(String::as_str)
    }
    pub fn tree(&self, player: &str) -> Result<&SplitTree> {
        self.trees
            .get(player)
            .ok_or_else(|| PredictError::Lookup(format!("player {}", player)))
    }
    fn tree_mut(&mut self, player: &str) -> Result<&mut SplitTree> {
        self.trees
            .get_mut(player)
            .ok_or_else(|| PredictError::Lookup(format!("player {}", player)))
    }
    pub fn at(&self, handle: &Handle) -> Result<&Legion> {
        self.tree(handle.player())?.at(handle.index())
    }

    /// the active legion carrying `marker`, in whichever tree holds it
    pub fn lookup(&self, marker: &str) -> Result<Option<Handle>> {
        for (player, tree) in self.trees.iter() {
            if let Some(index) = tree.lookup(marker)? {
                return Ok(Some(Handle::new(player.as_str(), index)));
            }
        }
        Ok(None)
    }
    fn leaf(&self, marker: &str) -> Result<Handle> {
        self.lookup(marker)?
            .ok_or_else(|| PredictError::Lookup(format!("no active legion {}", marker)))
    }

    pub fn leaves(&self, player: &str) -> Result<Vec<&Legion>> {
        let tree = self.tree(player)?;
        tree.leaves()?
            .into_iter()
            .map(|index| tree.at(index))
            .collect()
    }

    /// Every non-empty legion of one player, oldest first. Same-turn
    /// legions group under their parent, taller ones first.
    pub fn nodes(&self, player: &str) -> Result<Vec<&Legion>> {
        let tree = self.tree(player)?;
        let mut nodes = tree
            .nodes()
            .into_iter()
            .map(|index| -> Result<(String, &Legion)> {
                let parent = match tree.parent(index) {
                    Some(parent) => tree.at(parent)?.to_string(),
                    None => String::new(),
                };
                Ok((parent, tree.at(index)?))
            })
            .collect::<Result<Vec<_>>>()?;
        nodes.sort_by(|(p, a), (q, b)| {
            a.turn()
                .cmp(&b.turn())
                .then_with(|| p.cmp(q))
                .then_with(|| b.height().cmp(&a.height()))
                .then_with(|| a.to_string().cmp(&b.to_string()))
        });
        Ok(nodes.into_iter().map(|(_, legion)| legion).collect())
    }

    /// Every player's active legions, one per line.
    pub fn report(&self) -> Result<String> {
        let mut lines = Vec::new();
        for player in self.players() {
            let mut leaves = self
                .leaves(player)?
                .into_iter()
                .map(|legion| legion.to_string())
                .collect::<Vec<_>>();
            leaves.sort();
            lines.push(format!("{}:", player));
            lines.extend(leaves.into_iter().map(|leaf| format!("  {}", leaf)));
        }
        Ok(lines.join("\n"))
    }

    pub fn dot(&self, player: &str) -> Result<String> {
        Ok(self.tree(player)?.dot())
    }

    // ========================================================================
    // marker-addressed game events
    // ========================================================================

    pub fn split(&mut self, marker: &str, size: usize, into: &str, turn: Turn) -> Result<()> {
        let handle = self.leaf(marker)?;
        self.tree_mut(handle.player())?
            .split(handle.index(), size, into, turn)
    }
    pub fn reveal(&mut self, marker: &str, names: &[Creature]) -> Result<bool> {
        let handle = self.leaf(marker)?;
        self.tree_mut(handle.player())?
            .reveal(handle.index(), names)
    }
    pub fn reveal_all(&mut self, marker: &str, names: &[Creature]) -> Result<bool> {
        let handle = self.leaf(marker)?;
        self.tree_mut(handle.player())?
            .reveal_all(handle.index(), names)
    }
    pub fn add(&mut self, marker: &str, creature: Creature) -> Result<()> {
        let handle = self.leaf(marker)?;
        self.tree_mut(handle.player())?
            .add(handle.index(), creature)
    }
    pub fn remove(&mut self, marker: &str, creature: Creature) -> Result<()> {
        let handle = self.leaf(marker)?;
        self.tree_mut(handle.player())?
            .remove(handle.index(), creature)
    }
    pub fn remove_all(&mut self, marker: &str, names: &[Creature]) -> Result<()> {
        let handle = self.leaf(marker)?;
        self.tree_mut(handle.player())?
            .remove_all(handle.index(), names)
    }
    /// `marker` absorbs `with`; the merged legion keeps `marker`
    pub fn merge(&mut self, marker: &str, with: &str, turn: Turn) -> Result<()> {
        let this = self.leaf(marker)?;
        let that = self.leaf(with)?;
        if this.player() != that.player() {
            return Err(PredictError::Merge {
                this: marker.to_string(),
                that: with.to_string(),
                reason: format!("{} and {} are different players", this.player(), that.player()),
            });
        }
        self.tree_mut(this.player())?
            .merge(this.index(), that.index(), turn)
    }

    /// Replay one recorded event.
    pub fn apply(&mut self, event: &Event) -> Result<()> {
        log::trace!("{}", event);
        match event {
            Event::Start {
                player,
                marker,
                creatures,
            } => Ok(self.insert(player, marker, creatures)),
            Event::Split {
                marker,
                size,
                into,
                turn,
            } => self.split(marker, *size, into, *turn),
            Event::Reveal { marker, creatures } => self.reveal(marker, creatures).map(|_| ()),
            Event::RevealAll { marker, creatures } => {
                self.reveal_all(marker, creatures).map(|_| ())
            }
            Event::Add { marker, creature } => self.add(marker, *creature),
            Event::Remove { marker, creature } => self.remove(marker, *creature),
            Event::RemoveAll { marker, creatures } => self.remove_all(marker, creatures),
            Event::Merge { marker, with, turn } => self.merge(marker, with, *turn),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Creature::*;

    const START: [Creature; 8] = [Titan, Angel, Gargoyle, Gargoyle, Centaur, Centaur, Ogre, Ogre];

    fn forest() -> Forest {
        let mut forest = Forest::default();
        forest.insert("Red", "Rd01", &START);
        forest.insert("Green", "Gr01", &START);
        forest.split("Rd01", 4, "Rd02", 1).unwrap();
        forest.split("Gr01", 4, "Gr02", 1).unwrap();
        forest
    }

    #[test]
    fn lookup_spans_players() {
        let forest = forest();
        let handle = forest.lookup("Gr02").unwrap().unwrap();
        assert_eq!(handle.player(), "Green");
        assert_eq!(forest.at(&handle).unwrap().label(), "Gr02(1)");
        assert_eq!(forest.lookup("Bk01").unwrap(), None);
    }

    #[test]
    fn missing_markers_fail() {
        let mut forest = forest();
        assert!(matches!(forest.add("Bk01", Ogre), Err(PredictError::Lookup(_))));
        assert!(matches!(forest.tree("Black"), Err(PredictError::Lookup(_))));
        assert!(matches!(
            forest.split("Rd09", 2, "Rd10", 2),
            Err(PredictError::Lookup(_))
        ));
    }

    #[test]
    fn events_reach_the_right_tree() {
        let mut forest = forest();
        assert!(forest.reveal("Rd01", &[Ogre, Ogre]).unwrap());
        let red = forest
            .leaves("Red")
            .unwrap()
            .into_iter()
            .map(|legion| legion.to_string())
            .collect::<Vec<_>>();
        assert_eq!(
            red,
            vec![
                "Rd01(1): Titan? Gargoyle? Ogre Ogre",
                "Rd02(1): Angel? Gargoyle Centaur Centaur?"
            ]
        );
        let green = forest.leaves("Green").unwrap();
        assert!(green.iter().all(|legion| legion.certain().is_empty()));
    }

    #[test]
    fn merge_across_players_fails() {
        let mut forest = forest();
        assert!(matches!(
            forest.merge("Rd01", "Gr02", 2),
            Err(PredictError::Merge { .. })
        ));
        forest.merge("Rd01", "Rd02", 2).unwrap();
        assert_eq!(forest.leaves("Red").unwrap().len(), 1);
    }

    #[test]
    fn nodes_by_turn() {
        let mut forest = forest();
        forest.split("Rd02", 2, "Rd03", 2).unwrap();
        let labels = forest
            .nodes("Red")
            .unwrap()
            .into_iter()
            .map(Legion::label)
            .collect::<Vec<_>>();
        assert_eq!(
            labels,
            vec!["Rd01(0)", "Rd01(1)", "Rd02(1)", "Rd02(2)", "Rd03(2)"]
        );
    }

    #[test]
    fn report_groups_players() {
        let forest = forest();
        let report = forest.report().unwrap();
        assert_eq!(
            report,
            [
                "Green:",
                "  Gr01(1): Titan? Gargoyle? Gargoyle? Centaur?",
                "  Gr02(1): Angel? Centaur? Ogre? Ogre?",
                "Red:",
                "  Rd01(1): Titan? Gargoyle? Gargoyle? Centaur?",
                "  Rd02(1): Angel? Centaur? Ogre? Ogre?",
            ]
            .join("\n")
        );
        assert!(forest.dot("Red").unwrap().contains("Rd02(1)"));
    }

    #[test]
    fn replays_events() {
        let script = [
            r#"{"event":"start","player":"Red","marker":"Rd01","creatures":["Titan","Angel","Gargoyle","Gargoyle","Centaur","Centaur","Ogre","Ogre"]}"#,
            r#"{"event":"split","marker":"Rd01","size":4,"into":"Rd02","turn":1}"#,
            r#"{"event":"reveal_all","marker":"Rd02","creatures":["Angel","Gargoyle","Centaur","Centaur"]}"#,
            r#"{"event":"add","marker":"Rd01","creature":"Troll"}"#,
            r#"{"event":"remove","marker":"Rd02","creature":"Angel"}"#,
        ];
        let mut forest = Forest::default();
        for line in script {
            forest.apply(&Event::try_from(line).unwrap()).unwrap();
        }
        let leaves = forest.leaves("Red").unwrap();
        assert_eq!(
            leaves[0].to_string(),
            "Rd01(1): Titan Troll* Gargoyle Ogre Ogre"
        );
        assert_eq!(
            leaves[1].to_string(),
            "Rd02(1): Gargoyle Centaur Centaur Angel-"
        );
        assert!(leaves.iter().all(|legion| legion.is_certain()));
    }

    fn certain(forest: &Forest, marker: &str) -> bool {
        let handle = forest.lookup(marker).unwrap().unwrap();
        forest.at(&handle).unwrap().is_certain()
    }

    /// Gold's game: three generations of splits, then a legion wiped out
    #[test]
    fn eleven_turns_with_an_elimination() {
        let mut forest = Forest::default();
        forest.insert("Gold", "Gd04", &START);
        assert!(!forest.reveal("Gd04", &START).unwrap());
        assert!(certain(&forest, "Gd04"));

        // turn 1
        forest.split("Gd04", 4, "Gd12", 1).unwrap();
        forest.reveal("Gd12", &[Titan]).unwrap();
        forest.reveal("Gd04", &[Centaur]).unwrap();
        forest.add("Gd04", Centaur).unwrap();
        forest.reveal("Gd12", &[Titan]).unwrap();
        forest.add("Gd12", Warlock).unwrap();
        assert!(!certain(&forest, "Gd04"));
        assert!(!certain(&forest, "Gd12"));

        // turn 2
        forest.reveal("Gd04", &[Ogre, Ogre]).unwrap();
        forest.add("Gd04", Troll).unwrap();
        forest.reveal("Gd12", &[Gargoyle, Gargoyle]).unwrap();
        forest.add("Gd12", Cyclops).unwrap();
        assert!(certain(&forest, "Gd04"));
        assert!(certain(&forest, "Gd12"));

        // turn 3
        forest.reveal("Gd04", &[Centaur, Centaur]).unwrap();
        forest.add("Gd04", Lion).unwrap();
        assert!(certain(&forest, "Gd04"));
        assert!(certain(&forest, "Gd12"));

        // turn 4
        forest.split("Gd04", 2, "Gd07", 4).unwrap();
        forest.reveal("Gd04", &[Troll]).unwrap();
        forest.add("Gd04", Troll).unwrap();
        assert!(!certain(&forest, "Gd04"));
        assert!(!certain(&forest, "Gd07"));
        assert!(certain(&forest, "Gd12"));

        // turn 5
        forest.reveal("Gd04", &[Lion]).unwrap();
        forest.add("Gd04", Lion).unwrap();
        forest.reveal("Gd12", &[Centaur]).unwrap();
        forest.add("Gd12", Centaur).unwrap();
        assert!(!certain(&forest, "Gd04"));
        assert!(!certain(&forest, "Gd07"));
        assert!(certain(&forest, "Gd12"));

        // turn 6
        forest.split("Gd04", 2, "Gd08", 6).unwrap();
        forest.split("Gd12", 2, "Gd03", 6).unwrap();
        forest.reveal("Gd08", &[Ogre]).unwrap();
        forest.add("Gd08", Ogre).unwrap();
        forest.reveal("Gd12", &[Centaur, Centaur]).unwrap();
        forest.add("Gd12", Lion).unwrap();
        forest.reveal("Gd07", &[Centaur, Centaur]).unwrap();
        forest.add("Gd07", Lion).unwrap();
        forest.reveal("Gd12", &[Lion]).unwrap();
        forest.add("Gd12", Lion).unwrap();
        assert!(!certain(&forest, "Gd03"));
        assert!(!certain(&forest, "Gd04"));
        assert!(certain(&forest, "Gd07"));
        assert!(!certain(&forest, "Gd08"));
        assert!(!certain(&forest, "Gd12"));

        // turn 7
        forest.split("Gd12", 2, "Gd09", 7).unwrap();
        forest.reveal("Gd03", &[Gargoyle, Gargoyle]).unwrap();
        forest.add("Gd03", Cyclops).unwrap();
        forest.reveal("Gd07", &[Lion]).unwrap();
        forest.add("Gd07", Lion).unwrap();
        forest.reveal("Gd08", &[Ogre, Ogre]).unwrap();
        forest.add("Gd08", Troll).unwrap();
        assert!(certain(&forest, "Gd03"));
        assert!(!certain(&forest, "Gd04"));
        assert!(certain(&forest, "Gd07"));
        assert!(!certain(&forest, "Gd08"));
        assert!(!certain(&forest, "Gd09"));
        assert!(!certain(&forest, "Gd12"));

        // turn 8
        forest.reveal("Gd04", &[Lion, Lion]).unwrap();
        forest.add("Gd04", Ranger).unwrap();
        forest.reveal("Gd07", &[Lion, Lion]).unwrap();
        forest.add("Gd07", Ranger).unwrap();
        forest.reveal("Gd08", &[Troll]).unwrap();
        forest.add("Gd08", Troll).unwrap();
        forest.reveal("Gd12", &[Cyclops]).unwrap();
        forest.add("Gd12", Cyclops).unwrap();
        assert!(certain(&forest, "Gd03"));
        assert!(!certain(&forest, "Gd04"));
        assert!(certain(&forest, "Gd07"));
        assert!(!certain(&forest, "Gd08"));
        assert!(!certain(&forest, "Gd09"));
        assert!(!certain(&forest, "Gd12"));

        // turn 10
        forest.reveal("Gd07", &[Ranger]).unwrap();
        forest.add("Gd07", Ranger).unwrap();
        forest.reveal("Gd12", &[Lion, Lion]).unwrap();
        forest.add("Gd12", Ranger).unwrap();
        assert!(certain(&forest, "Gd03"));
        assert!(!certain(&forest, "Gd04"));
        assert!(certain(&forest, "Gd07"));
        assert!(!certain(&forest, "Gd08"));
        assert!(!certain(&forest, "Gd09"));
        assert!(!certain(&forest, "Gd12"));

        // turn 11: Gd08 is wiped out, which pins down its sibling
        forest.reveal("Gd03", &[Cyclops]).unwrap();
        forest.add("Gd03", Cyclops).unwrap();
        forest.reveal("Gd07", &[Lion, Lion]).unwrap();
        forest.add("Gd07", Ranger).unwrap();
        forest.reveal("Gd09", &[Centaur]).unwrap();
        forest.add("Gd09", Centaur).unwrap();
        let gd08 = forest.lookup("Gd08").unwrap().unwrap();
        for creature in [Troll, Troll, Ogre, Ogre, Ogre] {
            forest.remove("Gd08", creature).unwrap();
        }
        assert_eq!(forest.lookup("Gd08").unwrap(), None);
        assert!(forest.at(&gd08).unwrap().is_empty());
        let tree = forest.tree("Gold").unwrap();
        let parent = tree.parent(gd08.index()).unwrap();
        assert!(tree.consistent(parent));
        let gd04 = forest.lookup("Gd04").unwrap().unwrap();
        assert_eq!(
            forest.at(&gd04).unwrap().to_string(),
            "Gd04(6): Angel Ranger* Troll Troll Lion Lion"
        );
        assert!(certain(&forest, "Gd03"));
        assert!(certain(&forest, "Gd07"));
        assert!(forest.leaves("Gold").unwrap().iter().all(|legion| !legion.is_empty()));
        assert!(matches!(forest.add("Gd08", Ogre), Err(PredictError::Lookup(_))));
    }
}
