use super::branch::Branch;
use super::legion::Legion;
use super::step::Step;
use crate::MAX_HEIGHT;
use crate::MAX_RECRUIT_HEIGHT;
use crate::PredictError;
use crate::Result;
use crate::Turn;
use crate::creature::Creature;
use crate::creature::Multiset;
use crate::creature::Observation;
use crate::creature::Roster;
use crate::split::Prediction;
use petgraph::Direction::Incoming;
use petgraph::Direction::Outgoing;
use petgraph::graph::NodeIndex;
use petgraph::stable_graph::StableDiGraph;
use petgraph::visit::EdgeRef;
use std::fmt::Formatter;

/// One player's split history.
///
/// Legions live in a stable arena so indices survive removal of merged
/// subtrees. Edges run parent to child, labelled keep or split. Every
/// mutation that teaches us something walks up through `Gather` steps
/// and back down through `Resplit` steps until the tree is quiet again.
#[derive(Debug, Clone)]
pub struct SplitTree {
    graph: StableDiGraph<Legion, Branch>,
    root: NodeIndex,
}

impl From<Legion> for SplitTree {
    fn from(legion: Legion) -> Self {
        let mut graph = StableDiGraph::default();
        let root = graph.add_node(legion);
        Self { graph, root }
    }
}

impl SplitTree {
    /// a tree rooted at a player's fully known starting legion
    pub fn new(marker: &str, creatures: &[Creature]) -> Self {
        Self::from(Legion::root(marker, creatures))
    }

    // ========================================================================
    // navigation
    // ========================================================================

    pub fn root(&self) -> NodeIndex {
        self.root
    }
    pub fn at(&self, index: NodeIndex) -> Result<&Legion> {
        self.graph
            .node_weight(index)
            .ok_or_else(|| PredictError::Lookup(format!("node {}", index.index())))
    }
    fn at_mut(&mut self, index: NodeIndex) -> Result<&mut Legion> {
        self.graph
            .node_weight_mut(index)
            .ok_or_else(|| PredictError::Lookup(format!("node {}", index.index())))
    }
    pub fn parent(&self, index: NodeIndex) -> Option<NodeIndex> {
        self.graph.neighbors_directed(index, Incoming).next()
    }
    /// (keep, split) when this legion has split
    pub fn children(&self, index: NodeIndex) -> Option<(NodeIndex, NodeIndex)> {
        let mut keep = None;
        let mut split = None;
        for edge in self.graph.edges_directed(index, Outgoing) {
            match edge.weight() {
                Branch::Keep => keep = Some(edge.target()),
                Branch::Split => split = Some(edge.target()),
            }
        }
        keep.zip(split)
    }
    /// marker of whichever child doesn't carry this legion's own marker
    pub fn other_marker(&self, index: NodeIndex) -> Option<&str> {
        let (keep, split) = self.children(index)?;
        let mine = self.graph[index].marker();
        match self.graph[keep].marker() {
            other if other != mine => Some(other),
            _ => Some(self.graph[split].marker()),
        }
    }
    /// no uncertainty anywhere below this legion
    pub fn descendants_certain(&self, index: NodeIndex) -> bool {
        match self.children(index) {
            None => true,
            Some((keep, split)) => [keep, split].into_iter().all(|child| {
                self.graph[child].is_certain() && self.descendants_certain(child)
            }),
        }
    }
    /// the children's split members account for exactly this legion
    pub fn consistent(&self, index: NodeIndex) -> bool {
        match self.children(index) {
            None => true,
            Some((keep, split)) => {
                let mut names = self.graph[keep].at_split_or_removed();
                names.extend(self.graph[split].at_split_or_removed());
                let mine = self.graph[index].creatures().names();
                names.len() == mine.len() && names.contains_all(&mine)
            }
        }
    }

    /// Active legions, children before later siblings. When a marker
    /// was reused the older leaf is superseded by the newer one.
    pub fn leaves(&self) -> Result<Vec<NodeIndex>> {
        let mut leaves = Vec::new();
        let mut stack = vec![self.root];
        while let Some(index) = stack.pop() {
            match self.children(index) {
                Some((keep, split)) => {
                    stack.push(split);
                    stack.push(keep);
                }
                None if self.graph[index].is_empty() => {}
                None => leaves.push(index),
            }
        }
        for (i, &a) in leaves.iter().enumerate() {
            for &b in leaves.iter().skip(i + 1) {
                let (a, b) = (&self.graph[a], &self.graph[b]);
                if a.marker() == b.marker() && a.turn() == b.turn() {
                    return Err(PredictError::DuplicateLeaf {
                        marker: a.marker().to_string(),
                        turn: a.turn(),
                    });
                }
            }
        }
        Ok(leaves
            .iter()
            .copied()
            .filter(|&a| {
                !leaves.iter().any(|&b| {
                    self.graph[a].marker() == self.graph[b].marker()
                        && self.graph[a].turn() < self.graph[b].turn()
                })
            })
            .collect())
    }
    /// every legion that still holds something, root first
    pub fn nodes(&self) -> Vec<NodeIndex> {
        let mut nodes = Vec::new();
        let mut stack = vec![self.root];
        while let Some(index) = stack.pop() {
            if !self.graph[index].is_empty() {
                nodes.push(index);
            }
            if let Some((keep, split)) = self.children(index) {
                stack.push(split);
                stack.push(keep);
            }
        }
        nodes
    }
    pub fn lookup(&self, marker: &str) -> Result<Option<NodeIndex>> {
        Ok(self
            .leaves()?
            .into_iter()
            .find(|&index| self.graph[index].marker() == marker))
    }

    // ========================================================================
    // game events
    // ========================================================================

    /// Split `size` creatures off into a new legion marked `other`.
    pub fn split(&mut self, index: NodeIndex, size: usize, other: &str, turn: Turn) -> Result<()> {
        let mut stack = Vec::new();
        self.divide(index, size, other, Some(turn), &mut stack)?;
        self.converge(stack)
    }

    /// Some of this legion's creatures became known. Returns whether the
    /// news travelled to the parent.
    pub fn reveal(&mut self, index: NodeIndex, names: &[Creature]) -> Result<bool> {
        match (self.absorb(index, names)?, self.parent(index)) {
            (true, Some(parent)) => {
                self.converge(vec![Step::Gather(parent)])?;
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    /// The whole legion became known. Everything already certain must
    /// be among `names`.
    pub fn reveal_all(&mut self, index: NodeIndex, names: &[Creature]) -> Result<bool> {
        let legion = self.at(index)?;
        let certain = legion.certain();
        if let Some(missing) = certain
            .iter()
            .find(|&&c| names.count_of(c) < certain.count_of(c))
        {
            return Err(PredictError::Certainty(format!(
                "full reveal of {} lacks certain {}",
                legion.label(),
                missing
            )));
        }
        self.reveal(index, names)
    }

    pub fn add(&mut self, index: NodeIndex, creature: Creature) -> Result<()> {
        let legion = self.at(index)?;
        if legion.height() >= MAX_RECRUIT_HEIGHT && self.children(index).is_none() {
            return Err(PredictError::Height(format!(
                "{} is {} high and cannot take a {}",
                legion.label(),
                legion.height(),
                creature
            )));
        }
        let legion = self.at_mut(index)?;
        legion.creatures_mut().insert(Observation::recruit(creature));
        log::debug!("{:<32}{:<32}", format!("add {}", creature), legion.to_string());
        Ok(())
    }

    /// Take one creature out. It is revealed first, so it is certain
    /// to be here when it goes.
    pub fn remove(&mut self, index: NodeIndex, creature: Creature) -> Result<()> {
        let legion = self.at(index)?;
        if legion.height() == 0 {
            return Err(PredictError::Height(format!(
                "{} is empty and cannot lose a {}",
                legion.label(),
                creature
            )));
        }
        self.reveal(index, &[creature])?;
        let legion = self.at_mut(index)?;
        let gone = legion
            .creatures_mut()
            .take_certain(creature)
            .ok_or_else(|| {
                PredictError::Certainty(format!("{} holds no {}", legion.label(), creature))
            })?;
        if gone.at_split() {
            legion.removed_mut().insert(gone);
        }
        log::debug!("{:<32}{:<32}", format!("remove {}", creature), legion.to_string());
        Ok(())
    }

    /// Several creatures leave at once, revealed together first.
    pub fn remove_all(&mut self, index: NodeIndex, names: &[Creature]) -> Result<()> {
        self.reveal(index, names)?;
        names
            .iter()
            .try_for_each(|&creature| self.remove(index, creature))
    }

    /// Recombine two siblings. If either carries the parent's marker the
    /// split simply never happened; otherwise the parent is re-split so
    /// that everything ends up under this legion's marker.
    pub fn merge(&mut self, index: NodeIndex, other: NodeIndex, turn: Turn) -> Result<()> {
        let this = self.at(index)?;
        let that = self.at(other)?;
        let parent = match (self.parent(index), self.parent(other)) {
            (Some(p), Some(q)) if p == q && index != other => p,
            _ => {
                return Err(PredictError::Merge {
                    this: this.label(),
                    that: that.label(),
                    reason: "not siblings".to_string(),
                });
            }
        };
        let size = this.height() + that.height();
        let marker = this.marker().to_string();
        let cancel = [this.marker(), that.marker()].contains(&self.graph[parent].marker());
        log::debug!(
            "{:<32}{:<32}",
            format!("merge {} {}", this.label(), that.label()),
            self.graph[parent].to_string()
        );
        self.prune(parent);
        if cancel {
            Ok(())
        } else {
            self.split(parent, size, &marker, turn)
        }
    }

    // ========================================================================
    // propagation
    // ========================================================================

    /// Drain pending steps until nothing new is learned.
    fn converge(&mut self, mut stack: Vec<Step>) -> Result<()> {
        while let Some(step) = stack.pop() {
            log::trace!("{}", step);
            match step {
                Step::Gather(index) => {
                    let names = self.gathered(index)?;
                    match (self.absorb(index, &names)?, self.parent(index)) {
                        (true, Some(parent)) => stack.push(Step::Gather(parent)),
                        _ => stack.push(Step::Resplit(index)),
                    }
                }
                Step::Resplit(index) => {
                    let size = self.at(index)?.split_size();
                    let other = self
                        .other_marker(index)
                        .map(str::to_string)
                        .ok_or_else(|| {
                            PredictError::IllegalSplit(format!("node {} never split", index.index()))
                        })?;
                    self.divide(index, size, &other, None, &mut stack)?;
                }
            }
        }
        Ok(())
    }

    /// what both children prove was sent their way
    fn gathered(&self, index: NodeIndex) -> Result<Vec<Creature>> {
        let (keep, split) = self.children(index).ok_or_else(|| {
            PredictError::Lookup(format!("node {} has no children", index.index()))
        })?;
        let mut names = self.graph[keep].certain_at_split_or_removed();
        names.extend(self.graph[split].certain_at_split_or_removed());
        Ok(names)
    }

    /// Fold newly certain `names` into one legion without touching its
    /// relatives. Returns false when there was nothing to learn.
    fn absorb(&mut self, index: NodeIndex, names: &[Creature]) -> Result<bool> {
        let legion = self.at(index)?;
        let certain = legion.certain();
        if names.is_empty() || (certain.contains_all(names) && self.descendants_certain(index)) {
            return Ok(false);
        }
        let count = names.len() + certain.without(names).len();
        if count > legion.height() {
            return Err(PredictError::Certainty(format!(
                "{} cannot hold {} certain creatures with {:?} revealed",
                legion.to_string(),
                count,
                names
            )));
        }
        let legion = self.at_mut(index)?;
        let mut added = 0;
        for &name in names {
            if legion.creatures().count(name) < names.count_of(name) {
                legion.creatures_mut().insert(Observation::revealed(name));
                added += 1;
            }
        }
        for name in names.without(&legion.certain()) {
            legion.creatures_mut().mark_certain(name);
        }
        for _ in 0..added {
            if legion.creatures_mut().drop_last_uncertain().is_none() {
                return Err(PredictError::NoUncertainCreature(legion.label()));
            }
        }
        log::debug!("{:<32}{:<32}", format!("reveal {:?}", names), legion.to_string());
        Ok(true)
    }

    /// Split, or re-derive an existing split of, one legion. Children
    /// that have themselves split are queued to be re-derived in turn.
    fn divide(
        &mut self,
        index: NodeIndex,
        size: usize,
        other: &str,
        turn: Option<Turn>,
        stack: &mut Vec<Step>,
    ) -> Result<()> {
        let legion = self.at(index)?;
        if legion.height() > MAX_HEIGHT {
            return Err(PredictError::Height(format!(
                "{} is {} high at split",
                legion.label(),
                legion.height()
            )));
        }
        let turn = match turn.or(legion.split_turn()) {
            Some(turn) => turn,
            None => {
                return Err(PredictError::IllegalSplit(format!(
                    "{} has no earlier split to re-derive",
                    legion.label()
                )));
            }
        };
        let children = self.children(index);
        let (known_keep, known_split) = match children {
            Some((keep, split)) => (
                self.graph[keep].certain_at_split_or_removed(),
                self.graph[split].certain_at_split_or_removed(),
            ),
            None => (Vec::new(), Vec::new()),
        };
        let known = [known_keep.as_slice(), known_split.as_slice()].concat();
        if !legion.certain().contains_all(&known) {
            // the parent hears about it through a Gather later on
            log::debug!("{:<32}{:<32}", "defer split", legion.to_string());
            self.at_mut(index)?.record_turn(turn);
            return Ok(());
        }
        let prediction = Prediction::compute(legion, size, &known_keep, &known_split)?;
        let marker = legion.marker().to_string();
        self.at_mut(index)?.record_turn(turn);
        match children {
            Some((keep, split)) => {
                self.refresh(keep, prediction.keep())?;
                self.refresh(split, prediction.split())?;
                for child in [split, keep] {
                    if self.children(child).is_some() {
                        stack.push(Step::Resplit(child));
                    }
                }
            }
            None => {
                let keep = Legion::new(marker, turn, prediction.keep().iter().copied().collect());
                let split = Legion::new(other, turn, prediction.split().iter().copied().collect());
                let height = split.height();
                let keep = self.graph.add_node(keep);
                let split = self.graph.add_node(split);
                self.graph.add_edge(index, keep, Branch::Keep);
                self.graph.add_edge(index, split, Branch::Split);
                self.graph[index].record_split(height);
            }
        }
        Ok(())
    }

    /// Replace a child's at-split roster with a fresh prediction, keeping
    /// what it gained since and dropping what it lost.
    fn refresh(&mut self, index: NodeIndex, predicted: &[Observation]) -> Result<()> {
        let legion = self.at_mut(index)?;
        let mut roster = predicted
            .iter()
            .copied()
            .chain(legion.creatures().after_split())
            .collect::<Roster>();
        for gone in legion.removed().names() {
            if roster.take_at_split(gone).is_none() {
                return Err(PredictError::Certainty(format!(
                    "{} lost a {} its parent's split never gave it",
                    legion.label(),
                    gone
                )));
            }
        }
        legion.set_creatures(roster);
        Ok(())
    }

    /// Forget a split: both children and everything below them go.
    fn prune(&mut self, index: NodeIndex) {
        let mut stack = self
            .graph
            .neighbors_directed(index, Outgoing)
            .collect::<Vec<_>>();
        while let Some(child) = stack.pop() {
            stack.extend(self.graph.neighbors_directed(child, Outgoing));
            self.graph.remove_node(child);
        }
        self.graph[index].forget_split();
    }

    // ========================================================================
    // rendering
    // ========================================================================

    /// Graphviz text of the whole tree
    pub fn dot(&self) -> String {
        petgraph::dot::Dot::new(&self.graph).to_string()
    }

    fn draw(&self, f: &mut Formatter, index: NodeIndex, prefix: &str) -> std::fmt::Result {
        if index == self.root {
            writeln!(f, "{}", self.graph[index])?;
        }
        if let Some((keep, split)) = self.children(index) {
            for (child, edge) in [(keep, Branch::Keep), (split, Branch::Split)] {
                let last = edge == Branch::Split;
                let stem = if last { "└" } else { "├" };
                let gaps = if last { "    " } else { "│   " };
                writeln!(f, "{}{}──{} → {}", prefix, stem, edge, self.graph[child])?;
                self.draw(f, child, &format!("{}{}", prefix, gaps))?;
            }
        }
        Ok(())
    }
}

impl std::fmt::Display for SplitTree {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.draw(f, self.root, "")
    }
}
