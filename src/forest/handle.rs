use petgraph::graph::NodeIndex;

/// Address of one legion: whose tree, and where in it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Handle {
    player: String,
    index: NodeIndex,
}

impl Handle {
    pub fn new(player: impl Into<String>, index: NodeIndex) -> Self {
        Self {
            player: player.into(),
            index,
        }
    }
    pub fn player(&self) -> &str {
        &self.player
    }
    pub fn index(&self) -> NodeIndex {
        self.index
    }
}
