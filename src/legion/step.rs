use petgraph::graph::NodeIndex;

/// One unit of pending propagation work.
///
/// Steps are drained last-in first-out, which visits nodes in the same
/// depth-first order as walking the tree recursively.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// a child learned something: fold both children's certain
    /// split members back into this node
    Gather(NodeIndex),
    /// re-derive this node's recorded split from its current certainty
    Resplit(NodeIndex),
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Step::Gather(i) => write!(f, "gather  {}", i.index()),
            Step::Resplit(i) => write!(f, "resplit {}", i.index()),
        }
    }
}
