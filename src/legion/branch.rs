/// Edge label from a split legion to one of its two children.
///
/// The keep side carries the parent's marker, the split side the new one.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub enum Branch {
    Keep,
    Split,
}

impl std::fmt::Display for Branch {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Branch::Keep => write!(f, "keep"),
            Branch::Split => write!(f, "split"),
        }
    }
}
