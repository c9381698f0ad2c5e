use serde::{Deserialize, Serialize};

/// Edge types of the code graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EdgeKind {
    /// Category → Code.
    Contains,
    /// Code → Category. Read-only inverse of `Contains`.
    BelongsTo,
    /// Parent code → child code.
    HasSubcategory,
}

impl EdgeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EdgeKind::Contains => "CONTAINS",
            EdgeKind::BelongsTo => "BELONGS_TO",
            EdgeKind::HasSubcategory => "HAS_SUBCATEGORY",
        }
    }
}

/// Node and edge totals of the graph.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphCounts {
    pub categories: usize,
    pub codes: usize,
    pub contains_edges: usize,
    pub hierarchy_edges: usize,
}
