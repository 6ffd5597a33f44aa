use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::LayoutError;

/// What a node represents in the knowledge graph. Informational only: the
/// geometry never branches on it, but scenes round-trip it so renderers can
/// style nodes by kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Word,
    Definition,
    Belief,
    Statement,
    Evidence,
    Comment,
}

/// One node as supplied by the caller, immutable for the duration of a
/// layout pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeDescriptor {
    pub id: String,
    /// Creation instant in unix milliseconds; drives [`SortMode::Newest`].
    pub timestamp: i64,
    /// Net vote score; drives [`SortMode::Popular`].
    pub weight: i64,
    /// Nominal on-screen diameter at scale 1.0.
    pub size: f32,
    pub kind: NodeKind,
}

/// Ordering applied to alternative nodes before ring distribution.
///
/// Any token other than `popular` or `newest` is rejected, both here and in
/// serde deserialization; there is deliberately no silent default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortMode {
    Popular,
    Newest,
}

impl FromStr for SortMode {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "popular" => Ok(SortMode::Popular),
            "newest" => Ok(SortMode::Newest),
            other => Err(LayoutError::UnknownSortMode(other.to_string())),
        }
    }
}

/// One complete layout request, as consumed by the CLI and test fixtures.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scene {
    pub center: NodeDescriptor,
    #[serde(default)]
    pub alternatives: Vec<NodeDescriptor>,
    pub sort_mode: SortMode,
    pub canvas_width: f32,
    pub canvas_height: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expanded_node_id: Option<String>,
}
