use std::collections::BTreeMap;
use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::config::{LayoutConfig, OriginPlacement};
use crate::error::LayoutError;
use crate::ir::{NodeDescriptor, Scene, SortMode};

mod expand;
mod placement;
mod rings;
mod sort;

pub use rings::{distribute_into_rings, plan_ring_capacities};
pub use sort::sort_nodes;

use expand::apply_expansion;
use placement::place_ring;

/// Where one node landed in a layout pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionEntry {
    pub x: f32,
    pub y: f32,
    /// Multiplicative size factor; the base scale at the center, shrinking
    /// with ring depth.
    pub scale: f32,
    /// Ring index, 0 for the center node.
    pub ring: u32,
    /// Fractional index within the ring, in [0, 1).
    pub ring_position: f32,
    /// Radial distance from the layout origin, cached for overlap math.
    pub distance_from_center: f32,
    /// Placement angle in degrees.
    pub rotation: f32,
}

/// Result of one layout pass: exactly one entry per input node, keyed by id.
/// `BTreeMap` keeps iteration deterministic for dumps and tests.
pub type PositionMap = BTreeMap<String, PositionEntry>;

/// Per-call layout options. The caller owns this state; the engine reads it
/// and retains nothing between passes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayoutOptions {
    /// Node to pull to the origin at an enlarged scale, pushing everything
    /// else out of its way. Ids that left the input set are ignored.
    pub expanded_node_id: Option<String>,
}

fn validate(
    center: &NodeDescriptor,
    alternatives: &[NodeDescriptor],
    canvas_width: f32,
    canvas_height: f32,
) -> Result<(), LayoutError> {
    if !(canvas_width > 0.0 && canvas_height > 0.0)
        || !canvas_width.is_finite()
        || !canvas_height.is_finite()
    {
        return Err(LayoutError::InvalidCanvas {
            width: canvas_width,
            height: canvas_height,
        });
    }
    if center.id.is_empty() {
        return Err(LayoutError::EmptyNodeId);
    }
    let mut seen: HashSet<&str> = HashSet::with_capacity(alternatives.len() + 1);
    seen.insert(center.id.as_str());
    for node in alternatives {
        if node.id.is_empty() {
            return Err(LayoutError::EmptyNodeId);
        }
        if !seen.insert(node.id.as_str()) {
            return Err(LayoutError::DuplicateNodeId(node.id.clone()));
        }
    }
    Ok(())
}

/// Lays out a center node and its alternatives on concentric rings.
///
/// The center lands at the configured origin at the base scale; alternatives
/// are sorted, partitioned into capacity-planned rings and spread at uniform
/// angles, ring `i` at radius `center_radius + i * ring_spacing`. The pass is
/// a pure function of its arguments: identical inputs produce identical maps.
pub fn compute_layout(
    center: &NodeDescriptor,
    alternatives: &[NodeDescriptor],
    sort_mode: SortMode,
    canvas_width: f32,
    canvas_height: f32,
    config: &LayoutConfig,
    options: &LayoutOptions,
) -> Result<PositionMap, LayoutError> {
    validate(center, alternatives, canvas_width, canvas_height)?;

    let origin = match config.origin {
        OriginPlacement::CanvasCenter => (canvas_width / 2.0, canvas_height / 2.0),
        OriginPlacement::Relative => (0.0, 0.0),
    };
    let base_scale = config.scale.center.resolve(canvas_width, canvas_height);

    let mut map = PositionMap::new();
    map.insert(
        center.id.clone(),
        PositionEntry {
            x: origin.0,
            y: origin.1,
            scale: base_scale,
            ring: 0,
            ring_position: 0.0,
            distance_from_center: 0.0,
            rotation: 0.0,
        },
    );

    let sorted = sort_nodes(alternatives, sort_mode);
    let capacities = plan_ring_capacities(sorted.len(), &config.ring);
    let groups = distribute_into_rings(sorted, &capacities);

    let center_radius = center.size * base_scale / 2.0;
    for (ring_index, group) in groups.iter().enumerate() {
        let ring = ring_index as u32 + 1;
        let radius = center_radius + ring as f32 * config.ring.ring_spacing;
        for (id, entry) in place_ring(group, radius, ring, base_scale, origin, config) {
            map.insert(id, entry);
        }
    }

    if let Some(expanded_id) = options.expanded_node_id.as_deref() {
        apply_expansion(
            &mut map,
            center,
            alternatives,
            expanded_id,
            origin,
            base_scale,
            config,
        );
    }

    Ok(map)
}

/// Convenience wrapper laying out a deserialized [`Scene`].
pub fn compute_scene_layout(scene: &Scene, config: &LayoutConfig) -> Result<PositionMap, LayoutError> {
    let options = LayoutOptions {
        expanded_node_id: scene.expanded_node_id.clone(),
    };
    compute_layout(
        &scene.center,
        &scene.alternatives,
        scene.sort_mode,
        scene.canvas_width,
        scene.canvas_height,
        config,
        &options,
    )
}
