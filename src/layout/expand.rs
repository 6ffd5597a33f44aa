use std::collections::HashMap;

use crate::config::LayoutConfig;
use crate::geometry::required_gap;
use crate::ir::NodeDescriptor;

use super::PositionMap;

/// Moves the expanded node to the origin at an enlarged scale and pushes
/// every other node radially outward until it clears the expanded node's
/// padded radius.
///
/// An id not present in the map is a no-op: external state may still name a
/// node that left the input set. Expanding the center id skips the move (it
/// already sits at the origin) but keeps the scale bump and the push.
pub(super) fn apply_expansion(
    map: &mut PositionMap,
    center: &NodeDescriptor,
    alternatives: &[NodeDescriptor],
    expanded_id: &str,
    origin: (f32, f32),
    base_scale: f32,
    config: &LayoutConfig,
) {
    if !map.contains_key(expanded_id) {
        return;
    }

    let sizes: HashMap<&str, f32> = std::iter::once(center)
        .chain(alternatives.iter())
        .map(|node| (node.id.as_str(), node.size))
        .collect();

    let expanded_scale = base_scale * config.expand.scale_multiplier;
    let expanded_size = sizes.get(expanded_id).copied().unwrap_or(0.0);
    let expanded_radius = expanded_size * expanded_scale / 2.0;

    if let Some(entry) = map.get_mut(expanded_id) {
        entry.scale = expanded_scale;
        if expanded_id != center.id {
            entry.x = origin.0;
            entry.y = origin.1;
            entry.distance_from_center = 0.0;
        }
    }

    let neighbor_ids: Vec<String> = map
        .keys()
        .filter(|id| id.as_str() != expanded_id)
        .cloned()
        .collect();

    for id in neighbor_ids {
        let Some(entry) = map.get_mut(&id) else {
            continue;
        };
        let neighbor_size = sizes.get(id.as_str()).copied().unwrap_or(0.0);
        let neighbor_radius = neighbor_size * entry.scale / 2.0;
        let min_gap = required_gap(expanded_radius, neighbor_radius, config.expand.padding_fraction);

        // The expanded node sits at the origin, so the push direction is the
        // neighbor's own radial direction.
        let dx = entry.x - origin.0;
        let dy = entry.y - origin.1;
        let dist = (dx * dx + dy * dy).sqrt();
        if dist >= min_gap {
            continue;
        }
        let (ux, uy) = if dist > f32::EPSILON {
            (dx / dist, dy / dist)
        } else {
            // Coincident with the expanded node: fall back to the angle the
            // neighbor held before the push instead of dividing by zero.
            let theta = entry.rotation.to_radians();
            (theta.cos(), theta.sin())
        };
        entry.x = origin.0 + ux * min_gap;
        entry.y = origin.1 + uy * min_gap;
        entry.distance_from_center = min_gap;
        entry.rotation = uy.atan2(ux).to_degrees();
    }
}
