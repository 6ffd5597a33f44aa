use crate::geometry::lerp;
use crate::layout::{PositionEntry, PositionMap};

/// Blends two layout passes for one animation frame.
///
/// Every id shared by both maps gets its numeric fields linearly
/// interpolated by `progress`; `ring` is discrete and always taken from
/// `to`. Ids present only in `from` are dropped (the node left the set; any
/// fade-out is a renderer concern) and ids present only in `to` do not
/// appear until the caller switches to the target map at progress 1. Both
/// inputs are left untouched. Out-of-range progress extrapolates linearly
/// rather than panicking; clamping is the caller's convention.
pub fn interpolate(from: &PositionMap, to: &PositionMap, progress: f32) -> PositionMap {
    from.iter()
        .filter_map(|(id, start)| {
            let end = to.get(id)?;
            let entry = PositionEntry {
                x: lerp(start.x, end.x, progress),
                y: lerp(start.y, end.y, progress),
                scale: lerp(start.scale, end.scale, progress),
                ring: end.ring,
                ring_position: lerp(start.ring_position, end.ring_position, progress),
                distance_from_center: lerp(
                    start.distance_from_center,
                    end.distance_from_center,
                    progress,
                ),
                rotation: lerp(start.rotation, end.rotation, progress),
            };
            Some((id.clone(), entry))
        })
        .collect()
}
