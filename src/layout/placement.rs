use std::f32::consts::TAU;

use crate::config::{LayoutConfig, ScaleConfig};
use crate::ir::NodeDescriptor;

use super::PositionEntry;

/// Scale shared by every member of a ring: the base scale shrunk by ring
/// depth, held at the configured floor.
pub(super) fn ring_scale(base_scale: f32, ring: u32, scale: &ScaleConfig) -> f32 {
    base_scale * scale.floor.max(1.0 - ring as f32 * scale.decay)
}

/// Spreads a ring's members at uniform angular steps around the origin.
///
/// The first member sits at the configured start angle (12 o'clock by
/// default) and successive members advance clockwise by `2π / k`, so a
/// one-member ring simply occupies the start-angle slot. Rotation is the
/// placement angle in degrees.
pub(super) fn place_ring(
    members: &[NodeDescriptor],
    radius: f32,
    ring: u32,
    base_scale: f32,
    origin: (f32, f32),
    config: &LayoutConfig,
) -> Vec<(String, PositionEntry)> {
    let count = members.len();
    if count == 0 {
        return Vec::new();
    }
    let step = TAU / count as f32;
    let scale = ring_scale(base_scale, ring, &config.scale);

    members
        .iter()
        .enumerate()
        .map(|(index, member)| {
            let theta = config.ring.start_angle - step * index as f32;
            let entry = PositionEntry {
                x: origin.0 + radius * theta.cos(),
                y: origin.1 + radius * theta.sin(),
                scale,
                ring,
                ring_position: index as f32 / count as f32,
                distance_from_center: radius,
                rotation: theta.to_degrees(),
            };
            (member.id.clone(), entry)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::NodeKind;

    const TOLERANCE: f32 = 1e-3;

    fn members(count: usize) -> Vec<NodeDescriptor> {
        (0..count)
            .map(|i| NodeDescriptor {
                id: format!("n{i}"),
                timestamp: 0,
                weight: 0,
                size: 100.0,
                kind: NodeKind::Definition,
            })
            .collect()
    }

    #[test]
    fn five_members_sit_72_degrees_apart_from_12_oclock() {
        let config = LayoutConfig::default();
        let placed = place_ring(&members(5), 200.0, 1, 1.0, (0.0, 0.0), &config);
        for (index, (_, entry)) in placed.iter().enumerate() {
            let expected = -90.0 - 72.0 * index as f32;
            assert!(
                (entry.rotation - expected).abs() < TOLERANCE,
                "member {index}: rotation {} != {expected}",
                entry.rotation
            );
        }
        // First member at 12 o'clock: straight up from the origin.
        let (_, first) = &placed[0];
        assert!(first.x.abs() < TOLERANCE);
        assert!((first.y + 200.0).abs() < TOLERANCE);
    }

    #[test]
    fn single_member_occupies_the_start_angle() {
        let config = LayoutConfig::default();
        let placed = place_ring(&members(1), 150.0, 1, 1.0, (400.0, 300.0), &config);
        assert_eq!(placed.len(), 1);
        let (_, entry) = &placed[0];
        assert!((entry.x - 400.0).abs() < TOLERANCE);
        assert!((entry.y - 150.0).abs() < TOLERANCE);
        assert_eq!(entry.ring_position, 0.0);
    }

    #[test]
    fn ring_positions_are_uniform_fractions() {
        let config = LayoutConfig::default();
        let placed = place_ring(&members(4), 200.0, 1, 1.0, (0.0, 0.0), &config);
        let fractions: Vec<f32> = placed.iter().map(|(_, e)| e.ring_position).collect();
        assert_eq!(fractions, vec![0.0, 0.25, 0.5, 0.75]);
    }

    #[test]
    fn every_member_shares_the_ring_scale_and_radius() {
        let config = LayoutConfig::default();
        let placed = place_ring(&members(7), 320.0, 2, 1.0, (0.0, 0.0), &config);
        let expected = ring_scale(1.0, 2, &config.scale);
        for (_, entry) in &placed {
            assert_eq!(entry.scale, expected);
            assert!((entry.distance_from_center - 320.0).abs() < TOLERANCE);
            assert_eq!(entry.ring, 2);
        }
    }

    #[test]
    fn scale_decays_with_depth_and_respects_the_floor() {
        let scale = ScaleConfig::default();
        assert!((ring_scale(1.0, 1, &scale) - 0.88).abs() < 1e-6);
        assert!(ring_scale(1.0, 2, &scale) < ring_scale(1.0, 1, &scale));
        // Deep rings bottom out at the floor instead of shrinking away.
        assert_eq!(ring_scale(1.0, 40, &scale), 0.6);
    }
}
