use crate::config::RingConfig;
use crate::ir::NodeDescriptor;

/// Plans how many nodes each successive ring holds.
///
/// Up to `first_ring_capacity` nodes fit on a single ring sized to exactly
/// the node count; up to twice that splits into two rings with the first at
/// full capacity. Beyond that each ring's capacity grows by `growth_factor`
/// over the previous one (integer-truncated), with the final ring capped to
/// the remaining count. Capacities therefore sum exactly to `total` and no
/// ring is ever planned empty. Negative totals are unrepresentable; the
/// contract lives in the `usize` parameter.
pub fn plan_ring_capacities(total: usize, ring: &RingConfig) -> Vec<usize> {
    let first = ring.first_ring_capacity.max(1);
    if total == 0 {
        return Vec::new();
    }
    if total <= first {
        return vec![total];
    }
    if total <= first * 2 {
        return vec![first, total - first];
    }

    let mut capacities = vec![first];
    let mut remaining = total - first;
    let mut capacity = first;
    while remaining > 0 {
        // max() keeps the plan finite even for growth factors <= 1.
        capacity = ((capacity as f32 * ring.growth_factor) as usize).max(capacity + 1);
        let take = capacity.min(remaining);
        capacities.push(take);
        remaining -= take;
    }
    capacities
}

/// Fills successive capacity buckets from an already-sorted node list.
///
/// Stops producing groups once all nodes are consumed; a result never ends
/// with an empty group. If the plan comes up short the leftovers spill into
/// one final ring so every input node still lands somewhere.
pub fn distribute_into_rings(
    sorted: Vec<NodeDescriptor>,
    capacities: &[usize],
) -> Vec<Vec<NodeDescriptor>> {
    let mut groups = Vec::new();
    let mut nodes = sorted.into_iter();
    for &capacity in capacities {
        let group: Vec<NodeDescriptor> = nodes.by_ref().take(capacity).collect();
        if group.is_empty() {
            break;
        }
        groups.push(group);
    }
    let rest: Vec<NodeDescriptor> = nodes.collect();
    if !rest.is_empty() {
        groups.push(rest);
    }
    groups
}
