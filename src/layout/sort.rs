use crate::ir::{NodeDescriptor, SortMode};

/// Returns a freshly ordered copy; the caller's list is never touched.
///
/// `sort_by` is stable, so nodes with equal keys keep their original
/// relative order.
pub fn sort_nodes(nodes: &[NodeDescriptor], mode: SortMode) -> Vec<NodeDescriptor> {
    let mut sorted = nodes.to_vec();
    match mode {
        SortMode::Popular => sorted.sort_by(|a, b| b.weight.cmp(&a.weight)),
        SortMode::Newest => sorted.sort_by(|a, b| b.timestamp.cmp(&a.timestamp)),
    }
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::NodeKind;

    fn node(id: &str, timestamp: i64, weight: i64) -> NodeDescriptor {
        NodeDescriptor {
            id: id.to_string(),
            timestamp,
            weight,
            size: 100.0,
            kind: NodeKind::Definition,
        }
    }

    #[test]
    fn popular_orders_by_descending_weight() {
        let nodes = vec![node("a", 0, 2), node("b", 0, 10), node("c", 0, 6)];
        let sorted = sort_nodes(&nodes, SortMode::Popular);
        let ids: Vec<&str> = sorted.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, ["b", "c", "a"]);
    }

    #[test]
    fn newest_orders_by_descending_timestamp() {
        let nodes = vec![node("a", 100, 0), node("b", 300, 0), node("c", 200, 0)];
        let sorted = sort_nodes(&nodes, SortMode::Newest);
        let ids: Vec<&str> = sorted.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, ["b", "c", "a"]);
    }

    #[test]
    fn ties_keep_original_relative_order() {
        let nodes = vec![
            node("first", 0, 5),
            node("second", 0, 5),
            node("third", 0, 5),
        ];
        let sorted = sort_nodes(&nodes, SortMode::Popular);
        let ids: Vec<&str> = sorted.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, ["first", "second", "third"]);
    }

    #[test]
    fn input_list_is_left_untouched() {
        let nodes = vec![node("a", 0, 1), node("b", 0, 9)];
        let _ = sort_nodes(&nodes, SortMode::Popular);
        assert_eq!(nodes[0].id, "a");
        assert_eq!(nodes[1].id, "b");
    }
}
