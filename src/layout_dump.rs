use serde::Serialize;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use crate::ir::{Scene, SortMode};
use crate::layout::{PositionEntry, PositionMap};

/// JSON projection of a layout pass, written by the CLI and handy for
/// diffing layouts across engine changes.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutDump {
    pub sort_mode: String,
    pub canvas_width: f32,
    pub canvas_height: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expanded_node_id: Option<String>,
    pub nodes: Vec<NodeDump>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeDump {
    pub id: String,
    #[serde(flatten)]
    pub position: PositionEntry,
}

impl LayoutDump {
    pub fn new(scene: &Scene, map: &PositionMap) -> Self {
        let nodes = map
            .iter()
            .map(|(id, position)| NodeDump {
                id: id.clone(),
                position: position.clone(),
            })
            .collect();
        let sort_mode = match scene.sort_mode {
            SortMode::Popular => "popular",
            SortMode::Newest => "newest",
        };
        LayoutDump {
            sort_mode: sort_mode.to_string(),
            canvas_width: scene.canvas_width,
            canvas_height: scene.canvas_height,
            expanded_node_id: scene.expanded_node_id.clone(),
            nodes,
        }
    }
}

pub fn write_layout_dump(path: &Path, dump: &LayoutDump) -> anyhow::Result<()> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, dump)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LayoutConfig;
    use crate::ir::{NodeDescriptor, NodeKind, SortMode};
    use crate::layout::compute_scene_layout;

    #[test]
    fn dump_lists_every_node_in_key_order() {
        let scene = Scene {
            center: NodeDescriptor {
                id: "w1".to_string(),
                timestamp: 0,
                weight: 0,
                size: 200.0,
                kind: NodeKind::Word,
            },
            alternatives: vec![
                NodeDescriptor {
                    id: "b".to_string(),
                    timestamp: 0,
                    weight: 1,
                    size: 100.0,
                    kind: NodeKind::Definition,
                },
                NodeDescriptor {
                    id: "a".to_string(),
                    timestamp: 0,
                    weight: 2,
                    size: 100.0,
                    kind: NodeKind::Definition,
                },
            ],
            sort_mode: SortMode::Popular,
            canvas_width: 800.0,
            canvas_height: 600.0,
            expanded_node_id: None,
        };
        let map = compute_scene_layout(&scene, &LayoutConfig::default()).unwrap();
        let dump = LayoutDump::new(&scene, &map);
        let ids: Vec<&str> = dump.nodes.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, ["a", "b", "w1"]);
        assert_eq!(dump.sort_mode, "popular");
        let json = serde_json::to_string(&dump).unwrap();
        assert!(json.contains("\"ringPosition\""));
    }
}
