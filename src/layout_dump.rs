use crate::layout::Layout;
use serde::Serialize;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

#[derive(Debug, Serialize)]
pub struct LayoutDump {
    pub width: f32,
    pub height: f32,
    pub dropped_connections: usize,
    pub layers: Vec<LayerDump>,
}

#[derive(Debug, Serialize)]
pub struct LayerDump {
    pub index: usize,
    pub y: f32,
    pub nodes: Vec<NodeDump>,
}

#[derive(Debug, Serialize)]
pub struct NodeDump {
    pub id: String,
    pub order: usize,
    pub x: f32,
    pub y: f32,
}

impl LayoutDump {
    pub fn from_layout(layout: &Layout) -> Self {
        let layers = layout
            .layers
            .iter()
            .enumerate()
            .map(|(index, ids)| {
                let nodes: Vec<NodeDump> = ids
                    .iter()
                    .filter_map(|id| {
                        layout.nodes.get(id).map(|placement| NodeDump {
                            id: id.to_string(),
                            order: placement.order,
                            x: placement.x,
                            y: placement.y,
                        })
                    })
                    .collect();
                let y = nodes.first().map_or(0.0, |node| node.y);
                LayerDump { index, y, nodes }
            })
            .collect();

        LayoutDump {
            width: layout.width,
            height: layout.height,
            dropped_connections: layout.dropped_connections,
            layers,
        }
    }
}

pub fn write_layout_dump(path: &Path, layout: &Layout) -> anyhow::Result<()> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    let dump = LayoutDump::from_layout(layout);
    serde_json::to_writer_pretty(writer, &dump)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::Workflow;

    #[test]
    fn dump_lists_layers_in_drawing_order() {
        let mut workflow = Workflow::new();
        workflow.add_node("a", 0.0, 0.0);
        workflow.add_node("b", 0.0, 0.0);
        workflow.add_node("c", 0.0, 0.0);
        workflow.add_connection("a", "b");
        workflow.add_connection("a", "c");
        workflow.add_connection("a", "nowhere");
        let layout = workflow.apply_layout().unwrap();

        let dump = LayoutDump::from_layout(&layout);
        assert_eq!(dump.layers.len(), 2);
        assert_eq!(dump.layers[1].y, 140.0);
        assert_eq!(dump.layers[1].nodes[0].id, "b");
        assert_eq!(dump.layers[1].nodes[1].order, 1);
        assert_eq!(dump.dropped_connections, 1);

        let value = serde_json::to_value(&dump).unwrap();
        assert_eq!(value["layers"][0]["nodes"][0]["id"], "a");
    }
}
