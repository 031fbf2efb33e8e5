//! Neural-network and data-flow background modes.
//!
//! Both are pure functions of the canvas size and the wall clock, so there
//! is no per-frame state beyond the node layout.

use serde::Serialize;

use crate::geometry::{Bounds, Point};

/// Layer sizes of the background network.
pub const BACKGROUND_LAYERS: [usize; 4] = [2, 4, 3, 2];
/// Node radius in pixels.
pub const NODE_RADIUS: f64 = 12.0;
/// Lanes drawn in data-flow mode.
pub const FLOW_LANES: usize = 3;

/// Position of a node in the network.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeRole {
    Input,
    Hidden,
    Output,
}

impl NodeRole {
    pub fn color(self) -> &'static str {
        match self {
            Self::Input => "#10B981",
            Self::Hidden => "#3B82F6",
            Self::Output => "#F59E0B",
        }
    }
}

/// A laid-out node.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Node {
    pub id: usize,
    pub position: Point,
    pub role: NodeRole,
    /// `x0`, `h2`, `y1`...
    pub label: String,
    /// Ids of the nodes in the next layer
    pub targets: Vec<usize>,
}

/// Fully connected feed-forward layout.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct NeuralNetwork {
    nodes: Vec<Node>,
}

impl NeuralNetwork {
    /// Spread `layers` evenly across `bounds`: layer `l` sits at
    /// `x = w / (L + 1) * (l + 1)`, node `i` of `n` at `y = h / (n + 1) * (i + 1)`.
    pub fn layout(bounds: Bounds, layers: &[usize]) -> Self {
        let spacing_x = bounds.width / (layers.len() + 1) as f64;
        let mut nodes = Vec::with_capacity(layers.iter().sum());
        let mut first_id = 0;
        for (layer, &count) in layers.iter().enumerate() {
            let spacing_y = bounds.height / (count + 1) as f64;
            let role = if layer == 0 {
                NodeRole::Input
            } else if layer + 1 == layers.len() {
                NodeRole::Output
            } else {
                NodeRole::Hidden
            };
            let next = layers.get(layer + 1).copied().unwrap_or(0);
            for i in 0..count {
                let prefix = match role {
                    NodeRole::Input => 'x',
                    NodeRole::Hidden => 'h',
                    NodeRole::Output => 'y',
                };
                nodes.push(Node {
                    id: first_id + i,
                    position: Point::new(spacing_x * (layer + 1) as f64, spacing_y * (i + 1) as f64),
                    role,
                    label: format!("{prefix}{i}"),
                    targets: (0..next).map(|j| first_id + count + j).collect(),
                });
            }
            first_id += count;
        }
        Self { nodes }
    }

    /// Layout of [`BACKGROUND_LAYERS`].
    pub fn background(bounds: Bounds) -> Self {
        Self::layout(bounds, &BACKGROUND_LAYERS)
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Every `(from, to)` edge.
    pub fn edges(&self) -> impl Iterator<Item = (&Node, &Node)> {
        self.nodes.iter().flat_map(move |node| {
            node.targets
                .iter()
                .filter_map(move |&t| self.nodes.get(t).map(|target| (node, target)))
        })
    }
}

/// Node glow in `[0, 1]`.
pub fn activation(node: usize, t_ms: f64) -> f64 {
    (t_ms * 0.001 + node as f64).sin() * 0.5 + 0.5
}

/// Edge strength in `[0, 1]` for edges leaving `node`.
pub fn weight(node: usize, t_ms: f64) -> f64 {
    (t_ms * 0.0005 + node as f64).sin() * 0.5 + 0.5
}

/// One data-flow lane at a moment in time.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FlowLane {
    /// Wavy baseline sampled every 15 px
    pub path: Vec<Point>,
    /// The packet riding the lane
    pub packet: Point,
    /// HSL hue in degrees
    pub hue: f64,
}

/// Lanes at evenly spaced heights with a packet each.
pub fn data_flow_lanes(bounds: Bounds, t_ms: f64) -> Vec<FlowLane> {
    let time = t_ms * 0.0005;
    let wave = |x: f64, base: f64, lane: f64| base + (x * 0.008 + time * 2.0 + lane).sin() * 15.0;
    (0..FLOW_LANES)
        .map(|lane| {
            let base = bounds.height / (FLOW_LANES + 1) as f64 * (lane + 1) as f64;
            let l = lane as f64;
            let mut path = Vec::new();
            let mut x = 0.0;
            while x <= bounds.width {
                path.push(Point::new(x, wave(x, base, l)));
                x += 15.0;
            }
            let packet_x = (time * 50.0 + l * 150.0) % (bounds.width + 100.0);
            FlowLane {
                path,
                packet: Point::new(packet_x, wave(packet_x, base, l)),
                hue: (l * 120.0 + time * 30.0) % 360.0,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn background_layout_is_fully_connected() {
        let net = NeuralNetwork::background(Bounds::new(500.0, 300.0));
        assert_eq!(net.nodes().len(), 11);
        assert_eq!(net.edges().count(), 2 * 4 + 4 * 3 + 3 * 2);
        let roles: Vec<_> = net.nodes().iter().map(|n| n.role).collect();
        assert_eq!(roles[0], NodeRole::Input);
        assert_eq!(roles[2], NodeRole::Hidden);
        assert_eq!(roles[10], NodeRole::Output);
        assert_eq!(net.nodes()[0].position, Point::new(100.0, 100.0));
        assert_eq!(net.nodes()[0].targets, vec![2, 3, 4, 5]);
        assert_eq!(net.nodes()[10].label, "y1");
        assert!(net.nodes()[10].targets.is_empty());
    }

    #[test]
    fn edges_point_forward() {
        let net = NeuralNetwork::background(Bounds::new(800.0, 600.0));
        for (from, to) in net.edges() {
            assert!(to.position.x > from.position.x);
        }
    }

    #[test]
    fn oscillators_stay_in_unit_range() {
        for node in 0..11 {
            for t in [0.0, 1234.5, 9e6] {
                assert!((0.0..=1.0).contains(&activation(node, t)));
                assert!((0.0..=1.0).contains(&weight(node, t)));
            }
        }
    }

    #[test]
    fn lanes_span_the_width() {
        let bounds = Bounds::new(300.0, 400.0);
        let lanes = data_flow_lanes(bounds, 2000.0);
        assert_eq!(lanes.len(), FLOW_LANES);
        assert_eq!(lanes[0].path.len(), 21);
        for lane in &lanes {
            assert!(lane.packet.x >= 0.0 && lane.packet.x < bounds.width + 100.0);
            assert!((0.0..360.0).contains(&lane.hue));
        }
    }
}
