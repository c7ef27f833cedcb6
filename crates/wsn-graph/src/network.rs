//! Sensor network representation and builder.
//!
//! # Data layout
//!
//! The proximity graph uses **Compressed Sparse Row (CSR)** format for
//! outgoing edges.  Given a `NodeId n`, its outgoing edges occupy the slice:
//!
//! ```text
//! edge_to[ node_out_start[n] .. node_out_start[n+1] ]
//! ```
//!
//! All edge arrays (`edge_from`, `edge_to`, `edge_cost`, `edge_distance`)
//! are sorted by source node and indexed by `EdgeId`.  Within one node's
//! slice, neighbors appear in ascending id order.  Every undirected link is
//! stored twice, once per direction, with identical cost and distance.
//!
//! # Proximity search
//!
//! Links are found either by examining every pair (the default, O(N²)) or
//! through an R-tree (via `rstar`).  Both produce the same arrays.

use rstar::{PointDistance, RTree, RTreeObject, AABB};

use wsn_core::{EdgeId, NodeId, PACKET_SIZE_BITS, Point, SensorNode, energy_cost};

// ── Edge record ───────────────────────────────────────────────────────────────

/// One outgoing adjacency entry: the neighbor, the energy cost of sending a
/// packet across the link, and the link's length.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Edge {
    pub to:       NodeId,
    pub cost:     f64,
    pub distance: f64,
}

// ── Proximity search strategy ─────────────────────────────────────────────────

/// How [`SensorNetworkBuilder::build`] discovers node pairs within range.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ProximitySearch {
    /// Examine all `N·(N-1)/2` pairs.
    #[default]
    Pairwise,
    /// Query an R-tree around each node.
    RTree,
}

// ── R-tree node entry ─────────────────────────────────────────────────────────

/// Entry stored in the R-tree spatial index.
#[derive(Clone)]
struct NodeEntry {
    point: [f64; 2],
    id:    NodeId,
}

impl RTreeObject for NodeEntry {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for NodeEntry {
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        Point::new(self.point[0], self.point[1]).distance_sq(Point::new(point[0], point[1]))
    }
}

// ── SensorNetwork ─────────────────────────────────────────────────────────────

/// Undirected proximity graph in CSR format plus the node records.
///
/// All fields are `pub` for direct indexed access on hot paths.  The graph
/// is read-only once built; use [`SensorNetworkBuilder`] or
/// [`generate_graph`](crate::generate_graph) to create one.
#[derive(Debug, Clone)]
pub struct SensorNetwork {
    // ── Node data ─────────────────────────────────────────────────────────
    /// Node records, indexed by `NodeId`.
    pub nodes: Vec<SensorNode>,

    /// Transmission range the links were built with.
    pub tx_range: f64,

    // ── CSR edge adjacency ────────────────────────────────────────────────
    /// CSR row pointer.  Length = `node_count + 1`.
    pub node_out_start: Vec<u32>,

    // ── Edge data (indexed by EdgeId) ─────────────────────────────────────
    pub edge_from: Vec<NodeId>,

    pub edge_to: Vec<NodeId>,

    /// Energy to move one packet across the edge (transmit + receive).
    pub edge_cost: Vec<f64>,

    /// Euclidean length of the edge.
    pub edge_distance: Vec<f64>,
}

impl SensorNetwork {
    /// A network with no nodes or edges.
    pub fn empty() -> Self {
        SensorNetworkBuilder::new().build(0.0)
    }

    // ── Graph dimensions ──────────────────────────────────────────────────

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of directed edges (twice the number of links).
    pub fn edge_count(&self) -> usize {
        self.edge_to.len()
    }

    /// Number of undirected links.
    pub fn link_count(&self) -> usize {
        self.edge_count() / 2
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[inline]
    pub fn contains(&self, node: NodeId) -> bool {
        node.index() < self.nodes.len()
    }

    #[inline]
    pub fn node(&self, id: NodeId) -> Option<&SensorNode> {
        self.nodes.get(id.index())
    }

    // ── Graph traversal ───────────────────────────────────────────────────

    /// Iterator over the `EdgeId`s of all outgoing edges from `node`.
    ///
    /// # Panics
    /// Panics if `node` is not in the network.
    #[inline]
    pub fn out_edges(&self, node: NodeId) -> impl Iterator<Item = EdgeId> + '_ {
        let start = self.node_out_start[node.index()] as usize;
        let end   = self.node_out_start[node.index() + 1] as usize;
        (start..end).map(|i| EdgeId(i as u32))
    }

    #[inline]
    pub fn edge(&self, edge: EdgeId) -> Edge {
        Edge {
            to:       self.edge_to[edge.index()],
            cost:     self.edge_cost[edge.index()],
            distance: self.edge_distance[edge.index()],
        }
    }

    /// The ordered adjacency list of `node` as edge records.
    #[inline]
    pub fn neighbors(&self, node: NodeId) -> impl Iterator<Item = Edge> + '_ {
        self.out_edges(node).map(|e| self.edge(e))
    }

    #[inline]
    pub fn degree(&self, node: NodeId) -> usize {
        let start = self.node_out_start[node.index()] as usize;
        let end   = self.node_out_start[node.index() + 1] as usize;
        end - start
    }

    /// The edge from `from` to `to`, if the two nodes are linked.
    pub fn edge_between(&self, from: NodeId, to: NodeId) -> Option<Edge> {
        if !self.contains(from) {
            return None;
        }
        self.neighbors(from).find(|e| e.to == to)
    }

    /// Dense `N × N` view of the edge costs; `None` where nodes are not
    /// linked (including the diagonal).
    pub fn adjacency_matrix(&self) -> Vec<Vec<Option<f64>>> {
        let n = self.node_count();
        let mut matrix = vec![vec![None; n]; n];
        for (i, row) in matrix.iter_mut().enumerate() {
            for e in self.neighbors(NodeId(i as u32)) {
                row[e.to.index()] = Some(e.cost);
            }
        }
        matrix
    }
}

// ── SensorNetworkBuilder ──────────────────────────────────────────────────────

/// Place nodes, then call [`build`](Self::build) to link every pair within
/// range.
///
/// # Example
///
/// ```
/// use wsn_core::Point;
/// use wsn_graph::SensorNetworkBuilder;
///
/// let mut b = SensorNetworkBuilder::new();
/// let a = b.add_node(Point::new(0.0, 0.0), 5);
/// let c = b.add_node(Point::new(10.0, 0.0), 5);
/// let net = b.build(15.0);
/// assert_eq!(net.node_count(), 2);
/// assert_eq!(net.edge_count(), 2); // one link, both directions
/// assert_eq!(net.edge_between(a, c).unwrap().distance, 10.0);
/// ```
pub struct SensorNetworkBuilder {
    nodes:     Vec<SensorNode>,
    proximity: ProximitySearch,
}

struct RawEdge {
    from:     NodeId,
    to:       NodeId,
    cost:     f64,
    distance: f64,
}

impl SensorNetworkBuilder {
    pub fn new() -> Self {
        Self { nodes: Vec::new(), proximity: ProximitySearch::Pairwise }
    }

    pub fn with_capacity(nodes: usize) -> Self {
        Self { nodes: Vec::with_capacity(nodes), proximity: ProximitySearch::Pairwise }
    }

    /// Select the pair-discovery strategy.
    pub fn proximity(mut self, proximity: ProximitySearch) -> Self {
        self.proximity = proximity;
        self
    }

    /// Add a sensor and return its `NodeId` (sequential from 0).
    pub fn add_node(&mut self, pos: Point, data_packets: u32) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(SensorNode::new(id, pos, data_packets));
        id
    }

    pub fn node_count(&self) -> usize { self.nodes.len() }

    /// Consume the builder and link every pair at distance `<= tx_range`.
    pub fn build(self, tx_range: f64) -> SensorNetwork {
        let node_count = self.nodes.len();

        let links = match self.proximity {
            ProximitySearch::Pairwise => pairwise_links(&self.nodes, tx_range),
            ProximitySearch::RTree    => rtree_links(&self.nodes, tx_range),
        };

        let mut raw = Vec::with_capacity(links.len() * 2);
        for (i, j, distance) in links {
            let cost = energy_cost(PACKET_SIZE_BITS, distance);
            raw.push(RawEdge { from: i, to: j, cost, distance });
            raw.push(RawEdge { from: j, to: i, cost, distance });
        }

        // Stable sort keeps each node's neighbors in ascending id order:
        // links arrive ordered by (min id, max id).
        raw.sort_by_key(|e| e.from.0);

        let edge_from:     Vec<NodeId> = raw.iter().map(|e| e.from).collect();
        let edge_to:       Vec<NodeId> = raw.iter().map(|e| e.to).collect();
        let edge_cost:     Vec<f64>    = raw.iter().map(|e| e.cost).collect();
        let edge_distance: Vec<f64>    = raw.iter().map(|e| e.distance).collect();

        let mut node_out_start = vec![0u32; node_count + 1];
        for e in &raw {
            node_out_start[e.from.index() + 1] += 1;
        }
        for i in 1..=node_count {
            node_out_start[i] += node_out_start[i - 1];
        }
        debug_assert_eq!(node_out_start[node_count] as usize, raw.len());

        log::debug!(
            "built sensor network: {} nodes, {} links (Tr = {}, {:?})",
            node_count,
            raw.len() / 2,
            tx_range,
            self.proximity,
        );

        SensorNetwork {
            nodes: self.nodes,
            tx_range,
            node_out_start,
            edge_from,
            edge_to,
            edge_cost,
            edge_distance,
        }
    }
}

impl Default for SensorNetworkBuilder {
    fn default() -> Self {
        Self::new()
    }
}

// ── Pair discovery ────────────────────────────────────────────────────────────

/// All `(i, j, distance)` with `i < j` and `distance <= tx_range`, ordered by
/// `(i, j)`.
fn pairwise_links(nodes: &[SensorNode], tx_range: f64) -> Vec<(NodeId, NodeId, f64)> {
    let mut links = Vec::new();
    for (i, a) in nodes.iter().enumerate() {
        for b in &nodes[i + 1..] {
            let d = a.distance_to(b);
            if d <= tx_range {
                links.push((a.id, b.id, d));
            }
        }
    }
    links
}

/// Same result as [`pairwise_links`], with candidates drawn from an R-tree.
fn rtree_links(nodes: &[SensorNode], tx_range: f64) -> Vec<(NodeId, NodeId, f64)> {
    let entries: Vec<NodeEntry> = nodes
        .iter()
        .map(|n| NodeEntry { point: [n.pos.x, n.pos.y], id: n.id })
        .collect();
    let tree = RTree::bulk_load(entries);

    // Widen the query slightly; the exact `d <= tx_range` test below decides.
    let query_radius_sq = tx_range * tx_range * (1.0 + 1e-9) + f64::MIN_POSITIVE;

    let mut links = Vec::new();
    for a in nodes {
        let mut near: Vec<NodeId> = tree
            .locate_within_distance([a.pos.x, a.pos.y], query_radius_sq)
            .map(|e| e.id)
            .filter(|&id| id > a.id)
            .collect();
        near.sort_unstable();
        for j in near {
            let d = a.distance_to(&nodes[j.index()]);
            if d <= tx_range {
                links.push((a.id, j, d));
            }
        }
    }
    links
}
