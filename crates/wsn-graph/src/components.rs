//! Connected-component partitioning.

use std::collections::VecDeque;
use std::fmt;
use std::str::FromStr;

use wsn_core::NodeId;

use crate::network::SensorNetwork;

/// Traversal order used to sweep a component.
///
/// Both orders produce the same partition; only the order of ids inside each
/// [`Component`] differs.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Traversal {
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "bfs"))]
    BreadthFirst,
    #[cfg_attr(feature = "serde", serde(rename = "dfs"))]
    DepthFirst,
}

impl fmt::Display for Traversal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Traversal::BreadthFirst => "bfs",
            Traversal::DepthFirst   => "dfs",
        })
    }
}

impl FromStr for Traversal {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bfs" | "breadth-first" => Ok(Traversal::BreadthFirst),
            "dfs" | "depth-first"   => Ok(Traversal::DepthFirst),
            other => Err(format!("unknown traversal '{other}' (expected bfs or dfs)")),
        }
    }
}

/// A maximal set of mutually reachable nodes, in traversal order.  The first
/// member is the lowest id in the component.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Component {
    pub members: Vec<NodeId>,
}

impl Component {
    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn is_singleton(&self) -> bool {
        self.members.len() == 1
    }

    pub fn contains(&self, node: NodeId) -> bool {
        self.members.contains(&node)
    }

    pub fn iter(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.members.iter().copied()
    }
}

/// Partition every node of `network` into connected components.
///
/// Seeds are taken in ascending id order, so the result is fully determined
/// by the network.  Nodes are marked visited when first discovered, never
/// twice.
pub fn find_components(network: &SensorNetwork, traversal: Traversal) -> Vec<Component> {
    let n = network.node_count();
    let mut visited = vec![false; n];
    let mut components = Vec::new();

    for seed in 0..n {
        if visited[seed] {
            continue;
        }
        let start = NodeId(seed as u32);
        let members = match traversal {
            Traversal::BreadthFirst => sweep_bfs(network, start, &mut visited),
            Traversal::DepthFirst   => sweep_dfs(network, start, &mut visited),
        };
        components.push(Component { members });
    }

    log::debug!(
        "found {} components ({} singletons) via {}",
        components.len(),
        components.iter().filter(|c| c.is_singleton()).count(),
        traversal,
    );
    components
}

fn sweep_bfs(network: &SensorNetwork, start: NodeId, visited: &mut [bool]) -> Vec<NodeId> {
    let mut queue = VecDeque::from([start]);
    let mut members = Vec::new();
    visited[start.index()] = true;

    while let Some(node) = queue.pop_front() {
        members.push(node);
        for e in network.neighbors(node) {
            if !visited[e.to.index()] {
                visited[e.to.index()] = true;
                queue.push_back(e.to);
            }
        }
    }
    members
}

fn sweep_dfs(network: &SensorNetwork, start: NodeId, visited: &mut [bool]) -> Vec<NodeId> {
    let mut stack = vec![start];
    let mut members = Vec::new();
    visited[start.index()] = true;

    while let Some(node) = stack.pop() {
        members.push(node);
        for e in network.neighbors(node) {
            if !visited[e.to.index()] {
                visited[e.to.index()] = true;
                stack.push(e.to);
            }
        }
    }
    members
}
