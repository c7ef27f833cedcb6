//! Unit tests for wsn-graph.
//!
//! Most tests use hand-placed fields so distances (and therefore costs) are
//! exact; property checks sweep seeded random fields.

#[cfg(test)]
mod helpers {
    use wsn_core::{NetworkConfig, NodeId, Point, SimRng};
    use crate::{SensorNetwork, SensorNetworkBuilder, generate_graph};

    /// Two sensors 10 units apart, 5 packets each, Tr = 15.
    pub fn pair() -> SensorNetwork {
        let mut b = SensorNetworkBuilder::new();
        b.add_node(Point::new(0.0, 0.0), 5);
        b.add_node(Point::new(10.0, 0.0), 5);
        b.build(15.0)
    }

    /// Three sensors on a line at x = 0, 10, 20 with Tr = 15:
    ///
    ///   0 —— 1 —— 2        (0 and 2 are 20 apart, not linked)
    ///
    /// Packets: 2, 3, 4.
    pub fn line() -> SensorNetwork {
        let mut b = SensorNetworkBuilder::new();
        b.add_node(Point::new(0.0, 0.0), 2);
        b.add_node(Point::new(10.0, 0.0), 3);
        b.add_node(Point::new(20.0, 0.0), 4);
        b.build(15.0)
    }

    /// Unit square with side 10, Tr = 12 (diagonals are ~14.1, unlinked):
    ///
    ///   2 —— 3
    ///   |    |
    ///   0 —— 1
    ///
    /// Every edge has the same cost, which exercises tie-breaking.
    pub fn square() -> SensorNetwork {
        let mut b = SensorNetworkBuilder::new();
        b.add_node(Point::new(0.0, 0.0), 1);
        b.add_node(Point::new(10.0, 0.0), 1);
        b.add_node(Point::new(0.0, 10.0), 1);
        b.add_node(Point::new(10.0, 10.0), 1);
        b.build(12.0)
    }

    /// Line 0—1 plus an isolated node 2 far away.
    pub fn split() -> SensorNetwork {
        let mut b = SensorNetworkBuilder::new();
        b.add_node(Point::new(0.0, 0.0), 1);
        b.add_node(Point::new(5.0, 0.0), 1);
        b.add_node(Point::new(40.0, 40.0), 1);
        b.build(10.0)
    }

    pub fn random(seed: u64, node_count: usize, tx_range: f64) -> SensorNetwork {
        let cfg = NetworkConfig {
            width: 50.0,
            length: 50.0,
            node_count,
            tx_range,
            min_packets: 1,
            max_packets: 10,
        };
        generate_graph(&cfg, SimRng::new(seed).inner()).unwrap()
    }

    pub fn ids(raw: &[u32]) -> Vec<NodeId> {
        raw.iter().map(|&i| NodeId(i)).collect()
    }
}

// ── Builder & network structure ────────────────────────────────────────────────

#[cfg(test)]
mod builder {
    use wsn_core::{NodeId, PACKET_SIZE_BITS, Point, energy_cost};
    use crate::{SensorNetwork, SensorNetworkBuilder};

    #[test]
    fn empty_build() {
        let net = SensorNetwork::empty();
        assert_eq!(net.node_count(), 0);
        assert_eq!(net.edge_count(), 0);
        assert!(net.is_empty());
        assert!(net.adjacency_matrix().is_empty());
    }

    #[test]
    fn pair_within_range() {
        let net = super::helpers::pair();
        assert_eq!(net.edge_count(), 2);
        assert_eq!(net.link_count(), 1);
        let e = net.edge_between(NodeId(0), NodeId(1)).unwrap();
        assert_eq!(e.distance, 10.0);
        assert_eq!(e.cost, energy_cost(PACKET_SIZE_BITS, 10.0));
    }

    #[test]
    fn range_boundary_is_inclusive() {
        let mut b = SensorNetworkBuilder::new();
        b.add_node(Point::new(0.0, 0.0), 1);
        b.add_node(Point::new(3.0, 4.0), 1);
        let net = b.build(5.0);
        assert_eq!(net.link_count(), 1);

        let mut b = SensorNetworkBuilder::new();
        b.add_node(Point::new(0.0, 0.0), 1);
        b.add_node(Point::new(3.0, 4.0), 1);
        let net = b.build(4.999);
        assert_eq!(net.link_count(), 0);
    }

    #[test]
    fn zero_range_links_only_coincident_nodes() {
        let mut b = SensorNetworkBuilder::new();
        b.add_node(Point::new(1.0, 1.0), 1);
        b.add_node(Point::new(1.0, 1.0), 1);
        b.add_node(Point::new(2.0, 1.0), 1);
        let net = b.build(0.0);
        assert_eq!(net.link_count(), 1);
        let e = net.edge_between(NodeId(0), NodeId(1)).unwrap();
        assert_eq!(e.distance, 0.0);
        assert_eq!(e.cost, energy_cost(PACKET_SIZE_BITS, 0.0));
    }

    #[test]
    fn neighbors_ascending_and_degrees() {
        let net = super::helpers::square();
        let n0: Vec<_> = net.neighbors(NodeId(0)).map(|e| e.to).collect();
        let n3: Vec<_> = net.neighbors(NodeId(3)).map(|e| e.to).collect();
        assert_eq!(n0, super::helpers::ids(&[1, 2]));
        assert_eq!(n3, super::helpers::ids(&[1, 2]));
        for i in 0..4 {
            assert_eq!(net.degree(NodeId(i)), 2);
        }
    }

    #[test]
    fn out_edges_source_correctness() {
        let net = super::helpers::line();
        for n in 0..3 {
            for e in net.out_edges(NodeId(n)) {
                assert_eq!(net.edge_from[e.index()], NodeId(n));
            }
        }
        assert!(net.edge_between(NodeId(0), NodeId(2)).is_none());
        assert!(net.edge_between(NodeId(9), NodeId(0)).is_none());
    }

    #[test]
    fn adjacency_matrix_matches_lists() {
        let net = super::helpers::line();
        let m = net.adjacency_matrix();
        assert_eq!(m.len(), 3);
        assert!(m[0][0].is_none());
        assert_eq!(m[0][1], Some(energy_cost(PACKET_SIZE_BITS, 10.0)));
        assert_eq!(m[1][0], m[0][1]);
        assert!(m[0][2].is_none());
    }
}

// ── Generated-graph invariants ────────────────────────────────────────────────

#[cfg(test)]
mod generation {
    use std::collections::HashSet;

    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use wsn_core::{NetworkConfig, NodeId, SimRng};
    use crate::{GraphError, ProximitySearch, find_components, generate_graph, generate_graph_with};

    #[test]
    fn edges_are_symmetric() {
        for seed in 0..25 {
            let net = super::helpers::random(seed, 40, 12.0);
            for i in 0..net.node_count() {
                let a = NodeId(i as u32);
                for e in net.neighbors(a) {
                    let back = net.edge_between(e.to, a).expect("mirror edge missing");
                    assert_eq!(back.cost, e.cost);
                    assert_eq!(back.distance, e.distance);
                }
            }
        }
    }

    #[test]
    fn links_match_range_without_loops_or_duplicates() {
        for seed in 0..10 {
            let net = super::helpers::random(seed, 30, 15.0);
            for a in &net.nodes {
                let listed: Vec<NodeId> = net.neighbors(a.id).map(|e| e.to).collect();
                let unique: HashSet<NodeId> = listed.iter().copied().collect();
                assert_eq!(unique.len(), listed.len(), "duplicate neighbor");
                assert!(!unique.contains(&a.id), "self-loop");
                for b in &net.nodes {
                    let within = a.id != b.id && a.distance_to(b) <= net.tx_range;
                    assert_eq!(within, unique.contains(&b.id));
                }
            }
        }
    }

    #[test]
    fn positions_and_loads_in_bounds() {
        let cfg = NetworkConfig {
            width: 30.0,
            length: 5.0,
            node_count: 200,
            tx_range: 3.0,
            min_packets: 4,
            max_packets: 6,
        };
        let net = generate_graph(&cfg, SimRng::new(9).inner()).unwrap();
        assert_eq!(net.node_count(), 200);
        for (i, n) in net.nodes.iter().enumerate() {
            assert_eq!(n.id.index(), i);
            assert!((0.0..=30.0).contains(&n.pos.x));
            assert!((0.0..=5.0).contains(&n.pos.y));
            assert!((4..=6).contains(&n.data_packets));
        }
    }

    #[test]
    fn same_seed_same_network() {
        let a = super::helpers::random(77, 60, 10.0);
        let b = super::helpers::random(77, 60, 10.0);
        assert_eq!(a.nodes, b.nodes);
        assert_eq!(a.edge_to, b.edge_to);
        assert_eq!(a.edge_cost, b.edge_cost);
        assert_eq!(a.node_out_start, b.node_out_start);
    }

    #[test]
    fn accepts_any_rng() {
        let cfg = NetworkConfig::default();
        let mut rng = StdRng::seed_from_u64(3);
        let net = generate_graph(&cfg, &mut rng).unwrap();
        assert_eq!(net.node_count(), cfg.node_count);
    }

    #[test]
    fn rtree_search_matches_pairwise() {
        for (seed, tr) in [(1u64, 0.0), (2, 5.0), (3, 12.5), (4, 80.0)] {
            let cfg = NetworkConfig { node_count: 70, tx_range: tr, ..Default::default() };
            let flat = generate_graph_with(&cfg, ProximitySearch::Pairwise, SimRng::new(seed).inner()).unwrap();
            let tree = generate_graph_with(&cfg, ProximitySearch::RTree, SimRng::new(seed).inner()).unwrap();
            assert_eq!(flat.node_out_start, tree.node_out_start, "seed {seed}");
            assert_eq!(flat.edge_to, tree.edge_to);
            assert_eq!(flat.edge_cost, tree.edge_cost);
            assert_eq!(flat.edge_distance, tree.edge_distance);
        }
    }

    #[test]
    fn empty_field() {
        let cfg = NetworkConfig { node_count: 0, ..Default::default() };
        let net = generate_graph(&cfg, SimRng::new(1).inner()).unwrap();
        assert!(net.is_empty());
        assert!(find_components(&net, Default::default()).is_empty());
    }

    #[test]
    fn invalid_config_rejected() {
        let cfg = NetworkConfig { min_packets: 8, max_packets: 2, ..Default::default() };
        let err = generate_graph(&cfg, SimRng::new(1).inner()).unwrap_err();
        assert!(matches!(err, GraphError::Core(_)));

        let cfg = NetworkConfig { tx_range: -3.0, ..Default::default() };
        assert!(generate_graph(&cfg, SimRng::new(1).inner()).is_err());
    }
}

// ── Components ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod components {
    use std::collections::BTreeSet;

    use wsn_core::{NetworkConfig, NodeId, SimRng};
    use crate::{Component, Traversal, dijkstra, find_components, generate_graph};

    fn as_sets(components: &[Component]) -> BTreeSet<BTreeSet<NodeId>> {
        components.iter().map(|c| c.iter().collect()).collect()
    }

    #[test]
    fn partition_is_disjoint_and_exhaustive() {
        for seed in 0..20 {
            let net = super::helpers::random(seed, 50, 9.0);
            for traversal in [Traversal::BreadthFirst, Traversal::DepthFirst] {
                let comps = find_components(&net, traversal);
                let mut seen = vec![false; net.node_count()];
                for c in &comps {
                    assert!(!c.is_empty());
                    for n in c.iter() {
                        assert!(!seen[n.index()], "{n} in two components");
                        seen[n.index()] = true;
                    }
                }
                assert!(seen.iter().all(|&s| s));
            }
        }
    }

    #[test]
    fn bfs_and_dfs_agree() {
        for seed in 0..20 {
            let net = super::helpers::random(seed, 50, 10.0);
            let bfs = find_components(&net, Traversal::BreadthFirst);
            let dfs = find_components(&net, Traversal::DepthFirst);
            assert_eq!(as_sets(&bfs), as_sets(&dfs));
            // Seeds are scanned in ascending order, so component order matches too.
            let firsts = |cs: &[Component]| cs.iter().map(|c| c.members[0]).collect::<Vec<_>>();
            assert_eq!(firsts(&bfs), firsts(&dfs));
        }
    }

    #[test]
    fn membership_equals_reachability() {
        for seed in 0..10 {
            let net = super::helpers::random(seed, 40, 11.0);
            for c in find_components(&net, Traversal::BreadthFirst) {
                let tree = dijkstra(&net, c.members[0]).unwrap();
                let reached: BTreeSet<NodeId> = tree.distances().map(|(n, _)| n).collect();
                let members: BTreeSet<NodeId> = c.iter().collect();
                assert_eq!(reached, members);
            }
        }
    }

    #[test]
    fn components_start_at_lowest_unvisited_id() {
        let net = super::helpers::split();
        let comps = find_components(&net, Traversal::DepthFirst);
        assert_eq!(comps.len(), 2);
        assert_eq!(comps[0].members, super::helpers::ids(&[0, 1]));
        assert_eq!(comps[1].members, super::helpers::ids(&[2]));
        assert!(comps[1].is_singleton());
    }

    #[test]
    fn traversal_order_within_component() {
        // Square: 0's neighbors are 1 and 2; 3 hangs off both.
        let net = super::helpers::square();
        let bfs = find_components(&net, Traversal::BreadthFirst);
        let dfs = find_components(&net, Traversal::DepthFirst);
        assert_eq!(bfs[0].members, super::helpers::ids(&[0, 1, 2, 3]));
        // DFS pops the most recently pushed neighbor (2) first.
        assert_eq!(dfs[0].members, super::helpers::ids(&[0, 2, 3, 1]));
    }

    #[test]
    fn single_node_is_one_singleton() {
        let cfg = NetworkConfig { node_count: 1, ..Default::default() };
        let net = generate_graph(&cfg, SimRng::new(5).inner()).unwrap();
        let comps = find_components(&net, Traversal::BreadthFirst);
        assert_eq!(comps.len(), 1);
        assert_eq!(comps[0].members, vec![NodeId(0)]);
    }

    #[test]
    fn zero_range_gives_all_singletons() {
        let cfg = NetworkConfig { node_count: 25, tx_range: 0.0, ..Default::default() };
        let net = generate_graph(&cfg, SimRng::new(11).inner()).unwrap();
        let comps = find_components(&net, Traversal::DepthFirst);
        assert_eq!(comps.len(), 25);
        assert!(comps.iter().all(|c| c.is_singleton()));
    }

    #[test]
    fn traversal_parses() {
        assert_eq!("bfs".parse::<Traversal>().unwrap(), Traversal::BreadthFirst);
        assert_eq!("DFS".parse::<Traversal>().unwrap(), Traversal::DepthFirst);
        assert!("zigzag".parse::<Traversal>().is_err());
        assert_eq!(Traversal::DepthFirst.to_string(), "dfs");
    }
}

// ── Dijkstra ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod routing {
    use wsn_core::{NodeId, PACKET_SIZE_BITS, energy_cost};
    use crate::{GraphError, dijkstra};

    #[test]
    fn line_distances_and_predecessors() {
        let net = super::helpers::line();
        let c = energy_cost(PACKET_SIZE_BITS, 10.0);
        let tree = dijkstra(&net, NodeId(0)).unwrap();
        assert_eq!(tree.distance(NodeId(0)), Some(0.0));
        assert_eq!(tree.distance(NodeId(1)), Some(c));
        assert_eq!(tree.distance(NodeId(2)), Some(c + c));
        assert_eq!(tree.predecessor(NodeId(0)), None);
        assert_eq!(tree.predecessor(NodeId(1)), Some(NodeId(0)));
        assert_eq!(tree.predecessor(NodeId(2)), Some(NodeId(1)));
        assert_eq!(
            tree.path_to_source(NodeId(2)).unwrap(),
            super::helpers::ids(&[2, 1, 0])
        );
    }

    #[test]
    fn unreachable_nodes_have_no_entry() {
        let net = super::helpers::split();
        let tree = dijkstra(&net, NodeId(0)).unwrap();
        assert!(!tree.is_reachable(NodeId(2)));
        assert!(tree.predecessor(NodeId(2)).is_none());
        assert!(tree.path_to_source(NodeId(2)).is_none());
        assert_eq!(tree.distances().count(), 2);
    }

    #[test]
    fn equal_cost_paths_keep_first_settled_predecessor() {
        let net = super::helpers::square();
        let tree = dijkstra(&net, NodeId(0)).unwrap();
        // 0→1→3 and 0→2→3 tie; node 1 settles first and is never displaced.
        assert_eq!(tree.predecessor(NodeId(3)), Some(NodeId(1)));
    }

    #[test]
    fn predecessor_chains_terminate_without_cycles() {
        for seed in 0..20 {
            let net = super::helpers::random(seed, 45, 12.0);
            let start = NodeId((seed % 45) as u32);
            let tree = dijkstra(&net, start).unwrap();
            for (node, d) in tree.distances() {
                let path = tree.path_to_source(node).unwrap();
                assert!(path.len() <= net.node_count());
                assert_eq!(*path.last().unwrap(), start);
                for pair in path.windows(2) {
                    let (near, far) = (pair[1], pair[0]);
                    assert!(tree.distance(near).unwrap() < tree.distance(far).unwrap());
                    assert!(net.edge_between(far, near).is_some());
                }
                assert!(d >= 0.0);
            }
        }
    }

    #[test]
    fn unknown_start_errors() {
        let net = super::helpers::pair();
        assert!(matches!(dijkstra(&net, NodeId(7)), Err(GraphError::NodeNotFound(_))));
    }
}

// ── Prim ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod spanning {
    use std::collections::HashSet;

    use wsn_core::NodeId;
    use crate::{GraphError, Traversal, TreeEdge, find_components, prim};

    #[test]
    fn square_tree_and_tie_order() {
        let net = super::helpers::square();
        let tree = prim(&net, NodeId(0)).unwrap();
        let pairs: Vec<_> = tree.iter().map(|e| (e.from.0, e.to.0)).collect();
        assert_eq!(pairs, vec![(0, 1), (0, 2), (1, 3)]);
    }

    #[test]
    fn picks_cheaper_links() {
        use wsn_core::Point;
        use crate::SensorNetworkBuilder;

        // Triangle 0(0,0) 1(4,0) 2(4,3): sides 4, 3, 5.  MST drops the 5.
        let mut b = SensorNetworkBuilder::new();
        b.add_node(Point::new(0.0, 0.0), 1);
        b.add_node(Point::new(4.0, 0.0), 1);
        b.add_node(Point::new(4.0, 3.0), 1);
        let net = b.build(6.0);
        let tree = prim(&net, NodeId(2)).unwrap();
        let pairs: Vec<_> = tree.iter().map(|e| (e.from.0, e.to.0)).collect();
        assert_eq!(pairs, vec![(2, 1), (1, 0)]);
    }

    #[test]
    fn spans_exactly_the_component() {
        for seed in 0..20 {
            let net = super::helpers::random(seed, 50, 10.0);
            for c in find_components(&net, Traversal::BreadthFirst) {
                let start = c.members[c.len() / 2];
                let tree: Vec<TreeEdge> = prim(&net, start).unwrap();
                assert_eq!(tree.len(), c.len() - 1);

                let mut visited: HashSet<NodeId> = HashSet::from([start]);
                for e in &tree {
                    assert!(c.contains(e.from) && c.contains(e.to));
                    assert!(visited.contains(&e.from), "grown from outside the tree");
                    assert!(visited.insert(e.to), "{} revisited", e.to);
                    assert_eq!(net.edge_between(e.from, e.to).unwrap().cost, e.cost);
                }
                assert_eq!(visited.len(), c.len());
            }
        }
    }

    #[test]
    fn singleton_has_no_edges() {
        let net = super::helpers::split();
        assert!(prim(&net, NodeId(2)).unwrap().is_empty());
    }

    #[test]
    fn unknown_start_errors() {
        let net = super::helpers::pair();
        assert!(matches!(prim(&net, NodeId(2)), Err(GraphError::NodeNotFound(_))));
    }
}

// ── Routing energy ────────────────────────────────────────────────────────────

#[cfg(test)]
mod energy {
    use wsn_core::{NetworkConfig, NodeId, PACKET_SIZE_BITS, SimRng, energy_cost};
    use crate::{
        Component, GraphError, Traversal, find_components, generate_graph, prim,
        total_energy_dijkstra, total_energy_mst,
    };

    #[test]
    fn two_node_strategies_differ_by_design() {
        let net = super::helpers::pair();
        let cost = energy_cost(PACKET_SIZE_BITS, 10.0);
        let comp = &find_components(&net, Traversal::BreadthFirst)[0];

        // Shortest-path tree: only the non-rendezvous node pays, once.
        let spt = total_energy_dijkstra(&net, comp, NodeId(0)).unwrap();
        assert_eq!(spt, 5.0 * cost);

        // Spanning tree: both endpoints pay for the single link.
        let mst = total_energy_mst(&net, &prim(&net, NodeId(0)).unwrap()).unwrap();
        assert_eq!(mst, 10.0 * cost);
        assert_eq!(mst, 2.0 * spt);
    }

    #[test]
    fn only_first_hop_is_charged() {
        let net = super::helpers::line();
        let c = energy_cost(PACKET_SIZE_BITS, 10.0);
        let comp = &find_components(&net, Traversal::BreadthFirst)[0];

        // Node 2 is two hops out but pays only for its hop to node 1; node 1
        // is not charged for relaying node 2's packets.
        let spt = total_energy_dijkstra(&net, comp, NodeId(0)).unwrap();
        assert!((spt - (3.0 * c + 4.0 * c)).abs() < 1e-15);

        // From the middle, both ends pay one hop.
        let spt_mid = total_energy_dijkstra(&net, comp, NodeId(1)).unwrap();
        assert!((spt_mid - (2.0 * c + 4.0 * c)).abs() < 1e-15);

        let mst = total_energy_mst(&net, &prim(&net, NodeId(0)).unwrap()).unwrap();
        assert!((mst - ((2.0 + 3.0) * c + (3.0 + 4.0) * c)).abs() < 1e-15);
    }

    #[test]
    fn singleton_costs_nothing() {
        let cfg = NetworkConfig { node_count: 1, ..Default::default() };
        let net = generate_graph(&cfg, SimRng::new(2).inner()).unwrap();
        let comp = &find_components(&net, Traversal::BreadthFirst)[0];
        assert_eq!(total_energy_dijkstra(&net, comp, NodeId(0)).unwrap(), 0.0);
        assert_eq!(total_energy_mst(&net, &prim(&net, NodeId(0)).unwrap()).unwrap(), 0.0);
    }

    #[test]
    fn disconnected_member_is_an_error_not_zero() {
        let net = super::helpers::split();
        let bogus = Component { members: super::helpers::ids(&[0, 1, 2]) };
        let err = total_energy_dijkstra(&net, &bogus, NodeId(0)).unwrap_err();
        assert!(matches!(
            err,
            GraphError::Unreachable { node: NodeId(2), rendezvous: NodeId(0) }
        ));
    }

    #[test]
    fn rendezvous_must_be_a_member() {
        let net = super::helpers::split();
        let comps = find_components(&net, Traversal::BreadthFirst);
        let err = total_energy_dijkstra(&net, &comps[0], NodeId(2)).unwrap_err();
        assert!(matches!(err, GraphError::RendezvousOutsideComponent(NodeId(2))));
    }

    #[test]
    fn totals_are_non_negative_and_repeatable() {
        for seed in 0..10 {
            let net = super::helpers::random(seed, 40, 14.0);
            for c in find_components(&net, Traversal::DepthFirst) {
                let r = c.members[0];
                let a = total_energy_dijkstra(&net, &c, r).unwrap();
                let b = total_energy_dijkstra(&net, &c, r).unwrap();
                assert_eq!(a, b);
                assert!(a >= 0.0);
                let m = total_energy_mst(&net, &prim(&net, r).unwrap()).unwrap();
                assert!(m >= 0.0);
                assert_eq!(c.is_singleton(), a == 0.0 && m == 0.0);
            }
        }
    }
}
