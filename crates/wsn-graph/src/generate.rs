//! Random sensor-field generation.

use rand::Rng;

use wsn_core::{NetworkConfig, Point};

use crate::network::{ProximitySearch, SensorNetwork, SensorNetworkBuilder};
use crate::GraphResult;

/// Scatter `config.node_count` sensors uniformly over the field and link
/// every pair within `config.tx_range`.
///
/// For each node in id order the draws are `x`, then `y`, then the packet
/// load, so a fixed seed always reproduces the same field.  The caller owns
/// the random source; pass [`SimRng::inner`](wsn_core::SimRng::inner) for a
/// seeded run.
pub fn generate_graph<R: Rng>(
    config: &NetworkConfig,
    rng:    &mut R,
) -> GraphResult<SensorNetwork> {
    generate_graph_with(config, ProximitySearch::Pairwise, rng)
}

/// [`generate_graph`] with an explicit pair-discovery strategy.
pub fn generate_graph_with<R: Rng>(
    config:    &NetworkConfig,
    proximity: ProximitySearch,
    rng:       &mut R,
) -> GraphResult<SensorNetwork> {
    config.validate()?;

    let mut b = SensorNetworkBuilder::with_capacity(config.node_count).proximity(proximity);
    for _ in 0..config.node_count {
        let x = rng.gen_range(0.0..=config.width);
        let y = rng.gen_range(0.0..=config.length);
        let packets = rng.gen_range(config.packet_range());
        b.add_node(Point::new(x, y), packets);
    }

    Ok(b.build(config.tx_range))
}
