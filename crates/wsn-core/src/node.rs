//! The sensor node record.

use std::fmt;

use crate::{NodeId, Point};

/// One sensor: where it sits and how many packets it must deliver to the
/// rendezvous point.  Immutable once generated.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SensorNode {
    pub id:           NodeId,
    pub pos:          Point,
    /// Number of packets this node originates.  Always ≥ 1 for generated
    /// networks.
    pub data_packets: u32,
}

impl SensorNode {
    #[inline]
    pub fn new(id: NodeId, pos: Point, data_packets: u32) -> Self {
        Self { id, pos, data_packets }
    }

    #[inline]
    pub fn distance_to(&self, other: &SensorNode) -> f64 {
        self.pos.distance(other.pos)
    }
}

impl fmt::Display for SensorNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(Packets: {})", self.id, self.data_packets)
    }
}
