//! Network generation parameters.

use std::ops::RangeInclusive;

use crate::{WsnError, WsnResult};

/// Parameters for one randomly generated sensor field.
///
/// Typically filled in by the application (or loaded from TOML by
/// `wsn-sim`) and checked with [`validate`](Self::validate) before any
/// sampling happens.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct NetworkConfig {
    /// Field extent along x.
    pub width: f64,

    /// Field extent along y.
    pub length: f64,

    /// Number of sensor nodes `N`.  Zero is allowed and yields an empty
    /// network.
    pub node_count: usize,

    /// Transmission range `Tr`.  Nodes at distance `<= tx_range` are linked.
    /// Zero is allowed: only coincident nodes would link.
    pub tx_range: f64,

    /// Smallest per-node packet load (inclusive, ≥ 1).
    pub min_packets: u32,

    /// Largest per-node packet load (inclusive).
    pub max_packets: u32,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            width:       50.0,
            length:      50.0,
            node_count:  50,
            tx_range:    15.0,
            min_packets: 1,
            max_packets: 10,
        }
    }
}

impl NetworkConfig {
    /// Reject parameters that cannot describe a field.
    pub fn validate(&self) -> WsnResult<()> {
        if !self.width.is_finite() || self.width < 0.0 {
            return Err(WsnError::Config(format!(
                "width must be a finite non-negative number, got {}",
                self.width
            )));
        }
        if !self.length.is_finite() || self.length < 0.0 {
            return Err(WsnError::Config(format!(
                "length must be a finite non-negative number, got {}",
                self.length
            )));
        }
        if !self.tx_range.is_finite() || self.tx_range < 0.0 {
            return Err(WsnError::Config(format!(
                "transmission range must be a finite non-negative number, got {}",
                self.tx_range
            )));
        }
        if self.min_packets == 0 {
            return Err(WsnError::Config("minimum packet load must be at least 1".into()));
        }
        if self.min_packets > self.max_packets {
            return Err(WsnError::Config(format!(
                "packet range is inverted: min {} > max {}",
                self.min_packets, self.max_packets
            )));
        }
        u32::try_from(self.node_count).map_err(|_| {
            WsnError::Config(format!("node count {} exceeds the id space", self.node_count))
        })?;
        Ok(())
    }

    /// The inclusive packet-load range.
    #[inline]
    pub fn packet_range(&self) -> RangeInclusive<u32> {
        self.min_packets..=self.max_packets
    }
}
