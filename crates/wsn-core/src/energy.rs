//! First-order radio energy model.
//!
//! Sending `k` bits over `l` field units costs
//!
//! ```text
//! ET(k, l) = E_elec·k + E_amp·k·l²      (electronics + free-space amplifier)
//! ER(k)    = E_elec·k                   (receiver electronics)
//! ```
//!
//! and one hop is charged `ET + ER`.  All values are in joules.

/// Electronics energy per bit (100 nJ/bit).
pub const E_ELEC: f64 = 1e-7;

/// Amplifier energy per bit per squared field unit (100 pJ/bit/m²).
pub const E_AMP: f64 = 1e-10;

/// Fixed packet size used for every transmission in the model.
pub const PACKET_SIZE_BITS: u32 = 3200;

/// Energy spent by the sender to push `bits` across `distance`.
#[inline]
pub fn transmit_energy(bits: u32, distance: f64) -> f64 {
    let k = f64::from(bits);
    E_ELEC * k + E_AMP * k * distance * distance
}

/// Energy spent by the receiver for `bits`; independent of distance.
#[inline]
pub fn receive_energy(bits: u32) -> f64 {
    E_ELEC * f64::from(bits)
}

/// Combined transmit + receive cost of one hop.
///
/// Total over `bits ≥ 0` and `distance ≥ 0`; a zero distance leaves only the
/// electronics terms.
#[inline]
pub fn energy_cost(bits: u32, distance: f64) -> f64 {
    transmit_energy(bits, distance) + receive_energy(bits)
}
