//! Transient Thermal Response (Foster RC networks)
//!
//! Power pulses shorter than the thermal time constants of a package never
//! develop the full steady-state temperature rise. Datasheets publish the
//! transient thermal impedance Zth(t) as a Foster RC ladder: a sum of
//! exponential terms, one per R/τ pair. This module evaluates the
//! single-pulse step response of such a network.
//!
//! The evaluation here is valid strictly for a single pulse applied to a
//! device at ambient equilibrium. It performs no superposition for repeated
//! pulses; the heuristic periodic approximation built on top of this
//! primitive lives in [`crate::thermal::periodic`] and carries its own,
//! weaker accuracy contract.
//!
//! # References
//! - Infineon AN2015-10. "Transient thermal measurements and thermal
//!   equivalent circuit models"
//! - Lutz, J. et al. (2011). "Semiconductor Power Devices", ch. 11.3
//!   (Foster and Cauer networks)

use serde::{Deserialize, Serialize};

/// One element of a Foster thermal network
///
/// A device's transient impedance is the sum of its pairs' contributions;
/// summation is commutative, so pair order does not affect the result. All
/// pairs must share consistent units (°C/W and seconds).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RcPair {
    /// Thermal resistance of this element (°C/W)
    pub r: f64,
    /// Time constant of this element (s)
    pub tau: f64,
}

impl RcPair {
    /// Create a Foster network element from its resistance and time constant
    #[must_use]
    pub const fn new(r: f64, tau: f64) -> Self {
        RcPair { r, tau }
    }
}

/// Typical Foster network for a power MOSFET in a TO-220 package
///
/// Total RθJC = 1.5 °C/W with time constants spanning 1 ms to 500 ms.
#[must_use]
pub fn to220_mosfet_network() -> [RcPair; 4] {
    [
        RcPair::new(0.1, 0.001),
        RcPair::new(0.3, 0.01),
        RcPair::new(0.5, 0.1),
        RcPair::new(0.6, 0.5),
    ]
}

/// Typical Foster network for a power MOSFET in a TO-247 package
///
/// Total RθJC = 0.8 °C/W; the larger die and tab give lower resistance and
/// faster early response than TO-220.
#[must_use]
pub fn to247_mosfet_network() -> [RcPair; 4] {
    [
        RcPair::new(0.05, 0.0005),
        RcPair::new(0.15, 0.005),
        RcPair::new(0.25, 0.05),
        RcPair::new(0.35, 0.3),
    ]
}

/// Typical Foster network for a power MOSFET in a D2PAK (SMD) package
///
/// Total RθJC = 1.4 °C/W; surface-mount cooling through the board keeps the
/// resistance close to TO-220 with slightly faster time constants.
#[must_use]
pub fn d2pak_mosfet_network() -> [RcPair; 4] {
    [
        RcPair::new(0.15, 0.001),
        RcPair::new(0.35, 0.008),
        RcPair::new(0.4, 0.06),
        RcPair::new(0.5, 0.4),
    ]
}

/// Typical Foster network for a baseplate IGBT module
///
/// Total RθJC = 0.1 °C/W; large modules have far lower resistance and
/// similar time-constant spread compared to discrete packages.
#[must_use]
pub fn igbt_module_network() -> [RcPair; 4] {
    [
        RcPair::new(0.01, 0.002),
        RcPair::new(0.02, 0.02),
        RcPair::new(0.03, 0.1),
        RcPair::new(0.04, 0.5),
    ]
}

/// Evaluate the Foster-network thermal impedance Zth(t) in °C/W
///
/// # Formula
/// ```text
/// Zth(t) = Σ rᵢ × (1 - e^(-t/τᵢ))
/// ```
///
/// At `t = 0` the impedance is exactly 0; as `t → ∞` it approaches the
/// steady-state resistance `Σ rᵢ`.
pub fn foster_impedance(rc_pairs: &[RcPair], time: f64) -> f64 {
    rc_pairs
        .iter()
        .map(|pair| pair.r * (1.0 - (-time / pair.tau).exp()))
        .sum()
}

/// Junction temperature at time `t` into a single power pulse (°C)
///
/// Standard single-pulse Foster step response:
///
/// ```text
/// T(t) = T_ambient + P × Zth(t)
/// ```
///
/// Valid strictly for one pulse applied to a previously unheated
/// (ambient-equilibrium) device; repeated-pulse waveforms require
/// superposition that this primitive deliberately does not perform.
///
/// # Arguments
/// * `power` - Pulse power (W)
/// * `rc_pairs` - Foster network elements (°C/W, s)
/// * `time` - Time since the start of the pulse (s)
/// * `t_ambient` - Ambient temperature (°C)
///
/// # Example
/// ```
/// use power_thermal_core::{foster_transient_temperature, RcPair};
///
/// let network = [RcPair::new(0.5, 0.1)];
/// // At t = 0 no heating has occurred yet
/// assert_eq!(foster_transient_temperature(100.0, &network, 0.0, 25.0), 25.0);
/// ```
pub fn foster_transient_temperature(
    power: f64,
    rc_pairs: &[RcPair],
    time: f64,
    t_ambient: f64,
) -> f64 {
    t_ambient + power * foster_impedance(rc_pairs, time)
}

/// Junction temperature for a single first-order RC thermal model (°C)
///
/// Exponential approach from `t_initial` toward the steady state
/// `t_initial + P × Rth` with time constant `τ = Rth × Cth`:
///
/// ```text
/// T(t) = T_ss - (T_ss - T_initial) × e^(-t/τ)
/// ```
///
/// Equivalent to a one-pair Foster evaluation; kept as a convenience for
/// devices specified with a single Rth/Cth lump.
///
/// # Arguments
/// * `power` - Applied power (W)
/// * `r_th` - Thermal resistance (°C/W)
/// * `c_th` - Thermal capacitance (J/°C)
/// * `time` - Time since power application (s)
/// * `t_initial` - Starting temperature (°C)
pub fn first_order_transient_temperature(
    power: f64,
    r_th: f64,
    c_th: f64,
    time: f64,
    t_initial: f64,
) -> f64 {
    let tau = r_th * c_th;
    let t_steady_state = t_initial + power * r_th;
    t_steady_state - (t_steady_state - t_initial) * (-time / tau).exp()
}
