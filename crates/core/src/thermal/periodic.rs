//! Periodic pulse-train approximation (heuristic layer)
//!
//! Approximates the junction temperature of a device under a repeating
//! power pulse train by blending three bounds built from the single-pulse
//! Foster response:
//!
//! - during the on-phase, the single-pulse rise plus a slow heatsink charge
//!   term,
//! - during the off-phase, exponential decay from the pulse-end peak with
//!   the network's slowest time constant,
//! - everywhere, a cap at the steady state produced by the duty-cycle
//!   average power.
//!
//! This is NOT superposition: a rigorous periodic solution convolves the
//! pulse train against the impedance curve. The blend here is a design-tool
//! approximation, reasonable while the pulse is short compared to the
//! slowest time constant, and it is kept out of
//! [`crate::thermal::transient`] so the rigorous single-pulse primitive
//! keeps its exact contract.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::transient::{foster_impedance, RcPair};

/// One point of a simulated pulse-train temperature sweep
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PulseSample {
    /// Time since the start of the sweep (s)
    pub time: f64,
    /// Approximated junction temperature (°C)
    pub temperature: f64,
    /// Applied power at this instant (W): pulse power or 0
    pub power: f64,
}

/// Result of a periodic pulse-train sweep
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodicPulseResponse {
    /// Temperature samples over the whole sweep
    pub samples: Vec<PulseSample>,
    /// Highest sampled temperature (°C)
    pub peak_temperature: f64,
    /// Mean of all sampled temperatures (°C)
    pub average_temperature: f64,
    /// Duty-cycle average power (W)
    pub average_power: f64,
    /// Steady-state temperature at average power (°C)
    pub steady_state_temperature: f64,
    /// Pulse period (s)
    pub period: f64,
}

/// Empirical multiplier on RθSA for the heatsink charge time constant
/// during the on-phase (heatsinks respond far slower than the die)
const HEATSINK_CHARGE_TAU_FACTOR: f64 = 10.0;

/// Fraction of RθSA assumed charged when estimating the pulse-end peak
/// that anchors the off-phase decay
const HEATSINK_PEAK_FRACTION: f64 = 0.5;

/// Sweep the approximate junction temperature over a repeating pulse train
///
/// # Arguments
/// * `pulse_power` - Power during the on-phase (W)
/// * `pulse_duration` - On-time per cycle (s)
/// * `duty_cycle` - On-time fraction of the period (0–1)
/// * `t_ambient` - Ambient temperature (°C)
/// * `rc_pairs` - Junction-to-case Foster network, slowest pair last. An
///   empty network has no dominant time constant; the off-phase decay then
///   degenerates and its samples collapse onto the steady-state cap (at the
///   pulse-end instant) and ambient (afterwards) instead of a physical decay
/// * `r_th_sa` - Heatsink (sink-to-ambient) thermal resistance (°C/W)
/// * `cycles` - Number of pulse periods to sweep
/// * `points_per_cycle` - Samples per period
///
/// Returns `cycles × points_per_cycle + 1` evenly spaced samples together
/// with peak/average summaries. The steady-state summary is the exact series
/// stack at average power: `T_amb + P·duty × (Σrᵢ + RθSA)`.
#[allow(clippy::too_many_arguments)]
pub fn periodic_pulse_response(
    pulse_power: f64,
    pulse_duration: f64,
    duty_cycle: f64,
    t_ambient: f64,
    rc_pairs: &[RcPair],
    r_th_sa: f64,
    cycles: u32,
    points_per_cycle: u32,
) -> PeriodicPulseResponse {
    let period = pulse_duration / duty_cycle;
    let total_time = period * f64::from(cycles);
    let total_points = cycles * points_per_cycle;

    let total_rth_jc: f64 = rc_pairs.iter().map(|pair| pair.r).sum();
    let average_power = pulse_power * duty_cycle;
    let steady_state_rise = average_power * (total_rth_jc + r_th_sa);

    // The off-phase decays with the slowest (dominant) network element
    let slowest_tau = rc_pairs.last().map_or(0.0, |pair| pair.tau);

    // Single-pulse rise at pulse end, reused by the off-phase anchor and
    // the on-phase cap
    let zth_at_pulse_end = foster_impedance(rc_pairs, pulse_duration);

    debug!(
        "Periodic pulse sweep: period {:.6} s, duty {:.3}, average power {:.2} W",
        period, duty_cycle, average_power
    );

    let mut samples = Vec::with_capacity(total_points as usize + 1);

    for i in 0..=total_points {
        let time = f64::from(i) / f64::from(total_points) * total_time;
        let cycle_time = time % period;
        let is_pulse_on = cycle_time < pulse_duration;

        let mut temperature = if is_pulse_on {
            // Junction follows the single-pulse response while the heatsink
            // slowly charges toward its share of the rise
            let zth_jc = foster_impedance(rc_pairs, cycle_time);
            let sink_charge =
                r_th_sa * (1.0 - (-cycle_time / (r_th_sa * HEATSINK_CHARGE_TAU_FACTOR)).exp());
            t_ambient + pulse_power * (zth_jc + sink_charge)
        } else {
            // Decay from the pulse-end peak with the dominant time constant
            let time_in_off = cycle_time - pulse_duration;
            let peak = t_ambient
                + pulse_power * (zth_at_pulse_end + r_th_sa * HEATSINK_PEAK_FRACTION);
            t_ambient + (peak - t_ambient) * (-time_in_off / slowest_tau).exp()
        };

        // Cap at the average-power steady state (plus the single-pulse rise
        // while the pulse is on)
        let pulse_headroom = if is_pulse_on {
            pulse_power * zth_at_pulse_end
        } else {
            0.0
        };
        temperature = temperature.min(t_ambient + steady_state_rise + pulse_headroom);

        samples.push(PulseSample {
            time,
            temperature,
            power: if is_pulse_on { pulse_power } else { 0.0 },
        });
    }

    let peak_temperature = samples
        .iter()
        .map(|s| s.temperature)
        .fold(f64::NEG_INFINITY, f64::max);
    let average_temperature =
        samples.iter().map(|s| s.temperature).sum::<f64>() / samples.len() as f64;

    PeriodicPulseResponse {
        samples,
        peak_temperature,
        average_temperature,
        average_power,
        steady_state_temperature: t_ambient + steady_state_rise,
        period,
    }
}
