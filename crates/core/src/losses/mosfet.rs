//! MOSFET power-loss models
//!
//! Standard datasheet-parameter loss decomposition for a hard-switched
//! MOSFET: resistive conduction loss, linear-ramp switching loss, and gate
//! drive loss. Each mechanism is independent; no model couples them.
//!
//! # References
//! - Graovac, D., Pürschel, M., Kiep, A. (2006). "MOSFET Power Losses
//!   Calculation Using the Data-Sheet Parameters", Infineon Application Note
//! - Erickson, R.W., Maksimović, D. (2020). "Fundamentals of Power
//!   Electronics", 3rd ed., ch. 4 (switch realization)

use serde::{Deserialize, Serialize};

/// Default RDS(on) elevation factor at hot junction vs the 25 °C datasheet
/// value. 1.5 is typical for silicon at ~100 °C; callers with a datasheet
/// normalization curve should supply their own factor.
pub const DEFAULT_RDSON_TEMP_COEFF: f64 = 1.5;

/// MOSFET loss decomposition (W per mechanism)
///
/// Components are independently derived; nothing forces conduction ≥
/// switching and either may be zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MosfetLossBreakdown {
    /// I²R conduction loss (W)
    pub conduction: f64,
    /// Voltage/current overlap switching loss (W)
    pub switching: f64,
    /// Gate charge loss dissipated in the drive path (W)
    pub gate_drive: f64,
}

impl MosfetLossBreakdown {
    /// Total device loss (W)
    #[must_use]
    pub fn total(&self) -> f64 {
        self.conduction + self.switching + self.gate_drive
    }
}

/// MOSFET conduction loss (W)
///
/// # Formula
/// ```text
/// P_cond = I_rms² × RDS(on) × k_temp
/// ```
///
/// `temp_coeff` models the RDS(on) increase at elevated junction temperature
/// relative to the 25 °C datasheet value (see
/// [`DEFAULT_RDSON_TEMP_COEFF`]); no internal temperature-dependence curve
/// is modeled.
///
/// # Arguments
/// * `i_rms` - RMS drain current (A)
/// * `r_ds_on` - On resistance at 25 °C (Ω)
/// * `temp_coeff` - Resistance elevation factor (dimensionless)
pub fn mosfet_conduction_loss(i_rms: f64, r_ds_on: f64, temp_coeff: f64) -> f64 {
    i_rms * i_rms * r_ds_on * temp_coeff
}

/// MOSFET switching loss, linear-ramp approximation (W)
///
/// # Formula
/// ```text
/// P_sw = 0.5 × V_DS × I_D × (t_on + t_off) × f_sw
/// ```
///
/// Assumes voltage and current cross linearly during each transition, so
/// each edge dissipates `V×I×t/2`.
///
/// # Arguments
/// * `v_ds` - Blocked drain-source voltage (V)
/// * `i_d` - Switched drain current (A)
/// * `t_on` - Turn-on transition time (s)
/// * `t_off` - Turn-off transition time (s)
/// * `f_sw` - Switching frequency (Hz)
///
/// # Example
/// ```
/// use power_thermal_core::mosfet_switching_loss;
///
/// let p = mosfet_switching_loss(400.0, 20.0, 50e-9, 70e-9, 50_000.0);
/// assert!((p - 24.0).abs() < 1e-9);
/// ```
pub fn mosfet_switching_loss(v_ds: f64, i_d: f64, t_on: f64, t_off: f64, f_sw: f64) -> f64 {
    0.5 * v_ds * i_d * (t_on + t_off) * f_sw
}

/// Gate drive loss (W)
///
/// # Formula
/// ```text
/// P_gate = Q_g × V_GS × f_sw
/// ```
///
/// The full gate charge is supplied and dumped every cycle; the loss lands
/// in the driver and gate resistance, not the die, but counts against the
/// drive supply budget.
///
/// # Arguments
/// * `q_g` - Total gate charge (C — coulombs, not nC)
/// * `v_gs` - Gate drive voltage (V)
/// * `f_sw` - Switching frequency (Hz)
pub fn gate_drive_loss(q_g: f64, v_gs: f64, f_sw: f64) -> f64 {
    q_g * v_gs * f_sw
}

/// Full MOSFET loss decomposition at one operating point
///
/// Composes the three independent mechanisms; see the individual functions
/// for units.
#[allow(clippy::too_many_arguments)]
pub fn mosfet_loss_breakdown(
    i_rms: f64,
    r_ds_on: f64,
    temp_coeff: f64,
    v_ds: f64,
    i_d: f64,
    t_on: f64,
    t_off: f64,
    f_sw: f64,
    q_g: f64,
    v_gs: f64,
) -> MosfetLossBreakdown {
    MosfetLossBreakdown {
        conduction: mosfet_conduction_loss(i_rms, r_ds_on, temp_coeff),
        switching: mosfet_switching_loss(v_ds, i_d, t_on, t_off, f_sw),
        gate_drive: gate_drive_loss(q_g, v_gs, f_sw),
    }
}
