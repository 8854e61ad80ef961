//! IGBT power-loss models
//!
//! Two-term conduction model (constant saturation drop plus slope
//! resistance) and datasheet switching-energy scaling. IGBT datasheets
//! publish Eon/Eoff at a reference voltage and current; the scaling here is
//! the standard linear approximation to move those energies to the actual
//! operating point.
//!
//! # References
//! - Wintrich, A., Nicolai, U., Tursky, W., Reimann, T. (2015).
//!   "Application Manual Power Semiconductors", SEMIKRON, ch. 5
//! - Infineon AN2008-03. "Thermal equivalent circuit models" (loss inputs)

use serde::{Deserialize, Serialize};

/// Default collector-emitter slope resistance (Ω). Simple datasheets only
/// publish VCE(sat); zero drops the resistive term entirely.
pub const DEFAULT_IGBT_SLOPE_RESISTANCE: f64 = 0.0;

/// IGBT loss decomposition (W per mechanism)
///
/// Components are independently derived; either may be zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IgbtLossBreakdown {
    /// Saturation-drop plus slope-resistance conduction loss (W)
    pub conduction: f64,
    /// Scaled Eon/Eoff switching loss (W)
    pub switching: f64,
}

impl IgbtLossBreakdown {
    /// Total device loss (W)
    #[must_use]
    pub fn total(&self) -> f64 {
        self.conduction + self.switching
    }
}

/// IGBT conduction loss (W)
///
/// # Formula
/// ```text
/// P_cond = VCE(sat) × I_avg + r_CE × I_rms²
/// ```
///
/// The constant-drop term uses average current, the resistive term RMS
/// current. Pass [`DEFAULT_IGBT_SLOPE_RESISTANCE`] for datasheets without a
/// published slope resistance.
///
/// # Arguments
/// * `i_avg` - Average collector current (A)
/// * `v_ce_sat` - Collector-emitter saturation voltage (V)
/// * `i_rms` - RMS collector current (A)
/// * `r_ce` - On-state slope resistance (Ω)
pub fn igbt_conduction_loss(i_avg: f64, v_ce_sat: f64, i_rms: f64, r_ce: f64) -> f64 {
    v_ce_sat * i_avg + r_ce * i_rms * i_rms
}

/// IGBT switching loss from datasheet energies (W)
///
/// # Formula
/// ```text
/// P_sw = (Eon + Eoff) × f_sw × (V_actual / V_ref) × (I_actual / I_ref)
/// ```
///
/// Linear scaling of the reference energies by the actual-to-reference
/// voltage and current ratios. This is the standard datasheet approximation
/// and assumes linearity holds over the operating range — a documented
/// limitation, not a bug. Zero `v_ref` or `i_ref` yields Infinity/NaN per
/// IEEE-754 and is deliberately not guarded.
///
/// # Arguments
/// * `e_on` - Turn-on energy at the reference point (J)
/// * `e_off` - Turn-off energy at the reference point (J)
/// * `f_sw` - Switching frequency (Hz)
/// * `v_actual` - Actual DC-link voltage (V)
/// * `v_ref` - Datasheet reference voltage (V)
/// * `i_actual` - Actual switched current (A)
/// * `i_ref` - Datasheet reference current (A)
pub fn igbt_switching_loss(
    e_on: f64,
    e_off: f64,
    f_sw: f64,
    v_actual: f64,
    v_ref: f64,
    i_actual: f64,
    i_ref: f64,
) -> f64 {
    let scale_factor = (v_actual / v_ref) * (i_actual / i_ref);
    (e_on + e_off) * f_sw * scale_factor
}

/// Full IGBT loss decomposition at one operating point
#[allow(clippy::too_many_arguments)]
pub fn igbt_loss_breakdown(
    i_avg: f64,
    v_ce_sat: f64,
    i_rms: f64,
    r_ce: f64,
    e_on: f64,
    e_off: f64,
    f_sw: f64,
    v_actual: f64,
    v_ref: f64,
    i_actual: f64,
    i_ref: f64,
) -> IgbtLossBreakdown {
    IgbtLossBreakdown {
        conduction: igbt_conduction_loss(i_avg, v_ce_sat, i_rms, r_ce),
        switching: igbt_switching_loss(e_on, e_off, f_sw, v_actual, v_ref, i_actual, i_ref),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_conduction_loss_two_terms() {
        // 1.8 V × 15 A + 0.02 Ω × (20 A)² = 27 + 8 = 35 W
        let p = igbt_conduction_loss(15.0, 1.8, 20.0, 0.02);
        assert_relative_eq!(p, 35.0, max_relative = 1e-12);
    }

    #[test]
    fn test_conduction_loss_without_slope_resistance() {
        let p = igbt_conduction_loss(15.0, 1.8, 20.0, DEFAULT_IGBT_SLOPE_RESISTANCE);
        assert_relative_eq!(p, 27.0, max_relative = 1e-12);
    }

    #[test]
    fn test_switching_loss_scales_linearly_from_reference() {
        // (1 mJ + 1.5 mJ) × 10 kHz = 25 W at reference, scaled by
        // (600/600) × (40/50) = 0.8 → 20 W
        let p = igbt_switching_loss(1e-3, 1.5e-3, 10_000.0, 600.0, 600.0, 40.0, 50.0);
        assert_relative_eq!(p, 20.0, max_relative = 1e-12);
    }

    #[test]
    fn test_switching_loss_at_reference_point_is_unscaled() {
        let p = igbt_switching_loss(1e-3, 1.5e-3, 10_000.0, 600.0, 600.0, 50.0, 50.0);
        assert_relative_eq!(p, 25.0, max_relative = 1e-12);
    }

    #[test]
    fn test_zero_reference_propagates_ieee_semantics() {
        // Division by a zero reference is not special-cased
        let p = igbt_switching_loss(1e-3, 1.5e-3, 10_000.0, 600.0, 0.0, 50.0, 50.0);
        assert!(p.is_infinite());

        let nan = igbt_switching_loss(0.0, 0.0, 10_000.0, 0.0, 0.0, 50.0, 50.0);
        assert!(nan.is_nan());
    }

    #[test]
    fn test_breakdown_composes_mechanisms() {
        let breakdown = igbt_loss_breakdown(
            15.0, 1.8, 20.0, 0.02, 1e-3, 1.5e-3, 10_000.0, 600.0, 600.0, 40.0, 50.0,
        );

        assert_relative_eq!(breakdown.conduction, 35.0, max_relative = 1e-12);
        assert_relative_eq!(breakdown.switching, 20.0, max_relative = 1e-12);
        assert_relative_eq!(breakdown.total(), 55.0, max_relative = 1e-12);
    }
}
