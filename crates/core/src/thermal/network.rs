//! Steady-State Thermal Network Solver
//!
//! Models heat flow junction → case → heatsink → ambient as three thermal
//! resistances in series. Series resistance is the universal first-order
//! model for packaged power semiconductors mounted on heatsinks: all heat is
//! assumed to leave through the mounting surface, with no parallel paths and
//! no thermal capacitance (see [`crate::thermal::transient`] for the
//! transient case).
//!
//! # References
//! - JEDEC JESD51-1 (1995). "Integrated Circuit Thermal Measurement Method"
//! - Lutz, J., Schlangenotto, H., Scheuermann, U., De Doncker, R. (2011).
//!   "Semiconductor Power Devices", ch. 11 (thermal stacks)

use serde::{Deserialize, Serialize};

/// Solved temperatures of a junction-to-ambient thermal stack
///
/// For non-negative power and resistances the stack is monotone:
/// `t_junction >= t_case >= t_sink >= ambient`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThermalStackResult {
    /// Junction temperature (°C)
    pub t_junction: f64,
    /// Case temperature (°C)
    pub t_case: f64,
    /// Heatsink temperature (°C)
    pub t_sink: f64,
    /// Total junction-to-ambient thermal resistance (°C/W),
    /// exact sum of the three series resistances
    pub total_rth: f64,
}

/// Solve the series junction → case → heatsink → ambient thermal stack
///
/// # Formula
/// ```text
/// T_sink     = T_ambient + P × RθSA
/// T_case     = T_sink    + P × RθCS
/// T_junction = T_case    + P × RθJC
/// ```
///
/// # Arguments
/// * `power_loss` - Dissipated power (W)
/// * `r_th_jc` - Junction-to-case thermal resistance (°C/W)
/// * `r_th_cs` - Case-to-sink thermal resistance, i.e. the TIM (°C/W)
/// * `r_th_sa` - Sink-to-ambient thermal resistance (°C/W)
/// * `t_ambient` - Ambient temperature (°C)
///
/// Pure algebraic sum with no error conditions: negative or zero inputs are
/// accepted and propagate arithmetically. Callers validate physically
/// implausible inputs (e.g. negative power) before calling.
///
/// # Example
/// ```
/// use power_thermal_core::junction_temperature;
///
/// let stack = junction_temperature(50.0, 0.5, 0.2, 1.5, 40.0);
/// assert_eq!(stack.t_junction, 150.0);
/// assert_eq!(stack.total_rth, 2.2);
/// ```
pub fn junction_temperature(
    power_loss: f64,
    r_th_jc: f64,
    r_th_cs: f64,
    r_th_sa: f64,
    t_ambient: f64,
) -> ThermalStackResult {
    let total_rth = r_th_jc + r_th_cs + r_th_sa;

    let t_sink = t_ambient + power_loss * r_th_sa;
    let t_case = t_sink + power_loss * r_th_cs;
    let t_junction = t_case + power_loss * r_th_jc;

    ThermalStackResult {
        t_junction,
        t_case,
        t_sink,
        total_rth,
    }
}

/// Calculate the maximum allowed heatsink thermal resistance (°C/W)
///
/// Divides the thermal budget `T_Jmax - T_ambient` by the dissipated power
/// and subtracts the fixed junction-to-case and case-to-sink resistances:
///
/// ```text
/// RθSA = (T_Jmax - T_ambient) / P - RθJC - RθCS
/// ```
///
/// The result is clamped to a minimum of 0. A negative unclamped value means
/// the budget is infeasible: no heatsink is small enough at this power. The
/// clamp silently reports 0 °C/W in that case, so callers that need a hard
/// infeasibility signal must recompute the unclamped value themselves.
///
/// # Arguments
/// * `power_loss` - Dissipated power (W)
/// * `t_junction_max` - Maximum allowed junction temperature (°C)
/// * `t_ambient` - Ambient temperature (°C)
/// * `r_th_jc` - Junction-to-case thermal resistance (°C/W)
/// * `r_th_cs` - Case-to-sink thermal resistance (°C/W)
pub fn required_heatsink_resistance(
    power_loss: f64,
    t_junction_max: f64,
    t_ambient: f64,
    r_th_jc: f64,
    r_th_cs: f64,
) -> f64 {
    let thermal_budget = t_junction_max - t_ambient;
    let r_th_total = thermal_budget / power_loss;
    let r_th_sa = r_th_total - r_th_jc - r_th_cs;
    r_th_sa.max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_thermal_stack_reference_case() {
        // 50 W through a 0.5 + 0.2 + 1.5 °C/W stack at 40 °C ambient
        let stack = junction_temperature(50.0, 0.5, 0.2, 1.5, 40.0);

        assert_eq!(stack.total_rth, 2.2);
        assert_eq!(stack.t_sink, 115.0);
        assert_eq!(stack.t_case, 125.0);
        assert_eq!(stack.t_junction, 150.0);
    }

    #[test]
    fn test_stack_rise_equals_power_times_total_rth() {
        let cases = [
            (10.0, 0.8, 0.1, 2.5, 25.0),
            (120.0, 0.25, 0.05, 0.4, 50.0),
            (0.0, 1.0, 1.0, 1.0, 40.0),
        ];

        for (p, jc, cs, sa, amb) in cases {
            let stack = junction_temperature(p, jc, cs, sa, amb);
            assert_relative_eq!(
                stack.t_junction - amb,
                p * stack.total_rth,
                max_relative = 1e-12
            );
        }
    }

    #[test]
    fn test_stack_is_monotone_for_non_negative_inputs() {
        let stack = junction_temperature(30.0, 0.6, 0.3, 2.0, 35.0);

        assert!(stack.t_junction >= stack.t_case);
        assert!(stack.t_case >= stack.t_sink);
        assert!(stack.t_sink >= 35.0);
    }

    #[test]
    fn test_negative_power_propagates_arithmetically() {
        // No validation by contract: negative power inverts the stack
        let stack = junction_temperature(-10.0, 0.5, 0.2, 1.5, 40.0);

        assert_eq!(stack.t_junction, 40.0 - 10.0 * 2.2);
        assert!(stack.t_junction < stack.t_sink);
    }

    #[test]
    fn test_required_heatsink_resistance_budget() {
        // (150 - 40) / 30 - 0.5 - 0.3 = 2.8667 °C/W
        let r_th_sa = required_heatsink_resistance(30.0, 150.0, 40.0, 0.5, 0.3);
        assert_relative_eq!(r_th_sa, 110.0 / 30.0 - 0.8, max_relative = 1e-12);
    }

    #[test]
    fn test_required_heatsink_resistance_clamps_infeasible_budget() {
        // 200 W into a 110 °C budget with 0.8 °C/W fixed resistance is
        // infeasible; the clamp reports 0 instead of a negative resistance
        let r_th_sa = required_heatsink_resistance(200.0, 150.0, 40.0, 0.5, 0.3);
        assert_eq!(r_th_sa, 0.0);
    }

    #[test]
    fn test_required_heatsink_resistance_monotonicity() {
        let base = required_heatsink_resistance(30.0, 150.0, 40.0, 0.5, 0.3);

        // Non-increasing in the fixed resistances
        assert!(required_heatsink_resistance(30.0, 150.0, 40.0, 0.8, 0.3) <= base);
        assert!(required_heatsink_resistance(30.0, 150.0, 40.0, 0.5, 0.6) <= base);

        // Increasing in the thermal budget
        assert!(required_heatsink_resistance(30.0, 175.0, 40.0, 0.5, 0.3) > base);
        assert!(required_heatsink_resistance(30.0, 150.0, 25.0, 0.5, 0.3) > base);
    }

    #[test]
    fn test_zero_power_budget_is_infinite() {
        // Division by zero propagates per IEEE-754, not an error path
        let r_th_sa = required_heatsink_resistance(0.0, 150.0, 40.0, 0.5, 0.3);
        assert!(r_th_sa.is_infinite());
    }
}
