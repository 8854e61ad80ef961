//! PCB Trace Sizing (IPC-2152) and copper trace resistance
//!
//! Sizes copper traces for a given current and allowed temperature rise
//! using the IPC-2152 empirical current-capacity relation, and computes the
//! DC resistance of a sized trace from copper resistivity.
//!
//! # References
//! - IPC-2152 (2009). "Standard for Determining Current Carrying Capacity
//!   in Printed Board Design"
//! - CRC Handbook of Chemistry and Physics (copper resistivity and its
//!   temperature coefficient)

use serde::{Deserialize, Serialize};

/// IPC-2152 capacity coefficient for external (air-exposed) layers
const IPC2152_K_EXTERNAL: f64 = 0.048;

/// IPC-2152 capacity coefficient for internal layers. Internal traces
/// dissipate heat less efficiently and need roughly double the
/// cross-section for the same current.
const IPC2152_K_INTERNAL: f64 = 0.024;

/// IPC-2152 temperature-rise exponent
const IPC2152_TEMP_RISE_EXPONENT: f64 = 0.44;

/// IPC-2152 cross-section exponent
const IPC2152_AREA_EXPONENT: f64 = 0.725;

/// Square mils to square millimeters
const SQ_MILS_TO_SQ_MM: f64 = 0.0006452;

/// Manufacturing floor on computed trace width (mm). A fabrication
/// constraint, not part of the IPC-2152 relation: computed widths below the
/// floor are reported as the floor, so callers must not assume sub-floor
/// widths are achievable.
pub const MIN_TRACE_WIDTH_MM: f64 = 0.1;

/// Copper resistivity at 20 °C (Ω·m)
const COPPER_RESISTIVITY_20C: f64 = 1.68e-8;

/// Linear temperature coefficient of copper resistivity (1/°C),
/// referenced to 20 °C. Independent from the 25 °C ambient default used
/// for trace sizing; the two constants come from different standards and
/// must not be unified.
const COPPER_RESISTIVITY_TEMP_COEFF: f64 = 0.00393;

/// Default trace temperature for resistance calculations (°C)
pub const DEFAULT_TRACE_TEMPERATURE: f64 = 25.0;

/// Sized trace geometry
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TraceSizingResult {
    /// Required trace width (mm), floored at [`MIN_TRACE_WIDTH_MM`]
    pub width: f64,
    /// Required copper cross-section (mm²), unfloored
    pub area: f64,
}

/// Size a PCB trace for a current and allowed temperature rise (IPC-2152)
///
/// # Formula
/// ```text
/// area_mils² = (I / (k × ΔT^0.44))^(1/0.725)
/// ```
///
/// with `k = 0.048` for external layers and `0.024` for internal layers.
/// The cross-section is converted to mm² and divided by the copper
/// thickness to obtain the width, which is then floored at
/// [`MIN_TRACE_WIDTH_MM`].
///
/// # Arguments
/// * `current` - Trace current (A)
/// * `temp_rise` - Allowed temperature rise above ambient (°C)
/// * `copper_thickness` - Copper thickness (mm; 1 oz ≈ 0.035 mm)
/// * `is_external` - true for outer layers, false for inner layers
///
/// # Example
/// ```
/// use power_thermal_core::pcb_trace_width;
///
/// // 1 oz external trace carrying 10 A at 20 °C rise
/// let sizing = pcb_trace_width(10.0, 20.0, 0.035, true);
/// assert!(sizing.width > 4.0 && sizing.width < 5.5);
/// ```
pub fn pcb_trace_width(
    current: f64,
    temp_rise: f64,
    copper_thickness: f64,
    is_external: bool,
) -> TraceSizingResult {
    let k = if is_external {
        IPC2152_K_EXTERNAL
    } else {
        IPC2152_K_INTERNAL
    };

    // Cross-sectional area in square mils
    let area_mils =
        (current / (k * temp_rise.powf(IPC2152_TEMP_RISE_EXPONENT)))
            .powf(1.0 / IPC2152_AREA_EXPONENT);

    let area = area_mils * SQ_MILS_TO_SQ_MM;
    let width = area / copper_thickness;

    TraceSizingResult {
        width: width.max(MIN_TRACE_WIDTH_MM),
        area,
    }
}

/// DC resistance of a copper trace (Ω)
///
/// # Formula
/// ```text
/// ρ(T) = ρ₂₀ × (1 + α × (T - 20))
/// R    = ρ(T) × L / (w × t)
/// ```
///
/// Resistivity is taken at 20 °C with a linear temperature coefficient and
/// rescaled by 1e6 for the mm-based geometry, matching the sizing tool's
/// unit convention.
///
/// # Arguments
/// * `length` - Trace length (mm)
/// * `width` - Trace width (mm)
/// * `copper_thickness` - Copper thickness (mm)
/// * `temperature` - Trace temperature (°C; see
///   [`DEFAULT_TRACE_TEMPERATURE`])
pub fn trace_resistance(length: f64, width: f64, copper_thickness: f64, temperature: f64) -> f64 {
    let rho = COPPER_RESISTIVITY_20C
        * (1.0 + COPPER_RESISTIVITY_TEMP_COEFF * (temperature - 20.0));

    // Rescale for mm-based geometry
    let rho_mm = rho * 1e6;

    let area = width * copper_thickness;
    (rho_mm * length) / area
}
