//! Forced-air and natural-convection cooling estimates
//!
//! First-pass airflow and convection sizing used alongside the thermal
//! network solver: required fan airflow from an energy balance, and the
//! simplified flat-plate natural-convection correlation for unassisted
//! enclosure surfaces.
//!
//! # References
//! - Holman, J.P. (2010). "Heat Transfer", 10th ed., ch. 7 (free
//!   convection, simplified air correlations)
//! - U.S. Standard Atmosphere (1976), isothermal scale-height
//!   approximation for air density derating

use serde::{Deserialize, Serialize};

/// Air density at sea level, 15 °C (kg/m³)
const AIR_DENSITY_SEA_LEVEL: f64 = 1.225;

/// Specific heat of air at constant pressure (J/(kg·K))
const AIR_SPECIFIC_HEAT: f64 = 1006.0;

/// Isothermal-atmosphere scale height for density derating (m)
const ATMOSPHERE_SCALE_HEIGHT_M: f64 = 8500.0;

/// Cubic meters per second to cubic feet per minute
const M3_PER_SEC_TO_CFM: f64 = 2118.88;

/// Default installation altitude (m)
pub const DEFAULT_ALTITUDE_M: f64 = 0.0;

/// Orientation of a convecting flat plate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlateOrientation {
    /// Vertical surface (side panel)
    Vertical,
    /// Horizontal surface (top panel)
    Horizontal,
}

/// Required forced airflow (CFM) to remove a heat load at a given air
/// temperature rise
///
/// # Formula
/// ```text
/// Q = ṁ × cp × ΔT
/// ρ(h) = ρ₀ × e^(-h/8500)
/// ```
///
/// Air density is derated exponentially with altitude (thinner air carries
/// less heat per volume, so high-altitude installations need more flow).
///
/// # Arguments
/// * `heat_load` - Heat to remove (W)
/// * `temp_rise` - Allowed outlet-minus-inlet air temperature rise (°C)
/// * `altitude` - Installation altitude (m; see [`DEFAULT_ALTITUDE_M`])
pub fn required_airflow_cfm(heat_load: f64, temp_rise: f64, altitude: f64) -> f64 {
    let air_density = AIR_DENSITY_SEA_LEVEL * (-altitude / ATMOSPHERE_SCALE_HEIGHT_M).exp();

    let m3_per_sec = heat_load / (air_density * AIR_SPECIFIC_HEAT * temp_rise);
    m3_per_sec * M3_PER_SEC_TO_CFM
}

/// Heat dissipated by natural convection from a flat plate (W)
///
/// # Formula
/// ```text
/// h = 1.42 × ΔT^0.25   (vertical)
/// h = 1.32 × ΔT^0.25   (horizontal)
/// P = h × A × ΔT
/// ```
///
/// Simplified air correlation with a characteristic length of 1 m; adequate
/// for enclosure-scale sanity checks, not detailed heatsink design.
///
/// # Arguments
/// * `surface_area` - Plate area (m²)
/// * `temp_diff` - Surface-minus-ambient temperature difference (°C)
/// * `orientation` - Plate orientation
pub fn natural_convection_dissipation(
    surface_area: f64,
    temp_diff: f64,
    orientation: PlateOrientation,
) -> f64 {
    let h = match orientation {
        PlateOrientation::Vertical => 1.42 * temp_diff.powf(0.25),
        PlateOrientation::Horizontal => 1.32 * temp_diff.powf(0.25),
    };

    h * surface_area * temp_diff
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_airflow_reference_case() {
        // 100 W at 10 °C rise, sea level:
        // 100 / (1.225 × 1006 × 10) m³/s ≈ 17.19 CFM
        let cfm = required_airflow_cfm(100.0, 10.0, DEFAULT_ALTITUDE_M);
        assert_relative_eq!(cfm, 17.19, max_relative = 1e-3);
    }

    #[test]
    fn test_airflow_increases_with_altitude() {
        let sea_level = required_airflow_cfm(100.0, 10.0, 0.0);
        let high = required_airflow_cfm(100.0, 10.0, 3000.0);

        assert!(high > sea_level);
        // Density derating is exactly exponential in altitude
        assert_relative_eq!(
            high / sea_level,
            (3000.0f64 / 8500.0).exp(),
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_airflow_decreases_with_allowed_rise() {
        let tight = required_airflow_cfm(100.0, 5.0, 0.0);
        let loose = required_airflow_cfm(100.0, 20.0, 0.0);
        assert!(tight > loose);
    }

    #[test]
    fn test_natural_convection_reference_case() {
        // 0.1 m² vertical plate at 20 °C above ambient:
        // h = 1.42 × 20^0.25 ≈ 3.003 → P ≈ 6.006 W
        let p = natural_convection_dissipation(0.1, 20.0, PlateOrientation::Vertical);
        assert_relative_eq!(p, 6.006, max_relative = 1e-3);
    }

    #[test]
    fn test_vertical_plate_outperforms_horizontal() {
        let vertical = natural_convection_dissipation(0.1, 20.0, PlateOrientation::Vertical);
        let horizontal = natural_convection_dissipation(0.1, 20.0, PlateOrientation::Horizontal);

        assert!(vertical > horizontal);
        assert_relative_eq!(vertical / horizontal, 1.42 / 1.32, max_relative = 1e-12);
    }
}
