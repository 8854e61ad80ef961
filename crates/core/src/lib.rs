//! Power Electronics Thermal Calculation Core Library
//!
//! A library of pure, stateless calculation functions for power-electronics
//! thermal design. Implements the standard first-order design formulas used
//! for device selection and board layout:
//!
//! - Steady-state junction-to-ambient thermal network solving and heatsink
//!   sizing
//! - MOSFET and IGBT power-loss decomposition (conduction, switching, gate
//!   drive)
//! - PCB trace current-capacity sizing per IPC-2152 and copper trace
//!   resistance
//! - Transient (pulsed-load) thermal response via Foster RC networks, plus a
//!   heuristic periodic-pulse approximation and forced/natural cooling
//!   estimates
//!
//! Every function is referentially transparent: it reads only its arguments
//! and returns a freshly computed value, so concurrent use needs no
//! synchronization. Functions are total over the reals and propagate IEEE-754
//! semantics (Infinity/NaN) rather than raising errors; callers validate
//! physically implausible inputs before calling.

// Thermal network, transient response, and cooling estimates
pub mod thermal;

// Semiconductor conduction/switching loss models
pub mod losses;

// PCB copper trace sizing and resistance
pub mod pcb;

// Re-export thermal types and functions
pub use thermal::{
    d2pak_mosfet_network, first_order_transient_temperature, foster_impedance,
    foster_transient_temperature, igbt_module_network, junction_temperature,
    natural_convection_dissipation, periodic_pulse_response, required_airflow_cfm,
    required_heatsink_resistance, to220_mosfet_network, to247_mosfet_network,
    PeriodicPulseResponse, PlateOrientation, PulseSample, RcPair, ThermalStackResult,
};

// Re-export loss models
pub use losses::{
    gate_drive_loss, igbt_conduction_loss, igbt_loss_breakdown, igbt_switching_loss,
    mosfet_conduction_loss, mosfet_loss_breakdown, mosfet_switching_loss, IgbtLossBreakdown,
    MosfetLossBreakdown,
};

// Re-export PCB trace calculations
pub use pcb::{pcb_trace_width, trace_resistance, TraceSizingResult};
