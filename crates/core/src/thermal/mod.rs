//! Thermal modeling: steady-state networks, transient response, and cooling

pub mod cooling;
pub mod network;
pub mod periodic;
pub mod transient;

pub use cooling::{natural_convection_dissipation, required_airflow_cfm, PlateOrientation};
pub use network::{junction_temperature, required_heatsink_resistance, ThermalStackResult};
pub use periodic::{periodic_pulse_response, PeriodicPulseResponse, PulseSample};
pub use transient::{
    d2pak_mosfet_network, first_order_transient_temperature, foster_impedance,
    foster_transient_temperature, igbt_module_network, to220_mosfet_network,
    to247_mosfet_network, RcPair,
};
