//! Semiconductor power-loss models for MOSFETs and IGBTs

pub mod igbt;
pub mod mosfet;

pub use igbt::{
    igbt_conduction_loss, igbt_loss_breakdown, igbt_switching_loss, IgbtLossBreakdown,
    DEFAULT_IGBT_SLOPE_RESISTANCE,
};
pub use mosfet::{
    gate_drive_loss, mosfet_conduction_loss, mosfet_loss_breakdown, mosfet_switching_loss,
    MosfetLossBreakdown, DEFAULT_RDSON_TEMP_COEFF,
};
