//! PCB copper trace electrical and thermal sizing

pub mod trace;

pub use trace::{pcb_trace_width, trace_resistance, TraceSizingResult, MIN_TRACE_WIDTH_MM};
