//! Navigation gates evaluated before page composition

pub mod ports;
pub mod service;

pub use service::{GateDecision, GateSequencer, Route};
