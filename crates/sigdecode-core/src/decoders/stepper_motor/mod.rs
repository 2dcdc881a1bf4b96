//! Stepper motor position and speed from step/direction signals.
//!
//! Every rising edge on the step line moves the motor one step in the
//! direction given by the dir line. Speed is measured between consecutive
//! step edges, so the first edge only establishes the reference.

pub mod decoder;
pub mod layout;

pub use decoder::StepperMotorDecoder;
pub use layout::StepperClass;
