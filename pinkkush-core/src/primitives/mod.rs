//! Reusable index-cursor and reveal-flow machines.
//!
//! Each page section composes these rather than reimplementing index math:
//! clamping is the stepper's job, modular wrap is the rotator's, and the
//! two-phase fake-latency interaction is the reveal flow's.

pub mod reveal;
pub mod rotator;
pub mod stepper;

pub use reveal::{RevealFlow, RevealPhase};
pub use rotator::CyclicRotator;
pub use stepper::BoundedStepper;
