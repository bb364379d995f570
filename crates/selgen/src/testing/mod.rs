//! # Testing Utilities
//!
//! Recording generators for testing drivers and generator compositions.
//!
//! A [`Recorder`] appends every event it receives to an [`EventLog`], stamped
//! by a [`SequenceClock`]. Recorders that share one clock produce logs whose
//! stamps are globally ordered, so a test can assert which generator saw an
//! event first.
//!
//! Recorders can also be told to fail on a chosen event to exercise the
//! error paths of whatever drives them.

pub mod recorder;

pub use recorder::*;
