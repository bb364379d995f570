//! # Error Types
//!
//! Errors raised at the seam between a selector parser and its generators.
//!
//! ## Overview
//!
//! - [`ConstructionError`]: a fan-out was built without one of its generators
//! - [`SequenceError`]: a call arrived where the call-sequence contract
//!   does not allow it
//! - [`GeneratorError`]: a ready-made error type for generators that have
//!   no error type of their own
//!
//! Errors returned by generators themselves are never wrapped by this crate.
//! A [`Tee`](crate::Tee) hands them back to its caller exactly as the failing
//! generator produced them.
//!
//! ## Diagnostics Support
//!
//! When the `diagnostics` feature is enabled, [`ConstructionError`] and
//! [`SequenceError`] integrate with [`miette`] and carry stable codes.

use crate::event::EventKind;
use thiserror::Error;

#[cfg(feature = "diagnostics")]
use miette::Diagnostic;

/// A fan-out was constructed with a missing generator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[cfg_attr(feature = "diagnostics", derive(Diagnostic))]
pub enum ConstructionError {
    #[error("primary generator is required")]
    #[cfg_attr(feature = "diagnostics", diagnostic(code(tee::missing_primary)))]
    MissingPrimary,

    #[error("secondary generator is required")]
    #[cfg_attr(feature = "diagnostics", diagnostic(code(tee::missing_secondary)))]
    MissingSecondary,
}

/// A call that violates the call-sequence contract
///
/// `position` is the zero-based index of the offending call in the stream.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[cfg_attr(feature = "diagnostics", derive(Diagnostic))]
pub enum SequenceError {
    #[error("`{kind}` at position {position} arrived before `init`")]
    #[cfg_attr(feature = "diagnostics", diagnostic(code(sequence::not_initialized)))]
    NotInitialized { position: usize, kind: EventKind },

    #[error("`init` at position {position} arrived while a selector list was already open")]
    #[cfg_attr(feature = "diagnostics", diagnostic(code(sequence::already_initialized)))]
    AlreadyInitialized { position: usize },

    #[error("`{kind}` at position {position} arrived after `close`")]
    #[cfg_attr(feature = "diagnostics", diagnostic(code(sequence::after_close)))]
    AfterClose { position: usize, kind: EventKind },

    #[error("`{kind}` at position {position} arrived after a grammar violation aborted the parse")]
    #[cfg_attr(
        feature = "diagnostics",
        diagnostic(
            code(sequence::faulted),
            help("the stream broke the call-sequence grammar earlier in this pass; start a new pass")
        )
    )]
    Faulted { position: usize, kind: EventKind },

    #[error("`{kind}` at position {position} arrived before the first `selector` boundary")]
    #[cfg_attr(feature = "diagnostics", diagnostic(code(sequence::missing_selector)))]
    MissingSelector { position: usize, kind: EventKind },

    #[error("`{kind}` at position {position} must open a simple-selector sequence, but follows `{after}`")]
    #[cfg_attr(feature = "diagnostics", diagnostic(code(sequence::misplaced_type)))]
    MisplacedType {
        position: usize,
        kind: EventKind,
        /// Last component of the sequence it landed in
        after: EventKind,
    },

    #[error("combinator `{kind}` at position {position} has no simple-selector sequence on its left")]
    #[cfg_attr(feature = "diagnostics", diagnostic(code(sequence::dangling_combinator)))]
    DanglingCombinator { position: usize, kind: EventKind },

    #[error("`{kind}` at position {position} ends an empty simple-selector sequence")]
    #[cfg_attr(feature = "diagnostics", diagnostic(code(sequence::empty_sequence)))]
    EmptySequence { position: usize, kind: EventKind },

    #[error("`close` at position {position} ends a selector list with no selectors")]
    #[cfg_attr(feature = "diagnostics", diagnostic(code(sequence::empty_list)))]
    EmptyList { position: usize },

    #[error("selector list exceeds {limit} alternatives at position {position}")]
    #[cfg_attr(feature = "diagnostics", diagnostic(code(sequence::too_many_alternatives)))]
    TooManyAlternatives { position: usize, limit: usize },

    #[error("simple-selector sequence exceeds {limit} components at position {position}")]
    #[cfg_attr(feature = "diagnostics", diagnostic(code(sequence::sequence_too_long)))]
    SequenceTooLong { position: usize, limit: usize },

    #[error("`:nth-child` with a={a}, b={b} at position {position} can never match")]
    #[cfg_attr(feature = "diagnostics", diagnostic(code(sequence::unsatisfiable_nth)))]
    UnsatisfiableNth { position: usize, a: i32, b: i32 },
}

impl SequenceError {
    /// Index of the offending call in the stream
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::NotInitialized { position, .. }
            | Self::AlreadyInitialized { position }
            | Self::AfterClose { position, .. }
            | Self::Faulted { position, .. }
            | Self::MissingSelector { position, .. }
            | Self::MisplacedType { position, .. }
            | Self::DanglingCombinator { position, .. }
            | Self::EmptySequence { position, .. }
            | Self::EmptyList { position }
            | Self::TooManyAlternatives { position, .. }
            | Self::SequenceTooLong { position, .. }
            | Self::UnsatisfiableNth { position, .. } => *position,
        }
    }

    /// True for refusals of the `init` … `close` bracket, as opposed to
    /// violations of the grammar inside it
    #[must_use]
    pub const fn is_lifecycle(&self) -> bool {
        matches!(
            self,
            Self::NotInitialized { .. }
                | Self::AlreadyInitialized { .. }
                | Self::AfterClose { .. }
                | Self::Faulted { .. }
        )
    }
}

/// General-purpose generator error
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeneratorError {
    /// The generator cannot express this construct
    #[error("unsupported construct `{construct}`")]
    Unsupported { construct: EventKind },

    #[error(transparent)]
    Sequence(#[from] SequenceError),

    #[error("generator failed: {0}")]
    Backend(String),
}

impl GeneratorError {
    #[must_use]
    pub const fn unsupported(construct: EventKind) -> Self {
        Self::Unsupported { construct }
    }
}
