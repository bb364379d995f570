//! # Call-Sequence Validation
//!
//! A selector parser is trusted to emit a grammar-valid stream. This module
//! checks that trust.
//!
//! [`SequenceValidator`] is a state machine over [`EventKind`]s that enforces:
//!
//! - `init` … `close` bracket the stream (see [`Lifecycle`])
//! - every alternative opens with `selector`
//! - type/universal only opens a simple-selector sequence
//! - a combinator sits between two non-empty sequences
//! - the limits in [`ValidatorConfig`]
//!
//! [`ContractChecker`] wraps the validator as a [`SelectorGenerator`]. As the
//! primary of a [`Tee`](crate::Tee) it stops a malformed stream before the
//! real generator sees it:
//!
//! ```rust
//! use selgen::{ContractChecker, GeneratorError, NullGenerator, SelectorGeneratorExt, Tee};
//!
//! let checker = ContractChecker::<GeneratorError>::new();
//! let mut tee = Tee::new(checker, NullGenerator::<GeneratorError>::new());
//! tee.init().unwrap();
//! tee.selector().unwrap();
//! assert!(tee.child().is_err()); // nothing on the left of `>`
//! ```

mod config;

pub use config::ValidatorConfig;

use crate::error::{GeneratorError, SequenceError};
use crate::event::{EventCategory, EventKind, SelectorEvent};
use crate::generator::SelectorGenerator;
use crate::lifecycle::{Lifecycle, Phase};
use smallvec::SmallVec;
use std::marker::PhantomData;

/// State machine enforcing the call-sequence contract
#[derive(Debug, Clone)]
pub struct SequenceValidator {
    config: ValidatorConfig,
    lifecycle: Lifecycle,
    /// Inside an alternative, i.e. `selector` has been seen since `init`
    in_selector: bool,
    alternatives: usize,
    /// Components of the simple-selector sequence being built
    sequence: SmallVec<[EventKind; 8]>,
}

impl Default for SequenceValidator {
    fn default() -> Self {
        Self::new(ValidatorConfig::default())
    }
}

impl SequenceValidator {
    #[must_use]
    pub fn new(config: ValidatorConfig) -> Self {
        Self {
            config,
            lifecycle: Lifecycle::new(),
            in_selector: false,
            alternatives: 0,
            sequence: SmallVec::new(),
        }
    }

    #[must_use]
    pub const fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.lifecycle.phase()
    }

    /// Number of alternatives seen so far
    #[must_use]
    pub const fn alternatives(&self) -> usize {
        self.alternatives
    }

    /// True once `close` has been accepted
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.lifecycle.is_closed()
    }

    /// Check the next event of the stream.
    ///
    /// # Errors
    ///
    /// Returns the first contract violation. A lifecycle refusal (see
    /// [`SequenceError::is_lifecycle`]) leaves the state as it was, the way a
    /// [`Tee`](crate::Tee) treats it. A grammar violation faults the
    /// validator, which then refuses everything that follows.
    pub fn check(&mut self, event: &SelectorEvent) -> Result<(), SequenceError> {
        let position = self.lifecycle.position();
        let kind = event.kind();

        let result = self
            .check_grammar(position, event)
            .and_then(|()| self.lifecycle.advance(kind));
        if let Err(err) = &result {
            tracing::debug!(%kind, position, error = %err, "selector event stream violates the call sequence");
            if !err.is_lifecycle() {
                self.lifecycle.fault();
            }
        }
        result
    }

    fn check_grammar(&mut self, position: usize, event: &SelectorEvent) -> Result<(), SequenceError> {
        // Lifecycle errors take precedence over grammar errors
        if !self.lifecycle.is_open() {
            return Ok(());
        }

        let kind = event.kind();
        match kind.category() {
            EventCategory::Lifecycle => {
                if kind == EventKind::Close {
                    self.end_alternative(position, kind)?;
                    if self.alternatives == 0 && !self.config.allow_empty_list {
                        return Err(SequenceError::EmptyList { position });
                    }
                }
                Ok(())
            }
            EventCategory::Delimiter => {
                self.end_alternative(position, kind)?;
                if self.alternatives >= self.config.max_alternatives {
                    return Err(SequenceError::TooManyAlternatives {
                        position,
                        limit: self.config.max_alternatives,
                    });
                }
                self.alternatives += 1;
                self.in_selector = true;
                Ok(())
            }
            EventCategory::Type => {
                self.require_selector(position, kind)?;
                if let Some(&after) = self.sequence.last() {
                    return Err(SequenceError::MisplacedType {
                        position,
                        kind,
                        after,
                    });
                }
                self.push_component(position, kind)
            }
            EventCategory::Filter => {
                self.require_selector(position, kind)?;
                if let SelectorEvent::NthChild { a, b } = *event {
                    // an+b never reaches a position >= 1 when both are non-positive
                    if self.config.reject_unsatisfiable_nth && a <= 0 && b <= 0 {
                        return Err(SequenceError::UnsatisfiableNth { position, a, b });
                    }
                }
                self.push_component(position, kind)
            }
            EventCategory::Combinator => {
                self.require_selector(position, kind)?;
                if self.sequence.is_empty() {
                    return Err(SequenceError::DanglingCombinator { position, kind });
                }
                self.sequence.clear();
                Ok(())
            }
        }
    }

    fn require_selector(&self, position: usize, kind: EventKind) -> Result<(), SequenceError> {
        if self.in_selector {
            Ok(())
        } else {
            Err(SequenceError::MissingSelector { position, kind })
        }
    }

    /// Close the open alternative, if any; it must end on a non-empty sequence
    fn end_alternative(&mut self, position: usize, kind: EventKind) -> Result<(), SequenceError> {
        if self.in_selector && self.sequence.is_empty() {
            return Err(SequenceError::EmptySequence { position, kind });
        }
        self.sequence.clear();
        Ok(())
    }

    fn push_component(&mut self, position: usize, kind: EventKind) -> Result<(), SequenceError> {
        if self.sequence.len() >= self.config.max_sequence_len {
            return Err(SequenceError::SequenceTooLong {
                position,
                limit: self.config.max_sequence_len,
            });
        }
        self.sequence.push(kind);
        Ok(())
    }
}

/// A [`SequenceValidator`] exposed as a generator
///
/// The error type is chosen by the caller so the checker can share a
/// [`Tee`](crate::Tee) with any generator whose error converts from
/// [`SequenceError`].
pub struct ContractChecker<E = GeneratorError> {
    validator: SequenceValidator,
    _error: PhantomData<fn() -> E>,
}

impl<E> ContractChecker<E> {
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(ValidatorConfig::default())
    }

    #[must_use]
    pub fn with_config(config: ValidatorConfig) -> Self {
        Self {
            validator: SequenceValidator::new(config),
            _error: PhantomData,
        }
    }

    #[must_use]
    pub const fn validator(&self) -> &SequenceValidator {
        &self.validator
    }
}

impl<E> Default for ContractChecker<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> std::fmt::Debug for ContractChecker<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContractChecker")
            .field("validator", &self.validator)
            .finish()
    }
}

impl<E: From<SequenceError>> SelectorGenerator for ContractChecker<E> {
    type Error = E;

    fn on_event(&mut self, event: &SelectorEvent) -> Result<(), Self::Error> {
        self.validator.check(event).map_err(E::from)
    }
}
