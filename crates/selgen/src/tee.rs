//! # Tee: one parse, two generators
//!
//! [`Tee`] lets two [`SelectorGenerator`]s observe the same parse as if it
//! were a single pass. It is itself a generator, so the driver cannot tell
//! it apart from a single backend.
//!
//! ## What it guarantees
//! - Every event goes to the primary first, then to the secondary.
//!   The secondary only sees an event after the primary has returned from it.
//! - Nothing is skipped, duplicated or reordered, and the tee emits
//!   nothing of its own.
//! - Fail-fast: if the primary rejects an event, the secondary never sees it.
//!   The caller receives the generator's error unchanged.
//! - Calls before `init` or after `close` are refused before either
//!   generator is called.
//! - A rejected event does not end the pass. The next call is forwarded as
//!   usual, exactly as a lone generator would receive it.
//!
//! ## What it does **not** guarantee
//! - No rollback. If the secondary fails, the primary has already
//!   processed the event.
//! - No channel between the two generators. Any coordination between them
//!   happens outside the tee.
//!
//! ## Diagram
//! ```text
//!   driver ── on_event(&ev) ──► Tee ──► primary.on_event(&ev)    (returns)
//!                                 └───► secondary.on_event(&ev)  (returns)
//! ```
//!
//! Tees nest: `Tee::new(a, b).chain(c)` delivers every event to `a`, `b`
//! and `c`, in that order.

use crate::error::{ConstructionError, SequenceError};
use crate::event::SelectorEvent;
use crate::generator::SelectorGenerator;
use crate::lifecycle::{Lifecycle, Phase};

/// Forwards every event to a primary and then a secondary generator
#[derive(Debug)]
pub struct Tee<P, S> {
    primary: P,
    secondary: S,
    lifecycle: Lifecycle,
}

impl<P, S> Tee<P, S> {
    /// Create a tee over two generators.
    ///
    /// Create one tee per parse pass; it starts in [`Phase::Idle`].
    #[must_use]
    pub const fn new(primary: P, secondary: S) -> Self {
        Self {
            primary,
            secondary,
            lifecycle: Lifecycle::new(),
        }
    }

    /// Create a tee from generators that may be absent.
    ///
    /// # Errors
    ///
    /// Returns [`ConstructionError::MissingPrimary`] if `primary` is `None`,
    /// otherwise [`ConstructionError::MissingSecondary`] if `secondary` is
    /// `None`. Neither generator is called.
    pub fn try_new(primary: Option<P>, secondary: Option<S>) -> Result<Self, ConstructionError> {
        let Some(primary) = primary else {
            return Err(ConstructionError::MissingPrimary);
        };
        let Some(secondary) = secondary else {
            return Err(ConstructionError::MissingSecondary);
        };
        Ok(Self::new(primary, secondary))
    }

    /// Append a third generator after this pair.
    ///
    /// Call this before the pass starts; the returned tee begins in
    /// [`Phase::Idle`] and validates the lifecycle for the whole chain.
    #[must_use]
    pub fn chain<T>(self, next: T) -> Tee<Self, T> {
        Tee::new(self, next)
    }

    #[must_use]
    pub const fn primary(&self) -> &P {
        &self.primary
    }

    #[must_use]
    pub const fn secondary(&self) -> &S {
        &self.secondary
    }

    pub fn primary_mut(&mut self) -> &mut P {
        &mut self.primary
    }

    pub fn secondary_mut(&mut self) -> &mut S {
        &mut self.secondary
    }

    /// Current lifecycle phase of the pass
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.lifecycle.phase()
    }

    /// Take back both generators, e.g. to collect their output after `close`
    pub fn into_inner(self) -> (P, S) {
        (self.primary, self.secondary)
    }
}

impl<P, S> SelectorGenerator for Tee<P, S>
where
    P: SelectorGenerator,
    S: SelectorGenerator<Error = P::Error>,
    P::Error: From<SequenceError>,
{
    type Error = P::Error;

    fn on_event(&mut self, event: &SelectorEvent) -> Result<(), Self::Error> {
        let kind = event.kind();
        let position = self.lifecycle.position();

        if let Err(err) = self.lifecycle.advance(kind) {
            tracing::debug!(%kind, position, error = %err, "tee refused event");
            return Err(err.into());
        }
        tracing::trace!(%kind, position, "tee forwarding event");

        if let Err(err) = self.primary.on_event(event) {
            tracing::debug!(%kind, position, "primary generator rejected event; secondary skipped");
            return Err(err);
        }

        if let Err(err) = self.secondary.on_event(event) {
            tracing::debug!(
                %kind,
                position,
                "secondary generator rejected event after primary accepted it"
            );
            return Err(err);
        }

        Ok(())
    }
}
