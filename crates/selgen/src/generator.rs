//! # Generator Contract
//!
//! A selector parser reports what it recognizes to a [`SelectorGenerator`],
//! one [`SelectorEvent`] at a time, in source order. The generator turns
//! those events into whatever representation it builds.
//!
//! Generators implement the single entry point [`SelectorGenerator::on_event`].
//! Drivers usually call the per-production methods of
//! [`SelectorGeneratorExt`] instead, which every generator gets for free.
//!
//! A generator may reject any event by returning an error. The driver
//! decides whether to abort the parse or keep going.

use crate::error::GeneratorError;
use crate::event::{NamespacePrefix, SelectorEvent};
use compact_str::CompactString;
use std::marker::PhantomData;

/// Receiver of selector grammar productions
pub trait SelectorGenerator {
    /// Error returned when the generator rejects an event
    type Error;

    /// Handle one production.
    ///
    /// # Errors
    ///
    /// Returns the generator's error if it cannot accept `event` at this point,
    /// for example because it does not support the construct.
    fn on_event(&mut self, event: &SelectorEvent) -> Result<(), Self::Error>;
}

impl<G: SelectorGenerator + ?Sized> SelectorGenerator for &mut G {
    type Error = G::Error;

    fn on_event(&mut self, event: &SelectorEvent) -> Result<(), Self::Error> {
        (**self).on_event(event)
    }
}

impl<G: SelectorGenerator + ?Sized> SelectorGenerator for Box<G> {
    type Error = G::Error;

    fn on_event(&mut self, event: &SelectorEvent) -> Result<(), Self::Error> {
        (**self).on_event(event)
    }
}

/// One method per production, for drivers that prefer call syntax.
///
/// Implemented for every [`SelectorGenerator`]; each method builds the
/// matching [`SelectorEvent`] and hands it to `on_event`.
pub trait SelectorGeneratorExt: SelectorGenerator {
    fn init(&mut self) -> Result<(), Self::Error> {
        self.on_event(&SelectorEvent::Init)
    }

    fn close(&mut self) -> Result<(), Self::Error> {
        self.on_event(&SelectorEvent::Close)
    }

    /// Selector boundary; precedes every alternative, including the first
    fn selector(&mut self) -> Result<(), Self::Error> {
        self.on_event(&SelectorEvent::Selector)
    }

    fn type_selector(
        &mut self,
        prefix: NamespacePrefix,
        name: impl Into<CompactString>,
    ) -> Result<(), Self::Error> {
        self.on_event(&SelectorEvent::Type {
            prefix,
            name: name.into(),
        })
    }

    fn universal(&mut self) -> Result<(), Self::Error> {
        self.on_event(&SelectorEvent::Universal)
    }

    fn id(&mut self, id: impl Into<CompactString>) -> Result<(), Self::Error> {
        self.on_event(&SelectorEvent::Id(id.into()))
    }

    fn class(&mut self, class: impl Into<CompactString>) -> Result<(), Self::Error> {
        self.on_event(&SelectorEvent::Class(class.into()))
    }

    fn attribute_exists(
        &mut self,
        prefix: NamespacePrefix,
        name: impl Into<CompactString>,
    ) -> Result<(), Self::Error> {
        self.on_event(&SelectorEvent::AttributeExists {
            prefix,
            name: name.into(),
        })
    }

    fn attribute_exact(
        &mut self,
        prefix: NamespacePrefix,
        name: impl Into<CompactString>,
        value: impl Into<CompactString>,
    ) -> Result<(), Self::Error> {
        self.on_event(&SelectorEvent::AttributeExact {
            prefix,
            name: name.into(),
            value: value.into(),
        })
    }

    fn attribute_includes(
        &mut self,
        prefix: NamespacePrefix,
        name: impl Into<CompactString>,
        value: impl Into<CompactString>,
    ) -> Result<(), Self::Error> {
        self.on_event(&SelectorEvent::AttributeIncludes {
            prefix,
            name: name.into(),
            value: value.into(),
        })
    }

    fn attribute_dash_match(
        &mut self,
        prefix: NamespacePrefix,
        name: impl Into<CompactString>,
        value: impl Into<CompactString>,
    ) -> Result<(), Self::Error> {
        self.on_event(&SelectorEvent::AttributeDashMatch {
            prefix,
            name: name.into(),
            value: value.into(),
        })
    }

    fn attribute_prefix_match(
        &mut self,
        prefix: NamespacePrefix,
        name: impl Into<CompactString>,
        value: impl Into<CompactString>,
    ) -> Result<(), Self::Error> {
        self.on_event(&SelectorEvent::AttributePrefixMatch {
            prefix,
            name: name.into(),
            value: value.into(),
        })
    }

    fn attribute_suffix_match(
        &mut self,
        prefix: NamespacePrefix,
        name: impl Into<CompactString>,
        value: impl Into<CompactString>,
    ) -> Result<(), Self::Error> {
        self.on_event(&SelectorEvent::AttributeSuffixMatch {
            prefix,
            name: name.into(),
            value: value.into(),
        })
    }

    fn attribute_substring(
        &mut self,
        prefix: NamespacePrefix,
        name: impl Into<CompactString>,
        value: impl Into<CompactString>,
    ) -> Result<(), Self::Error> {
        self.on_event(&SelectorEvent::AttributeSubstring {
            prefix,
            name: name.into(),
            value: value.into(),
        })
    }

    fn first_child(&mut self) -> Result<(), Self::Error> {
        self.on_event(&SelectorEvent::FirstChild)
    }

    fn last_child(&mut self) -> Result<(), Self::Error> {
        self.on_event(&SelectorEvent::LastChild)
    }

    /// `:nth-child(an+b)`
    fn nth_child(&mut self, a: i32, b: i32) -> Result<(), Self::Error> {
        self.on_event(&SelectorEvent::NthChild { a, b })
    }

    fn only_child(&mut self) -> Result<(), Self::Error> {
        self.on_event(&SelectorEvent::OnlyChild)
    }

    fn empty(&mut self) -> Result<(), Self::Error> {
        self.on_event(&SelectorEvent::Empty)
    }

    fn child(&mut self) -> Result<(), Self::Error> {
        self.on_event(&SelectorEvent::Child)
    }

    fn descendant(&mut self) -> Result<(), Self::Error> {
        self.on_event(&SelectorEvent::Descendant)
    }

    fn adjacent(&mut self) -> Result<(), Self::Error> {
        self.on_event(&SelectorEvent::Adjacent)
    }

    fn general_sibling(&mut self) -> Result<(), Self::Error> {
        self.on_event(&SelectorEvent::GeneralSibling)
    }

    /// Feed a recorded stream, stopping at the first rejected event.
    ///
    /// # Errors
    ///
    /// Returns the first error the generator produced; later events are not sent.
    fn replay<'a, I>(&mut self, events: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = &'a SelectorEvent>,
    {
        for event in events {
            self.on_event(event)?;
        }
        Ok(())
    }
}

impl<G: SelectorGenerator + ?Sized> SelectorGeneratorExt for G {}

/// A generator that accepts every event and produces nothing
pub struct NullGenerator<E = GeneratorError> {
    _error: PhantomData<fn() -> E>,
}

impl<E> NullGenerator<E> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _error: PhantomData,
        }
    }
}

impl<E> Default for NullGenerator<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> std::fmt::Debug for NullGenerator<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("NullGenerator")
    }
}

impl<E> SelectorGenerator for NullGenerator<E> {
    type Error = E;

    fn on_event(&mut self, _event: &SelectorEvent) -> Result<(), Self::Error> {
        Ok(())
    }
}
