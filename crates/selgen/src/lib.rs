//! # selgen
//!
//! The contract between a CSS selector parser and the generators that turn
//! what it recognizes into something useful, such as XPath text or a
//! matching predicate.
//!
//! ## Overview
//!
//! - **Events**: every grammar production is a [`SelectorEvent`]; a parse is
//!   a stream of them bracketed by `Init` and `Close`
//! - **Generators**: anything implementing [`SelectorGenerator`] can consume
//!   the stream; [`SelectorGeneratorExt`] adds one method per production
//! - **Fan-out**: [`Tee`] feeds one stream to two generators, primary
//!   first, so a single parse can build two representations
//! - **Validation**: [`SequenceValidator`] and [`ContractChecker`] check that
//!   a stream follows the call-sequence contract
//!
//! ## Quick Start
//!
//! ```rust
//! use selgen::{NamespacePrefix, SelectorGeneratorExt, Tee};
//! use selgen::testing::{Recorder, SequenceClock};
//!
//! // `div.foo > span`, reported to two recording generators
//! let clock = SequenceClock::new();
//! let mut tee = Tee::new(Recorder::new(clock.clone()), Recorder::new(clock));
//!
//! tee.init()?;
//! tee.selector()?;
//! tee.type_selector(NamespacePrefix::None, "div")?;
//! tee.class("foo")?;
//! tee.child()?;
//! tee.type_selector(NamespacePrefix::None, "span")?;
//! tee.close()?;
//!
//! let (primary, secondary) = tee.into_inner();
//! // same events on both sides, primary stamped first each time
//! assert_eq!(primary.log().kinds(), secondary.log().kinds());
//! assert!(primary.log().is_strictly_before(secondary.log()));
//! assert_eq!(selgen::render_css(primary.log().events()), "div.foo > span");
//! # Ok::<(), selgen::GeneratorError>(())
//! ```
//!
//! ## Modules
//!
//! - [`event`] - Event vocabulary and namespace prefixes
//! - [`generator`] - The generator trait and its per-production methods
//! - [`tee`] - Two-way fan-out
//! - [`lifecycle`] - `init`/`close` bracketing of a pass
//! - [`validate`] - Call-sequence validation
//! - [`error`] - Error types
//! - [`testing`] - Recording generators for tests

pub mod error;
pub mod event;
pub mod generator;
pub mod lifecycle;
pub mod tee;
pub mod testing;
pub mod validate;

// Re-export commonly used types
pub use error::{ConstructionError, GeneratorError, SequenceError};
pub use event::{render_css, EventCategory, EventKind, NamespacePrefix, SelectorEvent};
pub use generator::{NullGenerator, SelectorGenerator, SelectorGeneratorExt};
pub use lifecycle::{Lifecycle, Phase};
pub use tee::Tee;
pub use validate::{ContractChecker, SequenceValidator, ValidatorConfig};
