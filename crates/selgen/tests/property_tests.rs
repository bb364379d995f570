//! Property-based tests over generated selector lists
//!
//! Streams are built from a small selector AST so that every generated
//! stream is one a well-behaved parser could emit.

use proptest::prelude::*;
use selgen::testing::{Recorder, SequenceClock};
use selgen::{
    render_css, ContractChecker, GeneratorError, NamespacePrefix, SelectorEvent,
    SelectorGeneratorExt, Tee,
};

#[derive(Debug, Clone)]
struct Compound {
    head: Option<SelectorEvent>,
    filters: Vec<SelectorEvent>,
}

#[derive(Debug, Clone)]
struct Complex {
    first: Compound,
    rest: Vec<(SelectorEvent, Compound)>,
}

fn ident() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9-]{0,8}"
}

fn prefix() -> impl Strategy<Value = NamespacePrefix> {
    prop_oneof![
        Just(NamespacePrefix::None),
        Just(NamespacePrefix::Empty),
        Just(NamespacePrefix::Any),
        ident().prop_map(NamespacePrefix::named),
    ]
}

fn head() -> impl Strategy<Value = SelectorEvent> {
    prop_oneof![
        (prefix(), ident()).prop_map(|(prefix, name)| SelectorEvent::Type {
            prefix,
            name: name.into(),
        }),
        Just(SelectorEvent::Universal),
    ]
}

fn attribute() -> impl Strategy<Value = SelectorEvent> {
    (prefix(), ident(), ident(), 0u8..7).prop_map(|(prefix, name, value, op)| {
        let name = name.into();
        let value = value.into();
        match op {
            0 => SelectorEvent::AttributeExists { prefix, name },
            1 => SelectorEvent::AttributeExact { prefix, name, value },
            2 => SelectorEvent::AttributeIncludes { prefix, name, value },
            3 => SelectorEvent::AttributeDashMatch { prefix, name, value },
            4 => SelectorEvent::AttributePrefixMatch { prefix, name, value },
            5 => SelectorEvent::AttributeSuffixMatch { prefix, name, value },
            _ => SelectorEvent::AttributeSubstring { prefix, name, value },
        }
    })
}

fn filter() -> impl Strategy<Value = SelectorEvent> {
    prop_oneof![
        ident().prop_map(|id| SelectorEvent::Id(id.into())),
        ident().prop_map(|class| SelectorEvent::Class(class.into())),
        attribute(),
        Just(SelectorEvent::FirstChild),
        Just(SelectorEvent::LastChild),
        Just(SelectorEvent::OnlyChild),
        Just(SelectorEvent::Empty),
        (-4i32..5, 1i32..6).prop_map(|(a, b)| SelectorEvent::NthChild { a, b }),
    ]
}

fn combinator() -> impl Strategy<Value = SelectorEvent> {
    prop_oneof![
        Just(SelectorEvent::Child),
        Just(SelectorEvent::Descendant),
        Just(SelectorEvent::Adjacent),
        Just(SelectorEvent::GeneralSibling),
    ]
}

fn compound() -> impl Strategy<Value = Compound> {
    (proptest::option::of(head()), prop::collection::vec(filter(), 0..4))
        .prop_filter("a simple-selector sequence is never empty", |(head, filters)| {
            head.is_some() || !filters.is_empty()
        })
        .prop_map(|(head, filters)| Compound { head, filters })
}

fn complex() -> impl Strategy<Value = Complex> {
    (compound(), prop::collection::vec((combinator(), compound()), 0..3))
        .prop_map(|(first, rest)| Complex { first, rest })
}

fn selector_list() -> impl Strategy<Value = Vec<SelectorEvent>> {
    prop::collection::vec(complex(), 1..4).prop_map(|list| {
        let mut events = vec![SelectorEvent::Init];
        for selector in list {
            events.push(SelectorEvent::Selector);
            push_compound(&mut events, selector.first);
            for (combinator, compound) in selector.rest {
                events.push(combinator);
                push_compound(&mut events, compound);
            }
        }
        events.push(SelectorEvent::Close);
        events
    })
}

fn push_compound(events: &mut Vec<SelectorEvent>, compound: Compound) {
    events.extend(compound.head);
    events.extend(compound.filters);
}

proptest! {
    #[test]
    fn test_well_formed_streams_pass_validation(events in selector_list()) {
        let mut checker = ContractChecker::<GeneratorError>::new();
        prop_assert_eq!(checker.replay(&events), Ok(()));
        prop_assert!(checker.validator().is_complete());
    }

    #[test]
    fn test_tee_mirrors_every_stream(events in selector_list()) {
        let clock = SequenceClock::new();
        let mut tee = Tee::new(Recorder::new(clock.clone()), Recorder::new(clock.clone()));
        prop_assert!(tee.replay(&events).is_ok());

        let (primary, secondary) = tee.into_inner();
        let primary_events: Vec<_> = primary.log().events().cloned().collect();
        prop_assert_eq!(&primary_events, &events);
        prop_assert!(primary.log().is_strictly_before(secondary.log()));
        prop_assert_eq!(clock.now(), 2 * events.len() as u64);
    }

    #[test]
    fn test_checked_tee_forwards_well_formed_streams_untouched(events in selector_list()) {
        let checker = ContractChecker::<GeneratorError>::new();
        let recorder = Recorder::new(SequenceClock::new());
        let mut tee = Tee::new(checker, recorder);
        prop_assert!(tee.replay(&events).is_ok());

        let (_, recorder) = tee.into_inner();
        prop_assert_eq!(recorder.log().len(), events.len());
    }

    #[test]
    fn test_rendering_has_one_comma_per_extra_alternative(events in selector_list()) {
        let alternatives = events
            .iter()
            .filter(|event| matches!(event, SelectorEvent::Selector))
            .count();
        let css = render_css(&events);
        // Generated identifiers and values never contain ", "
        prop_assert_eq!(css.matches(", ").count(), alternatives - 1);
    }
}
