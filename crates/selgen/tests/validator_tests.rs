//! Call-sequence validation, standalone and in front of a generator

use selgen::testing::{Recorder, SequenceClock};
use selgen::{
    ContractChecker, EventKind, GeneratorError, NamespacePrefix, SelectorEvent,
    SelectorGeneratorExt, SequenceError, SequenceValidator, Tee, ValidatorConfig,
};

fn check_all(events: &[SelectorEvent]) -> Result<(), SequenceError> {
    let mut validator = SequenceValidator::default();
    events.iter().try_for_each(|event| validator.check(event))
}

fn ty(name: &str) -> SelectorEvent {
    SelectorEvent::Type {
        prefix: NamespacePrefix::None,
        name: name.into(),
    }
}

#[test]
fn test_accepts_selector_list_with_alternatives() {
    let events = [
        SelectorEvent::Init,
        SelectorEvent::Selector,
        ty("ul"),
        SelectorEvent::Descendant,
        ty("li"),
        SelectorEvent::NthChild { a: 2, b: 1 },
        SelectorEvent::Selector,
        SelectorEvent::Universal,
        SelectorEvent::AttributeExists {
            prefix: NamespacePrefix::Any,
            name: "hidden".into(),
        },
        SelectorEvent::GeneralSibling,
        SelectorEvent::Class("x".into()),
        SelectorEvent::Close,
    ];
    assert_eq!(check_all(&events), Ok(()));
}

#[test]
fn test_rejects_leading_combinator() {
    let events = [SelectorEvent::Init, SelectorEvent::Selector, SelectorEvent::Adjacent];
    assert_eq!(
        check_all(&events),
        Err(SequenceError::DanglingCombinator {
            position: 2,
            kind: EventKind::Adjacent
        })
    );
}

#[test]
fn test_rejects_doubled_combinator() {
    let events = [
        SelectorEvent::Init,
        SelectorEvent::Selector,
        ty("a"),
        SelectorEvent::Child,
        SelectorEvent::Descendant,
    ];
    assert_eq!(
        check_all(&events),
        Err(SequenceError::DanglingCombinator {
            position: 4,
            kind: EventKind::Descendant
        })
    );
}

#[test]
fn test_rejects_trailing_combinator() {
    let events = [
        SelectorEvent::Init,
        SelectorEvent::Selector,
        ty("a"),
        SelectorEvent::Child,
        SelectorEvent::Close,
    ];
    assert_eq!(
        check_all(&events),
        Err(SequenceError::EmptySequence {
            position: 4,
            kind: EventKind::Close
        })
    );
}

#[test]
fn test_rejects_empty_alternative() {
    let events = [
        SelectorEvent::Init,
        SelectorEvent::Selector,
        SelectorEvent::Selector,
    ];
    assert_eq!(
        check_all(&events),
        Err(SequenceError::EmptySequence {
            position: 2,
            kind: EventKind::Selector
        })
    );
}

#[test]
fn test_rejects_type_after_filter() {
    let events = [
        SelectorEvent::Init,
        SelectorEvent::Selector,
        SelectorEvent::Class("a".into()),
        SelectorEvent::Universal,
    ];
    assert!(matches!(
        check_all(&events),
        Err(SequenceError::MisplacedType {
            kind: EventKind::Universal,
            ..
        })
    ));
}

#[test]
fn test_type_may_open_each_sequence() {
    let events = [
        SelectorEvent::Init,
        SelectorEvent::Selector,
        ty("a"),
        SelectorEvent::Adjacent,
        ty("b"),
        SelectorEvent::Close,
    ];
    assert_eq!(check_all(&events), Ok(()));
}

#[test]
fn test_limits_alternatives() {
    let config = ValidatorConfig::default().with_max_alternatives(1);
    let mut validator = SequenceValidator::new(config);
    let events = [
        SelectorEvent::Init,
        SelectorEvent::Selector,
        ty("a"),
        SelectorEvent::Selector,
    ];
    let err = events
        .iter()
        .try_for_each(|event| validator.check(event))
        .unwrap_err();
    assert_eq!(err, SequenceError::TooManyAlternatives { position: 3, limit: 1 });
}

#[test]
fn test_checker_shields_the_secondary() {
    let checker = ContractChecker::<GeneratorError>::new();
    let recorder = Recorder::new(SequenceClock::new());
    let mut tee = Tee::new(checker, recorder);

    tee.init().unwrap();
    tee.selector().unwrap();
    tee.id("a").unwrap();
    let err = tee.type_selector(NamespacePrefix::None, "div").unwrap_err();
    assert!(matches!(
        err,
        GeneratorError::Sequence(SequenceError::MisplacedType { position: 3, .. })
    ));

    let (_, recorder) = tee.into_inner();
    assert_eq!(
        recorder.log().kinds(),
        vec![EventKind::Init, EventKind::Selector, EventKind::Id]
    );
}
