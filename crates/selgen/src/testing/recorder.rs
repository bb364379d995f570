use crate::error::GeneratorError;
use crate::event::{EventKind, SelectorEvent};
use crate::generator::SelectorGenerator;
use hashbrown::HashMap;
use smallvec::SmallVec;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Shared monotonic counter
///
/// Clones share the same counter.
#[derive(Debug, Clone, Default)]
pub struct SequenceClock(Arc<AtomicU64>);

impl SequenceClock {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the next stamp
    pub fn tick(&self) -> u64 {
        self.0.fetch_add(1, Ordering::SeqCst)
    }

    /// Number of stamps taken so far
    #[must_use]
    pub fn now(&self) -> u64 {
        self.0.load(Ordering::SeqCst)
    }
}

/// One call observed by a [`Recorder`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedEvent {
    /// Clock stamp taken when the call arrived
    pub seq: u64,
    pub event: SelectorEvent,
    /// False if the recorder rejected the call
    pub accepted: bool,
}

/// Ordered list of recorded calls
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventLog {
    entries: Vec<RecordedEvent>,
}

impl EventLog {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn push(&mut self, entry: RecordedEvent) {
        self.entries.push(entry);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn entries(&self) -> &[RecordedEvent] {
        &self.entries
    }

    pub fn events(&self) -> impl Iterator<Item = &SelectorEvent> + '_ {
        self.entries.iter().map(|entry| &entry.event)
    }

    #[must_use]
    pub fn kinds(&self) -> Vec<EventKind> {
        self.events().map(SelectorEvent::kind).collect()
    }

    /// Number of calls per kind
    #[must_use]
    pub fn histogram(&self) -> HashMap<EventKind, usize> {
        let mut counts = HashMap::new();
        for event in self.events() {
            *counts.entry(event.kind()).or_insert(0) += 1;
        }
        counts
    }

    /// True if both logs saw the same events and each of ours was stamped
    /// strictly before its counterpart in `other`.
    #[must_use]
    pub fn is_strictly_before(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .entries
                .iter()
                .zip(&other.entries)
                .all(|(ours, theirs)| ours.event == theirs.event && ours.seq < theirs.seq)
    }
}

#[derive(Debug, Clone, Copy)]
struct Fault {
    kind: EventKind,
    /// 1-based occurrence of `kind` that fails
    occurrence: usize,
    seen: usize,
}

/// A generator that records every call and can be told to fail
#[derive(Debug, Clone)]
pub struct Recorder {
    clock: SequenceClock,
    log: EventLog,
    faults: SmallVec<[Fault; 2]>,
}

impl Recorder {
    #[must_use]
    pub fn new(clock: SequenceClock) -> Self {
        Self {
            clock,
            log: EventLog::new(),
            faults: SmallVec::new(),
        }
    }

    /// Fail on the first call of `kind`
    #[must_use]
    pub fn fail_on(self, kind: EventKind) -> Self {
        self.fail_on_nth(kind, 1)
    }

    /// Fail on the `occurrence`-th call of `kind` (1-based)
    #[must_use]
    pub fn fail_on_nth(mut self, kind: EventKind, occurrence: usize) -> Self {
        self.faults.push(Fault {
            kind,
            occurrence,
            seen: 0,
        });
        self
    }

    #[must_use]
    pub const fn log(&self) -> &EventLog {
        &self.log
    }

    #[must_use]
    pub fn into_log(self) -> EventLog {
        self.log
    }

    fn should_fail(&mut self, kind: EventKind) -> bool {
        let mut fail = false;
        for fault in self.faults.iter_mut().filter(|fault| fault.kind == kind) {
            fault.seen += 1;
            fail |= fault.seen == fault.occurrence;
        }
        fail
    }
}

impl SelectorGenerator for Recorder {
    type Error = GeneratorError;

    fn on_event(&mut self, event: &SelectorEvent) -> Result<(), Self::Error> {
        let kind = event.kind();
        let accepted = !self.should_fail(kind);
        self.log.push(RecordedEvent {
            seq: self.clock.tick(),
            event: event.clone(),
            accepted,
        });
        if accepted {
            Ok(())
        } else {
            Err(GeneratorError::unsupported(kind))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::SelectorGeneratorExt;

    #[test]
    fn test_clock_is_shared() {
        let clock = SequenceClock::new();
        let other = clock.clone();
        assert_eq!(clock.tick(), 0);
        assert_eq!(other.tick(), 1);
        assert_eq!(clock.now(), 2);
    }

    #[test]
    fn test_recorder_logs_calls() {
        let mut recorder = Recorder::new(SequenceClock::new());
        recorder.init().unwrap();
        recorder.class("a").unwrap();
        recorder.class("b").unwrap();

        let log = recorder.log();
        assert_eq!(log.len(), 3);
        assert_eq!(log.kinds(), vec![EventKind::Init, EventKind::Class, EventKind::Class]);
        assert_eq!(log.histogram()[&EventKind::Class], 2);
        assert!(log.entries().iter().all(|entry| entry.accepted));
    }

    #[test]
    fn test_fail_on_nth() {
        let mut recorder = Recorder::new(SequenceClock::new()).fail_on_nth(EventKind::Id, 2);
        recorder.id("a").unwrap();
        assert_eq!(
            recorder.id("b").unwrap_err(),
            GeneratorError::unsupported(EventKind::Id)
        );
        recorder.id("c").unwrap();

        let accepted: Vec<_> = recorder.log().entries().iter().map(|e| e.accepted).collect();
        assert_eq!(accepted, vec![true, false, true]);
    }

    #[test]
    fn test_strictly_before() {
        let clock = SequenceClock::new();
        let mut first = Recorder::new(clock.clone());
        let mut second = Recorder::new(clock);

        first.init().unwrap();
        second.init().unwrap();
        first.universal().unwrap();
        second.universal().unwrap();

        assert!(first.log().is_strictly_before(second.log()));
        assert!(!second.log().is_strictly_before(first.log()));
    }
}
