//! Diagnostic event ring.
//!
//! Every internal failure records a (module, source line) pair into a
//! fixed-depth circular history, overwriting the oldest entry once full.
//! Recording never affects the dispatch outcome; the ring exists so recent
//! failure locations can be inspected offline even when printing is
//! compiled out. The verbose sink is a build-time choice: with the
//! `verbose-diag` feature each event is also printed, without it the
//! recording is all that happens.

/// Module that recorded an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    Dispatch,
    Tokenize,
    Parse,
    Arena,
}

/// One recorded failure location.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiagEvent {
    pub origin: Origin,
    pub line: u16,
}

/// Default ring depth.
pub const DIAG_DEPTH: usize = 16;

/// Fixed-depth circular event history.
pub struct DiagRing<const N: usize = DIAG_DEPTH> {
    events: [Option<DiagEvent>; N],
    next: usize,
    recorded: usize,
}

impl<const N: usize> DiagRing<N> {
    pub const fn new() -> Self {
        Self { events: [None; N], next: 0, recorded: 0 }
    }

    /// Stores an event, overwriting the oldest once the ring is full.
    pub fn record(&mut self, origin: Origin, line: u16) {
        self.events[self.next] = Some(DiagEvent { origin, line });
        self.next = (self.next + 1) % N;
        self.recorded = self.recorded.saturating_add(1);
    }

    /// Number of events currently held (saturates at the ring depth).
    pub fn len(&self) -> usize {
        if self.recorded < N { self.recorded } else { N }
    }

    pub fn is_empty(&self) -> bool {
        self.recorded == 0
    }

    /// Most recently recorded event.
    pub fn latest(&self) -> Option<DiagEvent> {
        if self.recorded == 0 {
            return None;
        }
        self.events[(self.next + N - 1) % N]
    }

    /// Iterates held events, oldest first.
    pub fn iter(&self) -> DiagIter<'_, N> {
        let start = if self.recorded < N { 0 } else { self.next };
        DiagIter { ring: self, index: start, yielded: 0 }
    }
}

impl<const N: usize> Default for DiagRing<N> {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over ring events, oldest first.
pub struct DiagIter<'a, const N: usize> {
    ring: &'a DiagRing<N>,
    index: usize,
    yielded: usize,
}

impl<const N: usize> Iterator for DiagIter<'_, N> {
    type Item = DiagEvent;

    fn next(&mut self) -> Option<DiagEvent> {
        if self.yielded >= self.ring.len() {
            return None;
        }
        let event = self.ring.events[self.index];
        self.index = (self.index + 1) % N;
        self.yielded += 1;
        event
    }
}

/// Records a failure location into `$ring`; with the `verbose-diag`
/// feature the message is also printed with its source position.
#[macro_export]
macro_rules! diag_err {
    ($ring:expr, $origin:expr, $($msg:tt)*) => {{
        $ring.record($origin, ::core::line!() as u16);
        #[cfg(feature = "verbose-diag")]
        ::std::eprintln!(
            "[ERR][{}:{}] {}",
            ::core::file!(),
            ::core::line!(),
            ::core::format_args!($($msg)*)
        );
    }};
}

#[cfg(test)]
mod diag_tests {
    use super::*;

    #[test]
    fn records_in_order() {
        let mut ring: DiagRing<4> = DiagRing::new();
        assert!(ring.is_empty());
        ring.record(Origin::Tokenize, 10);
        ring.record(Origin::Dispatch, 20);
        let lines: Vec<u16> = ring.iter().map(|e| e.line).collect();
        assert_eq!(lines, vec![10, 20]);
        assert_eq!(ring.latest().unwrap().origin, Origin::Dispatch);
    }

    #[test]
    fn overwrites_oldest_when_full() {
        let mut ring: DiagRing<3> = DiagRing::new();
        for line in 1..=5u16 {
            ring.record(Origin::Parse, line);
        }
        assert_eq!(ring.len(), 3);
        let lines: Vec<u16> = ring.iter().map(|e| e.line).collect();
        assert_eq!(lines, vec![3, 4, 5]);
    }

    #[test]
    fn macro_records_current_line() {
        let mut ring: DiagRing<4> = DiagRing::new();
        crate::diag_err!(ring, Origin::Arena, "scratch exhausted");
        assert_eq!(ring.len(), 1);
        assert_eq!(ring.latest().unwrap().origin, Origin::Arena);
        assert!(ring.latest().unwrap().line > 0);
    }
}
