//! Bounded log of stack transitions for debugging and replay output.

use std::collections::VecDeque;
use std::time::SystemTime;

use serde::Serialize;

use super::kind::PresentationKind;
use super::route::RouteId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TransitionEvent {
    Presented,
    Dismissed,
}

/// One applied change to a single level.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Transition {
    /// When the change was applied.
    pub at: SystemTime,
    pub event: TransitionEvent,
    pub level: usize,
    pub kind: PresentationKind,
    pub route: RouteId,
}

#[derive(Debug)]
pub(crate) struct TransitionLog {
    entries: VecDeque<Transition>,
    limit: usize,
}

impl TransitionLog {
    pub(crate) fn new(limit: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(limit.min(256)),
            limit,
        }
    }

    pub(crate) fn record(
        &mut self,
        event: TransitionEvent,
        level: usize,
        kind: PresentationKind,
        route: RouteId,
    ) {
        if self.limit == 0 {
            return;
        }
        while self.entries.len() >= self.limit {
            self.entries.pop_front();
        }
        self.entries.push_back(Transition {
            at: SystemTime::now(),
            event,
            level,
            kind,
            route,
        });
    }

    pub(crate) fn entries(&self) -> Vec<Transition> {
        self.entries.iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn oldest_entries_are_evicted() {
        let mut log = TransitionLog::new(2);
        for level in 0..3 {
            log.record(
                TransitionEvent::Presented,
                level,
                PresentationKind::Sheet,
                RouteId::new(),
            );
        }
        let levels: Vec<usize> = log.entries().iter().map(|t| t.level).collect();
        assert_eq!(levels, vec![1, 2]);
    }

    #[test]
    fn zero_limit_disables_recording() {
        let mut log = TransitionLog::new(0);
        log.record(
            TransitionEvent::Dismissed,
            0,
            PresentationKind::Overlay,
            RouteId::new(),
        );
        assert!(log.entries().is_empty());
    }
}
