//! Search events and the observers that receive them.
//!
//! Runners never render or print. Every observable step is reported as a
//! [`SearchEvent`] to a caller-supplied [`SearchObserver`]; when a runner's
//! `logging` flag is set, events are also forwarded to `tracing`.

/// What happened at a search step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EventKind {
    /// A strictly better placement became current.
    Improved,
    /// Hill climbing stopped: the best neighbor ties the current cost.
    Plateau,
    /// Hill climbing stopped: every neighbor is worse, or there is none.
    LocalOptimum,
    /// Annealing accepted a placement that is not better.
    AcceptedWorse,
    /// Annealing kept the current placement.
    Rejected,
    /// A restart produced a new best placement.
    NewBest,
    /// A restart finished without beating the best.
    RestartFinished,
}

/// One observable search step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchEvent {
    /// Iteration, step or restart index, starting at 0.
    pub step: usize,
    /// Cost of the placement the event refers to.
    pub cost: u64,
    pub kind: EventKind,
}

/// Receives search events.
pub trait SearchObserver {
    fn on_event(&mut self, event: &SearchEvent);
}

impl<F: FnMut(&SearchEvent)> SearchObserver for F {
    fn on_event(&mut self, event: &SearchEvent) {
        self(event)
    }
}

/// Discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl SearchObserver for NoopObserver {
    fn on_event(&mut self, _event: &SearchEvent) {}
}

/// Records every event in order.
#[derive(Debug, Default, Clone)]
pub struct EventLog {
    events: Vec<SearchEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[SearchEvent] {
        &self.events
    }

    pub fn into_events(self) -> Vec<SearchEvent> {
        self.events
    }

    /// Number of recorded events of the given kind.
    pub fn count(&self, kind: EventKind) -> usize {
        self.events.iter().filter(|e| e.kind == kind).count()
    }
}

impl SearchObserver for EventLog {
    fn on_event(&mut self, event: &SearchEvent) {
        self.events.push(*event);
    }
}

/// Forwards events to `tracing`.
///
/// Improvements and new bests go out at `info`, everything else at `debug`.
#[derive(Debug, Clone, Copy)]
pub struct TracingObserver {
    strategy: &'static str,
}

impl TracingObserver {
    pub fn new(strategy: &'static str) -> Self {
        Self { strategy }
    }
}

impl SearchObserver for TracingObserver {
    fn on_event(&mut self, event: &SearchEvent) {
        let strategy = self.strategy;
        let SearchEvent { step, cost, kind } = *event;
        match kind {
            EventKind::Improved => {
                tracing::info!(strategy, step, cost, "found better placement");
            }
            EventKind::NewBest => {
                tracing::info!(strategy, step, cost, "found new best placement");
            }
            EventKind::AcceptedWorse => {
                tracing::info!(strategy, step, cost, "accepted worse placement");
            }
            EventKind::Rejected => {
                tracing::debug!(strategy, step, cost, "rejected placement");
            }
            EventKind::RestartFinished => {
                tracing::debug!(strategy, step, cost, "restart finished without improvement");
            }
            EventKind::Plateau => {
                tracing::debug!(strategy, step, cost, "stopped on plateau");
            }
            EventKind::LocalOptimum => {
                tracing::debug!(strategy, step, cost, "stopped at local optimum");
            }
        }
    }
}

/// Routes events to the caller's observer and, if enabled, to `tracing`.
pub(crate) struct EventSink<'a, O: SearchObserver + ?Sized> {
    observer: &'a mut O,
    tracing: Option<TracingObserver>,
}

impl<'a, O: SearchObserver + ?Sized> EventSink<'a, O> {
    pub(crate) fn new(observer: &'a mut O, logging: bool, strategy: &'static str) -> Self {
        Self {
            observer,
            tracing: logging.then(|| TracingObserver::new(strategy)),
        }
    }

    pub(crate) fn emit(&mut self, step: usize, cost: u64, kind: EventKind) {
        let event = SearchEvent { step, cost, kind };
        self.observer.on_event(&event);
        if let Some(t) = self.tracing.as_mut() {
            t.on_event(&event);
        }
    }
}
