// File: crates/hover-core/src/events.rs
// Summary: Chart interaction events, an explicit subscribe/unsubscribe bus, and the
// hover/selection controller that turns events into tooltip and time-window state.

use std::cell::RefCell;
use std::rc::Rc;

use crate::hover::{self, HoverOptions};
use crate::series::Series;
use crate::tooltip::Tooltip;
use crate::types::Position;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    Hover,
    Select,
    DoubleClick,
    PointerDown,
    PointerUp,
    Leave,
}

/// Pointer events in data space (x/y are chart values, not pixels).
#[derive(Clone, Debug, PartialEq)]
pub enum ChartEvent {
    /// Cursor moved; `item` is the series directly under the cursor, if any.
    Hover { pos: Position, item: Option<usize> },
    /// Horizontal range selected.
    Select { from: f64, to: f64 },
    DoubleClick,
    PointerDown,
    PointerUp,
    Leave,
}

impl ChartEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            ChartEvent::Hover { .. } => EventKind::Hover,
            ChartEvent::Select { .. } => EventKind::Select,
            ChartEvent::DoubleClick => EventKind::DoubleClick,
            ChartEvent::PointerDown => EventKind::PointerDown,
            ChartEvent::PointerUp => EventKind::PointerUp,
            ChartEvent::Leave => EventKind::Leave,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

type Handler = Box<dyn FnMut(&ChartEvent)>;

/// Event subscriptions. Handlers run in subscription order.
#[derive(Default)]
pub struct EventBus {
    next_id: u64,
    handlers: Vec<(SubscriptionId, EventKind, Handler)>,
}

impl EventBus {
    pub fn new() -> Self { Self::default() }

    pub fn subscribe(&mut self, kind: EventKind, handler: impl FnMut(&ChartEvent) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.handlers.push((id, kind, Box::new(handler)));
        tracing::debug!(?kind, id = id.0, "subscribed");
        id
    }

    /// Remove a subscription. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.handlers.len();
        self.handlers.retain(|(h, _, _)| *h != id);
        let removed = self.handlers.len() != before;
        if removed {
            tracing::debug!(id = id.0, "unsubscribed");
        }
        removed
    }

    pub fn clear(&mut self) {
        self.handlers.clear();
    }

    /// Deliver `event` to matching handlers; returns how many ran.
    pub fn emit(&mut self, event: &ChartEvent) -> usize {
        let kind = event.kind();
        let mut delivered = 0;
        for (_, k, handler) in self.handlers.iter_mut() {
            if *k == kind {
                handler(event);
                delivered += 1;
            }
        }
        delivered
    }

    pub fn len(&self) -> usize { self.handlers.len() }

    pub fn is_empty(&self) -> bool { self.handlers.is_empty() }
}

/// Requested change of the dashboard time window.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TimeWindowRequest {
    Update { from: f64, to: f64 },
    Reset,
}

/// Hover, selection and pointer state of one chart.
#[derive(Clone, Debug, Default)]
pub struct Interaction {
    options: HoverOptions,
    enabled: bool,
    mouse_interaction: bool,
    tooltip: Option<Tooltip>,
    highlights: Vec<(usize, usize)>,
    time_window: Option<TimeWindowRequest>,
}

impl Interaction {
    /// New controller with mouse handling enabled.
    pub fn new(options: HoverOptions) -> Self {
        Self { options, enabled: true, ..Self::default() }
    }

    pub fn enable(&mut self) {
        self.enabled = true;
    }

    /// Stop reacting to events and hide anything currently shown.
    pub fn disable(&mut self) {
        self.enabled = false;
        self.hide();
        self.mouse_interaction = false;
    }

    pub fn is_enabled(&self) -> bool { self.enabled }

    pub fn is_mouse_interaction(&self) -> bool { self.mouse_interaction }

    pub fn tooltip(&self) -> Option<&Tooltip> { self.tooltip.as_ref() }

    pub fn highlights(&self) -> &[(usize, usize)] { &self.highlights }

    /// Pending time-window request, cleared on read.
    pub fn take_time_window_request(&mut self) -> Option<TimeWindowRequest> {
        self.time_window.take()
    }

    pub fn handle(&mut self, event: &ChartEvent, series: &[Series]) {
        if !self.enabled {
            return;
        }
        match *event {
            ChartEvent::Hover { pos, item } => self.on_hover(pos, item, series),
            ChartEvent::Select { from, to } => {
                self.time_window = Some(TimeWindowRequest::Update { from, to });
            }
            ChartEvent::DoubleClick => self.time_window = Some(TimeWindowRequest::Reset),
            ChartEvent::PointerDown => self.mouse_interaction = true,
            ChartEvent::PointerUp => self.mouse_interaction = false,
            ChartEvent::Leave => {
                self.hide();
                self.mouse_interaction = false;
            }
        }
    }

    fn on_hover(&mut self, pos: Position, item: Option<usize>, series: &[Series]) {
        if self.options.individual && item.is_none() {
            self.hide();
            return;
        }
        let info = hover::resolve(series, pos, self.options);
        match Tooltip::build(&info, item, self.options) {
            Some(tooltip) => {
                // Point highlighting belongs to the multi-series tooltip only.
                if self.options.individual {
                    self.highlights.clear();
                } else {
                    self.highlights = info.highlights();
                }
                self.tooltip = Some(tooltip);
            }
            None => self.hide(),
        }
    }

    fn hide(&mut self) {
        self.tooltip = None;
        self.highlights.clear();
    }

    /// Subscribe a shared controller to every event kind on `bus`.
    pub fn attach(
        this: &Rc<RefCell<Interaction>>,
        bus: &mut EventBus,
        series: Rc<RefCell<Vec<Series>>>,
    ) -> Vec<SubscriptionId> {
        const KINDS: [EventKind; 6] = [
            EventKind::Hover,
            EventKind::Select,
            EventKind::DoubleClick,
            EventKind::PointerDown,
            EventKind::PointerUp,
            EventKind::Leave,
        ];
        KINDS
            .iter()
            .map(|&kind| {
                let this = Rc::clone(this);
                let series = Rc::clone(&series);
                bus.subscribe(kind, move |evt| this.borrow_mut().handle(evt, &series.borrow()))
            })
            .collect()
    }
}
