//! In-memory host surface double used in tests, doc examples and the
//! repository examples.

use crate::host::{HostSurface, MapEvent, Panes, Subscription, ViewHandler};
use crate::view::MapView;

/// A minimal host surface holding its state in memory.
///
/// Besides implementing [`HostSurface`], the double exposes the probes tests
/// need: [`TestMap::subscription_count`] to verify that detached extensions
/// leave no subscriptions behind, and [`TestMap::set_view`] to simulate a
/// viewport change firing [`MapEvent::ViewReset`].
pub struct TestMap {
    view: MapView,
    panes: Panes,
    handlers: Vec<HandlerEntry>,
    next_id: u64,
}

struct HandlerEntry {
    event: MapEvent,
    id: u64,
    handler: Box<dyn ViewHandler>,
}

impl TestMap {
    /// Creates a new host with the given viewport state and empty panes.
    pub fn new(view: MapView) -> Self {
        Self {
            view,
            panes: Panes::default(),
            handlers: Vec::new(),
            next_id: 0,
        }
    }

    /// Number of live event subscriptions.
    pub fn subscription_count(&self) -> usize {
        self.handlers.len()
    }

    /// Changes the viewport state and fires [`MapEvent::ViewReset`]. All
    /// subscribed handlers run synchronously before this returns.
    pub fn set_view(&mut self, view: MapView) {
        self.view = view;
        self.fire(MapEvent::ViewReset);
    }

    fn fire(&self, event: MapEvent) {
        for entry in self.handlers.iter().filter(|entry| entry.event == event) {
            (entry.handler)(&self.view);
        }
    }
}

impl HostSurface for TestMap {
    fn view(&self) -> MapView {
        self.view
    }

    fn panes(&self) -> &Panes {
        &self.panes
    }

    fn panes_mut(&mut self) -> &mut Panes {
        &mut self.panes
    }

    fn on(&mut self, event: MapEvent, handler: Box<dyn ViewHandler>) -> Subscription {
        let id = self.next_id;
        self.next_id += 1;
        self.handlers.push(HandlerEntry { event, id, handler });
        Subscription::new(event, id)
    }

    fn off(&mut self, subscription: Subscription) {
        self.handlers
            .retain(|entry| entry.event != subscription.event() || entry.id != subscription.id());
    }
}
