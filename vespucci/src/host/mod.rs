//! The interface a mapping host exposes to its extensions.
//!
//! A host is any object that owns a display surface: it knows the current
//! viewport ([`MapView`]), manages the [`Panes`] extension elements live in,
//! and runs the event bus extensions subscribe to. This crate does not ship a
//! host; it specifies the capability set as the [`HostSurface`] trait so that
//! extensions can be written against any host implementing it (the
//! [`TestMap`] fixture implements it for tests and examples).
//!
//! Attaching an extension takes these steps:
//!
//! 1. The application wraps its host object into a [`SharedHost`] handle.
//! 2. [`add_control`] or [`add_layer`] is called with the extension. The
//!    extension's `attach` runs exactly once, creating its visual element and
//!    subscribing to the host events it needs.
//! 3. When the extension is removed ([`remove_control`], [`remove_layer`]),
//!    its `detach` runs exactly once and releases everything acquired in
//!    `attach`.
//!
//! Extensions must never keep a strong handle to the host: they hold a
//! [`WeakHost`] back-reference at most, so an attached extension cannot
//! extend the host's lifetime.

use std::sync::{Arc, Weak};

use maybe_sync::{MaybeSend, MaybeSync};
use parking_lot::RwLock;

use crate::control::Control;
use crate::layer::Layer;
use crate::view::MapView;

mod panes;
#[cfg(any(test, feature = "_tests"))]
mod test_map;

pub use panes::{Pane, Panes};
#[cfg(any(test, feature = "_tests"))]
pub use test_map::TestMap;

/// Events a host surface notifies its extensions about.
///
/// The set of events is fixed by the host contract; an extension subscribes
/// to the ones it needs with [`HostSurface::on`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum MapEvent {
    /// The visible map region's scale or origin changed, e.g. after a zoom
    /// or pan. Anything positioned relative to map coordinates must be
    /// repositioned.
    ViewReset,
}

/// Callback invoked by the host when a subscribed [`MapEvent`] fires. The
/// host passes the viewport state the event was fired under.
pub trait ViewHandler: (Fn(&MapView)) + MaybeSend + MaybeSync {}

impl<T: Fn(&MapView)> ViewHandler for T where T: MaybeSend + MaybeSync {}

/// Token identifying one subscription made through [`HostSurface::on`].
///
/// The token is deliberately not cloneable: it is handed back to the host in
/// [`HostSurface::off`] exactly once, which makes a leaked subscription
/// visible as a leaked token.
#[derive(Debug)]
pub struct Subscription {
    event: MapEvent,
    id: u64,
}

impl Subscription {
    /// Creates a new token. Called by host implementations when registering
    /// a handler.
    pub fn new(event: MapEvent, id: u64) -> Self {
        Self { event, id }
    }

    /// Event the subscription was made for.
    pub fn event(&self) -> MapEvent {
        self.event
    }

    /// Host-assigned identifier, unique among live subscriptions.
    pub fn id(&self) -> u64 {
        self.id
    }
}

/// Capability set a mapping host exposes to its extensions.
///
/// Everything an extension may do with its host goes through this trait:
/// query the viewport, access the panes, and manage event subscriptions.
/// Extensions only ever read the host state they are given; mutating host
/// internals is not part of the contract.
pub trait HostSurface: MaybeSend + MaybeSync {
    /// Current viewport state of the host's display surface.
    fn view(&self) -> MapView;

    /// Panes of the display surface.
    fn panes(&self) -> &Panes;

    /// Mutable access to the panes of the display surface.
    fn panes_mut(&mut self) -> &mut Panes;

    /// Subscribes the handler to the given event. The handler is invoked on
    /// the host's event loop every time the event fires, until the returned
    /// token is released with [`HostSurface::off`].
    fn on(&mut self, event: MapEvent, handler: Box<dyn ViewHandler>) -> Subscription;

    /// Releases a subscription. After this returns the handler must not be
    /// invoked again.
    fn off(&mut self, subscription: Subscription);
}

/// Shared handle to a host surface.
pub type SharedHost = Arc<RwLock<dyn HostSurface>>;

/// Non-owning back-reference to a host surface, held by attached extensions.
pub type WeakHost = Weak<RwLock<dyn HostSurface>>;

/// Attaches the control to the host, inserting its element into the corner
/// pane matching the control's position.
pub fn add_control(host: &SharedHost, control: &mut impl Control) {
    let element = control.attach(host);
    host.write()
        .panes_mut()
        .control_pane_mut(control.position())
        .append(element);
}

/// Removes the control's element from its corner pane and detaches the
/// control from the host.
pub fn remove_control(host: &SharedHost, control: &mut impl Control) {
    if let Some(element) = control.element() {
        host.write()
            .panes_mut()
            .control_pane_mut(control.position())
            .remove(&element);
    }
    control.detach(host);
}

/// Attaches the layer to the host. The layer inserts its element into the
/// overlay pane itself.
pub fn add_layer(host: &SharedHost, layer: &mut impl Layer) {
    layer.attach(host);
}

/// Detaches the layer from the host.
pub fn remove_layer(host: &SharedHost, layer: &mut impl Layer) {
    layer.detach(host);
}
