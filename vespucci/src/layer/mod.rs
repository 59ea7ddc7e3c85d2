//! Layers are visual elements anchored to geographic coordinates, placed in
//! the host's overlay pane and repositioned whenever the viewport changes.
//!
//! Unlike a [`Control`](crate::control::Control), a layer manages its place
//! in the display tree itself. On attach it inserts its element into the
//! host's overlay pane, subscribes to [`MapEvent::ViewReset`](crate::host::MapEvent)
//! with a reposition callback, and positions the element once; on detach it
//! removes the element and releases the subscription. A detach that leaves a
//! subscription behind is a resource leak and a defect.
//!
//! [`LayerTemplate`] is a skeleton implementation to start a new layer from.

use maybe_sync::{MaybeSend, MaybeSync};

use crate::host::SharedHost;

mod template;

pub use template::{
    layer_template, LayerOptions, LayerTemplate, LAYER_TEMPLATE_CLASS, ZOOM_HIDE_CLASS,
};

/// A positioned visual element anchored to a geographic coordinate on a
/// host's display surface.
///
/// The host drives the lifecycle: it calls [`Layer::attach`] exactly once
/// when the layer is added and [`Layer::detach`] exactly once when it is
/// removed. Attaching an already attached layer without detaching it first is
/// a host-contract violation with unspecified behavior.
pub trait Layer: MaybeSend + MaybeSync {
    /// Called when the host adds the layer. Creates the layer's element,
    /// inserts it into the overlay pane and acquires the host resources the
    /// layer needs.
    fn attach(&mut self, host: &SharedHost);

    /// Called when the host removes the layer. Removes the element from the
    /// overlay pane and releases every resource acquired in attach.
    fn detach(&mut self, host: &SharedHost);
}
