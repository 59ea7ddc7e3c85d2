//! Skeleton overlay layer extension to copy from when authoring a new layer.

use std::sync::{Arc, Weak};

use vespucci_types::geo::{GeoPoint, GeoPoint2d};

use crate::element::{Element, ElementRef};
use crate::error::ExtensionError;
use crate::host::{MapEvent, SharedHost, Subscription, WeakHost};
use crate::layer::Layer;
use crate::view::MapView;

/// Style class the layer template tags its element with. External style
/// rules key off this name.
pub const LAYER_TEMPLATE_CLASS: &str = "vespucci-layer-template";

/// Style class hosts use to hide overlay elements while the viewport is
/// animating.
pub const ZOOM_HIDE_CLASS: &str = "vespucci-zoom-hide";

/// Configuration of a [`LayerTemplate`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayerOptions {
    /// Geographic coordinate the layer's element is anchored to. Required.
    pub position: Option<GeoPoint2d>,
}

/// A layer that keeps an empty element pinned to its anchor coordinate and
/// does nothing else. Each lifecycle method marks the place where a real
/// layer adds its behavior.
///
/// The anchor is captured at construction and never changes for the lifetime
/// of the instance.
#[derive(Debug)]
pub struct LayerTemplate {
    anchor: GeoPoint2d,
    host: Option<WeakHost>,
    element: Option<ElementRef>,
    subscription: Option<Subscription>,
}

impl LayerTemplate {
    /// Creates a new layer anchored to the coordinate given in the options.
    ///
    /// Fails with [`ExtensionError::MissingOption`] if no anchor is given: a
    /// layer cannot render without a position. No element is created until
    /// the layer is attached.
    pub fn new(options: LayerOptions) -> Result<Self, ExtensionError> {
        let anchor = options
            .position
            .ok_or(ExtensionError::MissingOption("position"))?;

        Ok(Self {
            anchor,
            host: None,
            element: None,
            subscription: None,
            // Continue initializing the layer here.
        })
    }

    /// The coordinate the layer is anchored to.
    pub fn anchor(&self) -> GeoPoint2d {
        self.anchor
    }

    /// The configuration this instance resolved to.
    pub fn options(&self) -> LayerOptions {
        LayerOptions {
            position: Some(self.anchor),
        }
    }

    /// The element created by attach, while the layer is attached.
    pub fn element(&self) -> Option<ElementRef> {
        self.element.clone()
    }

    /// Recomputes the element's screen offset from the anchor and the host's
    /// current viewport. Safe to call any number of times; does nothing when
    /// the layer is detached or the host is gone.
    fn reposition(&self) {
        let Some(host) = self.host.as_ref().and_then(Weak::upgrade) else {
            return;
        };
        let view = host.read().view();
        if let Some(element) = &self.element {
            Self::position_element(element, &self.anchor, &view);
        }
    }

    fn position_element(element: &ElementRef, anchor: &impl GeoPoint<Num = f64>, view: &MapView) {
        // The offset is left unchanged if the anchor has no image under the
        // current view.
        if let Some(position) = view.geo_to_screen(anchor) {
            element.write().set_offset(position);
        }
    }
}

impl Layer for LayerTemplate {
    fn attach(&mut self, host: &SharedHost) {
        self.host = Some(Arc::downgrade(host));

        let mut element = Element::new(LAYER_TEMPLATE_CLASS);
        element.add_class(ZOOM_HIDE_CLASS);
        let element = element.into_shared();

        // Continue building the layer contents here.

        {
            let mut host_mut = host.write();
            host_mut.panes_mut().overlay_pane_mut().append(element.clone());

            let anchor = self.anchor;
            let handler_element = element.clone();
            self.subscription = Some(host_mut.on(
                MapEvent::ViewReset,
                Box::new(move |view: &MapView| {
                    Self::position_element(&handler_element, &anchor, view);
                }),
            ));
        }

        self.element = Some(element);

        // Initial placement; from here on the subscription keeps the element
        // in sync with the viewport.
        self.reposition();
        log::debug!(
            "layer template attached at ({}, {})",
            self.anchor.lat(),
            self.anchor.lon()
        );
    }

    fn detach(&mut self, host: &SharedHost) {
        let mut host_mut = host.write();
        if let Some(element) = self.element.take() {
            host_mut.panes_mut().overlay_pane_mut().remove(&element);
        }
        if let Some(subscription) = self.subscription.take() {
            host_mut.off(subscription);
        }
        drop(host_mut);

        self.host = None;
        log::debug!("layer template detached");
    }
}

/// Convenience constructor for [`LayerTemplate`].
pub fn layer_template(options: LayerOptions) -> Result<LayerTemplate, ExtensionError> {
    LayerTemplate::new(options)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use approx::assert_abs_diff_eq;
    use assert_matches::assert_matches;
    use parking_lot::RwLock;
    use vespucci_types::cartesian::{Point2d, Size};
    use vespucci_types::latlon;

    use super::*;
    use crate::host::{self, HostSurface, TestMap};

    fn host(view: MapView) -> (Arc<RwLock<TestMap>>, SharedHost) {
        let map = Arc::new(RwLock::new(TestMap::new(view)));
        let shared: SharedHost = map.clone();
        (map, shared)
    }

    fn view() -> MapView {
        MapView::default().with_size(Size::new(800.0, 600.0))
    }

    #[test]
    fn construction_requires_anchor() {
        let error = layer_template(LayerOptions::default());
        assert_matches!(error, Err(ExtensionError::MissingOption("position")));
    }

    #[test]
    fn factory_is_equivalent_to_new() {
        let options = LayerOptions {
            position: Some(latlon!(10.0, 20.0)),
        };

        let from_new = LayerTemplate::new(options).expect("anchor is set");
        let from_factory = layer_template(options).expect("anchor is set");
        assert_eq!(from_new.options(), from_factory.options());
    }

    #[test]
    fn no_element_before_attach() {
        let layer = layer_template(LayerOptions {
            position: Some(latlon!(10.0, 20.0)),
        })
        .expect("anchor is set");
        assert!(layer.element().is_none());
    }

    #[test]
    fn attach_positions_element_immediately() {
        let (map, shared) = host(view());
        let anchor = latlon!(10.0, 20.0);
        let mut layer = layer_template(LayerOptions {
            position: Some(anchor),
        })
        .expect("anchor is set");

        host::add_layer(&shared, &mut layer);

        let element = layer.element().expect("layer is attached");
        assert!(element.read().has_class(LAYER_TEMPLATE_CLASS));
        assert!(element.read().has_class(ZOOM_HIDE_CLASS));
        assert!(map.read().panes().overlay_pane().contains(&element));

        let expected = view().geo_to_screen(&anchor).expect("anchor is projectable");
        assert_abs_diff_eq!(element.read().offset(), expected, epsilon = 1e-9);
    }

    #[test]
    fn reposition_is_idempotent() {
        let (_, shared) = host(view());
        let mut layer = layer_template(LayerOptions {
            position: Some(latlon!(10.0, 20.0)),
        })
        .expect("anchor is set");
        host::add_layer(&shared, &mut layer);

        let element = layer.element().expect("layer is attached");
        let first = element.read().offset();

        layer.reposition();
        layer.reposition();

        assert_eq!(element.read().offset(), first);
    }

    #[test]
    fn reposition_after_host_dropped_is_safe() {
        let (map, shared) = host(view());
        let mut layer = layer_template(LayerOptions {
            position: Some(latlon!(10.0, 20.0)),
        })
        .expect("anchor is set");
        host::add_layer(&shared, &mut layer);

        drop(shared);
        drop(map);

        layer.reposition();
    }

    #[test]
    fn detach_releases_subscription_and_element() {
        let (map, shared) = host(view());
        let mut layer = layer_template(LayerOptions {
            position: Some(latlon!(10.0, 20.0)),
        })
        .expect("anchor is set");

        host::add_layer(&shared, &mut layer);
        assert_eq!(map.read().subscription_count(), 1);
        assert_eq!(map.read().panes().overlay_pane().len(), 1);

        host::remove_layer(&shared, &mut layer);
        assert_eq!(map.read().subscription_count(), 0);
        assert!(map.read().panes().overlay_pane().is_empty());
        assert!(layer.element().is_none());

        // The reposition callback must not fire after the subscription is
        // released.
        map.write().set_view(view().with_resolution(2.0));
    }

    #[test]
    fn detach_without_attach_is_safe() {
        let (map, shared) = host(view());
        let mut layer = layer_template(LayerOptions {
            position: Some(latlon!(10.0, 20.0)),
        })
        .expect("anchor is set");

        layer.detach(&shared);
        assert_eq!(map.read().subscription_count(), 0);
    }

    #[test]
    fn unprojectable_anchor_leaves_offset_unchanged() {
        let (map, shared) = host(view());
        let mut layer = layer_template(LayerOptions {
            position: Some(latlon!(180.0, 0.0)),
        })
        .expect("anchor is set");
        host::add_layer(&shared, &mut layer);

        let element = layer.element().expect("layer is attached");
        assert_eq!(element.read().offset(), Point2d::new(0.0, 0.0));

        map.write().set_view(view().with_resolution(4.0));
        assert_eq!(element.read().offset(), Point2d::new(0.0, 0.0));
    }
}
