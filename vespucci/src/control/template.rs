//! Skeleton control extension to copy from when authoring a new control.

use crate::control::{Control, ControlPosition};
use crate::element::{Element, ElementRef};
use crate::host::SharedHost;

/// Style class the control template tags its element with. External style
/// rules key off this name.
pub const CONTROL_TEMPLATE_CLASS: &str = "vespucci-control-template";

/// Configuration of a [`ControlTemplate`]. Unset options fall back to the
/// template's defaults on construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ControlOptions {
    /// Corner to dock the control to. Defaults to
    /// [`ControlPosition::TopRight`].
    pub position: Option<ControlPosition>,
}

/// A control that creates an empty element and does nothing else. Each
/// lifecycle method marks the place where a real control adds its behavior.
pub struct ControlTemplate {
    position: ControlPosition,
    element: Option<ElementRef>,
}

impl ControlTemplate {
    /// Creates a new control, merging the given options over the defaults.
    /// Has no side effects on any host.
    pub fn new(options: ControlOptions) -> Self {
        Self {
            position: options.position.unwrap_or_default(),
            element: None,
            // Continue initializing the control here.
        }
    }

    /// The configuration this instance resolved to.
    pub fn options(&self) -> ControlOptions {
        ControlOptions {
            position: Some(self.position),
        }
    }
}

impl Control for ControlTemplate {
    fn position(&self) -> ControlPosition {
        self.position
    }

    fn attach(&mut self, _host: &SharedHost) -> ElementRef {
        let element = Element::new(CONTROL_TEMPLATE_CLASS).into_shared();

        // Continue building the control contents here before the element is
        // handed to the host.

        log::debug!("control template attached at {:?}", self.position);
        self.element = Some(element.clone());
        element
    }

    fn detach(&mut self, _host: &SharedHost) {
        // Release resources acquired in attach (event subscriptions, timers)
        // here.

        self.element = None;
        log::debug!("control template detached");
    }

    fn element(&self) -> Option<ElementRef> {
        self.element.clone()
    }
}

/// Convenience constructor for [`ControlTemplate`].
pub fn control_template(options: ControlOptions) -> ControlTemplate {
    ControlTemplate::new(options)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use parking_lot::RwLock;

    use super::*;
    use crate::host::{self, HostSurface, TestMap};
    use crate::view::MapView;

    fn host() -> (Arc<RwLock<TestMap>>, SharedHost) {
        let map = Arc::new(RwLock::new(TestMap::new(MapView::default())));
        let shared: SharedHost = map.clone();
        (map, shared)
    }

    #[test]
    fn factory_is_equivalent_to_new() {
        let options = ControlOptions {
            position: Some(ControlPosition::BottomLeft),
        };

        assert_eq!(
            ControlTemplate::new(options).options(),
            control_template(options).options()
        );
        assert_eq!(
            ControlTemplate::new(ControlOptions::default()).options(),
            control_template(ControlOptions::default()).options()
        );
    }

    #[test]
    fn defaults_to_top_right() {
        let control = control_template(ControlOptions::default());
        assert_eq!(control.position(), ControlPosition::TopRight);
    }

    #[test]
    fn attach_returns_element_with_documented_class() {
        let (_, shared) = host();
        let mut control = control_template(ControlOptions::default());

        let element = control.attach(&shared);
        assert!(element.read().has_class(CONTROL_TEMPLATE_CLASS));
    }

    #[test]
    fn element_exists_only_while_attached() {
        let (map, shared) = host();
        let mut control = control_template(ControlOptions {
            position: Some(ControlPosition::BottomRight),
        });
        assert!(control.element().is_none());

        host::add_control(&shared, &mut control);
        let element = control.element().expect("control is attached");
        assert!(map
            .read()
            .panes()
            .control_pane(ControlPosition::BottomRight)
            .contains(&element));

        host::remove_control(&shared, &mut control);
        assert!(control.element().is_none());
        assert!(map
            .read()
            .panes()
            .control_pane(ControlPosition::BottomRight)
            .is_empty());
    }

    #[test]
    fn detach_without_attach_is_safe() {
        let (_, shared) = host();
        let mut control = control_template(ControlOptions::default());
        control.detach(&shared);
    }
}
