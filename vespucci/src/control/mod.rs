//! Controls are UI widgets docked to a fixed corner of the host's display
//! surface: zoom buttons, scale bars, attribution labels and the like.
//!
//! A control does not touch the display tree itself. Its [`Control::attach`]
//! creates and returns the widget's element; the host inserts the element
//! into the corner pane matching [`Control::position`] (see
//! [`add_control`](crate::host::add_control)) and removes it again before
//! [`Control::detach`] runs.
//!
//! [`ControlTemplate`] is a skeleton implementation to start a new control
//! from.

use maybe_sync::{MaybeSend, MaybeSync};

use crate::element::ElementRef;
use crate::host::SharedHost;

mod template;

pub use template::{control_template, ControlOptions, ControlTemplate, CONTROL_TEMPLATE_CLASS};

/// Fixed screen corner a control is docked to.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ControlPosition {
    /// Top-left corner of the display surface.
    TopLeft,
    /// Top-right corner of the display surface.
    #[default]
    TopRight,
    /// Bottom-left corner of the display surface.
    BottomLeft,
    /// Bottom-right corner of the display surface.
    BottomRight,
}

/// A UI widget attached to a fixed screen position on a host's display
/// surface.
///
/// The host drives the lifecycle: it calls [`Control::attach`] exactly once
/// when the control is added and [`Control::detach`] exactly once when it is
/// removed. Attaching an already attached control without detaching it first
/// is a host-contract violation with unspecified behavior.
pub trait Control: MaybeSend + MaybeSync {
    /// The corner this control is docked to.
    fn position(&self) -> ControlPosition {
        ControlPosition::default()
    }

    /// Called when the host adds the control. Creates and returns the
    /// control's element; the host inserts it into the display tree. The
    /// control must not mutate host state beyond the element's own contents.
    fn attach(&mut self, host: &SharedHost) -> ElementRef;

    /// Called when the host removes the control, after its element has been
    /// taken out of the display tree. Releases every resource acquired in
    /// attach; must not panic if none were acquired.
    fn detach(&mut self, host: &SharedHost);

    /// The element created by attach, while the control is attached.
    fn element(&self) -> Option<ElementRef>;
}
