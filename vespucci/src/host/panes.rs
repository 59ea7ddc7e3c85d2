//! Host-managed containers for extension elements.

use std::sync::Arc;

use crate::control::ControlPosition;
use crate::element::ElementRef;

/// A host-managed container holding extension elements in display order.
///
/// Membership is by node identity, not by value: removing an element only
/// removes the handle pointing at the same node.
#[derive(Debug, Default)]
pub struct Pane {
    elements: Vec<ElementRef>,
}

impl Pane {
    /// Adds the element to the end of the pane.
    pub fn append(&mut self, element: ElementRef) {
        self.elements.push(element);
    }

    /// Removes the element from the pane. Returns false if the pane did not
    /// contain it.
    pub fn remove(&mut self, element: &ElementRef) -> bool {
        let initial_len = self.elements.len();
        self.elements.retain(|entry| !Arc::ptr_eq(entry, element));
        self.elements.len() != initial_len
    }

    /// Returns true if the pane contains the element.
    pub fn contains(&self, element: &ElementRef) -> bool {
        self.elements.iter().any(|entry| Arc::ptr_eq(entry, element))
    }

    /// Number of elements in the pane.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns true if the pane holds no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Iterates over the elements in display order.
    pub fn iter(&self) -> impl Iterator<Item = &ElementRef> {
        self.elements.iter()
    }
}

/// The set of panes a host's display surface is made of: one overlay pane
/// for layer elements and one pane per screen corner for control elements.
#[derive(Debug, Default)]
pub struct Panes {
    overlay: Pane,
    top_left: Pane,
    top_right: Pane,
    bottom_left: Pane,
    bottom_right: Pane,
}

impl Panes {
    /// The pane layer elements are inserted into.
    pub fn overlay_pane(&self) -> &Pane {
        &self.overlay
    }

    /// Mutable access to the overlay pane.
    pub fn overlay_pane_mut(&mut self) -> &mut Pane {
        &mut self.overlay
    }

    /// The corner pane control elements docked to `position` are inserted
    /// into.
    pub fn control_pane(&self, position: ControlPosition) -> &Pane {
        match position {
            ControlPosition::TopLeft => &self.top_left,
            ControlPosition::TopRight => &self.top_right,
            ControlPosition::BottomLeft => &self.bottom_left,
            ControlPosition::BottomRight => &self.bottom_right,
        }
    }

    /// Mutable access to the corner pane for `position`.
    pub fn control_pane_mut(&mut self, position: ControlPosition) -> &mut Pane {
        match position {
            ControlPosition::TopLeft => &mut self.top_left,
            ControlPosition::TopRight => &mut self.top_right,
            ControlPosition::BottomLeft => &mut self.bottom_left,
            ControlPosition::BottomRight => &mut self.bottom_right,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::Element;

    #[test]
    fn remove_is_by_identity() {
        let mut pane = Pane::default();
        let first = Element::new("class").into_shared();
        let twin = Element::new("class").into_shared();
        pane.append(first.clone());

        assert!(!pane.remove(&twin));
        assert_eq!(pane.len(), 1);

        assert!(pane.remove(&first));
        assert!(pane.is_empty());
        assert!(!pane.remove(&first));
    }

    #[test]
    fn contains_tracks_membership() {
        let mut pane = Pane::default();
        let element = Element::new("class").into_shared();

        assert!(!pane.contains(&element));
        pane.append(element.clone());
        assert!(pane.contains(&element));
    }

    #[test]
    fn corner_panes_are_independent() {
        let mut panes = Panes::default();
        let element = Element::new("class").into_shared();
        panes
            .control_pane_mut(ControlPosition::BottomLeft)
            .append(element.clone());

        assert!(panes.control_pane(ControlPosition::BottomLeft).contains(&element));
        assert!(panes.control_pane(ControlPosition::TopRight).is_empty());
    }
}
