//! Visual elements extensions place on a host's display surface.

use std::sync::Arc;

use parking_lot::RwLock;
use vespucci_types::cartesian::Point2d;

/// Shared handle to an [`Element`].
///
/// Both the owning extension and the host pane holding the element keep a
/// handle to it. Node identity is handle identity: two handles refer to the
/// same element iff [`Arc::ptr_eq`] returns true for them.
pub type ElementRef = Arc<RwLock<Element>>;

/// A single visual node owned by an extension.
///
/// An element exists only while its extension is attached to a host surface.
/// The crate stores no appearance information: an element carries the names
/// of the style classes that external style rules key off, plus the screen
/// offset the host moves it to.
#[derive(Debug, Clone)]
pub struct Element {
    classes: Vec<String>,
    offset: Point2d,
}

impl Element {
    /// Creates a new element tagged with the given style class.
    pub fn new(class_name: impl Into<String>) -> Self {
        Self {
            classes: vec![class_name.into()],
            offset: Point2d::new(0.0, 0.0),
        }
    }

    /// Wraps the element into a shared handle.
    pub fn into_shared(self) -> ElementRef {
        Arc::new(RwLock::new(self))
    }

    /// Adds another style class to the element.
    pub fn add_class(&mut self, class_name: impl Into<String>) {
        self.classes.push(class_name.into());
    }

    /// Returns true if the element is tagged with the given style class.
    pub fn has_class(&self, class_name: &str) -> bool {
        self.classes.iter().any(|class| class == class_name)
    }

    /// Names of the style classes the element is tagged with.
    pub fn class_names(&self) -> &[String] {
        &self.classes
    }

    /// Current screen offset of the element in pixels from the top-left
    /// corner of the display surface.
    pub fn offset(&self) -> Point2d {
        self.offset
    }

    /// Moves the element to the given screen offset.
    pub fn set_offset(&mut self, offset: Point2d) {
        self.offset = offset;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classes() {
        let mut element = Element::new("first");
        element.add_class("second");

        assert!(element.has_class("first"));
        assert!(element.has_class("second"));
        assert!(!element.has_class("third"));
        assert_eq!(element.class_names(), ["first", "second"]);
    }

    #[test]
    fn identity_is_handle_identity() {
        let first = Element::new("class").into_shared();
        let second = Element::new("class").into_shared();

        assert!(Arc::ptr_eq(&first, &first.clone()));
        assert!(!Arc::ptr_eq(&first, &second));
    }
}
