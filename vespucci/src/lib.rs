//! Vespucci is a toolkit for writing extensions for interactive map hosts. An
//! extension is a piece of UI that plugs into a host's display surface: a
//! [`Control`](control::Control) docked to a fixed screen corner, or a
//! [`Layer`](layer::Layer) anchored to a geographic coordinate and
//! repositioned whenever the viewport changes.
//!
//! The crate defines the capability set a host exposes to its extensions
//! ([`HostSurface`]), the visual element and pane model the two sides share,
//! and two template extensions ([`ControlTemplate`](control::ControlTemplate)
//! and [`LayerTemplate`](layer::LayerTemplate)) that implement the full
//! lifecycle with empty bodies, ready to be copied and filled in.
//!
//! # Quick start
//!
//! ```
//! use std::sync::Arc;
//!
//! use parking_lot::RwLock;
//! use vespucci::control::{control_template, ControlOptions};
//! use vespucci::host::{self, TestMap};
//! use vespucci::layer::{layer_template, LayerOptions};
//! use vespucci::vespucci_types::cartesian::Size;
//! use vespucci::vespucci_types::latlon;
//! use vespucci::{MapView, SharedHost};
//!
//! # fn main() -> Result<(), vespucci::ExtensionError> {
//! let map = Arc::new(RwLock::new(TestMap::new(
//!     MapView::default().with_size(Size::new(512.0, 512.0)),
//! )));
//! let host: SharedHost = map.clone();
//!
//! let mut control = control_template(ControlOptions::default());
//! host::add_control(&host, &mut control);
//!
//! let mut layer = layer_template(LayerOptions {
//!     position: Some(latlon!(37.566, 126.9784)),
//! })?;
//! host::add_layer(&host, &mut layer);
//!
//! host::remove_layer(&host, &mut layer);
//! host::remove_control(&host, &mut control);
//! # Ok(())
//! # }
//! ```
//!
//! [`TestMap`](host::TestMap) is the in-memory host double shipped with the
//! crate; a real application instead implements [`HostSurface`] for its own
//! map object and hands extensions an `Arc<RwLock<...>>` handle to it.
//!
//! # Lifecycle
//!
//! Both extension kinds go through the same host-enforced lifecycle:
//!
//! 1. The extension is constructed from an options struct. This has no side
//!    effects on the host; a layer that cannot work without a required option
//!    fails here with [`ExtensionError::MissingOption`].
//! 2. The host attaches the extension exactly once. The extension creates its
//!    visual element and acquires whatever host resources it needs (event
//!    subscriptions in particular).
//! 3. The host detaches the extension exactly once. The extension destroys
//!    its element and releases every resource acquired in attach.
//!
//! The element exists if and only if the extension is attached. What the
//! element looks like is not this crate's business: appearance comes from
//! external style rules keyed to the element's class names.

pub mod control;
pub mod element;
pub mod error;
pub mod host;
pub mod layer;
mod view;

pub use element::{Element, ElementRef};
pub use error::ExtensionError;
pub use host::{HostSurface, MapEvent, SharedHost, Subscription, WeakHost};
pub use view::MapView;

// Reexport vespucci_types
pub use vespucci_types;
