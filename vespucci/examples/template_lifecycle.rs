//! Runs both template extensions against a minimal custom host, printing the
//! overlay element's screen offset as the viewport changes.
//!
//! The `App` struct below shows everything a real application has to provide
//! to use the toolkit: an object holding the viewport and the panes, with an
//! event table behind the [`HostSurface`] subscription protocol.

use std::sync::Arc;

use parking_lot::RwLock;
use vespucci::control::{control_template, ControlOptions};
use vespucci::host::{self, HostSurface, MapEvent, Panes, Subscription, ViewHandler};
use vespucci::layer::{layer_template, LayerOptions};
use vespucci::vespucci_types::cartesian::{Point2d, Size};
use vespucci::vespucci_types::latlon;
use vespucci::{ExtensionError, MapView, SharedHost};

struct App {
    view: MapView,
    panes: Panes,
    handlers: Vec<(MapEvent, u64, Box<dyn ViewHandler>)>,
    next_id: u64,
}

impl App {
    fn new(view: MapView) -> Self {
        Self {
            view,
            panes: Panes::default(),
            handlers: Vec::new(),
            next_id: 0,
        }
    }

    fn set_view(&mut self, view: MapView) {
        self.view = view;
        for (event, _, handler) in &self.handlers {
            if *event == MapEvent::ViewReset {
                handler(&self.view);
            }
        }
    }
}

impl HostSurface for App {
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
        self.handlers.push((event, id, handler));
        Subscription::new(event, id)
    }

    fn off(&mut self, subscription: Subscription) {
        self.handlers
            .retain(|(event, id, _)| *event != subscription.event() || *id != subscription.id());
    }
}

fn main() -> Result<(), ExtensionError> {
    env_logger::init();

    let view = MapView::new(Point2d::new(0.0, 0.0), 10_000.0).with_size(Size::new(800.0, 600.0));
    let app = Arc::new(RwLock::new(App::new(view)));
    let host: SharedHost = app.clone();

    let mut control = control_template(ControlOptions::default());
    host::add_control(&host, &mut control);

    let anchor = latlon!(10.0, 20.0);
    let mut layer = layer_template(LayerOptions {
        position: Some(anchor),
    })?;
    host::add_layer(&host, &mut layer);

    let element = layer.element().expect("layer is attached");
    let offset = element.read().offset();
    println!("initial offset: ({:.1}, {:.1})", offset.x, offset.y);

    for zoom in 1..=3 {
        let resolution = 10_000.0 / (1 << zoom) as f64;
        app.write().set_view(view.with_resolution(resolution));
        let offset = element.read().offset();
        println!("offset at {resolution} units/px: ({:.1}, {:.1})", offset.x, offset.y);
    }

    host::remove_layer(&host, &mut layer);
    host::remove_control(&host, &mut control);

    Ok(())
}
