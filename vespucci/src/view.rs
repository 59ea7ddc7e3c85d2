use nalgebra::{Matrix3, Scale2, Translation2};
use vespucci_types::cartesian::{CartesianPoint2d, Point2d, Size};
use vespucci_types::geo::{GeoPoint, GeoPoint2d, Projection, WebMercator};

/// Viewport state of a host surface: the projected coordinates of the screen
/// center, the resolution (projection units per pixel) and the screen size.
///
/// The view also provides the host's coordinate protocol: converting between
/// projected map coordinates, geographic coordinates and screen pixels.
/// Screen coordinates are given in pixels from the top-left corner of the
/// display surface, with the Y axis pointing down.
#[derive(Debug, Clone, Copy)]
pub struct MapView {
    position: Point2d,
    resolution: f64,
    size: Size,
}

impl Default for MapView {
    fn default() -> Self {
        Self {
            position: Point2d::new(0.0, 0.0),
            resolution: 1.0,
            size: Size::new(0.0, 0.0),
        }
    }
}

impl MapView {
    /// Creates a new view centered at the given projected position.
    pub fn new(position: impl CartesianPoint2d<Num = f64>, resolution: f64) -> Self {
        Self {
            position: Point2d::new(position.x(), position.y()),
            resolution,
            ..Default::default()
        }
    }

    /// Projected coordinates of the center of the view.
    pub fn position(&self) -> Point2d {
        self.position
    }

    /// Returns a copy of the view with the center moved to the given position.
    pub fn with_position(&self, position: Point2d) -> Self {
        Self { position, ..*self }
    }

    /// Resolution of the view in projection units per pixel.
    pub fn resolution(&self) -> f64 {
        self.resolution
    }

    /// Returns a copy of the view with the given resolution.
    pub fn with_resolution(&self, resolution: f64) -> Self {
        Self {
            resolution,
            ..*self
        }
    }

    /// Size of the display surface in pixels.
    pub fn size(&self) -> Size {
        self.size
    }

    /// Returns a copy of the view with the given display surface size.
    pub fn with_size(&self, new_size: Size) -> Self {
        Self {
            size: new_size,
            ..*self
        }
    }

    fn map_to_screen_transform(&self) -> Matrix3<f64> {
        let translate = Translation2::new(-self.position.x, -self.position.y).to_homogeneous();
        let scale = Scale2::new(1.0 / self.resolution, -1.0 / self.resolution).to_homogeneous();
        let center =
            Translation2::new(self.size.half_width(), self.size.half_height()).to_homogeneous();
        center * scale * translate
    }

    fn screen_to_map_transform(&self) -> Matrix3<f64> {
        let uncenter =
            Translation2::new(-self.size.half_width(), -self.size.half_height()).to_homogeneous();
        let scale = Scale2::new(self.resolution, -self.resolution).to_homogeneous();
        let translate = Translation2::new(self.position.x, self.position.y).to_homogeneous();
        translate * scale * uncenter
    }

    /// Converts projected map coordinates into screen pixel coordinates under
    /// this view.
    pub fn map_to_screen(&self, map_position: Point2d) -> Point2d {
        self.map_to_screen_transform().transform_point(&map_position)
    }

    /// Converts screen pixel coordinates into projected map coordinates under
    /// this view.
    pub fn screen_to_map(&self, px_position: Point2d) -> Point2d {
        self.screen_to_map_transform().transform_point(&px_position)
    }

    /// Converts a geographic position into screen pixel coordinates under
    /// this view.
    ///
    /// Returns `None` if the position cannot be projected.
    pub fn geo_to_screen(&self, position: &impl GeoPoint<Num = f64>) -> Option<Point2d> {
        let projection: WebMercator<GeoPoint2d, Point2d> = WebMercator::default();
        let projected = projection.project(&GeoPoint2d::from(position))?;
        Some(self.map_to_screen(projected))
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use vespucci_types::latlon;

    use super::*;

    #[test]
    fn map_to_screen_centers_origin() {
        let view = MapView::default().with_size(Size::new(100.0, 100.0));

        assert_abs_diff_eq!(
            view.map_to_screen(Point2d::new(0.0, 0.0)),
            Point2d::new(50.0, 50.0),
            epsilon = 0.0001,
        );
        assert_abs_diff_eq!(
            view.map_to_screen(Point2d::new(10.0, 10.0)),
            Point2d::new(60.0, 40.0),
            epsilon = 0.0001,
        );
    }

    #[test]
    fn map_to_screen_resolution() {
        let view = MapView::default()
            .with_size(Size::new(100.0, 100.0))
            .with_resolution(2.0);

        assert_abs_diff_eq!(
            view.map_to_screen(Point2d::new(10.0, 10.0)),
            Point2d::new(55.0, 45.0),
            epsilon = 0.0001,
        );
    }

    #[test]
    fn map_to_screen_position() {
        let view = MapView::new(Point2d::new(-100.0, -100.0), 1.0).with_size(Size::new(100.0, 100.0));

        assert_abs_diff_eq!(
            view.map_to_screen(Point2d::new(-100.0, -100.0)),
            Point2d::new(50.0, 50.0),
            epsilon = 0.0001,
        );
        assert_abs_diff_eq!(
            view.map_to_screen(Point2d::new(-150.0, -50.0)),
            Point2d::new(0.0, 0.0),
            epsilon = 0.0001,
        );
    }

    #[test]
    fn screen_to_map_inverts_map_to_screen() {
        let view = MapView::new(Point2d::new(1000.0, -500.0), 16.0).with_size(Size::new(800.0, 600.0));

        let map_position = Point2d::new(2048.0, -123.0);
        let screen = view.map_to_screen(map_position);

        assert_abs_diff_eq!(view.screen_to_map(screen), map_position, epsilon = 0.0001);
    }

    #[test]
    fn geo_to_screen_equator_origin() {
        let view = MapView::default().with_size(Size::new(512.0, 512.0));

        assert_abs_diff_eq!(
            view.geo_to_screen(&latlon!(0.0, 0.0))
                .expect("point is projectable"),
            Point2d::new(256.0, 256.0),
            epsilon = 0.0001,
        );
    }

    #[test]
    fn geo_to_screen_unprojectable() {
        let view = MapView::default().with_size(Size::new(512.0, 512.0));
        assert!(view.geo_to_screen(&latlon!(180.0, 0.0)).is_none());
    }
}
