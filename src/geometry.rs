//! Map Projection
//!
//! Fits lat/lon points into an SVG viewport. Equirectangular with a uniform
//! scale, so shapes keep their aspect ratio; north is up.

use crate::models::Coordinates;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    min_lon: f64,
    max_lat: f64,
    scale: f64,
    offset_x: f64,
    offset_y: f64,
    width: f64,
    height: f64,
}

impl Projection {
    /// Bounding box of `points` inset by `padding` on every side
    pub fn fit(points: &[Coordinates], width: f64, height: f64, padding: f64) -> Self {
        let (mut min_lat, mut max_lat) = (f64::INFINITY, f64::NEG_INFINITY);
        let (mut min_lon, mut max_lon) = (f64::INFINITY, f64::NEG_INFINITY);
        for p in points {
            min_lat = min_lat.min(p.lat);
            max_lat = max_lat.max(p.lat);
            min_lon = min_lon.min(p.lon);
            max_lon = max_lon.max(p.lon);
        }
        if points.is_empty() {
            (min_lat, max_lat, min_lon, max_lon) = (0.0, 0.0, 0.0, 0.0);
        }

        let inner_w = (width - 2.0 * padding).max(1.0);
        let inner_h = (height - 2.0 * padding).max(1.0);
        let span_lon = max_lon - min_lon;
        let span_lat = max_lat - min_lat;

        let scale = match (span_lon > f64::EPSILON, span_lat > f64::EPSILON) {
            (true, true) => (inner_w / span_lon).min(inner_h / span_lat),
            (true, false) => inner_w / span_lon,
            (false, true) => inner_h / span_lat,
            (false, false) => 1.0,
        };

        // Center the scaled box inside the viewport
        let offset_x = (width - span_lon * scale) / 2.0;
        let offset_y = (height - span_lat * scale) / 2.0;

        Self {
            min_lon,
            max_lat,
            scale,
            offset_x,
            offset_y,
            width,
            height,
        }
    }

    pub fn project(&self, c: Coordinates) -> Point {
        Point {
            x: self.offset_x + (c.lon - self.min_lon) * self.scale,
            y: self.offset_y + (self.max_lat - c.lat) * self.scale,
        }
    }

    /// `points` attribute for an SVG `<polyline>`
    pub fn polyline(&self, path: &[Coordinates]) -> String {
        path.iter()
            .map(|c| {
                let p = self.project(*c);
                format!("{:.1},{:.1}", p.x, p.y)
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn view_box(&self) -> String {
        format!("0 0 {} {}", self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(lat: f64, lon: f64) -> Coordinates {
        Coordinates { lat, lon }
    }

    #[test]
    fn test_points_land_inside_viewport() {
        let path = [c(41.88, -87.63), c(40.8, -96.7), c(39.74, -104.99)];
        let proj = Projection::fit(&path, 600.0, 400.0, 20.0);
        for point in path {
            let p = proj.project(point);
            assert!(p.x >= 20.0 - 1e-9 && p.x <= 580.0 + 1e-9, "x out of range: {}", p.x);
            assert!(p.y >= 20.0 - 1e-9 && p.y <= 380.0 + 1e-9, "y out of range: {}", p.y);
        }
    }

    #[test]
    fn test_north_is_up_and_west_is_left() {
        let proj = Projection::fit(&[c(10.0, 0.0), c(0.0, 10.0)], 100.0, 100.0, 0.0);
        let north_west = proj.project(c(10.0, 0.0));
        let south_east = proj.project(c(0.0, 10.0));
        assert!(north_west.y < south_east.y);
        assert!(north_west.x < south_east.x);
        assert_eq!(north_west, Point { x: 0.0, y: 0.0 });
        assert_eq!(south_east, Point { x: 100.0, y: 100.0 });
    }

    #[test]
    fn test_single_point_is_centered() {
        let proj = Projection::fit(&[c(5.0, 5.0)], 200.0, 100.0, 10.0);
        assert_eq!(proj.project(c(5.0, 5.0)), Point { x: 100.0, y: 50.0 });
        let empty = Projection::fit(&[], 200.0, 100.0, 10.0);
        assert_eq!(empty.project(c(0.0, 0.0)), Point { x: 100.0, y: 50.0 });
    }

    #[test]
    fn test_polyline_format() {
        let proj = Projection::fit(&[c(1.0, 0.0), c(0.0, 1.0)], 10.0, 10.0, 0.0);
        assert_eq!(proj.polyline(&[c(1.0, 0.0), c(0.0, 1.0)]), "0.0,0.0 10.0,10.0");
        assert_eq!(proj.view_box(), "0 0 10 10");
    }
}
