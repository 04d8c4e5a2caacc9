use serde::{Deserialize, Serialize};

use super::Point;

pub const DEFAULT_LENGTH: f64 = 12.0;
pub const DEFAULT_WIDTH: f64 = 12.0;

const LABEL_OFFSET: Point = Point::new(-5.0, -20.0);

/// Triangle outline of a missile with its tip at `(x, y)`.
///
/// The unrotated body hangs below the tip; `angle_deg` turns it clockwise.
pub fn missile_triangle(x: f64, y: f64, angle_deg: f64, length: f64, width: f64) -> [Point; 3] {
    let base = [
        Point::new(0.0, 0.0),
        Point::new(-width / 2.0, -length),
        Point::new(width / 2.0, -length),
    ];
    let (sin, cos) = angle_deg.to_radians().sin_cos();
    // Row vector times the counter-clockwise rotation matrix.
    base.map(|p| Point::new(p.x * cos + p.y * sin + x, -p.x * sin + p.y * cos + y))
}

pub fn heading_vector(angle_deg: f64) -> Point {
    let (sin, cos) = angle_deg.to_radians().sin_cos();
    Point::new(sin, cos)
}

pub fn heading_towards(from: Point, to: Point) -> f64 {
    (to.x - from.x).atan2(to.y - from.y).to_degrees()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MissileMarker {
    pub position: Point,
    pub heading_deg: f64,
    pub label: String,
}

impl MissileMarker {
    pub fn new(position: Point, heading_deg: f64, label: impl Into<String>) -> Self {
        Self {
            position,
            heading_deg,
            label: label.into(),
        }
    }

    pub fn update(&mut self, x: f64, y: f64, heading_deg: f64) {
        self.position = Point::new(x, y);
        self.heading_deg = heading_deg;
    }

    pub fn advance(&mut self, distance: f64) {
        let direction = heading_vector(self.heading_deg);
        self.position.x += direction.x * distance;
        self.position.y += direction.y * distance;
    }

    pub fn outline(&self) -> [Point; 3] {
        missile_triangle(
            self.position.x,
            self.position.y,
            self.heading_deg,
            DEFAULT_LENGTH,
            DEFAULT_WIDTH,
        )
    }

    pub fn label_anchor(&self) -> Point {
        Point::new(
            self.position.x + LABEL_OFFSET.x,
            self.position.y + LABEL_OFFSET.y,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: Point, expected: Point) {
        assert!(
            actual.distance(expected) < 1e-9,
            "{:?} != {:?}",
            actual,
            expected
        );
    }

    #[test]
    fn unrotated_triangle_is_translated() {
        let tri = missile_triangle(10.0, 5.0, 0.0, 12.0, 12.0);
        assert_close(tri[0], Point::new(10.0, 5.0));
        assert_close(tri[1], Point::new(4.0, -7.0));
        assert_close(tri[2], Point::new(16.0, -7.0));
    }

    #[test]
    fn quarter_turn_rotates_clockwise() {
        let tri = missile_triangle(0.0, 0.0, 90.0, 12.0, 12.0);
        // Body ends up to the left of the tip, so the tip points along +x.
        assert_close(tri[1], Point::new(-12.0, 6.0));
        assert_close(tri[2], Point::new(-12.0, -6.0));
    }

    #[test]
    fn advance_follows_the_tip() {
        let mut marker = MissileMarker::new(Point::new(0.0, 0.0), 90.0, "Interceptor");
        marker.advance(3.0);
        assert_close(marker.position, Point::new(3.0, 0.0));
        assert_close(marker.label_anchor(), Point::new(-2.0, -20.0));
    }

    #[test]
    fn heading_towards_points_at_target() {
        let heading = heading_towards(Point::new(0.0, 0.0), Point::new(-5.0, 0.0));
        assert!((heading + 90.0).abs() < 1e-9);
        assert_close(heading_vector(heading), Point::new(-1.0, 0.0));
    }
}
