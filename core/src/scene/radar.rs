use serde::{Deserialize, Serialize};

use super::Point;

pub const CROSS_SIZE: f64 = 10.0;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RadarSite {
    pub center: Point,
    pub inner_radius: f64,
    pub outer_radius: f64,
    pub cone_range: f64,
    /// Full opening of the coverage cone, degrees.
    pub cone_angle: f64,
    /// Boresight of the cone, degrees counter-clockwise from +x.
    pub cone_dir: f64,
    pub label: String,
}

impl Default for RadarSite {
    fn default() -> Self {
        Self {
            center: Point::default(),
            inner_radius: 20.0,
            outer_radius: 50.0,
            cone_range: 150.0,
            cone_angle: 180.0,
            cone_dir: 0.0,
            label: "Radar".into(),
        }
    }
}

impl RadarSite {
    pub fn at(center: Point) -> Self {
        Self {
            center,
            ..Default::default()
        }
    }

    pub fn cone_bounds(&self) -> (f64, f64) {
        let half = self.cone_angle / 2.0;
        (self.cone_dir - half, self.cone_dir + half)
    }

    pub fn cross_segments(&self) -> [(Point, Point); 2] {
        let Point { x, y } = self.center;
        [
            (Point::new(x, y - CROSS_SIZE), Point::new(x, y + CROSS_SIZE)),
            (Point::new(x - CROSS_SIZE, y), Point::new(x + CROSS_SIZE, y)),
        ]
    }

    pub fn label_anchor(&self) -> Point {
        Point::new(self.center.x, self.center.y + CROSS_SIZE + 5.0)
    }

    pub fn ring(&self, radius: f64, segments: usize) -> Vec<Point> {
        let segments = segments.max(3);
        (0..=segments)
            .map(|i| sweep_endpoint(self.center, 360.0 * i as f64 / segments as f64, radius))
            .collect()
    }

    /// Polyline approximating the coverage wedge, closed through the center.
    pub fn cone_outline(&self, segments: usize) -> Vec<Point> {
        let (start, end) = self.cone_bounds();
        let segments = segments.max(1);
        let mut outline = Vec::with_capacity(segments + 3);
        outline.push(self.center);
        for i in 0..=segments {
            let angle = start + (end - start) * i as f64 / segments as f64;
            outline.push(sweep_endpoint(self.center, angle, self.cone_range));
        }
        outline.push(self.center);
        outline
    }
}

pub fn sweep_endpoint(center: Point, angle_deg: f64, length: f64) -> Point {
    let (sin, cos) = angle_deg.to_radians().sin_cos();
    Point::new(center.x + length * cos, center.y + length * sin)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RadarSweep {
    pub angle_deg: f64,
    pub step_deg: f64,
    pub length: f64,
}

impl Default for RadarSweep {
    fn default() -> Self {
        Self {
            angle_deg: 0.0,
            step_deg: 3.0,
            length: 150.0,
        }
    }
}

impl RadarSweep {
    /// Rotates by one step, keeping the angle in `[0, 360)`.
    pub fn advance(&mut self) {
        self.angle_deg = (self.angle_deg + self.step_deg).rem_euclid(360.0);
    }

    pub fn beam(&self, center: Point) -> (Point, Point) {
        (center, sweep_endpoint(center, self.angle_deg, self.length))
    }
}
