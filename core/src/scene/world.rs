use rand::Rng;
use serde::{Deserialize, Serialize};

use super::missile::heading_towards;
use super::{random_target_spawn, MissileMarker, Point, RadarSite, RadarSweep};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            x_min: -300.0,
            x_max: 300.0,
            y_min: -200.0,
            y_max: 200.0,
        }
    }
}

impl Bounds {
    pub fn contains(&self, point: Point) -> bool {
        (self.x_min..=self.x_max).contains(&point.x)
            && (self.y_min..=self.y_max).contains(&point.y)
    }

    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }
}

/// Radar site, its sweep and the interceptor/target pair.
///
/// Markers fly straight lines fixed at (re)spawn; there is no guidance.
#[derive(Debug, Clone)]
pub struct Scene {
    pub bounds: Bounds,
    pub radar: RadarSite,
    pub sweep: RadarSweep,
    pub interceptor: MissileMarker,
    pub target: MissileMarker,
    pub interceptor_speed: f64,
    pub target_speed: f64,
}

impl Scene {
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let radar = RadarSite {
            center: Point::new(150.0, 0.0),
            cone_dir: 180.0,
            ..Default::default()
        };
        let mut scene = Self {
            bounds: Bounds::default(),
            interceptor: MissileMarker::new(radar.center, 0.0, "Interceptor"),
            target: MissileMarker::new(Point::default(), 0.0, "Target"),
            radar,
            sweep: RadarSweep::default(),
            interceptor_speed: 4.0,
            target_speed: 2.5,
        };
        scene.respawn_target(rng);
        scene
    }

    pub fn tick<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.sweep.advance();
        self.target.advance(self.target_speed);
        self.interceptor.advance(self.interceptor_speed);

        if !self.bounds.contains(self.target.position) {
            self.respawn_target(rng);
        } else if !self.bounds.contains(self.interceptor.position) {
            self.relaunch_interceptor();
        }
    }

    pub fn respawn_target<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let (position, _) = random_target_spawn(rng);
        let heading = heading_towards(position, self.radar.center);
        self.target.update(position.x, position.y, heading);
        self.relaunch_interceptor();
    }

    fn relaunch_interceptor(&mut self) {
        let origin = self.radar.center;
        let heading = heading_towards(origin, self.target.position);
        self.interceptor.update(origin.x, origin.y, heading);
    }
}
