//! Cosmetic 2-D geometry for the radar intercept scene.
//!
//! Everything here is plain coordinates in a y-up plane; renderers map them
//! onto their own canvas.

pub mod missile;
pub mod radar;
pub mod spawn;
pub mod world;

use serde::{Deserialize, Serialize};

pub use missile::{missile_triangle, MissileMarker};
pub use radar::{sweep_endpoint, RadarSite, RadarSweep};
pub use spawn::{random_target_spawn, SpawnEdge};
pub use world::{Bounds, Scene};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}
