use rand::Rng;
use serde::{Deserialize, Serialize};

use super::Point;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpawnEdge {
    Bottom,
    Left,
    Top,
}

const EDGE_Y: f64 = 170.0;
const LEFT_X: f64 = -100.0;
const SPAWN_X_MIN: f64 = -250.0;
const SPAWN_X_MAX: f64 = -100.0;

pub fn random_target_spawn<R: Rng + ?Sized>(rng: &mut R) -> (Point, SpawnEdge) {
    let edge = match rng.gen_range(0..3) {
        0 => SpawnEdge::Bottom,
        1 => SpawnEdge::Left,
        _ => SpawnEdge::Top,
    };
    let position = match edge {
        SpawnEdge::Bottom => Point::new(rng.gen_range(SPAWN_X_MIN..SPAWN_X_MAX), -EDGE_Y),
        SpawnEdge::Left => Point::new(LEFT_X, rng.gen_range(-EDGE_Y..EDGE_Y)),
        SpawnEdge::Top => Point::new(rng.gen_range(SPAWN_X_MIN..SPAWN_X_MAX), EDGE_Y),
    };
    (position, edge)
}
