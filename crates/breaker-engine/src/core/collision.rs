//! Movement integration and tile collision for gravity-bound entities.
//!
//! One call to [`resolve`] is one tick: velocities are integrated from the held
//! input, the tentative box is tested against nearby collidable cells using edge
//! sample points, and each axis snaps independently against the same tentative box.

use glam::IVec2;

use crate::components::motion::{MotionState, Tuning};
use crate::core::grid::{Cell, Grid};
use crate::core::rect::Rect;
use crate::input::controller::InputIntent;

/// Horizontal speed below which friction stops the entity outright.
pub const MIN_DRIFT_SPEED: f32 = 0.1;

/// Distance of the outer top/bottom sample points from the box corners.
pub const SAMPLE_INSET: i32 = 5;

/// Outcome of one resolved tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolution {
    pub motion: MotionState,
    /// The resolved position differs from the starting one.
    pub moved: bool,
}

/// Advance `state` by one tick against `grid`.
pub fn resolve(state: &MotionState, tuning: &Tuning, intent: InputIntent, grid: &Grid) -> Resolution {
    let mut next = *state;

    integrate_horizontal(&mut next, tuning, intent);
    apply_jump(&mut next, tuning, intent);
    next.vel.y = (next.vel.y + tuning.gravity).min(tuning.terminal_fall);

    let target = next.pos + next.vel;
    let next_box = next.hitbox_at(target);
    let sweep = state.hitbox().union(&next_box);
    let candidates = grid.collidable_in(grid.cell_range(&sweep));
    let samples = EdgeSamples::around(&next_box);

    let mut resolved = target;
    let mut landed = false;

    for cell in &candidates {
        let bounds = grid.cell_bounds(cell.column, cell.row);
        if !next_box.intersects(&bounds) {
            continue;
        }

        if next.vel.x > 0.0
            && samples.right.iter().any(|p| bounds.contains(*p))
            && !occupied(&candidates, cell.column - 1, cell.row)
        {
            resolved.x = bounds.x() as f32 - half_floor(next_box.width());
            next.vel.x = 0.0;
        }
        if next.vel.x < 0.0
            && samples.left.iter().any(|p| bounds.contains(*p))
            && !occupied(&candidates, cell.column + 1, cell.row)
        {
            resolved.x = bounds.right() as f32 + half_floor(next_box.width());
            next.vel.x = 0.0;
        }

        if next.vel.y > 0.0
            && samples.bottom.iter().any(|p| bounds.contains(*p))
            && !occupied(&candidates, cell.column, cell.row - 1)
        {
            // Sink one unit into the floor so the bottom samples keep touching it.
            resolved.y = bounds.y() as f32 + 1.0 - next_box.height() as f32 / 2.0;
            next.vel.y = 0.0;
            next.jumps_remaining = tuning.max_jumps;
            landed = true;
        }
        if next.vel.y < 0.0
            && samples.top.iter().any(|p| bounds.contains(*p))
            && !occupied(&candidates, cell.column, cell.row + 1)
        {
            resolved.y = bounds.bottom() as f32 + half_floor(next_box.height());
            next.vel.y = 0.0;
        }
    }

    next.grounded = landed;
    next.pos = resolved;
    debug_assert!(next.jumps_remaining <= tuning.max_jumps.max(state.jumps_remaining));

    Resolution {
        moved: next.pos != state.pos,
        motion: next,
    }
}

fn integrate_horizontal(next: &mut MotionState, tuning: &Tuning, intent: InputIntent) {
    if intent.left != intent.right {
        let mut accel = if intent.left { -1.0 } else { 1.0 };
        // Starting from rest counts as turning: the sign of zero matches neither direction.
        next.turning = sign(accel) != sign(next.vel.x);
        if next.turning {
            accel *= tuning.reverse_multiplier;
        }
        next.frictioned = false;
        next.vel.x += tuning.accel_x * accel;

        let cap = if next.grounded { tuning.run_cap } else { tuning.drift_cap };
        if next.vel.x.abs() > cap {
            next.vel.x = cap * sign(next.vel.x) as f32;
        }
    } else {
        next.turning = false;
        next.frictioned = true;
        next.vel.x *= tuning.friction;
        if next.vel.x.abs() < MIN_DRIFT_SPEED {
            next.vel.x = 0.0;
        }
    }
}

fn apply_jump(next: &mut MotionState, tuning: &Tuning, intent: InputIntent) {
    if intent.up && !next.jumped && next.jumps_remaining > 0 {
        next.jumped = true;
        next.grounded = false;
        next.vel.y = -tuning.jump_impulse;
        next.jumps_remaining -= 1;
    }
    if !intent.up {
        next.jumped = false;
    }
}

/// Sign as -1, 0 or 1. Unlike `f32::signum`, zero maps to zero.
fn sign(v: f32) -> i32 {
    if v > 0.0 {
        1
    } else if v < 0.0 {
        -1
    } else {
        0
    }
}

fn half_floor(extent: i32) -> f32 {
    (extent as f32 / 2.0).floor()
}

fn occupied(candidates: &[Cell], column: i32, row: i32) -> bool {
    candidates.iter().any(|c| c.column == column && c.row == row)
}

/// Sample points along each edge of a box.
#[derive(Debug, Clone, Copy, PartialEq)]
struct EdgeSamples {
    top: [IVec2; 4],
    bottom: [IVec2; 4],
    left: [IVec2; 3],
    right: [IVec2; 3],
}

impl EdgeSamples {
    fn around(r: &Rect) -> Self {
        let center = r.center();
        let quarter_w = r.width() as f32 / 4.0;
        let quarter_h = r.height() as f32 / 4.0;
        let inner_left = (center.x - quarter_w) as i32;
        let inner_right = (center.x + quarter_w) as i32;
        let upper = (center.y - quarter_h) as i32;
        let lower = (center.y + quarter_h) as i32;
        let mid = center.y as i32;

        let horizontal = |y: i32| {
            [
                IVec2::new(r.x() + SAMPLE_INSET, y),
                IVec2::new(r.right() - SAMPLE_INSET, y),
                IVec2::new(inner_left, y),
                IVec2::new(inner_right, y),
            ]
        };
        let vertical = |x: i32| [IVec2::new(x, mid), IVec2::new(x, upper), IVec2::new(x, lower)];

        Self {
            top: horizontal(r.y()),
            bottom: horizontal(r.bottom()),
            left: vertical(r.x()),
            right: vertical(r.right()),
        }
    }
}
