use crate::config::MotionSpec;
use schema::{Actor, Transformation};
use std::collections::VecDeque;

/// Accumulated sprite displacement, relative to the sprite's resting position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteTransform {
    pub x: f32,
    pub y: f32,
    pub rotation: f32,
    pub scale_x: f32,
    pub scale_y: f32,
}

impl Default for SpriteTransform {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            rotation: 0.0,
            scale_x: 1.0,
            scale_y: 1.0,
        }
    }
}

impl SpriteTransform {
    pub fn offset(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            ..Self::default()
        }
    }

    pub fn apply(&mut self, step: Transformation) {
        match step {
            Transformation::Move { dx, dy } => {
                self.x += dx;
                self.y += dy;
            }
            Transformation::Rotate { degrees } => {
                self.rotation = (self.rotation + degrees) % 360.0;
            }
            Transformation::Scale { x, y } => {
                self.scale_x *= x;
                self.scale_y *= y;
            }
            Transformation::Wait => {}
        }
    }

    pub fn is_at_rest(&self) -> bool {
        *self == Self::default()
    }
}

/// Pending animation steps of one side's sprite.
#[derive(Debug, Clone, Default)]
pub struct AnimationQueue {
    steps: VecDeque<Transformation>,
}

impl AnimationQueue {
    pub fn extend(&mut self, steps: impl IntoIterator<Item = Transformation>) {
        self.steps.extend(steps);
    }

    pub fn pop(&mut self) -> Option<Transformation> {
        self.steps.pop_front()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

/// Health-bar interpolation toward a target value at a fixed speed per frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HpTween {
    target: i32,
    speed: i32,
}

impl HpTween {
    /// Speed is chosen so a full bar takes `frames` frames, but never less than 1 HP per frame.
    pub fn new(target: i32, max_hp: i32, frames: u32) -> Self {
        let full_bar = max_hp.max(0).unsigned_abs();
        let speed = full_bar.div_ceil(frames.max(1)).max(1) as i32;
        Self {
            target: target.max(0),
            speed,
        }
    }

    pub fn target(&self) -> i32 {
        self.target
    }

    /// Moves `current` one frame toward the target without overshooting.
    pub fn step(&self, current: i32) -> i32 {
        if current < self.target {
            current.saturating_add(self.speed).min(self.target)
        } else {
            current.saturating_sub(self.speed).max(self.target)
        }
    }

    pub fn is_done(&self, current: i32) -> bool {
        current == self.target
    }
}

/// Screen direction in which `actor` faces its opponent. The attacker sits bottom-left.
fn facing(actor: Actor) -> (f32, f32) {
    match actor {
        Actor::Attacker => (1.0, -1.0),
        Actor::Defender => (-1.0, 1.0),
    }
}

/// A lunge toward the opponent and back, ending at the starting position.
pub fn lunge(actor: Actor, spec: &MotionSpec) -> Vec<Transformation> {
    let half = (spec.frames / 2).max(1);
    let (fx, fy) = facing(actor);
    let step = spec.distance / half as f32;
    let forward = Transformation::Move {
        dx: fx * step,
        dy: fy * step * 0.5,
    };
    let back = Transformation::Move {
        dx: -fx * step,
        dy: -fy * step * 0.5,
    };
    std::iter::repeat(forward)
        .take(half as usize)
        .chain(std::iter::repeat(back).take(half as usize))
        .collect()
}

/// Offscreen position a freshly sent-out unit slides in from.
pub fn slide_in_origin(actor: Actor, spec: &MotionSpec) -> SpriteTransform {
    let (fx, _) = facing(actor);
    SpriteTransform::offset(-fx * spec.distance, 0.0)
}

/// Steps taking a sprite from rest to `slide_in_origin` as its unit is recalled.
pub fn slide_out(actor: Actor, spec: &MotionSpec) -> Vec<Transformation> {
    let (fx, _) = facing(actor);
    let step = Transformation::Move {
        dx: -fx * spec.distance / spec.frames as f32,
        dy: 0.0,
    };
    vec![step; spec.frames as usize]
}

/// Steps bringing a sprite from `slide_in_origin` back to rest.
pub fn slide_in(actor: Actor, spec: &MotionSpec) -> Vec<Transformation> {
    let (fx, _) = facing(actor);
    let step = Transformation::Move {
        dx: fx * spec.distance / spec.frames as f32,
        dy: 0.0,
    };
    vec![step; spec.frames as usize]
}

/// The sprite sinks out of its box.
pub fn faint_drop(spec: &MotionSpec) -> Vec<Transformation> {
    let step = Transformation::Move {
        dx: 0.0,
        dy: spec.distance / spec.frames as f32,
    };
    vec![step; spec.frames as usize]
}
