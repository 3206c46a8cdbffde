//! Interpolation of slot positions and radii towards the latest [`Frame`].

use crate::dot::{DotType, Point, SlotId};
use crate::frame::{DotTarget, Frame, Motion};
use std::time::Duration;

pub const DEFAULT_DURATION: Duration = Duration::from_millis(200);

#[derive(Debug, Clone, Copy, PartialEq)]
struct Tween {
    from_x: f64,
    to_x: f64,
    from_radius: f64,
    to_radius: f64,
    elapsed: Duration,
}

impl Tween {
    fn value(&self, duration: Duration) -> (f64, f64) {
        let t = if duration.is_zero() {
            1.0
        } else {
            (self.elapsed.as_secs_f64() / duration.as_secs_f64()).min(1.0)
        };
        (
            self.from_x + (self.to_x - self.from_x) * t,
            self.from_radius + (self.to_radius - self.from_radius) * t,
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
struct AnimatedDot {
    id: SlotId,
    center: Point,
    radius: f64,
    dot_type: DotType,
    tween: Option<Tween>,
}

impl AnimatedDot {
    fn at(target: &DotTarget) -> Self {
        Self {
            id: target.id,
            center: target.center,
            radius: target.radius,
            dot_type: target.dot_type,
            tween: None,
        }
    }

    /// Starts over from wherever the dot is right now; a tween that is still
    /// running is dropped.
    fn slide_to(&mut self, target: &DotTarget) {
        self.center.y = target.center.y;
        self.dot_type = target.dot_type;
        self.tween = Some(Tween {
            from_x: self.center.x,
            to_x: target.center.x,
            from_radius: self.radius,
            to_radius: target.radius,
            elapsed: Duration::ZERO,
        });
    }

    /// Takes the target radius at once. The position keeps following a
    /// running slide, retargeted to `target`.
    fn snap_to(&mut self, target: &DotTarget) {
        self.dot_type = target.dot_type;
        self.radius = target.radius;
        self.center.y = target.center.y;
        match self.tween.as_mut() {
            Some(tween) => {
                tween.to_x = target.center.x;
                tween.from_radius = target.radius;
                tween.to_radius = target.radius;
            }
            None => self.center.x = target.center.x,
        }
    }
}

/// What a renderer paints for one dot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderDot {
    pub center: Point,
    pub radius: f64,
    pub selected: bool,
}

/// Tracks the on-screen position and radius of each slot and eases them
/// towards the targets of the frames it is given.
#[derive(Debug, Clone)]
pub struct AnimationDriver {
    duration: Duration,
    // indexed by slot id
    dots: Vec<AnimatedDot>,
}

impl Default for AnimationDriver {
    fn default() -> Self {
        Self::new(DEFAULT_DURATION)
    }
}

impl AnimationDriver {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            dots: Vec::new(),
        }
    }

    pub fn apply(&mut self, frame: &Frame) {
        if !self.tracks(frame) {
            self.reset(frame);
            return;
        }

        if let Some(recycled) = frame.recycled
            && let Some(dot) = self.dots.get_mut(usize::from(recycled.id))
        {
            dot.tween = None;
            dot.center = recycled.from;
        }

        for target in &frame.targets {
            let dot = &mut self.dots[usize::from(target.id)];
            match frame.motion {
                Motion::Snap => dot.snap_to(target),
                Motion::Slide(_) => dot.slide_to(target),
            }
        }
    }

    /// Places every dot on its target without animating.
    pub fn reset(&mut self, frame: &Frame) {
        let mut dots: Vec<AnimatedDot> = frame.targets.iter().map(AnimatedDot::at).collect();
        dots.sort_by_key(|d| d.id);
        self.dots = dots;
    }

    fn tracks(&self, frame: &Frame) -> bool {
        frame.targets.len() == self.dots.len()
            && frame
                .targets
                .iter()
                .all(|t| self.dots.get(usize::from(t.id)).is_some_and(|d| d.id == t.id))
    }

    /// Moves every running tween `elapsed` further. Returns whether any is
    /// still running afterwards.
    pub fn advance(&mut self, elapsed: Duration) -> bool {
        let duration = self.duration;
        for dot in &mut self.dots {
            let Some(tween) = dot.tween.as_mut() else {
                continue;
            };
            tween.elapsed += elapsed;
            if tween.elapsed >= duration {
                dot.center.x = tween.to_x;
                dot.radius = tween.to_radius;
                dot.tween = None;
            } else {
                let (x, radius) = tween.value(duration);
                dot.center.x = x;
                dot.radius = radius;
            }
        }
        self.is_animating()
    }

    pub fn is_animating(&self) -> bool {
        self.dots.iter().any(|d| d.tween.is_some())
    }

    /// Dots worth painting; placeholders and fully shrunk dots are skipped.
    pub fn dots(&self) -> impl Iterator<Item = RenderDot> + '_ {
        self.dots
            .iter()
            .filter(|d| d.radius > 0.0)
            .map(|d| RenderDot {
                center: d.center,
                radius: d.radius,
                selected: d.dot_type == DotType::Selected,
            })
    }
}
