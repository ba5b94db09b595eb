use crate::object::{ObjectId, ObjectPool};
use crate::sprites::END;

/// Plays a looping frame sequence onto one object.
///
/// Each frame is held for `rate` ticks. A player that is not updated keeps
/// its cursor and countdown, so switching back to it resumes mid-cycle.
#[derive(Clone, Debug)]
pub struct Animation {
    frames: &'static [u16],
    rate: u16,
    cursor: usize,
    countdown: u16,
    target: Option<ObjectId>,
}

impl Animation {
    pub const fn new(frames: &'static [u16], rate: u16) -> Self {
        Self {
            frames,
            rate,
            cursor: 0,
            countdown: 0,
            target: None,
        }
    }

    pub fn set_target(&mut self, target: ObjectId) {
        self.target = Some(target);
    }

    pub fn target(&self) -> Option<ObjectId> {
        self.target
    }

    /// Rewinds to the first frame; the next `update` writes it immediately.
    pub fn reset(&mut self) {
        self.cursor = 0;
        self.countdown = 0;
    }

    pub fn update(&mut self, objects: &mut ObjectPool) {
        if self.countdown > 0 {
            self.countdown -= 1;
            return;
        }

        debug_assert!(self.target.is_some(), "animation updated before a target was set");
        debug_assert!(
            self.frames.first().map_or(false, |&f| f != END),
            "frame sequence has no frames"
        );
        if let Some(target) = self.target {
            objects.get_mut(target).set_sprite(self.frames[self.cursor]);
        }

        self.cursor += 1;
        if self.frames.get(self.cursor).map_or(true, |&f| f == END) {
            self.cursor = 0;
        }
        // A hold of `rate` ticks: this one plus `rate - 1` countdown ticks.
        self.countdown = self.rate.saturating_sub(1);
    }

    /// Sprite that the next frame write would emit.
    pub fn current_frame(&self) -> u16 {
        self.frames[self.cursor]
    }
}
