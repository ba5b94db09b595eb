use log::debug;

use crate::display::MAX_BRIGHTNESS;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum FadeState {
    Idle,
    FadingOut,
    /// Fully black for exactly one tick.
    Middle,
    FadingIn,
    /// Fully visible again for exactly one tick, then idle.
    Finished,
}

/// Visible to black to visible brightness ramp.
///
/// The state is only ever read, never consumed: callers poll it every tick
/// and latch whatever they do on `Middle` and `Finished` themselves.
#[derive(Clone, Debug)]
pub struct Fade {
    state: FadeState,
    duration: u16,
    step: u16,
    brightness: u8,
}

impl Fade {
    pub const fn new(duration: u16) -> Self {
        Self {
            state: FadeState::Idle,
            duration,
            step: 0,
            brightness: MAX_BRIGHTNESS,
        }
    }

    /// Starts fading out from the top, whatever the current phase.
    pub fn reset(&mut self) {
        self.state = FadeState::FadingOut;
        self.step = 0;
        self.brightness = MAX_BRIGHTNESS;
    }

    pub fn update(&mut self) {
        let before = self.state;
        match self.state {
            FadeState::Idle => {}
            FadeState::FadingOut => {
                if self.step >= self.duration {
                    self.state = FadeState::Middle;
                    self.brightness = 0;
                } else {
                    self.step += 1;
                    self.brightness = self.ramp(self.duration - self.step);
                }
            }
            FadeState::Middle => {
                self.state = FadeState::FadingIn;
                self.step = 0;
                self.fade_in_step();
            }
            FadeState::FadingIn => self.fade_in_step(),
            FadeState::Finished => self.state = FadeState::Idle,
        }
        if before != self.state {
            debug!("fade {:?} -> {:?}", before, self.state);
        }
    }

    fn fade_in_step(&mut self) {
        if self.step >= self.duration {
            self.state = FadeState::Finished;
            self.brightness = MAX_BRIGHTNESS;
        } else {
            self.step += 1;
            self.brightness = self.ramp(self.step);
        }
    }

    fn ramp(&self, step: u16) -> u8 {
        (u32::from(MAX_BRIGHTNESS) * u32::from(step) / u32::from(self.duration)) as u8
    }

    pub fn get_state(&self) -> FadeState {
        self.state
    }

    pub fn brightness(&self) -> u8 {
        self.brightness
    }
}
