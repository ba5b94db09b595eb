//! Host-side fakes for the hardware traits.

use crate::display::{Audio, DisplayPort, FrameClock, ScrollOffset, MAX_BRIGHTNESS};
use crate::input::{Button, ButtonState, InputPoller};
use crate::object::ObjectPool;

/// Input whose held buttons are set by the test before each tick.
#[derive(Default)]
pub struct ScriptedInput {
    held: u16,
    state: ButtonState,
}

impl ScriptedInput {
    pub fn hold(&mut self, button: Button) {
        self.held |= button.mask();
    }

    pub fn release(&mut self, button: Button) {
        self.held &= !button.mask();
    }

    pub fn release_all(&mut self) {
        self.held = 0;
    }
}

impl InputPoller for ScriptedInput {
    fn update(&mut self) {
        self.state.advance(self.held);
    }

    fn is_pressed(&self, button: Button) -> bool {
        self.state.is_pressed(button)
    }

    fn is_just_pressed(&self, button: Button) -> bool {
        self.state.is_just_pressed(button)
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DisplayCall {
    Setup,
    LoadTitle,
    ClearSecondary,
    LoadMainGame,
    LoadMainGameTilemap,
}

pub struct RecordingDisplay {
    pub calls: Vec<DisplayCall>,
    pub scroll: ScrollOffset,
    pub scroll_writes: usize,
    pub brightness: u8,
    pub presented: usize,
    pub commits: usize,
}

impl Default for RecordingDisplay {
    fn default() -> Self {
        Self {
            calls: Vec::new(),
            scroll: ScrollOffset::ZERO,
            scroll_writes: 0,
            brightness: MAX_BRIGHTNESS,
            presented: 0,
            commits: 0,
        }
    }
}

impl RecordingDisplay {
    pub fn count(&self, call: DisplayCall) -> usize {
        self.calls.iter().filter(|&c| *c == call).count()
    }
}

impl DisplayPort for RecordingDisplay {
    fn setup(&mut self) {
        self.calls.push(DisplayCall::Setup);
    }

    fn load_title_screen_assets(&mut self) {
        self.calls.push(DisplayCall::LoadTitle);
    }

    fn clear_secondary_background(&mut self) {
        self.calls.push(DisplayCall::ClearSecondary);
    }

    fn load_main_game_assets(&mut self) {
        self.calls.push(DisplayCall::LoadMainGame);
    }

    fn load_main_game_tilemap(&mut self) {
        self.calls.push(DisplayCall::LoadMainGameTilemap);
    }

    fn set_scroll(&mut self, offset: ScrollOffset) {
        self.scroll = offset;
        self.scroll_writes += 1;
    }

    fn set_brightness(&mut self, level: u8) {
        self.brightness = level;
    }

    fn present(&mut self, _objects: &ObjectPool) {
        self.presented += 1;
    }

    fn commit(&mut self) {
        self.commits += 1;
    }
}

#[derive(Default)]
pub struct CountingAudio {
    pub inits: usize,
}

impl Audio for CountingAudio {
    fn init(&mut self) {
        self.inits += 1;
    }
}

#[derive(Default)]
pub struct CountingClock {
    pub frames: usize,
}

impl FrameClock for CountingClock {
    fn wait_for_frame(&mut self) {
        self.frames += 1;
    }
}
