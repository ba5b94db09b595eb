use crate::object::ObjectPool;

/// Fully visible. Zero is black.
pub const MAX_BRIGHTNESS: u8 = 16;

/// Camera displacement. Wraps at the width of the scroll registers.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct ScrollOffset {
    pub x: i16,
    pub y: i16,
}

impl ScrollOffset {
    pub const ZERO: ScrollOffset = ScrollOffset { x: 0, y: 0 };

    pub const fn new(x: i16, y: i16) -> Self {
        Self { x, y }
    }

    pub fn shift(&mut self, dx: i16, dy: i16) {
        self.x = self.x.wrapping_add(dx);
        self.y = self.y.wrapping_add(dy);
    }
}

/// Video side of the console as seen by the screens.
///
/// Asset loads are bulk copies into display memory and may be slow, callers
/// schedule them while the screen is black.
pub trait DisplayPort {
    fn setup(&mut self);
    fn load_title_screen_assets(&mut self);
    fn clear_secondary_background(&mut self);
    fn load_main_game_assets(&mut self);
    fn load_main_game_tilemap(&mut self);
    /// Applies to every background layer.
    fn set_scroll(&mut self, offset: ScrollOffset);
    fn set_brightness(&mut self, level: u8);
    /// Stages the object pool for the next refresh.
    fn present(&mut self, objects: &ObjectPool);
    /// Flushes staged state. Called right after the refresh boundary.
    fn commit(&mut self) {}
}

pub trait Audio {
    fn init(&mut self);
}

/// Blocks until the next display refresh.
pub trait FrameClock {
    fn wait_for_frame(&mut self);
}
