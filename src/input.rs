#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Button {
    Up,
    Down,
    Left,
    Right,
    Start,
    Select,
    A,
    B,
    L,
    R,
}

impl Button {
    pub const ALL: [Button; 10] = [
        Button::Up,
        Button::Down,
        Button::Left,
        Button::Right,
        Button::Start,
        Button::Select,
        Button::A,
        Button::B,
        Button::L,
        Button::R,
    ];

    pub const fn mask(self) -> u16 {
        1 << self as u16
    }
}

/// Samples the buttons once per tick.
pub trait InputPoller {
    fn update(&mut self);
    fn is_pressed(&self, button: Button) -> bool;
    /// Held this tick but not the previous one.
    fn is_just_pressed(&self, button: Button) -> bool;
}

/// Pressed/just-pressed classification over raw button masks.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct ButtonState {
    current: u16,
    previous: u16,
}

impl ButtonState {
    pub const fn new() -> Self {
        Self {
            current: 0,
            previous: 0,
        }
    }

    pub fn advance(&mut self, held: u16) {
        self.previous = self.current;
        self.current = held;
    }

    pub fn is_pressed(&self, button: Button) -> bool {
        self.current & button.mask() != 0
    }

    pub fn is_just_pressed(&self, button: Button) -> bool {
        self.is_pressed(button) && self.previous & button.mask() == 0
    }
}
