//! Screen and animation core of a small overworld game.
//!
//! Everything in here is plain logic driven once per frame. The hardware is
//! reached through the traits in [`display`] and [`input`], so the cartridge
//! binary supplies the GBA side and the tests supply fakes.
#![cfg_attr(not(test), no_std)]

pub mod animation;
pub mod config;
pub mod display;
pub mod fade;
pub mod game;
pub mod input;
pub mod main_game;
pub mod object;
pub mod sprites;
pub mod title;
pub mod world;

#[cfg(test)]
mod testing;

pub use config::Config;
pub use display::{Audio, DisplayPort, FrameClock, ScrollOffset, MAX_BRIGHTNESS};
pub use game::{Game, Screen};
pub use input::{Button, ButtonState, InputPoller};
pub use object::{ObjectAttributes, ObjectId, ObjectPool, ObjectSize, OBJECT_COUNT};

/// Everything a screen may touch during one tick.
pub struct ScreenContext<'a, D, I> {
    pub input: &'a I,
    pub objects: &'a mut ObjectPool,
    pub display: &'a mut D,
}
