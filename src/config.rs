use crate::object::ObjectSize;

pub const SCREEN_WIDTH: i16 = 240;
pub const SCREEN_HEIGHT: i16 = 160;

/// Tick constants and layout knobs. All durations count display refreshes.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Config {
    /// Length of each half of the fade (out and back in).
    pub fade_ticks: u16,
    /// Pause after the screen goes black, while the next screen loads.
    pub black_pause_ticks: u16,
    pub idle_rate: u16,
    pub walk_rate: u16,
    pub player_size: ObjectSize,
    pub scenery_count: usize,
    pub scenery_seed: u64,
}

impl Config {
    pub const DEFAULT: Config = Config {
        fade_ticks: 30,
        black_pause_ticks: 40,
        idle_rate: 30,
        walk_rate: 8,
        player_size: ObjectSize::S16x16,
        scenery_count: 24,
        scenery_seed: 0x5eed_0f_7ee5,
    };

    /// Top-left corner that centres the player on screen.
    pub const fn player_start(&self) -> (i16, i16) {
        let half = self.player_size.pixels() / 2;
        (SCREEN_WIDTH / 2 - half, SCREEN_HEIGHT / 2 - half)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::DEFAULT
    }
}
