#![no_std]
#![no_main]

extern crate alloc;

mod gfx;
mod hardware;
mod mgba_log;
mod util;

use hardware::{DmgAudio, GbaDisplay, GbaInput, VBlankClock};
use overworld::{Config, Game};

#[agb::entry]
fn main(mut gba: agb::Gba) -> ! {
    mgba_log::init();

    let objects = gba.display.object.get();
    let (tiled, vram) = gba.display.video.tiled0();
    let blend = gba.display.blend.get();

    let display = GbaDisplay::new(&objects, &tiled, vram, blend);
    let mut game = Game::new(display, GbaInput::new(), Config::default());
    game.init(&mut DmgAudio::new(&gba.sound));

    let mut clock = VBlankClock::new();
    loop {
        game.run_frame(&mut clock);
    }
}
