use agb::display::blend::{Blend, BlendMode, Layer};
use agb::display::object::{Object, ObjectController, SpriteBorrow};
use agb::display::tiled::{
    MapLoan, RegularBackgroundSize, RegularMap, TileSetting, Tiled0, TiledMap, VRamManager,
};
use agb::display::Priority;
use agb::fixnum::{Num, Vector2D};
use agb::input::{self, ButtonController};
use agb::interrupt::VBlank;
use agb::sound::dmg::Sound;
use alloc::vec::Vec;
use log::warn;
use overworld::{
    Audio, Button, DisplayPort, FrameClock, InputPoller, ObjectPool, ScrollOffset,
    MAX_BRIGHTNESS, OBJECT_COUNT,
};

use crate::gfx;

struct Slot<'a> {
    object: Object<'a>,
    sprite: u16,
}

/// Mode 0 display: background 0 carries the current screen, background 1
/// is the secondary layer, objects come from the pool.
pub struct GbaDisplay<'a> {
    oam: &'a ObjectController,
    vram: VRamManager,
    background: MapLoan<'a, RegularMap>,
    overlay: MapLoan<'a, RegularMap>,
    blend: Blend<'a>,
    sprites: Vec<SpriteBorrow>,
    slots: Vec<Option<Slot<'a>>>,
}

impl<'a> GbaDisplay<'a> {
    pub fn new(
        oam: &'a ObjectController,
        tiled: &'a Tiled0,
        vram: VRamManager,
        blend: Blend<'a>,
    ) -> Self {
        let mut slots = Vec::with_capacity(OBJECT_COUNT);
        slots.resize_with(OBJECT_COUNT, || None);
        Self {
            oam,
            vram,
            background: tiled.background(Priority::P1, RegularBackgroundSize::Background32x32),
            overlay: tiled.background(Priority::P0, RegularBackgroundSize::Background32x32),
            blend,
            sprites: Vec::new(),
            slots,
        }
    }

    fn fill_background(&mut self, width: u16, height: u16, tile_at: fn(u16, u16) -> u16, palette: u8) {
        let tileset = match palette {
            gfx::TITLE_PALETTE_ID => gfx::title_tileset(),
            _ => gfx::overworld_tileset(),
        };
        for y in 0..height {
            for x in 0..width {
                self.background.set_tile(
                    &mut self.vram,
                    Vector2D { x, y },
                    tileset,
                    TileSetting::new(tile_at(x, y), false, false, palette),
                );
            }
        }
    }
}

impl DisplayPort for GbaDisplay<'_> {
    fn setup(&mut self) {
        self.sprites = gfx::load_sprites();

        self.blend
            .set_blend_mode(BlendMode::FadeToBlack)
            .set_background_enable(Layer::Top, self.background.background(), true)
            .set_background_enable(Layer::Top, self.overlay.background(), true)
            .set_object_enable(Layer::Top, true)
            .set_backdrop_enable(Layer::Top, true)
            .set_fade(Num::from_raw(0));

        self.background.show();
        self.overlay.show();
    }

    fn load_title_screen_assets(&mut self) {
        self.vram.set_background_palette(gfx::TITLE_PALETTE_ID, &gfx::TITLE_PALETTE);
        self.fill_background(30, 20, gfx::title_tile_at, gfx::TITLE_PALETTE_ID);
    }

    fn clear_secondary_background(&mut self) {
        self.overlay.clear(&mut self.vram);
    }

    fn load_main_game_assets(&mut self) {
        self.vram.set_background_palette(gfx::OVERWORLD_PALETTE_ID, &gfx::OVERWORLD_PALETTE);
        gfx::overworld_tileset();
    }

    fn load_main_game_tilemap(&mut self) {
        self.fill_background(32, 32, gfx::overworld_tile_at, gfx::OVERWORLD_PALETTE_ID);
    }

    fn set_scroll(&mut self, offset: ScrollOffset) {
        let pos = Vector2D {
            x: offset.x as u16,
            y: offset.y as u16,
        };
        self.background.set_scroll_pos(pos);
        self.overlay.set_scroll_pos(pos);
    }

    fn set_brightness(&mut self, level: u8) {
        let darkness = MAX_BRIGHTNESS - level.min(MAX_BRIGHTNESS);
        self.blend.set_fade(Num::from_raw(darkness));
    }

    fn present(&mut self, objects: &ObjectPool) {
        for (id, attrs) in objects.iter() {
            let slot = &mut self.slots[id.index()];
            if !attrs.is_live() {
                if let Some(slot) = slot {
                    slot.object.hide();
                }
                continue;
            }

            let sprite_id = attrs.sprite_id();
            let sprite = match self.sprites.get(usize::from(sprite_id) - 1) {
                Some(sprite) => sprite,
                None => {
                    warn!("slot {} has unknown sprite {}", id.index(), sprite_id);
                    continue;
                }
            };

            let oam = self.oam;
            let slot = slot.get_or_insert_with(|| Slot {
                object: oam.object(sprite.clone()),
                sprite: sprite_id,
            });
            if slot.sprite != sprite_id {
                slot.object.set_sprite(sprite.clone());
                slot.sprite = sprite_id;
            }

            // OAM keeps 9 bits of x and 8 of y; negative values wrap.
            slot.object.set_x(attrs.x() as u16 & 0x1FF);
            slot.object.set_y(attrs.y() as u16 & 0xFF);
            slot.object.show();
        }
    }

    fn commit(&mut self) {
        self.oam.commit();
        self.background.commit(&mut self.vram);
        self.overlay.commit(&mut self.vram);
        self.blend.commit();
    }
}

pub struct GbaInput(ButtonController);

impl GbaInput {
    pub fn new() -> Self {
        Self(ButtonController::new())
    }

    fn map(button: Button) -> input::Button {
        match button {
            Button::Up => input::Button::UP,
            Button::Down => input::Button::DOWN,
            Button::Left => input::Button::LEFT,
            Button::Right => input::Button::RIGHT,
            Button::Start => input::Button::START,
            Button::Select => input::Button::SELECT,
            Button::A => input::Button::A,
            Button::B => input::Button::B,
            Button::L => input::Button::L,
            Button::R => input::Button::R,
        }
    }
}

impl InputPoller for GbaInput {
    fn update(&mut self) {
        self.0.update();
    }

    fn is_pressed(&self, button: Button) -> bool {
        self.0.is_pressed(Self::map(button))
    }

    fn is_just_pressed(&self, button: Button) -> bool {
        self.0.is_just_pressed(Self::map(button))
    }
}

pub struct DmgAudio<'a>(&'a Sound);

impl<'a> DmgAudio<'a> {
    pub fn new(sound: &'a Sound) -> Self {
        Self(sound)
    }
}

impl Audio for DmgAudio<'_> {
    fn init(&mut self) {
        self.0.enable();
    }
}

pub struct VBlankClock(VBlank);

impl VBlankClock {
    pub fn new() -> Self {
        Self(VBlank::get())
    }
}

impl FrameClock for VBlankClock {
    fn wait_for_frame(&mut self) {
        self.0.wait_for_vblank();
    }
}
