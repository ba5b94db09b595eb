use agb::display::object::{DynamicSprite, PaletteVram, Size, SpriteBorrow};
use agb::display::palette16::Palette16;
use agb::display::tiled::{TileFormat, TileSet};
use agb::sync::InitOnce;
use alloc::vec::Vec;
use overworld::main_game::Facing;
use overworld::sprites;

use crate::util::{gen_palette, pack_sprite16, pack_tile, tile_hash, u16_slice_as_u8};

pub const TITLE_PALETTE_ID: u8 = 0;
pub const OVERWORLD_PALETTE_ID: u8 = 1;

pub static TITLE_PALETTE: Palette16 =
    gen_palette(&[0x000000, 0x0b1440, 0xf4f4ff, 0xe8b83a, 0x6b3a12, 0x2b1d5c]);

pub static OVERWORLD_PALETTE: Palette16 = gen_palette(&[
    0x000000, 0x4caf3c, 0x2f7d2a, 0xc9a86a, 0xa2824b, 0x2f6fd6, 0x8fc3ff,
]);

static OBJECT_PALETTE: Palette16 = gen_palette(&[
    0x000000, 0x1a1a1a, 0xf2c69b, 0x3558c9, 0x3b2f63, 0x6b3f1d, 0x3e9c35, 0x1f5e1b, 0x7a4a22,
    0x9a9a9a, 0x5c5c5c, 0xe8467c, 0xffe14d, 0x2e7d32,
]);

// Title tiles
pub const SKY: u16 = 0;
pub const STAR: u16 = 1;
pub const BORDER: u16 = 2;
pub const FILL: u16 = 3;
pub const GLYPH: u16 = 4;

// Overworld tiles
pub const GRASS: u16 = 0;
pub const TUFT: u16 = 1;
pub const PATH: u16 = 2;
pub const WATER: u16 = 3;

fn gen_title_tile(tile: u16) -> [u16; 16] {
    match tile {
        STAR => pack_tile(|x, y| if (x, y) == (3, 4) { 2 } else { 1 }),
        BORDER => pack_tile(|x, y| if x == 0 || y == 0 || x == 7 || y == 7 { 4 } else { 3 }),
        FILL => pack_tile(|_, _| 3),
        GLYPH => pack_tile(|x, y| {
            let (dx, dy) = (x.abs_diff(3), y.abs_diff(3));
            if dx + dy <= 3 {
                5
            } else {
                3
            }
        }),
        _ => pack_tile(|_, _| 1),
    }
}

fn gen_overworld_tile(tile: u16) -> [u16; 16] {
    match tile {
        TUFT => pack_tile(|x, y| if (y == 5 || y == 6) && (x == 2 || x == 4 || x == 6) { 2 } else { 1 }),
        PATH => pack_tile(|x, y| if (x * 3 + y * 5) % 11 == 0 { 4 } else { 3 }),
        WATER => pack_tile(|x, y| if (x + y * 2) % 7 == 0 { 6 } else { 5 }),
        _ => pack_tile(|_, _| 1),
    }
}

fn leak_tileset(count: u16, gen: fn(u16) -> [u16; 16]) -> TileSet<'static> {
    let mut tiles = Vec::with_capacity(16 * count as usize);
    for tile in 0..count {
        tiles.extend_from_slice(&gen(tile));
    }
    TileSet::new(u16_slice_as_u8(tiles.leak()), TileFormat::FourBpp)
}

pub fn title_tileset() -> &'static TileSet<'static> {
    static TITLE_TILESET: InitOnce<TileSet<'static>> = InitOnce::new();
    TITLE_TILESET.get(|| leak_tileset(5, gen_title_tile))
}

pub fn overworld_tileset() -> &'static TileSet<'static> {
    static OVERWORLD_TILESET: InitOnce<TileSet<'static>> = InitOnce::new();
    OVERWORLD_TILESET.get(|| leak_tileset(4, gen_overworld_tile))
}

/// Banner in the middle of a starfield, 30x20 tiles.
pub fn title_tile_at(x: u16, y: u16) -> u16 {
    let in_banner = (5..=24).contains(&x) && (7..=12).contains(&y);
    if in_banner {
        if x == 5 || x == 24 || y == 7 || y == 12 {
            BORDER
        } else if (9..=10).contains(&y) && (7..=22).contains(&x) && x % 2 == 1 {
            GLYPH
        } else {
            FILL
        }
    } else if tile_hash(x, y) % 7 == 0 {
        STAR
    } else {
        SKY
    }
}

/// Grass crossed by two paths, with a pond in the top-left, 32x32 tiles.
pub fn overworld_tile_at(x: u16, y: u16) -> u16 {
    let (dx, dy) = (x.abs_diff(6), y.abs_diff(6));
    if dx * dx + dy * dy <= 9 {
        WATER
    } else if (14..=15).contains(&y) || (15..=16).contains(&x) {
        PATH
    } else if tile_hash(x, y) % 5 == 0 {
        TUFT
    } else {
        GRASS
    }
}

#[derive(Copy, Clone)]
enum Pose {
    Stand,
    StepA,
    StepB,
}

fn player_pixel(facing: Facing, pose: Pose, x: usize, y: usize) -> u16 {
    const OUTLINE: u16 = 1;
    const SKIN: u16 = 2;
    const SHIRT: u16 = 3;
    const PANTS: u16 = 4;
    const HAIR: u16 = 5;

    let (dx, dy) = ((2 * x as i32) - 15, (2 * y as i32) - 9);
    if y < 8 && dx * dx + dy * dy <= 52 {
        let eye = match facing {
            Facing::Down => (x == 6 || x == 9) && y == 5,
            Facing::Left => x == 5 && y == 5,
            Facing::Right => x == 10 && y == 5,
            Facing::Up => false,
        };
        return if eye {
            OUTLINE
        } else if y <= 2 || facing == Facing::Up {
            HAIR
        } else {
            SKIN
        };
    }
    if (8..=12).contains(&y) {
        return match x {
            4..=11 => SHIRT,
            3 | 12 if (9..=11).contains(&y) => SKIN,
            _ => 0,
        };
    }
    if y >= 13 {
        let (left_end, right_end) = match pose {
            Pose::Stand => (15, 15),
            Pose::StepA => (15, 14),
            Pose::StepB => (14, 15),
        };
        let left = (5..=6).contains(&x) && y <= left_end;
        let right = (9..=10).contains(&x) && y <= right_end;
        if left || right {
            return PANTS;
        }
    }
    0
}

fn scenery_pixel(sprite: u16, x: usize, y: usize) -> u16 {
    let (dx, dy) = ((2 * x as i32) - 15, (2 * y as i32) - 12);
    match sprite {
        sprites::TREE => {
            let d = dx * dx + dy * dy;
            if y <= 10 && d <= 100 {
                if d > 70 {
                    7
                } else {
                    6
                }
            } else if (6..=9).contains(&x) && y >= 10 {
                8
            } else {
                0
            }
        }
        sprites::ROCK => {
            let dy = (2 * y as i32) - 22;
            let d = dx * dx + 3 * dy * dy;
            if y >= 6 && d <= 160 {
                if dy > 2 {
                    10
                } else {
                    9
                }
            } else {
                0
            }
        }
        _ => {
            let dy = (2 * y as i32) - 9;
            let d = dx * dx + dy * dy;
            if d <= 4 {
                12
            } else if d <= 26 {
                11
            } else if (7..=8).contains(&x) && y >= 8 {
                13
            } else {
                0
            }
        }
    }
}

fn gen_sprite_data(sprite: u16) -> [u16; 64] {
    if (sprites::DOWN_STAND..=sprites::RIGHT_STEP_B).contains(&sprite) {
        let n = sprite - sprites::DOWN_STAND;
        let facing = [Facing::Down, Facing::Up, Facing::Left, Facing::Right][(n / 3) as usize];
        let pose = [Pose::Stand, Pose::StepA, Pose::StepB][(n % 3) as usize];
        pack_sprite16(|x, y| player_pixel(facing, pose, x, y))
    } else {
        pack_sprite16(|x, y| scenery_pixel(sprite, x, y))
    }
}

/// Uploads every sprite; entry `i` holds sprite index `i + 1`.
pub fn load_sprites() -> Vec<SpriteBorrow> {
    let palette = PaletteVram::new(&OBJECT_PALETTE).expect("no room for the object palette");
    let mut loaded = Vec::with_capacity(sprites::SPRITE_COUNT as usize);
    for sprite in 1..sprites::SPRITE_COUNT {
        let data = gen_sprite_data(sprite);
        loaded.push(DynamicSprite::new(u16_slice_as_u8(&data), Size::S16x16).to_vram(palette.clone()));
    }
    loaded
}
