use core::slice;

use agb::display::palette16::Palette16;

pub const fn rounded_div(n: u32, d: u32) -> u32 {
    let floored_div = n / d;
    let rem = n % d;
    let half_d = (d + 1) / 2;
    if rem >= half_d {
        floored_div + 1
    } else {
        floored_div
    }
}

const fn channel(html: u32, shift: u32) -> u32 {
    let value = rounded_div((html >> shift) & 0xFF, 8);
    if value > 31 {
        31
    } else {
        value
    }
}

pub const fn html_color_to_gba(html: u32) -> u16 {
    (channel(html, 16) | (channel(html, 8) << 5) | (channel(html, 0) << 10)) as u16
}

/// Builds a 16 colour palette; entries past `colors` stay black.
pub const fn gen_palette(colors: &[u32]) -> Palette16 {
    let mut gba = [0; 16];
    let mut i = 0;
    while i < colors.len() && i < 16 {
        gba[i] = html_color_to_gba(colors[i]);
        i += 1;
    }
    Palette16::new(gba)
}

pub fn u16_slice_as_u8(word: &[u16]) -> &[u8] {
    let new_len = word.len() * 2;
    let new_ptr = word.as_ptr() as *const u8;
    // Safety: A 16bit int can be read as two bytes
    unsafe { slice::from_raw_parts(new_ptr, new_len) }
}

/// Packs one 8x8 4bpp tile, four pixels per word, leftmost pixel in the
/// low nibble.
pub fn pack_tile(pixel: impl Fn(usize, usize) -> u16) -> [u16; 16] {
    let mut tile = [0; 16];
    for y in 0..8 {
        for x in 0..8 {
            let pixel_num = x + y * 8;
            tile[pixel_num / 4] |= (pixel(x, y) & 0xF) << ((pixel_num % 4) * 4);
        }
    }
    tile
}

/// Packs a 16x16 sprite as four tiles in 1D mapping order.
pub fn pack_sprite16(pixel: impl Fn(usize, usize) -> u16) -> [u16; 64] {
    let mut sprite = [0; 64];
    for tile in 0..4 {
        let (ox, oy) = ((tile % 2) * 8, (tile / 2) * 8);
        let packed = pack_tile(|x, y| pixel(ox + x, oy + y));
        sprite[tile * 16..(tile + 1) * 16].copy_from_slice(&packed);
    }
    sprite
}

/// Cheap positional noise for sprinkling decoration over a tilemap.
pub const fn tile_hash(x: u16, y: u16) -> u16 {
    let mut h = (x as u32).wrapping_mul(0x9E37) ^ (y as u32).wrapping_mul(0x85EB);
    h ^= h >> 7;
    h = h.wrapping_mul(0x2C1B);
    (h ^ (h >> 11)) as u16
}
