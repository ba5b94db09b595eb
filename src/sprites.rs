//! Sprite indices shared by the game logic and the cartridge's tile
//! generator, plus the player's frame sequences.
//!
//! Every sequence ends in [`END`], which also means "loop to the start".

use crate::object::NO_SPRITE;

pub const END: u16 = NO_SPRITE;

pub const DOWN_STAND: u16 = 1;
pub const DOWN_STEP_A: u16 = 2;
pub const DOWN_STEP_B: u16 = 3;
pub const UP_STAND: u16 = 4;
pub const UP_STEP_A: u16 = 5;
pub const UP_STEP_B: u16 = 6;
pub const LEFT_STAND: u16 = 7;
pub const LEFT_STEP_A: u16 = 8;
pub const LEFT_STEP_B: u16 = 9;
pub const RIGHT_STAND: u16 = 10;
pub const RIGHT_STEP_A: u16 = 11;
pub const RIGHT_STEP_B: u16 = 12;

pub const TREE: u16 = 13;
pub const ROCK: u16 = 14;
pub const FLOWER: u16 = 15;

/// One past the highest sprite index in use.
pub const SPRITE_COUNT: u16 = 16;

pub const SCENERY: [u16; 3] = [TREE, ROCK, FLOWER];

pub static IDLE_DOWN: [u16; 2] = [DOWN_STAND, END];
pub static IDLE_UP: [u16; 2] = [UP_STAND, END];
pub static IDLE_LEFT: [u16; 2] = [LEFT_STAND, END];
pub static IDLE_RIGHT: [u16; 2] = [RIGHT_STAND, END];

pub static WALK_DOWN: [u16; 5] = [DOWN_STEP_A, DOWN_STAND, DOWN_STEP_B, DOWN_STAND, END];
pub static WALK_UP: [u16; 5] = [UP_STEP_A, UP_STAND, UP_STEP_B, UP_STAND, END];
pub static WALK_LEFT: [u16; 5] = [LEFT_STEP_A, LEFT_STAND, LEFT_STEP_B, LEFT_STAND, END];
pub static WALK_RIGHT: [u16; 5] = [RIGHT_STEP_A, RIGHT_STAND, RIGHT_STEP_B, RIGHT_STAND, END];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequences_are_terminated_and_non_empty() {
        let all: [&[u16]; 8] = [
            &IDLE_DOWN,
            &IDLE_UP,
            &IDLE_LEFT,
            &IDLE_RIGHT,
            &WALK_DOWN,
            &WALK_UP,
            &WALK_LEFT,
            &WALK_RIGHT,
        ];
        for seq in all {
            assert_ne!(seq[0], END);
            assert_eq!(seq.iter().position(|&f| f == END), Some(seq.len() - 1));
            assert!(seq.iter().all(|&f| f < SPRITE_COUNT));
        }
    }
}
