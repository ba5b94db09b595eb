use log::debug;
use smallvec::SmallVec;

use crate::animation::Animation;
use crate::config::Config;
use crate::display::{DisplayPort, ScrollOffset};
use crate::input::{Button, InputPoller};
use crate::object::{ObjectId, ObjectSize};
use crate::sprites;
use crate::ScreenContext;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Facing {
    Down,
    Up,
    Left,
    Right,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Motion {
    Idle,
    Walk,
}

const fn slot(facing: Facing, motion: Motion) -> usize {
    facing as usize * 2 + motion as usize
}

const DIRECTIONS: [(Button, Facing); 4] = [
    (Button::Right, Facing::Right),
    (Button::Left, Facing::Left),
    (Button::Up, Facing::Up),
    (Button::Down, Facing::Down),
];

/// An object whose rendered position follows the camera.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct SecondaryObject {
    pub id: ObjectId,
    pub origin_x: i16,
    pub origin_y: i16,
}

pub struct MainGame {
    player: Option<ObjectId>,
    player_size: ObjectSize,
    player_start: (i16, i16),
    animations: [Animation; 8],
    current_animation: usize,
    facing: Facing,
    scroll: ScrollOffset,
    secondary: SmallVec<[SecondaryObject; 32]>,
}

impl MainGame {
    pub fn new(config: &Config) -> Self {
        let idle = config.idle_rate;
        let walk = config.walk_rate;
        Self {
            player: None,
            player_size: config.player_size,
            player_start: config.player_start(),
            // Laid out in `slot` order.
            animations: [
                Animation::new(&sprites::IDLE_DOWN, idle),
                Animation::new(&sprites::WALK_DOWN, walk),
                Animation::new(&sprites::IDLE_UP, idle),
                Animation::new(&sprites::WALK_UP, walk),
                Animation::new(&sprites::IDLE_LEFT, idle),
                Animation::new(&sprites::WALK_LEFT, walk),
                Animation::new(&sprites::IDLE_RIGHT, idle),
                Animation::new(&sprites::WALK_RIGHT, walk),
            ],
            current_animation: slot(Facing::Down, Motion::Idle),
            facing: Facing::Down,
            scroll: ScrollOffset::ZERO,
            secondary: SmallVec::new(),
        }
    }

    /// Places the player, loads the overworld and snapshots every object
    /// already in the pool.
    ///
    /// # Panics
    ///
    /// If the object pool has no free slot for the player.
    pub fn init<D: DisplayPort, I>(&mut self, ctx: &mut ScreenContext<'_, D, I>) {
        let player = match ctx.objects.next_available_id() {
            Some(id) => id,
            None => panic!("no free object slot for the player"),
        };
        let (x, y) = self.player_start;
        let obj = ctx.objects.get_mut(player);
        obj.set_size(self.player_size);
        obj.set_sprite(sprites::DOWN_STAND);
        obj.set_x(x);
        obj.set_y(y);

        for animation in &mut self.animations {
            animation.set_target(player);
        }
        self.player = Some(player);

        ctx.display.load_main_game_assets();
        ctx.display.load_main_game_tilemap();

        self.secondary.clear();
        for (id, obj) in ctx.objects.iter().filter(|(id, _)| *id != player) {
            if !obj.is_live() {
                break;
            }
            self.secondary.push(SecondaryObject {
                id,
                origin_x: obj.x(),
                origin_y: obj.y(),
            });
        }
        debug!(
            "player in slot {}, {} secondary objects captured",
            player.index(),
            self.secondary.len()
        );

        self.facing = Facing::Down;
        self.current_animation = slot(Facing::Down, Motion::Idle);
    }

    pub fn update<D: DisplayPort, I: InputPoller>(&mut self, ctx: &mut ScreenContext<'_, D, I>) {
        debug_assert!(self.player.is_some(), "main game updated before init");
        let input = ctx.input;

        for (button, facing) in DIRECTIONS {
            if input.is_just_pressed(button) {
                self.animations[slot(facing, Motion::Walk)].reset();
            }
        }

        // Later checks overwrite the facing, so vertical wins over horizontal.
        let mut moving = false;
        for (button, facing) in DIRECTIONS {
            if input.is_pressed(button) {
                moving = true;
                self.facing = facing;
                self.current_animation = slot(facing, Motion::Walk);
                match facing {
                    Facing::Right => self.scroll.shift(1, 0),
                    Facing::Left => self.scroll.shift(-1, 0),
                    Facing::Up => self.scroll.shift(0, -1),
                    Facing::Down => self.scroll.shift(0, 1),
                }
            }
        }
        if !moving {
            self.current_animation = slot(self.facing, Motion::Idle);
        }

        self.animations[self.current_animation].update(ctx.objects);

        ctx.display.set_scroll(self.scroll);

        for secondary in &self.secondary {
            let obj = ctx.objects.get_mut(secondary.id);
            obj.set_x(secondary.origin_x.wrapping_sub(self.scroll.x));
            obj.set_y(secondary.origin_y.wrapping_sub(self.scroll.y));
        }
    }

    pub fn player(&self) -> Option<ObjectId> {
        self.player
    }

    pub fn scroll(&self) -> ScrollOffset {
        self.scroll
    }

    pub fn facing(&self) -> Facing {
        self.facing
    }

    pub fn current_animation(&self) -> (Facing, Motion) {
        let facing = match self.current_animation / 2 {
            0 => Facing::Down,
            1 => Facing::Up,
            2 => Facing::Left,
            _ => Facing::Right,
        };
        let motion = if self.current_animation % 2 == 0 {
            Motion::Idle
        } else {
            Motion::Walk
        };
        (facing, motion)
    }

    pub fn secondary_objects(&self) -> &[SecondaryObject] {
        &self.secondary
    }
}
