use log::{debug, warn};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::config::Config;
use crate::object::{ObjectPool, ObjectSize};
use crate::sprites::SCENERY;

/// Side of the square background map, in pixels.
pub const WORLD_SIZE: i16 = 256;

const SCENERY_SIZE: ObjectSize = ObjectSize::S16x16;

/// Scatters scenery over the map, filling the pool from its first free
/// slot. The layout depends only on the configured seed.
pub fn spawn_scenery(objects: &mut ObjectPool, config: &Config) -> usize {
    let mut rng = ChaCha8Rng::seed_from_u64(config.scenery_seed);
    let side = SCENERY_SIZE.pixels();
    let (player_x, player_y) = config.player_start();
    let player_side = config.player_size.pixels();

    let mut spawned = 0;
    for _ in 0..config.scenery_count {
        let id = match objects.next_available_id() {
            Some(id) => id,
            None => {
                warn!("object pool full after {} scenery objects", spawned);
                break;
            }
        };

        let (x, y) = loop {
            let x = rng.gen_range(0..WORLD_SIZE - side);
            let y = rng.gen_range(0..WORLD_SIZE - side);
            let clear_x = x + side <= player_x || x >= player_x + player_side;
            let clear_y = y + side <= player_y || y >= player_y + player_side;
            if clear_x || clear_y {
                break (x, y);
            }
        };

        let obj = objects.get_mut(id);
        obj.set_size(SCENERY_SIZE);
        obj.set_sprite(SCENERY[rng.gen_range(0..SCENERY.len())]);
        obj.set_x(x);
        obj.set_y(y);
        spawned += 1;
    }

    debug!("spawned {} scenery objects", spawned);
    spawned
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object::{ObjectId, OBJECT_COUNT};

    fn layout(pool: &ObjectPool) -> Vec<(u16, i16, i16)> {
        pool.iter()
            .filter(|(_, obj)| obj.is_live())
            .map(|(_, obj)| (obj.sprite_id(), obj.x(), obj.y()))
            .collect()
    }

    #[test]
    fn same_seed_same_layout() {
        let mut a = ObjectPool::new();
        let mut b = ObjectPool::new();
        assert_eq!(spawn_scenery(&mut a, &Config::DEFAULT), Config::DEFAULT.scenery_count);
        spawn_scenery(&mut b, &Config::DEFAULT);
        assert_eq!(layout(&a), layout(&b));
    }

    #[test]
    fn scenery_is_contiguous_and_in_bounds() {
        let mut pool = ObjectPool::new();
        let count = spawn_scenery(&mut pool, &Config::DEFAULT);
        for (id, obj) in pool.iter() {
            assert_eq!(obj.is_live(), id.index() < count);
            if obj.is_live() {
                assert!(SCENERY.contains(&obj.sprite_id()));
                assert!((0..WORLD_SIZE).contains(&obj.x()));
                assert!((0..WORLD_SIZE).contains(&obj.y()));
            }
        }
    }

    #[test]
    fn keeps_clear_of_the_player() {
        let config = Config {
            scenery_count: 100,
            ..Config::DEFAULT
        };
        let (px, py) = config.player_start();
        let mut pool = ObjectPool::new();
        spawn_scenery(&mut pool, &config);
        for (_, obj) in pool.iter().filter(|(_, obj)| obj.is_live()) {
            let overlaps = (obj.x() - px).abs() < 16 && (obj.y() - py).abs() < 16;
            assert!(!overlaps, "scenery at ({}, {})", obj.x(), obj.y());
        }
    }

    #[test]
    fn stops_when_the_pool_is_full() {
        let mut pool = ObjectPool::new();
        for i in 0..OBJECT_COUNT - 2 {
            pool.get_mut(ObjectId::new(i).unwrap()).set_sprite(1);
        }
        assert_eq!(spawn_scenery(&mut pool, &Config::DEFAULT), 2);
        assert_eq!(pool.next_available_id(), None);
    }
}
