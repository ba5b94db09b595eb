/// Number of hardware object slots.
pub const OBJECT_COUNT: usize = 128;

/// Sprite index meaning "this slot is unused".
pub const NO_SPRITE: u16 = 0;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct ObjectId(u8);

impl ObjectId {
    pub const fn new(index: usize) -> Option<Self> {
        if index < OBJECT_COUNT {
            Some(ObjectId(index as u8))
        } else {
            None
        }
    }

    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum ObjectSize {
    #[default]
    S8x8,
    S16x16,
    S32x32,
    S64x64,
}

impl ObjectSize {
    pub const fn pixels(self) -> i16 {
        match self {
            ObjectSize::S8x8 => 8,
            ObjectSize::S16x16 => 16,
            ObjectSize::S32x32 => 32,
            ObjectSize::S64x64 => 64,
        }
    }
}

/// One slot of the object pool.
///
/// Positions are screen coordinates and wrap the same way the hardware
/// registers do, so negative values are legal.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct ObjectAttributes {
    x: i16,
    y: i16,
    size: ObjectSize,
    sprite: u16,
}

impl ObjectAttributes {
    pub fn set_size(&mut self, size: ObjectSize) {
        self.size = size;
    }

    pub fn set_sprite(&mut self, sprite: u16) {
        self.sprite = sprite;
    }

    pub fn set_x(&mut self, x: i16) {
        self.x = x;
    }

    pub fn set_y(&mut self, y: i16) {
        self.y = y;
    }

    pub fn sprite_id(&self) -> u16 {
        self.sprite
    }

    pub fn x(&self) -> i16 {
        self.x
    }

    pub fn y(&self) -> i16 {
        self.y
    }

    pub fn size(&self) -> ObjectSize {
        self.size
    }

    pub fn is_live(&self) -> bool {
        self.sprite != NO_SPRITE
    }
}

pub struct ObjectPool {
    slots: [ObjectAttributes; OBJECT_COUNT],
}

impl ObjectPool {
    pub const fn new() -> Self {
        const EMPTY: ObjectAttributes = ObjectAttributes {
            x: 0,
            y: 0,
            size: ObjectSize::S8x8,
            sprite: NO_SPRITE,
        };
        Self {
            slots: [EMPTY; OBJECT_COUNT],
        }
    }

    pub fn get(&self, id: ObjectId) -> &ObjectAttributes {
        &self.slots[id.index()]
    }

    pub fn get_mut(&mut self, id: ObjectId) -> &mut ObjectAttributes {
        &mut self.slots[id.index()]
    }

    /// Lowest-numbered slot that has no sprite assigned.
    pub fn next_available_id(&self) -> Option<ObjectId> {
        self.slots
            .iter()
            .position(|slot| !slot.is_live())
            .and_then(ObjectId::new)
    }

    pub fn iter(&self) -> impl Iterator<Item = (ObjectId, &ObjectAttributes)> {
        self.slots
            .iter()
            .enumerate()
            .map(|(i, slot)| (ObjectId(i as u8), slot))
    }

    pub fn live_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_live()).count()
    }
}

impl Default for ObjectPool {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_bounded_by_the_pool() {
        assert_eq!(ObjectId::new(127).map(ObjectId::index), Some(127));
        assert_eq!(ObjectId::new(OBJECT_COUNT), None);
    }

    #[test]
    fn next_available_skips_live_slots() {
        let mut pool = ObjectPool::new();
        assert_eq!(pool.next_available_id(), ObjectId::new(0));

        for i in 0..3 {
            pool.get_mut(ObjectId::new(i).unwrap()).set_sprite(5);
        }
        assert_eq!(pool.next_available_id(), ObjectId::new(3));

        pool.get_mut(ObjectId::new(1).unwrap()).set_sprite(NO_SPRITE);
        assert_eq!(pool.next_available_id(), ObjectId::new(1));
    }

    #[test]
    fn exhausted_pool_has_no_free_slot() {
        let mut pool = ObjectPool::new();
        for i in 0..OBJECT_COUNT {
            pool.get_mut(ObjectId::new(i).unwrap()).set_sprite(1);
        }
        assert_eq!(pool.next_available_id(), None);
        assert_eq!(pool.live_count(), OBJECT_COUNT);
    }

    #[test]
    fn attributes_round_trip_through_handle() {
        let mut pool = ObjectPool::new();
        let id = ObjectId::new(9).unwrap();
        let obj = pool.get_mut(id);
        obj.set_x(-4);
        obj.set_y(200);
        obj.set_size(ObjectSize::S16x16);
        obj.set_sprite(3);

        let obj = pool.get(id);
        assert_eq!((obj.x(), obj.y()), (-4, 200));
        assert_eq!(obj.size(), ObjectSize::S16x16);
        assert_eq!(obj.sprite_id(), 3);
        assert!(obj.is_live());
    }
}
