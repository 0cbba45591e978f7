//! Generational entity handles
//!
//! Live decals and effects are addressed by handles rather than references.
//! A handle is a slot index plus the generation of that slot; reaping an
//! effect bumps the generation, so stale handles stop matching instead of
//! pointing at whatever reused the slot.

/// A slot index paired with the slot's generation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Entity {
    index: u32,
    generation: u32,
}

impl Entity {
    pub(crate) fn new(index: u32, generation: u32) -> Self {
        Self { index, generation }
    }

    pub fn index(&self) -> u32 {
        self.index
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }
}

/// Hands out entity handles and tracks which ones are alive
#[derive(Debug, Default)]
pub struct EntityAllocator {
    /// Current generation per slot
    generations: Vec<u32>,
    /// Slots free for reuse (LIFO)
    free_slots: Vec<u32>,
    alive: u32,
}

impl EntityAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allocate(&mut self) -> Entity {
        self.alive += 1;
        match self.free_slots.pop() {
            Some(index) => Entity::new(index, self.generations[index as usize]),
            None => {
                let index = self.generations.len() as u32;
                self.generations.push(0);
                Entity::new(index, 0)
            }
        }
    }

    /// Retire `entity`; returns false if it was already dead
    pub fn free(&mut self, entity: Entity) -> bool {
        if !self.is_alive(entity) {
            return false;
        }
        let slot = &mut self.generations[entity.index as usize];
        *slot = slot.wrapping_add(1);
        self.free_slots.push(entity.index);
        self.alive -= 1;
        true
    }

    pub fn is_alive(&self, entity: Entity) -> bool {
        self.generations
            .get(entity.index as usize)
            .is_some_and(|&generation| generation == entity.generation)
    }

    pub fn alive_count(&self) -> u32 {
        self.alive
    }

    /// Retire every handle at once
    pub fn clear(&mut self) {
        self.free_slots.clear();
        for (index, generation) in self.generations.iter_mut().enumerate() {
            *generation = generation.wrapping_add(1);
            self.free_slots.push(index as u32);
        }
        self.alive = 0;
    }
}

/// Handle to a live decal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DecalId(pub(crate) Entity);

/// Handle to a live effect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EffectId(pub(crate) Entity);

impl DecalId {
    pub fn entity(&self) -> Entity {
        self.0
    }
}

impl EffectId {
    pub fn entity(&self) -> Entity {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allocate_and_free() {
        let mut alloc = EntityAllocator::new();
        let a = alloc.allocate();
        let b = alloc.allocate();
        assert_eq!(alloc.alive_count(), 2);

        assert!(alloc.free(a));
        assert!(!alloc.free(a));
        assert!(!alloc.is_alive(a));
        assert!(alloc.is_alive(b));
        assert_eq!(alloc.alive_count(), 1);
    }

    #[test]
    fn test_reused_slot_gets_new_generation() {
        let mut alloc = EntityAllocator::new();
        let old = alloc.allocate();
        alloc.free(old);

        let new = alloc.allocate();
        assert_eq!(new.index(), old.index());
        assert_ne!(new.generation(), old.generation());
        assert!(!alloc.is_alive(old));
        assert!(alloc.is_alive(new));
    }

    #[test]
    fn test_clear_invalidates_everything() {
        let mut alloc = EntityAllocator::new();
        let handles: Vec<_> = (0..4).map(|_| alloc.allocate()).collect();
        alloc.clear();

        assert_eq!(alloc.alive_count(), 0);
        assert!(handles.iter().all(|&h| !alloc.is_alive(h)));
        let fresh = alloc.allocate();
        assert!(alloc.is_alive(fresh));
    }
}
