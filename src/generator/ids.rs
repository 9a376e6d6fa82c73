// src/generator/ids.rs

pub const PLAYER_START_ID: u32 = 1;
pub const GROUND_ID: u32 = 2;
/// Ids 3..=9 stay free for objects placed by hand in the editor.
pub const FIRST_GENERATED_ID: u32 = 10;

/// Hands out strictly increasing object ids. Never reuses one.
#[derive(Debug, Clone)]
pub struct ObjectIdAllocator {
    next: u32,
}

impl ObjectIdAllocator {
    pub fn starting_at(first: u32) -> Self {
        Self { next: first }
    }

    pub fn next_id(&mut self) -> u32 {
        let id = self.next;
        self.next += 1;
        id
    }
}

impl Default for ObjectIdAllocator {
    fn default() -> Self {
        Self::starting_at(FIRST_GENERATED_ID)
    }
}
