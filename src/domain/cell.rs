/// Cell is one square of the life grid.
/// `age` counts consecutive generations the cell has been alive.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Cell {
    pub alive: bool,
    pub age: u32,
}

impl Cell {
    /// Dead cell, age 0
    pub const DEAD: Cell = Cell { alive: false, age: 0 };

    /// Cell that was just born this generation
    pub const NEWBORN: Cell = Cell { alive: true, age: 1 };

    /// Live cell that has not yet lived through a generation (initial seeding)
    pub const SEEDED: Cell = Cell { alive: true, age: 0 };

    pub const fn is_alive(self) -> bool {
        self.alive
    }

    /// Pure function computing the next state from the live neighbor count:
    /// 1. Live cell with 2-3 neighbors survives and ages by one
    /// 2. Dead cell with exactly 3 neighbors is born with age 1
    /// 3. Everything else is dead with age 0
    pub const fn evolve(self, neighbors: u8) -> Self {
        match (self.alive, neighbors) {
            (true, 2 | 3) => Cell {
                alive: true,
                age: self.age.saturating_add(1),
            },
            (false, 3) => Cell::NEWBORN,
            _ => Cell::DEAD,
        }
    }
}
