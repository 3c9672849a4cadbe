//! Fixed-size two-dimensional storage used by the level.

/// Dense two-dimensional container mapping a column and row to an
/// optional occupant.
///
/// Slots are stored row-major and addressed as `row * columns + column`.
/// The grid is created once with its final extents and never resized;
/// an access outside those extents is a caller bug and panics rather
/// than reporting a recoverable error. An empty slot is a normal state
/// and is modelled as `None`.
#[derive(Clone, Debug)]
pub struct Grid<T> {
    columns: u32,
    rows: u32,
    slots: Vec<Option<T>>,
}

impl<T> Grid<T> {
    /// Creates a grid of empty slots with the provided extents.
    #[must_use]
    pub fn new(columns: u32, rows: u32) -> Self {
        let capacity = columns as usize * rows as usize;
        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, || None);
        Self {
            columns,
            rows,
            slots,
        }
    }

    /// Number of columns in the grid.
    #[must_use]
    pub const fn columns(&self) -> u32 {
        self.columns
    }

    /// Number of rows in the grid.
    #[must_use]
    pub const fn rows(&self) -> u32 {
        self.rows
    }

    /// Returns the occupant of the slot at the provided coordinates.
    ///
    /// # Panics
    /// Panics if `column` or `row` lies outside the grid extents.
    #[must_use]
    pub fn get(&self, column: u32, row: u32) -> Option<&T> {
        self.slots[self.index(column, row)].as_ref()
    }

    /// Stores or clears the slot at the provided coordinates.
    ///
    /// # Panics
    /// Panics if `column` or `row` lies outside the grid extents.
    pub fn set(&mut self, column: u32, row: u32, value: Option<T>) {
        let index = self.index(column, row);
        self.slots[index] = value;
    }

    /// Iterates over every occupied slot as `(column, row, occupant)`.
    pub fn occupied(&self) -> impl Iterator<Item = (u32, u32, &T)> {
        self.slots.iter().enumerate().filter_map(|(index, slot)| {
            slot.as_ref().map(|occupant| {
                let column = index as u32 % self.columns;
                let row = index as u32 / self.columns;
                (column, row, occupant)
            })
        })
    }

    fn index(&self, column: u32, row: u32) -> usize {
        assert!(
            column < self.columns && row < self.rows,
            "grid access out of bounds: ({column}, {row}) on a {}x{} grid",
            self.columns,
            self.rows
        );
        row as usize * self.columns as usize + column as usize
    }
}
