
use uuid::Uuid;

/// A single numeric slot within a column, fixed to its row position.
///
/// The cell keeps the identity of its owning column for lookup purposes
/// only; ownership stays with the column that built it.
#[derive(Debug)]
pub struct Cell {
    value: f64,
    row: usize,
    column: Uuid
}

impl Cell {
    pub(crate) fn build(column: Uuid, row: usize) -> Cell {
        Cell { value: 0.0, row, column }
    }

    pub fn get_value(&self) -> f64 {
        self.value
    }

    /// Replaces the stored value unconditionally. NaN and infinities
    /// are accepted as-is and propagate through later arithmetic.
    pub fn set_value(&mut self, v: f64) {
        self.value = v;
    }

    pub fn get_row(&self) -> usize {
        self.row
    }

    pub fn column_id(&self) -> Uuid {
        self.column
    }
}

impl ToString for Cell {
    fn to_string(&self) -> String {
        self.value.to_string()
    }
}
