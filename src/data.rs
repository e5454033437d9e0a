
use crate::column::Column;

use self::mock::column_data;

/// Literal description of a column to assemble: the values fill rows
/// from the top, any remaining rows keep their zero initialisation.
pub struct ColumnSeed {
    pub height: usize,
    pub index: isize,
    pub values: Vec<f64>
}

pub fn get_columns() -> Vec<Column> {
    build_columns(column_data())
}

fn build_columns(data: Vec<ColumnSeed>) -> Vec<Column> {
    data.iter().map(|seed| build_column(seed)).collect()
}

pub fn build_column(seed: &ColumnSeed) -> Column {
    let column = Column::build(seed.height, seed.index);
    for (row, value) in seed.values.iter().enumerate() {
        if row >= column.height() {
            break;
        }
        column.get_cells()[row].borrow_mut().set_value(*value);
    }
    column
}

pub mod mock;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_fills_rows_in_order() {
        let seed = ColumnSeed { height: 3, index: 2, values: vec![1.0, 2.0] };
        let column = build_column(&seed);
        assert_eq!(column.get_index(), 2);
        let values: Vec<f64> = column.get_cells().iter().map(|c| c.borrow().get_value()).collect();
        assert_eq!(values, vec![1.0, 2.0, 0.0]);
    }

    #[test]
    fn seed_excess_values_ignored() {
        let seed = ColumnSeed { height: 1, index: 0, values: vec![1.0, 2.0, 3.0] };
        let column = build_column(&seed);
        assert_eq!(column.height(), 1);
        assert_eq!(column.get_sum(), 1.0);
    }

    #[test]
    fn mock_columns_assemble() {
        let columns = get_columns();
        assert!(columns.len() > 0);
        for column in &columns {
            assert_eq!(column.height(), column.get_cells().len());
        }
    }
}
