#[macro_export]
macro_rules! column_of {
    ($($v:expr),* $(,)?) => {
        {
            let values: Vec<f64> = vec![$($v as f64),*];
            let column = $crate::column::Column::build(values.len(), 0);
            for (row, value) in values.iter().enumerate() {
                column.get_cells()[row].borrow_mut().set_value(*value);
            }
            column
        }
    };
}
