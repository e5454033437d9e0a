
use crate::data::ColumnSeed;

pub fn column_data() -> Vec<ColumnSeed> {
    vec![
        ColumnSeed { height: 3, index: 0, values: vec![] },
        ColumnSeed { height: 4, index: 1, values: vec![2.0, 6.0, 18.0, 54.0] },
        ColumnSeed { height: 5, index: 2, values: vec![0.5, 0.0, 1.5, 0.0, 2.0] }
    ]
}

pub fn noise_column(height: usize, index: isize) -> ColumnSeed {
    let mut values: Vec<f64> = vec![];
    for _ in 0..height {
        let f: f64 = rand::random();
        values.push(f);
    }
    ColumnSeed { height, index, values }
}
