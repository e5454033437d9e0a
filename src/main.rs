
use std::error::Error;

use datacolumn::{data::{self, mock}, pipeline::Pipeline, transform::{Transform, TransformKind}, Descriptive};
use enum_iterator::all;

fn main() -> Result<(), Box<dyn Error>> {
    println!("Supported transforms:");
    for kind in all::<TransformKind>() {
        println!(" - {}", kind.default_name());
    }

    let pipeline = Pipeline::build(vec![
        Transform::Normalise,
        Transform::Round(2)
    ]);

    let mut columns = data::get_columns();
    for column in &mut columns {
        let column = pipeline.run(column)?;
        println!(
            "\n{} (height {}), sum {}",
            column.default_name(),
            column.height(),
            column.get_sum());
        println!("{}", column.to_string());
    }

    let mut noise = data::build_column(&mock::noise_column(5, 3));
    noise.round(3);
    noise.replace_zeros(0.001);
    println!("\n{} (rounded noise)", noise.default_name());
    println!("{}", noise.to_string());

    let mut progression = datacolumn::column::Column::build(4, 4);
    progression.geometric(2.0, 3.0, true).shift_with(99.0, 1)?;
    println!("\n{} (geometric with insert)", progression.default_name());
    println!("{}", progression.to_string());

    Ok(())
}
