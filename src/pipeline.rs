
use crate::column::Column;
use crate::transform::Transform;
use crate::{ColumnError, Descriptive};

/// An ordered list of transforms applied to a column as one run.
pub struct Pipeline {
    steps: Vec<Transform>
}

impl Pipeline {
    pub fn build(steps: Vec<Transform>) -> Pipeline {
        Pipeline { steps }
    }

    pub fn get_steps(&self) -> &Vec<Transform> {
        &self.steps
    }

    pub fn run<'c>(&self, column: &'c mut Column) -> Result<&'c mut Column, ColumnError> {
        for step in &self.steps {
            if let Err(e) = step.apply(column) {
                let mut message = String::from("Unable to apply ");
                message.push_str(&step.to_string()[..]);
                message.push_str(" to ");
                message.push_str(&column.default_name()[..]);
                message.push_str(". Error: ");
                message.push_str(e.message());
                return Err(ColumnError::new(message));
            }
        }

        Ok(column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(column: &Column) -> Vec<f64> {
        column.get_cells().iter().map(|c| c.borrow().get_value()).collect()
    }

    #[test]
    fn run_applies_steps_in_order() {
        let pipeline = Pipeline::build(vec![
            Transform::Normalise,
            Transform::Round(2)
        ]);
        let mut column = Column::build(3, 0);
        pipeline.run(&mut column).unwrap();
        assert_eq!(values(&column), vec![0.33, 0.33, 0.33]);
    }

    #[test]
    fn run_wraps_step_failure() {
        let pipeline = Pipeline::build(vec![
            Transform::Normalise,
            Transform::ShiftWith { value: 1.0, position: 9 }
        ]);
        let mut column = Column::build(2, 3);
        let err = pipeline.run(&mut column).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("Shift With"));
        assert!(message.contains("Column 3"));
        // the failing step left the first step's work in place
        assert_eq!(values(&column), vec![0.5, 0.5]);
    }

    #[test]
    fn empty_pipeline_is_noop() {
        let pipeline = Pipeline::build(vec![]);
        let mut column = Column::build(2, 0);
        pipeline.run(&mut column).unwrap();
        assert_eq!(values(&column), vec![0.0, 0.0]);
    }
}
