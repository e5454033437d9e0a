
use enum_iterator::Sequence;

use crate::column::Column;
use crate::{ColumnError, Descriptive};

/// One deterministic whole-column operation together with its
/// parameters.
#[derive(Debug, Clone, strum_macros::Display)]
pub enum Transform {
    Normalise,
    Round(u32),
    #[strum(serialize="Replace Zeros")]
    ReplaceZeros(f64),
    Geometric { start: f64, ratio: f64, growing: bool },
    #[strum(serialize="Shift With")]
    ShiftWith { value: f64, position: isize }
}

#[derive(Debug, PartialEq, Sequence, strum_macros::Display)]
pub enum TransformKind {
    Normalise,
    Round,
    #[strum(serialize="Replace Zeros")]
    ReplaceZeros,
    Geometric,
    #[strum(serialize="Shift With")]
    ShiftWith
}

impl Transform {
    pub fn apply(&self, column: &mut Column) -> Result<(), ColumnError> {
        match self {
            Self::Normalise => {
                column.normalise();
                Ok(())
            },
            Self::Round(precision) => {
                column.round(*precision);
                Ok(())
            },
            Self::ReplaceZeros(replacement) => {
                column.replace_zeros(*replacement);
                Ok(())
            },
            Self::Geometric { start, ratio, growing } => {
                column.geometric(*start, *ratio, *growing);
                Ok(())
            },
            Self::ShiftWith { value, position } => {
                column.shift_with(*value, *position)?;
                Ok(())
            }
        }
    }

    pub fn kind(&self) -> TransformKind {
        match self {
            Self::Normalise => TransformKind::Normalise,
            Self::Round(_) => TransformKind::Round,
            Self::ReplaceZeros(_) => TransformKind::ReplaceZeros,
            Self::Geometric { .. } => TransformKind::Geometric,
            Self::ShiftWith { .. } => TransformKind::ShiftWith
        }
    }
}

impl Descriptive for TransformKind {
    fn default_name(&self) -> String {
        self.to_string()
    }

    fn name(&self) -> String {
        self.default_name()
    }
}
