
use lazy_static::lazy_static;

#[macro_use]
pub mod macros;

const MAX_TABLE_PRECISION: u32 = 9;

lazy_static! {
    static ref FACTOR_MAP: Vec<f64> = vec![1.0, 10.0, 100.0, 1e3, 1e4, 1e5, 1e6, 1e7, 1e8, 1e9];
}

/// Decimal factor `10^precision`, table-backed for the usual precisions.
pub fn pow10(precision: u32) -> f64 {
    if precision > MAX_TABLE_PRECISION {
        return 10f64.powi(precision as i32);
    }
    FACTOR_MAP[precision as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_factors() {
        assert_eq!(pow10(0), 1.0);
        assert_eq!(pow10(2), 100.0);
        assert_eq!(pow10(9), 1e9);
    }

    #[test]
    fn beyond_table() {
        assert_eq!(pow10(12), 1e12);
    }
}
