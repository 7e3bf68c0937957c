//! Fixed-stride decimation for display

use crate::models::SampleRow;

/// Every `stride`-th row starting at the first; strides of 0 or 1 keep all rows
///
/// Rows are borrowed, not averaged, so the view never invents values.
pub fn decimate(rows: &[SampleRow], stride: usize) -> Vec<&SampleRow> {
    rows.iter().step_by(stride.max(1)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SampleMatrix;
    use crate::stats::StatisticsEngine;

    fn rows(count: usize) -> Vec<SampleRow> {
        (0..count)
            .map(|i| SampleRow {
                depth: 1000.0 + i as f64,
                values: vec![Some(i as f64)],
            })
            .collect()
    }

    #[test]
    fn test_stride_three() {
        let rows = rows(10);
        let depths: Vec<f64> = decimate(&rows, 3).iter().map(|r| r.depth).collect();

        assert_eq!(depths, vec![1000.0, 1003.0, 1006.0, 1009.0]);
    }

    #[test]
    fn test_no_decimation() {
        let rows = rows(5);

        assert_eq!(decimate(&rows, 1).len(), 5);
        assert_eq!(decimate(&rows, 0).len(), 5);
    }

    #[test]
    fn test_stride_longer_than_rows() {
        let rows = rows(4);
        let view = decimate(&rows, 100);

        assert_eq!(view.len(), 1);
        assert_eq!(view[0].depth, 1000.0);
        assert!(decimate(&[], 3).is_empty());
    }

    #[test]
    fn test_statistics_unaffected() {
        let matrix = SampleMatrix::new(vec!["V".to_string()], rows(10));
        let engine = StatisticsEngine::default();

        let before = engine.compute_all(&matrix);
        let view = decimate(matrix.rows(), 3);
        let after = engine.compute_all(&matrix);

        assert_eq!(view.len(), 4);
        assert_eq!(before, after);
        assert_eq!(after.get("V").unwrap().count, 10);
        assert_eq!(after.get("V").unwrap().mean, 4.5);
    }
}
