// ---------------------------------------------------------------------------
// FeatureDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The parsed dataset as three parallel coordinate series.
///
/// One entry per input row, in source row order.  Invariant: all three
/// vectors have the same length.
#[derive(Debug, Clone)]
pub struct FeatureDataset {
    /// Track duration (x axis).
    pub x: Vec<f64>,
    /// Danceability (y axis) – same length as `x`.
    pub y: Vec<f64>,
    /// Spectral centroid, mapped through the colour scale – same length as `x`.
    pub color: Vec<f64>,
}

impl FeatureDataset {
    /// Build a dataset from the three series.
    ///
    /// The loader guarantees equal lengths (each row contributes exactly one
    /// value per series); this is asserted here rather than re-checked.
    pub fn new(x: Vec<f64>, y: Vec<f64>, color: Vec<f64>) -> Self {
        debug_assert!(x.len() == y.len() && y.len() == color.len());
        FeatureDataset { x, y, color }
    }

    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Whether the dataset has no rows.
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// (min, max) of the duration series, `None` when empty.
    pub fn x_range(&self) -> Option<(f64, f64)> {
        min_max(&self.x)
    }

    /// (min, max) of the danceability series, `None` when empty.
    pub fn y_range(&self) -> Option<(f64, f64)> {
        min_max(&self.y)
    }

    /// (min, max) of the centroid series, `None` when empty.
    pub fn color_range(&self) -> Option<(f64, f64)> {
        min_max(&self.color)
    }
}

fn min_max(values: &[f64]) -> Option<(f64, f64)> {
    if values.is_empty() {
        return None;
    }
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for &v in values {
        min = min.min(v);
        max = max.max(v);
    }
    Some((min, max))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranges_of_populated_dataset() {
        let ds = FeatureDataset::new(
            vec![120.5, 200.0, 95.0],
            vec![0.8, 0.3, 0.6],
            vec![0.42, 0.9, 0.1],
        );
        assert_eq!(ds.len(), 3);
        assert!(!ds.is_empty());
        assert_eq!(ds.x_range(), Some((95.0, 200.0)));
        assert_eq!(ds.y_range(), Some((0.3, 0.8)));
        assert_eq!(ds.color_range(), Some((0.1, 0.9)));
    }

    #[test]
    fn empty_dataset_has_no_ranges() {
        let ds = FeatureDataset::new(Vec::new(), Vec::new(), Vec::new());
        assert!(ds.is_empty());
        assert_eq!(ds.len(), 0);
        assert_eq!(ds.x_range(), None);
        assert_eq!(ds.color_range(), None);
    }
}
