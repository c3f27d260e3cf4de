use crate::color::ColorScale;
use crate::data::model::FeatureDataset;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded dataset (None until a file is loaded).
    pub dataset: Option<FeatureDataset>,

    /// Colour scale spanning the centroid series.
    pub color_scale: Option<ColorScale>,

    /// Display name of the loaded file.
    pub source_name: Option<String>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,

    /// Whether a file loading operation is in progress.
    pub loading: bool,

    /// Marker radius used in the scatter plot.
    pub point_radius: f32,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            dataset: None,
            color_scale: None,
            source_name: None,
            status_message: None,
            loading: false,
            point_radius: 2.5,
        }
    }
}

impl AppState {
    /// Ingest a newly loaded dataset and rebuild the colour scale.
    pub fn set_dataset(&mut self, dataset: FeatureDataset, source: impl Into<String>) {
        self.color_scale = ColorScale::from_values(&dataset.color);
        self.source_name = Some(source.into());
        self.dataset = Some(dataset);
        self.status_message = None;
        self.loading = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_dataset_rebuilds_scale_and_clears_status() {
        let mut state = AppState::default();
        state.status_message = Some("Error: old".to_string());

        let ds = FeatureDataset::new(vec![120.5], vec![0.8], vec![0.42]);
        state.set_dataset(ds, "data/out.csv");

        assert!(state.dataset.is_some());
        assert!(state.color_scale.is_some());
        assert_eq!(state.source_name.as_deref(), Some("data/out.csv"));
        assert_eq!(state.status_message, None);
        assert!(!state.loading);
    }

    #[test]
    fn empty_dataset_has_no_scale() {
        let mut state = AppState::default();
        state.set_dataset(
            FeatureDataset::new(Vec::new(), Vec::new(), Vec::new()),
            "empty.csv",
        );
        assert!(state.color_scale.is_none());
    }
}
