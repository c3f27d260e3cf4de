use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Continuous colour scale: centroid value → Color32
// ---------------------------------------------------------------------------

/// Hue endpoints of the ramp: cold blue for low values, warm red for high.
const HUE_LOW: f32 = 240.0;
const HUE_HIGH: f32 = 0.0;

/// Maps values from a numeric range onto a continuous hue ramp.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorScale {
    min: f64,
    max: f64,
}

impl ColorScale {
    /// Build a scale spanning the min/max of `values`.  `None` when empty.
    pub fn from_values(values: &[f64]) -> Option<Self> {
        let first = *values.first()?;
        let (min, max) = values
            .iter()
            .fold((first, first), |(lo, hi), &v| (lo.min(v), hi.max(v)));
        Some(ColorScale { min, max })
    }

    /// Colour for a single value.  Out-of-range values clamp to the ramp
    /// ends; a degenerate range (min == max) maps everything to the midpoint.
    pub fn color_for(&self, value: f64) -> Color32 {
        let range = self.max - self.min;
        let t = if range.abs() < f64::EPSILON {
            0.5
        } else {
            ((value - self.min) / range).clamp(0.0, 1.0)
        };
        ramp_color(t as f32)
    }

    /// `n` evenly spaced (value, colour) pairs for the legend, low to high.
    pub fn legend_stops(&self, n: usize) -> Vec<(f64, Color32)> {
        if n == 0 {
            return Vec::new();
        }
        if n == 1 {
            let mid = (self.min + self.max) / 2.0;
            return vec![(mid, self.color_for(mid))];
        }
        (0..n)
            .map(|i| {
                let t = i as f64 / (n - 1) as f64;
                let value = self.min + t * (self.max - self.min);
                (value, self.color_for(value))
            })
            .collect()
    }
}

/// Evaluate the ramp at `t` in `[0, 1]`.
fn ramp_color(t: f32) -> Color32 {
    let hue = HUE_LOW + (HUE_HIGH - HUE_LOW) * t;
    let hsl = Hsl::new(hue, 0.75, 0.55);
    let rgb: Srgb = hsl.into_color();
    Color32::from_rgb(
        (rgb.red * 255.0) as u8,
        (rgb.green * 255.0) as u8,
        (rgb.blue * 255.0) as u8,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_series_has_no_scale() {
        assert!(ColorScale::from_values(&[]).is_none());
    }

    #[test]
    fn endpoints_map_to_ramp_ends() {
        let scale = ColorScale::from_values(&[0.1, 0.9, 0.42]).unwrap();
        assert_eq!(scale.color_for(0.1), ramp_color(0.0));
        assert_eq!(scale.color_for(0.9), ramp_color(1.0));
    }

    #[test]
    fn out_of_range_values_clamp() {
        let scale = ColorScale::from_values(&[0.0, 1.0]).unwrap();
        assert_eq!(scale.color_for(-5.0), scale.color_for(0.0));
        assert_eq!(scale.color_for(42.0), scale.color_for(1.0));
    }

    #[test]
    fn degenerate_range_maps_to_midpoint() {
        let scale = ColorScale::from_values(&[0.5, 0.5, 0.5]).unwrap();
        assert_eq!(scale.color_for(0.5), ramp_color(0.5));
        assert_eq!(scale.color_for(123.0), ramp_color(0.5));
    }

    #[test]
    fn legend_stops_span_the_range() {
        let scale = ColorScale::from_values(&[1.0, 3.0]).unwrap();
        let stops = scale.legend_stops(5);
        assert_eq!(stops.len(), 5);
        assert_eq!(stops[0].0, 1.0);
        assert_eq!(stops[4].0, 3.0);
        assert_eq!(stops[2].0, 2.0);
        assert_eq!(stops[0].1, ramp_color(0.0));
        assert_eq!(stops[4].1, ramp_color(1.0));
    }
}
