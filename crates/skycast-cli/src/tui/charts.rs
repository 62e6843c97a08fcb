//! Chart models owned by the dashboard orchestrator.
//!
//! Chart state lives in an explicit registry keyed by chart identifier
//! rather than in handles stashed on ambient shared state. Rendering
//! projects whatever models are present, and destroying a chart is an
//! explicit operation — after [`ChartRegistry::clear`] the chart areas
//! render empty.

use std::collections::HashMap;

use skycast_types::ForecastSample;

/// Identifier for one of the dashboard's chart surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartId {
    /// Temperature over the forecast series.
    Temperature,
    /// Relative humidity over the forecast series.
    Humidity,
}

/// Data for one rendered chart.
#[derive(Debug, Clone)]
pub struct ChartModel {
    /// Chart title, e.g. "Temperature (°C)".
    pub label: String,
    /// Suffix appended to y-axis labels.
    pub unit_suffix: &'static str,
    /// (Unix seconds, value) points over the full 3-hour series.
    pub points: Vec<(f64, f64)>,
    /// X-axis bounds in Unix seconds.
    pub x_bounds: [f64; 2],
    /// Y-axis bounds with headroom around the data.
    pub y_bounds: [f64; 2],
}

impl ChartModel {
    /// Build a chart model from the forecast series, with `value`
    /// extracting the plotted metric.
    pub fn from_series(
        label: String,
        unit_suffix: &'static str,
        samples: &[ForecastSample],
        value: impl Fn(&ForecastSample) -> f64,
    ) -> Self {
        let points: Vec<(f64, f64)> = samples
            .iter()
            .map(|s| (s.unix_timestamp() as f64, value(s)))
            .collect();

        let x_bounds = match (points.first(), points.last()) {
            (Some(first), Some(last)) => [first.0, last.0],
            _ => [0.0, 1.0],
        };

        let y_bounds = if points.is_empty() {
            [0.0, 1.0]
        } else {
            let (min, max) = points.iter().fold(
                (f64::INFINITY, f64::NEG_INFINITY),
                |(min, max), &(_, y)| (min.min(y), max.max(y)),
            );
            let pad = ((max - min) * 0.1).max(1.0);
            [min - pad, max + pad]
        };

        Self {
            label,
            unit_suffix,
            points,
            x_bounds,
            y_bounds,
        }
    }
}

/// Registry mapping chart identifiers to their current models.
#[derive(Debug, Default)]
pub struct ChartRegistry {
    charts: HashMap<ChartId, ChartModel>,
}

impl ChartRegistry {
    /// Install a model, replacing any chart already present for `id`.
    pub fn install(&mut self, id: ChartId, model: ChartModel) {
        self.destroy_if_present(id);
        self.charts.insert(id, model);
    }

    /// Remove the chart for `id` if present; returns whether one existed.
    pub fn destroy_if_present(&mut self, id: ChartId) -> bool {
        self.charts.remove(&id).is_some()
    }

    /// Destroy all charts.
    pub fn clear(&mut self) {
        self.charts.clear();
    }

    /// The current model for `id`, if one is installed.
    #[must_use]
    pub fn get(&self, id: ChartId) -> Option<&ChartModel> {
        self.charts.get(&id)
    }

    /// Whether no charts are installed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.charts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(unix_secs: i64, temperature: f32, humidity: f32) -> ForecastSample {
        ForecastSample::from_unix(unix_secs, temperature, humidity, 800, "clear sky").unwrap()
    }

    #[test]
    fn test_model_points_follow_the_series() {
        let samples = vec![sample(1_000, 10.0, 50.0), sample(2_000, 14.0, 60.0)];
        let model = ChartModel::from_series("Temperature (°C)".into(), "°C", &samples, |s| {
            f64::from(s.temperature)
        });

        assert_eq!(model.points, vec![(1_000.0, 10.0), (2_000.0, 14.0)]);
        assert_eq!(model.x_bounds, [1_000.0, 2_000.0]);
        assert!(model.y_bounds[0] < 10.0);
        assert!(model.y_bounds[1] > 14.0);
    }

    #[test]
    fn test_empty_series_gets_placeholder_bounds() {
        let model = ChartModel::from_series("Humidity (%)".into(), "%", &[], |s| {
            f64::from(s.humidity)
        });
        assert!(model.points.is_empty());
        assert_eq!(model.x_bounds, [0.0, 1.0]);
        assert_eq!(model.y_bounds, [0.0, 1.0]);
    }

    #[test]
    fn test_registry_install_and_destroy() {
        let samples = vec![sample(1_000, 10.0, 50.0)];
        let mut registry = ChartRegistry::default();
        assert!(registry.is_empty());
        assert!(!registry.destroy_if_present(ChartId::Temperature));

        registry.install(
            ChartId::Temperature,
            ChartModel::from_series("Temperature (°C)".into(), "°C", &samples, |s| {
                f64::from(s.temperature)
            }),
        );
        assert!(registry.get(ChartId::Temperature).is_some());
        assert!(registry.get(ChartId::Humidity).is_none());

        assert!(registry.destroy_if_present(ChartId::Temperature));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_clear_destroys_everything() {
        let samples = vec![sample(1_000, 10.0, 50.0)];
        let mut registry = ChartRegistry::default();
        for (id, suffix) in [(ChartId::Temperature, "°C"), (ChartId::Humidity, "%")] {
            registry.install(
                id,
                ChartModel::from_series(format!("({suffix})"), suffix, &samples, |s| {
                    f64::from(s.humidity)
                }),
            );
        }
        registry.clear();
        assert!(registry.is_empty());
    }
}
