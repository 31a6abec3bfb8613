use serde::{Deserialize, Serialize};

/// One named value series inside a chart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChartDataset {
    pub label: String,
    pub data: Vec<f64>,
}

impl ChartDataset {
    pub fn new(label: impl Into<String>, data: Vec<f64>) -> Self {
        Self {
            label: label.into(),
            data,
        }
    }
}

/// A chart-ready dataset bundle.
///
/// The engine generates these; the reporting screen just renders them. An
/// empty report still produces well-formed series with empty arrays.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub datasets: Vec<ChartDataset>,
}

impl ChartSeries {
    pub fn new(labels: Vec<String>, datasets: Vec<ChartDataset>) -> Self {
        Self { labels, datasets }
    }

    pub fn empty() -> Self {
        Self {
            labels: Vec::new(),
            datasets: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty() && self.datasets.iter().all(|dataset| dataset.data.is_empty())
    }
}
