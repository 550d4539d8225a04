// Declarative chart descriptions handed to the chart renderer
use super::panel::ChartPanel;
use serde::{Deserialize, Serialize};

/// Parallel label/value lists as returned by the aggregate endpoints
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub data: Vec<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Bar,
    Line,
    Pie,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LegendPosition {
    Top,
    Bottom,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub data: Vec<f64>,
    pub background_color: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    pub border_width: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tension: Option<f64>,
    pub fill: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_bar_thickness: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    pub responsive: bool,
    pub maintain_aspect_ratio: bool,
    pub legend_display: bool,
    pub legend_position: LegendPosition,
    /// Only meaningful for axis charts
    pub y_begin_at_zero: bool,
    pub x_auto_skip: bool,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            responsive: true,
            maintain_aspect_ratio: false,
            legend_display: true,
            legend_position: LegendPosition::Top,
            y_begin_at_zero: true,
            x_auto_skip: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
    pub options: ChartOptions,
}

/// Fill and stroke colour for a single-series chart
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct SeriesColors {
    pub background: String,
    pub border: String,
}

impl SeriesColors {
    fn new(background: &str, border: &str) -> Self {
        Self {
            background: background.to_string(),
            border: border.to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ChartStyles {
    pub area: SeriesColors,
    pub time: SeriesColors,
    pub victim: SeriesColors,
    pub type_palette: Vec<String>,
}

impl Default for ChartStyles {
    fn default() -> Self {
        Self {
            area: SeriesColors::new("rgba(59, 130, 246, 0.7)", "rgba(59, 130, 246, 1)"),
            time: SeriesColors::new("rgba(16, 185, 129, 0.1)", "rgba(16, 185, 129, 1)"),
            victim: SeriesColors::new("rgba(139, 92, 246, 0.7)", "rgba(139, 92, 246, 1)"),
            type_palette: [
                "rgba(239, 68, 68, 0.7)",
                "rgba(59, 130, 246, 0.7)",
                "rgba(16, 185, 129, 0.7)",
                "rgba(245, 158, 11, 0.7)",
                "rgba(139, 92, 246, 0.7)",
                "rgba(236, 72, 153, 0.7)",
                "rgba(20, 184, 166, 0.7)",
                "rgba(249, 115, 22, 0.7)",
                "rgba(99, 102, 241, 0.7)",
                "rgba(220, 38, 38, 0.7)",
            ]
            .iter()
            .map(|c| c.to_string())
            .collect(),
        }
    }
}

impl ChartSpec {
    /// Build the chart description a panel shows for the given series
    pub fn for_panel(panel: ChartPanel, series: ChartSeries, styles: &ChartStyles) -> Self {
        match panel {
            ChartPanel::Area => Self::area(series, &styles.area),
            ChartPanel::Time => Self::time(series, &styles.time),
            ChartPanel::Type => Self::crime_types(series, &styles.type_palette),
            ChartPanel::Victim => Self::victim_ages(series, &styles.victim),
        }
    }

    fn area(series: ChartSeries, colors: &SeriesColors) -> Self {
        Self {
            kind: ChartKind::Bar,
            labels: series.labels,
            datasets: vec![Dataset {
                label: Some("Number of Crimes".to_string()),
                data: series.data,
                background_color: vec![colors.background.clone()],
                border_color: Some(colors.border.clone()),
                border_width: 1,
                tension: None,
                fill: false,
                max_bar_thickness: Some(36),
            }],
            options: ChartOptions {
                legend_display: false,
                x_auto_skip: true,
                ..ChartOptions::default()
            },
        }
    }

    fn time(series: ChartSeries, colors: &SeriesColors) -> Self {
        Self {
            kind: ChartKind::Line,
            labels: series.labels,
            datasets: vec![Dataset {
                label: Some("Crimes by Hour".to_string()),
                data: series.data,
                background_color: vec![colors.background.clone()],
                border_color: Some(colors.border.clone()),
                border_width: 2,
                tension: Some(0.4),
                fill: true,
                max_bar_thickness: None,
            }],
            options: ChartOptions {
                x_auto_skip: true,
                ..ChartOptions::default()
            },
        }
    }

    fn crime_types(series: ChartSeries, palette: &[String]) -> Self {
        // Slices beyond the palette length reuse colours from the start
        let background_color = if palette.is_empty() {
            Vec::new()
        } else {
            palette.iter().cycle().take(series.data.len()).cloned().collect()
        };

        Self {
            kind: ChartKind::Pie,
            labels: series.labels,
            datasets: vec![Dataset {
                label: None,
                data: series.data,
                background_color,
                border_color: None,
                border_width: 1,
                tension: None,
                fill: false,
                max_bar_thickness: None,
            }],
            options: ChartOptions {
                legend_position: LegendPosition::Bottom,
                y_begin_at_zero: false,
                ..ChartOptions::default()
            },
        }
    }

    fn victim_ages(series: ChartSeries, colors: &SeriesColors) -> Self {
        Self {
            kind: ChartKind::Bar,
            labels: series.labels,
            datasets: vec![Dataset {
                label: Some("Number of Victims".to_string()),
                data: series.data,
                background_color: vec![colors.background.clone()],
                border_color: Some(colors.border.clone()),
                border_width: 1,
                tension: None,
                fill: false,
                max_bar_thickness: None,
            }],
            options: ChartOptions::default(),
        }
    }
}
