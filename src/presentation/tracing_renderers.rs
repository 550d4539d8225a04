// Headless chart and map renderers that report draw calls through tracing
use crate::application::surface::{ChartHandle, ChartRenderer, MapRenderer};
use crate::domain::chart::ChartSpec;
use crate::domain::map::{Bounds, LatLng, Marker};
use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Default)]
pub struct TracingChartRenderer {
    next_id: AtomicU64,
}

struct TracingChartHandle {
    id: u64,
    target: String,
}

impl ChartHandle for TracingChartHandle {
    fn destroy(self: Box<Self>) {
        tracing::debug!("Destroyed chart #{} on {}", self.id, self.target);
    }
}

impl ChartRenderer for TracingChartRenderer {
    fn render(&self, target: &str, spec: &ChartSpec) -> anyhow::Result<Box<dyn ChartHandle>> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let description = serde_json::to_string(spec)?;

        tracing::info!(
            "Rendered {:?} chart #{} on {} with {} labels",
            spec.kind,
            id,
            target,
            spec.labels.len()
        );
        tracing::trace!("Chart #{} description: {}", id, description);

        Ok(Box::new(TracingChartHandle {
            id,
            target: target.to_string(),
        }))
    }
}

#[derive(Debug, Default)]
pub struct TracingMapRenderer;

impl MapRenderer for TracingMapRenderer {
    fn set_view(&self, center: LatLng, zoom: u8) {
        tracing::info!("Map view set to ({}, {}) at zoom {}", center.lat, center.lon, zoom);
    }

    fn add_tile_layer(&self, url: &str, attribution: &str, max_zoom: u8) {
        tracing::info!("Tile layer {} ({}), max zoom {}", url, attribution, max_zoom);
    }

    fn clear_markers(&self) {
        tracing::debug!("Cleared map markers");
    }

    fn add_marker(&self, marker: &Marker) {
        tracing::trace!(
            "Marker at ({}, {}): {}",
            marker.position.lat,
            marker.position.lon,
            marker.popup
        );
    }

    fn fit_bounds(&self, bounds: &Bounds, padding: (u32, u32)) {
        tracing::info!(
            "Map fitted to ({}, {})-({}, {}) with padding {:?}",
            bounds.south_west.lat,
            bounds.south_west.lon,
            bounds.north_east.lat,
            bounds.north_east.lon,
            padding
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::chart::{ChartSeries, ChartStyles};
    use crate::domain::panel::ChartPanel;

    #[test]
    fn test_chart_handles_get_distinct_ids() {
        let renderer = TracingChartRenderer::default();
        let spec = ChartSpec::for_panel(ChartPanel::Area, ChartSeries::default(), &ChartStyles::default());

        let first = renderer.render("areaChart", &spec).unwrap();
        let second = renderer.render("areaChart", &spec).unwrap();
        assert_eq!(renderer.next_id.load(Ordering::Relaxed), 2);

        first.destroy();
        second.destroy();
    }
}
