// Dashboard service - Orchestrates filter loading and refresh cycles
use crate::application::dashboard_api::DashboardApi;
use crate::application::panel_refresher::PanelRefresher;
use crate::application::surface::{ChartRenderer, Document, MapRenderer};
use crate::domain::filters::{
    month_options, FilterOptions, FilterSelection, QueryString, AREA_FILTER, MONTH_FILTER,
    YEAR_FILTER,
};
use crate::domain::panel::{ChartPanel, Panel, PanelOutcome, FILTERS_ENDPOINT};
use crate::infrastructure::api_types::FiltersResponse;
use crate::infrastructure::config::{DashboardConfig, MapSettings};
use anyhow::Context;
use std::future::Future;
use std::sync::Arc;
use std::time::Instant;

pub struct DashboardService {
    api: Arc<dyn DashboardApi>,
    document: Arc<dyn Document>,
    map: Arc<dyn MapRenderer>,
    map_settings: MapSettings,
    refresher: PanelRefresher,
}

impl DashboardService {
    pub fn new(
        api: Arc<dyn DashboardApi>,
        document: Arc<dyn Document>,
        charts: Arc<dyn ChartRenderer>,
        map: Arc<dyn MapRenderer>,
        config: DashboardConfig,
    ) -> Self {
        let refresher = PanelRefresher::new(
            api.clone(),
            document.clone(),
            charts,
            map.clone(),
            config.charts,
            config.map.clone(),
        );
        Self {
            api,
            document,
            map,
            map_settings: config.map,
            refresher,
        }
    }

    /// Page-load sequence: map first, then filter options and the first refresh together
    pub async fn start(&self) {
        self.init_map();
        futures::join!(self.load_filters(), self.refresh_all());
    }

    pub fn init_map(&self) {
        let settings = &self.map_settings;
        self.map.set_view(settings.center, settings.zoom);
        self.map
            .add_tile_layer(&settings.tile_url, &settings.attribution, settings.max_zoom);
    }

    /// Populate the filter controls. Failures are logged, never raised.
    pub async fn load_filters(&self) {
        match self.fetch_filter_options().await {
            Ok(options) => {
                self.document
                    .append_options(AREA_FILTER, &options.area_options());
                self.document
                    .append_options(YEAR_FILTER, &options.year_options());
            }
            Err(e) => {
                tracing::error!("Error loading filters: {:#}", e);
            }
        }

        // Month names are local, so the control is usable even without the backend
        self.document.append_options(MONTH_FILTER, &month_options());
    }

    async fn fetch_filter_options(&self) -> anyhow::Result<FilterOptions> {
        let json = self
            .api
            .get_json(FILTERS_ENDPOINT, &QueryString::default())
            .await?;
        let response: FiltersResponse =
            serde_json::from_value(json).context("unexpected filters payload")?;
        Ok(response.into())
    }

    /// Markers placed by the most recent map refresh
    pub fn marker_count(&self) -> usize {
        self.refresher.marker_count()
    }

    /// Current selection; a missing control reads as "no constraint"
    pub fn read_filters(&self) -> FilterSelection {
        let value = |id: &str| self.document.select_value(id).unwrap_or_default();
        FilterSelection::new(value(AREA_FILTER), value(YEAR_FILTER), value(MONTH_FILTER))
    }

    /// Run one refresh cycle: every panel refreshes concurrently from a single
    /// snapshot and the cycle ends once all of them have settled.
    ///
    /// Overlapping cycles are not cancelled or serialized. Each panel ends up
    /// showing whichever response resolved last, which can leave panels
    /// describing different selections.
    pub async fn refresh_all(&self) {
        let filters = self.read_filters();
        tracing::info!("Refreshing dashboard ({})", filters);
        let started = Instant::now();

        let r = &self.refresher;
        futures::join!(
            settle(Panel::Summary, r.refresh_summary(&filters)),
            settle(
                Panel::Chart(ChartPanel::Area),
                r.refresh_chart(ChartPanel::Area, &filters)
            ),
            settle(
                Panel::Chart(ChartPanel::Time),
                r.refresh_chart(ChartPanel::Time, &filters)
            ),
            settle(
                Panel::Chart(ChartPanel::Type),
                r.refresh_chart(ChartPanel::Type, &filters)
            ),
            settle(
                Panel::Chart(ChartPanel::Victim),
                r.refresh_chart(ChartPanel::Victim, &filters)
            ),
            settle(Panel::Map, r.refresh_map(&filters)),
        );

        tracing::debug!(
            "Refresh cycle settled in {}ms",
            started.elapsed().as_millis()
        );
    }
}

/// Each panel owns its failure: log it and leave the panel as it was
async fn settle(panel: Panel, refresh: impl Future<Output = anyhow::Result<PanelOutcome>>) {
    match refresh.await {
        Ok(PanelOutcome::Rendered) => {}
        Ok(PanelOutcome::TargetMissing) => {
            tracing::debug!("Skipped {}: element not in document", panel);
        }
        Err(e) => {
            tracing::error!("Error updating {}: {:#}", panel, e);
        }
    }
}
