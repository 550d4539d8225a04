// Panel refreshers - fetch one endpoint and update one panel
use crate::application::dashboard_api::DashboardApi;
use crate::application::surface::{ChartHandle, ChartRenderer, Document, MapRenderer};
use crate::domain::chart::{ChartSeries, ChartSpec, ChartStyles};
use crate::domain::filters::{FilterSelection, QueryString};
use crate::domain::map::{MapResult, MarkerSet};
use crate::domain::panel::{
    ChartPanel, Panel, PanelOutcome, AVG_AGE, DATA_SOURCE, MAP, MAP_COUNT, TOTAL_CRIMES,
    WEAPON_CRIMES,
};
use crate::domain::summary::Summary;
use crate::infrastructure::api_types::{MapResponse, SummaryResponse, VictimsResponse};
use crate::infrastructure::config::MapSettings;
use anyhow::Context;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

pub struct PanelRefresher {
    api: Arc<dyn DashboardApi>,
    document: Arc<dyn Document>,
    charts: Arc<dyn ChartRenderer>,
    map: Arc<dyn MapRenderer>,
    chart_styles: ChartStyles,
    map_settings: MapSettings,
    /// At most one live chart per panel
    chart_handles: Mutex<HashMap<ChartPanel, Box<dyn ChartHandle>>>,
    markers: Mutex<MarkerSet>,
}

impl PanelRefresher {
    pub fn new(
        api: Arc<dyn DashboardApi>,
        document: Arc<dyn Document>,
        charts: Arc<dyn ChartRenderer>,
        map: Arc<dyn MapRenderer>,
        chart_styles: ChartStyles,
        map_settings: MapSettings,
    ) -> Self {
        Self {
            api,
            document,
            charts,
            map,
            chart_styles,
            map_settings,
            chart_handles: Mutex::new(HashMap::new()),
            markers: Mutex::new(MarkerSet::default()),
        }
    }

    async fn fetch<T: DeserializeOwned>(&self, panel: Panel, query: &QueryString) -> anyhow::Result<T> {
        let path = panel.endpoint();
        let json = self
            .api
            .get_json(path, query)
            .await
            .with_context(|| format!("fetching {}", panel))?;
        serde_json::from_value(json).with_context(|| format!("unexpected payload from {}", path))
    }

    pub async fn refresh_summary(&self, filters: &FilterSelection) -> anyhow::Result<PanelOutcome> {
        let response: SummaryResponse = self.fetch(Panel::Summary, &filters.to_query()).await?;
        let summary = Summary::from(response);

        // The two headline figures are mandatory targets for this panel
        if !self.document.has_element(TOTAL_CRIMES) || !self.document.has_element(AVG_AGE) {
            return Ok(PanelOutcome::TargetMissing);
        }

        self.document.set_text(TOTAL_CRIMES, &summary.total_text());
        self.document.set_text(AVG_AGE, &summary.avg_age_text());

        if let Some(weapons) = summary.weapons_text() {
            self.document.set_text(WEAPON_CRIMES, &weapons);
        }
        if let Some(source) = &summary.data_source {
            self.document.set_text(DATA_SOURCE, source);
        }

        Ok(PanelOutcome::Rendered)
    }

    pub async fn refresh_chart(
        &self,
        chart: ChartPanel,
        filters: &FilterSelection,
    ) -> anyhow::Result<PanelOutcome> {
        let query = filters.project(chart.projection()).to_query();
        let panel = Panel::Chart(chart);

        let series = match chart {
            ChartPanel::Victim => {
                let response: VictimsResponse = self.fetch(panel, &query).await?;
                response.age_distribution
            }
            _ => self.fetch::<ChartSeries>(panel, &query).await?,
        };

        let target = chart.element_id();
        if !self.document.has_element(target) {
            return Ok(PanelOutcome::TargetMissing);
        }

        let spec = ChartSpec::for_panel(chart, series, &self.chart_styles);

        // Release-then-assign under one lock so the slot never holds two charts
        let mut handles = self
            .chart_handles
            .lock()
            .map_err(|_| anyhow::anyhow!("chart handle table poisoned"))?;
        if let Some(previous) = handles.remove(&chart) {
            previous.destroy();
        }
        let handle = self
            .charts
            .render(target, &spec)
            .with_context(|| format!("rendering {}", panel))?;
        handles.insert(chart, handle);

        Ok(PanelOutcome::Rendered)
    }

    pub async fn refresh_map(&self, filters: &FilterSelection) -> anyhow::Result<PanelOutcome> {
        let query = filters
            .to_query()
            .with_param("limit", &self.map_settings.limit.to_string());
        let response: MapResponse = self.fetch(Panel::Map, &query).await?;
        let result = MapResult::from(response);

        if !self.document.has_element(MAP) {
            return Ok(PanelOutcome::TargetMissing);
        }

        let next = MarkerSet::from_locations(&result.crimes, &self.map_settings.marker);

        let mut markers = self
            .markers
            .lock()
            .map_err(|_| anyhow::anyhow!("marker set poisoned"))?;

        self.map.clear_markers();
        self.document.set_text(MAP_COUNT, &result.count_text());

        for marker in next.markers() {
            self.map.add_marker(marker);
        }

        if next.is_empty() {
            tracing::debug!("No located records; map viewport left as is");
        } else if let Some(bounds) = next.bounds() {
            let padding = self.map_settings.fit_padding;
            self.map.fit_bounds(&bounds, (padding, padding));
        }

        tracing::debug!(
            "Map shows {} markers of {} records",
            next.len(),
            result.crimes.len()
        );
        *markers = next;

        Ok(PanelOutcome::Rendered)
    }

    pub fn marker_count(&self) -> usize {
        self.markers.lock().map(|m| m.len()).unwrap_or(0)
    }
}
