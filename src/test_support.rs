// Scripted API and recording renderers for unit tests
use crate::application::dashboard_api::{ApiError, DashboardApi};
use crate::application::surface::{ChartHandle, ChartRenderer, MapRenderer};
use crate::domain::chart::ChartSpec;
use crate::domain::filters::QueryString;
use crate::domain::map::{Bounds, LatLng, Marker};
use crate::presentation::memory_document::{dashboard_layout, MemoryDocument};
use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::{json, Value};
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use tokio::sync::oneshot;

pub fn document_with_layout(missing: &[&str]) -> MemoryDocument {
    MemoryDocument::new(
        dashboard_layout()
            .into_iter()
            .filter(|(id, _)| !missing.contains(id)),
    )
}

enum Scripted {
    Body(Value, Option<oneshot::Receiver<()>>),
    Failure,
}

#[derive(Default)]
struct FakeState {
    defaults: HashMap<String, Value>,
    queued: HashMap<String, VecDeque<Scripted>>,
    calls: Vec<(String, String)>,
}

/// Answers from per-path queues first, then per-path defaults
#[derive(Default)]
pub struct FakeApi {
    state: Mutex<FakeState>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sample_backend() -> Self {
        let api = Self::new();
        api.respond(
            "/api/filters",
            json!({"areas": ["All", "Downtown", "Harbor"], "years": ["All", 2022, "2023"]}),
        );
        api.respond(
            "/api/summary",
            json!({"total_crimes": 12345, "crimes_with_weapons": 234, "avg_victim_age": 32.7, "data_source": "sample"}),
        );
        api.respond(
            "/api/by_area",
            json!({"labels": ["Downtown", "Harbor"], "data": [120, 80]}),
        );
        api.respond(
            "/api/by_time",
            json!({"labels": ["0:00", "1:00"], "data": [3, 5]}),
        );
        api.respond(
            "/api/by_type",
            json!({"labels": ["Theft", "Assault"], "data": [40, 22]}),
        );
        api.respond(
            "/api/victims",
            json!({"age_distribution": {"labels": ["0-17", "18-29"], "data": [7, 19]}}),
        );
        api.respond(
            "/api/map",
            json!({"total": 200, "crimes": [
                {"lat": 34.05, "lon": -118.25, "crime": "Theft", "area": "Downtown"},
                {"lat": 34.10, "lon": -118.30, "crime": "Robbery", "area": "Harbor"}
            ]}),
        );
        api
    }

    pub fn respond(&self, path: &str, body: Value) {
        let mut state = self.state.lock().unwrap();
        state.defaults.insert(path.to_string(), body);
    }

    fn enqueue(&self, path: &str, scripted: Scripted) {
        let mut state = self.state.lock().unwrap();
        state
            .queued
            .entry(path.to_string())
            .or_default()
            .push_back(scripted);
    }

    pub fn respond_next(&self, path: &str, body: Value) {
        self.enqueue(path, Scripted::Body(body, None));
    }

    pub fn fail_next(&self, path: &str) {
        self.enqueue(path, Scripted::Failure);
    }

    /// Queue a response that is held back until the returned sender fires
    pub fn respond_gated(&self, path: &str, body: Value) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.enqueue(path, Scripted::Body(body, Some(rx)));
        tx
    }

    pub fn calls(&self) -> Vec<(String, String)> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn queries_for(&self, path: &str) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter(|(p, _)| p == path)
            .map(|(_, q)| q)
            .collect()
    }
}

#[async_trait]
impl DashboardApi for FakeApi {
    async fn get_json(&self, path: &str, query: &QueryString) -> Result<Value, ApiError> {
        let url = format!("http://fake{}?{}", path, query);
        let scripted = {
            let mut state = self.state.lock().unwrap();
            state.calls.push((path.to_string(), query.to_string()));
            match state.queued.get_mut(path).and_then(|q| q.pop_front()) {
                Some(scripted) => scripted,
                None => match state.defaults.get(path) {
                    Some(body) => Scripted::Body(body.clone(), None),
                    None => Scripted::Failure,
                },
            }
        };

        match scripted {
            Scripted::Body(body, gate) => {
                if let Some(gate) = gate {
                    let _ = gate.await;
                }
                Ok(body)
            }
            Scripted::Failure => Err(ApiError::Status {
                url,
                status: StatusCode::SERVICE_UNAVAILABLE,
                body: String::new(),
            }),
        }
    }
}

#[derive(Debug, Clone)]
pub struct RenderedChart {
    pub id: u64,
    pub target: String,
    pub spec: ChartSpec,
}

#[derive(Default)]
struct ChartLog {
    next_id: u64,
    rendered: Vec<RenderedChart>,
    destroyed: Vec<u64>,
}

#[derive(Default)]
pub struct RecordingCharts {
    log: Arc<Mutex<ChartLog>>,
}

struct RecordingHandle {
    id: u64,
    log: Arc<Mutex<ChartLog>>,
}

impl ChartHandle for RecordingHandle {
    fn destroy(self: Box<Self>) {
        self.log.lock().unwrap().destroyed.push(self.id);
    }
}

impl ChartRenderer for RecordingCharts {
    fn render(&self, target: &str, spec: &ChartSpec) -> anyhow::Result<Box<dyn ChartHandle>> {
        let mut log = self.log.lock().unwrap();
        let id = log.next_id;
        log.next_id += 1;
        log.rendered.push(RenderedChart {
            id,
            target: target.to_string(),
            spec: spec.clone(),
        });
        Ok(Box::new(RecordingHandle {
            id,
            log: self.log.clone(),
        }))
    }
}

impl RecordingCharts {
    pub fn rendered(&self) -> Vec<RenderedChart> {
        self.log.lock().unwrap().rendered.clone()
    }

    pub fn destroyed(&self) -> Vec<u64> {
        self.log.lock().unwrap().destroyed.clone()
    }

    /// Destroyed handles that were rendered on `target`, in destruction order
    pub fn destroyed_on(&self, target: &str) -> Vec<u64> {
        let log = self.log.lock().unwrap();
        log.destroyed
            .iter()
            .copied()
            .filter(|id| log.rendered.iter().any(|c| c.id == *id && c.target == target))
            .collect()
    }

    /// Charts on `target` that have not been destroyed
    pub fn live_on(&self, target: &str) -> usize {
        let log = self.log.lock().unwrap();
        log.rendered
            .iter()
            .filter(|c| c.target == target && !log.destroyed.contains(&c.id))
            .count()
    }
}

#[derive(Default)]
struct MapLog {
    views: Vec<(LatLng, u8)>,
    tile_layers: usize,
    clears: usize,
    markers: Vec<Marker>,
    fits: Vec<(Bounds, (u32, u32))>,
}

#[derive(Default)]
pub struct RecordingMap {
    log: Mutex<MapLog>,
}

impl RecordingMap {
    pub fn views(&self) -> Vec<(LatLng, u8)> {
        self.log.lock().unwrap().views.clone()
    }

    pub fn tile_layers(&self) -> usize {
        self.log.lock().unwrap().tile_layers
    }

    pub fn clears(&self) -> usize {
        self.log.lock().unwrap().clears
    }

    /// Markers added since the last clear
    pub fn markers(&self) -> Vec<Marker> {
        self.log.lock().unwrap().markers.clone()
    }

    pub fn fits(&self) -> Vec<(Bounds, (u32, u32))> {
        self.log.lock().unwrap().fits.clone()
    }
}

impl MapRenderer for RecordingMap {
    fn set_view(&self, center: LatLng, zoom: u8) {
        self.log.lock().unwrap().views.push((center, zoom));
    }

    fn add_tile_layer(&self, _url: &str, _attribution: &str, _max_zoom: u8) {
        self.log.lock().unwrap().tile_layers += 1;
    }

    fn clear_markers(&self) {
        let mut log = self.log.lock().unwrap();
        log.clears += 1;
        log.markers.clear();
    }

    fn add_marker(&self, marker: &Marker) {
        self.log.lock().unwrap().markers.push(marker.clone());
    }

    fn fit_bounds(&self, bounds: &Bounds, padding: (u32, u32)) {
        self.log.lock().unwrap().fits.push((*bounds, padding));
    }
}
