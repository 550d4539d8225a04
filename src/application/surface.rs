// Ports for the rendering surface: document, chart library and map library
use crate::domain::chart::ChartSpec;
use crate::domain::filters::SelectOption;
use crate::domain::map::{Bounds, LatLng, Marker};

/// Element lookup by id. Every method tolerates a missing element.
pub trait Document: Send + Sync {
    fn has_element(&self, id: &str) -> bool;

    /// Current value of a select control
    fn select_value(&self, id: &str) -> Option<String>;

    /// Returns false when the control does not exist
    fn append_options(&self, id: &str, options: &[SelectOption]) -> bool;

    /// Returns false when the element does not exist
    fn set_text(&self, id: &str, text: &str) -> bool;
}

/// A live rendered chart. Must be destroyed before another chart takes its target.
pub trait ChartHandle: Send {
    fn destroy(self: Box<Self>);
}

pub trait ChartRenderer: Send + Sync {
    fn render(&self, target: &str, spec: &ChartSpec) -> anyhow::Result<Box<dyn ChartHandle>>;
}

pub trait MapRenderer: Send + Sync {
    fn set_view(&self, center: LatLng, zoom: u8);

    fn add_tile_layer(&self, url: &str, attribution: &str, max_zoom: u8);

    fn clear_markers(&self);

    fn add_marker(&self, marker: &Marker);

    fn fit_bounds(&self, bounds: &Bounds, padding: (u32, u32));
}
