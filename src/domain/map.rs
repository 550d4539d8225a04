// Map domain models: crime locations, markers and viewport bounds
use super::summary::format_count;
use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lon: f64,
}

impl LatLng {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// A record from the map endpoint; either coordinate may be missing
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CrimeLocation {
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub crime: String,
    pub area: String,
}

impl CrimeLocation {
    pub fn position(&self) -> Option<LatLng> {
        match (self.lat, self.lon) {
            (Some(lat), Some(lon)) => Some(LatLng::new(lat, lon)),
            _ => None,
        }
    }
}

/// A sampled window of crime locations plus the unsampled total
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MapResult {
    pub total: f64,
    pub crimes: Vec<CrimeLocation>,
}

impl MapResult {
    pub fn count_text(&self) -> String {
        format!(
            "Showing {} of {} crimes",
            self.crimes.len(),
            format_count(self.total)
        )
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct MarkerStyle {
    pub radius: f64,
    pub fill_color: String,
    pub color: String,
    pub weight: f64,
    pub opacity: f64,
    pub fill_opacity: f64,
}

impl Default for MarkerStyle {
    fn default() -> Self {
        Self {
            radius: 5.0,
            fill_color: "#ef4444".to_string(),
            color: "#dc2626".to_string(),
            weight: 1.0,
            opacity: 0.8,
            fill_opacity: 0.5,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub position: LatLng,
    pub popup: String,
    pub style: MarkerStyle,
}

impl Marker {
    pub fn for_crime(location: &CrimeLocation, style: &MarkerStyle) -> Option<Self> {
        let position = location.position()?;
        Some(Self {
            position,
            popup: format!("<strong>{}</strong><br>Area: {}", location.crime, location.area),
            style: style.clone(),
        })
    }
}

/// South-west / north-east corners of a set of points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub south_west: LatLng,
    pub north_east: LatLng,
}

impl Bounds {
    pub fn enclosing<'a>(points: impl IntoIterator<Item = &'a LatLng>) -> Option<Self> {
        let mut iter = points.into_iter();
        let first = *iter.next()?;
        let mut bounds = Bounds {
            south_west: first,
            north_east: first,
        };
        for p in iter {
            bounds.south_west.lat = bounds.south_west.lat.min(p.lat);
            bounds.south_west.lon = bounds.south_west.lon.min(p.lon);
            bounds.north_east.lat = bounds.north_east.lat.max(p.lat);
            bounds.north_east.lon = bounds.north_east.lon.max(p.lon);
        }
        Some(bounds)
    }
}

/// Markers currently on the map; replaced wholesale on every refresh
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MarkerSet {
    markers: Vec<Marker>,
}

impl MarkerSet {
    /// One marker per location with both coordinates; the rest are skipped
    pub fn from_locations(locations: &[CrimeLocation], style: &MarkerStyle) -> Self {
        let markers = locations
            .iter()
            .filter_map(|l| Marker::for_crime(l, style))
            .collect();
        Self { markers }
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    pub fn bounds(&self) -> Option<Bounds> {
        Bounds::enclosing(self.markers.iter().map(|m| &m.position))
    }
}
