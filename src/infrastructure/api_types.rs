// Wire payloads of the statistics API and their mapping to domain models
use crate::domain::chart::ChartSeries;
use crate::domain::filters::FilterOptions;
use crate::domain::map::{CrimeLocation, MapResult};
use crate::domain::summary::Summary;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct FiltersResponse {
    pub areas: Vec<String>,
    pub years: Vec<YearValue>,
}

/// Years arrive as numbers or strings depending on the backend's data source
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum YearValue {
    Number(serde_json::Number),
    Text(String),
}

impl From<FiltersResponse> for FilterOptions {
    fn from(response: FiltersResponse) -> Self {
        let years = response
            .years
            .into_iter()
            .map(|y| match y {
                YearValue::Number(n) => n.to_string(),
                YearValue::Text(s) => s,
            })
            .collect();
        FilterOptions {
            areas: response.areas,
            years,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct SummaryResponse {
    #[serde(default)]
    pub total_crimes: Option<f64>,
    #[serde(default)]
    pub avg_victim_age: Option<f64>,
    #[serde(default)]
    pub crimes_with_weapons: Option<f64>,
    #[serde(default)]
    pub data_source: Option<String>,
    #[serde(default, rename = "dataSource")]
    pub data_source_camel: Option<String>,
}

impl SummaryResponse {
    /// `data_source` wins over `dataSource`; empty strings count as absent
    fn data_source(&mut self) -> Option<String> {
        [self.data_source.take(), self.data_source_camel.take()]
            .into_iter()
            .flatten()
            .find(|s| !s.is_empty())
    }
}

impl From<SummaryResponse> for Summary {
    fn from(mut response: SummaryResponse) -> Self {
        let data_source = response.data_source();
        Summary {
            total_crimes: response.total_crimes.unwrap_or(0.0),
            avg_victim_age: response.avg_victim_age.unwrap_or(0.0),
            crimes_with_weapons: response.crimes_with_weapons,
            data_source,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct VictimsResponse {
    pub age_distribution: ChartSeries,
}

#[derive(Debug, Deserialize)]
pub struct MapResponse {
    #[serde(default)]
    pub total: Option<f64>,
    pub crimes: Vec<CrimeRecord>,
}

#[derive(Debug, Deserialize)]
pub struct CrimeRecord {
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lon: Option<f64>,
    #[serde(default)]
    pub crime: String,
    #[serde(default)]
    pub area: String,
}

impl From<MapResponse> for MapResult {
    fn from(response: MapResponse) -> Self {
        MapResult {
            total: response.total.unwrap_or(0.0),
            crimes: response
                .crimes
                .into_iter()
                .map(|c| CrimeLocation {
                    lat: c.lat,
                    lon: c.lon,
                    crime: c.crime,
                    area: c.area,
                })
                .collect(),
        }
    }
}
