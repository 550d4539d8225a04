// Dashboard panel identities
use super::filters::Projection;
use std::fmt;

pub const APPLY_BUTTON: &str = "applyFilters";
pub const TOTAL_CRIMES: &str = "totalCrimes";
pub const AVG_AGE: &str = "avgAge";
pub const DATA_SOURCE: &str = "dataSource";
pub const WEAPON_CRIMES: &str = "weaponCrimes";
pub const MAP_COUNT: &str = "mapCount";
pub const MAP: &str = "map";

pub const FILTERS_ENDPOINT: &str = "/api/filters";

/// The six independently refreshed units of the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Panel {
    Summary,
    Chart(ChartPanel),
    Map,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartPanel {
    Area,
    Time,
    Type,
    Victim,
}

impl ChartPanel {
    pub const ALL: [ChartPanel; 4] = [
        ChartPanel::Area,
        ChartPanel::Time,
        ChartPanel::Type,
        ChartPanel::Victim,
    ];

    pub fn element_id(self) -> &'static str {
        match self {
            ChartPanel::Area => "areaChart",
            ChartPanel::Time => "timeChart",
            ChartPanel::Type => "typeChart",
            ChartPanel::Victim => "victimChart",
        }
    }

    pub fn endpoint(self) -> &'static str {
        match self {
            ChartPanel::Area => "/api/by_area",
            ChartPanel::Time => "/api/by_time",
            ChartPanel::Type => "/api/by_type",
            ChartPanel::Victim => "/api/victims",
        }
    }

    /// The area chart compares areas, so it never narrows by one
    pub fn projection(self) -> Projection {
        match self {
            ChartPanel::Area => Projection::WithoutArea,
            _ => Projection::Full,
        }
    }
}

#[cfg(test)]
impl Panel {
    pub const ALL: [Panel; 6] = [
        Panel::Summary,
        Panel::Chart(ChartPanel::Area),
        Panel::Chart(ChartPanel::Time),
        Panel::Chart(ChartPanel::Type),
        Panel::Chart(ChartPanel::Victim),
        Panel::Map,
    ];
}

impl Panel {
    pub fn endpoint(self) -> &'static str {
        match self {
            Panel::Summary => "/api/summary",
            Panel::Chart(chart) => chart.endpoint(),
            Panel::Map => "/api/map",
        }
    }
}

impl fmt::Display for Panel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Panel::Summary => "summary",
            Panel::Chart(ChartPanel::Area) => "area chart",
            Panel::Chart(ChartPanel::Time) => "time chart",
            Panel::Chart(ChartPanel::Type) => "type chart",
            Panel::Chart(ChartPanel::Victim) => "victim chart",
            Panel::Map => "map",
        };
        f.write_str(name)
    }
}

/// What a refresher did with its panel, when it did not fail
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelOutcome {
    Rendered,
    TargetMissing,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints_are_distinct() {
        let mut endpoints: Vec<_> = Panel::ALL.iter().map(|p| p.endpoint()).collect();
        endpoints.sort();
        endpoints.dedup();
        assert_eq!(endpoints.len(), 6);
        assert!(!endpoints.contains(&FILTERS_ENDPOINT));
    }

    #[test]
    fn test_only_area_chart_projects() {
        for chart in ChartPanel::ALL {
            let expected = if chart == ChartPanel::Area {
                Projection::WithoutArea
            } else {
                Projection::Full
            };
            assert_eq!(chart.projection(), expected);
        }
    }
}
