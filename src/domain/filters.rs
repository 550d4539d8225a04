// Filter selection and query string domain models
use std::fmt;

pub const AREA_FILTER: &str = "areaFilter";
pub const YEAR_FILTER: &str = "yearFilter";
pub const MONTH_FILTER: &str = "monthFilter";

/// Month names indexed by month number; index 0 is the "no constraint" entry
pub const MONTH_NAMES: [&str; 13] = [
    "All",
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Snapshot of the user's (area, year, month) constraints.
/// An empty field means "no constraint".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSelection {
    pub area: String,
    pub year: String,
    pub month: String,
}

/// Which fields of a selection a panel cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Projection {
    Full,
    WithoutArea,
}

impl FilterSelection {
    pub fn new(area: impl Into<String>, year: impl Into<String>, month: impl Into<String>) -> Self {
        Self {
            area: area.into(),
            year: year.into(),
            month: month.into(),
        }
    }

    pub fn project(&self, projection: Projection) -> Self {
        match projection {
            Projection::Full => self.clone(),
            Projection::WithoutArea => Self {
                area: String::new(),
                ..self.clone()
            },
        }
    }

    pub fn to_query(&self) -> QueryString {
        QueryString::default()
            .with_param("area", &self.area)
            .with_param("year", &self.year)
            .with_param("month", &self.month)
    }
}

impl fmt::Display for FilterSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let show = |v: &str| if v.is_empty() { "*".to_string() } else { v.to_string() };
        write!(
            f,
            "area={} year={} month={}",
            show(&self.area),
            show(&self.year),
            show(&self.month)
        )
    }
}

/// URL-encoded `key=value&...` string. Parameters with empty values are never emitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryString(String);

impl QueryString {
    pub fn with_param(mut self, key: &str, value: &str) -> Self {
        if value.is_empty() {
            return self;
        }
        if !self.0.is_empty() {
            self.0.push('&');
        }
        self.0.push_str(&urlencoding::encode(key));
        self.0.push('=');
        self.0.push_str(&urlencoding::encode(value));
        self
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
impl QueryString {
    /// Decoded (key, value) pairs, mostly useful for assertions
    pub fn pairs(&self) -> Vec<(String, String)> {
        self.0
            .split('&')
            .filter(|p| !p.is_empty())
            .filter_map(|pair| {
                let (k, v) = pair.split_once('=')?;
                let k = urlencoding::decode(k).ok()?.into_owned();
                let v = urlencoding::decode(v).ok()?.into_owned();
                Some((k, v))
            })
            .collect()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.pairs().iter().any(|(k, _)| k == key)
    }
}

impl fmt::Display for QueryString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One entry of a select control
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }

    /// The leading "All" entry that maps to "no constraint"
    pub fn any() -> Self {
        Self::new("", MONTH_NAMES[0])
    }
}

/// Filter choices offered by the backend
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterOptions {
    pub areas: Vec<String>,
    pub years: Vec<String>,
}

impl FilterOptions {
    pub fn area_options(&self) -> Vec<SelectOption> {
        std::iter::once(SelectOption::any())
            .chain(self.areas.iter().map(|a| SelectOption::new(a.clone(), a.clone())))
            .collect()
    }

    pub fn year_options(&self) -> Vec<SelectOption> {
        std::iter::once(SelectOption::any())
            .chain(self.years.iter().map(|y| SelectOption::new(y.clone(), y.clone())))
            .collect()
    }
}

/// Month options are generated locally, never fetched
pub fn month_options() -> Vec<SelectOption> {
    std::iter::once(SelectOption::any())
        .chain((1..=12).map(|m| SelectOption::new(m.to_string(), MONTH_NAMES[m])))
        .collect()
}
