// In-process document holding the dashboard's controls and render targets
use crate::application::surface::Document;
use crate::domain::filters::{AREA_FILTER, MONTH_FILTER, SelectOption, YEAR_FILTER};
use crate::domain::panel::{
    APPLY_BUTTON, AVG_AGE, ChartPanel, DATA_SOURCE, MAP, MAP_COUNT, TOTAL_CRIMES, WEAPON_CRIMES,
};
use std::collections::HashMap;
use std::sync::RwLock;

#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Select {
        options: Vec<SelectOption>,
        value: String,
    },
    Text(String),
    Button,
    Canvas,
    Container,
}

impl Element {
    pub fn select() -> Self {
        Element::Select {
            options: Vec::new(),
            value: String::new(),
        }
    }

    pub fn text() -> Self {
        Element::Text(String::new())
    }
}

/// Every element the dashboard page provides
pub fn dashboard_layout() -> Vec<(&'static str, Element)> {
    let mut layout = vec![
        (AREA_FILTER, Element::select()),
        (YEAR_FILTER, Element::select()),
        (MONTH_FILTER, Element::select()),
        (APPLY_BUTTON, Element::Button),
        (TOTAL_CRIMES, Element::text()),
        (AVG_AGE, Element::text()),
        (WEAPON_CRIMES, Element::text()),
        (DATA_SOURCE, Element::text()),
        (MAP_COUNT, Element::text()),
        (MAP, Element::Container),
    ];
    layout.extend(ChartPanel::ALL.iter().map(|c| (c.element_id(), Element::Canvas)));
    layout
}

#[derive(Debug, Default)]
pub struct MemoryDocument {
    elements: RwLock<HashMap<String, Element>>,
}

impl MemoryDocument {
    pub fn new<I, K>(elements: I) -> Self
    where
        I: IntoIterator<Item = (K, Element)>,
        K: Into<String>,
    {
        Self {
            elements: RwLock::new(elements.into_iter().map(|(k, e)| (k.into(), e)).collect()),
        }
    }

    fn read<T>(&self, id: &str, f: impl FnOnce(&Element) -> Option<T>) -> Option<T> {
        let elements = self.elements.read().ok()?;
        elements.get(id).and_then(f)
    }

    fn write(&self, id: &str, f: impl FnOnce(&mut Element) -> bool) -> bool {
        match self.elements.write() {
            Ok(mut elements) => elements.get_mut(id).map(f).unwrap_or(false),
            Err(_) => false,
        }
    }

    pub fn text(&self, id: &str) -> Option<String> {
        self.read(id, |e| match e {
            Element::Text(text) => Some(text.clone()),
            _ => None,
        })
    }

    /// Change a select control's value as a user would. No domain validation.
    pub fn set_select_value(&self, id: &str, new_value: &str) -> bool {
        self.write(id, |e| match e {
            Element::Select { value, .. } => {
                *value = new_value.to_string();
                true
            }
            _ => false,
        })
    }
}

#[cfg(test)]
impl MemoryDocument {
    pub fn options(&self, id: &str) -> Option<Vec<SelectOption>> {
        self.read(id, |e| match e {
            Element::Select { options, .. } => Some(options.clone()),
            _ => None,
        })
    }
}

impl Document for MemoryDocument {
    fn has_element(&self, id: &str) -> bool {
        self.read(id, |_| Some(())).is_some()
    }

    fn select_value(&self, id: &str) -> Option<String> {
        self.read(id, |e| match e {
            Element::Select { value, .. } => Some(value.clone()),
            _ => None,
        })
    }

    fn append_options(&self, id: &str, new_options: &[SelectOption]) -> bool {
        self.write(id, |e| match e {
            Element::Select { options, .. } => {
                options.extend_from_slice(new_options);
                true
            }
            _ => false,
        })
    }

    fn set_text(&self, id: &str, new_text: &str) -> bool {
        self.write(id, |e| match e {
            Element::Text(text) => {
                *text = new_text.to_string();
                true
            }
            _ => false,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_has_every_target() {
        let document = MemoryDocument::new(dashboard_layout());
        for id in ["areaFilter", "applyFilters", "totalCrimes", "mapCount", "map", "victimChart"] {
            assert!(document.has_element(id), "{}", id);
        }
        assert!(!document.has_element("nope"));
    }

    #[test]
    fn test_missing_elements_are_tolerated() {
        let document = MemoryDocument::default();
        assert_eq!(document.select_value(AREA_FILTER), None);
        assert!(!document.set_text(TOTAL_CRIMES, "1"));
        assert!(!document.append_options(AREA_FILTER, &[SelectOption::any()]));
        assert!(!document.set_select_value(AREA_FILTER, "Harbor"));
    }

    #[test]
    fn test_select_and_text_roundtrip() {
        let document = MemoryDocument::new(dashboard_layout());
        assert!(document.set_select_value(YEAR_FILTER, "2023"));
        assert_eq!(document.select_value(YEAR_FILTER).as_deref(), Some("2023"));

        assert!(document.set_text(AVG_AGE, "32.7"));
        assert_eq!(document.text(AVG_AGE).as_deref(), Some("32.7"));

        // Text targets are not selects and vice versa
        assert!(!document.set_text(YEAR_FILTER, "x"));
        assert_eq!(document.select_value(AVG_AGE), None);
    }
}
