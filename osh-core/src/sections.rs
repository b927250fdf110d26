//! Page section registry and the accordion toggle state machines. Every
//! accordion starts collapsed and only changes on an explicit toggle; the
//! multi-select container keeps a set of open keys while the single-item
//! accordions keep at most one.

use std::collections::BTreeSet;

/// One entry in the jump-to navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    pub id: &'static str,
    pub label: &'static str,
}

/// Fixed page order of the jump-to navigation.
pub const SECTIONS: [Section; 8] = [
    Section { id: "overview", label: "Overview" },
    Section { id: "location", label: "General Information" },
    Section { id: "claimed-data", label: "Operational Details" },
    Section { id: "assessments", label: "Assessments & Audits" },
    Section { id: "certifications", label: "Certifications" },
    Section { id: "environment", label: "Emissions & Energy Use" },
    Section { id: "living-wage", label: "Living Wage" },
    Section { id: "grievance-mechanism", label: "Grievance Mechanisms" },
];

pub const DEFAULT_SECTION: &str = "overview";

/// Anchor id a section scrolls to.
pub fn section_anchor(id: &str) -> String {
    format!("section-{id}")
}

/// Accordion allowing at most one open item.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SingleAccordion {
    active: Option<String>,
}

impl SingleAccordion {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_active(active: Option<String>) -> Self {
        Self { active }
    }

    pub fn is_open(&self, key: &str) -> bool {
        self.active.as_deref() == Some(key)
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Toggling the open item closes it; toggling anything else makes that
    /// item the single open one.
    pub fn toggle(&mut self, key: &str) {
        if self.is_open(key) {
            self.active = None;
        } else {
            self.active = Some(key.to_string());
        }
    }

    /// The state reached by toggling `key`, leaving `self` untouched.
    pub fn toggled(&self, key: &str) -> Self {
        let mut next = self.clone();
        next.toggle(key);
        next
    }
}

/// Accordion container allowing any subset of items open at once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MultiAccordion {
    open: BTreeSet<String>,
}

impl MultiAccordion {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_keys<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            open: keys.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_open(&self, key: &str) -> bool {
        self.open.contains(key)
    }

    pub fn open_keys(&self) -> impl Iterator<Item = &str> {
        self.open.iter().map(String::as_str)
    }

    pub fn toggle(&mut self, key: &str) {
        if !self.open.remove(key) {
            self.open.insert(key.to_string());
        }
    }

    /// The state reached by toggling `key`, leaving `self` untouched.
    pub fn toggled(&self, key: &str) -> Self {
        let mut next = self.clone();
        next.toggle(key);
        next
    }

    /// Serialized form for a query parameter: open keys joined by commas.
    pub fn to_query(&self) -> String {
        self.open.iter().cloned().collect::<Vec<_>>().join(",")
    }

    /// Parse the comma-separated query form back into a state.
    pub fn from_query(raw: &str) -> Self {
        Self::from_keys(
            raw.split(',')
                .map(str::trim)
                .filter(|key| !key.is_empty())
                .map(str::to_string),
        )
    }
}
