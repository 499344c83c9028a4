//! The host page as a structured document.
//!
//! Each element the dashboard relies on is optional, so a page that lacks
//! one can be modelled and the affected action fails the way it would in a
//! browser: the element is reported missing and nothing is changed.

use crate::core::domain::error::{DashboardError, DashboardResult};
use crate::dashboard::server_list::ServerList;
use std::collections::BTreeMap;

/// Element identifiers the dashboard expects on the host page.
pub mod ids {
    pub const METRICS_CHART: &str = "metricsChart";
    pub const SERVER_LIST: &str = "server-list";
    pub const SERVER_NAME: &str = "server-name";
    pub const CPU_USAGE: &str = "cpu-usage";
    pub const MEMORY_USAGE: &str = "memory-usage";
    pub const VISUALIZATION_SECTION: &str = "visualization-section";

    /// The three inputs of the create form, in form order.
    pub const CREATE_FORM: [&str; 3] = [SERVER_NAME, CPU_USAGE, MEMORY_USAGE];
}

/// Child of the visualization section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionNode {
    Heading(String),
    Canvas(String),
}

/// The `visualization-section` element: an optional heading and the chart
/// canvas.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisualizationSection {
    children: Vec<SectionNode>,
}

impl Default for VisualizationSection {
    fn default() -> Self {
        Self {
            children: vec![SectionNode::Canvas(ids::METRICS_CHART.to_string())],
        }
    }
}

impl VisualizationSection {
    /// A section without the chart canvas.
    pub fn without_canvas() -> Self {
        Self {
            children: Vec::new(),
        }
    }

    pub fn children(&self) -> &[SectionNode] {
        &self.children
    }

    pub fn has_canvas(&self, canvas_id: &str) -> bool {
        self.children
            .iter()
            .any(|c| matches!(c, SectionNode::Canvas(id) if id == canvas_id))
    }

    /// Text of the first heading, if any.
    pub fn heading(&self) -> Option<&str> {
        self.children.iter().find_map(|c| match c {
            SectionNode::Heading(text) => Some(text.as_str()),
            _ => None,
        })
    }

    /// Removes the current heading and inserts `text` right before the
    /// chart canvas, or at the end when the canvas is absent.
    pub fn replace_heading(&mut self, text: impl Into<String>) {
        if let Some(pos) = self
            .children
            .iter()
            .position(|c| matches!(c, SectionNode::Heading(_)))
        {
            self.children.remove(pos);
        }
        let canvas_pos = self
            .children
            .iter()
            .position(|c| matches!(c, SectionNode::Canvas(id) if id == ids::METRICS_CHART));
        let heading = SectionNode::Heading(text.into());
        match canvas_pos {
            Some(pos) => self.children.insert(pos, heading),
            None => self.children.push(heading),
        }
    }
}

/// The dashboard page.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    inputs: BTreeMap<String, String>,
    server_list: Option<ServerList>,
    visualization: Option<VisualizationSection>,
}

impl Default for Document {
    fn default() -> Self {
        Self::standard()
    }
}

impl Document {
    /// A page with every element the dashboard expects, all empty.
    pub fn standard() -> Self {
        Self {
            inputs: ids::CREATE_FORM
                .iter()
                .map(|id| (id.to_string(), String::new()))
                .collect(),
            server_list: Some(ServerList::default()),
            visualization: Some(VisualizationSection::default()),
        }
    }

    /// Removes the element with the given id.
    pub fn without(mut self, element_id: &str) -> Self {
        match element_id {
            ids::SERVER_LIST => self.server_list = None,
            ids::VISUALIZATION_SECTION => self.visualization = None,
            ids::METRICS_CHART => {
                if let Some(section) = self.visualization.as_mut() {
                    section
                        .children
                        .retain(|c| !matches!(c, SectionNode::Canvas(_)));
                }
            }
            other => {
                self.inputs.remove(other);
            }
        }
        self
    }

    pub fn input(&self, element_id: &str) -> Option<&str> {
        self.inputs.get(element_id).map(String::as_str)
    }

    /// Sets the text of an input, as typing into it would.
    pub fn set_input(&mut self, element_id: &str, value: impl Into<String>) -> DashboardResult<()> {
        let slot = self
            .inputs
            .get_mut(element_id)
            .ok_or_else(|| missing(element_id))?;
        *slot = value.into();
        Ok(())
    }

    /// Values of the given inputs; fails on the first one that is absent.
    pub fn read_inputs<const N: usize>(&self, element_ids: [&str; N]) -> DashboardResult<[String; N]> {
        let mut values: [String; N] = std::array::from_fn(|_| String::new());
        for (slot, id) in values.iter_mut().zip(element_ids) {
            *slot = self.input(id).ok_or_else(|| missing(id))?.to_string();
        }
        Ok(values)
    }

    pub fn server_list(&self) -> Option<&ServerList> {
        self.server_list.as_ref()
    }

    pub fn server_list_mut(&mut self) -> DashboardResult<&mut ServerList> {
        self.server_list
            .as_mut()
            .ok_or_else(|| missing(ids::SERVER_LIST))
    }

    pub fn visualization(&self) -> Option<&VisualizationSection> {
        self.visualization.as_ref()
    }

    pub fn visualization_mut(&mut self) -> DashboardResult<&mut VisualizationSection> {
        self.visualization
            .as_mut()
            .ok_or_else(|| missing(ids::VISUALIZATION_SECTION))
    }

    pub fn has_canvas(&self) -> bool {
        self.visualization
            .as_ref()
            .is_some_and(|s| s.has_canvas(ids::METRICS_CHART))
    }

    pub(crate) fn inputs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.inputs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

pub(crate) fn missing(element_id: &str) -> DashboardError {
    DashboardError::MissingElement(element_id.to_string())
}
