//! View-model of the `server-list` element.

use crate::core::domain::{
    model::server::{Server, format_metric},
    value_object::ServerId,
};
use crate::dashboard::action::{Button, UserAction};
use std::fmt;

/// The rendered list of servers, one entry per record, in backend order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ServerList {
    entries: Vec<ServerEntry>,
}

impl ServerList {
    /// Clears the list and rebuilds it from `servers`.
    pub fn replace(&mut self, servers: Vec<Server>) {
        self.entries = servers.into_iter().map(ServerEntry::from).collect();
    }

    pub fn entries(&self) -> &[ServerEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// First entry rendered for `id`. Backend ids are unique, so in practice
    /// the only one.
    pub fn entry(&self, id: &ServerId) -> Option<&ServerEntry> {
        self.entries.iter().find(|e| &e.id == id)
    }

    pub fn entry_mut(&mut self, id: &ServerId) -> Option<&mut ServerEntry> {
        self.entries.iter_mut().find(|e| &e.id == id)
    }
}

/// One server as displayed: heading, two metric lines, the action buttons
/// and an inline result area.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerEntry {
    pub id: ServerId,
    pub name: String,
    pub cpu_usage: Option<f64>,
    pub memory_usage: Option<f64>,
    result_area: ResultArea,
}

impl ServerEntry {
    pub fn cpu_text(&self) -> String {
        format_metric(self.cpu_usage)
    }

    pub fn memory_text(&self) -> String {
        format_metric(self.memory_usage)
    }

    /// Buttons in display order, each bound to this entry's identifier.
    pub fn buttons(&self) -> Vec<Button> {
        vec![
            Button::new("Delete", UserAction::DeleteServer(self.id.clone())),
            Button::new("Update", UserAction::OpenUpdateForm(self.id.clone())),
            Button::new("Predict Failure", UserAction::PredictFailure(self.id.clone())),
            Button::new(
                "Maintenance Schedule",
                UserAction::GenerateMaintenance(self.id.clone()),
            ),
            Button::new(
                "Visualize",
                UserAction::Visualize {
                    id: self.id.clone(),
                    name: self.name.clone(),
                },
            ),
        ]
    }

    /// An edit form pre-filled with the values this entry was rendered with.
    pub fn update_form(&self) -> UpdateForm {
        UpdateForm {
            server_id: self.id.clone(),
            name: self.name.clone(),
            cpu_usage: self.cpu_usage.map(|v| v.to_string()).unwrap_or_default(),
            memory_usage: self.memory_usage.map(|v| v.to_string()).unwrap_or_default(),
        }
    }

    pub fn result_area(&self) -> &ResultArea {
        &self.result_area
    }

    pub fn result_area_mut(&mut self) -> &mut ResultArea {
        &mut self.result_area
    }

    /// Element id of the entry's result area in the rendered page.
    pub fn result_area_id(&self) -> String {
        format!("result-{}", self.id)
    }
}

impl From<Server> for ServerEntry {
    fn from(server: Server) -> Self {
        Self {
            id: server.id,
            name: server.name,
            cpu_usage: server.metrics.cpu_usage,
            memory_usage: server.metrics.memory_usage,
            result_area: ResultArea::default(),
        }
    }
}

/// Per-entry region that insight actions and the edit form write into.
///
/// Actions either replace its content or append to it; see
/// [`ResultArea::replace`] and [`ResultArea::append`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultArea {
    blocks: Vec<ResultBlock>,
}

impl ResultArea {
    pub fn blocks(&self) -> &[ResultBlock] {
        &self.blocks
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Drops whatever is shown and shows `block` alone.
    pub fn replace(&mut self, block: ResultBlock) {
        self.blocks.clear();
        self.blocks.push(block);
    }

    /// Adds `block` after the current content.
    pub fn append(&mut self, block: ResultBlock) {
        self.blocks.push(block);
    }

    pub fn update_form(&self) -> Option<&UpdateForm> {
        self.blocks.iter().find_map(|b| match b {
            ResultBlock::UpdateForm(form) => Some(form),
            _ => None,
        })
    }

    pub fn update_form_mut(&mut self) -> Option<&mut UpdateForm> {
        self.blocks.iter_mut().find_map(|b| match b {
            ResultBlock::UpdateForm(form) => Some(form),
            _ => None,
        })
    }

    /// Visible text, one line per block.
    pub fn text(&self) -> String {
        self.blocks
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// A piece of content inside a result area.
#[derive(Debug, Clone, PartialEq)]
pub enum ResultBlock {
    FailurePrediction(bool),
    MaintenanceDate(String),
    UpdateForm(UpdateForm),
}

impl fmt::Display for ResultBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResultBlock::FailurePrediction(likely) => {
                write!(f, "Predict Failure: {}", if *likely { "Yes" } else { "No" })
            }
            ResultBlock::MaintenanceDate(date) => write!(f, "Maintenance Date: {}", date),
            ResultBlock::UpdateForm(_) => f.write_str("Update Server"),
        }
    }
}

/// Inline edit form. Field values are the raw text of the inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateForm {
    pub server_id: ServerId,
    pub name: String,
    pub cpu_usage: String,
    pub memory_usage: String,
}

impl UpdateForm {
    pub fn save_button(&self) -> Button {
        Button::new("Save", UserAction::SaveUpdate(self.server_id.clone()))
    }
}
