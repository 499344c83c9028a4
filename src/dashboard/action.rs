use crate::core::domain::{
    error::{DashboardResult, ValidationError},
    value_object::{ServerId, ValueObject},
};

/// Everything a user can trigger on the dashboard.
///
/// Per-entry actions carry the identifier of the server they were rendered
/// for, so handling one never depends on markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserAction {
    /// Re-fetch and redraw the server list.
    Refresh,
    /// Submit the create form.
    CreateServer,
    DeleteServer(ServerId),
    /// Show the inline edit form in the entry's result area.
    OpenUpdateForm(ServerId),
    /// Submit the inline edit form.
    SaveUpdate(ServerId),
    PredictFailure(ServerId),
    GenerateMaintenance(ServerId),
    /// Plot the server's CPU history under a heading with its name.
    Visualize { id: ServerId, name: String },
}

impl UserAction {
    /// Short name used in diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            UserAction::Refresh => "refresh",
            UserAction::CreateServer => "create server",
            UserAction::DeleteServer(_) => "delete server",
            UserAction::OpenUpdateForm(_) => "open update form",
            UserAction::SaveUpdate(_) => "update server",
            UserAction::PredictFailure(_) => "predict failure",
            UserAction::GenerateMaintenance(_) => "generate maintenance schedule",
            UserAction::Visualize { .. } => "visualize server",
        }
    }

    /// Value of the `data-action` attribute on a rendered button.
    pub fn data_action(&self) -> &'static str {
        match self {
            UserAction::Refresh => "refresh",
            UserAction::CreateServer => "create",
            UserAction::DeleteServer(_) => "delete",
            UserAction::OpenUpdateForm(_) => "open-update-form",
            UserAction::SaveUpdate(_) => "save-update",
            UserAction::PredictFailure(_) => "predict-failure",
            UserAction::GenerateMaintenance(_) => "generate-maintenance",
            UserAction::Visualize { .. } => "visualize",
        }
    }

    /// Rebuilds the action of a clicked button from its `data-action`,
    /// `data-server-id` and `data-server-name` attributes.
    ///
    /// These arrive from the page, so the identifier is validated.
    pub fn from_data_attributes(
        action: &str,
        server_id: Option<&str>,
        server_name: Option<&str>,
    ) -> DashboardResult<Self> {
        let id = || -> DashboardResult<ServerId> {
            let raw = server_id.ok_or_else(|| missing_attribute("data-server-id"))?;
            ServerId::new(raw.to_string())
        };
        let action = match action {
            "refresh" => UserAction::Refresh,
            "create" => UserAction::CreateServer,
            "delete" => UserAction::DeleteServer(id()?),
            "open-update-form" => UserAction::OpenUpdateForm(id()?),
            "save-update" => UserAction::SaveUpdate(id()?),
            "predict-failure" => UserAction::PredictFailure(id()?),
            "generate-maintenance" => UserAction::GenerateMaintenance(id()?),
            "visualize" => UserAction::Visualize {
                id: id()?,
                name: server_name
                    .ok_or_else(|| missing_attribute("data-server-name"))?
                    .to_string(),
            },
            other => {
                return Err(ValidationError::Format(format!("Unknown action: {}", other)).into());
            }
        };
        Ok(action)
    }

    /// The server the action targets, if any.
    pub fn server_id(&self) -> Option<&ServerId> {
        match self {
            UserAction::Refresh | UserAction::CreateServer => None,
            UserAction::DeleteServer(id)
            | UserAction::OpenUpdateForm(id)
            | UserAction::SaveUpdate(id)
            | UserAction::PredictFailure(id)
            | UserAction::GenerateMaintenance(id)
            | UserAction::Visualize { id, .. } => Some(id),
        }
    }
}

fn missing_attribute(attribute: &str) -> ValidationError {
    ValidationError::Field {
        field: attribute.to_string(),
        message: "Attribute is required for this action".to_string(),
    }
}

/// A labelled button bound to an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    pub label: &'static str,
    pub action: UserAction,
}

impl Button {
    pub fn new(label: &'static str, action: UserAction) -> Self {
        Self { label, action }
    }
}
