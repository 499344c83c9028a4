//! HTML rendering of the document.
//!
//! All text coming from the backend or from inputs is escaped by `maud`.
//! Buttons carry their action as `data-*` attributes instead of inline script.

use crate::core::domain::value_object::ServerId;
use crate::dashboard::action::{Button, UserAction};
use crate::dashboard::document::{Document, SectionNode, ids};
use crate::dashboard::server_list::{ResultBlock, ServerEntry, UpdateForm};
use maud::{Markup, html};

/// Renders the whole page body.
pub fn render_document(doc: &Document) -> String {
    html! {
        @for (id, value) in doc.inputs() {
            input id=(id) value=(value);
        }
        @if let Some(list) = doc.server_list() {
            div id=(ids::SERVER_LIST) {
                @for entry in list.entries() {
                    (render_entry(entry))
                }
            }
        }
        @if let Some(section) = doc.visualization() {
            section id=(ids::VISUALIZATION_SECTION) {
                @for child in section.children() {
                    @match child {
                        SectionNode::Heading(text) => { h2 { (text) } }
                        SectionNode::Canvas(id) => { canvas id=(id) {} }
                    }
                }
            }
        }
    }
    .into_string()
}

/// Renders one server entry with its buttons and result area.
pub fn render_entry(entry: &ServerEntry) -> Markup {
    html! {
        div.server-item {
            h3 { (entry.name) }
            p { strong { "CPU Usage:" } " " (entry.cpu_text()) "%" }
            p { strong { "Memory Usage:" } " " (entry.memory_text()) "%" }
            @for button in entry.buttons() {
                (render_button(&button))
            }
            div id=(entry.result_area_id()) class="result-area" {
                @for block in entry.result_area().blocks() {
                    @match block {
                        ResultBlock::UpdateForm(form) => { (render_update_form(form)) }
                        other => { p { (other.to_string()) } }
                    }
                }
            }
        }
    }
}

fn render_update_form(form: &UpdateForm) -> Markup {
    let id = form.server_id.as_str();
    html! {
        h4 { "Update Server" }
        input type="text" id={ "update-name-" (id) } value=(form.name) placeholder="Server Name";
        input type="number" id={ "update-cpu-" (id) } value=(form.cpu_usage) placeholder="CPU Usage";
        input type="number" id={ "update-memory-" (id) } value=(form.memory_usage) placeholder="Memory Usage";
        (render_button(&form.save_button()))
    }
}

fn render_button(button: &Button) -> Markup {
    let server_id = button.action.server_id().map(ServerId::as_str);
    let server_name = match &button.action {
        UserAction::Visualize { name, .. } => Some(name.as_str()),
        _ => None,
    };
    html! {
        button
            data-action=(button.action.data_action())
            data-server-id=[server_id]
            data-server-name=[server_name]
        { (button.label) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::domain::model::server::Server;
    use serde_json::json;

    fn entry(id: &str, name: &str) -> ServerEntry {
        let server: Server = serde_json::from_value(json!({
            "_id": id,
            "name": name,
            "metrics": {"cpu_usage": 42, "memory_usage": 77}
        }))
        .unwrap();
        ServerEntry::from(server)
    }

    #[test]
    fn test_entry_markup() {
        let html = render_entry(&entry("abc", "web-1")).into_string();
        assert!(html.starts_with(r#"<div class="server-item"><h3>web-1</h3>"#));
        assert!(html.contains("<p><strong>CPU Usage:</strong> 42%</p>"));
        assert!(html.contains("<p><strong>Memory Usage:</strong> 77%</p>"));
        assert!(html.contains(r#"<button data-action="delete" data-server-id="abc">Delete</button>"#));
        assert!(html.contains(
            r#"<button data-action="visualize" data-server-id="abc" data-server-name="web-1">Visualize</button>"#
        ));
        assert!(html.contains(r#"<div id="result-abc" class="result-area"></div>"#));
    }

    #[test]
    fn test_button_attributes_decode_to_their_action() {
        let e = entry("abc", "web-1");
        for button in e.buttons() {
            let name = match &button.action {
                UserAction::Visualize { name, .. } => Some(name.as_str()),
                _ => None,
            };
            let decoded = UserAction::from_data_attributes(
                button.action.data_action(),
                button.action.server_id().map(ServerId::as_str),
                name,
            )
            .unwrap();
            assert_eq!(decoded, button.action);
        }
    }

    #[test]
    fn test_names_are_escaped() {
        let html = render_entry(&entry("x\"y", "<script>alert(1)</script>")).into_string();
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(html.contains(r#"data-server-id="x&quot;y""#));
    }

    #[test]
    fn test_result_blocks() {
        let mut e = entry("abc", "web-1");
        e.result_area_mut().replace(ResultBlock::FailurePrediction(true));
        e.result_area_mut()
            .append(ResultBlock::MaintenanceDate("2026-10-25".to_string()));
        let html = render_entry(&e).into_string();
        assert!(html.contains("<p>Predict Failure: Yes</p><p>Maintenance Date: 2026-10-25</p>"));
    }

    #[test]
    fn test_update_form_markup() {
        let mut e = entry("abc", "web-1");
        let form = e.update_form();
        e.result_area_mut().replace(ResultBlock::UpdateForm(form));
        let html = render_entry(&e).into_string();
        assert!(html.contains("<h4>Update Server</h4>"));
        assert!(html.contains(r#"id="update-cpu-abc" value="42""#));
        assert!(html.contains(r#"<button data-action="save-update" data-server-id="abc">Save</button>"#));
    }

    #[test]
    fn test_document_sections() {
        let mut doc = Document::standard();
        doc.visualization_mut()
            .unwrap()
            .replace_heading("Historical CPU Usage for web-1");
        let html = render_document(&doc);
        assert!(html.contains(r#"<input id="server-name" value="">"#));
        assert!(html.contains(
            r#"<section id="visualization-section"><h2>Historical CPU Usage for web-1</h2><canvas id="metricsChart"></canvas></section>"#
        ));
    }
}
