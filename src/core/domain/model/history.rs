//! Domain model for `/server_history/{id}`.

use serde::{Deserialize, Serialize};

/// A server's past CPU usage: one label per data point, in order.
///
/// Label and point counts are not checked against each other; the chart
/// pairs them by position and leaves unmatched entries unplotted.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct HistorySeries {
    pub labels: Vec<String>,
    pub data: Vec<f64>,
}
