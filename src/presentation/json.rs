use serde::Serialize;

use codestat_domain::model::AggregationSnapshot;
use codestat_shared_kernel::{PresentationError, Result};

pub fn render_json(snapshot: &AggregationSnapshot) -> Result<String> {
    to_pretty_json(snapshot)
}

fn to_pretty_json<T: Serialize>(value: &T) -> Result<String> {
    let mut json = serde_json::to_string_pretty(value).map_err(|err| PresentationError::RenderFailed {
        format: "json".to_string(),
        reason: err.to_string(),
    })?;
    json.push('\n');
    Ok(json)
}
