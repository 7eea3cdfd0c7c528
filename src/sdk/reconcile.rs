//! Log scraping and status reconciliation

use tracing::{debug, info, warn};

use crate::domain::resources::{extract_references, ResourceStatus};
use crate::errors::SdkError;
use crate::sdk::client::CloudApi;

/// Fetches the logs once, then queries each distinct resource in first-seen
/// order and returns one `"<type>:<id> is healthy"` line per `ok` resource.
///
/// Any error stops the pass: later resources are not queried and outcomes
/// gathered so far are dropped.
pub async fn discover_resources(api: &dyn CloudApi) -> Result<Vec<String>, SdkError> {
    let logs = api.fetch_logs().await?;
    let references = extract_references(&logs);
    debug!(references = references.len(), "extracted resource references");

    let mut healthy = Vec::new();
    for reference in &references {
        match api.fetch_resource_status(reference).await {
            Ok(ResourceStatus::Ok) => healthy.push(reference.healthy_outcome()),
            Ok(ResourceStatus::NotFound) => {
                debug!(resource = %reference, "resource not found, skipping");
            }
            Err(err) => {
                warn!(resource = %reference, error = %err, "discovery aborted");
                return Err(err);
            }
        }
    }

    info!(
        references = references.len(),
        healthy = healthy.len(),
        "discovery complete"
    );
    Ok(healthy)
}
