/// Environment preflight: every external tool must answer a version query
/// before the run touches the filesystem or network.
use tracing::{error, info};

use bootanim_shared::errors::{BootAnimError, BootAnimResult};

use crate::workers::ExternalTool;

/// Probe each tool in order. All missing tools are reported (with install
/// hints) before failing.
pub async fn check_tools(tools: &[&dyn ExternalTool]) -> BootAnimResult<()> {
    let mut missing = Vec::new();

    for tool in tools {
        match tool.probe_version().await {
            Some(version) => info!("Found {}: {}", tool.name(), version),
            None => {
                error!("{} is not installed or not in your PATH.", tool.name());
                error!("Please install {} to continue:", tool.name());
                for hint in tool.install_hints() {
                    error!("  - {}", hint);
                }
                missing.push(tool.name().to_string());
            }
        }
    }

    if missing.is_empty() {
        Ok(())
    } else {
        Err(BootAnimError::MissingTool { tools: missing })
    }
}
