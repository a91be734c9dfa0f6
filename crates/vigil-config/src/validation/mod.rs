//! Full configuration validation.
//!
//! Each domain has its own submodule; this orchestrator calls them all
//! and collects errors into a single `ConfigError`.

mod assistant;
mod helpers;
mod misc;

#[cfg(test)]
mod tests;

use crate::schema::VigilConfig;
use vigil_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &VigilConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    misc::validate_server(&mut errors, config);
    assistant::validate_assistant(&mut errors, config);
    misc::validate_capture(&mut errors, config);
    misc::validate_speaker(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
