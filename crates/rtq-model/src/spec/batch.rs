use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::{
    RotationEuler,
    error::{ModelError, ModelResult},
};

/// Declarative specification of one batch retarget run.
///
/// `BatchSpec` describes *what* to enumerate and *how* each job should be
/// executed; it never changes once a run has started.
///
/// Fields cover:
/// - input discovery (`characters_dir`, `actions_dir`, the two suffixes)
/// - output placement (`output_dir`)
/// - executor parameters passed unchanged to every job (`preset`,
///   `rotation`)
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchSpec {
    /// Directory holding the character environment files.
    pub characters_dir: PathBuf,
    /// Directory holding the action input files.
    pub actions_dir: PathBuf,
    /// Directory the transformed environments are written into.
    ///
    /// Created at bootstrap if absent. The durable queue record lives here
    /// as well unless the store is pointed elsewhere.
    pub output_dir: PathBuf,
    /// File suffix selecting character environments (e.g. `"blend"`).
    pub environment_suffix: String,
    /// File suffix selecting action inputs (e.g. `"fbx"`).
    pub action_suffix: String,
    /// Retarget preset identifier handed to the executor for every job.
    pub preset: String,
    /// Rotation correction applied to the imported source armature.
    #[serde(default, skip_serializing_if = "RotationEuler::is_zero")]
    pub rotation: RotationEuler,
}

impl BatchSpec {
    /// Validate the specification before a run is started.
    ///
    /// Rules:
    /// - both suffixes are non-empty after stripping a leading dot;
    /// - the preset identifier is non-empty.
    pub fn validate(&self) -> ModelResult<()> {
        if self.normalized_environment_suffix().is_empty() {
            return Err(ModelError::MissingField("environmentSuffix"));
        }
        if self.normalized_action_suffix().is_empty() {
            return Err(ModelError::MissingField("actionSuffix"));
        }
        if self.preset.trim().is_empty() {
            return Err(ModelError::MissingField("preset"));
        }
        Ok(())
    }

    /// Environment suffix without a leading dot, lowercased.
    pub fn normalized_environment_suffix(&self) -> String {
        normalize_suffix(&self.environment_suffix)
    }

    /// Action suffix without a leading dot, lowercased.
    pub fn normalized_action_suffix(&self) -> String {
        normalize_suffix(&self.action_suffix)
    }
}

fn normalize_suffix(suffix: &str) -> String {
    suffix.trim().trim_start_matches('.').to_ascii_lowercase()
}
