//! Wire shape of the upstream scaffolding request.
//!
//! The scaffolding service hands over scene names as a session-finish JSON
//! payload. Field names follow that payload's camelCase spelling.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScaffoldError};
use crate::scene::SceneRef;

/// A session-finish request: which session to scaffold and which scenes it
/// produced, in playback order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScaffoldRequest {
    #[serde(rename = "sessionId", default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<i64>,

    #[serde(rename = "sceneNames")]
    pub scene_names: Vec<String>,
}

impl ScaffoldRequest {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path).map_err(|e| ScaffoldError::io(path, e))?;
        Self::from_json(&json)
    }

    pub fn scenes(&self) -> Vec<SceneRef> {
        self.scene_names.iter().map(SceneRef::new).collect()
    }
}
