//! Scene references and name vetting.
//!
//! A scene name does double duty in the generated entry point: it is the
//! default-import binding and the path segment in `./scenes/<name>?scene`.
//! `SceneRef` holds the name and renders those two derived forms. It never
//! validates on construction; callers that accept untrusted names run
//! [`validate_scene_name`] first.

use std::fmt;

use crate::error::{Result, ScaffoldError};

/// A named scene module, referenced from the generated entry point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SceneRef {
    name: String,
}

impl SceneRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Import path with the bundler marker: `./scenes/<name>?scene`.
    pub fn import_path(&self) -> String {
        format!("./scenes/{}?scene", self.name)
    }

    /// Full default-import statement for this scene.
    pub fn import_line(&self) -> String {
        format!("import {} from '{}';", self.name, self.import_path())
    }
}

impl fmt::Display for SceneRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl From<&str> for SceneRef {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for SceneRef {
    fn from(name: String) -> Self {
        Self { name }
    }
}

/// Check that a name is usable as both an import binding and a path segment.
///
/// Accepts ASCII identifiers: a letter or `_` followed by letters, digits,
/// or `_`. That rule is stricter than what a JS module would tolerate but
/// guarantees the name is also a safe single path segment (no separators,
/// no `.`, no query characters).
pub fn validate_scene_name(name: &str) -> Result<()> {
    let mut chars = name.chars();

    let first = chars
        .next()
        .ok_or_else(|| ScaffoldError::invalid_name(name, "empty name"))?;
    if !first.is_ascii_alphabetic() && first != '_' {
        return Err(ScaffoldError::invalid_name(
            name,
            "must start with a letter or '_'",
        ));
    }

    for c in chars {
        if !c.is_ascii_alphanumeric() && c != '_' {
            return Err(ScaffoldError::invalid_name(
                name,
                &format!("character '{c}' is not allowed"),
            ));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn import_line_carries_path_and_marker() {
        let scene = SceneRef::new("Intro");
        assert_eq!(scene.import_path(), "./scenes/Intro?scene");
        assert_eq!(
            scene.import_line(),
            "import Intro from './scenes/Intro?scene';"
        );
    }

    #[test]
    fn valid_names_pass() {
        for name in ["Intro", "Scene1", "_private", "camelCase", "snake_case"] {
            assert!(validate_scene_name(name).is_ok(), "{name} should be valid");
        }
    }

    #[test]
    fn invalid_names_rejected() {
        for name in ["", "1stScene", "my-scene", "a/b", "Intro?scene", "a b", "名前"] {
            assert!(
                validate_scene_name(name).is_err(),
                "{name:?} should be rejected"
            );
        }
    }

    #[test]
    fn rejection_names_the_offender() {
        let err = validate_scene_name("my-scene").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("my-scene"));
        assert!(msg.contains('-'));
    }
}
