pub mod codegen;
pub mod error;
pub mod request;
pub mod scene;

use std::path::Path;

use scene::SceneRef;

/// Derive a scene name from a scene module path.
///
/// Strips a trailing `?scene` marker and the file extension, so
/// `./scenes/Intro.tsx` and `./scenes/Intro?scene` both yield `Intro`.
/// The name is derived as-is; run [`scene::validate_scene_name`] on the
/// result before trusting it.
pub fn derive_scene_name(path: &Path) -> String {
    let file = path
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or("scene");
    let file = file.strip_suffix("?scene").unwrap_or(file);
    match file.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem.to_string(),
        _ => file.to_string(),
    }
}

/// Generate a multi-scene project entry point from plain names.
pub fn generate_project<S: AsRef<str>>(names: &[S]) -> String {
    let scenes: Vec<SceneRef> = names.iter().map(|n| SceneRef::new(n.as_ref())).collect();
    codegen::generate_project(&scenes)
}

/// Generate a single-scene project entry point.
pub fn generate_single_scene(name: &str) -> String {
    codegen::generate_single(&SceneRef::new(name))
}
