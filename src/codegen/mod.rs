//! Entry-point generation.
//!
//! Renders the Motion Canvas `project.ts` that imports every scene module
//! and registers the lot with `makeProject`. Two shapes exist upstream and
//! both are kept: the multi-scene project (any number of scenes) and the
//! single-scene project (fixed arity, slightly tighter layout). Generation
//! is a pure transformation: input order decides both import order and list
//! order, duplicates are kept, and no validation happens here.

use crate::scene::SceneRef;

#[cfg(test)]
mod tests;

/// Fixed first line of every generated entry point.
pub const CORE_IMPORT: &str =
    "import {makeProject} from '@imaginix-inc/motion-canvas-core';";

/// Generate a multi-scene project entry point.
///
/// One import line per scene in input order, then the default-exported
/// `makeProject` call listing the same names in the same order. An empty
/// slice yields `scenes: []` with no per-scene imports.
pub fn generate_project(scenes: &[SceneRef]) -> String {
    let mut out = String::with_capacity(192 + scenes.len() * 64);

    out.push_str(CORE_IMPORT);
    out.push_str("\n\n");

    for scene in scenes {
        out.push_str(&scene.import_line());
        out.push('\n');
    }

    out.push_str("\nexport default makeProject({\n");
    out.push_str("  experimentalFeatures: true,\n");
    out.push_str("  scenes: [");
    for (i, scene) in scenes.iter().enumerate() {
        out.push_str(scene.name());
        // explicit last-element check; a one-element list gets no comma
        if i + 1 != scenes.len() {
            out.push_str(", ");
        }
    }
    out.push_str("],\n});\n");

    out
}

/// Generate a single-scene project entry point.
///
/// Same structure as the multi-scene form except the import block runs
/// straight into the export with no blank line between them, matching the
/// single-scene layout as authored upstream.
pub fn generate_single(scene: &SceneRef) -> String {
    let mut out = String::with_capacity(256);

    out.push_str(CORE_IMPORT);
    out.push_str("\n\n");
    out.push_str(&scene.import_line());
    out.push('\n');
    out.push_str("export default makeProject({\n");
    out.push_str("  experimentalFeatures: true,\n");
    out.push_str(&format!("  scenes: [{}],\n", scene.name()));
    out.push_str("});\n");

    out
}
