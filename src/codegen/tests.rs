use super::*;

fn refs(names: &[&str]) -> Vec<SceneRef> {
    names.iter().map(|n| SceneRef::new(*n)).collect()
}

#[test]
fn multi_scene_exact_output() {
    let out = generate_project(&refs(&["Intro", "Outro"]));
    assert_eq!(
        out,
        "import {makeProject} from '@imaginix-inc/motion-canvas-core';\n\
         \n\
         import Intro from './scenes/Intro?scene';\n\
         import Outro from './scenes/Outro?scene';\n\
         \n\
         export default makeProject({\n  \
         experimentalFeatures: true,\n  \
         scenes: [Intro, Outro],\n\
         });\n"
    );
}

#[test]
fn single_scene_exact_output() {
    let out = generate_single(&SceneRef::new("Intro"));
    assert_eq!(
        out,
        "import {makeProject} from '@imaginix-inc/motion-canvas-core';\n\
         \n\
         import Intro from './scenes/Intro?scene';\n\
         export default makeProject({\n  \
         experimentalFeatures: true,\n  \
         scenes: [Intro],\n\
         });\n"
    );
}

#[test]
fn core_import_comes_first() {
    let out = generate_project(&refs(&["A"]));
    assert!(out.starts_with(CORE_IMPORT));
    let out = generate_single(&SceneRef::new("A"));
    assert!(out.starts_with(CORE_IMPORT));
}

#[test]
fn imports_follow_input_order() {
    let out = generate_project(&refs(&["Outro", "Intro", "Middle"]));
    let outro = out.find("import Outro").unwrap();
    let intro = out.find("import Intro").unwrap();
    let middle = out.find("import Middle").unwrap();
    assert!(outro < intro);
    assert!(intro < middle);
    assert!(out.contains("scenes: [Outro, Intro, Middle]"));
}

#[test]
fn one_element_list_has_no_comma() {
    let out = generate_project(&refs(&["Solo"]));
    assert!(out.contains("scenes: [Solo],"));
    assert!(!out.contains("Solo,"), "one-element list must not grow a comma");
}

#[test]
fn empty_sequence_yields_empty_list() {
    let out = generate_project(&[]);
    assert!(out.contains("scenes: [],"));
    assert_eq!(
        out.matches("./scenes/").count(),
        0,
        "no per-scene imports for an empty sequence"
    );
    assert!(out.contains(CORE_IMPORT));
}

#[test]
fn duplicates_are_kept() {
    let out = generate_project(&refs(&["Loop", "Loop"]));
    assert_eq!(out.matches("import Loop from './scenes/Loop?scene';").count(), 2);
    assert!(out.contains("scenes: [Loop, Loop]"));
}

#[test]
fn experimental_features_constant() {
    for out in [
        generate_project(&[]),
        generate_project(&refs(&["A", "B", "C"])),
        generate_single(&SceneRef::new("A")),
    ] {
        assert!(out.contains("experimentalFeatures: true,"));
    }
}

#[test]
fn multi_separates_imports_from_export_with_blank_line() {
    let out = generate_project(&refs(&["A"]));
    assert!(out.contains("?scene';\n\nexport default"));
    // the single-scene layout runs straight into the export
    let single = generate_single(&SceneRef::new("A"));
    assert!(single.contains("?scene';\nexport default"));
}

#[test]
fn malformed_names_pass_through_unvalidated() {
    let out = generate_project(&refs(&["not a name"]));
    assert!(out.contains("import not a name from './scenes/not a name?scene';"));
}
