use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};

use canvas_scaffold::request::ScaffoldRequest;
use canvas_scaffold::scene::{validate_scene_name, SceneRef};

#[derive(Parser)]
#[command(name = "scaffold", version)]
#[command(about = "Scaffolds Motion Canvas project entry points")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a multi-scene project entry point
    Project {
        /// Scene names, in import order
        names: Vec<String>,

        /// Read scene names from a session-finish JSON request file
        #[arg(long)]
        from_json: Option<PathBuf>,

        /// Derive scene names from the modules in a scenes directory
        #[arg(long)]
        scenes_dir: Option<PathBuf>,

        /// Write output to file instead of stdout
        #[arg(short)]
        o: Option<PathBuf>,

        /// Treat invalid scene names as errors
        #[arg(long)]
        strict: bool,
    },

    /// Generate a single-scene project entry point
    Scene {
        /// Scene name
        name: String,

        /// Write output to file instead of stdout
        #[arg(short)]
        o: Option<PathBuf>,

        /// Treat an invalid scene name as an error
        #[arg(long)]
        strict: bool,
    },

    /// Validate scene names without producing output
    Check {
        /// Scene names to validate
        names: Vec<String>,

        /// Read scene names from a session-finish JSON request file
        #[arg(long)]
        from_json: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Project {
            names,
            from_json,
            scenes_dir,
            o,
            strict,
        } => {
            let names = collect_names(names, from_json.as_deref(), scenes_dir.as_deref());
            vet_names(&names, strict);

            let scenes: Vec<SceneRef> = names.iter().map(SceneRef::new).collect();
            let output = canvas_scaffold::codegen::generate_project(&scenes);
            write_output(&output, o.as_deref());
        }

        Commands::Scene { name, o, strict } => {
            vet_names(std::slice::from_ref(&name), strict);

            let output = canvas_scaffold::generate_single_scene(&name);
            write_output(&output, o.as_deref());
        }

        Commands::Check { names, from_json } => {
            let names = collect_names(names, from_json.as_deref(), None);
            if names.is_empty() {
                eprintln!("error: no scene names given");
                process::exit(1);
            }

            let mut invalid = 0;
            for name in &names {
                match validate_scene_name(name) {
                    Ok(()) => eprintln!("  {name} ... ok"),
                    Err(e) => {
                        eprintln!("  {name} ... {e}");
                        invalid += 1;
                    }
                }
            }
            if invalid > 0 {
                eprintln!("{invalid} of {} name(s) invalid", names.len());
                process::exit(1);
            }
            eprintln!("{} name(s) ok", names.len());
        }
    }
}

/// Merge explicit names with those from a JSON request and a directory scan.
/// Explicit names keep their given order and come first.
fn collect_names(
    mut names: Vec<String>,
    from_json: Option<&Path>,
    scenes_dir: Option<&Path>,
) -> Vec<String> {
    if let Some(path) = from_json {
        match ScaffoldRequest::from_file(path) {
            Ok(req) => names.extend(req.scene_names),
            Err(e) => {
                eprintln!("error: {e}");
                process::exit(1);
            }
        }
    }

    if let Some(dir) = scenes_dir {
        match scan_scenes_dir(dir) {
            Ok(scanned) => names.extend(scanned),
            Err(e) => {
                eprintln!("error: cannot scan '{}': {e}", dir.display());
                process::exit(1);
            }
        }
    }

    names
}

/// Collect scene names from the `.ts`/`.tsx` modules in a directory.
/// Sorted lexicographically; read_dir order is platform-dependent.
fn scan_scenes_dir(dir: &Path) -> std::io::Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        let is_module = path
            .extension()
            .map(|ext| ext == "ts" || ext == "tsx")
            .unwrap_or(false);
        if path.is_file() && is_module {
            names.push(canvas_scaffold::derive_scene_name(&path));
        }
    }
    names.sort();
    Ok(names)
}

/// Print a warning per invalid name, or fail outright under --strict.
fn vet_names(names: &[String], strict: bool) {
    let mut invalid = 0;
    for name in names {
        if let Err(e) = validate_scene_name(name) {
            if strict {
                eprintln!("error: {e}");
            } else {
                eprintln!("warning: {e}");
            }
            invalid += 1;
        }
    }
    if strict && invalid > 0 {
        process::exit(1);
    }
}

fn write_output(output: &str, path: Option<&Path>) {
    if let Some(out_path) = path {
        match fs::write(out_path, output) {
            Ok(()) => {
                eprintln!(
                    "wrote entry point to {} ({} bytes)",
                    out_path.display(),
                    output.len()
                );
            }
            Err(e) => {
                eprintln!("error: cannot write '{}': {e}", out_path.display());
                process::exit(1);
            }
        }
    } else {
        print!("{output}");
    }
}
