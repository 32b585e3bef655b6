//! Check command implementation.
//!
//! Parses scene files and validates every shape against its canvas without
//! painting anything.

use std::path::PathBuf;

use clap::Args;

use crate::error::{DoodleError, Result};
use crate::output::{display_path, plural, Printer};
use crate::scene::Scene;

/// Validate scene files without rendering
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Scene files to check
    #[arg(required = true)]
    pub files: Vec<PathBuf>,
}

pub fn run(args: CheckArgs, printer: &Printer) -> Result<()> {
    let mut invalid = 0;

    for file in &args.files {
        printer.status("Checking", &display_path(file));

        let scene = Scene::load(file)?;
        for issue in scene.check() {
            printer.error(
                "Invalid",
                &format!("shape {} ({}): {}", issue.index, issue.kind, issue.error),
            );
            invalid += 1;
        }
    }

    if invalid > 0 {
        return Err(DoodleError::Validation {
            message: format!("{} failed validation", plural(invalid, "shape", "shapes")),
            help: Some("Shapes must lie inside the canvas and use palette colours".to_string()),
        });
    }

    printer.success(
        "Finished",
        &plural(args.files.len(), "valid scene", "valid scenes"),
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_check_passes_valid_scenes() {
        let dir = tempdir().unwrap();
        let scene_path = dir.path().join("ok.yaml");

        fs::write(
            &scene_path,
            r#"
canvas: { width: 10, height: 10 }
shapes:
  - rectangle: { ll: [1, 1], ur: [4, 4], colour: red }
  - circle: { center: [5, 5], radius: 3, colour: blue }
"#,
        )
        .unwrap();

        let args = CheckArgs {
            files: vec![scene_path],
        };
        run(args, &Printer::new()).unwrap();
    }

    #[test]
    fn test_check_fails_on_invalid_shapes() {
        let dir = tempdir().unwrap();
        let scene_path = dir.path().join("bad.yaml");

        fs::write(
            &scene_path,
            r#"
canvas: { width: 10, height: 10 }
shapes:
  - rectangle: { ll: [1, 1], ur: [4, 4], colour: red }
  - circle: { center: [5, 5], radius: 3, colour: cyan }
  - triangle: { points: [[0, 0], [4, 0], [2, 14]], colour: green }
"#,
        )
        .unwrap();

        let args = CheckArgs {
            files: vec![scene_path],
        };
        let err = run(args, &Printer::new()).unwrap_err();

        match err {
            DoodleError::Validation { message, .. } => {
                assert_eq!(message, "2 shapes failed validation");
            }
            other => panic!("expected a validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_check_fails_on_unparseable_scenes() {
        let dir = tempdir().unwrap();
        let scene_path = dir.path().join("mangled.yaml");

        fs::write(&scene_path, "shapes: [").unwrap();

        let args = CheckArgs {
            files: vec![scene_path],
        };
        let err = run(args, &Printer::new()).unwrap_err();
        assert!(matches!(err, DoodleError::Scene { .. }));
    }
}
