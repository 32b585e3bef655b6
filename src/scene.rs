//! Scene definition files.
//!
//! A scene is a single YAML document describing one canvas and an ordered
//! list of shapes to paint onto it:
//!
//! ```yaml
//! name: demo            # optional output stem; file stem when absent
//! canvas:
//!   width: 20
//!   height: 20
//! shapes:
//!   - rectangle: { ll: [2, 2], ur: [5, 5], colour: red }
//!   - triangle:  { points: [[0, 0], [4, 0], [2, 4]], colour: green }
//!   - circle:    { center: [10, 10], radius: 3, colour: blue }
//! ```
//!
//! Points are two-element `[x, y]` sequences; `colour` also accepts the
//! `color` spelling.

use std::path::Path;

use serde::Deserialize;

use crate::canvas::Canvas;
use crate::error::{DoodleError, Result};
use crate::shapes::{Circle, Rectangle, Shape, ShapeKind, Triangle};

/// A parsed scene: canvas dimensions plus the shapes to draw, in order.
#[derive(Debug, Clone, Deserialize)]
pub struct Scene {
    /// Output stem for the rendered image.
    #[serde(default)]
    pub name: Option<String>,

    /// Canvas dimensions.
    pub canvas: CanvasSpec,

    /// Shapes to draw, painted first to last.
    ///
    /// Entries are single-key maps (`- rectangle: {..}`) rather than YAML
    /// tags; `singleton_map_recursive` maps that form onto the enum.
    #[serde(default, with = "serde_yaml::with::singleton_map_recursive")]
    pub shapes: Vec<ShapeSpec>,
}

/// Canvas dimensions of a scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct CanvasSpec {
    pub width: u32,
    pub height: u32,
}

/// One shape entry in a scene file, tagged by kind.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeSpec {
    Rectangle(RectangleSpec),
    Triangle(TriangleSpec),
    Circle(CircleSpec),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RectangleSpec {
    pub ll: [i32; 2],
    pub ur: [i32; 2],
    #[serde(alias = "color")]
    pub colour: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TriangleSpec {
    pub points: [[i32; 2]; 3],
    #[serde(alias = "color")]
    pub colour: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CircleSpec {
    pub center: [i32; 2],
    pub radius: i32,
    #[serde(alias = "color")]
    pub colour: String,
}

impl ShapeSpec {
    /// Build the drawable shape this entry describes.
    pub fn to_shape(&self) -> Shape {
        match self {
            ShapeSpec::Rectangle(spec) => {
                Rectangle::new(spec.ll.into(), spec.ur.into(), spec.colour.clone()).into()
            }
            ShapeSpec::Triangle(spec) => Triangle::new(
                spec.points[0].into(),
                spec.points[1].into(),
                spec.points[2].into(),
                spec.colour.clone(),
            )
            .into(),
            ShapeSpec::Circle(spec) => {
                Circle::new(spec.center.into(), spec.radius, spec.colour.clone()).into()
            }
        }
    }
}

/// A shape that failed validation, with its position in the scene.
#[derive(Debug)]
pub struct SceneIssue {
    /// 1-based index of the shape in the scene's list.
    pub index: usize,
    pub kind: ShapeKind,
    pub error: DoodleError,
}

impl Scene {
    /// Load a scene from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| DoodleError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read scene: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse a scene from YAML text.
    pub fn parse(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| DoodleError::Scene {
            message: format!("Invalid scene: {}", e),
            help: Some(
                "A scene is a YAML document with a canvas (width, height) and a list of shapes"
                    .to_string(),
            ),
        })
    }

    /// Paint every shape in order onto a fresh canvas.
    ///
    /// Fails fast on the first shape that cannot be drawn, naming its
    /// 1-based position and kind.
    pub fn render(&self) -> Result<Canvas> {
        let mut canvas = Canvas::new(self.canvas.width, self.canvas.height);

        for (i, spec) in self.shapes.iter().enumerate() {
            let shape = spec.to_shape();
            shape.draw(&mut canvas).map_err(|e| DoodleError::Scene {
                message: format!("shape {} ({}) cannot be drawn: {}", i + 1, shape.kind(), e),
                help: None,
            })?;
        }

        Ok(canvas)
    }

    /// Validate every shape against the scene's canvas without painting.
    ///
    /// Unlike [`Scene::render`] this does not stop at the first failure; it
    /// returns one issue per invalid shape.
    pub fn check(&self) -> Vec<SceneIssue> {
        let canvas = Canvas::new(self.canvas.width, self.canvas.height);
        let mut issues = Vec::new();

        for (i, spec) in self.shapes.iter().enumerate() {
            let shape = spec.to_shape();
            if let Err(error) = shape.validate(&canvas) {
                issues.push(SceneIssue {
                    index: i + 1,
                    kind: shape.kind(),
                    error,
                });
            }
        }

        issues
    }

    /// The stem of the output file: the scene's name, or the scene file's
    /// stem when no name is given.
    pub fn output_stem(&self, path: &Path) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("scene")
                .to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::encode_ppm;
    use crate::types::Colour;

    const DEMO: &str = r#"
name: demo
canvas:
  width: 20
  height: 20
shapes:
  - rectangle: { ll: [2, 2], ur: [5, 5], colour: red }
  - triangle:  { points: [[0, 0], [4, 0], [2, 4]], colour: green }
  - circle:    { center: [10, 10], radius: 3, colour: blue }
"#;

    // -- parsing --

    #[test]
    fn test_parse_full_scene() {
        let scene = Scene::parse(DEMO).unwrap();

        assert_eq!(scene.name.as_deref(), Some("demo"));
        assert_eq!(scene.canvas, CanvasSpec { width: 20, height: 20 });
        assert_eq!(scene.shapes.len(), 3);
        assert_eq!(
            scene.shapes[0],
            ShapeSpec::Rectangle(RectangleSpec {
                ll: [2, 2],
                ur: [5, 5],
                colour: "red".to_string(),
            })
        );
        assert_eq!(scene.shapes[1].to_shape().kind(), ShapeKind::Triangle);
        assert_eq!(scene.shapes[2].to_shape().kind(), ShapeKind::Circle);
    }

    #[test]
    fn test_parse_minimal_scene() {
        let scene = Scene::parse("canvas: { width: 4, height: 6 }").unwrap();

        assert!(scene.name.is_none());
        assert_eq!(scene.canvas, CanvasSpec { width: 4, height: 6 });
        assert!(scene.shapes.is_empty());
    }

    #[test]
    fn test_parse_accepts_the_color_spelling() {
        let scene = Scene::parse(
            "canvas: { width: 8, height: 8 }\nshapes:\n  - circle: { center: [4, 4], radius: 2, color: brown }",
        )
        .unwrap();

        match &scene.shapes[0] {
            ShapeSpec::Circle(spec) => assert_eq!(spec.colour, "brown"),
            other => panic!("expected a circle, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_rejects_unknown_shape_kinds() {
        let err = Scene::parse(
            "canvas: { width: 8, height: 8 }\nshapes:\n  - square: { ll: [0, 0], ur: [2, 2], colour: red }",
        )
        .unwrap_err();

        assert!(matches!(err, DoodleError::Scene { .. }));
    }

    #[test]
    fn test_parse_requires_a_canvas() {
        let err = Scene::parse("name: missing").unwrap_err();
        assert!(matches!(err, DoodleError::Scene { .. }));
    }

    #[test]
    fn test_parse_rejects_malformed_yaml() {
        let err = Scene::parse("canvas: [not a mapping").unwrap_err();
        assert!(matches!(err, DoodleError::Scene { .. }));
    }

    // -- rendering --

    #[test]
    fn test_render_paints_every_shape() {
        let canvas = Scene::parse(DEMO).unwrap().render().unwrap();

        assert_eq!(canvas.dimensions(), (20, 20));
        assert_eq!(canvas.get_pixel(3, 3).unwrap(), Colour::Red);
        assert_eq!(canvas.get_pixel(2, 4).unwrap(), Colour::Green);
        assert_eq!(canvas.get_pixel(10, 10).unwrap(), Colour::Blue);
        assert_eq!(canvas.get_pixel(19, 19).unwrap(), Colour::White);
    }

    #[test]
    fn test_render_paints_in_scene_order() {
        let scene = Scene::parse(
            r#"
canvas: { width: 6, height: 6 }
shapes:
  - rectangle: { ll: [1, 1], ur: [4, 4], colour: red }
  - rectangle: { ll: [2, 2], ur: [3, 3], colour: black }
"#,
        )
        .unwrap();

        let canvas = scene.render().unwrap();
        assert_eq!(canvas.get_pixel(1, 1).unwrap(), Colour::Red);
        assert_eq!(canvas.get_pixel(2, 2).unwrap(), Colour::Black);
    }

    #[test]
    fn test_render_snapshot() {
        let scene = Scene::parse(
            r#"
canvas: { width: 8, height: 8 }
shapes:
  - rectangle: { ll: [1, 1], ur: [3, 3], colour: red }
  - circle: { center: [5, 5], radius: 1, colour: blue }
"#,
        )
        .unwrap();

        let mut buffer = Vec::new();
        encode_ppm(&scene.render().unwrap(), &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        insta::assert_snapshot!(text, @r###"
        P3
        8 8
        255
        255 255 255 255 255 255 255 255 255 255 255 255 255 255 255 255 255 255 255 255 255 255 255 255
        255 255 255 255 0 0 255 0 0 255 255 255 255 255 255 255 255 255 255 255 255 255 255 255
        255 255 255 255 0 0 255 0 0 255 255 255 255 255 255 255 255 255 255 255 255 255 255 255
        255 255 255 255 255 255 255 255 255 255 255 255 255 255 255 255 255 255 255 255 255 255 255 255
        255 255 255 255 255 255 255 255 255 255 255 255 255 255 255 0 0 255 255 255 255 255 255 255
        255 255 255 255 255 255 255 255 255 255 255 255 0 0 255 0 0 255 0 0 255 255 255 255
        255 255 255 255 255 255 255 255 255 255 255 255 255 255 255 0 0 255 255 255 255 255 255 255
        255 255 255 255 255 255 255 255 255 255 255 255 255 255 255 255 255 255 255 255 255 255 255 255
        "###);
    }

    #[test]
    fn test_render_names_the_failing_shape() {
        let scene = Scene::parse(
            r#"
canvas: { width: 10, height: 10 }
shapes:
  - rectangle: { ll: [1, 1], ur: [4, 4], colour: red }
  - circle: { center: [5, 5], radius: 8, colour: blue }
"#,
        )
        .unwrap();

        let err = scene.render().unwrap_err();
        match err {
            DoodleError::Scene { message, .. } => {
                assert!(message.contains("shape 2 (Circle)"), "{}", message);
            }
            other => panic!("expected a scene error, got {:?}", other),
        }
    }

    // -- checking --

    #[test]
    fn test_check_reports_every_invalid_shape() {
        let scene = Scene::parse(
            r#"
canvas: { width: 10, height: 10 }
shapes:
  - rectangle: { ll: [1, 1], ur: [4, 4], colour: red }
  - triangle: { points: [[0, 0], [4, 0], [2, 14]], colour: green }
  - circle: { center: [5, 5], radius: 2, colour: cyan }
"#,
        )
        .unwrap();

        let issues = scene.check();
        assert_eq!(issues.len(), 2);

        assert_eq!(issues[0].index, 2);
        assert_eq!(issues[0].kind, ShapeKind::Triangle);
        assert!(matches!(issues[0].error, DoodleError::OutOfBounds { .. }));

        assert_eq!(issues[1].index, 3);
        assert_eq!(issues[1].kind, ShapeKind::Circle);
        assert!(matches!(issues[1].error, DoodleError::UnknownColour { .. }));
    }

    #[test]
    fn test_check_passes_a_valid_scene() {
        assert!(Scene::parse(DEMO).unwrap().check().is_empty());
    }

    // -- files --

    #[test]
    fn test_output_stem_prefers_the_scene_name() {
        let scene = Scene::parse(DEMO).unwrap();
        assert_eq!(scene.output_stem(Path::new("scenes/demo-file.yaml")), "demo");
    }

    #[test]
    fn test_output_stem_falls_back_to_the_file_stem() {
        let scene = Scene::parse("canvas: { width: 4, height: 4 }").unwrap();
        assert_eq!(scene.output_stem(Path::new("scenes/splash.yaml")), "splash");
    }

    #[test]
    fn test_load_reads_a_scene_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("demo.yaml");
        std::fs::write(&path, DEMO).unwrap();

        let scene = Scene::load(&path).unwrap();
        assert_eq!(scene.shapes.len(), 3);
    }

    #[test]
    fn test_load_missing_file_fails() {
        let err = Scene::load(Path::new("no-such-scene.yaml")).unwrap_err();
        assert!(matches!(err, DoodleError::Io { .. }));
    }
}
