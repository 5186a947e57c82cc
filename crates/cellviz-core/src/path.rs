//! Path geometry for edge strokes.
//!
//! Graphviz draws every edge spline as one absolute move followed by a run
//! of absolute cubic Bézier segments. [`PathData`] models exactly that
//! subset of the SVG path grammar: parsing rejects any other command, so a
//! successful parse guarantees the geometry can be rewritten safely.
//!
//! Parsing is delegated to [`svgtypes`], which also splits implicit command
//! repetition (`C x1,y1 x2,y2 x,y x1,y1 ...`) into separate segments.

use std::{fmt, str::FromStr};

use svgtypes::{PathParser, PathSegment};
use thiserror::Error;

/// A point in user space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// One command of an edge path. All coordinates are absolute.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    /// `M x,y`
    MoveTo(Point),
    /// `C x1,y1 x2,y2 x,y`
    CubicTo { ctrl1: Point, ctrl2: Point, end: Point },
}

/// Errors produced while reading path data.
#[derive(Debug, Error, PartialEq)]
pub enum PathError {
    #[error("invalid path data: {0}")]
    Syntax(String),

    #[error("unsupported path command `{0}`, only absolute M and C are handled")]
    Unsupported(char),
}

/// A sequence of absolute move and cubic commands.
///
/// # Example
///
/// ```
/// use cellviz_core::path::{PathCommand, PathData, Point};
///
/// let path: PathData = "M10,-20C10,-40 30,-40 30,-60".parse().unwrap();
/// assert_eq!(path.commands()[0], PathCommand::MoveTo(Point::new(10.0, -20.0)));
/// assert_eq!(path.to_string(), "M10,-20 C10,-40 30,-40 30,-60");
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PathData(Vec<PathCommand>);

impl PathData {
    pub fn new(commands: Vec<PathCommand>) -> Self {
        Self(commands)
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.0
    }

    pub fn into_commands(self) -> Vec<PathCommand> {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromStr for PathData {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut commands = Vec::new();
        for segment in PathParser::from(s) {
            let segment = segment.map_err(|err| PathError::Syntax(err.to_string()))?;
            let command = match segment {
                PathSegment::MoveTo { abs: true, x, y } => PathCommand::MoveTo(Point::new(x, y)),
                PathSegment::CurveTo {
                    abs: true,
                    x1,
                    y1,
                    x2,
                    y2,
                    x,
                    y,
                } => PathCommand::CubicTo {
                    ctrl1: Point::new(x1, y1),
                    ctrl2: Point::new(x2, y2),
                    end: Point::new(x, y),
                },
                other => return Err(PathError::Unsupported(command_letter(&other))),
            };
            commands.push(command);
        }
        Ok(Self(commands))
    }
}

/// Returns the SVG letter of a segment, lower case for relative forms.
fn command_letter(segment: &PathSegment) -> char {
    let (letter, abs) = match *segment {
        PathSegment::MoveTo { abs, .. } => ('M', abs),
        PathSegment::LineTo { abs, .. } => ('L', abs),
        PathSegment::HorizontalLineTo { abs, .. } => ('H', abs),
        PathSegment::VerticalLineTo { abs, .. } => ('V', abs),
        PathSegment::CurveTo { abs, .. } => ('C', abs),
        PathSegment::SmoothCurveTo { abs, .. } => ('S', abs),
        PathSegment::Quadratic { abs, .. } => ('Q', abs),
        PathSegment::SmoothQuadratic { abs, .. } => ('T', abs),
        PathSegment::EllipticalArc { abs, .. } => ('A', abs),
        PathSegment::ClosePath { abs } => ('Z', abs),
    };
    if abs {
        letter
    } else {
        letter.to_ascii_lowercase()
    }
}

impl fmt::Display for PathData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, command) in self.0.iter().enumerate() {
            if idx > 0 {
                f.write_str(" ")?;
            }
            match command {
                PathCommand::MoveTo(p) => write!(f, "M{}", Coord(*p))?,
                PathCommand::CubicTo { ctrl1, ctrl2, end } => write!(
                    f,
                    "C{} {} {}",
                    Coord(*ctrl1),
                    Coord(*ctrl2),
                    Coord(*end)
                )?,
            }
        }
        Ok(())
    }
}

/// Formats a point as `x,y` using the shortest exact representation.
struct Coord(Point);

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", Number(self.0.x), Number(self.0.y))
    }
}

struct Number(f64);

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Avoid printing "-0"
        if self.0 == 0.0 {
            f.write_str("0")
        } else {
            write!(f, "{}", self.0)
        }
    }
}
