//! Curve rectification for marked edges.
//!
//! Edges between two cells of the same node are drawn by the generator as a
//! wide loop. For those edges the control handles are pulled towards the
//! start point horizontally, and vertically halfway towards the start (first
//! segment) or the end (second segment), which turns the loop into a flat,
//! bracket-like connector. The start point and the final end point do not
//! move.

use log::{trace, warn};
use thiserror::Error;

use cellviz_core::{
    Document, NodeId,
    path::{PathCommand, PathData, PathError, Point},
};

use crate::config::MarkerConfig;

#[derive(Debug, Error)]
enum CurveError {
    #[error("path has no `d` attribute")]
    MissingData,

    #[error(transparent)]
    Path(#[from] PathError),

    #[error("expected one move and two cubic commands, found {0} commands")]
    Shape(usize),
}

/// Rectifies every path of every edge group carrying the rectify marker.
///
/// The marker is removed from a group once at least one of its paths was
/// rewritten. Returns the number of rewritten paths.
pub(super) fn rectify_curves(document: &mut Document, markers: &MarkerConfig) -> usize {
    let groups = document.select(|el| el.has_class(markers.edge()) && el.has_class(markers.rectify()));

    let mut rectified = 0;
    for group in groups {
        let mut group_rectified = false;
        for path in document.select_within(group, |el| el.is("path")) {
            match rectify_path(document, path) {
                Ok(()) => group_rectified = true,
                Err(err) => {
                    let id = document.element(group).and_then(|el| el.id()).unwrap_or_default();
                    warn!(edge = id, err:err; "Skipping curve rectification");
                }
            }
        }

        if group_rectified {
            rectified += 1;
            if let Some(element) = document.element_mut(group) {
                element.classes_mut().remove(markers.rectify());
            }
        }
    }
    rectified
}

fn rectify_path(document: &mut Document, path: NodeId) -> Result<(), CurveError> {
    let Some(element) = document.element_mut(path) else {
        return Err(CurveError::MissingData);
    };
    let data: PathData = element.attribute("d").ok_or(CurveError::MissingData)?.parse()?;
    let rectified = rectify(&data)?;

    trace!(before:% = data, after:% = rectified; "Rectified curve");
    element.set_attribute("d", rectified.to_string());
    Ok(())
}

/// Rewrites `M C C` geometry; any other shape is rejected.
fn rectify(path: &PathData) -> Result<PathData, CurveError> {
    let [
        PathCommand::MoveTo(start),
        PathCommand::CubicTo {
            ctrl1: a1,
            ctrl2: a2,
            end: a_end,
        },
        PathCommand::CubicTo {
            ctrl1: b1,
            ctrl2: b2,
            end: b_end,
        },
    ] = path.commands()
    else {
        return Err(CurveError::Shape(path.len()));
    };

    let squeeze_x = |x: f64| (x - start.x) / 4.0 + start.x;

    let first = PathCommand::CubicTo {
        ctrl1: Point::new(squeeze_x(a1.x), (a1.y + start.y) / 2.0),
        ctrl2: Point::new(squeeze_x(a2.x), (a2.y + start.y) / 2.0),
        end: Point::new(squeeze_x(a_end.x), a_end.y),
    };
    let second = PathCommand::CubicTo {
        ctrl1: Point::new(squeeze_x(b1.x), (b1.y + b_end.y) / 2.0),
        ctrl2: Point::new(squeeze_x(b2.x), (b2.y + b_end.y) / 2.0),
        end: *b_end,
    };

    Ok(PathData::new(vec![PathCommand::MoveTo(*start), first, second]))
}
