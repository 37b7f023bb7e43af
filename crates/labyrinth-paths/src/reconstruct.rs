//! Turning predecessor tables into paths and drawing them onto a grid.

use labyrinth_core::{CellState, Grid, MazeError, Point};

/// Walk `predecessor` back from `target` to `source`.
///
/// Returns the vertices in forward order, source first. An unreached target
/// (no predecessor and not the source itself) gives an empty path. The walk
/// is bounded by the table length: a chain that cycles, or that dead-ends
/// before reaching `source`, is reported as [`MazeError::CorruptPathState`].
pub fn reconstruct(
    predecessor: &[Option<usize>],
    source: usize,
    target: usize,
) -> Result<Vec<usize>, MazeError> {
    let n = predecessor.len();
    if target >= n || source >= n {
        return Ok(Vec::new());
    }
    if target != source && predecessor[target].is_none() {
        return Ok(Vec::new());
    }

    let mut path = vec![target];
    let mut current = target;
    let mut steps = 0usize;
    while current != source {
        if steps >= n {
            return Err(MazeError::CorruptPathState { target, steps });
        }
        let Some(prev) = predecessor.get(current).copied().flatten() else {
            return Err(MazeError::CorruptPathState { target, steps });
        };
        path.push(prev);
        current = prev;
        steps += 1;
    }

    path.reverse();
    Ok(path)
}

/// Overwrite the cells of `path` with [`CellState::SolutionMark`].
///
/// Start and End cells keep their markers. Returns the number of cells
/// marked.
pub fn mark_path(grid: &mut Grid, path: &[usize]) -> Result<usize, MazeError> {
    let mut marked = 0;
    for &v in path {
        let p = grid.point(v).ok_or_else(|| {
            let w = grid.width().max(1) as usize;
            MazeError::OutOfBounds {
                point: Point::new((v % w) as i32, (v / w) as i32),
                size: grid.size(),
            }
        })?;
        if grid.get(p)?.is_opening() {
            continue;
        }
        grid.set(p, CellState::SolutionMark)?;
        marked += 1;
    }
    log::debug!("marked {marked} of {} path cells", path.len());
    Ok(marked)
}
