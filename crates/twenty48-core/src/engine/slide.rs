use serde::{Deserialize, Serialize};

/// A direction to slide/merge tiles.
///
/// `None` is the "no movement" default and is not a valid play input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SlideDirection {
    #[default]
    None,
    Up,
    Right,
    Down,
    Left,
}

impl SlideDirection {
    /// True for the two directions whose target is the high-index end of a
    /// line: Down for columns, Right for rows.
    #[inline]
    pub fn is_reverse(self) -> bool {
        matches!(self, SlideDirection::Down | SlideDirection::Right)
    }

    /// True for the directions that slide along columns.
    #[inline]
    pub fn is_vertical(self) -> bool {
        matches!(self, SlideDirection::Up | SlideDirection::Down)
    }
}

/// One row or column after compaction and merging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineSlide {
    /// The resulting line, in board order.
    pub cells: Vec<u64>,
    /// Per original position: destination index minus source index.
    /// 0 for cells that did not move (including empties).
    pub movement: Vec<i32>,
    /// Score earned by merges in this line.
    pub score_delta: u64,
}

/// Compact and merge a single line toward the target end of `direction`.
///
/// The line is read in board order (left-to-right for rows, top-to-bottom for
/// columns). Equal neighbors merge into `value * root_tile_value` at most
/// once per tile per slide; the merged slot is closed to further merges.
///
/// ```
/// use twenty48_core::engine::{slide_line, SlideDirection};
/// let slid = slide_line(&[2, 2, 4, 2], SlideDirection::Left, 2);
/// assert_eq!(slid.cells, vec![4, 4, 2, 0]);
/// assert_eq!(slid.score_delta, 4);
/// ```
pub fn slide_line(values: &[u64], direction: SlideDirection, root_tile_value: u64) -> LineSlide {
    let mut line = values.to_vec();
    if direction.is_reverse() {
        line.reverse();
    }

    let mut cells = vec![0u64; line.len()];
    let mut movement = vec![0i32; line.len()];
    let mut score_delta = 0u64;

    // Write cursor: the lowest slot still open for a placement or one merge.
    let mut new_index = 0usize;
    for (i, &value) in line.iter().enumerate() {
        if value == 0 {
            continue;
        }
        if value == cells[new_index] {
            // merge, then close the slot so no tile merges twice per slide
            cells[new_index] *= root_tile_value;
            movement[i] = new_index as i32 - i as i32;
            new_index += 1;
            score_delta += value * root_tile_value;
        } else if cells[new_index] == 0 {
            cells[new_index] = value;
            movement[i] = new_index as i32 - i as i32;
        } else {
            cells[new_index + 1] = value;
            movement[i] = (new_index + 1) as i32 - i as i32;
            new_index += 1;
        }
    }

    if direction.is_reverse() {
        cells.reverse();
        movement.reverse();
        for offset in &mut movement {
            *offset = -*offset;
        }
    }

    LineSlide {
        cells,
        movement,
        score_delta,
    }
}
