use util::{
  error::XWordResult,
  grid::{Grid, Gridlike},
};
use xword_gen::{Assignment, XWordStructure};

const BLOCKED: char = '█';
const UNFILLED: char = ' ';

/// The filled grid as text, one line per row.
pub fn render(structure: &XWordStructure, assignment: &Assignment) -> XWordResult<String> {
  let letters = assignment.letter_grid(structure)?;
  let cells = letters
    .positions()
    .map(|pos| {
      if !structure.available(pos) {
        BLOCKED
      } else {
        letters.get(pos).copied().flatten().unwrap_or(UNFILLED)
      }
    })
    .collect();
  Ok(Grid::from_vec(cells, letters.width(), letters.height())?.to_string())
}

#[cfg(test)]
mod tests {
  #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

  use googletest::prelude::*;
  use xword_gen::{Assignment, Direction, Slot, XWordStructure};

  use super::render;

  fn structure() -> XWordStructure {
    XWordStructure::from_layout(
      "___
       _XX",
    )
    .unwrap()
  }

  #[gtest]
  fn test_render_fill() {
    let assignment: Assignment = [
      (Slot { row: 0, col: 0, direction: Direction::Across, length: 3 }, "CAT"),
      (Slot { row: 0, col: 0, direction: Direction::Down, length: 2 }, "CO"),
    ]
    .into_iter()
    .collect();
    expect_that!(render(&structure(), &assignment), ok(eq("CAT\nO██\n")));
  }

  #[gtest]
  fn test_render_partial() {
    let assignment: Assignment =
      [(Slot { row: 0, col: 0, direction: Direction::Down, length: 2 }, "CO")]
        .into_iter()
        .collect();
    expect_that!(render(&structure(), &assignment), ok(eq("C  \nO██\n")));
  }
}
