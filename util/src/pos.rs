use std::{
  fmt::Display,
  ops::{Add, Mul},
};

/// A cell coordinate. `x` is the column and `y` the row, both counted from the
/// top-left corner.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub struct Pos {
  pub x: i32,
  pub y: i32,
}

impl Pos {
  pub const fn transpose(&self) -> Self {
    Self { x: self.y, y: self.x }
  }
}

impl Add<Diff> for Pos {
  type Output = Self;

  fn add(self, rhs: Diff) -> Self {
    Self { x: self.x + rhs.x, y: self.y + rhs.y }
  }
}

impl Display for Pos {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "({}, {})", self.x, self.y)
  }
}

/// An offset between two cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Diff {
  pub x: i32,
  pub y: i32,
}

impl Mul<Diff> for i32 {
  type Output = Diff;

  fn mul(self, rhs: Diff) -> Diff {
    Diff { x: self * rhs.x, y: self * rhs.y }
  }
}

impl Mul<i32> for Diff {
  type Output = Diff;

  fn mul(self, rhs: i32) -> Self {
    Self { x: self.x * rhs, y: self.y * rhs }
  }
}

impl Display for Diff {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "({}, {})", self.x, self.y)
  }
}

#[cfg(test)]
mod tests {
  use googletest::prelude::*;

  use super::{Diff, Pos};

  #[gtest]
  fn test_step_along() {
    let start = Pos { x: 2, y: 1 };
    let step = Diff { x: 0, y: 1 };
    expect_that!(start + 3 * step, eq(Pos { x: 2, y: 4 }));
    expect_that!(start + step * 0, eq(start));
  }

  #[gtest]
  fn test_transpose() {
    expect_that!(Pos { x: 5, y: -1 }.transpose(), eq(Pos { x: -1, y: 5 }));
    expect_that!(Pos { x: 3, y: 3 }.transpose(), eq(Pos { x: 3, y: 3 }));
  }
}
