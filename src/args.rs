use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use xword_gen::{SolverConfig, ValueOrder};

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum ValueOrderArg {
  SharedCandidates,
  Eliminations,
}

impl From<ValueOrderArg> for ValueOrder {
  fn from(order: ValueOrderArg) -> Self {
    match order {
      ValueOrderArg::SharedCandidates => ValueOrder::SharedCandidates,
      ValueOrderArg::Eliminations => ValueOrder::Eliminations,
    }
  }
}

/// Fills a crossword grid from a word list.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
  /// Grid layout, one row per line: `_` for open cells, `X` or `#` for blocked
  /// ones.
  pub structure: PathBuf,

  /// Word list, one word per line.
  pub words: PathBuf,

  /// Also write the filled grid to this file.
  pub output: Option<PathBuf>,

  /// Skip arc consistency during search.
  #[arg(long)]
  pub no_inference: bool,

  #[arg(long)]
  pub node_limit: Option<u64>,

  /// Shuffle the word list with this seed before solving.
  #[arg(long)]
  pub seed: Option<u64>,

  #[arg(long, default_value = "shared-candidates")]
  pub value_order: ValueOrderArg,
}

impl Args {
  pub fn solver_config(&self) -> SolverConfig {
    SolverConfig::default()
      .with_arc_consistency(!self.no_inference)
      .with_node_limit(self.node_limit)
      .with_shuffle_seed(self.seed)
      .with_value_order(self.value_order.into())
  }
}

#[cfg(test)]
mod tests {
  #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

  use clap::Parser;
  use googletest::prelude::*;
  use xword_gen::ValueOrder;

  use super::Args;

  #[gtest]
  fn test_defaults() {
    let args = Args::try_parse_from(["xword-fill", "grid.txt", "words.txt"]).unwrap();
    expect_that!(args.output, none());
    let config = args.solver_config();
    expect_true!(config.maintain_arc_consistency);
    expect_that!(config.node_limit, none());
    expect_that!(config.shuffle_seed, none());
    expect_that!(config.value_order, eq(ValueOrder::SharedCandidates));
  }

  #[gtest]
  fn test_flags() {
    let args = Args::try_parse_from([
      "xword-fill",
      "grid.txt",
      "words.txt",
      "out.txt",
      "--no-inference",
      "--node-limit",
      "500",
      "--seed",
      "9",
      "--value-order",
      "eliminations",
    ])
    .unwrap();
    expect_that!(args.output.as_deref().and_then(|path| path.to_str()), some(eq("out.txt")));
    let config = args.solver_config();
    expect_false!(config.maintain_arc_consistency);
    expect_that!(config.node_limit, some(eq(500)));
    expect_that!(config.shuffle_seed, some(eq(9)));
    expect_that!(config.value_order, eq(ValueOrder::Eliminations));
  }

  #[gtest]
  fn test_missing_word_list() {
    expect_that!(Args::try_parse_from(["xword-fill", "grid.txt"]), err(anything()));
  }
}
