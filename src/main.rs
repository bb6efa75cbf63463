#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

mod args;
mod render;

use std::{fs, io, path::Path};

use args::Args;
use clap::Parser;
use itertools::Itertools;
use tracing::{info, level_filters::LevelFilter, warn};
use tracing_subscriber::EnvFilter;
use util::{
  error::{XWordError, XWordResult},
  time::time_fn,
};
use xword_dict::WordList;
use xword_gen::{SolveOutcome, Solver, XWordStructure};

fn init_logging() {
  let filter = EnvFilter::builder()
    .with_default_directive(LevelFilter::INFO.into())
    .from_env_lossy();
  let _ = tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(io::stderr)
    .try_init();
}

fn read_structure(path: &Path) -> XWordResult<XWordStructure> {
  let layout = fs::read_to_string(path)
    .map_err(|err| XWordError::Io(format!("Failed to read {}: {err}", path.display())))?;
  XWordStructure::from_layout(&layout)
}

fn main() -> XWordResult {
  init_logging();
  let args = Args::parse();

  let structure = read_structure(&args.structure)?;
  let words = WordList::from_file(&args.words)?;
  info!(
    event = "loaded",
    width = structure.width(),
    height = structure.height(),
    slots = structure.num_slots(),
    words = words.len(),
  );
  for length in structure.slots().iter().map(|slot| slot.length as usize).unique().sorted() {
    if words.count_with_length(length) == 0 {
      warn!(length, "no words of this length");
    }
  }

  let mut solver = Solver::new(&structure, words.into_words(), args.solver_config());
  let (time, outcome) = time_fn(|| solver.solve());
  info!(event = "finished", seconds = time.as_secs_f32());

  match outcome {
    SolveOutcome::Solved(assignment) => {
      let grid = render::render(&structure, &assignment)?;
      print!("{grid}");
      if let Some(output) = &args.output {
        fs::write(output, &grid)
          .map_err(|err| XWordError::Io(format!("Failed to write {}: {err}", output.display())))?;
      }
    }
    SolveOutcome::Unsatisfiable => println!("No solution."),
    SolveOutcome::Aborted => println!(
      "No solution found within {} nodes.",
      solver.stats().nodes
    ),
  }

  Ok(())
}
