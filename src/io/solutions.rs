//! Solution artifact writing
//!
//! One line per tiling: the one-based index, a colon, then the placements as
//! comma-separated `<i>.<j><orientation>` tokens, e.g. `3: 0.0NW,1.2N`.

use crate::algorithm::decoder::Solution;
use crate::io::error::{Result, WithPath};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Format the line for `solution` at one-based `index`
pub fn solution_line(index: usize, solution: &Solution) -> String {
    format!("{index}: {solution}")
}

/// Write `solutions` in the order given, numbered from 1
///
/// # Errors
///
/// Returns an error if writing fails
pub fn write_solutions(solutions: &[Solution], writer: &mut impl Write) -> std::io::Result<()> {
    for (index, solution) in (1..).zip(solutions) {
        writeln!(writer, "{}", solution_line(index, solution))?;
    }
    writer.flush()
}

/// Write `solutions` to the file at `path`
///
/// # Errors
///
/// Returns an error if the file cannot be created or written
pub fn write_solutions_file(solutions: &[Solution], path: &Path) -> Result<()> {
    let file = File::create(path).with_path(path, "create")?;
    let mut writer = BufWriter::new(file);
    write_solutions(solutions, &mut writer).with_path(path, "write")
}
