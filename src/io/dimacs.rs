//! DIMACS CNF reading and writing
//!
//! The writer emits a `p cnf <variables> <clauses>` header followed by one
//! zero-terminated clause per line. The reader accepts comments, clauses
//! spanning several lines and several clauses per line.

use crate::encoding::clause::{Clause, ClauseSet, Literal};
use crate::io::error::{Result, WithPath, dimacs_error};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Write `formula` in DIMACS format
///
/// # Errors
///
/// Returns an error if writing fails
pub fn write_dimacs(formula: &ClauseSet, writer: &mut impl Write) -> std::io::Result<()> {
    writeln!(writer, "p cnf {} {}", formula.variable_count(), formula.len())?;
    for clause in formula.clauses() {
        for literal in clause.literals() {
            write!(writer, "{literal} ")?;
        }
        writeln!(writer, "0")?;
    }
    writer.flush()
}

/// Write `formula` to a DIMACS file at `path`
///
/// # Errors
///
/// Returns an error if the file cannot be created or written
pub fn write_dimacs_file(formula: &ClauseSet, path: &Path) -> Result<()> {
    let file = File::create(path).with_path(path, "create")?;
    let mut writer = BufWriter::new(file);
    write_dimacs(formula, &mut writer).with_path(path, "write")
}

/// Parse a DIMACS formula
///
/// The header's variable count is kept even when no clause mentions the
/// highest variables. A trailing clause without a terminating `0` is accepted.
///
/// # Errors
///
/// Returns an error on a malformed header or literal, a missing or repeated
/// header, a clause count that disagrees with the header, or a read failure
pub fn parse_dimacs(reader: impl BufRead) -> Result<ClauseSet> {
    let mut formula = ClauseSet::new();
    let mut header: Option<(u32, usize)> = None;
    let mut pending: Vec<Literal> = Vec::new();
    let mut last_line = 0;

    for (number, line) in (1..).zip(reader.lines()) {
        let line = line?;
        last_line = number;
        let trimmed = line.trim();

        if trimmed.is_empty() || trimmed.starts_with('c') || trimmed.starts_with('%') {
            continue;
        }

        if trimmed.starts_with('p') {
            if header.is_some() {
                return Err(dimacs_error(number, &"repeated problem line"));
            }
            header = Some(parse_header(trimmed, number)?);
            continue;
        }

        if header.is_none() {
            return Err(dimacs_error(number, &"clause before problem line"));
        }

        for token in trimmed.split_whitespace() {
            let literal: Literal = token
                .parse()
                .map_err(|error| dimacs_error(number, &format!("invalid literal '{token}': {error}")))?;
            if literal == 0 {
                formula.push(Clause::new(std::mem::take(&mut pending)));
            } else {
                pending.push(literal);
            }
        }
    }

    if !pending.is_empty() {
        formula.push(Clause::new(pending));
    }

    let Some((variables, clauses)) = header else {
        return Err(dimacs_error(last_line, &"missing problem line"));
    };
    if clauses != formula.len() {
        return Err(dimacs_error(
            last_line,
            &format!("header declares {clauses} clauses, found {}", formula.len()),
        ));
    }
    if formula.variable_count() > variables {
        return Err(dimacs_error(
            last_line,
            &format!(
                "header declares {variables} variables, found variable {}",
                formula.variable_count()
            ),
        ));
    }
    formula.reserve_variables(variables);

    Ok(formula)
}

/// Parse a DIMACS file at `path`
///
/// # Errors
///
/// Returns an error if the file cannot be opened or is malformed
pub fn parse_dimacs_file(path: &Path) -> Result<ClauseSet> {
    let file = File::open(path).with_path(path, "open")?;
    parse_dimacs(BufReader::new(file))
}

fn parse_header(line: &str, number: usize) -> Result<(u32, usize)> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    match fields.as_slice() {
        ["p", "cnf", variables, clauses] => {
            let variables = variables
                .parse()
                .map_err(|error| dimacs_error(number, &format!("invalid variable count: {error}")))?;
            let clauses = clauses
                .parse()
                .map_err(|error| dimacs_error(number, &format!("invalid clause count: {error}")))?;
            Ok((variables, clauses))
        }
        _ => Err(dimacs_error(number, &"expected 'p cnf <variables> <clauses>'")),
    }
}
