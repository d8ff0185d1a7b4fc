use std::io::{self, BufRead, Write};

use crate::statement::Statement;
use crate::table::Table;

const PROMPT: &str = "db > ";

// Dot-prefixed directives like .exit are "meta-commands"; they never
// reach the table.
enum MetaCommand {
    Exit,
    Help,
}

impl MetaCommand {
    fn parse(line: &str) -> Option<MetaCommand> {
        match line {
            ".exit" => Some(MetaCommand::Exit),
            ".help" => Some(MetaCommand::Help),
            _ => None,
        }
    }
}

/// Drives the read-dispatch-print loop until `.exit` or end of input.
/// Every failure except a stream error is reported as one line on
/// `output` and the loop keeps going; stream errors bubble up.
pub fn run(
    mut input: impl BufRead,
    mut output: impl Write,
    table: &mut Table,
) -> io::Result<()> {
    let mut line = String::new();

    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Ok(());
        }
        let line = line.trim();

        if line.starts_with('.') {
            match MetaCommand::parse(line) {
                Some(MetaCommand::Exit) => return Ok(()),
                Some(MetaCommand::Help) => writeln!(output, "We're are working on it")?,
                None => writeln!(output, "Unrecognized command : {line}")?,
            }
            continue;
        }

        match Statement::prepare(line) {
            Ok(statement) => execute(statement, table, &mut output)?,
            Err(e) => writeln!(output, "{e}")?,
        }
    }
}

fn execute(statement: Statement, table: &mut Table, output: &mut impl Write) -> io::Result<()> {
    match statement {
        Statement::Insert(row) => match table.insert(&row) {
            Ok(()) => writeln!(output, "Statement executed successfully."),
            Err(e) => writeln!(output, "{e}"),
        },
        Statement::Select => {
            for row in table.rows() {
                writeln!(output, "{row}")?;
            }
            writeln!(output, "Statement executed successfully.")
        }
    }
}
