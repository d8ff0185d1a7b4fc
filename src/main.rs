use std::io;
use std::process::ExitCode;

use minidb::repl;
use minidb::table::Table;

fn main() -> ExitCode {
    let mut table = Table::new();
    let stdin = io::stdin();
    let stdout = io::stdout();

    match repl::run(stdin.lock(), stdout.lock(), &mut table) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error reading input: {e}");
            ExitCode::FAILURE
        }
    }
}
