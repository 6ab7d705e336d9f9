use std::io;

use chess_match::console::run_console;

fn main() -> io::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_console(stdin.lock(), stdout.lock())
}
