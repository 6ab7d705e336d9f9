/// One line of console input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleCommand {
    Board,
    NewGame,
    /// `fen` alone prints the current position; with fields it loads one.
    Fen(Option<String>),
    Style(Option<String>),
    Turn,
    Check,
    Mate,
    Help,
    Quit,
    /// Anything else is treated as move text.
    Move(String),
}

pub fn parse_console_command(line: &str) -> Option<ConsoleCommand> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }
    let parts: Vec<&str> = trimmed.split_whitespace().collect();

    let rest = || {
        let joined = parts[1..].join(" ");
        (!joined.is_empty()).then_some(joined)
    };

    let cmd = match parts[0] {
        "board" => ConsoleCommand::Board,
        "new" => ConsoleCommand::NewGame,
        "fen" => ConsoleCommand::Fen(rest()),
        "style" => ConsoleCommand::Style(rest()),
        "turn" => ConsoleCommand::Turn,
        "check" => ConsoleCommand::Check,
        "mate" => ConsoleCommand::Mate,
        "help" => ConsoleCommand::Help,
        "quit" | "exit" => ConsoleCommand::Quit,
        _ => ConsoleCommand::Move(trimmed.to_string()),
    };

    Some(cmd)
}
