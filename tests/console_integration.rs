use std::io::{Cursor, Write};
use std::process::{Command, Stdio};

use chess_match::console::run_console;

#[test]
fn console_binary_plays_fools_mate() {
    let exe = env!("CARGO_BIN_EXE_chess_match");
    let mut child = Command::new(exe)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("failed to spawn console binary");

    let input = b"f2f3\ne7e5\ng2g4\nd8h4\ncheck\nquit\n";
    child
        .stdin
        .as_mut()
        .expect("piped stdin")
        .write_all(input)
        .expect("write script");

    let output = child.wait_with_output().expect("failed to read output");
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains("MOVE f2f3"), "{stdout}");
    assert!(stdout.contains("MOVE d8h4\nCHECK white\nMATE white"), "{stdout}");
    assert!(stdout.trim_end().ends_with("CHECK white"), "{stdout}");
}

#[test]
fn console_reports_bad_input_without_stopping() {
    let script = "e2e5\ne2\ni2i4\ne2e4\nboard\n";
    let mut output = Vec::new();
    run_console(Cursor::new(script), &mut output).expect("in-memory io");
    let text = String::from_utf8(output).expect("utf-8 output");
    let lines: Vec<&str> = text.lines().collect();

    assert!(lines[0].starts_with("INVALID"), "{text}");
    assert!(lines[1].starts_with("ERROR"), "{text}");
    assert!(lines[2].starts_with("ERROR"), "{text}");
    assert_eq!(lines[3], "MOVE e2e4");
    assert_eq!(lines[8], "4 . . . . P . . .");
    assert_eq!(lines[12], "  a b c d e f g h");
}

#[test]
fn status_binary_summarizes_game() {
    let exe = env!("CARGO_BIN_EXE_match_status");
    let output = Command::new(exe)
        .args(["e2e4", "f7f5", "d1h5"])
        .output()
        .expect("failed to run status binary");
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains("side_to_move: black"), "{stdout}");
    assert!(stdout.contains("check: black"), "{stdout}");
    assert!(stdout.contains("checkmate: false"), "{stdout}");

    let rejected = Command::new(exe)
        .args(["e2e5"])
        .output()
        .expect("failed to run status binary");
    assert!(!rejected.status.success());
}
