use std::io::Write;
use std::process::{Command, Stdio};

fn run_player(args: &[&str], input: &str) -> (bool, String) {
    let mut child = Command::new(env!("CARGO_BIN_EXE_checkers_player"))
        .args(args)
        .env_remove("CHECKERS_CONFIG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .expect("spawn checkers_player");
    child
        .stdin
        .take()
        .unwrap()
        .write_all(input.as_bytes())
        .unwrap();
    let out = child.wait_with_output().unwrap();
    (out.status.success(), String::from_utf8(out.stdout).unwrap())
}

#[test]
fn prints_forced_capture_chain() {
    let input = "w\n8\n\
                 ________\n\
                 _____b__\n\
                 ________\n\
                 _____b__\n\
                 ________\n\
                 b__b____\n\
                 __w_____\n\
                 ________\n";
    let (ok, stdout) = run_player(&["--depth", "3"], input);
    assert!(ok);
    assert_eq!(stdout, "3\n6 2\n4 4\n2 6\n0 4\n");
}

#[test]
fn random_engine_also_answers() {
    let input = "b 4\n_b__\n____\n____\n____\n";
    let (ok, stdout) = run_player(&["--engine", "random"], input);
    assert!(ok);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines[0], "1");
    assert_eq!(lines[1], "0 1");
    assert!(lines[2] == "1 0" || lines[2] == "1 2");
}

#[test]
fn reports_no_move_with_zero_hops() {
    let (ok, stdout) = run_player(&[], "b 4 ____ ____ ____ b___");
    assert!(ok);
    assert_eq!(stdout, "0\n");
}

#[test]
fn malformed_position_fails() {
    let (ok, stdout) = run_player(&[], "x 4");
    assert!(!ok);
    assert!(stdout.is_empty());
}
