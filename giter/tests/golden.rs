use std::io;
use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::NamedTempFile;

fn golden_test(name: &str, args: &[&str]) {
    golden_test_err(name, args).unwrap()
}

fn golden_test_err(name: &str, args: &[&str]) -> io::Result<()> {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    let out_path: PathBuf = format!("{}/tests/golden/{}.txt", manifest_dir, name).into();
    assert!(
        out_path.exists(),
        "Output should be at {}, but is missing",
        out_path.as_os_str().to_string_lossy()
    );
    let out_temp_file = NamedTempFile::new()?;
    let giter_exit = Command::new(env!("CARGO_BIN_EXE_giter"))
        .args(args)
        .stdout(out_temp_file.reopen()?)
        .spawn()?
        .wait()?;
    assert!(giter_exit.success());
    let out_ex = std::fs::read_to_string(out_path)?;
    let out_act = std::fs::read_to_string(out_temp_file.path())?;
    assert_eq!(out_ex.trim(), out_act.trim());
    Ok(())
}

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_giter"))
        .args(args)
        .output()
        .unwrap()
}

#[test]
fn default() {
    golden_test("syracuse15", &[]);
}

#[test]
fn syracuse() {
    golden_test("syracuse15", &["syracuse", "15"]);
    golden_test("syracuse6", &["-i", "syracuse", "6"]);
}

#[test]
fn range() {
    golden_test("range5", &["range", "5"]);
    golden_test("range_step", &["range", "0", "10", "2"]);
    golden_test("range_negative", &["range", "-3", "0"]);
}

#[test]
fn separator() {
    golden_test("separator", &["--separator", ",", "range", "1", "4"]);
}

#[test]
fn seeded() {
    let args = ["--seed", "7", "-n", "20", "randint", "1", "6"];
    let (first, second) = (run(&args), run(&args));
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);

    let out = String::from_utf8(first.stdout).unwrap();
    let dice: Vec<i64> = out.split_whitespace().map(|x| x.parse().unwrap()).collect();
    assert_eq!(dice.len(), 20);
    assert!(dice.iter().all(|x| (1..=6).contains(x)));
}

#[test]
fn choice() {
    let out = run(&["choice", "3", "5", "2", "1"]);
    assert!(out.status.success());
    let out = String::from_utf8(out.stdout).unwrap();
    let mut items: Vec<_> = out.split_whitespace().collect();
    items.sort();
    assert_eq!(items, ["1", "2", "3", "5"]);
}

#[test]
fn random() {
    let out = run(&["-n", "50", "--min", "0.5", "--max", "0.75", "random"]);
    assert!(out.status.success());
    let out = String::from_utf8(out.stdout).unwrap();
    let floats: Vec<f64> = out.split_whitespace().map(|x| x.parse().unwrap()).collect();
    assert_eq!(floats.len(), 50);
    assert!(floats.iter().all(|r| (0.5..0.75).contains(r)));
}

#[test]
fn exit_codes() {
    assert_eq!(run(&["--bogus"]).status.code(), Some(2));
    assert_eq!(run(&["fibonacci"]).status.code(), Some(2));
    assert_eq!(run(&["range"]).status.code(), Some(2));
    assert_eq!(run(&["range", "0", "10", "0"]).status.code(), Some(5));
    assert_eq!(run(&["randint", "6", "1"]).status.code(), Some(5));
    assert_eq!(run(&["syracuse", "0"]).status.code(), Some(5));
    assert_eq!(run(&["--max", "2", "random"]).status.code(), Some(5));
}

#[test]
fn unused_options() {
    let out = run(&["-n", "3", "range", "5"]);
    assert_eq!(out.status.code(), Some(2));
    assert!(out.stdout.is_empty());
    let err = String::from_utf8(out.stderr).unwrap();
    assert!(err.contains("--iterations has no effect on range"));

    assert_eq!(run(&["-s", "1", "syracuse", "6"]).status.code(), Some(2));
    assert_eq!(run(&["-r"]).status.code(), Some(2));
}

#[test]
fn syracuse_beyond_i64() {
    let out = run(&["-i", "syracuse", "3074457345618258603"]);
    assert!(out.status.success());
    let out = String::from_utf8(out.stdout).unwrap();
    let values: Vec<_> = out.split_whitespace().collect();
    assert_eq!(values[..2], ["3074457345618258603", "9223372036854775810"]);
    assert_eq!(values.last(), Some(&"1"));
}
