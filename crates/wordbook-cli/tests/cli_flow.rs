use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use std::time::{SystemTime, UNIX_EPOCH};

fn bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_wordbook"))
}

/// Isolated HOME/XDG directories plus a document path inside them.
struct TestEnv {
    base: PathBuf,
}

impl TestEnv {
    fn new(prefix: &str) -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time")
            .as_nanos();
        let base = std::env::temp_dir().join(format!("{}_{}_{}", prefix, std::process::id(), nanos));
        std::fs::create_dir_all(base.join("config")).expect("create config dir");
        std::fs::create_dir_all(base.join("data")).expect("create data dir");
        Self { base }
    }

    fn config_home(&self) -> PathBuf {
        self.base.join("config")
    }

    fn data_home(&self) -> PathBuf {
        self.base.join("data")
    }

    fn document(&self) -> PathBuf {
        self.base.join("words").join("WordEntries.json")
    }

    fn command(&self) -> Command {
        let mut cmd = Command::new(bin());
        cmd.env("HOME", &self.base)
            .env("XDG_CONFIG_HOME", self.config_home())
            .env("XDG_DATA_HOME", self.data_home())
            .env("TERM", "dumb")
            .env_remove("WORDBOOK_PATH")
            .env_remove("WORDBOOK_CONFIG")
            .env_remove("WORDBOOK_LOG");
        cmd
    }

    /// Run against the test document via `--file`.
    fn run(&self, args: &[&str]) -> Output {
        let mut cmd = self.command();
        cmd.args(args).arg("--file").arg(self.document());
        cmd.output().expect("run wordbook")
    }
}

impl Drop for TestEnv {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.base);
    }
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

fn assert_success(output: &Output, what: &str) {
    assert!(
        output.status.success(),
        "{} failed: stdout={}, stderr={}",
        what,
        stdout(output),
        stderr(output)
    );
}

fn list_json(env: &TestEnv) -> Vec<serde_json::Value> {
    let list = env.run(&["list", "--json"]);
    assert_success(&list, "list");
    let value: serde_json::Value = serde_json::from_slice(&list.stdout).expect("parse list json");
    value.as_array().expect("list output array").clone()
}

fn words(entries: &[serde_json::Value]) -> Vec<String> {
    entries
        .iter()
        .map(|e| e.get("word").and_then(|v| v.as_str()).expect("word").to_string())
        .collect()
}

#[test]
fn test_cli_add_list_show() {
    let env = TestEnv::new("wordbook_cli_flow");

    let add = env.run(&["add", "Ciao", "Hello"]);
    assert_success(&add, "add");
    let out = stdout(&add);
    assert!(out.contains("status=ok"));
    assert!(out.contains("position=0"));
    assert!(env.document().exists(), "add should create the document");

    let add = env.run(&["add", "Buongiorno", "Good morning"]);
    assert_success(&add, "add");
    assert!(stdout(&add).contains("position=1"));

    let list = env.run(&["list"]);
    assert_success(&list, "list");
    assert_eq!(stdout(&list), "0\tCiao\tHello\n1\tBuongiorno\tGood morning\n");

    let show = env.run(&["show", "1"]);
    assert_success(&show, "show");
    let out = stdout(&show);
    assert!(out.contains("word=Buongiorno"));
    assert!(out.contains("explanation=Good morning"));
}

#[test]
fn test_cli_search_json_keeps_full_positions() {
    let env = TestEnv::new("wordbook_cli_search");
    for (word, explanation) in [
        ("Ciao", "Hello"),
        ("Buongiorno", "Good morning"),
        ("Grazie", "Thank you"),
    ] {
        assert_success(&env.run(&["add", word, explanation]), "add");
    }

    let search = env.run(&["search", "GIORNO", "--json"]);
    assert_success(&search, "search");
    let value: serde_json::Value =
        serde_json::from_slice(&search.stdout).expect("parse search json");
    let array = value.as_array().expect("search output array");
    assert_eq!(array.len(), 1);
    assert_eq!(array[0].get("position").and_then(|v| v.as_u64()), Some(1));
    assert_eq!(
        array[0].get("word").and_then(|v| v.as_str()),
        Some("Buongiorno")
    );

    let search = env.run(&["search", "thank", "--json"]);
    assert_success(&search, "search");
    let value: serde_json::Value =
        serde_json::from_slice(&search.stdout).expect("parse search json");
    let array = value.as_array().expect("search output array");
    assert_eq!(array[0].get("position").and_then(|v| v.as_u64()), Some(2));

    let search = env.run(&["search", "nothing-like-this"]);
    assert_success(&search, "search");
    assert!(stdout(&search).contains("No entries found."));
}

#[test]
fn test_cli_add_with_missing_field_is_invalid_input() {
    let env = TestEnv::new("wordbook_cli_invalid");

    let add = env.run(&["add", "Ciao", "--no-input"]);
    assert_eq!(add.status.code(), Some(4));
    assert!(stderr(&add).contains("Please fill in both fields!"));

    let add = env.run(&["add", "   ", "Hello"]);
    assert_eq!(add.status.code(), Some(4));

    assert!(!env.document().exists(), "rejected adds must not write");
}

#[test]
fn test_cli_show_out_of_range_is_not_found() {
    let env = TestEnv::new("wordbook_cli_show");
    assert_success(&env.run(&["add", "Ciao", "Hello"]), "add");

    let show = env.run(&["show", "5"]);
    assert_eq!(show.status.code(), Some(3));
    let err = stderr(&show);
    assert!(err.contains("No entry at position 5"));
    assert!(err.contains("wordbook list"));
}

#[test]
fn test_cli_delete_positions() {
    let env = TestEnv::new("wordbook_cli_delete");
    for (word, explanation) in [("A", "1"), ("B", "2"), ("C", "3"), ("D", "4")] {
        assert_success(&env.run(&["add", word, explanation]), "add");
    }

    let delete = env.run(&["delete", "3", "1", "9", "--yes"]);
    assert_success(&delete, "delete");
    let out = stdout(&delete);
    assert!(out.contains("deleted=2"));
    assert!(out.contains("skipped=9"));

    assert_eq!(words(&list_json(&env)), vec!["A", "C"]);
}

#[test]
fn test_cli_delete_without_terminal_requires_yes() {
    let env = TestEnv::new("wordbook_cli_delete_confirm");
    for (word, explanation) in [("A", "1"), ("B", "2")] {
        assert_success(&env.run(&["add", word, explanation]), "add");
    }

    let delete = env.run(&["delete", "0"]);
    assert_eq!(delete.status.code(), Some(4));
    let err = stderr(&delete);
    assert!(err.contains("Refusing to delete without confirmation"));
    assert!(err.contains("--yes"));

    let delete = env.run(&["delete", "1", "--no-input"]);
    assert_eq!(delete.status.code(), Some(4));
    assert_eq!(words(&list_json(&env)), vec!["A", "B"]);

    // Nothing in range means nothing to confirm.
    let delete = env.run(&["delete", "7"]);
    assert_success(&delete, "delete out of range");
    let out = stdout(&delete);
    assert!(out.contains("deleted=0"));
    assert!(out.contains("skipped=7"));

    let delete = env.run(&["delete", "0", "-y"]);
    assert_success(&delete, "delete -y");
    assert_eq!(words(&list_json(&env)), vec!["B"]);
}

fn seed_document(env: &TestEnv, count: usize) {
    let entries: Vec<serde_json::Value> = (0..count)
        .map(|i| {
            serde_json::json!({
                "id": format!("00000000-0000-4000-8000-{:012}", i),
                "word": format!("word{}", i),
                "explanation": format!("explanation {}", i),
            })
        })
        .collect();
    let document = env.document();
    std::fs::create_dir_all(document.parent().expect("document parent")).expect("mkdir");
    std::fs::write(&document, serde_json::to_vec(&entries).expect("encode")).expect("write");
}

#[test]
fn test_cli_list_is_complete_for_scripts() {
    let env = TestEnv::new("wordbook_cli_list_all");
    seed_document(&env, 130);

    assert_eq!(list_json(&env).len(), 130);

    let list = env.run(&["list", "--format", "plain"]);
    assert_success(&list, "list plain");
    assert_eq!(stdout(&list).lines().count(), 130);

    let list = env.run(&["list", "--json", "--limit", "3"]);
    assert_success(&list, "list --limit 3");
    let value: serde_json::Value = serde_json::from_slice(&list.stdout).expect("parse list json");
    assert_eq!(words(value.as_array().expect("array")), vec!["word0", "word1", "word2"]);
}

#[test]
fn test_cli_zero_limit_is_rejected() {
    let env = TestEnv::new("wordbook_cli_limit_zero");
    assert_success(&env.run(&["add", "Ciao", "Hello"]), "add");

    let list = env.run(&["list", "--limit", "0"]);
    assert_eq!(list.status.code(), Some(2));
    assert!(!stdout(&list).contains("No entries found."));

    let search = env.run(&["search", "ciao", "--limit", "0"]);
    assert_eq!(search.status.code(), Some(2));
}

#[test]
fn test_cli_corrupted_document_lists_empty() {
    let env = TestEnv::new("wordbook_cli_corrupt");
    let document = env.document();
    std::fs::create_dir_all(document.parent().expect("document parent")).expect("mkdir");
    std::fs::write(&document, b"{ not json").expect("write corrupted document");

    let list = env.run(&["list"]);
    assert_success(&list, "list");
    assert!(stdout(&list).contains("No entries found."));

    assert_eq!(
        std::fs::read(&document).expect("read document"),
        b"{ not json",
        "reading must not rewrite the document"
    );

    let add = env.run(&["add", "Ciao", "Hello"]);
    assert_success(&add, "add");
    assert_eq!(words(&list_json(&env)), vec!["Ciao"]);
}

#[test]
fn test_cli_document_is_json_array() {
    let env = TestEnv::new("wordbook_cli_shape");
    assert_success(&env.run(&["add", "Ciao", "Hello"]), "add");

    let contents = std::fs::read(env.document()).expect("read document");
    let value: serde_json::Value = serde_json::from_slice(&contents).expect("parse document");
    let array = value.as_array().expect("document is an array");
    assert_eq!(array.len(), 1);
    let entry = array[0].as_object().expect("entry object");
    assert_eq!(entry.get("word").and_then(|v| v.as_str()), Some("Ciao"));
    assert_eq!(
        entry.get("explanation").and_then(|v| v.as_str()),
        Some("Hello")
    );
    assert!(entry.get("id").and_then(|v| v.as_str()).is_some());
}

fn config_file(config_home: &Path) -> PathBuf {
    config_home.join("wordbook").join("config.toml")
}

#[test]
fn test_cli_init_writes_config_used_by_later_commands() {
    let env = TestEnv::new("wordbook_cli_init");
    let target = env.base.join("elsewhere").join("words.json");

    let mut init = env.command();
    init.arg("init").arg(&target);
    let init = init.output().expect("run init");
    assert_success(&init, "init");
    assert!(stdout(&init).contains("status=ok"));

    let contents = std::fs::read_to_string(config_file(&env.config_home())).expect("read config");
    assert!(contents.contains("[wordbook]"));
    assert!(contents.contains(&target.to_string_lossy().to_string()));

    let mut path = env.command();
    path.arg("path");
    let path = path.output().expect("run path");
    assert_success(&path, "path");
    assert_eq!(stdout(&path).trim(), target.to_string_lossy());

    let mut again = env.command();
    again.arg("init");
    let again = again.output().expect("run init again");
    assert_eq!(again.status.code(), Some(4));
    assert!(stderr(&again).contains("--force"));

    let mut forced = env.command();
    forced.arg("init").arg("--force");
    let forced = forced.output().expect("run init --force");
    assert_success(&forced, "init --force");
    let contents = std::fs::read_to_string(config_file(&env.config_home())).expect("read config");
    assert!(contents.contains("WordEntries.json"));
}

#[test]
fn test_cli_path_defaults_to_data_home() {
    let env = TestEnv::new("wordbook_cli_path");

    let mut path = env.command();
    path.arg("path");
    let path = path.output().expect("run path");
    assert_success(&path, "path");
    let expected = env.data_home().join("wordbook").join("WordEntries.json");
    assert_eq!(stdout(&path).trim(), expected.to_string_lossy());
}
