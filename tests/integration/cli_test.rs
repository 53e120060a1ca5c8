use assert_cmd::Command;
use serde_json::Value;
use tempfile::TempDir;

fn ideavault(dir: &TempDir, user: &str) -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("ideavault").unwrap();
    cmd.current_dir(dir.path())
        .env("IDEAVAULT_USER", user)
        .env_remove("IDEAVAULT_EMAIL")
        .env_remove("RUST_LOG");
    cmd
}

fn init_vault() -> TempDir {
    let dir = TempDir::new().unwrap();
    ideavault(&dir, "alice").arg("init").assert().success();
    dir
}

/// Submit an idea and return its short id from "Submitted <id> ...".
fn submit(dir: &TempDir, user: &str, title: &str) -> String {
    let output = ideavault(dir, user)
        .args(["submit", "-t", title, "-d", "some details"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    stdout.split_whitespace().nth(1).unwrap().to_string()
}

fn list_json(dir: &TempDir, mode: &str) -> Vec<Value> {
    let output = ideavault(dir, "alice")
        .args(["--json", "list", "--mode", mode])
        .output()
        .unwrap();
    assert!(output.status.success());
    serde_json::from_slice::<Value>(&output.stdout)
        .unwrap()
        .as_array()
        .unwrap()
        .clone()
}

#[test]
fn init_creates_vault_dir() {
    let dir = TempDir::new().unwrap();
    ideavault(&dir, "alice")
        .arg("init")
        .assert()
        .success()
        .stdout(predicates::str::contains(".ideavault"));

    assert!(dir.path().join(".ideavault/config.json").exists());
}

#[test]
fn init_twice_fails() {
    let dir = init_vault();
    ideavault(&dir, "alice").arg("init").assert().failure();
}

#[test]
fn commands_outside_vault_fail() {
    let dir = TempDir::new().unwrap();
    ideavault(&dir, "alice")
        .arg("list")
        .assert()
        .failure()
        .stderr(predicates::str::contains("not an idea vault"));
}

#[test]
fn empty_list_message() {
    let dir = init_vault();
    ideavault(&dir, "alice")
        .arg("list")
        .assert()
        .success()
        .stdout(predicates::str::contains("No ideas yet"));
}

#[test]
fn submit_rejects_blank_title() {
    let dir = init_vault();
    ideavault(&dir, "alice")
        .args(["submit", "-t", "  ", "-d", "details"])
        .assert()
        .failure()
        .stderr(predicates::str::contains("title must not be empty"));

    assert!(list_json(&dir, "top").is_empty());
}

#[test]
fn submit_defaults_category_and_display_name() {
    let dir = init_vault();
    let output = ideavault(&dir, "u-42")
        .env("IDEAVAULT_EMAIL", "carol@example.com")
        .args(["--json", "submit", "-t", "Themes", "-d", "Custom colors"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let idea: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(idea["category"], "General");
    assert_eq!(idea["author"]["id"], "u-42");
    assert_eq!(idea["author"]["display_name"], "carol");
    assert_eq!(idea["vote_count"], 0);
}

#[test]
fn vote_cast_revoke_and_flip() {
    let dir = init_vault();
    let id = submit(&dir, "alice", "Search");

    ideavault(&dir, "bob")
        .args(["vote", &id, "up"])
        .assert()
        .success()
        .stdout(predicates::str::contains("voted up (1 votes)"));

    ideavault(&dir, "bob")
        .args(["vote", &id, "up"])
        .assert()
        .success()
        .stdout(predicates::str::contains("vote withdrawn (0 votes)"));

    ideavault(&dir, "bob").args(["vote", &id, "up"]).assert().success();
    ideavault(&dir, "bob")
        .args(["vote", &id, "down"])
        .assert()
        .success()
        .stdout(predicates::str::contains("voted down (-1 votes)"));

    let ideas = list_json(&dir, "top");
    assert_eq!(ideas[0]["vote_count"], -1);
    assert_eq!(ideas[0]["voters"]["bob"], -1);
}

#[test]
fn vote_accepts_signed_direction() {
    let dir = init_vault();
    let id = submit(&dir, "alice", "Search");

    ideavault(&dir, "bob")
        .args(["vote", &id, "-1"])
        .assert()
        .success()
        .stdout(predicates::str::contains("voted down (-1 votes)"));

    ideavault(&dir, "carol")
        .args(["vote", &id, "+1"])
        .assert()
        .success()
        .stdout(predicates::str::contains("voted up (0 votes)"));
}

#[test]
fn vote_rejects_unknown_direction() {
    let dir = init_vault();
    let id = submit(&dir, "alice", "Search");
    ideavault(&dir, "bob")
        .args(["vote", &id, "sideways"])
        .assert()
        .failure();
}

#[test]
fn vote_on_unknown_idea_fails() {
    let dir = init_vault();
    ideavault(&dir, "bob")
        .args(["vote", "deadbeef", "up"])
        .assert()
        .failure()
        .stderr(predicates::str::contains("idea not found"));
}

#[test]
fn list_orders_by_mode() {
    let dir = init_vault();
    let first = submit(&dir, "alice", "First");
    let second = submit(&dir, "alice", "Second");
    let _third = submit(&dir, "alice", "Third");

    ideavault(&dir, "bob").args(["vote", &second, "up"]).assert().success();
    ideavault(&dir, "carol").args(["vote", &second, "up"]).assert().success();
    ideavault(&dir, "bob").args(["vote", &first, "up"]).assert().success();

    let titles = |ideas: Vec<Value>| -> Vec<String> {
        ideas
            .iter()
            .map(|i| i["title"].as_str().unwrap().to_string())
            .collect()
    };

    assert_eq!(titles(list_json(&dir, "top")), ["Second", "First", "Third"]);
    assert_eq!(titles(list_json(&dir, "new")), ["Third", "Second", "First"]);
    assert_eq!(titles(list_json(&dir, "top")), ["Second", "First", "Third"]);
}

#[test]
fn list_respects_max_count() {
    let dir = init_vault();
    submit(&dir, "alice", "One");
    submit(&dir, "alice", "Two");
    let output = ideavault(&dir, "alice")
        .args(["--json", "list", "-n", "1"])
        .output()
        .unwrap();
    let ideas: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(ideas.as_array().unwrap().len(), 1);
}

#[test]
fn only_author_can_delete() {
    let dir = init_vault();
    let id = submit(&dir, "alice", "Mine");

    ideavault(&dir, "bob")
        .args(["delete", &id])
        .assert()
        .failure()
        .stderr(predicates::str::contains("is not the author"));
    assert_eq!(list_json(&dir, "top").len(), 1);

    ideavault(&dir, "alice")
        .args(["delete", &id])
        .assert()
        .success()
        .stdout(predicates::str::contains(format!("Deleted {}", id)));
    assert!(list_json(&dir, "top").is_empty());
}

#[test]
fn show_lists_voters() {
    let dir = init_vault();
    let id = submit(&dir, "alice", "Export to CSV");
    ideavault(&dir, "bob").args(["vote", &id, "down"]).assert().success();

    ideavault(&dir, "alice")
        .args(["show", &id])
        .assert()
        .success()
        .stdout(predicates::str::contains("Export to CSV"))
        .stdout(predicates::str::contains("Votes:    -1"))
        .stdout(predicates::str::contains("down"))
        .stdout(predicates::str::contains("bob"));
}
