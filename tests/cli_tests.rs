use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const FIXTURE: &str = r#"{
    "products": [
        {"id": "p1", "name": "Tea", "price": "4.50"},
        {"id": "p2", "name": "Pot", "price": 39}
    ],
    "order_statuses": [{"id": "s1", "name": "new"}]
}"#;

fn shopgraph_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("shopgraph"));
    cmd.env_remove("SUPABASE_URL")
        .env_remove("SUPABASE_ANON_KEY")
        .env_remove("SUPABASE_SERVICE_ROLE_KEY")
        .env_remove("RUST_LOG");
    cmd
}

/// Write the fixture into a fresh directory and return both.
fn fixture_dir() -> (TempDir, std::path::PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("shop.json");
    std::fs::write(&path, FIXTURE).unwrap();
    (temp_dir, path)
}

// =============================================================================
// Basic CLI
// =============================================================================

#[test]
fn test_help() {
    shopgraph_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("GraphQL endpoint"));
}

#[test]
fn test_version() {
    shopgraph_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("shopgraph"));
}

#[test]
fn test_schema_prints_sdl() {
    shopgraph_cmd()
        .arg("schema")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("type RootQueryType")
                .and(predicate::str::contains("type Mutation"))
                .and(predicate::str::contains("createOrder")),
        );
}

// =============================================================================
// Query and Mutate
// =============================================================================

#[test]
fn test_query_against_fixture() {
    let (temp_dir, path) = fixture_dir();

    shopgraph_cmd()
        .args(["query", "{ products { id price } }", "--fixture"])
        .arg(&path)
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(
            predicate::str::contains("\"p1\"")
                .and(predicate::str::contains("\"4.50\""))
                .and(predicate::str::contains("\"39\"")),
        );
}

#[test]
fn test_query_with_variables() {
    let (temp_dir, path) = fixture_dir();

    shopgraph_cmd()
        .args([
            "query",
            "query($id: String!) { product(id: $id) { name } }",
            "--variables",
            r#"{"id": "p2"}"#,
            "--fixture",
        ])
        .arg(&path)
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"Pot\""));
}

#[test]
fn test_invalid_variables() {
    let (temp_dir, path) = fixture_dir();

    shopgraph_cmd()
        .args(["query", "{ products { id } }", "--variables", "[1, 2", "--fixture"])
        .arg(&path)
        .current_dir(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Variables must be a JSON object"));
}

#[test]
fn test_mutate_against_fixture() {
    let (temp_dir, path) = fixture_dir();

    shopgraph_cmd()
        .args([
            "mutate",
            r#"createWarehouse(name: "East", address: "1 Dock St", working_hours: "9-17") { id name working_hours }"#,
            "--fixture",
        ])
        .arg(&path)
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(
            predicate::str::contains("\"East\"").and(predicate::str::contains("\"9-17\"")),
        );
}

#[test]
fn test_missing_fixture_file() {
    let temp_dir = TempDir::new().unwrap();

    shopgraph_cmd()
        .args(["query", "{ products { id } }", "--fixture", "nope.json"])
        .current_dir(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load fixture"));
}

#[test]
fn test_no_backend_configured() {
    let temp_dir = TempDir::new().unwrap();

    shopgraph_cmd()
        .args(["query", "{ products { id } }"])
        .current_dir(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("No backend configured"));
}

#[test]
fn test_url_without_anon_key() {
    let temp_dir = TempDir::new().unwrap();

    shopgraph_cmd()
        .args(["query", "{ products { id } }"])
        .env("SUPABASE_URL", "https://abc.supabase.co")
        .current_dir(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("SUPABASE_ANON_KEY"));
}
