use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::{Value, json};
use tempfile::TempDir;

fn bookshelf_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("bookshelf"));
    cmd.env_remove("RUST_LOG").env_remove("BOOKSHELF_CONFIG");
    cmd
}

fn stdout_json(cmd: &mut Command) -> Value {
    let output = cmd.assert().success().get_output().stdout.clone();
    serde_json::from_slice(&output).unwrap()
}

// =============================================================================
// Basic CLI
// =============================================================================

#[test]
fn test_help() {
    bookshelf_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("GraphQL server"));
}

#[test]
fn test_version() {
    bookshelf_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("bookshelf"));
}

#[test]
fn test_missing_config_file() {
    let temp_dir = TempDir::new().unwrap();

    bookshelf_cmd()
        .arg("--config")
        .arg(temp_dir.path().join("nope.yml"))
        .arg("schema")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load bookshelf configuration"));
}

// =============================================================================
// Schema
// =============================================================================

#[test]
fn test_schema_prints_sdl() {
    bookshelf_cmd()
        .arg("schema")
        .assert()
        .success()
        .stdout(predicate::str::contains("type Book {"))
        .stdout(predicate::str::contains("type Author {"))
        .stdout(predicate::str::contains("type Mutation {"))
        .stdout(predicate::str::contains("This represents a book written by an author"));
}

#[test]
fn test_schema_matches_published_contract() {
    bookshelf_cmd()
        .arg("schema")
        .assert()
        .success()
        .stdout(predicate::str::contains("books: [Book]\n"))
        .stdout(predicate::str::contains("authors: [Author]\n"))
        .stdout(predicate::str::contains("addBook(name: String!, authorId: Int!): Book\n"))
        .stdout(predicate::str::contains("addAuthor(name: String!): Author\n"))
        .stdout(predicate::str::contains("Book!]").not());
}

// =============================================================================
// Query
// =============================================================================

#[test]
fn test_query_author_with_books() {
    let data = stdout_json(
        bookshelf_cmd()
            .arg("query")
            .arg("{ author(id: 1) { name books { name } } }"),
    );

    assert_eq!(
        data,
        json!({
            "data": {
                "author": {
                    "name": "J. K. Rowling",
                    "books": [
                        { "name": "Harry Potter and the Chamber of Secrets" },
                        { "name": "Harry Potter and the Prisoner of Azkaban" },
                        { "name": "Harry Potter and the Goblet of Fire" },
                    ]
                }
            }
        })
    );
}

#[test]
fn test_query_with_variables() {
    let data = stdout_json(
        bookshelf_cmd()
            .arg("query")
            .arg("query Book($id: Int) { book(id: $id) { name author { name } } }")
            .arg("--variables")
            .arg(r#"{"id": 4}"#),
    );

    assert_eq!(
        data["data"]["book"],
        json!({ "name": "The Fellowship of the Ring", "author": { "name": "J. R. R. Tolkien" } })
    );
}

#[test]
fn test_query_unknown_id_is_null() {
    let data = stdout_json(bookshelf_cmd().arg("query").arg("{ book(id: 42) { name } }"));
    assert_eq!(data, json!({ "data": { "book": null } }));
}

#[test]
fn test_query_validation_error_is_printed() {
    let data = stdout_json(bookshelf_cmd().arg("query").arg(r#"{ book(id: "one") { name } }"#));
    assert_eq!(data["data"], Value::Null);
    assert!(!data["errors"].as_array().unwrap().is_empty());
}

#[test]
fn test_query_invalid_variables() {
    bookshelf_cmd()
        .arg("query")
        .arg("{ books { id } }")
        .arg("--variables")
        .arg("not json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid --variables JSON"));
}

#[test]
fn test_query_unseeded_library() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("bookshelf.yml");
    std::fs::write(&config_path, "server:\n  seed: false\n").unwrap();

    let data = stdout_json(
        bookshelf_cmd()
            .arg("--config")
            .arg(&config_path)
            .arg("query")
            .arg("{ books { id } authors { id } }"),
    );
    assert_eq!(data, json!({ "data": { "books": [], "authors": [] } }));
}

// =============================================================================
// Mutate
// =============================================================================

#[test]
fn test_mutate_add_author() {
    let data = stdout_json(
        bookshelf_cmd()
            .arg("mutate")
            .arg(r#"addAuthor(name: "New Author") { id name }"#),
    );
    assert_eq!(
        data,
        json!({ "data": { "addAuthor": { "id": 4, "name": "New Author" } } })
    );
}

#[test]
fn test_mutate_add_orphan_book() {
    let data = stdout_json(
        bookshelf_cmd()
            .arg("mutate")
            .arg(r#"addBook(name: "Orphan", authorId: 999) { id authorId author { name } }"#),
    );
    assert_eq!(
        data,
        json!({ "data": { "addBook": { "id": 9, "authorId": 999, "author": null } } })
    );
}

#[test]
fn test_mutate_logs_to_stderr_only() {
    bookshelf_cmd()
        .arg("mutate")
        .arg(r#"addAuthor(name: "Logged") { id }"#)
        .assert()
        .success()
        .stdout(predicate::str::contains("Adding author").not())
        .stderr(predicate::str::contains("Adding author"));
}
