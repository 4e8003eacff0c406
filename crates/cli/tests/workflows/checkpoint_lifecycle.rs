//! Creating, listing and removing checkpoints

use crate::common::TestDocument;
use crate::wp;
use serde_json::json;

#[test]
fn add_list_remove() -> anyhow::Result<()> {
    let doc = TestDocument::new(&json!({
        "user": {"name": "Ann", "hobbies": ["chess"]}
    }));

    wp!(doc.dir(), "checkpoint", "add", "name", "$.user.name")?.succeeded()?;
    wp!(doc.dir(), "checkpoint", "add", "hobbies", "$.user.hobbies")?.succeeded()?;
    assert_eq!(
        doc.checkpoints(),
        json!({"name": "$.user.name", "hobbies": "$.user.hobbies"})
    );

    let list = wp!(doc.dir(), "checkpoint", "list")?.succeeded()?;
    assert!(list.stdout.contains("$.user.name"));
    assert!(list.stdout.contains("$.user.hobbies"));

    let sequences = wp!(doc.dir(), "checkpoint", "list", "--sequences")?.succeeded()?;
    assert!(sequences.stdout.contains("$.user.hobbies"));
    assert!(!sequences.stdout.contains("$.user.name"));

    wp!(doc.dir(), "checkpoint", "rm", "name")?.succeeded()?;
    assert_eq!(doc.checkpoints(), json!({"hobbies": "$.user.hobbies"}));

    Ok(())
}

#[test]
fn add_overwrites_existing_name() -> anyhow::Result<()> {
    let doc = TestDocument::new(&json!({"a": 1, "b": 2}));

    wp!(doc.dir(), "checkpoint", "add", "cp", "$.a")?.succeeded()?;
    let result = wp!(doc.dir(), "checkpoint", "add", "cp", "$.b")?.succeeded()?;

    assert!(result.stdout.contains("replaced"));
    assert_eq!(doc.checkpoints(), json!({"cp": "$.b"}));
    Ok(())
}

#[test]
fn add_rejects_unsupported_path_syntax() -> anyhow::Result<()> {
    let doc = TestDocument::new(&json!({"a": [1]}));

    let result = wp!(doc.dir(), "checkpoint", "add", "all", "$..a")?.failed()?;
    assert!(result.stderr.contains("recursive descent"));
    assert!(!doc.checkpoints_path().exists());
    Ok(())
}

#[test]
fn paths_lists_outline() -> anyhow::Result<()> {
    let doc = TestDocument::new(&json!({
        "user": {"profile": {"name": "Ann"}, "education": [{"index": 0}]}
    }));

    let result = wp!(doc.dir(), "paths")?.succeeded()?;
    assert!(result.stdout.contains("$.user.profile.name"));
    assert!(result.stdout.contains("$.user.education"));
    assert!(result.stdout.contains("[Array]"));
    Ok(())
}

#[test]
fn missing_files_start_empty() -> anyhow::Result<()> {
    let doc = TestDocument::empty();

    let result = wp!(doc.dir(), "checkpoint", "list")?.succeeded()?;
    assert!(result.stdout.contains("No checkpoints yet"));

    let result = wp!(doc.dir(), "paths")?.succeeded()?;
    assert!(result.stdout.contains("Document is empty"));
    Ok(())
}
