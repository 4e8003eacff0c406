//! Reading and updating scalars

use crate::common::TestDocument;
use crate::wp;
use serde_json::json;

#[test]
fn set_preserves_number_and_string_kinds() -> anyhow::Result<()> {
    let doc = TestDocument::new(&json!({
        "count": 5,
        "ratio": 0.5,
        "user": {"name": "Ann"}
    }));
    wp!(doc.dir(), "checkpoint", "add", "count", "$.count")?.succeeded()?;
    wp!(doc.dir(), "checkpoint", "add", "ratio", "$.ratio")?.succeeded()?;
    wp!(doc.dir(), "checkpoint", "add", "name", "$.user.name")?.succeeded()?;

    wp!(doc.dir(), "set", "count", "7")?.succeeded()?;
    wp!(doc.dir(), "set", "ratio", "2")?.succeeded()?;
    wp!(doc.dir(), "set", "name", "42")?.succeeded()?;

    assert_eq!(
        doc.document(),
        json!({"count": 7, "ratio": 2.0, "user": {"name": "42"}})
    );
    Ok(())
}

#[test]
fn get_prints_json() -> anyhow::Result<()> {
    let doc = TestDocument::new(&json!({"user": {"hobbies": ["chess", "go"]}}));
    wp!(doc.dir(), "checkpoint", "add", "hobbies", "$.user.hobbies")?.succeeded()?;

    let result = wp!(doc.dir(), "get", "hobbies")?.succeeded()?;
    let printed: serde_json::Value = serde_json::from_str(&result.stdout)?;
    assert_eq!(printed, json!(["chess", "go"]));
    Ok(())
}

#[test]
fn export_writes_pretty_copy() -> anyhow::Result<()> {
    let doc = TestDocument::new(&json!({"a": 1}));

    wp!(doc.dir(), "export", "copy.json")?.succeeded()?;
    let text = std::fs::read_to_string(doc.dir().join("copy.json"))?;
    assert_eq!(text, "{\n    \"a\": 1\n}\n");
    Ok(())
}

#[test]
fn document_flag_overrides_config() -> anyhow::Result<()> {
    let doc = TestDocument::empty();
    std::fs::write(doc.dir().join("other.json"), r#"{"n": 1}"#)?;

    wp!(doc.dir(), "--document", "other.json", "checkpoint", "add", "n", "$.n")?.succeeded()?;
    wp!(doc.dir(), "--document", "other.json", "set", "n", "2")?.succeeded()?;

    let text = std::fs::read_to_string(doc.dir().join("other.json"))?;
    let value: serde_json::Value = serde_json::from_str(&text)?;
    assert_eq!(value, json!({"n": 2}));
    assert!(!doc.document_path().exists());
    Ok(())
}

#[test]
fn config_set_changes_default_index_field() -> anyhow::Result<()> {
    let doc = TestDocument::new(&json!({"rows": [{"pos": 0}]}));

    wp!(doc.dir(), "config", "set", "index_field", "pos")?.succeeded()?;
    assert!(doc.config_path().exists());
    let result = wp!(doc.dir(), "config", "get", "index_field")?.succeeded()?;
    assert_eq!(result.stdout.trim(), "pos");

    wp!(doc.dir(), "checkpoint", "add", "rows", "$.rows")?.succeeded()?;
    wp!(doc.dir(), "insert", "rows", "{}", "--at", "0")?.succeeded()?;
    assert_eq!(doc.document(), json!({"rows": [{"pos": 0}, {"pos": 1}]}));
    Ok(())
}

#[test]
fn lock_file_outlives_edits() -> anyhow::Result<()> {
    let doc = TestDocument::new(&json!({"n": 1}));
    wp!(doc.dir(), "checkpoint", "add", "n", "$.n")?.succeeded()?;

    wp!(doc.dir(), "set", "n", "2")?.succeeded()?;
    assert!(doc.dir().join("document.json.lock").exists());

    wp!(doc.dir(), "set", "n", "3")?.succeeded()?;
    assert_eq!(doc.document(), json!({"n": 3}));
    Ok(())
}
