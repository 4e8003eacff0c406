//! Inserting into and removing from sequences

use crate::common::TestDocument;
use crate::wp;
use serde_json::json;

fn items_doc() -> anyhow::Result<TestDocument> {
    let doc = TestDocument::new(&json!({
        "items": [{"index": 0, "name": "a"}, {"index": 1, "name": "b"}]
    }));
    wp!(doc.dir(), "checkpoint", "add", "items", "$.items")?.succeeded()?;
    Ok(doc)
}

#[test]
fn insert_at_position_renumbers() -> anyhow::Result<()> {
    let doc = items_doc()?;

    wp!(doc.dir(), "insert", "items", r#"{"name": "c"}"#, "--at", "1")?.succeeded()?;

    assert_eq!(
        doc.document(),
        json!({"items": [
            {"index": 0, "name": "a"},
            {"index": 1, "name": "c"},
            {"index": 2, "name": "b"}
        ]})
    );
    Ok(())
}

#[test]
fn insert_without_position_appends() -> anyhow::Result<()> {
    let doc = items_doc()?;

    wp!(doc.dir(), "insert", "items", r#"{"name": "z"}"#)?.succeeded()?;
    wp!(doc.dir(), "insert", "items", r#"{"name": "y"}"#, "--at", "50")?.succeeded()?;

    assert_eq!(doc.document()["items"][2], json!({"index": 2, "name": "z"}));
    assert_eq!(doc.document()["items"][3], json!({"index": 3, "name": "y"}));
    Ok(())
}

#[test]
fn remove_renumbers() -> anyhow::Result<()> {
    let doc = items_doc()?;

    let result = wp!(doc.dir(), "remove", "items", "0")?.succeeded()?;
    assert!(result.stdout.contains(r#""name":"a""#));
    assert_eq!(doc.document(), json!({"items": [{"index": 0, "name": "b"}]}));
    Ok(())
}

#[test]
fn remove_no_reindex_keeps_indices() -> anyhow::Result<()> {
    let doc = items_doc()?;

    wp!(doc.dir(), "remove", "items", "0", "--no-reindex")?.succeeded()?;
    assert_eq!(doc.document(), json!({"items": [{"index": 1, "name": "b"}]}));
    Ok(())
}

#[test]
fn append_and_delete_scalars() -> anyhow::Result<()> {
    let doc = TestDocument::new(&json!({"user": {"hobbies": ["chess"]}}));
    wp!(doc.dir(), "checkpoint", "add", "hobbies", "$.user.hobbies")?.succeeded()?;

    wp!(doc.dir(), "append", "hobbies", "reading")?.succeeded()?;
    wp!(doc.dir(), "append", "hobbies", "3")?.succeeded()?;
    assert_eq!(doc.document(), json!({"user": {"hobbies": ["chess", "reading", 3]}}));

    wp!(doc.dir(), "delete", "hobbies", "0")?.succeeded()?;
    assert_eq!(doc.document(), json!({"user": {"hobbies": ["reading", 3]}}));
    Ok(())
}
