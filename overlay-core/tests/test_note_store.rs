use anyhow::Result;
use notes_overlay_core::store::{NoteDocument, NoteStore};
use std::fs;
use tempfile::TempDir;

#[test]
fn given_saved_note_when_reloading_then_text_round_trips() -> Result<()> {
    // Arrange
    let dir = TempDir::new()?;
    let path = dir.path().join("notes.json");
    fs::write(&path, r#"{"content": "hello"}"#)?;

    // Act
    let mut store = NoteStore::open(&path);
    let loaded = store.content().to_string();
    store.save(&loaded)?;
    let reloaded = NoteStore::load(&path);

    // Assert
    assert_eq!(loaded, "hello");
    assert_eq!(reloaded, "hello");
    Ok(())
}

#[test]
fn given_no_file_when_loading_then_returns_empty_text() -> Result<()> {
    let dir = TempDir::new()?;
    let store = NoteStore::open(dir.path().join("notes.json"));

    assert_eq!(store.content(), "");
    assert!(!store.path().exists());
    Ok(())
}

#[test]
fn given_corrupt_file_when_loading_then_returns_empty_text() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("notes.json");
    fs::write(&path, "{ not json")?;

    assert_eq!(NoteStore::load(&path), "");
    Ok(())
}

#[test]
fn given_object_without_content_when_loading_then_returns_empty_text() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("notes.json");
    fs::write(&path, r#"{"other": 1}"#)?;

    assert_eq!(NoteStore::load(&path), "");
    Ok(())
}

#[test]
fn given_missing_directory_when_saving_then_creates_it() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join(".notes_overlay").join("notes.json");
    let mut store = NoteStore::open(&path);

    store.save("first line\nsecond line")?;

    let document: NoteDocument = serde_json::from_str(&fs::read_to_string(&path)?)?;
    assert_eq!(document.content, "first line\nsecond line");
    Ok(())
}

#[test]
fn given_note_when_clearing_then_file_holds_empty_content() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("notes.json");
    let mut store = NoteStore::open(&path);
    store.save("something")?;

    store.clear()?;

    assert_eq!(store.content(), "");
    assert_eq!(NoteStore::load(&path), "");
    assert!(fs::read_to_string(&path)?.contains(r#""content": """#));
    Ok(())
}
