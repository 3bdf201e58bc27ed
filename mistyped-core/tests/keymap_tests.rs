// Tests for keymap parsing and loading

use mistyped_core::{CoreError, Keymap};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_default_is_qwertz() {
    assert_eq!(Keymap::default(), Keymap::qwertz());
}

#[test]
fn test_parse_entries_comments_and_terminals() {
    let text = "# us layout excerpt\n\nq wa\nw qe\n\nm\n";
    let keymap = Keymap::parse(text).unwrap();

    assert_eq!(keymap.len(), 3);
    assert_eq!(keymap.substitutes('q'), &['w', 'a']);
    assert_eq!(keymap.substitutes('w'), &['q', 'e']);
    assert!(keymap.contains('m'));
    assert!(keymap.substitutes('m').is_empty());
}

#[test]
fn test_parse_lowercases_and_joins_tokens() {
    let keymap = Keymap::parse("Ö Ä P\n").unwrap();
    assert_eq!(keymap.substitutes('ö'), &['ä', 'p']);
}

#[test]
fn test_parse_rejects_multi_character_key() {
    let err = Keymap::parse("q aw\nab c\n").unwrap_err();
    match err {
        CoreError::InvalidKeymap { line, .. } => assert_eq!(line, 2),
        other => panic!("unexpected error: {}", other),
    }
}

#[test]
fn test_parse_rejects_duplicate_key() {
    let err = Keymap::parse("q aw\nq s\n").unwrap_err();
    assert!(err.to_string().contains("duplicate key 'q'"));
}

#[test]
fn test_parse_rejects_empty_input() {
    let err = Keymap::parse("# nothing here\n\n").unwrap_err();
    assert!(matches!(err, CoreError::EmptyKeymap));
}

#[test]
fn test_load_from_file() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("keymap.txt");
    fs::write(&path, "g bh\no lp\n")?;

    let keymap = Keymap::load(&path)?;
    assert_eq!(keymap.substitutes('g'), &['b', 'h']);
    assert_eq!(keymap.substitutes('o'), &['l', 'p']);

    Ok(())
}

#[test]
fn test_load_missing_file() {
    let temp_dir = TempDir::new().unwrap();
    let result = Keymap::load(&temp_dir.path().join("missing.txt"));
    assert!(matches!(result, Err(CoreError::IoError(_))));
}
