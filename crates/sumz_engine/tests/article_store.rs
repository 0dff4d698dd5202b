use std::fs;

use pretty_assertions::assert_eq;
use sumz_core::Article;
use sumz_engine::{
    decode_articles, encode_articles, ArticleStore, FileStorage, KeyValueStorage, MemoryStorage,
    ARTICLES_KEY,
};
use tempfile::TempDir;

fn init_logging() {
    sumz_logging::initialize_for_tests();
}

fn sample() -> Vec<Article> {
    vec![
        Article::new("https://example.com/a", "Summary A"),
        Article::new("https://example.com/b", "Summary \"B\"\nwith a newline"),
    ]
}

#[test]
fn absent_slot_loads_empty() {
    init_logging();
    let store = ArticleStore::new(MemoryStorage::new());
    assert!(store.load().is_empty());
}

#[test]
fn corrupt_or_empty_slot_loads_empty() {
    init_logging();
    for raw in ["", "   ", "not json", "{\"url\":\"x\"}", "[{\"url\":\"x\"}]", "null"] {
        let store = ArticleStore::new(MemoryStorage::with_item(ARTICLES_KEY, raw));
        assert!(store.load().is_empty(), "raw {raw:?} should load as empty");
    }
}

#[test]
fn save_then_load_round_trips_in_order() {
    init_logging();
    let storage = MemoryStorage::new();
    let store = ArticleStore::new(storage.clone());

    store.save(&sample());

    assert_eq!(store.load(), sample());
    let raw = storage.get_item(ARTICLES_KEY).unwrap().unwrap();
    assert_eq!(raw, encode_articles(&sample()).unwrap());
}

#[test]
fn load_is_idempotent() {
    init_logging();
    let store = ArticleStore::new(MemoryStorage::with_item(
        ARTICLES_KEY,
        &encode_articles(&sample()).unwrap(),
    ));
    let first = store.load();
    let second = store.load();
    assert_eq!(first, second);
    assert_eq!(first.len(), 2);
}

#[test]
fn save_replaces_the_whole_list() {
    init_logging();
    let store = ArticleStore::new(MemoryStorage::new());
    store.save(&sample());
    store.save(&[Article::new("https://example.com/c", "C")]);
    assert_eq!(store.load(), vec![Article::new("https://example.com/c", "C")]);
}

#[test]
fn format_is_a_json_array_of_url_summary_records() {
    let encoded = encode_articles(&[Article::new("https://example.com/a", "S1")]).unwrap();
    assert_eq!(encoded, r#"[{"url":"https://example.com/a","summary":"S1"}]"#);

    // Unknown fields written by other clients are tolerated.
    let decoded =
        decode_articles(r#"[{"url":"https://example.com/a","summary":"S1","extra":1}]"#).unwrap();
    assert_eq!(decoded, vec![Article::new("https://example.com/a", "S1")]);
}

#[test]
fn file_storage_persists_across_instances() {
    init_logging();
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("data");

    ArticleStore::new(FileStorage::new(&dir)).save(&sample());

    let storage = FileStorage::new(&dir);
    assert_eq!(storage.path_for(ARTICLES_KEY), dir.join("articles.json"));
    assert!(storage.path_for(ARTICLES_KEY).is_file());
    assert_eq!(ArticleStore::new(storage).load(), sample());
}

#[test]
fn file_storage_treats_corrupt_file_as_empty() {
    init_logging();
    let temp = TempDir::new().unwrap();
    let storage = FileStorage::new(temp.path());
    fs::write(storage.path_for(ARTICLES_KEY), "{{{").unwrap();

    assert!(ArticleStore::new(storage).load().is_empty());
}

#[test]
fn file_storage_missing_dir_loads_empty() {
    init_logging();
    let temp = TempDir::new().unwrap();
    let storage = FileStorage::new(temp.path().join("never_created"));
    assert_eq!(storage.get_item(ARTICLES_KEY).unwrap(), None);
    assert!(ArticleStore::new(storage).load().is_empty());
}

#[test]
fn failed_write_is_swallowed() {
    init_logging();
    let temp = TempDir::new().unwrap();
    let blocker = temp.path().join("blocker");
    fs::write(&blocker, "x").unwrap();

    let store = ArticleStore::new(FileStorage::new(&blocker));
    store.save(&sample());
    assert!(store.load().is_empty());
}
