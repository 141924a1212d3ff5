//! Project store behavior against a real SQLite file.

use pf_dao::{project::ProjectDao, Db};
use pf_db_sqlite::db::SqliteDb;
use tempfile::TempDir;

async fn open_store(dir: &TempDir) -> Db {
    let path = dir.path().join("projects.db");
    Db::SqliteDb(
        SqliteDb::new(path.to_str().expect("temp path is utf-8"), &1)
            .await
            .expect("store should open"),
    )
}

async fn add(db: &Db, title: &str, description: &str, image_file_name: &str) -> i64 {
    ProjectDao::new(title, description, image_file_name)
        .db_insert(db)
        .await
        .expect("insert should succeed")
}

fn titles(projects: &[ProjectDao]) -> Vec<&str> {
    projects.iter().map(|project| project.title()).collect()
}

#[tokio::test]
async fn list_on_empty_store_is_empty() {
    let dir = TempDir::new().unwrap();
    let db = open_store(&dir).await;

    let projects = ProjectDao::db_select_all(&db).await.unwrap();
    assert!(projects.is_empty());
}

#[tokio::test]
async fn insert_stores_trimmed_fields() {
    let dir = TempDir::new().unwrap();
    let db = open_store(&dir).await;

    let id = add(&db, "  Test  ", "  Test description  ", "  test.jpg  ").await;

    let projects = ProjectDao::db_select_all(&db).await.unwrap();
    assert_eq!(projects.len(), 1);
    assert_eq!(*projects[0].id(), id);
    assert_eq!(projects[0].title(), "Test");
    assert_eq!(projects[0].description(), "Test description");
    assert_eq!(projects[0].image_file_name(), "test.jpg");
}

#[tokio::test]
async fn list_returns_most_recent_first() {
    let dir = TempDir::new().unwrap();
    let db = open_store(&dir).await;

    add(&db, "A", "first", "a.jpg").await;
    add(&db, "B", "second", "b.jpg").await;
    add(&db, "C", "third", "c.jpg").await;

    let projects = ProjectDao::db_select_all(&db).await.unwrap();
    assert_eq!(titles(&projects), vec!["C", "B", "A"]);
}

#[tokio::test]
async fn list_follows_write_order_not_build_order() {
    let dir = TempDir::new().unwrap();
    let db = open_store(&dir).await;

    let mut a = ProjectDao::new("A", "built first", "a.jpg");
    std::thread::sleep(std::time::Duration::from_millis(5));
    let mut b = ProjectDao::new("B", "built second", "b.jpg");

    b.db_insert(&db).await.unwrap();
    a.db_insert(&db).await.unwrap();
    assert!(a.created_at() >= b.created_at());

    let projects = ProjectDao::db_select_all(&db).await.unwrap();
    assert_eq!(titles(&projects), vec!["A", "B"]);
}

#[tokio::test]
async fn delete_unknown_id_returns_zero_and_changes_nothing() {
    let dir = TempDir::new().unwrap();
    let db = open_store(&dir).await;
    add(&db, "Kept", "still here", "kept.jpg").await;

    let removed = ProjectDao::db_delete(&db, &9999).await.unwrap();
    assert_eq!(removed, 0);

    let projects = ProjectDao::db_select_all(&db).await.unwrap();
    assert_eq!(titles(&projects), vec!["Kept"]);
}

#[tokio::test]
async fn delete_existing_id_leaves_others_untouched() {
    let dir = TempDir::new().unwrap();
    let db = open_store(&dir).await;

    let first = add(&db, "First", "one", "1.jpg").await;
    let second = add(&db, "Second", "two", "2.jpg").await;
    let third = add(&db, "Third", "three", "3.jpg").await;

    assert_eq!(ProjectDao::db_delete(&db, &second).await.unwrap(), 1);

    let projects = ProjectDao::db_select_all(&db).await.unwrap();
    let ids: Vec<i64> = projects.iter().map(|project| *project.id()).collect();
    assert_eq!(ids, vec![third, first]);

    assert_eq!(ProjectDao::db_delete(&db, &second).await.unwrap(), 0);
}

#[tokio::test]
async fn add_then_delete_round_trip() {
    let dir = TempDir::new().unwrap();
    let db = open_store(&dir).await;
    add(&db, "Older", "an older project", "older.jpg").await;

    let mut demo = ProjectDao::new("Demo", "A demo project", "demo.jpg");
    let id = demo.db_insert(&db).await.unwrap();
    assert_eq!(*demo.id(), id);

    let projects = ProjectDao::db_select_all(&db).await.unwrap();
    assert_eq!(projects[0].title(), "Demo");

    assert_eq!(ProjectDao::db_delete(&db, &id).await.unwrap(), 1);
    let projects = ProjectDao::db_select_all(&db).await.unwrap();
    assert_eq!(titles(&projects), vec!["Older"]);
}

#[tokio::test]
async fn store_accepts_empty_fields() {
    let dir = TempDir::new().unwrap();
    let db = open_store(&dir).await;

    add(&db, "   ", "", "").await;

    let projects = ProjectDao::db_select_all(&db).await.unwrap();
    assert_eq!(projects.len(), 1);
    assert_eq!(projects[0].title(), "");
}

#[tokio::test]
async fn init_is_idempotent() {
    let dir = TempDir::new().unwrap();
    let db = open_store(&dir).await;
    add(&db, "Survivor", "kept across init", "s.jpg").await;

    db.init().await.unwrap();
    db.init().await.unwrap();

    let projects = ProjectDao::db_select_all(&db).await.unwrap();
    assert_eq!(titles(&projects), vec!["Survivor"]);
}
