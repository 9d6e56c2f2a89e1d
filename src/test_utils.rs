use crate::*;
use diesel::RunQueryDsl;
use diesel::sql_types::Text;
use diesel::QueryableByName;
use proptest::prelude::*;

/// Sets up a test database with migrations applied
///
/// This function:
/// 1. Creates an in-memory SQLite database
/// 2. Runs all migrations to set up the schema
///
/// ### Returns
///
/// A database connection pool connected to the in-memory database
pub fn setup_test_db() -> db::DbPool {
    // A unique shared-cache URI keeps each test's database isolated while
    // surviving the pool recycling its connection.
    let unique_id = uuid::Uuid::new_v4();
    let database_url = format!("file:test_{}?mode=memory&cache=shared", unique_id);
    let pool = db::init_pool(&database_url).expect("Failed to create pool");

    let mut conn = pool.get().expect("Failed to get connection");
    run_migrations(&mut conn).expect("Failed to run migrations");
    drop(conn);

    pool
}

/// Configuration tuned for tests: few users, no waiting
pub fn test_config(seed_count: usize) -> config::Config {
    config::Config {
        database_url: ":memory:".to_string(),
        seed_count,
        max_user_attempts: 3,
        retry_backoff_ms: 0,
        prompt_delay_ms: 0,
    }
}

/// Generates strings with unicode, whitespace and quotes mixed in
pub fn arb_messy_string() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Z0-9]{0,16}",
        "\\PC{0,16}",
        "[ \"'\\\\\\[\\]{},]{0,8}",
    ]
}

#[derive(QueryableByName, Debug)]
struct TableName {
    #[diesel(sql_type = Text)]
    name: String,
}

/// Tests that the migrations create every collection the seeder writes
#[test]
fn test_setup_test_db() {
    let pool = setup_test_db();
    let mut conn = pool.get().unwrap();

    let table_names: Vec<TableName> =
        diesel::sql_query("SELECT name FROM sqlite_master WHERE type='table'")
            .load(&mut conn)
            .expect("Failed to load table names");

    let expected_tables = vec!["users", "items", "comments", "__diesel_schema_migrations"];

    for table in expected_tables {
        let exists = table_names.iter().any(|t| t.name == table);
        assert!(exists, "Table '{}' not found in database", table);

        let query = format!("SELECT COUNT(*) FROM {}", table);
        let result = diesel::sql_query(&query).execute(&mut conn);
        assert!(result.is_ok(), "Failed to query table '{}': {:?}", table, result.err());
    }
}

/// Tests that two test databases do not see each other's rows
#[test]
fn test_setup_test_db_is_isolated() {
    let first = setup_test_db();
    let second = setup_test_db();

    let user = models::User::new("isolated".to_string(), "isolated@anythink.com".to_string());
    repo::insert_user(&first, &user).unwrap();

    assert_eq!(repo::count_users(&first).unwrap(), 1);
    assert_eq!(repo::count_users(&second).unwrap(), 0);
}
