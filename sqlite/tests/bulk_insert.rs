use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use sqlbulk::{Insert, Record};
use sqlbulk_sqlite::{Database, ExecuteError};
use uuid::Uuid;

const SCHEMA: &str = r#"
    CREATE TABLE "TestCase" (
        "Id" INTEGER PRIMARY KEY AUTOINCREMENT,
        "ScenarioName" TEXT NOT NULL,
        "RouteCode" TEXT NOT NULL,
        "CorrelationId" TEXT NOT NULL,
        "Note" TEXT,
        "Weight" NUMERIC NOT NULL,
        "Ratio" REAL,
        "Parcels" INTEGER,
        "CreatedAt" TEXT NOT NULL,
        "IsActive" TEXT NOT NULL
    );
"#;

#[derive(Record, Clone)]
struct TestCase {
    #[allow(dead_code)]
    #[insert(editable = false, rename = "Id")]
    id: i64,
    #[insert(rename = "ScenarioName")]
    scenario_name: String,
    #[insert(rename = "RouteCode")]
    route_code: String,
    #[insert(rename = "CorrelationId")]
    correlation_id: Uuid,
    #[insert(rename = "Note")]
    note: Option<String>,
    #[insert(rename = "Weight")]
    weight: Decimal,
    #[insert(rename = "Ratio")]
    ratio: Option<f64>,
    #[insert(rename = "Parcels")]
    parcels: Option<i32>,
    #[insert(rename = "CreatedAt")]
    created_at: NaiveDateTime,
    #[insert(rename = "IsActive")]
    is_active: bool,
}

fn created_at() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2023, 11, 5)
        .unwrap()
        .and_hms_opt(8, 30, 0)
        .unwrap()
}

fn test_cases(n: usize) -> Vec<TestCase> {
    (0..n)
        .map(|i| TestCase {
            id: -1,
            scenario_name: format!("testcase{}", i),
            route_code: "GB2GB".to_owned(),
            correlation_id: Uuid::new_v4(),
            note: if i % 3 == 0 { None } else { Some(format!("it's #{}", i)) },
            weight: Decimal::new(i as i64 * 25, 2),
            ratio: if i % 2 == 0 { Some(0.5) } else { None },
            parcels: if i % 2 == 0 { None } else { Some(i as i32) },
            created_at: created_at(),
            is_active: i % 2 != 0,
        })
        .collect()
}

fn count(db: &Database) -> i64 {
    db.query_all(r#"SELECT COUNT(*) FROM "TestCase""#, |row| row.get(0))
        .unwrap()[0]
}

#[test]
fn inserts_and_reads_back() {
    let db = Database::from_sql(SCHEMA).unwrap();
    let cases = test_cases(4);

    let inserted = db.bulk_insert(r#""TestCase""#, &cases).unwrap();
    assert_eq!(inserted, 4);

    let rows = db
        .query_all(
            r#"SELECT "Id", "ScenarioName", "CorrelationId", "Note", "Parcels", "CreatedAt", "IsActive"
               FROM "TestCase" ORDER BY "Id""#,
            |row| {
                Ok((
                    row.get::<_, i64>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, String>(2)?,
                    row.get::<_, Option<String>>(3)?,
                    row.get::<_, Option<i32>>(4)?,
                    row.get::<_, String>(5)?,
                    row.get::<_, String>(6)?,
                ))
            },
        )
        .unwrap();

    assert_eq!(rows.len(), 4);

    // ids come from the store, not from the records
    let ids = rows.iter().map(|row| row.0).collect::<Vec<_>>();
    assert_eq!(ids, [1, 2, 3, 4]);

    assert_eq!(rows[1].1, "testcase1");
    assert_eq!(rows[1].2, cases[1].correlation_id.to_string());
    assert_eq!(rows[1].3.as_deref(), Some("it's #1"));
    assert_eq!(rows[1].4, Some(1));
    assert_eq!(rows[1].5, "2023-11-05 08:30:00");
    assert_eq!(rows[1].6, "true");

    // a null string is stored as an empty string, a null integer as NULL
    assert_eq!(rows[0].3.as_deref(), Some(""));
    assert_eq!(rows[0].4, None);
}

#[test]
fn untrusted_text_is_stored_verbatim() {
    let db = Database::from_sql(SCHEMA).unwrap();
    let mut case = test_cases(1).remove(0);
    case.scenario_name = "x'); DROP TABLE \"TestCase\"; --".to_owned();

    db.bulk_insert(r#""TestCase""#, &[case.clone()]).unwrap();

    let names = db
        .query_all(r#"SELECT "ScenarioName" FROM "TestCase""#, |row| row.get::<_, String>(0))
        .unwrap();
    assert_eq!(names, [case.scenario_name]);
}

#[test]
fn empty_batch_does_nothing() {
    let db = Database::from_sql(SCHEMA).unwrap();
    assert_eq!(db.bulk_insert::<TestCase>(r#""TestCase""#, &[]).unwrap(), 0);
    assert_eq!(count(&db), 0);
}

#[test]
fn blank_table_is_an_argument_error() {
    let mut db = Database::from_sql(SCHEMA).unwrap();

    let err = db.bulk_insert::<TestCase>("", &[]).unwrap_err();
    assert!(matches!(
        err,
        ExecuteError::Generate(sqlbulk::Error::InvalidArgument { parameter: "table_name" })
    ));

    let err = db.bulk_insert_chunked(r#""TestCase""#, &test_cases(1), 0).unwrap_err();
    assert!(matches!(
        err,
        ExecuteError::Generate(sqlbulk::Error::InvalidArgument { parameter: "rows_per_statement" })
    ));
}

#[test]
fn sql_errors_are_reported() {
    let db = Database::from_sql(SCHEMA).unwrap();
    let err = db.bulk_insert("missing_table", &test_cases(1)).unwrap_err();
    assert!(matches!(err, ExecuteError::Sql(_)));
}

#[test]
fn chunked_insert_matches_single_statement() {
    let cases = test_cases(1000);

    let mut chunked = Database::from_sql(SCHEMA).unwrap();
    assert_eq!(chunked.bulk_insert_chunked(r#""TestCase""#, &cases, 300).unwrap(), 1000);

    let single = Database::from_sql(SCHEMA).unwrap();
    assert_eq!(single.bulk_insert(r#""TestCase""#, &cases).unwrap(), 1000);

    let mut each = Database::from_sql(SCHEMA).unwrap();
    assert_eq!(each.insert_each(r#""TestCase""#, &cases).unwrap(), 1000);

    let names = |db: &Database| {
        db.query_all(r#"SELECT "ScenarioName" FROM "TestCase" ORDER BY "Id""#, |row| {
            row.get::<_, String>(0)
        })
        .unwrap()
    };
    assert_eq!(names(&chunked), names(&single));
    assert_eq!(names(&each), names(&single));
}

#[test]
fn failed_chunk_rolls_back_the_batch() {
    let mut db = Database::from_sql(
        r#"CREATE TABLE "TestCase" (
            "Id" INTEGER PRIMARY KEY AUTOINCREMENT,
            "ScenarioName" TEXT NOT NULL UNIQUE,
            "RouteCode" TEXT, "CorrelationId" TEXT, "Note" TEXT, "Weight" NUMERIC,
            "Ratio" REAL, "Parcels" INTEGER, "CreatedAt" TEXT, "IsActive" TEXT
        );"#,
    )
    .unwrap();

    let mut cases = test_cases(10);
    cases[9].scenario_name = cases[0].scenario_name.clone();

    assert!(db.bulk_insert_chunked(r#""TestCase""#, &cases, 4).is_err());
    assert_eq!(count(&db), 0);
}

#[test]
fn insert_through_execute_trait() {
    let mut db = Database::from_sql(SCHEMA).unwrap();
    let cases = test_cases(3);

    let affected = Insert::new(r#""TestCase""#, &cases[..])
        .unwrap()
        .execute(&mut db)
        .unwrap();

    assert_eq!(affected, 3);
    assert_eq!(count(&db), 3);
}

#[test]
fn record_columns_exist_in_table() {
    let db = Database::from_sql(SCHEMA).unwrap();
    let table = db.columns(r#""TestCase""#).unwrap();

    for column in sqlbulk::select_columns::<TestCase>() {
        assert!(table.iter().any(|c| c.name == column), "missing {}", column);
    }

    let id = table.iter().find(|c| c.name == "Id").unwrap();
    assert!(id.primary_key_part.is_some());
    assert!(!sqlbulk::select_columns::<TestCase>().contains(&"Id"));
}
