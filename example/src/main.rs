use std::env;
use std::error::Error;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Instant;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlbulk::Record;
use sqlbulk_sqlite::Database;
use uuid::Uuid;

const SCHEMA: &str = r#"
    CREATE TABLE IF NOT EXISTS "QuoteScenario" (
        "Id" INTEGER PRIMARY KEY AUTOINCREMENT,
        "Name" TEXT NOT NULL,
        "Route" TEXT NOT NULL,
        "CorrelationId" TEXT NOT NULL,
        "Comment" TEXT,
        "Price" NUMERIC NOT NULL,
        "Parcels" INTEGER,
        "ValidFrom" TEXT NOT NULL,
        "RecordedAt" TEXT NOT NULL
    );
"#;

const TABLE: &str = r#""QuoteScenario""#;

#[derive(Clone)]
pub struct Timestamp(pub DateTime<Utc>);

impl FromStr for Timestamp {
    type Err = chrono::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Timestamp(DateTime::parse_from_rfc3339(s)?
            .with_timezone(&Utc)))
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.to_rfc3339())
    }
}

#[derive(Record)]
struct QuoteScenario {
    #[allow(dead_code)]
    #[insert(editable = false, rename = "Id")]
    id: i64,
    #[insert(rename = "Name")]
    name: String,
    #[insert(rename = "Route")]
    route: String,
    #[insert(rename = "CorrelationId")]
    correlation_id: Uuid,
    #[insert(rename = "Comment")]
    comment: Option<String>,
    #[insert(rename = "Price")]
    price: Decimal,
    #[insert(rename = "Parcels")]
    parcels: Option<i32>,
    #[insert(rename = "ValidFrom")]
    valid_from: DateTime<Utc>,
    // kept as RFC 3339 text, offset included
    #[insert(rename = "RecordedAt", display)]
    recorded_at: Timestamp,
}

struct Config {
    database: Option<PathBuf>,
    rows: usize,
    rows_per_statement: usize,
}

impl Config {
    fn from_env() -> Result<Self, Box<dyn Error>> {
        Ok(Config {
            database: env::var_os("SQLBULK_DATABASE").map(PathBuf::from),
            rows: parse_var("SQLBULK_ROWS", 1000)?,
            rows_per_statement: parse_var("SQLBULK_CHUNK", 500)?,
        })
    }
}

fn parse_var(name: &str, default: usize) -> Result<usize, Box<dyn Error>> {
    match env::var(name) {
        Ok(value) => value.parse::<usize>()
            .map_err(|e| -> Box<dyn Error> { format!("{} must be a row count: {}", name, e).into() }),
        Err(env::VarError::NotPresent) => Ok(default),
        Err(e) => Err(format!("{}: {}", name, e).into()),
    }
}

fn scenarios(n: usize) -> Result<Vec<QuoteScenario>, chrono::ParseError> {
    let recorded_at: Timestamp = "2024-05-01T12:00:00+02:00".parse()?;

    let records = (0..n)
        .map(|i| QuoteScenario {
            id: 0,
            name: format!("scenario {}", i),
            route: if i % 2 == 0 { "GB2GB" } else { "GB2IE" }.to_owned(),
            correlation_id: Uuid::new_v4(),
            comment: (i % 5 == 0).then(|| format!("customer's note #{}", i)),
            price: Decimal::new(i as i64 * 199, 2),
            parcels: (i % 3 != 0).then_some(i as i32 % 7),
            valid_from: Utc::now(),
            recorded_at: recorded_at.clone(),
        })
        .collect();

    Ok(records)
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let config = Config::from_env()?;

    let mut db = match &config.database {
        Some(path) => {
            let db = Database::open(path)?;
            db.connection().execute_batch(SCHEMA)?;
            db
        }
        None => Database::from_sql(SCHEMA)?,
    };

    let records = scenarios(config.rows)?;
    log::info!("generated {} records", records.len());

    let started = Instant::now();
    let inserted = db.insert_each(TABLE, &records)?;
    let one_by_one = started.elapsed();

    db.execute_raw(&format!("DELETE FROM {}", TABLE))?;

    let started = Instant::now();
    let bulk = db.bulk_insert_chunked(TABLE, &records, config.rows_per_statement)?;
    let chunked = started.elapsed();

    println!("row by row: {} rows in {:?}", inserted, one_by_one);
    println!("bulk:       {} rows in {:?}", bulk, chunked);

    let preview = db.query_all(
        &format!(r#"SELECT "Name", "Comment", "Price" FROM {} ORDER BY "Id" LIMIT 3"#, TABLE),
        |row| Ok((
            row.get::<_, String>(0)?,
            row.get::<_, Option<String>>(1)?,
            row.get::<_, f64>(2)?,
        )),
    )?;

    for (name, comment, price) in preview {
        println!("{} | {} | {}", name, comment.unwrap_or_default(), price);
    }

    Ok(())
}
