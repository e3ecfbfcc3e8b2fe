//! SQLite record sink

use super::{RecordSink, SinkSchema};
use crate::error::ImportResult;
use crate::types::{Category, TireRecord};
use rusqlite::{params, Connection};
use std::path::Path;

pub struct SqliteSink {
    conn: Connection,
    insert_sql: String,
}

impl SqliteSink {
    /// Open (or create) the database file and prepare the table
    pub fn open<P: AsRef<Path>>(path: P, schema: &SinkSchema) -> ImportResult<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let conn = Connection::open(path)?;
        Self::with_connection(conn, schema)
    }

    pub fn with_connection(conn: Connection, schema: &SinkSchema) -> ImportResult<Self> {
        schema.validate()?;
        conn.execute_batch(&ddl(schema))?;
        Ok(Self {
            conn,
            insert_sql: insert_sql(&schema.table),
        })
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    pub fn into_connection(self) -> Connection {
        self.conn
    }
}

impl RecordSink for SqliteSink {
    fn accept(&mut self, record: TireRecord) -> ImportResult<()> {
        let mut stmt = self.conn.prepare_cached(&self.insert_sql)?;
        stmt.execute(params![
            record.category.as_str(),
            record.season,
            record.width,
            record.height,
            record.diameter,
            record.brand_name,
            record.model_name,
            record.weight_index,
            record.speed_index,
            record.strengthened,
            record.is_studded,
            record.additional,
            record.remainder,
            record.price,
            record.country,
            record.production_year.format("%Y-%m-%d").to_string(),
        ])?;
        Ok(())
    }
}

/// Table DDL. SQLite has no enum type, so the category set is a CHECK.
fn ddl(schema: &SinkSchema) -> String {
    let categories = Category::ALL
        .iter()
        .map(|c| format!("'{}'", c.as_str()))
        .collect::<Vec<_>>()
        .join(",");
    let drop = if schema.recreate {
        format!("DROP TABLE IF EXISTS {};", schema.table)
    } else {
        String::new()
    };

    format!(
        r#"
        {drop}
        CREATE TABLE IF NOT EXISTS {table} (
            id              INTEGER PRIMARY KEY AUTOINCREMENT,
            tires_type      TEXT NOT NULL CHECK (tires_type IN ({categories})),
            season          VARCHAR(10),
            width           VARCHAR(3),
            height          VARCHAR(2),
            diameter        VARCHAR(2),
            brand_name      VARCHAR(25),
            model_name      VARCHAR(50),
            weight_index    VARCHAR(2),
            speed_index     VARCHAR(1),
            strengthened    VARCHAR(2),
            is_studded      BOOLEAN,
            additional      VARCHAR(2),
            remainder       VARCHAR(15),
            price           VARCHAR(20),
            country         VARCHAR(25),
            production_year DATE
        );
        "#,
        table = schema.table,
    )
}

fn insert_sql(table: &str) -> String {
    format!(
        "INSERT INTO {table} (
            tires_type, season, width, height, diameter, brand_name, model_name,
            weight_index, speed_index, strengthened, is_studded,
            additional, remainder, price, country, production_year
        ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16)"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ImportError;
    use crate::types::{Abbreviation, PassThrough};
    use chrono::NaiveDate;

    fn record(category: Category, model: &str) -> TireRecord {
        TireRecord::new(
            category,
            Abbreviation {
                width: "215".to_string(),
                height: "60".to_string(),
                diameter: "16".to_string(),
                model_name: model.to_string(),
                is_studded: true,
                ..Default::default()
            },
            PassThrough {
                season: "Зима".to_string(),
                price: "4500".to_string(),
                ..Default::default()
            },
            NaiveDate::from_ymd_opt(2017, 1, 1).unwrap(),
        )
    }

    fn memory_sink(schema: &SinkSchema) -> SqliteSink {
        SqliteSink::with_connection(Connection::open_in_memory().unwrap(), schema).unwrap()
    }

    #[test]
    fn test_insert_and_read_back() {
        let mut sink = memory_sink(&SinkSchema::default());
        sink.accept(record(Category::Freight, "Hakka")).unwrap();

        let (kind, model, studded, year): (String, String, bool, String) = sink
            .connection()
            .query_row(
                "SELECT tires_type, model_name, is_studded, production_year FROM tires",
                [],
                |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?)),
            )
            .unwrap();

        assert_eq!(kind, "FREIGHT");
        assert_eq!(model, "Hakka");
        assert!(studded);
        assert_eq!(year, "2017-01-01");
    }

    #[test]
    fn test_rows_keep_insert_order() {
        let mut sink = memory_sink(&SinkSchema::default());
        for model in ["a", "b", "c"] {
            sink.accept(record(Category::Car, model)).unwrap();
        }

        let mut stmt = sink
            .connection()
            .prepare("SELECT model_name FROM tires ORDER BY id")
            .unwrap();
        let models: Vec<String> = stmt
            .query_map([], |row| row.get(0))
            .unwrap()
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(models, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_recreate_drops_previous_rows() {
        let conn = Connection::open_in_memory().unwrap();
        let mut sink = SqliteSink::with_connection(conn, &SinkSchema::default()).unwrap();
        sink.accept(record(Category::Car, "old")).unwrap();

        let keep = SinkSchema {
            recreate: false,
            ..Default::default()
        };
        let sink = SqliteSink::with_connection(sink.into_connection(), &keep).unwrap();
        let count: i64 = sink
            .connection()
            .query_row("SELECT COUNT(*) FROM tires", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 1);

        let sink = SqliteSink::with_connection(sink.into_connection(), &SinkSchema::default())
            .unwrap();
        let count: i64 = sink
            .connection()
            .query_row("SELECT COUNT(*) FROM tires", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 0);
    }

    #[test]
    fn test_insert_failure_is_an_error() {
        let mut sink = memory_sink(&SinkSchema::default());
        sink.connection().execute_batch("DROP TABLE tires;").unwrap();

        assert!(sink.accept(record(Category::Car, "x")).is_err());
    }

    #[test]
    fn test_custom_table_name() {
        let schema = SinkSchema {
            table: "tires_2017".to_string(),
            recreate: true,
        };
        let mut sink = memory_sink(&schema);
        sink.accept(record(Category::Bike, "m")).unwrap();

        let count: i64 = sink
            .connection()
            .query_row("SELECT COUNT(*) FROM tires_2017", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 1);
    }

    #[test]
    fn test_unsafe_table_name_is_rejected_before_any_sql() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch("CREATE TABLE x (id INTEGER);").unwrap();
        let schema = SinkSchema {
            table: "tires; DROP TABLE x".to_string(),
            recreate: true,
        };

        let result = SqliteSink::with_connection(conn, &schema);
        assert!(matches!(result, Err(ImportError::Validation(_))));
    }
}
