use std::path::Path;

use rusqlite::{params, Connection};
use tracing::info;

use crate::error::SinkError;
use crate::normalize::CleanRecord;

const TABLE: &str = "companies";

pub fn connect(path: &Path) -> rusqlite::Result<Connection> {
    Connection::open(path)
}

/// Replace the `companies` table with `records`, in one transaction.
pub fn write_companies(path: &Path, records: &[CleanRecord]) -> Result<(), SinkError> {
    let wrap = |source: rusqlite::Error| SinkError::Sqlite {
        path: path.to_path_buf(),
        source,
    };

    let conn = connect(path).map_err(wrap)?;
    let count = replace_companies(&conn, records).map_err(wrap)?;
    info!("Wrote {} rows to {}:{}", count, path.display(), TABLE);
    Ok(())
}

fn replace_companies(conn: &Connection, records: &[CleanRecord]) -> rusqlite::Result<usize> {
    let tx = conn.unchecked_transaction()?;
    tx.execute_batch(&format!(
        "
        DROP TABLE IF EXISTS {TABLE};
        CREATE TABLE {TABLE} (
            company_id   INTEGER,
            company_name TEXT,
            category     TEXT,
            email        TEXT,
            phone        TEXT,
            country      TEXT
        );
        "
    ))?;

    let mut count = 0;
    {
        let mut stmt = tx.prepare(&format!(
            "INSERT INTO {TABLE} (company_id, company_name, category, email, phone, country)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)"
        ))?;
        for r in records {
            count += stmt.execute(params![
                r.company_id,
                r.company_name,
                r.category,
                r.email,
                r.phone,
                r.country,
            ])?;
        }
    }
    tx.commit()?;
    Ok(count)
}
