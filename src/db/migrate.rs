use crate::ui::messages::{success, warning};
use rusqlite::{Connection, Error, OptionalExtension, Result};

/// Ensure that the `log` table exists with the modern schema.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Check if `fasting_records` has a given column.
fn fasting_has_column(conn: &Connection, column: &str) -> Result<bool> {
    let mut stmt = conn.prepare("PRAGMA table_info('fasting_records')")?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == column {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Create all tables with the modern schema.
///
/// The partial unique index on open records is the store-level
/// serialization point for "at most one open fast per user": two
/// concurrent starts race on the index, not on the application check.
fn create_tables(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id                 INTEGER PRIMARY KEY AUTOINCREMENT,
            email              TEXT NOT NULL UNIQUE,
            name               TEXT NOT NULL,
            fasting_goal_hours REAL NOT NULL DEFAULT 16.0 CHECK (fasting_goal_hours > 0),
            created_at         TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS fasting_records (
            id             INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id        INTEGER NOT NULL REFERENCES users(id) ON DELETE CASCADE,
            start_time     TEXT NOT NULL,      -- "YYYY-MM-DD HH:MM"
            end_time       TEXT,               -- NULL while the fast is open
            duration_hours REAL,
            fasting_type   TEXT NOT NULL DEFAULT 'intermittent'
                           CHECK (fasting_type IN ('intermittent','extended','other')),
            energy_level   INTEGER CHECK (energy_level BETWEEN 1 AND 3),
            focus_level    INTEGER CHECK (focus_level BETWEEN 1 AND 3),
            mood_level     INTEGER CHECK (mood_level BETWEEN 1 AND 3),
            notes          TEXT NOT NULL DEFAULT '',
            created_at     TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_fasting_user_start
            ON fasting_records(user_id, start_time);

        CREATE UNIQUE INDEX IF NOT EXISTS idx_fasting_one_open
            ON fasting_records(user_id) WHERE end_time IS NULL;

        CREATE TABLE IF NOT EXISTS weight_records (
            id              INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id         INTEGER NOT NULL REFERENCES users(id) ON DELETE CASCADE,
            weight          REAL NOT NULL CHECK (weight > 0),
            reference_month TEXT NOT NULL,     -- "YYYY-MM"
            created_at      TEXT NOT NULL,
            UNIQUE (user_id, reference_month)
        );
        "#,
    )?;
    Ok(())
}

fn migration_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn mark_applied(conn: &Connection, version: &str, message: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [version, message],
    )?;
    Ok(())
}

/// Zip the DB file next to itself before a schema-altering migration.
fn backup_before_migration(db_path: &str) -> Result<()> {
    use chrono::Local;
    use std::fs::{self, File};
    use std::io::Write;
    use zip::CompressionMethod;
    use zip::ZipWriter;
    use zip::write::FileOptions;

    let backup_name = format!(
        "{}-backup_db_pre_migration.zip",
        Local::now().format("%Y%m%d_%H%M%S")
    );

    let backup_path = match std::path::Path::new(db_path).parent() {
        Some(dir) => dir.join(&backup_name),
        None => std::path::PathBuf::from(&backup_name),
    };

    let wrap = |e: std::io::Error, what: &str| {
        Error::ToSqlConversionFailure(Box::new(std::io::Error::new(
            e.kind(),
            format!("Backup failed ({what}): {e}"),
        )))
    };

    let file = File::create(&backup_path).map_err(|e| wrap(e, "create"))?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(CompressionMethod::Deflated);

    zip.start_file("database.sqlite", options)
        .map_err(|e| wrap(std::io::Error::other(e), "start_file"))?;

    let db_content = fs::read(db_path).map_err(|e| wrap(e, "read"))?;
    zip.write_all(&db_content).map_err(|e| wrap(e, "write_all"))?;
    zip.finish()
        .map_err(|e| wrap(std::io::Error::other(e), "finish"))?;

    success(format!("📦 Backup created: {}", backup_path.display()));
    Ok(())
}

/// Add the wellbeing columns to DBs created before they existed.
fn migrate_add_wellbeing_levels(conn: &Connection) -> Result<()> {
    let version = "20250612_0007_add_wellbeing_levels";

    if migration_applied(conn, version)? {
        return Ok(());
    }

    if !fasting_has_column(conn, "energy_level")? {
        warning("Adding wellbeing columns to fasting_records...");

        conn.execute_batch(
            r#"
            ALTER TABLE fasting_records
                ADD COLUMN energy_level INTEGER CHECK (energy_level BETWEEN 1 AND 3);
            ALTER TABLE fasting_records
                ADD COLUMN focus_level INTEGER CHECK (focus_level BETWEEN 1 AND 3);
            ALTER TABLE fasting_records
                ADD COLUMN mood_level INTEGER CHECK (mood_level BETWEEN 1 AND 3);
            "#,
        )?;

        success(format!(
            "Migration applied: {} → added wellbeing levels to fasting_records",
            version
        ));
    }

    mark_applied(conn, version, "Added wellbeing levels to fasting_records")?;
    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Invoked by db::initialize::init_db().
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    // 1) Ensure log table
    ensure_log_table(conn)?;

    // 2) Detect a legacy fasting table (pre-wellbeing) before touching it
    let legacy_schema =
        table_exists(conn, "fasting_records")? && !fasting_has_column(conn, "energy_level")?;

    if legacy_schema {
        warning("Legacy schema detected — creating safety backup before migration...");

        let db_path: String = conn
            .query_row("PRAGMA database_list;", [], |row| row.get::<_, String>(2))
            .unwrap_or_default();

        if !db_path.is_empty() {
            backup_before_migration(&db_path)?;
        } else {
            warning("Could not determine DB path — backup skipped.");
        }
    }

    // 3) Create anything missing, then apply staged migrations
    create_tables(conn)?;
    migrate_add_wellbeing_levels(conn)?;

    Ok(())
}
