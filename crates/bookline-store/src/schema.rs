//! Store schema: the explicit column-mapping table
//!
//! One table drives the `CREATE TABLE` DDL, the upsert statement, and the
//! expected dataset column order, so the loader and the schema cannot drift
//! apart.

/// What an upsert does to a column when the identifier already exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnConflict {
    /// First write wins; later batches never touch it.
    Preserve,
    /// Latest write wins.
    Replace,
}

pub struct Column {
    pub name: &'static str,
    pub sql_type: &'static str,
    pub on_conflict: OnConflict,
}

/// Column map for the `books` table, in canonical record order.
/// `isbn` is the primary key and the upsert conflict target; only `rank`,
/// `weeks_on_list`, and `ingested_at` are mutable across batches.
pub const COLUMNS: &[Column] = &[
    Column {
        name: "isbn",
        sql_type: "TEXT PRIMARY KEY",
        on_conflict: OnConflict::Preserve,
    },
    Column {
        name: "title",
        sql_type: "TEXT",
        on_conflict: OnConflict::Preserve,
    },
    Column {
        name: "author",
        sql_type: "TEXT",
        on_conflict: OnConflict::Preserve,
    },
    Column {
        name: "publisher",
        sql_type: "TEXT",
        on_conflict: OnConflict::Preserve,
    },
    Column {
        name: "publication_date",
        sql_type: "TEXT",
        on_conflict: OnConflict::Preserve,
    },
    Column {
        name: "description",
        sql_type: "TEXT",
        on_conflict: OnConflict::Preserve,
    },
    Column {
        name: "rank",
        sql_type: "INTEGER",
        on_conflict: OnConflict::Replace,
    },
    Column {
        name: "list_name",
        sql_type: "TEXT",
        on_conflict: OnConflict::Preserve,
    },
    Column {
        name: "weeks_on_list",
        sql_type: "INTEGER",
        on_conflict: OnConflict::Replace,
    },
    Column {
        name: "page_count",
        sql_type: "INTEGER",
        on_conflict: OnConflict::Preserve,
    },
    Column {
        name: "language",
        sql_type: "TEXT",
        on_conflict: OnConflict::Preserve,
    },
    Column {
        name: "cover_image_url",
        sql_type: "TEXT",
        on_conflict: OnConflict::Preserve,
    },
    Column {
        name: "buy_links",
        sql_type: "TEXT",
        on_conflict: OnConflict::Preserve,
    },
    Column {
        name: "data_source",
        sql_type: "TEXT",
        on_conflict: OnConflict::Preserve,
    },
    Column {
        name: "ingested_at",
        sql_type: "TIMESTAMP",
        on_conflict: OnConflict::Replace,
    },
];

/// Column names in table order.
pub fn column_names() -> Vec<&'static str> {
    COLUMNS.iter().map(|c| c.name).collect()
}

/// `CREATE TABLE IF NOT EXISTS` DDL built from the column map.
/// Names are quoted (`rank` collides with the window function keyword).
pub fn create_table_sql() -> String {
    let cols = COLUMNS
        .iter()
        .map(|c| format!("\"{}\" {}", c.name, c.sql_type))
        .collect::<Vec<_>>()
        .join(", ");
    format!("CREATE TABLE IF NOT EXISTS books ({cols})")
}

pub fn create_index_sql() -> &'static str {
    "CREATE INDEX IF NOT EXISTS idx_books_title ON books (title)"
}

/// Upsert statement: conflict target `isbn`, update clause built from the
/// `Replace` columns only.
pub fn upsert_sql() -> String {
    let names = COLUMNS
        .iter()
        .map(|c| format!("\"{}\"", c.name))
        .collect::<Vec<_>>()
        .join(", ");
    let placeholders = vec!["?"; COLUMNS.len()].join(", ");
    let updates = COLUMNS
        .iter()
        .filter(|c| c.on_conflict == OnConflict::Replace)
        .map(|c| format!("\"{0}\" = excluded.\"{0}\"", c.name))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "INSERT INTO books ({names}) VALUES ({placeholders}) \
         ON CONFLICT (isbn) DO UPDATE SET {updates}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn isbn_is_the_primary_key() {
        assert!(create_table_sql().contains("\"isbn\" TEXT PRIMARY KEY"));
    }

    #[test]
    fn upsert_names_every_column_once() {
        let sql = upsert_sql();
        for column in COLUMNS {
            assert_eq!(
                sql.matches(&format!("\"{}\"", column.name)).count(),
                if column.on_conflict == OnConflict::Replace {
                    // once in the insert list, twice in the update clause
                    3
                } else {
                    1
                },
                "column {}",
                column.name
            );
        }
    }

    #[test]
    fn update_clause_touches_only_mutable_columns() {
        let sql = upsert_sql();
        let updates = sql.split("DO UPDATE SET").nth(1).unwrap();
        assert!(updates.contains("\"rank\" = excluded.\"rank\""));
        assert!(updates.contains("\"weeks_on_list\" = excluded.\"weeks_on_list\""));
        assert!(updates.contains("\"ingested_at\" = excluded.\"ingested_at\""));
        assert!(!updates.contains("title"));
        assert!(!updates.contains("description"));
        assert!(!updates.contains("publisher"));
    }

    #[test]
    fn placeholder_count_matches_columns() {
        let sql = upsert_sql();
        let values = sql.split("VALUES").nth(1).unwrap();
        let placeholders = values.split("ON CONFLICT").next().unwrap();
        assert_eq!(placeholders.matches('?').count(), COLUMNS.len());
    }
}
