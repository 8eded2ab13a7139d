//! Table descriptors and relation metadata
//!
//! Each table lists its columns and the relations it takes part in.
//! [`eager_select`] renders a single JOIN that loads a row together with
//! a related row; related columns come back aliased `<relation>__<column>`
//! so the repository can map them without guessing.

use thiserror::Error;

/// How the local table points at the related one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelationKind {
    /// Local row holds the foreign key (`comments.article_id -> articles.id`)
    BelongsTo,
    /// Related rows hold the foreign key (`articles.id <- comments.article_id`)
    HasMany,
}

/// A named relation between two tables
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Relation {
    pub name: &'static str,
    pub kind: RelationKind,
    /// Column on the local table
    pub local_key: &'static str,
    /// Related table name
    pub target: &'static str,
    /// Column on the related table
    pub foreign_key: &'static str,
}

/// A table and its columns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Table {
    pub name: &'static str,
    pub columns: &'static [&'static str],
    pub relations: &'static [Relation],
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SchemaError {
    #[error("unknown table '{0}'")]
    UnknownTable(String),

    #[error("table '{table}' has no relation '{relation}'")]
    UnknownRelation {
        table: &'static str,
        relation: String,
    },
}

pub static ARTICLES: Table = Table {
    name: "articles",
    columns: &["id", "title", "body", "is_approved"],
    relations: &[Relation {
        name: "comments",
        kind: RelationKind::HasMany,
        local_key: "id",
        target: "comments",
        foreign_key: "article_id",
    }],
};

pub static COMMENTS: Table = Table {
    name: "comments",
    columns: &["id", "article_id", "description"],
    relations: &[Relation {
        name: "article",
        kind: RelationKind::BelongsTo,
        local_key: "article_id",
        target: "articles",
        foreign_key: "id",
    }],
};

static TABLES: &[&Table] = &[&ARTICLES, &COMMENTS];

/// Alias used for the local table in rendered queries
pub const LOCAL_ALIAS: &str = "t";

/// Alias used for the related table in rendered queries
pub const RELATED_ALIAS: &str = "r";

/// Look up a table by name.
pub fn table(name: &str) -> Result<&'static Table, SchemaError> {
    TABLES
        .iter()
        .copied()
        .find(|t| t.name == name)
        .ok_or_else(|| SchemaError::UnknownTable(name.to_owned()))
}

impl Table {
    pub fn relation(&self, name: &str) -> Result<&'static Relation, SchemaError> {
        let relations: &'static [Relation] = self.relations;
        relations
            .iter()
            .find(|r| r.name == name)
            .ok_or_else(|| SchemaError::UnknownRelation {
                table: self.name,
                relation: name.to_owned(),
            })
    }

    /// `alias.col, alias.col, ...`
    pub fn qualified_columns(&self, alias: &str) -> String {
        self.columns
            .iter()
            .map(|c| format!("{alias}.{c}"))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// `SELECT <columns> FROM <table>`
    pub fn select(&self) -> String {
        format!("SELECT {} FROM {}", self.columns.join(", "), self.name)
    }
}

/// Column alias for a related column, e.g. `article__title`.
pub fn related_column(relation: &str, column: &str) -> String {
    format!("{relation}__{column}")
}

/// Render `SELECT ... FROM <table> t JOIN <target> r ON ...` for `relation`.
///
/// Local columns keep their names; related columns are aliased with
/// [`related_column`]. `BelongsTo` uses an inner join because the foreign
/// key is mandatory; `HasMany` uses a left join so parents without
/// children still appear.
pub fn eager_select(table: &Table, relation: &str) -> Result<String, SchemaError> {
    let rel = table.relation(relation)?;
    let target = self::table(rel.target)?;

    let related = target
        .columns
        .iter()
        .map(|c| format!("{RELATED_ALIAS}.{c} AS {}", related_column(rel.name, c)))
        .collect::<Vec<_>>()
        .join(", ");

    let join = match rel.kind {
        RelationKind::BelongsTo => "JOIN",
        RelationKind::HasMany => "LEFT JOIN",
    };

    Ok(format!(
        "SELECT {local}, {related} FROM {table} {LOCAL_ALIAS} {join} {target} {RELATED_ALIAS} ON {RELATED_ALIAS}.{fk} = {LOCAL_ALIAS}.{lk}",
        local = table.qualified_columns(LOCAL_ALIAS),
        table = table.name,
        target = target.name,
        fk = rel.foreign_key,
        lk = rel.local_key,
    ))
}
