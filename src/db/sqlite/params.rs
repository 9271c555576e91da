//! Typed parameter binding.
//!
//! Statements declare the semantic type of each placeholder with a
//! [`ParamKind`]; callers supply a [`SqlValue`]. A null binds as a typed
//! null of the declared kind so the placeholder keeps its type, and a
//! kind/value mismatch is a [`DbError::Bind`] instead of whatever the
//! driver would silently coerce.

use rust_decimal::{Decimal, RoundingStrategy};
use sqlx::Sqlite;
use sqlx::query::Query;
use sqlx::sqlite::SqliteArguments;

use crate::db::{DbError, DbResult};

/// Semantic type a statement placeholder expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    Text,
    Decimal,
    Integer,
}

impl std::fmt::Display for ParamKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParamKind::Text => write!(f, "text"),
            ParamKind::Decimal => write!(f, "decimal"),
            ParamKind::Integer => write!(f, "integer"),
        }
    }
}

/// A value destined for one placeholder. `Null` carries no type of its
/// own; the kind it is bound under decides the null's type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SqlValue {
    Text(String),
    Decimal(Decimal),
    Integer(i64),
    Null,
}

impl SqlValue {
    pub fn text(value: Option<impl Into<String>>) -> Self {
        match value {
            Some(v) => SqlValue::Text(v.into()),
            None => SqlValue::Null,
        }
    }

    pub fn decimal(value: Option<Decimal>) -> Self {
        match value {
            Some(v) => SqlValue::Decimal(v),
            None => SqlValue::Null,
        }
    }

    pub fn integer(value: Option<i64>) -> Self {
        match value {
            Some(v) => SqlValue::Integer(v),
            None => SqlValue::Null,
        }
    }
}

type SqliteQuery<'q> = Query<'q, Sqlite, SqliteArguments<'q>>;

/// Bind one value into the next placeholder of `query`.
pub fn bind(query: SqliteQuery<'_>, kind: ParamKind, value: SqlValue) -> DbResult<SqliteQuery<'_>> {
    let query = match (kind, value) {
        (ParamKind::Text, SqlValue::Text(v)) => query.bind(v),
        (ParamKind::Text, SqlValue::Null) => query.bind(None::<String>),
        (ParamKind::Decimal, SqlValue::Decimal(v)) => query.bind(decimal_text(v)),
        (ParamKind::Decimal, SqlValue::Null) => query.bind(None::<String>),
        (ParamKind::Integer, SqlValue::Integer(v)) => query.bind(v),
        (ParamKind::Integer, SqlValue::Null) => query.bind(None::<i64>),
        (kind, value) => {
            return Err(DbError::Bind {
                kind: kind.to_string(),
                value: format!("{value:?}"),
            });
        }
    };
    Ok(query)
}

/// Bind an ordered parameter list; iteration order is placeholder order.
pub fn bind_all<'q>(
    mut query: SqliteQuery<'q>,
    params: impl IntoIterator<Item = (ParamKind, SqlValue)>,
) -> DbResult<SqliteQuery<'q>> {
    for (kind, value) in params {
        query = bind(query, kind, value)?;
    }
    Ok(query)
}

/// Canonical stored form of a decimal: exactly two fractional digits,
/// rounding halves away from zero (user-entered hours round the way a
/// person expects, 0.125 up to 0.13).
pub(crate) fn decimal_text(value: Decimal) -> String {
    let mut v = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    v.rescale(2);
    v.to_string()
}
