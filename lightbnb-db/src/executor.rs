//! Query executor: binds positional values and runs query text
//!
//! Values are bound in sequence order, so the kth value lands on `$k`.

use lightbnb_core::{QueryPlan, QueryValue};
use sqlx::postgres::{PgArguments, PgRow};
use sqlx::query::{Query, QueryAs};
use sqlx::{FromRow, PgPool, Postgres};
use tracing::debug;

use crate::error::DbError;

fn bind_value<'q>(
    query: Query<'q, Postgres, PgArguments>,
    value: &QueryValue,
) -> Query<'q, Postgres, PgArguments> {
    match value {
        QueryValue::Text(s) => query.bind(s.clone()),
        QueryValue::Int(n) => query.bind(*n),
        QueryValue::Float(x) => query.bind(*x),
    }
}

fn bind_value_as<'q, T>(
    query: QueryAs<'q, Postgres, T, PgArguments>,
    value: &QueryValue,
) -> QueryAs<'q, Postgres, T, PgArguments> {
    match value {
        QueryValue::Text(s) => query.bind(s.clone()),
        QueryValue::Int(n) => query.bind(*n),
        QueryValue::Float(x) => query.bind(*x),
    }
}

/// Run `text` with `params` bound positionally and return every row.
pub async fn fetch_all(
    pool: &PgPool,
    text: &str,
    params: &[QueryValue],
) -> Result<Vec<PgRow>, DbError> {
    debug!(sql = %text, params = params.len(), "executing query");

    let query = params
        .iter()
        .fold(sqlx::query(text), |query, value| bind_value(query, value));

    Ok(query.fetch_all(pool).await?)
}

/// Run `text` with `params` bound positionally, decoding each row as `T`.
pub async fn fetch_all_as<T>(
    pool: &PgPool,
    text: &str,
    params: &[QueryValue],
) -> Result<Vec<T>, DbError>
where
    T: for<'r> FromRow<'r, PgRow> + Send + Unpin,
{
    debug!(sql = %text, params = params.len(), "executing query");

    let query = params
        .iter()
        .fold(sqlx::query_as::<_, T>(text), |query, value| {
            bind_value_as(query, value)
        });

    Ok(query.fetch_all(pool).await?)
}

/// Execute a planned query, decoding each row as `T`.
pub async fn fetch_plan_as<T>(pool: &PgPool, plan: &QueryPlan) -> Result<Vec<T>, DbError>
where
    T: for<'r> FromRow<'r, PgRow> + Send + Unpin,
{
    fetch_all_as(pool, plan.text(), plan.params()).await
}
