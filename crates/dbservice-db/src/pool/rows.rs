//! PostgreSQL row -> JSON object mapper

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde_json::{Map, Value};
use sqlx::postgres::{PgHasArrayType, PgRow, Postgres};
use sqlx::types::{Decimal, Uuid};
use sqlx::{Column, Decode, Row, Type, TypeInfo, ValueRef};

use crate::error::{DbError, DbResult};

/// Convert a row into an object keyed by column name
pub(crate) fn row_to_json(row: &PgRow) -> DbResult<Value> {
    let mut object = Map::with_capacity(row.len());

    for column in row.columns() {
        let value = decode_column(row, column.ordinal(), column.type_info().name()).map_err(
            |source| DbError::Decode {
                column: column.name().to_string(),
                source,
            },
        )?;
        object.insert(column.name().to_string(), value);
    }

    Ok(Value::Object(object))
}

fn decode_column(row: &PgRow, index: usize, type_name: &str) -> Result<Value, sqlx::Error> {
    if row.try_get_raw(index)?.is_null() {
        return Ok(Value::Null);
    }

    let value = match type_name {
        "BOOL" => Value::from(row.try_get::<bool, _>(index)?),
        "INT2" => Value::from(row.try_get::<i16, _>(index)?),
        "INT4" => Value::from(row.try_get::<i32, _>(index)?),
        "INT8" => Value::from(row.try_get::<i64, _>(index)?),
        "FLOAT4" => Value::from(f64::from(row.try_get::<f32, _>(index)?)),
        "FLOAT8" => Value::from(row.try_get::<f64, _>(index)?),
        "NUMERIC" => decimal_to_json(row.try_get::<Decimal, _>(index)?),
        "TEXT" | "VARCHAR" | "BPCHAR" | "NAME" => Value::from(row.try_get::<String, _>(index)?),
        "UUID" => Value::from(row.try_get::<Uuid, _>(index)?.to_string()),
        "JSON" | "JSONB" => row.try_get::<Value, _>(index)?,
        "TIMESTAMPTZ" => Value::from(row.try_get::<DateTime<Utc>, _>(index)?.to_rfc3339()),
        "TIMESTAMP" => Value::from(naive_timestamp(row.try_get::<NaiveDateTime, _>(index)?)),
        "DATE" => Value::from(row.try_get::<NaiveDate, _>(index)?.to_string()),
        "TIME" => Value::from(row.try_get::<NaiveTime, _>(index)?.to_string()),
        "BOOL[]" => array::<bool>(row, index, Value::from)?,
        "INT2[]" => array::<i16>(row, index, Value::from)?,
        "INT4[]" => array::<i32>(row, index, Value::from)?,
        "INT8[]" => array::<i64>(row, index, Value::from)?,
        "FLOAT4[]" => array::<f32>(row, index, |f| Value::from(f64::from(f)))?,
        "FLOAT8[]" => array::<f64>(row, index, Value::from)?,
        "NUMERIC[]" => array::<Decimal>(row, index, decimal_to_json)?,
        "TEXT[]" | "VARCHAR[]" | "BPCHAR[]" | "NAME[]" => array::<String>(row, index, Value::from)?,
        "UUID[]" => array::<Uuid>(row, index, |u| Value::from(u.to_string()))?,
        // Anything else only if the driver reads it as text (e.g. citext)
        _ => row
            .try_get::<String, _>(index)
            .map(Value::from)
            .map_err(|_| unsupported(type_name))?,
    };

    Ok(value)
}

/// One-dimensional array with nullable elements
fn array<T>(row: &PgRow, index: usize, convert: impl Fn(T) -> Value) -> Result<Value, sqlx::Error>
where
    T: for<'r> Decode<'r, Postgres> + Type<Postgres> + PgHasArrayType,
{
    let items = row.try_get::<Vec<Option<T>>, _>(index)?;
    Ok(Value::Array(
        items
            .into_iter()
            .map(|item| item.map_or(Value::Null, &convert))
            .collect(),
    ))
}

fn unsupported(type_name: &str) -> sqlx::Error {
    sqlx::Error::Decode(format!("unsupported column type {type_name}").into())
}

fn naive_timestamp(ts: NaiveDateTime) -> String {
    ts.format("%Y-%m-%dT%H:%M:%S%.f").to_string()
}

/// NUMERIC as a JSON number when that is exact, otherwise as a string
fn decimal_to_json(value: Decimal) -> Value {
    let value = value.normalize();

    if value.scale() == 0 {
        if let Ok(int) = i64::try_from(value) {
            return Value::from(int);
        }
    }

    let text = value.to_string();
    match text.parse::<f64>() {
        Ok(float) if float.is_finite() && float.to_string() == text => Value::from(float),
        _ => Value::String(text),
    }
}
