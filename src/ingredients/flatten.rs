//! Flattening product records into CSV-ready rows.
//!
//! Lists and maps become compact JSON text. Numbers are kept as the literal
//! text of the source document (serde_json's `arbitrary_precision`), so
//! integers of any size pass through unchanged. Literals containing `.`,
//! `e` or `E` are decimals: they go through `f64` and print in the shortest
//! round-trip form (`2.50` becomes `2.5`, `5.0` stays `5.0`), so very long
//! decimals can lose precision. Exponents print without padding or a plus
//! sign (`1e-7`, `1e20`), unlike the `1e-07`/`1e+20` spelling some tools use.
//! A decimal too large for `f64` is an error, never written as infinity.
//!
//! Top-level booleans print as `True`/`False`; inside JSON text they stay
//! `true`/`false`.

use crate::error::SiftError;
use crate::types::{FlatRow, ProductRecord};
use serde_json::{Map, Number, Value};

/// Replace every nested value in `record` with its JSON text and re-spell decimals
pub fn flatten_record(record: &ProductRecord) -> Result<FlatRow, SiftError> {
    let mut row = FlatRow::new();

    for (key, value) in record {
        let flat = match value {
            Value::Array(_) | Value::Object(_) => Value::String(to_json_text(key, value)?),
            Value::Number(n) => Value::Number(normalize_number(key, n)?),
            _ => value.clone(),
        };
        row.insert(key.clone(), flat);
    }

    Ok(row)
}

/// Text for one CSV cell
pub fn render_cell(field: &str, value: &Value) -> Result<String, SiftError> {
    Ok(match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Number(n) => normalize_number(field, n)?.to_string(),
        Value::Bool(true) => String::from("True"),
        Value::Bool(false) => String::from("False"),
        Value::Array(_) | Value::Object(_) => to_json_text(field, value)?,
    })
}

/// Integers unchanged; decimals re-spelled through `f64`
fn normalize_number(field: &str, n: &Number) -> Result<Number, SiftError> {
    let literal = n.to_string();
    if !literal.contains(['.', 'e', 'E']) {
        return Ok(n.clone());
    }

    n.as_f64()
        .and_then(Number::from_f64)
        .ok_or_else(|| SiftError::NonFiniteNumber {
            field: field.to_string(),
            literal,
        })
}

/// Decimals normalized at every depth
fn normalize_value(field: &str, value: &Value) -> Result<Value, SiftError> {
    Ok(match value {
        Value::Number(n) => Value::Number(normalize_number(field, n)?),
        Value::Array(items) => Value::Array(
            items
                .iter()
                .map(|item| normalize_value(field, item))
                .collect::<Result<_, _>>()?,
        ),
        Value::Object(map) => {
            let mut out = Map::with_capacity(map.len());
            for (key, item) in map {
                out.insert(key.clone(), normalize_value(field, item)?);
            }
            Value::Object(out)
        }
        _ => value.clone(),
    })
}

fn to_json_text(field: &str, value: &Value) -> Result<String, SiftError> {
    let value = normalize_value(field, value)?;
    serde_json::to_string(&value).map_err(|source| SiftError::Serialize {
        field: field.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> ProductRecord {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_nested_values_become_json_text() {
        let input = record(json!({
            "fdcId": 167512,
            "ingredients": "WATER, SALT",
            "foodNutrients": [{"nutrient": {"id": 1003, "name": "Protein"}, "amount": 2.5}],
            "labelNutrients": {"fat": {"value": 0}}
        }));

        let row = flatten_record(&input).unwrap();

        assert_eq!(row["fdcId"], json!(167512));
        assert_eq!(row["ingredients"], json!("WATER, SALT"));
        assert_eq!(
            row["foodNutrients"],
            json!(r#"[{"nutrient":{"id":1003,"name":"Protein"},"amount":2.5}]"#)
        );
        assert_eq!(row["labelNutrients"], json!(r#"{"fat":{"value":0}}"#));
    }

    #[test]
    fn test_key_order_is_preserved() {
        let input = record(json!({"z": 1, "a": [1], "m": null}));
        let row = flatten_record(&input).unwrap();

        let keys: Vec<&str> = row.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["z", "a", "m"]);
    }

    #[test]
    fn test_render_cell_scalars() {
        assert_eq!(render_cell("f", &Value::Null).unwrap(), "");
        assert_eq!(render_cell("f", &json!("KROGER")).unwrap(), "KROGER");
        assert_eq!(render_cell("f", &json!(42)).unwrap(), "42");
        assert_eq!(render_cell("f", &json!(true)).unwrap(), "True");
        assert_eq!(render_cell("f", &json!(false)).unwrap(), "False");
        assert_eq!(render_cell("f", &json!(["a", "b"])).unwrap(), r#"["a","b"]"#);
    }

    #[test]
    fn test_decimals_render_as_float() {
        let parsed: Value = serde_json::from_str(r#"{"servingSize": 28.350, "whole": 5.0}"#).unwrap();

        assert_eq!(render_cell("servingSize", &parsed["servingSize"]).unwrap(), "28.35");
        assert_eq!(render_cell("whole", &parsed["whole"]).unwrap(), "5.0");
    }

    #[test]
    fn test_big_integers_stay_exact() {
        let input: ProductRecord =
            serde_json::from_str(r#"{"gtinUpc": 123456789012345678901234, "neg": -98765432109876543210}"#)
                .unwrap();

        let row = flatten_record(&input).unwrap();

        assert_eq!(render_cell("gtinUpc", &row["gtinUpc"]).unwrap(), "123456789012345678901234");
        assert_eq!(render_cell("neg", &row["neg"]).unwrap(), "-98765432109876543210");
    }

    #[test]
    fn test_decimals_inside_nested_values() {
        let input: ProductRecord = serde_json::from_str(
            r#"{"foodNutrients": [{"amount": 2.50, "id": 12345678901234567890123}], "flags": {"ok": true}}"#,
        )
        .unwrap();

        let row = flatten_record(&input).unwrap();

        assert_eq!(
            row["foodNutrients"],
            json!(r#"[{"amount":2.5,"id":12345678901234567890123}]"#)
        );
        assert_eq!(row["flags"], json!(r#"{"ok":true}"#));
    }

    #[test]
    fn test_exponent_literals() {
        let parsed: Value = serde_json::from_str(r#"[1E3, 2.5e-1]"#).unwrap();

        assert_eq!(render_cell("f", &parsed[0]).unwrap(), "1000.0");
        assert_eq!(render_cell("f", &parsed[1]).unwrap(), "0.25");
    }

    #[test]
    fn test_decimal_overflow_is_an_error() {
        let input: ProductRecord = serde_json::from_str(r#"{"servingSize": 1e400}"#).unwrap();

        match flatten_record(&input) {
            Err(SiftError::NonFiniteNumber { field, literal }) => {
                assert_eq!(field, "servingSize");
                assert_eq!(literal, "1e+400");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
