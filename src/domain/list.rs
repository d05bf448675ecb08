//! Lenient decoding of list-shaped responses.
//!
//! The query service renders collections either as a bare JSON array or as an
//! object wrapping one array (`{"elements": [...]}`, `{"column": [...]}`).
//! Both shapes decode to a plain `Vec<T>`; `null` decodes to an empty list.

use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Key the service uses for wrapped collections; wins when a wrapper holds several arrays.
const ELEMENTS_KEY: &str = "elements";

pub fn list_from_value<T: DeserializeOwned>(value: Value) -> Result<Vec<T>, serde_json::Error> {
    match value {
        Value::Null => Ok(Vec::new()),
        Value::Array(_) => serde_json::from_value(value),
        Value::Object(mut map) => {
            let array_keys: Vec<String> = map
                .iter()
                .filter(|(_, inner)| inner.is_array())
                .map(|(key, _)| key.clone())
                .collect();
            let key = match array_keys.as_slice() {
                [only] => Some(only.clone()),
                [] => None,
                _ if array_keys.iter().any(|k| k == ELEMENTS_KEY) => Some(ELEMENTS_KEY.to_string()),
                _ => {
                    return Err(serde_json::Error::custom(format!(
                        "ambiguous list wrapper with arrays under {}",
                        array_keys.join(", ")
                    )));
                }
            };
            if let Some(inner) = key.and_then(|k| map.remove(&k)) {
                return serde_json::from_value(inner);
            }

            // A single-key object may wrap the wrapper: {"stringList": {"elements": [...]}}
            let mut values = map.into_iter().map(|(_, inner)| inner);
            match (values.next(), values.next()) {
                (Some(inner @ Value::Object(_)), None) => list_from_value(inner),
                _ => Err(serde_json::Error::custom(
                    "expected a list or an object wrapping a list",
                )),
            }
        }
        other => Err(serde_json::Error::custom(format!(
            "expected a list, found {other}"
        ))),
    }
}

/// `deserialize_with` helper for fields holding a list response.
pub fn deserialize_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    list_from_value(value).map_err(D::Error::custom)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(json!(["default", "sales"]))]
    #[case(json!({"elements": ["default", "sales"]}))]
    #[case(json!({"stringList": {"elements": ["default", "sales"]}}))]
    fn accepts_bare_and_wrapped_lists(#[case] value: Value) {
        let names: Vec<String> = list_from_value(value).unwrap();

        assert_eq!(names, vec!["default".to_string(), "sales".to_string()]);
    }

    #[test]
    fn null_is_empty() {
        let names: Vec<String> = list_from_value(Value::Null).unwrap();

        assert!(names.is_empty());
    }

    #[test]
    fn wrapper_may_carry_scalar_fields() {
        let names: Vec<String> =
            list_from_value(json!({"count": 1, "elements": ["only"]})).unwrap();

        assert_eq!(names, vec!["only".to_string()]);
    }

    #[test]
    fn elements_key_wins_over_other_arrays() {
        let names: Vec<String> = list_from_value(json!({
            "aliases": ["x"],
            "elements": ["default", "sales"],
        }))
        .unwrap();

        assert_eq!(names, vec!["default".to_string(), "sales".to_string()]);
    }

    #[test]
    fn several_arrays_without_elements_key_are_rejected() {
        let result: Result<Vec<String>, _> =
            list_from_value(json!({"aliases": ["x"], "names": ["default"]}));

        let err = result.unwrap_err().to_string();
        assert!(err.contains("ambiguous list wrapper"), "{err}");
        assert!(err.contains("aliases, names"), "{err}");
    }

    #[rstest]
    #[case(json!("default"))]
    #[case(json!(42))]
    #[case(json!({"count": 1}))]
    fn rejects_non_lists(#[case] value: Value) {
        let result: Result<Vec<String>, _> = list_from_value(value);

        assert!(result.is_err());
    }
}
