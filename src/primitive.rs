use crate::{DecodeError, Decoder};
use chrono::{DateTime, FixedOffset};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

pub fn string() -> Decoder<String> {
    Decoder::new(|input, location| match input {
        Value::String(s) => Ok(s.clone()),
        _ => Err(DecodeError::mismatch(location, "string", input)),
    })
}

pub fn number() -> Decoder<f64> {
    Decoder::new(|input, location| {
        input
            .as_f64()
            .ok_or_else(|| DecodeError::mismatch(location, "number", input))
    })
}

pub fn boolean() -> Decoder<bool> {
    Decoder::new(|input, location| {
        input
            .as_bool()
            .ok_or_else(|| DecodeError::mismatch(location, "boolean", input))
    })
}

pub fn null() -> Decoder<()> {
    Decoder::new(|input, location| {
        input
            .as_null()
            .ok_or_else(|| DecodeError::mismatch(location, "null", input))
    })
}

/// Accepts anything, returning the input as-is.
pub fn any() -> Decoder<Value> {
    Decoder::new(|input, _| Ok(input.clone()))
}

/// Accepts any JSON object without looking at its fields.
///
/// Arrays and `null` are not objects here, and are rejected.
pub fn opaque_object() -> Decoder<Map<String, Value>> {
    Decoder::new(|input, location| match input {
        Value::Object(fields) => Ok(fields.clone()),
        _ => Err(DecodeError::mismatch(location, "object", input)),
    })
}

/// Accepts only values strictly equal to `literal`.
///
/// Equality includes the kind of the value, so `"1"` does not equal `1`.
/// Numbers compare by numeric value, so `1` equals `1.0`.
///
/// ```
/// use jsondec::equal;
/// use serde_json::json;
///
/// let decoder = equal("circle");
/// assert_eq!(json!("circle"), decoder.decode_any(&json!("circle")).unwrap());
///
/// let err = decoder.decode_any(&json!("square")).unwrap_err();
/// assert_eq!(Some("\"circle\""), err.expected());
/// ```
pub fn equal(literal: impl Into<Value>) -> Decoder<Value> {
    let literal = literal.into();
    let expected = literal.to_string();

    Decoder::new(move |input, location| {
        if strictly_equal(&literal, input) {
            Ok(literal.clone())
        } else {
            Err(DecodeError::mismatch(location, expected.as_str(), input))
        }
    })
}

fn strictly_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(a), Value::Number(b)) => a == b || a.as_f64() == b.as_f64(),
        (Value::Array(a), Value::Array(b)) => {
            a.len() == b.len() && a.iter().zip(b).all(|(a, b)| strictly_equal(a, b))
        }
        (Value::Object(a), Value::Object(b)) => {
            a.len() == b.len()
                && a.iter()
                    .all(|(key, a)| b.get(key).map_or(false, |b| strictly_equal(a, b)))
        }
        _ => a == b,
    }
}

/// Accepts an RFC 3339 timestamp string.
pub fn timestamp() -> Decoder<DateTime<FixedOffset>> {
    Decoder::new(|input, location| {
        if let Some(s) = input.as_str() {
            DateTime::parse_from_rfc3339(s)
                .map_err(|_| DecodeError::mismatch(location, "timestamp", input))
        } else {
            Err(DecodeError::mismatch(location, "timestamp", input))
        }
    })
}

/// Hands the value at the current location to `T`'s `serde` implementation.
///
/// ```
/// use jsondec::{deserialize, field, object, string};
/// use serde::Deserialize;
/// use serde_json::json;
///
/// #[derive(Deserialize, Debug, PartialEq)]
/// struct Point {
///     x: i32,
///     y: i32,
/// }
///
/// let decoder = object(
///     (field("name", string()), field("at", deserialize::<Point>())),
///     |(name, at)| (name, at),
/// );
///
/// assert_eq!(
///     ("origin".to_owned(), Point { x: 0, y: 0 }),
///     decoder
///         .decode_any(&json!({ "name": "origin", "at": { "x": 0, "y": 0 } }))
///         .unwrap()
/// );
/// ```
pub fn deserialize<T>() -> Decoder<T>
where
    T: DeserializeOwned + 'static,
{
    Decoder::new(|input, location| {
        T::deserialize(input).map_err(|err| DecodeError::custom(location, err.to_string()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DecodeOptions;
    use serde::Deserialize;
    use serde_json::json;

    #[test]
    fn primitives_accept_their_kind() {
        assert_eq!("foo", string().decode_any(&json!("foo")).unwrap());
        assert_eq!(3.25, number().decode_any(&json!(3.25)).unwrap());
        assert_eq!(-7.0, number().decode_any(&json!(-7)).unwrap());
        assert_eq!(true, boolean().decode_any(&json!(true)).unwrap());
        assert_eq!((), null().decode_any(&json!(null)).unwrap());
    }

    #[test]
    fn primitives_reject_other_kinds() {
        let err = string().decode_any(&json!(1)).unwrap_err();
        assert_eq!("", err.location());
        assert_eq!(Some("string"), err.expected());
        assert_eq!(Some("number"), err.got());

        let err = number().decode_any(&json!("1")).unwrap_err();
        assert_eq!(Some("number"), err.expected());
        assert_eq!(Some("string"), err.got());

        let err = boolean().decode_any(&json!(null)).unwrap_err();
        assert_eq!(Some("boolean"), err.expected());
        assert_eq!(Some("null"), err.got());

        let err = null().decode_any(&json!([])).unwrap_err();
        assert_eq!(Some("null"), err.expected());
        assert_eq!(Some("array"), err.got());
    }

    #[test]
    fn any_passes_input_through() {
        let input = json!({ "a": [1, null, { "b": "c" }] });
        assert_eq!(input, any().decode_any(&input).unwrap());
        assert_eq!(json!(null), any().decode_any(&json!(null)).unwrap());
    }

    #[test]
    fn opaque_object_accepts_only_objects() {
        let input = json!({ "a": 1, "b": [true] });
        assert_eq!(
            input.as_object().unwrap(),
            &opaque_object().decode_any(&input).unwrap()
        );

        let err = opaque_object().decode_any(&json!([1])).unwrap_err();
        assert_eq!(Some("object"), err.expected());
        assert_eq!(Some("array"), err.got());

        let err = opaque_object().decode_any(&json!(null)).unwrap_err();
        assert_eq!(Some("null"), err.got());
    }

    #[test]
    fn equal_is_strict_about_kind() {
        assert_eq!(json!(1), equal(1).decode_any(&json!(1)).unwrap());
        assert_eq!(json!(1), equal(1).decode_any(&json!(1.0)).unwrap());
        assert_eq!(json!(null), equal(json!(null)).decode_any(&json!(null)).unwrap());
        assert_eq!(
            json!([1, "a"]),
            equal(json!([1, "a"])).decode_any(&json!([1.0, "a"])).unwrap()
        );

        let err = equal(1).decode_any(&json!("1")).unwrap_err();
        assert_eq!("at input: expected 1, got string", err.to_string());

        let err = equal(true).decode_any(&json!(false)).unwrap_err();
        assert_eq!(Some("true"), err.expected());
        assert_eq!(Some("boolean"), err.got());

        assert!(equal(json!({ "a": 1 })).decode_any(&json!({ "a": 1, "b": 2 })).is_err());
    }

    #[test]
    fn timestamp_parses_rfc3339() {
        let decoded = timestamp().decode_any(&json!("1985-04-12T23:20:50.52Z")).unwrap();
        assert_eq!(
            DateTime::parse_from_rfc3339("1985-04-12T23:20:50.52Z").unwrap(),
            decoded
        );

        let err = timestamp().decode_any(&json!("yesterday")).unwrap_err();
        assert_eq!(Some("timestamp"), err.expected());
        assert_eq!(Some("string"), err.got());

        let err = timestamp().decode_any(&json!(0)).unwrap_err();
        assert_eq!(Some("number"), err.got());
    }

    #[test]
    fn deserialize_reports_serde_errors_in_place() {
        #[derive(Deserialize, Debug, PartialEq)]
        struct Port(u16);

        assert_eq!(Port(8080), deserialize::<Port>().decode_any(&json!(8080)).unwrap());

        let err = deserialize::<Port>()
            .decode_any_with(&json!(70000), &DecodeOptions::new())
            .unwrap_err();
        assert_eq!("", err.location());
        assert!(err.message().is_some());
        assert_eq!(None, err.expected());
    }
}
