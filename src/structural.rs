use crate::location::escape_key;
use crate::sealed::Sealed;
use crate::{DecodeError, Decoder, Location, PathSegment};
use serde_json::Value;
use std::collections::HashMap;

/// Decodes every element of an array, in order.
pub fn array<T: 'static>(element: Decoder<T>) -> Decoder<Vec<T>> {
    Decoder::new(move |input, location| {
        let items = input
            .as_array()
            .ok_or_else(|| DecodeError::mismatch(location, "array", input))?;

        items
            .iter()
            .enumerate()
            .map(|(i, item)| element.run(item, &location.index(i)))
            .collect()
    })
}

/// A tuple of decoders, one per position. Implemented for tuples of one to
/// twelve [`Decoder`]s.
pub trait Positions: Sealed {
    type Output;

    #[doc(hidden)]
    fn decode_positions(
        &self,
        input: &Value,
        location: &Location<'_>,
    ) -> Result<Self::Output, DecodeError>;
}

/// Decodes a fixed number of leading positions of an array, each with its own
/// decoder.
///
/// Elements past the last decoder are ignored. A position past the end of
/// the input fails at that position.
///
/// ```
/// use jsondec::{boolean, number, string, tuple};
/// use serde_json::json;
///
/// let decoder = tuple((string(), number(), boolean()));
/// assert_eq!(
///     ("a".to_owned(), 1.0, true),
///     decoder.decode_any(&json!(["a", 1, true])).unwrap()
/// );
///
/// let err = decoder.decode_any(&json!(["a", 1])).unwrap_err();
/// assert_eq!("at input[2]: expected array with index 2, got array", err.to_string());
/// ```
pub fn tuple<D>(decoders: D) -> Decoder<D::Output>
where
    D: Positions + Send + Sync + 'static,
{
    Decoder::new(move |input, location| {
        if !input.is_array() {
            return Err(DecodeError::mismatch(location, "array", input));
        }

        decoders.decode_positions(input, location)
    })
}

fn decode_position<T>(
    decoder: &Decoder<T>,
    input: &Value,
    index: usize,
    location: &Location<'_>,
) -> Result<T, DecodeError> {
    let location = location.index(index);
    match input.get(index) {
        Some(item) => decoder.run(item, &location),
        None => Err(DecodeError::mismatch(
            &location,
            format!("array with index {}", index),
            input,
        )),
    }
}

macro_rules! positions {
    ($(($($n:tt $T:ident),+))+) => {
        $(
            impl<$($T),+> Sealed for ($(Decoder<$T>,)+) {}

            impl<$($T),+> Positions for ($(Decoder<$T>,)+) {
                type Output = ($($T,)+);

                fn decode_positions(
                    &self,
                    input: &Value,
                    location: &Location<'_>,
                ) -> Result<Self::Output, DecodeError> {
                    Ok(($(decode_position(&self.$n, input, $n, location)?,)+))
                }
            }
        )+
    };
}

positions! {
    (0 A)
    (0 A, 1 B)
    (0 A, 1 B, 2 C)
    (0 A, 1 B, 2 C, 3 D)
    (0 A, 1 B, 2 C, 3 D, 4 E)
    (0 A, 1 B, 2 C, 3 D, 4 E, 5 F)
    (0 A, 1 B, 2 C, 3 D, 4 E, 5 F, 6 G)
    (0 A, 1 B, 2 C, 3 D, 4 E, 5 F, 6 G, 7 H)
    (0 A, 1 B, 2 C, 3 D, 4 E, 5 F, 6 G, 7 H, 8 I)
    (0 A, 1 B, 2 C, 3 D, 4 E, 5 F, 6 G, 7 H, 8 I, 9 J)
    (0 A, 1 B, 2 C, 3 D, 4 E, 5 F, 6 G, 7 H, 8 I, 9 J, 10 K)
    (0 A, 1 B, 2 C, 3 D, 4 E, 5 F, 6 G, 7 H, 8 I, 9 J, 10 K, 11 L)
}

/// Decodes every value of an object with arbitrary keys.
pub fn dict<T: 'static>(values: Decoder<T>) -> Decoder<HashMap<String, T>> {
    Decoder::new(move |input, location| {
        let entries = input
            .as_object()
            .ok_or_else(|| DecodeError::mismatch(location, "object", input))?;

        entries
            .iter()
            .map(|(key, item)| {
                values
                    .run(item, &location.key(key))
                    .map(|value| (key.clone(), value))
            })
            .collect()
    })
}

/// Follows `path` into the input, then decodes whatever is found there.
///
/// ```
/// use jsondec::{at, path, string};
/// use serde_json::json;
///
/// let decoder = at(path!["a", 1], string());
/// assert_eq!("y", decoder.decode_any(&json!({ "a": ["x", "y"] })).unwrap());
///
/// let err = at(path!["a", 5], string())
///     .decode_any(&json!({ "a": ["x"] }))
///     .unwrap_err();
/// assert_eq!("at input.a: expected array: index out of range, got array", err.to_string());
/// ```
pub fn at<I, T>(path: I, decoder: Decoder<T>) -> Decoder<T>
where
    I: IntoIterator,
    I::Item: Into<PathSegment>,
    T: 'static,
{
    let path: Vec<PathSegment> = path.into_iter().map(Into::into).collect();
    Decoder::new(move |input, location| walk(&path, input, location, &decoder))
}

fn walk<T>(
    path: &[PathSegment],
    input: &Value,
    location: &Location<'_>,
    decoder: &Decoder<T>,
) -> Result<T, DecodeError> {
    let (segment, rest) = match path.split_first() {
        Some(split) => split,
        None => return decoder.run(input, location),
    };

    match segment {
        PathSegment::Index(index) => match input.get(*index) {
            Some(next) => walk(rest, next, &location.index(*index), decoder),
            None if input.is_array() => Err(DecodeError::mismatch(
                location,
                "array: index out of range",
                input,
            )),
            None => Err(DecodeError::mismatch(
                location,
                format!("array with index {}", index),
                input,
            )),
        },
        PathSegment::Key(key) => match input.get(key.as_str()) {
            Some(next) => walk(rest, next, &location.key(key), decoder),
            None => Err(DecodeError::mismatch(
                location,
                format!("object with key {}", escape_key(key)),
                input,
            )),
        },
    }
}
