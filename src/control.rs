use crate::error::kind;
use crate::{null, DecodeError, Decoder};
use tracing::trace;

/// Tries `first`, then each of `rest` in order, returning the first success.
///
/// When every alternative fails, the individual failures are discarded and
/// the error only names the kind of the input.
///
/// ```
/// use jsondec::{map, number, one_of, string};
/// use serde_json::json;
///
/// let decoder = one_of(map(|n: f64| n.to_string(), number()), vec![string()]);
/// assert_eq!("5", decoder.decode_any(&json!(5)).unwrap());
/// assert_eq!("five", decoder.decode_any(&json!("five")).unwrap());
///
/// let err = decoder.decode_any(&json!(true)).unwrap_err();
/// assert_eq!("at input: unexpected boolean", err.to_string());
/// ```
pub fn one_of<T, I>(first: Decoder<T>, rest: I) -> Decoder<T>
where
    T: 'static,
    I: IntoIterator<Item = Decoder<T>>,
{
    alternatives(std::iter::once(first).chain(rest).collect())
}

/// Like [`one_of`], over any number of alternatives. An empty union rejects
/// everything.
pub fn union<T, I>(decoders: I) -> Decoder<T>
where
    T: 'static,
    I: IntoIterator<Item = Decoder<T>>,
{
    alternatives(decoders.into_iter().collect())
}

fn alternatives<T: 'static>(branches: Vec<Decoder<T>>) -> Decoder<T> {
    Decoder::new(move |input, location| {
        for (branch, decoder) in branches.iter().enumerate() {
            match decoder.run(input, location) {
                Ok(value) => return Ok(value),
                Err(err) => trace!(branch, error = %err, "alternative rejected"),
            }
        }

        Err(DecodeError::custom(
            location,
            format!("unexpected {}", kind(input)),
        ))
    })
}

/// Accepts `null` as `None`, or whatever `decoder` accepts as `Some`.
pub fn nullable<T: 'static>(decoder: Decoder<T>) -> Decoder<Option<T>> {
    one_of(map(Some, decoder), vec![map(|()| None, null())])
}

/// Decodes with `first`, then uses its result to pick a second decoder that
/// is run against the same input, at the same location.
///
/// ```
/// use jsondec::{and_then, at, fail, field, number, object, string, Decoder};
/// use serde_json::json;
///
/// #[derive(Debug, PartialEq)]
/// enum Shape {
///     Circle(f64),
///     Square(f64),
/// }
///
/// let kind = at(vec!["kind"], string());
/// let shape: Decoder<Shape> = and_then(kind, |kind| match kind.as_str() {
///     "circle" => object((field("radius", number()),), |(r,)| Shape::Circle(r)),
///     "square" => object((field("side", number()),), |(s,)| Shape::Square(s)),
///     other => fail(format!("unknown shape {}", other)),
/// });
///
/// assert_eq!(
///     Shape::Square(2.0),
///     shape.decode_any(&json!({ "kind": "square", "side": 2 })).unwrap()
/// );
/// assert_eq!(
///     "at input: unknown shape hexagon",
///     shape.decode_any(&json!({ "kind": "hexagon" })).unwrap_err().to_string()
/// );
/// ```
pub fn and_then<T, U, F>(first: Decoder<T>, continuation: F) -> Decoder<U>
where
    T: 'static,
    U: 'static,
    F: Fn(T) -> Decoder<U> + Send + Sync + 'static,
{
    Decoder::new(move |input, location| {
        let value = first.run(input, location)?;
        continuation(value).run(input, location)
    })
}

/// Defers building a decoder until the moment it is needed, so a decoder can
/// refer to itself.
///
/// `thunk` is called each time the lazy decoder runs. If the decode was
/// started with a [`DecodeOptions::with_max_depth`][`crate::DecodeOptions::with_max_depth`]
/// limit, a lazy decoder reached below that depth fails instead.
///
/// ```
/// use jsondec::{array, field, lazy, number, object, Decoder};
/// use serde_json::json;
///
/// #[derive(Debug, PartialEq)]
/// struct Tree {
///     value: f64,
///     children: Vec<Tree>,
/// }
///
/// fn tree() -> Decoder<Tree> {
///     object(
///         (field("value", number()), field("children", array(lazy(tree)))),
///         |(value, children)| Tree { value, children },
///     )
/// }
///
/// let input = json!({ "value": 1, "children": [{ "value": 2, "children": [] }] });
/// assert_eq!(
///     Tree {
///         value: 1.0,
///         children: vec![Tree { value: 2.0, children: vec![] }],
///     },
///     tree().decode_any(&input).unwrap()
/// );
/// ```
pub fn lazy<T, F>(thunk: F) -> Decoder<T>
where
    T: 'static,
    F: Fn() -> Decoder<T> + Send + Sync + 'static,
{
    Decoder::new(move |input, location| {
        if location.exceeds_max_depth() {
            return Err(DecodeError::custom(location, "max depth exceeded"));
        }

        thunk().run(input, location)
    })
}

/// Applies an infallible `transform` to whatever `decoder` produces.
pub fn map<T, U, F>(transform: F, decoder: Decoder<T>) -> Decoder<U>
where
    T: 'static,
    U: 'static,
    F: Fn(T) -> U + Send + Sync + 'static,
{
    Decoder::new(move |input, location| decoder.run(input, location).map(&transform))
}

/// Rejects everything with `message`.
pub fn fail<T: 'static>(message: impl Into<String>) -> Decoder<T> {
    let message = message.into();
    Decoder::new(move |_, location| Err(DecodeError::custom(location, message.as_str())))
}

/// Accepts everything, producing `value`.
pub fn succeed<T>(value: T) -> Decoder<T>
where
    T: Clone + Send + Sync + 'static,
{
    Decoder::new(move |_, _| Ok(value.clone()))
}
