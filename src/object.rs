use crate::location::escape_key;
use crate::sealed::Sealed;
use crate::{DecodeError, Decoder, Location};
use serde_json::{Map, Value};

/// A named field of an [`object`], paired with the decoder for its value.
pub struct EntryDecoder<T> {
    key: String,
    decoder: Decoder<T>,
}

impl<T> Clone for EntryDecoder<T> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            decoder: self.decoder.clone(),
        }
    }
}

pub fn field<T>(key: impl Into<String>, decoder: Decoder<T>) -> EntryDecoder<T> {
    EntryDecoder {
        key: key.into(),
        decoder,
    }
}

/// A tuple of [`EntryDecoder`]s. Implemented for tuples of one to twelve
/// entries.
pub trait Entries: Sealed {
    type Output;

    #[doc(hidden)]
    fn decode_entries(
        &self,
        fields: &Map<String, Value>,
        location: &Location<'_>,
    ) -> Result<Self::Output, DecodeError>;
}

/// Decodes an object with a fixed set of named fields, then builds a value
/// from them.
///
/// Fields are decoded in the order they are declared, and `constructor`
/// receives the decoded values as a tuple in that same order. A field whose
/// value is `null` is present. Fields that are absent are reported together,
/// once every present field has decoded successfully.
///
/// ```
/// use jsondec::{field, number, object, string};
/// use serde_json::json;
///
/// #[derive(Debug, PartialEq)]
/// struct User {
///     name: String,
///     age: f64,
/// }
///
/// let decoder = object(
///     (field("name", string()), field("age", number())),
///     |(name, age)| User { name, age },
/// );
///
/// assert_eq!(
///     User { name: "ann".to_owned(), age: 41.0 },
///     decoder.decode_any(&json!({ "name": "ann", "age": 41 })).unwrap()
/// );
///
/// let err = decoder.decode_any(&json!({})).unwrap_err();
/// assert_eq!("at input: expected object with keys: age, name", err.to_string());
/// ```
pub fn object<E, R, F>(entries: E, constructor: F) -> Decoder<R>
where
    E: Entries + Send + Sync + 'static,
    F: Fn(E::Output) -> R + Send + Sync + 'static,
{
    Decoder::new(move |input, location| {
        let fields = input
            .as_object()
            .ok_or_else(|| DecodeError::mismatch(location, "object", input))?;

        entries.decode_entries(fields, location).map(&constructor)
    })
}

fn decode_entry<'e, T>(
    entry: &'e EntryDecoder<T>,
    fields: &Map<String, Value>,
    location: &Location<'_>,
    missing: &mut Vec<&'e str>,
) -> Result<Option<T>, DecodeError> {
    match fields.get(&entry.key) {
        Some(value) => entry.decoder.run(value, &location.key(&entry.key)).map(Some),
        None => {
            missing.push(&entry.key);
            Ok(None)
        }
    }
}

fn missing_keys(location: &Location<'_>, mut missing: Vec<&str>) -> DecodeError {
    missing.sort_unstable();
    let keys: Vec<String> = missing.into_iter().map(escape_key).collect();
    DecodeError::expecting(location, format!("object with keys: {}", keys.join(", ")))
}

macro_rules! entries {
    ($(($($n:tt $T:ident $v:ident),+))+) => {
        $(
            impl<$($T),+> Sealed for ($(EntryDecoder<$T>,)+) {}

            impl<$($T),+> Entries for ($(EntryDecoder<$T>,)+) {
                type Output = ($($T,)+);

                fn decode_entries(
                    &self,
                    fields: &Map<String, Value>,
                    location: &Location<'_>,
                ) -> Result<Self::Output, DecodeError> {
                    let mut missing = Vec::new();
                    $(let $v = decode_entry(&self.$n, fields, location, &mut missing)?;)+

                    if let ($(Some($v),)+) = ($($v,)+) {
                        return Ok(($($v,)+));
                    }

                    Err(missing_keys(location, missing))
                }
            }
        )+
    };
}

entries! {
    (0 A a)
    (0 A a, 1 B b)
    (0 A a, 1 B b, 2 C c)
    (0 A a, 1 B b, 2 C c, 3 D d)
    (0 A a, 1 B b, 2 C c, 3 D d, 4 E e)
    (0 A a, 1 B b, 2 C c, 3 D d, 4 E e, 5 F f)
    (0 A a, 1 B b, 2 C c, 3 D d, 4 E e, 5 F f, 6 G g)
    (0 A a, 1 B b, 2 C c, 3 D d, 4 E e, 5 F f, 6 G g, 7 H h)
    (0 A a, 1 B b, 2 C c, 3 D d, 4 E e, 5 F f, 6 G g, 7 H h, 8 I i)
    (0 A a, 1 B b, 2 C c, 3 D d, 4 E e, 5 F f, 6 G g, 7 H h, 8 I i, 9 J j)
    (0 A a, 1 B b, 2 C c, 3 D d, 4 E e, 5 F f, 6 G g, 7 H h, 8 I i, 9 J j, 10 K k)
    (0 A a, 1 B b, 2 C c, 3 D d, 4 E e, 5 F f, 6 G g, 7 H h, 8 I i, 9 J j, 10 K k, 11 L l)
}
