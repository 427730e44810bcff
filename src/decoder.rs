use crate::{DecodeError, Error, Location};
use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

type DecodeFn<T> = dyn Fn(&Value, &Location<'_>) -> Result<T, DecodeError> + Send + Sync;

/// Options for a single top-level decode.
///
/// ```
/// use jsondec::DecodeOptions;
///
/// let options = DecodeOptions::new().with_max_depth(32);
/// assert_eq!(Some(32), options.max_depth());
/// ```
#[derive(Clone, Debug, Default)]
pub struct DecodeOptions {
    max_depth: Option<usize>,
}

impl DecodeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes [`lazy`][`crate::lazy`] decoders fail once they are reached more
    /// than `max_depth` accessors below the root.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    pub fn max_depth(&self) -> Option<usize> {
        self.max_depth
    }
}

/// Turns an untyped JSON value into a `T`, or fails with a located
/// [`DecodeError`].
///
/// Decoders can only be built from the combinators in this crate. They are
/// immutable and cheap to clone, and a single decoder can be used any number
/// of times, from any number of threads.
pub struct Decoder<T> {
    run: Arc<DecodeFn<T>>,
}

impl<T> Clone for Decoder<T> {
    fn clone(&self) -> Self {
        Self {
            run: Arc::clone(&self.run),
        }
    }
}

impl<T> fmt::Debug for Decoder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Decoder<{}>", std::any::type_name::<T>())
    }
}

impl<T> Decoder<T> {
    pub(crate) fn new<F>(run: F) -> Self
    where
        F: Fn(&Value, &Location<'_>) -> Result<T, DecodeError> + Send + Sync + 'static,
    {
        Self { run: Arc::new(run) }
    }

    pub(crate) fn run(&self, input: &Value, location: &Location<'_>) -> Result<T, DecodeError> {
        (self.run)(input, location)
    }

    /// Parses `text` as JSON, then decodes the parsed value.
    ///
    /// Parse failures are returned as [`Error::Json`], unmodified.
    ///
    /// ```
    /// use jsondec::{number, Error};
    ///
    /// assert_eq!(1.5, number().decode_json("1.5").unwrap());
    /// assert!(matches!(number().decode_json("1.5.2"), Err(Error::Json(_))));
    /// assert!(matches!(number().decode_json("\"1.5\""), Err(Error::Decode(_))));
    /// ```
    pub fn decode_json(&self, text: &str) -> Result<T, Error> {
        self.decode_json_with(text, &DecodeOptions::default())
    }

    pub fn decode_json_with(&self, text: &str, options: &DecodeOptions) -> Result<T, Error> {
        let value: Value = serde_json::from_str(text)?;
        Ok(self.decode_any_with(&value, options)?)
    }

    /// Decodes an already-parsed JSON value.
    pub fn decode_any(&self, value: &Value) -> Result<T, DecodeError> {
        self.decode_any_with(value, &DecodeOptions::default())
    }

    pub fn decode_any_with(
        &self,
        value: &Value,
        options: &DecodeOptions,
    ) -> Result<T, DecodeError> {
        let root = Location::root(options);
        self.run(value, &root).map_err(|err| {
            debug!(location = err.location(), error = %err, "decode failed");
            err
        })
    }
}

impl<T: 'static> Decoder<T> {
    /// Method form of [`map`][`crate::map`].
    pub fn map<U, F>(self, transform: F) -> Decoder<U>
    where
        F: Fn(T) -> U + Send + Sync + 'static,
        U: 'static,
    {
        crate::map(transform, self)
    }

    /// Method form of [`and_then`][`crate::and_then`].
    pub fn and_then<U, F>(self, continuation: F) -> Decoder<U>
    where
        F: Fn(T) -> Decoder<U> + Send + Sync + 'static,
        U: 'static,
    {
        crate::and_then(self, continuation)
    }
}
