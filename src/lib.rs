//! Composable decoders from untyped JSON into precise Rust types.
//!
//! A [`Decoder`] is built once, out of the combinators in this crate, and
//! then used to decode any number of inputs. Decoding either produces a fully
//! built value, or fails with a [`DecodeError`] describing the first place in
//! the input that did not have the expected shape.
//!
//! ```
//! use jsondec::{array, field, nullable, number, object, string};
//!
//! #[derive(Debug, PartialEq)]
//! struct Item {
//!     name: String,
//!     price: Option<f64>,
//! }
//!
//! let items = array(object(
//!     (field("name", string()), field("price", nullable(number()))),
//!     |(name, price)| Item { name, price },
//! ));
//!
//! assert_eq!(
//!     vec![Item { name: "pen".to_owned(), price: None }],
//!     items.decode_json(r#"[{ "name": "pen", "price": null }]"#).unwrap()
//! );
//!
//! let err = items.decode_json(r#"[{ "name": "pen", "price": "free" }]"#).unwrap_err();
//! assert_eq!("at input[0].price: unexpected string", err.to_string());
//! ```

mod control;
mod decoder;
mod error;
mod location;
mod object;
mod primitive;
mod structural;

mod sealed {
    pub trait Sealed {}
}

pub use control::*;
pub use decoder::*;
pub use error::{DecodeError, Error};
pub use location::{Location, PathSegment};
pub use object::*;
pub use primitive::*;
pub use structural::*;
