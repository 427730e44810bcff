#![no_main]
use libfuzzer_sys::fuzz_target;

use jsondec::{
    any, array, dict, field, lazy, nullable, number, object, one_of, string, DecodeOptions,
    Decoder,
};
use serde_json::Value;

#[derive(Debug)]
enum Doc {
    List(Vec<Doc>),
    Record(Option<String>, f64),
    Other(Value),
}

fn doc() -> Decoder<Doc> {
    one_of(
        array(lazy(doc)).map(Doc::List),
        vec![
            object(
                (field("name", nullable(string())), field("size", number())),
                |(name, size)| Doc::Record(name, size),
            ),
            dict(lazy(doc)).map(|_| Doc::Other(Value::Null)),
            any().map(Doc::Other),
        ],
    )
}

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        let _ = doc().decode_json_with(text, &DecodeOptions::new().with_max_depth(64));
    }
});
