#![no_main]
use libfuzzer_sys::fuzz_target;

use jsondec::{any, at, PathSegment};

fuzz_target!(|path_and_instance: (Vec<PathSegment>, Vec<u8>)| {
    // We're only interested in fuzzing against valid JSON.
    if let Ok(instance) = serde_json::from_slice(&path_and_instance.1) {
        let _ = at(path_and_instance.0, any()).decode_any(&instance);
    }
});
