#![no_main]
use libfuzzer_sys::fuzz_target;
use htmlrefs::replace_entities;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        let output = replace_entities(input);
        // An `&`-free string must come back untouched.
        if !input.contains('&') {
            assert_eq!(output, input);
        }
    }
});
