#![no_main]
use libfuzzer_sys::fuzz_target;
use htmlrefs::parse_entity;

fuzz_target!(|data: &[u8]| {
    // Anchor the candidate on `&` the way the substitutor would.
    let mut candidate = Vec::with_capacity(data.len() + 1);
    candidate.push(b'&');
    candidate.extend_from_slice(data);

    if let Ok(input) = std::str::from_utf8(&candidate) {
        let (text, consumed) = parse_entity(input);
        assert!(consumed <= input.len());
        assert_eq!(consumed == 0, text.is_empty());
    }
});
