#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let expanded = testnummers::letters_to_numbers(s);
        if let Some(r) = testnummers::mod97(&expanded) {
            assert!(r < 97);
        }
    }
});
