#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Must not panic — any input is either valid or invalid.
        let _ = testnummers::validate_bsn(s);
        let _ = testnummers::validate_loonheffingennummer(s);
        let _ = testnummers::validate_suffixed_loonheffingennummer(s);
        if testnummers::validate_iban(s).is_ok() {
            // A valid IBAN stays valid once formatted.
            assert!(testnummers::is_valid_iban(&testnummers::format_iban(s)));
        }
    }
});
