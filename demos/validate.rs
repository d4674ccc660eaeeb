use testnummers::*;

fn main() {
    // ── 1. BSN ────────────────────────────────────────────────────────
    println!("=== BSN ===");
    for input in ["123456782", "123456789", "12345678"] {
        match validate_bsn(input) {
            Ok(()) => println!("  {input}: valid"),
            Err(e) => println!("  {input}: {e}"),
        }
    }

    // ── 2. IBAN ───────────────────────────────────────────────────────
    println!("\n=== IBAN ===");
    for input in ["NL91 ABNA 0417 1643 00", "NL00ABNA0417164300", "NLABNA0417164300"] {
        match validate_iban(input) {
            Ok(()) => println!("  {input}: valid"),
            Err(e) => println!("  {input}: {e}"),
        }
    }

    // ── 3. Bank codes ─────────────────────────────────────────────────
    println!("\n=== Bank codes ===");
    for input in ["ingb", "XXXX"] {
        match input.parse::<BankCode>() {
            Ok(bank) => println!("  {input}: {bank}"),
            Err(e) => println!("  {input}: {e}"),
        }
    }

    // ── 4. Loonheffingennummer ───────────────────────────────────────
    println!("\n=== Loonheffingennummer ===");
    for input in ["111111110", "111111110L01", "111111111"] {
        let result = if input.ends_with(LOONHEFFINGEN_SUFFIX) {
            validate_suffixed_loonheffingennummer(input)
        } else {
            validate_loonheffingennummer(input)
        };
        match result {
            Ok(()) => println!("  {input}: valid"),
            Err(e) => println!("  {input}: {e}"),
        }
    }
}
