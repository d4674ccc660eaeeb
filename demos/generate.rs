use rand::SeedableRng;
use rand::rngs::StdRng;
use testnummers::*;

fn main() {
    // Seeded source: the same output on every run
    let mut rng = StdRng::seed_from_u64(2024);

    println!("BSN:");
    for bsn in generate_multiple_bsn_with(&mut rng, 3).expect("BSN generation") {
        println!("  {bsn}");
    }

    println!("\nIBAN (random bank):");
    for iban in generate_multiple_iban_with(&mut rng, 3, None) {
        println!("  {}", format_iban(&iban));
    }

    println!("\nIBAN per bank:");
    for bank in BankCode::ALL {
        println!("  {bank}: {}", format_iban(&generate_iban_with(&mut rng, Some(bank))));
    }

    println!("\nLoonheffingennummer:");
    for n in generate_multiple_loonheffingennummer_with(&mut rng, 3).expect("generation") {
        println!("  {n}  ({})", with_suffix(&n));
    }
}
