use simon_crack::{
    derive_remaining_subkeys, encrypt_three_rounds, pack_halves, recover_subkeys, simon_f,
    simon_round, verify, PtCtPair, SearchOutcome, SubkeyTriple,
};

fn main() {
    println!("🔓 SIMON48/96 3-Round Attack Example");
    println!("====================================");

    let keys = SubkeyTriple::new(0x00002A, 0x6D2F91, 0x0C4E83);
    println!("🔑 Subkeys: {:06X} {:06X} {:06X}", keys.k1, keys.k2, keys.k3);
    println!("📊 Block size: 48 bits (two 24-bit halves)");
    println!("🔄 Rounds: 3");
    println!("🎯 Guess space: 2^24 round-1 subkeys");
    println!();

    // Example 1: one Feistel round
    println!("📝 Example 1: One Feistel Round");
    println!("-------------------------------");

    let upper = 0x123456;
    let lower = 0x789ABC;
    let out = simon_round(upper, lower, keys.k1);
    println!("📥 Input halves:  upper={:06X} lower={:06X}", upper, lower);
    println!("📤 Output halves: upper={:06X} lower={:06X}", out.upper, out.lower);
    println!("   New lower is the old upper: {}", out.lower == upper);
    println!(
        "   New upper is k ^ lower ^ F(upper): {}",
        out.upper == keys.k1 ^ lower ^ simon_f(upper)
    );
    println!();

    // Example 2: three rounds and a known-plaintext pair
    println!("📝 Example 2: Three Rounds");
    println!("--------------------------");

    let plaintexts: [u64; 2] = [0x890C0D_67B366, 0x887968_40FF07];
    let pairs: Vec<PtCtPair> = plaintexts
        .iter()
        .map(|&pt| {
            let ct = encrypt_three_rounds(
                ((pt >> 24) as u32) & 0xFF_FFFF,
                (pt as u32) & 0xFF_FFFF,
                keys.k1,
                keys.k2,
                keys.k3,
            );
            PtCtPair::new(pt, pack_halves(ct.upper, ct.lower))
        })
        .collect();

    for pair in &pairs {
        println!(
            "🔒 pt={:012X} -> ct={:012X}",
            pair.plaintext(),
            pair.ciphertext()
        );
    }
    println!();

    // Example 3: the closed-form derivation
    println!("📝 Example 3: Guess-and-Determine Derivation");
    println!("--------------------------------------------");

    let derived = derive_remaining_subkeys(keys.k1, &pairs[0]);
    println!(
        "🧮 Deriving from the true round-1 subkey gives: {:06X} {:06X} {:06X}",
        derived.k1, derived.k2, derived.k3
    );
    println!("   Matches the true triple: {}", derived == keys);

    let wrong = derive_remaining_subkeys(0x000000, &pairs[0]);
    println!(
        "🧮 Deriving from a wrong guess gives:          {:06X} {:06X} {:06X}",
        wrong.k1, wrong.k2, wrong.k3
    );
    println!(
        "   Verifies the reference pair alone: {}",
        verify(wrong, &pairs[..1])
    );
    println!(
        "   Verifies both pairs: {}",
        verify(wrong, &pairs)
    );
    println!();

    // Example 4: the full attack
    println!("📝 Example 4: Full Subkey Recovery");
    println!("----------------------------------");

    match recover_subkeys(&pairs) {
        SearchOutcome::Found(triple) => {
            println!(
                "🎉 Recovered subkeys: {:06X} {:06X} {:06X}",
                triple.k1, triple.k2, triple.k3
            );
            println!("✅ Exact match: {}", triple == keys);
        }
        SearchOutcome::NotFound => println!("❌ No consistent subkey triple found"),
    }
}
