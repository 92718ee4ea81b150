use simon_crack::{
    encrypt_three_rounds, pack_halves, recover_subkeys, PtCtPair, SearchOutcome, SubkeyTriple,
    MASK_24, MASK_48,
};

fn main() {
    println!("SIMON48/96 3-Round Attack Demo");

    // k1 drawn from a small range so the ascending search finishes quickly
    // even in debug builds; k2 and k3 are full 24-bit subkeys.
    let mut keys = SubkeyTriple::random();
    keys.k1 &= 0xFFFF;

    let plaintexts = [
        rand::random::<u64>() & MASK_48,
        rand::random::<u64>() & MASK_48,
        rand::random::<u64>() & MASK_48,
        rand::random::<u64>() & MASK_48,
    ];
    let pairs: Vec<PtCtPair> = plaintexts
        .iter()
        .map(|&pt| {
            let out = encrypt_three_rounds(
                ((pt >> 24) as u32) & MASK_24,
                (pt as u32) & MASK_24,
                keys.k1,
                keys.k2,
                keys.k3,
            );
            PtCtPair::new(pt, pack_halves(out.upper, out.lower))
        })
        .collect();

    println!("Subkeys: {:06X} {:06X} {:06X}", keys.k1, keys.k2, keys.k3);
    for pair in &pairs {
        println!(
            "Pair: pt={:012X} ct={:012X}",
            pair.plaintext(),
            pair.ciphertext()
        );
    }

    match recover_subkeys(&pairs) {
        SearchOutcome::Found(triple) => {
            println!(
                "Recovered: {:06X} {:06X} {:06X}",
                triple.k1, triple.k2, triple.k3
            );
            println!("Exact match: {}", triple == keys);
        }
        SearchOutcome::NotFound => println!("No consistent subkey triple found"),
    }
}
