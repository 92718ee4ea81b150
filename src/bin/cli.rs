use clap::{Parser, Subcommand};
use simon_crack::{
    encrypt_three_rounds, pack_halves, PtCtPair, SearchOutcome, SubkeyTriple, MASK_24, MASK_48,
};

#[derive(Parser)]
#[command(name = "cracksimon")]
#[command(about = "Known-plaintext attack on 3-round SIMON48/96")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Recover the three round subkeys from plaintext/ciphertext pairs
    Crack {
        /// Alternating plaintext and ciphertext values, each exactly 12 hex
        /// digits: <pt1> <ct1> [<pt2> <ct2> ...]
        #[arg(required = true, num_args = 2..)]
        values: Vec<String>,
    },

    /// Encrypt a 48-bit block under three explicit round subkeys
    Encrypt {
        /// 48-bit plaintext as 12 hex digits
        plaintext: String,

        /// Round-1 subkey as 6 hex digits
        k1: String,

        /// Round-2 subkey as 6 hex digits
        k2: String,

        /// Round-3 subkey as 6 hex digits
        k3: String,
    },

    /// Generate plaintext/ciphertext pairs under a fresh random subkey triple
    GenPairs {
        /// Number of pairs to generate
        #[arg(short, long, default_value_t = 2)]
        count: usize,

        /// Print the subkey triple used, on stderr
        #[arg(short, long)]
        show_keys: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Crack { values } => {
            crack(&values);
        }
        Commands::Encrypt {
            plaintext,
            k1,
            k2,
            k3,
        } => {
            encrypt(&plaintext, &k1, &k2, &k3);
        }
        Commands::GenPairs { count, show_keys } => {
            gen_pairs(count, show_keys);
        }
    }
}

/// Parse a 48-bit block given as exactly 12 hex digits.
fn parse_block(text: &str) -> u64 {
    if text.len() != 12 {
        eprintln!("Plaintext or ciphertext is incorrect length");
        std::process::exit(1);
    }
    if !text.chars().all(|c| c.is_ascii_hexdigit()) {
        eprintln!("Plaintext or ciphertext is not a valid hex string");
        std::process::exit(1);
    }
    match u64::from_str_radix(text, 16) {
        Ok(value) => value,
        Err(_) => {
            eprintln!("Plaintext or ciphertext is not a valid hex string");
            std::process::exit(1);
        }
    }
}

/// Parse a 24-bit subkey given as exactly 6 hex digits.
fn parse_subkey(text: &str) -> u32 {
    if text.len() != 6 || !text.chars().all(|c| c.is_ascii_hexdigit()) {
        eprintln!("Subkey must be exactly 6 hex digits");
        std::process::exit(1);
    }
    match u32::from_str_radix(text, 16) {
        Ok(value) => value,
        Err(_) => {
            eprintln!("Subkey must be exactly 6 hex digits");
            std::process::exit(1);
        }
    }
}

fn crack(values: &[String]) {
    if values.len() % 2 != 0 {
        eprintln!("Usage: cracksimon crack <pt1> <ct1> [<pt2> <ct2> ...]");
        std::process::exit(1);
    }

    let pairs: Vec<PtCtPair> = values
        .chunks(2)
        .map(|chunk| PtCtPair::new(parse_block(&chunk[0]), parse_block(&chunk[1])))
        .collect();

    #[cfg(feature = "parallel")]
    let outcome = simon_crack::recover_subkeys_parallel(&pairs);
    #[cfg(not(feature = "parallel"))]
    let outcome = simon_crack::recover_subkeys(&pairs);

    // NotFound deliberately prints nothing: absence of a match is a defined
    // result, not an error.
    if let SearchOutcome::Found(triple) = outcome {
        println!("{:06X}\t{:06X}\t{:06X}", triple.k1, triple.k2, triple.k3);
    }
}

fn encrypt(plaintext: &str, k1: &str, k2: &str, k3: &str) {
    let block = parse_block(plaintext);
    let out = encrypt_three_rounds(
        ((block >> 24) as u32) & MASK_24,
        (block as u32) & MASK_24,
        parse_subkey(k1),
        parse_subkey(k2),
        parse_subkey(k3),
    );
    println!("{:012X}", pack_halves(out.upper, out.lower));
}

fn gen_pairs(count: usize, show_keys: bool) {
    if count == 0 {
        eprintln!("Pair count must be at least 1");
        std::process::exit(1);
    }

    let keys = SubkeyTriple::random();
    for _ in 0..count {
        let plaintext = rand::random::<u64>() & MASK_48;
        let out = encrypt_three_rounds(
            ((plaintext >> 24) as u32) & MASK_24,
            (plaintext as u32) & MASK_24,
            keys.k1,
            keys.k2,
            keys.k3,
        );
        println!("{:012X} {:012X}", plaintext, pack_halves(out.upper, out.lower));
    }

    if show_keys {
        eprintln!("Subkeys: {:06X} {:06X} {:06X}", keys.k1, keys.k2, keys.k3);
    }
}
