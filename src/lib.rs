//! Known-Plaintext Attack on 3-Round SIMON48/96 in Rust
//!
//! This crate implements a guess-and-determine attack against a reduced
//! (3-round) version of the SIMON48/96 lightweight block cipher. Given one
//! or more plaintext/ciphertext pairs produced under the same three round
//! subkeys, it recovers the subkeys or reports that no subkey triple is
//! consistent with the pairs.
//!
//! # Parameters
//! - Block size: 48 bits (two 24-bit halves)
//! - Subkey size: 24 bits per round
//! - Rounds attacked: 3
//! - Guess space: 2^24 round-1 subkeys
//!
//! The short depth is what makes the attack linear instead of exponential:
//! once the round-1 subkey is guessed, the round-2 and round-3 subkeys
//! follow in closed form from a single reference pair, so the total cost is
//! 2^24 guesses rather than a joint 2^72 search.

// SIMON48/96 attack parameters
/// Mask selecting the low 24 bits of a word.
pub const MASK_24: u32 = 0xFF_FFFF;
/// Mask selecting the low 48 bits of a packed block.
pub const MASK_48: u64 = 0xFFFF_FFFF_FFFF;
/// Size of the round-1 subkey guess space (2^24).
const GUESS_SPACE: u32 = 1 << 24;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Rotate a 24-bit word left by `distance` bits.
///
/// The word lives in the low 24 bits of a `u32`; any higher bits are masked
/// off before rotating. `distance` must be in `1..=23`.
#[inline(always)]
pub fn rotate_left_24(word: u32, distance: u32) -> u32 {
    debug_assert!(
        (1..24).contains(&distance),
        "rotation distance out of range"
    );
    let word = word & MASK_24;
    ((word << distance) | (word >> (24 - distance))) & MASK_24
}

/// Pack two 24-bit halves into one 48-bit block.
///
/// The upper half occupies bits 24-47 and the lower half bits 0-23. This is
/// the single encoding used both when parsing input blocks into halves and
/// when packing round outputs for comparison.
#[inline(always)]
pub fn pack_halves(upper: u32, lower: u32) -> u64 {
    (((upper & MASK_24) as u64) << 24) | (lower & MASK_24) as u64
}

/// The non-linear function of the SIMON round.
///
/// `F(x) = (x <<< 8 & x <<< 1) ^ x <<< 2`, where `<<<` is 24-bit left
/// rotation. The same combination appears inside [`simon_round`] applied to
/// the upper input half, and standalone during subkey derivation applied to
/// ciphertext halves.
#[inline(always)]
pub fn simon_f(word: u32) -> u32 {
    (rotate_left_24(word, 8) & rotate_left_24(word, 1)) ^ rotate_left_24(word, 2)
}

/// The two halves produced by one Feistel round, named to avoid the
/// upper/lower ordering ambiguity of a positional pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundOutput {
    /// Upper 24 bits of the round output.
    pub upper: u32,
    /// Lower 24 bits of the round output.
    pub lower: u32,
}

/// Compute one SIMON round.
///
/// The new lower half is always the old upper half; the new upper half mixes
/// the subkey, the old lower half, and the non-linear function of the old
/// upper half. Pure and total: every 24-bit input produces a 24-bit output.
pub fn simon_round(upper_in: u32, lower_in: u32, subkey: u32) -> RoundOutput {
    let and_term = rotate_left_24(upper_in, 1) & rotate_left_24(upper_in, 8);
    RoundOutput {
        upper: (subkey ^ lower_in ^ rotate_left_24(upper_in, 2) ^ and_term) & MASK_24,
        lower: upper_in & MASK_24,
    }
}

/// Encrypt a 48-bit block (as two 24-bit halves) under three round subkeys.
///
/// Each round's output halves feed the next round's inputs. Pack the result
/// with [`pack_halves`] to compare against a stored 48-bit ciphertext.
pub fn encrypt_three_rounds(
    pt_upper: u32,
    pt_lower: u32,
    k1: u32,
    k2: u32,
    k3: u32,
) -> RoundOutput {
    let r1 = simon_round(pt_upper, pt_lower, k1);
    let r2 = simon_round(r1.upper, r1.lower, k2);
    simon_round(r2.upper, r2.lower, k3)
}

/// One known plaintext/ciphertext pair.
///
/// Both values are 48-bit blocks; bits above 48 are masked off at
/// construction, never treated as an error. Pairs are immutable for the
/// lifetime of a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PtCtPair {
    plaintext: u64,
    ciphertext: u64,
}

impl PtCtPair {
    /// Create a pair, masking both values to 48 bits.
    pub fn new(plaintext: u64, ciphertext: u64) -> Self {
        PtCtPair {
            plaintext: plaintext & MASK_48,
            ciphertext: ciphertext & MASK_48,
        }
    }

    /// The full 48-bit plaintext.
    pub fn plaintext(&self) -> u64 {
        self.plaintext
    }

    /// The full 48-bit ciphertext.
    pub fn ciphertext(&self) -> u64 {
        self.ciphertext
    }

    /// Upper 24 bits of the plaintext (bits 24-47).
    pub fn plaintext_upper(&self) -> u32 {
        ((self.plaintext >> 24) as u32) & MASK_24
    }

    /// Lower 24 bits of the plaintext (bits 0-23).
    pub fn plaintext_lower(&self) -> u32 {
        (self.plaintext as u32) & MASK_24
    }

    /// Upper 24 bits of the ciphertext (bits 24-47).
    pub fn ciphertext_upper(&self) -> u32 {
        ((self.ciphertext >> 24) as u32) & MASK_24
    }

    /// Lower 24 bits of the ciphertext (bits 0-23).
    pub fn ciphertext_lower(&self) -> u32 {
        (self.ciphertext as u32) & MASK_24
    }
}

/// The three round subkeys, in application order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubkeyTriple {
    /// Round-1 subkey.
    pub k1: u32,
    /// Round-2 subkey.
    pub k2: u32,
    /// Round-3 subkey.
    pub k3: u32,
}

impl SubkeyTriple {
    /// Create a triple, masking each subkey to 24 bits.
    pub fn new(k1: u32, k2: u32, k3: u32) -> Self {
        SubkeyTriple {
            k1: k1 & MASK_24,
            k2: k2 & MASK_24,
            k3: k3 & MASK_24,
        }
    }

    /// Generate a uniformly random subkey triple.
    pub fn random() -> Self {
        SubkeyTriple {
            k1: rand::random::<u32>() & MASK_24,
            k2: rand::random::<u32>() & MASK_24,
            k3: rand::random::<u32>() & MASK_24,
        }
    }
}

/// Result of a subkey search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    /// A subkey triple consistent with every supplied pair.
    Found(SubkeyTriple),
    /// No round-1 guess produced a consistent triple.
    NotFound,
}

/// Solve for the round-2 and round-3 subkeys given a round-1 guess.
///
/// Applies one round to the reference plaintext under the guessed subkey,
/// then inverts the last two rounds algebraically using the known ciphertext
/// halves. This is a closed-form solve, not a sub-search: with only three
/// rounds, the round-3 output's lower half equals the round-2 output's upper
/// half, which isolates each remaining subkey in a single XOR equation.
pub fn derive_remaining_subkeys(k1_guess: u32, reference: &PtCtPair) -> SubkeyTriple {
    let r1 = simon_round(
        reference.plaintext_upper(),
        reference.plaintext_lower(),
        k1_guess,
    );
    // r1.lower == plaintext_upper always, so either spelling works below
    let k2 = reference.plaintext_upper() ^ reference.ciphertext_lower() ^ simon_f(r1.upper);
    let k3 = r1.upper ^ reference.ciphertext_upper() ^ simon_f(reference.ciphertext_lower());
    SubkeyTriple {
        k1: k1_guess & MASK_24,
        k2,
        k3,
    }
}

/// Check a candidate triple against every pair.
///
/// Re-encrypts each plaintext under the candidate subkeys and compares the
/// packed result to the stored ciphertext, returning `false` on the first
/// mismatch without checking the remaining pairs.
pub fn verify(triple: SubkeyTriple, pairs: &[PtCtPair]) -> bool {
    for pair in pairs {
        let out = encrypt_three_rounds(
            pair.plaintext_upper(),
            pair.plaintext_lower(),
            triple.k1,
            triple.k2,
            triple.k3,
        );
        if pack_halves(out.upper, out.lower) != pair.ciphertext() {
            return false;
        }
    }
    true
}

/// Recover the three round subkeys from known plaintext/ciphertext pairs.
///
/// Tries every round-1 subkey in ascending order, deriving the round-2 and
/// round-3 subkeys from the first pair and verifying the candidate triple
/// against all pairs. Stops at the first fully consistent triple; if no
/// guess verifies, returns [`SearchOutcome::NotFound`], which is a defined
/// result rather than an error.
///
/// With a single pair the derivation forces that pair to verify under every
/// guess, so the search returns the lowest matching round-1 value (zero)
/// rather than the subkey actually used. Even with several pairs the cipher
/// admits near-equivalent triples (`k1` and `k3` offset by the same
/// difference, `k2` by its rotations) that encrypt a given pair set
/// identically; the search makes no attempt to enumerate them and reports
/// the lowest consistent `k1`. More pairs shrink the odds of such a
/// collision.
///
/// # Panics
///
/// Panics if `pairs` is empty.
pub fn recover_subkeys(pairs: &[PtCtPair]) -> SearchOutcome {
    assert!(
        !pairs.is_empty(),
        "at least one plaintext/ciphertext pair is required"
    );

    let reference = &pairs[0];
    for k1_guess in 0..GUESS_SPACE {
        let candidate = derive_remaining_subkeys(k1_guess, reference);
        if verify(candidate, pairs) {
            return SearchOutcome::Found(candidate);
        }
    }
    SearchOutcome::NotFound
}

/// Recover the subkeys searching the guess space in parallel (feature `parallel`).
///
/// Partitions the round-1 guess range across Rayon workers. `find_first`
/// keeps the result identical to [`recover_subkeys`]: the lowest verifying
/// guess wins even when a higher guess verifies on another worker sooner.
///
/// # Panics
///
/// Panics if `pairs` is empty.
#[cfg(feature = "parallel")]
pub fn recover_subkeys_parallel(pairs: &[PtCtPair]) -> SearchOutcome {
    assert!(
        !pairs.is_empty(),
        "at least one plaintext/ciphertext pair is required"
    );

    let reference = &pairs[0];
    match (0..GUESS_SPACE)
        .into_par_iter()
        .find_first(|&k1_guess| verify(derive_remaining_subkeys(k1_guess, reference), pairs))
    {
        Some(k1_guess) => SearchOutcome::Found(derive_remaining_subkeys(k1_guess, reference)),
        None => SearchOutcome::NotFound,
    }
}
