use crate::constants::ID_ALPHABET;
use crate::error::{GenerateError, Result};
use crate::generator::random::RandomSource;

/// Shortest minimum length for which consecutive counters never differ only
/// in their last symbol.
const MIN_PADDED_LENGTH: usize = 3;

/// Encodes counters as short identifiers over a permuted alphabet.
///
/// Layout of an identifier:
///
/// ```text
/// <prefix><digits, least significant first>[<terminator><filler...>]
/// ```
///
/// The prefix selects a rotation of the alphabet; the reversed rotation
/// supplies the terminator (its first symbol) and the digit set (the rest).
/// Filler only appears when the digits fall short of the minimum length.
#[derive(Debug, Clone)]
pub struct ShortId {
    alphabet: Vec<u8>,
    min_length: usize,
}

impl ShortId {
    pub fn new(
        alphabet: Vec<u8>,
        min_length: usize,
    ) -> Result<Self> {
        if alphabet.len() < 3 {
            return Err(GenerateError::invalid(
                "alphabet",
                format!("needs at least 3 symbols, got {}", alphabet.len()),
            ));
        }
        if let Some(bad) = alphabet.iter().find(|c| !c.is_ascii_alphanumeric()) {
            return Err(GenerateError::invalid(
                "alphabet",
                format!("symbol {:?} is not an ASCII letter or digit", *bad as char),
            ));
        }
        let mut sorted = alphabet.clone();
        sorted.sort_unstable();
        sorted.dedup();
        if sorted.len() != alphabet.len() {
            return Err(GenerateError::invalid(
                "alphabet",
                "symbols must be distinct",
            ));
        }
        if min_length < MIN_PADDED_LENGTH {
            return Err(GenerateError::invalid(
                "min_length",
                format!("must be at least {MIN_PADDED_LENGTH}, got {min_length}"),
            ));
        }
        Ok(Self {
            alphabet,
            min_length,
        })
    }

    /// Shuffles the default letters-and-digits alphabet with `rng`.
    pub fn shuffled(
        rng: &mut RandomSource,
        min_length: usize,
    ) -> Result<Self> {
        let mut symbols = ID_ALPHABET.as_bytes().to_vec();
        rng.shuffle(&mut symbols);
        Self::new(symbols, min_length)
    }

    pub fn alphabet(&self) -> &[u8] {
        &self.alphabet
    }

    pub fn encode(
        &self,
        counter: u64,
    ) -> String {
        let working = self.working_alphabet(self.offset_for(counter));
        let prefix = working[working.len() - 1];
        let terminator = working[0];
        let digits = &working[1..];
        let base = digits.len() as u64;

        let mut id = Vec::with_capacity(self.min_length.max(16));
        id.push(prefix);
        let mut value = counter;
        loop {
            id.push(digits[(value % base) as usize]);
            value /= base;
            if value == 0 {
                break;
            }
        }

        if id.len() < self.min_length {
            id.push(terminator);
            let mut filler = working;
            while id.len() < self.min_length {
                permute(&mut filler);
                let take = (self.min_length - id.len()).min(filler.len());
                id.extend_from_slice(&filler[..take]);
            }
        }

        id.into_iter().map(char::from).collect()
    }

    /// Recovers the counter behind `id`, or `None` if `encode` never
    /// produces that string.
    pub fn decode(
        &self,
        id: &str,
    ) -> Option<u64> {
        let (&prefix, rest) = id.as_bytes().split_first()?;
        let offset = self.alphabet.iter().position(|&c| c == prefix)?;
        let working = self.working_alphabet(offset);
        let terminator = working[0];
        let digits = &working[1..];
        let base = digits.len() as u64;

        let end = rest
            .iter()
            .position(|&c| c == terminator)
            .unwrap_or(rest.len());
        let numeral = &rest[..end];
        if numeral.is_empty() {
            return None;
        }
        let mut value: u64 = 0;
        for &symbol in numeral.iter().rev() {
            let digit = digits.iter().position(|&c| c == symbol)? as u64;
            value = value.checked_mul(base)?.checked_add(digit)?;
        }
        (self.encode(value) == id).then_some(value)
    }

    fn offset_for(
        &self,
        counter: u64,
    ) -> usize {
        let len = self.alphabet.len() as u64;
        let symbol = u64::from(self.alphabet[(counter % len) as usize]);
        ((symbol % len + counter % len) % len) as usize
    }

    // Rotated left by `offset`, then reversed: the prefix ends up last.
    fn working_alphabet(
        &self,
        offset: usize,
    ) -> Vec<u8> {
        let mut working = self.alphabet.clone();
        working.rotate_left(offset);
        working.reverse();
        working
    }
}

/// Deterministic in-place permutation used for filler; draws no randomness.
fn permute(symbols: &mut [u8]) {
    let len = symbols.len();
    let (mut i, mut j) = (0, len - 1);
    while j > 0 {
        let r = (i * j + symbols[i] as usize + symbols[j] as usize) % len;
        symbols.swap(i, r);
        i += 1;
        j -= 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn encoder() -> ShortId {
        let mut rng = RandomSource::new(42);
        ShortId::shuffled(&mut rng, 8).unwrap()
    }

    #[test]
    fn ids_are_padded_and_use_only_alphabet_symbols() {
        let ids = encoder();
        for n in (0..5_000).chain([u64::from(u32::MAX), u64::MAX]) {
            let id = ids.encode(n);
            assert!(id.len() >= 8, "{id} too short");
            assert!(id.bytes().all(|c| ids.alphabet().contains(&c)), "{id}");
        }
    }

    #[test]
    fn encoding_is_injective_over_a_wide_prefix() {
        let ids = encoder();
        let mut seen = HashSet::new();
        for n in 0..100_000u64 {
            assert!(seen.insert(ids.encode(n)), "collision at {n}");
        }
    }

    #[test]
    fn decode_inverts_encode() {
        let ids = encoder();
        let samples = (0..2_000u64).chain([
            61,
            62,
            3_721,
            1 << 31,
            (1 << 31) + 1,
            u64::from(u32::MAX),
            u64::MAX - 1,
            u64::MAX,
        ]);
        for n in samples {
            assert_eq!(ids.decode(&ids.encode(n)), Some(n));
        }
    }

    #[test]
    fn decode_rejects_foreign_strings() {
        let ids = encoder();
        assert_eq!(ids.decode(""), None);
        assert_eq!(ids.decode("!!!!!!!!"), None);
        let mut tampered = ids.encode(17).into_bytes();
        tampered.truncate(2);
        assert_eq!(ids.decode(std::str::from_utf8(&tampered).unwrap()), None);
    }

    #[test]
    fn consecutive_ids_do_not_look_like_a_counter() {
        let ids = encoder();
        let mut prev = ids.encode(0);
        for n in 1..10_000u64 {
            let next = ids.encode(n);
            let (a, b) = (prev.as_bytes(), next.as_bytes());
            let shared = a.len().min(b.len()) - 1;
            assert!(
                a.len() != b.len() || a[..shared] != b[..shared],
                "{prev} -> {next} differs only in the last symbol"
            );
            prev = next;
        }
    }

    #[test]
    fn same_seed_same_identifiers() {
        let a = encoder();
        let b = encoder();
        assert_eq!(a.alphabet(), b.alphabet());
        assert_eq!(a.encode(12_345), b.encode(12_345));

        let mut other = RandomSource::new(43);
        let c = ShortId::shuffled(&mut other, 8).unwrap();
        assert_ne!(a.alphabet(), c.alphabet());
    }

    #[test]
    fn rejects_bad_alphabets() {
        assert!(ShortId::new(b"ab".to_vec(), 8).is_err());
        assert!(ShortId::new(b"abca".to_vec(), 8).is_err());
        assert!(ShortId::new(b"ab-c".to_vec(), 8).is_err());
        assert!(ShortId::new(b"abc".to_vec(), 2).is_err());
        assert!(ShortId::new(b"abc".to_vec(), 3).is_ok());
    }

    #[test]
    fn longer_minimum_is_respected() {
        let ids = ShortId::new(ID_ALPHABET.as_bytes().to_vec(), 130).unwrap();
        let id = ids.encode(99);
        assert_eq!(id.len(), 130);
        assert_eq!(ids.decode(&id), Some(99));
    }
}
