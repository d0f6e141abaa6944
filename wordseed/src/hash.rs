//! Hash functions used for checksums.

use sha2::{Digest, Sha256};

/// Compute SHA-256 hash
#[inline]
pub fn sha256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Compute SHA-256 over a sequence of lines, each terminated by `\n`.
///
/// This is the digest of the text file the lines would be stored in.
pub fn sha256_lines<'a, I>(lines: I) -> [u8; 32]
where
    I: IntoIterator<Item = &'a str>,
{
    let mut hasher = Sha256::new();
    for line in lines {
        hasher.update(line.as_bytes());
        hasher.update(b"\n");
    }
    hasher.finalize().into()
}

/// Extract the leading `count` bits of a digest, most significant bit first.
///
/// The count is capped at `digest.len() * 8`; asking for more yields every
/// bit of the digest and nothing past it.
pub fn leading_bits(digest: &[u8], count: usize) -> impl Iterator<Item = bool> + '_ {
    (0..count.min(digest.len() * 8)).map(move |i| (digest[i / 8] >> (7 - (i % 8))) & 1 == 1)
}
