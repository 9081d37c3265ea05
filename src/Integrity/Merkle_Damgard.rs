use std::cmp::Ordering;
use std::fmt;
use std::marker::PhantomData;

use zeroize::Zeroize;

use crate::Bit_utils::narrow_cast;
use crate::Encoding::Base64;

pub const CHUNK_SIZE: usize = 64;

/// Bytes reserved at the end of the last block for the message length in bits.
const LENGTH_FIELD_SIZE: usize = 8;

/// Per-algorithm half of the construction: the initial digest words and the
/// function mixing one 64-byte chunk into them.
pub trait Compression<const WORDS: usize> {
    const NAME: &'static str;
    const INITIAL_DIGEST: [u32; WORDS];

    fn compress(digest: &mut [u32; WORDS], chunk: &[u8; CHUNK_SIZE]);
}

/// Streaming Merkle–Damgård hasher over 32-bit digest words.
///
/// `WORDS` words of state are computed; the first `OUTPUT_BYTES / 4` of them
/// form the digest. The hasher is reusable, [`MerkleDamgard::hash`] always
/// starts again from `C::INITIAL_DIGEST`.
pub struct MerkleDamgard<C, const WORDS: usize, const OUTPUT_BYTES: usize> {
    bit_length: u64,
    digest: [u32; WORDS],
    compression: PhantomData<C>,
}

impl<C, const WORDS: usize, const OUTPUT_BYTES: usize> MerkleDamgard<C, WORDS, OUTPUT_BYTES>
where
    C: Compression<WORDS>,
{
    pub const OUTPUT_SIZE: usize = OUTPUT_BYTES;

    const OUTPUT_WORDS: usize = {
        assert!(OUTPUT_BYTES % 4 == 0, "digest must be whole words");
        assert!(OUTPUT_BYTES <= 4 * WORDS, "digest longer than the state");
        OUTPUT_BYTES / 4
    };

    pub const fn new() -> Self {
        MerkleDamgard {
            bit_length: 0,
            digest: C::INITIAL_DIGEST,
            compression: PhantomData,
        }
    }

    pub fn from_message(message: impl AsRef<[u8]>) -> Self {
        let mut hasher = Self::new();
        hasher.hash(message);
        hasher
    }

    pub fn hexadecimal_of(message: impl AsRef<[u8]>) -> String {
        Self::from_message(message).hexadecimal()
    }

    pub fn base64_of(message: impl AsRef<[u8]>) -> String {
        Self::from_message(message).base64()
    }

    pub fn reset(&mut self) {
        self.bit_length = 0;
        self.digest = C::INITIAL_DIGEST;
    }

    pub fn hash(&mut self, message: impl AsRef<[u8]>) {
        self.reset();
        let chunks = message.as_ref().chunks_exact(CHUNK_SIZE);
        let remainder = chunks.remainder();
        for chunk in chunks {
            self.update(chunk);
        }
        self.finalize(remainder);
    }

    fn update(&mut self, chunk: &[u8]) {
        debug_assert_eq!(chunk.len(), CHUNK_SIZE);
        let chunk: &[u8; CHUNK_SIZE] = chunk
            .try_into()
            .expect("update takes exactly one 64 byte chunk");
        self.bit_length = self.bit_length.wrapping_add(8 * CHUNK_SIZE as u64);
        C::compress(&mut self.digest, chunk);
    }

    fn finalize(&mut self, remainder: &[u8]) {
        debug_assert!(remainder.len() < CHUNK_SIZE);
        self.bit_length = self
            .bit_length
            .wrapping_add(8 * remainder.len() as u64);

        let mut block = [0u8; CHUNK_SIZE];
        block[..remainder.len()].copy_from_slice(remainder);
        block[remainder.len()] = 0x80;
        // no room left for the length field, it goes into an extra block
        if CHUNK_SIZE - (remainder.len() + 1) < LENGTH_FIELD_SIZE {
            C::compress(&mut self.digest, &block);
            block.zeroize();
        }
        for (i, byte) in block[CHUNK_SIZE - LENGTH_FIELD_SIZE..]
            .iter_mut()
            .enumerate()
        {
            *byte = narrow_cast(self.bit_length >> (56 - 8 * i));
        }
        C::compress(&mut self.digest, &block);
        block.zeroize();
    }

    /// Writes the digest words big-endian into `output`.
    pub fn encode(&self, output: &mut [u8; OUTPUT_BYTES]) {
        for (bytes, &word) in output
            .chunks_exact_mut(4)
            .zip(&self.digest[..Self::OUTPUT_WORDS])
        {
            for (i, byte) in bytes.iter_mut().enumerate() {
                *byte = narrow_cast(word >> (24 - 8 * i));
            }
        }
    }

    pub fn digest(&self) -> [u8; OUTPUT_BYTES] {
        let mut output = [0u8; OUTPUT_BYTES];
        self.encode(&mut output);
        output
    }

    pub fn hexadecimal(&self) -> String {
        const_hex::encode(self.digest())
    }

    pub fn base64(&self) -> String {
        Base64::encode(self.digest())
    }

    pub const fn size(&self) -> usize {
        OUTPUT_BYTES
    }

    fn output_words(&self) -> &[u32] {
        &self.digest[..Self::OUTPUT_WORDS]
    }
}

impl<C, const WORDS: usize, const OUTPUT_BYTES: usize> Default
    for MerkleDamgard<C, WORDS, OUTPUT_BYTES>
where
    C: Compression<WORDS>,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<C, const WORDS: usize, const OUTPUT_BYTES: usize> Clone
    for MerkleDamgard<C, WORDS, OUTPUT_BYTES>
{
    fn clone(&self) -> Self {
        MerkleDamgard {
            bit_length: self.bit_length,
            digest: self.digest,
            compression: PhantomData,
        }
    }
}

impl<C, const WORDS: usize, const OUTPUT_BYTES: usize> Zeroize
    for MerkleDamgard<C, WORDS, OUTPUT_BYTES>
{
    fn zeroize(&mut self) {
        self.bit_length.zeroize();
        self.digest.zeroize();
    }
}

// Comparisons look at the exposed digest only. Comparing whole u32 words is the
// same as comparing their big-endian bytes.
impl<C, const WORDS: usize, const OUTPUT_BYTES: usize> PartialEq
    for MerkleDamgard<C, WORDS, OUTPUT_BYTES>
where
    C: Compression<WORDS>,
{
    fn eq(&self, other: &Self) -> bool {
        self.output_words() == other.output_words()
    }
}

impl<C, const WORDS: usize, const OUTPUT_BYTES: usize> Eq for MerkleDamgard<C, WORDS, OUTPUT_BYTES> where
    C: Compression<WORDS>
{
}

impl<C, const WORDS: usize, const OUTPUT_BYTES: usize> PartialOrd
    for MerkleDamgard<C, WORDS, OUTPUT_BYTES>
where
    C: Compression<WORDS>,
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<C, const WORDS: usize, const OUTPUT_BYTES: usize> Ord for MerkleDamgard<C, WORDS, OUTPUT_BYTES>
where
    C: Compression<WORDS>,
{
    fn cmp(&self, other: &Self) -> Ordering {
        self.output_words().cmp(other.output_words())
    }
}

impl<C, const WORDS: usize, const OUTPUT_BYTES: usize> PartialEq<[u8; OUTPUT_BYTES]>
    for MerkleDamgard<C, WORDS, OUTPUT_BYTES>
where
    C: Compression<WORDS>,
{
    fn eq(&self, other: &[u8; OUTPUT_BYTES]) -> bool {
        &self.digest() == other
    }
}

impl<C, const WORDS: usize, const OUTPUT_BYTES: usize> PartialOrd<[u8; OUTPUT_BYTES]>
    for MerkleDamgard<C, WORDS, OUTPUT_BYTES>
where
    C: Compression<WORDS>,
{
    fn partial_cmp(&self, other: &[u8; OUTPUT_BYTES]) -> Option<Ordering> {
        Some(self.digest().as_slice().cmp(other.as_slice()))
    }
}

impl<C, const WORDS: usize, const OUTPUT_BYTES: usize> fmt::Display
    for MerkleDamgard<C, WORDS, OUTPUT_BYTES>
where
    C: Compression<WORDS>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hexadecimal())
    }
}

impl<C, const WORDS: usize, const OUTPUT_BYTES: usize> fmt::Debug
    for MerkleDamgard<C, WORDS, OUTPUT_BYTES>
where
    C: Compression<WORDS>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple(C::NAME)
            .field(&format_args!("{}", self.hexadecimal()))
            .finish()
    }
}
