use zeroize::Zeroize;

use super::message_schedule;
use crate::Bit_utils::rotate_left;
use crate::Integrity::Merkle_Damgard::{Compression, MerkleDamgard, CHUNK_SIZE};

/// SHA-1, FIPS 180-4 section 6.1.
pub type Sha1 = MerkleDamgard<Sha1Compression, 5, 20>;

#[derive(Debug, Clone, Copy, Default)]
pub struct Sha1Compression;

fn sha1_round_function(i: usize, b: u32, c: u32, d: u32) -> (u32, u32) {
    match i {
        0..=19 => ((b & c) | ((!b) & d), 0x5A827999), // choose
        20..=39 => (b ^ c ^ d, 0x6ED9EBA1),           // parity
        40..=59 => ((b & c) | (b & d) | (c & d), 0x8F1BBCDC), // majority
        60..=79 => (b ^ c ^ d, 0xCA62C1D6),           // parity
        _ => unreachable!("SHA-1 has 80 rounds"),
    }
}

impl Compression<5> for Sha1Compression {
    const NAME: &'static str = "Sha1";
    const INITIAL_DIGEST: [u32; 5] = [0x67452301, 0xEFCDAB89, 0x98BADCFE, 0x10325476, 0xC3D2E1F0];

    fn compress(digest: &mut [u32; 5], chunk: &[u8; CHUNK_SIZE]) {
        let mut words = message_schedule::<80>(chunk);
        for i in 16..80 {
            words[i] = rotate_left(words[i - 3] ^ words[i - 8] ^ words[i - 14] ^ words[i - 16], 1);
        }

        let [mut a, mut b, mut c, mut d, mut e] = *digest;
        for (i, &w) in words.iter().enumerate() {
            let (f, k) = sha1_round_function(i, b, c, d);
            (a, b, c, d, e) = (
                rotate_left(a, 5)
                    .wrapping_add(f)
                    .wrapping_add(e)
                    .wrapping_add(k)
                    .wrapping_add(w),
                a,
                rotate_left(b, 30),
                c,
                d,
            );
        }
        for (s, x) in digest.iter_mut().zip([a, b, c, d, e]) {
            *s = s.wrapping_add(x);
        }
        words.zeroize();
    }
}
