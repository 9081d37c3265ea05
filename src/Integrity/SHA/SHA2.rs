use zeroize::Zeroize;

use super::message_schedule;
use crate::Bit_utils::rotate_right;
use crate::Integrity::Merkle_Damgard::{Compression, MerkleDamgard, CHUNK_SIZE};

/// SHA-224: the SHA-256 compression function from its own initial words,
/// exposing the first 7 of the 8 state words.
pub type Sha224 = MerkleDamgard<Sha224Compression, 8, 28>;

pub type Sha256 = MerkleDamgard<Sha256Compression, 8, 32>;

#[derive(Debug, Clone, Copy, Default)]
pub struct Sha224Compression;

#[derive(Debug, Clone, Copy, Default)]
pub struct Sha256Compression;

impl Compression<8> for Sha224Compression {
    const NAME: &'static str = "Sha224";
    const INITIAL_DIGEST: [u32; 8] = [
        0xc1059ed8, 0x367cd507, 0x3070dd17, 0xf70e5939, 0xffc00b31, 0x68581511, 0x64f98fa7,
        0xbefa4fa4,
    ];

    fn compress(digest: &mut [u32; 8], chunk: &[u8; CHUNK_SIZE]) {
        sha256_comp_fun(digest, chunk)
    }
}

impl Compression<8> for Sha256Compression {
    const NAME: &'static str = "Sha256";
    const INITIAL_DIGEST: [u32; 8] = [
        0x6a09e667, 0xbb67ae85, 0x3c6ef372, 0xa54ff53a, 0x510e527f, 0x9b05688c, 0x1f83d9ab,
        0x5be0cd19,
    ];

    fn compress(digest: &mut [u32; 8], chunk: &[u8; CHUNK_SIZE]) {
        sha256_comp_fun(digest, chunk)
    }
}

fn sha256_comp_fun(state: &mut [u32; 8], chunk: &[u8; CHUNK_SIZE]) {
    let mut words = message_schedule::<64>(chunk);
    for i in 16..64 {
        let w15 = words[i - 15];
        let s0 = rotate_right(w15, 7) ^ rotate_right(w15, 18) ^ (w15 >> 3);
        let w2 = words[i - 2];
        let s1 = rotate_right(w2, 17) ^ rotate_right(w2, 19) ^ (w2 >> 10);
        words[i] = words[i - 16]
            .wrapping_add(s0)
            .wrapping_add(words[i - 7])
            .wrapping_add(s1);
    }

    let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = *state;
    for (&k, &w) in SHA256_K.iter().zip(words.iter()) {
        let S1 = rotate_right(e, 6) ^ rotate_right(e, 11) ^ rotate_right(e, 25);
        let ch = (e & f) ^ ((!e) & g);
        let temp1 = h
            .wrapping_add(S1)
            .wrapping_add(ch)
            .wrapping_add(k)
            .wrapping_add(w);
        let S0 = rotate_right(a, 2) ^ rotate_right(a, 13) ^ rotate_right(a, 22);
        let maj = (a & b) ^ (a & c) ^ (b & c);
        let temp2 = S0.wrapping_add(maj);

        (a, b, c, d, e, f, g, h) = (
            temp1.wrapping_add(temp2),
            a,
            b,
            c,
            d.wrapping_add(temp1),
            e,
            f,
            g,
        );
    }
    for (s, x) in state.iter_mut().zip([a, b, c, d, e, f, g, h]) {
        *s = s.wrapping_add(x);
    }
    words.zeroize();
}

const SHA256_K: [u32; 64] = [
    0x428a2f98, 0x71374491, 0xb5c0fbcf, 0xe9b5dba5, 0x3956c25b, 0x59f111f1, 0x923f82a4, 0xab1c5ed5,
    0xd807aa98, 0x12835b01, 0x243185be, 0x550c7dc3, 0x72be5d74, 0x80deb1fe, 0x9bdc06a7, 0xc19bf174,
    0xe49b69c1, 0xefbe4786, 0x0fc19dc6, 0x240ca1cc, 0x2de92c6f, 0x4a7484aa, 0x5cb0a9dc, 0x76f988da,
    0x983e5152, 0xa831c66d, 0xb00327c8, 0xbf597fc7, 0xc6e00bf3, 0xd5a79147, 0x06ca6351, 0x14292967,
    0x27b70a85, 0x2e1b2138, 0x4d2c6dfc, 0x53380d13, 0x650a7354, 0x766a0abb, 0x81c2c92e, 0x92722c85,
    0xa2bfe8a1, 0xa81a664b, 0xc24b8b70, 0xc76c51a3, 0xd192e819, 0xd6990624, 0xf40e3585, 0x106aa070,
    0x19a4c116, 0x1e376c08, 0x2748774c, 0x34b0bcb5, 0x391c0cb3, 0x4ed8aa4a, 0x5b9cca4f, 0x682e6ff3,
    0x748f82ee, 0x78a5636f, 0x84c87814, 0x8cc70208, 0x90befffa, 0xa4506ceb, 0xbef9a3f7, 0xc67178f2,
];
