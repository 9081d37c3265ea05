pub mod SHA1;
pub mod SHA2;


use crate::Integrity::Merkle_Damgard::CHUNK_SIZE;

/// Loads the 16 big-endian words of `chunk` into the front of a message
/// schedule; the caller expands the remaining `ROUNDS - 16` words.
fn message_schedule<const ROUNDS: usize>(chunk: &[u8; CHUNK_SIZE]) -> [u32; ROUNDS] {
    let mut words = [0u32; ROUNDS];
    for (word, bytes) in words.iter_mut().zip(chunk.chunks_exact(4)) {
        *word = u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
    }
    words
}
