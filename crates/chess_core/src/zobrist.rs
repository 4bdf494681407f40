//! Zobrist keys for position hashing.
//!
//! The controller keeps a hash per committed position to detect threefold
//! repetition; keys are fixed at compile time so hashes are reproducible
//! across runs.

use crate::types::{Piece, Square};

pub struct ZobristKeys {
    /// `[color][kind][square]`
    pieces: [[[u64; 64]; 6]; 2],
    pub side_to_move: u64,
    /// K, Q, k, q
    castling: [u64; 4],
    /// En-passant file a..h
    en_passant: [u64; 8],
}

/// splitmix64 step: returns the next state and its output.
const fn splitmix64(state: u64) -> (u64, u64) {
    let state = state.wrapping_add(0x9E3779B97F4A7C15);
    let mut z = state;
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58476D1CE4E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D049BB133111EB);
    (state, z ^ (z >> 31))
}

impl ZobristKeys {
    const fn generate(seed: u64) -> Self {
        let mut state = seed;
        let mut keys = ZobristKeys {
            pieces: [[[0; 64]; 6]; 2],
            side_to_move: 0,
            castling: [0; 4],
            en_passant: [0; 8],
        };

        let mut i = 0;
        while i < 2 * 6 * 64 {
            let (next, key) = splitmix64(state);
            state = next;
            keys.pieces[i / 384][(i / 64) % 6][i % 64] = key;
            i += 1;
        }

        let (next, key) = splitmix64(state);
        state = next;
        keys.side_to_move = key;

        let mut i = 0;
        while i < 4 {
            let (next, key) = splitmix64(state);
            state = next;
            keys.castling[i] = key;
            i += 1;
        }

        let mut i = 0;
        while i < 8 {
            let (next, key) = splitmix64(state);
            state = next;
            keys.en_passant[i] = key;
            i += 1;
        }

        keys
    }

    #[inline(always)]
    pub fn piece_key(&self, piece: Piece, sq: Square) -> u64 {
        self.pieces[piece.color.idx()][piece.kind.idx()][sq.index()]
    }

    #[inline(always)]
    pub fn castling_key(&self, index: usize) -> u64 {
        self.castling[index]
    }

    #[inline(always)]
    pub fn ep_key(&self, file: u8) -> u64 {
        self.en_passant[file as usize]
    }

    /// Every key in a fixed order; used to check for collisions.
    pub fn all_keys(&self) -> impl Iterator<Item = u64> + '_ {
        self.pieces
            .iter()
            .flatten()
            .flatten()
            .copied()
            .chain(std::iter::once(self.side_to_move))
            .chain(self.castling.iter().copied())
            .chain(self.en_passant.iter().copied())
    }
}

pub static ZOBRIST: ZobristKeys = ZobristKeys::generate(0x5EED_C0DE_2024_0001);

#[cfg(test)]
#[path = "zobrist_tests.rs"]
mod zobrist_tests;
