//! One-time construction of the rook/bishop magic attack tables.
//!
//! For each square we enumerate every blocker subset of the square's
//! "relevancy mask" (the squares a slider's attack ray can actually be
//! blocked from, excluding the board edge), compute the true attack
//! bitboard for that subset by ray-scanning, then search for a magic
//! multiplier that hashes every subset to a collision-free index.

use super::attacks::{bishop_attacks_per_square, rook_attacks_per_square};
use super::search::find_magic_number_for_square;
use super::structs::{BishopMagicTables, MagicEntry, MagicTables, RookMagicTables};
use rand::SeedableRng;
use rand::rngs::StdRng;

const FILE_A: u64 = 0x0101_0101_0101_0101;
const FILE_H: u64 = 0x8080_8080_8080_8080;
const RANK_1: u64 = 0x0000_0000_0000_00FF;
const RANK_8: u64 = 0xFF00_0000_0000_0000;
const EDGES: u64 = FILE_A | FILE_H | RANK_1 | RANK_8;

/// Which RNG seed to build the magic tables with. The seed only affects how
/// quickly a valid magic is found, not the resulting attack tables.
#[derive(Debug, Clone, Copy)]
pub enum MagicTableSeed {
    Fixed(u64),
    FromEntropy,
}

fn relevancy_mask_rook(square: usize) -> u64 {
    rook_attacks_per_square(square, 0) & !EDGES_FOR(square, true)
}

fn relevancy_mask_bishop(square: usize) -> u64 {
    bishop_attacks_per_square(square, 0) & !EDGES
}

/// Rook rays still end one square short of the edge they're heading towards,
/// but the file/rank the square itself sits on is not an edge for that ray.
#[allow(non_snake_case)]
fn EDGES_FOR(square: usize, _rook: bool) -> u64 {
    let rank = square / 8;
    let file = square % 8;
    let mut mask = 0u64;
    if rank != 0 {
        mask |= RANK_1;
    }
    if rank != 7 {
        mask |= RANK_8;
    }
    if file != 0 {
        mask |= FILE_A;
    }
    if file != 7 {
        mask |= FILE_H;
    }
    mask
}

/// Enumerates every subset of `mask` via the standard carry-rippler trick.
fn subsets_of(mask: u64) -> Vec<u64> {
    let mut subsets = Vec::with_capacity(1 << mask.count_ones());
    let mut subset: u64 = 0;
    loop {
        subsets.push(subset);
        subset = subset.wrapping_sub(mask) & mask;
        if subset == 0 {
            break;
        }
    }
    subsets
}

fn build_entry(
    square: usize,
    mask: u64,
    attacks_of: impl Fn(usize, u64) -> u64,
    rng: &mut StdRng,
) -> Result<MagicEntry, String> {
    let blockers = subsets_of(mask);
    let attacks: Vec<u64> = blockers.iter().map(|&b| attacks_of(square, b)).collect();

    let bits = mask.count_ones();
    let shift = 64 - bits;
    let magic = find_magic_number_for_square(&blockers, &attacks, shift, rng)?;

    let mut table = vec![0u64; 1usize << bits];
    for (&b, &a) in blockers.iter().zip(attacks.iter()) {
        let index = ((b.wrapping_mul(magic)) >> shift) as usize;
        table[index] = a;
    }

    Ok(MagicEntry {
        magic,
        shift,
        mask,
        table: table.into_boxed_slice(),
    })
}

pub fn generate_magic_tables(seed: MagicTableSeed) -> Result<MagicTables, String> {
    let mut rng = match seed {
        MagicTableSeed::Fixed(s) => StdRng::seed_from_u64(s),
        MagicTableSeed::FromEntropy => {
            let mut bytes = [0u8; 32];
            use rand::RngCore;
            rand::rng().fill_bytes(&mut bytes);
            StdRng::from_seed(bytes)
        }
    };

    let mut rook_entries = Vec::with_capacity(64);
    let mut bishop_entries = Vec::with_capacity(64);

    for square in 0..64 {
        let rook_mask = relevancy_mask_rook(square);
        rook_entries.push(build_entry(
            square,
            rook_mask,
            rook_attacks_per_square,
            &mut rng,
        )?);

        let bishop_mask = relevancy_mask_bishop(square);
        bishop_entries.push(build_entry(
            square,
            bishop_mask,
            bishop_attacks_per_square,
            &mut rng,
        )?);
    }

    Ok(MagicTables {
        rook: RookMagicTables {
            entries: rook_entries,
        },
        bishop: BishopMagicTables {
            entries: bishop_entries,
        },
    })
}
