//! Process-wide cache for the magic attack tables.
//!
//! Generating the tables from scratch takes a noticeable fraction of a
//! second, so every caller should go through [`load_magic_tables`] rather
//! than calling [`crate::moves::magic::precompute::generate_magic_tables`]
//! directly.

use super::precompute::{MagicTableSeed, generate_magic_tables};
use super::structs::MagicTables;
use once_cell::sync::OnceCell;

/// Default seed used to search for magic numbers. The seed only affects how
/// quickly a collision-free magic is found, never the resulting attack
/// tables, so pinning it keeps table construction reproducible across runs
/// and platforms.
const DEFAULT_MAGIC_SEED: u64 = 0x2545_F491_4F6C_DD1D;

#[cfg(feature = "load_magic")]
const PRECOMPUTED_MAGIC_PATH: &str = "magic_tables.bin";

/// Returns the shared magic attack tables, building them on first use.
///
/// With the `load_magic` feature enabled, a precomputed, `bincode`-encoded
/// table is read from [`PRECOMPUTED_MAGIC_PATH`] if present; otherwise (or
/// without the feature) the tables are generated in-process from
/// [`DEFAULT_MAGIC_SEED`].
pub fn load_magic_tables() -> MagicTables {
    static TABLES: OnceCell<MagicTables> = OnceCell::new();
    TABLES
        .get_or_init(|| {
            #[cfg(feature = "load_magic")]
            {
                if let Some(tables) = load_precomputed(PRECOMPUTED_MAGIC_PATH) {
                    return tables;
                }
            }
            generate_magic_tables(MagicTableSeed::Fixed(DEFAULT_MAGIC_SEED))
                .expect("magic number search should always converge for a fixed seed")
        })
        .clone()
}

#[cfg(feature = "load_magic")]
fn load_precomputed(path: &str) -> Option<MagicTables> {
    let bytes = std::fs::read(path).ok()?;
    bincode::deserialize(&bytes).ok()
}
