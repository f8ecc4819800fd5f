//! Magic-bitboard sliding attack tables for bishops and rooks.
//!
//! Tables are generated once (see [`precompute`]) behind a process-wide
//! [`loader::load_magic_tables`] cache, optionally deserialized from a
//! precomputed blob when built with the `load_magic` feature.

pub mod attacks;
pub mod loader;
pub mod precompute;
pub mod structs;

pub use attacks::{
    bishop_attacks_per_square, get_king_attacks, get_knight_attacks, rook_attacks_per_square,
};
pub use structs::{BishopMagicTables, MagicEntry, MagicTables, RookMagicTables};
