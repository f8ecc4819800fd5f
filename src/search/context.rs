use crate::moves::types::Move;

/// History table indexed by (piece moved, to-square) rather than (from, to): the piece that
/// moves there matters more for quiet-move ordering than where it came from.
pub type HistoryTable = [[i32; 64]; 6];

pub struct SearchContext {
    pub killer_moves: Vec<[Option<Move>; 2]>,
    pub history: HistoryTable,
}

impl Default for SearchContext {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchContext {
    pub fn new() -> Self {
        Self {
            killer_moves: vec![[None; 2]; 64],
            history: [[0; 64]; 6],
        }
    }

    pub fn update_killer(&mut self, ply: usize, mv: Move) {
        if self.killer_moves[ply][0] != Some(mv) {
            self.killer_moves[ply][1] = self.killer_moves[ply][0];
            self.killer_moves[ply][0] = Some(mv);
        }
    }

    /// Rewards the cutoff move with a depth² bonus and applies geometric decay to every other
    /// quiet move tried at this node, so history scores stay bounded without an explicit cap.
    pub fn update_history(&mut self, mv: Move, depth: i32, other_quiets: &[Move]) {
        let bonus = (depth * depth).min(400);
        self.history[mv.piece as usize][mv.to.index() as usize] += bonus;

        for &other in other_quiets {
            if other == mv {
                continue;
            }
            let entry = &mut self.history[other.piece as usize][other.to.index() as usize];
            *entry -= *entry / 8;
        }
    }
}
