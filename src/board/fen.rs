use super::fen_tables::{CHAR_TO_PC, PC_TO_CHAR};
use super::{Board, CASTLE_BK, CASTLE_BQ, CASTLE_WK, CASTLE_WQ, Color, Piece};
use crate::square::Square;

impl Board {
    /// Resets `self` to the position described by `fen`, a standard
    /// six-field Forsyth-Edwards string. On a malformed string, `self` is
    /// left unchanged and an explanatory error is returned.
    pub fn set_fen(&mut self, fen: &str) -> Result<(), String> {
        let parsed = parse_fen(fen)?;
        *self = parsed;
        Ok(())
    }

    /// Renders the current position as a FEN string.
    pub fn to_fen(&self) -> String {
        let mut placement = String::new();
        for rank in (0..8).rev() {
            let mut empty_run = 0u8;
            for file in 0..8 {
                let idx = (rank * 8 + file) as usize;
                match self.piece_at(Square::from_index(idx as u8)) {
                    None => empty_run += 1,
                    Some((color, piece)) => {
                        if empty_run > 0 {
                            placement.push_str(&empty_run.to_string());
                            empty_run = 0;
                        }
                        let pc_idx = (color as usize) * 6 + (piece as usize);
                        placement.push(PC_TO_CHAR[pc_idx]);
                    }
                }
            }
            if empty_run > 0 {
                placement.push_str(&empty_run.to_string());
            }
            if rank != 0 {
                placement.push('/');
            }
        }

        let side = match self.side_to_move {
            Color::White => "w",
            Color::Black => "b",
        };

        let mut castling = String::new();
        if self.castling_rights & CASTLE_WK != 0 {
            castling.push('K');
        }
        if self.castling_rights & CASTLE_WQ != 0 {
            castling.push('Q');
        }
        if self.castling_rights & CASTLE_BK != 0 {
            castling.push('k');
        }
        if self.castling_rights & CASTLE_BQ != 0 {
            castling.push('q');
        }
        if castling.is_empty() {
            castling.push('-');
        }

        let ep = self
            .en_passant
            .map(|sq| sq.to_string())
            .unwrap_or_else(|| "-".to_string());

        format!(
            "{} {} {} {} {} {}",
            placement, side, castling, ep, self.halfmove_clock, self.fullmove_number
        )
    }
}

fn parse_fen(fen: &str) -> Result<Board, String> {
    let fields: Vec<&str> = fen.split_whitespace().collect();
    if fields.len() < 4 {
        return Err(format!(
            "FEN must have at least 4 fields, got {}: `{}`",
            fields.len(),
            fen
        ));
    }

    let mut board = Board::new_empty();
    parse_placement(fields[0], &mut board)?;

    board.side_to_move = match fields[1] {
        "w" => Color::White,
        "b" => Color::Black,
        other => return Err(format!("invalid side-to-move field: `{}`", other)),
    };

    board.castling_rights = parse_castling(fields[2])?;

    board.en_passant = match fields[3] {
        "-" => None,
        s => Some(
            Square::from_algebraic(s).ok_or_else(|| format!("invalid en-passant square: `{}`", s))?,
        ),
    };

    board.halfmove_clock = fields.get(4).and_then(|s| s.parse().ok()).unwrap_or(0);
    board.fullmove_number = fields.get(5).and_then(|s| s.parse().ok()).unwrap_or(1);

    board.history.clear();
    board.refresh_zobrist();

    Ok(board)
}

fn parse_placement(placement: &str, board: &mut Board) -> Result<(), String> {
    let ranks: Vec<&str> = placement.split('/').collect();
    if ranks.len() != 8 {
        return Err(format!(
            "piece placement must have 8 ranks, got {}: `{}`",
            ranks.len(),
            placement
        ));
    }

    for (rank_from_top, rank_str) in ranks.iter().enumerate() {
        let rank = 7 - rank_from_top;
        let mut file = 0usize;
        for ch in rank_str.chars() {
            if let Some(skip) = ch.to_digit(10) {
                file += skip as usize;
                if file > 8 {
                    return Err(format!("rank `{}` overflows the board", rank_str));
                }
                continue;
            }

            if file >= 8 {
                return Err(format!("rank `{}` overflows the board", rank_str));
            }

            let (piece, color) = CHAR_TO_PC[ch as usize]
                .ok_or_else(|| format!("invalid piece glyph `{}` in `{}`", ch, rank_str))?;

            let sq = Square::from_file_rank(file as u8, rank as u8);
            let bb = board.bb(color, piece) | (1u64 << sq.index());
            board.set_bb(color, piece, bb);
            file += 1;
        }

        if file != 8 {
            return Err(format!("rank `{}` does not cover 8 files", rank_str));
        }
    }

    Ok(())
}

fn parse_castling(field: &str) -> Result<u8, String> {
    if field == "-" {
        return Ok(0);
    }
    let mut rights = 0u8;
    for ch in field.chars() {
        rights |= match ch {
            'K' => CASTLE_WK,
            'Q' => CASTLE_WQ,
            'k' => CASTLE_BK,
            'q' => CASTLE_BQ,
            other => return Err(format!("invalid castling glyph `{}`", other)),
        };
    }
    Ok(rights)
}
