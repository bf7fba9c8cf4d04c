use crate::{Board, Cell, BOARD_SIZE};

/// Draws the board as text, one row per line.
///
/// Uncrowned pieces are `b` and `w`, crowned ones `B` and `W`. Empty dark
/// squares are shown as `·`, light squares are blank.
pub fn visualize_board(board: &Board) -> String {
    // Column numbers
    let mut result = String::from("    ");
    for x in 0..BOARD_SIZE {
        result += &format!("{} ", x);
    }
    // Draw the top of the box
    result += "\n   ╭";
    for _ in 0..BOARD_SIZE {
        result += "──";
    }
    result += "╮\n";

    for y in 0..BOARD_SIZE {
        result += &format!("{:>2} │", y);
        for x in 0..BOARD_SIZE {
            let cell = Cell::new(x, y);
            let symbol = match board.occupant(cell) {
                Some(piece) => piece.symbol(),
                None if cell.is_dark() => '·',
                None => ' ',
            };
            result.push(symbol);
            result.push(' ');
        }
        result += "│\n";
    }

    // Draw the bottom of the box
    result += "   ╰";
    for _ in 0..BOARD_SIZE {
        result += "──";
    }
    result += "╯";
    result
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", visualize_board(self))
    }
}
