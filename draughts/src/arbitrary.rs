use quickcheck::{Arbitrary, Gen};

use crate::{Cell, BOARD_SIZE};

/// A sequence of choices for driving a game forward.
///
/// Each pair picks, by index modulo the number of options, one of the pieces
/// that can move and then one of its targets.
#[derive(Clone, Debug)]
pub struct Playout(pub Vec<(u8, u8)>);

impl Arbitrary for Playout {
    fn arbitrary(g: &mut Gen) -> Self {
        Playout(Vec::arbitrary(g))
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        Box::new(self.0.shrink().map(Playout))
    }
}

// Always on the board
impl Arbitrary for Cell {
    fn arbitrary(g: &mut Gen) -> Self {
        let x = (u8::arbitrary(g) % BOARD_SIZE as u8) as i8;
        let y = (u8::arbitrary(g) % BOARD_SIZE as u8) as i8;
        Cell::new(x, y)
    }
}
