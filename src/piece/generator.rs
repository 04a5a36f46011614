use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use super::{Piece, PieceKind};

/// Hands out pieces with a random kind and a strictly increasing id.
#[derive(Debug)]
pub struct PieceGenerator<R: Rng> {
    rng: R,
    next_id: u64,
}

impl PieceGenerator<StdRng> {
    pub fn from_seed(seed: u64) -> PieceGenerator<StdRng> {
        PieceGenerator::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> PieceGenerator<R> {
    pub fn new(rng: R) -> PieceGenerator<R> {
        PieceGenerator { rng, next_id: 0 }
    }

    pub fn generate(&mut self) -> Piece {
        let kind = *PieceKind::ALL
            .choose(&mut self.rng)
            .unwrap_or(&PieceKind::I);
        let piece = Piece::new(kind, self.next_id);
        self.next_id += 1;
        piece
    }

    pub fn generated(&self) -> u64 {
        self.next_id
    }
}
