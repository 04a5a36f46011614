pub mod action;

use std::io::{self, BufRead, Write};

use log::{debug, info, warn};
use rand::Rng;

use crate::piece::generator::PieceGenerator;
use crate::piece::Piece;
use crate::queue::{CircularQueue, QueueError, QUEUE_CAPACITY};

use self::action::Action;

const MENU: &str = "Options:
1 - Play piece (dequeue)
2 - Insert new piece (enqueue)
0 - Exit
Choose an option: ";

/// Upcoming pieces of one game, driven by menu choices.
pub struct Session<R: Rng> {
    queue: CircularQueue<Piece, QUEUE_CAPACITY>,
    generator: PieceGenerator<R>,
}

impl<R: Rng> Session<R> {
    pub fn new(generator: PieceGenerator<R>) -> Session<R> {
        Session {
            queue: CircularQueue::default(),
            generator,
        }
    }

    /// Enqueues up to `pieces` new pieces, stopping early once full.
    pub fn fill(&mut self, pieces: usize) {
        for _ in 0..pieces {
            if self.insert_piece().is_err() {
                break;
            }
        }
        debug!(
            "Queue filled {}/{} with ids {:?}, {} ids issued",
            self.queue.len(),
            self.queue.capacity(),
            self.snapshot().iter().map(Piece::id).collect::<Vec<u64>>(),
            self.generator.generated()
        );
    }

    pub fn play_piece(&mut self) -> Result<Piece, QueueError> {
        let piece = self.queue.dequeue()?;
        info!("Played piece {}", piece);
        Ok(piece)
    }

    /// Generates and enqueues a piece. No id is spent when the queue is full.
    pub fn insert_piece(&mut self) -> Result<Piece, QueueError> {
        if self.queue.is_full() {
            return Err(QueueError::Full());
        }

        let piece = self.generator.generate();
        self.queue.enqueue(piece)?;
        info!("Inserted piece {}", piece);
        Ok(piece)
    }

    pub fn snapshot(&self) -> Vec<Piece> {
        self.queue.peek_all()
    }

    pub fn render_queue(&self) -> String {
        if self.queue.is_empty() {
            return "Queue: (empty)".to_owned();
        }

        let pieces = self
            .queue
            .peek_all()
            .iter()
            .map(|piece| piece.to_string())
            .collect::<Vec<String>>()
            .join(" ");
        format!("Queue: {pieces}")
    }

    pub fn run<I: BufRead, O: Write>(&mut self, input: &mut I, output: &mut O) -> io::Result<()> {
        loop {
            writeln!(output, "\n=== Upcoming pieces ===")?;
            writeln!(output, "{}", self.render_queue())?;
            if let Some(next) = self.queue.front() {
                writeln!(output, "Next piece: {next}")?;
            }
            write!(output, "\n{MENU}")?;
            output.flush()?;

            let mut line = Vec::new();
            if input.read_until(b'\n', &mut line)? == 0 {
                info!("Input closed, leaving game");
                writeln!(output)?;
                return Ok(());
            }

            match Action::parse(&String::from_utf8_lossy(&line)) {
                Action::Exit => {
                    writeln!(output, "Leaving the game.")?;
                    return Ok(());
                }
                Action::PlayPiece => match self.play_piece() {
                    Ok(piece) => writeln!(output, "Played piece {piece}")?,
                    Err(err) => report(output, &err)?,
                },
                Action::InsertPiece => match self.insert_piece() {
                    Ok(piece) => writeln!(output, "Inserted piece {piece}")?,
                    Err(err) => report(output, &err)?,
                },
                Action::Invalid(choice) => {
                    warn!("Invalid menu option {:?}", choice);
                    writeln!(output, "Warning: invalid option, try again.")?;
                }
            }
        }
    }
}

fn report<O: Write>(output: &mut O, err: &QueueError) -> io::Result<()> {
    warn!("{}", err);
    writeln!(output, "Warning: {err}.")
}
