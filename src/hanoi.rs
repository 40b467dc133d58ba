//! Tower of Hanoi move generator.

use serde::Serialize;
use std::fmt;

/// A single disk move between two named pegs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Move {
    pub disk: u32,
    pub from: String,
    pub to: String,
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move disk {} from {} to {}", self.disk, self.from, self.to)
    }
}

/// Moves that transfer `disks` disks from `source` to `destination` via `auxiliary`.
///
/// Disk 1 is the smallest. Zero disks need no moves.
pub fn tower_of_hanoi(disks: u32, source: &str, destination: &str, auxiliary: &str) -> Vec<Move> {
    let mut moves = Vec::new();
    solve(disks, source, destination, auxiliary, &mut moves);
    log::debug!("Solved {} disks in {} moves", disks, moves.len());
    moves
}

fn solve(disk: u32, source: &str, destination: &str, auxiliary: &str, moves: &mut Vec<Move>) {
    if disk == 0 {
        return;
    }
    solve(disk - 1, source, auxiliary, destination, moves);

    let step = Move {
        disk,
        from: source.to_string(),
        to: destination.to_string(),
    };
    log::trace!("{}", step);
    moves.push(step);

    solve(disk - 1, auxiliary, destination, source, moves);
}

/// Minimum number of moves for `disks` disks, `2^disks - 1`.
///
/// `None` when the count does not fit in a `u64`.
pub fn minimum_moves(disks: u32) -> Option<u64> {
    match disks {
        64 => Some(u64::MAX),
        _ => 1u64.checked_shl(disks).map(|power| power - 1),
    }
}
