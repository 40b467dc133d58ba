pub mod config;
pub mod error;
pub mod graph;
pub mod hanoi;
pub mod queue;
pub mod session;
pub mod sieve;
pub mod stack;

pub use config::Config;
pub use error::{AlgoError, Result};
pub use graph::Graph;
pub use hanoi::{minimum_moves, tower_of_hanoi, Move};
pub use queue::{CircularQueue, PriorityQueue, Queue};
pub use session::{Command, Outcome, Session, SessionKind};
pub use sieve::{count_primes, segmented_sieve, segmented_sieve_with, sieve_of_eratosthenes};
pub use stack::{decimal_to_binary, is_balanced, reverse_string, Stack};
