//! FIFO queues: unbounded, fixed-capacity circular, and min-priority.

pub mod circular;
pub mod fifo;
pub mod priority;

pub use circular::CircularQueue;
pub use fifo::Queue;
pub use priority::PriorityQueue;
