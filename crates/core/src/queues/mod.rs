pub mod fifo_drop_oldest_queue;
pub mod latest1_queue;

pub use fifo_drop_oldest_queue::*;
pub use latest1_queue::*;

pub enum QueueKind {
    /// Coalescing slot: only the newest undelivered value survives.
    Latest1,
    /// Bounded buffer that sheds the oldest entry under pressure.
    FifoDropOldest { capacity: usize },
}
