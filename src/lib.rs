mod max_heap;

pub use max_heap::{DrainMax, IntoIter, MaxHeap};
