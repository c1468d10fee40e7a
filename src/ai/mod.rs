//! The AI opponent: partial memory of revealed cells and a greedy policy.

pub mod memory;
pub mod policy;

pub use memory::AiMemory;
pub use policy::select_pair;
