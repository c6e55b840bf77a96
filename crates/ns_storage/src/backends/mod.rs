pub mod filesystem;
pub mod memory;

pub use filesystem::FileAudioStore;
pub use memory::MemoryAudioStore;
