pub mod codec;
pub mod file;
pub mod memory;
pub mod traits;

// Re-export
pub use codec::STORAGE_KEY;
pub use file::{default_data_dir, FileWorkoutRepository};
pub use memory::MemoryWorkoutRepository;
pub use traits::WorkoutRepository;
