//! Kit module: voice tables and the generation driver.

pub mod generate;
pub mod table;

// Re-export commonly used items
pub use generate::{generate_kit, generate_voice, KitReport, VoiceFile};
pub use table::{builtin_kit, load_kit, Kit};
