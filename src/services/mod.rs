// strgen services
// Stateless or externally-backed functionality: generation, settings, clipboard, scheduling.

pub mod clipboard;
pub mod generator;
pub mod scheduler;
pub mod settings_engine;
