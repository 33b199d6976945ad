// strgen state managers
// Managers own mutable session state: which character sets are enabled and the history log.

pub mod charset_registry;
pub mod history_manager;
