pub mod clipboard;
pub mod format;
