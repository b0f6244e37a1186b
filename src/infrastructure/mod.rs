pub mod console;
pub mod scripted;
