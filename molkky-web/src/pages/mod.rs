pub mod history;
pub mod not_found;
pub mod play;
pub mod result;
pub mod setup;
