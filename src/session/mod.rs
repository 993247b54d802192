pub mod clock;
pub mod input;
pub mod mistakes;
pub mod result;
pub mod settings;
