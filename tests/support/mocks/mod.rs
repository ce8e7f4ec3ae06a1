pub mod repos;
pub mod security;
pub mod time;
