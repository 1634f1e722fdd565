pub mod case;
pub mod user;
