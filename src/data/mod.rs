pub mod course;
pub mod seed;
pub mod user;
