pub mod auth;
pub mod cafe;
pub mod city;
pub mod like;
pub mod user;

mod router;
pub use router::get_router;
