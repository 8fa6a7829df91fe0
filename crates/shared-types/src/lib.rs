pub mod booking;
pub mod client;
pub mod filter;
pub mod property;
pub mod role;

pub use booking::*;
pub use client::*;
pub use filter::*;
pub use property::*;
pub use role::*;
