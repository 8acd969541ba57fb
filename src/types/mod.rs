//! Type definitions

pub mod client;
pub mod job;
pub mod route;

pub use client::*;
pub use job::*;
pub use route::*;
