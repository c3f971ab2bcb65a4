#![no_std]

pub mod access;
pub mod errors;
pub mod events;
pub mod types;
