pub mod client;

pub use client::{GenerationBackend, HttpBackend, DEFAULT_BASE_URL};
