//! HTTP connection layer — blocking `EdanHttp`.

pub mod client;

pub use client::EdanHttp;
