//! Integration test common infrastructure.
//!
//! Provides a scripted loopback server that records the lines a client
//! sends and pushes raw bytes back in arbitrary chunks.

pub mod server;

#[allow(unused_imports)]
pub use server::{ServerConn, TestServer};
