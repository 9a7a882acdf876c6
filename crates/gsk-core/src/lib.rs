//! # gsk-core
//!
//! Core library for the `gsk` program analysis client.
//!
//! This crate provides:
//! - Hex dump rendering for memory read from the analysis server
//! - Hex address parsing and formatting
//! - The `AnalysisService` interface and its HTTP implementation
//! - Client configuration and error types

pub mod address;
pub mod config;
pub mod error;
pub mod hexdump;
pub mod network;
pub mod service;

pub use address::{format_hex_address, parse_hex_address};
pub use config::{ClientConfig, ClientConfigBuilder, DEFAULT_SERVER_URL};
pub use error::{Error, Result};
pub use hexdump::{BYTES_PER_LINE, ByteBlock, DumpLine, format_hex_dump, printable_char};
pub use network::HttpClient;
pub use service::{
    AnalysisService, DEFAULT_LIST_LIMIT, DEFAULT_READ_LENGTH, LabelScope, MAX_READ_LENGTH,
    validate_read_length,
};
