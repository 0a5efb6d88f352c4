//! Core scanning primitives
//!
//! This module contains the fundamental building blocks:
//! - Scanner: SIMD-accelerated delimiter detection using memchr
//! - Tokenizer: single-pass state machine driving a handler
//! - Handler: SaxHandler / TrySaxHandler traits the tokenizer reports to
//! - Attributes: lazy attribute extraction
//! - Encoding: UTF-16 detection and conversion to UTF-8

pub mod attributes;
pub mod encoding;
pub mod handler;
pub mod scanner;
pub mod tokenizer;
