//! I/O utilities for in-memory texture streams
//!
//! This module provides the reader trait and byte order helpers shared by
//! the header parser and the pixel decoder.

pub mod seekable;
pub mod byte_order;
