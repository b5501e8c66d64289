//! Tests for the texture container pipeline

pub(crate) mod test_utils;
mod reader_tests;
mod decoder_tests;
