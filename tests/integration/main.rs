//! Integration tests for pedview

mod helpers;

mod cli_test;
mod frame_source_test;
mod session_test;
