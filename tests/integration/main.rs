//! Integration tests for panestyle

mod cli_test;
mod config_test;
mod helpers;
mod styles_test;
