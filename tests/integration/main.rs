//! Integration tests for ticket-kb.

mod helpers;

mod batch_test;
mod cli_test;
mod pipeline_test;
