//! Golden tests for the gateway pipeline.
//!
//! Every test starts a real axum server on a random port and drives
//! the full client stack through actual HTTP requests, recording the
//! side effects the response interceptor fires. If classification,
//! decoding or session handling changes, these break and show the diff.

#[cfg(test)]
mod harness;
#[cfg(test)]
mod pipeline_test;
