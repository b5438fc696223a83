//! Ollama-compatible model server adapter
//!
//! Implements [`ChatTransport`](switchboard_application::ChatTransport) over HTTP.

pub mod transport;
