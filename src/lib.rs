//! Diagnostic WebSocket listener for a GhostMesh node.
//!
//! Attaches to the node's dashboard server at `ws://{host}:{port}/ws` and
//! prints every network event it broadcasts until the connection closes.

pub mod event;
pub mod listener;
