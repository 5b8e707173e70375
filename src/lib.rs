/// Desktop client for a remote PDF question-answering server: upload one
/// document, then chat about its content. All parsing and answering happens
/// server-side; this crate is the UI state machine plus two request flows.
pub mod common;
pub mod config;
pub mod network;
pub mod ui;
