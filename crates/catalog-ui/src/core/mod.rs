//! Core, DOM-free primitives and helpers for the catalog UI.
pub mod auth;
pub mod catalog;
pub mod config;
pub mod controller;
pub mod debounce;
pub mod error;
pub mod logic;
pub mod scroll;
pub mod store;
