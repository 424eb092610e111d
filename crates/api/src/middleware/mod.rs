//! Request middleware and the extractors that depend on it.

pub mod session;
