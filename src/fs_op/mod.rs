//! Filesystem-path helpers. Everything here is lexical; no I/O happens.

pub mod path;
