//! Frontend pipeline
//!
//! Source text flows through the [`lexer`] into the [`parser`], which builds
//! a [`parser::Program`] and collects syntax errors along the way.

pub mod lexer;
pub mod parser;
