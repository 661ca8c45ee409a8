//! pabotscope
//!
//! Reconstructs how many pabot workers were busy over the course of a
//! parallel Robot Framework run, and which tests took the longest, from the
//! console log pabot prints.
//!
//! The pipeline is:
//! log text → [`parser`] → events → [`timeline`] → intervals and concurrency
//! samples → [`output`] → histogram and ranking table.
//!
//! ## Getting Started
//!
//! ```bash
//! pabot --processes 8 tests/ | tee pabot.log
//! pabotscope pabot.log --top 20
//! ```

pub mod commands;
pub mod output;
pub mod parser;
pub mod timeline;
pub mod utils;
