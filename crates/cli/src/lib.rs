//! Console front end for the stock ledger: one-shot commands and the
//! scripted demo. Output is written to any `io::Write` so it can be tested.

pub mod commands;
pub mod demo;
