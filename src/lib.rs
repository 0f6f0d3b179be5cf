//! autoagent: a natural-language automation agent.
//!
//! Takes one free-text command, classifies it into an automation category
//! (browser, code, api, scraper, file, general), dispatches it to exactly one
//! backend and returns a uniform `{response, tasks, execution}` envelope.
//!
//! See `DESIGN.md` for the module map.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod config;
pub mod logging;
pub mod types;

pub mod agent;
pub mod backends;
pub mod extractors;

pub mod server;
pub mod tools;
