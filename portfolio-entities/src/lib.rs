#![deny(missing_debug_implementations)]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(test, deny(warnings))]

//! # portfolio-entities
//!
//! Reusable, agnostic domain entities of the portfolio comment section.
//!
//! The entities only contain generic functionality that does not reveal any
//! application-specific business logic.

pub mod comment;
pub mod id;
pub mod language;
pub mod login;
pub mod query;
pub mod time;
