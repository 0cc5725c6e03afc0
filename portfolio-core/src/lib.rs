//! Headless view model of the comment section.
//!
//! Everything in here is synchronous: callers perform the I/O and feed the
//! results back. That keeps the optimistic update logic independent of the
//! browser and testable on the host.

mod error;
mod fragment;
mod like;
mod list;
mod new_comment;
mod translation;

pub use self::{error::*, fragment::*, like::*, list::*, new_comment::*, translation::*};

pub use portfolio_entities as entities;

/// Identifies an in-flight request so that its response
/// can be matched to the state that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

#[derive(Debug, Default)]
struct TicketCounter(u64);

impl TicketCounter {
    fn next(&mut self) -> Ticket {
        self.0 += 1;
        Ticket(self.0)
    }
}
