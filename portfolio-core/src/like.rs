use crate::Ticket;

/// The request a like toggle sends to the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LikeAction {
    Like,
    Unlike,
}

impl LikeAction {
    const fn delta(self) -> i64 {
        match self {
            Self::Like => 1,
            Self::Unlike => -1,
        }
    }

    const fn liked(self) -> bool {
        matches!(self, Self::Like)
    }
}

/// How a pending request ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settlement {
    Committed,
    RolledBack,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PendingToggle {
    ticket: Ticket,
    action: LikeAction,
}

/// Like state of a single comment.
///
/// The committed part is what the server has confirmed. Every toggle
/// is applied optimistically on top of it until its request settles:
/// a successful request moves its delta into the committed part, a
/// failed one is dropped.
///
/// Toggles are not serialized. Two toggles in quick succession produce
/// two requests in flight and the server may apply them in any order,
/// so its counter can deviate from the displayed one until the next
/// full reload.
///
/// Deltas are summed unclamped and the result is only clamped
/// at zero for display, so the displayed count does not depend on
/// the order of the toggles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LikeState {
    liked: bool,
    count: i64,
    last_committed: Option<Ticket>,
    pending: Vec<PendingToggle>,
}

impl LikeState {
    pub fn new(liked: bool, count: u64) -> Self {
        Self {
            liked,
            count: i64::try_from(count).unwrap_or(i64::MAX),
            last_committed: None,
            pending: Vec::new(),
        }
    }

    /// The displayed like flag, i.e. the latest toggle that
    /// is neither rolled back nor overtaken by a newer commit.
    pub fn is_liked(&self) -> bool {
        self.pending
            .last()
            .filter(|toggle| Some(toggle.ticket) > self.last_committed)
            .map_or(self.liked, |toggle| toggle.action.liked())
    }

    /// The displayed number of likes.
    pub fn count(&self) -> u64 {
        let count = self
            .pending
            .iter()
            .fold(self.count, |count, toggle| count.saturating_add(toggle.action.delta()));
        u64::try_from(count).unwrap_or(0)
    }

    pub fn is_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    /// The server's count plus all committed deltas, may be negative.
    pub const fn committed_count(&self) -> i64 {
        self.count
    }

    /// Flips the displayed state and returns the request to send.
    pub fn toggle(&mut self, ticket: Ticket) -> LikeAction {
        let action = if self.is_liked() {
            LikeAction::Unlike
        } else {
            LikeAction::Like
        };
        self.pending.push(PendingToggle { ticket, action });
        action
    }

    /// Returns `None` if the ticket is unknown, e.g. because the
    /// comment list has been reloaded in the meantime.
    pub fn settle(&mut self, ticket: Ticket, succeeded: bool) -> Option<Settlement> {
        let index = self.pending.iter().position(|p| p.ticket == ticket)?;
        let PendingToggle { ticket, action } = self.pending.remove(index);
        if succeeded {
            // Counting is commutative, the flag is not.
            if Some(ticket) > self.last_committed {
                self.liked = action.liked();
                self.last_committed = Some(ticket);
            }
            self.count = self.count.saturating_add(action.delta());
            Some(Settlement::Committed)
        } else {
            Some(Settlement::RolledBack)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TicketCounter;

    #[test]
    fn like_is_applied_optimistically() {
        let mut tickets = TicketCounter::default();
        let mut state = LikeState::new(false, 3);
        let ticket = tickets.next();
        assert_eq!(state.toggle(ticket), LikeAction::Like);
        assert!(state.is_liked());
        assert_eq!(state.count(), 4);
        assert!(state.is_pending());
        assert_eq!(state.committed_count(), 3);

        assert_eq!(state.settle(ticket, true), Some(Settlement::Committed));
        assert!(!state.is_pending());
        assert_eq!(state.count(), 4);
        assert_eq!(state.committed_count(), 4);
    }

    #[test]
    fn like_then_unlike_restores_count() {
        let mut tickets = TicketCounter::default();
        let mut state = LikeState::new(false, 3);
        let like = tickets.next();
        let unlike = tickets.next();
        assert_eq!(state.toggle(like), LikeAction::Like);
        assert_eq!(state.toggle(unlike), LikeAction::Unlike);
        assert!(!state.is_liked());
        assert_eq!(state.count(), 3);

        state.settle(like, true);
        state.settle(unlike, true);
        assert!(!state.is_liked());
        assert_eq!(state.count(), 3);
    }

    #[test]
    fn failed_request_is_rolled_back() {
        let mut tickets = TicketCounter::default();
        let mut state = LikeState::new(true, 1);
        let ticket = tickets.next();
        assert_eq!(state.toggle(ticket), LikeAction::Unlike);
        assert_eq!(state.count(), 0);
        assert_eq!(state.settle(ticket, false), Some(Settlement::RolledBack));
        assert!(state.is_liked());
        assert_eq!(state.count(), 1);
    }

    #[test]
    fn double_toggle_settled_out_of_order() {
        let mut tickets = TicketCounter::default();
        let mut state = LikeState::new(false, 3);
        let like = tickets.next();
        let unlike = tickets.next();
        state.toggle(like);
        state.toggle(unlike);

        // The unlike response arrives first.
        state.settle(unlike, true);
        assert!(!state.is_liked());
        assert_eq!(state.count(), 3);
        assert_eq!(state.committed_count(), 2);
        state.settle(like, true);
        assert!(!state.is_liked());
        assert_eq!(state.count(), 3);
        assert!(!state.is_pending());
    }

    #[test]
    fn rollback_of_latest_toggle_reveals_previous_intent() {
        let mut tickets = TicketCounter::default();
        let mut state = LikeState::new(false, 3);
        let like = tickets.next();
        let unlike = tickets.next();
        state.toggle(like);
        state.toggle(unlike);

        state.settle(unlike, false);
        assert!(state.is_liked());
        assert_eq!(state.count(), 4);
        state.settle(like, true);
        assert!(state.is_liked());
        assert_eq!(state.count(), 4);
    }

    #[test]
    fn double_toggle_with_failed_first_request() {
        let mut tickets = TicketCounter::default();
        let mut state = LikeState::new(false, 3);
        let like = tickets.next();
        let unlike = tickets.next();
        state.toggle(like);
        state.toggle(unlike);

        // Only the unlike reaches the server, which decrements its counter.
        state.settle(like, false);
        assert_eq!(state.count(), 2);
        state.settle(unlike, true);
        assert!(!state.is_liked());
        assert_eq!(state.count(), 2);
    }

    #[test]
    fn count_never_underflows() {
        let mut tickets = TicketCounter::default();
        let mut state = LikeState::new(true, 0);
        let ticket = tickets.next();
        state.toggle(ticket);
        assert_eq!(state.count(), 0);
        state.settle(ticket, true);
        assert_eq!(state.count(), 0);
        assert_eq!(state.committed_count(), -1);
    }

    #[test]
    fn unlike_then_like_at_zero_restores_count() {
        let mut tickets = TicketCounter::default();
        let mut state = LikeState::new(true, 0);
        let unlike = tickets.next();
        let like = tickets.next();
        assert_eq!(state.toggle(unlike), LikeAction::Unlike);
        assert_eq!(state.count(), 0);
        assert_eq!(state.toggle(like), LikeAction::Like);
        assert!(state.is_liked());
        assert_eq!(state.count(), 0);

        state.settle(like, true);
        assert_eq!(state.count(), 0);
        state.settle(unlike, true);
        assert!(state.is_liked());
        assert_eq!(state.count(), 0);
        assert_eq!(state.committed_count(), 0);
    }

    #[test]
    fn unknown_ticket() {
        let mut tickets = TicketCounter::default();
        let mut state = LikeState::new(false, 0);
        assert_eq!(state.settle(tickets.next(), true), None);
    }
}
