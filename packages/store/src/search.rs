//! Search request ordering.
//!
//! Responses can arrive out of order. Each submitted query takes a ticket and
//! only the holder of the latest ticket may render its results.

/// Ticket for one submitted query.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct SearchTicket(u64);

/// What to do with a query that was just submitted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchPlan {
    /// Blank query: show the "no results" notice without a request.
    NoResults,
    /// Issue the request and render it only if `ticket` is still current.
    Fetch { ticket: SearchTicket, query: String },
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SearchSequencer {
    latest: u64,
}

impl SearchSequencer {
    /// Register a query. Any earlier ticket becomes stale, including for a
    /// blank query.
    pub fn submit(&mut self, query: &str) -> SearchPlan {
        self.latest += 1;
        if query.is_empty() {
            return SearchPlan::NoResults;
        }
        SearchPlan::Fetch {
            ticket: SearchTicket(self.latest),
            query: query.to_string(),
        }
    }

    pub fn is_current(&self, ticket: SearchTicket) -> bool {
        ticket.0 == self.latest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ticket(plan: SearchPlan) -> SearchTicket {
        match plan {
            SearchPlan::Fetch { ticket, .. } => ticket,
            SearchPlan::NoResults => panic!("expected a fetch"),
        }
    }

    #[test]
    fn blank_query_needs_no_request() {
        let mut seq = SearchSequencer::default();
        assert_eq!(seq.submit(""), SearchPlan::NoResults);
    }

    #[test]
    fn older_response_is_stale() {
        let mut seq = SearchSequencer::default();
        let first = ticket(seq.submit("dune"));
        let second = ticket(seq.submit("dune messiah"));
        assert!(!seq.is_current(first));
        assert!(seq.is_current(second));
    }

    #[test]
    fn blank_query_invalidates_pending_search() {
        let mut seq = SearchSequencer::default();
        let pending = ticket(seq.submit("emma"));
        seq.submit("");
        assert!(!seq.is_current(pending));
    }
}
