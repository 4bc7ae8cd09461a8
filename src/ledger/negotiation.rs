//! Booking-request negotiation ledger.
//!
//! Requests move `pending -> {negotiating, accepted, rejected}` and
//! `negotiating -> {negotiating, accepted, rejected}`. Accepted and rejected
//! requests are terminal. Every transition takes the ledger by reference and
//! returns the next ledger, leaving the prior one untouched.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::core::errors::{CoreError, CoreResult};
use crate::domain::{BookingRequest, RequestStatus};

#[derive(Debug, Clone, Copy, PartialEq)]
enum Transition {
    Accept,
    Reject,
    Counter(f64),
}

impl Transition {
    fn action(self) -> &'static str {
        match self {
            Transition::Accept => "accept",
            Transition::Reject => "reject",
            Transition::Counter(_) => "counter",
        }
    }

    /// Returns the updated request, or `None` when the request already sits
    /// in the state this transition leads to.
    fn apply_to(self, request: &BookingRequest) -> CoreResult<Option<BookingRequest>> {
        let target = match self {
            Transition::Accept => RequestStatus::Accepted,
            Transition::Reject => RequestStatus::Rejected,
            Transition::Counter(_) => RequestStatus::Negotiating,
        };
        if request.status.is_terminal() {
            if request.status == target {
                return Ok(None);
            }
            return Err(CoreError::InvalidTransition {
                id: request.id,
                from: request.status,
                action: self.action(),
            });
        }

        let mut next = request.clone();
        next.status = target;
        if let Transition::Counter(amount) = self {
            next.proposed_rate = Some(amount);
        }
        Ok(Some(next))
    }
}

/// Tally of requests per negotiation state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RequestSummary {
    pub pending: usize,
    pub negotiating: usize,
    pub accepted: usize,
    pub rejected: usize,
    pub total: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<BookingRequest>", into = "Vec<BookingRequest>")]
pub struct NegotiationLedger {
    requests: Vec<BookingRequest>,
}

impl NegotiationLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Imports externally created requests after checking they are coherent.
    pub fn from_requests(requests: Vec<BookingRequest>) -> CoreResult<Self> {
        let mut seen = HashSet::with_capacity(requests.len());
        for request in &requests {
            if !seen.insert(request.id) {
                return Err(CoreError::Validation(format!(
                    "duplicate booking request id {}",
                    request.id
                )));
            }
            if !is_positive_amount(request.asking_rate) {
                return Err(CoreError::Validation(format!(
                    "asking rate for `{}` must be a positive amount",
                    request.artist_name
                )));
            }
            if request.status == RequestStatus::Pending && request.proposed_rate.is_some() {
                return Err(CoreError::Validation(format!(
                    "pending request for `{}` cannot carry a proposed rate",
                    request.artist_name
                )));
            }
            if let Some(rate) = request.proposed_rate {
                if !is_positive_amount(rate) {
                    return Err(CoreError::Validation(format!(
                        "proposed rate for `{}` must be a positive amount",
                        request.artist_name
                    )));
                }
            }
        }
        debug!(count = requests.len(), "imported booking requests");
        Ok(Self { requests })
    }

    /// Accepts the request. Accepting twice is a no-op.
    pub fn accept(&self, request_id: Uuid) -> CoreResult<Self> {
        self.apply(request_id, Transition::Accept)
    }

    /// Rejects the request. Rejecting twice is a no-op.
    pub fn reject(&self, request_id: Uuid) -> CoreResult<Self> {
        self.apply(request_id, Transition::Reject)
    }

    /// Puts `amount` on the table and moves the request into negotiation.
    pub fn counter_offer(&self, request_id: Uuid, amount: f64) -> CoreResult<Self> {
        if !is_positive_amount(amount) {
            warn!(%request_id, amount, "rejected counter-offer amount");
            return Err(CoreError::InvalidArgument(format!(
                "counter-offer must be a positive amount, got {amount}"
            )));
        }
        self.apply(request_id, Transition::Counter(amount))
    }

    fn apply(&self, request_id: Uuid, transition: Transition) -> CoreResult<Self> {
        let index = self
            .requests
            .iter()
            .position(|request| request.id == request_id)
            .ok_or(CoreError::RequestNotFound(request_id))?;

        let updated = transition.apply_to(&self.requests[index]).map_err(|err| {
            warn!(%request_id, action = transition.action(), "refused transition");
            err
        })?;

        let mut next = self.clone();
        if let Some(request) = updated {
            debug!(
                %request_id,
                status = %request.status,
                proposed_rate = ?request.proposed_rate,
                "booking request transitioned"
            );
            next.requests[index] = request;
        }
        Ok(next)
    }

    pub fn get(&self, request_id: Uuid) -> Option<&BookingRequest> {
        self.requests.iter().find(|request| request.id == request_id)
    }

    pub fn requests(&self) -> &[BookingRequest] {
        &self.requests
    }

    pub fn len(&self) -> usize {
        self.requests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }

    pub fn with_status(&self, status: RequestStatus) -> Vec<&BookingRequest> {
        self.requests
            .iter()
            .filter(|request| request.status == status)
            .collect()
    }

    /// Pending and negotiating requests, in ledger order.
    pub fn open_requests(&self) -> Vec<&BookingRequest> {
        self.requests
            .iter()
            .filter(|request| request.status.is_open())
            .collect()
    }

    /// Accepted and rejected requests, in ledger order.
    pub fn completed(&self) -> Vec<&BookingRequest> {
        self.requests
            .iter()
            .filter(|request| request.status.is_terminal())
            .collect()
    }

    pub fn summary(&self) -> RequestSummary {
        self.requests
            .iter()
            .fold(RequestSummary::default(), |mut summary, request| {
                match request.status {
                    RequestStatus::Pending => summary.pending += 1,
                    RequestStatus::Negotiating => summary.negotiating += 1,
                    RequestStatus::Accepted => summary.accepted += 1,
                    RequestStatus::Rejected => summary.rejected += 1,
                }
                summary.total += 1;
                summary
            })
    }
}

impl TryFrom<Vec<BookingRequest>> for NegotiationLedger {
    type Error = CoreError;

    fn try_from(requests: Vec<BookingRequest>) -> Result<Self, Self::Error> {
        Self::from_requests(requests)
    }
}

impl From<NegotiationLedger> for Vec<BookingRequest> {
    fn from(ledger: NegotiationLedger) -> Self {
        ledger.requests
    }
}

/// Parses a counter-offer typed into a form field.
///
/// Blank or non-numeric input is an `InvalidArgument` rather than a silent
/// no-op.
pub fn parse_counter_offer(raw: &str) -> CoreResult<f64> {
    let trimmed = raw.trim().trim_start_matches('$').replace(',', "");
    let amount: f64 = trimmed
        .parse()
        .map_err(|_| CoreError::InvalidArgument(format!("`{}` is not a number", raw.trim())))?;
    if !is_positive_amount(amount) {
        return Err(CoreError::InvalidArgument(format!(
            "counter-offer must be a positive amount, got {amount}"
        )));
    }
    Ok(amount)
}

fn is_positive_amount(value: f64) -> bool {
    value.is_finite() && value > 0.0
}
