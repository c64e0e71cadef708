//! Connection request lifecycle between two users.
//!
//! An edge is created `pending` by a request, moves to `accepted` or
//! `rejected` through the receiver, and is deleted by `cancel` (requester,
//! while pending) or `remove` (either side, once accepted). Mutual pending
//! requests collapse into a single accepted edge instead of coexisting.

pub mod mutations;
pub mod queries;
