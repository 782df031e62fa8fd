//! Domain events for the customer aggregate
//!
//! Events capture the aggregate's significant state changes for audit
//! trails and downstream integrations. The aggregate accumulates them and
//! the caller drains them with `take_events` after a successful save.

use chrono::{DateTime, Utc};
use core_kernel::{CustomerId, Money, MovieId};
use serde::{Deserialize, Serialize};

/// Domain events emitted by the Customer aggregate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CustomerEvent {
    /// The customer changed their display name
    CustomerRenamed {
        customer_id: CustomerId,
        new_name: String,
    },

    /// A movie was purchased and the spend total increased
    MoviePurchased {
        customer_id: CustomerId,
        movie_id: MovieId,
        price: Money,
        purchased_at: DateTime<Utc>,
    },

    /// The customer was promoted to the advanced status
    CustomerPromoted {
        customer_id: CustomerId,
        expires_at: DateTime<Utc>,
    },
}
