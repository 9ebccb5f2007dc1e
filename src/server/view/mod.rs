//! View state owned by each page
//!
//! Every operation that reaches the proxy api is split in three: a synchronous
//! `begin_*` taken under the view lock, the network call with the lock released,
//! and a synchronous `finish_*` that applies the outcome only if it is still wanted.

pub(crate) mod menu_management;
pub(crate) mod ordering;

use derive_more::Display;

/// The error banner, one per view, replaced on every failure.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ViewError {
    #[display("Error fetching menu items")]
    FetchMenuItems,
    #[display("Error fetching orders")]
    FetchOrders,
    #[display("Error adding menu item")]
    AddMenuItem,
    #[display("Error placing order")]
    PlaceOrder,
}

/// Mount generation of a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Epoch(u64);

/// Tracks whether a view is mounted and which mount a response belongs to.
#[derive(Debug, Default)]
pub(crate) struct Liveness {
    epoch: u64,
    mounted: bool,
}

impl Liveness {
    pub fn mount(&mut self) -> Epoch {
        self.epoch += 1;
        self.mounted = true;
        Epoch(self.epoch)
    }

    pub fn unmount(&mut self) {
        self.mounted = false;
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn current(&self) -> Epoch {
        Epoch(self.epoch)
    }

    /// true when a response tagged with `epoch` may still touch the view
    pub fn accepts(&self, epoch: Epoch) -> bool {
        self.mounted && epoch.0 == self.epoch
    }
}

/// Identifies one submission attempt of a form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RequestToken {
    id: u64,
    epoch: Epoch,
}

impl RequestToken {
    pub fn epoch(&self) -> Epoch {
        self.epoch
    }
}

/// Allows at most one submission in flight per form.
#[derive(Debug, Default)]
pub(crate) struct SubmitGuard {
    last_id: u64,
    in_flight: Option<RequestToken>,
}

impl SubmitGuard {
    /// None while another submission is still in flight
    pub fn begin(&mut self, epoch: Epoch) -> Option<RequestToken> {
        if self.in_flight.is_some() {
            return None;
        }
        self.last_id += 1;
        let token = RequestToken {
            id: self.last_id,
            epoch,
        };
        self.in_flight = Some(token);
        Some(token)
    }

    /// Releases the guard if `token` is the submission in flight.
    pub fn finish(&mut self, token: RequestToken) -> bool {
        if self.in_flight == Some(token) {
            self.in_flight = None;
            return true;
        }
        false
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Forgets any submission in flight, its completion will be discarded.
    pub fn reset(&mut self) {
        self.in_flight = None;
    }
}

/// A form submission handed out by `begin_submit`, carries what to post.
#[derive(Debug)]
pub(crate) struct Submission<D> {
    pub token: RequestToken,
    pub draft: D,
}
