//! Request/response envelopes exchanged between the screen and the worker.

use crate::images::{ImageError, Thumbnail};

use super::error::CatalogError;
use super::model::{CategoryFilter, Product};

/// Identifies one issued listing request. Later requests carry larger tickets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FetchTicket(pub u64);

/// Hands out strictly increasing tickets.
#[derive(Debug, Default)]
pub struct TicketCounter {
    last: u64,
}

impl TicketCounter {
    pub fn issue(&mut self) -> FetchTicket {
        self.last += 1;
        FetchTicket(self.last)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FetchCommand {
    Categories { ticket: FetchTicket },
    Products {
        ticket: FetchTicket,
        filter: CategoryFilter,
    },
    Image { url: String },
}

#[derive(Debug)]
pub enum FetchOutcome {
    Categories {
        ticket: FetchTicket,
        result: Result<Vec<String>, CatalogError>,
    },
    Products {
        ticket: FetchTicket,
        filter: CategoryFilter,
        result: Result<Vec<Product>, CatalogError>,
    },
    Image {
        url: String,
        result: Result<Thumbnail, ImageError>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tickets_increase() {
        let mut counter = TicketCounter::default();
        let first = counter.issue();
        let second = counter.issue();
        assert!(second > first);
        assert_eq!(first, FetchTicket(1));
    }
}
