//! A bounded customer-service queue.

mod customer;
pub mod script;
mod statistics;

pub use customer::Customer;
pub use statistics::{Record, Statistics};

use crate::error::DeskError;
use crate::queue::PriorityQueue;
use std::fmt;

/// Capacity used when a desk is asked for a non-positive one.
pub const DEFAULT_MAX_SIZE: usize = 10;

/// Customers are served by priority, and in arrival order within a
/// priority. At most `max_size` customers wait at once.
pub struct ServiceDesk {
    queue: PriorityQueue<Customer>,
    max_size: usize,
    statistics: Statistics,
}

impl ServiceDesk {
    pub fn new(max_size: i64) -> Self {
        let max_size = if max_size <= 0 {
            DEFAULT_MAX_SIZE
        } else {
            max_size as usize
        };
        let queue = PriorityQueue::with_capacity(max_size.min(1024));
        let statistics = Statistics::default();
        Self {
            queue,
            max_size,
            statistics,
        }
    }

    pub fn max_size(&self) -> usize {
        self.max_size
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn statistics(&self) -> Statistics {
        self.statistics
    }

    pub fn add_customer(
        &mut self,
        customer: Customer,
        priority: i64,
    ) -> Result<(), DeskError> {
        if self.queue.len() >= self.max_size {
            self.statistics.increment_rejected();
            let max_size = self.max_size;
            return Err(DeskError::Full { max_size });
        }
        self.queue.enqueue(customer, priority);
        self.statistics.increment_admitted();
        Ok(())
    }

    pub fn serve_customer(&mut self) -> Result<Customer, DeskError> {
        match self.queue.dequeue() {
            Ok(customer) => {
                self.statistics.increment_served();
                Ok(customer)
            }
            Err(empty) => {
                self.statistics.increment_idle();
                Err(empty.into())
            }
        }
    }
}

impl fmt::Display for ServiceDesk {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[size={} max_size={} =>", self.len(), self.max_size)?;
        for (index, (customer, _)) in self.queue.iter().enumerate() {
            let separator = if index == 0 { " " } else { ", " };
            write!(f, "{}{}", separator, customer)?;
        }
        write!(f, "]")
    }
}
