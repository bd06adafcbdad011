use std::fmt::Display;

/// Somewhere to send named counters.
pub trait Record {
    fn statistic<T: Display>(&mut self, key: &'static str, value: T);
}

/// Running counts kept by a [`ServiceDesk`](super::ServiceDesk).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Statistics {
    admitted: u32,
    rejected: u32,
    served: u32,
    idle: u32,
}

impl Statistics {
    pub fn admitted(&self) -> u32 {
        self.admitted
    }

    pub fn rejected(&self) -> u32 {
        self.rejected
    }

    pub fn served(&self) -> u32 {
        self.served
    }

    /// Serve requests that found nobody waiting.
    pub fn idle(&self) -> u32 {
        self.idle
    }

    pub fn record<R: Record>(&self, record: &mut R) {
        record.statistic("admitted customers", self.admitted);
        record.statistic("rejected customers", self.rejected);
        record.statistic("served customers", self.served);
        record.statistic("idle serves", self.idle);
    }

    pub(super) fn increment_admitted(&mut self) {
        self.admitted += 1;
    }

    pub(super) fn increment_rejected(&mut self) {
        self.rejected += 1;
    }

    pub(super) fn increment_served(&mut self) {
        self.served += 1;
    }

    pub(super) fn increment_idle(&mut self) {
        self.idle += 1;
    }
}
