use std::fmt::Display;
use triage::desk::Record;

pub(crate) struct PrintStatistics;

impl Record for PrintStatistics {
    fn statistic<T: Display>(&mut self, key: &'static str, value: T) {
        println!("% {}: {}", key, value);
    }
}
