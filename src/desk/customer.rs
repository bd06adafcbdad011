use std::fmt;

/// A customer waiting at the desk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    pub name: String,
    pub account_id: String,
    pub problem: String,
}

impl Customer {
    pub fn new<N, A, P>(name: N, account_id: A, problem: P) -> Self
    where
        N: Into<String>,
        A: Into<String>,
        P: Into<String>,
    {
        let name = name.into();
        let account_id = account_id.into();
        let problem = problem.into();
        Self {
            name,
            account_id,
            problem,
        }
    }
}

impl fmt::Display for Customer {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} ({})  : {}", self.name, self.account_id, self.problem)
    }
}
