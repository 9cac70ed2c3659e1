//! CCA (co-curricular activity) entity.

use crate::domain::CcaName;
use std::fmt;

/// A co-curricular activity. CCAs are identified by name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Cca {
    name: CcaName,
}

impl Cca {
    pub fn new(name: CcaName) -> Self {
        Self { name }
    }

    pub fn name(&self) -> &CcaName {
        &self.name
    }

    /// Returns true if both CCAs have the same name.
    pub fn is_same_cca(&self, other: &Cca) -> bool {
        self.name == other.name
    }
}

impl fmt::Display for Cca {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
