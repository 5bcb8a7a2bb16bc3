use std::fmt;

/// Strongly typed ID for homes.
///
/// Identifiers are assigned by the storage layer (identity column) and are
/// immutable once a record exists. The integer ordering doubles as the
/// catalog's deterministic tie-break order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HomeId(pub i64);

impl HomeId {
    pub const fn new(id: i64) -> Self {
        HomeId(id)
    }

    pub const fn as_i64(&self) -> i64 {
        self.0
    }
}

impl From<i64> for HomeId {
    fn from(id: i64) -> Self {
        HomeId(id)
    }
}

impl fmt::Display for HomeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Strongly typed ID for extended home details records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HomeDetailsId(pub i64);

impl HomeDetailsId {
    pub const fn new(id: i64) -> Self {
        HomeDetailsId(id)
    }

    pub const fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for HomeDetailsId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Strongly typed ID for contact messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContactMessageId(pub i64);

impl ContactMessageId {
    pub const fn new(id: i64) -> Self {
        ContactMessageId(id)
    }

    pub const fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for ContactMessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Strongly typed ID for visit requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisitId(pub i64);

impl VisitId {
    pub const fn new(id: i64) -> Self {
        VisitId(id)
    }

    pub const fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for VisitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
