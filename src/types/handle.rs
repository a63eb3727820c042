//! Handle type for DXF records
//!
//! Handles are unique 64-bit identifiers written at group code 5 in
//! uppercase hexadecimal.

use std::fmt;

/// A unique identifier for a DXF record
///
/// Handle 0 is reserved and never allocated by a [`HandleSeed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Handle(u64);

impl Handle {
    /// The null/invalid handle (0)
    pub const NULL: Handle = Handle(0);

    /// Create a new handle from a u64 value
    #[inline]
    pub const fn new(value: u64) -> Self {
        Handle(value)
    }

    /// Get the raw u64 value
    #[inline]
    pub const fn value(&self) -> u64 {
        self.0
    }

    /// Check if this is a null/invalid handle
    #[inline]
    pub const fn is_null(&self) -> bool {
        self.0 == 0
    }
}

impl Default for Handle {
    fn default() -> Self {
        Handle::NULL
    }
}

impl From<u64> for Handle {
    fn from(value: u64) -> Self {
        Handle(value)
    }
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#X}", self.0)
    }
}

impl fmt::UpperHex for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(&self.0, f)
    }
}

/// Monotonic handle allocator owned by a writer session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandleSeed {
    next: u64,
}

impl HandleSeed {
    /// First handle handed out by a fresh seed
    pub const FIRST: u64 = 1;

    pub const fn new() -> Self {
        HandleSeed { next: Self::FIRST }
    }

    /// The handle the next call to [`allocate`](Self::allocate) returns
    pub const fn peek(&self) -> Handle {
        Handle(self.next)
    }

    /// Hand out the current handle and advance the seed
    pub fn allocate(&mut self) -> Handle {
        let handle = Handle(self.next);
        self.next += 1;
        handle
    }
}

impl Default for HandleSeed {
    fn default() -> Self {
        Self::new()
    }
}
