use crate::memory::MemoryReader;

/// Field access over the host's opaque handle to an inspected variable.
///
/// This is all the summarizers need from a debugger's value model: named
/// child lookup, unsigned numeric extraction, and the memory of the process
/// the value lives in. Adapters implement it over whatever introspection API
/// the host provides.
pub trait InspectedValue: Sized {
    /// Reader for the memory of the process owning this value.
    type Memory: MemoryReader + ?Sized;

    /// Looks up a named member. Pointer members are dereferenced, so
    /// `child("outBuffer")` on a builder yields the pointed-to string.
    fn child(&self, name: &str) -> Option<Self>;

    /// The value as an unsigned integer, or `None` if it has no numeric
    /// representation.
    fn as_unsigned(&self) -> Option<u64>;

    /// Process memory the value was read from.
    fn memory(&self) -> &Self::Memory;

    /// Numeric value of a named member. Missing or non-numeric members read
    /// as zero, which the summarizers interpret as null or empty.
    fn unsigned_field(&self, name: &str) -> u64 {
        self.child(name)
            .and_then(|child| child.as_unsigned())
            .unwrap_or(0)
    }
}
