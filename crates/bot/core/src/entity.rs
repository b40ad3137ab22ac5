//! Stable handles for world entities and client slots.

/// Identity of an entity in the game world (players, structures, missiles).
///
/// Opaque to this subsystem; the world oracle and navigation service resolve
/// it. Never reused within a map session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntityId(pub u32);

/// Index of a client slot on the server, `0..MAX_CLIENTS`.
///
/// A connected bot occupies exactly one slot for its connected lifetime; the
/// slot arena in the lifecycle manager is indexed by this handle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClientId(pub usize);

impl ClientId {
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}
