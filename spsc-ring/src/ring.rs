/// Common surface of the two ring variants.
///
/// [`BoundedRing`](crate::BoundedRing) and [`LossyRing`](crate::LossyRing)
/// differ only in what happens when a write meets a full ring; everything
/// else (FIFO reads, fixed capacity, occupancy reporting) is shared and
/// exposed here so callers can stay generic over the overflow policy.
pub trait Ring {
    /// Element type held by the ring.
    type Item;

    /// Appends `item` behind the newest unread element.
    ///
    /// Returns whether the value was stored. [`BoundedRing`](crate::BoundedRing)
    /// answers `false` while full; [`LossyRing`](crate::LossyRing) always
    /// answers `true`.
    fn write(&self, item: Self::Item) -> bool;

    /// Removes and returns the oldest unread element, or `None` when the
    /// ring is empty.
    fn read(&self) -> Option<Self::Item>;

    /// Number of usable slots, fixed at construction.
    fn capacity(&self) -> usize;

    /// Number of unread elements.
    ///
    /// With a producer or consumer running on another thread this is a
    /// point-in-time snapshot, stale by the time it is returned.
    fn len(&self) -> usize;

    /// Whether no unread element is stored.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether every usable slot holds an unread element.
    fn is_full(&self) -> bool {
        self.len() == self.capacity()
    }
}
