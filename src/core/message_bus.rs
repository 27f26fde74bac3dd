//=========================================================================
// Message Bus
//=========================================================================
//
// Per-frame typed message queues.
//
// Behaviours publish requests (e.g. LoadScene) while they update; the
// frame driver consumes them at the frame boundary and clears the rest.
//
//   push<M>() ──> HashMap<TypeId, Vec<M>> ──> read<M>() / take<M>()
//                                              │
//   frame end ─────────────────────────────> clear_all()
//
//=========================================================================

//=== External Dependencies ===============================================

use std::any::{Any, TypeId};
use std::collections::HashMap;

//=== Message =============================================================

/// Marker for types that can travel on the [`MessageBus`].
pub trait Message: Send + 'static {}

impl<T: Send + 'static> Message for T {}

//=== Erased Queue ========================================================

/// Type-erased view over a `Vec<M>` so queues of different message
/// types can share one map.
trait ErasedQueue: Send {
    fn clear_queue(&mut self);
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<M: Message> ErasedQueue for Vec<M> {
    fn clear_queue(&mut self) {
        self.clear();
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

//=== MessageBus ==========================================================

/// Type-keyed message queues shared by behaviours and systems.
#[derive(Default)]
pub struct MessageBus {
    queues: HashMap<TypeId, Box<dyn ErasedQueue>>,
}

impl MessageBus {
    pub fn new() -> Self {
        Self::default()
    }

    //--- Publishing -------------------------------------------------------

    /// Appends a message to the queue for its type.
    pub fn push<M: Message>(&mut self, msg: M) {
        self.queue_mut::<M>().push(msg);
    }

    //--- Consuming --------------------------------------------------------

    /// All queued messages of type `M`, oldest first.
    ///
    /// Reading does not consume; several readers see the same messages.
    pub fn read<M: Message>(&self) -> &[M] {
        self.queue::<M>().map(Vec::as_slice).unwrap_or(&[])
    }

    /// Removes and returns all queued messages of type `M`.
    pub fn take<M: Message>(&mut self) -> Vec<M> {
        self.queues
            .get_mut(&TypeId::of::<M>())
            .and_then(|q| q.as_any_mut().downcast_mut::<Vec<M>>())
            .map(std::mem::take)
            .unwrap_or_default()
    }

    //--- Queries ----------------------------------------------------------

    pub fn has_messages<M: Message>(&self) -> bool {
        self.count::<M>() > 0
    }

    pub fn count<M: Message>(&self) -> usize {
        self.queue::<M>().map_or(0, Vec::len)
    }

    //--- Clearing ---------------------------------------------------------

    /// Clears messages of type `M`, keeping the allocation.
    pub fn clear<M: Message>(&mut self) {
        if let Some(queue) = self.queues.get_mut(&TypeId::of::<M>()) {
            queue.clear_queue();
        }
    }

    /// Clears every queue, keeping allocations for the next frame.
    pub fn clear_all(&mut self) {
        for queue in self.queues.values_mut() {
            queue.clear_queue();
        }
    }

    //--- Internal Helpers -------------------------------------------------

    fn queue<M: Message>(&self) -> Option<&Vec<M>> {
        self.queues
            .get(&TypeId::of::<M>())
            .and_then(|q| q.as_any().downcast_ref::<Vec<M>>())
    }

    fn queue_mut<M: Message>(&mut self) -> &mut Vec<M> {
        self.queues
            .entry(TypeId::of::<M>())
            .or_insert_with(|| Box::new(Vec::<M>::new()))
            .as_any_mut()
            .downcast_mut::<Vec<M>>()
            .expect("queue stored under TypeId of M must be Vec<M>")
    }
}

//=========================================================================
// Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq, Clone)]
    struct Ping(u32);

    #[derive(Debug, PartialEq, Clone)]
    struct Note(String);

    #[test]
    fn new_bus_has_no_messages() {
        let bus = MessageBus::new();
        assert!(!bus.has_messages::<Ping>());
        assert_eq!(bus.count::<Ping>(), 0);
        assert!(bus.read::<Ping>().is_empty());
    }

    #[test]
    fn read_preserves_order_and_messages() {
        let mut bus = MessageBus::new();
        bus.push(Ping(1));
        bus.push(Ping(2));

        assert_eq!(bus.read::<Ping>(), &[Ping(1), Ping(2)]);
        // Still there for the next reader
        assert_eq!(bus.count::<Ping>(), 2);
    }

    #[test]
    fn types_have_separate_queues() {
        let mut bus = MessageBus::new();
        bus.push(Ping(7));
        bus.push(Note("hello".into()));

        assert_eq!(bus.count::<Ping>(), 1);
        assert_eq!(bus.read::<Note>()[0], Note("hello".into()));
    }

    #[test]
    fn take_drains_only_that_type() {
        let mut bus = MessageBus::new();
        bus.push(Ping(1));
        bus.push(Note("x".into()));

        assert_eq!(bus.take::<Ping>(), vec![Ping(1)]);
        assert!(!bus.has_messages::<Ping>());
        assert!(bus.has_messages::<Note>());
        assert!(bus.take::<Ping>().is_empty());
    }

    #[test]
    fn clear_all_empties_every_queue() {
        let mut bus = MessageBus::new();
        bus.push(Ping(1));
        bus.push(Note("x".into()));
        bus.clear_all();

        assert_eq!(bus.count::<Ping>(), 0);
        assert_eq!(bus.count::<Note>(), 0);

        bus.push(Ping(3));
        assert_eq!(bus.read::<Ping>(), &[Ping(3)]);
    }
}
