//! Event dispatch between the host and registered handlers.
//!
//! The host owns a single [`EventDispatcher`] and invokes
//! [`dispatch`](EventDispatcher::dispatch) from its one event thread.
//! Handlers therefore run sequentially and must return promptly: anything
//! slow (I/O, remote lookups) belongs in a spawned task, not in
//! [`BlockBreakHandler::on_block_break`].

use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{debug, trace};

use crate::event::BlockBreakEvent;

/// Callback interface for block-break events.
///
/// # Contract
///
/// Invoked on the host's event thread. Implementations must not block and
/// must not keep references into the event beyond the call — snapshot via
/// [`BlockBreakEvent::player`] instead.
pub trait BlockBreakHandler: Send + Sync {
    fn on_block_break(&self, event: &BlockBreakEvent);
}

/// Registers handlers and fans events out to them in registration order.
///
/// Registration is safe from any thread; dispatch is driven by the host's
/// event thread only.
#[derive(Default)]
pub struct EventDispatcher {
    handlers: RwLock<Vec<Arc<dyn BlockBreakHandler>>>,
}

impl EventDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a handler. Handlers are invoked in the order they were added.
    pub fn register(&self, handler: Arc<dyn BlockBreakHandler>) {
        self.handlers.write().push(handler);
        debug!(handlers = self.handler_count(), "Registered block-break handler");
    }

    /// Returns the number of registered handlers.
    pub fn handler_count(&self) -> usize {
        self.handlers.read().len()
    }

    /// Delivers one event to every registered handler.
    pub fn dispatch(&self, event: &BlockBreakEvent) {
        trace!(player = %event.player_name, position = %event.position, "Dispatching block break");

        let handlers = self.handlers.read().clone();
        for handler in &handlers {
            handler.on_block_break(event);
        }
    }
}

impl std::fmt::Debug for EventDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventDispatcher")
            .field("handler_count", &self.handler_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::BlockPos;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use uuid::Uuid;

    struct CountingHandler {
        calls: Arc<AtomicUsize>,
    }

    impl BlockBreakHandler for CountingHandler {
        fn on_block_break(&self, _event: &BlockBreakEvent) {
            self.calls.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn event() -> BlockBreakEvent {
        BlockBreakEvent::new(Uuid::new_v4(), "Alice", BlockPos::new(0, 64, 0))
    }

    #[test]
    fn dispatch_without_handlers_is_a_no_op() {
        let dispatcher = EventDispatcher::new();
        dispatcher.dispatch(&event());
        assert_eq!(dispatcher.handler_count(), 0);
    }

    struct OrderedHandler {
        index: usize,
        order: Arc<parking_lot::Mutex<Vec<usize>>>,
    }

    impl BlockBreakHandler for OrderedHandler {
        fn on_block_break(&self, _event: &BlockBreakEvent) {
            self.order.lock().push(self.index);
        }
    }

    #[test]
    fn handlers_run_in_registration_order() {
        let order = Arc::new(parking_lot::Mutex::new(Vec::new()));
        let dispatcher = EventDispatcher::new();
        for index in 0..4 {
            dispatcher.register(Arc::new(OrderedHandler {
                index,
                order: Arc::clone(&order),
            }));
        }

        dispatcher.dispatch(&event());

        assert_eq!(*order.lock(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn every_handler_sees_every_event() {
        let calls = Arc::new(AtomicUsize::new(0));
        let dispatcher = EventDispatcher::new();
        for _ in 0..3 {
            dispatcher.register(Arc::new(CountingHandler {
                calls: Arc::clone(&calls),
            }));
        }

        dispatcher.dispatch(&event());
        dispatcher.dispatch(&event());

        assert_eq!(dispatcher.handler_count(), 3);
        assert_eq!(calls.load(Ordering::SeqCst), 6);
    }
}
