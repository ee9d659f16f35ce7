//! Signal/slot notification for the selectable grid.
//!
//! A [`Signal<Args>`] keeps a table of connected slots (closures) and invokes
//! each of them when the signal is emitted. The model emits after every state
//! change; a presentation layer connects a slot and redraws whatever the
//! change touched.
//!
//! # Key Types
//!
//! - [`Signal<Args>`] - The signal type
//! - [`ConnectionId`] - Returned by [`Signal::connect`], used to disconnect
//!
//! # Delivery
//!
//! Slots run synchronously on the emitting thread, oldest connection first,
//! before `emit` returns. The slot table is released before slots run, so a
//! slot may connect or disconnect on the same signal.
//!
//! # Example
//!
//! ```
//! use selectable_grid_core::Signal;
//!
//! let notice = Signal::<String>::new();
//!
//! let conn_id = notice.connect(|message| {
//!     println!("notice: {}", message);
//! });
//!
//! notice.emit("at most 6 items can be selected".to_string());
//! notice.disconnect(conn_id);
//! ```

use std::sync::Arc;

use parking_lot::Mutex;
use slotmap::{new_key_type, SlotMap};

use crate::logging::targets;

new_key_type! {
    /// Identifies one signal-slot connection.
    ///
    /// Valid until the connection is disconnected or the signal is dropped.
    pub struct ConnectionId;
}

type Slot<Args> = Arc<dyn Fn(&Args) + Send + Sync>;

/// Connected slots plus the order they were connected in.
///
/// Slot map keys reuse freed slots, so iteration order of the map says
/// nothing about connection order; `order` does.
struct SlotTable<Args> {
    slots: SlotMap<ConnectionId, Slot<Args>>,
    order: Vec<ConnectionId>,
}

/// A type-safe signal that can have multiple connected slots.
///
/// `Args` is the argument passed (by reference) to every slot. Use `()` for
/// signals with no arguments, or a tuple for several.
pub struct Signal<Args> {
    table: Mutex<SlotTable<Args>>,
}

impl<Args> Default for Signal<Args> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Args> std::fmt::Debug for Signal<Args> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Signal")
            .field("connections", &self.connection_count())
            .finish()
    }
}

impl<Args> Signal<Args> {
    /// Create a new signal with no connections.
    pub fn new() -> Self {
        Self {
            table: Mutex::new(SlotTable {
                slots: SlotMap::with_key(),
                order: Vec::new(),
            }),
        }
    }

    /// Connect a slot (closure) to this signal.
    ///
    /// Returns a `ConnectionId` that can be used to disconnect the slot later.
    pub fn connect<F>(&self, slot: F) -> ConnectionId
    where
        F: Fn(&Args) + Send + Sync + 'static,
    {
        let mut table = self.table.lock();
        let id = table.slots.insert(Arc::new(slot));
        table.order.push(id);
        id
    }

    /// Disconnect a slot by its connection ID.
    ///
    /// Returns `true` if the connection existed.
    pub fn disconnect(&self, id: ConnectionId) -> bool {
        let mut table = self.table.lock();
        if table.slots.remove(id).is_none() {
            return false;
        }
        table.order.retain(|&other| other != id);
        true
    }

    /// Number of connected slots.
    pub fn connection_count(&self) -> usize {
        self.table.lock().slots.len()
    }

    /// Invoke every connected slot with `args`, oldest connection first.
    ///
    /// Returns the number of slots invoked.
    #[tracing::instrument(skip_all, target = "selectable_grid_core::signal", level = "trace")]
    pub fn emit(&self, args: Args) -> usize {
        let slots: Vec<Slot<Args>> = {
            let table = self.table.lock();
            table
                .order
                .iter()
                .filter_map(|id| table.slots.get(*id).cloned())
                .collect()
        };
        tracing::trace!(target: targets::SIGNAL, slots = slots.len(), "emitting");

        for slot in &slots {
            slot(&args);
        }
        slots.len()
    }
}
