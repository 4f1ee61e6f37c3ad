use crate::record::WorldId;

/// What a selection update did. The UI layer maps this onto scene
/// bind/unbind calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionChange {
    /// Nothing was selected before; this world is now open.
    Opened(WorldId),
    /// `from` was replaced by `to`.
    Switched { from: WorldId, to: WorldId },
    /// The selection was cleared; this world was the one open.
    Closed(WorldId),
    /// Re-selecting the active world, or closing with nothing open.
    Unchanged,
}

/// The one piece of mutable gallery state: which world, if any, is open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    active: Option<WorldId>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Option<WorldId> {
        self.active
    }

    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    /// Make `id` the active world, deactivating any previous one.
    pub fn select(&mut self, id: WorldId) -> SelectionChange {
        let change = match self.active {
            None => SelectionChange::Opened(id),
            Some(current) if current == id => SelectionChange::Unchanged,
            Some(from) => SelectionChange::Switched { from, to: id },
        };
        self.active = Some(id);
        tracing::debug!(?change, "selection updated");
        change
    }

    /// Reset to no selection.
    pub fn clear(&mut self) -> SelectionChange {
        match self.active.take() {
            Some(id) => {
                tracing::debug!(world = %id, "selection cleared");
                SelectionChange::Closed(id)
            }
            None => SelectionChange::Unchanged,
        }
    }
}
