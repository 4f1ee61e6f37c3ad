use gallery_catalog::{Catalog, Selection, SelectionChange, WorldId, WorldRecord};

/// A high-level request any input source can produce.
///
/// Card clicks, number keys, the close button, and backdrop clicks all
/// reduce to one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Open the world with this id, replacing any open one.
    Select(WorldId),
    /// Close the open world.
    Close,
    /// Unbound input.
    Noop,
}

/// What the scene host must do after an action.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transition {
    /// Bind (or rebind) the scene to this world, starting at frame 0.
    Bind(&'static WorldRecord),
    /// Tear down the active scene.
    Unbind,
}

/// Map a key name to an action: digits `1`-`9` select the world with that
/// id, `Escape` closes.
pub fn action_for_key(key: &str) -> Action {
    match key {
        "Escape" => Action::Close,
        digit => match digit.parse::<u32>() {
            Ok(id @ 1..=9) => Action::Select(WorldId(id)),
            _ => Action::Noop,
        },
    }
}

/// Apply `action` to `selection`. Returns the host transition to perform, or
/// `None` when nothing changes.
///
/// Selecting an id the catalog doesn't have is ignored and leaves the
/// selection untouched.
pub fn dispatch(action: Action, selection: &mut Selection, catalog: &Catalog) -> Option<Transition> {
    let change = match action {
        Action::Select(id) => {
            if catalog.get(id).is_none() {
                tracing::warn!(world = %id, "ignoring selection of unknown world");
                return None;
            }
            selection.select(id)
        }
        Action::Close => selection.clear(),
        Action::Noop => return None,
    };

    match change {
        SelectionChange::Opened(id) | SelectionChange::Switched { to: id, .. } => {
            catalog.get(id).map(Transition::Bind)
        }
        SelectionChange::Closed(_) => Some(Transition::Unbind),
        SelectionChange::Unchanged => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (Selection, Catalog) {
        (Selection::new(), Catalog::builtin())
    }

    #[test]
    fn select_opens_world() {
        let (mut sel, cat) = setup();
        let t = dispatch(Action::Select(WorldId(2)), &mut sel, &cat);
        assert!(matches!(t, Some(Transition::Bind(w)) if w.name == "Nebula Forest"));
        assert_eq!(sel.active(), Some(WorldId(2)));
    }

    #[test]
    fn switching_binds_new_world() {
        let (mut sel, cat) = setup();
        dispatch(Action::Select(WorldId(1)), &mut sel, &cat);
        let t = dispatch(Action::Select(WorldId(3)), &mut sel, &cat);
        assert!(matches!(t, Some(Transition::Bind(w)) if w.id == WorldId(3)));
        assert_eq!(sel.active(), Some(WorldId(3)));
    }

    #[test]
    fn reselecting_same_world_is_noop() {
        let (mut sel, cat) = setup();
        dispatch(Action::Select(WorldId(4)), &mut sel, &cat);
        assert_eq!(dispatch(Action::Select(WorldId(4)), &mut sel, &cat), None);
    }

    #[test]
    fn close_unbinds_once() {
        let (mut sel, cat) = setup();
        dispatch(Action::Select(WorldId(5)), &mut sel, &cat);
        assert_eq!(
            dispatch(Action::Close, &mut sel, &cat),
            Some(Transition::Unbind)
        );
        assert_eq!(dispatch(Action::Close, &mut sel, &cat), None);
        assert!(!sel.is_open());
    }

    #[test]
    fn unknown_world_keeps_selection() {
        let (mut sel, cat) = setup();
        dispatch(Action::Select(WorldId(6)), &mut sel, &cat);
        assert_eq!(dispatch(Action::Select(WorldId(42)), &mut sel, &cat), None);
        assert_eq!(sel.active(), Some(WorldId(6)));
    }

    #[test]
    fn noop_does_nothing() {
        let (mut sel, cat) = setup();
        assert_eq!(dispatch(Action::Noop, &mut sel, &cat), None);
        assert!(!sel.is_open());
    }

    #[test]
    fn key_mapping() {
        assert_eq!(action_for_key("1"), Action::Select(WorldId(1)));
        assert_eq!(action_for_key("6"), Action::Select(WorldId(6)));
        assert_eq!(action_for_key("Escape"), Action::Close);
        assert_eq!(action_for_key("0"), Action::Noop);
        assert_eq!(action_for_key("q"), Action::Noop);
    }
}
