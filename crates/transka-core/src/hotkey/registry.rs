//! Action-to-combination bookkeeping for global hotkeys.
//!
//! The registry is an explicit object owned by the application root. It knows
//! which combination each action is bound to and can swap one binding at
//! runtime without disturbing the others.

use crate::{CoreError, CoreResult, HotkeyAction};

use std::{
    collections::HashMap,
    fmt,
    panic::Location,
    sync::{Arc, PoisonError, RwLock},
};

use error_location::ErrorLocation;
use tracing::{debug, error, info, instrument, warn};

/// Platform hotkey registration.
pub trait HotkeyBackend {
    /// Platform representation of one key combination.
    type Binding: Clone + fmt::Debug;

    /// Parses a combination such as `"ctrl+alt+t"`.
    fn parse(&self, spec: &str) -> CoreResult<Self::Binding>;

    /// Id the platform reports in press notifications for `binding`.
    fn binding_id(&self, binding: &Self::Binding) -> u32;

    /// Registers `binding` process-wide for `action`.
    fn register(&self, action: HotkeyAction, binding: &Self::Binding) -> CoreResult<()>;

    /// Releases `binding`.
    fn unregister(&self, action: HotkeyAction, binding: &Self::Binding) -> CoreResult<()>;
}

/// Shared id → action table read by the hotkey listener thread.
#[derive(Debug, Clone, Default)]
pub struct ActionLookup {
    inner: Arc<RwLock<HashMap<u32, HotkeyAction>>>,
}

impl ActionLookup {
    /// Action bound to the combination with `id`, if any.
    pub fn resolve(&self, id: u32) -> Option<HotkeyAction> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&id)
            .copied()
    }

    fn insert(&self, id: u32, action: HotkeyAction) {
        self.inner
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(id, action);
    }

    fn remove(&self, id: u32) {
        self.inner
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&id);
    }
}

struct Bound<T> {
    spec: String,
    binding: T,
    id: u32,
}

/// Owns every registered global hotkey.
pub struct HotkeyRegistry<B: HotkeyBackend> {
    backend: B,
    bound: HashMap<HotkeyAction, Bound<B::Binding>>,
    lookup: ActionLookup,
}

impl<B: HotkeyBackend> HotkeyRegistry<B> {
    /// Creates an empty registry on top of `backend`.
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            bound: HashMap::new(),
            lookup: ActionLookup::default(),
        }
    }

    /// Handle for resolving press notifications to actions.
    pub fn lookup(&self) -> ActionLookup {
        self.lookup.clone()
    }

    /// The combination `action` is currently bound to.
    pub fn binding(&self, action: HotkeyAction) -> Option<&str> {
        self.bound.get(&action).map(|b| b.spec.as_str())
    }

    /// The underlying backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Binds `action` to `spec`, replacing any previous binding atomically.
    ///
    /// On failure the previous binding is still registered and the error is
    /// returned.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn bind(&mut self, action: HotkeyAction, spec: &str) -> CoreResult<()> {
        let binding = self.backend.parse(spec)?;
        let id = self.backend.binding_id(&binding);

        if let Some(current) = self.bound.get(&action)
            && current.id == id
        {
            debug!(action = %action, spec, "Binding unchanged");
            return Ok(());
        }

        if let Some(owner) = self.lookup.resolve(id) {
            return Err(CoreError::HotkeyRegistration {
                action,
                reason: format!("'{spec}' is already bound to {owner}"),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let previous = match self.bound.remove(&action) {
            Some(old) => match self.backend.unregister(action, &old.binding) {
                Ok(()) => {
                    self.lookup.remove(old.id);
                    Some(old)
                }
                Err(e) => {
                    self.bound.insert(action, old);
                    return Err(e);
                }
            },
            None => None,
        };

        if let Err(e) = self.backend.register(action, &binding) {
            if let Some(old) = previous {
                self.restore(action, old);
            }
            return Err(e);
        }

        self.lookup.insert(id, action);
        self.bound.insert(
            action,
            Bound {
                spec: spec.to_string(),
                binding,
                id,
            },
        );

        info!(action = %action, hotkey = spec, "Global hotkey registered");
        Ok(())
    }

    /// Binds every pair independently.
    ///
    /// Actions whose combination changes are released first, so two actions
    /// can trade combinations in one call. A failing action never stops the
    /// others; it gets its previous combination back when that is still
    /// free. Failures are logged and returned.
    pub fn bind_all<'a, I>(&mut self, bindings: I) -> Vec<CoreError>
    where
        I: IntoIterator<Item = (HotkeyAction, &'a str)>,
    {
        let bindings: Vec<(HotkeyAction, &str)> = bindings.into_iter().collect();
        let released = self.release_changing(&bindings);

        let mut failures = Vec::new();
        for (action, spec) in bindings {
            if let Err(e) = self.bind(action, spec) {
                error!(action = %action, hotkey = spec, error = ?e, "Failed to bind hotkey");
                if let Some(previous) = released.get(&action)
                    && let Err(restore_error) = self.bind(action, previous)
                {
                    warn!(
                        action = %action,
                        hotkey = %previous,
                        error = ?restore_error,
                        "Previous binding could not be restored"
                    );
                }
                failures.push(e);
            }
        }
        failures
    }

    /// Unbinds every listed action whose combination is about to change.
    /// Returns the combinations that were released.
    fn release_changing(
        &mut self,
        bindings: &[(HotkeyAction, &str)],
    ) -> HashMap<HotkeyAction, String> {
        let mut released = HashMap::new();
        for &(action, spec) in bindings {
            let Ok(binding) = self.backend.parse(spec) else {
                // Left bound; bind() reports the parse error.
                continue;
            };
            let id = self.backend.binding_id(&binding);

            let Some(previous) = self
                .bound
                .get(&action)
                .filter(|current| current.id != id)
                .map(|current| current.spec.clone())
            else {
                continue;
            };

            match self.unbind(action) {
                Ok(()) => {
                    released.insert(action, previous);
                }
                Err(e) => {
                    warn!(
                        action = %action,
                        error = ?e,
                        "Failed to release hotkey before rebinding"
                    );
                }
            }
        }
        released
    }

    /// Releases the binding of `action`, if any.
    pub fn unbind(&mut self, action: HotkeyAction) -> CoreResult<()> {
        let Some(old) = self.bound.remove(&action) else {
            return Ok(());
        };

        if let Err(e) = self.backend.unregister(action, &old.binding) {
            self.bound.insert(action, old);
            return Err(e);
        }
        self.lookup.remove(old.id);

        info!(action = %action, hotkey = %old.spec, "Global hotkey released");
        Ok(())
    }

    /// Releases every binding, logging failures.
    pub fn unbind_all(&mut self) {
        let actions: Vec<HotkeyAction> = self.bound.keys().copied().collect();
        for action in actions {
            if let Err(e) = self.unbind(action) {
                warn!(action = %action, error = ?e, "Failed to release hotkey");
            }
        }
    }

    fn restore(&mut self, action: HotkeyAction, old: Bound<B::Binding>) {
        match self.backend.register(action, &old.binding) {
            Ok(()) => {
                self.lookup.insert(old.id, action);
                debug!(action = %action, hotkey = %old.spec, "Previous binding restored");
                self.bound.insert(action, old);
            }
            Err(e) => {
                error!(
                    action = %action,
                    hotkey = %old.spec,
                    error = ?e,
                    "Failed to restore previous binding, action is now unbound"
                );
            }
        }
    }
}
