use std::fmt;
use std::sync::Arc;

/// What a test resolved to the first time its group was read.
///
/// Passed to the handlers registered in [`Hooks`]. Analytics forwarding
/// usually wants the test name and the group label; the group count is
/// included so multi-variant events can be bucketed without a lookup.
#[derive(Clone, Copy, Debug)]
pub struct Outcome<'a> {
    name: &'a str,
    group: u32,
    group_count: u32,
}

impl<'a> Outcome<'a> {
    pub(crate) fn new(name: &'a str, group: u32, group_count: u32) -> Self {
        Self {
            name,
            group,
            group_count,
        }
    }

    /// Name of the test that resolved.
    pub fn name(&self) -> &'a str {
        self.name
    }

    /// `0` when the user was not involved, `1..=group_count` otherwise.
    pub fn group(&self) -> u32 {
        self.group
    }

    pub fn group_count(&self) -> u32 {
        self.group_count
    }
}

type Handler = Arc<dyn Fn(Outcome<'_>) + Send + Sync>;

/// Observer registry for first-resolution events.
///
/// A registry holds at most one handler per event; registering again
/// replaces the previous handler. Clones share the registered handlers, so
/// a single registry built at startup can be attached to every test in the
/// process:
///
/// ```
/// use cohort::{ab_test, Hooks, MemoryStorage};
///
/// let hooks = Hooks::new()
///     .on_started(|outcome| println!("{} -> group {}", outcome.name(), outcome.group()))
///     .on_skipped(|outcome| println!("{} skipped", outcome.name()));
///
/// let storage = MemoryStorage::new();
/// let test = ab_test("new_onboarding")
///     .hooks(hooks.clone())
///     .build(&storage)
///     .unwrap();
/// # let _ = test.user_group();
/// ```
///
/// Handlers fire at most once per test name: at the moment the group is
/// first resolved and persisted, never on the memoized reads that follow.
#[derive(Clone, Default)]
pub struct Hooks {
    started: Option<Handler>,
    skipped: Option<Handler>,
}

impl Hooks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the handler called when a new non-zero group is first
    /// resolved for an involved user.
    pub fn on_started<F>(mut self, handler: F) -> Self
    where
        F: Fn(Outcome<'_>) + Send + Sync + 'static,
    {
        self.started = Some(Arc::new(handler));
        self
    }

    /// Register the handler called when involvement resolves to false and
    /// the sentinel group `0` is first persisted.
    pub fn on_skipped<F>(mut self, handler: F) -> Self
    where
        F: Fn(Outcome<'_>) + Send + Sync + 'static,
    {
        self.skipped = Some(Arc::new(handler));
        self
    }

    pub(crate) fn fire_started(&self, outcome: Outcome<'_>) {
        if let Some(handler) = &self.started {
            handler(outcome);
        }
    }

    pub(crate) fn fire_skipped(&self, outcome: Outcome<'_>) {
        if let Some(handler) = &self.skipped {
            handler(outcome);
        }
    }
}

impl fmt::Debug for Hooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hooks")
            .field("started", &self.started.is_some())
            .field("skipped", &self.skipped.is_some())
            .finish()
    }
}
