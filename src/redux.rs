//! A small single-threaded state container.
//!
//! The store owns one immutable snapshot of the whole state. Every change goes
//! through [`Store::dispatch`], which runs the reducer, swaps the snapshot and
//! then notifies subscribers. Subscribers receive no arguments and pull the
//! new snapshot with [`Store::get_state`].

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use tracing::{debug, trace};

/// Actions that can produce the synthetic action a store reduces once at
/// construction to build its initial state.
pub trait InitAction {
    fn init() -> Self;
}

type Reducer<S, A> = Box<dyn Fn(Option<&S>, &A) -> S>;
type Listener = Rc<dyn Fn()>;

#[derive(Default)]
struct Listeners {
    next_id: u64,
    entries: Vec<(u64, Listener)>,
}

impl Listeners {
    fn insert(&mut self, listener: Listener) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push((id, listener));

        id
    }

    fn remove(&mut self, id: u64) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);

        self.entries.len() != before
    }

    fn snapshot(&self) -> Vec<Listener> {
        self.entries
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect()
    }
}

/// Handle returned by [`Store::subscribe`].
///
/// Dropping it does not unsubscribe.
pub struct Subscription {
    id: u64,
    listeners: Weak<RefCell<Listeners>>,
}

impl Subscription {
    /// Removes exactly the listener this handle was created for. Calling it
    /// again, or after the store is gone, does nothing.
    pub fn unsubscribe(&self) {
        if let Some(listeners) = self.listeners.upgrade() {
            if listeners.borrow_mut().remove(self.id) {
                trace!(listener = self.id, "listener removed");
            }
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}

pub struct Store<S, A> {
    state: RefCell<Rc<S>>,
    reducer: Reducer<S, A>,
    listeners: Rc<RefCell<Listeners>>,
}

impl<S: PartialEq, A: InitAction + fmt::Debug> Store<S, A> {
    /// Builds the initial state by reducing `A::init()` against no prior state.
    pub fn new<R>(reducer: R) -> Store<S, A>
    where
        R: Fn(Option<&S>, &A) -> S + 'static,
    {
        let initial_state = reducer(None, &A::init());

        Store {
            state: RefCell::new(Rc::new(initial_state)),
            reducer: Box::new(reducer),
            listeners: Rc::default(),
        }
    }

    /// Current snapshot. Holding on to it never blocks a dispatch.
    pub fn get_state(&self) -> Rc<S> {
        Rc::clone(&self.state.borrow())
    }

    /// Reduces `action`, replaces the snapshot, then calls every listener
    /// subscribed when notification starts, in subscription order.
    ///
    /// A listener may dispatch again; the nested dispatch finishes, including
    /// its own notifications, before the outer pass moves on.
    pub fn dispatch(&self, action: A) {
        debug!(?action, "dispatching action");

        let prior = self.get_state();
        let next_state = (self.reducer)(Some(&prior), &action);

        if *prior != next_state {
            self.state.replace(Rc::new(next_state));
        } else {
            trace!("state unchanged");
        }

        let listeners = self.listeners.borrow().snapshot();

        trace!(count = listeners.len(), "notifying listeners");

        for listener in listeners {
            listener();
        }
    }

    /// Registers `listener`; it runs from the next notification pass onward.
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn() + 'static,
    {
        let id = self.listeners.borrow_mut().insert(Rc::new(listener));

        trace!(listener = id, "listener added");

        Subscription {
            id,
            listeners: Rc::downgrade(&self.listeners),
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().entries.len()
    }
}

/// Combines per-slice reducers into one reducer over the whole state.
///
/// Every field of the state struct must be given a reducer. Each reducer is
/// called on every action and sees only its own slice of the prior state.
///
/// ```ignore
/// let reducer = combine_reducers!(TodoState, Action {
///     todos: todos,
///     visibility_filter: visibility_filter,
/// });
/// ```
#[macro_export]
macro_rules! combine_reducers {
    ($state:ident, $action:ty { $($slice:ident : $reducer:expr),+ $(,)? }) => {
        move |prior: Option<&$state>, action: &$action| -> $state {
            $state {
                $($slice: ($reducer)(prior.map(|state| &state.$slice), action),)+
            }
        }
    };
}
