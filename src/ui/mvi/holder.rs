//! Observable state cell driven by a reducer.

use std::marker::PhantomData;
use std::sync::Arc;

use tokio::sync::watch;
use tokio_util::sync::CancellationToken;

use super::reducer::Reducer;

/// Holds one screen's state and publishes every transition.
///
/// Subscribers see the current state immediately and are notified only
/// when a dispatch actually changes it. Dispatches are linearized by the
/// channel lock. Once `closed` is cancelled the holder ignores intents, so
/// a torn-down controller never delivers another update.
pub struct StateHolder<R: Reducer> {
    state: Arc<watch::Sender<R::State>>,
    closed: CancellationToken,
    _reducer: PhantomData<fn() -> R>,
}

impl<R: Reducer> Clone for StateHolder<R> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            closed: self.closed.clone(),
            _reducer: PhantomData,
        }
    }
}

impl<R: Reducer> StateHolder<R> {
    /// Start from `R::State::default()`.
    pub fn new(closed: CancellationToken) -> Self {
        let (state, _) = watch::channel(R::State::default());
        Self {
            state: Arc::new(state),
            closed,
            _reducer: PhantomData,
        }
    }

    /// Clone of the current state.
    pub fn get(&self) -> R::State {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<R::State> {
        self.state.subscribe()
    }

    /// Apply `intent`. Returns whether the state changed.
    pub fn dispatch(&self, intent: R::Intent) -> bool {
        if self.closed.is_cancelled() {
            return false;
        }
        self.state.send_if_modified(|state| {
            let next = R::reduce(state.clone(), intent);
            if next == *state {
                false
            } else {
                *state = next;
                true
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::mvi::{Intent, UiState};

    #[derive(Debug, Clone, PartialEq, Default)]
    struct Counter(u32);
    impl UiState for Counter {}

    enum Step {
        Add(u32),
    }
    impl Intent for Step {}

    struct CounterReducer;
    impl Reducer for CounterReducer {
        type State = Counter;
        type Intent = Step;

        fn reduce(state: Counter, intent: Step) -> Counter {
            match intent {
                Step::Add(n) => Counter(state.0 + n),
            }
        }
    }

    #[test]
    fn dispatch_applies_reducer() {
        let holder = StateHolder::<CounterReducer>::new(CancellationToken::new());
        assert!(holder.dispatch(Step::Add(2)));
        assert_eq!(holder.get(), Counter(2));
    }

    #[test]
    fn unchanged_state_does_not_notify() {
        let holder = StateHolder::<CounterReducer>::new(CancellationToken::new());
        let rx = holder.subscribe();
        assert!(!holder.dispatch(Step::Add(0)));
        assert!(!rx.has_changed().unwrap());
    }

    #[test]
    fn closed_holder_ignores_intents() {
        let closed = CancellationToken::new();
        let holder = StateHolder::<CounterReducer>::new(closed.clone());
        closed.cancel();
        assert!(!holder.dispatch(Step::Add(5)));
        assert_eq!(holder.get(), Counter(0));
    }
}
