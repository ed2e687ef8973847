/// Watches the outer loop of a demand solver.
///
/// The Marshallian solver reports the utility level and bracket of every
/// intersection search; the Hicksian solver reports the expenditure instead,
/// and the round trip reports the target utility and expenditure of each
/// Hicksian solve.
/// Returning `Some(action)` (for example a stop request) ends the loop before
/// the next re-anchoring, and `None` lets it run to convergence or its
/// iteration cap.
///
/// Any `FnMut(&E) -> Option<A>` closure is an observer, so callers can record
/// the path of a solve inline. `()` ignores every event.
pub trait Observer<E, A> {
    /// Inspects one solver event and optionally asks the solver to act on it.
    fn observe(&mut self, event: &E) -> Option<A>;
}

impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}
