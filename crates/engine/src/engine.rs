use std::convert::Infallible;

use crate::trajectory::Trajectory;

/// Argument errors for the infallible entry points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("step count must be non-negative, got {0}")]
    NegativeSteps(i64),
}

/// Errors from [`try_run`]: either a bad argument or a failure raised by one
/// of the supplied callbacks. Callback errors are carried verbatim, never
/// retried or recovered.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RunError<E> {
    #[error("step count must be non-negative, got {0}")]
    NegativeSteps(i64),
    #[error("walker callback failed: {0}")]
    Callback(E),
}

/// A pluggable walker: a starting-state producer plus a transition rule.
///
/// The trait form of the initializer/step pair, for walkers that carry their
/// own memory (an RNG, counters). Both methods take `&mut self` so that
/// memory lives inside each walker instance rather than in shared captured
/// state; separate instances are fully independent.
///
/// `State: Clone` is the snapshot bound: the engine clones each state before
/// storing it, so later steps can never reach back into the trajectory.
pub trait Walker {
    type State: Clone;

    /// Produce the starting state.
    fn initialize(&mut self) -> Self::State;

    /// Produce the state reached one step after `current`.
    fn step(&mut self, current: &Self::State) -> Self::State;
}

/// Run a walk with plain closures: one `initialize` call, exactly `steps`
/// `step` calls, sequential and never reentrant.
///
/// The returned trajectory has exactly `steps + 1` elements. A `steps` of 0
/// yields just the initial state. Negative `steps` fails before either
/// closure is invoked.
pub fn run<S, I, F>(initialize: I, mut step: F, steps: i64) -> Result<Trajectory<S>, EngineError>
where
    S: Clone,
    I: FnOnce() -> S,
    F: FnMut(&S) -> S,
{
    try_run(
        || Ok::<_, Infallible>(initialize()),
        |current| Ok(step(current)),
        steps,
    )
    .map_err(|err| match err {
        RunError::NegativeSteps(n) => EngineError::NegativeSteps(n),
        RunError::Callback(never) => match never {},
    })
}

/// Run a walk whose initializer or step function can fail.
///
/// A callback error aborts the run immediately: no further callbacks are
/// invoked and no partial trajectory is returned. Same shape guarantees as
/// [`run`] on success.
pub fn try_run<S, E, I, F>(
    initialize: I,
    mut step: F,
    steps: i64,
) -> Result<Trajectory<S>, RunError<E>>
where
    S: Clone,
    I: FnOnce() -> Result<S, E>,
    F: FnMut(&S) -> Result<S, E>,
{
    if steps < 0 {
        return Err(RunError::NegativeSteps(steps));
    }
    let steps = steps as usize;
    let _span = tracing::debug_span!("walk_run", steps).entered();

    let mut current = initialize().map_err(RunError::Callback)?;
    let mut trajectory = Trajectory::with_initial(current.clone(), steps);
    for _ in 0..steps {
        let next = step(&current).map_err(RunError::Callback)?;
        trajectory.push(next.clone());
        current = next;
    }
    tracing::trace!(states = trajectory.len(), "walk complete");
    Ok(trajectory)
}

/// Run a [`Walker`] for `steps` steps.
pub fn run_walker<W: Walker>(
    walker: &mut W,
    steps: i64,
) -> Result<Trajectory<W::State>, EngineError> {
    if steps < 0 {
        return Err(EngineError::NegativeSteps(steps));
    }
    let steps = steps as usize;
    let _span = tracing::debug_span!("walk_run", steps).entered();

    let mut current = walker.initialize();
    let mut trajectory = Trajectory::with_initial(current.clone(), steps);
    for _ in 0..steps {
        let next = walker.step(&current);
        trajectory.push(next.clone());
        current = next;
    }
    tracing::trace!(states = trajectory.len(), "walk complete");
    Ok(trajectory)
}
