use serde::{Deserialize, Serialize};

/// The ordered history of a walker's states across one simulation run.
///
/// Element 0 is the initial state; element `i` is the state after `i` steps.
/// A trajectory is append-only while the engine builds it and immutable once
/// returned. It is never empty, so [`Trajectory::initial`] and
/// [`Trajectory::last`] need no `Option`.
///
/// Every element is an independent clone captured at append time. For this to
/// be a real snapshot, `S::clone` must produce an independent value; ordinary
/// data types satisfy this automatically, while shared-interior types such as
/// `Rc<RefCell<_>>` do not and are outside the contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trajectory<S> {
    states: Vec<S>,
}

impl<S> Trajectory<S> {
    /// Seed a trajectory with its initial state, reserving room for `steps`
    /// more. Only the engine constructs trajectories, which is what keeps
    /// the non-empty invariant airtight.
    pub(crate) fn with_initial(initial: S, steps: usize) -> Self {
        let mut states = Vec::with_capacity(steps + 1);
        states.push(initial);
        Self { states }
    }

    /// Append the state reached after the next step.
    pub(crate) fn push(&mut self, state: S) {
        self.states.push(state);
    }

    /// The starting state (element 0).
    pub fn initial(&self) -> &S {
        &self.states[0]
    }

    /// The state after the final step.
    pub fn last(&self) -> &S {
        &self.states[self.states.len() - 1]
    }

    /// Number of stored states, always `step_count() + 1`.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// A trajectory always holds at least the initial state.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Number of steps taken during the run.
    pub fn step_count(&self) -> usize {
        self.states.len() - 1
    }

    /// The state after `i` steps, if the run lasted that long.
    pub fn get(&self, i: usize) -> Option<&S> {
        self.states.get(i)
    }

    /// All states in step order.
    pub fn states(&self) -> &[S] {
        &self.states
    }

    /// Consume the trajectory, yielding the owned state vector.
    pub fn into_states(self) -> Vec<S> {
        self.states
    }

    /// Iterate over states in step order.
    pub fn iter(&self) -> std::slice::Iter<'_, S> {
        self.states.iter()
    }
}

impl<S> std::ops::Index<usize> for Trajectory<S> {
    type Output = S;

    fn index(&self, i: usize) -> &S {
        &self.states[i]
    }
}

impl<S> IntoIterator for Trajectory<S> {
    type Item = S;
    type IntoIter = std::vec::IntoIter<S>;

    fn into_iter(self) -> Self::IntoIter {
        self.states.into_iter()
    }
}

impl<'a, S> IntoIterator for &'a Trajectory<S> {
    type Item = &'a S;
    type IntoIter = std::slice::Iter<'a, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.states.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Trajectory<i64> {
        let mut t = Trajectory::with_initial(0, 3);
        t.push(1);
        t.push(2);
        t.push(3);
        t
    }

    #[test]
    fn initial_and_last() {
        let t = sample();
        assert_eq!(*t.initial(), 0);
        assert_eq!(*t.last(), 3);
    }

    #[test]
    fn len_tracks_step_count() {
        let t = sample();
        assert_eq!(t.len(), 4);
        assert_eq!(t.step_count(), 3);
        assert!(!t.is_empty());
    }

    #[test]
    fn single_element_trajectory() {
        let t: Trajectory<i64> = Trajectory::with_initial(7, 0);
        assert_eq!(t.len(), 1);
        assert_eq!(t.step_count(), 0);
        assert_eq!(t.initial(), t.last());
    }

    #[test]
    fn indexing_and_get() {
        let t = sample();
        assert_eq!(t[2], 2);
        assert_eq!(t.get(2), Some(&2));
        assert_eq!(t.get(9), None);
    }

    #[test]
    fn iteration_is_step_ordered() {
        let t = sample();
        let collected: Vec<i64> = t.iter().copied().collect();
        assert_eq!(collected, vec![0, 1, 2, 3]);
        assert_eq!(t.into_states(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn serde_roundtrip() {
        let t = sample();
        let json = serde_json::to_string(&t).unwrap();
        let back: Trajectory<i64> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, t);
    }
}
