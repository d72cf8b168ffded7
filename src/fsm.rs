//! Table-driven finite state machine
//!
//! The machine knows nothing about what its states and triggers mean. It owns
//! a dense `state_count x trigger_count` table of optional targets; callers
//! register the transitions they care about during setup and feed triggers in
//! afterwards. Unmapped (state, trigger) pairs leave the state unchanged.

use std::marker::PhantomData;

use crate::error::FsmError;

/// Generic state machine over index-like states `S` and triggers `T`
#[derive(Debug, Clone)]
pub struct StateMachine<S, T> {
    state_count: usize,
    trigger_count: usize,
    current: S,
    /// Row-major: `table[state * trigger_count + trigger]`
    table: Vec<Option<S>>,
    _trigger: PhantomData<T>,
}

impl<S, T> StateMachine<S, T>
where
    S: Copy + Into<usize>,
    T: Copy + Into<usize>,
{
    /// Create a machine with an empty transition table.
    pub fn new(state_count: usize, trigger_count: usize, initial: S) -> Result<Self, FsmError> {
        if state_count == 0 || trigger_count == 0 {
            return Err(FsmError::EmptyUniverse {
                state_count,
                trigger_count,
            });
        }
        let initial_index: usize = initial.into();
        if initial_index >= state_count {
            return Err(FsmError::StateOutOfRange {
                state: initial_index,
                state_count,
            });
        }

        Ok(Self {
            state_count,
            trigger_count,
            current: initial,
            table: vec![None; state_count * trigger_count],
            _trigger: PhantomData,
        })
    }

    /// Register `from --trigger--> to`. Re-registering a pair overwrites it.
    pub fn on(&mut self, from: S, trigger: T, to: S) -> Result<(), FsmError> {
        self.check_state(to)?;
        let slot = self.slot(from, trigger)?;
        self.table[slot] = Some(to);
        Ok(())
    }

    /// Feed a trigger into the machine.
    ///
    /// Returns `true` if (current, trigger) was mapped and the state was
    /// updated (possibly to itself).
    pub fn trigger(&mut self, trigger: T) -> bool {
        match self.slot(self.current, trigger) {
            Ok(slot) => match self.table[slot] {
                Some(next) => {
                    self.current = next;
                    true
                }
                None => false,
            },
            Err(err) => {
                log::debug!("Ignoring trigger: {}", err);
                false
            }
        }
    }

    /// Current state
    #[inline]
    pub fn state(&self) -> S {
        self.current
    }

    /// Registered target for (from, trigger), if any
    pub fn target(&self, from: S, trigger: T) -> Option<S> {
        self.slot(from, trigger).ok().and_then(|slot| self.table[slot])
    }

    /// Check if a trigger would be handled from the current state
    pub fn can_trigger(&self, trigger: T) -> bool {
        self.target(self.current, trigger).is_some()
    }

    fn check_state(&self, state: S) -> Result<usize, FsmError> {
        let index: usize = state.into();
        if index >= self.state_count {
            return Err(FsmError::StateOutOfRange {
                state: index,
                state_count: self.state_count,
            });
        }
        Ok(index)
    }

    fn slot(&self, state: S, trigger: T) -> Result<usize, FsmError> {
        let state_index = self.check_state(state)?;
        let trigger_index: usize = trigger.into();
        if trigger_index >= self.trigger_count {
            return Err(FsmError::TriggerOutOfRange {
                trigger: trigger_index,
                trigger_count: self.trigger_count,
            });
        }
        Ok(state_index * self.trigger_count + trigger_index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Raw indices are enough to exercise the engine
    type Machine = StateMachine<usize, usize>;

    #[test]
    fn test_new_rejects_empty_universe() {
        assert_eq!(
            Machine::new(0, 3, 0).unwrap_err(),
            FsmError::EmptyUniverse {
                state_count: 0,
                trigger_count: 3
            }
        );
        assert!(Machine::new(3, 0, 0).is_err());
    }

    #[test]
    fn test_new_rejects_initial_out_of_range() {
        assert_eq!(
            Machine::new(3, 2, 3).unwrap_err(),
            FsmError::StateOutOfRange {
                state: 3,
                state_count: 3
            }
        );
    }

    #[test]
    fn test_initial_state() {
        let fsm = Machine::new(4, 2, 2).unwrap();
        assert_eq!(fsm.state(), 2);
    }

    #[test]
    fn test_registered_transition() {
        let mut fsm = Machine::new(3, 2, 0).unwrap();
        fsm.on(0, 1, 2).unwrap();
        assert!(fsm.trigger(1));
        assert_eq!(fsm.state(), 2);
    }

    #[test]
    fn test_unmapped_trigger_is_noop() {
        let mut fsm = Machine::new(3, 2, 0).unwrap();
        fsm.on(0, 1, 2).unwrap();
        assert!(!fsm.trigger(0));
        assert_eq!(fsm.state(), 0);
    }

    #[test]
    fn test_out_of_range_trigger_is_noop() {
        let mut fsm = Machine::new(3, 2, 0).unwrap();
        assert!(!fsm.trigger(7));
        assert_eq!(fsm.state(), 0);
    }

    #[test]
    fn test_last_registration_wins() {
        let mut fsm = Machine::new(3, 1, 0).unwrap();
        fsm.on(0, 0, 1).unwrap();
        fsm.on(0, 0, 2).unwrap();
        fsm.trigger(0);
        assert_eq!(fsm.state(), 2);
    }

    #[test]
    fn test_on_rejects_out_of_range() {
        let mut fsm = Machine::new(3, 2, 0).unwrap();
        assert!(matches!(
            fsm.on(3, 0, 1),
            Err(FsmError::StateOutOfRange { state: 3, .. })
        ));
        assert!(matches!(
            fsm.on(0, 0, 5),
            Err(FsmError::StateOutOfRange { state: 5, .. })
        ));
        assert!(matches!(
            fsm.on(0, 2, 1),
            Err(FsmError::TriggerOutOfRange { trigger: 2, .. })
        ));
    }

    #[test]
    fn test_self_loop_is_reported_as_handled() {
        let mut fsm = Machine::new(2, 1, 1).unwrap();
        fsm.on(1, 0, 1).unwrap();
        assert!(fsm.trigger(0));
        assert_eq!(fsm.state(), 1);
    }

    #[test]
    fn test_target_and_can_trigger() {
        let mut fsm = Machine::new(3, 2, 0).unwrap();
        fsm.on(0, 1, 2).unwrap();
        assert_eq!(fsm.target(0, 1), Some(2));
        assert_eq!(fsm.target(1, 1), None);
        assert!(fsm.can_trigger(1));
        assert!(!fsm.can_trigger(0));
    }
}
