use crate::error::DeckError;

/// A navigation request coming from the keyboard or the control bar.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Command {
    Next,     // One slide forward, wrapping to the first
    Previous, // One slide back, wrapping to the last
    First,
    Last,
    GoTo(usize), // 0-based, taken modulo the deck size
}

/// Index of the slide on screen. Always inside `0..total`.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct NavigationState {
    current: usize,
    total: usize,
}

impl NavigationState {
    pub fn new(total: usize) -> Result<Self, DeckError> {
        if total == 0 {
            return Err(DeckError::EmptyDeck);
        }
        Ok(Self { current: 0, total })
    }

    pub fn starting_at(total: usize, current: usize) -> Result<Self, DeckError> {
        let state = Self::new(total)?;
        if current >= total {
            return Err(DeckError::StartOutOfRange { requested: current + 1, total });
        }
        Ok(Self { current, ..state })
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn next(&mut self) {
        self.current = (self.current + 1) % self.total;
    }

    pub fn previous(&mut self) {
        self.current = (self.current + self.total - 1) % self.total;
    }

    pub fn first(&mut self) {
        self.current = 0;
    }

    pub fn last(&mut self) {
        self.current = self.total - 1;
    }

    pub fn go_to(&mut self, index: usize) {
        self.current = index % self.total;
    }

    pub fn apply(&mut self, command: Command) {
        match command {
            Command::Next => self.next(),
            Command::Previous => self.previous(),
            Command::First => self.first(),
            Command::Last => self.last(),
            Command::GoTo(index) => self.go_to(index),
        }
    }

    /// Text for the counter under the viewport, e.g. `"3 / 8"`.
    pub fn indicator(&self) -> String {
        format!("{} / {}", self.current + 1, self.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_empty_deck_is_rejected() {
        assert_eq!(NavigationState::new(0), Err(DeckError::EmptyDeck));
        assert_eq!(NavigationState::starting_at(0, 0), Err(DeckError::EmptyDeck));
    }

    #[test]
    fn test_start_out_of_range() {
        assert_eq!(
            NavigationState::starting_at(8, 8),
            Err(DeckError::StartOutOfRange { requested: 9, total: 8 })
        );
        assert_eq!(NavigationState::starting_at(8, 7).map(|s| s.current()), Ok(7));
    }

    #[test]
    fn test_wraps_at_both_ends() {
        let mut state = NavigationState::starting_at(8, 7).unwrap();
        state.next();
        assert_eq!(state.current(), 0);

        state.previous();
        assert_eq!(state.current(), 7);
    }

    #[test]
    fn test_indicator_scenario() {
        let mut state = NavigationState::new(8).unwrap();
        assert_eq!(state.indicator(), "1 / 8");

        state.next();
        assert_eq!(state.indicator(), "2 / 8");

        state.first();
        state.previous();
        assert_eq!(state.indicator(), "8 / 8");
    }

    #[test]
    fn test_first_last_and_go_to() {
        let mut state = NavigationState::new(8).unwrap();
        state.apply(Command::Last);
        assert_eq!(state.current(), 7);
        state.apply(Command::First);
        assert_eq!(state.current(), 0);
        state.go_to(11);
        assert_eq!(state.current(), 3);
    }

    #[test]
    fn test_single_slide_deck_stays_put() {
        let mut state = NavigationState::new(1).unwrap();
        state.next();
        state.previous();
        assert_eq!(state.current(), 0);
        assert_eq!(state.indicator(), "1 / 1");
    }

    fn command() -> impl Strategy<Value = Command> {
        prop_oneof![
            Just(Command::Next),
            Just(Command::Previous),
            Just(Command::First),
            Just(Command::Last),
            (0usize..32).prop_map(Command::GoTo),
        ]
    }

    proptest! {
        #[test]
        fn index_stays_in_bounds(
            total in 1usize..64,
            commands in proptest::collection::vec(command(), 0..200),
        ) {
            let mut state = NavigationState::new(total).unwrap();
            for command in commands {
                state.apply(command);
                prop_assert!(state.current() < total);
            }
        }

        #[test]
        fn next_total_times_is_identity(total in 1usize..64, start in 0usize..64) {
            let start = start % total;
            let mut state = NavigationState::starting_at(total, start).unwrap();
            for _ in 0..total {
                state.next();
            }
            prop_assert_eq!(state.current(), start);
        }

        #[test]
        fn previous_undoes_next(total in 1usize..64, start in 0usize..64) {
            let start = start % total;
            let mut state = NavigationState::starting_at(total, start).unwrap();
            state.next();
            state.previous();
            prop_assert_eq!(state.current(), start);

            state.previous();
            state.next();
            prop_assert_eq!(state.current(), start);
        }
    }
}
