//! Game configuration options.

/// Configuration options for an elimination game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use elimdeck::GameOptions;
///
/// let options = GameOptions::default()
///     .with_initial_cards(3)
///     .with_tie_break_cards(1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameOptions {
    /// Cards dealt to each player in the initial deal.
    pub initial_cards: u8,
    /// Cards dealt to each remaining player in a tie-break round.
    pub tie_break_cards: u8,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            initial_cards: 3,
            tie_break_cards: 1,
        }
    }
}

impl GameOptions {
    /// Sets the number of cards in the initial deal.
    ///
    /// # Example
    ///
    /// ```
    /// use elimdeck::GameOptions;
    ///
    /// let options = GameOptions::default().with_initial_cards(2);
    /// assert_eq!(options.initial_cards, 2);
    /// ```
    #[must_use]
    pub const fn with_initial_cards(mut self, cards: u8) -> Self {
        self.initial_cards = cards;
        self
    }

    /// Sets the number of cards dealt per tie-break round.
    ///
    /// # Example
    ///
    /// ```
    /// use elimdeck::GameOptions;
    ///
    /// let options = GameOptions::default().with_tie_break_cards(2);
    /// assert_eq!(options.tie_break_cards, 2);
    /// ```
    #[must_use]
    pub const fn with_tie_break_cards(mut self, cards: u8) -> Self {
        self.tie_break_cards = cards;
        self
    }
}
