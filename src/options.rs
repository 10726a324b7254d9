//! Rule configuration.

/// Configuration options for a round.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjrules::GameOptions;
///
/// let options = GameOptions::default()
///     .with_stand_on_soft_17(false)
///     .with_auto_stand_on_21(true);
/// assert_eq!(options.dealer_stands_on, 17);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameOptions {
    /// Dealer stops drawing once their total reaches this value.
    pub dealer_stands_on: u8,
    /// Whether the dealer stands on a soft total equal to `dealer_stands_on`.
    pub stand_on_soft_17: bool,
    /// Whether reaching exactly 21 ends the player's turn without a Stand.
    pub auto_stand_on_21: bool,
    /// Whether an exhausted deck is replaced by a fresh shuffled one.
    pub reshuffle_when_empty: bool,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            dealer_stands_on: 17,
            stand_on_soft_17: true,
            auto_stand_on_21: false,
            reshuffle_when_empty: true,
        }
    }
}

impl GameOptions {
    /// Sets the total at which the dealer stops drawing.
    ///
    /// # Example
    ///
    /// ```
    /// use bjrules::GameOptions;
    ///
    /// let options = GameOptions::default().with_dealer_stands_on(16);
    /// assert_eq!(options.dealer_stands_on, 16);
    /// ```
    #[must_use]
    pub const fn with_dealer_stands_on(mut self, total: u8) -> Self {
        self.dealer_stands_on = total;
        self
    }

    /// Sets whether dealer stands on soft 17.
    ///
    /// # Example
    ///
    /// ```
    /// use bjrules::GameOptions;
    ///
    /// let options = GameOptions::default().with_stand_on_soft_17(false);
    /// assert_eq!(options.stand_on_soft_17, false);
    /// ```
    #[must_use]
    pub const fn with_stand_on_soft_17(mut self, stand: bool) -> Self {
        self.stand_on_soft_17 = stand;
        self
    }

    /// Sets whether a player total of exactly 21 stands automatically.
    ///
    /// # Example
    ///
    /// ```
    /// use bjrules::GameOptions;
    ///
    /// let options = GameOptions::default().with_auto_stand_on_21(true);
    /// assert_eq!(options.auto_stand_on_21, true);
    /// ```
    #[must_use]
    pub const fn with_auto_stand_on_21(mut self, auto_stand: bool) -> Self {
        self.auto_stand_on_21 = auto_stand;
        self
    }

    /// Sets whether an empty deck is reshuffled before the next draw.
    ///
    /// # Example
    ///
    /// ```
    /// use bjrules::GameOptions;
    ///
    /// let options = GameOptions::default().with_reshuffle_when_empty(false);
    /// assert_eq!(options.reshuffle_when_empty, false);
    /// ```
    #[must_use]
    pub const fn with_reshuffle_when_empty(mut self, reshuffle: bool) -> Self {
        self.reshuffle_when_empty = reshuffle;
        self
    }
}
