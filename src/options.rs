//! Game configuration options.

/// Chip denominations offered by default.
pub const DEFAULT_CHIPS: [usize; 4] = [10, 25, 50, 100];

/// Configuration options for a blackjack session.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjsolo::GameOptions;
///
/// let options = GameOptions::default()
///     .with_starting_bankroll(500)
///     .with_stand_on_soft_17(false);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    /// Bankroll the session starts with.
    pub starting_bankroll: usize,
    /// Dealer draws while below this value.
    pub dealer_stands_on: u8,
    /// Whether dealer stands on a soft hand at the stand value.
    pub stand_on_soft_17: bool,
    /// Whether the player may double down.
    pub allow_double: bool,
    /// Chip denominations available for betting.
    pub chips: [usize; 4],
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            starting_bankroll: 1000,
            dealer_stands_on: 17,
            stand_on_soft_17: true,
            allow_double: true,
            chips: DEFAULT_CHIPS,
        }
    }
}

impl GameOptions {
    /// Sets the starting bankroll.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsolo::GameOptions;
    ///
    /// let options = GameOptions::default().with_starting_bankroll(250);
    /// assert_eq!(options.starting_bankroll, 250);
    /// ```
    #[must_use]
    pub const fn with_starting_bankroll(mut self, bankroll: usize) -> Self {
        self.starting_bankroll = bankroll;
        self
    }

    /// Sets the value the dealer stands on.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsolo::GameOptions;
    ///
    /// let options = GameOptions::default().with_dealer_stands_on(18);
    /// assert_eq!(options.dealer_stands_on, 18);
    /// ```
    #[must_use]
    pub const fn with_dealer_stands_on(mut self, value: u8) -> Self {
        self.dealer_stands_on = value;
        self
    }

    /// Sets whether dealer stands on soft 17.
    ///
    /// When `false`, the dealer also draws on a soft hand equal to
    /// [`dealer_stands_on`](Self::dealer_stands_on).
    ///
    /// # Example
    ///
    /// ```
    /// use bjsolo::GameOptions;
    ///
    /// let options = GameOptions::default().with_stand_on_soft_17(false);
    /// assert_eq!(options.stand_on_soft_17, false);
    /// ```
    #[must_use]
    pub const fn with_stand_on_soft_17(mut self, stand: bool) -> Self {
        self.stand_on_soft_17 = stand;
        self
    }

    /// Sets whether doubling down is allowed.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsolo::GameOptions;
    ///
    /// let options = GameOptions::default().with_double(false);
    /// assert_eq!(options.allow_double, false);
    /// ```
    #[must_use]
    pub const fn with_double(mut self, allowed: bool) -> Self {
        self.allow_double = allowed;
        self
    }

    /// Sets the chip denominations.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsolo::GameOptions;
    ///
    /// let options = GameOptions::default().with_chips([5, 10, 20, 50]);
    /// assert_eq!(options.chips, [5, 10, 20, 50]);
    /// ```
    #[must_use]
    pub const fn with_chips(mut self, chips: [usize; 4]) -> Self {
        self.chips = chips;
        self
    }
}
