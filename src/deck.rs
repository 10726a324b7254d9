//! The deck a round draws from.

extern crate alloc;

use alloc::vec::Vec;

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::{CardError, EmptyDeckError};

/// A single 52-card deck.
///
/// The top of the deck is the end of the internal sequence, so drawing is a
/// `pop`.
#[derive(Debug, Clone)]
pub struct Deck {
    /// Remaining cards, bottom first.
    cards: Vec<Card>,
    /// Random number generator used for every shuffle of this deck.
    rng: ChaCha8Rng,
}

impl Deck {
    /// Creates a freshly shuffled deck from the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use bjrules::{DECK_SIZE, Deck};
    ///
    /// let deck = Deck::new(42);
    /// assert_eq!(deck.len(), DECK_SIZE);
    /// ```
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let mut deck = Self {
            cards: Vec::with_capacity(DECK_SIZE),
            rng: ChaCha8Rng::seed_from_u64(seed),
        };
        deck.shuffle();
        deck
    }

    /// Creates a deck that deals `cards` in the order given.
    ///
    /// The seed is only used once the stacked cards run out and the deck is
    /// reshuffled.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::TooManyCards`] for more than [`DECK_SIZE`] cards,
    /// or [`CardError::DuplicateCard`] if a card appears twice.
    ///
    /// # Example
    ///
    /// ```
    /// use bjrules::{Card, Deck, Rank, Suit};
    ///
    /// let ace = Card::new(Rank::Ace, Suit::Spades);
    /// let king = Card::new(Rank::King, Suit::Hearts);
    /// let mut deck = Deck::stacked([ace, king], 7).unwrap();
    /// assert_eq!(deck.draw_top(), Ok(ace));
    /// assert_eq!(deck.draw_top(), Ok(king));
    /// assert!(deck.is_empty());
    /// ```
    pub fn stacked(cards: impl IntoIterator<Item = Card>, seed: u64) -> Result<Self, CardError> {
        let mut cards: Vec<Card> = cards.into_iter().collect();
        if cards.len() > DECK_SIZE {
            return Err(CardError::TooManyCards(cards.len()));
        }

        let mut seen = [false; DECK_SIZE];
        for card in &cards {
            let slot = &mut seen[usize::from(card.index())];
            if *slot {
                return Err(CardError::DuplicateCard(*card));
            }
            *slot = true;
        }

        cards.reverse();
        Ok(Self {
            cards,
            rng: ChaCha8Rng::seed_from_u64(seed),
        })
    }

    /// Replaces the remaining cards with a full, uniformly shuffled deck.
    pub fn shuffle(&mut self) {
        self.cards.clear();
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                self.cards.push(Card::new(rank, suit));
            }
        }

        self.cards.shuffle(&mut self.rng);
    }

    /// Removes and returns the top card.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyDeckError`] if no cards are left.
    pub fn draw_top(&mut self) -> Result<Card, EmptyDeckError> {
        self.cards.pop().ok_or(EmptyDeckError)
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the remaining cards, top card last.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns whether `card` is still in the deck.
    #[must_use]
    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }
}
