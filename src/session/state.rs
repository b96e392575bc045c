//! Session state: the single owned object the UI drives.
//!
//! ## Lifecycle
//!
//! - The collection starts empty and is replaced only by a successful import
//!   or emptied by a reset.
//! - Filters start from the config and change only through
//!   `toggle_category`.
//! - The turn starts at the first player and flips on every successful draw.
//! - The current card is replaced on every successful draw and cleared on
//!   import and reset.
//!
//! ## Draws in flight
//!
//! A UI that animates before revealing the card splits a draw into
//! `begin_draw` and `complete_draw`. While a draw is in flight any other
//! draw request is refused with `Busy`, so two draws never overlap.
//! `draw_next` does both halves at once.
//!
//! A draw in flight ends when its ticket is completed or passed to
//! `cancel_draw`. A successful import and a reset also cancel it, so a
//! ticket dropped by the UI never locks the session past the next deck
//! change.

use serde_json::Value;
use std::io::Read;
use tracing::{debug, info, warn};

use super::status::StatusMessage;
use crate::cards::{self, Card, Category, Collection, FilterSet, ValidationMode};
use crate::core::{PlayerId, PlayerMap, RandomSource, SessionConfig, Turn};
use crate::draw::{self, DrawResult};
use crate::error::ImportResult;

/// What `draw_next` / `complete_draw` did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DrawOutcome {
    /// A card was drawn and the turn passed to `next_player`.
    Drawn { card: Card, next_player: PlayerId },
    /// The pool is empty. Turn and current card are unchanged.
    NoEligibleCard,
    /// Another draw is in flight. Nothing changed.
    Busy,
    /// The ticket does not belong to the draw in flight. Nothing changed.
    Ignored,
}

impl DrawOutcome {
    /// The drawn card, if any.
    #[must_use]
    pub fn card(&self) -> Option<&Card> {
        match self {
            DrawOutcome::Drawn { card, .. } => Some(card),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_drawn(&self) -> bool {
        matches!(self, DrawOutcome::Drawn { .. })
    }
}

/// Why `begin_draw` refused to start a draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrawRefusal {
    NoEligibleCard,
    Busy,
}

/// Proof that a draw is in flight. Consumed by `complete_draw` or
/// `cancel_draw`.
#[derive(Debug, PartialEq, Eq)]
#[must_use = "a draw stays in flight until its ticket is completed"]
pub struct DrawTicket {
    id: u64,
}

/// The whole game session.
///
/// ## Example
///
/// ```
/// use prompt_deck::core::{PlayerId, ScriptedSource};
/// use prompt_deck::session::SessionState;
///
/// let mut session = SessionState::default();
/// session
///     .import_bytes(br#"[{"type":"challenge","category":"deep","text":"Share a memory."}]"#)
///     .unwrap();
///
/// let mut rng = ScriptedSource::new(vec![0]);
/// let outcome = session.draw_next(&mut rng);
///
/// assert_eq!(outcome.card().unwrap().text, "Share a memory.");
/// assert_eq!(session.active_player(), PlayerId::SECOND);
/// ```
#[derive(Clone, Debug)]
pub struct SessionState {
    collection: Collection,
    filters: FilterSet,
    turn: Turn,
    current: Option<Card>,
    names: PlayerMap<String>,
    validation: ValidationMode,
    status: Option<StatusMessage>,
    in_flight: Option<u64>,
    next_ticket: u64,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new(&SessionConfig::default())
    }
}

impl SessionState {
    /// Create a session with no deck loaded.
    #[must_use]
    pub fn new(config: &SessionConfig) -> Self {
        Self {
            collection: Collection::new(),
            filters: config.filters,
            turn: Turn::new(),
            current: None,
            names: config.player_names.clone(),
            validation: config.validation,
            status: None,
            in_flight: None,
            next_ticket: 0,
        }
    }

    // === Accessors ===

    /// The loaded deck (empty when none is loaded).
    #[must_use]
    pub fn collection(&self) -> &Collection {
        &self.collection
    }

    #[must_use]
    pub fn filters(&self) -> &FilterSet {
        &self.filters
    }

    /// The last card drawn, if any.
    #[must_use]
    pub fn current_card(&self) -> Option<&Card> {
        self.current.as_ref()
    }

    #[must_use]
    pub fn turn(&self) -> Turn {
        self.turn
    }

    /// The player who draws next.
    #[must_use]
    pub fn active_player(&self) -> PlayerId {
        self.turn.active()
    }

    #[must_use]
    pub fn active_player_name(&self) -> &str {
        &self.names[self.turn.active()]
    }

    #[must_use]
    pub fn player_name(&self, player: PlayerId) -> &str {
        &self.names[player]
    }

    /// Rename a player. Any text is accepted, including empty.
    pub fn set_player_name(&mut self, player: PlayerId, name: impl Into<String>) {
        self.names[player] = name.into();
    }

    #[must_use]
    pub fn validation_mode(&self) -> ValidationMode {
        self.validation
    }

    /// The latest import/reset message, until cleared.
    #[must_use]
    pub fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    /// Drop the status message.
    pub fn clear_status(&mut self) {
        self.status = None;
    }

    /// Number of cards currently eligible for drawing.
    #[must_use]
    pub fn pool_size(&self) -> usize {
        self.filters.pool_size(&self.collection)
    }

    /// Cards currently eligible for drawing, in deck order.
    #[must_use]
    pub fn pool(&self) -> Vec<&Card> {
        self.filters.active_subset(&self.collection)
    }

    /// Would a draw right now produce a card?
    #[must_use]
    pub fn can_draw(&self) -> bool {
        self.in_flight.is_none() && self.pool_size() > 0
    }

    /// Is a draw between `begin_draw` and `complete_draw`?
    #[must_use]
    pub fn is_drawing(&self) -> bool {
        self.in_flight.is_some()
    }

    // === Collection ===

    /// Replace the deck with an already-parsed payload.
    ///
    /// All-or-nothing: on rejection the deck is left exactly as it was.
    /// A successful import cancels any draw in flight.
    /// Returns the number of cards loaded.
    pub fn import_collection(&mut self, raw: &Value) -> ImportResult<usize> {
        let result = cards::validate(raw, self.validation);
        self.apply_import(result)
    }

    /// Parse raw bytes and import them.
    pub fn import_bytes(&mut self, bytes: &[u8]) -> ImportResult<usize> {
        let result = cards::parse_collection(bytes, self.validation);
        self.apply_import(result)
    }

    /// Read a payload to completion and import it.
    pub fn import_reader<R: Read>(&mut self, reader: R) -> ImportResult<usize> {
        let result = cards::read_collection(reader, self.validation);
        self.apply_import(result)
    }

    fn apply_import(&mut self, result: ImportResult<Collection>) -> ImportResult<usize> {
        match result {
            Ok(collection) => {
                let count = collection.len();
                self.collection = collection;
                self.current = None;
                self.abandon_draw();
                self.status = Some(StatusMessage::Loaded { count });
                info!(count, pool = self.pool_size(), "imported card collection");
                Ok(count)
            }
            Err(reason) => {
                warn!(%reason, "rejected card collection");
                self.status = Some(StatusMessage::Rejected(reason.clone()));
                Err(reason)
            }
        }
    }

    /// Empty the deck and clear the current card. Filters and turn stay.
    ///
    /// Cancels any draw in flight.
    pub fn reset_collection(&mut self) {
        self.collection = Collection::new();
        self.current = None;
        self.abandon_draw();
        self.status = Some(StatusMessage::Emptied);
        info!("card collection emptied");
    }

    // === Filters ===

    /// Flip one category. The card on screen stays, even if now filtered out.
    ///
    /// Returns the category's new flag.
    pub fn toggle_category(&mut self, category: Category) -> bool {
        let enabled = self.filters.toggle(category);
        debug!(%category, enabled, pool = self.pool_size(), "toggled category");
        enabled
    }

    // === Drawing ===

    /// Draw a card and pass the turn, atomically.
    pub fn draw_next<R>(&mut self, rng: &mut R) -> DrawOutcome
    where
        R: RandomSource + ?Sized,
    {
        if self.in_flight.is_some() {
            debug!("draw requested while another is in flight");
            return DrawOutcome::Busy;
        }
        self.apply_draw(rng)
    }

    /// Start a draw without choosing the card yet.
    ///
    /// Refused when the pool is empty or a draw is already in flight.
    pub fn begin_draw(&mut self) -> Result<DrawTicket, DrawRefusal> {
        if self.in_flight.is_some() {
            debug!("draw requested while another is in flight");
            return Err(DrawRefusal::Busy);
        }
        if self.pool_size() == 0 {
            return Err(DrawRefusal::NoEligibleCard);
        }

        let id = self.next_ticket;
        self.next_ticket += 1;
        self.in_flight = Some(id);
        Ok(DrawTicket { id })
    }

    /// Finish the draw `ticket` started.
    ///
    /// The pool is taken from the session as it is now, so a toggle made
    /// while the draw was in flight is respected. A ticket whose draw was
    /// cancelled, by `cancel_draw` or by an import or reset, is `Ignored`.
    pub fn complete_draw<R>(&mut self, ticket: DrawTicket, rng: &mut R) -> DrawOutcome
    where
        R: RandomSource + ?Sized,
    {
        if self.in_flight != Some(ticket.id) {
            debug!(ticket = ticket.id, "ignored stale draw ticket");
            return DrawOutcome::Ignored;
        }
        self.in_flight = None;
        self.apply_draw(rng)
    }

    /// Give up the draw `ticket` started, without drawing.
    ///
    /// Returns `false` if the ticket no longer belongs to the draw in flight.
    pub fn cancel_draw(&mut self, ticket: DrawTicket) -> bool {
        if self.in_flight != Some(ticket.id) {
            debug!(ticket = ticket.id, "ignored stale draw ticket");
            return false;
        }
        self.in_flight = None;
        debug!(ticket = ticket.id, "cancelled draw");
        true
    }

    fn abandon_draw(&mut self) {
        if let Some(id) = self.in_flight.take() {
            debug!(ticket = id, "abandoned draw in flight");
        }
    }

    fn apply_draw<R>(&mut self, rng: &mut R) -> DrawOutcome
    where
        R: RandomSource + ?Sized,
    {
        let card = match draw::draw(&self.collection, &self.filters, rng) {
            DrawResult::Selected { card, .. } => card.clone(),
            DrawResult::EmptyPool => {
                debug!("no eligible card to draw");
                return DrawOutcome::NoEligibleCard;
            }
        };

        self.current = Some(card.clone());
        let next_player = self.turn.advance();
        debug!(%next_player, category = card.category.as_str(), "drew card");

        DrawOutcome::Drawn { card, next_player }
    }
}
