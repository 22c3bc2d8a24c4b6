use anyhow::Result;

use crate::clock::{Clock, LocalClock};
use crate::errors::ErrorContext;
use crate::models::*;
use crate::sm2_scheduler::{ReviewState, Sm2Scheduler};
use crate::{log_service_error, log_service_start, log_service_success, log_service_warn};

const SERVICE: &str = "review_service";

/// Runs review sessions over an in-memory deck. Persisting the deck is up to the caller.
#[derive(Clone)]
pub struct ReviewService<C = LocalClock> {
    scheduler: Sm2Scheduler<C>,
}

impl ReviewService<LocalClock> {
    pub fn new() -> Self {
        Self {
            scheduler: Sm2Scheduler::new(),
        }
    }
}

impl Default for ReviewService<LocalClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> ReviewService<C> {
    pub fn with_scheduler(scheduler: Sm2Scheduler<C>) -> Self {
        Self { scheduler }
    }

    pub fn scheduler(&self) -> &Sm2Scheduler<C> {
        &self.scheduler
    }

    pub fn cards_due_for_review(&self, deck: &Deck) -> Vec<Flashcard> {
        log_service_start!(SERVICE, "cards_due_for_review", deck_id = deck.id, card_count = deck.cards.len());

        let due: Vec<Flashcard> = self
            .scheduler
            .due_cards(&deck.cards)
            .into_iter()
            .cloned()
            .collect();

        log_service_success!(SERVICE, "cards_due_for_review", card_count = due.len(), "review queue built");
        due
    }

    /// Schedules one card and stores the result back into the deck.
    /// Returns `Ok(None)` when the deck has no card with that id.
    pub fn review_card(
        &self,
        deck: &mut Deck,
        card_id: &str,
        perceived: Difficulty,
    ) -> Result<Option<Flashcard>> {
        log_service_start!(SERVICE, "review_card", card_id = card_id);

        let Some(slot) = deck.cards.iter_mut().find(|card| card.id == card_id) else {
            log_service_warn!(SERVICE, "review_card", card_id = card_id, "card not found in deck");
            return Ok(None);
        };

        let updated_card = match self.scheduler.compute_next_review(slot, perceived) {
            Ok(card) => card,
            Err(err) => {
                err.log_with_context(
                    &ErrorContext::new("review_card")
                        .with_card(card_id)
                        .with_deck(&deck.id),
                );
                log_service_error!(SERVICE, "review_card", card_id = card_id, error = err);
                return Err(err.into());
            }
        };

        *slot = updated_card.clone();

        log_service_success!(SERVICE, "review_card", card_id = card_id, "card rescheduled");
        Ok(Some(updated_card))
    }

    pub fn review_stats(&self, deck: &Deck) -> ReviewStats {
        log_service_start!(SERVICE, "review_stats");

        let mut stats = ReviewStats {
            total: deck.cards.len(),
            ..ReviewStats::default()
        };
        for card in &deck.cards {
            match self.scheduler.review_state(card) {
                ReviewState::Unscheduled => stats.unscheduled += 1,
                ReviewState::Scheduled => stats.scheduled += 1,
                ReviewState::Due => stats.due += 1,
            }
        }

        log_service_success!(SERVICE, "review_stats", card_count = stats.total, "stats computed");
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use chrono::NaiveDate;

    fn create_test_service() -> ReviewService<FixedClock> {
        let today = NaiveDate::from_ymd_opt(2024, 4, 10).unwrap();
        ReviewService::with_scheduler(Sm2Scheduler::with_clock(FixedClock(today)))
    }

    fn create_test_deck() -> Deck {
        let mut deck = Deck::new("deck-1", "Capitals");

        let fresh = Flashcard::new("fresh", "Capital of France?", "Paris");

        let mut due = Flashcard::new("due", "Capital of Spain?", "Madrid");
        due.next_review = Some("2024-04-01".to_string());

        let mut future = Flashcard::new("future", "Capital of Italy?", "Rome");
        future.next_review = Some("2024-05-01".to_string());

        let mut broken = Flashcard::new("broken", "Capital of Peru?", "Lima");
        broken.next_review = Some("someday".to_string());

        deck.cards = vec![fresh, due, future, broken];
        deck
    }

    #[test]
    fn test_cards_due_for_review() {
        let service = create_test_service();
        let deck = create_test_deck();

        let due = service.cards_due_for_review(&deck);
        assert_eq!(due.len(), 1);
        assert_eq!(due[0].id, "due");
    }

    #[test]
    fn test_review_card_updates_deck() {
        let service = create_test_service();
        let mut deck = create_test_deck();

        let updated = service
            .review_card(&mut deck, "due", Difficulty::Medium)
            .unwrap()
            .expect("card exists");

        assert_eq!(updated.repetition, 1);
        assert_eq!(updated.next_review.as_deref(), Some("2024-04-02"));
        assert_eq!(deck.cards[1], updated);
    }

    #[test]
    fn test_review_unknown_card() {
        let service = create_test_service();
        let mut deck = create_test_deck();

        let result = service.review_card(&mut deck, "missing", Difficulty::Easy).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_review_with_none_rating_leaves_deck_untouched() {
        let service = create_test_service();
        let mut deck = create_test_deck();
        let before = deck.clone();

        let result = service.review_card(&mut deck, "fresh", Difficulty::None);
        assert!(result.is_err());
        assert_eq!(deck, before);
    }

    #[test]
    fn test_review_stats() {
        let service = create_test_service();
        let deck = create_test_deck();

        let stats = service.review_stats(&deck);
        assert_eq!(
            stats,
            ReviewStats {
                total: 4,
                due: 1,
                unscheduled: 2,
                scheduled: 1,
            }
        );
    }
}
