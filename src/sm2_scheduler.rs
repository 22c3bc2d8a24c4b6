//! SM-2 variant driven by difficulty weights instead of 0-5 quality grades.
//!
//! Each pass compares the difficulty the user just reported with the card's
//! base difficulty:
//! - the weight delta is turned into an SM-2 quality and then into an easiness
//!   factor (floored at 1.3), recomputed on every call and never stored
//! - a HARD rating resets the repetition streak, anything else extends it
//! - intervals follow the 1 day → 6 days → 6 × EF ladder
//! - the interval is added to the card's current next-review date, or to today
//!   when the card has no usable date yet

use chrono::NaiveDate;

use crate::clock::{Clock, LocalClock};
use crate::errors::SchedulerError;
use crate::log_scheduler;
use crate::models::{Difficulty, Flashcard};

pub const MIN_EASINESS_FACTOR: f64 = 1.3;
pub const REVIEW_DATE_FORMAT: &str = "%Y-%m-%d";

const FIRST_INTERVAL_DAYS: u32 = 1;
const SECOND_INTERVAL_DAYS: u32 = 6;

#[derive(Debug, Clone, PartialEq)]
pub struct ReviewLog {
    pub easiness_factor: f64,
    pub interval_days: u32,
    pub base_date: NaiveDate,
    pub next_review: NaiveDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewState {
    /// No next-review date, or one that does not parse
    Unscheduled,
    Scheduled,
    Due,
}

#[derive(Debug, Clone)]
pub struct Sm2Scheduler<C = LocalClock> {
    clock: C,
}

impl Sm2Scheduler<LocalClock> {
    pub fn new() -> Self {
        Self { clock: LocalClock }
    }
}

impl Default for Sm2Scheduler<LocalClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> Sm2Scheduler<C> {
    pub fn with_clock(clock: C) -> Self {
        Self { clock }
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Returns the card with its repetition count and next-review date advanced.
    pub fn compute_next_review(
        &self,
        card: &Flashcard,
        perceived: Difficulty,
    ) -> Result<Flashcard, SchedulerError> {
        self.schedule_card(card, perceived).map(|(card, _)| card)
    }

    pub fn schedule_card(
        &self,
        card: &Flashcard,
        perceived: Difficulty,
    ) -> Result<(Flashcard, ReviewLog), SchedulerError> {
        if !perceived.is_rating() {
            return Err(SchedulerError::InvalidDifficulty(perceived));
        }

        let easiness = easiness_factor(card.difficulty, perceived);
        let repetition = next_repetition(card.repetition, perceived);
        let interval = interval_days(repetition, easiness);

        let base_date = match card.next_review.as_deref().and_then(parse_review_date) {
            Some(date) => date,
            None => {
                log_scheduler!(fallback, card_id = card.id, "no valid next review date, counting from today");
                self.clock.today()
            }
        };

        // Stored dates have four-digit years, so only a clock at chrono's last date overflows
        let next_review = base_date
            .checked_add_days(chrono::Days::new(u64::from(interval)))
            .ok_or(SchedulerError::DateOutOfRange {
                base: base_date,
                days: interval,
            })?;

        let updated_card = Flashcard {
            repetition,
            next_review: Some(format_review_date(next_review)),
            ..card.clone()
        };

        log_scheduler!(
            scheduled,
            card_id = updated_card.id,
            repetition = repetition,
            interval_days = interval,
            next_review = next_review
        );

        let review_log = ReviewLog {
            easiness_factor: easiness,
            interval_days: interval,
            base_date,
            next_review,
        };

        Ok((updated_card, review_log))
    }

    /// Cards without a usable date are never due.
    pub fn is_due_for_review(&self, card: &Flashcard) -> bool {
        self.review_state(card) == ReviewState::Due
    }

    pub fn review_state(&self, card: &Flashcard) -> ReviewState {
        match card.next_review.as_deref().and_then(parse_review_date) {
            None => ReviewState::Unscheduled,
            Some(date) if self.clock.today() >= date => ReviewState::Due,
            Some(_) => ReviewState::Scheduled,
        }
    }

    /// Due cards in deck order.
    pub fn due_cards<'a>(&self, cards: &'a [Flashcard]) -> Vec<&'a Flashcard> {
        cards
            .iter()
            .filter(|card| self.is_due_for_review(card))
            .collect()
    }
}

/// SM-2 easiness recurrence with weight deltas standing in for quality grades.
pub fn easiness_factor(base: Difficulty, perceived: Difficulty) -> f64 {
    let base_weight = base.weight();
    let quality = (5.0 - (perceived.weight() - base_weight)).max(0.0);
    let lapse = 5.0 - quality;
    (base_weight + 0.1 - lapse * (0.08 + lapse * 0.02)).max(MIN_EASINESS_FACTOR)
}

pub fn next_repetition(previous: u32, perceived: Difficulty) -> u32 {
    match perceived {
        Difficulty::Hard => 0,
        _ => previous.saturating_add(1),
    }
}

pub fn interval_days(repetition: u32, easiness_factor: f64) -> u32 {
    match repetition {
        0 | 1 => FIRST_INTERVAL_DAYS,
        2 => SECOND_INTERVAL_DAYS,
        _ => (f64::from(SECOND_INTERVAL_DAYS) * easiness_factor).round() as u32,
    }
}

/// Accepts exactly `YYYY-MM-DD`; chrono alone would also take signed years,
/// unpadded fields and surrounding whitespace.
pub fn parse_review_date(value: &str) -> Option<NaiveDate> {
    let bytes = value.as_bytes();
    if bytes.len() != 10 {
        return None;
    }
    let well_formed = bytes.iter().enumerate().all(|(i, b)| match i {
        4 | 7 => *b == b'-',
        _ => b.is_ascii_digit(),
    });
    if !well_formed {
        return None;
    }
    NaiveDate::parse_from_str(value, REVIEW_DATE_FORMAT).ok()
}

pub fn format_review_date(date: NaiveDate) -> String {
    date.format(REVIEW_DATE_FORMAT).to_string()
}
