//! Drill session state machine.
//!
//! A [`DrillSession`] owns a fixed deck and walks it prompt by prompt:
//!
//! - a `correct` first answer is scored and waits for the host to call
//!   [`DrillSession::advance`] after [`AUTO_ADVANCE_DELAY`];
//! - a `close` or `wrong` first answer (or a skip) is scored, the target is
//!   revealed, and the session refuses to move on until the learner retypes it;
//! - advancing past the last prompt puts the session in its terminal state,
//!   where `deck_index == deck_len`.
//!
//! The session never schedules anything itself. The delay is host policy; a
//! host that abandons a session simply never calls `advance`.

use std::time::Duration;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::drill_engine::{
    deck,
    error::{DrillError, Result},
    evaluator::{evaluate_with, matches_revealed, EvaluationPolicy},
    hints::{mask_sentence, spell_hint, SentenceHint},
    models::{Prompt, SessionScore, Verdict},
    report::SessionSummary,
};

/// Delay between a correct verdict and the host's call to `advance`.
pub const AUTO_ADVANCE_DELAY: Duration = Duration::from_millis(700);

/// Mutable per-session position and feedback.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    pub deck_index: usize,
    pub awaiting_retype: bool,
    pub last_verdict: Option<Verdict>,
    pub revealed_answer: Option<String>,
}

/// Where the session landed after moving past a prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress {
    /// Now showing the prompt at this deck index.
    Next(usize),
    /// Deck exhausted; carries the final score.
    Complete(SessionScore),
}

/// What a call to `submit` or `skip` did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Nothing changed: blank input, a retype that did not match, or an answer
    /// sent while a correct verdict is waiting to advance.
    Ignored,
    /// Scored correct. The host should call `advance` after `advance_after`.
    Correct { advance_after: Duration },
    /// Scored close or wrong. `revealed` must be retyped to continue.
    Missed { verdict: Verdict, revealed: String },
    /// The revealed answer was retyped and the session moved on.
    RetypeConfirmed(Progress),
}

#[derive(Debug, Clone)]
pub struct DrillSession {
    deck: Vec<Prompt>,
    policy: EvaluationPolicy,
    score: SessionScore,
    state: SessionState,
}

impl DrillSession {
    /// Start a vocabulary session over `deck` in the given order.
    ///
    /// # Errors
    ///
    /// Returns [`DrillError::EmptyDeck`] if `deck` has no prompts.
    pub fn start(deck: Vec<Prompt>) -> Result<Self> {
        Self::start_with_policy(deck, EvaluationPolicy::Vocab)
    }

    /// Start a session over `deck` that evaluates and scores under `policy`.
    ///
    /// # Errors
    ///
    /// Returns [`DrillError::EmptyDeck`] if `deck` has no prompts.
    pub fn start_with_policy(deck: Vec<Prompt>, policy: EvaluationPolicy) -> Result<Self> {
        if deck.is_empty() {
            return Err(DrillError::EmptyDeck);
        }
        debug!(deck_len = deck.len(), ?policy, "drill session started");
        Ok(DrillSession {
            deck,
            policy,
            score: SessionScore::default(),
            state: SessionState::default(),
        })
    }

    /// Reshuffle the same prompts and start over with a zero score.
    pub fn restart<R: Rng>(&mut self, rng: &mut R) {
        self.deck = deck::shuffle(&self.deck, rng);
        self.score = SessionScore::default();
        self.state = SessionState::default();
        debug!(deck_len = self.deck.len(), "drill session restarted");
    }

    // -- accessors ----------------------------------------------------------

    pub fn deck(&self) -> &[Prompt] {
        &self.deck
    }

    pub fn policy(&self) -> EvaluationPolicy {
        self.policy
    }

    pub fn deck_len(&self) -> usize {
        self.deck.len()
    }

    pub fn deck_index(&self) -> usize {
        self.state.deck_index
    }

    pub fn score(&self) -> SessionScore {
        self.score
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn is_complete(&self) -> bool {
        self.state.deck_index >= self.deck.len()
    }

    pub fn awaiting_retype(&self) -> bool {
        self.state.awaiting_retype
    }

    pub fn last_verdict(&self) -> Option<Verdict> {
        self.state.last_verdict
    }

    pub fn revealed_answer(&self) -> Option<&str> {
        self.state.revealed_answer.as_deref()
    }

    /// The prompt being drilled, or `None` once complete.
    pub fn current_prompt(&self) -> Option<&Prompt> {
        self.deck.get(self.state.deck_index)
    }

    fn pending_advance(&self) -> bool {
        self.state.last_verdict == Some(Verdict::Correct)
    }

    fn ensure_active(&self, op: &'static str) -> Result<()> {
        if self.is_complete() {
            warn!(op, "transition attempted on a completed session");
            return Err(DrillError::SessionComplete);
        }
        Ok(())
    }

    // -- transitions --------------------------------------------------------

    /// Submit the learner's typed text for the current prompt.
    ///
    /// # Errors
    ///
    /// Returns [`DrillError::SessionComplete`] once the deck is exhausted.
    pub fn submit(&mut self, raw: &str) -> Result<SubmitOutcome> {
        self.ensure_active("submit")?;

        if raw.trim().is_empty() {
            return Ok(SubmitOutcome::Ignored);
        }

        if self.state.awaiting_retype {
            let confirmed = self
                .state
                .revealed_answer
                .as_deref()
                .is_some_and(|answer| matches_revealed(raw, answer));
            if !confirmed {
                debug!(deck_index = self.state.deck_index, "retype did not match");
                return Ok(SubmitOutcome::Ignored);
            }
            debug!(deck_index = self.state.deck_index, "retype confirmed");
            return Ok(SubmitOutcome::RetypeConfirmed(self.step_forward()));
        }

        if self.pending_advance() {
            return Ok(SubmitOutcome::Ignored);
        }

        let target = self.deck[self.state.deck_index].target.clone();
        let verdict = evaluate_with(self.policy, raw, &target)?;
        self.score.record(self.policy.scored_as(verdict));
        self.state.last_verdict = Some(verdict);
        debug!(deck_index = self.state.deck_index, %verdict, "answer evaluated");

        if verdict == Verdict::Correct {
            return Ok(SubmitOutcome::Correct { advance_after: AUTO_ADVANCE_DELAY });
        }
        Ok(self.reveal(verdict, target))
    }

    /// Give up on the current prompt: scored as `wrong`, answer revealed,
    /// retype required. Ignored while a retype or an auto-advance is pending.
    ///
    /// # Errors
    ///
    /// Returns [`DrillError::SessionComplete`] once the deck is exhausted.
    pub fn skip(&mut self) -> Result<SubmitOutcome> {
        self.ensure_active("skip")?;

        if self.state.awaiting_retype || self.pending_advance() {
            return Ok(SubmitOutcome::Ignored);
        }

        let target = self.deck[self.state.deck_index].target.clone();
        self.score.record(Verdict::Wrong);
        self.state.last_verdict = Some(Verdict::Wrong);
        debug!(deck_index = self.state.deck_index, "prompt skipped");
        Ok(self.reveal(Verdict::Wrong, target))
    }

    /// Move past a correctly answered prompt. Called by the host once the
    /// auto-advance delay has elapsed.
    ///
    /// # Errors
    ///
    /// - [`DrillError::SessionComplete`] once the deck is exhausted.
    /// - [`DrillError::NoPendingAdvance`] unless the last verdict was `correct`.
    pub fn advance(&mut self) -> Result<Progress> {
        self.ensure_active("advance")?;
        if !self.pending_advance() {
            return Err(DrillError::NoPendingAdvance);
        }
        Ok(self.step_forward())
    }

    fn reveal(&mut self, verdict: Verdict, target: String) -> SubmitOutcome {
        self.state.awaiting_retype = true;
        self.state.revealed_answer = Some(target.clone());
        SubmitOutcome::Missed { verdict, revealed: target }
    }

    fn step_forward(&mut self) -> Progress {
        self.state.awaiting_retype = false;
        self.state.last_verdict = None;
        self.state.revealed_answer = None;

        if self.state.deck_index + 1 >= self.deck.len() {
            self.state.deck_index = self.deck.len();
            info!(
                total = self.deck.len(),
                correct = self.score.correct,
                close = self.score.close,
                wrong = self.score.wrong,
                "drill session complete"
            );
            return Progress::Complete(self.score);
        }

        self.state.deck_index += 1;
        debug!(deck_index = self.state.deck_index, "advanced to next prompt");
        Progress::Next(self.state.deck_index)
    }

    // -- hints & results ----------------------------------------------------

    /// Spelling hint for the current target, unavailable during retype.
    pub fn spell_hint(&self) -> Option<String> {
        if self.state.awaiting_retype {
            return None;
        }
        self.current_prompt().map(|p| spell_hint(&p.target))
    }

    /// Example sentences with the target words masked, unavailable during
    /// retype or when the prompt has no sentences.
    pub fn sentence_hint(&self) -> Option<SentenceHint> {
        if self.state.awaiting_retype {
            return None;
        }
        let prompt = self.current_prompt()?;
        if prompt.aux_source.is_none() && prompt.aux_target.is_none() {
            return None;
        }
        Some(SentenceHint {
            source: prompt.aux_source.clone(),
            target: prompt.aux_target.as_deref().map(|s| mask_sentence(s, &prompt.target)),
        })
    }

    /// Final result for the progress and telemetry sinks.
    ///
    /// # Errors
    ///
    /// Returns [`DrillError::SessionIncomplete`] before the deck is exhausted.
    pub fn summary(&self) -> Result<SessionSummary> {
        if !self.is_complete() {
            return Err(DrillError::SessionIncomplete);
        }
        Ok(SessionSummary {
            total_prompts: self.deck.len(),
            score: self.score,
        })
    }
}
