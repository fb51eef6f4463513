//! Mission progression: the state machine behind a training run.
//!
//! The engine owns the [`RunState`] outright. The presentation layer reads
//! it through [`Engine::state`] and drives it only through the command
//! methods: [`select_domain`](Engine::select_domain),
//! [`submit`](Engine::submit), [`request_hint`](Engine::request_hint),
//! and [`abort`](Engine::abort).
//!
//! ```text
//! Idle ──select──▶ Active(step 0) ──pass──▶ … ──pass last──▶ Complete
//!   ▲                                                          │
//!   └──────────────────────── abort (from anywhere) ───────────┘
//! ```
//!
//! Briefings for the next step and the closing message are appended
//! after a short delay. They are queued with the run's epoch and applied
//! by [`Engine::tick`]; aborting bumps the epoch, so anything queued by
//! the old run is dropped instead of landing in a new transcript.

mod schedule;

use std::fmt;
use std::time::{Duration, Instant};

use crate::catalog::{CatalogError, Mission, MissionCatalog};
use crate::model::{ExerciseDomain, Sender, Severity, Step, TranscriptEntry};
use crate::synthesize::synthesize;
use crate::validate::AcceptancePattern;

use schedule::{Schedule, Scheduled};

const CONNECTING: &str = "INITIALIZING SECURE CONNECTION...";
const CONNECTED: &str = "UPLINK ESTABLISHED.";
const CONTENT_CORRUPTED: &str = "ERROR: MODULE DATA CORRUPTED.";
const MISSION_COMPLETE: &str = "ALL SYSTEMS STABILIZED. MISSION COMPLETE. LOGGING OUT...";

/// Errors returned by engine commands.
///
/// None of these are fatal. Content errors have already been written to
/// the transcript by the time they are returned.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("mission content for {domain} is unavailable: {source}")]
    ContentUnavailable {
        domain: ExerciseDomain,
        #[source]
        source: CatalogError,
    },

    #[error("step {index} of {domain} has a malformed acceptance pattern")]
    MalformedPattern {
        domain: ExerciseDomain,
        index: usize,
        #[source]
        source: regex::Error,
    },

    #[error("cannot {command} while {phase}")]
    InvalidTransition { command: Command, phase: RunPhase },
}

/// Where a run is in its lifecycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RunPhase {
    /// No domain chosen.
    #[default]
    Idle,

    /// Working through steps.
    Active,

    /// Every step passed.
    Complete,
}

impl fmt::Display for RunPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Idle => "idle",
            Self::Active => "active",
            Self::Complete => "complete",
        })
    }
}

/// A command the presentation layer can send.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    SelectDomain,
    Submit,
    RequestHint,
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::SelectDomain => "select a domain",
            Self::Submit => "submit input",
            Self::RequestHint => "request a hint",
        })
    }
}

/// Snapshot of a run, as the presentation layer sees it.
#[derive(Debug, Clone, Default)]
pub struct RunState {
    pub phase: RunPhase,
    pub domain: Option<ExerciseDomain>,
    pub steps: Vec<Step>,

    /// Current step. Equals `steps.len()` once complete.
    pub step_index: usize,

    /// Completion percentage, 0 to 100.
    pub progress: f64,

    pub transcript: Vec<TranscriptEntry>,
}

impl RunState {
    /// Whether a domain has been loaded (active or complete).
    pub fn is_running(&self) -> bool {
        self.phase != RunPhase::Idle
    }

    /// The step awaiting input, if the run is active.
    pub fn current_step(&self) -> Option<&Step> {
        match self.phase {
            RunPhase::Active => self.steps.get(self.step_index),
            RunPhase::Idle | RunPhase::Complete => None,
        }
    }

    /// Progress rounded to a whole percentage.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // Clamped to 0..=100.
    pub fn progress_percent(&self) -> u8 {
        self.progress.round().clamp(0.0, 100.0) as u8
    }
}

/// What a submission did to the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The step passed; the run moved on to this step index.
    Advanced(usize),

    /// The last step passed.
    Completed,

    /// Neither synthesizer nor validator recognized the input.
    /// A rejection line was written.
    Rejected,

    /// The step did not pass, but nothing was said about it: the input
    /// was blank or produced tool output of its own.
    Held,
}

/// Timing for delayed transcript lines.
#[derive(Debug, Clone, Copy)]
pub struct EngineOptions {
    pub briefing_delay: Duration,
    pub completion_delay: Duration,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            briefing_delay: Duration::from_secs(1),
            completion_delay: Duration::from_secs(1),
        }
    }
}

impl EngineOptions {
    /// No delays: every line is appended as soon as it is produced.
    pub fn immediate() -> Self {
        Self {
            briefing_delay: Duration::ZERO,
            completion_delay: Duration::ZERO,
        }
    }
}

/// The mission progression engine.
pub struct Engine {
    catalog: Box<dyn MissionCatalog>,
    options: EngineOptions,
    state: RunState,
    patterns: Vec<AcceptancePattern>,
    epoch: u64,
    schedule: Schedule,
}

impl Engine {
    pub fn new(catalog: impl MissionCatalog + 'static, options: EngineOptions) -> Self {
        Self {
            catalog: Box::new(catalog),
            options,
            state: RunState::default(),
            patterns: Vec::new(),
            epoch: 0,
            schedule: Schedule::default(),
        }
    }

    pub fn state(&self) -> &RunState {
        &self.state
    }

    /// Whether lines queued by the current run are still waiting.
    pub fn is_busy(&self) -> bool {
        self.schedule.has_pending(self.epoch)
    }

    /// When the next queued line falls due.
    pub fn next_due(&self) -> Option<Instant> {
        self.schedule.next_due()
    }

    /// Load a domain and start a run at step 0.
    ///
    /// Only valid while idle. If the content cannot be loaded, an error
    /// line is written and the engine stays idle.
    pub fn select_domain(&mut self, domain: ExerciseDomain) -> Result<(), EngineError> {
        if self.state.phase != RunPhase::Idle {
            return Err(self.invalid(Command::SelectDomain));
        }

        self.state = RunState::default();
        self.patterns.clear();
        self.append(Sender::System, CONNECTING, Some(Severity::Info));

        let mission = match Mission::fetch(self.catalog.as_ref(), domain) {
            Ok(mission) => mission,
            Err(e) => {
                tracing::warn!(%domain, error = %e, "mission content unavailable");
                self.append(Sender::System, CONTENT_CORRUPTED, Some(Severity::Error));
                return Err(match e {
                    CatalogError::MalformedPattern { index, source, .. } => {
                        EngineError::MalformedPattern {
                            domain,
                            index,
                            source,
                        }
                    }
                    source => EngineError::ContentUnavailable { domain, source },
                });
            }
        };

        let (steps, patterns) = mission.into_parts();
        let briefing = format!(
            "MISSION: {} PROTOCOLS\n\nBRIEFING: {}\n\nOBJECTIVE: {}",
            domain.tag(),
            steps[0].briefing,
            steps[0].objective
        );

        self.epoch += 1;
        self.state.phase = RunPhase::Active;
        self.state.domain = Some(domain);
        self.state.steps = steps;
        self.patterns = patterns;

        self.append(Sender::System, CONNECTED, Some(Severity::Success));
        self.append(Sender::Ai, briefing, Some(Severity::Info));

        tracing::info!(%domain, steps = self.state.steps.len(), "mission started");
        Ok(())
    }

    /// Process one line of user input against the current step.
    ///
    /// Writes, in order: the input verbatim, any synthesized tool output,
    /// then either the step's success message or (if the input was
    /// recognized by nothing) a rejection.
    pub fn submit(&mut self, input: &str, now: Instant) -> Result<Outcome, EngineError> {
        let (Some(domain), Some(pattern)) = (self.state.domain, self.active_pattern()) else {
            return Err(self.invalid(Command::Submit));
        };
        let passed = pattern.accepts(input);
        let index = self.state.step_index;
        tracing::debug!(step = index, pattern = pattern.as_str(), passed, "validated submission");

        self.append(Sender::User, input, None);

        let output = synthesize(domain, input).filter(|text| !text.is_empty());
        if let Some(text) = &output {
            self.append(Sender::System, text.as_str(), Some(Severity::Info));
        }

        if !passed {
            let trimmed = input.trim();
            if output.is_none() && !trimmed.is_empty() {
                self.append(
                    Sender::System,
                    format!("COMMAND REJECTED: '{trimmed}' unknown or invalid context."),
                    Some(Severity::Error),
                );
                return Ok(Outcome::Rejected);
            }
            return Ok(Outcome::Held);
        }

        let success = self.state.steps[index].success_message.clone();
        self.append(Sender::Ai, success, Some(Severity::Success));

        let total = self.state.steps.len();
        let next = index + 1;
        match self.state.steps.get(next) {
            Some(step) => {
                let directive = format!(
                    "NEW DIRECTIVE:\n{}\n\nOBJECTIVE: {}",
                    step.briefing, step.objective
                );
                self.state.step_index = next;
                self.state.progress = progress_after(next, total);
                self.defer(self.options.briefing_delay, now, directive, Severity::Info);

                tracing::info!(%domain, step = next, total, "step advanced");
                Ok(Outcome::Advanced(next))
            }
            None => {
                self.state.step_index = total;
                self.state.progress = 100.0;
                self.state.phase = RunPhase::Complete;
                self.defer(
                    self.options.completion_delay,
                    now,
                    MISSION_COMPLETE,
                    Severity::Success,
                );

                tracing::info!(%domain, total, "mission complete");
                Ok(Outcome::Completed)
            }
        }
    }

    /// Write the current step's example syntax as a hint.
    pub fn request_hint(&mut self) -> Result<(), EngineError> {
        let Some(step) = self.state.current_step() else {
            return Err(self.invalid(Command::RequestHint));
        };
        let hint = format!("SUGGESTED SYNTAX: {}", step.command_syntax);
        self.append(Sender::Ai, hint, Some(Severity::Hint));
        Ok(())
    }

    /// Discard the run entirely and return to idle.
    pub fn abort(&mut self) {
        if let Some(domain) = self.state.domain {
            tracing::info!(%domain, step = self.state.step_index, "mission aborted");
        }
        self.epoch += 1;
        self.state = RunState::default();
        self.patterns.clear();
    }

    /// Apply queued lines that are due. Lines from an earlier run are dropped.
    ///
    /// Returns how many lines were appended.
    pub fn tick(&mut self, now: Instant) -> usize {
        let mut applied = 0;
        for item in self.schedule.take_due(now) {
            if item.epoch != self.epoch {
                tracing::debug!(epoch = item.epoch, current = self.epoch, "dropping stale line");
                continue;
            }
            self.append(item.sender, item.text, Some(item.severity));
            applied += 1;
        }
        applied
    }

    fn active_pattern(&self) -> Option<&AcceptancePattern> {
        match self.state.phase {
            RunPhase::Active => self.patterns.get(self.state.step_index),
            RunPhase::Idle | RunPhase::Complete => None,
        }
    }

    fn append(&mut self, sender: Sender, text: impl Into<String>, severity: Option<Severity>) {
        let entry = TranscriptEntry::new(sender, text, severity);
        tracing::trace!(id = %entry.id, at = %entry.created_at, ?sender, ?severity, "transcript append");
        self.state.transcript.push(entry);
    }

    fn defer(&mut self, delay: Duration, now: Instant, text: impl Into<String>, severity: Severity) {
        if delay.is_zero() {
            self.append(Sender::Ai, text, Some(severity));
            return;
        }
        self.schedule.push(Scheduled {
            epoch: self.epoch,
            due: now + delay,
            sender: Sender::Ai,
            text: text.into(),
            severity,
        });
    }

    fn invalid(&self, command: Command) -> EngineError {
        EngineError::InvalidTransition {
            command,
            phase: self.state.phase,
        }
    }
}

/// Percentage after `completed` of `total` steps, recomputed each time
/// so repeated fractional steps cannot drift.
#[allow(clippy::cast_precision_loss)] // Step counts are tiny.
fn progress_after(completed: usize, total: usize) -> f64 {
    if total == 0 || completed >= total {
        return 100.0;
    }
    completed as f64 * 100.0 / total as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::catalog::{self, BuiltinCatalog};

    /// Serves the same steps for every domain.
    struct FixedCatalog(Vec<Step>);

    impl MissionCatalog for FixedCatalog {
        fn steps(&self, _domain: ExerciseDomain) -> catalog::Result<Vec<Step>> {
            Ok(self.0.clone())
        }
    }

    struct FailingCatalog;

    impl MissionCatalog for FailingCatalog {
        fn steps(&self, domain: ExerciseDomain) -> catalog::Result<Vec<Step>> {
            Err(CatalogError::NotFound(domain))
        }
    }

    fn step(index: usize, syntax: &str, pattern: &str) -> Step {
        Step {
            index,
            briefing: format!("BRIEFING {index}"),
            objective: format!("OBJECTIVE {index}"),
            technical_guide: String::new(),
            command_syntax: syntax.to_string(),
            acceptance_pattern: pattern.to_string(),
            success_message: format!("PASSED {index}"),
        }
    }

    fn three_steps() -> Vec<Step> {
        vec![
            step(0, "docker version", r"^docker\s+version"),
            step(1, "docker images", r"^docker\s+images"),
            step(2, "docker ps", r"^docker\s+ps"),
        ]
    }

    fn active_engine(steps: Vec<Step>) -> Engine {
        let mut engine = Engine::new(FixedCatalog(steps), EngineOptions::immediate());
        engine.select_domain(ExerciseDomain::Docker).unwrap();
        engine
    }

    fn count(engine: &Engine, severity: Severity) -> usize {
        engine
            .state()
            .transcript
            .iter()
            .filter(|e| e.severity == Some(severity))
            .count()
    }

    fn last(engine: &Engine) -> &TranscriptEntry {
        engine.state().transcript.last().unwrap()
    }

    #[test]
    fn select_starts_at_step_zero_with_briefing() {
        let engine = active_engine(three_steps());
        let state = engine.state();

        assert_eq!(state.phase, RunPhase::Active);
        assert_eq!(state.domain, Some(ExerciseDomain::Docker));
        assert_eq!(state.step_index, 0);
        assert!(state.progress.abs() < f64::EPSILON);

        let texts: Vec<&str> = state.transcript.iter().map(|e| e.text.as_str()).collect();
        assert_eq!(texts[0], CONNECTING);
        assert_eq!(texts[1], CONNECTED);
        assert!(texts[2].starts_with("MISSION: DOCKER PROTOCOLS"));
        assert!(texts[2].contains("BRIEFING 0"));
        assert_eq!(last(&engine).sender, Sender::Ai);
    }

    #[test]
    fn select_with_empty_content_stays_idle() {
        let mut engine = Engine::new(FixedCatalog(vec![]), EngineOptions::immediate());
        let err = engine.select_domain(ExerciseDomain::Git).unwrap_err();

        assert!(matches!(
            err,
            EngineError::ContentUnavailable {
                source: CatalogError::Empty(_),
                ..
            }
        ));
        assert_eq!(engine.state().phase, RunPhase::Idle);
        assert_eq!(last(&engine).severity, Some(Severity::Error));
        assert_eq!(last(&engine).text, CONTENT_CORRUPTED);
    }

    #[test]
    fn select_with_failed_fetch_stays_idle() {
        let mut engine = Engine::new(FailingCatalog, EngineOptions::immediate());
        assert!(engine.select_domain(ExerciseDomain::Linux).is_err());
        assert!(!engine.state().is_running());
        assert_eq!(count(&engine, Severity::Error), 1);
    }

    #[test]
    fn select_with_malformed_pattern_is_rejected() {
        let steps = vec![step(0, "pwd", "^pwd"), step(1, "ls", "^ls(")];
        let mut engine = Engine::new(FixedCatalog(steps), EngineOptions::immediate());
        let err = engine.select_domain(ExerciseDomain::Linux).unwrap_err();

        assert!(matches!(err, EngineError::MalformedPattern { index: 1, .. }));
        assert_eq!(engine.state().phase, RunPhase::Idle);
    }

    #[test]
    fn select_while_active_is_invalid() {
        let mut engine = active_engine(three_steps());
        let before = engine.state().transcript.len();

        let err = engine.select_domain(ExerciseDomain::Git).unwrap_err();
        assert!(matches!(
            err,
            EngineError::InvalidTransition {
                command: Command::SelectDomain,
                phase: RunPhase::Active
            }
        ));
        assert_eq!(engine.state().domain, Some(ExerciseDomain::Docker));
        assert_eq!(engine.state().transcript.len(), before);
    }

    #[test]
    fn submit_while_idle_is_a_no_op() {
        let mut engine = Engine::new(FixedCatalog(three_steps()), EngineOptions::immediate());
        let err = engine.submit("docker version", Instant::now()).unwrap_err();

        assert!(matches!(err, EngineError::InvalidTransition { .. }));
        assert!(engine.state().transcript.is_empty());
    }

    #[test]
    fn passing_step_advances_and_briefs() {
        let mut engine = active_engine(three_steps());
        let outcome = engine.submit("docker version", Instant::now()).unwrap();

        assert_eq!(outcome, Outcome::Advanced(1));
        assert_eq!(engine.state().step_index, 1);
        assert_eq!(engine.state().current_step().unwrap().index, 1);

        let tail: Vec<_> = engine.state().transcript.iter().rev().take(4).rev().collect();
        assert_eq!(tail[0].sender, Sender::User);
        assert_eq!(tail[0].text, "docker version");
        assert_eq!(tail[1].sender, Sender::System);
        assert!(tail[1].text.starts_with("Client:"));
        assert_eq!(tail[2].text, "PASSED 0");
        assert_eq!(tail[2].severity, Some(Severity::Success));
        assert!(tail[3].text.starts_with("NEW DIRECTIVE:\nBRIEFING 1"));
        assert!(tail[3].text.ends_with("OBJECTIVE: OBJECTIVE 1"));
    }

    #[test]
    fn user_input_is_recorded_verbatim() {
        let mut engine = active_engine(three_steps());
        engine.submit("  DOCKER version  ", Instant::now()).unwrap();

        let user = engine
            .state()
            .transcript
            .iter()
            .find(|e| e.sender == Sender::User)
            .unwrap();
        assert_eq!(user.text, "  DOCKER version  ");
        assert_eq!(user.severity, None);
        assert_eq!(engine.state().step_index, 1);
    }

    #[test]
    fn progress_thirds_land_on_exactly_one_hundred() {
        let mut engine = active_engine(three_steps());
        let now = Instant::now();

        engine.submit("docker version", now).unwrap();
        assert_eq!(engine.state().progress_percent(), 33);
        engine.submit("docker images", now).unwrap();
        assert_eq!(engine.state().progress_percent(), 67);
        let outcome = engine.submit("docker ps", now).unwrap();

        assert_eq!(outcome, Outcome::Completed);
        assert_eq!(engine.state().phase, RunPhase::Complete);
        assert!((engine.state().progress - 100.0).abs() < f64::EPSILON);
        assert_eq!(engine.state().progress_percent(), 100);
        assert_eq!(engine.state().step_index, 3);
        assert!(engine.state().current_step().is_none());
        assert_eq!(last(&engine).text, MISSION_COMPLETE);
    }

    #[test]
    fn progress_never_drifts_for_awkward_counts() {
        for total in [3, 6, 7, 9, 11] {
            let steps: Vec<Step> = (0..total).map(|i| step(i, "pwd", "^pwd")).collect();
            let mut engine = active_engine(steps);
            for k in 0..total {
                engine.submit("pwd", Instant::now()).unwrap();
                let expected = if k + 1 == total {
                    100.0
                } else {
                    (k + 1) as f64 * 100.0 / total as f64
                };
                assert!((engine.state().progress - expected).abs() < 1e-9);
            }
            assert!((engine.state().progress - 100.0).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn unrecognized_input_is_rejected_once() {
        let mut engine = active_engine(three_steps());
        let before = count(&engine, Severity::Error);
        let outcome = engine.submit("launch the probes", Instant::now()).unwrap();

        assert_eq!(outcome, Outcome::Rejected);
        assert_eq!(count(&engine, Severity::Error), before + 1);
        assert_eq!(
            last(&engine).text,
            "COMMAND REJECTED: 'launch the probes' unknown or invalid context."
        );
        assert_eq!(engine.state().step_index, 0);
    }

    #[test]
    fn recognized_but_wrong_step_stays_quiet() {
        let mut engine = active_engine(three_steps());
        // `docker ps` has canned output but step 0 wants `docker version`.
        let outcome = engine.submit("docker ps", Instant::now()).unwrap();

        assert_eq!(outcome, Outcome::Held);
        assert_eq!(count(&engine, Severity::Error), 0);
        assert_eq!(last(&engine).sender, Sender::System);
        assert_eq!(last(&engine).severity, Some(Severity::Info));
        assert_eq!(engine.state().step_index, 0);
    }

    #[test]
    fn blank_input_is_recorded_without_rejection() {
        let mut engine = active_engine(three_steps());
        let outcome = engine.submit("   ", Instant::now()).unwrap();

        assert_eq!(outcome, Outcome::Held);
        assert_eq!(last(&engine).sender, Sender::User);
        assert_eq!(count(&engine, Severity::Error), 0);
    }

    #[test]
    fn silent_tool_output_still_gets_rejected() {
        let steps = vec![step(0, "pwd", "^pwd")];
        let mut engine = Engine::new(FixedCatalog(steps), EngineOptions::immediate());
        engine.select_domain(ExerciseDomain::Linux).unwrap();
        let outcome = engine.submit("mkdir bunker", Instant::now()).unwrap();

        assert_eq!(outcome, Outcome::Rejected);
        assert_eq!(count(&engine, Severity::Info), 2); // connecting and briefing only
    }

    #[test]
    fn hint_shows_syntax_without_moving() {
        let mut engine = active_engine(three_steps());
        engine.request_hint().unwrap();

        assert_eq!(last(&engine).text, "SUGGESTED SYNTAX: docker version");
        assert_eq!(last(&engine).sender, Sender::Ai);
        assert_eq!(count(&engine, Severity::Hint), 1);
        assert_eq!(engine.state().step_index, 0);
        assert!(engine.state().progress.abs() < f64::EPSILON);
    }

    #[test]
    fn hint_outside_active_is_invalid() {
        let mut engine = Engine::new(FixedCatalog(three_steps()), EngineOptions::immediate());
        assert!(engine.request_hint().is_err());

        let mut engine = active_engine(vec![step(0, "pwd", "^pwd")]);
        engine.submit("pwd", Instant::now()).unwrap();
        assert_eq!(engine.state().phase, RunPhase::Complete);
        assert!(matches!(
            engine.request_hint(),
            Err(EngineError::InvalidTransition {
                phase: RunPhase::Complete,
                ..
            })
        ));
    }

    #[test]
    fn submit_after_completion_is_invalid() {
        let mut engine = active_engine(vec![step(0, "pwd", "^pwd")]);
        engine.submit("pwd", Instant::now()).unwrap();
        let before = engine.state().transcript.len();

        assert!(engine.submit("pwd", Instant::now()).is_err());
        assert_eq!(engine.state().transcript.len(), before);
    }

    #[test]
    fn abort_returns_to_empty_idle_from_any_phase() {
        let mut idle = Engine::new(FailingCatalog, EngineOptions::immediate());
        let _ = idle.select_domain(ExerciseDomain::Git);
        idle.abort();
        assert!(idle.state().transcript.is_empty());

        let mut active = active_engine(three_steps());
        active.submit("docker version", Instant::now()).unwrap();
        active.abort();
        assert_eq!(active.state().phase, RunPhase::Idle);
        assert_eq!(active.state().domain, None);
        assert!(active.state().steps.is_empty());
        assert_eq!(active.state().step_index, 0);
        assert!(active.state().progress.abs() < f64::EPSILON);
        assert!(active.state().transcript.is_empty());

        let mut complete = active_engine(vec![step(0, "pwd", "^pwd")]);
        complete.submit("pwd", Instant::now()).unwrap();
        complete.abort();
        assert!(!complete.state().is_running());
        assert!(complete.state().transcript.is_empty());
    }

    #[test]
    fn abort_then_select_starts_fresh() {
        let mut engine = active_engine(three_steps());
        engine.submit("docker version", Instant::now()).unwrap();
        engine.abort();
        engine.select_domain(ExerciseDomain::Kubernetes).unwrap();

        assert_eq!(engine.state().domain, Some(ExerciseDomain::Kubernetes));
        assert_eq!(engine.state().step_index, 0);
        assert_eq!(engine.state().transcript.len(), 3);
    }

    #[test]
    fn delayed_briefing_arrives_on_tick() {
        let options = EngineOptions {
            briefing_delay: Duration::from_secs(1),
            completion_delay: Duration::from_secs(1),
        };
        let mut engine = Engine::new(FixedCatalog(three_steps()), options);
        engine.select_domain(ExerciseDomain::Docker).unwrap();

        let start = Instant::now();
        engine.submit("docker version", start).unwrap();
        assert!(engine.is_busy());
        assert_eq!(last(&engine).text, "PASSED 0");
        assert_eq!(engine.next_due(), Some(start + Duration::from_secs(1)));

        assert_eq!(engine.tick(start + Duration::from_millis(500)), 0);
        assert_eq!(engine.tick(start + Duration::from_secs(1)), 1);
        assert!(!engine.is_busy());
        assert!(last(&engine).text.starts_with("NEW DIRECTIVE:"));
    }

    #[test]
    fn stale_lines_are_dropped_after_abort() {
        let mut engine = Engine::new(FixedCatalog(three_steps()), EngineOptions::default());
        engine.select_domain(ExerciseDomain::Docker).unwrap();

        let start = Instant::now();
        engine.submit("docker version", start).unwrap();
        engine.abort();
        assert!(!engine.is_busy());

        engine.select_domain(ExerciseDomain::Docker).unwrap();
        let fresh = engine.state().transcript.len();

        assert_eq!(engine.tick(start + Duration::from_secs(5)), 0);
        assert_eq!(engine.state().transcript.len(), fresh);
        assert_eq!(engine.next_due(), None);
    }

    #[test]
    fn builtin_docker_mission_runs_to_completion() {
        let mut engine = Engine::new(BuiltinCatalog::load().unwrap(), EngineOptions::immediate());
        engine.select_domain(ExerciseDomain::Docker).unwrap();

        for input in [
            "docker version",
            "docker images",
            "docker pull nginx",
            "docker run -d -p 80:80 --name proxy nginx",
            "docker ps",
            "docker stop proxy",
            "docker rm proxy",
        ] {
            engine.submit(input, Instant::now()).unwrap();
        }

        assert_eq!(engine.state().phase, RunPhase::Complete);
        assert_eq!(engine.state().progress_percent(), 100);
        assert_eq!(count(&engine, Severity::Error), 0);
    }
}
