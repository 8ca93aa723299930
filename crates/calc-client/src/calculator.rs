//! # Calculator Controller
//!
//! One calculator instance: keypad state, history, error banner and the
//! loading guard, wired to an [`ArithmeticBackend`].
//!
//! ## Press Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Calculator::press(input)                             │
//! │                                                                         │
//! │  lock session ── loading? ── yes ──► Err(Busy)  (controls disabled)     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  machine.press(input) ── Ok(None) ──► render                            │
//! │       │            └──── Err (= with no operation) ──► "ERROR" banner   │
//! │       │ Ok(Some(calculation))                                           │
//! │       ▼                                                                 │
//! │  loading = true, unlock                                                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  backend.calculate(query).await                                         │
//! │       │                                                                 │
//! │   ┌───┴──────────────┐                                                  │
//! │   ▼ Ok(value)        ▼ Err(e)                                           │
//! │  machine.resolve    error banner (2 s)                                  │
//! │  history.record     machine untouched                                   │
//! │       │                  │                                              │
//! │       └──────┬───────────┘                                              │
//! │              ▼                                                          │
//! │  loading = false (always, even if the future is dropped)                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Thread Safety
//! Session state sits behind `Arc<Mutex<T>>`; the lock is never held across
//! the backend call. The loading flag is what keeps a second calculation from
//! racing the first.

use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use calc_core::display::GENERIC_ERROR;
use calc_core::{
    CalculatorState, History, HistoryEntry, Input, InputMachine, PendingExpression,
    MAX_HISTORY_ENTRIES,
};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::backend::ArithmeticBackend;
use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};

// =============================================================================
// Session
// =============================================================================

/// Error message temporarily shown in place of the display value.
#[derive(Debug, Clone)]
struct ErrorBanner {
    message: String,
    raised_at: Instant,
}

impl ErrorBanner {
    fn new(message: impl Into<String>) -> Self {
        ErrorBanner {
            message: message.into(),
            raised_at: Instant::now(),
        }
    }
}

/// Mutable state of one calculator.
#[derive(Debug)]
struct Session {
    machine: InputMachine,
    history: History,
    banner: Option<ErrorBanner>,
    loading: bool,
}

/// What a front end should render.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Screen {
    /// Display text: the current value, or an error message.
    pub display: String,
    /// True while an error message is shown (render in error styling).
    pub error: bool,
    /// True while a calculation is in flight (controls disabled).
    pub loading: bool,
    /// History lines, newest first.
    pub history: Vec<String>,
}

/// Resets the loading flag when dropped.
struct LoadingGuard<'a> {
    session: &'a Mutex<Session>,
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        if let Ok(mut session) = self.session.lock() {
            session.loading = false;
        }
    }
}

// =============================================================================
// Calculator
// =============================================================================

/// A calculator instance.
///
/// Cloning yields another handle to the same calculator.
#[derive(Clone)]
pub struct Calculator {
    backend: Arc<dyn ArithmeticBackend>,
    session: Arc<Mutex<Session>>,
    error_display: Duration,
}

impl std::fmt::Debug for Calculator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Calculator")
            .field("session", &self.session)
            .field("error_display", &self.error_display)
            .finish_non_exhaustive()
    }
}

impl Calculator {
    /// Creates a cleared calculator.
    ///
    /// `config.history_capacity` is capped at [`MAX_HISTORY_ENTRIES`].
    pub fn new(backend: Arc<dyn ArithmeticBackend>, config: &ClientConfig) -> Self {
        Calculator {
            backend,
            session: Arc::new(Mutex::new(Session {
                machine: InputMachine::new(),
                history: History::with_capacity(config.history_capacity.min(MAX_HISTORY_ENTRIES)),
                banner: None,
                loading: false,
            })),
            error_display: config.error_display,
        }
    }

    fn with_session<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Session) -> R,
    {
        let mut session = self.session.lock().expect("Calculator mutex poisoned");
        f(&mut session)
    }

    /// Applies one input, running a calculation if the input calls for one.
    ///
    /// ## Returns
    /// - The screen after the input (and its calculation, if any)
    /// - `Err(Busy)` if a calculation is still in flight; the input is dropped
    ///
    /// A failed calculation is not an `Err`: it shows up as an error banner.
    pub async fn press(&self, input: Input) -> ClientResult<Screen> {
        let calculation = self.with_session(|session| {
            if session.loading {
                return Err(ClientError::Busy);
            }
            session.banner = None;

            match session.machine.press(input) {
                Ok(calculation) => {
                    session.loading = calculation.is_some();
                    Ok(calculation)
                }
                Err(error) => {
                    debug!(%input, %error, "Input rejected");
                    session.banner = Some(ErrorBanner::new(GENERIC_ERROR));
                    Ok(None)
                }
            }
        })?;

        let Some(calculation) = calculation else {
            return Ok(self.screen());
        };

        let guard = LoadingGuard {
            session: &self.session,
        };

        let query = calculation.query();
        debug!(operation = %calculation.operation, chained = calculation.chained, "Calculating");
        let outcome = self.backend.calculate(&query).await;

        self.with_session(|session| match outcome {
            Ok(value) => {
                session.machine.resolve(&calculation, value);
                let expression = calculation.expression();
                info!(%expression, result = value, "Calculation complete");
                session.history.record(expression, value);
            }
            Err(error) => {
                warn!(operation = %calculation.operation, %error, "Calculation failed");
                session.banner = Some(ErrorBanner::new(error.display_message()));
            }
        });

        drop(guard);
        Ok(self.screen())
    }

    /// Maps a keyboard key to its input and presses it.
    ///
    /// Returns `Ok(None)` for keys the calculator ignores.
    pub async fn press_key(&self, key: &str) -> ClientResult<Option<Screen>> {
        match Input::from_key(key) {
            Some(input) => self.press(input).await.map(Some),
            None => Ok(None),
        }
    }

    /// Current screen.
    pub fn screen(&self) -> Screen {
        self.screen_at(Instant::now())
    }

    /// Screen as it looks at `now`; errors older than the display interval
    /// are no longer shown.
    pub fn screen_at(&self, now: Instant) -> Screen {
        let error_display = self.error_display;
        self.with_session(|session| {
            let banner = session
                .banner
                .as_ref()
                .filter(|b| now.saturating_duration_since(b.raised_at) < error_display);

            Screen {
                display: banner
                    .map(|b| b.message.clone())
                    .unwrap_or_else(|| session.machine.display_text()),
                error: banner.is_some(),
                loading: session.loading,
                history: session.history.lines(),
            }
        })
    }

    /// True while a calculation is in flight.
    pub fn is_loading(&self) -> bool {
        self.with_session(|session| session.loading)
    }

    /// Current keypad state.
    pub fn state(&self) -> CalculatorState {
        self.with_session(|session| session.machine.state())
    }

    /// Operands and operator collected so far.
    pub fn pending(&self) -> PendingExpression {
        self.with_session(|session| session.machine.pending().clone())
    }

    /// History entries, newest first.
    pub fn history(&self) -> Vec<HistoryEntry> {
        self.with_session(|session| session.history.newest_first().cloned().collect())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
