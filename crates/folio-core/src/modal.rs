//! Contact modal state machine.
//!
//! The machine never touches the DOM. Every event returns the effects the
//! web layer must carry out, including timers to schedule. Timers carry a
//! token so that a timer scheduled for an earlier open/close cycle is
//! ignored when it fires late.

use crate::constants::*;
use fnv::FnvHashMap;
use smallvec::SmallVec;
use thiserror::Error;

pub const TRANSMISSION_FAILED_ALERT: &str = "Transmission Failed. Please try again.";

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SubmitError {
    #[error("network error: {0}")]
    Network(String),
    #[error("server responded with HTTP {0}")]
    Status(u16),
}

/// Anything in the 2xx range counts as delivered.
pub fn check_status(ok: bool, status: u16) -> Result<(), SubmitError> {
    if ok {
        Ok(())
    } else {
        Err(SubmitError::Status(status))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum View {
    Form,
    Success,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalState {
    Closed,
    /// Container shown, waiting one layout pass before the content animates in.
    Opening,
    Open(View),
    /// `hidden` once the container is gone; `reset_after` when the form
    /// still has to be restored from the success view.
    Closing { reset_after: bool, hidden: bool },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Timer {
    LayoutSettle,
    HideContainer,
    ResetForm,
    AutoClose,
}

impl Timer {
    pub fn delay_ms(&self) -> i32 {
        match self {
            Timer::LayoutSettle => MODAL_LAYOUT_SETTLE_MS,
            Timer::HideContainer => MODAL_TRANSITION_MS,
            Timer::ResetForm => MODAL_RESET_DELAY_MS,
            Timer::AutoClose => MODAL_AUTO_CLOSE_MS,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ModalEvent {
    OpenClicked,
    CloseClicked,
    BackdropClicked,
    Submit,
    SubmitFinished(Result<(), SubmitError>),
    TimerFired(Timer, u32),
}

#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    ShowContainer,
    HideContainer,
    /// Content to full scale and opacity.
    AnimateIn,
    /// Content back to 95% scale, transparent.
    AnimateOut,
    Schedule { timer: Timer, token: u32, delay_ms: i32 },
    /// Disable the submit button and show the transmitting label.
    LockSubmit,
    /// Re-enable the submit button with its original label.
    RestoreSubmit,
    /// POST the form fields.
    SendForm,
    /// Hide the form, show the success view.
    ShowSuccess,
    /// Clear fields, show the form, hide the success view.
    ResetForm,
    Alert(&'static str),
}

pub type Effects = SmallVec<[Effect; 4]>;

#[derive(Debug)]
pub struct ContactModal {
    state: ModalState,
    in_flight: bool,
    pending: FnvHashMap<Timer, u32>,
    next_token: u32,
}

impl Default for ContactModal {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactModal {
    pub fn new() -> Self {
        Self {
            state: ModalState::Closed,
            in_flight: false,
            pending: FnvHashMap::default(),
            next_token: 1,
        }
    }

    #[inline]
    pub fn state(&self) -> ModalState {
        self.state
    }

    #[inline]
    pub fn is_submitting(&self) -> bool {
        self.in_flight
    }

    #[inline]
    pub fn is_pending(&self, timer: Timer) -> bool {
        self.pending.contains_key(&timer)
    }

    /// The only way to change state.
    pub fn handle(&mut self, event: ModalEvent) -> Effects {
        let mut fx = Effects::new();
        match event {
            ModalEvent::OpenClicked => self.open(&mut fx),
            ModalEvent::CloseClicked | ModalEvent::BackdropClicked => self.close(&mut fx),
            ModalEvent::Submit => {
                if self.state == ModalState::Open(View::Form) && !self.in_flight {
                    self.in_flight = true;
                    fx.push(Effect::LockSubmit);
                    fx.push(Effect::SendForm);
                } else {
                    log::debug!("[modal] submit ignored in {:?}", self.state);
                }
            }
            ModalEvent::SubmitFinished(result) => self.finish_submit(result, &mut fx),
            ModalEvent::TimerFired(timer, token) => {
                if self.pending.get(&timer) != Some(&token) {
                    log::debug!("[modal] stale {:?} timer ignored", timer);
                    return fx;
                }
                self.pending.remove(&timer);
                self.timer_fired(timer, &mut fx);
            }
        }
        fx
    }

    fn open(&mut self, fx: &mut Effects) {
        match self.state {
            ModalState::Closed => {}
            ModalState::Closing {
                reset_after,
                hidden: true,
            } => {
                // Reopened inside the reset window: finish the reset now.
                self.pending.remove(&Timer::ResetForm);
                if reset_after {
                    fx.push(Effect::ResetForm);
                }
            }
            _ => return,
        }
        self.state = ModalState::Opening;
        fx.push(Effect::ShowContainer);
        self.schedule(Timer::LayoutSettle, fx);
    }

    fn close(&mut self, fx: &mut Effects) {
        let reset_after = match self.state {
            ModalState::Opening => false,
            ModalState::Open(view) => view == View::Success,
            ModalState::Closed | ModalState::Closing { .. } => return,
        };
        self.pending.remove(&Timer::LayoutSettle);
        self.pending.remove(&Timer::AutoClose);
        self.state = ModalState::Closing {
            reset_after,
            hidden: false,
        };
        fx.push(Effect::AnimateOut);
        self.schedule(Timer::HideContainer, fx);
    }

    fn timer_fired(&mut self, timer: Timer, fx: &mut Effects) {
        match (timer, self.state) {
            (Timer::LayoutSettle, ModalState::Opening) => {
                self.state = ModalState::Open(View::Form);
                fx.push(Effect::AnimateIn);
            }
            (Timer::HideContainer, ModalState::Closing { reset_after, hidden: false }) => {
                fx.push(Effect::HideContainer);
                if reset_after {
                    self.state = ModalState::Closing {
                        reset_after,
                        hidden: true,
                    };
                    self.schedule(Timer::ResetForm, fx);
                } else {
                    self.state = ModalState::Closed;
                }
            }
            (Timer::ResetForm, ModalState::Closing { hidden: true, .. }) => {
                fx.push(Effect::ResetForm);
                self.state = ModalState::Closed;
            }
            (Timer::AutoClose, ModalState::Open(View::Success)) => self.close(fx),
            (t, s) => log::debug!("[modal] {:?} timer has nothing to do in {:?}", t, s),
        }
    }

    fn finish_submit(&mut self, result: Result<(), SubmitError>, fx: &mut Effects) {
        if !self.in_flight {
            log::warn!("[modal] submit result without a pending submit");
            return;
        }
        self.in_flight = false;
        let on_form = self.state == ModalState::Open(View::Form);
        match result {
            Ok(()) if on_form => {
                fx.push(Effect::ShowSuccess);
                fx.push(Effect::RestoreSubmit);
                self.state = ModalState::Open(View::Success);
                self.schedule(Timer::AutoClose, fx);
            }
            Ok(()) => {
                // Delivered after the user closed the modal; clear what was sent.
                fx.push(Effect::RestoreSubmit);
                fx.push(Effect::ResetForm);
            }
            Err(e) => {
                log::warn!("[modal] transmission failed: {}", e);
                fx.push(Effect::Alert(TRANSMISSION_FAILED_ALERT));
                fx.push(Effect::RestoreSubmit);
            }
        }
    }

    fn schedule(&mut self, timer: Timer, fx: &mut Effects) {
        let token = self.next_token;
        self.next_token = self.next_token.wrapping_add(1);
        self.pending.insert(timer, token);
        fx.push(Effect::Schedule {
            timer,
            token,
            delay_ms: timer.delay_ms(),
        });
    }
}
