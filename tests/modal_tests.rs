// Host-side tests for the contact modal state machine.

use folio_core::modal::*;

fn token_for(fx: &Effects, timer: Timer) -> u32 {
    fx.iter()
        .find_map(|e| match e {
            Effect::Schedule { timer: t, token, .. } if *t == timer => Some(*token),
            _ => None,
        })
        .unwrap_or_else(|| panic!("{:?} not scheduled in {:?}", timer, fx))
}

fn fire(m: &mut ContactModal, timer: Timer, token: u32) -> Effects {
    m.handle(ModalEvent::TimerFired(timer, token))
}

fn opened() -> ContactModal {
    let mut m = ContactModal::new();
    let fx = m.handle(ModalEvent::OpenClicked);
    let t = token_for(&fx, Timer::LayoutSettle);
    fire(&mut m, Timer::LayoutSettle, t);
    m
}

/// Open, submit, deliver. Returns the auto-close token.
fn succeeded(m: &mut ContactModal) -> u32 {
    m.handle(ModalEvent::Submit);
    let fx = m.handle(ModalEvent::SubmitFinished(Ok(())));
    token_for(&fx, Timer::AutoClose)
}

#[test]
fn open_shows_container_then_animates_in() {
    let mut m = ContactModal::new();
    let fx = m.handle(ModalEvent::OpenClicked);
    assert_eq!(fx[0], Effect::ShowContainer);
    assert!(matches!(
        fx[1],
        Effect::Schedule {
            timer: Timer::LayoutSettle,
            delay_ms: 10,
            ..
        }
    ));
    assert_eq!(m.state(), ModalState::Opening);

    let t = token_for(&fx, Timer::LayoutSettle);
    assert_eq!(fire(&mut m, Timer::LayoutSettle, t).as_slice(), &[Effect::AnimateIn]);
    assert_eq!(m.state(), ModalState::Open(View::Form));
}

#[test]
fn close_animates_out_then_hides() {
    let mut m = opened();
    let fx = m.handle(ModalEvent::CloseClicked);
    assert_eq!(fx[0], Effect::AnimateOut);
    assert!(matches!(
        fx[1],
        Effect::Schedule {
            timer: Timer::HideContainer,
            delay_ms: 300,
            ..
        }
    ));
    let t = token_for(&fx, Timer::HideContainer);
    assert_eq!(fire(&mut m, Timer::HideContainer, t).as_slice(), &[Effect::HideContainer]);
    assert_eq!(m.state(), ModalState::Closed);
}

#[test]
fn backdrop_click_closes() {
    let mut m = opened();
    let fx = m.handle(ModalEvent::BackdropClicked);
    assert_eq!(fx[0], Effect::AnimateOut);
    assert!(matches!(m.state(), ModalState::Closing { .. }));
}

#[test]
fn redundant_open_and_close_are_ignored() {
    let mut m = ContactModal::new();
    assert!(m.handle(ModalEvent::CloseClicked).is_empty());
    let mut m = opened();
    assert!(m.handle(ModalEvent::OpenClicked).is_empty());
    m.handle(ModalEvent::CloseClicked);
    assert!(m.handle(ModalEvent::OpenClicked).is_empty());
    assert!(m.handle(ModalEvent::CloseClicked).is_empty());
}

#[test]
fn submit_locks_the_button_and_sends_once() {
    let mut m = opened();
    let fx = m.handle(ModalEvent::Submit);
    assert_eq!(fx.as_slice(), &[Effect::LockSubmit, Effect::SendForm]);
    assert!(m.is_submitting());
    assert!(m.handle(ModalEvent::Submit).is_empty());
}

#[test]
fn submit_requires_open_form() {
    let mut m = ContactModal::new();
    assert!(m.handle(ModalEvent::Submit).is_empty());
    m.handle(ModalEvent::OpenClicked);
    assert!(m.handle(ModalEvent::Submit).is_empty());
}

#[test]
fn success_shows_confirmation_and_auto_closes() {
    let mut m = opened();
    m.handle(ModalEvent::Submit);
    let fx = m.handle(ModalEvent::SubmitFinished(Ok(())));
    assert_eq!(fx[0], Effect::ShowSuccess);
    assert_eq!(fx[1], Effect::RestoreSubmit);
    assert!(matches!(
        fx[2],
        Effect::Schedule {
            timer: Timer::AutoClose,
            delay_ms: 5000,
            ..
        }
    ));
    assert_eq!(m.state(), ModalState::Open(View::Success));
    assert!(!m.is_submitting());

    // The form is hidden, so another submit cannot happen.
    assert!(m.handle(ModalEvent::Submit).is_empty());

    let fx = fire(&mut m, Timer::AutoClose, token_for(&fx, Timer::AutoClose));
    assert_eq!(fx[0], Effect::AnimateOut);
    assert_eq!(
        m.state(),
        ModalState::Closing {
            reset_after: true,
            hidden: false
        }
    );

    let fx = fire(&mut m, Timer::HideContainer, token_for(&fx, Timer::HideContainer));
    assert_eq!(fx[0], Effect::HideContainer);
    assert!(matches!(
        fx[1],
        Effect::Schedule {
            timer: Timer::ResetForm,
            delay_ms: 300,
            ..
        }
    ));

    let fx = fire(&mut m, Timer::ResetForm, token_for(&fx, Timer::ResetForm));
    assert_eq!(fx.as_slice(), &[Effect::ResetForm]);
    assert_eq!(m.state(), ModalState::Closed);
}

#[test]
fn failure_alerts_once_and_keeps_the_form() {
    let mut m = opened();
    m.handle(ModalEvent::Submit);
    let fx = m.handle(ModalEvent::SubmitFinished(Err(SubmitError::Status(500))));
    assert_eq!(
        fx.as_slice(),
        &[Effect::Alert(TRANSMISSION_FAILED_ALERT), Effect::RestoreSubmit]
    );
    assert_eq!(m.state(), ModalState::Open(View::Form));
    assert!(!m.is_submitting());

    // The user can retry.
    assert_eq!(m.handle(ModalEvent::Submit).len(), 2);
}

#[test]
fn network_failure_alerts_too() {
    let mut m = opened();
    m.handle(ModalEvent::Submit);
    let fx = m.handle(ModalEvent::SubmitFinished(Err(SubmitError::Network(
        "TypeError: Failed to fetch".into(),
    ))));
    let alerts = fx.iter().filter(|e| matches!(e, Effect::Alert(_))).count();
    assert_eq!(alerts, 1);
}

#[test]
fn unsolicited_result_is_ignored() {
    let mut m = opened();
    assert!(m.handle(ModalEvent::SubmitFinished(Ok(()))).is_empty());
}

#[test]
fn closing_before_layout_settles_drops_the_animate_in() {
    let mut m = ContactModal::new();
    let fx = m.handle(ModalEvent::OpenClicked);
    let settle = token_for(&fx, Timer::LayoutSettle);
    let fx = m.handle(ModalEvent::CloseClicked);
    assert_eq!(fx[0], Effect::AnimateOut);
    assert!(!m.is_pending(Timer::LayoutSettle));
    assert!(fire(&mut m, Timer::LayoutSettle, settle).is_empty());

    fire(&mut m, Timer::HideContainer, token_for(&fx, Timer::HideContainer));
    assert_eq!(m.state(), ModalState::Closed);
}

#[test]
fn manual_close_cancels_auto_close() {
    let mut m = opened();
    let auto = succeeded(&mut m);
    m.handle(ModalEvent::CloseClicked);
    assert!(!m.is_pending(Timer::AutoClose));
    assert!(fire(&mut m, Timer::AutoClose, auto).is_empty());
}

#[test]
fn reopening_during_reset_window_resets_immediately() {
    let mut m = opened();
    succeeded(&mut m);
    let fx = m.handle(ModalEvent::CloseClicked);
    let fx = fire(&mut m, Timer::HideContainer, token_for(&fx, Timer::HideContainer));
    let reset = token_for(&fx, Timer::ResetForm);

    let fx = m.handle(ModalEvent::OpenClicked);
    assert_eq!(fx[0], Effect::ResetForm);
    assert_eq!(fx[1], Effect::ShowContainer);
    assert_eq!(m.state(), ModalState::Opening);

    // The old reset must not clear the form the user is now looking at.
    assert!(fire(&mut m, Timer::ResetForm, reset).is_empty());
}

#[test]
fn result_after_close_restores_and_clears() {
    let mut m = opened();
    m.handle(ModalEvent::Submit);
    let fx = m.handle(ModalEvent::CloseClicked);
    fire(&mut m, Timer::HideContainer, token_for(&fx, Timer::HideContainer));
    assert_eq!(m.state(), ModalState::Closed);

    let fx = m.handle(ModalEvent::SubmitFinished(Ok(())));
    assert_eq!(fx.as_slice(), &[Effect::RestoreSubmit, Effect::ResetForm]);
    assert_eq!(m.state(), ModalState::Closed);
}

#[test]
fn status_check() {
    assert_eq!(check_status(true, 200), Ok(()));
    let err = check_status(false, 500).unwrap_err();
    assert_eq!(err, SubmitError::Status(500));
    assert_eq!(err.to_string(), "server responded with HTTP 500");
}

#[test]
fn timer_delays() {
    assert_eq!(Timer::LayoutSettle.delay_ms(), 10);
    assert_eq!(Timer::HideContainer.delay_ms(), 300);
    assert_eq!(Timer::ResetForm.delay_ms(), 300);
    assert_eq!(Timer::AutoClose.delay_ms(), 5000);
}
