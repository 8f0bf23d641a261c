//! Scroll-triggered reveal and scrubbed parallax bindings.
//!
//! Each binding pairs a resolved scroll range with what it animates. The
//! web layer owns the elements; this side only decides, per frame, which
//! style each binding should have.

use crate::constants::*;
use crate::easing::Easing;
use crate::trigger::{
    Action, Anchor, CrossingTracker, ElementGeometry, ToggleActions, Trigger, TriggerPoint,
};
use crate::tween::{RevealPose, ScrubShift, ShiftUnit, Tween};

#[derive(Clone, Debug)]
pub struct RevealBinding {
    trigger: Trigger,
    tracker: CrossingTracker,
    actions: ToggleActions,
    tween: Tween,
}

impl RevealBinding {
    /// Start "top 90%", default end "bottom top", play on enter, reverse on leave-back.
    pub fn new(geom: &ElementGeometry) -> Self {
        let trigger = reveal_trigger();
        Self {
            tracker: CrossingTracker::new(trigger.resolve(geom)),
            trigger,
            actions: ToggleActions::PLAY_REVERSE,
            tween: Tween::new(REVEAL_DURATION_SEC, Easing::Power4Out),
        }
    }

    pub fn refresh(&mut self, geom: &ElementGeometry) {
        self.tracker.set_range(self.trigger.resolve(geom));
    }

    /// Feed the scroll position, then step the tween by `dt` seconds.
    /// Returns the pose when it may have changed since the last call.
    pub fn update(&mut self, scroll: f64, dt: f32) -> Option<RevealPose> {
        let mut kicked = false;
        for crossing in self.tracker.update(scroll) {
            let action = self.actions.action_for(crossing);
            self.tween.apply(action);
            kicked |= action != Action::None;
        }
        if self.tween.is_settled() && !kicked {
            return None;
        }
        Some(RevealPose::at(self.tween.advance(dt)))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrubKind {
    ProjectCard,
    HeroImage,
}

#[derive(Clone, Debug)]
pub struct ScrubBinding {
    trigger: Trigger,
    shift: ScrubShift,
    last: Option<f32>,
}

impl ScrubBinding {
    pub fn new(kind: ScrubKind, geom: &ElementGeometry) -> Self {
        let (trigger, to, unit) = match kind {
            ScrubKind::ProjectCard => (project_card_trigger(), PROJECT_CARD_SHIFT_PX, ShiftUnit::Px),
            ScrubKind::HeroImage => (hero_trigger(), HERO_SHIFT_PERCENT, ShiftUnit::Percent),
        };
        Self {
            trigger,
            shift: ScrubShift::new(trigger.resolve(geom), to, unit),
            last: None,
        }
    }

    pub fn refresh(&mut self, geom: &ElementGeometry) {
        self.shift.range = self.trigger.resolve(geom);
        self.last = None;
    }

    /// CSS transform for `scroll`, or `None` if unchanged since the last call.
    pub fn update(&mut self, scroll: f64) -> Option<String> {
        let v = self.shift.value_at(scroll);
        if self.last == Some(v) {
            return None;
        }
        self.last = Some(v);
        Some(self.shift.transform_css(scroll))
    }
}

fn reveal_trigger() -> Trigger {
    Trigger::new(
        TriggerPoint {
            element: Anchor::Top,
            viewport: Anchor::Fraction(0.9),
        },
        TriggerPoint {
            element: Anchor::Bottom,
            viewport: Anchor::Top,
        },
    )
}

fn project_card_trigger() -> Trigger {
    Trigger::new(
        TriggerPoint {
            element: Anchor::Top,
            viewport: Anchor::Bottom,
        },
        TriggerPoint {
            element: Anchor::Bottom,
            viewport: Anchor::Top,
        },
    )
}

fn hero_trigger() -> Trigger {
    Trigger::new(
        TriggerPoint {
            element: Anchor::Top,
            viewport: Anchor::Center,
        },
        TriggerPoint {
            element: Anchor::Bottom,
            viewport: Anchor::Top,
        },
    )
}
