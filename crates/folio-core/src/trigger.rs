//! Scroll triggers: where an animation starts and ends in scroll space,
//! and which direction crossings fire which action.

use smallvec::SmallVec;
use thiserror::Error;

/// A position either on the element or on the viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Anchor {
    Top,
    Center,
    Bottom,
    /// Fraction of the element's height (or the viewport's), 0.9 for "90%".
    Fraction(f64),
    Px(f64),
}

impl Anchor {
    fn offset_in(&self, size: f64) -> f64 {
        match *self {
            Anchor::Top => 0.0,
            Anchor::Center => size * 0.5,
            Anchor::Bottom => size,
            Anchor::Fraction(f) => size * f,
            Anchor::Px(px) => px,
        }
    }

    fn parse(token: &str) -> Result<Self, TriggerParseError> {
        match token {
            "top" => Ok(Anchor::Top),
            "center" => Ok(Anchor::Center),
            "bottom" => Ok(Anchor::Bottom),
            t if t.ends_with('%') => t[..t.len() - 1]
                .parse::<f64>()
                .map(|p| Anchor::Fraction(p / 100.0))
                .map_err(|_| TriggerParseError::BadAnchor(token.to_string())),
            t => t
                .trim_end_matches("px")
                .parse::<f64>()
                .map(Anchor::Px)
                .map_err(|_| TriggerParseError::BadAnchor(token.to_string())),
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum TriggerParseError {
    #[error("expected \"<element> <viewport>\", got {0:?}")]
    Shape(String),
    #[error("unknown anchor {0:?}")]
    BadAnchor(String),
}

/// "When `element` edge meets `viewport` edge", e.g. `top 90%`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TriggerPoint {
    pub element: Anchor,
    pub viewport: Anchor,
}

impl TriggerPoint {
    pub fn parse(s: &str) -> Result<Self, TriggerParseError> {
        let mut parts = s.split_whitespace();
        match (parts.next(), parts.next(), parts.next()) {
            (Some(e), Some(v), None) => Ok(Self {
                element: Anchor::parse(e)?,
                viewport: Anchor::parse(v)?,
            }),
            _ => Err(TriggerParseError::Shape(s.to_string())),
        }
    }

    /// Absolute scroll offset at which this point is reached.
    pub fn resolve(&self, geom: &ElementGeometry) -> f64 {
        geom.top + self.element.offset_in(geom.height) - self.viewport.offset_in(geom.viewport_height)
    }
}

/// Element position in document coordinates plus the viewport height.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ElementGeometry {
    pub top: f64,
    pub height: f64,
    pub viewport_height: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Trigger {
    pub start: TriggerPoint,
    pub end: TriggerPoint,
}

impl Trigger {
    pub fn new(start: TriggerPoint, end: TriggerPoint) -> Self {
        Self { start, end }
    }

    pub fn parse(start: &str, end: &str) -> Result<Self, TriggerParseError> {
        Ok(Self::new(TriggerPoint::parse(start)?, TriggerPoint::parse(end)?))
    }

    pub fn resolve(&self, geom: &ElementGeometry) -> ScrollRange {
        ScrollRange {
            start: self.start.resolve(geom),
            end: self.end.resolve(geom),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollRange {
    pub start: f64,
    pub end: f64,
}

impl ScrollRange {
    /// Scrub progress in [0, 1]. A degenerate range behaves like a step.
    pub fn progress(&self, scroll: f64) -> f64 {
        let span = self.end - self.start;
        if span <= 0.0 {
            return if scroll >= self.start { 1.0 } else { 0.0 };
        }
        ((scroll - self.start) / span).clamp(0.0, 1.0)
    }

    fn region(&self, scroll: f64) -> Region {
        if scroll < self.start {
            Region::Before
        } else if scroll <= self.end {
            Region::Inside
        } else {
            Region::After
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Region {
    Before,
    Inside,
    After,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Crossing {
    Enter,
    Leave,
    EnterBack,
    LeaveBack,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Play,
    Reverse,
    None,
}

/// What to do on each of the four crossings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToggleActions {
    pub on_enter: Action,
    pub on_leave: Action,
    pub on_enter_back: Action,
    pub on_leave_back: Action,
}

impl ToggleActions {
    /// Play once on the way down, undo when scrolled back above the start.
    pub const PLAY_REVERSE: Self = Self {
        on_enter: Action::Play,
        on_leave: Action::None,
        on_enter_back: Action::None,
        on_leave_back: Action::Reverse,
    };

    pub fn action_for(&self, crossing: Crossing) -> Action {
        match crossing {
            Crossing::Enter => self.on_enter,
            Crossing::Leave => self.on_leave,
            Crossing::EnterBack => self.on_enter_back,
            Crossing::LeaveBack => self.on_leave_back,
        }
    }
}

/// Tracks which side of a range the scroll position is on and reports crossings.
#[derive(Clone, Debug)]
pub struct CrossingTracker {
    range: ScrollRange,
    region: Region,
}

impl CrossingTracker {
    pub fn new(range: ScrollRange) -> Self {
        Self {
            range,
            region: Region::Before,
        }
    }

    /// Layout changed; keep the current region so no crossing is invented.
    pub fn set_range(&mut self, range: ScrollRange) {
        self.range = range;
    }

    pub fn update(&mut self, scroll: f64) -> SmallVec<[Crossing; 2]> {
        let next = self.range.region(scroll);
        let mut out = SmallVec::new();
        match (self.region, next) {
            (Region::Before, Region::Inside) => out.push(Crossing::Enter),
            (Region::Before, Region::After) => {
                out.push(Crossing::Enter);
                out.push(Crossing::Leave);
            }
            (Region::Inside, Region::After) => out.push(Crossing::Leave),
            (Region::After, Region::Inside) => out.push(Crossing::EnterBack),
            (Region::After, Region::Before) => {
                out.push(Crossing::EnterBack);
                out.push(Crossing::LeaveBack);
            }
            (Region::Inside, Region::Before) => out.push(Crossing::LeaveBack),
            _ => {}
        }
        self.region = next;
        out
    }
}
