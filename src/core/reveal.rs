//! Entrance animation policy
//!
//! Every animated block gets an [`AnimationCue`]: a stagger index, a trigger,
//! and whether the trigger fires once. The cue resolves to a
//! [`RevealAnimation`] that fades the block in while sliding it up, delayed
//! by `index * 150ms`. Nothing here touches the DOM; the `ui::reveal`
//! components turn these values into inline styles and observers.

use std::time::Duration;

/// Delay added per stagger index
pub const STAGGER_STEP: Duration = Duration::from_millis(150);

/// Length of the fade-up animation, independent of the index
pub const REVEAL_DURATION: Duration = Duration::from_millis(700);

/// Vertical offset (px) a block starts from before sliding into place
pub const REVEAL_OFFSET_Y: f64 = 30.0;

/// Start delay of `index` within its sibling group
pub fn stagger_delay(index: u32) -> Duration {
    STAGGER_STEP * index
}

/// Cubic Bézier timing curve anchored at (0, 0) and (1, 1)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CubicBezier {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl CubicBezier {
    /// Curve shared by every fade-up reveal
    pub const REVEAL: CubicBezier = CubicBezier::new(0.25, 0.1, 0.25, 1.0);

    pub const EASE_IN_OUT: CubicBezier = CubicBezier::new(0.42, 0.0, 0.58, 1.0);

    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// CSS `<easing-function>` for this curve
    pub fn css(&self) -> String {
        format!(
            "cubic-bezier({}, {}, {}, {})",
            self.x1, self.y1, self.x2, self.y2
        )
    }

    /// Eased progress for linear time `t`, clamped to `[0, 1]`.
    pub fn progress(&self, t: f64) -> f64 {
        if t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }
        let s = self.solve_x(t);
        Self::sample(self.y1, self.y2, s)
    }

    fn sample(p1: f64, p2: f64, s: f64) -> f64 {
        let c = 3.0 * p1;
        let b = 3.0 * (p2 - p1) - c;
        let a = 1.0 - c - b;
        ((a * s + b) * s + c) * s
    }

    fn slope(p1: f64, p2: f64, s: f64) -> f64 {
        let c = 3.0 * p1;
        let b = 3.0 * (p2 - p1) - c;
        let a = 1.0 - c - b;
        (3.0 * a * s + 2.0 * b) * s + c
    }

    /// Finds the curve parameter whose x equals `x`
    fn solve_x(&self, x: f64) -> f64 {
        const EPSILON: f64 = 1e-7;

        // Newton-Raphson first, it converges in a few steps for CSS curves
        let mut s = x;
        for _ in 0..8 {
            let error = Self::sample(self.x1, self.x2, s) - x;
            if error.abs() < EPSILON {
                return s;
            }
            let d = Self::slope(self.x1, self.x2, s);
            if d.abs() < 1e-6 {
                break;
            }
            s -= error / d;
        }

        // Bisection fallback for flat regions
        let (mut lo, mut hi) = (0.0, 1.0);
        s = x;
        while lo < hi {
            let value = Self::sample(self.x1, self.x2, s);
            if (value - x).abs() < EPSILON {
                break;
            }
            if x > value {
                lo = s;
            } else {
                hi = s;
            }
            s = (lo + hi) / 2.0;
            if hi - lo < EPSILON {
                break;
            }
        }
        s
    }
}

/// Visual state of a block at one instant
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealFrame {
    pub opacity: f64,
    pub offset_y: f64,
}

impl RevealFrame {
    /// Inline style for this frame
    pub fn style(&self) -> String {
        format!(
            "opacity: {}; transform: translateY({}px);",
            self.opacity, self.offset_y
        )
    }
}

/// Fully specified entrance animation
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealAnimation {
    pub delay: Duration,
    pub duration: Duration,
    pub offset_y: f64,
    pub easing: CubicBezier,
}

impl RevealAnimation {
    /// Fade + slide up for the block at `index`
    pub fn fade_up(index: u32) -> Self {
        Self {
            delay: stagger_delay(index),
            duration: REVEAL_DURATION,
            offset_y: REVEAL_OFFSET_Y,
            easing: CubicBezier::REVEAL,
        }
    }

    /// Late, opacity-only fade used by the hero's scroll hint
    pub fn scroll_hint() -> Self {
        Self {
            delay: Duration::from_millis(1500),
            duration: Duration::from_secs(1),
            offset_y: 0.0,
            easing: CubicBezier::EASE_IN_OUT,
        }
    }

    pub fn hidden(&self) -> RevealFrame {
        RevealFrame {
            opacity: 0.0,
            offset_y: self.offset_y,
        }
    }

    pub fn shown(&self) -> RevealFrame {
        RevealFrame {
            opacity: 1.0,
            offset_y: 0.0,
        }
    }

    /// Frame at `elapsed` time since the trigger fired
    pub fn frame_at(&self, elapsed: Duration) -> RevealFrame {
        if elapsed <= self.delay {
            return self.hidden();
        }
        let running = elapsed - self.delay;
        if running >= self.duration {
            return self.shown();
        }

        let t = running.as_secs_f64() / self.duration.as_secs_f64();
        let p = self.easing.progress(t);
        RevealFrame {
            opacity: p,
            offset_y: self.offset_y * (1.0 - p),
        }
    }

    /// CSS `transition` value animating opacity and transform
    pub fn transition_css(&self) -> String {
        let duration = self.duration.as_secs_f64();
        let delay = self.delay.as_secs_f64();
        let easing = self.easing.css();
        format!(
            "opacity {duration}s {easing} {delay}s, transform {duration}s {easing} {delay}s"
        )
    }
}

/// Margin (px) applied to the viewport when testing intersection.
///
/// Negative values shrink the viewport, so the block has to be that far
/// inside before it counts as visible.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct ViewportMargin(pub i32);

impl ViewportMargin {
    pub const NONE: ViewportMargin = ViewportMargin(0);
    /// Section headings
    pub const SECTION: ViewportMargin = ViewportMargin(-100);
    /// Grid cards
    pub const CARD: ViewportMargin = ViewportMargin(-50);

    /// Value for `IntersectionObserverInit.rootMargin`
    pub fn root_margin(&self) -> String {
        format!("{}px", self.0)
    }
}

/// What starts a reveal
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum RevealTrigger {
    /// As soon as the block is attached
    #[default]
    OnMount,
    /// When the block first intersects the (margin-adjusted) viewport
    OnEnterViewport { margin: ViewportMargin },
}

impl RevealTrigger {
    pub fn viewport(margin: ViewportMargin) -> Self {
        RevealTrigger::OnEnterViewport { margin }
    }
}

/// Declarative animation parameters for one block
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnimationCue {
    pub index: u32,
    pub trigger: RevealTrigger,
    pub fire_once: bool,
}

impl AnimationCue {
    pub fn new(index: u32) -> Self {
        Self {
            index,
            trigger: RevealTrigger::OnMount,
            fire_once: true,
        }
    }

    pub fn on_enter_viewport(mut self, margin: ViewportMargin) -> Self {
        self.trigger = RevealTrigger::viewport(margin);
        self
    }

    /// Replays on every viewport entry instead of only the first
    pub fn repeating(mut self) -> Self {
        self.fire_once = false;
        self
    }

    pub fn animation(&self) -> RevealAnimation {
        RevealAnimation::fade_up(self.index)
    }

    pub fn observer(&self) -> RevealObserver {
        RevealObserver::new(self.fire_once)
    }
}

/// Visibility change produced by [`RevealObserver::observe`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealEvent {
    Show,
    Hide,
}

/// Turns raw intersection notifications into reveal events.
///
/// With `fire_once`, the first entry produces [`RevealEvent::Show`] and the
/// observer is consumed; the host should stop observing at that point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RevealObserver {
    fire_once: bool,
    visible: bool,
    consumed: bool,
}

impl RevealObserver {
    pub fn new(fire_once: bool) -> Self {
        Self {
            fire_once,
            visible: false,
            consumed: false,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_consumed(&self) -> bool {
        self.consumed
    }

    pub fn observe(&mut self, intersecting: bool) -> Option<RevealEvent> {
        if self.consumed {
            return None;
        }

        match (intersecting, self.visible) {
            (true, false) => {
                self.visible = true;
                self.consumed = self.fire_once;
                Some(RevealEvent::Show)
            }
            (false, true) => {
                self.visible = false;
                Some(RevealEvent::Hide)
            }
            _ => None,
        }
    }
}
