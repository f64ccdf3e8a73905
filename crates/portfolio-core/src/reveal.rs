//! One-shot entrance animations.
//!
//! Sections fade or slide in the first time they come into view and then
//! stay put. The animation itself is a CSS transition between the
//! [`Entrance::hidden_class`] and [`Entrance::shown_class`] states.
//!
//! A staggered group is triggered once as a whole; each item then waits
//! [`stagger_delay_ms`] after the group is shown, whether or not the item
//! itself is on screen yet.

/// Delay between consecutive items of a staggered group.
pub const STAGGER_STEP_MS: u32 = 120;

const TRANSITION: &str = "transition-all duration-700 ease-out";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Entrance {
    /// Opacity only
    Fade,
    /// Fade in while rising a few pixels
    #[default]
    FadeUp,
    /// Fade in while sliding in from the left
    FadeLeft,
    /// Fade in while growing from 80%
    ScaleIn,
}

impl Entrance {
    pub fn hidden_class(self) -> &'static str {
        match self {
            Entrance::Fade => "opacity-0",
            Entrance::FadeUp => "opacity-0 translate-y-3",
            Entrance::FadeLeft => "opacity-0 -translate-x-10",
            Entrance::ScaleIn => "opacity-0 scale-[0.8]",
        }
    }

    pub fn shown_class(self) -> &'static str {
        "opacity-100 translate-x-0 translate-y-0 scale-100"
    }

    /// Full class list for the wrapper in the given state.
    pub fn class(self, shown: bool) -> String {
        let state = if shown {
            self.shown_class()
        } else {
            self.hidden_class()
        };
        format!("{TRANSITION} {state}")
    }
}

/// What starts an entrance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Trigger {
    /// As soon as the element is mounted (above-the-fold content)
    OnMount,
    /// The first time the element scrolls into view
    #[default]
    InView,
}

/// Latches the first "visible" report and ignores everything after it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RevealLatch {
    shown: bool,
}

impl RevealLatch {
    pub fn is_shown(&self) -> bool {
        self.shown
    }

    /// Feeds one visibility report. Returns `true` only for the report that
    /// reveals the element.
    pub fn record(&mut self, is_intersecting: bool) -> bool {
        if self.shown || !is_intersecting {
            return false;
        }
        self.shown = true;
        true
    }
}

/// Transition delay for the `index`-th item of a staggered group.
pub fn stagger_delay_ms(index: usize) -> u32 {
    u32::try_from(index)
        .unwrap_or(u32::MAX)
        .saturating_mul(STAGGER_STEP_MS)
}

/// Inline style carrying a transition delay.
pub fn delay_style(delay_ms: u32) -> String {
    format!("transition-delay: {delay_ms}ms")
}
