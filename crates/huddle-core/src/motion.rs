//! Presence and stagger timing for the transcript animation.
//!
//! The transcript container fades in and out as it is shown and hidden.
//! Its entries animate one after another: forwards on the way in, last
//! entry first on the way out.
//!
//! ```text
//!   show()          settle()
//! Hidden ──► Entering ──────► Visible
//!   ▲          │  ▲              │
//!   │ settle() │  │ show()       │ hide()
//!   │          ▼  │              │
//!   └──────── Exiting ◄──────────┘
//! ```

use std::time::Duration;

/// Mount state of the animated transcript container.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Presence {
    /// Not in the view tree
    #[default]
    Hidden,
    /// Mounted and playing the entrance animation
    Entering,
    /// Mounted, animations finished
    Visible,
    /// Still mounted while the exit animation plays
    Exiting,
}

impl Presence {
    /// Presence on first mount for the given visibility flag.
    pub fn initial(hidden: bool) -> Self {
        if hidden {
            Presence::Hidden
        } else {
            Presence::Entering
        }
    }

    /// Transition for the visibility flag turning on.
    pub fn show(self) -> Self {
        match self {
            Presence::Hidden | Presence::Exiting => Presence::Entering,
            other => other,
        }
    }

    /// Transition for the visibility flag turning off.
    pub fn hide(self) -> Self {
        match self {
            Presence::Entering | Presence::Visible => Presence::Exiting,
            other => other,
        }
    }

    /// Apply the visibility flag.
    pub fn toggle(self, hidden: bool) -> Self {
        if hidden {
            self.hide()
        } else {
            self.show()
        }
    }

    /// Transition once the running animation has finished.
    pub fn settle(self) -> Self {
        match self {
            Presence::Entering => Presence::Visible,
            Presence::Exiting => Presence::Hidden,
            other => other,
        }
    }

    /// Whether the container is in the view tree.
    pub fn is_mounted(&self) -> bool {
        !matches!(self, Presence::Hidden)
    }

    /// Whether an exit animation is playing.
    pub fn is_leaving(&self) -> bool {
        matches!(self, Presence::Exiting)
    }

    /// Whether an animation is in flight.
    pub fn is_animating(&self) -> bool {
        matches!(self, Presence::Entering | Presence::Exiting)
    }

    /// CSS class for the container in this state.
    pub fn class(&self) -> &'static str {
        match self {
            Presence::Hidden => "is-hidden",
            Presence::Entering => "is-entering",
            Presence::Visible => "is-visible",
            Presence::Exiting => "is-exiting",
        }
    }
}

/// Order in which children start their animation.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum StaggerDirection {
    /// First child first
    #[default]
    Forward,
    /// Last child first
    Reverse,
}

/// Easing curve, rendered as a CSS timing function.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Ease {
    Linear,
    EaseIn,
    #[default]
    EaseOut,
    EaseInOut,
}

impl Ease {
    pub fn css(&self) -> &'static str {
        match self {
            Ease::Linear => "linear",
            Ease::EaseIn => "ease-in",
            Ease::EaseOut => "ease-out",
            Ease::EaseInOut => "ease-in-out",
        }
    }
}

/// Timing for one container transition and the children it staggers.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Transition {
    /// Delay before the container and the first child start
    pub delay: Duration,
    /// Duration of the container and of each child animation
    pub duration: Duration,
    pub ease: Ease,
    /// Offset between consecutive children
    pub stagger: Duration,
    pub direction: StaggerDirection,
}

impl Transition {
    /// Container fade-in: short delay, children stagger forwards.
    pub const ENTER: Transition = Transition {
        delay: Duration::from_millis(200),
        duration: Duration::from_millis(300),
        ease: Ease::EaseOut,
        stagger: Duration::from_millis(100),
        direction: StaggerDirection::Forward,
    };

    /// Container fade-out: no delay, children stagger in reverse.
    pub const EXIT: Transition = Transition {
        delay: Duration::ZERO,
        duration: Duration::from_millis(300),
        ease: Ease::EaseOut,
        stagger: Duration::from_millis(100),
        direction: StaggerDirection::Reverse,
    };

    /// Start delay for child `index` of `count`.
    ///
    /// Indices past the end are clamped to the last child; positions past
    /// `u32::MAX` saturate.
    pub fn child_delay(&self, index: usize, count: usize) -> Duration {
        if count == 0 {
            return self.delay;
        }
        let index = index.min(count - 1);
        let position = match self.direction {
            StaggerDirection::Forward => index,
            StaggerDirection::Reverse => count - 1 - index,
        };
        let position = u32::try_from(position).unwrap_or(u32::MAX);
        self.delay.saturating_add(self.stagger.saturating_mul(position))
    }

    /// Time from the start of the transition until every child has finished.
    pub fn total(&self, count: usize) -> Duration {
        let last = u32::try_from(count.saturating_sub(1)).unwrap_or(u32::MAX);
        self.delay
            .saturating_add(self.stagger.saturating_mul(last))
            .saturating_add(self.duration)
    }
}

/// Complete motion settings for a transcript.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Motion {
    pub enter: Transition,
    pub exit: Transition,
    /// Vertical offset, in pixels, of a hidden entry
    pub entry_offset_px: f32,
}

impl Default for Motion {
    fn default() -> Self {
        Self {
            enter: Transition::ENTER,
            exit: Transition::EXIT,
            entry_offset_px: 10.0,
        }
    }
}

impl Motion {
    /// Transition that drives the given presence, if one is running.
    pub fn transition_for(&self, presence: Presence) -> Option<&Transition> {
        match presence {
            Presence::Entering => Some(&self.enter),
            Presence::Exiting => Some(&self.exit),
            Presence::Hidden | Presence::Visible => None,
        }
    }

    /// How long to wait before settling the given presence.
    pub fn settle_after(&self, presence: Presence, count: usize) -> Option<Duration> {
        self.transition_for(presence).map(|t| t.total(count))
    }

    /// Decide how the presence driver reacts to a new visibility flag or
    /// entry count.
    ///
    /// `settle_pending` is whether a settle timer is already running.
    pub fn step(
        &self,
        current: Presence,
        hidden: bool,
        count: usize,
        settle_pending: bool,
    ) -> PresenceStep {
        let next = current.toggle(hidden);
        if next == current && (settle_pending || !next.is_animating()) {
            return PresenceStep::Keep;
        }
        PresenceStep::Restart {
            next,
            settle_after: self.settle_after(next, count),
        }
    }
}

/// Outcome of [`Motion::step`].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PresenceStep {
    /// Leave the presence and any pending settle alone
    Keep,
    /// Cancel any pending settle, move to `next`, and settle after
    /// `settle_after` when set
    Restart {
        next: Presence,
        settle_after: Option<Duration>,
    },
}
