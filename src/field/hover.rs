//! Hover/tooltip state machine for plotted points.
//!
//! ```text
//! Idle --enter(p)--> Entering(p) --timer--> Visible(p)
//!                         |                    |
//!                      leave(p)             leave(p)
//!                         v                    v
//!                      Exiting(p) --timer--> Idle
//! ```
//!
//! An enter while exiting (or on a different point while entering or visible)
//! cancels the pending timer and restarts at `Entering` for the new point, so at most
//! one point is ever active. Timers are explicit tokens: a fired token that is no
//! longer the pending one is ignored. Time comes from an injected [`Clock`].

use std::{cell::Cell, fmt, time::Duration, time::Instant};

use serde::Serialize;

use crate::events::HitEvent;

/// Fade in/out duration.
pub const TRANSITION: Duration = Duration::from_millis(200);

/// Index of a plotted point within its rendering session.
pub type PointId = usize;

/// Monotonic time source.
pub trait Clock {
    /// Time elapsed since an arbitrary fixed origin.
    fn now(&self) -> Duration;
}

/// Wall-clock time measured from construction.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Virtual clock that only moves when told to.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<Duration>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }

    pub fn advance_ms(&self, ms: u64) {
        self.advance(Duration::from_millis(ms));
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.now.get()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> Duration {
        (**self).now()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HoverPhase {
    Idle,
    Entering,
    Visible,
    Exiting,
}

impl fmt::Display for HoverPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            HoverPhase::Idle => "idle",
            HoverPhase::Entering => "entering",
            HoverPhase::Visible => "visible",
            HoverPhase::Exiting => "exiting",
        };
        write!(f, "{}", s)
    }
}

/// One state change, reported by every machine operation that causes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: HoverPhase,
    pub to: HoverPhase,
    /// Point active after the change; `None` once back to idle.
    pub point: Option<PointId>,
}

/// Pending fade completion, keyed to the point it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerToken {
    pub id: u64,
    pub point: PointId,
    pub deadline: Duration,
}

/// Read-only view of the machine used for rendering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoverSnapshot {
    pub phase: HoverPhase,
    pub active: Option<PointId>,
    /// Detail panel opacity in `[0, 1]`.
    pub opacity: f64,
}

impl HoverSnapshot {
    pub fn idle() -> Self {
        Self {
            phase: HoverPhase::Idle,
            active: None,
            opacity: 0.0,
        }
    }

    /// Whether `point` should be drawn with the enlarged marker.
    pub fn is_enlarged(&self, point: PointId) -> bool {
        self.phase == HoverPhase::Visible && self.active == Some(point)
    }
}

/// Detail panel payload for the active event.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HoverDetail {
    pub batter: String,
    pub pitcher: String,
    pub outcome: String,
    pub distance: f64,
    pub launch_angle: f64,
    pub exit_speed: f64,
}

impl HoverDetail {
    pub fn from_event(event: &HitEvent) -> Self {
        Self {
            batter: event.batter.clone(),
            pitcher: event.pitcher.clone(),
            outcome: event.outcome.to_string(),
            distance: event.hit_distance,
            launch_angle: event.launch_angle,
            exit_speed: event.exit_speed,
        }
    }

    /// Panel text, top to bottom.
    pub fn lines(&self) -> Vec<String> {
        vec![
            self.batter.clone(),
            format!("Pitcher: {}", self.pitcher),
            format!("Outcome: {}", self.outcome),
            format!("Distance: {} ft", self.distance),
            format!("Launch Angle: {:.2}°", self.launch_angle),
            format!("Exit Speed: {:.2} mph", self.exit_speed),
        ]
    }
}

#[derive(Debug)]
pub struct HoverMachine<C: Clock = SystemClock> {
    clock: C,
    duration: Duration,
    phase: HoverPhase,
    active: Option<PointId>,
    phase_started: Duration,
    pending: Option<TimerToken>,
    next_timer_id: u64,
}

impl<C: Clock> HoverMachine<C> {
    pub fn new(clock: C) -> Self {
        Self::with_duration(clock, TRANSITION)
    }

    pub fn with_duration(clock: C, duration: Duration) -> Self {
        Self {
            clock,
            duration,
            phase: HoverPhase::Idle,
            active: None,
            phase_started: Duration::ZERO,
            pending: None,
            next_timer_id: 0,
        }
    }

    pub fn phase(&self) -> HoverPhase {
        self.phase
    }

    pub fn active_point(&self) -> Option<PointId> {
        self.active
    }

    pub fn pending_timer(&self) -> Option<TimerToken> {
        self.pending
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Pointer entered `point`'s interaction area.
    pub fn pointer_enter(&mut self, point: PointId) -> Option<Transition> {
        match self.phase {
            HoverPhase::Entering | HoverPhase::Visible if self.active == Some(point) => None,
            _ => Some(self.move_to(HoverPhase::Entering, Some(point))),
        }
    }

    /// Pointer left `point`'s interaction area. Leaves for a point that is not the
    /// active one are stale and ignored.
    pub fn pointer_leave(&mut self, point: PointId) -> Option<Transition> {
        if self.active != Some(point) {
            return None;
        }
        match self.phase {
            HoverPhase::Entering | HoverPhase::Visible => {
                Some(self.move_to(HoverPhase::Exiting, Some(point)))
            }
            HoverPhase::Idle | HoverPhase::Exiting => None,
        }
    }

    /// A timer completed. Cancelled tokens are ignored.
    pub fn timer_fired(&mut self, token: TimerToken) -> Option<Transition> {
        if self.pending != Some(token) {
            return None;
        }
        match self.phase {
            HoverPhase::Entering => Some(self.move_to(HoverPhase::Visible, Some(token.point))),
            HoverPhase::Exiting => Some(self.move_to(HoverPhase::Idle, None)),
            HoverPhase::Idle | HoverPhase::Visible => {
                self.pending = None;
                None
            }
        }
    }

    /// Fire the pending timer if its deadline has passed on the clock.
    pub fn fire_due(&mut self) -> Option<Transition> {
        let token = self.pending?;
        if self.clock.now() < token.deadline {
            return None;
        }
        self.timer_fired(token)
    }

    /// Drop all hover state, e.g. when the plotted event set changes.
    pub fn reset(&mut self) {
        self.phase = HoverPhase::Idle;
        self.active = None;
        self.pending = None;
        self.phase_started = self.clock.now();
    }

    pub fn snapshot(&self) -> HoverSnapshot {
        let progress = if self.duration.is_zero() {
            1.0
        } else {
            let elapsed = self.clock.now().saturating_sub(self.phase_started);
            (elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
        };
        let opacity = match self.phase {
            HoverPhase::Idle => 0.0,
            HoverPhase::Entering => progress,
            HoverPhase::Visible => 1.0,
            HoverPhase::Exiting => 1.0 - progress,
        };
        HoverSnapshot {
            phase: self.phase,
            active: self.active,
            opacity,
        }
    }

    fn move_to(&mut self, phase: HoverPhase, point: Option<PointId>) -> Transition {
        let from = self.phase;
        let now = self.clock.now();

        self.phase = phase;
        self.active = point;
        self.phase_started = now;
        self.pending = match (phase, point) {
            (HoverPhase::Entering | HoverPhase::Exiting, Some(p)) => {
                self.next_timer_id += 1;
                Some(TimerToken {
                    id: self.next_timer_id,
                    point: p,
                    deadline: now + self.duration,
                })
            }
            _ => None,
        };

        tracing::trace!(%from, to = %phase, ?point, "hover transition");
        Transition {
            from,
            to: phase,
            point,
        }
    }
}
