//! One interactive rendering session: the plotted events, their projections and the
//! hover machine that belongs to them.

use super::{
    geometry::FieldGeometry,
    hover::{Clock, HoverDetail, HoverMachine, HoverPhase, PointId, SystemClock, Transition},
    projection::{project_all, FieldPoint},
    scene::{build_scene, Scene, HIT_AREA_RADIUS},
};
use crate::events::HitEvent;

#[derive(Debug)]
pub struct PlotSession<C: Clock = SystemClock> {
    geometry: FieldGeometry,
    events: Vec<HitEvent>,
    points: Vec<FieldPoint>,
    hover: HoverMachine<C>,
    /// Point currently under the pointer, independent of the fade phase.
    under_pointer: Option<PointId>,
}

impl PlotSession<SystemClock> {
    pub fn with_system_clock(events: Vec<HitEvent>) -> Self {
        Self::new(events, SystemClock::new())
    }
}

impl<C: Clock> PlotSession<C> {
    pub fn new(events: Vec<HitEvent>, clock: C) -> Self {
        let points = project_all(&events);
        Self {
            geometry: FieldGeometry::standard(),
            events,
            points,
            hover: HoverMachine::new(clock),
            under_pointer: None,
        }
    }

    pub fn events(&self) -> &[HitEvent] {
        &self.events
    }

    pub fn points(&self) -> &[FieldPoint] {
        &self.points
    }

    pub fn geometry(&self) -> &FieldGeometry {
        &self.geometry
    }

    pub fn hover(&self) -> &HoverMachine<C> {
        &self.hover
    }

    /// Replace the plotted events. Projections are recomputed and hover state is
    /// discarded.
    pub fn set_events(&mut self, events: Vec<HitEvent>) {
        self.points = project_all(&events);
        self.events = events;
        self.hover.reset();
        self.under_pointer = None;
    }

    /// Nearest point whose interaction disc contains `at`.
    pub fn hit_test(&self, at: FieldPoint) -> Option<PointId> {
        self.points
            .iter()
            .enumerate()
            .map(|(id, p)| (id, p.distance_to(at)))
            .filter(|(_, d)| *d <= HIT_AREA_RADIUS)
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(id, _)| id)
    }

    /// Pointer moved to `at`; emits enter/leave as the target under it changes.
    pub fn pointer_move(&mut self, at: FieldPoint) -> Vec<Transition> {
        let target = self.hit_test(at);
        if target == self.under_pointer {
            return Vec::new();
        }

        let mut transitions = Vec::new();
        match target {
            Some(next) => transitions.extend(self.hover.pointer_enter(next)),
            None => {
                if let Some(prev) = self.under_pointer {
                    transitions.extend(self.hover.pointer_leave(prev));
                }
            }
        }
        self.under_pointer = target;
        transitions
    }

    /// Pointer left the plot entirely.
    pub fn pointer_out(&mut self) -> Vec<Transition> {
        self.under_pointer
            .take()
            .and_then(|prev| self.hover.pointer_leave(prev))
            .into_iter()
            .collect()
    }

    /// Deliver any fade timer that has come due.
    pub fn tick(&mut self) -> Option<Transition> {
        self.hover.fire_due()
    }

    /// Detail payload of the active point while it is not idle.
    pub fn active_detail(&self) -> Option<HoverDetail> {
        if self.hover.phase() == HoverPhase::Idle {
            return None;
        }
        self.hover
            .active_point()
            .and_then(|id| self.events.get(id))
            .map(HoverDetail::from_event)
    }

    pub fn scene(&self) -> Scene {
        build_scene(
            &self.geometry,
            &self.events,
            &self.points,
            self.hover.snapshot(),
        )
    }
}
