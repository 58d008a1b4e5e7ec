//! Reference drag engine.
//!
//! Tracks the pointers of one touch sequence, decides when a child becomes
//! captured and moves the captured child as the pointer travels. Every policy
//! decision (who may be captured, where a child may go) is delegated to a
//! [`DragCallback`]; the engine only owns the session bookkeeping.

use dragkit_ui_graphics::Point;
use smallvec::SmallVec;

use super::callback::{DragCallback, DragScope};
use super::config::{DragEngineConfig, EngineConfigError};
use super::host::{DragHost, ViewId};
use crate::gesture_constants::MAX_FLING_VELOCITY;
use crate::input::{EdgeFlags, PointerEvent, PointerEventKind, PointerId};
use crate::velocity_tracker::VelocityTracker1D;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragState {
    /// No child is captured.
    Idle,
    /// A child is captured and follows the active pointer.
    Dragging,
}

#[derive(Clone, Copy, Debug)]
struct TrackedPointer {
    id: PointerId,
    initial: Point,
    last: Point,
    initial_edges: EdgeFlags,
    edge_drags_in_progress: EdgeFlags,
    edge_drags_locked: EdgeFlags,
}

#[derive(Debug)]
pub struct ViewDragEngine {
    config: DragEngineConfig,
    touch_slop: f32,
    tracking_edges: EdgeFlags,
    state: DragState,
    captured: Option<ViewId>,
    active_pointer: Option<PointerId>,
    pointers: SmallVec<[TrackedPointer; 2]>,
    velocity_x: VelocityTracker1D,
    velocity_y: VelocityTracker1D,
}

impl Default for ViewDragEngine {
    fn default() -> Self {
        Self::from_valid_config(DragEngineConfig::default())
    }
}

impl ViewDragEngine {
    pub fn new(config: DragEngineConfig) -> Result<Self, EngineConfigError> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: DragEngineConfig) -> Self {
        Self {
            touch_slop: config.effective_touch_slop(),
            config,
            tracking_edges: EdgeFlags::NONE,
            state: DragState::Idle,
            captured: None,
            active_pointer: None,
            pointers: SmallVec::new(),
            velocity_x: VelocityTracker1D::new(),
            velocity_y: VelocityTracker1D::new(),
        }
    }

    pub fn config(&self) -> &DragEngineConfig {
        &self.config
    }

    pub fn touch_slop(&self) -> f32 {
        self.touch_slop
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn captured_view(&self) -> Option<ViewId> {
        self.captured
    }

    pub fn active_pointer(&self) -> Option<PointerId> {
        self.active_pointer
    }

    pub fn tracking_edges(&self) -> EdgeFlags {
        self.tracking_edges
    }

    /// Edges whose touches are reported to the callback.
    pub fn set_edge_tracking_enabled(&mut self, edges: EdgeFlags) {
        self.tracking_edges = edges;
    }

    pub fn is_pointer_down(&self, pointer_id: PointerId) -> bool {
        self.pointers.iter().any(|p| p.id == pointer_id)
    }

    /// True if any tracked pointer went down on one of `edges`.
    pub fn is_edge_touched(&self, edges: EdgeFlags) -> bool {
        self.pointers
            .iter()
            .any(|p| p.initial_edges.intersects(edges))
    }

    /// Drops the current session without notifying the callback.
    pub fn cancel(&mut self) {
        if let Some(child) = self.captured {
            log::debug!("drag session cancelled while view {child} was captured");
        }
        self.state = DragState::Idle;
        self.captured = None;
        self.active_pointer = None;
        self.pointers.clear();
        self.velocity_x.reset();
        self.velocity_y.reset();
    }

    /// Captures `child` for `pointer_id` without consulting
    /// [`DragCallback::can_capture`].
    pub fn capture_child_view<H, C>(
        &mut self,
        host: &mut H,
        callback: &C,
        child: ViewId,
        pointer_id: PointerId,
    ) where
        H: DragHost,
        C: DragCallback + ?Sized,
    {
        log::debug!("capturing view {child} for pointer {pointer_id}");
        self.captured = Some(child);
        self.active_pointer = Some(pointer_id);
        dispatch(host, |scope| {
            callback.on_view_captured(scope, child, pointer_id)
        });
        self.state = DragState::Dragging;
    }

    /// Feeds an event observed before the container's children see it.
    ///
    /// Returns `true` once the engine wants the rest of the sequence, which
    /// happens exactly when a child has been captured.
    pub fn should_intercept_touch_event<H, C>(
        &mut self,
        event: &PointerEvent,
        host: &mut H,
        callback: &C,
    ) -> bool
    where
        H: DragHost,
        C: DragCallback + ?Sized,
    {
        log::trace!("intercept {:?} at {:?}", event.kind, event.position);

        match event.kind {
            PointerEventKind::Down => {
                self.cancel();
                self.add_movement(event);
                let index = self.save_initial_motion(host, event);
                self.report_edge_touched(host, callback, index);
            }
            PointerEventKind::Move => {
                self.add_movement(event);
                if self.state == DragState::Idle {
                    self.track_idle_move(host, callback, event);
                }
            }
            PointerEventKind::Up | PointerEventKind::Cancel => self.cancel(),
        }

        self.state == DragState::Dragging
    }

    /// Feeds an event the container is handling itself.
    pub fn process_touch_event<H, C>(&mut self, event: &PointerEvent, host: &mut H, callback: &C)
    where
        H: DragHost,
        C: DragCallback + ?Sized,
    {
        log::trace!("process {:?} at {:?}", event.kind, event.position);

        match event.kind {
            PointerEventKind::Down => {
                self.cancel();
                self.add_movement(event);
                let index = self.save_initial_motion(host, event);
                let under = host.find_top_child_under(event.position.x, event.position.y);
                self.try_capture_view_for_drag(host, callback, under, event.id);
                self.report_edge_touched(host, callback, index);
            }
            PointerEventKind::Move => {
                self.add_movement(event);
                if self.state == DragState::Dragging {
                    self.drag_active_pointer(host, callback, event);
                } else {
                    self.track_idle_move(host, callback, event);
                }
            }
            PointerEventKind::Up => {
                self.add_movement(event);
                if self.state == DragState::Dragging {
                    let xvel = self.velocity_x.calculate_velocity_with_max(MAX_FLING_VELOCITY);
                    let yvel = self.velocity_y.calculate_velocity_with_max(MAX_FLING_VELOCITY);
                    self.dispatch_view_released(host, callback, xvel, yvel);
                }
                self.cancel();
            }
            PointerEventKind::Cancel => {
                if self.state == DragState::Dragging {
                    self.dispatch_view_released(host, callback, 0.0, 0.0);
                }
                self.cancel();
            }
        }
    }

    fn try_capture_view_for_drag<H, C>(
        &mut self,
        host: &mut H,
        callback: &C,
        child: Option<ViewId>,
        pointer_id: PointerId,
    ) -> bool
    where
        H: DragHost,
        C: DragCallback + ?Sized,
    {
        let Some(child) = child else {
            return false;
        };
        if self.captured == Some(child) && self.active_pointer == Some(pointer_id) {
            return true;
        }
        if callback.can_capture(child, pointer_id) {
            self.capture_child_view(host, callback, child, pointer_id);
            return true;
        }
        log::trace!("view {child} refused capture for pointer {pointer_id}");
        false
    }

    // Idle move: look for edge drags first, then for a child dragged past slop.
    // A capture leaves the last position untouched so the slop distance is
    // applied on the next move.
    fn track_idle_move<H, C>(&mut self, host: &mut H, callback: &C, event: &PointerEvent)
    where
        H: DragHost,
        C: DragCallback + ?Sized,
    {
        let Some(index) = self.pointer_index(event.id) else {
            log::trace!("ignoring move for untracked pointer {}", event.id);
            return;
        };
        let initial = self.pointers[index].initial;
        let dx = event.position.x - initial.x;
        let dy = event.position.y - initial.y;

        self.report_new_edge_drags(host, callback, index, dx, dy);
        if self.state == DragState::Dragging {
            return;
        }

        let under = host.find_top_child_under(event.position.x, event.position.y);
        if let Some(child) = under {
            if self.check_touch_slop(host, callback, child, dx, dy)
                && self.try_capture_view_for_drag(host, callback, Some(child), event.id)
            {
                return;
            }
        }

        self.pointers[index].last = event.position;
    }

    fn drag_active_pointer<H, C>(&mut self, host: &mut H, callback: &C, event: &PointerEvent)
    where
        H: DragHost,
        C: DragCallback + ?Sized,
    {
        let index = match self.pointer_index(event.id) {
            Some(index) => index,
            // Captured through capture_child_view without a down of its own.
            None => self.track_pointer(event.id, event.position, EdgeFlags::NONE),
        };

        if self.active_pointer == Some(event.id) {
            let last = self.pointers[index].last;
            let dx = (event.position.x - last.x) as i32;
            let dy = (event.position.y - last.y) as i32;
            self.drag_by(host, callback, dx, dy);
        }

        self.pointers[index].last = event.position;
    }

    fn drag_by<H, C>(&mut self, host: &mut H, callback: &C, dx: i32, dy: i32)
    where
        H: DragHost,
        C: DragCallback + ?Sized,
    {
        let Some(child) = self.captured else {
            return;
        };
        let Some(frame) = host.child_frame(child) else {
            log::warn!("captured view {child} is no longer part of the container");
            return;
        };

        let scope = DragScope::new(&*host);
        let left = if dx != 0 {
            let (proposed, dx) = saturating_step(frame.left, dx);
            callback.clamp_horizontal(&scope, child, proposed, dx)
        } else {
            frame.left
        };
        let top = if dy != 0 {
            let (proposed, dy) = saturating_step(frame.top, dy);
            callback.clamp_vertical(&scope, child, proposed, dy)
        } else {
            frame.top
        };

        let moved_x = left.saturating_sub(frame.left);
        let moved_y = top.saturating_sub(frame.top);
        if moved_x == 0 && moved_y == 0 {
            return;
        }

        host.offset_child(child, moved_x, moved_y);
        dispatch(host, |scope| {
            callback.on_position_changed(scope, child, left, top, moved_x, moved_y)
        });
    }

    fn dispatch_view_released<H, C>(&mut self, host: &mut H, callback: &C, xvel: f32, yvel: f32)
    where
        H: DragHost,
        C: DragCallback + ?Sized,
    {
        let Some(child) = self.captured else {
            return;
        };
        log::debug!("releasing view {child} at velocity ({xvel}, {yvel})");
        dispatch(host, |scope| callback.on_view_released(scope, child, xvel, yvel));
        self.state = DragState::Idle;
        self.captured = None;
    }

    fn check_touch_slop<H, C>(&self, host: &H, callback: &C, child: ViewId, dx: f32, dy: f32) -> bool
    where
        H: DragHost,
        C: DragCallback + ?Sized,
    {
        let scope = DragScope::new(host);
        let horizontal = callback.horizontal_drag_range(&scope, child) > 0;
        let vertical = callback.vertical_drag_range(&scope, child) > 0;
        let slop = self.touch_slop;

        match (horizontal, vertical) {
            (true, true) => dx * dx + dy * dy > slop * slop,
            (true, false) => dx.abs() > slop,
            (false, true) => dy.abs() > slop,
            (false, false) => false,
        }
    }

    fn report_edge_touched<H, C>(&mut self, host: &mut H, callback: &C, index: usize)
    where
        H: DragHost,
        C: DragCallback + ?Sized,
    {
        let pointer = self.pointers[index];
        let edges = pointer.initial_edges & self.tracking_edges;
        if edges.is_empty() {
            return;
        }

        log::trace!("pointer {} touched edges {edges:?}", pointer.id);
        let request = dispatch(host, |scope| {
            callback.on_edge_touched(scope, edges, pointer.id)
        });
        if let Some(child) = request {
            self.capture_child_view(host, callback, child, pointer.id);
        }
    }

    fn report_new_edge_drags<H, C>(
        &mut self,
        host: &mut H,
        callback: &C,
        index: usize,
        dx: f32,
        dy: f32,
    ) where
        H: DragHost,
        C: DragCallback + ?Sized,
    {
        let mut started = EdgeFlags::NONE;
        for edge in EdgeFlags::EACH {
            let (delta, odelta) = if edge.intersects(EdgeFlags::LEFT | EdgeFlags::RIGHT) {
                (dx, dy)
            } else {
                (dy, dx)
            };
            if self.check_new_edge_drag(index, edge, delta, odelta) {
                started |= edge;
            }
        }
        if started.is_empty() {
            return;
        }

        let pointer_id = self.pointers[index].id;
        self.pointers[index].edge_drags_in_progress |= started;
        log::debug!("edge drag started on {started:?} by pointer {pointer_id}");

        let request = dispatch(host, |scope| {
            callback.on_edge_drag_started(scope, started, pointer_id)
        });
        if let Some(child) = request {
            self.capture_child_view(host, callback, child, pointer_id);
        }
    }

    fn check_new_edge_drag(&mut self, index: usize, edge: EdgeFlags, delta: f32, odelta: f32) -> bool {
        let slop = self.touch_slop;
        let pointer = &mut self.pointers[index];
        let delta = delta.abs();
        let odelta = odelta.abs();

        if !pointer.initial_edges.contains(edge)
            || !self.tracking_edges.contains(edge)
            || pointer.edge_drags_locked.contains(edge)
            || pointer.edge_drags_in_progress.contains(edge)
            || (delta <= slop && odelta <= slop)
        {
            return false;
        }

        // Mostly moving along the edge: this pointer will never drag off it.
        if delta < odelta * 0.5 {
            pointer.edge_drags_locked |= edge;
            return false;
        }

        delta > slop
    }

    fn save_initial_motion<H: DragHost>(&mut self, host: &H, event: &PointerEvent) -> usize {
        let edges = self.edges_touched(host, event.position);
        self.track_pointer(event.id, event.position, edges)
    }

    fn track_pointer(&mut self, id: PointerId, position: Point, edges: EdgeFlags) -> usize {
        self.pointers.retain(|p| p.id != id);
        self.pointers.push(TrackedPointer {
            id,
            initial: position,
            last: position,
            initial_edges: edges,
            edge_drags_in_progress: EdgeFlags::NONE,
            edge_drags_locked: EdgeFlags::NONE,
        });
        self.pointers.len() - 1
    }

    fn pointer_index(&self, id: PointerId) -> Option<usize> {
        self.pointers.iter().position(|p| p.id == id)
    }

    fn edges_touched<H: DragHost>(&self, host: &H, position: Point) -> EdgeFlags {
        let size = host.size();
        let band = self.config.edge_size;
        let mut edges = EdgeFlags::NONE;

        if position.x < band {
            edges |= EdgeFlags::LEFT;
        }
        if position.y < band {
            edges |= EdgeFlags::TOP;
        }
        if position.x > size.width as f32 - band {
            edges |= EdgeFlags::RIGHT;
        }
        if position.y > size.height as f32 - band {
            edges |= EdgeFlags::BOTTOM;
        }
        edges
    }

    fn add_movement(&mut self, event: &PointerEvent) {
        self.velocity_x.add_data_point(event.time_ms, event.position.x);
        self.velocity_y.add_data_point(event.time_ms, event.position.y);
    }
}

/// `origin + delta` saturated at the `i32` range, with the delta that was
/// actually applied so `proposed - delta == origin` holds.
fn saturating_step(origin: i32, delta: i32) -> (i32, i32) {
    let proposed = origin.saturating_add(delta);
    // Saturation only happens when both have the same sign, so this never
    // overflows.
    (proposed, proposed - origin)
}

/// Runs one callback against a fresh scope, forwards its redraw request to
/// the host and returns its capture request.
fn dispatch<H, F>(host: &mut H, f: F) -> Option<ViewId>
where
    H: DragHost,
    F: FnOnce(&mut DragScope<'_>),
{
    let mut scope = DragScope::new(&*host);
    f(&mut scope);
    let capture = scope.capture_request();
    let invalidate = scope.invalidate_requested();
    if invalidate {
        host.invalidate();
    }
    capture
}
