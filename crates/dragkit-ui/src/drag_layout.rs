//! Two-child drag container.
//!
//! Touch events reach the container in two steps, mirroring the way a parent
//! view group sees them:
//! 1. [`DragLayout::on_intercept_touch`] before the children get a chance,
//! 2. [`DragLayout::on_touch`] once the container owns the sequence.
//!
//! Both feed the same [`ViewDragEngine`], which consults the layout's
//! [`DragPolicyController`] for every decision.

use dragkit_foundation::{
    DragEngineConfig, DragHost, DragState, EdgeFlags, EngineConfigError, PointerEvent,
    ViewDragEngine, ViewId,
};
use dragkit_ui_graphics::{IntEdgeInsets, IntRect, IntSize};

use crate::child::{ChildTree, ChildView, Visibility};
use crate::error::ConfigError;
use crate::modes::DragModes;
use crate::policy::DragPolicyController;

#[derive(Debug)]
pub struct DragLayout {
    tree: ChildTree,
    engine: ViewDragEngine,
    controller: Option<DragPolicyController>,
    companion: Option<ViewId>,
}

impl DragLayout {
    pub fn new(size: IntSize, padding: IntEdgeInsets) -> Self {
        Self {
            tree: ChildTree::new(size, padding),
            engine: ViewDragEngine::default(),
            controller: None,
            companion: None,
        }
    }

    pub fn with_engine_config(
        size: IntSize,
        padding: IntEdgeInsets,
        config: DragEngineConfig,
    ) -> Result<Self, EngineConfigError> {
        Ok(Self {
            engine: ViewDragEngine::new(config)?,
            ..Self::new(size, padding)
        })
    }

    /// Attaches the two children. Must run once before any mode setter.
    ///
    /// The handle is always visible; the companion starts visible and sits
    /// above the handle.
    pub fn inflate(&mut self, handle: ChildView, companion: ChildView) -> Result<(), ConfigError> {
        if self.controller.is_some() {
            return Err(ConfigError::AlreadyInflated);
        }
        if handle.id == companion.id {
            return Err(ConfigError::DuplicateChild { id: handle.id });
        }

        self.tree.push(ChildView {
            visibility: Visibility::Visible,
            ..handle
        });
        self.tree.push(ChildView {
            visibility: Visibility::Visible,
            ..companion
        });
        self.controller = Some(DragPolicyController::new(handle.id));
        self.companion = Some(companion.id);
        self.tree.request_redraw();

        log::debug!(
            "drag layout inflated with handle {} and companion {}",
            handle.id,
            companion.id
        );
        Ok(())
    }

    pub fn is_inflated(&self) -> bool {
        self.controller.is_some()
    }

    pub fn set_horizontal(&mut self, enabled: bool) -> Result<(), ConfigError> {
        self.update_modes("set_horizontal", |modes| modes.horizontal = enabled)
    }

    pub fn set_vertical(&mut self, enabled: bool) -> Result<(), ConfigError> {
        self.update_modes("set_vertical", |modes| modes.vertical = enabled)
    }

    /// Also turns on left-edge tracking in the engine, whatever `enabled` is.
    /// Whether an edge drag captures the handle is decided by the mode flag.
    pub fn set_edge_tracking(&mut self, enabled: bool) -> Result<(), ConfigError> {
        self.update_modes("set_edge_tracking", |modes| modes.edge = enabled)?;
        self.engine.set_edge_tracking_enabled(EdgeFlags::LEFT);
        Ok(())
    }

    pub fn set_capture_restricted(&mut self, restricted: bool) -> Result<(), ConfigError> {
        self.update_modes("set_capture_restricted", |modes| {
            modes.capture_restricted = restricted
        })
    }

    fn update_modes(
        &mut self,
        setter: &'static str,
        apply: impl FnOnce(&mut DragModes),
    ) -> Result<(), ConfigError> {
        let controller = self
            .controller
            .as_mut()
            .ok_or(ConfigError::NotInflated { setter })?;
        apply(controller.modes_mut());
        let modes = controller.modes();

        // Hidden for good: no setter brings the companion back.
        if modes.any() {
            if let Some(companion) = self.companion {
                self.tree.set_visibility(companion, Visibility::Gone);
            }
        }

        log::debug!("{setter}: drag modes now {modes:?}");
        Ok(())
    }

    /// Routing step before the children see `event`.
    ///
    /// Up and cancel always end the session here and are never intercepted.
    pub fn on_intercept_touch(&mut self, event: &PointerEvent) -> bool {
        if event.kind.is_terminal() {
            self.engine.cancel();
            return false;
        }

        let Some(controller) = self.controller.as_ref() else {
            log::warn!("touch {:?} delivered before inflate, ignoring", event.kind);
            return false;
        };
        self.engine
            .should_intercept_touch_event(event, &mut self.tree, controller)
    }

    /// Handles `event` as the owner of the touch sequence. Always consumes it.
    pub fn on_touch(&mut self, event: &PointerEvent) -> bool {
        match self.controller.as_ref() {
            Some(controller) => self
                .engine
                .process_touch_event(event, &mut self.tree, controller),
            None => log::warn!("touch {:?} delivered before inflate, ignoring", event.kind),
        }
        true
    }

    pub fn size(&self) -> IntSize {
        self.tree.size()
    }

    pub fn padding(&self) -> IntEdgeInsets {
        self.tree.padding()
    }

    /// New container size from a layout pass. Takes effect on the next
    /// callback, including mid-gesture.
    pub fn set_size(&mut self, size: IntSize) {
        self.tree.set_size(size);
        self.tree.request_redraw();
    }

    pub fn set_padding(&mut self, padding: IntEdgeInsets) {
        self.tree.set_padding(padding);
        self.tree.request_redraw();
    }

    /// Places a child at `frame`.
    pub fn layout_child(&mut self, id: ViewId, frame: IntRect) -> Result<(), ConfigError> {
        let child = self
            .tree
            .get_mut(id)
            .ok_or(ConfigError::UnknownChild { id })?;
        child.frame = frame;
        self.tree.request_redraw();
        Ok(())
    }

    pub fn child(&self, id: ViewId) -> Option<&ChildView> {
        self.tree.get(id)
    }

    pub fn children(&self) -> impl Iterator<Item = &ChildView> {
        self.tree.iter()
    }

    pub fn handle(&self) -> Option<&ChildView> {
        self.controller
            .as_ref()
            .and_then(|controller| self.tree.get(controller.handle()))
    }

    pub fn handle_frame(&self) -> Option<IntRect> {
        self.handle().map(|handle| handle.frame)
    }

    pub fn companion(&self) -> Option<&ChildView> {
        self.companion.and_then(|id| self.tree.get(id))
    }

    pub fn companion_visibility(&self) -> Option<Visibility> {
        self.companion().map(|companion| companion.visibility)
    }

    pub fn modes(&self) -> DragModes {
        self.controller
            .as_ref()
            .map(DragPolicyController::modes)
            .unwrap_or_default()
    }

    pub fn controller(&self) -> Option<&DragPolicyController> {
        self.controller.as_ref()
    }

    pub fn engine(&self) -> &ViewDragEngine {
        &self.engine
    }

    pub fn drag_state(&self) -> DragState {
        self.engine.state()
    }

    pub fn captured_child(&self) -> Option<ViewId> {
        self.engine.captured_view()
    }

    pub fn needs_redraw(&self) -> bool {
        self.tree.needs_redraw()
    }

    /// Clears and returns the pending redraw request.
    pub fn take_redraw(&mut self) -> bool {
        self.tree.take_redraw()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HANDLE: ViewId = 10;
    const COMPANION: ViewId = 20;

    fn layout() -> DragLayout {
        let mut layout = DragLayout::new(IntSize::new(300, 300), IntEdgeInsets::ZERO);
        layout
            .inflate(
                ChildView::new(HANDLE, IntRect::new(0, 0, 50, 50)),
                ChildView::new(COMPANION, IntRect::new(0, 60, 50, 50)),
            )
            .expect("inflate");
        layout.take_redraw();
        layout
    }

    #[test]
    fn setters_fail_before_inflate() {
        let mut layout = DragLayout::new(IntSize::new(300, 300), IntEdgeInsets::ZERO);

        assert_eq!(
            layout.set_horizontal(true),
            Err(ConfigError::NotInflated {
                setter: "set_horizontal"
            })
        );
        assert_eq!(
            layout.set_vertical(true),
            Err(ConfigError::NotInflated {
                setter: "set_vertical"
            })
        );
        assert_eq!(
            layout.set_edge_tracking(true),
            Err(ConfigError::NotInflated {
                setter: "set_edge_tracking"
            })
        );
        assert_eq!(
            layout.set_capture_restricted(true),
            Err(ConfigError::NotInflated {
                setter: "set_capture_restricted"
            })
        );
        assert_eq!(layout.engine().tracking_edges(), EdgeFlags::NONE);
    }

    #[test]
    fn inflate_rejects_duplicates_and_reinflation() {
        let mut layout = DragLayout::new(IntSize::new(300, 300), IntEdgeInsets::ZERO);
        let view = ChildView::new(1, IntRect::new(0, 0, 10, 10));
        assert_eq!(
            layout.inflate(view, view),
            Err(ConfigError::DuplicateChild { id: 1 })
        );
        assert!(!layout.is_inflated());

        let mut layout = self::layout();
        assert_eq!(
            layout.inflate(
                ChildView::new(1, IntRect::default()),
                ChildView::new(2, IntRect::default())
            ),
            Err(ConfigError::AlreadyInflated)
        );
    }

    #[test]
    fn inflate_makes_both_children_visible() {
        let mut layout = DragLayout::new(IntSize::new(300, 300), IntEdgeInsets::ZERO);
        let hidden = ChildView {
            visibility: Visibility::Gone,
            ..ChildView::new(HANDLE, IntRect::new(0, 0, 50, 50))
        };
        layout
            .inflate(hidden, ChildView::new(COMPANION, IntRect::default()))
            .expect("inflate");

        assert_eq!(layout.handle().map(|h| h.visibility), Some(Visibility::Visible));
        assert_eq!(layout.companion_visibility(), Some(Visibility::Visible));
        assert_eq!(layout.modes(), DragModes::default());
    }

    #[test]
    fn each_setter_hides_the_companion() {
        type Setter = fn(&mut DragLayout, bool) -> Result<(), ConfigError>;
        let setters: [(&str, Setter); 4] = [
            ("horizontal", DragLayout::set_horizontal),
            ("vertical", DragLayout::set_vertical),
            ("edge", DragLayout::set_edge_tracking),
            ("capture", DragLayout::set_capture_restricted),
        ];

        for (name, setter) in setters {
            let mut layout = layout();
            assert_eq!(layout.companion_visibility(), Some(Visibility::Visible));

            setter(&mut layout, true).expect(name);

            assert_eq!(
                layout.companion_visibility(),
                Some(Visibility::Gone),
                "{name}"
            );
            assert_eq!(layout.handle().map(|h| h.visibility), Some(Visibility::Visible));
            assert!(layout.take_redraw(), "{name}");
        }
    }

    #[test]
    fn disabling_never_unhides() {
        let mut layout = layout();
        layout.set_vertical(true).expect("vertical");
        layout.set_vertical(false).expect("vertical off");

        assert!(!layout.modes().any());
        assert_eq!(layout.companion_visibility(), Some(Visibility::Gone));
    }

    #[test]
    fn disabling_from_clean_state_keeps_companion() {
        let mut layout = layout();
        layout.set_horizontal(false).expect("horizontal off");
        assert_eq!(layout.companion_visibility(), Some(Visibility::Visible));
    }

    #[test]
    fn edge_setter_tracks_left_edge() {
        let mut layout = layout();
        layout.set_edge_tracking(false).expect("edge");
        assert_eq!(layout.engine().tracking_edges(), EdgeFlags::LEFT);
        assert!(!layout.modes().edge);

        layout.set_edge_tracking(true).expect("edge");
        assert!(layout.modes().edge);
        assert_eq!(layout.engine().tracking_edges(), EdgeFlags::LEFT);
    }

    #[test]
    fn layout_updates_reach_the_policy() {
        let mut layout = layout();
        layout.set_vertical(true).expect("vertical");
        layout.set_size(IntSize::new(300, 120));
        assert!(layout.take_redraw());

        layout.on_touch(&PointerEvent::down(10.0, 10.0));
        layout.on_touch(&PointerEvent::moved(10.0, 300.0));
        assert_eq!(layout.handle_frame(), Some(IntRect::new(0, 70, 50, 50)));

        assert_eq!(
            layout.layout_child(99, IntRect::default()),
            Err(ConfigError::UnknownChild { id: 99 })
        );
        layout
            .layout_child(HANDLE, IntRect::new(0, 0, 50, 50))
            .expect("layout handle");
        assert_eq!(layout.handle_frame(), Some(IntRect::new(0, 0, 50, 50)));
    }

    #[test]
    fn touches_before_inflate_are_ignored() {
        let mut layout = DragLayout::new(IntSize::new(300, 300), IntEdgeInsets::ZERO);
        assert!(!layout.on_intercept_touch(&PointerEvent::down(1.0, 1.0)));
        assert!(layout.on_touch(&PointerEvent::down(1.0, 1.0)));
        assert_eq!(layout.drag_state(), DragState::Idle);
    }

    #[test]
    fn terminal_events_cancel_and_are_not_intercepted() {
        let mut layout = layout();
        layout.set_vertical(true).expect("vertical");
        layout.on_touch(&PointerEvent::down(10.0, 10.0));
        assert_eq!(layout.drag_state(), DragState::Dragging);

        assert!(!layout.on_intercept_touch(&PointerEvent::up(10.0, 40.0)));
        assert_eq!(layout.drag_state(), DragState::Idle);
        assert_eq!(layout.captured_child(), None);

        layout.on_touch(&PointerEvent::down(10.0, 10.0));
        assert!(!layout.on_intercept_touch(&PointerEvent::cancel(10.0, 40.0)));
        assert_eq!(layout.drag_state(), DragState::Idle);
    }

    #[test]
    fn rejects_bad_engine_config() {
        let config = DragEngineConfig::default().with_sensitivity(0.0);
        let result = DragLayout::with_engine_config(IntSize::new(10, 10), IntEdgeInsets::ZERO, config);
        assert!(matches!(
            result,
            Err(EngineConfigError::InvalidSensitivity(_))
        ));
    }
}
