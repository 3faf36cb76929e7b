//! Swipe cell widget state.

use std::fmt;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, RwLock};
use std::time::Instant;

use crate::buffer::Buffer;
use crate::error::BuildError;
use crate::gesture::GestureRecognizer;
use crate::position::PositionModel;
use crate::rect::Rect;
use crate::style::SwipeStyles;
use crate::transition::{Animator, Completion, Settle, TransitionConfig};

/// Offset the content is seeded to when the mount peek is enabled.
pub(crate) const PEEK_OFFSET: f32 = -200.0;

/// Default action button label.
pub(crate) const DEFAULT_LABEL: &str = "Clear";

/// Handler invoked when the revealed action button is pressed.
pub(crate) type PressHandler = Box<dyn FnMut() + Send + Sync>;

/// Unique identifier for a SwipeCell widget instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SwipeCellId(usize);

impl SwipeCellId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

/// Rest position a transition is headed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Open,
    Closed,
    /// Mount-time demonstration; lands without flipping the open flag.
    Peek,
}

/// Lifecycle phase of the swipe state machine.
///
/// While `Dragging` or `Animating`, the open flag still reflects the
/// previous settled state, never the live finger position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipePhase {
    Closed,
    Open,
    Dragging,
    Animating(Target),
}

/// Content rendered inside the swipeable layer.
///
/// Implemented for any draw closure, so callers can wrap whatever they
/// already know how to paint.
pub trait Content: Send + Sync {
    fn render(&self, buf: &mut Buffer, area: Rect);
}

impl<F> Content for F
where
    F: Fn(&mut Buffer, Rect) + Send + Sync,
{
    fn render(&self, buf: &mut Buffer, area: Rect) {
        self(buf, area)
    }
}

/// Hit regions recorded by the last render.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct HitRegions {
    /// Full widget area.
    pub(crate) area: Rect,
    /// Currently visible part of the action button.
    pub(crate) revealed: Rect,
    /// Tap catcher over the visible content, present only while open.
    pub(crate) overlay: Option<Rect>,
}

/// Internal state for a swipe cell.
pub(crate) struct Inner {
    pub(crate) phase: SwipePhase,
    /// True iff the last completed transition settled at the revealed
    /// position.
    pub(crate) swipe_open: bool,
    /// Measured width of the action button; 0 until the first layout pass.
    pub(crate) button_width: f32,
    pub(crate) disabled: bool,
    /// Liveness flag; once set, no callback may mutate state.
    pub(crate) disposed: bool,
    pub(crate) peek_on_mount: bool,
    pub(crate) position: PositionModel,
    pub(crate) animator: Animator,
    pub(crate) recognizer: GestureRecognizer,
    pub(crate) label: String,
    pub(crate) styles: SwipeStyles,
    pub(crate) content: Box<dyn Content>,
    /// Behind its own lock so dispatch can invoke it with the state lock
    /// released; the handler may call back into the widget.
    pub(crate) on_press: Arc<Mutex<PressHandler>>,
    pub(crate) regions: HitRegions,
}

impl Inner {
    /// Drag-phase position write. Direct and unanimated; which branch runs
    /// depends on which edge was settled when the drag began.
    pub(crate) fn apply_drag(&mut self, dx: f32) {
        if self.disabled {
            return;
        }
        // A drag takes over the shared value from any in-flight transition.
        self.animator.cancel();
        self.phase = SwipePhase::Dragging;
        if dx < 0.0 && !self.swipe_open {
            self.position.set_x(dx);
        } else if self.swipe_open {
            self.position.set_x(-self.button_width + dx);
        }
        // Dragging right from closed admits no write; the position holds.
    }

    /// Release resolution: a single midpoint threshold on the final delta,
    /// with no velocity sensitivity.
    pub(crate) fn resolve_release(&mut self, dx: f32, now: Instant) {
        if self.disabled {
            return;
        }
        let halfway = if self.swipe_open {
            self.button_width
        } else {
            -self.button_width
        } / 2.0;

        if dx > halfway {
            self.start_transition(0.0, TransitionConfig::SETTLE, Settle::Closed, now);
        } else {
            self.start_transition(
                -self.button_width,
                TransitionConfig::SETTLE,
                Settle::Open,
                now,
            );
        }
    }

    pub(crate) fn start_transition(
        &mut self,
        to: f32,
        config: TransitionConfig,
        settle: Settle,
        now: Instant,
    ) {
        let target = match settle {
            Settle::Open => Target::Open,
            Settle::Closed => Target::Closed,
            Settle::Cosmetic => Target::Peek,
        };
        log::debug!("[swipe] animating {} -> {to}", self.position.x());
        self.animator
            .animate_to(self.position.x(), to, config, settle, now);
        self.phase = SwipePhase::Animating(target);
    }

    /// Apply a completed transition. The open flag flips here and only here.
    fn settle(&mut self, done: Completion) {
        self.position.set_x(done.x);
        match done.settle {
            Settle::Open => {
                self.swipe_open = true;
                self.phase = SwipePhase::Open;
            }
            Settle::Closed => {
                self.swipe_open = false;
                self.phase = SwipePhase::Closed;
            }
            Settle::Cosmetic => {
                self.phase = if self.swipe_open {
                    SwipePhase::Open
                } else {
                    SwipePhase::Closed
                };
            }
        }
    }
}

/// A swipeable row that reveals an action button beneath its content.
///
/// Dragging the content horizontally past the capture threshold claims the
/// gesture; on release the content settles open or closed depending on
/// whether the drag crossed the button's midpoint. Tapping the content while
/// open closes it again.
///
/// The handle is cheap to clone; clones share state, which is how imperative
/// access (for example [`SwipeCell::request_close`]) is exported to owners.
pub struct SwipeCell {
    id: SwipeCellId,
    pub(super) inner: Arc<RwLock<Inner>>,
    pub(super) dirty: Arc<AtomicBool>,
}

impl SwipeCell {
    pub fn builder() -> SwipeCellBuilder {
        SwipeCellBuilder::new()
    }

    /// Get the unique ID for this swipe cell
    pub fn id(&self) -> SwipeCellId {
        self.id
    }

    // -------------------------------------------------------------------------
    // Read methods
    // -------------------------------------------------------------------------

    /// Whether the cell is settled at the revealed position. During a drag or
    /// animation this still reports the previous settled state.
    pub fn is_open(&self) -> bool {
        self.inner
            .read()
            .map(|guard| guard.swipe_open)
            .unwrap_or(false)
    }

    pub fn phase(&self) -> SwipePhase {
        self.inner
            .read()
            .map(|guard| guard.phase)
            .unwrap_or(SwipePhase::Closed)
    }

    /// Raw stored offset, unclamped.
    pub fn offset_x(&self) -> f32 {
        self.inner.read().map(|guard| guard.position.x()).unwrap_or(0.0)
    }

    /// Offset actually displayed: clamped through `[-button_width, 0]`,
    /// pinned to 0 when disabled. The stored value is never mutated to fit.
    pub fn rendered_offset(&self) -> f32 {
        self.inner
            .read()
            .map(|guard| {
                if guard.disabled {
                    0.0
                } else {
                    guard.position.rendered_x(guard.button_width)
                }
            })
            .unwrap_or(0.0)
    }

    pub fn button_width(&self) -> f32 {
        self.inner
            .read()
            .map(|guard| guard.button_width)
            .unwrap_or(0.0)
    }

    pub fn is_disabled(&self) -> bool {
        self.inner
            .read()
            .map(|guard| guard.disabled)
            .unwrap_or(false)
    }

    pub fn is_animating(&self) -> bool {
        self.inner
            .read()
            .map(|guard| guard.animator.is_active())
            .unwrap_or(false)
    }

    pub fn label(&self) -> String {
        self.inner
            .read()
            .map(|guard| guard.label.clone())
            .unwrap_or_default()
    }

    // -------------------------------------------------------------------------
    // Write methods
    // -------------------------------------------------------------------------

    /// Record the measured width of the action button. Called by the render
    /// pass after layout; harmless to call again with an unchanged value.
    pub fn set_button_width(&self, width: f32) {
        if let Ok(mut guard) = self.inner.write() {
            if (guard.button_width - width).abs() > f32::EPSILON {
                log::debug!("[swipe] button width measured: {width}");
                guard.button_width = width;
                self.dirty.store(true, Ordering::SeqCst);
            }
        }
    }

    pub fn set_disabled(&self, disabled: bool) {
        if let Ok(mut guard) = self.inner.write() {
            if guard.disabled != disabled {
                guard.disabled = disabled;
                self.dirty.store(true, Ordering::SeqCst);
            }
        }
    }

    /// Apply a live drag delta (cumulative since pointer-down) to the
    /// position model. No-op while disabled.
    pub fn drag_update(&self, dx: f32) {
        if let Ok(mut guard) = self.inner.write() {
            if guard.disposed || guard.disabled {
                return;
            }
            guard.apply_drag(dx);
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Resolve a finished drag: settle open or closed depending on whether
    /// the final delta crossed the button's midpoint.
    pub fn drag_release(&self, dx: f32, now: Instant) {
        if let Ok(mut guard) = self.inner.write() {
            if guard.disposed || guard.disabled {
                return;
            }
            guard.resolve_release(dx, now);
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Begin the mount-time peek demonstration, if configured. Purely
    /// cosmetic: the glide back to rest never flips the open flag.
    pub fn mount(&self, now: Instant) {
        if let Ok(mut guard) = self.inner.write() {
            if !guard.peek_on_mount || guard.disposed {
                return;
            }
            guard.start_transition(0.0, TransitionConfig::PEEK, Settle::Cosmetic, now);
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Animate back to the closed rest position. Used by the tap catcher and
    /// exported for imperative callers; idempotent when already closed.
    pub fn request_close(&self, now: Instant) {
        if let Ok(mut guard) = self.inner.write() {
            if guard.disposed {
                return;
            }
            guard.start_transition(0.0, TransitionConfig::CLOSE, Settle::Closed, now);
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Advance the animation clock. Returns true when something changed and
    /// a redraw is needed.
    pub fn tick(&self, now: Instant) -> bool {
        let Ok(mut guard) = self.inner.write() else {
            return false;
        };
        // Liveness guard: a completion firing after teardown mutates nothing.
        if guard.disposed {
            return false;
        }
        let mut redraw = false;
        if let Some(x) = guard.animator.sample(now) {
            guard.position.set_x(x);
            redraw = true;
        }
        if let Some(done) = guard.animator.tick(now) {
            log::debug!("[swipe] transition settled at {}", done.x);
            guard.settle(done);
            redraw = true;
        }
        if redraw {
            self.dirty.store(true, Ordering::SeqCst);
        }
        redraw
    }

    /// Tear down: drop any in-flight transition and refuse further input.
    pub fn dispose(&self) {
        if let Ok(mut guard) = self.inner.write() {
            guard.disposed = true;
            guard.animator.cancel();
        }
    }

    // -------------------------------------------------------------------------
    // Dirty tracking
    // -------------------------------------------------------------------------

    /// Check if the cell state has changed since the last render
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    /// Clear the dirty flag
    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }
}

impl Clone for SwipeCell {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            inner: Arc::clone(&self.inner),
            dirty: Arc::clone(&self.dirty),
        }
    }
}

impl fmt::Debug for SwipeCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SwipeCell")
            .field("id", &self.id)
            .field("phase", &self.phase())
            .field("open", &self.is_open())
            .finish()
    }
}

/// Builder validating the construction contract: content and a press handler
/// are required, everything else has defaults.
pub struct SwipeCellBuilder {
    label: String,
    peek_on_mount: bool,
    disabled: bool,
    styles: SwipeStyles,
    content: Option<Box<dyn Content>>,
    on_press: Option<PressHandler>,
}

impl SwipeCellBuilder {
    pub fn new() -> Self {
        Self {
            label: DEFAULT_LABEL.to_string(),
            peek_on_mount: false,
            disabled: false,
            styles: SwipeStyles::default(),
            content: None,
            on_press: None,
        }
    }

    /// Content to wrap. Required.
    pub fn content(mut self, content: impl Content + 'static) -> Self {
        self.content = Some(Box::new(content));
        self
    }

    /// Handler invoked when the revealed action button is pressed. Required.
    pub fn on_press(mut self, handler: impl FnMut() + Send + Sync + 'static) -> Self {
        self.on_press = Some(Box::new(handler));
        self
    }

    /// Action button label. Defaults to "Clear".
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Auto-demonstrate the swipe shortly after [`SwipeCell::mount`].
    pub fn peek_on_mount(mut self, peek: bool) -> Self {
        self.peek_on_mount = peek;
        self
    }

    /// Freeze interaction and force closed rendering.
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn styles(mut self, styles: SwipeStyles) -> Self {
        self.styles = styles;
        self
    }

    pub fn build(self) -> Result<SwipeCell, BuildError> {
        let content = self.content.ok_or(BuildError::MissingContent)?;
        let on_press = self.on_press.ok_or(BuildError::MissingPressHandler)?;

        let initial_x = if self.peek_on_mount { PEEK_OFFSET } else { 0.0 };
        let inner = Inner {
            phase: SwipePhase::Closed,
            swipe_open: false,
            button_width: 0.0,
            disabled: self.disabled,
            disposed: false,
            peek_on_mount: self.peek_on_mount,
            position: PositionModel::new(initial_x),
            animator: Animator::new(),
            recognizer: GestureRecognizer::new(),
            label: self.label,
            styles: self.styles,
            content,
            on_press: Arc::new(Mutex::new(on_press)),
            regions: HitRegions::default(),
        };

        Ok(SwipeCell {
            id: SwipeCellId::new(),
            inner: Arc::new(RwLock::new(inner)),
            dirty: Arc::new(AtomicBool::new(false)),
        })
    }
}

impl Default for SwipeCellBuilder {
    fn default() -> Self {
        Self::new()
    }
}
