use alloc::rc::Rc;
use alloc::sync::Arc;
use core::cell::RefCell;
use core::fmt;
use core::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use crate::{Dimensions, Error, ScrollBehavior, ScrollOffset};

/// A scrollable target: a viewport or a scrollable element.
///
/// This is the only boundary between the tracker and the host platform. The tracker never owns
/// the lifetime of the underlying target; it only attaches and detaches its notifier.
pub trait Surface {
    /// Reads the current extents and offsets.
    fn read_dimensions(&self) -> Dimensions;

    /// Installs a raw scroll listener. The surface should call [`ScrollNotifier::notify`]
    /// whenever its offset changes, from whatever context delivers scroll events.
    fn attach(&mut self, notifier: ScrollNotifier);

    /// Removes the listener installed by [`Surface::attach`].
    fn detach(&mut self);

    /// Asks the surface to scroll. Out-of-range offsets are clamped by the surface;
    /// [`ScrollBehavior::Smooth`] is fire-and-forget.
    fn command_scroll(&mut self, offset: ScrollOffset, behavior: ScrollBehavior);
}

impl<T: Surface + ?Sized> Surface for &mut T {
    fn read_dimensions(&self) -> Dimensions {
        (**self).read_dimensions()
    }

    fn attach(&mut self, notifier: ScrollNotifier) {
        (**self).attach(notifier);
    }

    fn detach(&mut self) {
        (**self).detach();
    }

    fn command_scroll(&mut self, offset: ScrollOffset, behavior: ScrollBehavior) {
        (**self).command_scroll(offset, behavior);
    }
}

impl<T: Surface + ?Sized> Surface for Rc<RefCell<T>> {
    fn read_dimensions(&self) -> Dimensions {
        self.borrow().read_dimensions()
    }

    fn attach(&mut self, notifier: ScrollNotifier) {
        self.borrow_mut().attach(notifier);
    }

    fn detach(&mut self) {
        self.borrow_mut().detach();
    }

    fn command_scroll(&mut self, offset: ScrollOffset, behavior: ScrollBehavior) {
        self.borrow_mut().command_scroll(offset, behavior);
    }
}

struct NotifierInner {
    pending: AtomicUsize,
    enabled: AtomicBool,
}

/// A cheap, thread-safe handle a [`Surface`] uses to report raw scroll events.
///
/// Notifying only bumps a counter; the tracker folds pending notifications into its scheduling
/// on [`crate::ScrollTracker::pump`]. Once the tracker detaches, notifying is a no-op.
#[derive(Clone)]
pub struct ScrollNotifier {
    inner: Arc<NotifierInner>,
}

impl ScrollNotifier {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(NotifierInner {
                pending: AtomicUsize::new(0),
                enabled: AtomicBool::new(true),
            }),
        }
    }

    pub fn notify(&self) {
        if self.inner.enabled.load(Ordering::Acquire) {
            self.inner.pending.fetch_add(1, Ordering::AcqRel);
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.inner.enabled.load(Ordering::Acquire)
    }

    /// Number of notifications not yet drained by the tracker.
    pub fn pending(&self) -> usize {
        self.inner.pending.load(Ordering::Acquire)
    }

    pub(crate) fn take_pending(&self) -> usize {
        self.inner.pending.swap(0, Ordering::AcqRel)
    }

    pub(crate) fn disable(&self) {
        self.inner.enabled.store(false, Ordering::Release);
        self.inner.pending.store(0, Ordering::Release);
    }
}

impl Default for ScrollNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ScrollNotifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollNotifier")
            .field("pending", &self.pending())
            .field("enabled", &self.is_enabled())
            .finish()
    }
}

/// A host environment that may provide a default viewport surface.
///
/// Closures returning `Option<S>` implement this, which is handy for tests and simple hosts.
pub trait ViewportHost {
    type Surface: Surface;

    /// Returns the default viewport, or `None` in a headless environment.
    fn viewport(&self) -> Option<Self::Surface>;
}

impl<S: Surface, F: Fn() -> Option<S>> ViewportHost for F {
    type Surface = S;

    fn viewport(&self) -> Option<S> {
        self()
    }
}

/// What to track: an explicit element, or the host's default viewport.
#[derive(Clone, Debug, Default)]
pub enum SurfaceTarget<S> {
    Element(S),
    #[default]
    Viewport,
}

impl<S: Surface> SurfaceTarget<S> {
    /// Resolves the target to a concrete surface.
    ///
    /// Fails with [`Error::SurfaceUnavailable`] when the default viewport is requested and the
    /// host has none.
    pub fn resolve<H: ViewportHost<Surface = S> + ?Sized>(self, host: &H) -> Result<S, Error> {
        match self {
            Self::Element(surface) => Ok(surface),
            Self::Viewport => host.viewport().ok_or(Error::SurfaceUnavailable),
        }
    }
}

impl<S> From<Option<S>> for SurfaceTarget<S> {
    fn from(target: Option<S>) -> Self {
        match target {
            Some(surface) => Self::Element(surface),
            None => Self::Viewport,
        }
    }
}
