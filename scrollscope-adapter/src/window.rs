use alloc::rc::Rc;
use core::cell::RefCell;

use scrollscope::ViewportHost;

use crate::{SharedSurface, SimulatedSurface};

/// A host environment for [`scrollscope::SurfaceTarget::Viewport`].
///
/// A windowed host shares its viewport surface with whoever tracks it; a headless one has none,
/// and attaching to its viewport fails with `scrollscope::Error::SurfaceUnavailable`.
#[derive(Clone, Debug, Default)]
pub struct SimulatedWindow {
    viewport: Option<SharedSurface>,
}

impl SimulatedWindow {
    pub fn new(viewport: SimulatedSurface) -> Self {
        Self {
            viewport: Some(Rc::new(RefCell::new(viewport))),
        }
    }

    pub fn headless() -> Self {
        Self { viewport: None }
    }

    pub fn viewport_surface(&self) -> Option<&SharedSurface> {
        self.viewport.as_ref()
    }
}

impl ViewportHost for SimulatedWindow {
    type Surface = SharedSurface;

    fn viewport(&self) -> Option<SharedSurface> {
        self.viewport.clone()
    }
}
