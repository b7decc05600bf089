//=========================================================================
// Window State
//
// What the device knows about its window, updated from Winit window
// events: drawable size, resizability, focus and minimized state.
//
//=========================================================================

//=== WindowState =========================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct WindowState {
    pub width: u32,
    pub height: u32,
    pub resizable: bool,
    pub focused: bool,
    pub minimized: bool,
    pub fullscreen: bool,
}

impl WindowState {
    pub(crate) fn new(width: u32, height: u32, fullscreen: bool) -> Self {
        Self {
            width,
            height,
            resizable: false,
            focused: false,
            minimized: false,
            fullscreen,
        }
    }

    /// Records a new drawable size; returns `true` only if it changed.
    ///
    /// A zero size is how some platforms report minimization, so it marks
    /// the window minimized and keeps the previous size. Any other size
    /// means the window is visible again.
    pub(crate) fn resized(&mut self, width: u32, height: u32) -> bool {
        if width == 0 || height == 0 {
            self.minimized = true;
            return false;
        }
        self.minimized = false;
        if (width, height) == (self.width, self.height) {
            return false;
        }
        self.width = width;
        self.height = height;
        true
    }

    pub(crate) fn focus(&mut self, focused: bool) {
        self.focused = focused;
    }

    /// Occlusion stands in for minimize/show notifications.
    pub(crate) fn occluded(&mut self, occluded: bool) {
        self.minimized = occluded;
    }

    /// Focused and not minimized.
    pub(crate) fn is_active(&self) -> bool {
        self.focused && !self.minimized
    }

    pub(crate) fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
