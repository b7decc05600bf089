//=========================================================================
// Video Mode List
//
// Display modes reported by the platform, kept sorted by pixel count
// (then colour depth) with duplicates removed, plus the desktop mode.
//
//=========================================================================

//=== VideoMode ===========================================================

/// A display resolution and colour depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct VideoMode {
    pub width: u32,
    pub height: u32,
    pub depth: u16,
}

impl VideoMode {
    fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    fn sort_key(&self) -> (u64, u32, u32, u16) {
        (self.area(), self.width, self.height, self.depth)
    }
}

//=== VideoModeList =======================================================

#[derive(Debug, Clone, Default)]
pub struct VideoModeList {
    modes: Vec<VideoMode>,
    desktop: VideoMode,
}

impl VideoModeList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a mode, keeping the list sorted. Duplicates are ignored.
    pub fn add_mode(&mut self, width: u32, height: u32, depth: u16) {
        let mode = VideoMode { width, height, depth };
        if let Err(pos) = self
            .modes
            .binary_search_by_key(&mode.sort_key(), VideoMode::sort_key)
        {
            self.modes.insert(pos, mode);
        }
    }

    pub fn mode_count(&self) -> usize {
        self.modes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modes.is_empty()
    }

    pub fn modes(&self) -> &[VideoMode] {
        &self.modes
    }

    /// Resolution of mode `index`, or `(0, 0)` when out of range.
    pub fn resolution(&self, index: usize) -> (u32, u32) {
        self.modes
            .get(index)
            .map(|m| (m.width, m.height))
            .unwrap_or((0, 0))
    }

    /// Colour depth of mode `index`, or 0 when out of range.
    pub fn depth(&self, index: usize) -> u16 {
        self.modes.get(index).map(|m| m.depth).unwrap_or(0)
    }

    pub fn set_desktop(&mut self, width: u32, height: u32, depth: u16) {
        self.desktop = VideoMode { width, height, depth };
    }

    pub fn desktop_resolution(&self) -> (u32, u32) {
        (self.desktop.width, self.desktop.height)
    }

    pub fn desktop_depth(&self) -> u16 {
        self.desktop.depth
    }

    /// Picks the largest mode within `[min, max]`.
    ///
    /// Falls back to the mode whose area is closest to either bound when
    /// nothing fits.
    pub fn best_resolution(&self, min: (u32, u32), max: (u32, u32)) -> (u32, u32) {
        if self.modes.len() < 2 {
            return self.resolution(0);
        }

        let fitting = self.modes.iter().rev().find(|m| {
            m.width >= min.0 && m.height >= min.1 && m.width <= max.0 && m.height <= max.1
        });
        if let Some(mode) = fitting {
            return (mode.width, mode.height);
        }

        let min_area = min.0 as u64 * min.1 as u64;
        let max_area = max.0 as u64 * max.1 as u64;
        self.modes
            .iter()
            .min_by_key(|m| {
                let area = m.area();
                area.abs_diff(min_area).min(area.abs_diff(max_area))
            })
            .map(|m| (m.width, m.height))
            .unwrap_or((0, 0))
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_list() -> VideoModeList {
        let mut list = VideoModeList::new();
        list.add_mode(1920, 1080, 32);
        list.add_mode(800, 600, 32);
        list.add_mode(1280, 720, 32);
        list.add_mode(800, 600, 16);
        list
    }

    #[test]
    fn modes_are_sorted_by_area_then_depth() {
        let list = sample_list();
        assert_eq!(list.mode_count(), 4);
        assert_eq!(list.resolution(0), (800, 600));
        assert_eq!(list.depth(0), 16);
        assert_eq!(list.depth(1), 32);
        assert_eq!(list.resolution(3), (1920, 1080));
    }

    #[test]
    fn duplicates_are_ignored() {
        let mut list = sample_list();
        list.add_mode(1280, 720, 32);
        assert_eq!(list.mode_count(), 4);
    }

    #[test]
    fn out_of_range_index_is_zero() {
        let list = sample_list();
        assert_eq!(list.resolution(10), (0, 0));
        assert_eq!(list.depth(10), 0);
    }

    #[test]
    fn best_resolution_takes_largest_fitting() {
        let list = sample_list();
        assert_eq!(list.best_resolution((640, 480), (1600, 900)), (1280, 720));
    }

    #[test]
    fn best_resolution_falls_back_to_closest() {
        let list = sample_list();
        assert_eq!(list.best_resolution((2560, 1440), (3840, 2160)), (1920, 1080));
    }

    #[test]
    fn empty_list_yields_zero() {
        let list = VideoModeList::new();
        assert_eq!(list.best_resolution((0, 0), (100, 100)), (0, 0));
    }

    #[test]
    fn desktop_mode_round_trip() {
        let mut list = VideoModeList::new();
        list.set_desktop(2560, 1440, 24);
        assert_eq!(list.desktop_resolution(), (2560, 1440));
        assert_eq!(list.desktop_depth(), 24);
    }
}
