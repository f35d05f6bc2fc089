use bitflags::bitflags;
use std::time::Instant;

bitflags! {
    /// Flags to track which UI regions need re-rendering
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct DirtyFlags: u32 {
        /// Nothing needs rendering
        const NONE = 0;
        /// Login form and banner
        const LOGIN = 0b0000_0001;
        /// Portfolio tab (holdings, balance header)
        const PORTFOLIO = 0b0000_0010;
        /// Market tab (team list, price chart)
        const MARKET = 0b0000_0100;
        /// Leaderboard tab
        const LEADERBOARD = 0b0000_1000;
        /// Tab bar and session line
        const NAVBAR = 0b0001_0000;
        /// Footer (notices, key hints)
        const FOOTER = 0b0010_0000;
        /// Help popup
        const HELP = 0b0100_0000;
        /// Full redraw
        const ALL = 0xFFFF_FFFF;
    }
}

impl DirtyFlags {
    /// Check if any region needs rendering
    #[inline]
    pub fn needs_render(self) -> bool {
        !self.is_empty()
    }
}

/// Tracks which regions changed since the last draw so idle ticks skip work
#[derive(Debug)]
pub struct RenderState {
    dirty: DirtyFlags,
    last_render: Instant,
    render_count: u64,
    skip_count: u64,
}

impl Default for RenderState {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderState {
    pub fn new() -> Self {
        Self {
            dirty: DirtyFlags::NONE,
            last_render: Instant::now(),
            render_count: 0,
            skip_count: 0,
        }
    }

    #[inline]
    pub fn needs_render(&self) -> bool {
        self.dirty.needs_render()
    }

    #[inline]
    pub fn mark_dirty(&mut self, flags: DirtyFlags) {
        self.dirty.insert(flags);
    }

    #[inline]
    pub fn mark_all_dirty(&mut self) {
        self.dirty = DirtyFlags::ALL;
    }

    /// Clear all dirty flags after a successful draw
    #[inline]
    pub fn clear(&mut self) {
        self.dirty = DirtyFlags::NONE;
        self.last_render = Instant::now();
        self.render_count += 1;
    }

    #[inline]
    pub fn skip(&mut self) {
        self.skip_count += 1;
    }
}
