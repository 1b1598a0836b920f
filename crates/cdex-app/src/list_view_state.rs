//! List view state - cursor position over the filtered character list.
//!
//! Shared by the handler layer (cursor commands) and the TUI layer (which
//! reports the visible height so paging moves by one screen).

/// Default page size before the first render reports the real height
const DEFAULT_PAGE_SIZE: usize = 10;

/// Cursor over the filtered list
#[derive(Debug, Clone)]
pub struct ListViewState {
    /// Index into the filtered list
    pub selected: usize,
    /// Visible rows (set during render)
    pub visible_lines: usize,
}

impl Default for ListViewState {
    fn default() -> Self {
        Self::new()
    }
}

impl ListViewState {
    pub fn new() -> Self {
        Self {
            selected: 0,
            visible_lines: 0,
        }
    }

    fn page_size(&self) -> usize {
        if self.visible_lines == 0 {
            DEFAULT_PAGE_SIZE
        } else {
            self.visible_lines
        }
    }

    /// Keep the cursor inside a list of `len` entries
    pub fn clamp(&mut self, len: usize) {
        if len == 0 {
            self.selected = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_next(&mut self, len: usize) {
        if self.selected + 1 < len {
            self.selected += 1;
        }
    }

    pub fn page_up(&mut self) {
        self.selected = self.selected.saturating_sub(self.page_size());
    }

    pub fn page_down(&mut self, len: usize) {
        self.selected = (self.selected + self.page_size()).min(len.saturating_sub(1));
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self, len: usize) {
        self.selected = len.saturating_sub(1);
    }
}
