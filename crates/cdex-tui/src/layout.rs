//! Screen layout definitions for the TUI
//!
//! The header and search input sit on top on every route. Below them the
//! list takes the full width, or shares it with the detail panel when the
//! detail route is active.

use ratatui::layout::{Constraint, Layout, Rect};

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Title and load status
    pub header: Rect,

    /// Search input (all routes)
    pub search: Rect,

    /// Character list
    pub list: Rect,

    /// Detail panel, only on the detail route
    pub detail: Option<Rect>,
}

/// Create the main screen layout
///
/// # Arguments
/// * `area` - Total screen area
/// * `show_detail` - Whether the detail route is active
pub fn create(area: Rect, show_detail: bool) -> ScreenAreas {
    let chunks = Layout::vertical([
        Constraint::Length(3), // Header (glass container)
        Constraint::Length(3), // Search input (glass container)
        Constraint::Min(3),    // Body
    ])
    .split(area);

    let (list, detail) = if show_detail {
        let body = Layout::horizontal([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(chunks[2]);
        (body[0], Some(body[1]))
    } else {
        (chunks[2], None)
    };

    ScreenAreas {
        header: chunks[0],
        search: chunks[1],
        list,
        detail,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_route_layout() {
        let area = Rect::new(0, 0, 80, 24);
        let layout = create(area, false);

        assert_eq!(layout.header.height, 3);
        assert_eq!(layout.search.y, 3);
        assert_eq!(layout.list.y, 6);
        assert_eq!(layout.list.height, 18); // 24 - 3 - 3
        assert_eq!(layout.list.width, 80);
        assert!(layout.detail.is_none());
    }

    #[test]
    fn test_detail_route_splits_body() {
        let area = Rect::new(0, 0, 80, 24);
        let layout = create(area, true);

        let detail = layout.detail.unwrap();
        assert_eq!(layout.list.width + detail.width, 80);
        assert_eq!(layout.list.y, detail.y);
        assert!(detail.width > layout.list.width);
    }

    #[test]
    fn test_layout_areas_contiguous() {
        let area = Rect::new(0, 0, 80, 24);
        let layout = create(area, false);
        assert_eq!(
            layout.header.height + layout.search.height + layout.list.height,
            area.height
        );
    }
}
