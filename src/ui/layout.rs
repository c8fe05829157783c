use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

/// Sub-areas of the list screen body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListRegions {
    pub search: Rect,
    pub stats: Rect,
    pub rows: Rect,
    pub load_more: Rect,
}

pub fn list_regions(body: Rect, show_stats: bool) -> ListRegions {
    let stats_height = if show_stats { 1 } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(stats_height),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(body);
    ListRegions {
        search: chunks[0],
        stats: chunks[1],
        rows: chunks[2],
        load_more: chunks[3],
    }
}

pub fn centered_rect_by_size(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
