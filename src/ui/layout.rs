use ratatui::layout::Rect;

/// Screen regions, top to bottom: header, search bar, body (results grid on
/// the left, cart on the right), footer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Regions {
    pub header: Rect,
    pub search: Rect,
    pub results: Rect,
    pub cart: Rect,
    pub footer: Rect,
}

const HEADER_HEIGHT: u16 = 3;
const SEARCH_HEIGHT: u16 = 3;
const FOOTER_HEIGHT: u16 = 3;
/// Share of the body width given to the results grid.
const RESULTS_PERCENT: u16 = 70;

pub fn layout_regions(area: Rect) -> Regions {
    let header_height = area.height.min(HEADER_HEIGHT);
    let search_height = SEARCH_HEIGHT.min(area.height.saturating_sub(header_height));
    let footer_height =
        FOOTER_HEIGHT.min(area.height.saturating_sub(header_height + search_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let search = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: search_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height + search_height,
        width: area.width,
        height: area
            .height
            .saturating_sub(header_height + search_height + footer_height),
    };
    let results_width = (u32::from(body.width) * u32::from(RESULTS_PERCENT) / 100) as u16;
    let results = Rect {
        width: results_width,
        ..body
    };
    let cart = Rect {
        x: body.x + results_width,
        width: body.width.saturating_sub(results_width),
        ..body
    };
    Regions {
        header,
        search,
        results,
        cart,
        footer,
    }
}

/// First visible grid row so that `selected_row` stays on screen.
pub fn grid_scroll_offset(selected_row: usize, visible_rows: usize) -> usize {
    if visible_rows == 0 {
        return selected_row;
    }
    selected_row.saturating_sub(visible_rows - 1)
}
