use crate::provider::Gif;
use crate::ui::app::{App, Focus, GRID_COLUMNS};
use crate::ui::layout::grid_scroll_offset;
use crate::ui::search::{SearchState, SearchStatus};
use crate::ui::selectors::select_gifs;
use crate::ui::theme::{
    ACTIVE_HIGHLIGHT, FOCUS_BORDER, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, PRICE,
    STATUS_OK,
};
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

/// Rows per card: two borders plus title, url and price.
pub const CARD_HEIGHT: u16 = 5;

pub fn render_grid(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let focused = app.focus() == Focus::Results;
    let block = Block::default()
        .title(Span::styled(" Results ", Style::default().fg(HEADER_TEXT)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if focused { FOCUS_BORDER } else { GLOBAL_BORDER }));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let gifs = select_gifs(app.search());
    if gifs.is_empty() {
        let message = Paragraph::new(empty_message(app.search()))
            .style(Style::default().fg(HEADER_SEPARATOR));
        frame.render_widget(message, inner);
        return;
    }

    let visible_rows = (inner.height / CARD_HEIGHT) as usize;
    if visible_rows == 0 || inner.width == 0 {
        return;
    }

    let selected = app.result_selection();
    let first_row = grid_scroll_offset(selected / GRID_COLUMNS, visible_rows);
    let shop = &app.config().shop;
    let price = shop.format_price(shop.promotion_price);

    for (slot, row) in gifs
        .chunks(GRID_COLUMNS)
        .skip(first_row)
        .take(visible_rows)
        .enumerate()
    {
        let row_area = Rect {
            x: inner.x,
            y: inner.y + slot as u16 * CARD_HEIGHT,
            width: inner.width,
            height: CARD_HEIGHT,
        };
        let columns = Layout::horizontal([Constraint::Ratio(1, GRID_COLUMNS as u32); GRID_COLUMNS])
            .split(row_area);

        for (col, (gif, cell)) in row.iter().zip(columns.iter()).enumerate() {
            let index = (first_row + slot) * GRID_COLUMNS + col;
            let in_cart = app.cart().find(&gif.id).map(|item| item.quantity);
            let card = card(gif, &price, focused && index == selected, in_cart);
            frame.render_widget(card, *cell);
        }
    }
}

fn empty_message(search: &SearchState) -> &'static str {
    match search.status {
        SearchStatus::Idle => " Search the catalog to see gifs here.",
        SearchStatus::Searching { .. } => " Searching...",
        SearchStatus::Loaded => " No gifs matched.",
        SearchStatus::Failed { .. } => " No results.",
    }
}

fn card(gif: &Gif, price: &str, selected: bool, in_cart: Option<u32>) -> Paragraph<'static> {
    let title = if gif.title.trim().is_empty() {
        "(untitled)".to_string()
    } else {
        gif.title.clone()
    };

    let mut price_line = vec![Span::styled(price.to_string(), Style::default().fg(PRICE))];
    if let Some(quantity) = in_cart {
        price_line.push(Span::styled(
            format!("  in cart ×{}", quantity),
            Style::default().fg(STATUS_OK),
        ));
    }

    let lines = vec![
        Line::from(Span::styled(
            title,
            Style::default()
                .fg(HEADER_TEXT)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            gif.url.clone(),
            Style::default()
                .fg(HEADER_SEPARATOR)
                .add_modifier(Modifier::DIM),
        )),
        Line::from(price_line),
    ];

    let border = if selected { FOCUS_BORDER } else { GLOBAL_BORDER };
    let mut paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border)),
    );
    if selected {
        paragraph = paragraph.style(Style::default().bg(ACTIVE_HIGHLIGHT));
    }
    paragraph
}
