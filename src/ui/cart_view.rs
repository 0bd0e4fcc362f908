use crate::ui::app::{App, Focus};
use crate::ui::selectors::{cart_total, select_cart_items};
use crate::ui::theme::{
    ACTIVE_HIGHLIGHT, FOCUS_BORDER, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, PRICE,
};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

pub fn render_cart(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let focused = app.focus() == Focus::Cart;
    let shop = &app.config().shop;
    let items = select_cart_items(app.cart());

    let mut lines = Vec::new();
    if items.is_empty() {
        lines.push(Line::from(Span::styled(
            "Your cart is empty.",
            Style::default().fg(HEADER_SEPARATOR),
        )));
    } else {
        for (idx, item) in items.iter().enumerate() {
            let title = if item.gif.title.trim().is_empty() {
                item.gif.id.as_str()
            } else {
                item.gif.title.as_str()
            };
            let mut line = Line::from(vec![
                Span::styled(
                    format!("{:>3} × ", item.quantity),
                    Style::default().fg(HEADER_TEXT),
                ),
                Span::styled(title.to_string(), Style::default().fg(HEADER_TEXT)),
                Span::styled(
                    format!("  {}", shop.format_price(item.line_total())),
                    Style::default().fg(PRICE),
                ),
            ]);
            if focused && idx == app.cart_selection() {
                line = line.style(Style::default().bg(ACTIVE_HIGHLIGHT));
            }
            lines.push(line);
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled(
            "Total: ",
            Style::default()
                .fg(HEADER_TEXT)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            shop.format_price(cart_total(app.cart())),
            Style::default().fg(PRICE).add_modifier(Modifier::BOLD),
        ),
    ]));

    let block = Block::default()
        .title(Span::styled(" Cart ", Style::default().fg(HEADER_TEXT)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if focused { FOCUS_BORDER } else { GLOBAL_BORDER }));
    let widget = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true });
    frame.render_widget(widget, area);
}
