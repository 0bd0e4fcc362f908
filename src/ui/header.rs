use crate::config::ShopConfig;
use crate::ui::cart::CartState;
use crate::ui::selectors::{cart_quantity, cart_total};
use crate::ui::theme::{BRAND_ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, PRICE};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header;

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, cart: &CartState, shop: &ShopConfig) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let units = cart_quantity(cart);
        let line = Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled(
                "Gif Market",
                Style::default()
                    .fg(BRAND_ACCENT)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("  │  ", separator_style),
            Span::styled(
                format!("Cart: {} item{}", units, if units == 1 { "" } else { "s" }),
                text_style,
            ),
            Span::styled("  │  ", separator_style),
            Span::styled(
                shop.format_price(cart_total(cart)),
                Style::default().fg(PRICE),
            ),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}
