use crate::ui::search::{SearchState, SearchStatus};
use crate::ui::theme::{
    FOCUS_BORDER, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_ERROR, STATUS_OK,
};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const SPINNER: [&str; 4] = ["|", "/", "-", "\\"];

/// Text shown after the search bar title, describing the latest search.
pub fn status_text(search: &SearchState, tick: u64) -> (String, Style) {
    match &search.status {
        SearchStatus::Idle => (
            "type a query and press Enter".to_string(),
            Style::default().fg(HEADER_SEPARATOR),
        ),
        SearchStatus::Searching { .. } => {
            let frame = SPINNER[(tick % SPINNER.len() as u64) as usize];
            (
                format!("{} searching \"{}\"", frame, search.query),
                Style::default().fg(HEADER_TEXT),
            )
        }
        SearchStatus::Loaded => {
            let count = search.gifs.len();
            (
                format!(
                    "{} result{} for \"{}\"",
                    count,
                    if count == 1 { "" } else { "s" },
                    search.query
                ),
                Style::default().fg(STATUS_OK),
            )
        }
        SearchStatus::Failed { reason } => (
            format!("no results: {}", reason),
            Style::default().fg(STATUS_ERROR),
        ),
    }
}

pub struct SearchBar<'a> {
    input: &'a str,
    search: &'a SearchState,
    focused: bool,
    tick: u64,
}

impl<'a> SearchBar<'a> {
    pub fn new(input: &'a str, search: &'a SearchState, focused: bool, tick: u64) -> Self {
        Self {
            input,
            search,
            focused,
            tick,
        }
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let (status, status_style) = status_text(self.search, self.tick);
        let border = if self.focused { FOCUS_BORDER } else { GLOBAL_BORDER };
        let title = Line::from(vec![
            Span::styled(" Search ", Style::default().fg(HEADER_TEXT)),
            Span::styled(format!("· {} ", status), status_style),
        ]);

        Paragraph::new(Line::from(vec![
            Span::styled(" > ", Style::default().fg(HEADER_SEPARATOR)),
            Span::styled(self.input.to_string(), Style::default().fg(HEADER_TEXT)),
        ]))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border)),
        )
    }

    /// Column just after the typed text, relative to the widget's left edge.
    pub fn cursor_offset(&self) -> u16 {
        // border + " > "
        (4 + self.input.chars().count()).min(u16::MAX as usize) as u16
    }
}
