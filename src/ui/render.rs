use crate::ui::app::{App, Focus};
use crate::ui::cart_view::render_cart;
use crate::ui::footer::Footer;
use crate::ui::grid::render_grid;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::search_bar::SearchBar;
use ratatui::widgets::Clear;
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let regions = layout_regions(area);

    frame.render_widget(
        Header::new().widget(app.cart(), &app.config().shop),
        regions.header,
    );

    let focused = app.focus() == Focus::Search;
    let search_bar = SearchBar::new(app.query_input(), app.search(), focused, app.tick());
    frame.render_widget(search_bar.widget(), regions.search);
    if focused && regions.search.height > 1 && regions.search.width > 1 {
        let x = regions.search.x
            + search_bar
                .cursor_offset()
                .min(regions.search.width.saturating_sub(2));
        frame.set_cursor_position((x, regions.search.y + 1));
    }

    frame.render_widget(Clear, regions.results);
    render_grid(frame, regions.results, app);
    render_cart(frame, regions.cart, app);

    frame.render_widget(
        Footer::new().widget(regions.footer, app.focus()),
        regions.footer,
    );
}
