use crate::model::Product;
use crate::nav::{Entry, Screen};
use crate::output::{capitalize_words, format_price};
use crate::screens::{DetailPhase, DetailScreen, ListScreen};
use crate::ui::app::App;
use crate::ui::components::card::{self, ProductCard};
use crate::ui::components::{
    error_banner, render_carousel, render_error_view, render_loading, Header, HeaderStyle,
};
use crate::ui::layout::{layout_regions, split_top};
use crate::ui::theme::{ACCENT, ACCENT_FAINT, RATING, SELECTED_BG, TEXT, TEXT_MUTED};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{List, ListState, Paragraph, Wrap};
use ratatui::Frame;

const HEADER_HEIGHT: u16 = 3;
/// Scroll units per list row, for the header's scroll-driven styling.
const ROW_SCROLL_UNITS: f32 = 25.0;
const CAROUSEL_HEIGHT: u16 = 3;

pub fn draw(frame: &mut Frame, app: &App) {
    let entry = app.nav().top();
    match &entry.screen {
        Screen::List(screen) => draw_list(frame, entry, screen, app.search_focused(), app.tick()),
        Screen::Details(screen) => draw_detail(frame, entry, screen, app.tick()),
    }
}

fn draw_list(frame: &mut Frame, entry: &Entry, screen: &ListScreen, focused: bool, now: u64) {
    let state = screen.state();
    let (header, body, footer) = layout_regions(frame.area(), HEADER_HEIGHT);

    let header_style = HeaderStyle::from_scroll(state.selected as f32 * ROW_SCROLL_UNITS);
    frame.render_widget(
        Header::new(entry.route.title(), header_style).widget(Some((state.query.as_str(), focused))),
        header,
    );

    let hints = if focused {
        "enter search · esc done · ctrl+u clear"
    } else if state.in_flight() {
        "↑↓ move · enter open · / search · x clear · q quit"
    } else {
        "↑↓ move · enter open · / search · x clear · r refresh · q quit"
    };
    frame.render_widget(footer_hints(hints), footer);

    if state.loading {
        render_loading(frame, body, &entry.view.spinner, "Loading products...", now);
        return;
    }
    if let (Some(error), true) = (&state.error, state.products.is_empty()) {
        render_error_view(frame, body, error, screen.can_retry());
        return;
    }

    let mut list_area = body;
    if let Some(status) = status_line(screen) {
        let (status_area, rest) = split_top(body, 1);
        frame.render_widget(status, status_area);
        list_area = rest;
    }

    if state.products.is_empty() {
        frame.render_widget(
            Paragraph::new(Line::styled(
                state.empty_message(),
                Style::default().fg(TEXT_MUTED),
            ))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
            list_area,
        );
        return;
    }

    let items: Vec<_> = state
        .products
        .iter()
        .enumerate()
        .map(|(index, product)| {
            let reveal = entrance_progress(entry.view.entrance_tick, index, now);
            ProductCard::new(product, reveal, list_area.width).item()
        })
        .collect();
    let list = List::new(items)
        .highlight_style(Style::default().bg(SELECTED_BG))
        .highlight_symbol("▌ ");
    let mut list_state = ListState::default().with_selected(Some(state.selected));
    frame.render_stateful_widget(list, list_area, &mut list_state);
}

fn status_line(screen: &ListScreen) -> Option<Paragraph<'static>> {
    let state = screen.state();
    let busy = |text: &str| {
        Paragraph::new(Line::styled(
            format!(" {}", text),
            Style::default().fg(ACCENT).bg(ACCENT_FAINT),
        ))
        .alignment(Alignment::Center)
    };
    if state.searching {
        Some(busy("Searching..."))
    } else if state.refreshing {
        Some(busy("Refreshing..."))
    } else {
        state
            .error
            .as_deref()
            .map(|error| error_banner(error, screen.can_retry()))
    }
}

fn entrance_progress(started: Option<u64>, index: usize, now: u64) -> f32 {
    let Some(started) = started else {
        return 1.0;
    };
    let mut anim = card::entrance(index);
    anim.start(started);
    anim.progress(now)
}

fn draw_detail(frame: &mut Frame, entry: &Entry, screen: &DetailScreen, now: u64) {
    let state = screen.state();
    let (header, body, footer) = layout_regions(frame.area(), HEADER_HEIGHT - 1);

    frame.render_widget(
        Header::new(entry.route.title(), HeaderStyle::from_scroll(0.0)).widget(None),
        header,
    );
    let hints = match state.phase {
        DetailPhase::Failed => "r retry · esc back · q quit",
        _ => "←→ images · esc back · q quit",
    };
    frame.render_widget(footer_hints(hints), footer);

    match (state.phase, &state.product) {
        (DetailPhase::Loading, _) => render_loading(
            frame,
            body,
            &entry.view.spinner,
            "Loading product details...",
            now,
        ),
        (DetailPhase::Ready, Some(product)) => {
            let (carousel_area, content) = split_top(body, CAROUSEL_HEIGHT);
            render_carousel(frame, carousel_area, &product.images, &state.carousel);
            render_product(frame, content, product);
        }
        (DetailPhase::Failed, _) | (DetailPhase::NotFound, _) | (DetailPhase::Ready, None) => {
            let message = state.error.as_deref().unwrap_or("Product not found");
            render_error_view(frame, body, message, screen.can_retry());
        }
    }
}

fn render_product(frame: &mut Frame, area: Rect, product: &Product) {
    let label = Style::default().fg(TEXT).add_modifier(Modifier::BOLD);
    let value = Style::default().fg(TEXT);
    let section = |title: &str| {
        Line::styled(
            title.to_string(),
            Style::default().fg(TEXT).add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )
    };
    let detail = |name: &str, text: String| {
        Line::from(vec![
            Span::styled(format!("{:<10}", name), label),
            Span::styled(text, value),
        ])
    };

    let lines = vec![
        Line::styled(
            product.title.clone(),
            Style::default().fg(TEXT).add_modifier(Modifier::BOLD),
        ),
        Line::from(vec![
            Span::styled(
                format!(" ★ {:.1} ", product.rating),
                Style::default()
                    .fg(RATING)
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED),
            ),
            Span::styled(
                format!("  {}", capitalize_words(&product.category)),
                Style::default().fg(TEXT_MUTED),
            ),
        ]),
        Line::styled(
            format_price(product.price),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ),
        Line::default(),
        section("Description"),
        Line::styled(product.description.clone(), value),
        Line::default(),
        section("Details"),
        detail("Brand:", product.brand.clone()),
        detail("Stock:", format!("{} units", product.stock)),
        detail("Discount:", format!("{}%", product.discount_percentage)),
    ];

    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }),
        area.inner(ratatui::layout::Margin::new(2, 0)),
    );
}

fn footer_hints(text: &str) -> Paragraph<'static> {
    Paragraph::new(Line::styled(
        format!(" {}", text),
        Style::default().fg(TEXT_MUTED),
    ))
}
