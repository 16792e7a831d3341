use crate::ui::app::App;
use crate::ui::catalog::ViewState;
use crate::ui::detail::render_detail_dialog;
use crate::ui::footer::{Footer, FooterMode};
use crate::ui::grid::{GridLayout, ProductCard};
use crate::ui::header::{Header, HeaderStatus};
use crate::ui::layout::{body_sections, layout_regions, truncate};
use crate::ui::notice::NoticeKind;
use crate::ui::picker::render_picker;
use crate::ui::theme::{
    ACTIVE_HIGHLIGHT, HEADER_TEXT, MUTED_TEXT, STATUS_ERROR, STATUS_OK, STORE_GREEN,
};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

/// Spinner animation frames.
const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub const EMPTY_MESSAGE: &str = "No products found";

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);
    let catalog = app.catalog();

    let header_widget = Header::new(catalog.selected_label(), header_status(&catalog.view));
    frame.render_widget(header_widget.widget(), header);

    frame.render_widget(Clear, body);
    let (heading, grid) = body_sections(body);
    render_heading(frame, heading, app);
    render_listing(frame, grid, app);

    let mode = if app.detail().is_visible() {
        FooterMode::Detail
    } else if app.picker_is_open() {
        FooterMode::Picker
    } else {
        FooterMode::Grid
    };
    let footer_widget = Footer::new(mode);
    frame.render_widget(footer_widget.widget(footer), footer);

    if let Some(highlight) = app.picker_highlight() {
        render_picker(frame, body, &catalog.categories, highlight, catalog.selected);
    }
    if let Some(product) = app.detail().product() {
        render_detail_dialog(frame, body, product, app.image_slot(&product.image));
    }
    render_notice(frame, body, app);
}

fn header_status(view: &ViewState) -> HeaderStatus {
    match view {
        ViewState::Blank => HeaderStatus::Idle,
        ViewState::Loading { .. } => HeaderStatus::Loading,
        ViewState::Empty => HeaderStatus::Items(0),
        ViewState::Content(products) => HeaderStatus::Items(products.len()),
        ViewState::Error { .. } => HeaderStatus::Failed,
    }
}

/// Section heading, with the spinner or error banner to its right.
fn render_heading(frame: &mut Frame, area: Rect, app: &App) {
    let catalog = app.catalog();
    let mut spans = vec![
        Span::raw(" "),
        Span::styled(
            catalog.heading.clone(),
            Style::default().fg(STORE_GREEN).add_modifier(Modifier::BOLD),
        ),
    ];
    if catalog.view.is_loading() && !catalog.products().is_empty() {
        spans.push(Span::styled(
            format!("  {}", spinner(app.animation_tick())),
            Style::default().fg(STATUS_OK),
        ));
    }
    if let Some(message) = catalog.view.error_message() {
        let used: usize = spans.iter().map(|s| s.content.chars().count()).sum();
        let room = (area.width as usize).saturating_sub(used + 4);
        spans.push(Span::styled(
            format!("  ⚠ {}", truncate(&format!("{message} (Esc)"), room)),
            Style::default().fg(STATUS_ERROR),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_listing(frame: &mut Frame, area: Rect, app: &App) {
    let catalog = app.catalog();
    let products = catalog.products();

    if products.is_empty() {
        let message = if catalog.view.is_loading() {
            Some(Line::from(vec![
                Span::styled(
                    format!("{} ", spinner(app.animation_tick())),
                    Style::default().fg(STATUS_OK),
                ),
                Span::styled("Loading products...", Style::default().fg(HEADER_TEXT)),
            ]))
        } else if catalog.view.is_empty_state() {
            Some(Line::from(Span::styled(
                EMPTY_MESSAGE,
                Style::default().fg(MUTED_TEXT),
            )))
        } else {
            None
        };
        if let Some(line) = message {
            let center = Rect {
                y: area.y + area.height / 2,
                height: area.height.min(1),
                ..area
            };
            frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), center);
        }
        return;
    }

    let layout = GridLayout::compute(area, app.columns(), products.len(), catalog.cursor);
    for &(index, rect) in layout.cells() {
        let product = &products[index];
        let card = ProductCard::new(
            product,
            app.image_slot(&product.image),
            index == catalog.cursor,
        );
        frame.render_widget(card, rect);
    }
}

/// Bottom-right toast above the footer.
fn render_notice(frame: &mut Frame, body: Rect, app: &App) {
    let Some(notice) = app.notices().current() else {
        return;
    };
    let max_width = body.width.saturating_sub(4) as usize;
    let text = truncate(&notice.text, max_width.saturating_sub(4));
    let width = (text.chars().count() as u16 + 4).min(body.width);
    let height = 3.min(body.height);
    let area = Rect {
        x: body.x + body.width.saturating_sub(width + 1),
        y: body.y + body.height.saturating_sub(height),
        width,
        height,
    };
    let color = match notice.kind {
        NoticeKind::Info => STORE_GREEN,
        NoticeKind::Error => STATUS_ERROR,
    };
    frame.render_widget(Clear, area);
    let widget = Paragraph::new(Span::styled(format!(" {text}"), Style::default().fg(HEADER_TEXT)))
        .style(Style::default().bg(ACTIVE_HIGHLIGHT))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color)),
        );
    frame.render_widget(widget, area);
}

fn spinner(tick: u8) -> &'static str {
    SPINNER_FRAMES[(tick as usize) % SPINNER_FRAMES.len()]
}
