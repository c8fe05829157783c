use crate::api::model::{format_population, format_population_grouped};
use crate::api::Country;
use crate::i18n::LocaleContext;
use crate::ui::app::{App, Screen};
use crate::ui::components::{
    CountryCard, ErrorPanel, LoadMoreControl, SearchBox, SearchStats, Spinner,
};
use crate::ui::detail::DetailState;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{centered_rect_by_size, layout_regions, list_regions};
use crate::ui::list::LoadPhase;
use crate::ui::theme::{ACCENT, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, MUTED, TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListState as ScrollState, Paragraph, Wrap};
use ratatui::Frame;

const PANEL_WIDTH: u16 = 60;
const PANEL_HEIGHT: u16 = 7;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);
    let locale = app.locale();

    frame.render_widget(Header::new(app.list().countries.len()).widget(locale), header);
    frame.render_widget(Clear, body);

    let hints = match app.screen() {
        Screen::List => {
            draw_list(frame, body, app);
            locale.t("footer.list")
        }
        Screen::Detail => {
            draw_detail(frame, body, app);
            locale.t("footer.detail")
        }
    };
    Footer::new(hints, locale.locale()).render(frame, footer);
}

fn draw_list(frame: &mut Frame<'_>, body: Rect, app: &App) {
    let locale = app.locale();
    let list = app.list();

    match &list.phase {
        LoadPhase::Idle | LoadPhase::Loading => {
            let spinner = Spinner::new(app.ticks(), locale.t("list.loading"));
            frame.render_widget(spinner.widget(), centered_rect_by_size(body, PANEL_WIDTH, 3));
            return;
        }
        LoadPhase::Failed { message } => {
            let panel = ErrorPanel::new(locale.t("error.title"), message);
            frame.render_widget(
                panel.widget(locale),
                centered_rect_by_size(body, PANEL_WIDTH, PANEL_HEIGHT),
            );
            return;
        }
        LoadPhase::Refreshing | LoadPhase::Ready => {}
    }

    let stats = SearchStats::new(&list.query, list.filtered.len(), app.is_searching());
    let stats_widget = stats.widget(locale);
    let regions = list_regions(body, stats_widget.is_some());

    frame.render_widget(SearchBox::new(app.search_text()).widget(locale), regions.search);
    if let Some(widget) = stats_widget {
        frame.render_widget(widget, regions.stats);
    }

    if list.visible().is_empty() {
        let empty = Paragraph::new(vec![
            Line::from(Span::styled(
                locale.t("list.emptyTitle").to_string(),
                Style::default().fg(TEXT).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                locale.t("list.emptyMessage").to_string(),
                Style::default().fg(MUTED),
            )),
        ])
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
        frame.render_widget(empty, centered_rect_by_size(regions.rows, PANEL_WIDTH, 3));
    } else {
        let items: Vec<_> = list
            .visible()
            .iter()
            .map(|country| CountryCard::new(country).item(locale))
            .collect();
        let rows = List::new(items)
            .highlight_style(Style::default().bg(ACTIVE_HIGHLIGHT))
            .highlight_symbol("▌");
        let mut scroll = ScrollState::default();
        scroll.select(Some(list.selected));
        frame.render_stateful_widget(rows, regions.rows, &mut scroll);
    }

    let control = LoadMoreControl::new(
        list.visible().len(),
        list.filtered.len(),
        matches!(list.phase, LoadPhase::Refreshing),
    );
    frame.render_widget(control.widget(locale), regions.load_more);
}

fn draw_detail(frame: &mut Frame<'_>, body: Rect, app: &App) {
    let locale = app.locale();
    match app.detail() {
        DetailState::Hidden => {}
        DetailState::Loading { code } => {
            let message = locale.t_with("detail.loading", &[("code", code)]);
            let spinner = Spinner::new(app.ticks(), &message);
            frame.render_widget(spinner.widget(), centered_rect_by_size(body, PANEL_WIDTH, 3));
        }
        DetailState::Failed { code, message } => {
            let text = format!("{} ({})", message, code);
            let panel = ErrorPanel::new(locale.t("error.detailTitle"), &text);
            frame.render_widget(
                panel.widget(locale),
                centered_rect_by_size(body, PANEL_WIDTH, PANEL_HEIGHT),
            );
        }
        DetailState::Loaded { country } => {
            frame.render_widget(detail_widget(country, locale), body);
        }
    }
}

fn detail_widget(country: &Country, locale: &LocaleContext) -> Paragraph<'static> {
    let label = |key: &str| {
        Span::styled(
            format!("  {:<16}", locale.t(key)),
            Style::default().fg(MUTED),
        )
    };
    let value = |text: String| Span::styled(text, Style::default().fg(TEXT));
    let not_available = locale.t("country.notAvailable").to_string();

    let capitals = if country.capital.is_empty() {
        not_available.clone()
    } else {
        country.capital.join(", ")
    };
    let flag = if country.flags.svg.is_empty() {
        country.flags.png.clone()
    } else {
        country.flags.svg.clone()
    };

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("  {}", country.name.common),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![label("country.officialName"), value(country.name.official.clone())]),
        Line::from(vec![label("country.capital"), value(capitals)]),
        Line::from(vec![label("country.region"), value(country.region.clone())]),
        Line::from(vec![
            label("country.population"),
            value(format!(
                "{} ({})",
                format_population_grouped(country.population),
                format_population(country.population)
            )),
        ]),
        Line::from(vec![label("country.code"), value(country.cca3.clone())]),
        Line::from(vec![
            label("country.flag"),
            value(if flag.is_empty() { not_available } else { flag }),
        ]),
    ];

    Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .title(Span::styled(
                format!(" {} ", locale.t("detail.title")),
                Style::default().fg(ACCENT),
            ))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    )
}
