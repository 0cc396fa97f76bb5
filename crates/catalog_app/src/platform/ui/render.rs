use catalog_core::{AppViewModel, PagerView, Screen, TableView};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Row, Table, TableState, Wrap};
use ratatui::Frame;

use super::constants::*;
use super::layout::{column_widths, frame_areas, table_areas, table_viewport};
use super::scroll::TableScroll;

pub fn render(frame: &mut Frame, view: &AppViewModel, scroll: &mut TableScroll) {
    let [title, body, footer] = frame_areas(frame.area());

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            TITLE,
            Style::default().add_modifier(Modifier::BOLD),
        ))),
        title,
    );

    match &view.screen {
        Screen::Loading => render_loading(frame, body),
        Screen::Error { message } => render_error(frame, body, message),
        Screen::Table(table) => render_table_screen(frame, body, table, scroll),
    }

    frame.render_widget(
        Paragraph::new(KEY_HINTS).style(Style::default().fg(Color::Gray).add_modifier(Modifier::DIM)),
        footer,
    );
}

fn render_loading(frame: &mut Frame, area: Rect) {
    let text = vec![
        Line::from(""),
        Line::from(Span::styled(LOADING_SPINNER, Style::default().fg(Color::Cyan))),
        Line::from(LOADING_TEXT),
    ];
    frame.render_widget(
        Paragraph::new(text)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL)),
        area,
    );
}

fn render_error(frame: &mut Frame, area: Rect, message: &str) {
    let text = vec![
        Line::from(Span::styled(
            ERROR_HEADING,
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(message.to_string(), Style::default().fg(Color::Red))),
        Line::from(""),
        Line::from(Span::styled(ERROR_HINT, Style::default().fg(Color::Gray))),
    ];
    frame.render_widget(
        Paragraph::new(text)
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .title(" Error ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Red)),
            ),
        area,
    );
}

fn render_table_screen(frame: &mut Frame, area: Rect, table: &TableView, scroll: &mut TableScroll) {
    let areas = table_areas(area);

    let search = if table.query.is_empty() {
        Span::styled(SEARCH_PLACEHOLDER, Style::default().fg(Color::DarkGray))
    } else {
        Span::raw(table.query.clone())
    };
    frame.render_widget(
        Paragraph::new(Line::from(search))
            .block(Block::default().title(SEARCH_TITLE).borders(Borders::ALL)),
        areas.search,
    );

    let header = Row::new([HEADER_NAME, HEADER_PRICE, HEADER_CATEGORY])
        .style(Style::default().add_modifier(Modifier::BOLD));
    let rows = table.rows.iter().map(|row| {
        Row::new([row.name.clone(), row.price.clone(), row.category.clone()])
    });
    scroll.follow(&table.rows);
    let visible = scroll.clamp(table.rows.len(), table_viewport(areas.table));
    let mut block = Block::default().borders(Borders::ALL);
    if visible.len() < table.rows.len() {
        block = block.title(format!(
            " Rows {}-{} of {} ",
            visible.start + 1,
            visible.end,
            table.rows.len()
        ));
    }
    let mut state = TableState::default().with_offset(scroll.offset());
    frame.render_stateful_widget(
        Table::new(rows, column_widths()).header(header).block(block),
        areas.table,
        &mut state,
    );

    frame.render_widget(Paragraph::new(pager_line(&table.pager)), areas.pager);
    frame.render_widget(Paragraph::new(status_line(table)), areas.status);
}

pub(crate) fn pager_line(pager: &PagerView) -> Line<'static> {
    let button = |label: &'static str, enabled: bool| {
        if enabled {
            Span::styled(label, Style::default().fg(Color::Cyan))
        } else {
            Span::styled(label, Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM))
        }
    };

    let mut spans = vec![
        button(PREVIOUS_LABEL, pager.can_previous),
        Span::raw("  "),
        button(NEXT_LABEL, pager.can_next),
        Span::raw(format!(
            "  Page {} of {}  ",
            pager.page_number, pager.page_count
        )),
        Span::raw(format!("Show {} ", pager.page_size.rows())),
        Span::raw("["),
    ];
    for (idx, option) in pager.page_size_options.iter().enumerate() {
        if idx > 0 {
            spans.push(Span::raw("/"));
        }
        let style = if *option == pager.page_size {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        };
        spans.push(Span::styled(option.rows().to_string(), style));
    }
    spans.push(Span::raw("]"));
    Line::from(spans)
}

fn status_line(table: &TableView) -> Line<'static> {
    let mut spans = vec![Span::raw(format!(
        "{} of {} products",
        table.filtered_count, table.total_count
    ))];
    if table.skipped_rows > 0 {
        spans.push(Span::styled(
            format!(" | {} malformed rows skipped", table.skipped_rows),
            Style::default().fg(Color::Yellow),
        ));
    }
    if let Some(fetched_at) = &table.fetched_at {
        spans.push(Span::raw(format!(" | fetched at {fetched_at}")));
    }
    if let Some(notice) = &table.notice {
        spans.push(Span::styled(
            format!(" | {notice}"),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ));
    }
    Line::from(spans)
}
