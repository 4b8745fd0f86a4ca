//! ratatui rendering of the page.

use justdoit_core::state::CONFIRM_DELETE_PROMPT;
use justdoit_core::{clock, view, Todo};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use crate::state::{Focus, FormField, Modal, Tui};

pub fn render(f: &mut Frame<'_>, tui: &Tui) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(6),
            Constraint::Min(0),
            Constraint::Length(2),
        ])
        .split(f.size());

    render_header(f, layout[0]);
    render_form(f, tui, layout[1]);
    render_main(f, tui, layout[2]);
    render_footer(f, tui, layout[3]);

    if let Some(modal) = &tui.modal {
        render_modal(f, modal);
    }
}

fn render_header(f: &mut Frame<'_>, area: Rect) {
    let title = Paragraph::new(Span::styled(
        view::TITLE,
        Style::default().add_modifier(Modifier::BOLD),
    ))
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, area);
}

fn render_form(f: &mut Frame<'_>, tui: &Tui, area: Rect) {
    let draft = tui.app.draft();
    let focused = |field| matches!(tui.focus, Focus::Form(current) if current == field);
    let field_style = |active: bool| {
        if active {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        }
    };

    let mut lines = vec![
        Line::from(vec![
            Span::styled("Title: ", Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(
                draft.title.clone(),
                field_style(focused(FormField::Title)),
            ),
        ]),
        Line::from(vec![
            Span::styled(
                "Description: ",
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                draft.description.clone(),
                field_style(focused(FormField::Description)),
            ),
        ]),
    ];
    if let Some(err) = tui.app.form_error() {
        lines.push(Line::from(Span::styled(
            format!("⚠ {err}"),
            Style::default().fg(Color::Red),
        )));
    }

    let form = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title("Add Todo [n]"));
    f.render_widget(form, area);
}

fn render_main(f: &mut Frame<'_>, tui: &Tui, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(area);

    if let Some(err) = tui.app.load_error() {
        let banner =
            Paragraph::new(format!("⚠ {err}")).style(Style::default().fg(Color::Red));
        f.render_widget(banner, chunks[0]);
    }

    if tui.app.is_loading() {
        f.render_widget(Paragraph::new(view::LOADING), chunks[2]);
        return;
    }

    let count = tui.app.todos().len();
    let counter = Paragraph::new(view::counter_label(count, &tui.clock))
        .style(Style::default().add_modifier(Modifier::DIM));
    f.render_widget(counter, chunks[1]);

    if count == 0 {
        f.render_widget(Paragraph::new(view::EMPTY_STATE), chunks[2]);
        return;
    }

    let items: Vec<ListItem<'static>> = tui
        .app
        .todos()
        .iter()
        .map(|todo| list_item(tui, todo))
        .collect();
    let list = List::new(items)
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");
    let mut state = ListState::default();
    state.select(Some(tui.selected));
    f.render_stateful_widget(list, chunks[2], &mut state);
}

fn list_item(tui: &Tui, todo: &Todo) -> ListItem<'static> {
    if tui.app.is_editing(&todo.id) {
        let draft = tui
            .app
            .editing()
            .map(|e| e.draft.clone())
            .unwrap_or_default();
        return ListItem::new(vec![
            Line::from(vec![
                Span::styled("edit: ", Style::default().fg(Color::Yellow)),
                Span::raw(draft),
                Span::styled("▏", Style::default().fg(Color::Yellow)),
            ]),
            Line::from(Span::styled(
                "    Enter save • Esc cancel",
                Style::default().add_modifier(Modifier::DIM),
            )),
        ]);
    }

    let expanded = tui.app.is_expanded(&todo.id);
    let title_style = if todo.completed {
        Style::default().add_modifier(Modifier::CROSSED_OUT | Modifier::DIM)
    } else {
        Style::default()
    };

    let mut lines = vec![Line::from(vec![
        Span::raw(format!("{} ", view::checkbox_glyph(todo.completed))),
        Span::styled(todo.title.clone(), title_style),
        Span::raw(format!(" {}", view::expand_glyph(expanded))),
    ])];

    if expanded {
        lines.push(detail_line(
            "Description",
            view::description_label(todo).to_string(),
        ));
        lines.push(detail_line(
            "Status",
            view::status_label(todo.completed).to_string(),
        ));
        lines.push(detail_line(
            "Created",
            clock::format_created_at(todo.created_at.as_deref()),
        ));
    }

    ListItem::new(lines)
}

fn detail_line(label: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("    {label}: "),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(value),
    ])
}

fn render_footer(f: &mut Frame<'_>, tui: &Tui, area: Rect) {
    let hints = if tui.modal.is_some() {
        "y/Enter confirm • n/Esc dismiss"
    } else if tui.app.editing().is_some() {
        "Enter save • Esc cancel"
    } else if matches!(tui.focus, Focus::Form(_)) {
        "Enter add • Tab next field • Esc back to list"
    } else {
        "j/k move • Space toggle • x expand • n new • e edit • d delete • r reload • q quit"
    };
    let footer = Paragraph::new(hints)
        .block(Block::default().borders(Borders::TOP))
        .style(Style::default().add_modifier(Modifier::DIM));
    f.render_widget(footer, area);
}

fn render_modal(f: &mut Frame<'_>, modal: &Modal) {
    let (title, message) = match modal {
        Modal::ConfirmDelete { .. } => ("Delete todo", CONFIRM_DELETE_PROMPT),
        Modal::Alert { message } => ("Notice", message.as_str()),
    };
    let area = centered_rect(50, 20, f.size());
    f.render_widget(Clear, area);
    let body = Paragraph::new(message)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(body, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
