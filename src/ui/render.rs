use tui::{
    backend::Backend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Span, Spans},
    widgets::{Block, BorderType, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use super::{Mode, ViewState};
use crate::app::{Todo, TodoState, VisibilityFilter};

pub fn draw<B: Backend>(rect: &mut Frame<B>, state: &TodoState, view: &ViewState) {
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints(
            [
                Constraint::Length(3),
                Constraint::Min(3),
                Constraint::Length(3),
            ]
            .as_ref(),
        )
        .split(rect.size());

    draw_input(rect, view, main_layout[0]);
    draw_todos(rect, state, view, main_layout[1]);
    draw_footer(rect, state.visibility_filter, main_layout[2]);
}

fn draw_input<B: Backend>(rect: &mut Frame<B>, view: &ViewState, area: Rect) {
    let block = Block::default()
        .title("Add Todo")
        .border_style(if view.mode == Mode::Insert {
            Style::default().fg(Color::Red)
        } else {
            Style::default()
        })
        .borders(Borders::ALL);

    rect.render_widget(Paragraph::new(view.input.as_str()).block(block), area);

    if view.mode == Mode::Insert {
        let (x, y) = cursor_position(area, &view.input);
        rect.set_cursor(x, y);
    }
}

/// Cell just past the typed text, clamped to the inside of the input box.
fn cursor_position(area: Rect, input: &str) -> (u16, u16) {
    let width = u16::try_from(input.width()).unwrap_or(u16::MAX);
    let max_x = area.x + area.width.saturating_sub(2);

    ((area.x + 1).saturating_add(width).min(max_x), area.y + 1)
}

fn todo_item(todo: &Todo) -> ListItem<'_> {
    let style = if todo.completed {
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::CROSSED_OUT)
    } else {
        Style::default()
    };

    ListItem::new(Spans::from(Span::styled(todo.text.as_str(), style)))
}

fn draw_todos<B: Backend>(rect: &mut Frame<B>, state: &TodoState, view: &ViewState, area: Rect) {
    let visible = state.visible_todos();

    let block = Block::default()
        .title(format!("Todos ({}/{})", visible.len(), state.todos.len()))
        .borders(Borders::ALL)
        .border_style(if view.mode == Mode::Normal {
            Style::default().fg(Color::Magenta)
        } else {
            Style::default()
        });

    if visible.is_empty() {
        let empty = Paragraph::new(" nothing.")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        rect.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = visible.iter().map(|todo| todo_item(todo)).collect();

    let mut list_state = ListState::default();
    if view.mode == Mode::Normal {
        list_state.select(view.selection(visible.len()));
    }

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().fg(Color::Yellow))
        .highlight_symbol("> ");

    rect.render_stateful_widget(list, area, &mut list_state);
}

fn filter_link(filter: VisibilityFilter, key: usize, current: VisibilityFilter) -> Vec<Span<'static>> {
    if filter == current {
        return vec![Span::raw(filter.label())];
    }

    vec![
        Span::styled(
            key.to_string(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::UNDERLINED),
        ),
        Span::raw(":"),
        Span::styled(filter.label(), Style::default().fg(Color::LightCyan)),
    ]
}

fn draw_footer<B: Backend>(rect: &mut Frame<B>, current: VisibilityFilter, area: Rect) {
    let mut spans = vec![Span::raw("Show:")];

    for (index, filter) in VisibilityFilter::ALL.into_iter().enumerate() {
        spans.push(Span::raw("    "));
        spans.extend(filter_link(filter, index + 1, current));
    }

    let footer = Paragraph::new(Spans::from(spans))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .style(Style::default().fg(Color::White))
                .title("i: insert  esc: normal  j/k: move  space: toggle  q: quit")
                .border_type(BorderType::Plain),
        );

    rect.render_widget(footer, area);
}
