use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};
use repcal_core::{CalendarCell, Clock, Exercise, IntensityTier, NoticeKind, WorkoutRepository};
use unicode_width::UnicodeWidthStr;

use crate::tui::app::App;

const WEEKDAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];
const GRID_ROWS: usize = 6;

// --- THEME ---
struct Theme {
    primary: Color,
    muted: Color,
    today: Color,
    selected: Color,
    saved: Color,
    error: Color,
}

const THEME: Theme = Theme {
    primary: Color::Cyan,
    muted: Color::DarkGray,
    today: Color::Yellow,
    selected: Color::Magenta,
    saved: Color::Green,
    error: Color::Red,
};

fn tier_style(tier: IntensityTier) -> Style {
    match tier {
        IntensityTier::None => Style::default(),
        IntensityTier::Light => Style::default().bg(Color::Rgb(198, 239, 206)).fg(Color::Black),
        IntensityTier::Medium => Style::default().bg(Color::Rgb(99, 190, 123)).fg(Color::Black),
        IntensityTier::Dark => Style::default().bg(Color::Rgb(0, 104, 55)).fg(Color::White),
    }
}

fn short_label(exercise: Exercise) -> &'static str {
    match exercise {
        Exercise::Pushups => "Push",
        Exercise::Pullups => "Pull",
        Exercise::Abs => "Abs",
        Exercise::Squats => "Squat",
    }
}

pub fn draw<R: WorkoutRepository, C: Clock>(f: &mut Frame, app: &App<R, C>) {
    let size = f.area();

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Month header
            Constraint::Min(8),    // Grid
            Constraint::Length(1), // Month summary
            Constraint::Length(1), // Help
        ])
        .split(size);

    draw_header(f, app, main_chunks[0]);
    draw_grid(f, app, main_chunks[1]);
    draw_summary(f, app, main_chunks[2]);

    let help = if app.is_editing() {
        "Tab/↑↓: Field | Enter: Save | Esc: Cancel"
    } else {
        "←→↑↓/hjkl: Day | p/n: Month | t: Today | Enter: Edit | x: Dismiss | q: Quit"
    };
    let footer = Paragraph::new(help)
        .style(Style::default().fg(THEME.muted))
        .alignment(Alignment::Center);
    f.render_widget(footer, main_chunks[3]);

    if app.is_editing() {
        draw_editor(f, app, size);
    }
    draw_notice(f, app, size);
}

fn draw_header<R: WorkoutRepository, C: Clock>(f: &mut Frame, app: &App<R, C>, area: Rect) {
    let title = Line::from(vec![
        Span::styled("<  ", Style::default().fg(THEME.muted)),
        Span::styled(
            app.calendar.displayed().title(),
            Style::default().fg(THEME.primary).add_modifier(Modifier::BOLD),
        ),
        Span::styled("  >", Style::default().fg(THEME.muted)),
    ]);
    let header = Paragraph::new(title)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_type(BorderType::Rounded));
    f.render_widget(header, area);
}

fn draw_grid<R: WorkoutRepository, C: Clock>(f: &mut Frame, app: &App<R, C>, area: Rect) {
    let mut row_constraints = vec![Constraint::Length(1)];
    row_constraints.extend((0..GRID_ROWS).map(|_| Constraint::Ratio(1, GRID_ROWS as u32)));
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(row_constraints)
        .split(area);

    let column_constraints = [Constraint::Ratio(1, 7); 7];

    let weekday_cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(column_constraints)
        .split(rows[0]);
    for (name, col) in WEEKDAYS.iter().zip(weekday_cols.iter()) {
        let label = Paragraph::new(*name)
            .style(Style::default().fg(THEME.primary))
            .alignment(Alignment::Center);
        f.render_widget(label, *col);
    }

    let cells = app.calendar.cells();
    let offset = app.calendar.displayed().leading_blanks() as usize;
    for (index, cell) in cells.iter().enumerate() {
        let slot = index + offset;
        let (row, col) = (slot / 7, slot % 7);
        if row >= GRID_ROWS {
            break;
        }
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(column_constraints)
            .split(rows[row + 1]);
        draw_cell(f, cell, cell.day == app.selected_day, cols[col]);
    }
}

fn draw_cell(f: &mut Frame, cell: &CalendarCell, selected: bool, area: Rect) {
    let mut border_style = Style::default().fg(THEME.muted);
    if cell.is_today {
        border_style = Style::default().fg(THEME.today).add_modifier(Modifier::BOLD);
    }
    if selected {
        border_style = Style::default().fg(THEME.selected).add_modifier(Modifier::BOLD);
    }

    let mut lines = vec![Line::from(Span::styled(
        cell.day.to_string(),
        Style::default().add_modifier(Modifier::BOLD),
    ))];
    if let Some(record) = &cell.record {
        for exercise in Exercise::ALL {
            lines.push(Line::from(format!("{}: {}", short_label(exercise), record.count(exercise))));
        }
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(if selected { BorderType::Thick } else { BorderType::Rounded })
        .border_style(border_style);
    let paragraph = Paragraph::new(lines)
        .style(tier_style(cell.tier))
        .block(block);
    f.render_widget(paragraph, area);
}

fn draw_summary<R: WorkoutRepository, C: Clock>(f: &mut Frame, app: &App<R, C>, area: Rect) {
    let summary = app.calendar.summary();
    let mut spans = vec![
        Span::styled(
            format!("{} active days", summary.active_days),
            Style::default().fg(THEME.primary),
        ),
        Span::raw(format!("  {} reps", summary.total)),
    ];
    if let Some((date, total)) = summary.best_day {
        spans.push(Span::styled(
            format!("  best {} ({})", date.format("%b %d"), total),
            Style::default().fg(THEME.muted),
        ));
    }
    f.render_widget(Paragraph::new(Line::from(spans)).alignment(Alignment::Center), area);
}

fn draw_editor<R: WorkoutRepository, C: Clock>(f: &mut Frame, app: &App<R, C>, area: Rect) {
    let draft = match app.calendar.draft() {
        Some(draft) => draft,
        None => return,
    };

    let popup = centered_rect(44, 8, area);
    let block = Block::default()
        .title(format!(" Add Workout for {} ", draft.date.format("%Y-%m-%d")))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(THEME.primary));
    let inner = block.inner(popup);

    let mut lines = Vec::new();
    let mut cursor = None;
    for (i, exercise) in Exercise::ALL.iter().enumerate() {
        let focused = draft.focused() == *exercise;
        let label_style = if focused {
            Style::default().fg(THEME.primary).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(THEME.muted)
        };
        let label = format!("{:<10}", format!("{}:", exercise.label()));
        let value = draft.field(*exercise);
        if focused {
            let x = inner.x + (label.width() + value.width()) as u16;
            cursor = Some((x.min(inner.right().saturating_sub(1)), inner.y + i as u16));
        }
        lines.push(Line::from(vec![
            Span::styled(label, label_style),
            Span::raw(value.to_string()),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Enter: Save | Esc: Cancel",
        Style::default().fg(THEME.muted),
    )));

    f.render_widget(Clear, popup);
    f.render_widget(block, popup);
    f.render_widget(Paragraph::new(lines), inner);

    if let Some(position) = cursor {
        f.set_cursor_position(position);
    }
}

fn draw_notice<R: WorkoutRepository, C: Clock>(f: &mut Frame, app: &App<R, C>, area: Rect) {
    let notice = match app.calendar.notice() {
        Some(notice) => notice,
        None => return,
    };
    let color = match notice.kind {
        NoticeKind::Saved => THEME.saved,
        NoticeKind::Error => THEME.error,
    };

    let text = format!("{}  [x]", notice.message);
    let width = (text.width() as u16 + 4).min(area.width);
    let rect = Rect {
        x: area.right().saturating_sub(width + 1),
        y: area.bottom().saturating_sub(5),
        width,
        height: 3.min(area.height),
    };
    let banner = Paragraph::new(text)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(color)),
        );
    f.render_widget(Clear, rect);
    f.render_widget(banner, rect);
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
