use crate::app::App;
use overlords_core::Card;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Alignment, Color, Line, Modifier, Style, Stylize};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;

pub fn draw(frame: &mut Frame, app: &App) {
    let root = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),
            Constraint::Min(10),
            Constraint::Length(10),
        ])
        .split(frame.area());

    draw_header(frame, root[0], app);

    let middle = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(root[1]);

    draw_offer(frame, middle[0], app);
    draw_pile(frame, middle[1], app);
    draw_events(frame, root[2], app);

    if app.show_help {
        draw_help_popup(frame, app);
    }
}

fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let breakdown = app.run.score();
    let summary = format!(
        "Round {}/{}  Pile {}  Score {}",
        app.run.state.round,
        app.run.state.rounds_max,
        app.run.pile.len(),
        breakdown.total,
    );
    let extra = format!(
        "Seed {} | zombies {} cyclopes {} chimeras {} warriors {}",
        app.seed, breakdown.zombies, breakdown.cyclopes, breakdown.chimeras, breakdown.warriors,
    );
    let lines = vec![
        Line::from("Overlords Card Game".bold()),
        Line::from(summary),
        Line::from(extra),
        Line::from(format!("Status: {}", app.status_line)),
    ];
    let block = Block::default().borders(Borders::ALL).title("Overview");
    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true }).block(block);
    frame.render_widget(paragraph, area);
}

fn draw_offer(frame: &mut Frame, area: Rect, app: &App) {
    let items: Vec<ListItem<'_>> = if app.run.offer.is_empty() {
        vec![ListItem::new("empty")]
    } else {
        app.run
            .offer
            .iter()
            .enumerate()
            .map(|(idx, card)| ListItem::new(format!("{} {}", idx + 1, card_line(*card))))
            .collect()
    };
    let title = if app.run.is_over() {
        "Offer (game over, n for a new game)"
    } else {
        "Offer"
    };
    let block = Block::default().borders(Borders::ALL).title(title);
    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol(">> ");
    let mut state = ListState::default();
    if !app.run.offer.is_empty() {
        state.select(Some(app.offer_cursor.min(app.run.offer.len() - 1)));
    }
    frame.render_stateful_widget(list, area, &mut state);
}

fn draw_pile(frame: &mut Frame, area: Rect, app: &App) {
    let items: Vec<ListItem<'_>> = if app.run.pile.is_empty() {
        vec![ListItem::new("no cards yet, pick one from the offer")]
    } else {
        app.run
            .pile
            .iter()
            .map(|card| ListItem::new(card_line(*card)))
            .collect()
    };
    let block = Block::default().borders(Borders::ALL).title("Army Pile");
    frame.render_widget(List::new(items).block(block), area);
}

fn draw_events(frame: &mut Frame, area: Rect, app: &App) {
    let capacity = area.height.saturating_sub(2) as usize;
    let lines: Vec<Line<'_>> = app
        .event_log
        .iter()
        .rev()
        .take(capacity.max(1))
        .rev()
        .map(|entry| Line::from(entry.as_str()))
        .collect();
    let block = Block::default().borders(Borders::ALL).title("Events");
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_help_popup(frame: &mut Frame, _app: &App) {
    let area = centered_rect(52, 40, frame.area());
    let lines = vec![
        Line::from("left/right or h/l  move cursor"),
        Line::from("enter/space/p      pick the selected card"),
        Line::from("n                  new game"),
        Line::from("?                  toggle this help"),
        Line::from("esc                close help"),
        Line::from("q                  quit"),
    ];
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Help")
        .title_alignment(Alignment::Center);
    frame.render_widget(Clear, area);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn card_line(card: Card) -> String {
    match card {
        Card::UndeadWarrior(value) => format!("{} ({})", card.label(), value.points()),
        other => other.label().to_string(),
    }
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);
    horizontal[1]
}
