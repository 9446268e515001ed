//! UI rendering helpers for the terminal user interface.
//!
//! This module contains functions to render the TUI using `ratatui`.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, List, ListItem, ListState, Padding, Paragraph},
};
use std::time::Duration;

use crate::app::{App, Pane};
use crate::player::TransportState;
use crate::track::Track;

/// Format a `Duration` as `MM:SS`.
fn format_mmss(d: Duration) -> String {
    let secs = d.as_secs();
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

fn controls_text(scrub_seconds: u64) -> String {
    [
        "[/] search".to_string(),
        "[j/k] up/down".to_string(),
        "[tab] pane".to_string(),
        "[enter] play".to_string(),
        "[space/p] play/pause".to_string(),
        "[h/l] prev/next".to_string(),
        format!("[H/L] scrub -/+{}s", scrub_seconds),
        "[-/+] volume".to_string(),
        "[r] loop".to_string(),
        "[q] quit".to_string(),
    ]
    .join(" | ")
}

/// One list row for a track. Unplayable tracks are dimmed so it is clear
/// their play affordance is disabled.
fn track_item(track: &Track, now_playing: bool) -> ListItem<'_> {
    let marker = if now_playing { "▶ " } else { "  " };
    let line = Line::from(vec![
        Span::raw(marker),
        Span::raw(track.title.as_str()),
        Span::styled(
            format!("  {}", track.subtitle),
            Style::default().add_modifier(Modifier::DIM),
        ),
    ]);
    let item = ListItem::new(line);
    if track.is_playable() {
        item
    } else {
        item.style(Style::default().add_modifier(Modifier::DIM | Modifier::CROSSED_OUT))
    }
}

fn track_list<'a>(
    title: String,
    tracks: &'a [Track],
    now_playing_id: Option<&str>,
    focused: bool,
) -> List<'a> {
    let items: Vec<ListItem> = tracks
        .iter()
        .map(|t| track_item(t, now_playing_id == Some(t.id.as_str())))
        .collect();

    let border_style = if focused {
        Style::default().add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::DIM)
    };

    List::new(items)
        .block(Block::bordered().title(title).border_style(border_style))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
}

/// Render the entire UI into the provided `frame`.
pub fn draw(frame: &mut Frame, app: &App, recent: &[Track], scrub_seconds: u64) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(4),
            Constraint::Length(3),
        ])
        .split(frame.area());

    // Search bar
    {
        let title = if app.search_mode {
            " search (esc to leave) "
        } else {
            " search "
        };
        let query = if app.query.is_empty() && !app.search_mode {
            Span::styled(
                "press / to search songs",
                Style::default().add_modifier(Modifier::DIM),
            )
        } else {
            Span::raw(app.query.as_str())
        };
        let search = Paragraph::new(Line::from(query)).block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .padding(Padding::horizontal(1)),
        );
        frame.render_widget(search, chunks[0]);
    }

    // Main area: results + recent sidebar
    {
        let panes = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(1), Constraint::Length(34)])
            .split(chunks[1]);

        let now_playing_id = app.transport.track.as_ref().map(|t| t.id.as_str());

        let results_title = if app.search_in_flight {
            " results (searching...) ".to_string()
        } else {
            format!(" results ({}) ", app.results.len())
        };
        let results = track_list(
            results_title,
            &app.results,
            now_playing_id,
            app.pane == Pane::Results,
        );
        let mut results_state = ListState::default();
        if app.pane == Pane::Results && !app.results.is_empty() {
            results_state.select(Some(app.selected.min(app.results.len() - 1)));
        }
        frame.render_stateful_widget(results, panes[0], &mut results_state);

        let recent_list = track_list(
            " recent ".to_string(),
            recent,
            now_playing_id,
            app.pane == Pane::Recent,
        );
        let mut recent_state = ListState::default();
        if app.pane == Pane::Recent && !recent.is_empty() {
            recent_state.select(Some(app.selected.min(recent.len() - 1)));
        }
        frame.render_stateful_widget(recent_list, panes[1], &mut recent_state);
    }

    // Player bar
    {
        let transport = &app.transport;
        let state_text = match transport.state {
            TransportState::Idle => "idle",
            TransportState::Loading => "loading",
            TransportState::Playing => "playing",
            TransportState::Paused => "paused",
        };

        let mut title_line = match &transport.track {
            Some(track) => format!(" {} - {} ", track.title, track.subtitle),
            None => " no song playing ".to_string(),
        };
        title_line.push_str(&format!(
            "[{}] vol {:3.0}%{}",
            state_text,
            transport.volume * 100.0,
            if transport.looping { " ⟳" } else { "" },
        ));

        let elapsed = format_mmss(transport.elapsed);
        let total = transport.duration.map(format_mmss);
        let label = match &total {
            Some(total) => format!("{elapsed} / {total}"),
            None => elapsed,
        };
        let ratio = match transport.duration {
            Some(d) if d > Duration::ZERO => {
                (transport.elapsed.as_secs_f64() / d.as_secs_f64()).clamp(0.0, 1.0)
            }
            _ => 0.0,
        };

        let gauge = Gauge::default()
            .block(
                Block::bordered()
                    .title(title_line)
                    .title_alignment(Alignment::Left),
            )
            .ratio(ratio)
            .label(label)
            .use_unicode(true);
        frame.render_widget(gauge, chunks[2]);
    }

    // Controls help
    {
        let help = Paragraph::new(controls_text(scrub_seconds))
            .alignment(Alignment::Center)
            .dim()
            .block(Block::bordered().title(" controls "));
        frame.render_widget(help, chunks[3]);
    }
}
