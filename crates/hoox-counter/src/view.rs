//! Rendering
//!
//! Each panel projects the store into its own view model; the projection is
//! recomputed on every frame.

use crate::actions::Action;
use crate::state::AppState;
use hoox::{CreatedStore, Dispatch, HooxError, Projection, Scope};
use ratatui::{
    layout::{Alignment, Constraint, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// View model for the counter panel
#[derive(Debug, Clone, PartialEq)]
pub struct CounterViewModel {
    pub value: String,
    pub details: String,
    pub at_floor: bool,
}

impl CounterViewModel {
    pub fn from_state(state: &AppState) -> Self {
        Self {
            value: state.count.to_string(),
            details: format!("step {}  floor {}", state.step, state.floor),
            at_floor: state.count.saturating_sub(state.step) < state.floor,
        }
    }
}

/// View model for the history panel, newest first
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryViewModel {
    pub entries: Vec<String>,
}

impl HistoryViewModel {
    pub fn from_state(state: &AppState) -> Self {
        Self {
            entries: state.history.iter().rev().cloned().collect(),
        }
    }
}

const HELP: &str = " +/k increment  -/j decrement  1-9 step  r reset  q quit ";

/// Render the whole screen from the store provided in `scope`
///
/// Returns the dispatch of this render, for feeding input back into the store.
pub fn render(
    store: &CreatedStore<AppState, Action>,
    scope: &Scope<'_>,
    frame: &mut Frame,
) -> Result<Dispatch<Action>, HooxError> {
    let counter =
        store.use_hoox_with(scope, &Projection::new().map_state(CounterViewModel::from_state))?;
    let history =
        store.use_hoox_with(scope, &Projection::new().map_state(HistoryViewModel::from_state))?;

    let [counter_area, history_area, help_area] = Layout::vertical([
        Constraint::Length(4),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    let value_style = if counter.state.at_floor {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    };
    let counter_panel = Paragraph::new(vec![
        Line::from(Span::styled(counter.state.value.clone(), value_style)),
        Line::from(Span::styled(
            counter.state.details.clone(),
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .alignment(Alignment::Center)
    .block(Block::default().title(" Counter ").borders(Borders::ALL));
    frame.render_widget(counter_panel, counter_area);

    let items: Vec<ListItem> = history
        .state
        .entries
        .iter()
        .map(|entry| ListItem::new(entry.as_str()))
        .collect();
    let history_panel =
        List::new(items).block(Block::default().title(" History ").borders(Borders::ALL));
    frame.render_widget(history_panel, history_area);

    frame.render_widget(
        Paragraph::new(HELP).style(Style::default().fg(Color::DarkGray)),
        help_area,
    );

    Ok(counter.actions.dispatch)
}
