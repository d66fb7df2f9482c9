//! Terminal rendering of a dashboard state.
//!
//! Grid rows of the layout plan become one table each, with a cell per card;
//! each list section becomes a three-column table.

use anyhow::Result;
use chrono::Local;
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Cell, CellAlignment, Color, Table};

use quota_widget_core::classify;
use quota_widget_types::{
    CardViewModel, DashboardState, LayoutPlan, ListViewModel, Remaining, StatusCategory, ViewModel,
};

pub fn status_color(status: StatusCategory) -> Color {
    match status {
        StatusCategory::Active | StatusCategory::Healthy => Color::Green,
        StatusCategory::Low => Color::Yellow,
        StatusCategory::Exceeded => Color::Red,
    }
}

/// Bottom line of a card: `Unlimited`, `Reset: <countdown>`, or `-`.
pub fn reset_text(remaining: Remaining, countdown: &str) -> String {
    if remaining == Remaining::Unlimited {
        "Unlimited".to_string()
    } else if countdown.is_empty() {
        "-".to_string()
    } else {
        format!("Reset: {}", countdown)
    }
}

fn card_cell(card: &CardViewModel) -> Cell {
    let status = classify(card.remaining);
    let content = format!(
        "{}\n\n{}\n{}\n● {}",
        card.title,
        card.remaining.gauge_label(),
        reset_text(card.remaining, &card.reset_countdown),
        status
    );
    Cell::new(content).fg(status_color(status)).set_alignment(CellAlignment::Center)
}

fn list_table(list: &ListViewModel) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec![list.title.as_str(), "Quota", "Reset"]);

    for row in &list.items {
        let status = classify(row.remaining);
        let reset = if row.reset_countdown.is_empty() { "-" } else { row.reset_countdown.as_str() };
        table.add_row(vec![
            Cell::new(&row.name),
            Cell::new(row.remaining.gauge_label())
                .fg(status_color(status))
                .set_alignment(CellAlignment::Right),
            Cell::new(reset),
        ]);
    }
    table
}

/// Tables for a ready state, in plan order.
pub fn render_items(items: &[ViewModel], layout: &LayoutPlan) -> Vec<Table> {
    let mut tables = Vec::new();

    for row in layout.rows() {
        let cards: Vec<&CardViewModel> = row
            .iter()
            .filter_map(|rect| match items.get(rect.item) {
                Some(ViewModel::Group(card)) => Some(card),
                _ => None,
            })
            .collect();

        if !cards.is_empty() {
            let mut table = Table::new();
            table.load_preset(UTF8_FULL);
            table.add_row(cards.into_iter().map(card_cell).collect::<Vec<_>>());
            tables.push(table);
            continue;
        }

        for rect in &row {
            if let Some(ViewModel::List(list)) = items.get(rect.item) {
                tables.push(list_table(list));
            }
        }
    }

    tables
}

/// Full screen for one state, title line included.
pub fn render_state(title: &str, state: &DashboardState, refreshing: bool) -> String {
    let mut out = title.cyan().bold().to_string();
    if refreshing {
        out.push_str(&format!(" {}", "(refreshing...)".dimmed()));
    }
    out.push('\n');

    match state {
        DashboardState::Loading => {
            out.push_str(&format!("{}\n", "Loading...".yellow()));
        },
        DashboardState::Error { message } => {
            out.push_str(&format!("{}\n", message.red().bold()));
        },
        DashboardState::Ready { items, layout, updated_at } => {
            if items.is_empty() {
                out.push_str(&format!("{}\n", "No quota data.".yellow()));
            }
            for table in render_items(items, layout) {
                out.push_str(&format!("{table}\n"));
            }
            out.push_str(&format!(
                "{}\n",
                format!("Updated {}", updated_at.with_timezone(&Local).format("%H:%M:%S")).dimmed()
            ));
        },
    }

    out
}

/// `{ items, layout }` for a ready state, the tagged state otherwise.
pub fn render_json(state: &DashboardState) -> Result<String> {
    let value = match state {
        DashboardState::Ready { items, layout, .. } => {
            serde_json::json!({ "items": items, "layout": layout })
        },
        other => serde_json::to_value(other)?,
    };
    Ok(serde_json::to_string_pretty(&value)?)
}
