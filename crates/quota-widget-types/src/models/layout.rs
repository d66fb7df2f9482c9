//! Layout constants and the geometric plan produced by the layout engine.

use serde::{Deserialize, Serialize};

/// Fixed dashboard geometry. Configuration, not computed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LayoutConstants {
    pub grid_card_width: u32,
    pub grid_card_height: u32,
    pub list_card_width: u32,
    pub list_row_height: u32,
    /// Outer left margin
    pub margin: u32,
    /// Gap between grid cards, both axes
    pub gap: u32,
    /// Space reserved above the grid for the title bar
    pub grid_start_y: u32,
    /// Extra space between the last grid row and the first list section
    pub list_offset: u32,
    /// List card title band
    pub list_header_height: u32,
    /// Space below the last list row
    pub list_footer_height: u32,
    /// Space between consecutive list sections
    pub list_gap: u32,
    pub bottom_padding: u32,
    /// Canvas height cap; larger totals are clamped
    pub max_height: u32,
}

impl Default for LayoutConstants {
    fn default() -> Self {
        Self {
            grid_card_width: 132,
            grid_card_height: 120,
            list_card_width: 274,
            list_row_height: 22,
            margin: 13,
            gap: 10,
            grid_start_y: 50,
            list_offset: 5,
            list_header_height: 25,
            list_footer_height: 5,
            list_gap: 5,
            bottom_padding: 10,
            max_height: 900,
        }
    }
}

/// One placed element. `item` indexes the view-model sequence the plan was built from.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlacedRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
    pub item: usize,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LayoutPlan {
    pub rects: Vec<PlacedRect>,
    pub total_height: u32,
}

impl LayoutPlan {
    /// Rectangles grouped by their `y` coordinate, top to bottom.
    ///
    /// Grid cards sharing a row come back together; each list section is a
    /// row of its own.
    pub fn rows(&self) -> Vec<Vec<PlacedRect>> {
        let mut rows: Vec<Vec<PlacedRect>> = Vec::new();
        let mut sorted = self.rects.clone();
        sorted.sort_by_key(|r| (r.y, r.x));
        for rect in sorted {
            match rows.last_mut() {
                Some(row) if row.first().is_some_and(|first| first.y == rect.y) => row.push(rect),
                _ => rows.push(vec![rect]),
            }
        }
        rows
    }
}
