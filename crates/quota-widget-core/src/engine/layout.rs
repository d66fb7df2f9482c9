//! Two-column card grid with stacked list sections below it.

use quota_widget_types::{LayoutConstants, LayoutPlan, PlacedRect, ViewModel};

const GRID_COLUMNS: usize = 2;

/// Place every view-model and compute the capped canvas height.
///
/// Cards and lists are partitioned first, each keeping its relative order.
/// Cards fill the grid row by row; list sections stack below the last grid
/// row, each sized to its item count. Rectangles come back cards first.
pub fn compute_layout(items: &[ViewModel], constants: &LayoutConstants) -> LayoutPlan {
    let (lists, cards): (Vec<(usize, &ViewModel)>, Vec<(usize, &ViewModel)>) =
        items.iter().enumerate().partition(|(_, item)| item.is_list());

    let col_pitch = constants.grid_card_width.saturating_add(constants.gap);
    let row_pitch = constants.grid_card_height.saturating_add(constants.gap);

    let mut rects = Vec::with_capacity(items.len());

    for (slot, (index, _)) in cards.iter().enumerate() {
        let row = (slot / GRID_COLUMNS) as u32;
        let col = (slot % GRID_COLUMNS) as u32;
        rects.push(PlacedRect {
            x: constants.margin.saturating_add(col.saturating_mul(col_pitch)),
            y: constants.grid_start_y.saturating_add(row.saturating_mul(row_pitch)),
            width: constants.grid_card_width,
            height: constants.grid_card_height,
            item: *index,
        });
    }

    let grid_rows = cards.len().div_ceil(GRID_COLUMNS) as u32;
    let mut y_list = constants
        .grid_start_y
        .saturating_add(grid_rows.saturating_mul(row_pitch))
        .saturating_add(constants.list_offset);

    for (index, item) in lists {
        let row_count = match item {
            ViewModel::List(list) => list.items.len(),
            ViewModel::Group(_) => 0,
        };
        let height = list_height(row_count, constants);
        rects.push(PlacedRect {
            x: constants.margin,
            y: y_list,
            width: constants.list_card_width,
            height,
            item: index,
        });
        y_list = y_list.saturating_add(height).saturating_add(constants.list_gap);
    }

    let total_height = y_list.saturating_add(constants.bottom_padding).min(constants.max_height);

    LayoutPlan { rects, total_height }
}

/// Header band, one row per item, footer.
pub fn list_height(row_count: usize, constants: &LayoutConstants) -> u32 {
    let rows = u32::try_from(row_count).unwrap_or(u32::MAX);
    constants
        .list_header_height
        .saturating_add(rows.saturating_mul(constants.list_row_height))
        .saturating_add(constants.list_footer_height)
}
