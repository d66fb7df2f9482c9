#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use chrono::{DateTime, Duration, TimeZone, Utc};
use quota_widget_core::types::{
    GroupDefinition, GroupTable, LayoutConstants, NameRewriteRules, QuotaPayload, QuotaResponse,
    RawModelQuota, Remaining, StatusCategory, ViewModel, OTHER_MODELS_TITLE,
};
use quota_widget_core::{classify, compute_layout, compute_view_model, EngineTables};

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 11, 20, 8, 30, 0).single().expect("valid timestamp")
}

fn reset_in(minutes: i64) -> String {
    (now() + Duration::minutes(minutes)).to_rfc3339()
}

fn two_group_table() -> GroupTable {
    GroupTable::new(vec![
        GroupDefinition::new("A", "Gemini 3 Pro", &["gemini-3-pro-high", "gemini-3-pro-low"]),
        GroupDefinition::new("B", "Gemini 3 Flash", &["gemini-3-flash"]),
    ])
    .expect("disjoint groups")
}

/// Payload as it arrives over the wire.
fn wire_payload() -> QuotaPayload {
    let body = serde_json::json!({
        "models": {
            "gemini-3-pro-high": {
                "quotaInfo": { "remainingFraction": 0.3, "resetTime": reset_in(10) }
            },
            "gemini-3-pro-low": {
                "quotaInfo": { "remainingFraction": 0.75 }
            },
            "gemini-3-flash": {
                "quotaInfo": {}
            },
            "chat_20706": {
                "quotaInfo": { "remainingFraction": 0.2, "resetTime": "" }
            },
            "tab-completion": {
                "quotaInfo": { "remainingFraction": 1.0 }
            },
            "embedding-model": {}
        }
    });
    serde_json::from_value::<QuotaResponse>(body).unwrap().into_payload()
}

#[test]
fn test_two_cards_and_other_models_list() {
    let items = compute_view_model(
        &wire_payload(),
        &two_group_table(),
        &NameRewriteRules::default(),
        now(),
    );
    assert_eq!(items.len(), 3);

    match &items[0] {
        ViewModel::Group(card) => {
            assert_eq!(card.title, "Gemini 3 Pro");
            assert_eq!(card.remaining, Remaining::Fraction(0.3));
            assert_eq!(card.remaining.as_sentinel(), 0.3);
            assert_eq!(card.reset_countdown, "10m");
            assert_eq!(classify(card.remaining), StatusCategory::Low);
        },
        other => panic!("expected group card A, got {:?}", other),
    }

    match &items[1] {
        ViewModel::Group(card) => {
            assert_eq!(card.title, "Gemini 3 Flash");
            assert_eq!(card.remaining, Remaining::Unlimited);
            assert_eq!(card.remaining.as_sentinel(), -1.0);
            assert_eq!(classify(card.remaining), StatusCategory::Active);
        },
        other => panic!("expected group card B, got {:?}", other),
    }

    match &items[2] {
        ViewModel::List(list) => {
            assert_eq!(list.title, "Other Models");
            assert_eq!(list.title, OTHER_MODELS_TITLE);
            assert_eq!(list.items.len(), 1);
            let row = &list.items[0];
            assert_eq!(row.name, "Chat_20706");
            assert_eq!(row.remaining, Remaining::Fraction(0.2));
            assert_eq!(row.reset_countdown, "");
            assert_eq!(classify(row.remaining), StatusCategory::Low);
        },
        other => panic!("expected other-models list, got {:?}", other),
    }
}

#[test]
fn test_same_input_same_output() {
    let tables = EngineTables { groups: two_group_table(), ..EngineTables::default() };
    let payload = wire_payload();

    let (first_items, first_layout) = tables.render(&payload, now());
    let (second_items, second_layout) = tables.render(&payload, now());

    assert_eq!(first_items, second_items);
    assert_eq!(first_layout, second_layout);
    assert_eq!(
        serde_json::to_string(&first_items).unwrap(),
        serde_json::to_string(&second_items).unwrap()
    );
}

#[test]
fn test_five_groups_layout() {
    let groups = GroupTable::new(
        ["g1", "g2", "g3", "g4", "g5"]
            .iter()
            .map(|id| GroupDefinition::new(id, id, &[*id]))
            .collect(),
    )
    .expect("disjoint groups");

    let mut payload = QuotaPayload::new();
    for id in ["g1", "g2", "g3", "g4", "g5"] {
        payload.insert(id.to_string(), RawModelQuota::new(Some(0.6), None));
    }
    payload.insert("extra".to_string(), RawModelQuota::new(Some(0.1), None));

    let constants = LayoutConstants::default();
    let items = compute_view_model(&payload, &groups, &NameRewriteRules::none(), now());
    let plan = compute_layout(&items, &constants);

    assert_eq!(plan.rects.len(), 6);
    let row_sizes: Vec<usize> = plan.rows().iter().map(Vec::len).collect();
    // three grid rows, then the list on its own
    assert_eq!(row_sizes, vec![2, 2, 1, 1]);

    let list_rect = plan.rects.iter().find(|r| items[r.item].is_list()).expect("list placed");
    let grid_bottom = constants.grid_start_y + 3 * (constants.grid_card_height + constants.gap);
    assert_eq!(list_rect.y, grid_bottom + constants.list_offset);
    assert_eq!(list_rect.x, constants.margin);
}

#[test]
fn test_empty_payload_has_minimal_layout() {
    let tables = EngineTables::default();
    let (items, layout) = tables.render(&QuotaPayload::new(), now());
    let c = LayoutConstants::default();

    assert!(items.is_empty());
    assert!(layout.rects.is_empty());
    assert_eq!(layout.total_height, c.grid_start_y + c.list_offset + c.bottom_padding);
}
