//! Folds parsed entries into group cards and the "Other Models" list.

use chrono::{DateTime, Utc};
use quota_widget_types::{
    CardViewModel, GroupTable, ListViewModel, NameRewriteRules, OtherModelViewModel, ParsedQuota,
    QuotaPayload, Remaining, ViewModel, OTHER_MODELS_TITLE,
};

use super::groups::{resolve_groups, ungrouped_ids};
use super::naming::format_model_name;
use super::parser::parse_quota;

/// Ordered view-model for one payload: group cards in table order, then at
/// most one list of ungrouped models.
///
/// Total: malformed entries degrade to `Unlimited`/empty countdown instead of
/// failing, and an empty payload yields an empty sequence.
pub fn compute_view_model(
    payload: &QuotaPayload,
    groups: &GroupTable,
    rules: &NameRewriteRules,
    now: DateTime<Utc>,
) -> Vec<ViewModel> {
    let mut items: Vec<ViewModel> =
        build_group_cards(groups, payload, now).into_iter().map(ViewModel::Group).collect();

    if let Some(list) = build_other_models(groups, payload, rules, now) {
        items.push(ViewModel::List(list));
    }

    tracing::debug!("[Engine] {} models -> {} view items", payload.len(), items.len());
    items
}

pub fn build_group_cards(
    groups: &GroupTable,
    payload: &QuotaPayload,
    now: DateTime<Utc>,
) -> Vec<CardViewModel> {
    resolve_groups(groups, payload)
        .into_iter()
        .map(|group| {
            let worst = aggregate_group(&group.present, payload, now);
            CardViewModel {
                title: group.definition.display_name.clone(),
                remaining: worst.remaining,
                reset_countdown: worst.reset_countdown,
            }
        })
        .collect()
}

/// Worst-case reduction over `members`, visited in the given order.
///
/// The first defined member seeds the minimum; later members replace it only
/// when strictly worse, and bring their own countdown along. While the
/// tracked countdown is empty, any member's non-empty countdown is adopted
/// even if that member did not win on remaining quota.
pub fn aggregate_group(members: &[&str], payload: &QuotaPayload, now: DateTime<Utc>) -> ParsedQuota {
    let mut worst: Option<Remaining> = None;
    let mut countdown = String::new();

    for id in members {
        let Some(raw) = payload.get(*id) else {
            continue;
        };
        let parsed = parse_quota(raw, now);

        let replaces = parsed.remaining.is_defined()
            && worst.map_or(true, |current| parsed.remaining.is_worse_than(current));

        if replaces {
            worst = Some(parsed.remaining);
            countdown = parsed.reset_countdown;
        } else if countdown.is_empty() {
            countdown = parsed.reset_countdown;
        }
    }

    ParsedQuota { remaining: worst.unwrap_or(Remaining::Unlimited), reset_countdown: countdown }
}

/// Ungrouped models worth surfacing, or `None` when there are none.
///
/// Unlimited models are dropped, and so is a model at exactly full quota with
/// no pending reset.
pub fn build_other_models(
    groups: &GroupTable,
    payload: &QuotaPayload,
    rules: &NameRewriteRules,
    now: DateTime<Utc>,
) -> Option<ListViewModel> {
    let items: Vec<OtherModelViewModel> = ungrouped_ids(groups, payload)
        .into_iter()
        .filter_map(|id| {
            let parsed = payload.get(id).map(|raw| parse_quota(raw, now))?;
            let uninteresting = !parsed.remaining.is_defined()
                || (parsed.remaining.is_full() && parsed.reset_countdown.is_empty());
            if uninteresting {
                return None;
            }
            Some(OtherModelViewModel {
                name: format_model_name(id, rules),
                remaining: parsed.remaining,
                reset_countdown: parsed.reset_countdown,
            })
        })
        .collect();

    (!items.is_empty()).then(|| ListViewModel { title: OTHER_MODELS_TITLE.to_string(), items })
}
