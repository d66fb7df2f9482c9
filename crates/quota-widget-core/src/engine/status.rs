use quota_widget_types::{Remaining, StatusCategory};

/// Fractions strictly below this are `Low`.
pub const LOW_QUOTA_THRESHOLD: f64 = 0.5;

pub fn classify(remaining: Remaining) -> StatusCategory {
    match remaining {
        Remaining::Unlimited => StatusCategory::Active,
        Remaining::Exceeded => StatusCategory::Exceeded,
        Remaining::Fraction(f) if f < LOW_QUOTA_THRESHOLD => StatusCategory::Low,
        Remaining::Fraction(_) => StatusCategory::Healthy,
    }
}
