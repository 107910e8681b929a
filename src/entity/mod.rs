mod activity;
mod feature;
mod feedback;
mod usage;

pub use activity::{ActivityItem, ActivityKind};
pub use feature::{
    clamp_rating, Feature, FeaturePriority, FeatureStatus, FeatureUpdate, NewFeature, MAX_RATING,
    MIN_RATING,
};
pub use feedback::Feedback;
pub use usage::{series_for, UsageDataPoint};

use uuid::Uuid;

/// Mint a fresh opaque id for a new entity.
pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}
