//! Purchasable access grants

use serde::{Deserialize, Serialize};
use super::user::JoinMethod;

/// Days of access bought with a direct pass
pub const DIRECT_PASS_DAYS: i64 = 30;

/// Subscription term selectable from the plan keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Plan {
    #[serde(rename = "SUB_15")]
    Biweekly,
    #[serde(rename = "SUB_30")]
    Monthly,
}

impl Plan {
    pub const ALL: [Plan; 2] = [Plan::Biweekly, Plan::Monthly];

    pub fn duration_days(self) -> i64 {
        match self {
            Plan::Biweekly => 15,
            Plan::Monthly => 30,
        }
    }

    /// Callback token carried by the plan button
    pub fn callback_data(self) -> &'static str {
        match self {
            Plan::Biweekly => "SUB_15",
            Plan::Monthly => "SUB_30",
        }
    }

    pub fn from_callback_data(data: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|plan| plan.callback_data() == data)
    }
}

/// A purchase that sets a user's expiry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessGrant {
    DirectPass,
    Subscription(Plan),
}

impl AccessGrant {
    pub fn duration_days(self) -> i64 {
        match self {
            AccessGrant::DirectPass => DIRECT_PASS_DAYS,
            AccessGrant::Subscription(plan) => plan.duration_days(),
        }
    }

    pub fn join_method(self) -> JoinMethod {
        match self {
            AccessGrant::DirectPass => JoinMethod::DirectPass,
            AccessGrant::Subscription(_) => JoinMethod::Subscription,
        }
    }
}
