//! Frontend Models
//!
//! Records exchanged with the Base44 backend.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Goal lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalStatus {
    #[default]
    Active,
    Completed,
    Abandoned,
}

impl GoalStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            GoalStatus::Active => "active",
            GoalStatus::Completed => "completed",
            GoalStatus::Abandoned => "abandoned",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            GoalStatus::Active => "Active",
            GoalStatus::Completed => "Completed",
            GoalStatus::Abandoned => "Abandoned",
        }
    }
}

/// Goal entity (matches the backend `Goal` schema).
///
/// Fields the client does not model are kept in `extra` so a record survives a
/// round-trip through the store unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_date: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: GoalStatus,
    /// Percent complete, 0..=100
    #[serde(default, deserialize_with = "lenient_progress")]
    pub progress: u8,
    #[serde(default, deserialize_with = "null_as_default")]
    pub created_by: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub created_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_date: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// `null` reads as the field's default, same as a missing key
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Any JSON number (or `null`), rounded and clamped to 0..=100
fn lenient_progress<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<f64>::deserialize(deserializer)?;
    Ok(clamp_progress(raw.unwrap_or(0.0)))
}

fn clamp_progress(raw: f64) -> u8 {
    if raw.is_nan() {
        return 0;
    }
    raw.round().clamp(0.0, 100.0) as u8
}

/// Payload for creating a goal
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NewGoal {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_date: Option<String>,
    pub status: GoalStatus,
    pub progress: u8,
}

impl NewGoal {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }
}

/// Partial update; only `Some` fields are sent
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GoalUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<GoalStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress: Option<u8>,
}

impl GoalUpdate {
    pub fn status(status: GoalStatus) -> Self {
        Self {
            status: Some(status),
            ..Default::default()
        }
    }

    /// Set progress; reaching 100 also marks the goal completed
    pub fn progress(progress: u8) -> Self {
        let progress = progress.min(100);
        Self {
            progress: Some(progress),
            status: (progress == 100).then_some(GoalStatus::Completed),
            ..Default::default()
        }
    }
}

/// Current user as returned by `auth.me()`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub onboarding_completed: bool,
    #[serde(default)]
    pub subscription_status: Option<String>,
}

impl User {
    pub fn has_active_subscription(&self) -> bool {
        matches!(self.subscription_status.as_deref(), Some("active") | Some("trialing"))
    }

    pub fn first_name(&self) -> &str {
        self.full_name
            .as_deref()
            .and_then(|name| name.split_whitespace().next())
            .unwrap_or(&self.email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn goal_keeps_unknown_fields() {
        let raw = json!({
            "id": "g1",
            "title": "Run",
            "status": "active",
            "progress": 40,
            "created_by": "a@b.c",
            "created_date": "2024-05-01T10:00:00.000Z",
            "milestones": ["5k", "10k"],
            "is_sample": false
        });
        let goal: Goal = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(goal.extra.get("milestones"), Some(&json!(["5k", "10k"])));
        assert_eq!(serde_json::to_value(&goal).unwrap(), raw);
    }

    #[test]
    fn goal_tolerates_sparse_records() {
        let goal: Goal = serde_json::from_value(json!({ "id": "g2", "title": "Read" })).unwrap();
        assert_eq!(goal.status, GoalStatus::Active);
        assert_eq!(goal.progress, 0);
    }

    #[test]
    fn one_odd_record_does_not_sink_the_list() {
        let raw = json!([
            { "id": "g1", "title": "Run", "progress": 40 },
            { "id": "g2", "title": "Swim", "progress": 33.5 },
            {
                "id": "g3",
                "title": "Read",
                "status": null,
                "progress": null,
                "created_by": null,
                "created_date": null
            },
            { "id": "g4", "title": "Climb", "progress": 180 },
            { "id": "g5", "title": "Cook", "progress": -4 }
        ]);
        let goals: Vec<Goal> = serde_json::from_value(raw).unwrap();
        let progress: Vec<u8> = goals.iter().map(|g| g.progress).collect();
        assert_eq!(progress, vec![40, 34, 0, 100, 0]);
        assert_eq!(goals[2].status, GoalStatus::Active);
        assert_eq!(goals[2].created_by, "");
        assert_eq!(goals[2].created_date, "");
        assert!(goals[2].extra.is_empty());
    }

    #[test]
    fn progress_clamp_handles_nan() {
        assert_eq!(clamp_progress(f64::NAN), 0);
        assert_eq!(clamp_progress(99.4), 99);
        assert_eq!(clamp_progress(99.5), 100);
    }

    #[test]
    fn update_only_sends_set_fields() {
        let value = serde_json::to_value(GoalUpdate::status(GoalStatus::Abandoned)).unwrap();
        assert_eq!(value, json!({ "status": "abandoned" }));
    }

    #[test]
    fn full_progress_completes_goal() {
        assert_eq!(GoalUpdate::progress(100).status, Some(GoalStatus::Completed));
        assert_eq!(GoalUpdate::progress(250).progress, Some(100));
        assert_eq!(GoalUpdate::progress(30).status, None);
    }

    #[test]
    fn subscription_states() {
        let mut user = User {
            id: "u1".into(),
            email: "sam@example.com".into(),
            full_name: Some("Sam Doe".into()),
            role: None,
            onboarding_completed: true,
            subscription_status: Some("trialing".into()),
        };
        assert!(user.has_active_subscription());
        user.subscription_status = Some("canceled".into());
        assert!(!user.has_active_subscription());
        assert_eq!(user.first_name(), "Sam");
    }
}
