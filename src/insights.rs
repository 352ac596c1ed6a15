//! AI Insights
//!
//! Summarizes the user's goals through the schema-constrained LLM integration.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::api::{AuthApi, GoalsApi, LlmApi};
use crate::error::AppResult;
use crate::models::{Goal, GoalStatus, User};

/// Structured coaching feedback returned by the model
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Insights {
    pub summary: String,
    pub focus_area: String,
    #[serde(default)]
    pub recommendations: Vec<String>,
}

pub fn insight_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "summary": { "type": "string" },
            "focus_area": { "type": "string" },
            "recommendations": {
                "type": "array",
                "items": { "type": "string" }
            }
        },
        "required": ["summary", "focus_area", "recommendations"]
    })
}

/// Backend timestamps come either as RFC 3339 or as naive UTC
fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .ok()
        .or_else(|| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
                .ok()
                .map(|naive| naive.and_utc())
        })
}

pub fn goal_age_days(goal: &Goal, now: DateTime<Utc>) -> Option<i64> {
    parse_timestamp(&goal.created_date).map(|created| (now - created).num_days().max(0))
}

pub fn build_prompt(user: &User, goals: &[Goal], now: DateTime<Utc>) -> String {
    let mut prompt = format!(
        "You are a supportive personal coach. Review the goals of {} and give concise, \
         practical feedback.\n",
        user.first_name()
    );

    if goals.is_empty() {
        prompt.push_str("They have not set any goals yet. Suggest how to get started.\n");
        return prompt;
    }

    let active = goals.iter().filter(|g| g.status == GoalStatus::Active).count();
    let completed = goals.iter().filter(|g| g.status == GoalStatus::Completed).count();
    prompt.push_str(&format!(
        "They have {} goals ({} active, {} completed):\n",
        goals.len(),
        active,
        completed
    ));

    for goal in goals {
        prompt.push_str(&format!("- {} [{}, {}%]", goal.title, goal.status.as_str(), goal.progress));
        if let Some(days) = goal_age_days(goal, now) {
            prompt.push_str(&format!(", created {} days ago", days));
        }
        if let Some(category) = &goal.category {
            prompt.push_str(&format!(", category: {}", category));
        }
        prompt.push('\n');
    }

    prompt.push_str(
        "Respond with a short summary, the single most important focus area, \
         and up to three concrete recommendations.",
    );
    prompt
}

/// Refresh the user and their goals concurrently, then ask the model
pub async fn generate_insights<A>(api: &A, owner_email: &str, now: DateTime<Utc>) -> AppResult<Insights>
where
    A: AuthApi + GoalsApi + LlmApi + ?Sized,
{
    let (user, goals) = futures::try_join!(api.current_user(), api.list_goals(owner_email))?;
    log::info!("[INSIGHTS] generating for {} goals", goals.len());

    let prompt = build_prompt(&user, &goals, now);
    let reply = api.generate(&prompt, &insight_schema()).await?;
    Ok(serde_json::from_value(reply)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::test_support::{goal, user, FakeBackend};
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 11, 12, 0, 0).unwrap()
    }

    #[test]
    fn timestamps_with_and_without_zone() {
        let mut g = goal("1", GoalStatus::Active);
        assert_eq!(goal_age_days(&g, now()), Some(10));

        g.created_date = "2024-01-09T08:30:00.123456".to_string();
        assert_eq!(goal_age_days(&g, now()), Some(2));

        g.created_date = "yesterday".to_string();
        assert_eq!(goal_age_days(&g, now()), None);
    }

    #[test]
    fn prompt_lists_each_goal() {
        let mut running = goal("1", GoalStatus::Active);
        running.title = "Run a marathon".to_string();
        running.progress = 40;
        running.category = Some("health".to_string());
        let done = goal("2", GoalStatus::Completed);

        let prompt = build_prompt(&user("me@evyma.app"), &[running, done], now());

        assert!(prompt.contains("Test"));
        assert!(prompt.contains("2 goals (1 active, 1 completed)"));
        assert!(prompt.contains("- Run a marathon [active, 40%], created 10 days ago, category: health"));
        assert!(prompt.contains("- Goal 2 [completed, 100%]"));
    }

    #[test]
    fn prompt_without_goals_asks_for_a_start() {
        let prompt = build_prompt(&user("me@evyma.app"), &[], now());
        assert!(prompt.contains("not set any goals"));
    }

    #[tokio::test]
    async fn generate_parses_model_reply() {
        let api = FakeBackend::signed_in("me@evyma.app");
        api.insert_goal(goal("1", GoalStatus::Active));
        api.reply_with(json!({
            "summary": "Good momentum",
            "focus_area": "Consistency",
            "recommendations": ["Schedule runs"]
        }));

        let insights = generate_insights(&api, "me@evyma.app", now()).await.unwrap();

        assert_eq!(insights.focus_area, "Consistency");
        assert_eq!(insights.recommendations, vec!["Schedule runs".to_string()]);
        assert!(api.prompts.borrow()[0].contains("Goal 1"));
    }

    #[tokio::test]
    async fn malformed_reply_is_a_data_error() {
        let api = FakeBackend::signed_in("me@evyma.app");
        api.reply_with(json!({ "summary": 3 }));

        let err = generate_insights(&api, "me@evyma.app", now()).await.unwrap_err();
        assert!(matches!(err, AppError::Data(_)));
    }
}
