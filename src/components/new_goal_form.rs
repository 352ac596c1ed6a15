//! New Goal Form Component
//!
//! Form for creating goals with an optional category.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::Base44Backend;
use crate::models::NewGoal;
use crate::stores::GoalsStore;
use crate::toast::use_toaster;

/// Category options
const CATEGORIES: &[(&str, &str)] = &[
    ("", "No category"),
    ("health", "Health"),
    ("career", "Career"),
    ("learning", "Learning"),
    ("relationships", "Relationships"),
    ("finance", "Finance"),
];

#[component]
pub fn NewGoalForm(store: GoalsStore) -> impl IntoView {
    let toaster = use_toaster();

    let (title, set_title) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (category, set_category) = signal(String::new());
    let (saving, set_saving) = signal(false);

    let create_goal = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = title.get().trim().to_string();
        if text.is_empty() || saving.get() {
            return;
        }
        let description = description.get().trim().to_string();
        let category = category.get();
        let data = NewGoal {
            description: (!description.is_empty()).then_some(description),
            category: (!category.is_empty()).then_some(category),
            ..NewGoal::titled(text)
        };

        set_saving.set(true);
        spawn_local(async move {
            if store.create_goal(&Base44Backend, data).await.is_ok() {
                set_title.set(String::new());
                set_description.set(String::new());
                set_category.set(String::new());
                toaster.success("Goal created");
            }
            set_saving.set(false);
        });
    };

    view! {
        <form class="new-goal-form" on:submit=create_goal>
            <div class="new-goal-row">
                <input
                    type="text"
                    placeholder="What do you want to achieve?"
                    prop:value=move || title.get()
                    on:input=move |ev| set_title.set(event_target_value(&ev))
                />
                <select
                    prop:value=move || category.get()
                    on:change=move |ev| set_category.set(event_target_value(&ev))
                >
                    {CATEGORIES.iter().map(|(value, label)| view! {
                        <option value=*value>{*label}</option>
                    }).collect_view()}
                </select>
                <button type="submit" class="btn btn-primary" disabled=move || saving.get()>
                    {move || if saving.get() { "Adding..." } else { "Add goal" }}
                </button>
            </div>
            <textarea
                class="new-goal-description"
                placeholder="Why does it matter? (optional)"
                prop:value=move || description.get()
                on:input=move |ev| set_description.set(event_target_value(&ev))
            ></textarea>
        </form>
    }
}
