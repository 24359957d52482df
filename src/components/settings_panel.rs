//! Settings Panel
//!
//! Profile, password, notification and appearance forms. Values live only
//! for the session; saving raises a confirmation toast.

use leptos::prelude::*;

use crate::context::AppContext;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SettingsTab {
    Profile,
    Notifications,
    Appearance,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Theme {
    Light,
    Dark,
    System,
}

impl Theme {
    const ALL: [Theme; 3] = [Theme::Light, Theme::Dark, Theme::System];

    fn label(&self) -> &'static str {
        match self {
            Theme::Light => "Light",
            Theme::Dark => "Dark",
            Theme::System => "System",
        }
    }
}

/// (key, label, description, default)
const NOTIFICATION_OPTIONS: [(&str, &str, &str, bool); 4] = [
    ("email", "Email Notifications", "Receive updates by email", true),
    ("push", "Push Notifications", "Receive alerts in the browser", true),
    ("deliveries", "Delivery Updates", "Get notified when a delivery changes status", true),
    ("digest", "Weekly Digest", "A summary of your groups every Monday", false),
];

#[component]
pub fn SettingsPanel() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let (tab, set_tab) = signal(SettingsTab::Profile);

    let (first_name, set_first_name) = signal("John".to_string());
    let (last_name, set_last_name) = signal("Doe".to_string());
    let (email, set_email) = signal("john.doe@example.com".to_string());
    let (bio, set_bio) = signal(
        "Experienced logistics manager with a passion for organization and efficiency.".to_string(),
    );
    let (current_password, set_current_password) = signal(String::new());
    let (new_password, set_new_password) = signal(String::new());
    let toggles = RwSignal::new(
        NOTIFICATION_OPTIONS
            .iter()
            .map(|(key, _, _, on)| (*key, *on))
            .collect::<Vec<_>>(),
    );
    let (theme, set_theme) = signal(Theme::System);

    let save_profile = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        ctx.toast("Profile Updated", "Your profile information has been updated successfully");
    };
    let save_password = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if new_password.get_untracked().is_empty() {
            return;
        }
        set_current_password.set(String::new());
        set_new_password.set(String::new());
        ctx.toast("Password Updated", "Your password has been updated successfully");
    };

    let tab_button = move |t: SettingsTab, label: &'static str| {
        view! {
            <button
                class=move || if tab.get() == t { "tab active" } else { "tab" }
                on:click=move |_| set_tab.set(t)
            >
                {label}
            </button>
        }
    };

    let toggle_rows = move || NOTIFICATION_OPTIONS
        .iter()
        .map(|(key, label, description, _)| {
            let key = *key;
            let checked = move || toggles.with(|t| t.iter().any(|(k, on)| *k == key && *on));
            view! {
                <label class="toggle-row">
                    <div>
                        <p>{*label}</p>
                        <p class="muted">{*description}</p>
                    </div>
                    <input
                        type="checkbox"
                        prop:checked=checked
                        on:change=move |_| toggles.update(|t| {
                            if let Some((_, on)) = t.iter_mut().find(|(k, _)| *k == key) {
                                *on = !*on;
                            }
                        })
                    />
                </label>
            }
        })
        .collect_view();

    view! {
        <div class="settings-panel">
            <div class="section-head">
                <div>
                    <h2>"Settings"</h2>
                    <p class="muted">"Manage your account settings and preferences"</p>
                </div>
            </div>

            <div class="tab-row">
                {tab_button(SettingsTab::Profile, "Profile")}
                {tab_button(SettingsTab::Notifications, "Notifications")}
                {tab_button(SettingsTab::Appearance, "Appearance")}
            </div>

            <Show when=move || tab.get() == SettingsTab::Profile>
                <form class="card settings-form" on:submit=save_profile>
                    <h3>"Profile"</h3>
                    <div class="form-row">
                        <label class="form-field">
                            <span>"First Name"</span>
                            <input type="text" required prop:value=move || first_name.get()
                                on:input=move |ev| set_first_name.set(event_target_value(&ev)) />
                        </label>
                        <label class="form-field">
                            <span>"Last Name"</span>
                            <input type="text" required prop:value=move || last_name.get()
                                on:input=move |ev| set_last_name.set(event_target_value(&ev)) />
                        </label>
                    </div>
                    <label class="form-field">
                        <span>"Email"</span>
                        <input type="email" required prop:value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev)) />
                    </label>
                    <label class="form-field">
                        <span>"Role"</span>
                        <input type="text" value="Owner" readonly />
                    </label>
                    <label class="form-field">
                        <span>"Bio"</span>
                        <textarea prop:value=move || bio.get()
                            on:input=move |ev| set_bio.set(event_target_value(&ev))></textarea>
                    </label>
                    <button type="submit" class="primary">"Save Changes"</button>
                </form>

                <form class="card settings-form" on:submit=save_password>
                    <h3>"Password"</h3>
                    <label class="form-field">
                        <span>"Current Password"</span>
                        <input type="password" required prop:value=move || current_password.get()
                            on:input=move |ev| set_current_password.set(event_target_value(&ev)) />
                    </label>
                    <label class="form-field">
                        <span>"New Password"</span>
                        <input type="password" required prop:value=move || new_password.get()
                            on:input=move |ev| set_new_password.set(event_target_value(&ev)) />
                    </label>
                    <button type="submit" class="primary">"Update Password"</button>
                </form>
            </Show>

            <Show when=move || tab.get() == SettingsTab::Notifications>
                <div class="card settings-form">
                    <h3>"Notifications"</h3>
                    {toggle_rows()}
                    <button
                        class="primary"
                        on:click=move |_| ctx.toast("Notification Preferences Saved", "Your notification preferences have been updated")
                    >
                        "Save Preferences"
                    </button>
                </div>
            </Show>

            <Show when=move || tab.get() == SettingsTab::Appearance>
                <div class="card settings-form">
                    <h3>"Appearance"</h3>
                    <div class="segments">
                        {Theme::ALL.into_iter().map(|t| view! {
                            <button
                                class=move || if theme.get() == t { "segment active" } else { "segment" }
                                on:click=move |_| set_theme.set(t)
                            >
                                {t.label()}
                            </button>
                        }).collect_view()}
                    </div>
                    <button
                        class="primary"
                        on:click=move |_| ctx.toast("Appearance Settings Saved", "Your appearance settings have been updated")
                    >
                        "Save Appearance"
                    </button>
                </div>
            </Show>
        </div>
    }
}
