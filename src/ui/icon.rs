use leptos::prelude::*;

/// Inline stroke icon, 24x24 viewBox
#[component]
pub fn Icon(
    /// Icon name, see [`icons`]
    name: &'static str,
    /// CSS classes
    #[prop(default = "w-5 h-5")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            class=class
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            viewBox="0 0 24 24"
            aria-hidden="true"
        >
            {paths(name)
                .iter()
                .map(|d| view! { <path d=*d /> })
                .collect_view()}
        </svg>
    }
}

/// Path data for an icon name; unknown names render a circle
fn paths(name: &str) -> &'static [&'static str] {
    match name {
        icons::LAYOUT_DASHBOARD => &[
            "M3 3h7v9H3z",
            "M14 3h7v5h-7z",
            "M14 12h7v9h-7z",
            "M3 16h7v5H3z",
        ],
        icons::BUILDING => &[
            "M6 22V4a2 2 0 0 1 2-2h8a2 2 0 0 1 2 2v18z",
            "M6 12H4a2 2 0 0 0-2 2v6a2 2 0 0 0 2 2h2",
            "M18 9h2a2 2 0 0 1 2 2v9a2 2 0 0 1-2 2h-2",
            "M10 6h4M10 10h4M10 14h4M10 18h4",
        ],
        icons::SHIELD_USER => &[
            "M20 13c0 5-3.5 7.5-7.66 8.95a1 1 0 0 1-.67-.01C7.5 20.5 4 18 4 13V6a1 1 0 0 1 1-1c2 0 4.5-1.2 6.24-2.72a1.17 1.17 0 0 1 1.52 0C14.51 3.81 17 5 19 5a1 1 0 0 1 1 1z",
            "M6.38 18.7A6 6 0 0 1 17.63 18.7",
            "M12 8a3 3 0 1 0 0 6 3 3 0 0 0 0-6z",
        ],
        icons::FILE_TEXT => &[
            "M15 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V7z",
            "M14 2v4a2 2 0 0 0 2 2h4",
            "M10 9H8M16 13H8M16 17H8",
        ],
        icons::USERS => &[
            "M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2",
            "M9 3a4 4 0 1 0 0 8 4 4 0 0 0 0-8z",
            "M22 21v-2a4 4 0 0 0-3-3.87M16 3.13a4 4 0 0 1 0 7.75",
        ],
        icons::SETTINGS => &[
            "M12.22 2h-.44a2 2 0 0 0-2 2v.18a2 2 0 0 1-1 1.73l-.43.25a2 2 0 0 1-2 0l-.15-.08a2 2 0 0 0-2.73.73l-.22.38a2 2 0 0 0 .73 2.73l.15.1a2 2 0 0 1 1 1.72v.51a2 2 0 0 1-1 1.74l-.15.09a2 2 0 0 0-.73 2.73l.22.38a2 2 0 0 0 2.73.73l.15-.08a2 2 0 0 1 2 0l.43.25a2 2 0 0 1 1 1.73V20a2 2 0 0 0 2 2h.44a2 2 0 0 0 2-2v-.18a2 2 0 0 1 1-1.73l.43-.25a2 2 0 0 1 2 0l.15.08a2 2 0 0 0 2.73-.73l.22-.39a2 2 0 0 0-.73-2.73l-.15-.08a2 2 0 0 1-1-1.74v-.5a2 2 0 0 1 1-1.74l.15-.09a2 2 0 0 0 .73-2.73l-.22-.38a2 2 0 0 0-2.73-.73l-.15.08a2 2 0 0 1-2 0l-.43-.25a2 2 0 0 1-1-1.73V4a2 2 0 0 0-2-2z",
            "M12 9a3 3 0 1 0 0 6 3 3 0 0 0 0-6z",
        ],
        icons::ALERT_CIRCLE => &["M12 2a10 10 0 1 0 0 20 10 10 0 0 0 0-20z", "M12 8v4M12 16h.01"],
        icons::CHECK_CIRCLE => &["M12 2a10 10 0 1 0 0 20 10 10 0 0 0 0-20z", "M9 12l2 2 4-4"],
        icons::CHECK => &["M20 6 9 17l-5-5"],
        icons::X => &["M18 6 6 18M6 6l12 12"],
        icons::LOADER => &["M21 12a9 9 0 1 1-6.22-8.56"],
        icons::LOG_OUT => &[
            "M9 21H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h4",
            "M16 17l5-5-5-5M21 12H9",
        ],
        icons::USER => &[
            "M19 21v-2a4 4 0 0 0-4-4H9a4 4 0 0 0-4 4v2",
            "M12 3a4 4 0 1 0 0 8 4 4 0 0 0 0-8z",
        ],
        icons::SHIELD => &[
            "M20 13c0 5-3.5 7.5-7.66 8.95a1 1 0 0 1-.67-.01C7.5 20.5 4 18 4 13V6a1 1 0 0 1 1-1c2 0 4.5-1.2 6.24-2.72a1.17 1.17 0 0 1 1.52 0C14.51 3.81 17 5 19 5a1 1 0 0 1 1 1z",
        ],
        icons::LOCK => &[
            "M5 11h14a2 2 0 0 1 2 2v7a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-7a2 2 0 0 1 2-2z",
            "M7 11V7a5 5 0 0 1 10 0v4",
        ],
        icons::MAIL => &[
            "M4 4h16a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z",
            "M22 7l-10 6L2 7",
        ],
        icons::PLUS => &["M5 12h14M12 5v14"],
        icons::CHEVRON_DOWN => &["M6 9l6 6 6-6"],
        icons::CHEVRON_RIGHT => &["M9 18l6-6-6-6"],
        icons::TRENDING_UP => &["M22 7 13.5 15.5 8.5 10.5 2 17", "M16 7h6v6"],
        icons::CLOCK => &["M12 2a10 10 0 1 0 0 20 10 10 0 0 0 0-20z", "M12 6v6l4 2"],
        _ => &["M12 2a10 10 0 1 0 0 20 10 10 0 0 0 0-20z"],
    }
}

/// Icon names
pub mod icons {
    pub const LAYOUT_DASHBOARD: &str = "layout-dashboard";
    pub const BUILDING: &str = "building";
    pub const SHIELD_USER: &str = "shield-user";
    pub const FILE_TEXT: &str = "file-text";
    pub const USERS: &str = "users";
    pub const SETTINGS: &str = "settings";
    pub const ALERT_CIRCLE: &str = "alert-circle";
    pub const CHECK_CIRCLE: &str = "check-circle";
    pub const CHECK: &str = "check";
    pub const X: &str = "x";
    pub const LOADER: &str = "loader";
    pub const LOG_OUT: &str = "log-out";
    pub const USER: &str = "user";
    pub const SHIELD: &str = "shield";
    pub const LOCK: &str = "lock";
    pub const MAIL: &str = "mail";
    pub const PLUS: &str = "plus";
    pub const CHEVRON_DOWN: &str = "chevron-down";
    pub const CHEVRON_RIGHT: &str = "chevron-right";
    pub const TRENDING_UP: &str = "trending-up";
    pub const CLOCK: &str = "clock";
}
