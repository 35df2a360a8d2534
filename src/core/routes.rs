//! Route tables: public routes, role routes and sidebar navigation

/// Login page
pub const LOGIN_ROUTE: &str = "/login";

/// Landing route for the UNIVERSITAS role
pub const DASHBOARD_ROUTE: &str = "/dashboard";

/// Routes reachable without a session. `/` matches only itself.
pub const PUBLIC_ROUTES: &[&str] = &["/", LOGIN_ROUTE];

/// Sidebar entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SidebarItem {
    pub title: &'static str,
    pub href: &'static str,
    pub icon: &'static str,
}

/// Navigation shown in the dashboard sidebar, in display order
pub const SIDEBAR_ITEMS: &[SidebarItem] = &[
    SidebarItem {
        title: "Dashboard",
        href: DASHBOARD_ROUTE,
        icon: "layout-dashboard",
    },
    SidebarItem {
        title: "Ente",
        href: "/dashboard/ente",
        icon: "building",
    },
    SidebarItem {
        title: "Supervisor",
        href: "/dashboard/supervisor",
        icon: "shield-user",
    },
    SidebarItem {
        title: "Contrataciones",
        href: "/dashboard/contrataciones",
        icon: "file-text",
    },
    SidebarItem {
        title: "Usuarios",
        href: "/dashboard/usuarios",
        icon: "users",
    },
    SidebarItem {
        title: "Configuración",
        href: "/dashboard/configuracion",
        icon: "settings",
    },
];

/// Dashboard route for the (single) role
pub fn dashboard_route() -> &'static str {
    DASHBOARD_ROUTE
}

/// Every route the UNIVERSITAS role may visit
pub fn role_routes() -> impl Iterator<Item = &'static str> {
    SIDEBAR_ITEMS.iter().map(|item| item.href)
}

/// Strip query string, fragment and trailing slashes (`/` stays `/`)
pub fn normalize_path(path: &str) -> &str {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() { "/" } else { trimmed }
}

/// `path` equals `route` or lives under it
fn matches_prefix(path: &str, route: &str) -> bool {
    path == route
        || path
            .strip_prefix(route)
            .is_some_and(|rest| rest.starts_with('/'))
}

pub fn is_public_route(path: &str) -> bool {
    let path = normalize_path(path);
    PUBLIC_ROUTES.iter().any(|route| match *route {
        "/" => path == "/",
        route => matches_prefix(path, route),
    })
}

pub fn is_route_allowed_for_role(path: &str) -> bool {
    let path = normalize_path(path);
    role_routes().any(|route| matches_prefix(path, route))
}

/// Whether a sidebar link should render as active for `current`
pub fn is_active(href: &str, current: &str) -> bool {
    let current = normalize_path(current);
    if href == DASHBOARD_ROUTE {
        current == DASHBOARD_ROUTE
    } else {
        matches_prefix(current, href)
    }
}

/// Static files that bypass the request guard
pub fn is_static_asset(path: &str) -> bool {
    const ASSET_DIRS: &[&str] = &["/pkg", "/icons", "/assets"];
    const ASSET_EXTENSIONS: &[&str] = &[
        ".svg", ".png", ".jpg", ".jpeg", ".gif", ".webp", ".ico", ".css", ".js", ".wasm",
    ];

    let path = normalize_path(path);
    path == "/favicon.ico"
        || ASSET_DIRS.iter().any(|dir| matches_prefix(path, dir))
        || ASSET_EXTENSIONS
            .iter()
            .any(|ext| path.to_ascii_lowercase().ends_with(ext))
}
