// The client-side Dioxus application logic.

use dioxus::prelude::*;
use dioxus_logger::tracing::info;
use dioxus_logger::tracing::Level;
use dioxus_logger::tracing::warn;

mod app_state;
pub mod compat;
mod components;
pub mod hooks;
mod pages;

use app_state::AppState;
use catalog::CategoryId;
use catalog::SiteConfig;
use catalog::SiteContent;
use components::footer::Footer;
use components::pico::Button;
use components::pico::ButtonType;
use pages::about::AboutPage;
use pages::contact::ContactPage;
use pages::home::HomePage;
use pages::products::ProductsPage;

const PICO_CSS: &str = "https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.min.css";
const FONT_AWESOME_CSS: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.1/css/all.min.css";

/// Log level for the launchers, baked in at build time through `SPICE_LOG_LEVEL`.
pub fn log_level() -> Level {
    parse_log_level(option_env!("SPICE_LOG_LEVEL"))
}

fn parse_log_level(value: Option<&str>) -> Level {
    value
        .and_then(|level| level.trim().parse().ok())
        .unwrap_or(Level::INFO)
}

/// The pages of the site.
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub enum Page {
    #[default]
    Home,
    About,
    /// The catalog, opened with `category` selected.
    Products(CategoryId),
    Contact,
}

impl Page {
    /// Helper to get the display name for each page.
    pub fn name(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::About => "About",
            Page::Products(_) => "Products",
            Page::Contact => "Contact",
        }
    }

    /// Whether the nav entry `tab` should be highlighted while `self` is shown.
    /// The catalog's tab stays active whatever category it was opened with.
    pub fn highlights(&self, tab: &Page) -> bool {
        match (self, tab) {
            (Page::Products(_), Page::Products(_)) => true,
            (active, current) => active == current,
        }
    }
}

/// A list of all nav entries for easy iteration.
const ALL_PAGES: [Page; 4] = [
    Page::Home,
    Page::About,
    Page::Products(CategoryId::All),
    Page::Contact,
];

/// Switches to `page` and jumps back to the top.
pub(crate) fn navigate(mut active_page: Signal<Page>, page: Page) {
    if *active_page.peek() != page {
        info!("showing {:?}", page);
        active_page.set(page);
    }
    compat::scroll_to_top();
}

/// The desktop navigation tabs component.
#[component]
fn Tabs(active_page: Signal<Page>) -> Element {
    rsx! {
        ul {
            class: "tab-menu",
            for page in ALL_PAGES {
                li {
                    a {
                        href: "#",
                        class: {
                            if active_page.read().highlights(&page) { "active-tab" } else { "" }
                        },
                        "aria-current": {
                            if active_page.read().highlights(&page) { "page" } else { "false" }
                        },
                        onclick: move |event| {
                            event.prevent_default();
                            navigate(active_page, page);
                        },
                        "{page.name()}"
                    }
                }
            }
        }
    }
}

/// The mobile "hamburger" dropdown menu component.
#[component]
fn HamburgerMenu(active_page: Signal<Page>) -> Element {
    let mut is_open = use_signal(|| false);

    rsx! {
        div {
            class: "hamburger-menu-container",
            Button {
                button_type: ButtonType::Secondary,
                outline: true,
                on_click: move |_| is_open.toggle(),
                "≡"
            }
            if is_open() {
                div {
                    class: "menu-backdrop",
                    onclick: move |_| is_open.set(false),
                }
                article {
                    class: "custom-dropdown-menu",
                    for page in ALL_PAGES {
                        a {
                            class: {
                                if active_page.read().highlights(&page) {
                                    "custom-dropdown-item active-tab"
                                } else {
                                    "custom-dropdown-item"
                                }
                            },
                            href: "#",
                            onclick: move |event| {
                                event.prevent_default();
                                navigate(active_page, page);
                                is_open.set(false);
                            },
                            "{page.name()}"
                        }
                    }
                }
            }
        }
    }
}

//=============================================================================
// MAIN APPLICATION COMPONENT (Client-side)
//=============================================================================

#[allow(non_snake_case)]
pub fn App() -> Element {
    let site_css = r#"
    /* --- THEME --- */
    :root {
        --spice-brown: #7b3f1d;
        --spice-red: #b8372b;
        --spice-orange: #e07a1f;
        --spice-cream: #fdf6ec;
        --pico-primary: var(--spice-brown);
        --pico-primary-background: var(--spice-brown);
        --pico-primary-hover-background: var(--spice-red);
    }

    html, body { margin: 0; padding: 0; background-color: var(--spice-cream); }

    /* --- HEADER --- */
    .site-header {
        position: fixed;
        top: 0; left: 0; right: 0;
        z-index: 100;
        background-color: color-mix(in srgb, var(--spice-cream), transparent 10%);
        backdrop-filter: blur(6px);
        border-bottom: 1px solid color-mix(in srgb, var(--spice-brown), transparent 85%);
    }
    .site-header nav { padding: 0 1rem; }
    .brand { font-weight: bold; font-size: 1.4rem; color: var(--spice-brown); }
    .site-main { padding-top: 4.5rem; }

    .tab-menu a:not(.active-tab) { color: var(--pico-muted-color); }
    .tab-menu a.active-tab {
        color: var(--spice-brown) !important;
        border-bottom: 3px solid var(--spice-orange);
        border-radius: 0;
    }

    .hamburger-menu-container { display: none; position: relative; }
    .menu-backdrop { position: fixed; inset: 0; z-index: 10; }
    .custom-dropdown-menu {
        position: absolute; right: 0; z-index: 11; min-width: 12rem;
        display: flex; flex-direction: column; padding: 0.5rem;
    }
    .custom-dropdown-item { padding: 0.5rem 1rem; text-decoration: none; }
    .custom-dropdown-item.active-tab {
        color: var(--spice-brown);
        font-weight: bold;
        border-left: 4px solid var(--spice-orange);
        padding-left: calc(1rem - 4px);
    }

    @media (max-width: 768px) {
        .tab-menu { display: none; }
        .hamburger-menu-container { display: block; }
    }

    /* --- LAYOUT --- */
    .band { padding: 4rem 0; }
    .band-white { background-color: #fff; }
    .band-cream { background-color: var(--spice-cream); }
    .band-brown { background-color: var(--spice-brown); color: #fff; }
    .band-brown h1, .band-brown h2, .band-brown h3, .band-brown p { color: #fff; }
    .site-grid {
        display: grid;
        gap: 2rem;
        grid-template-columns: repeat(var(--grid-columns), minmax(0, 1fr));
    }
    @media (max-width: 768px) {
        .site-grid { grid-template-columns: minmax(0, 1fr); }
    }
    .centered { text-align: center; }
    .lede { max-width: 42rem; margin: 0 auto 2rem auto; color: var(--pico-muted-color); }

    /* --- HERO --- */
    .hero {
        min-height: 90vh;
        display: flex; align-items: center; justify-content: center;
        position: relative; overflow: hidden; text-align: center; color: #fff;
    }
    .hero img.hero-backdrop { position: absolute; inset: 0; width: 100%; height: 100%; object-fit: cover; }
    .hero::after { content: ""; position: absolute; inset: 0; background: rgba(0,0,0,0.45); }
    .hero .hero-content { position: relative; z-index: 1; }
    .hero h1 { color: #fff; font-size: clamp(2.5rem, 6vw, 4.5rem); }
    .hero h1 span { display: block; color: var(--spice-orange); }
    .hero .actions { display: flex; gap: 1rem; justify-content: center; flex-wrap: wrap; }

    /* --- CARDS --- */
    .product-card { padding: 0; overflow: hidden; }
    .product-card .image { position: relative; overflow: hidden; }
    .product-card img { width: 100%; height: 16rem; object-fit: cover; transition: transform 0.3s; }
    .product-card:hover img { transform: scale(1.1); }
    .product-card .body { padding: 1.5rem; }
    .product-card .price-row { display: flex; justify-content: space-between; align-items: center; }
    .price { color: var(--spice-red); font-weight: bold; font-size: 1.2rem; }
    .badge {
        position: absolute; top: 1rem; right: 1rem;
        background: #22a559; color: #fff; border-radius: 999px;
        padding: 0.2rem 0.8rem; font-size: 0.85rem;
    }
    .quick-view {
        position: absolute; inset: 0; display: flex; align-items: center; justify-content: center;
        background: rgba(0,0,0,0.2); opacity: 0; transition: opacity 0.3s;
    }
    .product-card:hover .quick-view { opacity: 1; }
    .stat-number { font-size: 3rem; font-weight: bold; color: var(--spice-orange) !important; margin-bottom: 0.25rem; }
    .experience-badge {
        position: absolute; bottom: -1.5rem; right: -1.5rem;
        background: var(--spice-orange); color: #fff; padding: 1.5rem; border-radius: 0.5rem;
    }
    .category-controls { display: flex; flex-wrap: wrap; justify-content: center; gap: 1rem; margin-bottom: 3rem; }
    .category-controls button { border-radius: 999px; }
    .icon { font-size: 2rem; color: var(--spice-orange); margin-bottom: 1rem; }
    .value-icon { font-size: 3rem; margin-bottom: 1rem; }
    .split-image { position: relative; }
    .split-image img { width: 100%; border-radius: 0.5rem; }
    .checklist { list-style: none; padding: 0; }
    .checklist li { list-style: none; }
    .checklist i { color: var(--spice-orange); margin-right: 0.75rem; }
    .team-photo { display: block; width: 12rem; height: 12rem; margin: 0 auto 1rem auto; border-radius: 50%; object-fit: cover; }

    /* --- ANIMATION --- */
    .reveal { transition: opacity 0.6s ease-out, transform 0.6s ease-out; transition-delay: calc(var(--reveal-index, 0) * 0.1s); }
    .reveal-hidden { opacity: 0; transform: translateY(20px); }
    .reveal-visible { opacity: 1; transform: none; }
    @keyframes enter { from { opacity: 0; transform: translateY(20px); } to { opacity: 1; transform: none; } }
    .enter { animation: enter 0.8s ease-out both; animation-delay: calc(var(--enter-index, 0) * 0.2s); }

    /* --- FOOTER --- */
    .site-footer { background-color: var(--spice-brown); color: #eee; padding: 4rem 0 2rem 0; }
    .site-footer h3 { color: var(--spice-orange); }
    .site-footer h4 { color: #fff; }
    .site-footer a { color: #ddd; text-decoration: none; }
    .site-footer a:hover { color: var(--spice-orange); }
    .site-footer ul { list-style: none; padding: 0; }
    .site-footer ul li { list-style: none; }
    .social { display: flex; gap: 1rem; font-size: 1.3rem; }
    .copyright { margin-top: 3rem; padding-top: 2rem; border-top: 1px solid rgba(255,255,255,0.1); text-align: center; }
"#;

    rsx! {
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        document::Title { "Spice Delights" }
        document::Stylesheet {
            href: PICO_CSS,
        }
        document::Stylesheet {
            href: FONT_AWESOME_CSS,
        }
        style {
            "{site_css}"
        }
        AppBody {}
    }
}

#[component]
fn AppBody() -> Element {
    let app_state = use_hook(|| {
        let config = SiteConfig::from_env().unwrap_or_else(|e| {
            warn!("invalid site config, using defaults: {e}");
            SiteConfig::default()
        });
        AppState::new(SiteContent::spice_delights(), config)
    });

    rsx! {
        LoadedApp { app_state }
    }
}

/// This component holds the main app logic.
#[component]
fn LoadedApp(app_state: AppState) -> Element {
    // Provide the stable, non-reactive AppState.
    use_context_provider(|| app_state.clone());

    let active_page = use_signal(Page::default);

    // --- Provide the active_page signal to the context ---
    use_context_provider(|| active_page);

    rsx! {
        header {
            class: "site-header",
            nav {
                ul {
                    li {
                        a {
                            class: "brand",
                            href: "#",
                            onclick: move |event| {
                                event.prevent_default();
                                navigate(active_page, Page::Home);
                            },
                            "{app_state.content.brand}"
                        }
                    }
                }
                Tabs {
                    active_page,
                }
                ul {
                    li {
                        HamburgerMenu {
                            active_page,
                        }
                    }
                }
            }
        }
        main {
            class: "site-main",
            match active_page() {
                Page::Home => rsx! {
                    HomePage {}
                },
                Page::About => rsx! {
                    AboutPage {}
                },
                Page::Products(category) => rsx! {
                    ProductsPage {
                        key: "{category}",
                        category,
                    }
                },
                Page::Contact => rsx! {
                    ContactPage {}
                },
            }
        }
        Footer {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn products_tab_is_active_for_any_preset() {
        let tab = Page::Products(CategoryId::All);
        assert!(Page::Products(CategoryId::Organic).highlights(&tab));
        assert!(Page::Products(CategoryId::All).highlights(&tab));
        assert!(!Page::Contact.highlights(&tab));
    }

    #[test]
    fn log_level_defaults_to_info() {
        assert_eq!(parse_log_level(None), Level::INFO);
        assert_eq!(parse_log_level(Some("chatty")), Level::INFO);
        assert_eq!(parse_log_level(Some("debug")), Level::DEBUG);
        assert_eq!(parse_log_level(Some(" WARN ")), Level::WARN);
    }

    #[test]
    fn other_tabs_match_exactly() {
        assert!(Page::Home.highlights(&Page::Home));
        assert!(!Page::Home.highlights(&Page::About));
        assert!(!Page::Products(CategoryId::Blends).highlights(&Page::Home));
    }

    #[test]
    fn nav_starts_on_home_and_lists_every_page_once() {
        assert_eq!(Page::default(), Page::Home);
        let names: Vec<_> = ALL_PAGES.iter().map(Page::name).collect();
        assert_eq!(names, ["Home", "About", "Products", "Contact"]);
    }
}
