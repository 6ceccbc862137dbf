//! Dashboard workspace: what the shell renders each frame.

use crate::config::AppConfig;
use granule_core::{
    AppShortcutStore, Catalog, CrmBook, ExternalOpener, KeyValueStorage, LaunchOutcome, Session,
};
use serde_json::{Value, json};
use std::sync::Arc;

/// Pages reachable from the base navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Page {
    #[default]
    Dashboard,
    Contacts,
    Leads,
    Deals,
    Activities,
    Settings,
}

impl Page {
    /// All pages, in sidebar order.
    pub fn all() -> &'static [Page] {
        &[
            Page::Dashboard,
            Page::Contacts,
            Page::Leads,
            Page::Deals,
            Page::Activities,
            Page::Settings,
        ]
    }

    pub fn title(&self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::Contacts => "Contacts",
            Page::Leads => "Leads",
            Page::Deals => "Deals",
            Page::Activities => "Activities",
            Page::Settings => "Settings",
        }
    }

    pub fn href(&self) -> &'static str {
        match self {
            Page::Dashboard => "/dashboard",
            Page::Contacts => "/dashboard/contacts",
            Page::Leads => "/dashboard/leads",
            Page::Deals => "/dashboard/deals",
            Page::Activities => "/dashboard/activities",
            Page::Settings => "/dashboard/settings",
        }
    }

    /// Look a page up by its title, ignoring case.
    pub fn from_title(title: &str) -> Option<Page> {
        Page::all()
            .iter()
            .copied()
            .find(|page| page.title().eq_ignore_ascii_case(title))
    }
}

/// What the main content area shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MainPane {
    /// Nobody is signed in.
    SignIn,
    /// An embedded app frame.
    Embedded {
        title: &'static str,
        url: &'static str,
    },
    /// Regular page content.
    Page(Page),
}

impl MainPane {
    /// Shape handed to the browser host.
    pub fn to_json(&self) -> Value {
        match self {
            MainPane::SignIn => json!({ "kind": "sign_in" }),
            MainPane::Embedded { title, url } => {
                json!({ "kind": "embedded", "title": title, "url": url })
            }
            MainPane::Page(page) => {
                json!({ "kind": "page", "title": page.title(), "href": page.href() })
            }
        }
    }
}

/// One sidebar row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SidebarItem {
    App {
        name: &'static str,
        accent: &'static str,
        embeddable: bool,
        active: bool,
    },
    Page {
        page: Page,
        active: bool,
    },
}

impl SidebarItem {
    pub fn to_json(&self) -> Value {
        match self {
            SidebarItem::App {
                name,
                accent,
                embeddable,
                active,
            } => json!({
                "kind": "app",
                "name": name,
                "accent": accent,
                "embeddable": embeddable,
                "active": active,
            }),
            SidebarItem::Page { page, active } => json!({
                "kind": "page",
                "title": page.title(),
                "href": page.href(),
                "active": active,
            }),
        }
    }
}

/// Everything behind one dashboard window.
pub struct Workspace<S: KeyValueStorage> {
    title: String,
    shortcuts: AppShortcutStore<S>,
    session: Session<S>,
    crm: CrmBook,
    page: Page,
}

impl<S: KeyValueStorage> Workspace<S> {
    /// Restore persisted state from `storage`.
    pub fn load(config: &AppConfig, storage: Arc<S>) -> Self {
        let shortcuts = AppShortcutStore::load(storage.clone(), Catalog::builtin());
        let session = Session::restore(storage);
        let crm = if config.seed_records {
            CrmBook::seeded()
        } else {
            CrmBook::new()
        };
        log::info!(
            "Workspace ready ({} pinned apps, signed in: {})",
            shortcuts.pinned().len(),
            session.is_authenticated()
        );
        Self {
            title: config.title.clone(),
            shortcuts,
            session,
            crm,
            page: Page::default(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Decide what the content area renders.
    ///
    /// An embedded app wins over the current page, and stays up while the
    /// user switches pages.
    pub fn main_pane(&self) -> MainPane {
        if !self.session.is_authenticated() {
            return MainPane::SignIn;
        }
        match self.shortcuts.current_view() {
            Some(app) if app.embeddable => MainPane::Embedded {
                title: app.name,
                url: app.launch_url,
            },
            _ => MainPane::Page(self.page),
        }
    }

    /// Sidebar rows: pinned apps first, then the base navigation.
    pub fn sidebar(&self) -> Vec<SidebarItem> {
        let active_app = self.shortcuts.selection().active_name();
        let apps = self.shortcuts.pinned().into_iter().map(|app| SidebarItem::App {
            name: app.name,
            accent: app.accent,
            embeddable: app.embeddable,
            active: active_app == Some(app.name),
        });
        let pages = Page::all().iter().map(|&page| SidebarItem::Page {
            page,
            active: page == self.page,
        });
        apps.chain(pages).collect()
    }

    pub fn navigate(&mut self, page: Page) {
        self.page = page;
    }

    /// Navigate by page title. Returns false for unknown titles.
    pub fn navigate_to(&mut self, title: &str) -> bool {
        match Page::from_title(title) {
            Some(page) => {
                self.navigate(page);
                true
            }
            None => {
                log::debug!("No page titled {title:?}");
                false
            }
        }
    }

    pub fn page(&self) -> Page {
        self.page
    }

    /// Sidebar click on a pinned app.
    pub fn open_app(&mut self, name: &str, opener: &dyn ExternalOpener) -> LaunchOutcome {
        self.shortcuts.launch(name, opener)
    }

    /// Close the embedded app, back to the current page.
    pub fn close_app(&mut self) -> bool {
        self.shortcuts.deactivate()
    }

    pub fn shortcuts(&self) -> &AppShortcutStore<S> {
        &self.shortcuts
    }

    pub fn shortcuts_mut(&mut self) -> &mut AppShortcutStore<S> {
        &mut self.shortcuts
    }

    pub fn session(&self) -> &Session<S> {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session<S> {
        &mut self.session
    }

    pub fn crm(&self) -> &CrmBook {
        &self.crm
    }

    pub fn crm_mut(&mut self) -> &mut CrmBook {
        &mut self.crm
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use granule_core::session::{DEMO_EMAIL, DEMO_PASSWORD};
    use granule_core::{MemoryStorage, RecordingOpener};

    fn signed_in() -> (Arc<MemoryStorage>, Workspace<MemoryStorage>) {
        let storage = Arc::new(MemoryStorage::new());
        let mut workspace = Workspace::load(&AppConfig::default(), storage.clone());
        workspace
            .session_mut()
            .sign_in(DEMO_EMAIL, DEMO_PASSWORD)
            .unwrap();
        (storage, workspace)
    }

    #[test]
    fn test_signed_out_shows_sign_in() {
        let workspace = Workspace::load(&AppConfig::default(), Arc::new(MemoryStorage::new()));
        assert_eq!(workspace.main_pane(), MainPane::SignIn);
    }

    #[test]
    fn test_default_pane_is_dashboard() {
        let (_, workspace) = signed_in();
        assert_eq!(workspace.main_pane(), MainPane::Page(Page::Dashboard));
    }

    #[test]
    fn test_embedded_app_survives_navigation() {
        let (_, mut workspace) = signed_in();
        let opener = RecordingOpener::new();
        workspace.shortcuts_mut().pin("Trello");
        assert_eq!(workspace.open_app("Trello", &opener), LaunchOutcome::Embedded);

        workspace.navigate(Page::Deals);
        assert_eq!(
            workspace.main_pane(),
            MainPane::Embedded {
                title: "Trello",
                url: "https://trello.com"
            }
        );

        workspace.shortcuts_mut().deactivate();
        assert_eq!(workspace.main_pane(), MainPane::Page(Page::Deals));
    }

    #[test]
    fn test_external_app_leaves_page() {
        let (_, mut workspace) = signed_in();
        let opener = RecordingOpener::new();
        workspace.shortcuts_mut().pin("Slack");
        assert_eq!(
            workspace.open_app("Slack", &opener),
            LaunchOutcome::OpenedExternally
        );
        assert_eq!(workspace.main_pane(), MainPane::Page(Page::Dashboard));
        assert_eq!(opener.opened(), vec!["https://slack.com".to_string()]);
    }

    #[test]
    fn test_sidebar_lists_apps_then_pages() {
        let (_, mut workspace) = signed_in();
        workspace.shortcuts_mut().pin("Asana");
        workspace.shortcuts_mut().activate("Asana");
        workspace.navigate(Page::Leads);

        let items = workspace.sidebar();
        assert_eq!(items.len(), 1 + Page::all().len());
        assert_eq!(
            items[0],
            SidebarItem::App {
                name: "Asana",
                accent: "text-orange-500",
                embeddable: true,
                active: true,
            }
        );
        assert!(items.contains(&SidebarItem::Page {
            page: Page::Leads,
            active: true
        }));
    }

    #[test]
    fn test_reload_restores_everything() {
        let (storage, mut workspace) = signed_in();
        workspace.shortcuts_mut().pin("LinkedIn");
        workspace.shortcuts_mut().activate("LinkedIn");

        let reloaded = Workspace::load(&AppConfig::default(), storage);
        assert!(reloaded.session().is_authenticated());
        assert!(matches!(
            reloaded.main_pane(),
            MainPane::Embedded { title: "LinkedIn", .. }
        ));
    }

    #[test]
    fn test_unseeded_crm() {
        let config = AppConfig {
            seed_records: false,
            ..AppConfig::default()
        };
        let workspace = Workspace::load(&config, Arc::new(MemoryStorage::new()));
        assert_eq!(workspace.crm().summary().total_contacts, 0);
    }

    #[test]
    fn test_page_lookup() {
        assert_eq!(Page::from_title("deals"), Some(Page::Deals));
        assert_eq!(Page::from_title("Reports"), None);
        assert_eq!(Page::Activities.href(), "/dashboard/activities");
    }

    #[test]
    fn test_close_app_returns_to_page() {
        let (storage, mut workspace) = signed_in();
        workspace.shortcuts_mut().pin("Trello");
        workspace.open_app("Trello", &RecordingOpener::new());
        assert!(workspace.navigate_to("contacts"));

        assert!(workspace.close_app());
        assert!(!workspace.close_app());
        assert_eq!(workspace.main_pane(), MainPane::Page(Page::Contacts));
        assert_eq!(storage.get("activeAppName").unwrap(), None);
    }

    #[test]
    fn test_navigate_to_unknown_title_keeps_page() {
        let (_, mut workspace) = signed_in();
        assert!(workspace.navigate_to("Settings"));
        assert!(!workspace.navigate_to("Reports"));
        assert_eq!(workspace.page(), Page::Settings);
    }

    #[test]
    fn test_sign_in_reveals_embedded_app() {
        let storage = Arc::new(MemoryStorage::new());
        let mut workspace = Workspace::load(&AppConfig::default(), storage);
        workspace.shortcuts_mut().pin("Trello");
        workspace.shortcuts_mut().activate("Trello");
        assert_eq!(workspace.main_pane(), MainPane::SignIn);

        workspace
            .session_mut()
            .sign_in(DEMO_EMAIL, DEMO_PASSWORD)
            .unwrap();
        assert_eq!(
            workspace.main_pane().to_json(),
            json!({ "kind": "embedded", "title": "Trello", "url": "https://trello.com" })
        );
    }

    #[test]
    fn test_pane_and_sidebar_json() {
        let (_, mut workspace) = signed_in();
        workspace.shortcuts_mut().pin("Slack");
        workspace.navigate(Page::Leads);

        assert_eq!(
            workspace.main_pane().to_json(),
            json!({ "kind": "page", "title": "Leads", "href": "/dashboard/leads" })
        );
        assert_eq!(MainPane::SignIn.to_json(), json!({ "kind": "sign_in" }));

        let items: Vec<Value> = workspace.sidebar().iter().map(SidebarItem::to_json).collect();
        assert_eq!(items[0]["kind"], "app");
        assert_eq!(items[0]["name"], "Slack");
        assert_eq!(items[0]["embeddable"], false);
        assert!(
            items
                .iter()
                .any(|item| item["title"] == "Leads" && item["active"] == true)
        );
    }
}
