//! Static catalog of third-party apps that can be pinned to the sidebar.

/// A third-party integration the sidebar can link to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppDescriptor {
    /// Unique display name, also the persisted key.
    pub name: &'static str,
    /// Destination address.
    pub launch_url: &'static str,
    /// Whether the app may be shown inline in the content frame.
    pub embeddable: bool,
    /// Tailwind text color class used for the sidebar icon.
    pub accent: &'static str,
}

impl AppDescriptor {
    pub const fn new(
        name: &'static str,
        launch_url: &'static str,
        embeddable: bool,
        accent: &'static str,
    ) -> Self {
        Self {
            name,
            launch_url,
            embeddable,
            accent,
        }
    }
}

/// Built-in integrations, in the order the apps menu lists them.
pub const CATALOG: &[AppDescriptor] = &[
    AppDescriptor::new("WhatsApp", "https://web.whatsapp.com", false, "text-green-500"),
    AppDescriptor::new("Discord", "https://discord.com", false, "text-indigo-500"),
    AppDescriptor::new("Instagram", "https://www.instagram.com", false, "text-pink-500"),
    AppDescriptor::new("Facebook", "https://www.facebook.com", false, "text-blue-600"),
    AppDescriptor::new("X (Twitter)", "https://twitter.com", true, "text-black"),
    AppDescriptor::new("LinkedIn", "https://www.linkedin.com", true, "text-sky-600"),
    AppDescriptor::new(
        "Google Sheets",
        "https://docs.google.com/spreadsheets",
        false,
        "text-green-600",
    ),
    AppDescriptor::new("Google Drive", "https://drive.google.com", false, "text-blue-500"),
    AppDescriptor::new("Gemini AI", "https://gemini.com", true, "text-purple-600"),
    AppDescriptor::new("Slack", "https://slack.com", false, "text-pink-600"),
    AppDescriptor::new("Trello", "https://trello.com", true, "text-blue-500"),
    AppDescriptor::new("Notion", "https://www.notion.so", false, "text-black"),
    AppDescriptor::new("Asana", "https://asana.com", true, "text-orange-500"),
];

/// Lookup view over a fixed list of descriptors.
///
/// The store only ever sees apps through a `Catalog`, so tests can swap in a
/// small hand-built list instead of [`CATALOG`].
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    entries: &'static [AppDescriptor],
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Catalog {
    /// Catalog over an arbitrary static list.
    pub const fn new(entries: &'static [AppDescriptor]) -> Self {
        Self { entries }
    }

    /// Catalog over the built-in integrations.
    pub const fn builtin() -> Self {
        Self::new(CATALOG)
    }

    /// Find a descriptor by exact name.
    pub fn find(&self, name: &str) -> Option<&'static AppDescriptor> {
        self.entries.iter().find(|app| app.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.find(name).is_some()
    }

    pub fn entries(&self) -> &'static [AppDescriptor] {
        self.entries
    }

    /// Descriptors that can be shown inline.
    pub fn embeddable(&self) -> impl Iterator<Item = &'static AppDescriptor> {
        self.entries.iter().filter(|app| app.embeddable)
    }
}
