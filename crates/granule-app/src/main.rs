//! Command-line entry point (native).

#[cfg(feature = "native")]
mod cli {
    use clap::{Args, Parser, Subcommand};
    use granule_app::{AppConfig, MainPane, SystemOpener, Workspace};
    use granule_core::storage::FileStorage;
    use granule_core::{AuthError, LaunchOutcome, StorageError};
    use std::path::PathBuf;
    use std::sync::Arc;

    #[derive(Debug, thiserror::Error)]
    pub enum CliError {
        #[error("storage: {0}")]
        Storage(#[from] StorageError),
        #[error("{0}")]
        Auth(#[from] AuthError),
        #[error("failed to encode output: {0}")]
        Json(#[from] serde_json::Error),
        #[error("no app named `{0}` in the catalog")]
        UnknownApp(String),
        #[error("no page titled `{0}`")]
        UnknownPage(String),
        #[error("sign in first (`granule login`)")]
        SignedOut,
        #[error("could not open {0}")]
        OpenFailed(String),
    }

    #[derive(Parser, Debug)]
    #[command(name = "granule", about = "Granule CRM dashboard state")]
    struct Cli {
        /// Directory holding persisted dashboard state.
        #[arg(long, env = "GRANULE_DATA_DIR")]
        data_dir: Option<PathBuf>,

        #[command(subcommand)]
        command: Command,
    }

    #[derive(Subcommand, Debug)]
    enum Command {
        Apps(AppsCommand),
        Login {
            #[arg(long)]
            email: String,
            #[arg(long, env = "GRANULE_PASSWORD")]
            password: String,
        },
        Logout,
        Whoami,
        /// Update the signed-in profile.
        Profile {
            /// New display name; an empty value clears it.
            #[arg(long)]
            full_name: String,
        },
        /// Print dashboard figures.
        Dashboard {
            #[arg(long)]
            json: bool,
        },
    }

    #[derive(Args, Debug)]
    struct AppsCommand {
        #[command(subcommand)]
        command: AppsSubcommand,
    }

    #[derive(Subcommand, Debug)]
    enum AppsSubcommand {
        /// List every app that can be pinned.
        Catalog {
            /// Only apps that can be shown inline.
            #[arg(long)]
            embeddable: bool,
        },
        /// List pinned apps.
        List,
        Pin { name: String },
        Unpin { name: String },
        /// Show a pinned, embeddable app inline.
        Activate { name: String },
        /// Open an app the way a sidebar click does.
        Launch { name: String },
        /// Close the embedded app.
        Close,
        /// Print what the content area shows.
        View {
            /// Page to show when no app is embedded.
            #[arg(long)]
            page: Option<String>,
        },
    }

    pub fn run() -> Result<(), CliError> {
        let cli = Cli::parse();
        let mut config = AppConfig::default();
        if let Some(dir) = cli.data_dir {
            config = config.with_data_dir(dir);
        }
        let storage: Arc<FileStorage> = Arc::new(config.open_storage()?);
        log::debug!("Using storage at {}", storage.base_path().display());
        let mut workspace = Workspace::load(&config, storage);

        match cli.command {
            Command::Apps(apps) => run_apps(&mut workspace, apps.command),
            Command::Login { email, password } => {
                let profile = workspace.session_mut().sign_in(&email, &password)?;
                println!(
                    "Signed in as {} ({})",
                    profile.full_name.as_deref().unwrap_or(&profile.email),
                    profile.role
                );
                Ok(())
            }
            Command::Logout => {
                workspace.session_mut().sign_out()?;
                println!("Signed out");
                Ok(())
            }
            Command::Whoami => {
                match workspace.session().profile() {
                    Some(profile) => println!(
                        "{} <{}> {}",
                        profile.full_name.as_deref().unwrap_or("-"),
                        profile.email,
                        profile.role
                    ),
                    None => println!("Not signed in"),
                }
                Ok(())
            }
            Command::Profile { full_name } => {
                let profile = workspace.session_mut().update_profile(&full_name)?;
                println!(
                    "Profile updated: {}",
                    profile.full_name.as_deref().unwrap_or("-")
                );
                Ok(())
            }
            Command::Dashboard { json } => {
                if !workspace.session().is_authenticated() {
                    return Err(CliError::SignedOut);
                }
                let summary = workspace.crm().summary();
                if json {
                    println!("{}", serde_json::to_string_pretty(&summary)?);
                    return Ok(());
                }
                println!("Contacts:           {}", summary.total_contacts);
                println!("Leads:              {}", summary.total_leads);
                println!("Deals:              {}", summary.total_deals);
                println!("Deal value:         {:.2}", summary.deal_value);
                println!("Weighted pipeline:  {:.2}", summary.weighted_pipeline);
                println!(
                    "Activities:         {} ({} pending)",
                    summary.total_activities, summary.pending_activities
                );
                for lead in &summary.leads_by_status {
                    println!("  {:14} {:3}", lead.status.label(), lead.count);
                }
                for stage in &summary.deals_by_stage {
                    println!(
                        "  {:14} {:3}  {:.2}",
                        stage.stage.label(),
                        stage.count,
                        stage.value
                    );
                }
                Ok(())
            }
        }
    }

    fn run_apps(
        workspace: &mut Workspace<FileStorage>,
        command: AppsSubcommand,
    ) -> Result<(), CliError> {
        let require_known = |workspace: &Workspace<FileStorage>, name: &str| {
            if workspace.shortcuts().catalog().contains(name) {
                Ok(())
            } else {
                Err(CliError::UnknownApp(name.to_string()))
            }
        };

        match command {
            AppsSubcommand::Catalog { embeddable } => {
                let catalog = workspace.shortcuts().catalog();
                let apps: Vec<_> = if embeddable {
                    catalog.embeddable().collect()
                } else {
                    catalog.entries().iter().collect()
                };
                for app in apps {
                    let mode = if app.embeddable { "embedded" } else { "new tab" };
                    println!("  {:16} {:9} {}", app.name, mode, app.launch_url);
                }
            }
            AppsSubcommand::List => {
                let active = workspace.shortcuts().selection().active_name();
                for app in workspace.shortcuts().pinned() {
                    let marker = if active == Some(app.name) { "*" } else { " " };
                    println!("{} {}", marker, app.name);
                }
            }
            AppsSubcommand::Pin { name } => {
                require_known(workspace, &name)?;
                if !workspace.shortcuts_mut().pin(&name) {
                    println!("{name} is already pinned");
                }
            }
            AppsSubcommand::Unpin { name } => {
                if !workspace.shortcuts_mut().unpin(&name) {
                    println!("{name} is not pinned");
                }
            }
            AppsSubcommand::Activate { name } => {
                require_known(workspace, &name)?;
                if !workspace.shortcuts_mut().activate(&name) {
                    println!("{name} was not activated (must be pinned and embeddable)");
                }
            }
            AppsSubcommand::Launch { name } => match workspace.open_app(&name, &SystemOpener) {
                LaunchOutcome::Embedded => println!("{name} is shown inline"),
                LaunchOutcome::OpenedExternally => println!("Opened {name} in the browser"),
                LaunchOutcome::NotPinned => println!("Pin {name} before opening it inline"),
                LaunchOutcome::Unknown => return Err(CliError::UnknownApp(name)),
                LaunchOutcome::Failed(reason) => return Err(CliError::OpenFailed(reason)),
            },
            AppsSubcommand::Close => {
                if !workspace.close_app() {
                    println!("No app is open");
                }
            }
            AppsSubcommand::View { page } => {
                if let Some(title) = page {
                    if !workspace.navigate_to(&title) {
                        return Err(CliError::UnknownPage(title));
                    }
                }
                match workspace.main_pane() {
                    MainPane::SignIn => println!("Sign-in page"),
                    MainPane::Embedded { title, url } => println!("{title}: {url}"),
                    MainPane::Page(page) => println!("{} ({})", page.title(), page.href()),
                }
            }
        }
        Ok(())
    }
}

#[cfg(feature = "native")]
fn main() {
    env_logger::init();
    log::info!("Starting Granule CRM");

    if let Err(e) = cli::run() {
        log::error!("{e}");
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

#[cfg(not(feature = "native"))]
fn main() {
    panic!("Native feature not enabled. Use `cargo run --features native`");
}
