use clap::{Args, Parser, Subcommand, ValueEnum};
use rosterapp::query::{Page, PageSize};
use rosterapp::theme::ThemePreference;
use rosterapp::validation::{RecordEdit, RecordForm};
use rosterapp::view_state::ViewState;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "roster",
    bin_name = "roster",
    version,
    disable_help_subcommand = true,
    about = "Manage a local roster of people: search, page, create, edit, delete",
    long_about = None,
    after_help = "Sign in first with: roster login admin --password password123"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Data directory (defaults to $ROSTER_DATA_DIR, then the platform data dir)
    #[arg(long, global = true, value_name = "DIR", help_heading = "Options")]
    pub data_dir: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true, help_heading = "Options")]
    pub json: bool,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sign in with the demo credentials
    Login {
        username: String,

        #[arg(short, long)]
        password: String,
    },

    /// Sign out (records and profile are kept)
    Logout,

    /// Show the signed-in user
    Whoami,

    /// Change the display name of the signed-in user
    Profile {
        #[arg(value_name = "FULL_NAME")]
        full_name: String,
    },

    /// Show or change the theme preference
    Theme {
        #[command(subcommand)]
        action: Option<ThemeAction>,
    },

    /// List records, optionally filtered and paginated
    #[command(alias = "ls")]
    List(ListArgs),

    /// Show one record
    Show { id: String },

    /// Add a record
    #[command(alias = "new")]
    Create(CreateArgs),

    /// Change fields of a record
    Edit(EditArgs),

    /// Remove a record
    #[command(alias = "rm")]
    Delete { id: String },

    /// Replace all records with the default set
    Reset,
}

#[derive(Subcommand, Debug)]
pub enum ThemeAction {
    /// Show the preference and what it resolves to
    Show,
    /// Set the preference
    Set { theme: ThemeArg },
    /// Cycle light -> dark -> system
    Toggle,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum ThemeArg {
    Light,
    Dark,
    System,
}

impl From<ThemeArg> for ThemePreference {
    fn from(arg: ThemeArg) -> Self {
        match arg {
            ThemeArg::Light => ThemePreference::Light,
            ThemeArg::Dark => ThemePreference::Dark,
            ThemeArg::System => ThemePreference::System,
        }
    }
}

#[derive(Args, Debug, Default)]
pub struct ListArgs {
    /// Case-insensitive search across name, email, role and status
    #[arg(short, long)]
    pub search: Option<String>,

    /// Page number, starting at 1
    #[arg(short, long)]
    pub page: Option<String>,

    /// Rows per page: 5, 10, 15 or 20
    #[arg(long = "per-page", short = 'n')]
    pub per_page: Option<String>,

    /// A shared view, e.g. "?search=dev&page=2&perPage=10"
    #[arg(long, conflicts_with_all = ["search", "page", "per_page"])]
    pub query: Option<String>,
}

impl ListArgs {
    /// Invalid page or page size values fall back to their defaults, the
    /// same way a hand-edited URL would.
    pub fn view_state(&self) -> ViewState {
        if let Some(query) = &self.query {
            return ViewState::from_query(query);
        }
        ViewState::new(
            self.search.clone().unwrap_or_default(),
            Page::coerce(self.page.as_deref()),
            PageSize::coerce(self.per_page.as_deref()),
        )
    }
}

#[derive(Args, Debug)]
pub struct CreateArgs {
    #[arg(long, default_value = "")]
    pub name: String,

    #[arg(long, default_value = "")]
    pub email: String,

    /// Developer, Designer, Manager, "QA Engineer" or DevOps
    #[arg(long, default_value = "")]
    pub role: String,

    /// Active or Inactive
    #[arg(long, default_value = "Active")]
    pub status: String,
}

impl From<CreateArgs> for RecordForm {
    fn from(args: CreateArgs) -> Self {
        RecordForm {
            name: args.name,
            email: args.email,
            role: args.role,
            status: args.status,
        }
    }
}

#[derive(Args, Debug)]
pub struct EditArgs {
    pub id: String,

    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub email: Option<String>,

    #[arg(long)]
    pub role: Option<String>,

    #[arg(long)]
    pub status: Option<String>,
}

impl From<EditArgs> for RecordEdit {
    fn from(args: EditArgs) -> Self {
        RecordEdit {
            name: args.name,
            email: args.email,
            role: args.role,
            status: args.status,
        }
    }
}
