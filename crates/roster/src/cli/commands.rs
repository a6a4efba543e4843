//! # CLI Layer
//!
//! The CLI layer is the **only** place that:
//! - Knows about stdout, stderr and exit codes
//! - Parses arguments
//! - Drives the async runtime for submissions
//!
//! ## Responsibilities
//!
//! 1. **Argument Parsing**: clap, see `setup.rs`
//! 2. **Context Setup**: `rosterapp::init::initialize` opens the data directory
//! 3. **Dispatch**: one match arm per command, each calling the API once
//! 4. **Output**: styled text via `render.rs`, or JSON with `--json`
//! 5. **Errors**: converted to `anyhow` for `main` to print

use super::logging::init_logging;
use super::render;
use super::setup::{Cli, Commands, ListArgs, ThemeAction};
use super::styles::{system_prefers_dark, Palette};
use anyhow::{anyhow, Context};
use clap::Parser;
use rosterapp::api::RosterApi;
use rosterapp::commands::{CmdMessage, CmdResult};
use rosterapp::error::RosterError;
use rosterapp::init::initialize;
use rosterapp::store::fs_backend::FsBackend;
use rosterapp::validation::{RecordEdit, RecordForm};
use serde::Serialize;
use tracing::debug;

struct Output {
    json: bool,
    palette: Palette,
}

impl Output {
    fn json<T: Serialize>(&self, value: &T) -> anyhow::Result<()> {
        println!("{}", serde_json::to_string_pretty(value)?);
        Ok(())
    }

    fn messages(&self, messages: &[CmdMessage]) {
        print!("{}", render::render_messages(messages, &self.palette));
    }

    fn result(&self, result: &CmdResult) -> anyhow::Result<()> {
        if self.json {
            return self.json(result);
        }
        self.messages(&result.messages);
        Ok(())
    }

    fn fail(&self, err: RosterError) -> anyhow::Error {
        match err {
            RosterError::Validation(errors) => {
                if !self.json {
                    eprint!("{}", render::render_validation(&errors, &self.palette));
                }
                anyhow!("Record not saved: {}", errors)
            }
            RosterError::NotAuthenticated => {
                anyhow!("Not logged in. Run `roster login <username> --password <password>` first")
            }
            other => anyhow::Error::new(other),
        }
    }
}

pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut ctx = initialize(cli.data_dir.clone()).context("Could not open the roster data")?;
    let palette = if cli.json {
        Palette::plain()
    } else {
        Palette::for_theme(ctx.api.resolve_theme(system_prefers_dark()))
    };
    let out = Output {
        json: cli.json,
        palette,
    };

    // Naked `roster` lists the first page
    let command = cli
        .command
        .unwrap_or_else(|| Commands::List(ListArgs::default()));
    dispatch(&mut ctx.api, command, &out)
}

fn dispatch(api: &mut RosterApi<FsBackend>, command: Commands, out: &Output) -> anyhow::Result<()> {
    debug!(?command, "dispatching");
    match command {
        Commands::Login { username, password } => {
            let outcome = api.login(&username, &password);
            if !outcome.success {
                return Err(anyhow!(outcome
                    .error
                    .unwrap_or_else(|| "Login failed".to_string())));
            }
            if out.json {
                return out.json(&outcome);
            }
            let name = api.whoami().map(|u| u.full_name.clone()).unwrap_or_default();
            out.messages(&[CmdMessage::success(format!("Signed in as {}", name))]);
        }
        Commands::Logout => {
            api.logout();
            if out.json {
                return out.json(&serde_json::json!({ "success": true }));
            }
            out.messages(&[CmdMessage::success("Signed out")]);
        }
        Commands::Whoami => {
            let user = api.whoami().ok_or_else(|| out.fail(RosterError::NotAuthenticated))?;
            if out.json {
                return out.json(user);
            }
            print!("{}", render::render_profile(user, &out.palette));
        }
        Commands::Profile { full_name } => {
            let user = api.update_profile(&full_name).map_err(|e| out.fail(e))?;
            if out.json {
                return out.json(&user);
            }
            out.messages(&[CmdMessage::success(format!(
                "Profile updated: {}",
                user.full_name
            ))]);
        }
        Commands::Theme { action } => {
            match action {
                Some(ThemeAction::Set { theme }) => api.set_theme(theme.into()),
                Some(ThemeAction::Toggle) => {
                    api.toggle_theme();
                }
                Some(ThemeAction::Show) | None => {}
            }
            let preference = api.theme();
            let resolved = api.resolve_theme(system_prefers_dark());
            if out.json {
                return out.json(&serde_json::json!({
                    "preference": preference,
                    "resolved": resolved,
                }));
            }
            print!("{}", render::render_theme(preference, resolved, &out.palette));
        }
        Commands::List(args) => {
            let result = api.list(args.view_state()).map_err(|e| out.fail(e))?;
            if out.json {
                return out.json(&result);
            }
            if let Some(listing) = &result.listing {
                print!("{}", render::render_listing(listing, &out.palette));
            }
            out.messages(&result.messages);
        }
        Commands::Show { id } => {
            let result = api.get_record(&id).map_err(|e| out.fail(e))?;
            if out.json {
                return out.json(&result.listed_records);
            }
            for record in &result.listed_records {
                print!("{}", render::render_record(record, &out.palette));
            }
        }
        Commands::Create(args) => {
            let form = RecordForm::from(args);
            let result = block_on(api.create_record(&form))?.map_err(|e| out.fail(e))?;
            out.result(&result)?;
        }
        Commands::Edit(args) => {
            let id = args.id.clone();
            let edit = RecordEdit::from(args);
            let result = block_on(api.update_record(&id, &edit))?.map_err(|e| out.fail(e))?;
            out.result(&result)?;
        }
        Commands::Delete { id } => {
            let result = api.delete_record(&id).map_err(|e| out.fail(e))?;
            out.result(&result)?;
        }
        Commands::Reset => {
            let result = api.reset().map_err(|e| out.fail(e))?;
            out.result(&result)?;
        }
    }
    Ok(())
}

/// Runs a submission to completion on a single-threaded runtime.
fn block_on<F: std::future::Future>(future: F) -> anyhow::Result<F::Output> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .context("Could not start the async runtime")?;
    Ok(runtime.block_on(future))
}
