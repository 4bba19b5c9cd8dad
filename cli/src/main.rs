//! `archassist-cli`: terminal front-end for the design backend.
//!
//! Each invocation runs one action through `studio::Workspace`, with the
//! bearer token kept in a file between invocations. Useful for scripting and
//! for smoke-testing a backend without the browser client.

mod http;
mod sketch;
mod store;

#[cfg(test)]
#[path = "main_test.rs"]
mod main_test;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use studio::{ClientError, Operation, ProjectId, SketchSource, Workspace};

use crate::http::HttpBackend;
use crate::sketch::FileSketch;
use crate::store::{FileCredentials, default_token_path};

#[derive(Debug, thiserror::Error)]
enum CliError {
    /// A failed action, rendered the same way the browser renders notices.
    #[error("{0}")]
    Action(String),
    #[error("cannot locate a home directory; pass --token-file or set ARCHASSIST_TOKEN_FILE")]
    NoTokenPath,
    #[error("not signed in; run `archassist-cli login` first")]
    NotSignedIn,
    #[error("no project with id {0}")]
    UnknownProject(ProjectId),
    #[error("backend health check failed: {0}")]
    Health(String),
    #[error("invalid JSON output: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "archassist-cli", about = "Architectural design assistant CLI")]
struct Cli {
    #[arg(long, env = "ARCHASSIST_API_URL", default_value = studio::DEFAULT_API_BASE)]
    api_url: String,

    /// Where the bearer token is kept between invocations.
    #[arg(long, env = "ARCHASSIST_TOKEN_FILE")]
    token_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check that the backend answers `/health`.
    Ping,
    Login {
        #[arg(long)]
        email: String,
        #[arg(long, env = "ARCHASSIST_PASSWORD")]
        password: String,
    },
    Register {
        #[arg(long)]
        email: String,
        #[arg(long, env = "ARCHASSIST_PASSWORD")]
        password: String,
        #[arg(long, default_value = "")]
        name: String,
    },
    /// Show the signed-in identity.
    Whoami,
    Logout,
    Projects(ProjectsCommand),
    /// Generate a design for a project and store it on the project.
    Generate {
        #[arg(long)]
        project: ProjectId,
        /// Brief to send; defaults to the project's stored description.
        #[arg(long)]
        brief: Option<String>,
        /// Sketch document to attach.
        #[arg(long)]
        sketch: Option<PathBuf>,
    },
    SaveSketch {
        #[arg(long)]
        project: ProjectId,
        #[arg(long)]
        sketch: PathBuf,
    },
}

#[derive(Args, Debug)]
struct ProjectsCommand {
    #[command(subcommand)]
    command: ProjectsSubcommand,
}

#[derive(Subcommand, Debug)]
enum ProjectsSubcommand {
    List,
    Show {
        id: ProjectId,
    },
    Create {
        #[arg(long)]
        title: String,
        #[arg(long, default_value = "")]
        description: String,
    },
    Delete {
        id: ProjectId,
    },
}

type CliWorkspace = Workspace<HttpBackend, FileCredentials>;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let api_base = cli.api_url.trim().trim_end_matches('/').to_owned();
    let backend = HttpBackend::new(api_base.clone());

    if matches!(cli.command, Command::Ping) {
        return run_ping(&backend).await;
    }

    let token_file = resolve_token_file(cli.token_file, default_token_path())?;
    let mut workspace = Workspace::new(backend, FileCredentials::new(token_file));
    let base = api_base.as_str();
    let fail = |operation: Operation| move |err: ClientError| CliError::Action(err.notice(operation, base));

    match cli.command {
        Command::Ping => Ok(()),
        Command::Login { email, password } => {
            workspace.login(&email, &password).await.map_err(fail(Operation::Login))?;
            print_identity(&workspace)
        }
        Command::Register { email, password, name } => {
            workspace
                .register(&email, &password, &name)
                .await
                .map_err(fail(Operation::Register))?;
            print_identity(&workspace)
        }
        Command::Whoami => {
            signed_in(&mut workspace).await?;
            print_identity(&workspace)
        }
        Command::Logout => {
            workspace.logout();
            println!("signed out");
            Ok(())
        }
        Command::Projects(projects) => {
            signed_in(&mut workspace).await?;
            run_projects(&mut workspace, projects.command, fail).await
        }
        Command::Generate { project, brief, sketch } => {
            signed_in(&mut workspace).await?;
            open_project(&mut workspace, project, fail(Operation::LoadProjects)).await?;
            if let Some(brief) = brief {
                workspace.set_brief(brief);
            }
            let sketch = sketch.map(FileSketch::new);
            let result = workspace
                .generate_design(sketch.as_ref().map(|s| s as &dyn SketchSource))
                .await
                .map_err(fail(Operation::GenerateDesign))?;
            print_json(&result)
        }
        Command::SaveSketch { project, sketch } => {
            signed_in(&mut workspace).await?;
            open_project(&mut workspace, project, fail(Operation::LoadProjects)).await?;
            let sketch = FileSketch::new(sketch);
            workspace
                .save_sketch(Some(&sketch))
                .await
                .map_err(fail(Operation::SaveSketch))?;
            println!("{}", studio::workflow::SKETCH_SAVED);
            Ok(())
        }
    }
}

async fn run_projects<F, E>(workspace: &mut CliWorkspace, command: ProjectsSubcommand, fail: F) -> Result<(), CliError>
where
    F: Fn(Operation) -> E,
    E: FnOnce(ClientError) -> CliError,
{
    match command {
        ProjectsSubcommand::List => {
            workspace.load_all().await.map_err(fail(Operation::LoadProjects))?;
            for project in workspace.directory().projects() {
                println!("{}\t{}", project.id, project.title);
            }
            Ok(())
        }
        ProjectsSubcommand::Show { id } => {
            let project = workspace.fetch_project(id).await.map_err(fail(Operation::LoadProjects))?;
            print_json(&project)
        }
        ProjectsSubcommand::Create { title, description } => {
            let id = workspace
                .create_project(&title, &description)
                .await
                .map_err(fail(Operation::CreateProject))?;
            println!("{id}");
            Ok(())
        }
        ProjectsSubcommand::Delete { id } => {
            workspace.delete_project(id).await.map_err(fail(Operation::DeleteProject))?;
            println!("deleted {id}");
            Ok(())
        }
    }
}

/// The explicit `--token-file`, else the per-user default.
fn resolve_token_file(flag: Option<PathBuf>, default: Option<PathBuf>) -> Result<PathBuf, CliError> {
    flag.or(default).ok_or(CliError::NoTokenPath)
}

async fn run_ping(backend: &HttpBackend) -> Result<(), CliError> {
    let health = backend.health().await.map_err(|e| CliError::Health(e.to_string()))?;
    println!("{} ({})", health.status, backend.base());
    Ok(())
}

async fn signed_in(workspace: &mut CliWorkspace) -> Result<(), CliError> {
    if workspace.check_existing_session().await.is_signed_in() {
        Ok(())
    } else {
        Err(CliError::NotSignedIn)
    }
}

/// Load the list and select `id`, so the brief and result follow it.
async fn open_project<E>(workspace: &mut CliWorkspace, id: ProjectId, fail: E) -> Result<(), CliError>
where
    E: FnOnce(ClientError) -> CliError,
{
    workspace.load_all().await.map_err(fail)?;
    if workspace.select(id) { Ok(()) } else { Err(CliError::UnknownProject(id)) }
}

fn print_identity(workspace: &CliWorkspace) -> Result<(), CliError> {
    let identity = workspace.session().identity().ok_or(CliError::NotSignedIn)?;
    print_json(identity)
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
