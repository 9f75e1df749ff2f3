mod edges;


use api::HttpClient;
use api::Session;
use api::auth::LoginOutcome;
use api::config::{API_URL_ENV, ApiConfig, DEFAULT_BASE_URL};
use api::crud::EntityForm;
use api::dashboard::DashboardCounts;
use api::error::ApiError;
use api::forms::{AuditorioForm, ConferencistaForm, ReservaForm};
use api::guard::{self, GuardKind, GuardOutcome};
use api::resource::Entity;
use api::token_store::TokenStore;
use api::types::{Auditorio, Conferencista, Reserva};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use crate::edges::{FileTokenStore, ReqwestTransport, TerminalNavigator};

type CliClient = HttpClient<ReqwestTransport, FileTokenStore, TerminalNavigator>;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("not signed in; run `conferencias-cli login` first")]
    NotSignedIn,
    #[error("login rejected: {0}")]
    LoginRejected(String),
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "conferencias-cli", about = "Admin CLI for speakers, venues and reservations")]
struct Cli {
    #[arg(long, env = API_URL_ENV, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    #[arg(long, env = "CONFERENCIAS_TOKEN_FILE", default_value = ".conferencias-token")]
    token_file: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        clave: String,
    },
    Logout,
    Me,
    Dashboard,
    Conferencistas(ConferencistaCommand),
    Auditorios(AuditorioCommand),
    Reservas(ReservaCommand),
}

#[derive(Args, Debug)]
struct ConferencistaCommand {
    #[command(subcommand)]
    command: ConferencistaSubcommand,
}

#[derive(Subcommand, Debug)]
enum ConferencistaSubcommand {
    List,
    Create(ConferencistaFields),
    Update {
        id: i64,
        #[command(flatten)]
        fields: ConferencistaFields,
    },
    Delete {
        id: i64,
    },
}

#[derive(Args, Debug, Clone)]
struct ConferencistaFields {
    #[arg(long)]
    nombre: String,
    #[arg(long)]
    apellido: String,
    #[arg(long, default_value = "")]
    email: String,
    #[arg(long, default_value = "")]
    telefono: String,
    #[arg(long, default_value = "")]
    especialidad: String,
}

impl From<ConferencistaFields> for ConferencistaForm {
    fn from(f: ConferencistaFields) -> Self {
        Self {
            nombre: f.nombre,
            apellido: f.apellido,
            email: f.email,
            telefono: f.telefono,
            especialidad: f.especialidad,
        }
    }
}

#[derive(Args, Debug)]
struct AuditorioCommand {
    #[command(subcommand)]
    command: AuditorioSubcommand,
}

#[derive(Subcommand, Debug)]
enum AuditorioSubcommand {
    List,
    Create(AuditorioFields),
    Update {
        id: i64,
        #[command(flatten)]
        fields: AuditorioFields,
    },
    Delete {
        id: i64,
    },
}

#[derive(Args, Debug, Clone)]
struct AuditorioFields {
    #[arg(long)]
    nombre: String,
    #[arg(long)]
    capacidad: String,
    #[arg(long, default_value = "")]
    ubicacion: String,
}

impl From<AuditorioFields> for AuditorioForm {
    fn from(f: AuditorioFields) -> Self {
        Self { nombre: f.nombre, capacidad: f.capacidad, ubicacion: f.ubicacion }
    }
}

#[derive(Args, Debug)]
struct ReservaCommand {
    #[command(subcommand)]
    command: ReservaSubcommand,
}

#[derive(Subcommand, Debug)]
enum ReservaSubcommand {
    List,
    Create {
        #[arg(long)]
        conferencista_id: i64,
        #[arg(long)]
        auditorio_id: i64,
        #[arg(long, help = "Date and time, e.g. 2026-05-10T09:00")]
        fecha: String,
        #[arg(long, default_value = "")]
        tema: String,
    },
    Delete {
        id: i64,
    },
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let http = HttpClient::new(
        &ApiConfig::with_base_url(&cli.base_url),
        ReqwestTransport::default(),
        FileTokenStore::new(&cli.token_file),
        TerminalNavigator,
    );

    match cli.command {
        Command::Login { email, clave } => run_login(&http, &email, &clave).await,
        Command::Logout => run_logout(&http).await,
        Command::Me => run_me(&http).await,
        Command::Dashboard => {
            require_session(&http)?;
            let counts = DashboardCounts::fetch(&http).await?;
            print_json(&serde_json::json!({
                "conferencistas": counts.conferencistas,
                "auditorios": counts.auditorios,
                "reservas": counts.reservas,
            }))
        }
        Command::Conferencistas(cmd) => {
            require_session(&http)?;
            run_conferencistas(&http, cmd.command).await
        }
        Command::Auditorios(cmd) => {
            require_session(&http)?;
            run_auditorios(&http, cmd.command).await
        }
        Command::Reservas(cmd) => {
            require_session(&http)?;
            run_reservas(&http, cmd.command).await
        }
    }
}

/// Session as far as the token file knows; the user is only known after
/// `GET /auth/me`.
fn stored_session(http: &CliClient) -> Session {
    Session { token: http.store().get(), user: None, loading: false }
}

/// Private-route check: a stored token is enough to try; the server decides.
fn require_session(http: &CliClient) -> Result<(), CliError> {
    match guard::evaluate(GuardKind::Private, &stored_session(http)) {
        GuardOutcome::Render => Ok(()),
        GuardOutcome::Loading | GuardOutcome::Redirect(_) => Err(CliError::NotSignedIn),
    }
}

async fn run_login(http: &CliClient, email: &str, clave: &str) -> Result<(), CliError> {
    match http.auth().login(email, clave).await? {
        LoginOutcome::Accepted(resp) => {
            let mut session = Session::anonymous();
            session.login(http.store(), resp.token, resp.user.clone());
            print_json(&resp.user)
        }
        LoginOutcome::Rejected { message } => Err(CliError::LoginRejected(message)),
    }
}

async fn run_logout(http: &CliClient) -> Result<(), CliError> {
    let mut session = stored_session(http);
    if session.token.is_some() {
        http.auth().logout().await;
    }
    session.logout(http.store());
    println!("ok");
    Ok(())
}

async fn run_me(http: &CliClient) -> Result<(), CliError> {
    match Session::restore(http).await.user {
        Some(user) => print_json(&user),
        None => Err(CliError::NotSignedIn),
    }
}

async fn run_conferencistas(http: &CliClient, command: ConferencistaSubcommand) -> Result<(), CliError> {
    let resource = http.resource::<Conferencista>();
    match command {
        ConferencistaSubcommand::List => print_json(&resource.list().await?),
        ConferencistaSubcommand::Create(fields) => {
            let draft = draft_from(ConferencistaForm::from(fields))?;
            print_json(&resource.create(&draft).await?)
        }
        ConferencistaSubcommand::Update { id, fields } => {
            let draft = draft_from(ConferencistaForm::from(fields))?;
            print_json(&resource.update(id, &draft).await?)
        }
        ConferencistaSubcommand::Delete { id } => {
            resource.delete(id).await?;
            print_deleted::<Conferencista>(id)
        }
    }
}

async fn run_auditorios(http: &CliClient, command: AuditorioSubcommand) -> Result<(), CliError> {
    let resource = http.resource::<Auditorio>();
    match command {
        AuditorioSubcommand::List => print_json(&resource.list().await?),
        AuditorioSubcommand::Create(fields) => {
            let draft = draft_from(AuditorioForm::from(fields))?;
            print_json(&resource.create(&draft).await?)
        }
        AuditorioSubcommand::Update { id, fields } => {
            let draft = draft_from(AuditorioForm::from(fields))?;
            print_json(&resource.update(id, &draft).await?)
        }
        AuditorioSubcommand::Delete { id } => {
            resource.delete(id).await?;
            print_deleted::<Auditorio>(id)
        }
    }
}

async fn run_reservas(http: &CliClient, command: ReservaSubcommand) -> Result<(), CliError> {
    let resource = http.resource::<Reserva>();
    match command {
        ReservaSubcommand::List => print_json(&resource.list().await?),
        ReservaSubcommand::Create { conferencista_id, auditorio_id, fecha, tema } => {
            let draft = draft_from(ReservaForm { conferencista_id, auditorio_id, fecha, tema })?;
            print_json(&resource.create(&draft).await?)
        }
        ReservaSubcommand::Delete { id } => {
            resource.delete(id).await?;
            print_deleted::<Reserva>(id)
        }
    }
}

fn draft_from<F: EntityForm>(form: F) -> Result<<F::Entity as Entity>::Draft, CliError> {
    form.to_draft().map_err(CliError::InvalidInput)
}

fn print_deleted<E: Entity>(id: i64) -> Result<(), CliError> {
    print_json(&serde_json::json!({ "deleted": format!("{}/{id}", E::PATH) }))
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
