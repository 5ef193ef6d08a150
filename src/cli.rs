// src/cli.rs
use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing::info;

use crate::config::AppConfig;
use crate::core::{LocalStore, ServiceClient};
use crate::extraction::{JobPostingExtractor, PageFetcher};
use crate::mail::attachment::describe_attachment;
use crate::mail::{MailLauncher, SystemOpener};
use crate::notifier::{ConsoleNotifier, Notice, Notifier};
use crate::panel::{PanelController, PanelState, RestoredFrom};
use crate::profile::{ProfileStore, SaveOutcome};
use crate::types::{EmailDraft, PersonalInfo};

#[derive(Parser)]
#[command(name = "jobmail")]
#[command(about = "Draft internship cold emails from job postings", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Pull job posting text out of a page (URL or local HTML file) and keep it for `generate`
    Extract {
        /// Page URL or path to a saved HTML file
        source: String,

        /// Text you selected on the page, used when no job description element is found
        #[arg(long)]
        selection: Option<String>,
    },

    /// Generate a draft from the job posting and optionally open it in a mail client
    Generate(GenerateArgs),

    /// Open a saved draft (`Subject: ...` then the body) without regenerating
    Compose {
        /// File holding the raw draft
        draft_file: PathBuf,

        /// Recipient address
        #[arg(long)]
        to: Option<String>,

        #[arg(long, value_enum, default_value = "web")]
        open: OpenTarget,
    },

    /// Forget the remembered job posting
    Clear,

    /// Show or edit your personal info
    Profile {
        #[command(subcommand)]
        command: ProfileCommand,
    },

    /// Check an attachment and print what to attach by hand
    Attach { path: PathBuf },

    /// Check that the backend is reachable
    Health,
}

#[derive(Args)]
pub struct GenerateArgs {
    /// Job posting text; defaults to the last extracted or typed posting
    #[arg(long, conflicts_with = "job_file")]
    pub job: Option<String>,

    /// Read the job posting from a file
    #[arg(long)]
    pub job_file: Option<PathBuf>,

    /// Recipient address
    #[arg(long)]
    pub to: Option<String>,

    /// Extra instructions for the writer
    #[arg(long)]
    pub context: Option<String>,

    /// Previous draft or modification notes, for regeneration
    #[arg(long, conflicts_with = "existing_file")]
    pub existing: Option<String>,

    /// Read the previous draft from a file
    #[arg(long)]
    pub existing_file: Option<PathBuf>,

    /// Open the draft once generated
    #[arg(long, value_enum)]
    pub open: Option<OpenTarget>,

    /// Do not attach your personal info
    #[arg(long)]
    pub no_profile: bool,
}

#[derive(Subcommand)]
pub enum ProfileCommand {
    /// Print the current profile as JSON
    Show,
    /// Update individual fields, keeping the rest
    Set(ProfileFields),
    /// Replace the profile with a JSON file
    Import { json_file: PathBuf },
}

#[derive(Args)]
pub struct ProfileFields {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub university: Option<String>,
    #[arg(long)]
    pub degree: Option<String>,
    /// Comma separated
    #[arg(long)]
    pub skills: Option<String>,
    #[arg(long)]
    pub linkedin: Option<String>,
    #[arg(long)]
    pub github: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
}

impl ProfileFields {
    fn apply(self, info: &mut PersonalInfo) {
        let ProfileFields {
            name,
            university,
            degree,
            skills,
            linkedin,
            github,
            email,
        } = self;

        if let Some(v) = name {
            info.name = v;
        }
        if let Some(v) = university {
            info.university = v;
        }
        if let Some(v) = degree {
            info.degree = v;
        }
        if let Some(v) = skills {
            info.skills = PersonalInfo::parse_skills(&v);
        }
        if let Some(v) = linkedin {
            info.linkedin = v;
        }
        if let Some(v) = github {
            info.github = v;
        }
        if let Some(v) = email {
            info.email = v;
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OpenTarget {
    /// Webmail compose deep link, falling back to mailto
    Web,
    /// Local mail client via mailto
    Mail,
}

pub async fn handle_command(cli: Cli, config: AppConfig) -> Result<()> {
    let notifier = ConsoleNotifier;
    let store = LocalStore::new(config.storage_path.clone());
    info!("Using storage at {}", store.path().display());

    match cli.command {
        Command::Extract { source, selection } => {
            let html = PageFetcher::new()?.load(&source).await?;
            let extractor = JobPostingExtractor::new()?;
            if let Some(extraction) = extractor
                .extract_and_store(&html, selection.as_deref(), &store, &notifier)
                .await?
            {
                println!("{}", extraction.text);
            }
        }

        Command::Generate(args) => {
            let backend = ServiceClient::new(config.backend_url.clone(), config.timeout_seconds)?;
            handle_generate(args, &config, &backend, &store, &notifier).await?;
        }

        Command::Compose {
            draft_file,
            to,
            open,
        } => {
            let raw = tokio::fs::read_to_string(&draft_file)
                .await
                .with_context(|| format!("Failed to read draft: {}", draft_file.display()))?;
            let draft = EmailDraft::from_raw_text(&raw);
            let opener = SystemOpener;
            let launcher = MailLauncher::new(&opener, &notifier, config.compose_url.clone());
            match open {
                OpenTarget::Web => launcher.open_web(&draft, to.as_deref()).await,
                OpenTarget::Mail => launcher.open_mail_client(&draft, to.as_deref()),
            };
        }

        Command::Clear => {
            let backend = ServiceClient::new(config.backend_url.clone(), config.timeout_seconds)?;
            let mut panel = PanelController::new(&backend, &notifier, &store);
            panel.clear().await?;
            notifier.notify(Notice::info("Cleared."));
        }

        Command::Profile { command } => {
            let backend = ServiceClient::new(config.backend_url.clone(), config.timeout_seconds)?;
            let profiles = ProfileStore::new(&store, &backend);
            match command {
                ProfileCommand::Show => {
                    let info = profiles.load().await;
                    println!("{}", serde_json::to_string_pretty(&info)?);
                }
                ProfileCommand::Set(fields) => {
                    let mut info = profiles.load().await;
                    fields.apply(&mut info);
                    report_save(&notifier, profiles.save(&info).await?);
                }
                ProfileCommand::Import { json_file } => {
                    let content = tokio::fs::read_to_string(&json_file)
                        .await
                        .with_context(|| format!("Failed to read {}", json_file.display()))?;
                    let info: PersonalInfo = serde_json::from_str(&content)
                        .with_context(|| format!("Invalid personal info in {}", json_file.display()))?;
                    report_save(&notifier, profiles.save(&info).await?);
                }
            }
        }

        Command::Attach { path } => match describe_attachment(&path).await {
            Ok(message) => notifier.notify(Notice::info(message)),
            Err(e) => notifier.notify(Notice::error(format!("{:#}", e))),
        },

        Command::Health => {
            let backend = ServiceClient::new(config.backend_url.clone(), config.timeout_seconds)?;
            let health = backend.health().await?;
            println!(
                "{} ({}, {})",
                health.status,
                health.agent.as_deref().unwrap_or("unknown agent"),
                health.model.as_deref().unwrap_or("unknown model")
            );
        }
    }

    Ok(())
}

async fn handle_generate(
    args: GenerateArgs,
    config: &AppConfig,
    backend: &ServiceClient,
    store: &LocalStore,
    notifier: &dyn Notifier,
) -> Result<()> {
    let mut panel = PanelController::new(backend, notifier, store);

    let job = match (args.job, args.job_file) {
        (Some(text), _) => Some(text),
        (None, Some(path)) => Some(
            tokio::fs::read_to_string(&path)
                .await
                .with_context(|| format!("Failed to read job posting: {}", path.display()))?,
        ),
        (None, None) => None,
    };
    match job {
        Some(text) => panel.set_job_posting(text).await?,
        None => {
            if let Some(from) = panel.restore_job_posting().await? {
                let label = match from {
                    RestoredFrom::Extraction => "last extraction",
                    RestoredFrom::SavedDraft => "saved job posting",
                };
                notifier.notify(Notice::info(format!("Using the {}.", label)));
            }
        }
    }

    if let Some(to) = args.to {
        panel.set_recipient(to);
    }
    if let Some(context) = args.context {
        panel.set_additional_context(context);
    }
    let existing = match (args.existing, args.existing_file) {
        (Some(text), _) => Some(text),
        (None, Some(path)) => Some(
            tokio::fs::read_to_string(&path)
                .await
                .with_context(|| format!("Failed to read existing email: {}", path.display()))?,
        ),
        (None, None) => None,
    };
    if let Some(existing) = existing {
        panel.set_existing_email(existing);
    }

    if !args.no_profile {
        panel.set_profile(ProfileStore::new(store, backend).load().await);
    }

    let state = panel.submit().await?;
    println!("{}", panel.rendered_output());

    if state == PanelState::Failed {
        anyhow::bail!("Email generation {}", state);
    }

    if let Some(target) = args.open {
        let opener = SystemOpener;
        let launcher = MailLauncher::new(&opener, notifier, config.compose_url.clone());
        match target {
            OpenTarget::Web => panel.launch_web(&launcher).await?,
            OpenTarget::Mail => panel.launch_mail_client(&launcher)?,
        };
    }

    Ok(())
}

fn report_save(notifier: &dyn Notifier, outcome: SaveOutcome) {
    notifier.notify(outcome.notice());
}
