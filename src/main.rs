// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Lectern-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Lectern and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Lectern CLI entrypoint.
//!
//! `lectern render` and `lectern validate` work on local JSON files (or stdin). `topic`, `modules`,
//! `me` and `quiz` talk to the course platform API. `view` opens the interactive viewer and `mcp`
//! serves the content tools over stdio.

use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{anyhow, bail, Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};

use lectern::client::ApiClient;
use lectern::config::ApiConfig;
use lectern::format::{export_content, parse_topic_document};
use lectern::logging::{self, LogTarget};
use lectern::mcp::LecternMcp;
use lectern::model::{QuestionKind, TopicDocument, TopicId};
use lectern::query::{outline, validate_tree};
use lectern::render::{render_content_reported, render_html_document, render_text, TextOptions};

#[derive(Debug, Parser)]
#[command(
    name = "lectern",
    about = "Render, inspect and browse course topic content",
    version
)]
struct Cli {
    /// Raise log verbosity (-v info, -vv debug).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Write logs to this file instead of stderr.
    #[arg(long, value_name = "PATH", global = true)]
    log_file: Option<PathBuf>,

    /// Override the API base url.
    #[arg(long, value_name = "URL", global = true)]
    api_url: Option<String>,

    /// Override the bearer token used for authenticated endpoints.
    #[arg(long, value_name = "TOKEN", global = true)]
    token: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Render a content tree or topic JSON file ("-" reads stdin).
    Render(RenderArgs),

    /// Check a content tree for duplicate ids, dangling links and unknown node kinds.
    Validate {
        #[arg(value_name = "FILE")]
        input: String,
    },

    /// Fetch a topic from the API and render it.
    Topic {
        id: String,
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Open the interactive viewer on a file, a fetched topic, or the built-in demo.
    View {
        #[arg(value_name = "FILE", conflicts_with = "topic")]
        input: Option<String>,
        #[arg(long, value_name = "ID")]
        topic: Option<String>,
    },

    /// List the modules linked to the current account.
    Modules,

    /// Show the current user profile.
    Me,

    /// Generate the quiz for a topic and print its questions.
    Quiz { id: String },

    /// Serve the content tools over MCP (stdio).
    Mcp,
}

#[derive(Debug, Args)]
struct RenderArgs {
    #[arg(value_name = "FILE")]
    input: String,
    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Debug, Args)]
struct OutputArgs {
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Width a centered root is centered within (capped at 1024 columns).
    #[arg(long, default_value_t = 80)]
    width: usize,

    /// Prefix each leaf line with its node id.
    #[arg(long)]
    prefix_ids: bool,

    /// Append a footer listing node links.
    #[arg(long)]
    show_links: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Html,
    Json,
    Outline,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let log_target = match (&cli.log_file, &cli.command) {
        (Some(path), _) => LogTarget::File(path.clone()),
        // Writing to stderr would tear through the alternate screen.
        (None, Commands::View { .. }) => LogTarget::Off,
        (None, _) => LogTarget::Stderr,
    };
    if let Err(err) = logging::init(&log_target, cli.verbose) {
        eprintln!("lectern: {err}");
    }

    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("lectern: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    match cli.command {
        Commands::Render(args) => {
            let topic = read_topic(&args.input)?;
            print_topic(&topic, &args.output)?;
        }
        Commands::Validate { input } => {
            let topic = read_topic(&input)?;
            let Some(root) = topic.content.as_ref() else {
                println!("no content");
                return Ok(ExitCode::SUCCESS);
            };
            let report = validate_tree(root);
            for issue in &report.issues {
                println!("{:?}: {issue}", issue.severity());
            }
            if !report.is_ok() {
                return Ok(ExitCode::from(1));
            }
            println!("ok");
        }
        Commands::Topic { id, output } => {
            let client = api_client(cli.api_url.as_deref(), cli.token)?;
            let topic = client.fetch_topic(&topic_id(&id)?)?;
            print_topic(&topic, &output)?;
        }
        Commands::View { input, topic } => {
            let document = match (input, topic) {
                (Some(input), _) => read_topic(&input)?,
                (None, Some(id)) => {
                    let client = api_client(cli.api_url.as_deref(), cli.token)?;
                    client.fetch_topic(&topic_id(&id)?)?
                }
                (None, None) => lectern::tui::demo_topic(),
            };
            lectern::tui::run_with_topic(document).map_err(|err| anyhow!("viewer: {err}"))?;
        }
        Commands::Modules => {
            let client = api_client(cli.api_url.as_deref(), cli.token)?;
            let modules = client.linked_modules()?;
            if modules.is_empty() {
                println!("no linked modules");
            }
            for module in modules {
                println!(
                    "{}  {}  [{}, {}h]",
                    module.id,
                    module.title,
                    module.difficulty().label(),
                    module.hours
                );
            }
        }
        Commands::Me => {
            let client = api_client(cli.api_url.as_deref(), cli.token)?;
            let user = client.current_user()?;
            let role = user.role.as_deref().unwrap_or("-");
            println!("{} <{}> role={role}", user.username, user.email);
        }
        Commands::Quiz { id } => {
            let client = api_client(cli.api_url.as_deref(), cli.token)?;
            let quiz = client.generate_quiz(&topic_id(&id)?)?;
            for (idx, question) in quiz.questions.iter().enumerate() {
                let kind = match question.kind() {
                    QuestionKind::SingleChoice => "single",
                    QuestionKind::MultipleChoice => "multiple",
                    QuestionKind::Matching => "matching",
                };
                println!("{}. {} ({kind})", idx + 1, question.title);
                for variant in &question.variants {
                    println!("   - {variant}");
                }
            }
        }
        Commands::Mcp => {
            let config = resolve_config(cli.api_url.as_deref(), cli.token)?;
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()?;
            runtime.block_on(LecternMcp::new(config).serve_stdio())?;
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn resolve_config(api_url: Option<&str>, token: Option<String>) -> Result<ApiConfig> {
    let mut config = ApiConfig::from_env()?;
    if let Some(url) = api_url {
        config = config.with_base_url(url)?;
    }
    if let Some(token) = token {
        config = config.with_access_token(token);
    }
    tracing::debug!(?config, "resolved api config");
    Ok(config)
}

fn api_client(api_url: Option<&str>, token: Option<String>) -> Result<ApiClient> {
    Ok(ApiClient::new(resolve_config(api_url, token)?)?)
}

fn topic_id(raw: &str) -> Result<TopicId> {
    TopicId::new(raw).with_context(|| format!("invalid topic id `{raw}`"))
}

fn read_topic(input: &str) -> Result<TopicDocument> {
    let raw = if input == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read stdin")?;
        buf
    } else {
        let path = Path::new(input);
        std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?
    };
    parse_topic_document(&raw).with_context(|| format!("failed to decode {input}"))
}

fn print_topic(topic: &TopicDocument, output: &OutputArgs) -> Result<()> {
    let mut stdout = io::stdout().lock();

    if output.format == OutputFormat::Html {
        let report = topic.content.as_ref().map(render_content_reported);
        if let Some(report) = &report {
            report.log_unknown();
        }
        let html = render_html_document(topic, report.as_ref().map(|report| &report.element));
        writeln!(stdout, "{html}")?;
        return Ok(());
    }

    let Some(root) = topic.content.as_ref() else {
        if output.format == OutputFormat::Json {
            writeln!(stdout, "null")?;
            return Ok(());
        }
        bail!("topic `{}` has no content", topic.display_title());
    };

    match output.format {
        OutputFormat::Text => {
            let report = render_content_reported(root);
            report.log_unknown();
            let options = TextOptions {
                width: output.width,
                prefix_ids: output.prefix_ids,
                show_links: output.show_links,
            };
            writeln!(stdout, "{}", render_text(&report.element, options))?;
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&export_content(root))?;
            writeln!(stdout, "{json}")?;
        }
        OutputFormat::Outline => {
            for entry in outline(root) {
                let indent = "  ".repeat(entry.depth);
                writeln!(stdout, "{indent}{}  {}", entry.id, entry.label)?;
            }
        }
        OutputFormat::Html => {}
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::{Cli, Commands, OutputFormat};

    #[test]
    fn parses_render_with_options() {
        let cli = Cli::try_parse_from([
            "lectern",
            "render",
            "topic.json",
            "--format",
            "outline",
            "--width",
            "40",
            "--prefix-ids",
        ])
        .expect("parse");
        let Commands::Render(args) = cli.command else {
            panic!("expected render");
        };
        assert_eq!(args.input, "topic.json");
        assert_eq!(args.output.format, OutputFormat::Outline);
        assert_eq!(args.output.width, 40);
        assert!(args.output.prefix_ids);
        assert!(!args.output.show_links);
    }

    #[test]
    fn global_flags_work_after_subcommand() {
        let cli = Cli::try_parse_from(["lectern", "topic", "42", "-vv", "--log-file", "out.log"])
            .expect("parse");
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.log_file.as_deref().and_then(|p| p.to_str()), Some("out.log"));
        assert!(matches!(cli.command, Commands::Topic { ref id, .. } if id == "42"));
    }

    #[test]
    fn view_defaults_to_demo() {
        let cli = Cli::try_parse_from(["lectern", "view"]).expect("parse");
        assert!(matches!(
            cli.command,
            Commands::View {
                input: None,
                topic: None
            }
        ));
    }

    #[test]
    fn view_rejects_file_and_topic_together() {
        Cli::try_parse_from(["lectern", "view", "a.json", "--topic", "7"]).unwrap_err();
    }

    #[test]
    fn width_help_describes_centering() {
        let mut command = Cli::command();
        let render = command
            .find_subcommand_mut("render")
            .expect("render subcommand");
        let help = render.render_help().to_string();
        assert!(help.contains("Width a centered root is centered within"));
        assert!(!help.contains("Minimum width"));
    }

    #[test]
    fn rejects_unknown_format() {
        Cli::try_parse_from(["lectern", "render", "-", "--format", "svg"]).unwrap_err();
    }
}
