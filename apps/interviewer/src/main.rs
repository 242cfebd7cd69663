use anyhow::Result;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use interviewer::analysis_client::{AnalysisService, HttpAnalysisService};
use interviewer::config::Config;
use interviewer::resume::ResumeFile;
use interviewer::session::{Session, SubmitRejected};
use interviewer::terminal::{parse_command, render, Command, TextEntry, HELP};
use interviewer::view::SessionView;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Logs go to stderr so they never interleave with the rendered screen.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting interviewer v{}", env!("CARGO_PKG_VERSION"));
    info!("Analysis endpoint: {}", config.analyze_url);

    let service = HttpAnalysisService::new(config.analyze_url.clone());
    let mut session = Session::new();
    let mut stdout = tokio::io::stdout();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut job_description_entry: Option<TextEntry> = None;

    write_out(&mut stdout, &format!("AI Interviewer\n{HELP}\n\n")).await?;

    while let Some(line) = lines.next_line().await? {
        if let Some(entry) = job_description_entry.as_mut() {
            if let Some(text) = entry.push(&line) {
                session.edit_job_description(text);
                job_description_entry = None;
                write_out(&mut stdout, "Job description updated.\n").await?;
            }
            continue;
        }

        match parse_command(&line) {
            Command::SelectResume(path) => match ResumeFile::load(&path).await {
                Ok(resume) => {
                    session.select_resume(resume);
                    write_frame(&mut stdout, &session).await?;
                }
                Err(e) => {
                    warn!("resume selection failed: {e}");
                    write_out(&mut stdout, &format!("{e}\n")).await?;
                }
            },
            Command::BeginJobDescription => {
                job_description_entry = Some(TextEntry::default());
                write_out(
                    &mut stdout,
                    "Paste the job description, then a line with a single '.':\n",
                )
                .await?;
            }
            Command::SetJobDescription(text) => {
                session.edit_job_description(text);
                write_out(&mut stdout, "Job description updated.\n").await?;
            }
            Command::Submit => match session.begin_submission() {
                Ok(request) => {
                    write_frame(&mut stdout, &session).await?;
                    let result = service.analyze(&request).await;
                    session.settle(result);
                    if let Some(alert) = session.take_alert() {
                        write_out(&mut stdout, &format!("*** {alert} ***\n")).await?;
                    }
                    write_frame(&mut stdout, &session).await?;
                }
                Err(SubmitRejected::Invalid(_)) => write_frame(&mut stdout, &session).await?,
                Err(SubmitRejected::InFlight) => {
                    write_out(&mut stdout, "A request is already in progress.\n").await?;
                }
            },
            Command::Next => {
                if session.next_question() {
                    write_frame(&mut stdout, &session).await?;
                } else {
                    write_out(&mut stdout, "No further questions.\n").await?;
                }
            }
            Command::Show => write_frame(&mut stdout, &session).await?,
            Command::Help => write_out(&mut stdout, &format!("{HELP}\n")).await?,
            Command::Quit => break,
            Command::Unknown(input) if input.is_empty() => {}
            Command::Unknown(input) => {
                write_out(&mut stdout, &format!("Unknown command '{input}'. Type 'help'.\n"))
                    .await?;
            }
        }
    }

    info!("Session ended");
    Ok(())
}

async fn write_frame(stdout: &mut tokio::io::Stdout, session: &Session) -> Result<()> {
    write_out(stdout, &render(&SessionView::of(session))).await
}

async fn write_out(stdout: &mut tokio::io::Stdout, text: &str) -> Result<()> {
    stdout.write_all(text.as_bytes()).await?;
    stdout.flush().await?;
    Ok(())
}
