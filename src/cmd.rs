//! Command handlers behind the CLI

use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use console::{style, Term};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::{
    api::{HttpRecommendationApi, RecommendationApi},
    client::{QueryClient, SubmitOutcome},
    config::Config,
    input::{self, Command, FieldAction, QueryField, EXAMPLE_QUERIES},
    models::parse_top_k,
    page::Page,
    render::{self, CaptureSurface, OutputFormat, TerminalSurface},
};

fn http_api(config: &Config) -> anyhow::Result<Arc<dyn RecommendationApi>> {
    let api: Arc<dyn RecommendationApi> = Arc::new(
        HttpRecommendationApi::from_config(config).context("Failed to build HTTP client")?,
    );
    Ok(api)
}

/// Runs one query and writes the result in `format`.
///
/// Returns whether the service produced a usable answer.
pub async fn cmd_query(
    config: &Config,
    text: &str,
    top_k: i64,
    format: OutputFormat,
    output: Option<&Path>,
) -> anyhow::Result<bool> {
    let api = http_api(config)?;

    if format == OutputFormat::Text {
        let client = QueryClient::new(api, Page::new(Arc::new(TerminalSurface::new())));
        let outcome = client.submit_query(text, top_k).await;
        return Ok(matches!(
            outcome,
            SubmitOutcome::Rendered(_) | SubmitOutcome::Empty
        ));
    }

    let surface = Arc::new(CaptureSurface::default());
    let client = QueryClient::new(api, Page::new(surface.clone()));
    let outcome = client.submit_query(text, top_k).await;

    match outcome {
        SubmitOutcome::Rendered(_) | SubmitOutcome::Empty => {
            let cards = surface.cards();
            let rendered = match format {
                OutputFormat::Html => render::html::render_document(text.trim(), &cards),
                _ => render::render_json(text.trim(), &cards)?,
            };
            write_output(&rendered, output)?;
            if let Some(message) = surface.last_error() {
                eprintln!("{}", message);
            }
            Ok(true)
        }
        _ => {
            if let Some(message) = surface.last_error() {
                eprintln!("{}", style(message).red());
            }
            Ok(false)
        }
    }
}

fn write_output(rendered: &str, output: Option<&Path>) -> anyhow::Result<()> {
    match output {
        Some(path) => std::fs::write(path, rendered)
            .with_context(|| format!("Failed to write {}", path.display())),
        None => {
            println!("{}", rendered);
            Ok(())
        }
    }
}

/// Checks the service health endpoint
pub async fn cmd_health(config: &Config) -> anyhow::Result<bool> {
    let api = http_api(config)?;
    let base_url = api.base_url();

    match api.health().await {
        Ok(health) => {
            let label = if health.is_healthy() {
                style(health.status.clone()).green()
            } else {
                style(health.status.clone()).yellow()
            };
            println!("{} {}", base_url, label);
            if let Some(service) = &health.service {
                println!("  service:      {}", service);
            }
            if let Some(architecture) = &health.architecture {
                println!("  architecture: {}", architecture);
            }
            Ok(health.is_healthy())
        }
        Err(e) => {
            eprintln!("{}", style(e.user_message(&base_url)).red());
            Ok(false)
        }
    }
}

/// Runs the interactive prompt on stdin
pub async fn cmd_interactive(config: &Config, top_k: i64) -> anyhow::Result<()> {
    let api = http_api(config)?;
    let client = QueryClient::new(api, Page::new(Arc::new(TerminalSurface::new())));
    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    run_prompt(&client, stdin, top_k, &Term::stderr()).await
}

const HELP: &str = "Type a query and press Enter to submit. End a line with \\ to continue it.
Commands:
  :k N          set the number of recommendations (1-20)
  :examples     list example queries
  :example N    submit example N
  :help         show this help
  :quit         exit";

/// Reads queries and commands from `reader` until EOF or `:quit`.
///
/// `prompt` receives the prompt and command output; cards and errors go
/// through the client's page.
pub async fn run_prompt<R>(
    client: &QueryClient,
    reader: R,
    initial_top_k: i64,
    prompt: &Term,
) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = reader.lines();
    let mut field = QueryField::default();
    let mut top_k = initial_top_k;

    let _ = prompt.write_line(&format!(
        "{} (top {}, :help for commands)",
        style("Assessment recommendations").bold(),
        top_k
    ));

    loop {
        let marker = if field.is_empty() { "query>" } else { "  ...>" };
        let _ = prompt.write_str(&format!("{} ", style(marker).cyan()));

        let Some(line) = lines.next_line().await.context("Failed to read input")? else {
            break;
        };

        if field.is_empty() {
            if let Some(command) = input::parse_command(&line) {
                match command {
                    Command::Quit => break,
                    Command::Help => {
                        let _ = prompt.write_line(HELP);
                    }
                    Command::ListExamples => {
                        for (index, example) in EXAMPLE_QUERIES.iter().enumerate() {
                            let _ = prompt.write_line(&format!("  {}. {}", index + 1, example));
                        }
                    }
                    Command::SetTopK(raw) => match parse_top_k(&raw) {
                        Ok(value) => {
                            top_k = value;
                            let _ = prompt.write_line(&format!("top_k = {}", top_k));
                        }
                        Err(e) => client.page().show_error(e.to_string()).await,
                    },
                    Command::Example(position) => match input::example(position) {
                        Some(example) => {
                            field.set(example);
                            let text = field.take();
                            client.submit_query(&text, top_k).await;
                        }
                        None => {
                            let _ = prompt.write_line(&format!(
                                "No example {} (1-{})",
                                position,
                                EXAMPLE_QUERIES.len()
                            ));
                        }
                    },
                }
                continue;
            }
        }

        if field.feed_line(&line) == FieldAction::Submit {
            let text = field.take();
            let outcome = client.submit_query(&text, top_k).await;
            tracing::debug!(?outcome, "Submission finished");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockRecommendationApi;
    use crate::models::{RecommendResponse, Recommendation, TestType};

    fn recommendation(name: &str) -> Recommendation {
        Recommendation {
            assessment_name: name.to_string(),
            description: None,
            duration: 10.0,
            test_type: TestType::One("Simulations".to_string()),
            adaptive_support: "No".to_string(),
            remote_support: "Yes".to_string(),
            assessment_url: "https://example.com".to_string(),
            relevance_score: 0.5,
        }
    }

    fn client_with(mock: MockRecommendationApi) -> (QueryClient, Arc<CaptureSurface>) {
        let surface = Arc::new(CaptureSurface::default());
        let client = QueryClient::new(Arc::new(mock), Page::new(surface.clone()));
        (client, surface)
    }

    #[tokio::test]
    async fn test_prompt_submits_each_query_with_current_top_k() {
        let mut mock = MockRecommendationApi::new();
        mock.expect_base_url().return_const("http://mock.local".to_string());
        let mut seen = Vec::new();
        mock.expect_recommend().times(2).returning(move |query, _| {
            seen.push((query.text().to_string(), query.top_k()));
            match seen.len() {
                1 => assert_eq!(seen[0], ("Java developer\nwith SQL".to_string(), 10)),
                _ => assert_eq!(seen[1], ("Python analyst".to_string(), 3)),
            }
            Ok(RecommendResponse {
                recommendations: Some(vec![recommendation("a")]),
                ..Default::default()
            })
        });

        let (client, surface) = client_with(mock);
        let script = "Java developer\\\nwith SQL\n:k 3\nPython analyst\n:quit\nnever sent\n";
        run_prompt(&client, script.as_bytes(), 10, &Term::stderr())
            .await
            .unwrap();

        assert_eq!(surface.render_count(), 2);
    }

    #[tokio::test]
    async fn test_prompt_reports_bad_top_k_without_sending() {
        let mut mock = MockRecommendationApi::new();
        mock.expect_base_url().return_const("http://mock.local".to_string());
        mock.expect_recommend().times(0);

        let (client, surface) = client_with(mock);
        let script = ":k lots\n:k 50\nrust\n";
        run_prompt(&client, script.as_bytes(), 10, &Term::stderr())
            .await
            .unwrap();

        assert_eq!(
            surface.errors(),
            vec![
                "Number of recommendations must be between 1 and 20".to_string(),
                "Number of recommendations must be between 1 and 20".to_string(),
            ]
        );
    }

    #[tokio::test]
    async fn test_prompt_example_command() {
        let mut mock = MockRecommendationApi::new();
        mock.expect_base_url().return_const("http://mock.local".to_string());
        mock.expect_recommend()
            .withf(|query, _| query.text() == EXAMPLE_QUERIES[0])
            .times(1)
            .returning(|_, _| Ok(RecommendResponse::default()));

        let (client, surface) = client_with(mock);
        run_prompt(&client, ":example 1\n:example 99\n".as_bytes(), 5, &Term::stderr())
            .await
            .unwrap();

        assert_eq!(surface.last_error().as_deref(), Some("No recommendations found"));
    }
}
