// Apply loop - reads filter edits from stdin and clicks "apply"
use crate::application::dashboard_service::DashboardService;
use crate::application::surface::Document;
use crate::domain::filters::{AREA_FILTER, MONTH_FILTER, YEAR_FILTER};
use crate::domain::panel::{APPLY_BUTTON, AVG_AGE, DATA_SOURCE, MAP_COUNT, TOTAL_CRIMES};
use crate::presentation::memory_document::MemoryDocument;
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    /// Select-control edits followed by a click on the apply button
    Apply(Vec<(&'static str, String)>),
    Quit,
}

/// Parse `area=Harbor year=2023 month=` style lines. An empty value clears a filter.
/// Values are percent-decoded, so `area=77th%20Street` selects "77th Street".
pub fn parse_command(line: &str) -> anyhow::Result<Command> {
    let line = line.trim();
    if line == "quit" || line == "exit" {
        return Ok(Command::Quit);
    }

    let mut edits = Vec::new();
    for token in line.split_whitespace() {
        if token == "apply" {
            continue;
        }
        let (key, value) = token
            .split_once('=')
            .ok_or_else(|| anyhow::anyhow!("expected key=value, got '{}'", token))?;
        let control = match key {
            "area" => AREA_FILTER,
            "year" => YEAR_FILTER,
            "month" => MONTH_FILTER,
            other => anyhow::bail!("unknown filter '{}'", other),
        };
        let value = urlencoding::decode(value)
            .map_err(|e| anyhow::anyhow!("bad encoding in '{}': {}", token, e))?;
        edits.push((control, value.into_owned()));
    }
    Ok(Command::Apply(edits))
}

pub async fn run_apply_loop<R>(
    service: Arc<DashboardService>,
    document: Arc<MemoryDocument>,
    input: R,
) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        let edits = match parse_command(&line) {
            Ok(Command::Quit) => break,
            Ok(Command::Apply(edits)) => edits,
            Err(e) => {
                tracing::warn!("Ignoring input: {}", e);
                continue;
            }
        };

        for (control, value) in edits {
            document.set_select_value(control, &value);
        }

        if !document.has_element(APPLY_BUTTON) {
            tracing::warn!("No apply button in document; filters not applied");
            continue;
        }
        service.refresh_all().await;
        log_figures(&service, &document);
    }
    Ok(())
}

fn log_figures(service: &DashboardService, document: &MemoryDocument) {
    let text = |id: &str| document.text(id).unwrap_or_default();
    tracing::info!(
        "Total crimes: {} | Avg victim age: {} | {} ({} on map) | source: {}",
        text(TOTAL_CRIMES),
        text(AVG_AGE),
        text(MAP_COUNT),
        service.marker_count(),
        text(DATA_SOURCE)
    );
}
