use colored::Colorize;
use crate::commands::render;
use crate::food::dish::CopyTarget;
use crate::food::search::{SearchOrchestrator, SearchOutcome};
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Arc;
use std::time::Duration;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Runs a search and prints details as soon as they arrive, then the images.
pub async fn handle_search(orchestrator: &Arc<SearchOrchestrator>, query: &str) -> Result<(), String> {
    let ticket = match orchestrator.start(query) {
        Ok(ticket) => ticket,
        Err(_) => {
            println!("Please specify a dish to search for.");
            return Ok(());
        }
    };

    let strings = orchestrator.language().strings();
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner:.red} {msg}")
            .map_err(|e| e.to_string())?,
    );
    spinner.set_message(strings.searching);
    spinner.enable_steady_tick(Duration::from_millis(80));

    let task = tokio::spawn({
        let orchestrator = orchestrator.clone();
        async move { orchestrator.run(ticket).await }
    });

    let mut details_shown = false;
    let mut interval = tokio::time::interval(POLL_INTERVAL);
    while !task.is_finished() {
        interval.tick().await;
        let state = orchestrator.snapshot();
        if !details_shown {
            if let Some(dish) = &state.dish {
                let palette = render::Palette::for_theme(state.theme);
                spinner.suspend(|| render::print_dish(dish, strings, &palette));
                spinner.set_message(strings.loading_images);
                details_shown = true;
            }
        }
    }

    let outcome = task.await.map_err(|e| format!("Search task failed: {}", e))?;
    spinner.finish_and_clear();

    let state = orchestrator.snapshot();
    match outcome {
        SearchOutcome::Superseded => println!("{}", "Search was replaced by a newer one.".yellow()),
        _ if details_shown => render::print_after_details(&state),
        _ => render::print_state(&state),
    }
    Ok(())
}

pub fn handle_copy(orchestrator: &SearchOrchestrator, target: &str) -> Result<(), String> {
    let target: CopyTarget = target.parse()?;
    let strings = orchestrator.language().strings();

    match orchestrator.copy_text(target) {
        Some(text) => {
            println!("{}", text);
            println!("📋 {}", strings.copied.green());
            Ok(())
        }
        None => Err("Nothing to copy yet. Search for a dish first.".to_string()),
    }
}
