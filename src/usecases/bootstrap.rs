use std::path::Path;

use anyhow::Result;

use crate::{
    domain::shell_state::ShellState,
    infra::{self, config::FileConfigAdapter, contracts::ConfigAdapter, logging::LogHandle},
    sim::fixtures,
    ui,
    usecases::{
        context::AppContext,
        contracts::{AppEventSource, Clock, ShellOrchestrator, SystemClock},
        shell::DefaultShellOrchestrator,
    },
};

pub struct Bootstrapped {
    pub context: AppContext,
    pub log: LogHandle,
}

pub fn bootstrap(config_path: Option<&Path>) -> Result<Bootstrapped> {
    let context = build_context(config_path)?;
    let log = infra::logging::init(&context.config.logging)?;

    Ok(Bootstrapped { context, log })
}

fn build_context(config_path: Option<&Path>) -> Result<AppContext> {
    let config_adapter = FileConfigAdapter::new(config_path);
    let config = config_adapter.load()?;

    Ok(AppContext::new(config))
}

pub struct Shell {
    pub event_source: Box<dyn AppEventSource>,
    pub orchestrator: Box<dyn ShellOrchestrator>,
}

/// Wires the demo fixtures and the configured pacing into a ready shell.
pub fn compose_shell(context: &AppContext) -> Shell {
    let clock = SystemClock;
    let now_ms = clock.now_ms() as i64;

    let state = ShellState::with_demo_data(
        context.config.theme.start_theme(),
        fixtures::demo_thread_list(),
        fixtures::seed_conversation(now_ms),
    );

    Shell {
        event_source: Box::new(ui::CrosstermEventSource::default()),
        orchestrator: Box::new(DefaultShellOrchestrator::new(
            state,
            context.config.sim.pacing(),
            clock,
        )),
    }
}
