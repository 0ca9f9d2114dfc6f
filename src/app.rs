use anyhow::Result;

use crate::{
    cli::{Cli, Command},
    domain, infra, sim, ui,
    usecases::{self, bootstrap},
};

pub fn run(cli: Cli) -> Result<()> {
    match cli.command_or_default() {
        Command::Run => {
            let bootstrapped = bootstrap::bootstrap(cli.config.as_deref())?;

            tracing::debug!(
                ui = ui::module_name(),
                domain = domain::module_name(),
                sim = sim::module_name(),
                usecases = usecases::module_name(),
                infra = infra::module_name(),
                log_dir = %bootstrapped.log.directory.display(),
                "module boundaries loaded"
            );

            let mut shell = bootstrap::compose_shell(&bootstrapped.context);
            ui::shell::start(
                &bootstrapped.context,
                shell.event_source.as_mut(),
                shell.orchestrator.as_mut(),
            )?;
        }
    }

    Ok(())
}
