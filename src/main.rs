use anyhow::{Context, anyhow};
use shotlist::config::Config;
use shotlist::core::cli::CliPaths;
use shotlist::core::context::AppContext;
use shotlist::logging::LogTarget;
use shotlist::prompter::flows::main_flow::MainFlow;
use shotlist::prompter::prompter::Prompter;

fn startup() -> anyhow::Result<AppContext> {
    let paths = CliPaths::from_env().map_err(|msg| anyhow!(msg))?;
    if paths.init_config && !paths.config_path.exists() {
        Config::write_default(&paths.config_path).with_context(|| {
            format!("could not create {}", paths.config_path.display())
        })?;
    }
    let ctx = AppContext::new_with_paths(paths.config_path, paths.shoots_dir, paths.logs_dir)
        .context("startup failed")?;
    Ok(ctx)
}

fn main() {
    let mut ctx = match startup() {
        Ok(ctx) => ctx,
        Err(err) => {
            eprintln!("{err:#}");
            std::process::exit(1);
        }
    };
    let flow = MainFlow::new(&mut ctx);

    if let Err(err) = Prompter::new().run(flow) {
        ctx.logger.error(format!("{err}"), LogTarget::ConsoleAndFile);
    }
}
