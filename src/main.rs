mod app;
mod cli;
mod dialogs;
mod error;
mod event;
mod logging;
mod model;
mod storage;
mod theme;
mod ui;
mod ui_state;

use std::io;
use std::panic;

use clap::Parser;
use ratatui::DefaultTerminal;
use tracing::{info, warn};

use app::App;
use cli::{Cli, Commands};
use storage::config::{self, Config};

/// 启动 TUI 界面
fn run_tui(config: Config) -> io::Result<()> {
    let config_path = match config::config_path() {
        Ok(path) => Some(path),
        Err(e) => {
            warn!("config will not be saved: {}", e);
            None
        }
    };

    let mut app = App::new(config, config_path);
    info!(filter = app.tasks.filter(), theme = app.ui.theme.label(), "starting tui");

    let mut terminal = ratatui::init();
    let result = run(&mut terminal, &mut app);
    ratatui::restore();

    info!(tasks = app.tasks.tasks.len(), "tui exited");
    result
}

fn run(terminal: &mut DefaultTerminal, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|frame| ui::task_page::render(frame, app))?;

        if !event::handle_events(app)? {
            break;
        }
    }
    Ok(())
}

/// 命令行参数覆盖配置文件
fn apply_overrides(config: &mut Config, cli: &Cli) {
    if let Some(ref theme) = cli.theme {
        config.theme.name = theme.clone();
    }
    if let Some(ref filter) = cli.filter {
        config.tasks.default_filter = filter.clone();
    }
}

fn main() -> io::Result<()> {
    // panic 时先恢复终端
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        ratatui::restore();
        original_hook(panic_info);
    }));

    let cli = Cli::parse();

    // 日志失败不影响使用
    if let Err(e) = logging::init() {
        eprintln!("Logging disabled: {}", e);
    }

    let mut config = config::load_config();
    apply_overrides(&mut config, &cli);

    match cli.command.unwrap_or(Commands::Tui) {
        Commands::Tui => run_tui(config)?,
        Commands::Config => {
            if let Err(e) = cli::config::execute(&config) {
                eprintln!("{}", e);
                std::process::exit(1);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_overrides_config() {
        let cli = Cli::try_parse_from(["tasklist", "--filter", "done", "--theme", "Nord"]).unwrap();
        let mut config = Config::default();
        apply_overrides(&mut config, &cli);

        assert_eq!(config.theme.name, "Nord");
        assert_eq!(config.tasks.default_filter, "done");
    }

    #[test]
    fn test_no_flags_keep_config() {
        let cli = Cli::try_parse_from(["tasklist"]).unwrap();
        let mut config = Config::default();
        config.theme.name = "Light".to_string();
        apply_overrides(&mut config, &cli);

        assert_eq!(config.theme.name, "Light");
        assert_eq!(config.tasks.default_filter, "all");
    }
}
