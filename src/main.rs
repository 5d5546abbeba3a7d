mod catalog;
mod config;
mod models;
mod ui;

use std::fs;
use std::io;
use std::path::PathBuf;

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::{LevelFilter, info};
use ratatui::prelude::*;

use crate::catalog::Catalog;
use crate::config::load_config;
use crate::ui::{App, render};

/// 获取数据目录路径 (~/.local/share/tunelist/)，日志放这里
fn get_data_dir() -> io::Result<PathBuf> {
    let data_dir = dirs::data_dir()
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "无法获取用户数据目录"))?
        .join("tunelist");

    fs::create_dir_all(&data_dir)?;

    Ok(data_dir)
}

/// 获取配置文件路径 (~/.config/tunelist/config.toml)
fn get_config_path() -> io::Result<PathBuf> {
    let config_dir = dirs::config_dir()
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "无法获取用户配置目录"))?
        .join("tunelist");

    Ok(config_dir.join("config.toml"))
}

fn main() -> io::Result<()> {
    // 终端让给 TUI，日志写文件
    let log_path = get_data_dir()?.join("tunelist.log");
    simple_logging::log_to_file(&log_path, LevelFilter::Info)?;

    // 配置缺失即默认值
    let config = load_config(&get_config_path()?)?;
    let opts = config.transform_options();

    // 曲库：配置指定了覆盖目录就从目录读，否则用内置素材
    let catalog = match &config.data_dir {
        Some(dir) => Catalog::load_from_dir(dir, opts),
        None => Catalog::load_bundled(opts),
    }
    .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

    // 创建应用状态
    let mut app = App::new(catalog, &config);
    info!("tunelist 启动");

    // 设置终端
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // 主循环
    let result = run_app(&mut terminal, &mut app);

    // 恢复终端
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|f| render(f, app))?;

        if let crossterm::event::Event::Key(key) = crossterm::event::read()? {
            if key.kind == crossterm::event::KeyEventKind::Press {
                if ui::handle_key_event(app, key.code)? {
                    break;
                }
            }
        }
    }
    Ok(())
}
