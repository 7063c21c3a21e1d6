mod app;

use anyhow::{Context, Result, bail};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use docbrowser_config::{CategoryConfig, Config, RenderConfig};
use docbrowser_engine::{
    Category, FsContentSource, Menu, Navigator, RenderOptions, Renderer, io, load_page,
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{env, io::stdout, path::PathBuf, process};

use app::App;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    /// Interactive browser over a content directory.
    Browse { content_path: Option<PathBuf> },
    /// Print the fragment for one Markdown file.
    Render { file: PathBuf },
    /// Print the page for one category/topic pair.
    Page {
        category: String,
        topic: String,
        content_path: Option<PathBuf>,
    },
}

/// Parses arguments without the program name. `None` means print usage.
fn parse_args(args: &[String]) -> Option<Command> {
    match args {
        [] => Some(Command::Browse { content_path: None }),
        [flag] if flag.starts_with('-') => None,
        [cmd, file] if cmd == "render" => Some(Command::Render {
            file: PathBuf::from(file),
        }),
        [cmd, category, topic, rest @ ..] if cmd == "page" && rest.len() <= 1 => {
            Some(Command::Page {
                category: category.clone(),
                topic: topic.clone(),
                content_path: rest.first().map(PathBuf::from),
            })
        }
        [cmd, ..] if cmd == "render" || cmd == "page" => None,
        [path] => Some(Command::Browse {
            content_path: Some(PathBuf::from(path)),
        }),
        _ => None,
    }
}

fn usage(program: &str) -> String {
    format!(
        "Usage: {program} [content-path]\n       {program} render <file.md>\n       {program} page <category> <topic> [content-path]"
    )
}

/// Everything the browser and the page command need to run.
#[derive(Debug)]
struct Settings {
    content_path: PathBuf,
    render: RenderOptions,
    menu: Menu,
}

/// Combines the command-line content path with the config file. The
/// argument wins over `content_path` in the file; menu and render options
/// always come from the file when there is one.
fn resolve_settings(arg: Option<PathBuf>, config: Option<Config>) -> Result<Settings> {
    let (content_path, render, categories) = match (arg, config) {
        (Some(path), Some(config)) => (path, config.render, config.categories),
        (None, Some(config)) => (config.content_path, config.render, config.categories),
        (Some(path), None) => {
            let config = Config::new(path);
            (config.content_path, config.render, config.categories)
        }
        (None, None) => bail!(
            "No content path provided and no config file found at {}",
            Config::config_path().display()
        ),
    };

    Ok(Settings {
        content_path,
        render: render_options(render),
        menu: menu_from_config(categories)?,
    })
}

fn render_options(render: RenderConfig) -> RenderOptions {
    RenderOptions {
        wrap_ordered_lists: render.wrap_ordered_lists,
        code_language_class: render.code_language_class,
    }
}

fn menu_from_config(categories: Vec<CategoryConfig>) -> Result<Menu> {
    let categories = categories
        .into_iter()
        .map(|c| Category {
            key: c.key,
            title: c.title,
            topics: c.topics,
        })
        .collect();
    Menu::new(categories).context("Invalid menu in config file")
}

fn init_logging(command: &Command) {
    let mut builder = env_logger::Builder::from_default_env();
    builder.filter_level(log::LevelFilter::Warn);

    // stderr output would corrupt the alternate screen
    if matches!(command, Command::Browse { .. }) {
        let log_path = env::temp_dir().join("docbrowser.log");
        match std::fs::File::create(&log_path) {
            Ok(file) => {
                builder.target(env_logger::Target::Pipe(Box::new(file)));
            }
            Err(_) => {
                builder.filter_level(log::LevelFilter::Off);
            }
        }
    }

    builder.init();
}

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    let program = args.first().map_or("docbrowser-cli", String::as_str);

    let Some(command) = parse_args(args.get(1..).unwrap_or_default()) else {
        eprintln!("{}", usage(program));
        process::exit(1);
    };

    init_logging(&command);

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            process::exit(1);
        }
    };

    match command {
        Command::Render { file } => {
            let markdown = std::fs::read_to_string(&file)
                .with_context(|| format!("Failed to read {}", file.display()))?;
            let render = config.map(|c| c.render).unwrap_or_default();
            println!("{}", Renderer::new(render_options(render)).render(&markdown));
            Ok(())
        }
        Command::Page {
            category,
            topic,
            content_path,
        } => {
            let settings = resolve_settings(content_path, config)?;
            let mut navigator = Navigator::new(settings.menu);
            navigator.select_category(&category)?;
            navigator.select_topic(&topic)?;

            let source = FsContentSource::new(settings.content_path);
            let page = load_page(
                &source,
                &Renderer::new(settings.render),
                &navigator.current_category().key,
                navigator.current_topic(),
            );
            println!("{}", page.html);
            Ok(())
        }
        Command::Browse { content_path } => {
            let from_config = content_path.is_none();
            let settings = match resolve_settings(content_path, config) {
                Ok(settings) => settings,
                Err(e) => {
                    eprintln!("Error: {e:#}");
                    eprintln!("{}", usage(program));
                    process::exit(1);
                }
            };

            if let Err(e) = io::validate_content_dir(&settings.content_path) {
                let source = if from_config {
                    format!(" from config file '{}'", Config::config_path().display())
                } else {
                    String::new()
                };
                eprintln!(
                    "Error: Content path '{}'{} is invalid: {e}",
                    settings.content_path.display(),
                    source
                );
                process::exit(1);
            }

            browse(settings)
        }
    }
}

fn browse(settings: Settings) -> Result<()> {
    log::info!("Browsing {}", settings.content_path.display());
    let mut app = App::new(
        Navigator::new(settings.menu),
        FsContentSource::new(settings.content_path),
        Renderer::new(settings.render),
    );

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app::run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}
