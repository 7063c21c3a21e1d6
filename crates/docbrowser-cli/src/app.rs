use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use docbrowser_engine::{ContentSource, Navigator, Page, Renderer, load_page, topic_label};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Tabs, Wrap},
};
use std::io::Stdout;

/// Browser state: where the reader is and what is on screen.
pub struct App<S: ContentSource> {
    navigator: Navigator,
    source: S,
    renderer: Renderer,
    page: Page,
    show_sidebar: bool,
    category_list_state: ListState,
}

impl<S: ContentSource> App<S> {
    pub fn new(navigator: Navigator, source: S, renderer: Renderer) -> Self {
        let page = load_page(
            &source,
            &renderer,
            &navigator.current_category().key,
            navigator.current_topic(),
        );
        let mut category_list_state = ListState::default();
        category_list_state.select(Some(navigator.current_category_index()));

        Self {
            navigator,
            source,
            renderer,
            page,
            show_sidebar: true,
            category_list_state,
        }
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn sidebar_visible(&self) -> bool {
        self.show_sidebar
    }

    /// Applies one key press. Returns `false` when the app should exit.
    pub fn handle_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Char('q') => return false,
            KeyCode::Down | KeyCode::Char('j') => {
                self.navigator.next_category();
                self.reload();
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.navigator.previous_category();
                self.reload();
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.navigator.next_topic();
                self.reload();
            }
            KeyCode::Left | KeyCode::Char('h') => {
                self.navigator.previous_topic();
                self.reload();
            }
            KeyCode::Char('m') => self.show_sidebar = !self.show_sidebar,
            _ => {}
        }
        true
    }

    fn reload(&mut self) {
        self.category_list_state
            .select(Some(self.navigator.current_category_index()));
        self.page = load_page(
            &self.source,
            &self.renderer,
            &self.navigator.current_category().key,
            self.navigator.current_topic(),
        );
    }
}

pub fn run_app<S: ContentSource>(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App<S>,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && !app.handle_key(key.code)
        {
            return Ok(());
        }
    }
}

fn ui<S: ContentSource>(f: &mut Frame, app: &mut App<S>) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(f.area());

    let main_area = if app.show_sidebar {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(25), Constraint::Percentage(75)])
            .split(rows[0]);
        draw_sidebar(f, app, columns[0]);
        columns[1]
    } else {
        rows[0]
    };

    let panes = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(main_area);
    draw_topics(f, app, panes[0]);
    draw_content(f, app, panes[1]);

    let help = Line::from(vec![
        Span::raw("q: Quit | "),
        Span::raw("↑/↓: Category | "),
        Span::raw("←/→: Topic | "),
        Span::raw("m: Menu"),
    ]);
    f.render_widget(Paragraph::new(help), rows[1]);
}

fn draw_sidebar<S: ContentSource>(f: &mut Frame, app: &mut App<S>, area: Rect) {
    let items: Vec<ListItem> = app
        .navigator
        .menu()
        .categories()
        .iter()
        .map(|c| ListItem::new(c.title.clone()))
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Categories"))
        .highlight_style(Style::default().bg(Color::Yellow).fg(Color::Black));

    f.render_stateful_widget(list, area, &mut app.category_list_state);
}

fn draw_topics<S: ContentSource>(f: &mut Frame, app: &App<S>, area: Rect) {
    let category = app.navigator.current_category();
    let titles: Vec<String> = category.topics.iter().map(|t| topic_label(t)).collect();

    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(category.title.clone()),
        )
        .select(app.navigator.current_topic_index())
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );

    f.render_widget(tabs, area);
}

fn draw_content<S: ContentSource>(f: &mut Frame, app: &App<S>, area: Rect) {
    let lines: Vec<Line> = app
        .page
        .html
        .lines()
        .map(|line| Line::from(line.to_string()))
        .collect();

    let title = format!("{}/{}", app.page.category, app.page.topic);
    let content = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(title))
        .wrap(Wrap { trim: false });

    f.render_widget(content, area);
}
