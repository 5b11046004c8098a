use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use feature_matrix_config::{Config, LinkStyle};
use feature_matrix_engine::{
    LinkFormat, StatusTable, SupportStatus, TableInstance, io,
    render::{FEATURE_HEADER, RESOURCE_HEADER, feature_row, render_legend, render_table, resource_row},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Row, Table},
};
use std::{
    collections::BTreeSet,
    env,
    io::{Stdout, stdout},
    path::PathBuf,
    process,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Tui,
    Print,
    Json,
}

#[derive(Debug, PartialEq, Eq)]
struct Options {
    mode: Mode,
    data_path: Option<PathBuf>,
}

/// `[--print | --json] [data.json]`; `None` on anything else.
fn parse_args(args: &[String]) -> Option<Options> {
    let mut mode = Mode::Tui;
    let mut data_path = None;

    for arg in args {
        match arg.as_str() {
            "--print" if mode == Mode::Tui => mode = Mode::Print,
            "--json" if mode == Mode::Tui => mode = Mode::Json,
            flag if flag.starts_with("--") => return None,
            path if data_path.is_none() => data_path = Some(PathBuf::from(path)),
            _ => return None,
        }
    }

    Some(Options { mode, data_path })
}

fn link_format(style: LinkStyle) -> LinkFormat {
    match style {
        LinkStyle::Markdown => LinkFormat::Markdown,
        LinkStyle::Plain => LinkFormat::Plain,
        LinkStyle::Text => LinkFormat::TextOnly,
        LinkStyle::Terminal => LinkFormat::Terminal,
    }
}

fn legend_lines(tables: &[TableInstance], statuses: &StatusTable, show_all: bool) -> Vec<String> {
    let used: BTreeSet<SupportStatus> = tables.iter().flat_map(|t| t.statuses()).collect();
    render_legend(&statuses.legend(&used, show_all))
}

struct App {
    tables: Vec<TableInstance>,
    statuses: StatusTable,
    format: LinkFormat,
    legend: Vec<String>,
    table_list_state: ListState,
}

impl App {
    fn new(tables: Vec<TableInstance>, format: LinkFormat, show_all: bool) -> Self {
        let statuses = StatusTable::default();
        let legend = legend_lines(&tables, &statuses, show_all);

        let mut app = Self {
            tables,
            statuses,
            format,
            legend,
            table_list_state: ListState::default(),
        };

        // Select first table if available
        if !app.tables.is_empty() {
            app.table_list_state.select(Some(0));
        }

        app
    }

    fn next_table(&mut self) {
        if self.tables.is_empty() {
            return;
        }
        let i = match self.table_list_state.selected() {
            Some(i) => (i + 1) % self.tables.len(),
            None => 0,
        };
        self.table_list_state.select(Some(i));
    }

    fn previous_table(&mut self) {
        if self.tables.is_empty() {
            return;
        }
        let i = match self.table_list_state.selected() {
            Some(0) | None => self.tables.len() - 1,
            Some(i) => i - 1,
        };
        self.table_list_state.select(Some(i));
    }

    fn selected_table(&self) -> Option<&TableInstance> {
        self.table_list_state
            .selected()
            .and_then(|i| self.tables.get(i))
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = env::args().collect();
    let config_path = Config::config_path();
    let usage = format!("Usage: {} [--print | --json] [data-file.json]", args[0]);

    let Some(options) = parse_args(&args[1..]) else {
        eprintln!("{usage}");
        process::exit(1);
    };

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) if options.data_path.is_some() => {
            log::warn!("Ignoring unreadable config file: {e}");
            None
        }
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            eprintln!("{usage}");
            process::exit(1);
        }
    };

    let (link_style, show_all) = config
        .as_ref()
        .map(|c| (c.link_style, c.show_all_statuses))
        .unwrap_or_default();

    // Determine data path from CLI args or config file
    let (data_path, from_config) = match (options.data_path, config) {
        (Some(path), _) => (path, false),
        (None, Some(config)) => (config.data_path, true),
        (None, None) => {
            eprintln!("Error: No data file provided and no config file found");
            eprintln!("{usage}");
            eprintln!("Or create a config file at {}", config_path.display());
            process::exit(1);
        }
    };

    if let Err(e) = io::validate_data_file(&data_path) {
        let source = if from_config {
            format!(" from config file '{}'", config_path.display())
        } else {
            String::new()
        };
        eprintln!(
            "Error: Data file '{}'{} is invalid: {e}",
            data_path.display(),
            source
        );
        process::exit(1);
    }

    let tables = match io::read_feature_data(&data_path) {
        Ok(tables) => tables,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };

    let format = link_format(link_style);
    match options.mode {
        Mode::Json => println!("{}", serde_json::to_string_pretty(&tables)?),
        Mode::Print => {
            let statuses = StatusTable::default();
            for table in &tables {
                for line in render_table(table, &statuses, format) {
                    println!("{line}");
                }
                println!();
            }
            println!("Legend");
            for line in legend_lines(&tables, &statuses, show_all) {
                println!("{line}");
            }
        }
        Mode::Tui => {
            // Escape sequences would break ratatui's width accounting
            let format = if format == LinkFormat::Terminal {
                log::warn!("Terminal hyperlinks are not supported in the TUI, using plain links");
                LinkFormat::Plain
            } else {
                format
            };
            run_tui(App::new(tables, format, show_all))?;
        }
    }

    Ok(())
}

fn run_tui(mut app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

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

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                KeyCode::Down | KeyCode::Char('j') => app.next_table(),
                KeyCode::Up | KeyCode::Char('k') => app.previous_table(),
                _ => {}
            }
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(app.legend.len() as u16 + 2),
            Constraint::Length(1),
        ])
        .split(f.area());

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(25), Constraint::Percentage(75)])
        .split(rows[0]);

    // Table list panel
    let table_items: Vec<ListItem> = app
        .tables
        .iter()
        .map(|table| {
            let icon = match table {
                TableInstance::FeatureTable(_) => "▦ ",
                TableInstance::ResourceTable(_) => "🔗 ",
                TableInstance::MetaInformation(_) => "ℹ ",
            };
            ListItem::new(Line::from(vec![Span::raw(format!("{icon}{}", table.name()))]))
        })
        .collect();

    let tables_list = List::new(table_items)
        .block(Block::default().borders(Borders::ALL).title("Tables"))
        .highlight_style(Style::default().bg(Color::Yellow).fg(Color::Black));

    f.render_stateful_widget(tables_list, chunks[0], &mut app.table_list_state);

    // Content panel
    let header_style = Style::default().add_modifier(Modifier::BOLD);
    match app.selected_table() {
        Some(TableInstance::FeatureTable(t)) => {
            let rows = t
                .features
                .iter()
                .map(|feature| Row::new(feature_row(feature, &app.statuses, app.format)));
            let table = Table::new(
                rows,
                [
                    Constraint::Percentage(25),
                    Constraint::Length(12),
                    Constraint::Length(12),
                    Constraint::Fill(1),
                ],
            )
            .header(Row::new(FEATURE_HEADER).style(header_style))
            .block(Block::default().borders(Borders::ALL).title(t.name.as_str()));
            f.render_widget(table, chunks[1]);
        }
        Some(TableInstance::ResourceTable(t)) => {
            let rows = t
                .resources
                .iter()
                .map(|resource| Row::new(resource_row(resource, app.format)));
            let table = Table::new(rows, [Constraint::Percentage(30), Constraint::Fill(1)])
                .header(Row::new(RESOURCE_HEADER).style(header_style))
                .block(Block::default().borders(Borders::ALL).title(t.name.as_str()));
            f.render_widget(table, chunks[1]);
        }
        Some(table @ TableInstance::MetaInformation(_)) => {
            let lines: Vec<Line> = render_table(table, &app.statuses, app.format)
                .into_iter()
                .skip(1)
                .map(Line::from)
                .collect();
            let content = Paragraph::new(lines)
                .block(Block::default().borders(Borders::ALL).title(table.name()))
                .wrap(ratatui::widgets::Wrap { trim: true });
            f.render_widget(content, chunks[1]);
        }
        None => {
            let content = Paragraph::new(vec![Line::from("No tables in this data file")])
                .block(Block::default().borders(Borders::ALL).title("Content"));
            f.render_widget(content, chunks[1]);
        }
    }

    // Legend
    let legend: Vec<Line> = app.legend.iter().map(|l| Line::from(l.as_str())).collect();
    let legend = Paragraph::new(legend).block(Block::default().borders(Borders::ALL).title("Legend"));
    f.render_widget(legend, rows[1]);

    // Instructions
    let help_text = Line::from(vec![
        Span::raw("q/Esc: Quit | "),
        Span::raw("↑/k: Previous | "),
        Span::raw("↓/j: Next"),
    ]);
    f.render_widget(Paragraph::new(help_text), rows[2]);
}
