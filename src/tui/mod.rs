// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Ecomap-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Ecomap and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Terminal UI.
//!
//! The interactive shell (ratatui + crossterm): tab navigation, the three
//! overlay toggles, the node filter, and a pannable diagram viewport with a
//! fit-to-view latch. All state lives in [`App`]; every event handler builds
//! a fresh options snapshot and re-derives the diagram surfaces wholesale.

use std::io;
use std::time::{Duration, Instant};

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph, Tabs, Wrap},
};

use crate::catalog::content::{
    CANVAS_BLOCKS, CANVAS_EXTENSIONS, CANVAS_NARRATIVE, ECONOMIC_DRIVERS, FLYWHEEL_ECONOMICS_NOTE,
    FLYWHEEL_STEPS, KEY_LOOPS, KEY_LOOPS_NOTE, MAP_NOTES,
};
use crate::catalog::{architecture_layout_config, ecosystem_layout_config};
use crate::layout::layout_graph;
use crate::model::{BlockIcon, NodeRole};
use crate::render::{render_map, MapRenderError};
use crate::view::{architecture_view, ecosystem_view, MapView, ViewOptions};

const FOCUS_COLOR: Color = Color::LightGreen;
const BADGE_COLOR: Color = Color::LightYellow;
const SECTION_COLOR: Color = Color::LightCyan;
const FOOTER_LABEL_COLOR: Color = Color::Gray;
const FOOTER_KEY_COLOR: Color = Color::Cyan;
const FOOTER_BRAND_COLOR: Color = Color::White;
const FOOTER_BRAND: &str = "ECOMAP ";
const CENTER_BORDER_PADDING: i32 = 1;
const TOAST_TTL: Duration = Duration::from_secs(2);
const FILTER_PLACEHOLDER: &str = "e.g. Vuplicity, Library";

const PAN_STEP_X: i32 = 4;
const PAN_STEP_Y: i32 = 2;

/// The four fixed tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Map,
    Canvas,
    Flywheel,
    Architecture,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Map, Tab::Canvas, Tab::Flywheel, Tab::Architecture];

    /// Parses the `--tab` flag value.
    pub fn from_flag(value: &str) -> Option<Self> {
        match value {
            "map" => Some(Self::Map),
            "canvas" => Some(Self::Canvas),
            "flywheel" => Some(Self::Flywheel),
            "cra" => Some(Self::Architecture),
            _ => None,
        }
    }

    fn title(self) -> &'static str {
        match self {
            Self::Map => "Ecosystem Map",
            Self::Canvas => "Canvas++",
            Self::Flywheel => "Flywheel",
            Self::Architecture => "Agentic CRA",
        }
    }

    fn index(self) -> usize {
        match self {
            Self::Map => 0,
            Self::Canvas => 1,
            Self::Flywheel => 2,
            Self::Architecture => 3,
        }
    }

    fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    fn shows_diagram(self) -> bool {
        matches!(self, Self::Map | Self::Architecture)
    }
}

/// Runs the interactive terminal UI until the user quits.
pub fn run(options: ViewOptions, tab: Tab) -> Result<(), Box<dyn std::error::Error>> {
    let mut terminal = TerminalSession::new()?;
    let mut app = App::new(options, tab);

    while !app.should_quit {
        terminal.draw(|frame| draw(frame, &mut app))?;

        if event::poll(Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key);
                }
            }
        }
    }

    Ok(())
}

/// One rendered diagram, cached until the next options change.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
struct DiagramSurface {
    text: String,
    node_count: usize,
    edge_count: usize,
}

impl DiagramSurface {
    fn from_view(
        view: &MapView,
        config: &crate::layout::LayoutConfig,
    ) -> Result<Self, MapRenderError> {
        let layout = layout_graph(view.nodes(), view.edges(), config);
        let text = render_map(view, &layout)?;
        Ok(Self {
            text,
            node_count: view.nodes().len(),
            edge_count: view.edges().len(),
        })
    }
}

#[derive(Debug, Clone)]
struct Toast {
    message: String,
    expires_at: Instant,
}

struct App {
    options: ViewOptions,
    tab: Tab,
    filter_editing: bool,
    map_surface: DiagramSurface,
    arch_surface: DiagramSurface,
    pan_x: i32,
    pan_y: i32,
    center_on_next_draw: bool,
    canvas_lines: Vec<Line<'static>>,
    flywheel_lines: Vec<Line<'static>>,
    canvas_scroll: u16,
    flywheel_scroll: u16,
    show_help: bool,
    help_scroll: u16,
    help_viewport_height: u16,
    toast: Option<Toast>,
    should_quit: bool,
}

impl App {
    fn new(options: ViewOptions, tab: Tab) -> Self {
        let mut app = Self {
            options,
            tab,
            filter_editing: false,
            map_surface: DiagramSurface::default(),
            arch_surface: DiagramSurface::default(),
            pan_x: 0,
            pan_y: 0,
            center_on_next_draw: true,
            canvas_lines: canvas_lines(),
            flywheel_lines: flywheel_lines(),
            canvas_scroll: 0,
            flywheel_scroll: 0,
            show_help: false,
            help_scroll: 0,
            help_viewport_height: 0,
            toast: None,
            should_quit: false,
        };
        app.refresh_surfaces();
        app
    }

    /// Re-derives and re-renders both diagrams from the current snapshot,
    /// replacing the old surfaces wholesale, and schedules a re-fit.
    /// A render failure clears that surface and raises a toast; the shell
    /// keeps running.
    fn refresh_surfaces(&mut self) {
        self.map_surface = self.surface_or_toast(DiagramSurface::from_view(
            &ecosystem_view(&self.options),
            &ecosystem_layout_config(self.options.roomy_layout),
        ));
        self.arch_surface = self.surface_or_toast(DiagramSurface::from_view(
            &architecture_view(&self.options),
            &architecture_layout_config(self.options.roomy_layout),
        ));
        self.fit_view();
    }

    fn surface_or_toast(
        &mut self,
        result: Result<DiagramSurface, MapRenderError>,
    ) -> DiagramSurface {
        match result {
            Ok(surface) => surface,
            Err(err) => {
                self.set_toast(format!("Render failed: {err}"));
                DiagramSurface::default()
            }
        }
    }

    fn apply_options(&mut self, options: ViewOptions) {
        if options == self.options {
            return;
        }
        self.options = options;
        self.refresh_surfaces();
    }

    /// The fit-view capability: recenter the active diagram on the next
    /// draw pass.
    fn fit_view(&mut self) {
        self.pan_x = 0;
        self.pan_y = 0;
        self.center_on_next_draw = true;
    }

    fn active_surface(&self) -> &DiagramSurface {
        match self.tab {
            Tab::Architecture => &self.arch_surface,
            _ => &self.map_surface,
        }
    }

    fn set_tab(&mut self, tab: Tab) {
        if tab == self.tab {
            return;
        }
        self.tab = tab;
        if tab.shows_diagram() {
            self.fit_view();
        } else {
            self.filter_editing = false;
        }
    }

    fn set_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast {
            message: message.into(),
            expires_at: Instant::now() + TOAST_TTL,
        });
    }

    fn active_toast(&self) -> Option<&str> {
        self.toast
            .as_ref()
            .filter(|toast| toast.expires_at > Instant::now())
            .map(|toast| toast.message.as_str())
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if self.handle_key_code(key.code) {
            self.should_quit = true;
        }
    }

    fn handle_key_code(&mut self, code: KeyCode) -> bool {
        if self.show_help {
            match code {
                KeyCode::Esc | KeyCode::Char('?') => self.show_help = false,
                KeyCode::Char('q') => return true,
                KeyCode::Down | KeyCode::Char('j') => self.help_scroll_by(1),
                KeyCode::Up | KeyCode::Char('k') => self.help_scroll_by(-1),
                KeyCode::PageDown => self.help_scroll_page(1),
                KeyCode::PageUp => self.help_scroll_page(-1),
                KeyCode::Home => self.help_scroll = 0,
                _ => {}
            }
            return false;
        }

        if self.filter_editing {
            self.handle_filter_edit_key(code);
            return false;
        }

        match code {
            KeyCode::Char('q') => return true,
            KeyCode::Char('?') => {
                self.show_help = true;
                self.help_scroll = 0;
            }
            KeyCode::Tab => self.set_tab(self.tab.next()),
            KeyCode::BackTab => self.set_tab(self.tab.prev()),
            KeyCode::Char('1') => self.set_tab(Tab::Map),
            KeyCode::Char('2') => self.set_tab(Tab::Canvas),
            KeyCode::Char('3') => self.set_tab(Tab::Flywheel),
            KeyCode::Char('4') => self.set_tab(Tab::Architecture),
            KeyCode::Char('/') => {
                self.set_tab(Tab::Map);
                self.filter_editing = true;
            }
            KeyCode::Char('c') => {
                if !self.options.filter.is_empty() {
                    self.apply_options(ViewOptions {
                        filter: String::new(),
                        ..self.options.clone()
                    });
                    self.set_toast("Filter cleared");
                }
            }
            KeyCode::Char('e') => {
                let show_examples = !self.options.show_examples;
                self.apply_options(ViewOptions {
                    show_examples,
                    ..self.options.clone()
                });
                self.set_toast(if show_examples {
                    "Examples shown"
                } else {
                    "Examples hidden"
                });
            }
            KeyCode::Char('$') => {
                let show_economics = !self.options.show_economics;
                self.apply_options(ViewOptions {
                    show_economics,
                    ..self.options.clone()
                });
                self.set_toast(if show_economics {
                    "Economics overlay on"
                } else {
                    "Economics overlay off"
                });
            }
            KeyCode::Char('r') => {
                let roomy_layout = !self.options.roomy_layout;
                self.apply_options(ViewOptions {
                    roomy_layout,
                    ..self.options.clone()
                });
                self.set_toast(if roomy_layout { "Roomy layout" } else { "Compact layout" });
            }
            KeyCode::Char('f') => {
                if self.tab.shows_diagram() {
                    self.fit_view();
                }
            }
            _ => {
                if self.tab.shows_diagram() {
                    self.handle_pan_key(code);
                } else {
                    self.handle_scroll_key(code);
                }
            }
        }

        false
    }

    fn handle_filter_edit_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc => {
                self.filter_editing = false;
                self.apply_options(ViewOptions {
                    filter: String::new(),
                    ..self.options.clone()
                });
            }
            KeyCode::Enter => self.filter_editing = false,
            KeyCode::Backspace => {
                let mut filter = self.options.filter.clone();
                filter.pop();
                self.apply_options(ViewOptions {
                    filter,
                    ..self.options.clone()
                });
            }
            KeyCode::Char(ch) => {
                let mut filter = self.options.filter.clone();
                filter.push(ch);
                self.apply_options(ViewOptions {
                    filter,
                    ..self.options.clone()
                });
            }
            _ => {}
        }
    }

    fn handle_pan_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Left | KeyCode::Char('h') => self.pan_x -= PAN_STEP_X,
            KeyCode::Right | KeyCode::Char('l') => self.pan_x += PAN_STEP_X,
            KeyCode::Up | KeyCode::Char('k') => self.pan_y -= PAN_STEP_Y,
            KeyCode::Down | KeyCode::Char('j') => self.pan_y += PAN_STEP_Y,
            KeyCode::PageUp => self.pan_y -= PAN_STEP_Y * 5,
            KeyCode::PageDown => self.pan_y += PAN_STEP_Y * 5,
            KeyCode::Home => self.fit_view(),
            _ => {}
        }
    }

    fn handle_scroll_key(&mut self, code: KeyCode) {
        let max_scroll = match self.tab {
            Tab::Canvas => self.canvas_lines.len(),
            Tab::Flywheel => self.flywheel_lines.len(),
            _ => 0,
        }
        .saturating_sub(1) as u16;

        let scroll = match self.tab {
            Tab::Canvas => &mut self.canvas_scroll,
            Tab::Flywheel => &mut self.flywheel_scroll,
            _ => return,
        };

        match code {
            KeyCode::Up | KeyCode::Char('k') => *scroll = scroll.saturating_sub(1),
            KeyCode::Down | KeyCode::Char('j') => *scroll = scroll.saturating_add(1).min(max_scroll),
            KeyCode::PageUp => *scroll = scroll.saturating_sub(10),
            KeyCode::PageDown => *scroll = scroll.saturating_add(10).min(max_scroll),
            KeyCode::Home => *scroll = 0,
            KeyCode::End => *scroll = max_scroll,
            _ => {}
        }
    }

    fn help_scroll_by(&mut self, delta: i32) {
        if delta < 0 {
            self.help_scroll = self.help_scroll.saturating_sub((-delta) as u16);
        } else {
            self.help_scroll = self.help_scroll.saturating_add(delta as u16);
        }
    }

    fn help_scroll_page(&mut self, direction: i32) {
        let page = self.help_viewport_height.max(1).saturating_sub(1) as i32;
        self.help_scroll_by(direction.signum() * page.max(1));
    }

    fn center_diagram_if_needed(&mut self, viewport_width: usize, viewport_height: usize) {
        if !self.center_on_next_draw {
            return;
        }
        if viewport_width == 0 || viewport_height == 0 {
            return;
        }

        let text = &self.active_surface().text;
        let diagram_width = text.split('\n').map(|line| line.chars().count()).max().unwrap_or(0) as i32;
        let diagram_height = text.split('\n').count() as i32;
        let viewport_width = viewport_width as i32;
        let viewport_height = viewport_height as i32;

        let centered_pan_x = (diagram_width - viewport_width) / 2;
        let centered_pan_y = (diagram_height - viewport_height) / 2;
        let max_pan = -CENTER_BORDER_PADDING;
        // Never start clipped at the top-left; prefer a one-cell margin.
        self.pan_x = centered_pan_x.min(max_pan);
        self.pan_y = centered_pan_y.min(max_pan);
        self.center_on_next_draw = false;
    }

    fn diagram_render_offsets(&self) -> (u16, u16, usize, usize) {
        let scroll_x = clamp_positive_i32_to_u16(self.pan_x);
        let scroll_y = clamp_positive_i32_to_u16(self.pan_y);
        let left_pad = self.pan_x.saturating_neg().max(0) as usize;
        let top_pad = self.pan_y.saturating_neg().max(0) as usize;
        (scroll_x, scroll_y, left_pad, top_pad)
    }
}

fn clamp_positive_i32_to_u16(value: i32) -> u16 {
    value.clamp(0, u16::MAX as i32) as u16
}

fn pad_text(text: Text<'static>, left: usize, top: usize) -> Text<'static> {
    let mut lines = Vec::with_capacity(text.lines.len() + top);
    for _ in 0..top {
        lines.push(Line::default());
    }
    let pad = " ".repeat(left);
    for line in text.lines {
        let mut spans = Vec::with_capacity(line.spans.len() + 1);
        if left > 0 {
            spans.push(Span::raw(pad.clone()));
        }
        spans.extend(line.spans);
        lines.push(Line::from(spans));
    }
    Text::from(lines)
}

struct TerminalSession {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl TerminalSession {
    fn new() -> Result<Self, Box<dyn std::error::Error>> {
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).map_err(|err| {
            teardown_terminal();
            err
        })?;

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).map_err(|err| {
            teardown_terminal();
            err
        })?;
        terminal.clear().map_err(|err| {
            teardown_terminal();
            err
        })?;

        Ok(Self { terminal })
    }

    fn draw(&mut self, draw_fn: impl FnOnce(&mut Frame<'_>)) -> io::Result<()> {
        self.terminal.draw(draw_fn)?;
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = self.terminal.show_cursor();
        teardown_terminal();
    }
}

fn teardown_terminal() {
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    let _ = execute!(stdout, LeaveAlternateScreen);
}

fn draw(frame: &mut Frame<'_>, app: &mut App) {
    let area = frame.size();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0), Constraint::Length(1)])
        .split(area);
    let tabs_area = layout[0];
    let main_area = layout[1];
    let footer_area = layout[2];

    draw_tab_bar(frame, app, tabs_area);

    match app.tab {
        Tab::Map => draw_map_tab(frame, app, main_area),
        Tab::Canvas => draw_content_tab(
            frame,
            main_area,
            &format!("{} Business Model Canvas++", BlockIcon::Layers.glyph()),
            &app.canvas_lines,
            app.canvas_scroll,
        ),
        Tab::Flywheel => draw_content_tab(
            frame,
            main_area,
            &format!("{} Flywheel", BlockIcon::Refresh.glyph()),
            &app.flywheel_lines,
            app.flywheel_scroll,
        ),
        Tab::Architecture => draw_architecture_tab(frame, app, main_area),
    }

    draw_footer(frame, app, footer_area);

    if app.show_help {
        draw_help_overlay(frame, app, area);
    }
}

fn draw_tab_bar(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let titles = Tab::ALL
        .iter()
        .enumerate()
        .map(|(idx, tab)| Line::from(format!("[{}] {}", idx + 1, tab.title())))
        .collect::<Vec<_>>();
    let tabs = Tabs::new(titles)
        .select(app.tab.index())
        .highlight_style(Style::default().fg(FOCUS_COLOR).add_modifier(Modifier::BOLD))
        .divider("│");
    frame.render_widget(tabs, area);
}

fn stack_panes_vertically(area: Rect) -> bool {
    area.width < 100
}

fn draw_map_tab(frame: &mut Frame<'_>, app: &mut App, area: Rect) {
    let direction = if stack_panes_vertically(area) {
        Direction::Vertical
    } else {
        Direction::Horizontal
    };
    let panes = Layout::default()
        .direction(direction)
        .constraints([Constraint::Percentage(72), Constraint::Percentage(28)])
        .split(area);

    let mut title = format!(
        "─ {} — {} nodes / {} edges ",
        Tab::Map.title(),
        app.map_surface.node_count,
        app.map_surface.edge_count
    );
    let query = app.options.filter.trim();
    if !query.is_empty() {
        title.push_str(&format!("(filter: {query}) "));
    }
    draw_diagram_pane(frame, app, panes[0], title);

    let sidebar = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(5),
            Constraint::Length(9),
            Constraint::Min(0),
        ])
        .split(panes[1]);

    draw_filter_box(frame, app, sidebar[0]);
    draw_drivers_panel(frame, sidebar[1]);
    draw_legend_panel(frame, sidebar[2]);
    draw_notes_panel(frame, sidebar[3]);
}

fn draw_architecture_tab(frame: &mut Frame<'_>, app: &mut App, area: Rect) {
    let direction = if stack_panes_vertically(area) {
        Direction::Vertical
    } else {
        Direction::Horizontal
    };
    let panes = Layout::default()
        .direction(direction)
        .constraints([Constraint::Percentage(72), Constraint::Percentage(28)])
        .split(area);

    let title = format!(
        "─ {} Agentic CRA — Reference Architecture — {} nodes / {} edges ",
        BlockIcon::Shield.glyph(),
        app.arch_surface.node_count,
        app.arch_surface.edge_count
    );
    draw_diagram_pane(frame, app, panes[0], title);

    let mut lines = vec![Line::from(vec![
        Span::raw(format!("{} ", BlockIcon::Bot.glyph())),
        Span::styled(
            "Key Loops",
            Style::default().fg(SECTION_COLOR).add_modifier(Modifier::BOLD),
        ),
    ])];
    for item in KEY_LOOPS {
        lines.push(Line::from(format!("• {item}")));
    }
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        KEY_LOOPS_NOTE,
        Style::default().fg(FOOTER_LABEL_COLOR),
    )));

    let panel = Paragraph::new(Text::from(lines))
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title("─ Where the agent learns "));
    frame.render_widget(panel, panes[1]);
}

fn draw_diagram_pane(frame: &mut Frame<'_>, app: &mut App, area: Rect, title: String) {
    let viewport_width = area.width.saturating_sub(2) as usize;
    let viewport_height = area.height.saturating_sub(2) as usize;
    app.center_diagram_if_needed(viewport_width, viewport_height);

    let surface = app.active_surface();
    let block = Block::default().borders(Borders::ALL).title(title);

    if surface.text.is_empty() {
        let empty = Paragraph::new("No nodes match the filter.\n\nPress c to clear it.")
            .style(Style::default().fg(FOOTER_LABEL_COLOR))
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let (scroll_x, scroll_y, left_pad, top_pad) = app.diagram_render_offsets();
    let mut text = Text::raw(surface.text.clone());
    if left_pad > 0 || top_pad > 0 {
        text = pad_text(text, left_pad, top_pad);
    }
    let diagram = Paragraph::new(text).block(block).scroll((scroll_y, scroll_x));
    frame.render_widget(diagram, area);
}

fn draw_filter_box(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let border_style = if app.filter_editing {
        Style::default().fg(FOCUS_COLOR)
    } else {
        Style::default()
    };

    let content = if app.options.filter.is_empty() && !app.filter_editing {
        Line::from(Span::styled(
            FILTER_PLACEHOLDER,
            Style::default().fg(FOOTER_LABEL_COLOR),
        ))
    } else {
        let mut spans = vec![Span::raw(app.options.filter.clone())];
        if app.filter_editing {
            spans.push(Span::styled("▌", Style::default().fg(FOCUS_COLOR)));
        }
        Line::from(spans)
    };

    let filter = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::ALL)
            .title("─ Filter [/] ")
            .border_style(border_style),
    );
    frame.render_widget(filter, area);
}

fn draw_drivers_panel(frame: &mut Frame<'_>, area: Rect) {
    let mut spans = Vec::new();
    for (idx, driver) in ECONOMIC_DRIVERS.iter().enumerate() {
        if idx > 0 {
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(
            format!("[{driver}]"),
            Style::default().fg(BADGE_COLOR),
        ));
    }

    let panel = Paragraph::new(Line::from(spans))
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("─ Economic Drivers "));
    frame.render_widget(panel, area);
}

fn draw_legend_panel(frame: &mut Frame<'_>, area: Rect) {
    let roles = [
        NodeRole::Center,
        NodeRole::Pillar,
        NodeRole::Infrastructure,
        NodeRole::Enabler,
        NodeRole::Example,
    ];
    let mut lines = roles
        .iter()
        .map(|role| Line::from(format!("{} {}", role.marker(), role.legend_label())))
        .collect::<Vec<_>>();
    lines.push(Line::from(Span::styled(
        "▶ arrow = direction of work/value",
        Style::default().fg(FOOTER_LABEL_COLOR),
    )));
    lines.push(Line::from(Span::styled(
        "═ emphasized (economics) edge",
        Style::default().fg(FOOTER_LABEL_COLOR),
    )));

    let panel = Paragraph::new(Text::from(lines))
        .block(Block::default().borders(Borders::ALL).title("─ Legend "));
    frame.render_widget(panel, area);
}

fn draw_notes_panel(frame: &mut Frame<'_>, area: Rect) {
    let mut lines = Vec::new();
    for (idx, section) in MAP_NOTES.iter().enumerate() {
        if idx > 0 {
            lines.push(Line::default());
        }
        lines.push(Line::from(Span::styled(
            section.title,
            Style::default().fg(SECTION_COLOR).add_modifier(Modifier::BOLD),
        )));
        for text in section.lines {
            lines.push(Line::from(*text));
        }
    }

    let panel = Paragraph::new(Text::from(lines))
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title("─ Notes "));
    frame.render_widget(panel, area);
}

fn draw_content_tab(
    frame: &mut Frame<'_>,
    area: Rect,
    title: &str,
    lines: &[Line<'static>],
    scroll: u16,
) {
    let panel = Paragraph::new(Text::from(lines.to_vec()))
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title(format!("─ {title} ")))
        .scroll((scroll, 0));
    frame.render_widget(panel, area);
}

fn draw_footer(frame: &mut Frame<'_>, app: &App, area: Rect) {
    if let Some(message) = app.active_toast() {
        let toast = Paragraph::new(Line::from(Span::styled(
            message.to_owned(),
            Style::default().fg(Color::Black).bg(BADGE_COLOR),
        )));
        frame.render_widget(toast, area);
        return;
    }

    let toggle = |on: bool| if on { "on" } else { "off" };
    let hints: [(&str, String); 7] = [
        ("/", "filter".to_owned()),
        ("e", format!("examples:{}", toggle(app.options.show_examples))),
        ("$", format!("economics:{}", toggle(app.options.show_economics))),
        ("r", format!("roomy:{}", toggle(app.options.roomy_layout))),
        ("f", "fit".to_owned()),
        ("?", "help".to_owned()),
        ("q", "quit".to_owned()),
    ];

    let mut spans = vec![Span::styled(
        FOOTER_BRAND,
        Style::default().fg(FOOTER_BRAND_COLOR).add_modifier(Modifier::BOLD),
    )];
    for (key, label) in hints {
        spans.push(Span::styled(format!(" {key} "), Style::default().fg(FOOTER_KEY_COLOR)));
        spans.push(Span::styled(label, Style::default().fg(FOOTER_LABEL_COLOR)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn draw_help_overlay(frame: &mut Frame<'_>, app: &mut App, area: Rect) {
    let popup = centered_rect(area, 60, 80);
    app.help_viewport_height = popup.height.saturating_sub(2);

    let help = Paragraph::new(Text::from(help_lines()))
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title("─ Help "))
        .scroll((app.help_scroll, 0));

    frame.render_widget(Clear, popup);
    frame.render_widget(help, popup);
}

fn centered_rect(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);
    horizontal[1]
}

fn section_line(text: &'static str) -> Line<'static> {
    Line::from(Span::styled(
        text,
        Style::default().fg(SECTION_COLOR).add_modifier(Modifier::BOLD),
    ))
}

fn canvas_lines() -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    for block in CANVAS_BLOCKS {
        lines.push(Line::from(vec![
            Span::raw(format!("{} ", block.icon.glyph())),
            Span::styled(
                block.title,
                Style::default().fg(SECTION_COLOR).add_modifier(Modifier::BOLD),
            ),
        ]));
        for item in block.items {
            lines.push(Line::from(format!("  • {item}")));
        }
        lines.push(Line::default());
    }

    lines.push(section_line("Extensions for agentic systems"));
    lines.push(Line::default());
    for block in CANVAS_EXTENSIONS {
        lines.push(Line::from(vec![
            Span::raw(format!("{} ", block.icon.glyph())),
            Span::styled(block.title, Style::default().add_modifier(Modifier::BOLD)),
        ]));
        for item in block.items {
            lines.push(Line::from(format!("  • {item}")));
        }
        lines.push(Line::default());
    }

    lines.push(Line::from(vec![
        Span::raw(format!("{} ", BlockIcon::Network.glyph())),
        Span::styled(
            "Narrative — how the parts reinforce each other",
            Style::default().fg(SECTION_COLOR).add_modifier(Modifier::BOLD),
        ),
    ]));
    lines.push(Line::default());
    for (idx, step) in CANVAS_NARRATIVE.iter().enumerate() {
        lines.push(Line::from(format!("  {}. {step}", idx + 1)));
    }

    lines
}

fn flywheel_lines() -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(
            "Every cycle yields templates and reputation that accelerate the next.",
            Style::default().fg(FOOTER_LABEL_COLOR),
        )),
        Line::default(),
    ];

    for (idx, step) in FLYWHEEL_STEPS.iter().enumerate() {
        lines.push(Line::from(vec![
            Span::styled(
                format!("Step {} ", idx + 1),
                Style::default().fg(BADGE_COLOR).add_modifier(Modifier::BOLD),
            ),
            Span::styled(step.title, Style::default().add_modifier(Modifier::BOLD)),
        ]));
        lines.push(Line::from(format!("  {}", step.text)));
        lines.push(Line::default());
    }

    lines.push(Line::from(Span::styled(
        FLYWHEEL_ECONOMICS_NOTE,
        Style::default().fg(FOOTER_LABEL_COLOR),
    )));

    lines
}

fn help_lines() -> Vec<Line<'static>> {
    let entries: [(&str, &str); 14] = [
        ("1-4", "switch tab directly"),
        ("Tab / Shift-Tab", "cycle tabs"),
        ("/", "edit the node filter (Enter keeps it, Esc clears it)"),
        ("c", "clear the filter"),
        ("e", "toggle the example ventures group"),
        ("$", "toggle economics edge labels"),
        ("r", "toggle roomy/compact spacing"),
        ("f", "fit the diagram to the viewport"),
        ("arrows / hjkl", "pan the diagram, scroll content tabs"),
        ("PgUp / PgDn", "pan or scroll faster"),
        ("Home", "re-fit / jump to top"),
        ("End", "jump to bottom (content tabs)"),
        ("?", "toggle this help"),
        ("q", "quit"),
    ];

    let mut lines = vec![section_line("Keys"), Line::default()];
    for (key, action) in entries {
        lines.push(Line::from(vec![
            Span::styled(format!("{key:>15}  "), Style::default().fg(FOOTER_KEY_COLOR)),
            Span::raw(action),
        ]));
    }
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        "The filter matches node labels case-insensitively; edges survive only \
when both endpoints do.",
        Style::default().fg(FOOTER_LABEL_COLOR),
    )));
    lines
}
