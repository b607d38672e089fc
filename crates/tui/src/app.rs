use std::{
    cmp, io, thread,
    time::{Duration, Instant},
};

use anyhow::{Context, Result};
use chrono::{Datelike, Local};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Tabs, Wrap},
    Frame, Terminal,
};
use tokio::sync::mpsc;
use tracing::{debug, error, info};
use winzones_core::{
    catalog::{self, GameRecord, PlayOutcome, FEATURED_LIMIT},
    contact::{ContactForm, DeepLink, Field, FormPhase, SUBJECTS},
    AppConfig, CatalogQuery, SiteContent,
};

use crate::block_font;

const TICK_RATE: Duration = Duration::from_millis(250);
const FEATURE_GLYPHS: [&str; 6] = ["◆", "★", "●", "■", "▲", "♦"];
const VALUE_GLYPHS: [&str; 4] = ["⚖", "◎", "■", "♥"];
const SCROLL_STEP: u16 = 1;
const PAGE_STEP: u16 = 10;

#[derive(Debug, Clone)]
struct Theme {
    primary_fg: Color,
    accent: Color,
    accent_alt: Color,
    muted: Color,
    selection_bg: Color,
    success: Color,
    warning: Color,
    danger: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary_fg: Color::White,
            accent: Color::Magenta,
            accent_alt: Color::Cyan,
            muted: Color::DarkGray,
            selection_bg: Color::DarkGray,
            success: Color::Green,
            warning: Color::Yellow,
            danger: Color::Red,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Screen {
    Home,
    Games,
    About,
    Contact,
}

impl Screen {
    const ALL: [Screen; 4] = [Screen::Home, Screen::Games, Screen::About, Screen::Contact];

    fn from_path(path: &str) -> Option<Self> {
        match path {
            "/" => Some(Screen::Home),
            "/games" => Some(Screen::Games),
            "/about" => Some(Screen::About),
            "/contact" => Some(Screen::Contact),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GamesMode {
    Browse,
    Search,
}

/// Notice shown when a playable card is opened.
#[derive(Debug, Clone, PartialEq, Eq)]
struct MaintenanceModal {
    game: String,
}

enum AppEvent {
    Input(Event),
    Tick,
}

/// Catalog page state: the active query and the ids it currently matches.
#[derive(Debug)]
struct GamesState {
    query: CatalogQuery,
    category_index: usize,
    mode: GamesMode,
    available: Vec<u32>,
    coming_soon: Vec<u32>,
    cursor: usize,
}

impl Default for GamesState {
    fn default() -> Self {
        Self {
            query: CatalogQuery::default(),
            category_index: 0,
            mode: GamesMode::Browse,
            available: Vec::new(),
            coming_soon: Vec::new(),
            cursor: 0,
        }
    }
}

impl GamesState {
    fn apply(&mut self, games: &[GameRecord]) {
        let view = self.query.apply(games);
        self.available = view.available.iter().map(|game| game.id).collect();
        self.coming_soon = view.coming_soon.iter().map(|game| game.id).collect();
        self.cursor = 0;
        debug!(
            category = %self.query.category,
            search = %self.query.search_text,
            available = self.available.len(),
            coming_soon = self.coming_soon.len(),
            "Catalog filtered"
        );
    }

    fn len(&self) -> usize {
        self.available.len() + self.coming_soon.len()
    }

    fn selected_id(&self) -> Option<u32> {
        self.available
            .iter()
            .chain(self.coming_soon.iter())
            .nth(self.cursor)
            .copied()
    }

    fn move_cursor(&mut self, delta: isize) {
        if self.len() == 0 {
            self.cursor = 0;
            return;
        }
        let max = self.len() as isize - 1;
        self.cursor = (self.cursor as isize + delta).clamp(0, max) as usize;
    }

    fn select_category(&mut self, categories: &[String], index: usize, games: &[GameRecord]) {
        let Some(category) = categories.get(index) else {
            return;
        };
        self.category_index = index;
        self.query.category = category.clone();
        self.apply(games);
    }

    fn cycle_category(&mut self, categories: &[String], delta: isize, games: &[GameRecord]) {
        if categories.is_empty() {
            return;
        }
        let len = categories.len() as isize;
        let next = (self.category_index as isize + delta).rem_euclid(len) as usize;
        self.select_category(categories, next, games);
    }

    fn push_search(&mut self, ch: char, games: &[GameRecord]) {
        self.query.search_text.push(ch);
        self.apply(games);
    }

    fn pop_search(&mut self, games: &[GameRecord]) {
        if self.query.search_text.pop().is_some() {
            self.apply(games);
        }
    }
}

/// Contact page state: the form plus which input has focus.
#[derive(Debug)]
struct ContactState {
    form: ContactForm,
    /// Index into [`Field::ALL`]; one past the end is the send button.
    focus: usize,
}

impl ContactState {
    const SEND: usize = Field::ALL.len();

    fn new(reset_delay: Duration) -> Self {
        Self {
            form: ContactForm::new(reset_delay),
            focus: 0,
        }
    }

    fn focused_field(&self) -> Option<Field> {
        Field::ALL.get(self.focus).copied()
    }

    fn focus_field(&mut self, field: Field) {
        if let Some(index) = Field::ALL.iter().position(|candidate| *candidate == field) {
            self.focus = index;
        }
    }

    fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % (Self::SEND + 1);
    }

    fn focus_prev(&mut self) {
        self.focus = (self.focus + Self::SEND) % (Self::SEND + 1);
    }

    fn subject_index(&self) -> Option<usize> {
        let current = self.form.input().subject.as_str();
        SUBJECTS.iter().position(|(key, _)| *key == current)
    }

    fn cycle_subject(&mut self, delta: isize) {
        let len = SUBJECTS.len() as isize;
        let next = match self.subject_index() {
            Some(index) => (index as isize + delta).rem_euclid(len) as usize,
            None if delta < 0 => SUBJECTS.len() - 1,
            None => 0,
        };
        self.form.set_field(Field::Subject, SUBJECTS[next].0);
    }

    fn type_char(&mut self, ch: char) {
        match self.focused_field() {
            Some(Field::Subject) | None => {}
            Some(field) => self.form.edit_field(field, |value| value.push(ch)),
        }
    }

    fn backspace(&mut self) {
        match self.focused_field() {
            Some(Field::Subject) => self.form.set_field(Field::Subject, ""),
            Some(field) => self.form.edit_field(field, |value| {
                value.pop();
            }),
            None => {}
        }
    }
}

/// High-level application state for the terminal site.
pub struct WinZonesApp {
    content: SiteContent,
    link: DeepLink,
    open_links: bool,
    screen: Screen,
    nav_open: bool,
    nav_cursor: usize,
    games: GamesState,
    contact: ContactState,
    modal: Option<MaintenanceModal>,
    scroll: u16,
    status: String,
    should_quit: bool,
    theme: Theme,
}

impl WinZonesApp {
    pub fn new(content: SiteContent, config: &AppConfig) -> Self {
        let link = config.deep_link(&content);
        let mut games = GamesState::default();
        games.apply(&content.games);
        Self {
            link,
            open_links: config.open_links,
            screen: Screen::Home,
            nav_open: false,
            nav_cursor: 0,
            games,
            contact: ContactState::new(config.reset_delay()),
            modal: None,
            scroll: 0,
            status: format!("Welcome to {}", content.site.name),
            should_quit: false,
            theme: Theme::default(),
            content,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        info!(
            games = self.content.games.len(),
            recipient = self.link.recipient(),
            "Starting terminal site"
        );

        let mut stdout = io::stdout();
        enable_raw_mode().context("failed to enter raw mode")?;
        execute!(stdout, EnterAlternateScreen).context("failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).context("failed to create terminal")?;
        terminal.hide_cursor()?;
        terminal.clear()?;

        let (event_tx, mut event_rx) = mpsc::channel::<AppEvent>(128);
        spawn_input_thread(event_tx);

        loop {
            terminal.draw(|frame| self.draw(frame))?;
            if self.should_quit {
                break;
            }

            match event_rx.recv().await {
                Some(AppEvent::Input(event)) => self.handle_input(event),
                Some(AppEvent::Tick) => self.handle_tick(Instant::now()),
                None => break,
            }

            if self.should_quit {
                break;
            }
        }

        restore_terminal(&mut terminal)?;
        Ok(())
    }

    fn set_status(&mut self, message: impl Into<String>) {
        self.status = message.into();
    }

    fn handle_tick(&mut self, now: Instant) {
        if self.contact.form.tick(now) {
            self.contact.focus = 0;
            self.set_status("Contact form cleared");
        }
    }

    fn navigate(&mut self, screen: Screen) {
        if self.screen != screen {
            debug!(?screen, "Navigate");
        }
        self.screen = screen;
        self.nav_open = false;
        self.scroll = 0;
        self.games.mode = GamesMode::Browse;
        let hint = match screen {
            Screen::Home => "Esc menu  j/k scroll  1-4 pages  q quit",
            Screen::Games => "/ search  h/l category  Enter play  Esc menu",
            Screen::About => "j/k scroll  Esc menu  q quit",
            Screen::Contact => "Tab next field  ←/→ subject  Ctrl-S send  Esc menu",
        };
        self.set_status(hint);
    }

    fn handle_input(&mut self, event: Event) {
        let Event::Key(key) = event else {
            return;
        };
        if key.kind != KeyEventKind::Press {
            return;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        if self.modal.is_some() {
            self.handle_modal_key(key);
        } else if self.nav_open {
            self.handle_nav_key(key);
        } else if key.code == KeyCode::Esc {
            if self.screen == Screen::Games && self.games.mode == GamesMode::Search {
                self.games.mode = GamesMode::Browse;
                self.set_status("Search closed");
            } else {
                self.open_nav();
            }
        } else {
            match self.screen {
                Screen::Home | Screen::About => self.handle_page_key(key),
                Screen::Games => self.handle_games_key(key),
                Screen::Contact => self.handle_contact_key(key),
            }
        }
    }

    fn open_nav(&mut self) {
        self.nav_open = true;
        self.nav_cursor = self
            .content
            .nav
            .iter()
            .position(|item| Screen::from_path(&item.path) == Some(self.screen))
            .unwrap_or(0);
    }

    fn handle_nav_key(&mut self, key: KeyEvent) {
        let items = self.content.nav.len();
        match key.code {
            KeyCode::Esc | KeyCode::Char('m') => self.nav_open = false,
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('j') | KeyCode::Down if items > 0 => {
                self.nav_cursor = cmp::min(self.nav_cursor + 1, items - 1);
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.nav_cursor = self.nav_cursor.saturating_sub(1);
            }
            KeyCode::Enter => {
                let target = self
                    .content
                    .nav
                    .get(self.nav_cursor)
                    .and_then(|item| Screen::from_path(&item.path));
                match target {
                    Some(screen) => self.navigate(screen),
                    None => self.set_status("That page is not available here"),
                }
            }
            _ => {}
        }
    }

    fn handle_global_key(&mut self, key: &KeyEvent) -> bool {
        if !key.modifiers.is_empty() && key.modifiers != KeyModifiers::SHIFT {
            return false;
        }
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('m') => self.open_nav(),
            KeyCode::Char(digit @ '1'..='4') => {
                let index = digit as usize - '1' as usize;
                self.navigate(Screen::ALL[index]);
            }
            _ => return false,
        }
        true
    }

    fn handle_page_key(&mut self, key: KeyEvent) {
        if self.handle_global_key(&key) {
            return;
        }
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => self.scroll = self.scroll.saturating_add(SCROLL_STEP),
            KeyCode::Char('k') | KeyCode::Up => self.scroll = self.scroll.saturating_sub(SCROLL_STEP),
            KeyCode::PageDown => self.scroll = self.scroll.saturating_add(PAGE_STEP),
            KeyCode::PageUp => self.scroll = self.scroll.saturating_sub(PAGE_STEP),
            KeyCode::Home | KeyCode::Char('g') => self.scroll = 0,
            KeyCode::Enter if self.screen == Screen::Home => self.navigate(Screen::Games),
            _ => {}
        }
    }

    fn handle_games_key(&mut self, key: KeyEvent) {
        if self.games.mode == GamesMode::Search {
            match key.code {
                KeyCode::Enter => {
                    self.games.mode = GamesMode::Browse;
                    let message = format!("Search applied: {}", self.games.query.search_text);
                    self.set_status(message);
                }
                KeyCode::Backspace => self.games.pop_search(&self.content.games),
                KeyCode::Char(ch)
                    if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT =>
                {
                    self.games.push_search(ch, &self.content.games);
                }
                _ => {}
            }
            return;
        }

        if self.handle_global_key(&key) {
            return;
        }
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => self.games.move_cursor(1),
            KeyCode::Char('k') | KeyCode::Up => self.games.move_cursor(-1),
            KeyCode::Char('l') | KeyCode::Right | KeyCode::Tab => {
                self.games
                    .cycle_category(&self.content.categories, 1, &self.content.games);
                self.announce_filter();
            }
            KeyCode::Char('h') | KeyCode::Left | KeyCode::BackTab => {
                self.games
                    .cycle_category(&self.content.categories, -1, &self.content.games);
                self.announce_filter();
            }
            KeyCode::Char('/') => {
                self.games.mode = GamesMode::Search;
                self.set_status("Type to search games");
            }
            KeyCode::Char('x') => {
                self.games.query = CatalogQuery::default();
                self.games.category_index = 0;
                self.games.apply(&self.content.games);
                self.set_status("Filters cleared");
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.play_selected(),
            _ => {}
        }
    }

    fn announce_filter(&mut self) {
        let message = format!(
            "{}: {} available, {} coming soon",
            self.games.query.category,
            self.games.available.len(),
            self.games.coming_soon.len()
        );
        self.set_status(message);
    }

    fn play_selected(&mut self) {
        let Some(game) = self
            .games
            .selected_id()
            .and_then(|id| self.content.game(id))
        else {
            return;
        };
        match game.play() {
            PlayOutcome::Maintenance { game } => {
                info!(game = %game, "Play requested");
                self.modal = Some(MaintenanceModal { game });
            }
            PlayOutcome::Ignored => {
                let message = format!("{} is coming soon", game.name);
                self.set_status(message);
            }
        }
    }

    fn handle_modal_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('c') => self.modal = None,
            KeyCode::Char('o') => {
                self.modal = None;
                self.navigate(Screen::Games);
            }
            _ => {}
        }
    }

    fn handle_contact_key(&mut self, key: KeyEvent) {
        let subject_focused = self.contact.focused_field() == Some(Field::Subject);
        match key.code {
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.submit_contact()
            }
            KeyCode::Tab | KeyCode::Down => self.contact.focus_next(),
            KeyCode::BackTab | KeyCode::Up => self.contact.focus_prev(),
            KeyCode::Left if subject_focused => self.contact.cycle_subject(-1),
            KeyCode::Right if subject_focused => self.contact.cycle_subject(1),
            KeyCode::Enter => match self.contact.focused_field() {
                None => self.submit_contact(),
                Some(Field::Message) => self
                    .contact
                    .form
                    .edit_field(Field::Message, |value| value.push('\n')),
                Some(_) => self.contact.focus_next(),
            },
            KeyCode::Backspace => self.contact.backspace(),
            KeyCode::Char(ch)
                if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT =>
            {
                if self.contact.focused_field().is_none() {
                    self.handle_global_key(&key);
                } else {
                    self.contact.type_char(ch);
                }
            }
            _ => {}
        }
    }

    fn submit_contact(&mut self) {
        let result =
            self.contact
                .form
                .submit(&self.content.site.name, &self.link, Instant::now());
        match result {
            Ok(submission) => {
                self.contact.focus = 0;
                if !self.open_links {
                    self.set_status(format!("Message ready: {}", submission.url));
                    return;
                }
                match open::that(&submission.url) {
                    Ok(()) => self.set_status("Opening WhatsApp with your message"),
                    Err(err) => {
                        error!(?err, "Failed to open messaging link");
                        self.set_status(format!("Could not open link: {err}"));
                    }
                }
            }
            Err(errors) => {
                if let Some((field, _)) = errors.iter().next() {
                    self.contact.focus_field(field);
                }
                self.set_status(format!("Please fix {} field(s)", errors.len()));
            }
        }
    }

    fn draw(&mut self, frame: &mut Frame) {
        let area = frame.size();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(5),
                Constraint::Length(4),
            ])
            .split(area);

        self.render_header(frame, chunks[0]);
        match self.screen {
            Screen::Home => self.draw_home(frame, chunks[1]),
            Screen::Games => self.draw_games(frame, chunks[1]),
            Screen::About => self.draw_about(frame, chunks[1]),
            Screen::Contact => self.draw_contact(frame, chunks[1]),
        }
        self.render_footer(frame, chunks[2]);

        if self.nav_open {
            self.render_nav(frame);
        }
        if let Some(modal) = &self.modal {
            self.render_maintenance(frame, modal);
        }
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let titles: Vec<Line> = self
            .content
            .nav
            .iter()
            .map(|item| Line::from(item.name.clone()))
            .collect();
        let selected = self
            .content
            .nav
            .iter()
            .position(|item| Screen::from_path(&item.path) == Some(self.screen))
            .unwrap_or(0);
        let brand = format!(" {} {} ", self.content.site.logo, self.content.site.name);
        let tabs = Tabs::new(titles)
            .select(selected)
            .block(Block::default().borders(Borders::ALL).title(Span::styled(
                brand,
                Style::default()
                    .fg(self.theme.accent)
                    .add_modifier(Modifier::BOLD),
            )))
            .style(Style::default().fg(self.theme.muted))
            .highlight_style(
                Style::default()
                    .fg(self.theme.accent_alt)
                    .add_modifier(Modifier::BOLD),
            );
        frame.render_widget(tabs, area);
    }

    fn render_footer(&self, frame: &mut Frame, area: Rect) {
        let site = &self.content.site;
        let copyright = format!(
            "© {} - {} {}. All rights reserved.",
            site.founded_year,
            Local::now().year(),
            site.name
        );
        let paragraph = Paragraph::new(vec![
            Line::from(self.status.clone()),
            Line::from(Span::styled(copyright, Style::default().fg(self.theme.muted))),
        ])
        .block(Block::default().borders(Borders::ALL).title("Status"))
        .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
    }

    fn heading(&self, text: impl Into<String>) -> Line<'static> {
        Line::from(Span::styled(
            text.into(),
            Style::default()
                .fg(self.theme.accent)
                .add_modifier(Modifier::BOLD),
        ))
    }

    fn draw_home(&self, frame: &mut Frame, area: Rect) {
        let site = &self.content.site;
        let mut lines: Vec<Line> = Vec::new();

        let banner = block_font::render(&site.name);
        if block_font::width(&banner) + 2 <= area.width as usize {
            lines.extend(banner.into_iter().map(|row| {
                Line::from(Span::styled(row, Style::default().fg(self.theme.accent)))
            }));
        } else {
            lines.push(self.heading(site.name.clone()));
        }
        lines.push(Line::from(Span::styled(
            site.tagline.clone(),
            Style::default()
                .fg(self.theme.accent_alt)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(format!(
            "{} Join thousands of players and start winning today!",
            site.description
        )));
        lines.push(Line::from(""));

        let stats: Vec<Span> = self
            .content
            .stats
            .iter()
            .take(3)
            .flat_map(|stat| {
                [
                    Span::styled(
                        stat.display_value(),
                        Style::default()
                            .fg(self.theme.warning)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(format!(" {}   ", stat.label)),
                ]
            })
            .collect();
        lines.push(Line::from(stats));
        lines.push(Line::from(""));

        lines.push(self.heading(format!("Why Choose {}?", site.name)));
        for (index, feature) in self.content.features.iter().enumerate() {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("{} ", glyph_for(&FEATURE_GLYPHS, index)),
                    Style::default().fg(self.theme.accent_alt),
                ),
                Span::styled(
                    feature.title.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw(format!(" - {}", feature.description)),
            ]));
        }
        lines.push(Line::from(""));

        lines.push(self.heading("Featured Games"));
        for game in catalog::featured(&self.content.games, FEATURED_LIMIT) {
            lines.push(self.game_summary_line(game));
        }
        lines.push(Line::from(Span::styled(
            "Press Enter to view all games",
            Style::default().fg(self.theme.muted),
        )));
        lines.push(Line::from(""));

        lines.push(self.heading("How It Works"));
        for step in &self.content.how_it_works {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("{} ", step.number),
                    Style::default().fg(self.theme.warning),
                ),
                Span::styled(step.title.clone(), Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(format!(" - {}", step.description)),
            ]));
        }
        lines.push(Line::from(""));

        lines.push(self.heading("What Our Players Say"));
        for testimonial in &self.content.testimonials {
            lines.push(Line::from(format!(
                "{} \"{}\"",
                testimonial.avatar, testimonial.content
            )));
            lines.push(Line::from(Span::styled(
                format!(
                    "   {}, {} · won {}",
                    testimonial.name, testimonial.location, testimonial.winnings
                ),
                Style::default().fg(self.theme.muted),
            )));
        }

        let paragraph = Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title("Home"))
            .wrap(Wrap { trim: false })
            .scroll((self.scroll, 0));
        frame.render_widget(paragraph, area);
    }

    fn game_summary_line(&self, game: &GameRecord) -> Line<'static> {
        let mut spans = vec![
            Span::styled(
                game.name.clone(),
                Style::default()
                    .fg(self.theme.primary_fg)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(" · {}", game.category),
                Style::default().fg(self.theme.muted),
            ),
        ];
        for badge in game.badges() {
            spans.push(Span::raw(" "));
            spans.push(Span::styled(
                format!("[{}]", badge.label()),
                Style::default().fg(self.badge_color(badge)),
            ));
        }
        spans.push(Span::raw(format!(
            "  {} players · {} prizes",
            game.players, game.prize_pool
        )));
        Line::from(spans)
    }

    fn badge_color(&self, badge: catalog::Badge) -> Color {
        match badge {
            catalog::Badge::Hot => self.theme.danger,
            catalog::Badge::New => self.theme.success,
            catalog::Badge::Soon => self.theme.muted,
        }
    }

    fn draw_games(&self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Length(3), Constraint::Min(5)])
            .split(area);

        let tabs = Tabs::new(
            self.content
                .categories
                .iter()
                .map(|category| Line::from(category.clone()))
                .collect::<Vec<_>>(),
        )
        .select(self.games.category_index)
        .block(Block::default().borders(Borders::ALL).title(format!(
            "{} Games Available · {} Total",
            catalog::available_count(&self.content.games),
            self.content.games.len()
        )))
        .highlight_style(
            Style::default()
                .fg(self.theme.accent)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED),
        );
        frame.render_widget(tabs, chunks[0]);

        let searching = self.games.mode == GamesMode::Search;
        let search_text = if self.games.query.search_text.is_empty() && !searching {
            Span::styled("Search games...", Style::default().fg(self.theme.muted))
        } else {
            Span::raw(self.games.query.search_text.clone())
        };
        let search_style = if searching {
            Style::default().fg(self.theme.accent_alt)
        } else {
            Style::default()
        };
        let search = Paragraph::new(Line::from(vec![Span::raw("🔍 "), search_text])).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(search_style)
                .title("Search"),
        );
        frame.render_widget(search, chunks[1]);
        if searching {
            let width = self.games.query.search_text.chars().count() as u16;
            let x = (chunks[1].x + 4 + width).min(chunks[1].right().saturating_sub(2));
            frame.set_cursor(x, chunks[1].y + 1);
        }

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(chunks[2]);
        self.render_game_list(frame, body[0]);
        self.render_game_details(frame, body[1]);
    }

    fn render_game_list(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default().borders(Borders::ALL).title("Games");
        if self.games.len() == 0 {
            let empty = Paragraph::new(vec![
                Line::from(Span::styled(
                    "No games found",
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    "Try adjusting your search or filter",
                    Style::default().fg(self.theme.muted),
                )),
            ])
            .alignment(Alignment::Center)
            .block(block);
            frame.render_widget(empty, area);
            return;
        }

        let mut items = Vec::new();
        let mut selected_row = None;
        let sections = [
            ("Available Games", &self.games.available),
            ("Coming Soon", &self.games.coming_soon),
        ];
        let mut position = 0;
        for (title, ids) in sections {
            if ids.is_empty() {
                continue;
            }
            items.push(ListItem::new(Line::from(Span::styled(
                format!("{title} ({} games)", ids.len()),
                Style::default()
                    .fg(self.theme.accent_alt)
                    .add_modifier(Modifier::BOLD),
            ))));
            for id in ids.iter() {
                let Some(game) = self.content.game(*id) else {
                    continue;
                };
                if position == self.games.cursor {
                    selected_row = Some(items.len());
                }
                let marker = if position == self.games.cursor { "▶ " } else { "  " };
                let mut spans = vec![
                    Span::styled(marker, Style::default().fg(self.theme.accent)),
                    Span::raw(game.name.clone()),
                ];
                for badge in game.badges() {
                    spans.push(Span::styled(
                        format!(" {}", badge.label()),
                        Style::default().fg(self.badge_color(badge)),
                    ));
                }
                items.push(ListItem::new(Line::from(spans)));
                position += 1;
            }
        }

        let mut list_state = ListState::default();
        list_state.select(selected_row);
        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().bg(self.theme.selection_bg));
        frame.render_stateful_widget(list, area, &mut list_state);
    }

    fn render_game_details(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default().borders(Borders::ALL).title("Game Details");
        let Some(game) = self
            .games
            .selected_id()
            .and_then(|id| self.content.game(id))
        else {
            frame.render_widget(Paragraph::new("Select a game").block(block), area);
            return;
        };

        let mut lines = vec![
            Line::from(Span::styled(
                game.name.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                game.category.clone(),
                Style::default().fg(self.theme.muted),
            )),
            Line::from(""),
            Line::from(game.description.clone()),
            Line::from(""),
            Line::from(format!("Players:    {}", game.players)),
            Line::from(format!("Prize Pool: {}", game.prize_pool)),
        ];
        let badges: Vec<&str> = game.badges().into_iter().map(|badge| badge.label()).collect();
        if !badges.is_empty() {
            lines.push(Line::from(format!("Tags:       {}", badges.join(", "))));
        }
        lines.push(Line::from(""));
        if game.coming_soon {
            lines.push(Line::from(Span::styled(
                "Coming Soon",
                Style::default().fg(self.theme.muted),
            )));
        } else {
            lines.push(Line::from(Span::styled(
                "▶ Play Now (Enter)",
                Style::default()
                    .fg(self.theme.success)
                    .add_modifier(Modifier::BOLD),
            )));
        }

        let paragraph = Paragraph::new(lines).block(block).wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
    }

    fn draw_about(&self, frame: &mut Frame, area: Rect) {
        let about = &self.content.about;
        let mut lines: Vec<Line> = vec![self.heading(format!("About {}", self.content.site.name))];
        for paragraph in about.story_paragraphs() {
            lines.push(Line::from(paragraph.to_string()));
            lines.push(Line::from(""));
        }
        for highlight in &about.highlights {
            lines.push(Line::from(vec![
                Span::styled("✓ ", Style::default().fg(self.theme.success)),
                Span::raw(highlight.clone()),
            ]));
        }
        lines.push(Line::from(""));

        lines.push(self.heading("Our Mission"));
        lines.push(Line::from(about.mission.clone()));
        lines.push(Line::from(""));
        lines.push(self.heading("Our Vision"));
        lines.push(Line::from(about.vision.clone()));
        lines.push(Line::from(""));

        lines.push(self.heading("Our Values"));
        for (index, value) in about.values.iter().enumerate() {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("{} ", glyph_for(&VALUE_GLYPHS, index)),
                    Style::default().fg(self.theme.accent_alt),
                ),
                Span::styled(value.title.clone(), Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(format!(" - {}", value.description)),
            ]));
        }
        lines.push(Line::from(""));

        lines.push(self.heading("Our Journey"));
        for milestone in &about.timeline {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("{}  ", milestone.year),
                    Style::default().fg(self.theme.warning),
                ),
                Span::raw(milestone.event.clone()),
            ]));
        }
        lines.push(Line::from(""));

        lines.push(self.heading("By the Numbers"));
        for stat in &self.content.stats {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("{:>8}", stat.display_value()),
                    Style::default()
                        .fg(self.theme.warning)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(format!("  {}", stat.label)),
            ]));
        }

        let paragraph = Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title("About Us"))
            .wrap(Wrap { trim: false })
            .scroll((self.scroll, 0));
        frame.render_widget(paragraph, area);
    }

    fn draw_contact(&self, frame: &mut Frame, area: Rect) {
        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(area);
        self.render_contact_info(frame, body[0]);
        if self.contact.form.phase() == FormPhase::Submitted {
            self.render_contact_success(frame, body[1]);
        } else {
            self.render_contact_form(frame, body[1]);
        }
    }

    fn render_contact_info(&self, frame: &mut Frame, area: Rect) {
        let contact = &self.content.contact;
        let label = |text: &str| {
            Line::from(Span::styled(
                text.to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            ))
        };
        let mut lines = vec![
            label("Email Us"),
            Line::from(contact.email.clone()),
            Line::from(Span::styled(
                "We reply within 24 hours",
                Style::default().fg(self.theme.muted),
            )),
            Line::from(""),
            label("WhatsApp"),
            Line::from(self.link.chat_url()),
            Line::from(""),
            label("Call Us"),
            Line::from(contact.phone_display.clone()),
            Line::from(""),
            label("Visit Us"),
            Line::from(contact.address.line1.clone()),
            Line::from(contact.address.line2.clone()),
            Line::from(format!(
                "{} - {}, {}",
                contact.address.city, contact.address.pincode, contact.address.country
            )),
            Line::from(""),
            label("Follow Us"),
        ];
        for (name, url) in self.content.social.entries() {
            lines.push(Line::from(vec![
                Span::styled(format!("{name:<10}"), Style::default().fg(self.theme.muted)),
                Span::raw(url.to_string()),
            ]));
        }

        let paragraph = Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title("Contact Information"))
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
    }

    fn render_contact_form(&self, frame: &mut Frame, area: Rect) {
        let input = self.contact.form.input();
        let errors = self.contact.form.errors();
        let mut lines = Vec::new();

        for (index, field) in Field::ALL.iter().copied().enumerate() {
            let focused = self.contact.focus == index;
            let marker = if focused { "▶ " } else { "  " };
            let suffix = if field.required() { " *" } else { " (optional)" };
            lines.push(Line::from(vec![
                Span::styled(marker, Style::default().fg(self.theme.accent)),
                Span::styled(
                    format!("{}{}", field.label(), suffix),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
            ]));

            let value_style = if focused {
                Style::default().fg(self.theme.accent_alt)
            } else {
                Style::default().fg(self.theme.primary_fg)
            };
            if field == Field::Subject {
                let text = match self.contact.subject_index() {
                    Some(index) => SUBJECTS[index].1.to_string(),
                    None if input.subject.is_empty() => "Select a subject".to_string(),
                    None => input.subject.clone(),
                };
                lines.push(Line::from(Span::styled(format!("    ◀ {text} ▶"), value_style)));
            } else {
                let value = input.get(field);
                let cursor = if focused { "▏" } else { "" };
                let mut value_lines: Vec<&str> = value.split('\n').collect();
                let last = value_lines.pop().unwrap_or_default();
                for line in value_lines {
                    lines.push(Line::from(Span::styled(format!("    {line}"), value_style)));
                }
                lines.push(Line::from(Span::styled(
                    format!("    {last}{cursor}"),
                    value_style,
                )));
            }

            if let Some(message) = errors.get(field) {
                lines.push(Line::from(Span::styled(
                    format!("    ! {message}"),
                    Style::default().fg(self.theme.danger),
                )));
            }
        }

        lines.push(Line::from(""));
        let send_style = if self.contact.focus == ContactState::SEND {
            Style::default()
                .fg(self.theme.primary_fg)
                .bg(self.theme.success)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.theme.success)
        };
        lines.push(Line::from(Span::styled("[ Send via WhatsApp ]", send_style)));
        lines.push(Line::from(Span::styled(
            "Your message will be sent via WhatsApp",
            Style::default().fg(self.theme.muted),
        )));

        let paragraph = Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title("Send us a Message"))
            .wrap(Wrap { trim: false });
        frame.render_widget(paragraph, area);
    }

    fn render_contact_success(&self, frame: &mut Frame, area: Rect) {
        let remaining = self
            .contact
            .form
            .reset_remaining(Instant::now())
            .map(|left| left.as_secs() + u64::from(left.subsec_nanos() > 0))
            .unwrap_or(0);
        let mut lines = vec![
            Line::from(Span::styled(
                "✓ Message Sent!",
                Style::default()
                    .fg(self.theme.success)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from("WhatsApp has been opened with your message."),
            Line::from("Please send it to complete your inquiry."),
            Line::from(""),
        ];
        if let Some(submission) = self.contact.form.last_submission() {
            lines.push(Line::from(Span::styled(
                format!("Subject: {}", submission.payload.subject_label),
                Style::default().fg(self.theme.muted),
            )));
        }
        lines.push(Line::from(Span::styled(
            format!("The form clears in {remaining}s; start typing to keep editing."),
            Style::default().fg(self.theme.muted),
        )));

        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("Send us a Message"))
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
    }

    fn render_nav(&self, frame: &mut Frame) {
        let items = &self.content.nav;
        let height = (items.len() as u16).saturating_add(4);
        let area = centered_rect(30, height, frame.size());
        frame.render_widget(Clear, area);

        let mut lines: Vec<Line> = items
            .iter()
            .enumerate()
            .map(|(idx, item)| {
                if idx == self.nav_cursor {
                    Line::from(Span::styled(
                        format!("▶ {}", item.name),
                        Style::default()
                            .fg(self.theme.accent)
                            .add_modifier(Modifier::BOLD),
                    ))
                } else {
                    Line::from(Span::styled(
                        format!("  {}", item.name),
                        Style::default().fg(self.theme.primary_fg),
                    ))
                }
            })
            .collect();
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Enter go  Esc close  q quit",
            Style::default().fg(self.theme.muted),
        )));

        let menu = Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title("Menu"))
            .alignment(Alignment::Center);
        frame.render_widget(menu, area);
    }

    fn render_maintenance(&self, frame: &mut Frame, modal: &MaintenanceModal) {
        let frame_area = frame.size();
        let width = cmp::max(cmp::min(60_u16, frame_area.width.saturating_sub(4)), 24);
        let area = centered_rect(width, 16, frame_area);
        frame.render_widget(Clear, area);

        let lines = vec![
            Line::from(Span::styled(
                "🔧 Under Maintenance",
                Style::default()
                    .fg(self.theme.warning)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                modal.game.clone(),
                Style::default()
                    .fg(self.theme.accent)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from("We're currently working on making this game even better for you!"),
            Line::from("Our team is adding exciting new features and improvements."),
            Line::from(""),
            Line::from(Span::styled(
                "● Maintenance in progress",
                Style::default().fg(self.theme.warning),
            )),
            Line::from("We'll notify you when it's live!"),
            Line::from(""),
            Line::from("Expected to be back soon. Thank you for your patience! 🎮"),
            Line::from(""),
            Line::from(vec![
                Span::styled("Esc", Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(" close  "),
                Span::styled("o", Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(" other games"),
            ]),
            Line::from(Span::styled(
                format!(
                    "{} © {}",
                    self.content.site.name, self.content.site.founded_year
                ),
                Style::default().fg(self.theme.muted),
            )),
        ];

        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL))
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
    }
}

fn glyph_for(glyphs: &[&'static str], index: usize) -> &'static str {
    glyphs[index % glyphs.len()]
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("failed to leave alternate screen")?;
    terminal.show_cursor()?;
    Ok(())
}

fn spawn_input_thread(sender: mpsc::Sender<AppEvent>) {
    thread::spawn(move || loop {
        match event::poll(TICK_RATE) {
            Ok(true) => match event::read() {
                Ok(evt) => {
                    if sender.blocking_send(AppEvent::Input(evt)).is_err() {
                        break;
                    }
                }
                Err(_) => break,
            },
            Ok(false) => {
                if sender.blocking_send(AppEvent::Tick).is_err() {
                    break;
                }
            }
            Err(_) => break,
        }
    });
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn app() -> WinZonesApp {
        let config = AppConfig {
            open_links: false,
            ..AppConfig::default()
        };
        WinZonesApp::new(SiteContent::builtin(), &config)
    }

    fn type_text(app: &mut WinZonesApp, text: &str) {
        for ch in text.chars() {
            app.handle_input(press(KeyCode::Char(ch)));
        }
    }

    #[test]
    fn category_cycle_wraps_and_filters() {
        let content = SiteContent::builtin();
        let mut games = GamesState::default();
        games.apply(&content.games);
        assert_eq!(games.len(), 8);

        games.cycle_category(&content.categories, 1, &content.games);
        assert_eq!(games.query.category, "Card Games");
        assert_eq!(games.available, [2, 6]);
        assert_eq!(games.coming_soon, [8]);

        games.cycle_category(&content.categories, -2, &content.games);
        assert_eq!(games.query.category, "Trivia");
        assert_eq!(games.selected_id(), Some(5));
    }

    #[test]
    fn search_narrows_and_cursor_stays_in_bounds() {
        let content = SiteContent::builtin();
        let mut games = GamesState::default();
        games.apply(&content.games);
        games.move_cursor(100);
        assert_eq!(games.selected_id(), Some(8));
        for ch in "master".chars() {
            games.push_search(ch, &content.games);
        }
        assert_eq!(games.available, [1, 5, 6]);
        assert_eq!(games.cursor, 0);
        games.move_cursor(-3);
        assert_eq!(games.selected_id(), Some(1));
        games.pop_search(&content.games);
        assert_eq!(games.query.search_text, "maste");
    }

    #[test]
    fn playing_opens_maintenance_only_for_playable_games() {
        let mut app = app();
        app.navigate(Screen::Games);
        app.handle_input(press(KeyCode::Enter));
        assert_eq!(
            app.modal,
            Some(MaintenanceModal {
                game: "Ludo Master".into()
            })
        );
        app.handle_input(press(KeyCode::Esc));
        assert!(app.modal.is_none());

        app.games.move_cursor(7);
        app.handle_input(press(KeyCode::Enter));
        assert!(app.modal.is_none());
        assert_eq!(app.status, "Poker Pro is coming soon");
    }

    #[test]
    fn nav_menu_toggles_and_navigates() {
        let mut app = app();
        app.handle_input(press(KeyCode::Esc));
        assert!(app.nav_open);
        app.handle_input(press(KeyCode::Down));
        app.handle_input(press(KeyCode::Down));
        app.handle_input(press(KeyCode::Enter));
        assert!(!app.nav_open);
        assert_eq!(app.screen, Screen::About);

        app.handle_input(press(KeyCode::Char('4')));
        assert_eq!(app.screen, Screen::Contact);
    }

    #[test]
    fn contact_typing_and_submit_flow() {
        let mut app = app();
        app.navigate(Screen::Contact);

        app.contact.focus = ContactState::SEND;
        app.handle_input(press(KeyCode::Enter));
        assert_eq!(app.contact.focused_field(), Some(Field::Name));
        assert_eq!(app.contact.form.errors().len(), 4);

        type_text(&mut app, "Jane Doe");
        assert_eq!(app.contact.form.errors().get(Field::Name), None);
        app.handle_input(press(KeyCode::Tab));
        type_text(&mut app, "jane@example.com");
        app.handle_input(press(KeyCode::Tab));
        app.handle_input(press(KeyCode::Tab));
        app.handle_input(press(KeyCode::Right));
        assert_eq!(app.contact.form.input().subject, "general");
        app.handle_input(press(KeyCode::Tab));
        type_text(&mut app, "Hello, I need help.");
        app.handle_input(press(KeyCode::Tab));
        app.handle_input(press(KeyCode::Enter));

        assert_eq!(app.contact.form.phase(), FormPhase::Submitted);
        assert!(app.status.starts_with("Message ready: https://wa.me/918228822825?text="));

        let later = Instant::now() + Duration::from_secs(60);
        app.handle_tick(later);
        assert_eq!(app.contact.form.phase(), FormPhase::Editing);
        assert!(app.contact.form.input().name.is_empty());
    }

    #[test]
    fn subject_cycles_backwards_from_empty() {
        let mut contact = ContactState::new(Duration::from_secs(5));
        contact.cycle_subject(-1);
        assert_eq!(contact.form.input().subject, "partnership");
        contact.cycle_subject(1);
        assert_eq!(contact.form.input().subject, "general");
        contact.focus_field(Field::Subject);
        contact.backspace();
        assert_eq!(contact.subject_index(), None);
    }

    #[test]
    fn glyphs_cycle_by_index() {
        assert_eq!(glyph_for(&FEATURE_GLYPHS, 0), glyph_for(&FEATURE_GLYPHS, 6));
        assert_eq!(glyph_for(&VALUE_GLYPHS, 5), VALUE_GLYPHS[1]);
    }
}
