//! Ratatui-based terminal UI.
//!
//! Three screens driven by [`Navigator`]: a login form, a dashboard of
//! channel cards, and a channel detail page with analytics charts, the video
//! list and the purchase panel.

use std::io;
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use plotters::style::RGBColor;
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Cell, Clear, List, ListItem, ListState, Paragraph, Row, Table, Tabs, Wrap},
};
use tracing::{debug, info};

use crate::app::pipeline::LoadedCatalog;
use crate::config::Settings;
use crate::data::{Catalog, SeriesSummary};
use crate::domain::{Channel, DailyPoint, Metric, Window};
use crate::error::AppError;
use crate::report::{HOW_TO_BUY, format_compact, format_grouped, format_price, truncate};
use crate::session::{
    AcceptNonEmpty, Credentials, LinkOpener, Navigator, Screen, SystemOpener, contact_seller, visit_channel,
};

mod plotters_chart;

use plotters_chart::MetricChart;

/// Start the TUI.
pub fn run(loaded: LoadedCatalog, settings: &Settings) -> Result<(), AppError> {
    let _guard = TerminalGuard::new()?;

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal =
        Terminal::new(backend).map_err(|e| AppError::new(4, format!("Failed to initialize terminal: {e}")))?;

    let mut app = App::new(loaded.catalog, SystemOpener::new(settings.opener.clone()));
    if let Some(seed) = loaded.seed {
        app.status = format!("seed: {seed}");
    }
    info!("tui started");
    app.event_loop(&mut terminal)
}

/// Ensures the terminal is restored (raw mode, alternate screen) on exit.
struct TerminalGuard;

impl TerminalGuard {
    fn new() -> Result<Self, AppError> {
        enable_raw_mode().map_err(|e| AppError::new(4, format!("Failed to enable raw mode: {e}")))?;
        if let Err(e) = execute!(io::stdout(), EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(AppError::new(4, format!("Failed to enter alternate screen: {e}")));
        }
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LoginField {
    Email,
    Password,
}

/// Which key map is active. Popups take precedence over the screen below.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Alert,
    Login,
    Dashboard,
    Detail,
    EditingEmail,
    Confirm,
}

struct App<O: LinkOpener> {
    catalog: Catalog,
    nav: Navigator<AcceptNonEmpty>,
    opener: O,
    login_email: String,
    login_password: String,
    login_focus: LoginField,
    selected: usize,
    editing_email: bool,
    alert: Option<String>,
    status: String,
}

impl<O: LinkOpener> App<O> {
    fn new(catalog: Catalog, opener: O) -> Self {
        Self {
            catalog,
            nav: Navigator::new(AcceptNonEmpty),
            opener,
            login_email: String::new(),
            login_password: String::new(),
            login_focus: LoginField::Email,
            selected: 0,
            editing_email: false,
            alert: None,
            status: String::new(),
        }
    }

    fn mode(&self) -> Mode {
        if self.alert.is_some() {
            return Mode::Alert;
        }
        match self.nav.screen() {
            Screen::LoggedOut => Mode::Login,
            Screen::Dashboard => Mode::Dashboard,
            Screen::ChannelDetail(detail) if detail.showing_confirmation() => Mode::Confirm,
            Screen::ChannelDetail(_) if self.editing_email => Mode::EditingEmail,
            Screen::ChannelDetail(_) => Mode::Detail,
        }
    }

    fn event_loop<B: ratatui::backend::Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<(), AppError> {
        let mut needs_redraw = true;
        loop {
            if needs_redraw {
                terminal
                    .draw(|f| self.draw(f))
                    .map_err(|e| AppError::new(4, format!("Terminal draw error: {e}")))?;
                needs_redraw = false;
            }

            if !event::poll(Duration::from_millis(100))
                .map_err(|e| AppError::new(4, format!("Event poll error: {e}")))?
            {
                continue;
            }

            match event::read().map_err(|e| AppError::new(4, format!("Event read error: {e}")))? {
                Event::Key(key) => {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    if self.handle_key(key.code) {
                        break;
                    }
                    needs_redraw = true;
                }
                Event::Resize(_, _) => {
                    needs_redraw = true;
                }
                _ => {}
            }
        }
        info!("tui exited");
        Ok(())
    }

    /// Apply one key press. Returns `true` when the app should quit.
    fn handle_key(&mut self, code: KeyCode) -> bool {
        match self.mode() {
            Mode::Alert => {
                self.alert = None;
                false
            }
            Mode::Login => self.handle_login(code),
            Mode::Dashboard => self.handle_dashboard(code),
            Mode::Detail => self.handle_detail(code),
            Mode::EditingEmail => {
                self.handle_email_edit(code);
                false
            }
            Mode::Confirm => {
                self.handle_confirm(code);
                false
            }
        }
    }

    fn handle_login(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Esc => return true,
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
                self.login_focus = match self.login_focus {
                    LoginField::Email => LoginField::Password,
                    LoginField::Password => LoginField::Email,
                };
            }
            KeyCode::Backspace => {
                self.focused_login_field().pop();
            }
            KeyCode::Char(c) => self.focused_login_field().push(c),
            KeyCode::Enter => {
                let credentials = Credentials::new(self.login_email.clone(), self.login_password.clone());
                match self.nav.submit_login(&credentials) {
                    Ok(()) => {
                        self.login_password.clear();
                        self.selected = 0;
                        self.status = format!("Logged in as {}", self.login_email);
                    }
                    Err(err) => self.status = err.to_string(),
                }
            }
            _ => {}
        }
        false
    }

    fn focused_login_field(&mut self) -> &mut String {
        match self.login_focus {
            LoginField::Email => &mut self.login_email,
            LoginField::Password => &mut self.login_password,
        }
    }

    fn handle_dashboard(&mut self, code: KeyCode) -> bool {
        let count = self.catalog.list_channels().len();
        match code {
            KeyCode::Char('q') => return true,
            KeyCode::Up => self.selected = self.selected.saturating_sub(1),
            KeyCode::Down => {
                if self.selected + 1 < count {
                    self.selected += 1;
                }
            }
            KeyCode::Enter => {
                if let Some(channel) = self.catalog.list_channels().get(self.selected) {
                    self.nav.select_channel(channel);
                    self.editing_email = false;
                    self.status.clear();
                }
            }
            KeyCode::Char('v') => {
                if let Some(channel) = self.catalog.list_channels().get(self.selected) {
                    visit_channel(channel, &mut self.opener);
                    self.status = format!("Opening {}", channel.channel_url);
                }
            }
            KeyCode::Char('l') => self.logout(),
            _ => {}
        }
        false
    }

    fn handle_detail(&mut self, code: KeyCode) -> bool {
        let Some(detail) = self.nav.detail_mut() else {
            return false;
        };
        match code {
            KeyCode::Char('q') => return true,
            KeyCode::Char(c @ ('1' | '2' | '3')) => {
                if let Some(window) = window_for_key(c) {
                    detail.set_window(window);
                }
            }
            KeyCode::Left => detail.set_window(detail.window().prev()),
            KeyCode::Right => detail.set_window(detail.window().next()),
            KeyCode::Char('t') => {
                if detail.toggle_video_kind() {
                    self.status = format!("Showing {}", detail.video_kind().display_name());
                } else {
                    self.status = format!("{} only has {}", detail.channel().name, detail.video_kind().display_name());
                }
            }
            KeyCode::Char('e') => {
                self.editing_email = true;
                self.status = "Editing receiving email. Enter or Esc to finish.".to_string();
            }
            KeyCode::Char('p') => {
                if !detail.pay_button_enabled() {
                    self.status = "Enter a receiving email first (e).".to_string();
                } else if let Err(err) = detail.pay_now() {
                    self.alert = Some(err.to_string());
                }
            }
            KeyCode::Char('c') => self.status = contact_seller(detail.channel()),
            KeyCode::Char('v') => {
                visit_channel(detail.channel(), &mut self.opener);
                self.status = format!("Opening {}", detail.channel().channel_url);
            }
            KeyCode::Char('b') | KeyCode::Esc => {
                self.nav.back();
                self.status.clear();
            }
            KeyCode::Char('l') => self.logout(),
            _ => {}
        }
        false
    }

    fn handle_email_edit(&mut self, code: KeyCode) {
        let Some(detail) = self.nav.detail_mut() else {
            self.editing_email = false;
            return;
        };
        match code {
            KeyCode::Enter | KeyCode::Esc => {
                self.editing_email = false;
                self.status.clear();
            }
            KeyCode::Backspace => detail.pop_email_char(),
            KeyCode::Char(c) => detail.push_email_char(c),
            _ => {}
        }
    }

    fn handle_confirm(&mut self, code: KeyCode) {
        let Some(detail) = self.nav.detail_mut() else {
            return;
        };
        match code {
            KeyCode::Char('y') | KeyCode::Enter => {
                if detail.proceed(&mut self.opener) {
                    self.status = "Redirecting to the payment gateway...".to_string();
                }
            }
            KeyCode::Char('n') | KeyCode::Esc => {
                detail.cancel();
                self.status = "Payment cancelled.".to_string();
            }
            _ => {}
        }
    }

    fn logout(&mut self) {
        self.nav.logout();
        self.login_password.clear();
        self.login_focus = LoginField::Email;
        self.editing_email = false;
        self.selected = 0;
        self.status = "Logged out.".to_string();
        debug!("session reset");
    }

    fn draw(&mut self, frame: &mut ratatui::Frame<'_>) {
        let size = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0), Constraint::Length(3)])
            .split(size);

        self.draw_header(frame, chunks[0]);
        match self.nav.screen() {
            Screen::LoggedOut => self.draw_login(frame, chunks[1]),
            Screen::Dashboard => self.draw_dashboard(frame, chunks[1]),
            Screen::ChannelDetail(_) => self.draw_detail(frame, chunks[1]),
        }
        self.draw_footer(frame, chunks[2]);

        match self.mode() {
            Mode::Confirm => self.draw_confirmation(frame, size),
            Mode::Alert => self.draw_alert(frame, size),
            _ => {}
        }
    }

    fn draw_header(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let mut spans = vec![
            Span::styled("Channel Boosters", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
            Span::raw(" - buy established YouTube channels"),
        ];
        if self.nav.is_authenticated() {
            spans.push(Span::styled(
                format!("  | {}", self.login_email),
                Style::default().fg(Color::Gray),
            ));
        }
        let p = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::ALL));
        frame.render_widget(p, area);
    }

    fn draw_login(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let rect = centered_rect(50, 9, area);
        let block = Block::default().title("Sign in").borders(Borders::ALL);
        let inner = block.inner(rect);
        frame.render_widget(block, rect);

        let field_style = |field: LoginField| {
            if self.login_focus == field {
                Style::default().fg(Color::Black).bg(Color::White)
            } else {
                Style::default()
            }
        };
        let lines = vec![
            Line::raw("Email"),
            Line::from(Span::styled(format!("{:<30}", self.login_email), field_style(LoginField::Email))),
            Line::raw(""),
            Line::raw("Password"),
            Line::from(Span::styled(
                format!("{:<30}", mask(&self.login_password)),
                field_style(LoginField::Password),
            )),
        ];
        frame.render_widget(Paragraph::new(Text::from(lines)), inner);
    }

    fn draw_dashboard(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let items: Vec<ListItem> = self
            .catalog
            .list_channels()
            .iter()
            .map(|c| ListItem::new(Text::from(channel_card(c))))
            .collect();

        let list = List::new(items)
            .block(Block::default().title("Channels for sale").borders(Borders::ALL))
            .highlight_style(Style::default().fg(Color::Black).bg(Color::White))
            .highlight_symbol("» ");

        let mut state = ListState::default();
        state.select(Some(self.selected));
        frame.render_stateful_widget(list, area, &mut state);
    }

    fn draw_detail(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let Some(detail) = self.nav.detail() else {
            return;
        };
        let channel = detail.channel();

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
            .split(area);
        let left = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(12), Constraint::Length(10)])
            .split(columns[0]);
        let right = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(7), Constraint::Min(7), Constraint::Length(5)])
            .split(columns[1]);

        let window_index = Window::ALL.iter().position(|w| *w == detail.window()).unwrap_or(0);
        let tabs = Tabs::new(Window::ALL.iter().map(|w| w.display_name()).collect::<Vec<_>>())
            .select(window_index)
            .block(
                Block::default()
                    .title(format!("{} ({})", channel.name, channel.category))
                    .borders(Borders::ALL),
            )
            .highlight_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));
        frame.render_widget(tabs, left[0]);

        self.draw_charts(frame, left[1], channel, detail.window());
        self.draw_videos(frame, left[2], channel, detail.video_kind());

        self.draw_purchase(frame, right[0], channel, detail.pending_email(), detail.pay_button_enabled());

        let steps: Vec<Line> = HOW_TO_BUY
            .iter()
            .enumerate()
            .map(|(i, step)| Line::raw(format!("{}. {step}", i + 1)))
            .collect();
        let how = Paragraph::new(Text::from(steps))
            .wrap(Wrap { trim: true })
            .block(Block::default().title("How to Buy This Channel").borders(Borders::ALL));
        frame.render_widget(how, right[1]);

        let seller = Paragraph::new(Text::from(vec![
            Line::raw(format!("{} (#{})", channel.seller.name, channel.seller.id)),
            Line::from(Span::styled(channel.seller.email.clone(), Style::default().fg(Color::Gray))),
            Line::from(Span::styled("[c] Contact Seller", Style::default().fg(Color::Cyan))),
        ]))
        .block(Block::default().title("Seller").borders(Borders::ALL));
        frame.render_widget(seller, right[2]);
    }

    fn draw_charts(&self, frame: &mut ratatui::Frame<'_>, area: Rect, channel: &Channel, window: Window) {
        let data = match self.catalog.analytics(channel.id) {
            Ok(analytics) => analytics.window(window),
            Err(err) => {
                let msg = Paragraph::new(err.to_string()).style(Style::default().fg(Color::Red));
                frame.render_widget(msg, area);
                return;
            }
        };

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Ratio(1, 3), Constraint::Ratio(1, 3), Constraint::Ratio(1, 3)])
            .split(area);

        for (metric, rect) in Metric::ALL.into_iter().zip(rows.iter()) {
            let series = data.series(metric);
            let title = match (SeriesSummary::from_points(series), metric) {
                (Some(s), Metric::Subscribers) => {
                    let sign = if s.net_change() >= 0.0 { "+" } else { "" };
                    format!(
                        "{} - {} (now {}, {sign}{})",
                        metric.display_name(),
                        window.display_name(),
                        format_compact(s.last),
                        format_compact(s.net_change())
                    )
                }
                (Some(s), _) => format!(
                    "{} - {} (total {})",
                    metric.display_name(),
                    window.display_name(),
                    format_compact(s.total)
                ),
                (None, _) => metric.display_name().to_string(),
            };
            let block = Block::default().title(title).borders(Borders::ALL);
            let inner = block.inner(*rect);
            frame.render_widget(block, *rect);
            frame.render_widget(Clear, inner);

            let Some((points, x_bounds, y_bounds)) = chart_series(series) else {
                frame.render_widget(
                    Paragraph::new("No data.").style(Style::default().fg(Color::Yellow)),
                    inner,
                );
                continue;
            };

            let fmt_x = |v: f64| day_label_at(series, v);
            let fmt_y = format_compact;
            frame.render_widget(
                MetricChart {
                    points: &points,
                    x_bounds,
                    y_bounds,
                    color: metric_color(metric),
                    fmt_x: &fmt_x,
                    fmt_y: &fmt_y,
                },
                inner,
            );
        }
    }

    fn draw_videos(&self, frame: &mut ratatui::Frame<'_>, area: Rect, channel: &Channel, kind: crate::domain::VideoKind) {
        let videos = self.catalog.videos(channel.id).map(|v| v.list(kind)).unwrap_or(&[]);

        let header = Row::new(["Title", "Views", "Likes", "Revenue"])
            .style(Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD));
        let rows = videos.iter().map(|v| {
            Row::new([
                Cell::from(truncate(&v.title, 60)),
                Cell::from(format_compact(v.views as f64)),
                Cell::from(format_compact(v.likes as f64)),
                Cell::from(format!("${}", format_grouped(v.revenue))),
            ])
        });

        let mut title = format!("{} ({})", kind.display_name(), videos.len());
        if channel.offers_video_switch() {
            title.push_str(" - t to switch");
        }
        let table = Table::new(
            rows,
            [
                Constraint::Min(20),
                Constraint::Length(8),
                Constraint::Length(8),
                Constraint::Length(9),
            ],
        )
        .header(header)
        .block(Block::default().title(title).borders(Borders::ALL));
        frame.render_widget(table, area);
    }

    fn draw_purchase(
        &self,
        frame: &mut ratatui::Frame<'_>,
        area: Rect,
        channel: &Channel,
        email: &str,
        pay_enabled: bool,
    ) {
        let email_style = if self.editing_email {
            Style::default().fg(Color::Black).bg(Color::White)
        } else {
            Style::default()
        };
        let email_text = if email.is_empty() && !self.editing_email {
            "press e to enter".to_string()
        } else {
            email.to_string()
        };
        let pay_style = if pay_enabled {
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let lines = vec![
            Line::from(vec![
                Span::raw("Asking Price: "),
                Span::styled(format_price(channel.price), Style::default().add_modifier(Modifier::BOLD)),
            ]),
            Line::raw("Receiving email:"),
            Line::from(Span::styled(email_text, email_style)),
            Line::from(vec![
                Span::styled("[p] Pay Now", pay_style),
                Span::raw("  "),
                Span::styled("[v] Visit Channel", Style::default().fg(Color::Cyan)),
            ]),
        ];
        let p = Paragraph::new(Text::from(lines)).block(Block::default().title("Purchase").borders(Borders::ALL));
        frame.render_widget(p, area);
    }

    fn draw_confirmation(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let Some(detail) = self.nav.detail() else {
            return;
        };
        let rect = centered_rect(60, 8, area);
        frame.render_widget(Clear, rect);

        let lines = vec![
            Line::raw(format!(
                "Buy {} for {}?",
                detail.channel().name,
                format_price(detail.channel().price)
            )),
            Line::raw(format!("Ownership will be transferred to {}.", detail.pending_email())),
            Line::raw("You will be redirected to the payment gateway."),
            Line::raw(""),
            Line::from(vec![
                Span::styled("[y] Proceed", Style::default().fg(Color::Green)),
                Span::raw("   "),
                Span::styled("[n] Cancel", Style::default().fg(Color::Red)),
            ]),
        ];
        let p = Paragraph::new(Text::from(lines))
            .alignment(Alignment::Center)
            .block(Block::default().title("Confirm Purchase").borders(Borders::ALL));
        frame.render_widget(p, rect);
    }

    fn draw_alert(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let Some(message) = &self.alert else {
            return;
        };
        let rect = centered_rect(50, 5, area);
        frame.render_widget(Clear, rect);
        let p = Paragraph::new(Text::from(vec![
            Line::raw(message.clone()),
            Line::from(Span::styled("Press any key.", Style::default().fg(Color::Gray))),
        ]))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title("Alert")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        );
        frame.render_widget(p, rect);
    }

    fn draw_footer(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let help = match self.mode() {
            Mode::Alert => "any key dismiss",
            Mode::Login => "Tab switch field  Enter sign in  Esc quit",
            Mode::Dashboard => "↑/↓ select  Enter view analytics  v visit  l logout  q quit",
            Mode::Detail => "1/2/3 ←/→ window  t videos  e email  p pay  c contact  v visit  b back  l logout  q quit",
            Mode::EditingEmail => "type email  Enter/Esc done",
            Mode::Confirm => "y proceed  n cancel",
        };
        let line = Line::from(vec![
            Span::styled(help, Style::default().fg(Color::Gray)),
            Span::raw(" | "),
            Span::styled(&self.status, Style::default().fg(Color::Yellow)),
        ]);
        let p = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
        frame.render_widget(p, area);
    }
}

fn channel_card(c: &Channel) -> Vec<Line<'static>> {
    vec![
        Line::from(vec![
            Span::styled(c.name.clone(), Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(format!("  {}", c.category), Style::default().fg(Color::Gray)),
        ]),
        Line::raw(format!(
            "   Subscribers {}   Monthly Views {}   Monthly Revenue ${}",
            format_compact(c.subscribers as f64),
            format_compact(c.monthly_views as f64),
            format_compact(c.monthly_revenue as f64),
        )),
        Line::from(Span::styled(
            format!("   Asking Price {}", format_price(c.price)),
            Style::default().fg(Color::Green),
        )),
        Line::raw(""),
    ]
}

fn window_for_key(c: char) -> Option<Window> {
    match c {
        '1' => Some(Window::Days30),
        '2' => Some(Window::Days90),
        '3' => Some(Window::Year),
        _ => None,
    }
}

fn mask(secret: &str) -> String {
    "*".repeat(secret.chars().count())
}

fn metric_color(metric: Metric) -> RGBColor {
    match metric {
        Metric::Subscribers => RGBColor(136, 132, 216),
        Metric::Views => RGBColor(130, 202, 157),
        Metric::Revenue => RGBColor(255, 198, 88),
    }
}

/// Day label nearest to a fractional x position.
fn day_label_at(series: &[DailyPoint], x: f64) -> String {
    if !x.is_finite() || x < 0.0 {
        return String::new();
    }
    series
        .get(x.round() as usize)
        .map(|p| p.label.clone())
        .unwrap_or_default()
}

/// Build `(index, value)` points and padded bounds for one series.
///
/// Returns `None` for an empty series.
fn chart_series(series: &[DailyPoint]) -> Option<(Vec<(f64, f64)>, [f64; 2], [f64; 2])> {
    if series.is_empty() {
        return None;
    }
    let points: Vec<(f64, f64)> = series.iter().enumerate().map(|(i, p)| (i as f64, p.value)).collect();

    let x_max = (series.len() - 1).max(1) as f64;
    let x_bounds = [0.0, x_max];

    let (mut y_min, mut y_max) = (f64::INFINITY, f64::NEG_INFINITY);
    for &(_, y) in &points {
        y_min = y_min.min(y);
        y_max = y_max.max(y);
    }
    if !y_min.is_finite() || !y_max.is_finite() {
        return None;
    }
    let pad = if y_max > y_min {
        (y_max - y_min) * 0.05
    } else {
        y_min.abs().max(1.0) * 0.05
    };
    Some((points, x_bounds, [y_min - pad, y_max + pad]))
}

/// A `width`% wide, `height` rows tall rectangle centred in `area`.
fn centered_rect(width_percent: u16, height: u16, area: Rect) -> Rect {
    let width = area.width * width_percent.min(100) / 100;
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::VideoKind;
    use crate::session::RecordingOpener;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn app() -> App<RecordingOpener> {
        let catalog = Catalog::reference(&mut StdRng::seed_from_u64(5)).unwrap();
        App::new(catalog, RecordingOpener::default())
    }

    fn type_text(app: &mut App<RecordingOpener>, text: &str) {
        for c in text.chars() {
            app.handle_key(KeyCode::Char(c));
        }
    }

    fn logged_in() -> App<RecordingOpener> {
        let mut app = app();
        type_text(&mut app, "me@x.io");
        app.handle_key(KeyCode::Tab);
        type_text(&mut app, "pw");
        app.handle_key(KeyCode::Enter);
        app
    }

    fn open_detail(index: usize) -> App<RecordingOpener> {
        let mut app = logged_in();
        for _ in 0..index {
            app.handle_key(KeyCode::Down);
        }
        app.handle_key(KeyCode::Enter);
        app
    }

    #[test]
    fn login_form_reaches_dashboard() {
        let app = logged_in();
        assert_eq!(app.mode(), Mode::Dashboard);
        assert!(app.login_password.is_empty());
    }

    #[test]
    fn empty_password_keeps_login_screen() {
        let mut app = app();
        type_text(&mut app, "me@x.io");
        app.handle_key(KeyCode::Enter);
        assert_eq!(app.mode(), Mode::Login);
        assert!(app.status.contains("required"));
    }

    #[test]
    fn q_on_login_is_typed_not_quit() {
        let mut app = app();
        assert!(!app.handle_key(KeyCode::Char('q')));
        assert_eq!(app.login_email, "q");
        assert!(app.handle_key(KeyCode::Esc));
    }

    #[test]
    fn dashboard_selection_is_clamped() {
        let mut app = logged_in();
        app.handle_key(KeyCode::Up);
        assert_eq!(app.selected, 0);
        for _ in 0..5 {
            app.handle_key(KeyCode::Down);
        }
        assert_eq!(app.selected, 1);
    }

    #[test]
    fn enter_opens_selected_channel() {
        let app = open_detail(1);
        assert_eq!(app.mode(), Mode::Detail);
        assert_eq!(app.nav.selected_channel().map(|c| c.id), Some(2));
    }

    #[test]
    fn window_keys_switch_window() {
        let mut app = open_detail(0);
        app.handle_key(KeyCode::Char('3'));
        assert_eq!(app.nav.detail().unwrap().window(), Window::Year);
        app.handle_key(KeyCode::Right);
        assert_eq!(app.nav.detail().unwrap().window(), Window::Days30);
        app.handle_key(KeyCode::Left);
        assert_eq!(app.nav.detail().unwrap().window(), Window::Year);
    }

    #[test]
    fn toggle_only_when_both_kinds_exist() {
        let mut kai = open_detail(0);
        kai.handle_key(KeyCode::Char('t'));
        assert_eq!(kai.nav.detail().unwrap().video_kind(), VideoKind::Shorts);

        let mut football = open_detail(1);
        football.handle_key(KeyCode::Char('t'));
        assert_eq!(football.nav.detail().unwrap().video_kind(), VideoKind::Shorts);
    }

    #[test]
    fn invalid_email_raises_alert_then_any_key_dismisses() {
        let mut app = open_detail(0);
        app.handle_key(KeyCode::Char('e'));
        type_text(&mut app, "abc");
        app.handle_key(KeyCode::Enter);
        app.handle_key(KeyCode::Char('p'));
        assert_eq!(app.mode(), Mode::Alert);
        assert_eq!(app.alert.as_deref(), Some("Please enter a valid email address."));

        app.handle_key(KeyCode::Char('x'));
        assert_eq!(app.mode(), Mode::Detail);
        assert_eq!(app.nav.detail().unwrap().pending_email(), "abc");
    }

    #[test]
    fn pay_is_disabled_without_email() {
        let mut app = open_detail(0);
        app.handle_key(KeyCode::Char('p'));
        assert_eq!(app.mode(), Mode::Detail);
        assert!(app.alert.is_none());
    }

    #[test]
    fn confirm_and_proceed_opens_payment_link() {
        let mut app = open_detail(1);
        app.handle_key(KeyCode::Char('e'));
        type_text(&mut app, "buyer@mail.com");
        app.handle_key(KeyCode::Esc);
        app.handle_key(KeyCode::Char('p'));
        assert_eq!(app.mode(), Mode::Confirm);

        app.handle_key(KeyCode::Char('y'));
        assert_eq!(app.mode(), Mode::Detail);
        let link = app.nav.selected_channel().unwrap().payment_link.clone();
        assert_eq!(app.opener.opened, [link]);
    }

    #[test]
    fn cancel_closes_modal_without_opening() {
        let mut app = open_detail(0);
        app.handle_key(KeyCode::Char('e'));
        type_text(&mut app, "buyer@mail.com");
        app.handle_key(KeyCode::Enter);
        app.handle_key(KeyCode::Char('p'));
        app.handle_key(KeyCode::Char('n'));
        assert_eq!(app.mode(), Mode::Detail);
        assert!(app.opener.opened.is_empty());
    }

    #[test]
    fn back_and_logout() {
        let mut app = open_detail(0);
        app.handle_key(KeyCode::Char('b'));
        assert_eq!(app.mode(), Mode::Dashboard);

        app.handle_key(KeyCode::Enter);
        app.handle_key(KeyCode::Char('l'));
        assert_eq!(app.mode(), Mode::Login);
        assert!(app.nav.selected_channel().is_none());
    }

    #[test]
    fn visit_from_dashboard_opens_channel_url() {
        let mut app = logged_in();
        app.handle_key(KeyCode::Char('v'));
        assert_eq!(app.opener.opened.len(), 1);
        assert!(app.opener.opened[0].contains("youtube.com"));
    }

    #[test]
    fn chart_series_pads_bounds() {
        let series: Vec<DailyPoint> = [10.0, 20.0, 30.0]
            .iter()
            .enumerate()
            .map(|(i, &value)| DailyPoint {
                label: format!("Jul D{}", i + 1),
                value,
            })
            .collect();
        let (points, x, y) = chart_series(&series).unwrap();
        assert_eq!(points.len(), 3);
        assert_eq!(x, [0.0, 2.0]);
        assert!((y[0] - 9.0).abs() < 1e-9);
        assert!((y[1] - 31.0).abs() < 1e-9);
        assert_eq!(day_label_at(&series, 1.2), "Jul D2");
        assert_eq!(day_label_at(&series, 9.0), "");
    }

    #[test]
    fn flat_and_empty_series() {
        assert!(chart_series(&[]).is_none());
        let flat = vec![DailyPoint {
            label: "Jul D1".to_string(),
            value: 100.0,
        }];
        let (_, x, y) = chart_series(&flat).unwrap();
        assert_eq!(x, [0.0, 1.0]);
        assert!(y[0] < 100.0 && y[1] > 100.0);
    }

    #[test]
    fn centered_rect_fits_inside() {
        let area = Rect::new(0, 0, 100, 40);
        let r = centered_rect(50, 10, area);
        assert_eq!(r, Rect::new(25, 15, 50, 10));
        assert_eq!(centered_rect(50, 80, area).height, 40);
    }

    #[test]
    fn password_is_masked() {
        assert_eq!(mask("secret"), "******");
        assert_eq!(window_for_key('2'), Some(Window::Days90));
        assert_eq!(window_for_key('9'), None);
    }
}
