//! TUI rendering
//!
//! The screen is a pure function of [`App`]: a two-line display, the keypad,
//! the session tape and a help sidebar. Layout geometry lives in
//! [`screen_layout`] so the mouse handler resolves clicks against the same
//! rectangles the renderer draws into.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Widget},
    Frame,
};

use calcular::prelude::ERROR_TEXT;

use crate::app::App;
use crate::keypad::KeypadWidget;

/// Renders the calculator UI to the frame
pub fn render(app: &App, frame: &mut Frame) {
    let area = frame.area();
    let ui = CalculatorUI::new(app);
    frame.render_widget(ui, area);
}

/// Screen rectangles shared by the renderer and the mouse handler
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    /// Two-line display panel
    pub display: Rect,
    /// Keypad grid
    pub keypad: Rect,
    /// Session tape
    pub tape: Rect,
    /// Help sidebar
    pub help: Rect,
}

/// Splits the terminal area into the fixed panel layout
#[must_use]
pub fn screen_layout(area: Rect) -> ScreenLayout {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .margin(1)
        .constraints([
            Constraint::Min(24),    // Display and tape
            Constraint::Length(22), // Keypad
            Constraint::Length(24), // Help sidebar
        ])
        .split(area);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Display (two text lines)
            Constraint::Min(5),    // Tape
        ])
        .split(columns[0]);

    ScreenLayout {
        display: left[0],
        tape: left[1],
        keypad: columns[1],
        help: columns[2],
    }
}

/// Calculator UI widget
#[derive(Debug)]
pub struct CalculatorUI<'a> {
    app: &'a App,
}

impl<'a> CalculatorUI<'a> {
    /// Creates a new calculator UI widget
    #[must_use]
    pub fn new(app: &'a App) -> Self {
        Self { app }
    }

    /// Renders the two-line display panel
    fn render_display(&self, area: Rect, buf: &mut Buffer) {
        let display = self.app.display();

        let main_style = if display.main_text == ERROR_TEXT {
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD)
        };

        let lines = vec![
            Line::from(Span::styled(
                display.secondary_text.as_str(),
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(Span::styled(display.main_text.as_str(), main_style)),
        ];

        let paragraph = Paragraph::new(lines).alignment(Alignment::Right).block(
            Block::default()
                .title(" Display ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow)),
        );

        paragraph.render(area, buf);
    }

    /// Renders the keypad area
    fn render_keypad(&self, area: Rect, buf: &mut Buffer) {
        let widget = KeypadWidget::new(self.app.keypad());
        widget.render(area, buf);
    }

    /// Renders the session tape
    fn render_tape(&self, area: Rect, buf: &mut Buffer) {
        let items: Vec<ListItem> = self
            .app
            .tape()
            .iter()
            .rev()
            .take(10)
            .map(|entry| match entry.rsplit_once(" = ") {
                Some((expr, result)) => {
                    let result_style = if result == ERROR_TEXT {
                        Style::default().fg(Color::Red)
                    } else {
                        Style::default().fg(Color::Cyan)
                    };
                    ListItem::new(Line::from(vec![
                        Span::styled(expr, Style::default().fg(Color::Gray)),
                        Span::raw(" = "),
                        Span::styled(result, result_style),
                    ]))
                }
                None => ListItem::new(Span::styled(
                    entry.as_str(),
                    Style::default().fg(Color::Gray),
                )),
            })
            .collect();

        let list = List::new(items).block(
            Block::default()
                .title(" Tape (newest first) ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Blue)),
        );

        list.render(area, buf);
    }

    /// Renders the help sidebar
    fn render_help_sidebar(&self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(8),    // Shortcuts
                Constraint::Length(3), // Key legend
                Constraint::Length(2), // Badge
            ])
            .split(area);

        // Shortcuts panel
        let shortcuts: Vec<ListItem> = HELP_SHORTCUTS
            .iter()
            .map(|(key, desc)| {
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{key:>7}"), Style::default().fg(Color::Yellow)),
                    Span::raw(" "),
                    Span::styled(*desc, Style::default().fg(Color::Gray)),
                ]))
            })
            .collect();

        let shortcuts_list = List::new(shortcuts).block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        shortcuts_list.render(chunks[0], buf);

        // Key legend
        let keys = Paragraph::new(Span::styled(HELP_KEYS, Style::default().fg(Color::Cyan))).block(
            Block::default()
                .borders(Borders::LEFT | Borders::RIGHT)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        keys.render(chunks[1], buf);

        // Badge
        let badge = Paragraph::new(Span::styled(
            APP_BADGE,
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::ITALIC),
        ))
        .block(
            Block::default()
                .borders(Borders::LEFT | Borders::RIGHT | Borders::BOTTOM)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        badge.render(chunks[2], buf);
    }
}

impl Widget for CalculatorUI<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Render main border with title
        Block::default()
            .title(APP_TITLE)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .render(area, buf);

        let layout = screen_layout(area);

        self.render_display(layout.display, buf);
        self.render_tape(layout.tape, buf);
        self.render_keypad(layout.keypad, buf);
        self.render_help_sidebar(layout.help, buf);
    }
}

/// Title shown on the outer frame
pub const APP_TITLE: &str = " Calculador - Four-Function Calculator ";

/// Keyboard shortcuts for the sidebar
pub const HELP_SHORTCUTS: &[(&str, &str)] = &[
    ("0-9 .", "Enter number"),
    ("+-*/", "Operator"),
    ("Enter", "Equals"),
    ("Esc", "Clear"),
    ("Bksp", "Delete digit"),
    ("%", "Percent"),
    ("s", "Toggle sign"),
    ("Click", "Press button"),
    ("Ctrl+C", "Quit"),
];

/// Key legend line
pub const HELP_KEYS: &str = "Keys: 0-9 . + - * / = %";

/// Project badge shown in the sidebar
pub const APP_BADGE: &str = "Calculador - paiml.com";
