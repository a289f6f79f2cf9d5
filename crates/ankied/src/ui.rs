//! Landing page layout and widgets.

use ankied_core::PreviewTab;
use ankied_fonts::{BANNER_HEIGHT, banner_width, build_banner};
use ankied_rain::render_cell;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::App;
use crate::content;

const HEADLINE: &str = "ANKI EDITOR";
const HEADLINE_PLAIN: &str = "The ANKI Code Editor";
const ACCENT: Color = Color::Rgb(67, 217, 173);
const CHIP_BG: Color = Color::Rgb(40, 44, 58);

/// Render the whole page: animated background first, content on top.
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    render_background(frame, app, area);

    let chunks = Layout::vertical([
        Constraint::Length(2),                    // Nav bar
        Constraint::Fill(1),                      // Top padding
        Constraint::Length(BANNER_HEIGHT as u16), // Headline
        Constraint::Length(1),                    // Spacing
        Constraint::Length(2),                    // Tagline
        Constraint::Length(1),                    // Spacing
        Constraint::Length(1),                    // Download buttons
        Constraint::Length(1),                    // Spacing
        Constraint::Length(14),                   // Code preview
        Constraint::Fill(1),                      // Bottom padding
        Constraint::Length(1),                    // Help text
    ])
    .split(area);

    render_nav(frame, chunks[0]);
    render_headline(frame, chunks[2]);
    render_tagline(frame, chunks[4]);
    render_buttons(frame, chunks[6]);
    render_preview(frame, chunks[8], app.active_tab());
    render_help(frame, chunks[10]);

    if app.show_menu() {
        render_menu(frame, area);
    }
}

/// Paint the rain canvas and the pointer glow beneath everything else.
fn render_background(frame: &mut Frame, app: &App, area: Rect) {
    if !app.config().background && !app.config().mouse_glow {
        return;
    }

    let canvas = app.animator().canvas();
    let lines: Vec<Line> = (0..area.height)
        .map(|y| {
            let spans: Vec<Span> = (0..area.width)
                .map(|x| render_cell(canvas, app.glow(), x, y))
                .collect();
            Line::from(spans)
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_nav(frame: &mut Frame, area: Rect) {
    let bar = Line::from(vec![
        " ◆ ".fg(ACCENT),
        "AnkiEditor".bold(),
        "    ".into(),
        "Features".dark_gray(),
        "   ".into(),
        "Docs".dark_gray(),
        "   ".into(),
        Span::styled(" Get Started ", Style::new().fg(Color::White).bg(Color::Blue)),
    ]);
    let nav = Paragraph::new(bar).block(Block::new().borders(Borders::BOTTOM).dark_gray());
    frame.render_widget(nav, area);

    let hint = Paragraph::new(Line::from(vec!["☰ ".fg(ACCENT), "m ".bold(), "menu ".dark_gray()]))
        .alignment(Alignment::Right);
    frame.render_widget(hint, area);
}

fn render_headline(frame: &mut Frame, area: Rect) {
    let headline = if banner_width(HEADLINE) <= area.width {
        build_banner(HEADLINE)
            .into_iter()
            .map(|row| Line::from(row).style(Style::new().fg(Color::White).bold()))
            .collect::<Vec<_>>()
    } else {
        vec![Line::from(HEADLINE_PLAIN).style(Style::new().fg(Color::White).bold())]
    };

    let widget = Paragraph::new(headline).alignment(Alignment::Center);
    frame.render_widget(widget, area);
}

fn render_tagline(frame: &mut Frame, area: Rect) {
    let tagline = vec![
        Line::from("Built to make you extraordinarily productive,"),
        Line::from("AnkiEditor is the best way to code on Mobile."),
    ];
    let widget = Paragraph::new(tagline)
        .style(Style::new().dark_gray())
        .alignment(Alignment::Center);
    frame.render_widget(widget, area);
}

fn render_buttons(frame: &mut Frame, area: Rect) {
    let buttons = Line::from(vec![
        Span::styled(
            "  DOWNLOAD FOR ANDROID  ",
            Style::new().fg(Color::White).bg(CHIP_BG).bold(),
        ),
        "   ".into(),
        Span::styled("▶ WATCH DEMO", Style::new().fg(ACCENT)),
    ]);
    let widget = Paragraph::new(buttons).alignment(Alignment::Center);
    frame.render_widget(widget, area);
}

/// One tab chip for the preview title bar.
fn tab_chip(tab: PreviewTab, active: bool) -> Vec<Span<'static>> {
    let (icon_style, title_style) = if active {
        (
            Style::new().fg(tab.accent()).bg(CHIP_BG),
            Style::new().fg(Color::White).bg(CHIP_BG),
        )
    } else {
        (Style::new().fg(tab.accent()), Style::new().dark_gray())
    };

    vec![
        Span::styled(format!(" {} ", tab.icon()), icon_style),
        Span::styled(format!("{} ", tab.title()), title_style),
        " ".into(),
    ]
}

fn render_preview(frame: &mut Frame, area: Rect, active: PreviewTab) {
    // Window dots plus the tab bar, as the editor chrome.
    let mut title = vec![
        " ".into(),
        "●".red(),
        " ".into(),
        "●".yellow(),
        " ".into(),
        "●".green(),
        "  ".into(),
    ];
    for tab in PreviewTab::ALL {
        title.extend(tab_chip(tab, tab == active));
    }

    let width = area.width.min(72);
    let panel = Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y,
        width,
        height: area.height,
    };

    let block = Block::bordered()
        .title(Line::from(title))
        .border_style(Style::new().dark_gray());
    let inner = block.inner(panel);
    frame.render_widget(Clear, panel);
    frame.render_widget(block, panel);

    let mut lines: Vec<Line> = content::sample(active)
        .iter()
        .map(|row| Line::from(format!("  {row}")).style(Style::new().fg(Color::Gray)))
        .collect();
    lines.push(Line::default());
    lines.push(
        Line::from(format!("{} Preview · {}", active.title(), active.asset()))
            .style(Style::new().dark_gray().italic())
            .centered(),
    );
    frame.render_widget(Paragraph::new(lines), inner);
}

/// Right-anchored flyout, the mobile menu of the page.
fn render_menu(frame: &mut Frame, area: Rect) {
    let width = 24u16.min(area.width);
    let height = 9u16.min(area.height.saturating_sub(1));
    let panel = Rect {
        x: area.width.saturating_sub(width),
        y: area.y + 1,
        width,
        height,
    };

    let lines = vec![
        Line::default(),
        Line::from("Features".underlined()),
        Line::default(),
        Line::from("Docs".underlined()),
        Line::default(),
        Line::from("Get Started".underlined()),
        Line::default(),
    ];

    let block = Block::bordered()
        .title(" ☰ ")
        .title_bottom(Line::from(vec!["esc".bold(), " close".dark_gray()]))
        .border_style(Style::new().fg(ACCENT));
    let menu = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(block);

    frame.render_widget(Clear, panel);
    frame.render_widget(menu, panel);
}

fn render_help(frame: &mut Frame, area: Rect) {
    let help = Line::from(vec![
        "q".bold().fg(ACCENT),
        " quit  ".dark_gray(),
        "m".bold().fg(ACCENT),
        " menu  ".dark_gray(),
        "1-3".bold().fg(ACCENT),
        " preview tab  ".dark_gray(),
        "tab".bold().fg(ACCENT),
        " cycle".dark_gray(),
    ])
    .centered();
    frame.render_widget(help, area);
}
