use std::io::stdout;

use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind,
        MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use limelight_core::measure::{TextMeasurer, visible_lines};
use limelight_core::model::Highlight;
use limelight_core::sequencer::{Effect, GesturePhase, Sequencer, SequencerState};
use limelight_protocol::{
    BackgroundOptions, BorderVisual, CaptionVisual, FontSpec, OverlayScene, Point, Rect, Size,
};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    buffer::Buffer,
    layout::Rect as TermRect,
    style::{Color, Style},
    widgets::{Block, Borders},
};

/// One terminal cell per glyph, one row per line. Font metrics do not
/// exist in a cell grid.
struct CellMeasurer;

impl TextMeasurer for CellMeasurer {
    fn measure(&self, text: &str, _font: &FontSpec, max_lines: u32) -> Size {
        let mut width = 0usize;
        let mut lines = 0usize;
        for line in visible_lines(text, max_lines) {
            width = width.max(line.chars().count());
            lines += 1;
        }
        Size::new(width as f64, lines as f64)
    }
}

fn to_tui_color(c: limelight_protocol::Color) -> Color {
    Color::Rgb(
        (c.r.clamp(0.0, 1.0) * 255.0).round() as u8,
        (c.g.clamp(0.0, 1.0) * 255.0).round() as u8,
        (c.b.clamp(0.0, 1.0) * 255.0).round() as u8,
    )
}

pub fn run_walkthrough(highlights: Vec<Highlight>, background: BackgroundOptions) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut seq = Sequencer::new(highlights, background);

    loop {
        let term_size = terminal.size()?;
        let screen = Rect::new(0.0, 0.0, f64::from(term_size.width), f64::from(term_size.height));

        if seq.state() == SequencerState::Idle
            && seq.begin(screen, &CellMeasurer) == Effect::Dismiss
        {
            break;
        }

        terminal.draw(|frame| {
            let area = frame.area();
            draw_backdrop(frame, area);
            if let Some(scene) = seq.scene() {
                let buf = frame.buffer_mut();
                dim_cells(buf, area, scene);
                draw_border(buf, area, &scene.border);
                draw_caption(buf, area, &scene.caption);
            }
        })?;

        // A press is only actionable once it completes: mouse button
        // release or a confirmed key press.
        if event::poll(std::time::Duration::from_millis(100))? {
            let phase = match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => break,
                    KeyCode::Char(' ') | KeyCode::Enter => Some(GesturePhase::Ended),
                    _ => None,
                },
                Event::Mouse(mouse) => match mouse.kind {
                    MouseEventKind::Down(_) => Some(GesturePhase::Began),
                    MouseEventKind::Drag(_) => Some(GesturePhase::Changed),
                    MouseEventKind::Up(_) => Some(GesturePhase::Ended),
                    _ => None,
                },
                _ => None,
            };
            if let Some(phase) = phase
                && seq.tap(phase, screen, &CellMeasurer) == Effect::Dismiss
            {
                break;
            }
        }
    }

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    Ok(())
}

/// The fake application the tour points at.
fn draw_backdrop(frame: &mut ratatui::Frame<'_>, area: TermRect) {
    let header = Block::default()
        .title(" limelight tour — click / space to advance, q to quit ")
        .style(Style::default().fg(Color::White).bg(Color::DarkGray));
    frame.render_widget(header, TermRect::new(0, 0, area.width, 1));

    let boxes = [
        (TermRect::new(4, 2, 22, 3), " Menu "),
        (TermRect::new(32, 2, 20, 3), " Status "),
        (TermRect::new(4, 9, 30, 8), " Logs "),
    ];
    for (rect, title) in boxes {
        if rect.right() <= area.width && rect.bottom() <= area.height {
            let block = Block::default()
                .title(title)
                .borders(Borders::ALL)
                .style(Style::default().fg(Color::Gray));
            frame.render_widget(block, rect);
        }
    }
}

/// Translucency does not exist in a cell grid; dimmed cells keep their
/// glyph and lose their color instead.
fn dim_cells(buf: &mut Buffer, area: TermRect, scene: &OverlayScene) {
    for y in area.y..area.bottom() {
        for x in area.x..area.right() {
            let p = Point::new(f64::from(x) + 0.5, f64::from(y) + 0.5);
            if scene.dim.covers(p) {
                buf[(x, y)].set_fg(Color::DarkGray).set_bg(Color::Black);
            }
        }
    }
}

fn draw_border(buf: &mut Buffer, area: TermRect, border: &BorderVisual) {
    if border.width <= 0.0 || border.color.is_transparent() {
        return;
    }
    let rect = border.shape.rect;
    let x0 = rect.min_x().round() as i32;
    let y0 = rect.min_y().round() as i32;
    let x1 = (rect.max_x().round() as i32 - 1).max(x0);
    let y1 = (rect.max_y().round() as i32 - 1).max(y0);
    let rounded = border.shape.effective_radius() > 0.0;
    let (tl, tr, bl, br) = if rounded {
        ('╭', '╮', '╰', '╯')
    } else {
        ('┌', '┐', '└', '┘')
    };
    let color = to_tui_color(border.color);

    let mut put = |x: i32, y: i32, ch: char| {
        if x >= i32::from(area.x)
            && y >= i32::from(area.y)
            && x < i32::from(area.right())
            && y < i32::from(area.bottom())
        {
            buf[(x as u16, y as u16)].set_char(ch).set_fg(color);
        }
    };

    for x in (x0 + 1)..x1 {
        put(x, y0, '─');
        put(x, y1, '─');
    }
    for y in (y0 + 1)..y1 {
        put(x0, y, '│');
        put(x1, y, '│');
    }
    put(x0, y0, tl);
    put(x1, y0, tr);
    put(x0, y1, bl);
    put(x1, y1, br);
}

fn draw_caption(buf: &mut Buffer, area: TermRect, caption: &CaptionVisual) {
    let frame = caption.frame;
    let x0 = frame.min_x().round().max(0.0) as u16;
    let y0 = frame.min_y().round().max(0.0) as u16;
    let w = frame.w.round().max(0.0) as u16;
    let h = frame.h.round().max(0.0) as u16;
    let style = Style::default()
        .fg(to_tui_color(caption.color))
        .bg(to_tui_color(caption.background));

    for y in y0..y0.saturating_add(h).min(area.bottom()) {
        for x in x0..x0.saturating_add(w).min(area.right()) {
            buf[(x, y)].set_char(' ').set_style(style);
        }
    }

    let lines: Vec<&str> = visible_lines(&caption.text, caption.max_lines).collect();
    let start_y = y0 + (h.saturating_sub(lines.len() as u16)) / 2;
    for (i, line) in lines.iter().enumerate() {
        let y = start_y + i as u16;
        let len = line.chars().count() as u16;
        let x = x0 + w.saturating_sub(len) / 2;
        // The frame is clamped to the screen at render time, but the
        // terminal may have shrunk since.
        if y >= area.bottom() || x >= area.right() {
            break;
        }
        buf.set_string(x, y, line, style);
    }
}
