use std::fs::File;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crossterm::event::{Event as CrosstermEvent, KeyCode};
use simplelog::{Config, LevelFilter, WriteLogger};
use swipecell::{Buffer, PointerEvent, Rect, Rgb, Style, SwipeCell, SwipeTerminal};

fn main() -> std::io::Result<()> {
    // Set up file logging
    let log_file = File::create("demo.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let presses = Arc::new(AtomicUsize::new(0));

    let counter = Arc::clone(&presses);
    let content_counter = Arc::clone(&presses);
    let cell = SwipeCell::builder()
        .content(move |buf: &mut Buffer, area: Rect| {
            let text = format!(
                " Swipe me left (cleared {} times)",
                content_counter.load(Ordering::SeqCst)
            );
            let style = Style::new()
                .background(Rgb::new(40, 44, 52))
                .foreground(Rgb::new(220, 220, 220));
            for y in area.y..area.bottom() {
                for x in area.x..area.right() {
                    buf.set_str(x, y, " ", style);
                }
            }
            buf.set_str(area.x, area.y + area.height / 2, &text, style);
        })
        .on_press(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        })
        .peek_on_mount(true)
        .build()
        .expect("demo cell is fully configured");

    let mut term = SwipeTerminal::new()?;
    cell.mount(Instant::now());

    loop {
        let now = Instant::now();
        cell.tick(now);

        let (width, _) = term.size();
        let area = Rect::new(2, 2, width.saturating_sub(4), 3);
        term.draw(|buf| {
            cell.render(buf, area);
        })?;
        cell.clear_dirty();

        for event in term.poll(Some(Duration::from_millis(16)))? {
            match event {
                CrosstermEvent::Key(key) => match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                    KeyCode::Char('c') => cell.request_close(Instant::now()),
                    _ => {}
                },
                CrosstermEvent::Mouse(mouse) => {
                    if let Some(pointer) = PointerEvent::from_mouse(&mouse) {
                        cell.handle_pointer(pointer, Instant::now());
                    }
                }
                _ => {}
            }
        }
    }
}
