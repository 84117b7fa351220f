use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use tokio::sync::mpsc;

pub enum AppEvent {
    Key(KeyCode),
    Resize,
}

fn translate(event: Event) -> Option<AppEvent> {
    match event {
        Event::Key(KeyEvent {
            code,
            kind: KeyEventKind::Press,
            ..
        }) => Some(AppEvent::Key(code)),
        Event::Resize(..) => Some(AppEvent::Resize),
        _ => None,
    }
}

/// Read terminal events on a dedicated thread so the clock keeps ticking
/// while the user is idle.
pub fn spawn_event_reader() -> mpsc::UnboundedReceiver<AppEvent> {
    let (tx, rx) = mpsc::unbounded_channel();

    std::thread::spawn(move || {
        loop {
            let app_event = match event::read() {
                Ok(event) => translate(event),
                Err(e) => {
                    tracing::error!("Failed to read terminal event: {}", e);
                    break;
                }
            };

            if let Some(app_event) = app_event {
                if tx.send(app_event).is_err() {
                    break;
                }
            }
        }
    });

    rx
}
