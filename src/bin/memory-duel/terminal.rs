//! Console devices backed by the terminal.
//!
//! Typing a digit 1-4 and Enter presses that button for one poll. Lights,
//! the buzzer and the display write to stdout.

use log::warn;
use memory_duel::hardware::{Button, ButtonId, Buzzer, Display, Light, Panel, PanelError};
use std::cell::RefCell;
use std::io::{self, BufRead, Write};
use std::rc::Rc;
use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::Duration;

/// Gap after a blink so repeated lights read as separate flashes.
const BLINK_GAP: Duration = Duration::from_millis(150);

/// Keys typed on stdin, sampled once per panel poll.
struct Keypad {
    keys: Receiver<ButtonId>,
    held: Option<ButtonId>,
}

impl Keypad {
    fn spawn() -> Self {
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            for line in io::stdin().lock().lines() {
                let Ok(line) = line else { break };
                for button in line
                    .chars()
                    .filter_map(|c| c.to_digit(10))
                    .filter_map(|d| ButtonId::from_symbol(d as u8))
                {
                    if tx.send(button).is_err() {
                        return;
                    }
                }
            }
        });
        Self {
            keys: rx,
            held: None,
        }
    }

    fn sample(&mut self) {
        self.held = self.keys.try_recv().ok();
    }
}

/// One of the four buttons. The panel polls buttons in index order, so
/// button one takes the next key sample and the others read it.
struct KeyButton {
    id: ButtonId,
    keypad: Rc<RefCell<Keypad>>,
}

impl Button for KeyButton {
    fn is_pressed(&mut self) -> bool {
        let mut keypad = self.keypad.borrow_mut();
        if self.id == ButtonId::One {
            keypad.sample();
        }
        keypad.held == Some(self.id)
    }
}

fn flush_stdout() {
    if let Err(e) = io::stdout().flush() {
        warn!("Failed to flush stdout: {e}");
    }
}

struct TextLight {
    id: ButtonId,
    duration: Duration,
}

impl Light for TextLight {
    fn blink(&mut self) {
        let indent = "      ".repeat(self.id.index());
        print!("\r{indent}[ {} ]", self.id.symbol());
        flush_stdout();
        thread::sleep(self.duration);
        print!("\r{}\r", " ".repeat(32));
        flush_stdout();
        thread::sleep(BLINK_GAP);
    }
}

struct BellBuzzer;

impl Buzzer for BellBuzzer {
    fn beep(&mut self, tone_hz: u32) {
        println!("\x07~ {tone_hz} Hz ~");
    }
}

/// Prints only when the text changes, since do actions redraw every tick.
#[derive(Default)]
struct TextDisplay {
    shown: Option<String>,
}

impl Display for TextDisplay {
    fn show_text(&mut self, text: &str) {
        if self.shown.as_deref() == Some(text) {
            return;
        }
        println!("----------------");
        println!("{text}");
        self.shown = Some(text.to_string());
    }

    fn reset(&mut self) {
        self.shown = None;
    }
}

/// Build a panel wired to the terminal.
pub fn panel(blink: Duration) -> Result<Panel, PanelError> {
    let keypad = Rc::new(RefCell::new(Keypad::spawn()));
    let mut builder = Panel::builder();
    for id in ButtonId::ALL {
        builder = builder
            .button(KeyButton {
                id,
                keypad: Rc::clone(&keypad),
            })
            .light(TextLight {
                id,
                duration: blink,
            });
    }
    builder
        .buzzer(BellBuzzer)
        .display(TextDisplay::default())
        .build()
}
