//! A console assembled from individual devices.

use super::error::PanelError;
use super::{Button, ButtonId, ButtonStates, Buzzer, Display, Hardware, Light, BUTTON_COUNT};

/// Four buttons, four lights, a buzzer and a display behind one
/// [`Hardware`] implementation.
pub struct Panel {
    buttons: Vec<Box<dyn Button>>,
    lights: Vec<Box<dyn Light>>,
    buzzer: Box<dyn Buzzer>,
    display: Box<dyn Display>,
}

impl Panel {
    pub fn builder() -> PanelBuilder {
        PanelBuilder::new()
    }
}

impl Hardware for Panel {
    fn read_buttons(&mut self) -> ButtonStates {
        let mut states = ButtonStates::released();
        for (button, device) in ButtonId::ALL.into_iter().zip(self.buttons.iter_mut()) {
            states.set(button, device.is_pressed());
        }
        states
    }

    fn blink(&mut self, light: ButtonId) {
        self.lights[light.index()].blink();
    }

    fn beep(&mut self, tone_hz: u32) {
        self.buzzer.beep(tone_hz);
    }

    fn show_text(&mut self, text: &str) {
        self.display.show_text(text);
    }

    fn reset_display(&mut self) {
        self.display.reset();
    }
}

/// Builder for [`Panel`] with a fluent API.
///
/// Buttons and lights are numbered in the order they are added: the first
/// `.button(..)` call becomes [`ButtonId::One`].
#[derive(Default)]
pub struct PanelBuilder {
    buttons: Vec<Box<dyn Button>>,
    lights: Vec<Box<dyn Light>>,
    buzzer: Option<Box<dyn Buzzer>>,
    display: Option<Box<dyn Display>>,
    overflow: Option<PanelError>,
}

impl PanelBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the next button.
    pub fn button(mut self, device: impl Button + 'static) -> Self {
        if self.buttons.len() == BUTTON_COUNT {
            self.overflow.get_or_insert(PanelError::TooManyButtons);
        } else {
            self.buttons.push(Box::new(device));
        }
        self
    }

    /// Add the next light.
    pub fn light(mut self, device: impl Light + 'static) -> Self {
        if self.lights.len() == BUTTON_COUNT {
            self.overflow.get_or_insert(PanelError::TooManyLights);
        } else {
            self.lights.push(Box::new(device));
        }
        self
    }

    pub fn buzzer(mut self, device: impl Buzzer + 'static) -> Self {
        self.buzzer = Some(Box::new(device));
        self
    }

    pub fn display(mut self, device: impl Display + 'static) -> Self {
        self.display = Some(Box::new(device));
        self
    }

    /// Build the panel.
    /// Returns an error if a device is missing or too many were added.
    pub fn build(self) -> Result<Panel, PanelError> {
        if let Some(error) = self.overflow {
            return Err(error);
        }
        if self.buttons.len() != BUTTON_COUNT {
            return Err(PanelError::MissingButtons {
                found: self.buttons.len(),
            });
        }
        if self.lights.len() != BUTTON_COUNT {
            return Err(PanelError::MissingLights {
                found: self.lights.len(),
            });
        }
        let buzzer = self.buzzer.ok_or(PanelError::MissingBuzzer)?;
        let display = self.display.ok_or(PanelError::MissingDisplay)?;

        Ok(Panel {
            buttons: self.buttons,
            lights: self.lights,
            buzzer,
            display,
        })
    }
}
