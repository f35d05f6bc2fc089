use crossterm::event::KeyEvent;
use tui_input::backend::crossterm::EventHandler;
use tui_input::Input;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Field {
    #[default]
    Username,
    Password,
}

impl Field {
    fn toggle(self) -> Self {
        match self {
            Self::Username => Self::Password,
            Self::Password => Self::Username,
        }
    }
}

/// Two-field credential form. No client-side validation: whatever the user
/// typed is submitted as-is and the server decides.
#[derive(Debug, Default)]
pub struct LoginForm {
    username: Input,
    password: Input,
    focus: Field,
}

impl LoginForm {
    /// Route a key event into the form. Returns the credential pair when the
    /// user submits.
    pub fn handle_key(&mut self, event: KeyEvent) -> Option<(String, String)> {
        match event {
            key!(Tab) | key!(Down) | shift!(BackTab) | key!(Up) => {
                self.focus = self.focus.toggle();
            }
            key!(Enter) => {
                return Some((
                    self.username.value().to_string(),
                    self.password.value().to_string(),
                ));
            }
            _ => {
                let evt = crossterm::event::Event::Key(event);
                let input = match self.focus {
                    Field::Username => &mut self.username,
                    Field::Password => &mut self.password,
                };
                _ = input.handle_event(&evt);
            }
        }
        None
    }

    pub fn focus(&self) -> Field {
        self.focus
    }

    pub fn username(&self) -> &str {
        self.username.value()
    }

    pub fn masked_password(&self) -> String {
        "*".repeat(self.password.value().chars().count())
    }
}
