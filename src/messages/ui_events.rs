//! UI events - messages from UI layer to App layer

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Application screens; the router maps keys to these
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub enum Screen {
    #[default]
    Home,
    Vaccines,
    Allergies,
    Users,
    Appointments,
}

impl Screen {
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Home => "Home",
            Screen::Vaccines => "Vaccines",
            Screen::Allergies => "Allergies",
            Screen::Users => "Users",
            Screen::Appointments => "Agendas",
        }
    }

    /// Menu order on the home screen
    pub const MENU: [Screen; 4] = [
        Screen::Vaccines,
        Screen::Allergies,
        Screen::Users,
        Screen::Appointments,
    ];
}

/// Modal context the UI is in; determines key routing
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub enum UiMode {
    #[default]
    Normal,
    /// A form or action dialog is open
    Dialog,
    /// The confirmation dialog is open
    Confirm,
    /// The help popup is open
    Help,
}

/// Events generated from user input in the UI layer
#[derive(Debug, Clone)]
pub enum UiEvent {
    // Routing
    Navigate(Screen),
    Back,

    // Table / menu navigation
    RowUp,
    RowDown,
    EnterSelected,

    // Data
    Refresh,

    // Dialog openers
    OpenAddForm,
    RequestDelete,
    OpenSettleDialog,
    OpenRescheduleDialog,
    OpenFilterForm,
    OpenLinkAllergyDialog,

    // Form interaction
    FormChar(char),
    FormBackspace,
    FormNextField,
    FormPrevField,
    FormCycleLeft,
    FormCycleRight,
    FormSubmit,
    FormCancel,

    // Confirmation dialog
    ConfirmAccept,
    ConfirmCancel,

    // Popups
    ToggleHelp,
    CloseHelp,

    // System
    Tick,
    Quit,
}

/// Convert a key event to a UiEvent based on current UI context
pub fn key_to_ui_event(key: KeyEvent, screen: Screen, mode: UiMode) -> Option<UiEvent> {
    use crossterm::event::KeyEventKind;

    if key.kind != KeyEventKind::Press {
        return None;
    }

    // Ctrl+C always quits
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(UiEvent::Quit);
    }

    match mode {
        UiMode::Help => Some(UiEvent::CloseHelp),
        UiMode::Confirm => match key.code {
            KeyCode::Char('y') | KeyCode::Enter => Some(UiEvent::ConfirmAccept),
            KeyCode::Char('n') | KeyCode::Esc => Some(UiEvent::ConfirmCancel),
            _ => None,
        },
        UiMode::Dialog => match key.code {
            KeyCode::Esc => Some(UiEvent::FormCancel),
            KeyCode::Enter => Some(UiEvent::FormSubmit),
            KeyCode::Tab | KeyCode::Down => Some(UiEvent::FormNextField),
            KeyCode::BackTab | KeyCode::Up => Some(UiEvent::FormPrevField),
            KeyCode::Left => Some(UiEvent::FormCycleLeft),
            KeyCode::Right => Some(UiEvent::FormCycleRight),
            KeyCode::Backspace => Some(UiEvent::FormBackspace),
            KeyCode::Char(c) => Some(UiEvent::FormChar(c)),
            _ => None,
        },
        UiMode::Normal => handle_normal_keys(key, screen),
    }
}

fn handle_normal_keys(key: KeyEvent, screen: Screen) -> Option<UiEvent> {
    // Screen shortcuts work everywhere outside dialogs
    match key.code {
        KeyCode::Char('1') => return Some(UiEvent::Navigate(Screen::Vaccines)),
        KeyCode::Char('2') => return Some(UiEvent::Navigate(Screen::Allergies)),
        KeyCode::Char('3') => return Some(UiEvent::Navigate(Screen::Users)),
        KeyCode::Char('4') => return Some(UiEvent::Navigate(Screen::Appointments)),
        KeyCode::Char('q') => return Some(UiEvent::Quit),
        KeyCode::Char('?') => return Some(UiEvent::ToggleHelp),
        KeyCode::Up => return Some(UiEvent::RowUp),
        KeyCode::Down => return Some(UiEvent::RowDown),
        _ => {}
    }

    match screen {
        Screen::Home => match key.code {
            KeyCode::Enter => Some(UiEvent::EnterSelected),
            _ => None,
        },
        Screen::Vaccines | Screen::Allergies => resource_keys(key),
        Screen::Users => match key.code {
            KeyCode::Char('l') => Some(UiEvent::OpenLinkAllergyDialog),
            _ => resource_keys(key),
        },
        Screen::Appointments => match key.code {
            KeyCode::Char('b') => Some(UiEvent::OpenSettleDialog),
            KeyCode::Char('g') => Some(UiEvent::OpenRescheduleDialog),
            KeyCode::Char('f') => Some(UiEvent::OpenFilterForm),
            _ => resource_keys(key),
        },
    }
}

/// Keys shared by every resource screen
fn resource_keys(key: KeyEvent) -> Option<UiEvent> {
    match key.code {
        KeyCode::Esc => Some(UiEvent::Back),
        KeyCode::Char('a') => Some(UiEvent::OpenAddForm),
        KeyCode::Char('d') => Some(UiEvent::RequestDelete),
        KeyCode::Char('r') => Some(UiEvent::Refresh),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyEventKind, KeyEventState};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn test_digit_navigates_from_any_screen() {
        let event = key_to_ui_event(press(KeyCode::Char('4')), Screen::Vaccines, UiMode::Normal);
        assert!(matches!(event, Some(UiEvent::Navigate(Screen::Appointments))));
    }

    #[test]
    fn test_settle_key_only_on_appointments() {
        let on_agendas =
            key_to_ui_event(press(KeyCode::Char('b')), Screen::Appointments, UiMode::Normal);
        assert!(matches!(on_agendas, Some(UiEvent::OpenSettleDialog)));

        let on_vaccines =
            key_to_ui_event(press(KeyCode::Char('b')), Screen::Vaccines, UiMode::Normal);
        assert!(on_vaccines.is_none());
    }

    #[test]
    fn test_dialog_mode_captures_typing() {
        let event = key_to_ui_event(press(KeyCode::Char('q')), Screen::Users, UiMode::Dialog);
        assert!(matches!(event, Some(UiEvent::FormChar('q'))));

        let esc = key_to_ui_event(press(KeyCode::Esc), Screen::Users, UiMode::Dialog);
        assert!(matches!(esc, Some(UiEvent::FormCancel)));
    }

    #[test]
    fn test_confirm_mode_keys() {
        let yes = key_to_ui_event(press(KeyCode::Char('y')), Screen::Users, UiMode::Confirm);
        assert!(matches!(yes, Some(UiEvent::ConfirmAccept)));

        let no = key_to_ui_event(press(KeyCode::Esc), Screen::Users, UiMode::Confirm);
        assert!(matches!(no, Some(UiEvent::ConfirmCancel)));

        let other = key_to_ui_event(press(KeyCode::Char('z')), Screen::Users, UiMode::Confirm);
        assert!(other.is_none());
    }

    #[test]
    fn test_help_closes_on_any_key() {
        let event = key_to_ui_event(press(KeyCode::Char('x')), Screen::Home, UiMode::Help);
        assert!(matches!(event, Some(UiEvent::CloseHelp)));
    }

    #[test]
    fn test_ctrl_c_quits_in_dialog() {
        let key = KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        };
        let event = key_to_ui_event(key, Screen::Users, UiMode::Dialog);
        assert!(matches!(event, Some(UiEvent::Quit)));
    }
}
