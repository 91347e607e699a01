//! vaxadmin - actor-based terminal admin console for a vaccination backend
//!
//! Architecture:
//! - UI Layer (Ratatui) - synchronous terminal rendering
//! - App Layer - central state machine processing events
//! - API Layer (Tokio) - async backend call execution

mod api;
mod app;
mod cache;
mod config;
mod constants;
mod messages;
mod models;
mod ui;

use std::io;
use std::time::Duration;

use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{prelude::*, widgets::*};
use tokio::sync::mpsc;

use api::ApiActor;
use app::forms::{
    AllergyForm, AppointmentForm, Dialog, FilterForm, LinkAllergyDialog, RescheduleDialog,
    SettleDialog, UserForm, VaccineForm,
};
use app::AppActor;
use config::Config;
use messages::render::TableView;
use messages::ui_events::{key_to_ui_event, Screen, UiMode};
use messages::{ApiCommand, ApiResult, RenderState, UiEvent};
use models::{Appointment, AppointmentFilter, User, Vaccine};
use ui::{format_local, or_na, severity_color, status_color};

/// Terminal cleanup guard
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging to file
    let file_appender = tracing_appender::rolling::never(".", "vaxadmin.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_ansi(false)
        .init();

    let config = Config::load();
    tracing::info!(base_url = %config.base_url, "starting");

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let _guard = TerminalGuard;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create channels
    let (ui_tx, ui_rx) = mpsc::unbounded_channel::<UiEvent>();
    let (api_cmd_tx, api_cmd_rx) = mpsc::unbounded_channel::<ApiCommand>();
    let (api_resp_tx, api_resp_rx) = mpsc::unbounded_channel::<ApiResult>();
    let (render_tx, mut render_rx) = mpsc::unbounded_channel::<RenderState>();

    // Spawn API actor
    let api_actor = ApiActor::new(config, api_resp_tx);
    tokio::spawn(api_actor.run(api_cmd_rx));

    // Spawn app actor
    let app_actor = AppActor::new(api_cmd_tx, render_tx);
    tokio::spawn(app_actor.run(ui_rx, api_resp_rx));

    // Run UI loop (synchronous with async polling)
    run_ui_loop(&mut terminal, ui_tx, &mut render_rx).await?;

    Ok(())
}

/// Run the synchronous UI rendering loop
async fn run_ui_loop(
    terminal: &mut Terminal<impl Backend>,
    ui_tx: mpsc::UnboundedSender<UiEvent>,
    render_rx: &mut mpsc::UnboundedReceiver<RenderState>,
) -> anyhow::Result<()> {
    let mut current_state = RenderState::default();

    loop {
        // Draw with current state
        terminal.draw(|f| draw_ui(f, &current_state))?;

        // Poll for events with timeout
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if let Some(event) = key_to_ui_event(key, current_state.screen, current_state.mode)
                {
                    if matches!(event, UiEvent::Quit) {
                        let _ = ui_tx.send(event);
                        break;
                    }
                    let _ = ui_tx.send(event);
                }
            }
        } else {
            // Idle tick drives toast expiry
            let _ = ui_tx.send(UiEvent::Tick);
        }

        // Check for state updates (non-blocking)
        while let Ok(state) = render_rx.try_recv() {
            current_state = state;
        }
    }

    Ok(())
}

// ============================================================================
// UI Drawing Functions
// ============================================================================

fn draw_ui(f: &mut Frame, state: &RenderState) {
    let area = f.area();

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Nav bar
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    draw_nav_bar(f, state, main_chunks[0]);

    match state.screen {
        Screen::Home => draw_home(f, state, main_chunks[1]),
        Screen::Vaccines => draw_vaccines(f, state, main_chunks[1]),
        Screen::Allergies => draw_allergies(f, state, main_chunks[1]),
        Screen::Users => draw_users(f, state, main_chunks[1]),
        Screen::Appointments => draw_appointments(f, state, main_chunks[1]),
    }

    draw_status_bar(f, state, main_chunks[2]);

    // Popups, topmost last
    draw_dialog(f, state, area);
    if let Some(confirm) = &state.confirm {
        draw_confirm_popup(f, confirm, area);
    }
    if state.show_help {
        draw_help_popup(f, area);
    }
}

fn draw_nav_bar(f: &mut Frame, state: &RenderState, area: Rect) {
    let mut spans = vec![Span::styled(
        " Vaccination Agenda ",
        Style::default().fg(Color::White).bold(),
    )];

    for (i, screen) in Screen::MENU.iter().enumerate() {
        spans.push(Span::raw(" "));
        let label = format!(" {}:{} ", i + 1, screen.title());
        let style = if state.screen == *screen {
            Style::default().fg(Color::Black).bg(Color::Cyan).bold()
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(label, style));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn draw_home(f: &mut Frame, state: &RenderState, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(1)])
        .split(area);

    let header = Paragraph::new("\n  Menu")
        .style(Style::default().fg(Color::White).bold());
    f.render_widget(header, chunks[0]);

    let labels = [
        "Manage Vaccines",
        "Manage Allergies",
        "Manage Users",
        "Manage Agendas",
    ];
    let items: Vec<ListItem> = labels
        .iter()
        .map(|label| ListItem::new(format!("  {label}")))
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(" Options "))
        .highlight_style(Style::default().fg(Color::Yellow).bold())
        .highlight_symbol("> ");

    let mut list_state = ListState::default();
    list_state.select(Some(state.home_selected));
    f.render_stateful_widget(list, chunks[1], &mut list_state);
}

/// Renders a listing screen: error page, loading page, or the table
fn draw_table<T>(
    f: &mut Frame,
    area: Rect,
    view: &TableView<T>,
    title: &str,
    header: &[&'static str],
    widths: &[Constraint],
    to_row: impl Fn(&T) -> Row<'static>,
) {
    let loading = if view.loading { " [...]" } else { "" };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {title}{loading} "));

    if let Some(error) = &view.error {
        let message = Paragraph::new(format!("Failed to load: {error}\n\nPress 'r' to retry"))
            .style(Style::default().fg(Color::Red))
            .block(block)
            .wrap(Wrap { trim: false });
        f.render_widget(message, area);
        return;
    }

    if view.loading && view.items.is_empty() {
        let message = Paragraph::new("Loading...").block(block);
        f.render_widget(message, area);
        return;
    }

    let rows: Vec<Row> = view.items.iter().map(to_row).collect();
    let table = Table::new(rows, widths.to_vec())
        .header(
            Row::new(header.to_vec()).style(Style::default().fg(Color::Cyan).bold()),
        )
        .block(block)
        .row_highlight_style(Style::default().fg(Color::Yellow).bold());

    let mut table_state = TableState::default();
    table_state.select(Some(view.selected));
    f.render_stateful_widget(table, area, &mut table_state);
}

fn draw_vaccines(f: &mut Frame, state: &RenderState, area: Rect) {
    draw_table(
        f,
        area,
        &state.vaccines,
        "Vaccines (a:add d:delete r:refresh)",
        &["Title", "Description", "Doses", "Periodicity", "Interval"],
        &[
            Constraint::Percentage(25),
            Constraint::Percentage(40),
            Constraint::Length(6),
            Constraint::Length(12),
            Constraint::Length(9),
        ],
        |vaccine: &Vaccine| {
            Row::new(vec![
                vaccine.title.clone(),
                vaccine.description.clone(),
                vaccine.doses.to_string(),
                vaccine
                    .periodicity
                    .map_or_else(|| String::from("N/A"), |p| p.as_str().to_string()),
                or_na(&vaccine.interval),
            ])
        },
    );
}

fn draw_allergies(f: &mut Frame, state: &RenderState, area: Rect) {
    draw_table(
        f,
        area,
        &state.allergies,
        "Allergies (a:add d:delete r:refresh)",
        &["Name"],
        &[Constraint::Percentage(100)],
        |allergy| Row::new(vec![allergy.name.clone()]),
    );
}

fn draw_users(f: &mut Frame, state: &RenderState, area: Rect) {
    draw_table(
        f,
        area,
        &state.users,
        "Users (a:add d:delete l:link allergy r:refresh)",
        &["Name", "Birth date", "Sex", "Address", "Allergies"],
        &[
            Constraint::Percentage(20),
            Constraint::Length(11),
            Constraint::Length(10),
            Constraint::Percentage(35),
            Constraint::Percentage(20),
        ],
        |user: &User| {
            let allergies = user
                .allergies
                .iter()
                .map(|a| a.name.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            Row::new(vec![
                user.name.clone(),
                user.birth_date.to_string(),
                user.sex.as_str().to_string(),
                user.address_line(),
                if allergies.is_empty() {
                    String::from("N/A")
                } else {
                    allergies
                },
            ])
        },
    );
}

fn draw_appointments(f: &mut Frame, state: &RenderState, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(1)])
        .split(area);

    draw_filter_line(f, state, chunks[0]);

    draw_table(
        f,
        chunks[1],
        &state.appointments,
        "Agendas (a:add b:settle g:reschedule d:delete f:filter)",
        &["Date", "Notes", "Vaccine", "Dose", "User", "Status", "Settled at"],
        &[
            Constraint::Length(16),
            Constraint::Percentage(20),
            Constraint::Percentage(20),
            Constraint::Length(4),
            Constraint::Percentage(20),
            Constraint::Length(9),
            Constraint::Length(16),
        ],
        |appointment: &Appointment| {
            let status_cell = Cell::from(Span::styled(
                appointment.status.as_str().to_string(),
                Style::default().fg(status_color(appointment.status)),
            ));
            Row::new(vec![
                Cell::from(format_local(&appointment.date)),
                Cell::from(or_na(&appointment.notes)),
                Cell::from(appointment.vaccine.title.clone()),
                Cell::from((appointment.dose_idx + 1).to_string()),
                Cell::from(appointment.user.name.clone()),
                status_cell,
                Cell::from(
                    appointment
                        .status_date
                        .as_ref()
                        .map_or_else(|| String::from("N/A"), format_local),
                ),
            ])
        },
    );
}

fn draw_filter_line(f: &mut Frame, state: &RenderState, area: Rect) {
    let text = filter_summary(&state.filter, &state.users.items);
    let line = Paragraph::new(format!(" {text}")).style(Style::default().fg(Color::DarkGray));
    f.render_widget(line, area);
}

fn filter_summary(filter: &AppointmentFilter, users: &[User]) -> String {
    if filter.is_empty() {
        return String::from("Filter: none (f:edit)");
    }

    let mut parts = Vec::new();
    if let Some(status) = filter.status {
        parts.push(format!("status={}", status.as_str()));
    }
    if let Some(user_id) = &filter.user_id {
        let name = users
            .iter()
            .find(|u| &u.id == user_id)
            .map_or(user_id.as_str(), |u| u.name.as_str());
        parts.push(format!("user={name}"));
    }
    if let Some(start) = filter.date_start {
        parts.push(format!("from={start}"));
    }
    if let Some(end) = filter.date_end {
        parts.push(format!("to={end}"));
    }
    format!("Filter: {} (f:edit)", parts.join("  "))
}

fn draw_status_bar(f: &mut Frame, state: &RenderState, area: Rect) {
    if let Some(toast) = &state.toast {
        let bar = Paragraph::new(format!(" {} ", toast.message))
            .style(Style::default().fg(severity_color(toast.severity)).bold());
        f.render_widget(bar, area);
        return;
    }

    let hints = match state.mode {
        UiMode::Dialog => " Enter:save | Esc:cancel | Tab:next field | ←/→:change value ",
        UiMode::Confirm => " y:confirm | n:cancel ",
        UiMode::Help => " press any key to close ",
        UiMode::Normal => match state.screen {
            Screen::Home => " ↑/↓:select | Enter:open | 1-4:screens | ?:help | q:quit ",
            Screen::Appointments => {
                " ↑/↓:rows | a:add | b:settle | g:reschedule | f:filter | d:delete | Esc:back | q:quit "
            }
            _ => " ↑/↓:rows | a:add | d:delete | r:refresh | Esc:back | ?:help | q:quit ",
        },
    };

    let bar = Paragraph::new(hints).style(Style::default().fg(Color::DarkGray));
    f.render_widget(bar, area);
}

// ============================================================================
// Dialogs
// ============================================================================

fn draw_dialog(f: &mut Frame, state: &RenderState, area: Rect) {
    match &state.dialog {
        Dialog::None => {}
        Dialog::VaccineForm(form) => draw_vaccine_form(f, form, area),
        Dialog::AllergyForm(form) => draw_allergy_form(f, form, area),
        Dialog::UserForm(form) => draw_user_form(f, form, area),
        Dialog::AppointmentForm(form) => {
            draw_appointment_form(f, form, &state.vaccines.items, &state.users.items, area);
        }
        Dialog::FilterForm(form) => draw_filter_form(f, form, &state.users.items, area),
        Dialog::Settle(dialog) => draw_settle_dialog(f, dialog, area),
        Dialog::Reschedule(dialog) => draw_reschedule_dialog(f, dialog, area),
        Dialog::LinkAllergy(dialog) => {
            draw_link_allergy_dialog(f, dialog, &state.allergies.items, area);
        }
    }
}

/// One labeled form row; select fields render as `< value >`
fn form_line(label: &str, value: &str, selected: bool) -> Line<'static> {
    let marker = if selected { "> " } else { "  " };
    let value_style = if selected {
        Style::default().fg(Color::Yellow).bold()
    } else {
        Style::default()
    };
    Line::from(vec![
        Span::styled(
            format!("{marker}{label:<14}"),
            Style::default().fg(Color::Cyan),
        ),
        Span::styled(value.to_string(), value_style),
    ])
}

fn select_value(value: &str, selected: bool) -> String {
    if selected {
        format!("< {value} >")
    } else {
        value.to_string()
    }
}

fn draw_form_popup(
    f: &mut Frame,
    area: Rect,
    title: &str,
    errors: &[String],
    busy: bool,
    lines: Vec<Line<'static>>,
) {
    let popup_area = centered_rect(60, 60, area);

    let mut content: Vec<Line> = Vec::new();
    for error in errors {
        content.push(Line::from(Span::styled(
            format!("! {error}"),
            Style::default().fg(Color::Red),
        )));
    }
    if !errors.is_empty() {
        content.push(Line::default());
    }
    content.extend(lines);
    content.push(Line::default());
    let footer = if busy {
        "Saving..."
    } else {
        "Enter:save  Esc:cancel  Tab:field  ←/→:change"
    };
    content.push(Line::from(Span::styled(
        footer,
        Style::default().fg(Color::DarkGray),
    )));

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {title} "))
        .style(Style::default().bg(Color::Black));

    let popup = Paragraph::new(content).block(block).wrap(Wrap { trim: false });

    f.render_widget(Clear, popup_area);
    f.render_widget(popup, popup_area);
}

fn draw_vaccine_form(f: &mut Frame, form: &VaccineForm, area: Rect) {
    use app::forms::VaccineField;

    let mut lines = vec![
        form_line("Title", &form.title, form.field == VaccineField::Title),
        form_line(
            "Description",
            &form.description,
            form.field == VaccineField::Description,
        ),
        form_line("Doses", &form.doses, form.field == VaccineField::Doses),
    ];

    if form.multi_dose() {
        lines.push(Line::from(Span::styled(
            "  Multi-dose vaccine: set the cadence below",
            Style::default().fg(Color::DarkGray),
        )));
        let periodicity_selected = form.field == VaccineField::Periodicity;
        lines.push(form_line(
            "Periodicity",
            &select_value(form.periodicity.as_str(), periodicity_selected),
            periodicity_selected,
        ));
        lines.push(form_line(
            "Interval",
            &form.interval,
            form.field == VaccineField::Interval,
        ));
    }

    draw_form_popup(f, area, "Add Vaccine", &form.errors, form.busy, lines);
}

fn draw_allergy_form(f: &mut Frame, form: &AllergyForm, area: Rect) {
    let lines = vec![form_line("Name", &form.name, true)];
    draw_form_popup(f, area, "Add Allergy", &form.errors, form.busy, lines);
}

fn draw_user_form(f: &mut Frame, form: &UserForm, area: Rect) {
    use app::forms::UserField;

    let sex_selected = form.field == UserField::Sex;
    let state_selected = form.field == UserField::State;
    let lines = vec![
        form_line("Name", &form.name, form.field == UserField::Name),
        form_line(
            "Birth date",
            &form.birth_date,
            form.field == UserField::BirthDate,
        ),
        form_line(
            "Sex",
            &select_value(form.sex.as_str(), sex_selected),
            sex_selected,
        ),
        form_line("Street", &form.street, form.field == UserField::Street),
        form_line("Number", &form.number, form.field == UserField::Number),
        form_line(
            "District",
            &form.district,
            form.field == UserField::District,
        ),
        form_line("City", &form.city, form.field == UserField::City),
        form_line(
            "State",
            &select_value(form.state_code(), state_selected),
            state_selected,
        ),
    ];

    draw_form_popup(f, area, "Add User", &form.errors, form.busy, lines);
}

fn draw_appointment_form(
    f: &mut Frame,
    form: &AppointmentForm,
    vaccines: &[Vaccine],
    users: &[User],
    area: Rect,
) {
    use app::forms::AppointmentField;

    let vaccine_selected = form.field == AppointmentField::Vaccine;
    let user_selected = form.field == AppointmentField::User;
    let vaccine_label = vaccines
        .get(form.vaccine_idx)
        .map_or("(none)", |v| v.title.as_str());
    let user_label = users
        .get(form.user_idx)
        .map_or("(none)", |u| u.name.as_str());

    let lines = vec![
        form_line("Date", &form.date, form.field == AppointmentField::Date),
        form_line("Notes", &form.notes, form.field == AppointmentField::Notes),
        form_line(
            "Vaccine",
            &select_value(vaccine_label, vaccine_selected),
            vaccine_selected,
        ),
        form_line(
            "User",
            &select_value(user_label, user_selected),
            user_selected,
        ),
        Line::from(Span::styled(
            "  Date format: YYYY-MM-DD HH:MM (local time)",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    draw_form_popup(f, area, "New Agenda", &form.errors, form.busy, lines);
}

fn draw_filter_form(f: &mut Frame, form: &FilterForm, users: &[User], area: Rect) {
    use app::forms::FilterField;

    let status_selected = form.field == FilterField::Status;
    let user_selected = form.field == FilterField::User;
    let status = form.status();
    let status_label = status.as_ref().map_or("All", |s| s.as_str());
    let user_label = if form.user_idx == 0 {
        "All"
    } else {
        users
            .get(form.user_idx - 1)
            .map_or("All", |u| u.name.as_str())
    };

    let lines = vec![
        form_line(
            "Status",
            &select_value(status_label, status_selected),
            status_selected,
        ),
        form_line(
            "User",
            &select_value(user_label, user_selected),
            user_selected,
        ),
        form_line(
            "From",
            &form.date_start,
            form.field == FilterField::DateStart,
        ),
        form_line("To", &form.date_end, form.field == FilterField::DateEnd),
        Line::from(Span::styled(
            "  Dates are whole local days, YYYY-MM-DD",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    draw_form_popup(f, area, "Filter Agendas", &form.errors, false, lines);
}

fn draw_settle_dialog(f: &mut Frame, dialog: &SettleDialog, area: Rect) {
    let lines = vec![form_line(
        "Outcome",
        &select_value(dialog.outcome.as_str(), true),
        true,
    )];
    draw_form_popup(f, area, "Settle Agenda", &[], dialog.busy, lines);
}

fn draw_reschedule_dialog(f: &mut Frame, dialog: &RescheduleDialog, area: Rect) {
    let lines = vec![
        form_line("New date", &dialog.date, true),
        Line::from(Span::styled(
            "  Date format: YYYY-MM-DD HH:MM (local time)",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    draw_form_popup(
        f,
        area,
        "Reschedule Agenda",
        &dialog.errors,
        dialog.busy,
        lines,
    );
}

fn draw_link_allergy_dialog(
    f: &mut Frame,
    dialog: &LinkAllergyDialog,
    allergies: &[crate::models::Allergy],
    area: Rect,
) {
    let allergy_label = allergies
        .get(dialog.allergy_idx)
        .map_or("(none)", |a| a.name.as_str());

    let lines = vec![
        form_line("User", &dialog.user_name, false),
        form_line("Allergy", &select_value(allergy_label, true), true),
    ];
    draw_form_popup(f, area, "Link Allergy", &[], dialog.busy, lines);
}

fn draw_confirm_popup(f: &mut Frame, confirm: &messages::render::ConfirmView, area: Rect) {
    let popup_area = centered_rect(40, 20, area);

    let footer = if confirm.busy {
        Span::styled("Working...", Style::default().fg(Color::DarkGray))
    } else {
        Span::styled(
            "[y] Confirm   [n] Cancel",
            Style::default().fg(Color::DarkGray),
        )
    };

    let content = vec![
        Line::default(),
        Line::from(confirm.message.clone()),
        Line::default(),
        Line::from(footer),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", confirm.title))
        .border_style(Style::default().fg(Color::Red))
        .style(Style::default().bg(Color::Black));

    let popup = Paragraph::new(content).block(block).wrap(Wrap { trim: false });

    f.render_widget(Clear, popup_area);
    f.render_widget(popup, popup_area);
}

fn draw_help_popup(f: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 70, area);

    let help_text = r#"
 VAXADMIN - Keyboard Shortcuts

 NAVIGATION
   1-4                Jump to screen
   ↑ / ↓              Move row / menu selection
   Esc                Back to home
   Enter              Open menu entry

 LISTS
   a                  Add new record
   d                  Delete selected (asks first)
   r                  Invalidate and refetch

 AGENDAS
   b                  Settle (dar baixa) the selected agenda
   g                  Reschedule the selected agenda
   f                  Edit listing filters

 USERS
   l                  Link an allergy to the selected user

 DIALOGS
   Tab / Shift+Tab    Next / previous field
   ← / →              Change select value
   Enter              Save / apply
   Esc                Cancel

 GENERAL
   ?                  Toggle this help
   q / Ctrl+C         Quit

 Press any key to close...
"#;

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Help ")
        .style(Style::default().bg(Color::Black));

    let help = Paragraph::new(help_text)
        .block(block)
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, popup_area);
    f.render_widget(help, popup_area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
