//! App actor - message loop processing UI events and API results

use tokio::sync::mpsc;

use crate::app::state::AppState;
use crate::messages::{ApiCommand, ApiResult, RenderState, UiEvent};

/// App actor that processes UI events and API results
pub struct AppActor {
    state: AppState,
    api_tx: mpsc::UnboundedSender<ApiCommand>,
    render_tx: mpsc::UnboundedSender<RenderState>,
}

impl AppActor {
    pub fn new(
        api_tx: mpsc::UnboundedSender<ApiCommand>,
        render_tx: mpsc::UnboundedSender<RenderState>,
    ) -> Self {
        AppActor {
            state: AppState::new(),
            api_tx,
            render_tx,
        }
    }

    /// Run the actor message loop
    pub async fn run(
        mut self,
        mut ui_rx: mpsc::UnboundedReceiver<UiEvent>,
        mut api_rx: mpsc::UnboundedReceiver<ApiResult>,
    ) {
        // Send initial render state
        let _ = self.render_tx.send(self.state.to_render_state());

        loop {
            tokio::select! {
                Some(event) = ui_rx.recv() => {
                    match event {
                        UiEvent::Quit => {
                            let _ = self.api_tx.send(ApiCommand::Shutdown);
                            break;
                        }
                        // Ticks only redraw when a toast expired
                        UiEvent::Tick => {
                            if self.state.tick() {
                                let _ = self.render_tx.send(self.state.to_render_state());
                            }
                        }
                        event => {
                            for command in self.handle_ui_event(event) {
                                let _ = self.api_tx.send(command);
                            }
                            let _ = self.render_tx.send(self.state.to_render_state());
                        }
                    }
                }
                Some(result) = api_rx.recv() => {
                    for command in self.state.handle_api_result(result) {
                        let _ = self.api_tx.send(command);
                    }
                    let _ = self.render_tx.send(self.state.to_render_state());
                }
                else => break,
            }
        }
    }

    /// Handle a UI event, returning API commands it produced
    fn handle_ui_event(&mut self, event: UiEvent) -> Vec<ApiCommand> {
        match event {
            // Routing
            UiEvent::Navigate(screen) => return self.state.navigate(screen),
            UiEvent::Back => self.state.back(),
            UiEvent::EnterSelected => return self.state.enter_selected(),

            // Table navigation
            UiEvent::RowUp => self.state.row_up(),
            UiEvent::RowDown => self.state.row_down(),

            // Data
            UiEvent::Refresh => return self.state.refresh(),

            // Dialog openers
            UiEvent::OpenAddForm => self.state.open_add_form(),
            UiEvent::RequestDelete => self.state.request_delete(),
            UiEvent::OpenSettleDialog => self.state.open_settle_dialog(),
            UiEvent::OpenRescheduleDialog => self.state.open_reschedule_dialog(),
            UiEvent::OpenFilterForm => self.state.open_filter_form(),
            UiEvent::OpenLinkAllergyDialog => self.state.open_link_allergy_dialog(),

            // Form interaction
            UiEvent::FormChar(c) => self.state.form_char(c),
            UiEvent::FormBackspace => self.state.form_backspace(),
            UiEvent::FormNextField => self.state.form_next_field(),
            UiEvent::FormPrevField => self.state.form_prev_field(),
            UiEvent::FormCycleLeft => self.state.form_cycle(false),
            UiEvent::FormCycleRight => self.state.form_cycle(true),
            UiEvent::FormSubmit => return self.state.form_submit(),
            UiEvent::FormCancel => self.state.form_cancel(),

            // Confirmation dialog
            UiEvent::ConfirmAccept => return self.state.confirm_accept().into_iter().collect(),
            UiEvent::ConfirmCancel => self.state.confirm_cancel(),

            // Popups
            UiEvent::ToggleHelp => self.state.toggle_help(),
            UiEvent::CloseHelp => self.state.close_help(),

            // Handled by the run loop
            UiEvent::Tick | UiEvent::Quit => {}
        }

        Vec::new()
    }
}
