//! API actor - executes backend calls on the Tokio runtime

use tokio::sync::mpsc;
use tokio::task::JoinSet;

use crate::api::client::ApiClient;
use crate::config::Config;
use crate::messages::api::{ApiCommand, ApiResult, Mutation};

/// API actor that processes fetch and mutation commands concurrently
pub struct ApiActor {
    client: ApiClient,
    response_tx: mpsc::UnboundedSender<ApiResult>,
    active_requests: JoinSet<()>,
}

impl ApiActor {
    pub fn new(config: Config, response_tx: mpsc::UnboundedSender<ApiResult>) -> Self {
        ApiActor {
            client: ApiClient::new(config),
            response_tx,
            active_requests: JoinSet::new(),
        }
    }

    /// Run the API actor message loop
    pub async fn run(mut self, mut cmd_rx: mpsc::UnboundedReceiver<ApiCommand>) {
        loop {
            tokio::select! {
                biased;

                cmd = cmd_rx.recv() => {
                    match cmd {
                        Some(ApiCommand::Shutdown) | None => break,
                        Some(cmd) => self.dispatch(cmd),
                    }
                }

                // Clean up completed tasks
                Some(_result) = self.active_requests.join_next() => {}
            }
        }
    }

    fn dispatch(&mut self, cmd: ApiCommand) {
        let client = self.client.clone();
        let tx = self.response_tx.clone();

        match cmd {
            ApiCommand::FetchVaccines => {
                self.active_requests.spawn(async move {
                    tracing::info!("fetching vaccines");
                    let _ = tx.send(ApiResult::Vaccines(client.fetch_vaccines().await));
                });
            }
            ApiCommand::FetchAllergies => {
                self.active_requests.spawn(async move {
                    tracing::info!("fetching allergies");
                    let _ = tx.send(ApiResult::Allergies(client.fetch_allergies().await));
                });
            }
            ApiCommand::FetchUsers => {
                self.active_requests.spawn(async move {
                    tracing::info!("fetching users");
                    let _ = tx.send(ApiResult::Users(client.fetch_users().await));
                });
            }
            ApiCommand::FetchAppointments { req, filter } => {
                self.active_requests.spawn(async move {
                    tracing::info!(req, ?filter, "fetching appointments");
                    let result = client.fetch_appointments(&filter).await;
                    let _ = tx.send(ApiResult::Appointments { req, result });
                });
            }
            ApiCommand::CreateVaccine(draft) => {
                self.spawn_mutation(Mutation::CreateVaccine, async move {
                    client.create_vaccine(&draft).await
                });
            }
            ApiCommand::DeleteVaccine { id } => {
                self.spawn_mutation(Mutation::DeleteVaccine, async move {
                    client.delete_vaccine(&id).await
                });
            }
            ApiCommand::CreateAllergy(draft) => {
                self.spawn_mutation(Mutation::CreateAllergy, async move {
                    client.create_allergy(&draft).await
                });
            }
            ApiCommand::DeleteAllergy { id } => {
                self.spawn_mutation(Mutation::DeleteAllergy, async move {
                    client.delete_allergy(&id).await
                });
            }
            ApiCommand::CreateUser(draft) => {
                self.spawn_mutation(Mutation::CreateUser, async move {
                    client.create_user(&draft).await
                });
            }
            ApiCommand::DeleteUser { id } => {
                self.spawn_mutation(Mutation::DeleteUser, async move {
                    client.delete_user(&id).await
                });
            }
            ApiCommand::LinkAllergy { user_id, allergy_id } => {
                self.spawn_mutation(Mutation::LinkAllergy, async move {
                    client.link_allergy(&user_id, &allergy_id).await
                });
            }
            ApiCommand::CreateAppointment(draft) => {
                self.spawn_mutation(Mutation::CreateAppointment, async move {
                    client.create_appointment(&draft).await
                });
            }
            ApiCommand::DeleteAppointment { id } => {
                self.spawn_mutation(Mutation::DeleteAppointment, async move {
                    client.delete_appointment(&id).await
                });
            }
            ApiCommand::SettleAppointment { id, outcome } => {
                self.spawn_mutation(Mutation::SettleAppointment, async move {
                    client.settle_appointment(&id, outcome).await
                });
            }
            ApiCommand::RescheduleAppointment { id, date } => {
                self.spawn_mutation(Mutation::RescheduleAppointment, async move {
                    client.reschedule_appointment(&id, date).await
                });
            }
            ApiCommand::Shutdown => {}
        }
    }

    fn spawn_mutation<F>(&mut self, mutation: Mutation, fut: F)
    where
        F: std::future::Future<Output = Result<(), crate::messages::api::ApiError>>
            + Send
            + 'static,
    {
        let tx = self.response_tx.clone();
        self.active_requests.spawn(async move {
            tracing::info!(mutation = mutation.name(), "executing mutation");
            let result = fut.await;
            if let Err(error) = &result {
                tracing::warn!(mutation = mutation.name(), %error, "mutation failed");
            }
            let _ = tx.send(ApiResult::MutationDone { mutation, result });
        });
    }
}
