//! Clients command - guest records.

use super::output::{client_line, emit, lines};
use super::CommandContext;
use crate::cli::args::{ClientsAction, ClientsArgs};
use crate::domain::{ClientCreate, ClientUpdate};
use crate::errors::AppResult;
use crate::types::PageParams;

/// Execute the clients command
pub async fn execute(args: ClientsArgs, ctx: &CommandContext) -> AppResult<()> {
    let clients = ctx.services.clients();

    match args.action {
        ClientsAction::List(page) => {
            let found = clients.list(PageParams::new(page.skip, page.limit)).await?;
            emit(ctx, &found, |c| lines(c, client_line))
        }
        ClientsAction::Get { id } => {
            let client = clients.get(id).await?;
            emit(ctx, &client, client_line)
        }
        ClientsAction::Search { query, page } => {
            let found = clients
                .search(&query, PageParams::new(page.skip, page.limit))
                .await?;
            emit(ctx, &found, |c| lines(c, client_line))
        }
        ClientsAction::Create(fields) => {
            let client = clients
                .create(ClientCreate {
                    name: fields.name,
                    email: fields.email,
                    phone: fields.phone,
                    document: fields.document,
                    address: fields.address,
                })
                .await?;
            ctx.notifier
                .success("Client created", Some(&format!("#{} {}", client.id, client.name)));
            Ok(())
        }
        ClientsAction::Update { id, fields } => {
            let client = clients
                .update(
                    id,
                    ClientUpdate {
                        name: fields.name,
                        email: fields.email,
                        phone: fields.phone,
                        document: fields.document,
                        address: fields.address,
                    },
                )
                .await?;
            ctx.notifier
                .success("Client updated", Some(&format!("#{} {}", client.id, client.name)));
            Ok(())
        }
        ClientsAction::Delete { id, yes } => {
            if !ctx.confirmed(yes, &format!("Delete client #{}?", id)) {
                return Ok(());
            }
            clients.delete(id).await?;
            ctx.notifier.success("Client deleted", Some(&format!("#{}", id)));
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::commands::testing::{context, RecordingNotifier};
    use crate::services::{ClientService, MockClientService, MockServiceContainer};

    fn services_with(clients: MockClientService) -> MockServiceContainer {
        let clients: Arc<dyn ClientService> = Arc::new(clients);
        let mut services = MockServiceContainer::new();
        services.expect_clients().returning(move || clients.clone());
        services
    }

    #[tokio::test]
    async fn test_delete_declined_sends_nothing() {
        let mut clients = MockClientService::new();
        clients.expect_delete().never();

        let notifier = Arc::new(RecordingNotifier::answering(false));
        let ctx = context(services_with(clients), notifier.clone());

        execute(
            ClientsArgs {
                action: ClientsAction::Delete { id: 7, yes: false },
            },
            &ctx,
        )
        .await
        .unwrap();

        assert_eq!(
            *notifier.prompts.lock().unwrap(),
            vec!["Delete client #7?".to_string()]
        );
    }

    #[tokio::test]
    async fn test_delete_with_yes_skips_prompt() {
        let mut clients = MockClientService::new();
        clients
            .expect_delete()
            .with(mockall::predicate::eq(7))
            .times(1)
            .returning(|_| Ok(()));

        let notifier = Arc::new(RecordingNotifier::answering(false));
        let ctx = context(services_with(clients), notifier.clone());

        execute(
            ClientsArgs {
                action: ClientsAction::Delete { id: 7, yes: true },
            },
            &ctx,
        )
        .await
        .unwrap();

        assert!(notifier.prompts.lock().unwrap().is_empty());
        assert_eq!(notifier.titles(), vec!["Client deleted".to_string()]);
    }
}
