use async_graphql::{Context, ID, Object, Result as GqlResult};

use crate::modules::time_entries::core::command::TimeEntryInput;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct RegisterTimeEntryMutation;

#[Object]
impl RegisterTimeEntryMutation {
    #[allow(clippy::too_many_arguments)]
    async fn add_time_entry(
        &self,
        context: &Context<'_>,
        pid: String,
        client: String,
        department: String,
        project: String,
        counterparty: Option<String>,
        description: Option<String>,
        start_time: String,
        end_time: String,
    ) -> GqlResult<ID> {
        let state = context.data_unchecked::<AppState>();

        let input = TimeEntryInput {
            pid,
            client,
            department,
            project,
            counterparty,
            description,
            start_time,
            end_time,
        };

        let id = state
            .register_handler
            .handle(input)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;

        Ok(ID(id))
    }
}
