use async_graphql::{Context, ID, Object, Result as GqlResult};

use crate::shell::state::AppState;

#[derive(Default)]
pub struct DeleteTimeEntryMutation;

#[Object]
impl DeleteTimeEntryMutation {
    /// Number of removed entries. Unknown ids fail with "Entry not found".
    async fn delete_time_entry(&self, context: &Context<'_>, id: ID) -> GqlResult<u64> {
        let state = context.data_unchecked::<AppState>();
        state
            .delete_handler
            .handle(&id)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))
    }
}
