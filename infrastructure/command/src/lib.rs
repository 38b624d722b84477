//! Commands sent to the websocket hub.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum WsServerOperateCommand {
    /// Forget a session that has been closed.
    RemoveSession {
        id: Uuid,
    },

    /// Send `content` to every session joined to `group`.
    BroadcastToGroup {
        /// Requirement id the sessions listen to.
        group: Uuid,
        content: String,
    },
}
