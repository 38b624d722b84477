use std::{
    sync::{atomic::Ordering, Arc},
    time::Duration,
};

use actix_web::{web::Payload, HttpRequest, HttpResponse};
use chrono::Utc;
use dashmap::DashMap;
use infrastructure_command::WsServerOperateCommand;
use uuid::Uuid;

use super::session::{ManagerDirective, WsSession};

/// Hub of the comment websocket sessions, driven through `command_sender`.
pub struct WsManager {
    id2session: Arc<DashMap<Uuid, WsSession>>,
    pub command_sender: flume::Sender<WsServerOperateCommand>,
}

impl WsManager {
    /// Must be called inside a tokio runtime.
    pub fn new(keep_alive: u64) -> Self {
        let (command_sender, cmd_receiver): (
            flume::Sender<WsServerOperateCommand>,
            flume::Receiver<WsServerOperateCommand>,
        ) = flume::unbounded();
        let id2session = Arc::new(DashMap::new());

        tokio::spawn(watch_command(cmd_receiver, id2session.clone()));

        tokio::spawn(watch_session_timeout(id2session.clone(), keep_alive));

        Self {
            id2session,
            command_sender,
        }
    }

    /// Upgrade the request and join the session to `group`.
    pub fn open_session(
        &self,
        req: HttpRequest,
        body: Payload,
        group: Uuid,
    ) -> Result<HttpResponse, actix_web::Error> {
        let id = Uuid::new_v4();
        let (response, session, msg_stream) = actix_ws::handle(&req, body)?;
        let ws_session =
            WsSession::new(session, msg_stream, id, group, self.command_sender.clone());
        self.id2session.insert(id, ws_session);
        tracing::info!("Opened websocket session={id}, group={group}");
        Ok(response)
    }
}

async fn watch_command(
    cmd_receiver: flume::Receiver<WsServerOperateCommand>,
    id2session: Arc<DashMap<Uuid, WsSession>>,
) {
    while let Ok(msg) = cmd_receiver.recv_async().await {
        match msg {
            WsServerOperateCommand::RemoveSession { id } => {
                tracing::info!("Removing session, id={id}");
                let _ = id2session.remove(&id);
                log_active_sessions(&id2session);
            }
            WsServerOperateCommand::BroadcastToGroup { group, content } => {
                let senders = id2session
                    .iter()
                    .filter(|el| el.group == group)
                    .map(|el| {
                        el.last_modified_timestamp
                            .store(Utc::now().timestamp(), Ordering::Relaxed);
                        (el.id, el.directive_sender.clone())
                    })
                    .collect::<Vec<_>>();
                tracing::debug!("Broadcasting to {} sessions of group={group}", senders.len());
                for (id, sender) in senders {
                    if let Err(e) =
                        sender.send_async(ManagerDirective::Text(content.to_owned())).await
                    {
                        tracing::error!("Actix session closed before `WsSession`, id={id}: {e}");
                    }
                }
            }
        }
    }
    tracing::info!("WsManager command channel closed");
}

async fn watch_session_timeout(id2session: Arc<DashMap<Uuid, WsSession>>, keep_alive: u64) {
    loop {
        tokio::time::sleep(Duration::from_secs(keep_alive)).await;

        let now = Utc::now().timestamp();
        let expired = id2session
            .iter()
            .filter(|el| {
                now > el.last_modified_timestamp.load(Ordering::Relaxed) + keep_alive as i64
            })
            .map(|el| (el.id, el.directive_sender.clone()))
            .collect::<Vec<_>>();

        for (id, sender) in expired {
            if let Err(e) = sender.send_async(ManagerDirective::Close).await {
                tracing::error!("Actix session closed before `WsSession`: {e}");
            };
            let _ = id2session.remove(&id);
        }
        log_active_sessions(&id2session);
    }
}

#[inline]
fn log_active_sessions(id2session: &DashMap<Uuid, WsSession>) {
    let ids: Vec<Uuid> = id2session.iter().map(|e| *e.key()).collect();
    tracing::info!("Active sessions: {ids:?}");
}
