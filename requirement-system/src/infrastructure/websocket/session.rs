use std::sync::{
    atomic::{AtomicI64, Ordering},
    Arc,
};

use actix_ws::{Message, MessageStream, Session};
use chrono::Utc;
use infrastructure_command::WsServerOperateCommand;
use uuid::Uuid;

#[derive(Debug)]
pub enum ManagerDirective {
    Text(String),
    Close,
}

/// One websocket connection joined to the comment group of a requirement.
pub struct WsSession {
    pub id: Uuid,
    pub group: Uuid,
    pub last_modified_timestamp: Arc<AtomicI64>,
    pub directive_sender: flume::Sender<ManagerDirective>,
}

impl WsSession {
    pub fn new(
        session: Session,
        msg_stream: MessageStream,
        id: Uuid,
        group: Uuid,
        close_informer: flume::Sender<WsServerOperateCommand>,
    ) -> Self {
        let (directive_sender, directive_receiver) = flume::bounded(32);
        let last_modified_timestamp = Arc::new(AtomicI64::new(Utc::now().timestamp()));

        actix_web::rt::spawn(watch_message(
            session,
            msg_stream,
            close_informer,
            id,
            last_modified_timestamp.clone(),
            directive_receiver,
        ));

        Self {
            id,
            group,
            last_modified_timestamp,
            directive_sender,
        }
    }
}

impl Drop for WsSession {
    fn drop(&mut self) {
        tracing::info!("Disconnect websocket, session={}, group={}", self.id, self.group)
    }
}

/// Clients only listen; pings are answered and anything else but `close` is ignored.
async fn watch_message(
    mut session: Session,
    mut msg_stream: MessageStream,
    close_informer: flume::Sender<WsServerOperateCommand>,
    id: Uuid,
    last_modified_timestamp: Arc<AtomicI64>,
    directive_receiver: flume::Receiver<ManagerDirective>,
) {
    loop {
        tokio::select! {
            directive = directive_receiver.recv_async() => {
                match directive {
                    Ok(ManagerDirective::Text(msg)) => {
                        if session.text(msg).await.is_err() {
                            log_error_client_closed();
                            break;
                        }
                    }
                    Ok(ManagerDirective::Close) => {
                        if session.close(None).await.is_err() {
                            log_error_client_closed();
                        };
                        return;
                    }
                    Err(e) => {
                        tracing::error!("`WsSession` dropped before actix session: {e}");
                        break;
                    }
                }
            }

            msg = msg_stream.recv() => {
                last_modified_timestamp.store(Utc::now().timestamp(), Ordering::Relaxed);

                match msg {
                    Some(Ok(Message::Ping(bytes))) => {
                        if session.pong(&bytes).await.is_err() {
                            log_error_client_closed();
                            break;
                        }
                    }
                    Some(Ok(Message::Text(s))) if s.trim() == "close" => {
                        tracing::info!(r#"Received message "close", session={id}"#);
                        break;
                    }
                    Some(Ok(Message::Close(reason))) => {
                        tracing::info!("Client closed session={id}, reason={reason:?}");
                        break;
                    }
                    Some(Ok(_)) => continue,
                    Some(Err(e)) => {
                        tracing::error!("Websocket error: {e}");
                        break;
                    }
                    None => {
                        log_error_client_closed();
                        break;
                    }
                }
            }

            else => break,
        }
    }

    if session.close(None).await.is_err() {
        log_error_client_closed();
    };

    if let Err(e) = close_informer.send(WsServerOperateCommand::RemoveSession { id }) {
        tracing::error!("Close informer error: {e}");
    };
}

#[inline]
fn log_error_client_closed() {
    tracing::debug!("Client closed session unilaterally");
}
