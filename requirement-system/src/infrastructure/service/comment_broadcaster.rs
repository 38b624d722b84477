use async_trait::async_trait;
use domain_requirement::{model::entity::Comment, service::CommentBroadcaster};
use infrastructure_command::WsServerOperateCommand;
use serde_json::json;
use typed_builder::TypedBuilder;

/// Pushes new comments to the websocket sessions watching the requirement.
#[derive(TypedBuilder)]
pub struct WsCommentBroadcaster {
    ws_sender: flume::Sender<WsServerOperateCommand>,
}

#[async_trait]
impl CommentBroadcaster for WsCommentBroadcaster {
    async fn broadcast_comment(&self, comment: &Comment) -> anyhow::Result<()> {
        let content = json!({
            "event": "ReceiveComment",
            "userName": comment.user_name,
            "description": comment.description,
        })
        .to_string();
        self.ws_sender
            .send_async(WsServerOperateCommand::BroadcastToGroup {
                group: comment.requirement_id,
                content,
            })
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use uuid::Uuid;

    use super::*;

    #[tokio::test]
    async fn test_comment_sent_to_requirement_group() {
        let (sender, receiver) = flume::unbounded();
        let broadcaster = WsCommentBroadcaster::builder().ws_sender(sender).build();
        let comment = Comment {
            id: Uuid::new_v4(),
            requirement_id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            user_name: "ana@example.com".to_string(),
            description: "Printer fixed".to_string(),
            created_time: Utc::now(),
        };
        broadcaster.broadcast_comment(&comment).await.unwrap();
        let WsServerOperateCommand::BroadcastToGroup { group, content } =
            receiver.recv_async().await.unwrap()
        else {
            panic!("expected a broadcast");
        };
        assert_eq!(group, comment.requirement_id);
        let content: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(content["event"], "ReceiveComment");
        assert_eq!(content["userName"], "ana@example.com");
        assert_eq!(content["description"], "Printer fixed");
    }
}
