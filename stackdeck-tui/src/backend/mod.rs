//! Backend 层：API 调用执行
//!
//! Update 层不做 IO，只返回要执行的 [`ApiCall`]。主循环把它交给
//! [`ApiService`]，后者在独立任务中执行并通过通道把 [`BackendEvent`]
//! 送回主循环。

use tokio::sync::mpsc::UnboundedSender;

use stackdeck_client::{DesiredState, StackClient, StackId};

use crate::message::BackendEvent;

/// 一次待执行的 API 调用
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiCall {
    /// POST /api/v1/stacks
    Create,
    /// GET /api/v1/stacks
    List,
    /// PATCH /api/v1/stacks/{id}/status
    SetStatus { id: StackId, target: DesiredState },
    /// DELETE /api/v1/stacks/{id}
    Delete { id: StackId },
}

/// API 调用执行器
///
/// 持有客户端与完成事件通道；每次 `dispatch` 派生一个任务，
/// 任务结束时恰好发送一条 [`BackendEvent`]。
pub struct ApiService {
    client: StackClient,
    tx: UnboundedSender<BackendEvent>,
}

impl ApiService {
    /// 创建执行器
    pub fn new(client: StackClient, tx: UnboundedSender<BackendEvent>) -> Self {
        Self { client, tx }
    }

    /// 异步执行一次调用
    pub fn dispatch(&self, call: ApiCall) {
        let client = self.client.clone();
        let tx = self.tx.clone();

        tokio::spawn(async move {
            let event = match call {
                ApiCall::Create => BackendEvent::CreateDone(client.create_stack().await),
                ApiCall::List => BackendEvent::ListDone(client.list_stacks().await),
                ApiCall::SetStatus { id, target } => BackendEvent::StatusDone {
                    id,
                    target,
                    result: client.set_stack_status(id, target).await,
                },
                ApiCall::Delete { id } => BackendEvent::DeleteDone {
                    id,
                    result: client.delete_stack(id).await,
                },
            };

            // 接收端关闭说明应用正在退出
            let _ = tx.send(event);
        });
    }
}
