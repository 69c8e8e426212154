//! Stack 操作处理
//!
//! 五个面向用户的操作入口。目标解析失败时直接拒绝（不发请求、
//! 不改忙碌标记）；目标按钮已忙时静默忽略。

use stackdeck_client::DesiredState;

use crate::backend::ApiCall;
use crate::message::OpMessage;
use crate::model::{App, Modal, StackAction};

/// 处理操作消息
pub(super) fn update(app: &mut App, msg: OpMessage) -> Option<ApiCall> {
    match msg {
        OpMessage::Create => handle_create(app),
        OpMessage::Refresh => request_refresh(app),
        OpMessage::Start => handle_status_change(app, DesiredState::Running),
        OpMessage::Stop => handle_status_change(app, DesiredState::Stopped),
        OpMessage::Delete => handle_delete(app),
    }
}

fn handle_create(app: &mut App) -> Option<ApiCall> {
    if app.stacks.create_busy {
        return None;
    }
    app.stacks.create_busy = true;
    Some(ApiCall::Create)
}

/// 发起一次列表刷新；已有刷新在途时不再追加
fn request_refresh(app: &mut App) -> Option<ApiCall> {
    if app.stacks.list_busy {
        return None;
    }
    app.stacks.list_busy = true;
    Some(ApiCall::List)
}

fn handle_status_change(app: &mut App, target: DesiredState) -> Option<ApiCall> {
    let id = match app.stacks.resolve_target() {
        Ok(id) => id,
        Err(e) => {
            app.status.error(e.user_message());
            return None;
        }
    };

    if app.stacks.is_row_busy(id) {
        return None;
    }

    let action = match target {
        DesiredState::Running => StackAction::Start,
        DesiredState::Stopped => StackAction::Stop,
    };
    app.stacks.mark_busy(id, action);

    Some(ApiCall::SetStatus { id, target })
}

fn handle_delete(app: &mut App) -> Option<ApiCall> {
    let id = match app.stacks.resolve_target() {
        Ok(id) => id,
        Err(e) => {
            app.status.error(e.user_message());
            return None;
        }
    };

    if app.stacks.is_row_busy(id) {
        return None;
    }

    // 不可逆操作：先确认，确认前不发请求
    app.modal.open(Modal::ConfirmDelete { id });
    None
}
