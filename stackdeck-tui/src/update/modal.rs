//! 弹窗消息处理

use crate::backend::ApiCall;
use crate::message::ModalMessage;
use crate::model::{App, Modal, StackAction};

/// 处理弹窗消息
pub(super) fn update(app: &mut App, msg: ModalMessage) -> Option<ApiCall> {
    match msg {
        ModalMessage::Confirm => match app.modal.take() {
            Some(Modal::ConfirmDelete { id }) => {
                if app.stacks.is_row_busy(id) {
                    return None;
                }
                app.stacks.mark_busy(id, StackAction::Delete);
                Some(ApiCall::Delete { id })
            }
            None => None,
        },

        // 用户放弃：静默关闭，不发请求、不显示消息
        ModalMessage::Cancel => {
            app.modal.take();
            None
        }
    }
}
