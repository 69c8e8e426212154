//! Backend 完成事件处理
//!
//! 每条完成事件无论成败都先释放对应的忙碌标记，然后更新状态区；
//! 变更类操作成功后追加一次列表刷新（失败与 GET 不刷新）。
//!
//! 变更成功时如果已有列表请求在途，其响应拍摄于变更之前，可能不含
//! 本次变更的结果；此时不并发第二个请求，而是置位排队标记，等在途
//! 响应消化完再刷新一次。

use crate::backend::ApiCall;
use crate::message::BackendEvent;
use crate::model::App;

/// 处理完成事件
pub(super) fn update(app: &mut App, event: BackendEvent) -> Option<ApiCall> {
    match event {
        BackendEvent::CreateDone(result) => {
            app.stacks.create_busy = false;
            match result {
                Ok(created) => {
                    app.status
                        .success(format!("Stack {} created successfully", created.stack_id));
                    refresh_after_mutation(app)
                }
                Err(e) => {
                    app.status.error(e.user_message());
                    None
                }
            }
        }

        BackendEvent::ListDone(result) => {
            app.stacks.list_busy = false;
            match result {
                Ok(stacks) => app.stacks.set_stacks(stacks),
                Err(e) => app.status.error(e.user_message()),
            }

            // 消化完在途响应后执行排队的刷新
            if app.stacks.refresh_queued {
                app.stacks.refresh_queued = false;
                app.stacks.list_busy = true;
                return Some(ApiCall::List);
            }
            None
        }

        BackendEvent::StatusDone { id, target, result } => {
            app.stacks.clear_busy(id);
            match result {
                Ok(()) => {
                    app.status
                        .success(format!("Stack {id} {} successfully", target.past_verb()));
                    refresh_after_mutation(app)
                }
                Err(e) => {
                    app.status.error(e.user_message());
                    None
                }
            }
        }

        BackendEvent::DeleteDone { id, result } => {
            app.stacks.clear_busy(id);
            match result {
                Ok(()) => {
                    app.status
                        .success(format!("Stack {id} deleted successfully"));
                    refresh_after_mutation(app)
                }
                Err(e) => {
                    app.status.error(e.user_message());
                    None
                }
            }
        }
    }
}

/// 变更成功后的列表刷新：空闲时立即发起，在途时排队一次
fn refresh_after_mutation(app: &mut App) -> Option<ApiCall> {
    if app.stacks.list_busy {
        app.stacks.refresh_queued = true;
        return None;
    }
    app.stacks.list_busy = true;
    Some(ApiCall::List)
}
