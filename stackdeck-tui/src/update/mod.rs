//! Update 层：状态更新逻辑
//!
//! Update 是唯一可以修改 Model 的地方。`update` 消费一条消息，
//! 返回需要执行的 API 调用（如果有）；它本身不做任何 IO，
//! 所以每条状态迁移都可以直接用单元测试验证。
//!
//! 每次操作调用遵循同一个状态机：
//!
//! ```text
//! Idle -> Validating -> (Rejected | Requesting) -> (Succeeded | Failed) -> Idle
//! ```
//!
//! - `Rejected` 只能从校验阶段到达：不发请求、不改忙碌标记，
//!   仅通过状态区提示错误；
//! - `Requesting` 期间对应按钮持有忙碌标记，重复调用被静默忽略；
//! - `Succeeded` 与 `Failed` 都无条件释放忙碌标记回到 `Idle`。

mod backend;
mod modal;
mod ops;

use crate::backend::ApiCall;
use crate::message::AppMessage;
use crate::model::App;

/// 处理一条消息，返回需要执行的 API 调用
pub fn update(app: &mut App, msg: AppMessage) -> Option<ApiCall> {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
            None
        }

        AppMessage::Tick => {
            app.tick();
            None
        }

        AppMessage::Op(op) => ops::update(app, op),
        AppMessage::Modal(m) => modal::update(app, m),
        AppMessage::Backend(event) => backend::update(app, event),

        // ========== 列表导航 ==========
        AppMessage::SelectPrevious => {
            app.stacks.select_previous();
            None
        }
        AppMessage::SelectNext => {
            app.stacks.select_next();
            None
        }
        AppMessage::SelectFirst => {
            app.stacks.select_first();
            None
        }
        AppMessage::SelectLast => {
            app.stacks.select_last();
            None
        }

        // ========== ID 输入框 ==========
        AppMessage::EnterIdInput => {
            app.stacks.input.active = true;
            None
        }
        AppMessage::LeaveIdInput => {
            app.stacks.input.active = false;
            None
        }
        AppMessage::InputChar(c) => {
            if app.stacks.input.active {
                app.stacks.input.push(c);
            }
            None
        }
        AppMessage::InputBackspace => {
            if app.stacks.input.active {
                app.stacks.input.backspace();
            }
            None
        }
        AppMessage::Dismiss => {
            app.stacks.input.clear();
            app.status.clear();
            None
        }

        AppMessage::Noop => None,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use stackdeck_client::{
        ClientError, CreatedStack, DesiredState, ServiceStatus, Stack, StackId,
    };

    use super::*;
    use crate::config::TuiConfig;
    use crate::message::{BackendEvent, ModalMessage, OpMessage};
    use crate::model::{Modal, StackAction, StatusKind};

    fn id(n: u32) -> StackId {
        StackId::try_from(n).unwrap()
    }

    fn stack(n: u32, primary_status: &str) -> Stack {
        let mut services = BTreeMap::new();
        services.insert(
            "minecraft_server".to_string(),
            ServiceStatus {
                status: primary_status.to_string(),
                port: (primary_status == "running").then_some(25565),
            },
        );
        Stack {
            stack_id: id(n),
            wan_ip: None,
            services,
        }
    }

    fn app_with(stacks: Vec<Stack>) -> App {
        let mut app = App::new(&TuiConfig::default());
        app.stacks.set_stacks(stacks);
        app
    }

    // ========== 校验 ==========

    #[test]
    fn test_invalid_ids_issue_no_request() {
        for input in ["abc", "0", "-3", "1.5"] {
            let mut app = app_with(vec![stack(1, "running")]);
            app.stacks.input.buffer = input.to_string();

            let call = update(&mut app, AppMessage::Op(OpMessage::Start));

            assert!(call.is_none(), "input {input:?} must not issue a request");
            assert!(!app.stacks.is_row_busy(id(1)));
            assert_eq!(app.status.current().unwrap().kind, StatusKind::Error);
        }
    }

    #[test]
    fn test_no_target_issues_no_request() {
        // 输入框为空且列表为空：没有可用目标
        let mut app = app_with(vec![]);
        let call = update(&mut app, AppMessage::Op(OpMessage::Stop));
        assert!(call.is_none());
        assert_eq!(app.status.current().unwrap().kind, StatusKind::Error);
    }

    #[test]
    fn test_valid_id_issues_exactly_one_request() {
        let mut app = app_with(vec![stack(3, "stopped")]);
        app.stacks.input.buffer = "3".to_string();

        let call = update(&mut app, AppMessage::Op(OpMessage::Start));

        assert_eq!(
            call,
            Some(ApiCall::SetStatus {
                id: id(3),
                target: DesiredState::Running,
            })
        );
        assert!(app.stacks.is_row_busy(id(3)));
    }

    #[test]
    fn test_selection_supplies_target_when_input_empty() {
        let mut app = app_with(vec![stack(4, "running"), stack(5, "running")]);
        update(&mut app, AppMessage::SelectNext);

        let call = update(&mut app, AppMessage::Op(OpMessage::Stop));

        assert_eq!(
            call,
            Some(ApiCall::SetStatus {
                id: id(5),
                target: DesiredState::Stopped,
            })
        );
    }

    // ========== 忙碌重入保护 ==========

    #[test]
    fn test_busy_row_ignores_further_ops() {
        let mut app = app_with(vec![stack(2, "stopped")]);
        assert!(update(&mut app, AppMessage::Op(OpMessage::Start)).is_some());

        // 同一行仍在途：后续调用全部静默忽略
        assert!(update(&mut app, AppMessage::Op(OpMessage::Start)).is_none());
        assert!(update(&mut app, AppMessage::Op(OpMessage::Stop)).is_none());
        assert!(update(&mut app, AppMessage::Op(OpMessage::Delete)).is_none());
        assert!(!app.modal.is_open());
    }

    #[test]
    fn test_busy_create_ignores_further_creates() {
        let mut app = app_with(vec![]);
        assert_eq!(
            update(&mut app, AppMessage::Op(OpMessage::Create)),
            Some(ApiCall::Create)
        );
        assert!(update(&mut app, AppMessage::Op(OpMessage::Create)).is_none());
    }

    #[test]
    fn test_busy_refresh_ignores_further_refreshes() {
        let mut app = app_with(vec![]);
        assert_eq!(
            update(&mut app, AppMessage::Op(OpMessage::Refresh)),
            Some(ApiCall::List)
        );
        assert!(update(&mut app, AppMessage::Op(OpMessage::Refresh)).is_none());

        // 手动刷新被忽略而非排队：在途响应到达后不追加请求
        let call = update(
            &mut app,
            AppMessage::Backend(BackendEvent::ListDone(Ok(vec![]))),
        );
        assert!(call.is_none());
    }

    // ========== 忙碌标记的无条件释放 ==========

    #[test]
    fn test_busy_released_on_every_completion_path() {
        let results: Vec<Result<(), ClientError>> = vec![
            Ok(()),
            Err(ClientError::Api {
                status: 404,
                message: "not found".to_string(),
            }),
            Err(ClientError::Network {
                detail: "connection refused".to_string(),
            }),
        ];

        for result in results {
            let mut app = app_with(vec![stack(6, "stopped")]);
            update(&mut app, AppMessage::Op(OpMessage::Start));
            assert!(app.stacks.is_row_busy(id(6)));

            update(
                &mut app,
                AppMessage::Backend(BackendEvent::StatusDone {
                    id: id(6),
                    target: DesiredState::Running,
                    result,
                }),
            );

            assert!(!app.stacks.is_row_busy(id(6)), "busy flag must be released");
        }
    }

    // ========== 删除确认 ==========

    #[test]
    fn test_delete_requires_confirmation() {
        let mut app = app_with(vec![stack(7, "running")]);
        app.stacks.input.buffer = "7".to_string();

        let call = update(&mut app, AppMessage::Op(OpMessage::Delete));

        assert!(call.is_none(), "no request before confirmation");
        assert_eq!(app.modal.active, Some(Modal::ConfirmDelete { id: id(7) }));
    }

    #[test]
    fn test_declined_delete_sends_nothing() {
        let mut app = app_with(vec![stack(7, "running")]);
        app.stacks.input.buffer = "7".to_string();
        update(&mut app, AppMessage::Op(OpMessage::Delete));

        let call = update(&mut app, AppMessage::Modal(ModalMessage::Cancel));

        assert!(call.is_none());
        assert!(!app.modal.is_open());
        assert!(!app.stacks.is_row_busy(id(7)));
        // 静默放弃：不显示任何状态消息
        assert!(app.status.current().is_none());
    }

    #[test]
    fn test_confirmed_delete_issues_request() {
        let mut app = app_with(vec![stack(7, "running")]);
        update(&mut app, AppMessage::Op(OpMessage::Delete));

        let call = update(&mut app, AppMessage::Modal(ModalMessage::Confirm));

        assert_eq!(call, Some(ApiCall::Delete { id: id(7) }));
        assert_eq!(
            app.stacks.rows[0].busy,
            Some(StackAction::Delete),
            "row holds the busy flag while the delete is in flight"
        );
    }

    // ========== 完成事件与刷新策略 ==========

    #[test]
    fn test_create_success_reports_id_and_refreshes() {
        let mut app = app_with(vec![]);
        update(&mut app, AppMessage::Op(OpMessage::Create));

        let call = update(
            &mut app,
            AppMessage::Backend(BackendEvent::CreateDone(Ok(CreatedStack {
                stack_id: id(42),
                message: Some("created".to_string()),
            }))),
        );

        assert!(!app.stacks.create_busy);
        let msg = app.status.current().unwrap();
        assert_eq!(msg.kind, StatusKind::Success);
        assert!(msg.text.contains("42"), "message references the new id");
        assert_eq!(call, Some(ApiCall::List), "mutation success triggers refresh");
        assert!(app.stacks.list_busy);
    }

    #[test]
    fn test_failed_start_shows_server_message_without_refresh() {
        let mut app = app_with(vec![stack(3, "stopped")]);
        update(&mut app, AppMessage::Op(OpMessage::Start));

        let call = update(
            &mut app,
            AppMessage::Backend(BackendEvent::StatusDone {
                id: id(3),
                target: DesiredState::Running,
                result: Err(ClientError::Api {
                    status: 404,
                    message: "not found".to_string(),
                }),
            }),
        );

        let msg = app.status.current().unwrap();
        assert_eq!(msg.kind, StatusKind::Error);
        assert_eq!(msg.text, "not found");
        assert!(!app.stacks.is_row_busy(id(3)));
        assert!(call.is_none(), "failed mutation does not refresh");
    }

    #[test]
    fn test_transport_failure_shows_generic_message() {
        let mut app = app_with(vec![]);
        update(&mut app, AppMessage::Op(OpMessage::Create));

        update(
            &mut app,
            AppMessage::Backend(BackendEvent::CreateDone(Err(ClientError::Network {
                detail: "dns failure".to_string(),
            }))),
        );

        let msg = app.status.current().unwrap();
        assert_eq!(msg.kind, StatusKind::Error);
        assert_eq!(msg.text, stackdeck_client::GENERIC_REQUEST_ERROR);
        assert!(!msg.text.contains("dns failure"), "detail stays out of the UI");
    }

    #[test]
    fn test_list_success_replaces_rows_without_refresh_loop() {
        let mut app = app_with(vec![]);
        update(&mut app, AppMessage::Op(OpMessage::Refresh));

        let call = update(
            &mut app,
            AppMessage::Backend(BackendEvent::ListDone(Ok(vec![
                stack(1, "running"),
                stack(2, "stopped"),
            ]))),
        );

        assert!(call.is_none(), "GET never triggers another refresh");
        assert!(!app.stacks.list_busy);
        assert_eq!(app.stacks.rows.len(), 2);
    }

    #[test]
    fn test_mutation_during_inflight_list_queues_one_refresh() {
        let mut app = app_with(vec![stack(1, "stopped")]);
        update(&mut app, AppMessage::Op(OpMessage::Refresh));
        update(&mut app, AppMessage::Op(OpMessage::Start));

        // 变更先于在途列表完成：刷新排队，不并发第二个请求
        let call = update(
            &mut app,
            AppMessage::Backend(BackendEvent::StatusDone {
                id: id(1),
                target: DesiredState::Running,
                result: Ok(()),
            }),
        );
        assert!(call.is_none());
        assert!(app.stacks.refresh_queued);

        // 在途响应到达：排队的刷新恰好发出一次
        let call = update(
            &mut app,
            AppMessage::Backend(BackendEvent::ListDone(Ok(vec![stack(1, "stopped")]))),
        );
        assert_eq!(call, Some(ApiCall::List));
        assert!(app.stacks.list_busy);

        // 补发的刷新完成后不再追加
        let call = update(
            &mut app,
            AppMessage::Backend(BackendEvent::ListDone(Ok(vec![stack(1, "running")]))),
        );
        assert!(call.is_none());
        assert!(!app.stacks.refresh_queued);
    }

    #[test]
    fn test_delete_success_refreshes() {
        let mut app = app_with(vec![stack(7, "running")]);
        update(&mut app, AppMessage::Op(OpMessage::Delete));
        update(&mut app, AppMessage::Modal(ModalMessage::Confirm));

        let call = update(
            &mut app,
            AppMessage::Backend(BackendEvent::DeleteDone {
                id: id(7),
                result: Ok(()),
            }),
        );

        assert_eq!(call, Some(ApiCall::List));
        let msg = app.status.current().unwrap();
        assert_eq!(msg.kind, StatusKind::Success);
        assert!(msg.text.contains('7'));
    }

    #[test]
    fn test_completion_for_vanished_row_is_tolerated() {
        // 行在请求在途时被另一次刷新移除：完成事件仍然被正常消化
        let mut app = app_with(vec![]);
        update(
            &mut app,
            AppMessage::Backend(BackendEvent::StatusDone {
                id: id(9),
                target: DesiredState::Stopped,
                result: Ok(()),
            }),
        );
        assert_eq!(app.status.current().unwrap().kind, StatusKind::Success);
    }

    // ========== 输入框 ==========

    #[test]
    fn test_input_editing_only_while_active() {
        let mut app = app_with(vec![]);
        update(&mut app, AppMessage::InputChar('5'));
        assert!(app.stacks.input.buffer.is_empty());

        update(&mut app, AppMessage::EnterIdInput);
        update(&mut app, AppMessage::InputChar('5'));
        update(&mut app, AppMessage::InputChar('1'));
        update(&mut app, AppMessage::InputBackspace);
        assert_eq!(app.stacks.input.buffer, "5");

        update(&mut app, AppMessage::LeaveIdInput);
        assert!(!app.stacks.input.active);
        assert_eq!(app.stacks.input.buffer, "5", "buffer survives leaving the mode");
    }
}
