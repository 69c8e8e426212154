//! Backend 完成事件
//!
//! 每个在途请求结束时恰好产生一条事件，无论成功、服务端错误还是
//! 传输失败。Update 层据此无条件释放对应的忙碌标记。

use stackdeck_client::{ClientError, CreatedStack, DesiredState, Stack, StackId};

/// Backend 异步调用的完成结果
#[derive(Debug, Clone)]
pub enum BackendEvent {
    /// 创建请求完成
    CreateDone(Result<CreatedStack, ClientError>),

    /// 列表请求完成
    ListDone(Result<Vec<Stack>, ClientError>),

    /// 状态更新（启动/停止）请求完成
    StatusDone {
        id: StackId,
        target: DesiredState,
        result: Result<(), ClientError>,
    },

    /// 删除请求完成
    DeleteDone {
        id: StackId,
        result: Result<(), ClientError>,
    },
}
