//! Message 层：事件消息定义
//!
//! Event 层把原始输入翻译成 Message，Update 层消费 Message 修改 Model。
//! Backend 层的异步完成结果同样以消息（[`BackendEvent`]）回流主循环，
//! 因此 Update 是唯一修改状态的地方。

mod app;
mod backend;
mod modal;
mod ops;

pub use app::AppMessage;
pub use backend::BackendEvent;
pub use modal::ModalMessage;
pub use ops::OpMessage;
