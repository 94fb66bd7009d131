mod quiz_vm;
mod toast_vm;

pub use quiz_vm::{LoadStatus, QuestionVm, QuizIntent, QuizScreen};
pub use toast_vm::ToastVm;
