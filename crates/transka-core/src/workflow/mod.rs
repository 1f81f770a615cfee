mod command;
mod driver;
mod machine;
mod state;
mod ui_handle;

pub use {
    command::WorkflowCommand,
    driver::WorkflowDriver,
    machine::Workflow,
    state::{WorkflowSnapshot, WorkflowState},
    ui_handle::UiHandle,
};
