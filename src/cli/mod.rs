//! Command-line workflows, independent of argument parsing

pub mod orchestration;

pub use orchestration::{
    run_compare_workflow, run_sort_workflow, run_validate_workflow, SortOutcome, SortWorkflowArgs,
};
