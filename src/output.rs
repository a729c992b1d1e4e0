//! Shared output formatting for todo CLI commands.

use crate::error::Error;
use crate::task::Task;

const DIVIDER: &str = "-------------------------";

/// Render a task list under a header line.
///
/// An empty list renders the header alone; callers print the result with a
/// single trailing newline.
pub fn format_task_list<'a, I>(header: &str, tasks: I) -> String
where
    I: IntoIterator<Item = &'a Task>,
{
    let mut lines = vec![header.to_string()];
    for task in tasks {
        lines.push(format!("Task {}:", task.id));
        lines.push(format!("Title: {}", task.title));
        lines.push(format!("Assignee: {}", task.assignee));
        lines.push(format!("Done: {}", task.done));
        lines.push(DIVIDER.to_string());
    }
    lines.join("\n")
}

/// Report a fatal error on stderr.
pub fn emit_error(err: &Error) {
    eprintln!("error: {err}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_list_renders_only_the_header() {
        assert_eq!(format_task_list("All tasks:", []), "All tasks:");
    }

    #[test]
    fn tasks_render_as_labeled_blocks() {
        let task = Task::new(1, "Buy milk", "Unknown");
        let rendered = format_task_list("All tasks:", [&task]);
        assert_eq!(
            rendered,
            "All tasks:\n\
             Task 1:\n\
             Title: Buy milk\n\
             Assignee: Unknown\n\
             Done: false\n\
             -------------------------"
        );
    }

    #[test]
    fn blocks_repeat_per_task_in_order() {
        let mut done = Task::new(2, "Ship it", "alice");
        done.done = true;
        let first = Task::new(1, "Plan", "alice");
        let rendered = format_task_list("Done tasks:", [&first, &done]);
        assert_eq!(rendered.matches("Task ").count(), 2);
        assert!(rendered.contains("Done: true"));
        let first_pos = rendered.find("Task 1:").unwrap();
        let second_pos = rendered.find("Task 2:").unwrap();
        assert!(first_pos < second_pos);
    }
}
